//! Client side of the taskboard: a typed HTTP client for the API and the
//! controllers behind the task form, the task list and a task's message
//! thread.

pub mod api;
pub mod form;
pub mod list;
pub mod thread;

pub use api::{ApiClient, ClientError};
