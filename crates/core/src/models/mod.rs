//! Wire models shared by the server and its clients.
//!
//! These are the JSON shapes the API sends and accepts. The database crate
//! maps its rows into them; nothing here knows about SQL.

pub mod message;
pub mod project;
pub mod task;

pub use message::{Message, NewMessage};
pub use project::{CreateProject, Project, ProjectWithTasks};
pub use task::{Task, UpdateTask};
