//! Domain logic for the task board.
//!
//! Holds everything that does not touch the network or the database:
//! identifiers, the error taxonomy, task status, deadline arithmetic,
//! task-name validation, the task draft, and the view models the board
//! renders, plus the wire models the API exchanges. The `db`, `api` and
//! `client` crates all build on it.

pub mod author;
pub mod board;
pub mod deadline;
pub mod draft;
pub mod error;
pub mod list;
pub mod message;
pub mod models;
pub mod status;
pub mod types;
