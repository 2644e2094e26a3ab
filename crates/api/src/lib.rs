//! Taskboard HTTP server.
//!
//! [`app::build`] assembles the full router; `main.rs` only loads config,
//! prepares the database and serves it.

pub mod app;
pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod response;
pub mod routes;
pub mod state;
