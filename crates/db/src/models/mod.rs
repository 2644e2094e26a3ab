//! Row types and insert DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` struct matching the table, converted into the shared wire
//!   model from `taskboard_core::models`
//! - A create DTO for inserts, where the insert carries more than the wire payload

pub mod message;
pub mod project;
pub mod task;
