//! Response envelopes for task and message endpoints.
//!
//! Mutating endpoints echo the affected row under a named key
//! (`{ "task": ... }`, `{ "deletedTask": ... }`) so the client can update
//! its local list from the server's copy.

use serde::Serialize;
use taskboard_core::models::{Message, Project, Task};

/// Confirmation text returned by project creation.
pub const PROJECT_CREATED: &str = "Project was created";

#[derive(Debug, Serialize)]
pub struct CreatedTask {
    pub task: Task,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatedTask {
    pub updated_task: Task,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletedTask {
    pub deleted_task: Task,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletedProject {
    pub deleted_project: Project,
}

#[derive(Debug, Serialize)]
pub struct CreatedMessage {
    pub message: Message,
}
