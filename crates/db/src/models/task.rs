//! Task row and insert DTO.

use sqlx::FromRow;
use taskboard_core::author::AuthorIdentity;
use taskboard_core::draft::NewTask;
use taskboard_core::models::Task;
use taskboard_core::status::TaskStatus;
use taskboard_core::types::{DbId, Deadline, Timestamp};

/// A row from the `tasks` table. `status_id` is decoded through the
/// `task_statuses` ids.
#[derive(Debug, FromRow)]
pub struct TaskRow {
    pub id: DbId,
    pub project_id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub deadline: Deadline,
    #[sqlx(rename = "status_id", try_from = "i16")]
    pub status: TaskStatus,
    pub author_id: String,
    pub author_name: String,
    pub author_avatar: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<TaskRow> for Task {
    fn from(row: TaskRow) -> Self {
        Task {
            id: row.id,
            project_id: row.project_id,
            name: row.name,
            description: row.description,
            deadline: row.deadline,
            status: row.status,
            author_id: row.author_id,
            author_name: row.author_name,
            author_avatar: row.author_avatar,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// DTO for inserting a task under a project.
#[derive(Debug, Clone)]
pub struct CreateTask {
    pub project_id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub deadline: Deadline,
    /// Defaults to `IN_PROGRESS` if omitted.
    pub status: Option<TaskStatus>,
    pub author: AuthorIdentity,
}

impl CreateTask {
    /// Attach a submitted task to its parent project.
    pub fn from_new(project_id: DbId, task: NewTask) -> Self {
        Self {
            project_id,
            name: task.name,
            description: task.description,
            deadline: task.deadline,
            status: None,
            author: task.author,
        }
    }
}
