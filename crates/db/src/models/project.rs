//! Project row.

use sqlx::FromRow;
use taskboard_core::models::Project;
use taskboard_core::types::{DbId, Timestamp};

/// A row from the `projects` table.
#[derive(Debug, FromRow)]
pub struct ProjectRow {
    pub id: DbId,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<ProjectRow> for Project {
    fn from(row: ProjectRow) -> Self {
        Project {
            id: row.id,
            name: row.name,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}
