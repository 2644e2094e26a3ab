use serde::{Deserialize, Serialize};

use crate::models::task::Task;
use crate::types::{DbId, Timestamp};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: DbId,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Fields accepted by project creation. Every field may be omitted.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CreateProject {
    #[serde(default)]
    pub name: String,
}

/// A project together with the tasks it owns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectWithTasks {
    #[serde(flatten)]
    pub project: Project,
    pub tasks: Vec<Task>,
}
