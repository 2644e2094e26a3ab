//! Task payloads: the stored task and the partial edit.

use serde::{Deserialize, Deserializer, Serialize};

use crate::board::BoardTask;
use crate::status::TaskStatus;
use crate::types::{DbId, Deadline, Timestamp};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: DbId,
    pub project_id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub deadline: Deadline,
    pub status: TaskStatus,
    pub author_id: String,
    pub author_name: String,
    pub author_avatar: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl BoardTask for Task {
    fn id(&self) -> DbId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    fn status(&self) -> TaskStatus {
        self.status
    }

    fn deadline(&self) -> Deadline {
        self.deadline
    }

    fn author_name(&self) -> &str {
        &self.author_name
    }

    fn author_avatar(&self) -> Option<&str> {
        self.author_avatar.as_deref()
    }
}

/// Partial edit of a task. Omitted fields keep their stored value.
///
/// `description` distinguishes an omitted key (`None`, keep) from an
/// explicit `null` (`Some(None)`, clear).
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTask {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(
        default,
        deserialize_with = "present_or_null",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<Deadline>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
}

impl UpdateTask {
    /// Edit that removes the description.
    pub fn clear_description() -> Self {
        Self {
            description: Some(None),
            ..Default::default()
        }
    }
}

/// Only called when the key is present, so `null` becomes `Some(None)`.
fn present_or_null<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
