//! Task status.
//!
//! Each variant's discriminant matches the seed order (1-based) of the
//! `task_statuses` lookup table. On the wire the status travels as its
//! upper-case name (`"IN_PROGRESS"`, `"COMPLETED"`).

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Status ID type matching SMALLINT/SMALLSERIAL in the database.
pub type StatusId = i16;

/// Lifecycle status of a task. Closed two-value enumeration.
#[repr(i16)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    #[default]
    InProgress = 1,
    Completed = 2,
}

impl TaskStatus {
    /// Return the database status ID.
    pub fn id(self) -> StatusId {
        self as StatusId
    }

    /// Upper-case wire name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::InProgress => "IN_PROGRESS",
            Self::Completed => "COMPLETED",
        }
    }
}

impl From<TaskStatus> for StatusId {
    fn from(value: TaskStatus) -> Self {
        value as StatusId
    }
}

impl TryFrom<StatusId> for TaskStatus {
    type Error = CoreError;

    fn try_from(value: StatusId) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::InProgress),
            2 => Ok(Self::Completed),
            other => Err(CoreError::Validation(format!(
                "Unknown task status id {other}"
            ))),
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
