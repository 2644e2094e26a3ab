//! Task draft kept by the creation form, and the payload it submits.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::author::AuthorIdentity;
use crate::error::CoreError;
use crate::types::Deadline;

/// Shown under the name field and returned by validation.
pub const NAME_REQUIRED_MESSAGE: &str = "This name should have at least one character.";

/// Reject names that are empty or consist only of whitespace.
pub fn validate_task_name(name: &str) -> Result<(), CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation(NAME_REQUIRED_MESSAGE.to_string()));
    }
    Ok(())
}

fn validate_name_field(name: &str) -> Result<(), ValidationError> {
    validate_task_name(name)
        .map_err(|_| ValidationError::new("name").with_message(Cow::Borrowed(NAME_REQUIRED_MESSAGE)))
}

/// Local state of the task creation form.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct TaskDraft {
    #[validate(custom(function = "validate_name_field"))]
    pub name: String,
    pub description: String,
    pub deadline: Deadline,
}

impl TaskDraft {
    /// Empty draft whose deadline defaults to `today`.
    pub fn new(today: Deadline) -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            deadline: today,
        }
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub fn set_deadline(&mut self, deadline: Deadline) {
        self.deadline = deadline;
    }

    /// Whether the draft may be submitted.
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Validation message for the name field, if any.
    pub fn name_error(&self) -> Option<&'static str> {
        validate_task_name(&self.name)
            .err()
            .map(|_| NAME_REQUIRED_MESSAGE)
    }

    /// Merge the session author into the create payload.
    ///
    /// An empty description is sent as absent.
    pub fn into_new_task(self, author: &AuthorIdentity) -> NewTask {
        let description = if self.description.trim().is_empty() {
            None
        } else {
            Some(self.description)
        };
        NewTask {
            name: self.name,
            description,
            deadline: self.deadline,
            author: author.clone(),
        }
    }
}

/// Task fields sent by the creation form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTask {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub deadline: Deadline,
    #[serde(flatten)]
    pub author: AuthorIdentity,
}
