//! Task creation form controller.

use taskboard_core::author::AuthorIdentity;
use taskboard_core::draft::TaskDraft;
use taskboard_core::types::{DbId, Deadline};

use crate::api::ApiClient;

/// Result of pressing the submit button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormOutcome {
    /// The draft failed validation; nothing was sent.
    Invalid,
    /// The task was created; go to this path.
    Navigate(String),
    /// The server or the network rejected the request. See [`TaskForm::error`].
    Failed,
}

#[derive(Debug, Clone)]
pub struct TaskForm {
    pub draft: TaskDraft,
    project_id: DbId,
    author: AuthorIdentity,
    error: Option<String>,
}

impl TaskForm {
    pub fn new(project_id: DbId, author: AuthorIdentity, today: Deadline) -> Self {
        Self {
            draft: TaskDraft::new(today),
            project_id,
            author,
            error: None,
        }
    }

    pub fn project_id(&self) -> DbId {
        self.project_id
    }

    /// Alert text from the last failed submission.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Validation hint displayed under the name input.
    pub fn name_error(&self) -> Option<&'static str> {
        self.draft.name_error()
    }

    /// Path of the project's task list, where a successful submit leads.
    pub fn tasks_path(&self) -> String {
        format!("/projects/{}/tasks", self.project_id)
    }

    pub async fn submit(&mut self, api: &ApiClient) -> FormOutcome {
        if !self.draft.is_valid() {
            return FormOutcome::Invalid;
        }

        let task = self.draft.clone().into_new_task(&self.author);
        match api.create_task(self.project_id, &task).await {
            Ok(created) => {
                tracing::info!(task_id = created.id, project_id = self.project_id, "Task submitted");
                self.error = None;
                FormOutcome::Navigate(self.tasks_path())
            }
            Err(e) => {
                tracing::error!(project_id = self.project_id, error = %e, "Task submission failed");
                self.error = Some(e.to_string());
                FormOutcome::Failed
            }
        }
    }
}
