//! Task list controller.
//!
//! Local state changes only after the server confirmed the matching
//! request.

use taskboard_core::board::TaskBoard;
use taskboard_core::list::TaskListState;
use taskboard_core::types::{DbId, Deadline};
use taskboard_core::models::{Task, UpdateTask};

use crate::api::{ApiClient, ClientError};

#[derive(Debug, Clone, Default)]
pub struct TaskList {
    state: TaskListState<Task>,
    error: Option<String>,
}

impl TaskList {
    pub fn new(tasks: Vec<Task>) -> Self {
        Self {
            state: TaskListState::new(tasks),
            error: None,
        }
    }

    /// Fetch the project's tasks, replacing the current entries.
    pub async fn load(api: &ApiClient, project_id: DbId) -> Result<Self, ClientError> {
        let tasks = api.list_project_tasks(project_id).await?;
        Ok(Self::new(tasks))
    }

    pub fn tasks(&self) -> &[Task] {
        self.state.tasks()
    }

    pub fn len(&self) -> usize {
        self.state.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    /// Raw message of the last failed request.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Delete a task on the server, then drop the entry the server reports
    /// as deleted. On failure the list is left as is.
    pub async fn delete_task(&mut self, api: &ApiClient, id: DbId) -> Result<(), ClientError> {
        match api.delete_task(id).await {
            Ok(deleted) => {
                self.state.remove(deleted.id);
                self.error = None;
                Ok(())
            }
            Err(e) => {
                self.error = Some(e.to_string());
                Err(e)
            }
        }
    }

    pub async fn update_task(
        &mut self,
        api: &ApiClient,
        id: DbId,
        update: &UpdateTask,
    ) -> Result<(), ClientError> {
        match api.update_task(id, update).await {
            Ok(updated) => {
                self.state.upsert(updated);
                self.error = None;
                Ok(())
            }
            Err(e) => {
                self.error = Some(e.to_string());
                Err(e)
            }
        }
    }

    pub fn board(&self, today: Deadline) -> TaskBoard {
        self.state.board(today)
    }
}
