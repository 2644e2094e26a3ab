//! REST client for the taskboard API.
//!
//! Wraps every `/api` endpoint using [`reqwest`]. Responses are decoded
//! into the same models the server serializes.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use taskboard_core::board::TaskBoard;
use taskboard_core::draft::NewTask;
use taskboard_core::models::{
    CreateProject, Message, NewMessage, Project, ProjectWithTasks, Task, UpdateTask,
};
use taskboard_core::types::DbId;

/// HTTP client for a single taskboard server.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

/// Errors from the API client layer.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The HTTP request itself failed (network, DNS, TLS, decoding).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with a non-2xx status code.
    #[error("API error ({status}): {body}")]
    Api {
        status: u16,
        /// Raw response body.
        body: String,
    },
}

#[derive(Deserialize)]
struct TaskEnvelope {
    task: Task,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UpdatedTaskEnvelope {
    updated_task: Task,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct DeletedTaskEnvelope {
    deleted_task: Task,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct DeletedProjectEnvelope {
    deleted_project: Project,
}

#[derive(Deserialize)]
struct MessageEnvelope {
    message: Message,
}

impl ApiClient {
    /// * `base_url` - Server root without the `/api` suffix, e.g.
    ///   `http://localhost:3000`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Reuse an existing [`reqwest::Client`] and its connection pool.
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ---- projects ----

    /// `POST /api/projects/create`. Returns the server's confirmation text.
    pub async fn create_project(&self, input: &CreateProject) -> Result<String, ClientError> {
        let response = self
            .client
            .post(self.url("/projects/create"))
            .json(input)
            .send()
            .await?;
        Self::parse_response(response).await
    }

    pub async fn list_projects(&self) -> Result<Vec<Project>, ClientError> {
        self.get_json("/projects").await
    }

    pub async fn get_project(&self, id: DbId) -> Result<ProjectWithTasks, ClientError> {
        self.get_json(&format!("/projects/{id}")).await
    }

    pub async fn delete_project(&self, id: DbId) -> Result<Project, ClientError> {
        let response = self
            .client
            .delete(self.url(&format!("/projects/delete/{id}")))
            .send()
            .await?;
        let envelope: DeletedProjectEnvelope = Self::parse_response(response).await?;
        Ok(envelope.deleted_project)
    }

    pub async fn list_project_tasks(&self, project_id: DbId) -> Result<Vec<Task>, ClientError> {
        self.get_json(&format!("/projects/{project_id}/tasks")).await
    }

    /// Board rendered by the server for its current date.
    pub async fn project_board(&self, project_id: DbId) -> Result<TaskBoard, ClientError> {
        self.get_json(&format!("/projects/{project_id}/board")).await
    }

    // ---- tasks ----

    /// `POST /api/tasks/create` with `{task, id}`.
    pub async fn create_task(&self, project_id: DbId, task: &NewTask) -> Result<Task, ClientError> {
        let body = serde_json::json!({
            "task": task,
            "id": project_id,
        });
        let response = self
            .client
            .post(self.url("/tasks/create"))
            .json(&body)
            .send()
            .await?;
        let envelope: TaskEnvelope = Self::parse_response(response).await?;
        Ok(envelope.task)
    }

    pub async fn get_task(&self, id: DbId) -> Result<Task, ClientError> {
        self.get_json(&format!("/tasks/{id}")).await
    }

    pub async fn update_task(&self, id: DbId, update: &UpdateTask) -> Result<Task, ClientError> {
        let response = self
            .client
            .put(self.url(&format!("/tasks/update/{id}")))
            .json(update)
            .send()
            .await?;
        let envelope: UpdatedTaskEnvelope = Self::parse_response(response).await?;
        Ok(envelope.updated_task)
    }

    /// `DELETE /api/tasks/delete/{id}`. Returns the task the server removed.
    pub async fn delete_task(&self, id: DbId) -> Result<Task, ClientError> {
        let response = self
            .client
            .delete(self.url(&format!("/tasks/delete/{id}")))
            .send()
            .await?;
        let envelope: DeletedTaskEnvelope = Self::parse_response(response).await?;
        Ok(envelope.deleted_task)
    }

    // ---- messages ----

    pub async fn create_message(
        &self,
        task_id: DbId,
        message: &NewMessage,
    ) -> Result<Message, ClientError> {
        let body = serde_json::json!({
            "message": message,
            "id": task_id,
        });
        let response = self
            .client
            .post(self.url("/messages/create"))
            .json(&body)
            .send()
            .await?;
        let envelope: MessageEnvelope = Self::parse_response(response).await?;
        Ok(envelope.message)
    }

    pub async fn list_messages(&self, task_id: DbId) -> Result<Vec<Message>, ClientError> {
        self.get_json(&format!("/tasks/{task_id}/messages")).await
    }

    // ---- private helpers ----

    fn url(&self, path: &str) -> String {
        format!("{}/api{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let response = self.client.get(self.url(path)).send().await?;
        Self::parse_response(response).await
    }

    /// Returns the response unchanged on success, or a
    /// [`ClientError::Api`] carrying the status and body text.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            tracing::warn!(status = status.as_u16(), %body, "API request failed");
            return Err(ClientError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    async fn parse_response<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }
}
