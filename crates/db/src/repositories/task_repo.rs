//! Repository for the `tasks` table.

use sqlx::PgPool;
use taskboard_core::models::{Task, UpdateTask};
use taskboard_core::types::DbId;

use crate::models::task::{CreateTask, TaskRow};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, project_id, name, description, deadline, status_id, \
    author_id, author_name, author_avatar, created_at, updated_at";

/// Provides CRUD operations for tasks.
pub struct TaskRepo;

impl TaskRepo {
    /// Insert a new task, returning the created row.
    ///
    /// If `status` is `None` in the input, defaults to 1 (`IN_PROGRESS`).
    /// Fails with a foreign-key violation when the project does not exist.
    pub async fn create(pool: &PgPool, input: &CreateTask) -> Result<Task, sqlx::Error> {
        let query = format!(
            "INSERT INTO tasks
                (project_id, name, description, deadline, status_id,
                 author_id, author_name, author_avatar)
             VALUES ($1, $2, $3, $4, COALESCE($5, 1), $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, TaskRow>(&query)
            .bind(input.project_id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.deadline)
            .bind(input.status.map(|s| s.id()))
            .bind(&input.author.author_id)
            .bind(&input.author.author_name)
            .bind(&input.author.author_avatar)
            .fetch_one(pool)
            .await?;
        Ok(row.into())
    }

    /// Find a task by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Task>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tasks WHERE id = $1");
        let row = sqlx::query_as::<_, TaskRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(Task::from))
    }

    /// List the tasks of a project in creation order.
    pub async fn list_by_project(pool: &PgPool, project_id: DbId) -> Result<Vec<Task>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM tasks WHERE project_id = $1 ORDER BY created_at ASC, id ASC"
        );
        let rows = sqlx::query_as::<_, TaskRow>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(Task::from).collect())
    }

    /// Update a task. Only fields present in `input` are applied; a
    /// description of `Some(None)` clears it.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTask,
    ) -> Result<Option<Task>, sqlx::Error> {
        let query = format!(
            "UPDATE tasks SET
                name = COALESCE($2, name),
                description = CASE WHEN $3 THEN $4 ELSE description END,
                deadline = COALESCE($5, deadline),
                status_id = COALESCE($6, status_id)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let description = input.description.as_ref().and_then(|d| d.as_deref());
        let row = sqlx::query_as::<_, TaskRow>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.description.is_some())
            .bind(description)
            .bind(input.deadline)
            .bind(input.status.map(|s| s.id()))
            .fetch_optional(pool)
            .await?;
        Ok(row.map(Task::from))
    }

    /// Delete a task and its messages. Returns the deleted row, if any.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<Task>, sqlx::Error> {
        let query = format!("DELETE FROM tasks WHERE id = $1 RETURNING {COLUMNS}");
        let row = sqlx::query_as::<_, TaskRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(Task::from))
    }
}
