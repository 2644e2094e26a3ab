//! Repository for the `messages` table.

use sqlx::PgPool;
use taskboard_core::models::Message;
use taskboard_core::types::DbId;

use crate::models::message::{CreateMessage, MessageRow};

const COLUMNS: &str =
    "id, task_id, text, author_id, author_name, author_avatar, created_at, updated_at";

/// Provides create and read operations for task messages.
pub struct MessageRepo;

impl MessageRepo {
    /// Insert a new message, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateMessage) -> Result<Message, sqlx::Error> {
        let query = format!(
            "INSERT INTO messages (task_id, text, author_id, author_name, author_avatar)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, MessageRow>(&query)
            .bind(input.task_id)
            .bind(&input.text)
            .bind(&input.author.author_id)
            .bind(&input.author.author_name)
            .bind(&input.author.author_avatar)
            .fetch_one(pool)
            .await?;
        Ok(row.into())
    }

    /// List a task's messages, oldest first.
    pub async fn list_by_task(pool: &PgPool, task_id: DbId) -> Result<Vec<Message>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM messages WHERE task_id = $1 ORDER BY created_at ASC, id ASC"
        );
        let rows = sqlx::query_as::<_, MessageRow>(&query)
            .bind(task_id)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(Message::from).collect())
    }
}
