//! Message row and insert DTO.

use sqlx::FromRow;
use taskboard_core::author::AuthorIdentity;
use taskboard_core::models::{Message, NewMessage};
use taskboard_core::types::{DbId, Timestamp};

/// A row from the `messages` table.
#[derive(Debug, FromRow)]
pub struct MessageRow {
    pub id: DbId,
    pub task_id: DbId,
    pub text: String,
    pub author_id: String,
    pub author_name: String,
    pub author_avatar: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<MessageRow> for Message {
    fn from(row: MessageRow) -> Self {
        Message {
            id: row.id,
            task_id: row.task_id,
            text: row.text,
            author_id: row.author_id,
            author_name: row.author_name,
            author_avatar: row.author_avatar,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// DTO for inserting a message under a task.
#[derive(Debug, Clone)]
pub struct CreateMessage {
    pub task_id: DbId,
    pub text: String,
    pub author: AuthorIdentity,
}

impl CreateMessage {
    pub fn from_new(task_id: DbId, message: NewMessage) -> Self {
        Self {
            task_id,
            text: message.text,
            author: message.author,
        }
    }
}
