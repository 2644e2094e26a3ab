//! Message thread attached to a single task.

use taskboard_core::author::AuthorIdentity;
use taskboard_core::message::MessageView;
use taskboard_core::types::DbId;
use taskboard_core::models::{Message, NewMessage};

use crate::api::{ApiClient, ClientError};

#[derive(Debug, Clone)]
pub struct MessageThread {
    task_id: DbId,
    messages: Vec<Message>,
}

impl MessageThread {
    pub async fn load(api: &ApiClient, task_id: DbId) -> Result<Self, ClientError> {
        let messages = api.list_messages(task_id).await?;
        Ok(Self { task_id, messages })
    }

    pub fn task_id(&self) -> DbId {
        self.task_id
    }

    /// Post `text` as `author`, append the stored message and return it.
    pub async fn post(
        &mut self,
        api: &ApiClient,
        author: &AuthorIdentity,
        text: impl Into<String>,
    ) -> Result<Message, ClientError> {
        let new = NewMessage {
            text: text.into(),
            author: author.clone(),
        };
        let message = api.create_message(self.task_id, &new).await?;
        self.messages.push(message.clone());
        Ok(message)
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Oldest first.
    pub fn views(&self) -> Vec<MessageView> {
        self.messages.iter().map(Message::view).collect()
    }
}
