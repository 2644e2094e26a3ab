use serde::{Deserialize, Serialize};

use crate::author::AuthorIdentity;
use crate::message::MessageView;
use crate::types::{DbId, Timestamp};

/// A stored chat message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: DbId,
    pub task_id: DbId,
    pub text: String,
    pub author_id: String,
    pub author_name: String,
    pub author_avatar: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Message {
    pub fn view(&self) -> MessageView {
        MessageView::new(&self.author_name, self.author_avatar.clone(), &self.text)
    }
}

/// Message fields as submitted by a client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMessage {
    pub text: String,
    #[serde(flatten)]
    pub author: AuthorIdentity,
}
