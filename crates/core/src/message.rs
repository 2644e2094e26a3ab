//! Chat message display model.

use serde::Serialize;

/// What a single chat bubble shows: avatar, author name and text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageView {
    pub author_name: String,
    pub author_avatar: Option<String>,
    pub text: String,
}

impl MessageView {
    pub fn new(
        author_name: impl Into<String>,
        author_avatar: Option<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            author_name: author_name.into(),
            author_avatar,
            text: text.into(),
        }
    }
}
