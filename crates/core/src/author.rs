use serde::{Deserialize, Serialize};

/// Identity of whoever wrote a task or a message, as taken from the
/// current session (email, nickname, picture URL).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorIdentity {
    #[serde(default)]
    pub author_id: String,
    #[serde(default)]
    pub author_name: String,
    #[serde(default)]
    pub author_avatar: Option<String>,
}

impl AuthorIdentity {
    pub fn new(
        author_id: impl Into<String>,
        author_name: impl Into<String>,
        author_avatar: Option<String>,
    ) -> Self {
        Self {
            author_id: author_id.into(),
            author_name: author_name.into(),
            author_avatar,
        }
    }
}
