use serde::{Deserialize, Serialize};

use super::Author;
use crate::types::id::{marker::CommentMarker, Id};
use crate::types::Timestamp;

/// A reply under a post. Once written, it is never edited or removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: Id<CommentMarker>,
    #[serde(flatten)]
    pub author: Author,
    pub content: String,
    pub created_at: Timestamp,
}

/// Caller supplied fields of a new [`Comment`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentDraft {
    #[serde(flatten)]
    pub author: Author,
    pub content: String,
}

impl Comment {
    #[must_use]
    pub fn from_draft(id: Id<CommentMarker>, draft: CommentDraft, created_at: Timestamp) -> Self {
        Self {
            id,
            author: draft.author,
            content: draft.content,
            created_at,
        }
    }
}
