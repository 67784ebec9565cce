use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::model::{Author, CommentDraft, User};

/// What the user typed into the comment box of a post.
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct NewComment {
    #[validate(custom = "super::not_blank")]
    pub content: String,
}

impl NewComment {
    #[must_use]
    pub fn into_draft(self, author: &User) -> CommentDraft {
        CommentDraft {
            author: Author::from(author),
            content: self.content.trim().to_string(),
        }
    }
}
