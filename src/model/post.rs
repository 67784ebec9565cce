use serde::{Deserialize, Serialize};

use super::{Author, Category, Comment};
use crate::types::id::{
    marker::{PostMarker, UserMarker},
    Id,
};
use crate::types::Timestamp;

/// A complaint published to the feed.
///
/// `upvotes` always equals the length of `upvoted_by` and no user
/// appears twice in it. Both fields are private and only change
/// together through [`Post::toggle_upvote`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: Id<PostMarker>,
    #[serde(flatten)]
    pub author: Author,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub tags: Vec<String>,
    pub category: Category,
    pub location: String,
    upvotes: u64,
    upvoted_by: Vec<Id<UserMarker>>,
    comments: Vec<Comment>,
    pub created_at: Timestamp,
}

/// Caller supplied fields of a new [`Post`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDraft {
    #[serde(flatten)]
    pub author: Author,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub category: Category,
    pub location: String,
}

impl Post {
    /// Creates a post with no upvotes and no comments yet.
    #[must_use]
    pub fn from_draft(id: Id<PostMarker>, draft: PostDraft, created_at: Timestamp) -> Self {
        Self {
            id,
            author: draft.author,
            description: draft.description,
            image_url: draft.image_url,
            tags: draft.tags,
            category: draft.category,
            location: draft.location,
            upvotes: 0,
            upvoted_by: Vec::new(),
            comments: Vec::new(),
            created_at,
        }
    }

    #[must_use]
    pub const fn upvotes(&self) -> u64 {
        self.upvotes
    }

    #[must_use]
    pub fn upvoted_by(&self) -> &[Id<UserMarker>] {
        &self.upvoted_by
    }

    #[must_use]
    pub fn is_upvoted_by(&self, user_id: Id<UserMarker>) -> bool {
        self.upvoted_by.contains(&user_id)
    }

    /// Comments in the order they were written.
    #[must_use]
    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    /// Registers the user's upvote or takes it back if they already
    /// upvoted this post. Returns whether the user upvotes the post
    /// after the toggle.
    pub(crate) fn toggle_upvote(&mut self, user_id: Id<UserMarker>) -> bool {
        let upvoted = if let Some(index) = self.upvoted_by.iter().position(|id| *id == user_id) {
            self.upvoted_by.remove(index);
            self.upvotes -= 1;
            false
        } else {
            self.upvoted_by.push(user_id);
            self.upvotes += 1;
            true
        };
        debug_assert_eq!(self.upvotes, self.upvoted_by.len() as u64);
        upvoted
    }

    pub(crate) fn push_comment(&mut self, comment: Comment) {
        self.comments.push(comment);
    }
}
