use std::collections::VecDeque;
use tracing::debug;

use crate::model::{Comment, CommentDraft, Post, PostDraft};
use crate::types::id::{
    marker::{CommentMarker, PostMarker, UserMarker},
    Id, IdGenerator,
};
use crate::types::Timestamp;

/// In-memory collection of every post in the feed.
///
/// Posts are kept newest first. Read views sort them by upvotes
/// instead, see [`FeedStore::posts`].
#[derive(Debug, Default)]
pub struct FeedStore {
    posts: VecDeque<Post>,
    post_ids: IdGenerator<PostMarker>,
    comment_ids: IdGenerator<CommentMarker>,
}

impl FeedStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding `posts` in the given order.
    #[must_use]
    pub fn with_posts(posts: Vec<Post>) -> Self {
        let mut store = Self::new();
        for post in &posts {
            store.post_ids.observe(post.id);
            for comment in post.comments() {
                store.comment_ids.observe(comment.id);
            }
        }
        store.posts = posts.into();
        store
    }

    /// Publishes a new post on top of the collection.
    pub fn add_post(&mut self, draft: PostDraft) -> &Post {
        // Stands in for `POST /api/posts`
        let id = self.post_ids.generate();
        debug!(post.id = %id, user.id = %draft.author.user_id, "adding post");

        self.posts
            .push_front(Post::from_draft(id, draft, Timestamp::now()));
        &self.posts[0]
    }

    /// Upvotes the post for `user_id` or takes the upvote back if they
    /// already upvoted it.
    ///
    /// Nothing happens if there is no post with `post_id`.
    pub fn upvote_post(&mut self, post_id: Id<PostMarker>, user_id: Id<UserMarker>) -> Option<&Post> {
        // Stands in for `POST /api/posts/:id/upvote`
        let Some(post) = self.posts.iter_mut().find(|post| post.id == post_id) else {
            debug!(post.id = %post_id, "ignoring upvote on an unknown post");
            return None;
        };

        let upvoted = post.toggle_upvote(user_id);
        debug!(post.id = %post_id, user.id = %user_id, upvoted, upvotes = post.upvotes(), "toggled upvote");
        Some(&*post)
    }

    /// Appends a comment under the post.
    ///
    /// Nothing happens if there is no post with `post_id`.
    pub fn add_comment(&mut self, post_id: Id<PostMarker>, draft: CommentDraft) -> Option<&Comment> {
        // Stands in for `POST /api/posts/:id/comment`
        let Some(post) = self.posts.iter_mut().find(|post| post.id == post_id) else {
            debug!(post.id = %post_id, "ignoring comment on an unknown post");
            return None;
        };

        let id = self.comment_ids.generate();
        debug!(post.id = %post_id, comment.id = %id, "adding comment");

        post.push_comment(Comment::from_draft(id, draft, Timestamp::now()));
        post.comments().last()
    }

    /// Every post, most upvoted first.
    ///
    /// Posts with the same number of upvotes keep their order in
    /// the collection.
    #[must_use]
    pub fn posts(&self) -> Vec<&Post> {
        // Stands in for `GET /api/posts`
        by_upvotes(self.posts.iter())
    }

    /// Posts written by `user_id`, sorted the same way as [`FeedStore::posts`].
    #[must_use]
    pub fn user_posts(&self, user_id: Id<UserMarker>) -> Vec<&Post> {
        // Stands in for `GET /api/users/:id/posts`
        by_upvotes(self.posts.iter().filter(|post| post.author.user_id == user_id))
    }

    #[must_use]
    pub fn post(&self, post_id: Id<PostMarker>) -> Option<&Post> {
        self.posts.iter().find(|post| post.id == post_id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.posts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}

fn by_upvotes<'a>(posts: impl Iterator<Item = &'a Post>) -> Vec<&'a Post> {
    let mut posts = posts.collect::<Vec<_>>();
    // `sort_by` is stable
    posts.sort_by(|a, b| b.upvotes().cmp(&a.upvotes()));
    posts
}
