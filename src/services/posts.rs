use error_stack::{Report, Result};
use serde::Serialize;
use validator::Validate;

use crate::feed::FeedStore;
use crate::model::{Comment, Post, User};
use crate::types::form::{comment::NewComment, post::NewPost};
use crate::types::id::{
    marker::{PostMarker, UserMarker},
    Id,
};
use crate::types::Error;

/// Every post in the feed, most upvoted first.
///
/// **ROUTE**: `GET /api/posts`
#[derive(Debug)]
pub struct ListPosts;

#[derive(Debug, Serialize)]
pub struct ListPostsResponse<'a> {
    pub posts: Vec<&'a Post>,
}

impl ListPosts {
    #[tracing::instrument(skip_all, name = "services.posts.list")]
    pub fn perform(self, feed: &FeedStore) -> ListPostsResponse<'_> {
        ListPostsResponse {
            posts: feed.posts(),
        }
    }
}

/// Files a new complaint written by the session user.
///
/// **ROUTE**: `POST /api/posts`
#[derive(Debug)]
pub struct CreatePost {
    pub form: NewPost,
}

#[derive(Debug, Serialize)]
pub struct CreatePostResponse<'a> {
    pub post: &'a Post,
}

impl CreatePost {
    #[tracing::instrument(skip_all, fields(user.id = %author.id), name = "services.posts.create")]
    pub fn perform<'a>(
        self,
        feed: &'a mut FeedStore,
        author: &User,
    ) -> Result<CreatePostResponse<'a>, Error> {
        self.form
            .validate()
            .map_err(|e| Report::new(Error::from(e)))?;

        let post = feed.add_post(self.form.into_draft(author));
        Ok(CreatePostResponse { post })
    }
}

/// Toggles the upvote of a user on a post.
///
/// Upvoting a post that does not exist does nothing and responds
/// with [`None`].
///
/// **ROUTE**: `POST /api/posts/:id/upvote`
#[derive(Debug)]
pub struct UpvotePost {
    pub post_id: Id<PostMarker>,
    pub user_id: Id<UserMarker>,
}

#[derive(Debug, Serialize)]
pub struct UpvotePostResponse<'a> {
    pub post: &'a Post,
}

impl UpvotePost {
    #[tracing::instrument(skip_all, fields(post.id = %self.post_id, user.id = %self.user_id), name = "services.posts.upvote")]
    pub fn perform(self, feed: &mut FeedStore) -> Option<UpvotePostResponse<'_>> {
        feed.upvote_post(self.post_id, self.user_id)
            .map(|post| UpvotePostResponse { post })
    }
}

/// Writes a comment under a post as the session user.
///
/// Commenting on a post that does not exist does nothing and
/// responds with [`None`].
///
/// **ROUTE**: `POST /api/posts/:id/comment`
#[derive(Debug)]
pub struct CommentOnPost {
    pub post_id: Id<PostMarker>,
    pub form: NewComment,
}

#[derive(Debug, Serialize)]
pub struct CommentOnPostResponse<'a> {
    pub comment: &'a Comment,
}

impl CommentOnPost {
    #[tracing::instrument(skip_all, fields(post.id = %self.post_id, user.id = %author.id), name = "services.posts.comment")]
    pub fn perform<'a>(
        self,
        feed: &'a mut FeedStore,
        author: &User,
    ) -> Result<Option<CommentOnPostResponse<'a>>, Error> {
        self.form
            .validate()
            .map_err(|e| Report::new(Error::from(e)))?;

        let comment = feed.add_comment(self.post_id, self.form.into_draft(author));
        Ok(comment.map(|comment| CommentOnPostResponse { comment }))
    }
}
