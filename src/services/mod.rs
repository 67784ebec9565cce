//! One object per backend operation of the feed.
//!
//! Each object is performed against the stores directly for now.
//! Once the backend exists, only the `perform` bodies need to call
//! the matching route instead.
pub mod auth;
pub mod posts;
pub mod users;

pub use self::auth::{Login, Logout};
pub use self::posts::{
    CommentOnPost, CommentOnPostResponse, CreatePost, CreatePostResponse, ListPosts,
    ListPostsResponse, UpvotePost, UpvotePostResponse,
};
pub use self::users::{ListUserPosts, ListUserPostsResponse, Profile, ProfileResponse};
