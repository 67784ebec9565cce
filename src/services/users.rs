use serde::Serialize;

use crate::feed::FeedStore;
use crate::model::Post;
use crate::types::id::{marker::UserMarker, Id};

/// Posts written by a user, most upvoted first.
///
/// **ROUTE**: `GET /api/users/:id/posts`
#[derive(Debug)]
pub struct ListUserPosts {
    pub user_id: Id<UserMarker>,
}

#[derive(Debug, Serialize)]
pub struct ListUserPostsResponse<'a> {
    pub posts: Vec<&'a Post>,
}

impl ListUserPosts {
    #[tracing::instrument(skip_all, fields(user.id = %self.user_id), name = "services.users.posts")]
    pub fn perform(self, feed: &FeedStore) -> ListUserPostsResponse<'_> {
        ListUserPostsResponse {
            posts: feed.user_posts(self.user_id),
        }
    }
}

/// What the profile screen shows about a user: their posts and
/// how much support they gathered.
#[derive(Debug)]
pub struct Profile {
    pub user_id: Id<UserMarker>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse<'a> {
    pub posts: Vec<&'a Post>,
    pub post_count: usize,
    pub total_upvotes: u64,
}

impl Profile {
    #[tracing::instrument(skip_all, fields(user.id = %self.user_id), name = "services.users.profile")]
    pub fn perform(self, feed: &FeedStore) -> ProfileResponse<'_> {
        let posts = feed.user_posts(self.user_id);
        let total_upvotes = posts.iter().map(|post| post.upvotes()).sum();
        ProfileResponse {
            post_count: posts.len(),
            total_upvotes,
            posts,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;
    use crate::types::Timestamp;

    #[test]
    fn profile_sums_upvotes_of_own_posts() {
        let feed = FeedStore::with_posts(seed::posts(Timestamp::now()));

        let jane = Profile { user_id: Id::new(2) }.perform(&feed);
        assert_eq!(jane.post_count, 2);
        assert_eq!(jane.total_upvotes, 3);
        assert_eq!(jane.posts[0].id, Id::new(3));

        let body = serde_json::to_value(&jane).unwrap();
        assert_eq!(body["postCount"], 2);
        assert_eq!(body["totalUpvotes"], 3);
    }

    #[test]
    fn profile_of_user_without_posts_is_empty() {
        let feed = FeedStore::with_posts(seed::posts(Timestamp::now()));
        let stranger = Profile { user_id: Id::new(42) }.perform(&feed);
        assert_eq!(stranger.post_count, 0);
        assert_eq!(stranger.total_upvotes, 0);
    }

    #[test]
    fn list_user_posts() {
        let feed = FeedStore::with_posts(seed::posts(Timestamp::now()));
        let response = ListUserPosts { user_id: Id::new(1) }.perform(&feed);
        let ids = response.posts.iter().map(|p| p.id).collect::<Vec<_>>();
        assert_eq!(ids, vec![Id::new(2)]);
    }
}
