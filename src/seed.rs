//! Demo data the feed starts with: the fixed roster of known
//! accounts and a few complaints already filed by them.
use chrono::Duration;

use crate::model::{Author, Category, Comment, CommentDraft, Post, PostDraft, User};
use crate::types::{Id, Timestamp};

const JOHN_AVATAR: &str =
    "https://images.pexels.com/photos/220453/pexels-photo-220453.jpeg?auto=compress&cs=tinysrgb&w=200";
const JANE_AVATAR: &str =
    "https://images.pexels.com/photos/774909/pexels-photo-774909.jpeg?auto=compress&cs=tinysrgb&w=200";

/// Accounts that are allowed to log in.
#[must_use]
pub fn roster() -> Vec<User> {
    vec![
        User {
            id: Id::new(1),
            email: "john@example.com".into(),
            name: "John Doe".into(),
            avatar: Some(JOHN_AVATAR.into()),
        },
        User {
            id: Id::new(2),
            email: "jane@example.com".into(),
            name: "Jane Smith".into(),
            avatar: Some(JANE_AVATAR.into()),
        },
    ]
}

/// Complaints the feed starts with, dated relative to `now`.
///
/// The upvote counts follow the seeded voters so every post starts
/// with `upvotes` equal to the number of voters.
#[must_use]
pub fn posts(now: Timestamp) -> Vec<Post> {
    let users = roster();
    let (john, jane) = (Author::from(&users[0]), Author::from(&users[1]));

    let mut streetlight = Post::from_draft(
        Id::new(1),
        PostDraft {
            author: jane.clone(),
            description: "Broken streetlight on Main Street causing safety concerns. \
                This has been an issue for over 2 weeks now."
                .into(),
            image_url: Some(
                "https://images.pexels.com/photos/1108701/pexels-photo-1108701.jpeg?auto=compress&cs=tinysrgb&w=800"
                    .into(),
            ),
            tags: vec!["safety".into(), "infrastructure".into()],
            category: Category::PublicSafety,
            location: "Main Street, Downtown".into(),
        },
        now - Duration::days(2),
    );
    streetlight.toggle_upvote(john.user_id);
    streetlight.push_comment(Comment::from_draft(
        Id::new(1),
        CommentDraft {
            author: john.clone(),
            content: "I noticed this too! Very dangerous at night.".into(),
        },
        now - Duration::days(1),
    ));

    let mut pothole = Post::from_draft(
        Id::new(2),
        PostDraft {
            author: john.clone(),
            description: "Pothole on Oak Avenue needs immediate attention. \
                Multiple vehicles have been damaged."
                .into(),
            image_url: Some(
                "https://images.pexels.com/photos/1756957/pexels-photo-1756957.jpeg?auto=compress&cs=tinysrgb&w=800"
                    .into(),
            ),
            tags: vec!["road".into(), "maintenance".into()],
            category: Category::Infrastructure,
            location: "Oak Avenue".into(),
        },
        now - Duration::days(3),
    );
    pothole.toggle_upvote(jane.user_id);

    let mut playground = Post::from_draft(
        Id::new(3),
        PostDraft {
            author: jane.clone(),
            description: "Park playground equipment is rusty and unsafe for children.".into(),
            image_url: Some(
                "https://images.pexels.com/photos/1416736/pexels-photo-1416736.jpeg?auto=compress&cs=tinysrgb&w=800"
                    .into(),
            ),
            tags: vec!["park".into(), "children".into(), "safety".into()],
            category: Category::PublicFacilities,
            location: "Central Park".into(),
        },
        now - Duration::days(4),
    );
    playground.toggle_upvote(john.user_id);
    playground.toggle_upvote(jane.user_id);
    playground.push_comment(Comment::from_draft(
        Id::new(2),
        CommentDraft {
            author: john,
            content: "This is concerning. Hope it gets fixed soon.".into(),
        },
        now - Duration::hours(12),
    ));

    vec![streetlight, pothole, playground]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_roster_emails_are_unique() {
        let users = roster();
        let emails = users.iter().map(|u| u.email.as_str()).collect::<HashSet<_>>();
        assert_eq!(emails.len(), users.len());
    }

    #[test]
    fn test_seeded_posts_hold_upvote_invariant() {
        for post in posts(Timestamp::now()) {
            assert_eq!(post.upvotes(), post.upvoted_by().len() as u64);
        }
    }
}
