use civic_feed::config::Settings;
use civic_feed::model::Category;
use civic_feed::services::{
    CommentOnPost, CreatePost, ListPosts, ListUserPosts, Login, Logout, Profile, UpvotePost,
};
use civic_feed::types::form::{comment::NewComment, login, post::NewPost};
use civic_feed::types::id::{marker::UserMarker, Id};
use civic_feed::types::Error;
use civic_feed::util::Sensitive;
use civic_feed::App;

fn app(seed_posts: bool) -> App {
    civic_feed::telemetry::init_for_tests();

    let mut config = Settings::default();
    config.session.login_delay_ms = 0;
    config.feed.seed_posts = seed_posts;
    App::new(config)
}

fn login_request(email: &str, password: &str) -> login::Request {
    login::Request {
        email: email.into(),
        password: Sensitive::new(password.into()),
    }
}

#[tokio::test]
async fn login_then_logout() {
    let mut app = app(true);

    let request = login_request("john@example.com", "x");
    let response = Login::from_request(&request)
        .perform(&mut app.session)
        .await
        .unwrap();

    assert_eq!(response.user.name, "John Doe");
    assert!(response.token.is_none());
    assert!(app.session.is_authenticated());

    Logout.perform(&mut app.session);
    assert!(!app.session.is_authenticated());

    // logging out twice is fine
    Logout.perform(&mut app.session);
    assert!(!app.session.is_authenticated());
}

#[tokio::test]
async fn login_rejects_unknown_accounts() {
    let mut app = app(true);

    for (email, password) in [
        ("nobody@x.com", "x"),
        ("john@example.com", ""),
        ("JOHN@example.com", "x"),
    ] {
        let request = login_request(email, password);
        let error = Login::from_request(&request)
            .perform(&mut app.session)
            .await
            .unwrap_err();

        assert!(matches!(error.current_context(), Error::InvalidCredentials));
        assert!(!app.session.is_authenticated());
    }
}

#[tokio::test]
async fn compose_upvote_and_comment() {
    let mut app = app(false);

    let request = login_request("john@example.com", "secret");
    Login::from_request(&request)
        .perform(&mut app.session)
        .await
        .unwrap();

    let john = app.session.current_user().cloned().unwrap();
    let form = NewPost {
        description: "pothole".into(),
        category: Some(Category::Infrastructure),
        location: "Oak Avenue".into(),
        tags: "road, ,urgent".into(),
        image_url: None,
    };

    let post_id = {
        let response = CreatePost { form }.perform(&mut app.feed, &john).unwrap();
        let post = response.post;
        assert_eq!(post.upvotes(), 0);
        assert!(post.upvoted_by().is_empty());
        assert!(post.comments().is_empty());
        assert_eq!(post.tags, ["road", "urgent"]);
        assert_eq!(post.author.user_id, john.id);
        post.id
    };

    let posts = ListUserPosts { user_id: john.id }.perform(&app.feed).posts;
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].id, post_id);

    let jane = Id::<UserMarker>::new(2);
    let upvote = || UpvotePost {
        post_id,
        user_id: jane,
    };

    let post = upvote().perform(&mut app.feed).unwrap().post;
    assert_eq!(post.upvotes(), 1);
    assert_eq!(post.upvoted_by(), [jane]);

    let post = upvote().perform(&mut app.feed).unwrap().post;
    assert_eq!(post.upvotes(), 0);
    assert!(post.upvoted_by().is_empty());

    for content in ["first", "  second  "] {
        let form = NewComment {
            content: content.into(),
        };
        let response = CommentOnPost { post_id, form }
            .perform(&mut app.feed, &john)
            .unwrap();
        assert!(response.is_some());
    }

    let post = app.feed.post(post_id).unwrap();
    let contents = post
        .comments()
        .iter()
        .map(|comment| comment.content.as_str())
        .collect::<Vec<_>>();
    assert_eq!(contents, ["first", "second"]);

    let profile = Profile { user_id: john.id }.perform(&app.feed);
    assert_eq!(profile.post_count, 1);
    assert_eq!(profile.total_upvotes, 0);
}

#[tokio::test]
async fn blank_forms_are_rejected() {
    let mut app = app(true);

    let request = login_request("jane@example.com", "x");
    let jane = Login::from_request(&request)
        .perform(&mut app.session)
        .await
        .unwrap()
        .user;

    let form = NewPost {
        description: "   ".into(),
        ..Default::default()
    };
    let error = CreatePost { form }.perform(&mut app.feed, &jane).unwrap_err();
    assert!(matches!(error.current_context(), Error::InvalidFormBody(..)));
    assert_eq!(app.feed.len(), 3);

    let post_id = ListPosts.perform(&app.feed).posts[0].id;
    let form = NewComment {
        content: "\n".into(),
    };
    let result = CommentOnPost { post_id, form }.perform(&mut app.feed, &jane);
    assert!(result.is_err());
    assert!(app.feed.post(post_id).unwrap().comments().len() == 1);
}

#[test]
fn mutations_on_unknown_posts_are_ignored() {
    let mut app = app(true);
    let user_id = Id::<UserMarker>::new(1);
    let post_id = civic_feed::types::Id::new(404);

    assert!(UpvotePost { post_id, user_id }
        .perform(&mut app.feed)
        .is_none());

    let author = app.session.roster().find(user_id).cloned().unwrap();
    let form = NewComment {
        content: "hello?".into(),
    };
    let response = CommentOnPost { post_id, form }
        .perform(&mut app.feed, &author)
        .unwrap();
    assert!(response.is_none());

    let upvotes = ListPosts
        .perform(&app.feed)
        .posts
        .iter()
        .map(|post| post.upvotes())
        .collect::<Vec<_>>();
    assert_eq!(upvotes, [2, 1, 1]);
}

#[test]
fn feed_serializes_for_the_wire() {
    let app = app(true);
    let response = ListPosts.perform(&app.feed);
    let value = serde_json::to_value(&response).unwrap();

    let first = &value["posts"][0];
    assert_eq!(first["id"], "3");
    assert_eq!(first["userId"], "2");
    assert_eq!(first["userName"], "Jane Smith");
    assert_eq!(first["category"], "Public Facilities");
    assert_eq!(first["upvotes"], 2);
    assert_eq!(first["upvotedBy"], serde_json::json!(["1", "2"]));
}
