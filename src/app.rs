use error_stack::{Result, ResultExt};
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

use crate::config::Settings;
use crate::feed::FeedStore;
use crate::seed;
use crate::session::{Roster, SessionStore};
use crate::types::Timestamp;

/// Application state: the session of whoever is using the feed and
/// the feed itself.
#[derive(Debug)]
pub struct App {
    pub config: Arc<Settings>,
    pub session: SessionStore,
    pub feed: FeedStore,
}

#[derive(Debug, Error)]
#[error("Failed to initialize App struct")]
pub struct AppError;

impl App {
    #[must_use]
    #[tracing::instrument(skip_all, name = "app.new")]
    pub fn new(config: Settings) -> Self {
        let session = SessionStore::new(Roster::default(), config.session.login_delay());
        let feed = if config.feed.seed_posts {
            FeedStore::with_posts(seed::posts(Timestamp::now()))
        } else {
            FeedStore::new()
        };
        info!(posts = feed.len(), "feed is ready");

        Self {
            config: Arc::new(config),
            session,
            feed,
        }
    }

    /// Loads [`Settings`] from the environment and builds the app
    /// around them.
    pub fn load() -> Result<Self, AppError> {
        let config = Settings::load().change_context(AppError)?;
        Ok(Self::new(config))
    }
}
