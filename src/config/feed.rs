use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Feed {
    /// Whether the feed starts with the demo complaints instead of
    /// being empty.
    ///
    /// **Environment variables**:
    /// - `CIVIC_SEED_POSTS`
    pub seed_posts: bool,
}

impl Default for Feed {
    fn default() -> Self {
        Self { seed_posts: true }
    }
}
