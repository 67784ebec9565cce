use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::model::{Author, Category, PostDraft, User};

/// Location shown when the author did not give one.
pub const UNSPECIFIED_LOCATION: &str = "Not specified";

/// Fields of the compose modal as the user filled them in.
#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewPost {
    #[validate(custom = "super::not_blank")]
    pub description: String,
    /// Falls back to [`Category::Other`] if not picked.
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default)]
    pub location: String,
    /// Comma separated list of tags, e.g. `safety, urgent`.
    #[serde(default)]
    pub tags: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl NewPost {
    /// Normalizes the form into a draft written by `author`.
    #[must_use]
    pub fn into_draft(self, author: &User) -> PostDraft {
        let tags = self
            .tags
            .split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .map(String::from)
            .collect();

        let location = match self.location.trim() {
            "" => UNSPECIFIED_LOCATION.to_string(),
            location => location.to_string(),
        };

        PostDraft {
            author: Author::from(author),
            description: self.description,
            image_url: self.image_url.filter(|url| !url.trim().is_empty()),
            tags,
            category: self.category.unwrap_or_default(),
            location,
        }
    }
}
