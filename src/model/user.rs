use serde::{Deserialize, Serialize};

use crate::types::id::{marker::UserMarker, Id};

/// A known account of the feed. Users are seeded once and never
/// change afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct User {
    pub id: Id<UserMarker>,
    pub email: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}
