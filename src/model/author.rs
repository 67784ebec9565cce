use serde::{Deserialize, Serialize};

use super::User;
use crate::types::id::{marker::UserMarker, Id};

/// Author details copied into a post or comment at the time it was
/// written.
///
/// The copy is a snapshot: it stays as it is even if the author's
/// profile changes later on.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub user_id: Id<UserMarker>,
    pub user_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_avatar: Option<String>,
}

impl From<&User> for Author {
    fn from(user: &User) -> Self {
        Self {
            user_id: user.id,
            user_name: user.name.clone(),
            user_avatar: user.avatar.clone(),
        }
    }
}
