use crate::model::User;
use crate::seed;
use crate::types::id::{marker::UserMarker, Id};

/// The fixed set of accounts checked at login in place of a real
/// identity backend.
#[derive(Debug, Clone)]
pub struct Roster {
    users: Vec<User>,
}

impl Roster {
    #[must_use]
    pub fn new(users: Vec<User>) -> Self {
        Self { users }
    }

    /// Looks up an account by its email address, compared exactly.
    #[must_use]
    pub fn find_by_email(&self, email: &str) -> Option<&User> {
        self.users.iter().find(|user| user.email == email)
    }

    #[must_use]
    pub fn find(&self, id: Id<UserMarker>) -> Option<&User> {
        self.users.iter().find(|user| user.id == id)
    }

    #[must_use]
    pub fn users(&self) -> &[User] {
        &self.users
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self::new(seed::roster())
    }
}
