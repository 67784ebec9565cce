use error_stack::{Report, Result};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

use crate::model::User;
use crate::util::Sensitive;

mod roster;
pub use self::roster::Roster;

#[derive(Debug, Error)]
pub enum LoginError {
    #[error("Invalid credentials")]
    InvalidCredentials,
}

/// Holds the currently authenticated user, if there is any.
#[derive(Debug)]
pub struct SessionStore {
    roster: Roster,
    current: Option<User>,
    login_delay: Duration,
}

impl SessionStore {
    /// Default simulated round trip of a login request.
    pub const DEFAULT_LOGIN_DELAY: Duration = Duration::from_millis(500);

    #[must_use]
    pub fn new(roster: Roster, login_delay: Duration) -> Self {
        Self {
            roster,
            current: None,
            login_delay,
        }
    }

    /// Logs in as the roster account with the exact `email` given.
    ///
    /// Passwords are not verified yet: any non-empty password is
    /// accepted for a known account. The session only changes after
    /// the simulated network delay has passed, so dropping the
    /// returned future early leaves the session as it was.
    #[tracing::instrument(skip_all, name = "session.login")]
    pub async fn login(&mut self, email: &str, password: Sensitive<&str>) -> Result<&User, LoginError> {
        // Stands in for `POST /api/auth/login`
        tokio::time::sleep(self.login_delay).await;

        let Some(user) = self.roster.find_by_email(email) else {
            warn!("rejected login with an unknown email address");
            return Err(Report::new(LoginError::InvalidCredentials)
                .attach_printable("no account matches the given email address"));
        };

        if password.is_empty() {
            warn!(user.id = %user.id, "rejected login with an empty password");
            return Err(Report::new(LoginError::InvalidCredentials)
                .attach_printable("password must not be empty"));
        }

        debug!(user.id = %user.id, "logged in");
        let user = user.clone();
        Ok(self.current.insert(user))
    }

    /// Forgets the current user. Logging out twice does nothing.
    pub fn logout(&mut self) {
        if let Some(user) = self.current.take() {
            debug!(user.id = %user.id, "logged out");
        }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    #[must_use]
    pub fn current_user(&self) -> Option<&User> {
        self.current.as_ref()
    }

    #[must_use]
    pub fn roster(&self) -> &Roster {
        &self.roster
    }
}
