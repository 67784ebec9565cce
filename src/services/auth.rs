use error_stack::{Result, ResultExt};

use crate::session::SessionStore;
use crate::types::form::login;
use crate::types::Error;
use crate::util::Sensitive;

/// **ROUTE**: `POST /api/auth/login`
#[derive(Debug)]
pub struct Login<'a> {
    pub email: Sensitive<&'a str>,
    pub password: Sensitive<&'a str>,
}

impl<'a> Login<'a> {
    #[must_use]
    pub fn from_request(request: &'a login::Request) -> Self {
        Self {
            email: Sensitive::new(request.email.as_str()),
            password: Sensitive::new(request.password.as_str()),
        }
    }
}

impl Login<'_> {
    #[tracing::instrument(skip_all, name = "services.auth.login")]
    pub async fn perform(self, session: &mut SessionStore) -> Result<login::Response, Error> {
        let user = session
            .login(self.email.into_inner(), self.password)
            .await
            .change_context(Error::InvalidCredentials)?;

        Ok(login::Response {
            user: user.clone(),
            token: None,
        })
    }
}

/// **ROUTE**: `POST /api/auth/logout`
#[derive(Debug)]
pub struct Logout;

impl Logout {
    #[tracing::instrument(skip_all, name = "services.auth.logout")]
    pub fn perform(self, session: &mut SessionStore) {
        session.logout();
    }
}
