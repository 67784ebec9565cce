use serde::Deserialize;
use std::time::Duration;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(default)]
pub struct Session {
    /// How long a login attempt waits before it is answered, in
    /// milliseconds. It simulates the round trip to an identity
    /// backend. Set it to `0` to answer immediately.
    ///
    /// **Environment variables**:
    /// - `CIVIC_LOGIN_DELAY_MS`
    #[validate(range(max = 10000, message = "login delay must not exceed 10 seconds"))]
    pub login_delay_ms: u64,
}

impl Session {
    const DEFAULT_LOGIN_DELAY_MS: u64 = 500;

    #[must_use]
    pub const fn login_delay(&self) -> Duration {
        Duration::from_millis(self.login_delay_ms)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self {
            login_delay_ms: Self::DEFAULT_LOGIN_DELAY_MS,
        }
    }
}
