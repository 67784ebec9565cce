use thiserror::Error;

mod feed;
mod logging;
mod session;
mod settings;

pub use self::feed::Feed;
pub use self::logging::{InvalidLoggingStyle, Logging, LoggingStyle};
pub use self::session::Session;
pub use self::settings::Settings;

#[derive(Debug, Error)]
#[error("Failed to load configuration")]
pub struct ParseError;
