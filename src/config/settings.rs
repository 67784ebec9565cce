use error_stack::{Report, Result, ResultExt};
use serde::Deserialize;
use validator::Validate;

use super::{Feed, Logging, ParseError, Session};
use crate::util::{figment::FigmentErrorAttachable, validator::IntoValidatorReport};

/// Every tunable of the feed, loaded from `civic.toml` and the
/// environment.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct Settings {
    #[validate]
    pub session: Session,
    pub feed: Feed,
    pub logging: Logging,
}

impl Settings {
    pub fn load() -> Result<Self, ParseError> {
        dotenvy::dotenv().ok();

        let config = Self::figment()
            .extract::<Self>()
            .map_err(|e| Report::new(ParseError).attach_figment_error(e))?;

        config
            .validate()
            .into_validator_report()
            .change_context(ParseError)?;

        Ok(config)
    }
}

impl Settings {
    const DEFAULT_CONFIG_FILE: &'static str = "civic.toml";

    /// Creates a default [`Figment`] object to load the settings.
    /// This function is there for implementing [`Settings::load`]
    /// and testing.
    ///
    /// [`Figment`]: figment::Figment
    pub(crate) fn figment() -> figment::Figment {
        use figment::{
            providers::{Env, Format, Toml},
            Figment,
        };

        Figment::new()
            .merge(Toml::file(Self::DEFAULT_CONFIG_FILE))
            // `RUST_LOG` goes first so `CIVIC_LOGGING_TARGETS` wins over it
            .merge(
                Env::raw()
                    .only(&["RUST_LOG"])
                    .map(|_| "logging.targets".into()),
            )
            .merge(Env::prefixed("CIVIC_").map(|v| {
                match v.as_str().to_ascii_uppercase().as_str() {
                    "LOGIN_DELAY_MS" => "session.login_delay_ms".into(),
                    "SEED_POSTS" => "feed.seed_posts".into(),
                    "LOGGING_STYLE" => "logging.style".into(),
                    "LOGGING_TARGETS" => "logging.targets".into(),
                    other => other.replace('_', ".").into(),
                }
            }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LoggingStyle;
    use figment::Jail;
    use std::time::Duration;

    #[test]
    fn defaults() {
        Jail::expect_with(|_| {
            let config: Settings = Settings::figment().extract()?;
            assert_eq!(config.session.login_delay(), Duration::from_millis(500));
            assert!(config.feed.seed_posts);
            assert_eq!(config.logging.style, LoggingStyle::Compact);
            Ok(())
        });
    }

    #[test]
    fn env_aliases() {
        Jail::expect_with(|jail| {
            jail.set_env("RUST_LOG", "warn");
            jail.set_env("CIVIC_LOGIN_DELAY_MS", "0");
            jail.set_env("CIVIC_SEED_POSTS", "false");
            jail.set_env("CIVIC_LOGGING_STYLE", "pretty");

            let config: Settings = Settings::figment().extract()?;
            assert_eq!(config.session.login_delay(), Duration::ZERO);
            assert!(!config.feed.seed_posts);
            assert_eq!(config.logging.style, LoggingStyle::Pretty);
            assert_eq!(config.logging.targets, "warn");

            jail.set_env("CIVIC_LOGGING_TARGETS", "civic_feed=trace");
            let config: Settings = Settings::figment().extract()?;
            assert_eq!(config.logging.targets, "civic_feed=trace");

            Ok(())
        });
    }

    #[test]
    fn config_file() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "civic.toml",
                r#"
                [session]
                login_delay_ms = 25

                [feed]
                seed_posts = false

                [logging]
                style = "full"
                "#,
            )?;
            jail.set_env("CIVIC_LOGIN_DELAY_MS", "50");

            let config: Settings = Settings::figment().extract()?;
            // environment variables override the file
            assert_eq!(config.session.login_delay_ms, 50);
            assert!(!config.feed.seed_posts);
            assert_eq!(config.logging.style, LoggingStyle::Full);
            Ok(())
        });
    }

    #[test]
    fn rejects_invalid_settings() {
        Jail::expect_with(|jail| {
            jail.set_env("CIVIC_LOGIN_DELAY_MS", "60000");
            assert!(Settings::load().is_err());

            jail.set_env("CIVIC_LOGIN_DELAY_MS", "100");
            jail.set_env("CIVIC_LOGGING_STYLE", "rainbow");
            assert!(Settings::load().is_err());

            jail.set_env("CIVIC_LOGGING_STYLE", "compact");
            assert!(Settings::load().is_ok());
            Ok(())
        });
    }

    #[test]
    fn reports_the_offending_key() {
        Jail::expect_with(|jail| {
            jail.set_env("CIVIC_LOGGING_STYLE", "rainbow");

            let report = Settings::load().unwrap_err();
            let rendered = format!("{report:?}").to_lowercase();
            assert!(rendered.contains("failed to load configuration"));
            assert!(rendered.contains("rainbow"));
            assert!(rendered.contains(r#"for key "logging.style""#));
            assert!(rendered.contains("environment variable"));
            Ok(())
        });
    }
}
