//! Installs the global [`tracing`] subscriber from [`config::Logging`].
//!
//! [`config::Logging`]: crate::config::Logging
use error_stack::{Result, ResultExt};
use std::io::IsTerminal;
use thiserror::Error;
use tracing::{level_filters::LevelFilter, warn};
use tracing_subscriber::{
    fmt::{MakeWriter, TestWriter},
    layer::SubscriberExt,
    EnvFilter, Layer, Registry,
};

use crate::config::{Logging, LoggingStyle};

const TARGETS_VAR: &str = "CIVIC_LOGGING_TARGETS";

#[derive(Debug, Error)]
#[error("Failed to initialize tracing")]
pub struct TracingInitError;

pub fn init(config: &Logging) -> Result<(), TracingInitError> {
    let console = console_layer(config.style, std::io::stderr, std::io::stderr().is_terminal())
        .with_filter(make_env_filter(&config.targets));

    let registry = Registry::default().with(console);
    tracing::subscriber::set_global_default(registry)
        .change_context(TracingInitError)
        .attach_printable("already initialized tracing")?;

    if std::env::var("RUST_LOG").is_ok() && std::env::var(TARGETS_VAR).is_ok() {
        warn!("Both `RUST_LOG` and `{TARGETS_VAR}` are set, please pick one of them to determine the logging targets");
    }

    Ok(())
}

/// Routes events through the test harness' captured output.
///
/// Calling this more than once (every test does) is harmless.
pub fn init_for_tests() {
    let targets = std::env::var("RUST_LOG").unwrap_or_default();
    let console = console_layer(LoggingStyle::Full, TestWriter::new, false)
        .with_filter(make_env_filter(&targets));

    let registry = Registry::default().with(console);
    tracing::subscriber::set_global_default(registry).ok();
}

fn console_layer<W>(
    style: LoggingStyle,
    writer: W,
    ansi: bool,
) -> Box<dyn Layer<Registry> + Send + Sync>
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    let layer = tracing_subscriber::fmt::layer()
        .with_ansi(ansi)
        .with_writer(writer);

    match style {
        LoggingStyle::Compact => layer.compact().boxed(),
        LoggingStyle::Full => layer.boxed(),
        LoggingStyle::Pretty => layer.pretty().boxed(),
    }
}

fn make_env_filter(targets: &str) -> EnvFilter {
    let default_level = if cfg!(debug_assertions) {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };

    EnvFilter::builder()
        .with_default_directive(default_level.into())
        .parse_lossy(targets)
}
