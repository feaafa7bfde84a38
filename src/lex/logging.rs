//! Logging setup
//!
//! Library code logs through `tracing` macros only. The binary installs a subscriber here:
//! a `fmt` layer on stderr (stdout carries the diagnostic trace) filtered by the level from
//! [LoggingConfig](crate::lex::config::LoggingConfig).

use crate::lex::config::{LogFormat, LogLevel, LoggingConfig};
use std::io;
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer, Registry};

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::OFF,
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }
}

/// Install the global subscriber
///
/// Returns `false` if a subscriber was already installed (the existing one is kept).
pub fn init(config: &LoggingConfig) -> bool {
    let targets = Targets::new().with_default(LevelFilter::from(config.level));
    let layer = format_layer(config.format).with_filter(targets);
    tracing_subscriber::registry().with(layer).try_init().is_ok()
}

fn format_layer(format: LogFormat) -> Box<dyn Layer<Registry> + Send + Sync> {
    match format {
        LogFormat::Compact => fmt::layer()
            .compact()
            .with_target(false)
            .without_time()
            .with_writer(io::stderr)
            .boxed(),
        LogFormat::Pretty => fmt::layer()
            .pretty()
            .with_target(true)
            .with_writer(io::stderr)
            .boxed(),
        LogFormat::Json => fmt::layer()
            .json()
            .with_target(true)
            .with_writer(io::stderr)
            .boxed(),
    }
}
