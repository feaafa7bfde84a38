//! Configuration loading
//!
//! `defaults/lexcheck.default.toml` is embedded so the documented defaults and the runtime
//! behavior cannot drift. Callers apply single overrides on top through [Loader] before
//! deserializing into [Config]. The binary takes no options and runs on the defaults.
//!
//! Only ambient behavior is configurable. The listing separator and the failure marker are
//! fixed constants in [validation](crate::lex::validation) and have no keys here.

use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;

const DEFAULT_TOML: &str = include_str!("../../defaults/lexcheck.default.toml");

/// Top-level configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub trace: TraceConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TraceConfig {
    pub enabled: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: LogLevel,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Compact,
    Pretty,
    Json,
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = config::Config::builder()
            .add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Apply a single key/value override.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<Config, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<Config, ConfigError> {
    Loader::new().build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_default_config() {
        let config = load_defaults().expect("defaults to deserialize");
        assert!(config.trace.enabled);
        assert_eq!(config.logging.level, LogLevel::Warn);
        assert_eq!(config.logging.format, LogFormat::Compact);
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("trace.enabled", false)
            .expect("override to apply")
            .set_override("logging.level", "debug")
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert!(!config.trace.enabled);
        assert_eq!(config.logging.level, LogLevel::Debug);
    }

    #[test]
    fn output_keys_are_not_configurable() {
        let config = Loader::new()
            .set_override("output.failure_marker", "")
            .expect("override to apply")
            .build()
            .expect("unknown keys are ignored");
        assert!(config.trace.enabled);
    }

    #[test]
    fn rejects_unknown_level() {
        let result = Loader::new()
            .set_override("logging.level", "loud")
            .unwrap()
            .build();
        assert!(result.is_err());
    }
}
