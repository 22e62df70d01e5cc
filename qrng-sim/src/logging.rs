//! `tracing` subscriber setup for binaries and tests that use the services
//!
//! The library only emits events; installing a subscriber is left to the
//! embedding process through [`init_logging`] or [`try_init_logging`].

use std::env;
use thiserror::Error;
use tracing::Subscriber;
use tracing_subscriber::EnvFilter;

/// Output format for the formatter layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogOutput {
    /// Multi-line human-readable output
    Pretty,
    /// Single-line output
    Compact,
    /// Newline-delimited JSON
    Json,
}

impl LogOutput {
    fn from_env_value(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "pretty" => Some(LogOutput::Pretty),
            "compact" => Some(LogOutput::Compact),
            "json" => Some(LogOutput::Json),
            _ => None,
        }
    }
}

/// Configuration describing how the tracing subscriber should behave
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Filter directives (e.g. `qrng_sim=debug,info`). When absent, `RUST_LOG`
    /// is consulted, then [`LoggingConfig::default_directive`].
    pub directives: Option<String>,
    /// Fallback directive
    pub default_directive: String,
    /// Whether event targets (module paths) appear in output
    pub include_targets: bool,
    /// ANSI colour codes
    pub ansi: bool,
    /// Output format
    pub output: LogOutput,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            directives: None,
            default_directive: "info".to_string(),
            include_targets: true,
            ansi: true,
            output: LogOutput::Compact,
        }
    }
}

impl LoggingConfig {
    /// Build a configuration using environment hints.
    ///
    /// # Environment Variables
    ///
    /// - `QRNG_LOG` - Filter directives
    /// - `QRNG_LOG_FORMAT` - `pretty`, `compact` or `json` (json disables ANSI)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(directives) = lookup("QRNG_LOG") {
            if !directives.trim().is_empty() {
                config.directives = Some(directives);
            }
        }

        if let Some(format) = lookup("QRNG_LOG_FORMAT") {
            if let Some(output) = LogOutput::from_env_value(&format) {
                config.output = output;
                if output == LogOutput::Json {
                    config.ansi = false;
                }
            }
        }

        config
    }

    /// Set explicit filter directives
    pub fn with_directives(mut self, directives: impl Into<String>) -> Self {
        self.directives = Some(directives.into());
        self
    }

    /// Set the output format
    pub fn with_output(mut self, output: LogOutput) -> Self {
        self.output = output;
        self
    }

    fn resolve_filter(&self) -> Result<EnvFilter, LoggingError> {
        match &self.directives {
            Some(directives) => EnvFilter::try_new(directives)
                .map_err(|err| LoggingError::InvalidFilter(err.to_string())),
            None => Ok(EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&self.default_directive))),
        }
    }
}

/// Errors surfaced when configuring the subscriber fails
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoggingError {
    /// The directive string could not be parsed
    #[error("invalid tracing directive: {0}")]
    InvalidFilter(String),

    /// A global subscriber is already installed
    #[error("failed to install global tracing subscriber: {0}")]
    SubscriberInit(String),
}

/// Build a subscriber from the configuration without installing it
pub fn build_subscriber(
    config: &LoggingConfig,
) -> Result<Box<dyn Subscriber + Send + Sync>, LoggingError> {
    let filter = config.resolve_filter()?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(config.include_targets)
        .with_ansi(config.ansi);

    let subscriber: Box<dyn Subscriber + Send + Sync> = match config.output {
        LogOutput::Pretty => Box::new(builder.pretty().finish()),
        LogOutput::Compact => Box::new(builder.compact().finish()),
        LogOutput::Json => Box::new(builder.json().finish()),
    };
    Ok(subscriber)
}

/// Install the global subscriber, failing if one is already set
pub fn try_init_logging(config: &LoggingConfig) -> Result<(), LoggingError> {
    let subscriber = build_subscriber(config)?;
    tracing::subscriber::set_global_default(subscriber)
        .map_err(|err| LoggingError::SubscriberInit(err.to_string()))
}

/// Install the global subscriber from environment hints, ignoring the
/// error when a subscriber is already present
pub fn init_logging() {
    if let Err(err) = try_init_logging(&LoggingConfig::from_env()) {
        eprintln!("{err}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_from_lookup() {
        let vars: HashMap<&str, &str> =
            [("QRNG_LOG", "qrng_sim=debug"), ("QRNG_LOG_FORMAT", "JSON")]
                .into_iter()
                .collect();

        let config = LoggingConfig::from_lookup(|key| vars.get(key).map(|v| v.to_string()));
        assert_eq!(config.directives.as_deref(), Some("qrng_sim=debug"));
        assert_eq!(config.output, LogOutput::Json);
        assert!(!config.ansi);
    }

    #[test]
    fn test_unknown_format_keeps_default() {
        let config = LoggingConfig::from_lookup(|key| {
            (key == "QRNG_LOG_FORMAT").then(|| "xml".to_string())
        });
        assert_eq!(config.output, LogOutput::Compact);
        assert!(config.ansi);
    }

    #[test]
    fn test_build_each_format() {
        for output in [LogOutput::Pretty, LogOutput::Compact, LogOutput::Json] {
            let config = LoggingConfig::default()
                .with_directives("qrng_sim=trace")
                .with_output(output);
            assert!(build_subscriber(&config).is_ok());
        }
    }

    #[test]
    fn test_invalid_directive() {
        let config = LoggingConfig::default().with_directives("qrng_sim=loudest");
        assert!(matches!(
            build_subscriber(&config),
            Err(LoggingError::InvalidFilter(_))
        ));
    }
}
