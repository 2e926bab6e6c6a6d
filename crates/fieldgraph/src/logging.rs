//! Tracing setup.
//!
//! Pretty output for development, JSON for production, compact for
//! terminals that want one line per event.

use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

///
/// LoggingError
///

#[derive(Debug, ThisError)]
#[remain::sorted]
pub enum LoggingError {
    #[error("invalid log filter: {0}")]
    Filter(#[from] tracing_subscriber::filter::ParseError),

    #[error("global subscriber already set: {0}")]
    Install(#[from] tracing::subscriber::SetGlobalDefaultError),
}

///
/// LogLevel
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => Self::TRACE,
            LogLevel::Debug => Self::DEBUG,
            LogLevel::Info => Self::INFO,
            LogLevel::Warn => Self::WARN,
            LogLevel::Error => Self::ERROR,
        }
    }
}

///
/// LogFormat
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
    Compact,
}

///
/// LogConfig
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: LogLevel,
    pub format: LogFormat,

    /// Full `EnvFilter` directive; overrides `level` when set
    /// (e.g. `"fieldgraph=debug,fieldgraph_schema=warn"`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
}

impl LogConfig {
    /// Filter directive this config resolves to.
    #[must_use]
    pub fn directive(&self) -> String {
        self.filter.clone().unwrap_or_else(|| {
            let level = self.level.as_str();
            format!("fieldgraph={level},fieldgraph_schema={level}")
        })
    }
}

/// Install the global subscriber. Call once, at start-up.
pub fn init(config: &LogConfig) -> Result<(), LoggingError> {
    let filter = EnvFilter::try_new(config.directive())?;
    let registry = tracing_subscriber::registry().with(filter);

    match config.format {
        LogFormat::Json => {
            tracing::subscriber::set_global_default(registry.with(fmt::layer().json()))?;
        }
        LogFormat::Pretty => {
            tracing::subscriber::set_global_default(registry.with(fmt::layer().pretty()))?;
        }
        LogFormat::Compact => {
            tracing::subscriber::set_global_default(registry.with(fmt::layer().compact()))?;
        }
    }

    tracing::debug!(format = ?config.format, directive = %config.directive(), "logging initialised");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directive_defaults_to_crate_levels() {
        let config = LogConfig {
            level: LogLevel::Debug,
            ..LogConfig::default()
        };

        assert_eq!(config.directive(), "fieldgraph=debug,fieldgraph_schema=debug");
    }

    #[test]
    fn explicit_filter_wins() {
        let config = LogConfig {
            filter: Some("warn".to_string()),
            ..LogConfig::default()
        };

        assert_eq!(config.directive(), "warn");
    }

    #[test]
    fn bad_filter_is_rejected_before_install() {
        let config = LogConfig {
            filter: Some("fieldgraph=loud".to_string()),
            ..LogConfig::default()
        };

        assert!(matches!(init(&config), Err(LoggingError::Filter(_))));
    }

    #[test]
    fn level_maps_to_tracing() {
        assert_eq!(tracing::Level::from(LogLevel::Warn), tracing::Level::WARN);
    }
}
