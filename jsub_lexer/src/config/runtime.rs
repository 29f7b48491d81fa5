// RUNTIME PREFERENCES (User Experience)
//
// Defaults are fixed so library callers always get the same scanner. The CLI
// layers a TOML file and then JSUB_* environment variables on top.

use crate::logging::events::LogLevel;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read configuration file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

impl ConfigError {
    pub fn error_code(&self) -> crate::logging::Code {
        match self {
            ConfigError::Read { .. } => crate::logging::codes::config::CONFIG_READ_ERROR,
            ConfigError::Parse(_) => crate::logging::codes::config::CONFIG_PARSE_ERROR,
        }
    }
}

fn flag_from(lookup: &impl Fn(&str) -> Option<String>, name: &str, current: bool) -> bool {
    lookup(name)
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(current)
}

/// Scanner switches; every field is off by default
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LexicalPreferences {
    /// Emit closed comments as Comment tokens instead of discarding them
    pub retain_comments: bool,

    /// Whether to track operator usage patterns in metrics
    pub track_operator_patterns: bool,

    /// Whether to log string length statistics
    pub log_string_statistics: bool,
}

impl LexicalPreferences {
    /// Override fields whose variable is set to `true` or `false`
    fn overlay(self, lookup: &impl Fn(&str) -> Option<String>) -> Self {
        Self {
            retain_comments: flag_from(
                lookup,
                env_vars::LEXICAL_RETAIN_COMMENTS,
                self.retain_comments,
            ),
            track_operator_patterns: flag_from(
                lookup,
                env_vars::LEXICAL_TRACK_OPERATORS,
                self.track_operator_patterns,
            ),
            log_string_statistics: flag_from(
                lookup,
                env_vars::LEXICAL_LOG_STRING_STATS,
                self.log_string_statistics,
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingPreferences {
    /// Emit JSON lines instead of human readable log output
    pub use_structured_logging: bool,

    pub min_log_level: LogLevel,
}

impl Default for LoggingPreferences {
    fn default() -> Self {
        Self {
            use_structured_logging: false,
            min_log_level: LogLevel::Warning,
        }
    }
}

impl LoggingPreferences {
    fn overlay(self, lookup: &impl Fn(&str) -> Option<String>) -> Self {
        Self {
            use_structured_logging: flag_from(
                lookup,
                env_vars::LOGGING_USE_STRUCTURED,
                self.use_structured_logging,
            ),
            min_log_level: lookup(env_vars::LOGGING_MIN_LEVEL)
                .and_then(|v| LogLevel::parse(&v))
                .unwrap_or(self.min_log_level),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    pub lexical: LexicalPreferences,
    pub logging: LoggingPreferences,
}

impl RuntimeConfig {
    /// Parse a TOML document; absent sections and fields keep their defaults
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Apply JSUB_* environment variables on top of this configuration.
    ///
    /// Unset or unparsable variables leave the field as it was.
    pub fn with_env_overrides(self) -> Self {
        self.overlay(&|name: &str| env::var(name).ok())
    }

    fn overlay(self, lookup: &impl Fn(&str) -> Option<String>) -> Self {
        Self {
            lexical: self.lexical.overlay(lookup),
            logging: self.logging.overlay(lookup),
        }
    }
}

/// Environment variable names for configuration
pub mod env_vars {
    // Lexical
    pub const LEXICAL_RETAIN_COMMENTS: &str = "JSUB_LEXICAL_RETAIN_COMMENTS";
    pub const LEXICAL_TRACK_OPERATORS: &str = "JSUB_LEXICAL_TRACK_OPERATORS";
    pub const LEXICAL_LOG_STRING_STATS: &str = "JSUB_LEXICAL_LOG_STRING_STATS";

    // Logging
    pub const LOGGING_USE_STRUCTURED: &str = "JSUB_LOGGING_USE_STRUCTURED";
    pub const LOGGING_MIN_LEVEL: &str = "JSUB_LOGGING_MIN_LEVEL";
}
