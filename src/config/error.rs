//! Errors raised while assembling the client configuration.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for loading, validating and writing configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file exists but could not be read.
    #[error("Failed to read config file '{}': {source}", path.display())]
    FileRead {
        /// Path that was read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML or has unknown keys.
    #[error("Failed to parse TOML config: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// `shop init` could not write the template.
    #[error("Failed to write config file '{}': {source}", path.display())]
    FileWrite {
        /// Destination path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// No `--output` was given and the platform has no config directory.
    #[error("Cannot determine the user config directory; pass --output")]
    NoConfigDir,

    /// A value with no default was not supplied anywhere.
    #[error("Missing required field: {field}. {hint}")]
    MissingRequired {
        /// Name of the missing field
        field: &'static str,
        /// How the user can supply it
        hint: &'static str,
    },

    /// The API root is not an absolute http(s) URL.
    #[error("Invalid base URL '{url}': {reason}")]
    InvalidBaseUrl {
        /// The rejected value
        url: String,
        /// Why it was rejected
        reason: String,
    },

    /// The per-call timeout is zero.
    #[error("Invalid duration for {field}: {reason}")]
    InvalidDuration {
        /// Name of the field
        field: &'static str,
        /// Why it was rejected
        reason: String,
    },

    /// A `[retry]` value is out of range.
    #[error("Invalid retry setting {field}: {reason}")]
    InvalidRetry {
        /// Name of the field
        field: &'static str,
        /// Why it was rejected
        reason: String,
    },
}

/// Names of fields reported by [`ConfigError::MissingRequired`].
pub mod field {
    /// The API key.
    pub const API_KEY: &str = "api_key";
}

impl ConfigError {
    /// Creates a `MissingRequired` error.
    #[must_use]
    pub const fn missing(field: &'static str, hint: &'static str) -> Self {
        Self::MissingRequired { field, hint }
    }

    fn retry(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidRetry {
            field,
            reason: reason.into(),
        }
    }

    pub(crate) fn backoff_factor(reason: impl Into<String>) -> Self {
        Self::retry("backoff_factor", reason)
    }

    pub(crate) fn max_delay(reason: impl Into<String>) -> Self {
        Self::retry("max_delay", reason)
    }
}
