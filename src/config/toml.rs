//! TOML configuration file parsing.
//!
//! Defines the structure of the configuration file with serde.

use std::path::Path;

use serde::Deserialize;

use super::ConfigError;

/// Root configuration structure from TOML file.
///
/// All fields are optional to allow partial configuration
/// that can be merged with CLI arguments.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    /// API access section
    #[serde(default)]
    pub api: ApiSection,

    /// Retry policy configuration
    #[serde(default)]
    pub retry: RetrySection,
}

/// API access section.
#[derive(Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ApiSection {
    /// API key
    pub key: Option<String>,

    /// API root URL
    pub base_url: Option<String>,

    /// Per-request timeout in seconds
    pub timeout: Option<u64>,
}

impl std::fmt::Debug for ApiSection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiSection")
            .field("key", &self.key.as_ref().map(|_| "[redacted]"))
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Retry policy configuration section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RetrySection {
    /// Maximum number of retries
    pub max_retries: Option<u32>,

    /// Delay before the first retry in seconds; doubles on each retry
    pub backoff_factor: Option<f64>,

    /// Maximum retry delay in seconds
    pub max_delay: Option<u64>,
}

impl TomlConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }
}

/// Generates a default configuration file with comments.
#[must_use]
pub fn default_config_template() -> String {
    r#"# Shop CLI Configuration File

[api]
# API key (required unless passed via --api-key or SHOP_API_KEY)
# key = "sk_live_..."

# API root URL (default: https://api.shop.com/v1)
# base_url = "https://api.shop.com/v1"

# Per-request timeout in seconds (default: 30)
# timeout = 30

[retry]
# Maximum number of retries for 429/5xx responses and network errors (default: 3)
# max_retries = 3

# Delay before the first retry in seconds; doubles on each retry (default: 0.5)
# backoff_factor = 0.5

# Maximum retry delay in seconds (default: 120)
# max_delay = 120
"#
    .to_string()
}
