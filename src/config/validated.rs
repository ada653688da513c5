//! Validated configuration after merging CLI, environment and TOML sources.
//!
//! This module contains the final, validated configuration that is used
//! by the application. All validation is performed during construction.

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use url::Url;

use crate::ShopClient;
use crate::transport::RetryPolicy;

use super::cli::Cli;
use super::defaults;
use super::error::{ConfigError, field};
use super::toml::TomlConfig;

/// Fully validated configuration ready for use by the application.
///
/// # Construction
///
/// Use [`ValidatedConfig::from_raw`] to create from CLI args and optional TOML config.
/// The function validates all inputs and returns errors for invalid configurations.
#[derive(Debug)]
pub struct ValidatedConfig {
    /// API key (required)
    pub api_key: SecretString,

    /// API root URL
    pub base_url: Url,

    /// Per-request timeout
    pub timeout: Duration,

    /// Retry policy for transient failures
    pub retry_policy: RetryPolicy,

    /// Verbose logging enabled
    pub verbose: bool,
}

impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Config {{ base_url: {}, api_key: [redacted], timeout: {}s, \
             retry: {}x/{}s (max {}s) }}",
            self.base_url,
            self.timeout.as_secs(),
            self.retry_policy.max_retries,
            self.retry_policy.backoff_factor.as_secs_f64(),
            self.retry_policy.max_delay.as_secs(),
        )
    }
}

impl ValidatedConfig {
    /// Creates a validated configuration from CLI arguments and optional TOML config.
    ///
    /// CLI arguments (including `SHOP_API_KEY`, which clap folds into
    /// `--api-key`) take precedence over TOML config values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The API key is missing or blank
    /// - The base URL is not an absolute http(s) URL
    /// - The timeout is zero
    /// - The backoff factor is negative or not finite
    /// - The maximum delay is shorter than the backoff factor
    pub fn from_raw(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Self, ConfigError> {
        let api_key = Self::resolve_api_key(cli, toml)?;
        let base_url = Self::resolve_base_url(cli, toml)?;
        let timeout = Self::resolve_timeout(cli, toml)?;
        let retry_policy = Self::build_retry_policy(cli, toml)?;

        Ok(Self {
            api_key,
            base_url,
            timeout,
            retry_policy,
            verbose: cli.verbose,
        })
    }

    /// Loads and merges configuration from CLI and the config file.
    ///
    /// Reads `cli.config` if set. Otherwise reads the default config file
    /// if it exists; a missing default file is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file cannot be read or parsed
    /// - The merged configuration is invalid
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let path = cli
            .config
            .clone()
            .or_else(|| defaults::config_path().filter(|p| p.is_file()));

        let toml = match path {
            Some(path) => {
                tracing::debug!("Loading config file {}", path.display());
                Some(TomlConfig::load(&path)?)
            }
            None => None,
        };

        Self::from_raw(cli, toml.as_ref())
    }

    /// Builds an SDK client from this configuration.
    #[must_use]
    pub fn client(&self) -> ShopClient {
        ShopClient::new(self.api_key.expose_secret())
            .with_base_url(self.base_url.as_str())
            .with_timeout(self.timeout)
            .with_retry_policy(self.retry_policy.clone())
    }

    fn resolve_api_key(cli: &Cli, toml: Option<&TomlConfig>) -> Result<SecretString, ConfigError> {
        // Blank values count as absent so an empty SHOP_API_KEY falls through
        cli.api_key
            .as_deref()
            .filter(|k| !k.trim().is_empty())
            .or_else(|| {
                toml.and_then(|t| t.api.key.as_deref())
                    .filter(|k| !k.trim().is_empty())
            })
            .map(|k| SecretString::from(k.trim().to_string()))
            .ok_or_else(|| {
                ConfigError::missing(
                    field::API_KEY,
                    "Use --api-key, set SHOP_API_KEY, or set api.key in config file",
                )
            })
    }

    fn resolve_base_url(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Url, ConfigError> {
        // Priority: CLI explicit > TOML > default
        let url_str = cli
            .base_url
            .as_deref()
            .or_else(|| toml.and_then(|t| t.api.base_url.as_deref()))
            .unwrap_or(defaults::BASE_URL);

        let url = Url::parse(url_str).map_err(|e| ConfigError::InvalidBaseUrl {
            url: url_str.to_string(),
            reason: e.to_string(),
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidBaseUrl {
                url: url_str.to_string(),
                reason: format!("unsupported scheme '{}'", url.scheme()),
            });
        }

        Ok(url)
    }

    fn resolve_timeout(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Duration, ConfigError> {
        // Priority: CLI explicit > TOML > default
        let seconds = cli
            .timeout
            .or_else(|| toml.and_then(|t| t.api.timeout))
            .unwrap_or(defaults::TIMEOUT_SECS);

        if seconds == 0 {
            return Err(ConfigError::InvalidDuration {
                field: "timeout",
                reason: "must be greater than 0".to_string(),
            });
        }

        Ok(Duration::from_secs(seconds))
    }

    fn build_retry_policy(
        cli: &Cli,
        toml: Option<&TomlConfig>,
    ) -> Result<RetryPolicy, ConfigError> {
        let retry = toml.map(|t| &t.retry);

        // Priority: CLI explicit > TOML > default
        let max_retries = cli
            .max_retries
            .or_else(|| retry.and_then(|r| r.max_retries))
            .unwrap_or(defaults::MAX_RETRIES);

        let backoff_secs = retry
            .and_then(|r| r.backoff_factor)
            .unwrap_or(defaults::BACKOFF_FACTOR_SECS);

        let max_delay = retry
            .and_then(|r| r.max_delay)
            .map_or_else(defaults::max_delay, Duration::from_secs);

        if !backoff_secs.is_finite() || backoff_secs < 0.0 {
            return Err(ConfigError::backoff_factor(
                "must be a non-negative finite number",
            ));
        }

        let backoff_factor = Duration::try_from_secs_f64(backoff_secs)
            .map_err(|e| ConfigError::backoff_factor(e.to_string()))?;

        if max_delay < backoff_factor {
            return Err(ConfigError::max_delay(format!(
                "{}s is shorter than backoff_factor ({backoff_secs}s)",
                max_delay.as_secs()
            )));
        }

        Ok(RetryPolicy::new()
            .with_max_retries(max_retries)
            .with_backoff_factor(backoff_factor)
            .with_max_delay(max_delay))
    }
}

/// Writes the default configuration template to a file.
///
/// Missing parent directories are created.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let write_err = |source| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(write_err)?;
    }

    let template = super::toml::default_config_template();
    std::fs::write(path, template).map_err(write_err)
}

/// Resolves where `shop init` writes the template.
///
/// # Errors
///
/// Returns [`ConfigError::NoConfigDir`] if no path was given and the
/// platform has no user config directory.
pub fn init_path(output: Option<&Path>) -> Result<PathBuf, ConfigError> {
    output
        .map(Path::to_path_buf)
        .or_else(defaults::config_path)
        .ok_or(ConfigError::NoConfigDir)
}
