//! Default values for configuration options.
//!
//! Centralized constants to avoid magic numbers scattered across the codebase.

use std::path::PathBuf;
use std::time::Duration;

/// Default API root.
pub const BASE_URL: &str = crate::api::DEFAULT_BASE_URL;

/// Default per-request timeout in seconds.
pub const TIMEOUT_SECS: u64 = 30;

/// Default maximum number of retries.
pub const MAX_RETRIES: u32 = 3;

/// Default delay before the first retry, in seconds.
pub const BACKOFF_FACTOR_SECS: f64 = 0.5;

/// Default maximum retry delay in seconds.
pub const MAX_DELAY_SECS: u64 = 120;

/// Directory under the user config directory holding `config.toml`.
pub const CONFIG_DIR_NAME: &str = "shop";

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Default maximum retry delay as Duration.
#[must_use]
pub const fn max_delay() -> Duration {
    Duration::from_secs(MAX_DELAY_SECS)
}

/// Default configuration file location, `<config dir>/shop/config.toml`.
///
/// Returns `None` when the platform has no user config directory.
#[must_use]
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}
