//! Configuration layer for the `shop` command-line tool.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`], [`Command`])
//! - TOML configuration file parsing ([`TomlConfig`])
//! - Validated configuration ([`ValidatedConfig`])
//! - Configuration file generation ([`write_default_config`])
//! - Default values ([`defaults`])
//!
//! # Priority
//!
//! Configuration values are resolved with the following priority (highest to lowest):
//!
//! 1. **Explicit CLI arguments** - Values explicitly passed via command line
//! 2. **Environment** - `SHOP_API_KEY` for the API key
//! 3. **TOML config file** - `--config PATH`, else `<config dir>/shop/config.toml` if present
//! 4. **Built-in defaults** - Hardcoded default values
//!
//! The API key has no default and must come from one of the first three sources.
//!
//! # CLI-Only vs TOML-Only Options
//!
//! Some retry policy options are TOML-only (not available via CLI):
//! - `retry.backoff_factor` (default: 0.5s) - Delay before the first retry
//! - `retry.max_delay` (default: 120s) - Maximum retry delay

mod cli;
pub mod defaults;
mod error;
mod toml;
mod validated;

#[cfg(test)]
mod cli_tests;
#[cfg(test)]
mod toml_tests;

pub use cli::{
    API_KEY_ENV, CategoriesCommand, Cli, Command, OrdersCommand, ProductsCommand,
    WEBHOOK_SECRET_ENV, WebhooksCommand,
};
pub use error::{ConfigError, field};
pub use toml::{TomlConfig, default_config_template};
pub use validated::{ValidatedConfig, init_path, write_default_config};
