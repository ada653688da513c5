//! CLI argument parsing using clap.
//!
//! Defines the command-line interface with all options and subcommands.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};

use crate::models::{OrderListParams, OrderStatus, ProductListParams};

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "SHOP_API_KEY";

/// Environment variable holding the webhook signing secret.
pub const WEBHOOK_SECRET_ENV: &str = "SHOP_WEBHOOK_SECRET";

/// shop: command-line client for the Shop marketplace API
///
/// Reads products, orders, webhooks and categories and prints them as JSON.
/// Also verifies webhook signatures offline.
#[derive(Debug, Parser)]
#[command(name = "shop")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,

    /// Path to configuration file
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    /// API key (overrides the config file)
    #[arg(long = "api-key", env = API_KEY_ENV, hide_env_values = true, global = true)]
    pub api_key: Option<String>,

    /// API root URL
    #[arg(long = "base-url", global = true)]
    pub base_url: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Maximum number of retries for transient failures
    #[arg(long = "max-retries", global = true)]
    pub max_retries: Option<u32>,

    /// Enable verbose logging
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

/// Subcommands for shop
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a default configuration file
    Init {
        /// Output path for the configuration file (default: user config directory)
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Product catalog
    Products {
        #[command(subcommand)]
        action: ProductsCommand,
    },

    /// Orders
    Orders {
        #[command(subcommand)]
        action: OrdersCommand,
    },

    /// Webhook subscriptions
    Webhooks {
        #[command(subcommand)]
        action: WebhooksCommand,
    },

    /// Catalog categories
    Categories {
        #[command(subcommand)]
        action: CategoriesCommand,
    },

    /// Check a webhook signature against a payload
    VerifySignature {
        /// Webhook signing secret
        #[arg(long, env = WEBHOOK_SECRET_ENV, hide_env_values = true)]
        secret: String,

        /// Signature received with the delivery (lowercase hex)
        #[arg(long)]
        signature: String,

        /// File holding the raw payload (default: read stdin)
        #[arg(long = "payload-file")]
        payload_file: Option<PathBuf>,
    },
}

/// `shop products ...`
#[derive(Debug, Subcommand)]
pub enum ProductsCommand {
    /// List one page of products
    List {
        /// Page number (1-based)
        #[arg(long, default_value_t = 1)]
        page: u32,

        /// Page size
        #[arg(long, default_value_t = 20)]
        limit: u32,

        /// Only products in this category
        #[arg(long = "category-id")]
        category_id: Option<String>,

        /// Only products with this status
        #[arg(long)]
        status: Option<String>,

        /// Free-text search
        #[arg(long)]
        search: Option<String>,
    },

    /// Show one product
    Get {
        /// Product id
        id: String,
    },
}

/// `shop orders ...`
#[derive(Debug, Subcommand)]
pub enum OrdersCommand {
    /// List one page of orders
    List {
        /// Page number (1-based)
        #[arg(long, default_value_t = 1)]
        page: u32,

        /// Page size
        #[arg(long, default_value_t = 20)]
        limit: u32,

        /// Only orders with this status
        #[arg(long)]
        status: Option<OrderStatus>,

        /// Only orders created at or after this RFC 3339 instant
        #[arg(long)]
        since: Option<DateTime<Utc>>,
    },

    /// Show one order
    Get {
        /// Order id
        id: String,
    },
}

/// `shop webhooks ...`
#[derive(Debug, Subcommand)]
pub enum WebhooksCommand {
    /// List webhook subscriptions
    List,
}

/// `shop categories ...`
#[derive(Debug, Subcommand)]
pub enum CategoriesCommand {
    /// List all categories
    List,

    /// Show one category
    Get {
        /// Category id
        id: String,
    },
}

impl ProductsCommand {
    /// Query parameters for `list`; `None` for other actions.
    #[must_use]
    pub fn list_params(&self) -> Option<ProductListParams> {
        let Self::List {
            page,
            limit,
            category_id,
            status,
            search,
        } = self
        else {
            return None;
        };

        let mut params = ProductListParams::new().with_page(*page).with_limit(*limit);
        params.category_id.clone_from(category_id);
        params.status.clone_from(status);
        params.search.clone_from(search);
        Some(params)
    }
}

impl OrdersCommand {
    /// Query parameters for `list`; `None` for other actions.
    #[must_use]
    pub fn list_params(&self) -> Option<OrderListParams> {
        let Self::List {
            page,
            limit,
            status,
            since,
        } = self
        else {
            return None;
        };

        let mut params = OrderListParams::new().with_page(*page).with_limit(*limit);
        params.status = *status;
        params.since = *since;
        Some(params)
    }
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }
}
