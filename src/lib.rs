//! Shop SDK: client for the Shop marketplace REST API.
//!
//! A library for managing products, orders, webhooks and categories,
//! with automatic retries of transient failures and typed errors.
//!
//! ```no_run
//! use shop_sdk::ShopClient;
//!
//! # async fn example() -> Result<(), shop_sdk::ShopError> {
//! let client = ShopClient::new("sk_live_...");
//! let order = client.orders().get("o_1").await?;
//! println!("{} is {}", order.order_number, order.status);
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod client;
pub mod config;
pub mod models;
pub mod resources;
pub mod signature;
pub mod time;
pub mod transport;

#[cfg(test)]
mod test_fixtures;

pub use api::{ApiError, ShopError};
pub use client::ShopClient;
pub use signature::verify_signature;
