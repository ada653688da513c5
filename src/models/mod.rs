//! Typed domain entities and request bodies.
//!
//! Entities are immutable snapshots of remote state decoded from JSON with
//! serde. Decoding is strict:
//! - closed enumerations ([`OrderStatus`], [`WebhookEvent`]) reject unknown strings;
//! - prices must be non-negative and inventory counts unsigned;
//! - nested objects (addresses, order items, variants) are decoded into their
//!   own types.
//!
//! Request-side types ([`NewProduct`], [`ProductUpdate`], ...) omit absent
//! optional fields from the serialized body instead of sending `null`.

mod amount;
mod category;
mod order;
mod pagination;
mod product;
mod webhook;


use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

use crate::api::ShopError;

pub use category::Category;
pub use order::{Address, FulfillmentItem, Order, OrderItem, OrderListParams, OrderStatus};
pub use pagination::PaginatedList;
pub use product::{
    InventoryUpdate, NewProduct, Product, ProductListParams, ProductUpdate, ProductVariant,
};
pub use webhook::{Webhook, WebhookEvent, WebhookUpdate};

/// Decodes a JSON value into an entity.
///
/// # Errors
///
/// Returns [`ShopError::Decode`] naming the target type when the value does
/// not match its schema.
pub fn decode<T: DeserializeOwned>(value: Value) -> Result<T, ShopError> {
    serde_json::from_value(value).map_err(|source| ShopError::Decode {
        target: std::any::type_name::<T>(),
        source,
    })
}

/// Error returned when parsing a closed enumeration from a string fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{value}'")]
pub struct ParseEnumError {
    /// Name of the enumeration
    pub kind: &'static str,
    /// The rejected input
    pub value: String,
}
