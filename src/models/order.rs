//! Order entities and request bodies.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use super::ParseEnumError;
use super::amount::non_negative;

/// Order status, a closed set.
///
/// Decoding any other string fails; there is no fallback variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Placed, awaiting payment
    Pending,
    /// Payment captured
    Paid,
    /// Being prepared
    Processing,
    /// Handed to the carrier
    Shipped,
    /// Received by the customer
    Delivered,
    /// Cancelled before fulfillment
    Cancelled,
    /// Money returned
    Refunded,
}

impl OrderStatus {
    /// Every status, in lifecycle order.
    pub const ALL: [Self; 7] = [
        Self::Pending,
        Self::Paid,
        Self::Processing,
        Self::Shipped,
        Self::Delivered,
        Self::Cancelled,
        Self::Refunded,
    ];

    /// Returns the wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Paid => "paid",
            Self::Processing => "processing",
            Self::Shipped => "shipped",
            Self::Delivered => "delivered",
            Self::Cancelled => "cancelled",
            Self::Refunded => "refunded",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| ParseEnumError {
                kind: "order status",
                value: s.to_string(),
            })
    }
}

/// A shipping or billing address embedded in an [`Order`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    /// Recipient first name
    pub first_name: String,
    /// Recipient last name
    pub last_name: String,
    /// Company name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    /// First address line
    pub address1: String,
    /// Second address line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address2: Option<String>,
    /// City
    pub city: String,
    /// State, province or oblast
    pub region: String,
    /// Postal code
    pub postal_code: String,
    /// Country code
    pub country: String,
    /// Contact phone
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// One line of an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    /// Ordered product
    pub product_id: String,
    /// Ordered variant, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant_id: Option<String>,
    /// SKU at order time
    pub sku: String,
    /// Name at order time
    pub name: String,
    /// Units ordered
    pub quantity: u32,
    /// Unit price
    #[serde(deserialize_with = "non_negative")]
    pub price: f64,
    /// Line total as computed by the marketplace
    pub total_price: f64,
}

/// A customer order.
///
/// Monetary totals are the marketplace's figures and are never recomputed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Server-assigned identifier
    pub id: String,
    /// Human-facing order number
    pub order_number: String,
    /// Current status
    pub status: OrderStatus,
    /// Customer email
    pub customer_email: String,
    /// Customer display name
    pub customer_name: String,
    /// Where the order ships to
    pub shipping_address: Address,
    /// Where the order is billed to
    pub billing_address: Address,
    /// Order lines, in server order
    pub items: Vec<OrderItem>,
    /// Sum of line totals
    pub subtotal: f64,
    /// Shipping charge
    pub shipping_cost: f64,
    /// Tax charged
    pub tax: f64,
    /// Discount applied
    pub discount: f64,
    /// Amount charged
    pub total: f64,
    /// ISO 4217 currency code
    pub currency: String,
    /// Free-form notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Creation time
    pub created_at: DateTime<Utc>,
    /// Last modification time
    pub updated_at: DateTime<Utc>,
}

impl Order {
    /// Total number of units across all lines.
    #[must_use]
    pub fn unit_count(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }
}

/// Query parameters for listing orders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderListParams {
    /// 1-based page number
    pub page: u32,
    /// Page size
    pub limit: u32,
    /// Status filter
    pub status: Option<OrderStatus>,
    /// Only orders created at or after this instant
    pub since: Option<DateTime<Utc>>,
}

impl Default for OrderListParams {
    fn default() -> Self {
        Self {
            page: 1,
            limit: 20,
            status: None,
            since: None,
        }
    }
}

impl OrderListParams {
    /// Creates parameters for the first page of 20.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the page.
    #[must_use]
    pub const fn with_page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    /// Sets the page size.
    #[must_use]
    pub const fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    /// Filters by status.
    #[must_use]
    pub const fn with_status(mut self, status: OrderStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Filters by creation time.
    #[must_use]
    pub const fn with_since(mut self, since: DateTime<Utc>) -> Self {
        self.since = Some(since);
        self
    }

    /// Renders the parameters as query pairs; `since` is RFC 3339.
    #[must_use]
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = vec![
            ("page", self.page.to_string()),
            ("limit", self.limit.to_string()),
        ];
        if let Some(status) = self.status {
            query.push(("status", status.as_str().to_string()));
        }
        if let Some(since) = self.since {
            query.push(("since", since.to_rfc3339_opts(SecondsFormat::Secs, true)));
        }
        query
    }
}

/// One entry of a fulfillment request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FulfillmentItem {
    /// Order line identifier
    pub item_id: String,
    /// Units being fulfilled
    pub quantity: u32,
}

impl FulfillmentItem {
    /// Creates a fulfillment entry.
    #[must_use]
    pub fn new(item_id: impl Into<String>, quantity: u32) -> Self {
        Self {
            item_id: item_id.into(),
            quantity,
        }
    }
}
