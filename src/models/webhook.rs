//! Webhook subscription entities.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ParseEnumError;

/// Event a webhook can subscribe to, a closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WebhookEvent {
    /// `order.created`
    #[serde(rename = "order.created")]
    OrderCreated,
    /// `order.paid`
    #[serde(rename = "order.paid")]
    OrderPaid,
    /// `order.shipped`
    #[serde(rename = "order.shipped")]
    OrderShipped,
    /// `order.delivered`
    #[serde(rename = "order.delivered")]
    OrderDelivered,
    /// `order.cancelled`
    #[serde(rename = "order.cancelled")]
    OrderCancelled,
    /// `product.created`
    #[serde(rename = "product.created")]
    ProductCreated,
    /// `product.updated`
    #[serde(rename = "product.updated")]
    ProductUpdated,
    /// `product.deleted`
    #[serde(rename = "product.deleted")]
    ProductDeleted,
    /// `inventory.low`
    #[serde(rename = "inventory.low")]
    InventoryLow,
}

impl WebhookEvent {
    /// Every event.
    pub const ALL: [Self; 9] = [
        Self::OrderCreated,
        Self::OrderPaid,
        Self::OrderShipped,
        Self::OrderDelivered,
        Self::OrderCancelled,
        Self::ProductCreated,
        Self::ProductUpdated,
        Self::ProductDeleted,
        Self::InventoryLow,
    ];

    /// Returns the wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OrderCreated => "order.created",
            Self::OrderPaid => "order.paid",
            Self::OrderShipped => "order.shipped",
            Self::OrderDelivered => "order.delivered",
            Self::OrderCancelled => "order.cancelled",
            Self::ProductCreated => "product.created",
            Self::ProductUpdated => "product.updated",
            Self::ProductDeleted => "product.deleted",
            Self::InventoryLow => "inventory.low",
        }
    }
}

impl fmt::Display for WebhookEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WebhookEvent {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|event| event.as_str() == s)
            .ok_or_else(|| ParseEnumError {
                kind: "webhook event",
                value: s.to_string(),
            })
    }
}

/// A webhook subscription.
///
/// `events` holds the names as the marketplace reports them, so a
/// subscription to an event this SDK does not know yet still decodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Webhook {
    /// Server-assigned identifier
    pub id: String,
    /// Delivery URL
    pub url: String,
    /// Subscribed event names
    pub events: Vec<String>,
    /// Whether deliveries are enabled
    pub active: bool,
    /// Creation time
    pub created_at: DateTime<Utc>,
    /// Signing secret; only returned when the webhook is created
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,
}

impl Webhook {
    /// Returns true if the webhook is subscribed to `event`.
    #[must_use]
    pub fn subscribes_to(&self, event: WebhookEvent) -> bool {
        self.events.iter().any(|e| e == event.as_str())
    }
}

/// Body for a partial webhook update; only set fields are sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WebhookUpdate {
    /// New delivery URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Replacement event list
    #[serde(skip_serializing_if = "Option::is_none")]
    pub events: Option<Vec<WebhookEvent>>,
    /// Enable or disable deliveries
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

impl WebhookUpdate {
    /// Creates an empty update.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the delivery URL.
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Replaces the subscribed events.
    #[must_use]
    pub fn with_events(mut self, events: impl IntoIterator<Item = WebhookEvent>) -> Self {
        self.events = Some(events.into_iter().collect());
        self
    }

    /// Enables or disables deliveries.
    #[must_use]
    pub fn with_active(mut self, active: bool) -> Self {
        self.active = Some(active);
        self
    }
}
