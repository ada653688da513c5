//! Product catalog entities and request bodies.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::amount::{non_negative, non_negative_opt};

/// A product in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Server-assigned identifier
    pub id: String,
    /// Stock keeping unit
    pub sku: String,
    /// Display name
    pub name: String,
    /// Long description
    pub description: String,
    /// Unit price, never negative
    #[serde(deserialize_with = "non_negative")]
    pub price: f64,
    /// Strike-through price, never negative
    #[serde(
        default,
        deserialize_with = "non_negative_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub compare_at_price: Option<f64>,
    /// ISO 4217 currency code
    pub currency: String,
    /// Owning category
    pub category_id: String,
    /// Image URLs
    #[serde(default)]
    pub images: Vec<String>,
    /// Units in stock
    pub inventory: u32,
    /// Lifecycle status as reported by the marketplace (e.g. `active`, `draft`)
    pub status: String,
    /// Creation time
    pub created_at: DateTime<Utc>,
    /// Last modification time
    pub updated_at: DateTime<Utc>,
    /// Variants; empty when the product has none
    #[serde(default)]
    pub variants: Vec<ProductVariant>,
    /// Free-form attributes
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, String>,
}

impl Product {
    /// Looks up a variant by SKU.
    #[must_use]
    pub fn variant_by_sku(&self, sku: &str) -> Option<&ProductVariant> {
        self.variants.iter().find(|v| v.sku == sku)
    }
}

/// A purchasable variant of a product (size, color, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductVariant {
    /// Server-assigned identifier
    pub id: String,
    /// Variant SKU
    pub sku: String,
    /// Display name
    pub name: String,
    /// Variant price, never negative
    #[serde(deserialize_with = "non_negative")]
    pub price: f64,
    /// Units in stock
    pub inventory: u32,
    /// Option values, e.g. `{"size": "M"}`
    #[serde(default)]
    pub options: BTreeMap<String, String>,
}

/// Body for creating a product.
///
/// `images` is always sent (as `[]` when empty); `compare_at_price` and
/// `attributes` are omitted unless set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewProduct {
    /// Stock keeping unit
    pub sku: String,
    /// Display name
    pub name: String,
    /// Long description
    pub description: String,
    /// Unit price
    pub price: f64,
    /// Owning category
    pub category_id: String,
    /// Image URLs
    pub images: Vec<String>,
    /// Initial stock
    pub inventory: u32,
    /// Strike-through price
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compare_at_price: Option<f64>,
    /// Free-form attributes
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, String>,
}

impl NewProduct {
    /// Creates a product body with the required fields, no images and zero stock.
    #[must_use]
    pub fn new(
        sku: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
        category_id: impl Into<String>,
    ) -> Self {
        Self {
            sku: sku.into(),
            name: name.into(),
            description: description.into(),
            price,
            category_id: category_id.into(),
            images: Vec::new(),
            inventory: 0,
            compare_at_price: None,
            attributes: BTreeMap::new(),
        }
    }

    /// Adds an image URL.
    #[must_use]
    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.images.push(url.into());
        self
    }

    /// Sets the initial stock.
    #[must_use]
    pub fn with_inventory(mut self, inventory: u32) -> Self {
        self.inventory = inventory;
        self
    }

    /// Sets the strike-through price.
    #[must_use]
    pub fn with_compare_at_price(mut self, price: f64) -> Self {
        self.compare_at_price = Some(price);
        self
    }

    /// Adds a free-form attribute.
    #[must_use]
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }
}

/// Body for a partial product update; only set fields are sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProductUpdate {
    /// New SKU
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    /// New name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// New price
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    /// New strike-through price
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compare_at_price: Option<f64>,
    /// New category
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    /// Replacement image list
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
    /// New lifecycle status
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Replacement attribute map
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<BTreeMap<String, String>>,
}

impl ProductUpdate {
    /// Creates an empty update.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the price.
    #[must_use]
    pub fn with_price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    /// Sets the strike-through price.
    #[must_use]
    pub fn with_compare_at_price(mut self, price: f64) -> Self {
        self.compare_at_price = Some(price);
        self
    }

    /// Sets the lifecycle status.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Returns true if no field is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Query parameters for listing products.
///
/// `page` and `limit` are always sent; filters are sent only when set to a
/// non-empty value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductListParams {
    /// 1-based page number
    pub page: u32,
    /// Page size
    pub limit: u32,
    /// Category filter
    pub category_id: Option<String>,
    /// Status filter
    pub status: Option<String>,
    /// Free-text search
    pub search: Option<String>,
}

impl Default for ProductListParams {
    fn default() -> Self {
        Self {
            page: 1,
            limit: 20,
            category_id: None,
            status: None,
            search: None,
        }
    }
}

impl ProductListParams {
    /// Creates parameters for the first page of 20.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the page.
    #[must_use]
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    /// Sets the page size.
    #[must_use]
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    /// Filters by category.
    #[must_use]
    pub fn with_category_id(mut self, category_id: impl Into<String>) -> Self {
        self.category_id = Some(category_id.into());
        self
    }

    /// Filters by status.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Filters by search text.
    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Renders the parameters as query pairs in a stable order.
    #[must_use]
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = vec![
            ("page", self.page.to_string()),
            ("limit", self.limit.to_string()),
        ];

        let filters = [
            ("category_id", &self.category_id),
            ("status", &self.status),
            ("search", &self.search),
        ];
        for (name, value) in filters {
            if let Some(value) = value.as_deref().filter(|v| !v.is_empty()) {
                query.push((name, value.to_string()));
            }
        }

        query
    }
}

/// One entry of a bulk inventory update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryUpdate {
    /// Product identifier
    pub id: String,
    /// New stock level
    pub quantity: u32,
}

impl InventoryUpdate {
    /// Creates an inventory update entry.
    #[must_use]
    pub fn new(id: impl Into<String>, quantity: u32) -> Self {
        Self {
            id: id.into(),
            quantity,
        }
    }
}
