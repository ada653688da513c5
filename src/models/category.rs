//! Catalog categories.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A catalog category.
///
/// Only the identifying fields are typed; anything else the marketplace
/// returns is kept verbatim in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Server-assigned identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Parent category, absent for top-level categories
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    /// Remaining fields
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Category {
    /// Returns true for top-level categories.
    #[must_use]
    pub const fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}
