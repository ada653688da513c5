//! Paginated list envelope.

use serde::{Deserialize, Serialize};

/// One page of a list endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginatedList<T> {
    /// Items on this page
    pub items: Vec<T>,
    /// Total number of items across all pages
    pub total: u64,
    /// 1-based page number
    pub page: u32,
    /// Page size requested
    pub limit: u32,
    /// Number of pages
    pub total_pages: u32,
}

impl<T> PaginatedList<T> {
    /// Returns true if a later page exists.
    #[must_use]
    pub const fn has_next_page(&self) -> bool {
        self.page < self.total_pages
    }

    /// Number of items on this page.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if this page holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> IntoIterator for PaginatedList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_envelope() {
        let list: PaginatedList<u32> = serde_json::from_value(json!({
            "items": [1, 2, 3],
            "total": 23,
            "page": 1,
            "limit": 3,
            "total_pages": 8
        }))
        .unwrap();

        assert_eq!(list.len(), 3);
        assert_eq!(list.total, 23);
        assert!(list.has_next_page());
        assert_eq!(list.into_iter().sum::<u32>(), 6);
    }

    #[test]
    fn last_page_has_no_next() {
        let list = PaginatedList::<u32> {
            items: vec![],
            total: 0,
            page: 1,
            limit: 20,
            total_pages: 1,
        };

        assert!(list.is_empty());
        assert!(!list.has_next_page());
    }

    #[test]
    fn missing_pagination_field_fails() {
        let result = serde_json::from_value::<PaginatedList<u32>>(json!({
            "items": [],
            "total": 0,
            "page": 1,
            "limit": 20
        }));

        assert!(result.is_err());
    }
}
