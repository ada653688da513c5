//! Logical API request passed from the resource routers to the executor.

use std::borrow::Cow;

use http::Method;
use serde::Serialize;
use serde_json::Value;

use super::ShopError;

/// A single logical API call, before URL resolution and authentication.
///
/// `path` is relative to the client's base URL and must start with `/`.
/// Query parameters are only the ones that are present; absent optional
/// filters are never added.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    /// HTTP method
    pub method: Method,
    /// Path below the base URL, e.g. `/products/p_1/inventory`
    pub path: String,
    /// Query parameters in insertion order
    pub query: Vec<(&'static str, String)>,
    /// JSON body
    pub body: Option<Value>,
}

impl ApiRequest {
    /// Creates a request without query or body.
    #[must_use]
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    /// Creates a GET request.
    #[must_use]
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    /// Creates a POST request.
    #[must_use]
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    /// Creates a PUT request.
    #[must_use]
    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    /// Creates a PATCH request.
    #[must_use]
    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(Method::PATCH, path)
    }

    /// Creates a DELETE request.
    #[must_use]
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Appends query parameters.
    #[must_use]
    pub fn with_query(mut self, params: impl IntoIterator<Item = (&'static str, String)>) -> Self {
        self.query.extend(params);
        self
    }

    /// Serializes `body` as the JSON request body.
    ///
    /// # Errors
    ///
    /// Returns [`ShopError::Encode`] if the value cannot be represented as JSON.
    pub fn with_json<T: Serialize + ?Sized>(mut self, body: &T) -> Result<Self, ShopError> {
        self.body = Some(serde_json::to_value(body).map_err(ShopError::Encode)?);
        Ok(self)
    }
}

/// Percent-encodes an identifier for use as one path segment.
///
/// # Errors
///
/// Returns [`ShopError::InvalidUrl`] for ids that cannot stay a single
/// segment: the empty string, `.` and `..` (URL parsing removes dot
/// segments, escaped or not).
pub fn segment(id: &str) -> Result<Cow<'_, str>, ShopError> {
    match id {
        "" | "." | ".." => Err(ShopError::InvalidUrl {
            url: id.to_string(),
            reason: "identifier is not a valid path segment".to_string(),
        }),
        _ => Ok(urlencoding::encode(id)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_set_method_and_path() {
        assert_eq!(ApiRequest::get("/a").method, Method::GET);
        assert_eq!(ApiRequest::post("/a").method, Method::POST);
        assert_eq!(ApiRequest::put("/a").method, Method::PUT);
        assert_eq!(ApiRequest::patch("/a").method, Method::PATCH);
        assert_eq!(ApiRequest::delete("/a").path, "/a");
    }

    #[test]
    fn with_query_preserves_order() {
        let req = ApiRequest::get("/products")
            .with_query([("page", "1".to_string())])
            .with_query([("limit", "20".to_string())]);

        assert_eq!(
            req.query,
            vec![("page", "1".to_string()), ("limit", "20".to_string())]
        );
    }

    #[test]
    fn with_json_sets_body() {
        #[derive(Serialize)]
        struct Body {
            inventory: u32,
        }

        let req = ApiRequest::patch("/products/p_1/inventory")
            .with_json(&Body { inventory: 7 })
            .unwrap();

        assert_eq!(req.body, Some(serde_json::json!({"inventory": 7})));
    }

    #[test]
    fn with_json_reports_encode_errors() {
        let mut map = std::collections::HashMap::new();
        map.insert((1, 2), "tuple keys are not valid JSON object keys");

        let err = ApiRequest::post("/x").with_json(&map).unwrap_err();
        assert!(matches!(err, ShopError::Encode(_)));
    }

    #[test]
    fn segment_escapes_reserved_characters() {
        assert_eq!(segment("p_1").unwrap(), "p_1");
        assert_eq!(segment("a/b c").unwrap(), "a%2Fb%20c");
        assert_eq!(segment("../admin").unwrap(), "..%2Fadmin");
        assert_eq!(segment("...").unwrap(), "...");
    }

    #[test]
    fn segment_rejects_ids_that_collapse() {
        for id in ["", ".", ".."] {
            assert!(
                matches!(segment(id), Err(ShopError::InvalidUrl { .. })),
                "{id:?} should be rejected"
            );
        }
    }
}
