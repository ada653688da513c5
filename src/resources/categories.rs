//! Category operations.

use crate::api::{ApiRequest, Executor, ShopError, segment};
use crate::models::Category;
use crate::time::Sleeper;
use crate::transport::HttpClient;

/// Handle for `/categories`.
#[derive(Debug)]
pub struct Categories<'a, H, S> {
    executor: &'a Executor<H, S>,
}

impl<'a, H, S> Categories<'a, H, S> {
    pub(crate) const fn new(executor: &'a Executor<H, S>) -> Self {
        Self { executor }
    }
}

impl<H: HttpClient, S: Sleeper> Categories<'_, H, S> {
    /// Lists all categories.
    ///
    /// # Errors
    ///
    /// Returns [`ShopError`] if the call fails or the response is not a list
    /// of categories.
    pub async fn list(&self) -> Result<Vec<Category>, ShopError> {
        self.executor.send(ApiRequest::get("/categories")).await
    }

    /// Fetches a category by id.
    ///
    /// # Errors
    ///
    /// Returns [`ShopError`] if the call fails or the response is not a category.
    pub async fn get(&self, id: &str) -> Result<Category, ShopError> {
        self.executor
            .send(ApiRequest::get(format!("/categories/{}", segment(id)?)))
            .await
    }
}
