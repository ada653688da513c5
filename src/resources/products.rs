//! Product catalog operations.

use serde::Serialize;

use crate::api::{ApiRequest, Executor, ShopError, segment};
use crate::models::{InventoryUpdate, NewProduct, PaginatedList, Product, ProductListParams, ProductUpdate};
use crate::time::Sleeper;
use crate::transport::HttpClient;

#[derive(Serialize)]
struct InventoryBody {
    inventory: u32,
}

#[derive(Serialize)]
struct BulkCreateBody<'a> {
    products: &'a [NewProduct],
}

#[derive(Serialize)]
struct BulkInventoryBody<'a> {
    updates: &'a [InventoryUpdate],
}

/// Handle for `/products`.
#[derive(Debug)]
pub struct Products<'a, H, S> {
    executor: &'a Executor<H, S>,
}

impl<'a, H, S> Products<'a, H, S> {
    pub(crate) const fn new(executor: &'a Executor<H, S>) -> Self {
        Self { executor }
    }
}

impl<H: HttpClient, S: Sleeper> Products<'_, H, S> {
    /// Creates a product.
    ///
    /// # Errors
    ///
    /// Returns [`ShopError`] if the call fails or the response is not a product.
    pub async fn create(&self, product: &NewProduct) -> Result<Product, ShopError> {
        let request = ApiRequest::post("/products").with_json(product)?;
        self.executor.send(request).await
    }

    /// Fetches a product by id.
    ///
    /// # Errors
    ///
    /// Returns [`ShopError`] if the call fails or the response is not a product.
    pub async fn get(&self, id: &str) -> Result<Product, ShopError> {
        self.executor
            .send(ApiRequest::get(format!("/products/{}", segment(id)?)))
            .await
    }

    /// Replaces the fields set in `update`.
    ///
    /// # Errors
    ///
    /// Returns [`ShopError`] if the call fails or the response is not a product.
    pub async fn update(&self, id: &str, update: &ProductUpdate) -> Result<Product, ShopError> {
        let request =
            ApiRequest::put(format!("/products/{}", segment(id)?)).with_json(update)?;
        self.executor.send(request).await
    }

    /// Deletes a product.
    ///
    /// # Errors
    ///
    /// Returns [`ShopError`] if the call fails.
    pub async fn delete(&self, id: &str) -> Result<(), ShopError> {
        self.executor
            .send_empty(ApiRequest::delete(format!("/products/{}", segment(id)?)))
            .await
    }

    /// Lists one page of products.
    ///
    /// # Errors
    ///
    /// Returns [`ShopError`] if the call fails or the response is not a page
    /// of products.
    pub async fn list(
        &self,
        params: &ProductListParams,
    ) -> Result<PaginatedList<Product>, ShopError> {
        self.executor
            .send(ApiRequest::get("/products").with_query(params.to_query()))
            .await
    }

    /// Sets the stock level of a product.
    ///
    /// # Errors
    ///
    /// Returns [`ShopError`] if the call fails.
    pub async fn update_inventory(&self, id: &str, quantity: u32) -> Result<(), ShopError> {
        let request = ApiRequest::patch(format!("/products/{}/inventory", segment(id)?))
            .with_json(&InventoryBody {
                inventory: quantity,
            })?;
        self.executor.send_empty(request).await
    }

    /// Creates several products in one call.
    ///
    /// # Errors
    ///
    /// Returns [`ShopError`] if the call fails or the response is not a list
    /// of products.
    pub async fn bulk_create(&self, products: &[NewProduct]) -> Result<Vec<Product>, ShopError> {
        let request =
            ApiRequest::post("/products/bulk").with_json(&BulkCreateBody { products })?;
        self.executor.send(request).await
    }

    /// Sets the stock level of several products in one call.
    ///
    /// # Errors
    ///
    /// Returns [`ShopError`] if the call fails.
    pub async fn bulk_update_inventory(&self, updates: &[InventoryUpdate]) -> Result<(), ShopError> {
        let request = ApiRequest::patch("/products/inventory/bulk")
            .with_json(&BulkInventoryBody { updates })?;
        self.executor.send_empty(request).await
    }
}
