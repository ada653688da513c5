//! Order operations.

use serde::Serialize;

use crate::api::{ApiRequest, Executor, ShopError, segment};
use crate::models::{FulfillmentItem, Order, OrderListParams, OrderStatus, PaginatedList};
use crate::time::Sleeper;
use crate::transport::HttpClient;

#[derive(Serialize)]
struct StatusBody {
    status: OrderStatus,
}

#[derive(Serialize)]
struct TrackingBody<'a> {
    carrier: &'a str,
    tracking_number: &'a str,
}

#[derive(Serialize)]
struct FulfillBody<'a> {
    items: &'a [FulfillmentItem],
}

#[derive(Serialize)]
struct CancelBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<&'a str>,
}

#[derive(Serialize)]
struct RefundBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<&'a str>,
}

/// Handle for `/orders`.
#[derive(Debug)]
pub struct Orders<'a, H, S> {
    executor: &'a Executor<H, S>,
}

impl<'a, H, S> Orders<'a, H, S> {
    pub(crate) const fn new(executor: &'a Executor<H, S>) -> Self {
        Self { executor }
    }
}

impl<H: HttpClient, S: Sleeper> Orders<'_, H, S> {
    /// Fetches an order by id.
    ///
    /// # Errors
    ///
    /// Returns [`ShopError`] if the call fails or the response is not an order.
    pub async fn get(&self, id: &str) -> Result<Order, ShopError> {
        self.executor.send(ApiRequest::get(order_path(id, "")?)).await
    }

    /// Lists one page of orders.
    ///
    /// # Errors
    ///
    /// Returns [`ShopError`] if the call fails or the response is not a page
    /// of orders.
    pub async fn list(&self, params: &OrderListParams) -> Result<PaginatedList<Order>, ShopError> {
        self.executor
            .send(ApiRequest::get("/orders").with_query(params.to_query()))
            .await
    }

    /// Moves an order to `status`.
    ///
    /// # Errors
    ///
    /// Returns [`ShopError`] if the call fails or the response is not an order.
    pub async fn update_status(&self, id: &str, status: OrderStatus) -> Result<Order, ShopError> {
        let request =
            ApiRequest::patch(order_path(id, "/status")?).with_json(&StatusBody { status })?;
        self.executor.send(request).await
    }

    /// Attaches carrier tracking to an order.
    ///
    /// # Errors
    ///
    /// Returns [`ShopError`] if the call fails.
    pub async fn add_tracking(
        &self,
        id: &str,
        carrier: &str,
        tracking_number: &str,
    ) -> Result<(), ShopError> {
        let request = ApiRequest::post(order_path(id, "/tracking")?).with_json(&TrackingBody {
            carrier,
            tracking_number,
        })?;
        self.executor.send_empty(request).await
    }

    /// Marks order lines as fulfilled.
    ///
    /// # Errors
    ///
    /// Returns [`ShopError`] if the call fails.
    pub async fn fulfill(&self, id: &str, items: &[FulfillmentItem]) -> Result<(), ShopError> {
        let request =
            ApiRequest::post(order_path(id, "/fulfill")?).with_json(&FulfillBody { items })?;
        self.executor.send_empty(request).await
    }

    /// Cancels an order.
    ///
    /// # Errors
    ///
    /// Returns [`ShopError`] if the call fails or the response is not an order.
    pub async fn cancel(&self, id: &str, reason: Option<&str>) -> Result<Order, ShopError> {
        let request =
            ApiRequest::post(order_path(id, "/cancel")?).with_json(&CancelBody { reason })?;
        self.executor.send(request).await
    }

    /// Refunds an order, fully unless `amount` is given.
    ///
    /// # Errors
    ///
    /// Returns [`ShopError`] if the call fails or the response is not an order.
    pub async fn refund(
        &self,
        id: &str,
        amount: Option<f64>,
        reason: Option<&str>,
    ) -> Result<Order, ShopError> {
        let request = ApiRequest::post(order_path(id, "/refund")?)
            .with_json(&RefundBody { amount, reason })?;
        self.executor.send(request).await
    }
}

fn order_path(id: &str, suffix: &str) -> Result<String, ShopError> {
    Ok(format!("/orders/{}{suffix}", segment(id)?))
}
