//! Webhook subscription operations.

use serde::Serialize;

use crate::api::{ApiRequest, Executor, ShopError, segment};
use crate::models::{Webhook, WebhookEvent, WebhookUpdate};
use crate::signature;
use crate::time::Sleeper;
use crate::transport::HttpClient;

#[derive(Serialize)]
struct CreateBody<'a> {
    url: &'a str,
    events: &'a [WebhookEvent],
}

/// Handle for `/webhooks`.
#[derive(Debug)]
pub struct Webhooks<'a, H, S> {
    executor: &'a Executor<H, S>,
}

impl<'a, H, S> Webhooks<'a, H, S> {
    pub(crate) const fn new(executor: &'a Executor<H, S>) -> Self {
        Self { executor }
    }

    /// Checks the signature of an incoming delivery.
    ///
    /// See [`signature::verify_signature`].
    #[must_use]
    pub fn verify_signature(&self, payload: impl AsRef<[u8]>, signature: &str, secret: &str) -> bool {
        signature::verify_signature(payload, signature, secret)
    }
}

impl<H: HttpClient, S: Sleeper> Webhooks<'_, H, S> {
    /// Subscribes `url` to `events`.
    ///
    /// The returned webhook carries the signing secret; it is not returned
    /// again by later calls.
    ///
    /// # Errors
    ///
    /// Returns [`ShopError`] if the call fails or the response is not a webhook.
    pub async fn create(&self, url: &str, events: &[WebhookEvent]) -> Result<Webhook, ShopError> {
        let request = ApiRequest::post("/webhooks").with_json(&CreateBody { url, events })?;
        self.executor.send(request).await
    }

    /// Lists all webhooks.
    ///
    /// # Errors
    ///
    /// Returns [`ShopError`] if the call fails or the response is not a list
    /// of webhooks.
    pub async fn list(&self) -> Result<Vec<Webhook>, ShopError> {
        self.executor.send(ApiRequest::get("/webhooks")).await
    }

    /// Applies the fields set in `update`.
    ///
    /// # Errors
    ///
    /// Returns [`ShopError`] if the call fails or the response is not a webhook.
    pub async fn update(&self, id: &str, update: &WebhookUpdate) -> Result<Webhook, ShopError> {
        let request =
            ApiRequest::patch(format!("/webhooks/{}", segment(id)?)).with_json(update)?;
        self.executor.send(request).await
    }

    /// Deletes a webhook.
    ///
    /// # Errors
    ///
    /// Returns [`ShopError`] if the call fails.
    pub async fn delete(&self, id: &str) -> Result<(), ShopError> {
        self.executor
            .send_empty(ApiRequest::delete(format!("/webhooks/{}", segment(id)?)))
            .await
    }
}
