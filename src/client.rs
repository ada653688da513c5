//! Client facade.

use std::time::Duration;

use crate::api::Executor;
use crate::resources::{Categories, Orders, Products, Webhooks};
use crate::time::TokioSleeper;
use crate::transport::{ReqwestClient, RetryPolicy};

/// Entry point to the Shop API.
///
/// Holds one configured [`Executor`] and hands out borrowed resource
/// routers. The client is immutable once built; share it behind an `Arc`
/// to use it from several tasks.
///
/// # Example
///
/// ```no_run
/// use shop_sdk::ShopClient;
/// use shop_sdk::models::ProductListParams;
///
/// # async fn example() -> Result<(), shop_sdk::ShopError> {
/// let client = ShopClient::new("sk_live_...");
/// let page = client
///     .products()
///     .list(&ProductListParams::new().with_category_id("shoes"))
///     .await?;
/// println!("{} of {} products", page.len(), page.total);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct ShopClient<H = ReqwestClient, S = TokioSleeper> {
    executor: Executor<H, S>,
}

impl ShopClient {
    /// Creates a client backed by [`ReqwestClient`] with default settings.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_http_client(ReqwestClient::new(), api_key)
    }
}

impl<H> ShopClient<H, TokioSleeper> {
    /// Creates a client over a custom HTTP client.
    #[must_use]
    pub fn with_http_client(client: H, api_key: impl Into<String>) -> Self {
        Self {
            executor: Executor::new(client, api_key),
        }
    }
}

impl<H, S> ShopClient<H, S> {
    /// Sets a custom sleeper for retry delays.
    #[must_use]
    pub fn with_sleeper<S2>(self, sleeper: S2) -> ShopClient<H, S2> {
        ShopClient {
            executor: self.executor.with_sleeper(sleeper),
        }
    }

    /// Sets the API root.
    #[must_use]
    pub fn with_base_url(self, base_url: impl Into<String>) -> Self {
        Self {
            executor: self.executor.with_base_url(base_url),
        }
    }

    /// Sets the per-call timeout.
    #[must_use]
    pub fn with_timeout(self, timeout: Duration) -> Self {
        Self {
            executor: self.executor.with_timeout(timeout),
        }
    }

    /// Sets the retry policy.
    #[must_use]
    pub fn with_retry_policy(self, policy: RetryPolicy) -> Self {
        Self {
            executor: self.executor.with_retry_policy(policy),
        }
    }

    /// Sets the `User-Agent` header value.
    #[must_use]
    pub fn with_user_agent(self, user_agent: impl Into<String>) -> Self {
        Self {
            executor: self.executor.with_user_agent(user_agent),
        }
    }

    /// Returns the underlying executor.
    #[must_use]
    pub const fn executor(&self) -> &Executor<H, S> {
        &self.executor
    }

    /// Product catalog operations.
    #[must_use]
    pub const fn products(&self) -> Products<'_, H, S> {
        Products::new(&self.executor)
    }

    /// Order operations.
    #[must_use]
    pub const fn orders(&self) -> Orders<'_, H, S> {
        Orders::new(&self.executor)
    }

    /// Webhook subscription operations.
    #[must_use]
    pub const fn webhooks(&self) -> Webhooks<'_, H, S> {
        Webhooks::new(&self.executor)
    }

    /// Category operations.
    #[must_use]
    pub const fn categories(&self) -> Categories<'_, H, S> {
        Categories::new(&self.executor)
    }
}
