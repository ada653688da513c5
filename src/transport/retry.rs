//! Retry policy configuration for API calls.

use std::time::Duration;

use http::StatusCode;

/// Configuration for exponential backoff retry behavior.
///
/// Controls how many times a failed call is retried and how long to wait
/// between attempts. The delay before retry `n` (0-indexed) is
/// `backoff_factor * 2^n`, capped at `max_delay`. No delay is
/// applied before the first attempt.
///
/// # Defaults
///
/// - `max_retries`: 3 (so at most 4 attempts)
/// - `backoff_factor`: 0.5 seconds
/// - `max_delay`: 120 seconds
///
/// # Example
///
/// ```
/// use shop_sdk::transport::RetryPolicy;
/// use std::time::Duration;
///
/// // Create with defaults
/// let policy = RetryPolicy::default();
/// assert_eq!(policy.max_attempts(), 4);
///
/// // Or customize via builder
/// let custom = RetryPolicy::new()
///     .with_max_retries(5)
///     .with_backoff_factor(Duration::from_millis(250))
///     .with_max_delay(Duration::from_secs(30));
/// assert_eq!(custom.delay_for_retry(1), Duration::from_millis(500));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RetryPolicy {
    /// Maximum number of retries after the initial attempt.
    ///
    /// A value of 0 means only the initial attempt is made.
    pub max_retries: u32,

    /// Delay before the first retry; each later delay doubles it.
    pub backoff_factor: Duration,

    /// Maximum delay between retries.
    pub max_delay: Duration,
}

impl RetryPolicy {
    /// Default maximum retries.
    pub const DEFAULT_MAX_RETRIES: u32 = 3;

    /// Default backoff factor (0.5 seconds).
    pub const DEFAULT_BACKOFF_FACTOR: Duration = Duration::from_millis(500);

    /// Default maximum delay (120 seconds).
    pub const DEFAULT_MAX_DELAY: Duration = Duration::from_secs(120);

    /// Status codes that indicate a transient server-side condition.
    pub const RETRYABLE_STATUSES: [StatusCode; 5] = [
        StatusCode::TOO_MANY_REQUESTS,
        StatusCode::INTERNAL_SERVER_ERROR,
        StatusCode::BAD_GATEWAY,
        StatusCode::SERVICE_UNAVAILABLE,
        StatusCode::GATEWAY_TIMEOUT,
    ];

    /// Creates a new retry policy with default values.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_retries: Self::DEFAULT_MAX_RETRIES,
            backoff_factor: Self::DEFAULT_BACKOFF_FACTOR,
            max_delay: Self::DEFAULT_MAX_DELAY,
        }
    }

    /// Creates a policy that never retries.
    #[must_use]
    pub const fn no_retries() -> Self {
        Self::new().with_max_retries(0)
    }

    /// Sets the maximum number of retries.
    #[must_use]
    pub const fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Sets the delay before the first retry.
    ///
    /// Zero is supported (useful together with [`InstantSleeper`]) but
    /// creates a tight retry loop against a live service.
    ///
    /// [`InstantSleeper`]: crate::time::InstantSleeper
    #[must_use]
    pub const fn with_backoff_factor(mut self, delay: Duration) -> Self {
        self.backoff_factor = delay;
        self
    }

    /// Sets the maximum delay between retries.
    #[must_use]
    pub const fn with_max_delay(mut self, delay: Duration) -> Self {
        self.max_delay = delay;
        self
    }

    /// Total number of attempts allowed, including the initial one.
    #[must_use]
    pub const fn max_attempts(&self) -> u32 {
        self.max_retries.saturating_add(1)
    }

    /// Computes the delay for a given retry number (0-indexed).
    ///
    /// `retry = 0` is the delay before the second attempt.
    #[must_use]
    pub fn delay_for_retry(&self, retry: u32) -> Duration {
        if self.backoff_factor.is_zero() {
            return Duration::ZERO;
        }

        let mut delay = self.backoff_factor;
        for _ in 0..retry {
            if delay >= self.max_delay {
                break;
            }
            delay = delay.saturating_mul(2);
        }
        delay.min(self.max_delay)
    }

    /// Returns true if another attempt may follow the given one.
    ///
    /// * `attempt` - The attempt just made (1 = first attempt, 2 = first retry, ...)
    #[must_use]
    pub const fn should_retry(&self, attempt: u32) -> bool {
        attempt < self.max_attempts()
    }

    /// Returns true if a response with this status should be retried.
    #[must_use]
    pub fn is_retryable_status(status: StatusCode) -> bool {
        Self::RETRYABLE_STATUSES.contains(&status)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new()
    }
}
