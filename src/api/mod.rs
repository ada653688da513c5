//! Request execution and reliability layer.
//!
//! Every resource call is turned into an [`ApiRequest`] and handed to the
//! [`Executor`], which authenticates it, retries transient failures and
//! classifies failing responses into [`ApiError`]s. All operations report
//! failures as [`ShopError`].

mod error;
mod executor;
mod request;


pub use error::{ApiError, ShopError};
pub use executor::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT, Executor};
pub use request::{ApiRequest, segment};
