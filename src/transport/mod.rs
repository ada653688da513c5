//! Transport layer for talking to the Shop API over HTTP.
//!
//! This module provides types and traits for:
//! - Building HTTP requests ([`HttpRequest`])
//! - Handling HTTP responses ([`HttpResponse`])
//! - Abstracting HTTP clients ([`HttpClient`])
//! - Production HTTP client implementation ([`ReqwestClient`])
//! - Retry and backoff configuration ([`RetryPolicy`])

mod client;
mod error;
mod http;
mod retry;

#[cfg(test)]
mod client_tests;

pub use client::ReqwestClient;
pub use error::HttpError;
pub use http::{HttpClient, HttpRequest, HttpResponse};
pub use retry::RetryPolicy;
