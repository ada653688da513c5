//! Command execution.
//!
//! Maps each API subcommand onto the SDK and renders the result as JSON.
//! Also implements the offline `verify-signature` check.

use std::path::Path;

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tokio::io::AsyncReadExt;

use shop_sdk::config::{CategoriesCommand, Command, OrdersCommand, ProductsCommand, WebhooksCommand};
use shop_sdk::time::Sleeper;
use shop_sdk::transport::HttpClient;
use shop_sdk::{ShopClient, ShopError, verify_signature};

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for runtime execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// The API call failed.
    #[error(transparent)]
    Api(#[from] ShopError),

    /// The result could not be rendered as JSON.
    #[error("Failed to render output: {0}")]
    Render(#[source] serde_json::Error),

    /// The webhook payload could not be read.
    #[error("Failed to read payload from {origin}: {source}")]
    PayloadRead {
        /// File path, or `stdin`
        origin: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The command does not talk to the API.
    #[error("'{0}' is not an API command")]
    NotAnApiCommand(&'static str),
}

/// Executes an API subcommand and returns its result as JSON.
///
/// # Errors
///
/// Returns an error if the API call fails or `command` is a local command
/// (`init`, `verify-signature`).
pub async fn execute<H: HttpClient, S: Sleeper>(
    client: &ShopClient<H, S>,
    command: &Command,
) -> Result<Value, RunError> {
    match command {
        Command::Products { action } => products(client, action).await,
        Command::Orders { action } => orders(client, action).await,
        Command::Webhooks {
            action: WebhooksCommand::List,
        } => render(&client.webhooks().list().await?),
        Command::Categories { action } => match action {
            CategoriesCommand::List => render(&client.categories().list().await?),
            CategoriesCommand::Get { id } => render(&client.categories().get(id).await?),
        },
        Command::Init { .. } => Err(RunError::NotAnApiCommand("init")),
        Command::VerifySignature { .. } => Err(RunError::NotAnApiCommand("verify-signature")),
    }
}

async fn products<H: HttpClient, S: Sleeper>(
    client: &ShopClient<H, S>,
    action: &ProductsCommand,
) -> Result<Value, RunError> {
    match action {
        ProductsCommand::Get { id } => render(&client.products().get(id).await?),
        ProductsCommand::List { .. } => {
            let params = action.list_params().unwrap_or_default();
            render(&client.products().list(&params).await?)
        }
    }
}

async fn orders<H: HttpClient, S: Sleeper>(
    client: &ShopClient<H, S>,
    action: &OrdersCommand,
) -> Result<Value, RunError> {
    match action {
        OrdersCommand::Get { id } => render(&client.orders().get(id).await?),
        OrdersCommand::List { .. } => {
            let params = action.list_params().unwrap_or_default();
            render(&client.orders().list(&params).await?)
        }
    }
}

fn render<T: Serialize>(value: &T) -> Result<Value, RunError> {
    serde_json::to_value(value).map_err(RunError::Render)
}

/// Reads the webhook payload from `path`, or from stdin when `None`.
///
/// # Errors
///
/// Returns [`RunError::PayloadRead`] if reading fails.
pub async fn read_payload(path: Option<&Path>) -> Result<Vec<u8>, RunError> {
    match path {
        Some(path) => std::fs::read(path).map_err(|source| RunError::PayloadRead {
            origin: path.display().to_string(),
            source,
        }),
        None => {
            let mut payload = Vec::new();
            tokio::io::stdin()
                .read_to_end(&mut payload)
                .await
                .map_err(|source| RunError::PayloadRead {
                    origin: "stdin".to_string(),
                    source,
                })?;
            Ok(payload)
        }
    }
}

/// Checks a webhook delivery's signature.
///
/// # Errors
///
/// Returns an error if the payload cannot be read.
pub async fn check_signature(
    payload_file: Option<&Path>,
    signature: &str,
    secret: &str,
) -> Result<bool, RunError> {
    let payload = read_payload(payload_file).await?;
    let valid = verify_signature(&payload, signature.trim(), secret);
    tracing::debug!(bytes = payload.len(), valid, "Checked webhook signature");
    Ok(valid)
}
