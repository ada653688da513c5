//! Serde helpers for monetary amounts.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

/// Deserializes an amount that must be finite and non-negative.
pub fn non_negative<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let amount = f64::deserialize(deserializer)?;
    check(amount).map_err(D::Error::custom)
}

/// Like [`non_negative`], for optional amounts (`null` or absent is `None`).
pub fn non_negative_opt<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<f64>::deserialize(deserializer)?
        .map(check)
        .transpose()
        .map_err(D::Error::custom)
}

fn check(amount: f64) -> Result<f64, String> {
    if amount.is_finite() && amount >= 0.0 {
        Ok(amount)
    } else {
        Err(format!("expected a non-negative amount, found {amount}"))
    }
}
