//! Webhook signature verification.
//!
//! The marketplace signs every webhook delivery with HMAC-SHA256 over the
//! raw request body, keyed by the webhook's secret, and sends the digest as
//! lowercase hex.

use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Keys an HMAC-SHA256 instance with `secret`.
///
/// # Panics
///
/// Never: HMAC accepts keys of any length, so the fallible constructor
/// cannot fail for `Hmac<Sha256>`.
fn keyed(secret: &str) -> HmacSha256 {
    HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC can take key of any size")
}

/// Computes the signature the marketplace would send for `payload`.
#[must_use]
pub fn sign(payload: impl AsRef<[u8]>, secret: &str) -> String {
    let mut mac = keyed(secret);
    mac.update(payload.as_ref());
    hex::encode(mac.finalize().into_bytes())
}

/// Checks a webhook signature.
///
/// Returns true only if `signature` is exactly the lowercase hex
/// HMAC-SHA256 of `payload` under `secret`. Malformed signatures (wrong
/// length, uppercase, non-hex) are simply a mismatch. The digest comparison
/// is constant time.
#[must_use]
pub fn verify_signature(payload: impl AsRef<[u8]>, signature: &str, secret: &str) -> bool {
    if !is_lowercase_hex(signature) {
        return false;
    }
    let Ok(expected) = hex::decode(signature) else {
        return false;
    };

    let mut mac = keyed(secret);
    mac.update(payload.as_ref());
    mac.verify_slice(&expected).is_ok()
}

fn is_lowercase_hex(s: &str) -> bool {
    s.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
}
