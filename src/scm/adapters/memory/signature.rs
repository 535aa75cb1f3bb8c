//! Webhook body signatures for the in-memory backend.

use crate::scm::ports::{ScmError, ScmResult};
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Header carrying the payload signature.
pub const SIGNATURE_HEADER: &str = "x-memory-signature";

const SIGNATURE_PREFIX: &str = "sha256=";

/// Signs `payload` with `secret`, producing a `sha256=<hex>` header value.
///
/// # Errors
///
/// Returns [`ScmError::Provider`] when the key is rejected by the MAC.
pub fn sign_payload(secret: &str, payload: &[u8]) -> ScmResult<String> {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .map_err(|err| ScmError::provider(500, err.to_string()))?;
    mac.update(payload);
    Ok(format!(
        "{SIGNATURE_PREFIX}{}",
        hex::encode(mac.finalize().into_bytes())
    ))
}

/// Checks a `sha256=<hex>` header value against `payload`.
///
/// The comparison is constant-time.
#[must_use]
pub fn verify_signature(secret: &str, payload: &[u8], header_value: &str) -> bool {
    let Some(encoded) = header_value.strip_prefix(SIGNATURE_PREFIX) else {
        return false;
    };
    let Ok(expected) = hex::decode(encoded) else {
        return false;
    };
    let Ok(mut mac) = HmacSha256::new_from_slice(secret.as_bytes()) else {
        return false;
    };
    mac.update(payload);
    mac.verify_slice(&expected).is_ok()
}
