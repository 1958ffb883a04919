//! HMAC-SHA256 signature generation for Bitstamp API authentication.
//!
//! Bitstamp private endpoints require a `signature` form field computed as:
//! ```text
//! UPPERCASE_HEX(HMAC-SHA256(nonce + client_id + api_key, api_secret))
//! ```

use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::auth::Credentials;

type HmacSha256 = Hmac<Sha256>;

/// Compute the signature for one private request.
///
/// Deterministic and side-effect free. The output is always 64 uppercase hex
/// characters.
///
/// # Example
///
/// ```rust
/// use bitstamp_api_client::auth::sign;
///
/// let signature = sign("1700000000123456", "123456", "api_key", "api_secret");
/// assert_eq!(signature.len(), 64);
/// ```
pub fn sign(nonce: &str, client_id: &str, api_key: &str, api_secret: &str) -> String {
    let mut hmac = HmacSha256::new_from_slice(api_secret.as_bytes())
        .unwrap_or_else(|_| unreachable!("HMAC accepts keys of any size"));
    hmac.update(nonce.as_bytes());
    hmac.update(client_id.as_bytes());
    hmac.update(api_key.as_bytes());

    hex::encode_upper(hmac.finalize().into_bytes())
}

/// Sign a request nonce with the given credentials.
pub fn sign_request(credentials: &Credentials, nonce: &str) -> String {
    sign(
        nonce,
        credentials.client_id(),
        credentials.api_key(),
        credentials.expose_secret(),
    )
}
