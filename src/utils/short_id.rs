//! Content-addressed short id derivation.
//!
//! Ids are derived from record content rather than generated randomly, so the
//! same payload always maps to the same id and re-creation is idempotent.

use base64::Engine as _;
use sha2::{Digest, Sha256};

/// Digest prefix length before base64 encoding. 15 bytes encode to exactly
/// 20 URL-safe characters with no padding.
const ID_LENGTH_BYTES: usize = 15;

/// Derives a short id from canonical record bytes.
///
/// Hashes the input with SHA-256 and encodes a fixed-width prefix of the
/// digest as URL-safe base64 without padding, producing a 20-character id
/// from `[A-Za-z0-9_-]` that is usable directly as a path segment.
///
/// The function is total and pure: no input fails, and no mutable state is
/// consulted. Distinct inputs collide only with cryptographically negligible
/// probability.
///
/// # Examples
///
/// ```
/// use shortlink::utils::short_id::derive_id;
///
/// let id = derive_id(br#"{"title":"t","description":"d","redirectUrl":"https://x"}"#);
/// assert_eq!(id.len(), 20);
/// assert_eq!(id, derive_id(br#"{"title":"t","description":"d","redirectUrl":"https://x"}"#));
/// ```
pub fn derive_id(bytes: &[u8]) -> String {
    let digest = Sha256::digest(bytes);

    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(&digest[..ID_LENGTH_BYTES])
}
