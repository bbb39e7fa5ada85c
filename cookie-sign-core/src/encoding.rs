//! Encoding utilities — base64 and hex.
//!
//! Base64 uses the `base64` crate with the STANDARD engine (RFC 4648
//! alphabet, `+` and `/`, padded). Signatures on the wire drop the
//! trailing `=`; see [`to_base64_unpadded`].

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::errors::SignError;

/// Encode bytes to standard base64 (RFC 4648, with padding).
pub fn to_base64(data: &[u8]) -> String {
    STANDARD.encode(data)
}

/// Encode bytes to standard base64 and strip trailing `=` characters.
///
/// This is the signature form embedded in signed values. The alphabet is
/// still the standard one, not the URL-safe variant.
pub fn to_base64_unpadded(data: &[u8]) -> String {
    let mut encoded = to_base64(data);
    let trimmed = encoded.trim_end_matches('=').len();
    encoded.truncate(trimmed);
    encoded
}

/// Decode standard base64 to bytes.
///
/// # Errors
/// Returns `SignError::Encoding` on invalid base64 input.
pub fn from_base64(encoded: &str) -> Result<Vec<u8>, SignError> {
    STANDARD
        .decode(encoded)
        .map_err(|e| SignError::Encoding(format!("invalid base64: {e}")))
}

/// Encode bytes to lowercase hex string.
pub fn to_hex(data: &[u8]) -> String {
    data.iter().map(|b| format!("{b:02x}")).collect()
}

/// Decode hex string to bytes.
///
/// # Errors
/// Returns `SignError::Encoding` on invalid hex input.
pub fn from_hex(encoded: &str) -> Result<Vec<u8>, SignError> {
    if encoded.len() % 2 != 0 {
        return Err(SignError::Encoding("odd-length hex string".into()));
    }
    (0..encoded.len())
        .step_by(2)
        .map(|i| {
            encoded
                .get(i..i + 2)
                .ok_or_else(|| SignError::Encoding("invalid hex: non-ascii input".into()))
                .and_then(|pair| {
                    u8::from_str_radix(pair, 16)
                        .map_err(|e| SignError::Encoding(format!("invalid hex: {e}")))
                })
        })
        .collect()
}
