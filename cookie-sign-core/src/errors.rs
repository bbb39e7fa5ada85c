//! Error types for cookie-sign-core.
//!
//! Only configuration mistakes and malformed encodings surface as errors.
//! Untrusted input to [`crate::signer::unsign`] never produces an error:
//! it yields `None`, so a caller cannot tell a tampered value from one
//! that was never signed.

/// Unified error type for all cookie-sign-core operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SignError {
    /// The HMAC factory was asked for a hash other than SHA-256.
    #[error("Unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// Unknown digest encoding name.
    #[error("Unsupported encoding: {0}")]
    UnsupportedEncoding(String),

    /// Encoding error (base64, hex).
    #[error("Encoding error: {0}")]
    Encoding(String),
}
