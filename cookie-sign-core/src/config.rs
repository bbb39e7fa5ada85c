//! Signer configuration.
//!
//! Deserialisable with serde so hosts can load it from their own config
//! files. `algorithm` defaults to `sha256` and is validated when a
//! [`crate::signer::CookieSigner`] is built, not here.

use std::fmt;

use serde::Deserialize;

use crate::constants::HASH_ALGORITHM;

/// Secret and hash selection for a [`crate::signer::CookieSigner`].
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct SignerConfig {
    /// HMAC key. Empty disables signing (values pass through unchanged).
    pub secret: String,
    /// Hash algorithm name; only SHA-256 spellings are accepted.
    #[serde(default = "default_algorithm")]
    pub algorithm: String,
}

fn default_algorithm() -> String {
    HASH_ALGORITHM.to_string()
}

impl SignerConfig {
    /// Config for `secret` with the default algorithm.
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            algorithm: default_algorithm(),
        }
    }

    /// Replace the algorithm name. Validated by `CookieSigner::from_config`.
    pub fn with_algorithm(mut self, algorithm: impl Into<String>) -> Self {
        self.algorithm = algorithm.into();
        self
    }
}

impl fmt::Debug for SignerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignerConfig")
            .field("secret", &"[redacted]")
            .field("algorithm", &self.algorithm)
            .finish()
    }
}
