//! Signed values — `sign` / `unsign` over the `message.signature` format.
//!
//! ## Wire format
//! ```text
//! signed    = message "." signature
//! signature = base64(HMAC-SHA256(secret, message)) without trailing "="
//! ```
//!
//! The demarcator is found by its last occurrence. Verification re-signs
//! the message part and compares the two full strings in constant time.
//!
//! Neither function returns an error. `sign` falls back to the unsigned
//! message and `unsign` to `None`; a missing demarcator, a wrong secret
//! and a tampered value all look the same to the caller.

use std::fmt;

use tracing::{debug, error};

use crate::compare::constant_time_compare;
use crate::config::SignerConfig;
use crate::constants::DEMARCATOR;
use crate::encoding;
use crate::errors::SignError;
use crate::hmac::{create_hmac, HashAlgorithm};

/// Sign `message` with `secret`.
///
/// An empty secret disables signing: the message is returned unchanged.
pub fn sign(message: &str, secret: &str) -> String {
    sign_with(HashAlgorithm::Sha256, message, secret)
}

/// Verify `signed_value` and return its message part.
///
/// Returns `None` when there is no demarcator or the signature does not
/// match `secret`.
pub fn unsign(signed_value: &str, secret: &str) -> Option<String> {
    unsign_with(HashAlgorithm::Sha256, signed_value, secret)
}

fn sign_with(algorithm: HashAlgorithm, message: &str, secret: &str) -> String {
    if secret.is_empty() {
        return message.to_string();
    }
    match signature(algorithm, message, secret) {
        Ok(sig) => format!("{message}{DEMARCATOR}{sig}"),
        Err(e) => {
            error!(error = %e, "signing failed, value left unsigned");
            message.to_string()
        }
    }
}

fn unsign_with(algorithm: HashAlgorithm, signed_value: &str, secret: &str) -> Option<String> {
    let Some((message, _)) = split_signed_value(signed_value) else {
        debug!(len = signed_value.len(), "unsign: no demarcator");
        return None;
    };

    let expected = sign_with(algorithm, message, secret);
    if constant_time_compare(&expected, signed_value) {
        Some(message.to_string())
    } else {
        debug!(len = signed_value.len(), "unsign: signature mismatch");
        None
    }
}

/// Split at the last `.` into `(message, signature)`.
pub fn split_signed_value(signed_value: &str) -> Option<(&str, &str)> {
    signed_value.rsplit_once(DEMARCATOR)
}

/// Unpadded base64 HMAC of `message`.
fn signature(algorithm: HashAlgorithm, message: &str, secret: &str) -> Result<String, SignError> {
    let mut ctx = create_hmac(algorithm.name(), secret.as_bytes())?;
    ctx.update(message);
    Ok(encoding::to_base64_unpadded(&ctx.finalize()))
}

/// A secret bound to a validated hash algorithm.
#[derive(Clone)]
pub struct CookieSigner {
    secret: String,
    algorithm: HashAlgorithm,
}

impl fmt::Debug for CookieSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CookieSigner")
            .field("secret", &"[redacted]")
            .field("algorithm", &self.algorithm)
            .finish()
    }
}

impl CookieSigner {
    /// Signer for `secret` using SHA-256.
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            algorithm: HashAlgorithm::Sha256,
        }
    }

    /// Build from config, validating the algorithm name.
    ///
    /// # Errors
    /// Returns `SignError::UnsupportedAlgorithm` if the config names
    /// anything but SHA-256.
    pub fn from_config(config: &SignerConfig) -> Result<Self, SignError> {
        let algorithm: HashAlgorithm = config.algorithm.parse()?;
        debug!(%algorithm, signing = !config.secret.is_empty(), "cookie signer configured");
        Ok(Self {
            secret: config.secret.clone(),
            algorithm,
        })
    }

    /// Hash algorithm this signer was built with.
    pub fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }

    /// Whether values are actually signed (non-empty secret).
    pub fn is_enabled(&self) -> bool {
        !self.secret.is_empty()
    }

    /// See [`sign`].
    pub fn sign(&self, message: &str) -> String {
        sign_with(self.algorithm, message, &self.secret)
    }

    /// See [`unsign`].
    pub fn unsign(&self, signed_value: &str) -> Option<String> {
        unsign_with(self.algorithm, signed_value, &self.secret)
    }
}
