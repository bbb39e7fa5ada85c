//! HMAC-SHA256 (RFC 2104), built on [`crate::sha256`].
//!
//! ## Construction
//! ```text
//! K'     = SHA-256(K) if len(K) > 64, then zero-padded to 64 bytes
//! inner  = SHA-256((K' ⊕ 0x36..) || message)
//! result = SHA-256((K' ⊕ 0x5c..) || inner)
//! ```
//!
//! SHA-256 is the only supported hash. [`create_hmac`] validates the
//! algorithm name once, at construction; everything after that is
//! infallible.
//!
//! [`HmacContext`] accumulates chunks in call order and is consumed by
//! [`HmacContext::finalize`] / [`HmacContext::digest`], so it cannot be
//! reused after finalisation. [`hmac_sha256`] is the pure form over a
//! fixed list of chunks.

use std::fmt;
use std::str::FromStr;

use crate::constants::{BLOCK_LENGTH, DIGEST_LENGTH, HASH_ALGORITHM, IPAD, OPAD};
use crate::encoding;
use crate::errors::SignError;
use crate::sha256::sha256;

/// Hash functions accepted by the HMAC factory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HashAlgorithm {
    /// SHA-256, the only supported hash.
    #[default]
    Sha256,
}

impl HashAlgorithm {
    /// Canonical lowercase identifier.
    pub fn name(self) -> &'static str {
        match self {
            HashAlgorithm::Sha256 => HASH_ALGORITHM,
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HashAlgorithm {
    type Err = SignError;

    /// Accepts `sha256` / `sha-256` in any letter case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.to_ascii_lowercase().replace('-', "");
        if normalized == HASH_ALGORITHM {
            Ok(HashAlgorithm::Sha256)
        } else {
            Err(SignError::UnsupportedAlgorithm(s.to_string()))
        }
    }
}

/// Output rendering for [`HmacContext::digest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DigestEncoding {
    /// Lowercase hex, 64 characters.
    Hex,
    /// Standard base64 with `=` padding, 44 characters.
    Base64,
    /// Raw 32 bytes.
    Binary,
}

impl FromStr for DigestEncoding {
    type Err = SignError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hex" => Ok(DigestEncoding::Hex),
            "base64" => Ok(DigestEncoding::Base64),
            "binary" | "latin1" => Ok(DigestEncoding::Binary),
            other => Err(SignError::UnsupportedEncoding(other.to_string())),
        }
    }
}

/// A finalised MAC rendered in one of the [`DigestEncoding`]s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodedDigest {
    /// Lowercase hex, two characters per byte.
    Hex(String),
    /// Standard-alphabet base64 with padding.
    Base64(String),
    /// The raw MAC bytes.
    Binary([u8; DIGEST_LENGTH]),
}

impl EncodedDigest {
    fn render(mac: [u8; DIGEST_LENGTH], format: DigestEncoding) -> Self {
        match format {
            DigestEncoding::Hex => EncodedDigest::Hex(encoding::to_hex(&mac)),
            DigestEncoding::Base64 => EncodedDigest::Base64(encoding::to_base64(&mac)),
            DigestEncoding::Binary => EncodedDigest::Binary(mac),
        }
    }

    /// Length in output units: characters for text encodings, bytes for binary.
    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    /// Always `false`; a digest is never empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Text form, or `None` for [`EncodedDigest::Binary`].
    pub fn as_str(&self) -> Option<&str> {
        match self {
            EncodedDigest::Hex(s) | EncodedDigest::Base64(s) => Some(s),
            EncodedDigest::Binary(_) => None,
        }
    }

    /// Underlying bytes: ASCII text for hex/base64, the raw MAC for binary.
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            EncodedDigest::Hex(s) | EncodedDigest::Base64(s) => s.as_bytes(),
            EncodedDigest::Binary(raw) => raw,
        }
    }

    /// Take the text form, or `None` for binary.
    pub fn into_string(self) -> Option<String> {
        match self {
            EncodedDigest::Hex(s) | EncodedDigest::Base64(s) => Some(s),
            EncodedDigest::Binary(_) => None,
        }
    }
}

/// Block-size key plus the message accumulated so far.
///
/// One context per MAC. Contexts never share state.
#[derive(Clone)]
pub struct HmacContext {
    key: [u8; BLOCK_LENGTH],
    message: Vec<u8>,
}

impl fmt::Debug for HmacContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HmacContext")
            .field("key", &"[redacted]")
            .field("message_len", &self.message.len())
            .finish()
    }
}

impl HmacContext {
    /// Context for SHA-256 with `key` normalised to the block size.
    pub fn new(key: &[u8]) -> Self {
        Self {
            key: normalize_key(key),
            message: Vec::new(),
        }
    }

    /// Append a chunk. Chunks are MACed as their concatenation, in call order.
    pub fn update(&mut self, chunk: impl AsRef<[u8]>) -> &mut Self {
        self.message.extend_from_slice(chunk.as_ref());
        self
    }

    /// Consume the context and return the raw 32-byte MAC.
    pub fn finalize(self) -> [u8; DIGEST_LENGTH] {
        let mut inner_input = Vec::with_capacity(BLOCK_LENGTH + self.message.len());
        inner_input.extend(self.key.iter().map(|b| b ^ IPAD));
        inner_input.extend_from_slice(&self.message);
        let inner = sha256(&inner_input);

        let mut outer_input = [0u8; BLOCK_LENGTH + DIGEST_LENGTH];
        for (dst, b) in outer_input.iter_mut().zip(self.key.iter()) {
            *dst = b ^ OPAD;
        }
        outer_input[BLOCK_LENGTH..].copy_from_slice(&inner);
        sha256(&outer_input)
    }

    /// Consume the context and render the MAC.
    pub fn digest(self, encoding: DigestEncoding) -> EncodedDigest {
        EncodedDigest::render(self.finalize(), encoding)
    }
}

/// Create an HMAC context for the named hash.
///
/// # Errors
/// Returns `SignError::UnsupportedAlgorithm` for anything but SHA-256.
pub fn create_hmac(algorithm: &str, key: &[u8]) -> Result<HmacContext, SignError> {
    match algorithm.parse::<HashAlgorithm>()? {
        HashAlgorithm::Sha256 => Ok(HmacContext::new(key)),
    }
}

/// HMAC-SHA256 over the concatenation of `chunks`.
pub fn hmac_sha256(key: &[u8], chunks: &[&[u8]]) -> [u8; DIGEST_LENGTH] {
    let mut ctx = HmacContext::new(key);
    for chunk in chunks {
        ctx.update(chunk);
    }
    ctx.finalize()
}

/// Hash keys longer than a block, then zero-pad to exactly one block.
fn normalize_key(key: &[u8]) -> [u8; BLOCK_LENGTH] {
    let mut normalized = [0u8; BLOCK_LENGTH];
    if key.len() > BLOCK_LENGTH {
        normalized[..DIGEST_LENGTH].copy_from_slice(&sha256(key));
    } else {
        normalized[..key.len()].copy_from_slice(key);
    }
    normalized
}
