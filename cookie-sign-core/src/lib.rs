//! Cookie Sign Core — self-contained SHA-256, HMAC-SHA256 and signed values.
//!
//! This crate is the canonical implementation of the cookie signing
//! protocol used by the persistence layer. The hash and MAC are written
//! from scratch and verified bit-for-bit against FIPS 180-4 / RFC 4231
//! vectors and the RustCrypto reference crates (test-only).
//!
//! # Module Map
//!
//! | Module | Component | Status |
//! |--------|-----------|--------|
//! | [`constants`] | shared sizes and identifiers | Complete |
//! | [`errors`] | `SignError` | Complete |
//! | [`encoding`] | hex / base64 | Complete |
//! | [`tables`] | initial hash words + round constants | Complete |
//! | [`sha256`] | SHA-256 core | Complete |
//! | [`hmac`] | HMAC-SHA256 engine | Complete |
//! | [`compare`] | constant-time comparison | Complete |
//! | [`signer`] | `sign` / `unsign` | Complete |
//! | [`config`] | `SignerConfig` | Complete |
//!
//! # Wire Format
//!
//! A signed value is `"<message>.<signature>"`, where `<signature>` is the
//! standard-alphabet base64 of `HMAC-SHA256(secret, message)` with
//! trailing `=` removed. The demarcator is located by its *last*
//! occurrence, so messages may contain `.` themselves.
//!
//! Persistence (cookie name, attributes, storage) is a caller concern.
//! This crate performs no I/O.

/// Shared sizes, pad bytes and identifiers.
pub mod constants;

/// Error types for cookie-sign-core operations.
pub mod errors;

/// Encoding utilities — base64 and hex.
pub mod encoding;

/// SHA-256 initial hash words and round constants.
pub mod tables;

/// SHA-256 — padding, message schedule and compression.
pub mod sha256;

/// HMAC-SHA256 — key normalisation and nested hash construction.
pub mod hmac;

/// Constant-time comparison.
pub mod compare;

/// Signing and verification of `message.signature` values.
pub mod signer;

/// Signer configuration.
pub mod config;

pub use crate::config::SignerConfig;
pub use crate::errors::SignError;
pub use crate::hmac::{
    create_hmac, hmac_sha256, DigestEncoding, EncodedDigest, HashAlgorithm, HmacContext,
};
pub use crate::sha256::{sha256, sha256_hex};
pub use crate::signer::{sign, unsign, CookieSigner};
