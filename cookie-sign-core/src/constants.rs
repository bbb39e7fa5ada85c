//! Shared constants — sizes, pad bytes and wire identifiers.
//!
//! Every constant here is fixed by FIPS 180-4 (SHA-256), RFC 2104 (HMAC)
//! or the signed value wire format. Changing any of them breaks every
//! previously issued signature.

/// SHA-256 block size in bytes (512 bits).
pub const BLOCK_LENGTH: usize = 64;

/// SHA-256 digest length in bytes.
pub const DIGEST_LENGTH: usize = 32;

/// Number of 32-bit words in the hash state.
pub const STATE_WORDS: usize = 8;

/// Number of compression rounds (and message schedule entries).
pub const ROUNDS: usize = 64;

/// Offset of the 64-bit length field inside the final padded block.
pub const LENGTH_FIELD_OFFSET: usize = 56;

/// HMAC inner pad byte.
pub const IPAD: u8 = 0x36;

/// HMAC outer pad byte.
pub const OPAD: u8 = 0x5c;

/// Separator between message and signature in a signed value.
pub const DEMARCATOR: char = '.';

/// Canonical algorithm identifier accepted by the HMAC factory.
pub const HASH_ALGORITHM: &str = "sha256";

/// Hex digest length in characters.
pub const HEX_DIGEST_LENGTH: usize = 64;

/// Padded base64 digest length in characters.
pub const BASE64_DIGEST_LENGTH: usize = 44;

/// Signature length on the wire (base64 with trailing `=` removed).
pub const SIGNATURE_LENGTH: usize = 43;
