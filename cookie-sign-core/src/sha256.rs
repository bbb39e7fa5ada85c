//! SHA-256 (FIPS 180-4), one-shot over an in-memory byte slice.
//!
//! ## Algorithm
//! ```text
//! padded = data || 0x80 || 0x00* || be64(bit_length)     (len % 64 == 0)
//! for each 64-byte block:
//!     W[0..16]  = block as big-endian u32 words
//!     W[16..64] = W[t-16] + σ0(W[t-15]) + W[t-7] + σ1(W[t-2])
//!     64 rounds over (a..h), then state += (a..h)
//! digest = state words, big-endian
//! ```
//!
//! Word loads and stores go through `from_be_bytes` / `to_be_bytes`, so
//! the result does not depend on host byte order.

use crate::constants::{BLOCK_LENGTH, DIGEST_LENGTH, LENGTH_FIELD_OFFSET, ROUNDS, STATE_WORDS};
use crate::encoding;
use crate::tables::TABLES;

/// Pad a message to a whole number of 64-byte blocks.
///
/// Appends `0x80`, zero bytes until the length is 56 mod 64, then the
/// original length in bits as a big-endian `u64`.
pub fn pad_message(data: &[u8]) -> Vec<u8> {
    let bit_length = (data.len() as u64).wrapping_mul(8);
    let zeros =
        (LENGTH_FIELD_OFFSET + BLOCK_LENGTH - (data.len() + 1) % BLOCK_LENGTH) % BLOCK_LENGTH;

    let mut padded = Vec::with_capacity(data.len() + 1 + zeros + 8);
    padded.extend_from_slice(data);
    padded.push(0x80);
    padded.resize(padded.len() + zeros, 0);
    padded.extend_from_slice(&bit_length.to_be_bytes());
    padded
}

/// Expand one block into the 64-word message schedule.
pub fn message_schedule(block: &[u8; BLOCK_LENGTH]) -> [u32; ROUNDS] {
    let mut w = [0u32; ROUNDS];
    for (word, bytes) in w.iter_mut().zip(block.chunks_exact(4)) {
        *word = u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
    }
    for t in 16..ROUNDS {
        w[t] = w[t - 16]
            .wrapping_add(small_sigma0(w[t - 15]))
            .wrapping_add(w[t - 7])
            .wrapping_add(small_sigma1(w[t - 2]));
    }
    w
}

/// Running SHA-256 state: eight 32-bit words.
#[derive(Debug, Clone)]
pub struct HashState {
    words: [u32; STATE_WORDS],
}

impl Default for HashState {
    fn default() -> Self {
        Self::new()
    }
}

impl HashState {
    /// Fresh state holding the initial hash words.
    pub fn new() -> Self {
        Self { words: TABLES.h0 }
    }

    /// Current state words.
    pub fn words(&self) -> &[u32; STATE_WORDS] {
        &self.words
    }

    /// Run the compression function over one 512-bit block.
    pub fn compress(&mut self, block: &[u8; BLOCK_LENGTH]) {
        let w = message_schedule(block);

        let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = self.words;

        for t in 0..ROUNDS {
            let t1 = h
                .wrapping_add(big_sigma1(e))
                .wrapping_add(ch(e, f, g))
                .wrapping_add(TABLES.k[t])
                .wrapping_add(w[t]);
            let t2 = big_sigma0(a).wrapping_add(maj(a, b, c));

            h = g;
            g = f;
            f = e;
            e = d.wrapping_add(t1);
            d = c;
            c = b;
            b = a;
            a = t1.wrapping_add(t2);
        }

        for (word, v) in self.words.iter_mut().zip([a, b, c, d, e, f, g, h]) {
            *word = word.wrapping_add(v);
        }
    }

    /// Consume the state and render it as the big-endian digest.
    pub fn finalize(self) -> [u8; DIGEST_LENGTH] {
        let mut out = [0u8; DIGEST_LENGTH];
        for (chunk, word) in out.chunks_exact_mut(4).zip(self.words) {
            chunk.copy_from_slice(&word.to_be_bytes());
        }
        out
    }
}

/// Compute SHA-256 hash of arbitrary data.
///
/// Any input is valid, including the empty slice.
pub fn sha256(data: &[u8]) -> [u8; DIGEST_LENGTH] {
    let padded = pad_message(data);
    let mut state = HashState::new();
    for block in padded.chunks_exact(BLOCK_LENGTH) {
        let mut buf = [0u8; BLOCK_LENGTH];
        buf.copy_from_slice(block);
        state.compress(&buf);
    }
    state.finalize()
}

/// Compute SHA-256 and return lowercase hex string.
pub fn sha256_hex(data: &[u8]) -> String {
    encoding::to_hex(&sha256(data))
}

// ── FIPS 180-4 §4.1.2 functions ─────────────────────────────────────

#[inline(always)]
fn ch(x: u32, y: u32, z: u32) -> u32 {
    (x & y) ^ (!x & z)
}

#[inline(always)]
fn maj(x: u32, y: u32, z: u32) -> u32 {
    (x & y) ^ (x & z) ^ (y & z)
}

#[inline(always)]
fn big_sigma0(x: u32) -> u32 {
    x.rotate_right(2) ^ x.rotate_right(13) ^ x.rotate_right(22)
}

#[inline(always)]
fn big_sigma1(x: u32) -> u32 {
    x.rotate_right(6) ^ x.rotate_right(11) ^ x.rotate_right(25)
}

#[inline(always)]
fn small_sigma0(x: u32) -> u32 {
    x.rotate_right(7) ^ x.rotate_right(18) ^ (x >> 3)
}

#[inline(always)]
fn small_sigma1(x: u32) -> u32 {
    x.rotate_right(17) ^ x.rotate_right(19) ^ (x >> 10)
}
