//! SHA-256 constant tables — initial hash words and round constants.
//!
//! ## Derivation (FIPS 180-4 §4.2.2, §5.3.3)
//! ```text
//! H0[i] = first 32 bits of frac(sqrt(prime[i]))   i in 0..8
//! K[t]  = first 32 bits of frac(cbrt(prime[t]))   t in 0..64
//! ```
//!
//! Both tables are derived with exact integer roots in `const fn` and
//! stored in a `static`, so they exist before any thread runs and are
//! read without synchronisation. `floor(sqrt(p << 64))` equals
//! `floor(sqrt(p) * 2^32)`; its low 32 bits are the fractional bits.
//! The cube root case uses `p << 96` the same way.

use crate::constants::{ROUNDS, STATE_WORDS};

/// Immutable SHA-256 constant tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConstantTables {
    /// Initial hash words from square roots of the first 8 primes.
    pub h0: [u32; STATE_WORDS],
    /// Round constants from cube roots of the first 64 primes.
    pub k: [u32; ROUNDS],
}

impl ConstantTables {
    /// Derive both tables from the first 64 primes.
    pub const fn derive() -> Self {
        let primes = first_primes::<ROUNDS>();

        let mut h0 = [0u32; STATE_WORDS];
        let mut i = 0;
        while i < STATE_WORDS {
            h0[i] = sqrt_fraction_bits(primes[i]);
            i += 1;
        }

        let mut k = [0u32; ROUNDS];
        let mut t = 0;
        while t < ROUNDS {
            k[t] = cbrt_fraction_bits(primes[t]);
            t += 1;
        }

        Self { h0, k }
    }
}

/// Process-wide tables, evaluated at compile time.
pub static TABLES: ConstantTables = ConstantTables::derive();

/// First 32 fractional bits of `sqrt(p)`.
pub const fn sqrt_fraction_bits(p: u64) -> u32 {
    integer_root((p as u128) << 64, 2) as u32
}

/// First 32 fractional bits of `cbrt(p)`.
pub const fn cbrt_fraction_bits(p: u64) -> u32 {
    integer_root((p as u128) << 96, 3) as u32
}

/// The first `N` primes, by trial division.
pub const fn first_primes<const N: usize>() -> [u64; N] {
    let mut primes = [0u64; N];
    let mut count = 0;
    let mut candidate = 2u64;
    while count < N {
        let mut is_prime = true;
        let mut i = 0;
        while i < count {
            let p = primes[i];
            if p * p > candidate {
                break;
            }
            if candidate % p == 0 {
                is_prime = false;
                break;
            }
            i += 1;
        }
        if is_prime {
            primes[count] = candidate;
            count += 1;
        }
        candidate += 1;
    }
    primes
}

/// `floor(target^(1/degree))` by binary search.
///
/// Roots used here stay below 2^36, so `mid^3` fits in a `u128`.
const fn integer_root(target: u128, degree: u32) -> u128 {
    let mut lo: u128 = 0;
    let mut hi: u128 = 1 << 40;
    while lo < hi {
        let mid = lo + (hi - lo + 1) / 2;
        if mid.pow(degree) <= target {
            lo = mid;
        } else {
            hi = mid - 1;
        }
    }
    lo
}
