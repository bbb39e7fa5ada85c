//! Constant-time comparison for signed values.
//!
//! Content is compared without early exit: every position is XORed into
//! one accumulator. Length is NOT hidden. Inputs of different length
//! return `false` immediately, which leaks whether the lengths match.

/// Constant-time equality over the bytes of two strings.
///
/// Returns `false` at once if the byte lengths differ.
pub fn constant_time_compare(a: &str, b: &str) -> bool {
    constant_time_eq(a.as_bytes(), b.as_bytes())
}

/// Constant-time equality of two byte slices (same length rule as
/// [`constant_time_compare`]).
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut acc: u8 = 0;
    for (x, y) in a.iter().zip(b) {
        acc |= x ^ y;
    }
    // Keep the optimiser from short-circuiting on a non-zero accumulator.
    std::hint::black_box(acc) == 0
}
