//! Conformance: SHA-256 against FIPS 180-4 / NIST example vectors.

use cookie_sign_core::sha256::{pad_message, sha256, sha256_hex};

#[test]
fn conformance_sha256_empty() {
    assert_eq!(
        sha256_hex(b""),
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
    );
}

#[test]
fn conformance_sha256_abc() {
    assert_eq!(
        sha256_hex(b"abc"),
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
    );
}

#[test]
fn conformance_sha256_448_bit_message() {
    assert_eq!(
        sha256_hex(b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq"),
        "248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1"
    );
}

#[test]
fn conformance_sha256_896_bit_message() {
    assert_eq!(
        sha256_hex(
            b"abcdefghbcdefghicdefghijdefghijkefghijklfghijklmghijklmnhijklmnoijklmnopjklmnopqklmnopqrlmnopqrsmnopqrstnopqrstu"
        ),
        "cf5b16a778af8380036ce59e7b0492370b249b11e8f07a51afac45037afee9d1"
    );
}

#[test]
fn conformance_sha256_one_million_a() {
    let data = vec![b'a'; 1_000_000];
    assert_eq!(
        sha256_hex(&data),
        "cdc76e5c9914fb9281a1c7e284d73e67f1809a48a497200e046d39ccc7112cd0"
    );
}

/// Padded length is always a whole number of blocks, with at least
/// nine bytes of padding (0x80 + 64-bit length).
#[test]
fn conformance_padding_is_block_aligned() {
    for len in 0..300 {
        let padded = pad_message(&vec![0u8; len]);
        assert_eq!(padded.len() % 64, 0, "length {len} not block aligned");
        assert!(padded.len() >= len + 9, "length {len} under-padded");
        assert!(padded.len() < len + 9 + 64, "length {len} over-padded");
        assert_eq!(padded[len], 0x80);
        let bits = u64::from_be_bytes(padded[padded.len() - 8..].try_into().unwrap());
        assert_eq!(bits, len as u64 * 8);
    }
}

#[test]
fn conformance_digest_always_32_bytes() {
    for len in [0usize, 1, 63, 64, 65, 1000] {
        assert_eq!(sha256(&vec![0x5a; len]).len(), 32);
    }
}
