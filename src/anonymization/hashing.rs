//! Seeded stable hashing for deterministic substitutions
//!
//! Every hash-derived selection in the engine (catalogue picks, token
//! synthesis, amount jitter) flows through one seeded SHA-256 digest so that
//! two runs with the same seed and input produce byte-identical output,
//! independent of platform.

use sha2::{Digest, Sha256};

/// Compute the seeded SHA-256 digest of a UTF-8 input
///
/// The seed is mixed in as its little-endian byte representation ahead of
/// the input bytes.
pub fn stable_digest(seed: u64, input: &str) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(seed.to_le_bytes());
    hasher.update(input.as_bytes());
    hasher.finalize().into()
}

/// Seeded digest as a lowercase hex string (64 characters)
///
/// Used to synthesize fake tokens that must look like opaque identifiers.
pub fn stable_hex(seed: u64, input: &str) -> String {
    let digest = stable_digest(seed, input);
    let mut out = String::with_capacity(64);
    for byte in digest {
        out.push_str(&format!("{byte:02x}"));
    }
    out
}

/// Seeded digest reduced to a `u128` for index derivation
///
/// Big-endian interpretation of the first 16 digest bytes. Callers derive
/// catalogue indices from distinct sub-values (modulus bases or bit slices)
/// of this one number so picks into unrelated catalogues stay decorrelated.
pub fn stable_index(seed: u64, input: &str) -> u128 {
    let digest = stable_digest(seed, input);
    let mut bytes = [0u8; 16];
    bytes.copy_from_slice(&digest[..16]);
    u128::from_be_bytes(bytes)
}

/// Unseeded SHA-256 hex digest of arbitrary content
///
/// Identity-key fallback hashing must not depend on the pseudonymization
/// seed, so the same record yields the same key across differently-seeded
/// runs.
pub fn content_digest(input: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    let result = hasher.finalize();
    format!("{result:x}")
}
