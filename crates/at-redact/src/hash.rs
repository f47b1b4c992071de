//! SHA-256 digest for hashed fields.
//!
//! Field hashing is unkeyed and untruncated: downstream consumers correlate
//! hashed identifiers across events and across processes, so the transform
//! must be bit-exact everywhere. A fresh digest context is constructed per
//! value, keeping concurrent use safe without shared state.

use sha2::{Digest, Sha256};

use crate::error::{RedactError, Result};

/// Known-answer vector: SHA-256 of the ASCII string `"abc"` (FIPS 180-2).
const SELF_CHECK_INPUT: &str = "abc";
const SELF_CHECK_DIGEST: &str = "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad";

/// Compute the lowercase hex SHA-256 digest of a value's UTF-8 bytes.
pub fn sha256_hex(value: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(value.as_bytes());
    hex::encode(hasher.finalize())
}

/// Verify the digest primitive against the known-answer vector.
///
/// A mismatch means the primitive is unusable; callers must refuse to
/// initialize rather than emit values the policy says to hash.
pub fn self_check() -> Result<()> {
    if sha256_hex(SELF_CHECK_INPUT) == SELF_CHECK_DIGEST {
        Ok(())
    } else {
        Err(RedactError::DigestUnavailable)
    }
}
