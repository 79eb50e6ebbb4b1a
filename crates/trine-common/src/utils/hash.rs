//! Stable content hashing for term keys.
//!
//! Hashed vocabularies are written to disk and re-read by a later process, so
//! the hash must not depend on a per-process seed. XXH64 with a fixed seed is
//! stable across runs and platforms.

use xxhash_rust::xxh64::xxh64;

/// Seed used for all term hashes.
pub const TERM_HASH_SEED: u64 = 0;

/// Hashes the raw bytes of a term.
#[inline]
#[must_use]
pub fn term_hash(term: &[u8]) -> u64 {
    xxh64(term, TERM_HASH_SEED)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_is_stable() {
        assert_eq!(
            term_hash(b"http://example.org/a"),
            term_hash(b"http://example.org/a")
        );
        assert_ne!(
            term_hash(b"http://example.org/a"),
            term_hash(b"http://example.org/b")
        );
    }

    #[test]
    fn test_empty_input_hash() {
        // Reference value of XXH64("", 0).
        assert_eq!(term_hash(b""), 0xEF46_DB37_51D8_E999);
    }
}
