//! Vocabulary lookup keys.
//!
//! A term is looked up either by its raw bytes or by a 64-bit content hash.
//! [`TermKey`] is the owned form stored in vocabularies; [`TermKeyRef`] is the
//! borrowed form produced per parsed line, so lookups never allocate.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use crate::utils::hash::term_hash;

/// How terms are turned into lookup keys.
///
/// The builder and the mapper of one dataset must use the same mode; mixing
/// them produces keys that never match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyMode {
    /// Keys are the raw term bytes.
    #[default]
    Raw,
    /// Keys are the 64-bit hash of the term bytes. Collisions are not detected.
    Hashed,
}

impl KeyMode {
    /// Returns `true` for [`KeyMode::Hashed`].
    #[inline]
    #[must_use]
    pub const fn is_hashed(self) -> bool {
        matches!(self, Self::Hashed)
    }

    /// Computes the borrowed lookup key of a term.
    #[inline]
    #[must_use]
    pub fn key_of(self, term: &[u8]) -> TermKeyRef<'_> {
        match self {
            Self::Raw => TermKeyRef::Raw(term),
            Self::Hashed => TermKeyRef::Hash(term_hash(term)),
        }
    }

    /// Parses one vocabulary line (without its line break) back into a key.
    ///
    /// Raw vocabularies store the term itself; hashed vocabularies store the
    /// decimal hash. Returns `None` if a hashed line is not a valid `u64`.
    #[must_use]
    pub fn parse_stored(self, line: &[u8]) -> Option<TermKey> {
        match self {
            Self::Raw => Some(TermKey::Raw(line.into())),
            Self::Hashed => std::str::from_utf8(line)
                .ok()
                .and_then(|s| s.parse::<u64>().ok())
                .map(TermKey::Hash),
        }
    }
}

/// Owned vocabulary key.
#[derive(Clone, PartialEq, Eq)]
pub enum TermKey {
    /// Raw term bytes.
    Raw(Box<[u8]>),
    /// Content hash of the term bytes.
    Hash(u64),
}

impl TermKey {
    /// Returns the borrowed form of this key.
    #[inline]
    #[must_use]
    pub fn as_key_ref(&self) -> TermKeyRef<'_> {
        match self {
            Self::Raw(bytes) => TermKeyRef::Raw(bytes),
            Self::Hash(h) => TermKeyRef::Hash(*h),
        }
    }

    /// Writes the key as it is stored in a vocabulary file, without a line break.
    ///
    /// # Errors
    ///
    /// Returns an error if the writer fails.
    pub fn write_to<W: Write + ?Sized>(&self, writer: &mut W) -> io::Result<()> {
        match self {
            Self::Raw(bytes) => writer.write_all(bytes),
            Self::Hash(h) => write!(writer, "{h}"),
        }
    }
}

impl Hash for TermKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_key_ref().hash(state);
    }
}

impl fmt::Debug for TermKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.as_key_ref(), f)
    }
}

impl fmt::Display for TermKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.as_key_ref(), f)
    }
}

impl From<TermKeyRef<'_>> for TermKey {
    fn from(key: TermKeyRef<'_>) -> Self {
        key.to_owned_key()
    }
}

/// Borrowed vocabulary key.
///
/// Hashes and compares identically to the [`TermKey`] it was derived from, so
/// it can be used directly for map lookups.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum TermKeyRef<'a> {
    /// Raw term bytes.
    Raw(&'a [u8]),
    /// Content hash of the term bytes.
    Hash(u64),
}

impl TermKeyRef<'_> {
    /// Copies the key into its owned form.
    #[must_use]
    pub fn to_owned_key(self) -> TermKey {
        match self {
            Self::Raw(bytes) => TermKey::Raw(bytes.into()),
            Self::Hash(h) => TermKey::Hash(h),
        }
    }
}

impl Hash for TermKeyRef<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Self::Raw(bytes) => {
                state.write_u8(0);
                bytes.hash(state);
            }
            Self::Hash(h) => {
                state.write_u8(1);
                state.write_u64(*h);
            }
        }
    }
}

impl indexmap::Equivalent<TermKey> for TermKeyRef<'_> {
    #[inline]
    fn equivalent(&self, key: &TermKey) -> bool {
        *self == key.as_key_ref()
    }
}

impl fmt::Debug for TermKeyRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Raw(bytes) => write!(f, "Raw({:?})", String::from_utf8_lossy(bytes)),
            Self::Hash(h) => write!(f, "Hash({h})"),
        }
    }
}

impl fmt::Display for TermKeyRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Raw(bytes) => f.write_str(&String::from_utf8_lossy(bytes)),
            Self::Hash(h) => write!(f, "{h}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::hash::BuildHasher;

    fn hash_one<T: Hash>(value: &T) -> u64 {
        ahash::RandomState::with_seeds(1, 2, 3, 4).hash_one(value)
    }

    #[test]
    fn test_borrowed_and_owned_keys_hash_alike() {
        let owned = TermKey::Raw(b"http://example.org/a".as_slice().into());
        assert_eq!(hash_one(&owned), hash_one(&owned.as_key_ref()));

        let hashed = TermKey::Hash(42);
        assert_eq!(hash_one(&hashed), hash_one(&TermKeyRef::Hash(42)));
    }

    #[test]
    fn test_raw_and_hash_keys_never_compare_equal() {
        assert_ne!(TermKeyRef::Raw(b"42"), TermKeyRef::Hash(42));
    }

    #[test]
    fn test_hashed_mode_round_trips_through_storage() {
        let key = KeyMode::Hashed.key_of(b"\"Paris\"@fr").to_owned_key();
        let mut stored = Vec::new();
        key.write_to(&mut stored).unwrap();
        assert_eq!(KeyMode::Hashed.parse_stored(&stored), Some(key));
    }

    #[test]
    fn test_hashed_mode_rejects_non_numeric_lines() {
        assert_eq!(KeyMode::Hashed.parse_stored(b"not-a-hash"), None);
        assert_eq!(KeyMode::Hashed.parse_stored(b""), None);
    }

    #[test]
    fn test_raw_mode_stores_term_verbatim() {
        let key = KeyMode::Raw.key_of(b"_:b0").to_owned_key();
        let mut stored = Vec::new();
        key.write_to(&mut stored).unwrap();
        assert_eq!(stored, b"_:b0");
        assert_eq!(key.to_string(), "_:b0");
    }
}
