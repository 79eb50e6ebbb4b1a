//! Dense term identifiers and encoded triples.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Dense 0-based identifier of a term within one role's vocabulary.
///
/// The id of a term is its line number in the vocabulary file.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[repr(transparent)]
pub struct TermId(pub u64);

impl TermId {
    /// Creates a new TermId from a raw u64 value.
    #[inline]
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw u64 value.
    #[inline]
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Debug for TermId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TermId({})", self.0)
    }
}

impl fmt::Display for TermId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for TermId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl From<usize> for TermId {
    fn from(id: usize) -> Self {
        Self(id as u64)
    }
}

impl From<TermId> for u64 {
    fn from(id: TermId) -> Self {
        id.0
    }
}

/// A dictionary-encoded triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Triple {
    /// Subject id.
    pub subject: TermId,
    /// Predicate id.
    pub predicate: TermId,
    /// Object id.
    pub object: TermId,
}

impl Triple {
    /// Creates a triple from its three ids.
    #[must_use]
    pub const fn new(subject: TermId, predicate: TermId, object: TermId) -> Self {
        Self {
            subject,
            predicate,
            object,
        }
    }
}

/// Formats as the `s p o` row written to mapped files.
impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.subject, self.predicate, self.object)
    }
}
