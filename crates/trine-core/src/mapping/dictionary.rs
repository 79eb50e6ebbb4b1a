//! Term to id lookup tables loaded from vocabulary files.

use std::io::BufRead;

use tracing::{debug, warn};
use trine_common::collections::{TrineIndexMap, trine_index_map};
use trine_common::types::{KeyMode, TermId, TermKey, TermKeyRef};
use trine_common::utils::error::{Error, Result, trim_line_break};

use crate::lines::LineReader;
use crate::vocab::Vocabulary;

/// Maps the keys of one role to their dense ids.
///
/// The id of a term is the 0-based line it appears on in the vocabulary
/// file.
#[derive(Debug, Clone)]
pub struct TermDictionary {
    ids: TrineIndexMap<TermKey, TermId>,
    key_mode: KeyMode,
}

impl TermDictionary {
    /// Loads a vocabulary file from `reader`.
    ///
    /// # Errors
    ///
    /// See [`load_named`](Self::load_named).
    pub fn load<R: BufRead>(reader: R, key_mode: KeyMode) -> Result<Self> {
        Self::load_named(reader, key_mode, "vocabulary")
    }

    /// Loads a vocabulary file, naming it `source_name` in errors.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRow`] for a hashed line that is not a decimal
    /// `u64` and for a repeated raw term, and [`Error::Io`] if reading fails.
    /// A repeated hash is a collision: the first id is kept and a warning is
    /// logged.
    pub fn load_named<R: BufRead>(
        reader: R,
        key_mode: KeyMode,
        source_name: &str,
    ) -> Result<Self> {
        let mut ids = trine_index_map();
        let mut lines = LineReader::new(reader);
        let mut next_id = 0u64;
        while let Some((line_no, line)) = lines.next_line()? {
            let term = trim_line_break(line);
            let key = key_mode.parse_stored(term).ok_or_else(|| {
                Error::invalid_row(source_name, line_no, term, "not a decimal hash")
            })?;
            let id = TermId::new(next_id);
            next_id += 1;

            match ids.entry(key) {
                indexmap::map::Entry::Vacant(slot) => {
                    slot.insert(id);
                }
                indexmap::map::Entry::Occupied(slot) => match key_mode {
                    KeyMode::Raw => {
                        return Err(Error::invalid_row(
                            source_name,
                            line_no,
                            term,
                            "duplicate term",
                        ));
                    }
                    KeyMode::Hashed => {
                        warn!(
                            source = source_name,
                            line = line_no,
                            "hash {} repeats id {}; keeping the first",
                            slot.key(),
                            slot.get()
                        );
                    }
                },
            }
        }
        debug!(source = source_name, "loaded {} keys", ids.len());
        Ok(Self { ids, key_mode })
    }

    /// Builds a dictionary from an in-memory vocabulary.
    #[must_use]
    pub fn from_vocabulary(vocabulary: &Vocabulary, key_mode: KeyMode) -> Self {
        let mut ids = trine_index_map();
        for (i, term) in vocabulary.terms().iter().enumerate() {
            ids.entry(term.clone()).or_insert_with(|| TermId::from(i));
        }
        Self { ids, key_mode }
    }

    /// The key mode the dictionary was loaded with.
    #[must_use]
    pub fn key_mode(&self) -> KeyMode {
        self.key_mode
    }

    /// Number of distinct keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns `true` if the dictionary is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Looks up the id of a key.
    #[inline]
    #[must_use]
    pub fn id(&self, key: TermKeyRef<'_>) -> Option<TermId> {
        self.ids.get(&key).copied()
    }

    /// Looks up the id of a term's bytes under this dictionary's key mode.
    #[inline]
    #[must_use]
    pub fn resolve(&self, term: &[u8]) -> Option<TermId> {
        self.id(self.key_mode.key_of(term))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trine_common::types::Role;
    use trine_common::utils::hash::term_hash;

    #[test]
    fn test_ids_follow_line_order() {
        let dict = TermDictionary::load(&b"b\na\nc\n"[..], KeyMode::Raw).unwrap();
        assert_eq!(dict.len(), 3);
        assert_eq!(dict.resolve(b"b"), Some(TermId::new(0)));
        assert_eq!(dict.resolve(b"c"), Some(TermId::new(2)));
        assert_eq!(dict.resolve(b"d"), None);
    }

    #[test]
    fn test_crlf_vocabulary() {
        let dict = TermDictionary::load(&b"x\r\ny"[..], KeyMode::Raw).unwrap();
        assert_eq!(dict.resolve(b"x"), Some(TermId::new(0)));
        assert_eq!(dict.resolve(b"y"), Some(TermId::new(1)));
    }

    #[test]
    fn test_hashed_vocabulary_stores_decimal_hashes() {
        let file = format!("{}\n{}\n", term_hash(b"p1"), term_hash(b"p2"));
        let dict = TermDictionary::load(file.as_bytes(), KeyMode::Hashed).unwrap();
        assert_eq!(dict.resolve(b"p2"), Some(TermId::new(1)));
        assert_eq!(dict.resolve(b"p3"), None);
    }

    #[test]
    fn test_hashed_collision_keeps_first_id() {
        let h = term_hash(b"x");
        let file = format!("{h}\n{}\n{h}\n", term_hash(b"y"));
        let dict = TermDictionary::load(file.as_bytes(), KeyMode::Hashed).unwrap();
        assert_eq!(dict.len(), 2);
        assert_eq!(dict.resolve(b"x"), Some(TermId::new(0)));
    }

    #[test]
    fn test_invalid_rows_are_rejected() {
        let err = TermDictionary::load_named(&b"12\nabc\n"[..], KeyMode::Hashed, "p.vocab")
            .unwrap_err();
        assert!(matches!(err, Error::InvalidRow { row: 2, .. }));
        assert!(err.to_string().contains("p.vocab"));

        let err = TermDictionary::load(&b"a\nb\na\n"[..], KeyMode::Raw).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidRow {
                row: 3,
                reason: "duplicate term",
                ..
            }
        ));
    }

    #[test]
    fn test_from_vocabulary_matches_file_load() {
        let vocab = Vocabulary::new(
            Role::Subject,
            vec![TermKey::Raw(b"s2"[..].into()), TermKey::Raw(b"s1"[..].into())],
        );
        let mut file = Vec::new();
        vocab.write_to(&mut file).unwrap();

        let loaded = TermDictionary::load(&file[..], KeyMode::Raw).unwrap();
        let direct = TermDictionary::from_vocabulary(&vocab, KeyMode::Raw);
        for term in [&b"s1"[..], b"s2", b"s3"] {
            assert_eq!(loaded.resolve(term), direct.resolve(term));
        }
    }
}
