//! Insertion-ordered term counter.

use trine_common::collections::{TrineIndexMap, trine_index_map};
use trine_common::types::{TermKey, TermKeyRef};

/// Counts occurrences per key and remembers first-seen order.
///
/// Ranking sorts by descending count with a stable sort, so keys seen earlier
/// win ties. This makes ids reproducible for a given input.
#[derive(Debug, Clone)]
pub struct FrequencyTable {
    counts: TrineIndexMap<TermKey, u64>,
}

impl FrequencyTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            counts: trine_index_map(),
        }
    }

    /// Records one occurrence of `key`.
    #[inline]
    pub fn record(&mut self, key: TermKeyRef<'_>) {
        if let Some(count) = self.counts.get_mut(&key) {
            *count += 1;
        } else {
            self.counts.insert(key.to_owned_key(), 1);
        }
    }

    /// Returns the count recorded for `key`.
    #[must_use]
    pub fn count(&self, key: TermKeyRef<'_>) -> u64 {
        self.counts.get(&key).copied().unwrap_or(0)
    }

    /// Number of distinct keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Returns `true` if nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Folds a table counted over a later part of the same input into this one.
    ///
    /// Counts are summed. Keys already present keep their position; new keys
    /// are appended in `later`'s first-seen order. Merging shard tables in
    /// input order therefore yields exactly the table a single sequential
    /// scan would have built.
    pub fn merge(&mut self, later: FrequencyTable) {
        self.counts.reserve(later.counts.len());
        for (key, count) in later.counts {
            *self.counts.entry(key).or_insert(0) += count;
        }
    }

    /// Consumes the table and returns its keys in rank order.
    #[must_use]
    pub fn into_ranked(self) -> Vec<TermKey> {
        let mut entries: Vec<(TermKey, u64)> = self.counts.into_iter().collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries.into_iter().map(|(key, _)| key).collect()
    }
}

impl Default for FrequencyTable {
    fn default() -> Self {
        Self::new()
    }
}
