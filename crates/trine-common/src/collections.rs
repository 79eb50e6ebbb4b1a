//! Collection type aliases for Trine.
//!
//! Vocabulary construction depends on insertion order for its tie break, so
//! the ordered variants are the ones used throughout. The hasher only affects
//! lookup speed, never iteration order.
//!
//! | Type | Use Case |
//! |------|----------|
//! | [`TrineIndexMap`] | Insertion-ordered counters |
//! | [`TrineIndexSet`] | Values already seen by a streaming scan |

use ahash::RandomState;

/// Ordered map preserving insertion order.
pub type TrineIndexMap<K, V> = indexmap::IndexMap<K, V, RandomState>;

/// Ordered set preserving insertion order. The index of an entry is stable
/// for as long as nothing is removed.
pub type TrineIndexSet<T> = indexmap::IndexSet<T, RandomState>;

/// Create a new empty [`TrineIndexMap`].
#[inline]
#[must_use]
pub fn trine_index_map<K, V>() -> TrineIndexMap<K, V> {
    TrineIndexMap::with_hasher(RandomState::new())
}

/// Create a new empty [`TrineIndexSet`].
#[inline]
#[must_use]
pub fn trine_index_set<T>() -> TrineIndexSet<T> {
    TrineIndexSet::with_hasher(RandomState::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_map_keeps_insertion_order() {
        let mut map = trine_index_map::<&str, u32>();
        map.insert("zeta", 1);
        map.insert("alpha", 2);
        map.insert("mid", 3);
        let keys: Vec<_> = map.keys().copied().collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_index_set_positions() {
        let mut set = trine_index_set::<u64>();
        assert_eq!(set.insert_full(7), (0, true));
        assert_eq!(set.insert_full(3), (1, true));
        assert_eq!(set.insert_full(7), (0, false));
        assert_eq!(set.get_index_of(&3), Some(1));
    }
}
