//! Frequency-ranked vocabulary construction.
//!
//! One scan over the statements counts every term per role. Ranks are then
//! assigned so that frequent terms get small ids:
//!
//! | Role | Order |
//! |------|-------|
//! | Subject, Predicate | descending frequency, first-seen breaks ties |
//! | Object (classified) | numerics ascending, then dates ascending, then strings by frequency |
//! | Object (unclassified) | as subjects |
//!
//! The rank of a term is its dense id; vocabulary files carry no explicit ids.

mod builder;
mod classify;
mod frequency;
mod shard;

pub use builder::{
    ObjectVocabulary, RoleSelection, Vocabularies, Vocabulary, VocabularyBuilder,
    VocabularyConfig,
};
pub use classify::{Classification, HeuristicClassifier, ObjectClassifier, lexical_form};
pub use frequency::FrequencyTable;
pub use shard::split_at_lines;
