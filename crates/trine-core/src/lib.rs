//! # trine-core
//!
//! Core layer for Trine: the four pipeline stages over in-memory streams.
//!
//! This crate works on `BufRead`/`Write` handles and byte slices only; file
//! naming and decompression live in `trine-adapters`. It depends only on
//! `trine-common`.
//!
//! ## Modules
//!
//! - [`parser`] - Zero-copy term parser for quad and triple lines
//! - [`vocab`] - Frequency-ranked vocabulary construction
//! - [`mapping`] - Dictionary encoding of statements into id triples
//! - [`statistics`] - Cardinality statistics over sorted projections
//! - [`progress`] - Progress reporting hooks for long scans

pub mod mapping;
pub mod parser;
pub mod progress;
pub mod statistics;
pub mod vocab;

mod lines;

// Re-export commonly used types
pub use mapping::{DictionaryMapper, MapperConfig, MappingReport, TermDictionary};
pub use parser::{Grammar, TermSpans};
pub use progress::{NoProgress, PROGRESS_INTERVAL, Progress};
pub use statistics::{Projection, ProjectionCounts, StatsRecord, compute_stats};
pub use vocab::{
    ObjectVocabulary, RoleSelection, Vocabularies, Vocabulary, VocabularyBuilder,
    VocabularyConfig,
};
