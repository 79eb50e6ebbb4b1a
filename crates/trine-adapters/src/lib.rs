//! # trine-adapters
//!
//! Adapters layer for Trine: the on-disk file layout of a dataset, input
//! decompression, and drivers that run each pipeline stage against files.
//!
//! ## Modules
//!
//! - [`storage`] - File naming, compressed input, memory mapping, safe output
//! - [`pipeline`] - One function per pipeline stage, file in and file out

pub mod pipeline;
pub mod storage;

pub use pipeline::{
    DatasetInfo, FileInfo, VocabularyRun, build_vocabularies, collect_stats, inspect, map_dataset,
};
pub use storage::{Compression, DatasetLayout, MappedFile, open_input, write_atomically};
