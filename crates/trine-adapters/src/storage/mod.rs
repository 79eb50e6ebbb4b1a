//! File-level storage helpers.
//!
//! - [`layout`] - Names of every file derived from a dataset basename
//! - [`input`] - Plain or gzip input streams
//! - [`mmap`] - Read-only memory maps for sharded scans
//! - [`output`] - Write-then-rename output files

pub mod input;
pub mod layout;
pub mod mmap;
pub mod output;

pub use input::{Compression, open_input};
pub use layout::DatasetLayout;
pub use mmap::MappedFile;
pub use output::write_atomically;
