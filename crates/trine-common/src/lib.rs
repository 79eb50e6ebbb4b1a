//! # trine-common
//!
//! Foundation layer for Trine: the term data model, error types, and hashing.
//!
//! This crate has no internal dependencies. Every other Trine crate builds on
//! the types defined here, so it should be kept minimal.
//!
//! ## Modules
//!
//! - [`types`] - Core type definitions (Role, TermKey, TermId, Triple, etc.)
//! - [`collections`] - Insertion-ordered map and set aliases
//! - [`utils`] - Utility functions and helpers (hashing, errors)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod collections;
pub mod types;
pub mod utils;

// Re-export commonly used types at crate root
pub use types::{KeyMode, ObjectClass, Role, TermId, TermKey, TermKeyRef, Triple};
pub use utils::error::{Error, FieldBoundary, MalformedStatement, Result};
