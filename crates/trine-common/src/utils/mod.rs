//! Common utilities used throughout Trine.
//!
//! - [`error`] - Error types like [`Error`] and [`MalformedStatement`](error::MalformedStatement)
//! - [`hash`] - Stable content hashing for term keys

pub mod error;
pub mod hash;

pub use error::{Error, Result};
pub use hash::term_hash;
