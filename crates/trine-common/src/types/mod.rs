//! Core type definitions for Trine.
//!
//! - Term roles and object sub-classes ([`Role`], [`ObjectClass`])
//! - Lookup keys ([`TermKey`], [`TermKeyRef`], [`KeyMode`])
//! - Dense identifiers and encoded triples ([`TermId`], [`Triple`])

mod id;
mod key;
mod role;

pub use id::{TermId, Triple};
pub use key::{KeyMode, TermKey, TermKeyRef};
pub use role::{ObjectClass, Role};
