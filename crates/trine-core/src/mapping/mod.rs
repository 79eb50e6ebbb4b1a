//! Dictionary encoding of statements.
//!
//! The mapper reads a statement stream a second time, after the vocabularies
//! exist, and replaces each term by its dense id. Output rows are
//! `"{subject} {predicate} {object}\n"` in input order; sorting them into the
//! three projections is left to an external sort.

mod dictionary;
mod mapper;

pub use dictionary::TermDictionary;
pub use mapper::{DictionaryMapper, MapperConfig, MappingReport};
