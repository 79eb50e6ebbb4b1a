//! CLI command implementations.

pub mod info;
pub mod map;
pub mod run;
pub mod stats;
pub mod vocab;
