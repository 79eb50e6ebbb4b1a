//! Error types for the Trine pipeline.
//!
//! Fatal errors abort the running stage and carry enough context (source,
//! line or row number, raw content) for an operator to locate the bad input.
//! [`Error::UnresolvedTerm`] is the one recoverable kind: the mapper logs it
//! and drops the affected triple.

use std::fmt;

use thiserror::Error;

use crate::types::Role;

/// Result type alias for Trine operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The field boundary at which a statement failed to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldBoundary {
    /// Between subject and predicate.
    SubjectPredicate,
    /// Between predicate and object.
    PredicateObject,
    /// The object's closing delimiter.
    ObjectEnd,
}

impl FieldBoundary {
    /// Returns the 1-based boundary index reported to operators.
    #[must_use]
    pub const fn index(self) -> u8 {
        match self {
            Self::SubjectPredicate => 1,
            Self::PredicateObject => 2,
            Self::ObjectEnd => 3,
        }
    }
}

impl fmt::Display for FieldBoundary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index())
    }
}

/// A statement the term parser could not split into three terms.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("malformed statement at line {line} (field boundary {field}): {content}")]
pub struct MalformedStatement {
    /// Where parsing stopped.
    pub field: FieldBoundary,
    /// 1-based line number in the input stream.
    pub line: u64,
    /// The offending line, lossily decoded and without its line break.
    pub content: String,
}

impl MalformedStatement {
    /// Builds the error for a raw input line.
    #[must_use]
    pub fn new(field: FieldBoundary, line: u64, raw: &[u8]) -> Self {
        Self {
            field,
            line,
            content: String::from_utf8_lossy(trim_line_break(raw)).into_owned(),
        }
    }
}

/// The main error type.
#[derive(Error, Debug)]
pub enum Error {
    /// A statement could not be parsed. Fatal.
    #[error(transparent)]
    Malformed(#[from] MalformedStatement),

    /// A parsed term has no entry in its role's vocabulary. Recoverable.
    #[error("'{term}' not found in {role} vocabulary at line {line}: {content}")]
    UnresolvedTerm {
        /// Vocabulary that was searched.
        role: Role,
        /// The missing term.
        term: String,
        /// 1-based line number in the input stream.
        line: u64,
        /// The full original statement.
        content: String,
    },

    /// Sorted projections disagree on the number of triples. Fatal.
    #[error("cardinality mismatch across projections: spo={spo}, pos={pos}, osp={osp} rows")]
    CardinalityMismatch {
        /// Rows in the SPO projection.
        spo: u64,
        /// Rows in the POS projection.
        pos: u64,
        /// Rows in the OSP projection.
        osp: u64,
    },

    /// A row of a numeric file could not be read. Fatal.
    #[error("invalid row {row} in {source_name} ({reason}): {content}")]
    InvalidRow {
        /// File or stream the row came from.
        source_name: String,
        /// 1-based row number.
        row: u64,
        /// The offending row.
        content: String,
        /// What was wrong with it.
        reason: &'static str,
    },

    /// A projection row reopens a key run that already ended. Fatal.
    #[error("{source_name} is not sorted at row {row}")]
    UnsortedProjection {
        /// File or stream the row came from.
        source_name: String,
        /// 1-based row number.
        row: u64,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Returns `true` if the pipeline may continue past this error.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::UnresolvedTerm { .. })
    }

    /// Builds an [`Error::InvalidRow`] from raw row bytes.
    #[must_use]
    pub fn invalid_row(source_name: &str, row: u64, raw: &[u8], reason: &'static str) -> Self {
        Self::InvalidRow {
            source_name: source_name.to_string(),
            row,
            content: String::from_utf8_lossy(trim_line_break(raw)).into_owned(),
            reason,
        }
    }
}

/// Strips a trailing `\n` or `\r\n`.
#[must_use]
pub fn trim_line_break(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}
