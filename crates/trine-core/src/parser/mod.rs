//! Zero-copy term parser for line-oriented RDF.
//!
//! A statement line is split into three byte spans borrowed from the input.
//! Nothing is unescaped or allocated, which keeps the parser cheap enough to
//! run over billions of lines.
//!
//! Two grammars are supported, and one run uses exactly one of them:
//!
//! | Grammar | Input | Object span |
//! |---------|-------|-------------|
//! | [`Grammar::Quad`] | N-Quads, single-space separated | IRI or literal content without delimiters |
//! | [`Grammar::Triple`] | N-Triples | IRI content, or the rest of the line for literals |
//!
//! # Known limitation
//!
//! Literals are not unescaped. In quad mode a literal ends at the first `"`
//! after its opening quote, so a literal containing an escaped quote is cut
//! short. Vocabularies built from existing dumps depend on this behavior.

mod quad;
mod triple;

pub use quad::parse_quad;
pub use triple::parse_triple;

use trine_common::types::Role;
use trine_common::utils::error::FieldBoundary;

/// The line grammar used for a whole run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Grammar {
    /// Quad-flavored lines with an optional graph term.
    #[default]
    Quad,
    /// Plain triple lines, object is everything up to the terminator.
    Triple,
}

impl Grammar {
    /// Parses one line with this grammar.
    ///
    /// # Errors
    ///
    /// Returns the field boundary at which the line stopped matching.
    #[inline]
    pub fn parse(self, line: &[u8]) -> Result<TermSpans<'_>, FieldBoundary> {
        match self {
            Self::Quad => parse_quad(line),
            Self::Triple => parse_triple(line),
        }
    }

    /// Returns the lowercase name of the grammar.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Quad => "quad",
            Self::Triple => "triple",
        }
    }
}

/// The three term spans of one statement, borrowed from the input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TermSpans<'a> {
    /// Subject span.
    pub subject: &'a [u8],
    /// Predicate span.
    pub predicate: &'a [u8],
    /// Object span.
    pub object: &'a [u8],
}

impl<'a> TermSpans<'a> {
    /// Returns the span for a role.
    #[inline]
    #[must_use]
    pub fn term(&self, role: Role) -> &'a [u8] {
        match role {
            Role::Subject => self.subject,
            Role::Predicate => self.predicate,
            Role::Object => self.object,
        }
    }
}

/// Returns `true` for lines that carry no statement (blank or `#` comment).
#[inline]
#[must_use]
pub fn is_blank_or_comment(line: &[u8]) -> bool {
    match line.iter().position(|b| !b.is_ascii_whitespace()) {
        None => true,
        Some(i) => line[i] == b'#',
    }
}

/// Finds the `>` closing an IRI whose content starts at `from`.
///
/// IRIs never contain whitespace or `<`; hitting one means the opening `<`
/// was never closed.
#[inline]
fn iri_close(line: &[u8], from: usize) -> Option<usize> {
    for (i, &b) in line.iter().enumerate().skip(from) {
        match b {
            b'>' => return Some(i),
            b' ' | b'\t' | b'\r' | b'\n' | b'<' => return None,
            _ => {}
        }
    }
    None
}

/// Index of the first whitespace byte at or after `from`, or the line length.
#[inline]
fn token_end(line: &[u8], from: usize) -> usize {
    line.iter()
        .skip(from)
        .position(|&b| matches!(b, b' ' | b'\t' | b'\r' | b'\n'))
        .map_or(line.len(), |i| from + i)
}
