//! Plain triple grammar.

use trine_common::utils::error::{FieldBoundary, trim_line_break};

use super::{TermSpans, iri_close, token_end};

/// Splits a triple line into subject, predicate and object spans.
///
/// Fields may be separated by any run of spaces or tabs. Subject and
/// predicate follow the quad grammar. An IRI object yields its content; any
/// other object (literal or blank node) yields the rest of the line with the
/// trailing ` .` removed, quotes and suffixes included.
///
/// # Errors
///
/// Returns the field boundary at which the line stopped matching.
pub fn parse_triple(line: &[u8]) -> Result<TermSpans<'_>, FieldBoundary> {
    let line = trim_line_break(line);

    let pos = skip_blanks(line, 0);
    let (subject, pos) = match line.get(pos) {
        Some(b'<') => {
            let end = iri_close(line, pos + 1).ok_or(FieldBoundary::SubjectPredicate)?;
            (&line[pos + 1..end], end + 1)
        }
        Some(_) => {
            let end = token_end(line, pos);
            (&line[pos..end], end)
        }
        None => return Err(FieldBoundary::SubjectPredicate),
    };
    let pos = separator(line, pos).ok_or(FieldBoundary::SubjectPredicate)?;

    if line.get(pos) != Some(&b'<') {
        return Err(FieldBoundary::SubjectPredicate);
    }
    let end = iri_close(line, pos + 1).ok_or(FieldBoundary::PredicateObject)?;
    let predicate = &line[pos + 1..end];
    let pos = separator(line, end + 1).ok_or(FieldBoundary::PredicateObject)?;

    let object = if line.get(pos) == Some(&b'<') {
        let end = iri_close(line, pos + 1).ok_or(FieldBoundary::ObjectEnd)?;
        &line[pos + 1..end]
    } else {
        let rest = trim_blanks_end(&line[pos..]);
        let rest = rest.strip_suffix(b".").map_or(rest, trim_blanks_end);
        if rest.is_empty() {
            return Err(FieldBoundary::PredicateObject);
        }
        rest
    };

    Ok(TermSpans {
        subject,
        predicate,
        object,
    })
}

/// Requires at least one blank at `pos` and returns the first non-blank after it.
#[inline]
fn separator(line: &[u8], pos: usize) -> Option<usize> {
    let next = skip_blanks(line, pos);
    (next > pos && next < line.len()).then_some(next)
}

#[inline]
fn skip_blanks(line: &[u8], from: usize) -> usize {
    line.iter()
        .skip(from)
        .position(|&b| b != b' ' && b != b'\t')
        .map_or(line.len(), |i| from + i)
}

#[inline]
fn trim_blanks_end(bytes: &[u8]) -> &[u8] {
    let end = bytes
        .iter()
        .rposition(|&b| b != b' ' && b != b'\t')
        .map_or(0, |i| i + 1);
    &bytes[..end]
}
