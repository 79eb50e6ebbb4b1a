//! Quad-flavored statement grammar.

use trine_common::utils::error::FieldBoundary;

use super::{TermSpans, iri_close, token_end};

/// Splits a quad line into subject, predicate and object spans.
///
/// - Subject: `<iri>` or a bare token (blank node) up to the next space.
/// - Predicate: `<iri>`.
/// - Object: `<iri>`, `"literal"` (up to the first closing quote), or a bare
///   token up to the next whitespace.
///
/// Fields are separated by exactly one space. IRI and literal spans exclude
/// their delimiters. Whatever follows the object (language tag, datatype,
/// graph term, ` .`) is ignored.
///
/// # Errors
///
/// Returns [`FieldBoundary::SubjectPredicate`] or
/// [`FieldBoundary::PredicateObject`] when the separator or the predicate IRI
/// does not match, and [`FieldBoundary::ObjectEnd`] when the object's closing
/// delimiter is missing.
pub fn parse_quad(line: &[u8]) -> Result<TermSpans<'_>, FieldBoundary> {
    let (subject, pos) = match line.first() {
        Some(b'<') => {
            let end = iri_close(line, 1).ok_or(FieldBoundary::SubjectPredicate)?;
            (&line[1..end], end + 1)
        }
        _ => {
            let end = token_end(line, 0);
            if end == 0 {
                return Err(FieldBoundary::SubjectPredicate);
            }
            (&line[..end], end)
        }
    };
    let pos = single_space(line, pos).ok_or(FieldBoundary::SubjectPredicate)?;

    if line.get(pos) != Some(&b'<') {
        return Err(FieldBoundary::SubjectPredicate);
    }
    let end = iri_close(line, pos + 1).ok_or(FieldBoundary::PredicateObject)?;
    let predicate = &line[pos + 1..end];
    let pos = single_space(line, end + 1).ok_or(FieldBoundary::PredicateObject)?;

    let object = match line.get(pos) {
        Some(b'<') => {
            let end = iri_close(line, pos + 1).ok_or(FieldBoundary::ObjectEnd)?;
            &line[pos + 1..end]
        }
        Some(b'"') => {
            let end = line[pos + 1..]
                .iter()
                .position(|&b| b == b'"')
                .ok_or(FieldBoundary::ObjectEnd)?;
            &line[pos + 1..pos + 1 + end]
        }
        Some(b' ' | b'\t' | b'\r' | b'\n') | None => return Err(FieldBoundary::PredicateObject),
        Some(_) => &line[pos..token_end(line, pos)],
    };

    Ok(TermSpans {
        subject,
        predicate,
        object,
    })
}

#[inline]
fn single_space(line: &[u8], pos: usize) -> Option<usize> {
    (line.get(pos) == Some(&b' ')).then_some(pos + 1)
}
