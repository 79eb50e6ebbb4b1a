//! Object sub-classification.
//!
//! The heuristic looks only at the shape of the lexical form; it is not a
//! literal datatype parser. A datatype IRI or language tag after the literal
//! does not influence the result.

use trine_common::types::ObjectClass;

/// Result of classifying one object term.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// An integer value, ordered numerically.
    Numeric(u64),
    /// A date-shaped value, ordered lexicographically.
    Date,
    /// Anything else, ordered by frequency.
    String,
}

impl Classification {
    /// Returns the object class without its payload.
    #[must_use]
    pub const fn class(self) -> ObjectClass {
        match self {
            Self::Numeric(_) => ObjectClass::Numeric,
            Self::Date => ObjectClass::Date,
            Self::String => ObjectClass::String,
        }
    }
}

/// Decides which sub-vocabulary an object term belongs to.
pub trait ObjectClassifier: Send + Sync {
    /// Classifies an object span as produced by the term parser.
    fn classify(&self, object: &[u8]) -> Classification;
}

/// The three-rule shape heuristic.
///
/// 1. A 10-byte form with `-` at offsets 4 and 7 is a date.
/// 2. A form that parses as an unsigned 64-bit integer is numeric.
/// 3. Everything else is a string.
///
/// The lexical form is the span itself, or the content between the first two
/// quotes when the span is a quoted literal (triple grammar keeps quotes).
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicClassifier;

impl HeuristicClassifier {
    /// Returns `true` for `yyyy-mm-dd` shaped forms.
    #[must_use]
    pub fn is_date(form: &[u8]) -> bool {
        form.len() == 10 && form[4] == b'-' && form[7] == b'-'
    }
}

/// Extracts the lexical form of an object span.
///
/// Quote-delimited spans yield the content between the first two quotes;
/// anything else is returned as is.
#[must_use]
pub fn lexical_form(object: &[u8]) -> &[u8] {
    match object.strip_prefix(b"\"") {
        Some(rest) => match rest.iter().position(|&b| b == b'"') {
            Some(end) => &rest[..end],
            None => rest,
        },
        None => object,
    }
}

impl ObjectClassifier for HeuristicClassifier {
    fn classify(&self, object: &[u8]) -> Classification {
        let form = lexical_form(object);
        if Self::is_date(form) {
            return Classification::Date;
        }
        match std::str::from_utf8(form).ok().and_then(|s| s.parse::<u64>().ok()) {
            Some(value) => Classification::Numeric(value),
            None => Classification::String,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification_rules() {
        let c = HeuristicClassifier;
        assert_eq!(c.classify(b"42"), Classification::Numeric(42));
        assert_eq!(c.classify(b"2019-07-21"), Classification::Date);
        assert_eq!(c.classify(b"Paris"), Classification::String);
        assert_eq!(c.classify(b"-3"), Classification::String);
        assert_eq!(c.classify(b"4.5"), Classification::String);
        assert_eq!(c.classify(b""), Classification::String);
    }

    #[test]
    fn test_date_shape_wins_over_other_rules() {
        // Shape only: no calendar validation.
        assert_eq!(
            HeuristicClassifier.classify(b"abcd-ef-gh"),
            Classification::Date
        );
        assert_eq!(
            HeuristicClassifier.classify(b"2019-7-21"),
            Classification::String
        );
    }

    #[test]
    fn test_quoted_literals_use_their_lexical_form() {
        let c = HeuristicClassifier;
        assert_eq!(
            c.classify(b"\"17\"^^<http://www.w3.org/2001/XMLSchema#integer>"),
            Classification::Numeric(17)
        );
        assert_eq!(c.classify(b"\"2001-01-01\"@en"), Classification::Date);
        assert_eq!(lexical_form(b"\"open"), b"open");
    }

    #[test]
    fn test_class_of_classification() {
        assert_eq!(Classification::Numeric(1).class(), ObjectClass::Numeric);
        assert_eq!(Classification::Date.class(), ObjectClass::Date);
    }
}
