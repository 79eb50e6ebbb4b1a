//! Term roles and object sub-classes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The position a term occupies in a statement.
///
/// Vocabularies are scoped by role: the same string appearing as a subject
/// and as an object receives two independent ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// First position.
    Subject,
    /// Second position.
    Predicate,
    /// Third position.
    Object,
}

impl Role {
    /// All roles in statement order.
    pub const ALL: [Role; 3] = [Role::Subject, Role::Predicate, Role::Object];

    /// Returns the lowercase singular name of the role.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Subject => "subject",
            Self::Predicate => "predicate",
            Self::Object => "object",
        }
    }

    /// Returns the column index of the role in an `s p o` row.
    #[inline]
    #[must_use]
    pub const fn column(self) -> usize {
        match self {
            Self::Subject => 0,
            Self::Predicate => 1,
            Self::Object => 2,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Syntactic sub-class of an object term.
///
/// Numeric and date objects get dense, ordered id ranges at the front of the
/// object vocabulary, where downstream encodings compress them best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectClass {
    /// An unsigned integer value.
    Numeric,
    /// A `yyyy-mm-dd` shaped value.
    Date,
    /// Everything else.
    String,
}

impl ObjectClass {
    /// Returns the lowercase name of the class.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Numeric => "numeric",
            Self::Date => "date",
            Self::String => "string",
        }
    }
}

impl fmt::Display for ObjectClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_columns_follow_statement_order() {
        let columns: Vec<usize> = Role::ALL.iter().map(|r| r.column()).collect();
        assert_eq!(columns, vec![0, 1, 2]);
    }

    #[test]
    fn test_role_display() {
        assert_eq!(Role::Predicate.to_string(), "predicate");
        assert_eq!(ObjectClass::Date.to_string(), "date");
    }
}
