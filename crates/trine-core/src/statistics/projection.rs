//! Single-pass distinct counting over one sorted projection.

use std::fmt;
use std::io::BufRead;

use serde::Serialize;
use tracing::debug;
use trine_common::collections::trine_index_set;
use trine_common::utils::error::{Error, Result, trim_line_break};

use crate::lines::LineReader;

/// One of the three sort orders of the mapped triples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Projection {
    /// Sorted by subject, then predicate.
    Spo,
    /// Sorted by predicate, then object.
    Pos,
    /// Sorted by object, then subject.
    Osp,
}

impl Projection {
    /// All projections in file order.
    pub const ALL: [Projection; 3] = [Projection::Spo, Projection::Pos, Projection::Osp];

    /// Lowercase name, also the file suffix.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Spo => "spo",
            Self::Pos => "pos",
            Self::Osp => "osp",
        }
    }

    /// Column indices of the key pair within a full `s p o` row.
    #[must_use]
    pub const fn columns(self) -> (usize, usize) {
        match self {
            Self::Spo => (0, 1),
            Self::Pos => (1, 2),
            Self::Osp => (2, 0),
        }
    }

    /// Extracts the key pair from a row of two or three integers.
    fn key_pair(self, row: &[u64]) -> Option<(u64, u64)> {
        match *row {
            [a, b] => Some((a, b)),
            [_, _, _] => {
                let (a, b) = self.columns();
                Some((row[a], row[b]))
            }
            _ => None,
        }
    }

    /// Counts rows, distinct first values and distinct pairs of a sorted
    /// projection. Blank lines are ignored.
    ///
    /// Any sort order works as long as equal first values are contiguous and
    /// equal pairs are contiguous within them, so numeric and byte-wise
    /// (`LC_ALL=C sort`) orders are both accepted. Memory grows with the
    /// number of distinct first values.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRow`] for a row that is not two or three
    /// unsigned integers, [`Error::UnsortedProjection`] for a first value or
    /// pair that reappears after its run ended, and [`Error::Io`] if reading
    /// fails.
    pub fn scan<R: BufRead>(self, reader: R, source_name: &str) -> Result<ProjectionCounts> {
        let mut counts = ProjectionCounts::default();
        let mut previous: Option<(u64, u64)> = None;
        // First values whose run has ended, and second values whose run has
        // ended within the current first value.
        let mut closed_first = trine_index_set::<u64>();
        let mut closed_second = trine_index_set::<u64>();
        let mut values = Vec::with_capacity(3);
        let mut lines = LineReader::new(reader);

        while let Some((line_no, line)) = lines.next_line()? {
            let row = trim_line_break(line);
            values.clear();
            for field in row.split(u8::is_ascii_whitespace).filter(|f| !f.is_empty()) {
                let value = std::str::from_utf8(field)
                    .ok()
                    .and_then(|s| s.parse::<u64>().ok())
                    .ok_or_else(|| {
                        Error::invalid_row(source_name, line_no, row, "not an integer")
                    })?;
                values.push(value);
            }
            if values.is_empty() {
                continue;
            }
            let pair = self.key_pair(&values).ok_or_else(|| {
                Error::invalid_row(source_name, line_no, row, "expected 2 or 3 columns")
            })?;

            counts.rows += 1;
            match previous {
                None => {
                    counts.distinct_first += 1;
                    counts.distinct_pairs += 1;
                }
                Some(prev) if pair.0 != prev.0 => {
                    closed_first.insert(prev.0);
                    if closed_first.contains(&pair.0) {
                        return Err(ungrouped(source_name, line_no));
                    }
                    closed_second.clear();
                    counts.distinct_first += 1;
                    counts.distinct_pairs += 1;
                }
                Some(prev) if pair.1 != prev.1 => {
                    closed_second.insert(prev.1);
                    if closed_second.contains(&pair.1) {
                        return Err(ungrouped(source_name, line_no));
                    }
                    counts.distinct_pairs += 1;
                }
                Some(_) => {}
            }
            previous = Some(pair);
        }

        debug!(
            source = source_name,
            rows = counts.rows,
            distinct_first = counts.distinct_first,
            distinct_pairs = counts.distinct_pairs,
            "scanned projection"
        );
        Ok(counts)
    }
}

fn ungrouped(source_name: &str, row: u64) -> Error {
    Error::UnsortedProjection {
        source_name: source_name.to_string(),
        row,
    }
}

impl fmt::Display for Projection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Counters produced by one projection scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ProjectionCounts {
    /// Number of rows.
    pub rows: u64,
    /// Number of distinct values in the first key column.
    pub distinct_first: u64,
    /// Number of distinct key pairs.
    pub distinct_pairs: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(projection: Projection, input: &str) -> Result<ProjectionCounts> {
        projection.scan(input.as_bytes(), projection.name())
    }

    #[test]
    fn test_pair_rows() {
        let counts = scan(Projection::Spo, "0 0\n0 0\n0 1\n").unwrap();
        assert_eq!(
            counts,
            ProjectionCounts {
                rows: 3,
                distinct_first: 1,
                distinct_pairs: 2,
            }
        );
    }

    #[test]
    fn test_triple_rows_use_projection_columns() {
        // POS order: sorted on (p, o)
        let counts = scan(Projection::Pos, "4 0 1\n2 0 1\n1 0 3\n0 2 0\n").unwrap();
        assert_eq!(counts.rows, 4);
        assert_eq!(counts.distinct_first, 2);
        assert_eq!(counts.distinct_pairs, 3);

        // OSP order: sorted on (o, s)
        let counts = scan(Projection::Osp, "1 0 0\n1 2 0\n0 0 5\n").unwrap();
        assert_eq!(counts.distinct_first, 2);
        assert_eq!(counts.distinct_pairs, 2);
    }

    #[test]
    fn test_empty_and_blank_input() {
        assert_eq!(
            scan(Projection::Osp, "").unwrap(),
            ProjectionCounts::default()
        );
        assert_eq!(scan(Projection::Osp, "\n  \n").unwrap().rows, 0);
    }

    #[test]
    fn test_invalid_rows() {
        let err = scan(Projection::Spo, "0 1\n0 x\n").unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidRow {
                row: 2,
                reason: "not an integer",
                ..
            }
        ));

        let err = scan(Projection::Spo, "0 1 2 3\n").unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidRow {
                reason: "expected 2 or 3 columns",
                ..
            }
        ));

        assert!(scan(Projection::Spo, "-1 0\n").is_err());
    }

    #[test]
    fn test_reopened_first_value_is_rejected() {
        let err = scan(Projection::Spo, "0 1\n1 0\n0 5\n").unwrap_err();
        assert!(matches!(err, Error::UnsortedProjection { row: 3, .. }));
        assert_eq!(err.to_string(), "spo is not sorted at row 3");
    }

    #[test]
    fn test_byte_sorted_input_is_accepted() {
        // `LC_ALL=C sort` puts 10 before 2
        let counts = scan(Projection::Spo, "1 0\n1 5\n10 0\n2 0\n2 0\n").unwrap();
        assert_eq!(
            counts,
            ProjectionCounts {
                rows: 5,
                distinct_first: 3,
                distinct_pairs: 4,
            }
        );

        let counts = scan(Projection::Spo, "3 10\n3 10\n3 9\n").unwrap();
        assert_eq!(counts.distinct_first, 1);
        assert_eq!(counts.distinct_pairs, 2);
    }

    #[test]
    fn test_split_pair_run_is_rejected() {
        let err = scan(Projection::Spo, "4 1\n4 2\n4 1\n").unwrap_err();
        assert!(matches!(err, Error::UnsortedProjection { row: 3, .. }));

        // a second value may recur under a new first value
        let counts = scan(Projection::Spo, "4 1\n5 2\n5 1\n").unwrap();
        assert_eq!(counts.distinct_pairs, 3);
    }

    #[test]
    fn test_projection_names() {
        let names: Vec<String> = Projection::ALL.iter().map(ToString::to_string).collect();
        assert_eq!(names, vec!["spo", "pos", "osp"]);
    }
}
