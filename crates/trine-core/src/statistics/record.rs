//! The `.stats` record.

use std::io::{self, BufRead, Write};

use serde::{Deserialize, Serialize};
use tracing::info;
use trine_common::utils::error::{Error, Result, trim_line_break};

use super::projection::ProjectionCounts;
use crate::lines::LineReader;

/// Dataset cardinalities, written as seven integers, one per line, in field
/// order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsRecord {
    /// Number of triples.
    pub triples: u64,
    /// Distinct subjects.
    pub distinct_s: u64,
    /// Distinct predicates.
    pub distinct_p: u64,
    /// Distinct objects.
    pub distinct_o: u64,
    /// Distinct (subject, predicate) pairs.
    pub distinct_sp: u64,
    /// Distinct (predicate, object) pairs.
    pub distinct_po: u64,
    /// Distinct (object, subject) pairs.
    pub distinct_os: u64,
}

impl StatsRecord {
    /// Number of lines in a `.stats` file.
    pub const FIELDS: usize = 7;

    /// Combines the counts of the three projections.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CardinalityMismatch`] if the row counts differ.
    pub fn from_counts(
        spo: ProjectionCounts,
        pos: ProjectionCounts,
        osp: ProjectionCounts,
    ) -> Result<Self> {
        if spo.rows != pos.rows || spo.rows != osp.rows {
            return Err(Error::CardinalityMismatch {
                spo: spo.rows,
                pos: pos.rows,
                osp: osp.rows,
            });
        }
        let record = Self {
            triples: spo.rows,
            distinct_s: spo.distinct_first,
            distinct_p: pos.distinct_first,
            distinct_o: osp.distinct_first,
            distinct_sp: spo.distinct_pairs,
            distinct_po: pos.distinct_pairs,
            distinct_os: osp.distinct_pairs,
        };
        info!(
            triples = record.triples,
            subjects = record.distinct_s,
            predicates = record.distinct_p,
            objects = record.distinct_o,
            "computed statistics"
        );
        Ok(record)
    }

    /// Field values in file order.
    #[must_use]
    pub fn values(&self) -> [u64; Self::FIELDS] {
        [
            self.triples,
            self.distinct_s,
            self.distinct_p,
            self.distinct_o,
            self.distinct_sp,
            self.distinct_po,
            self.distinct_os,
        ]
    }

    /// Field names in file order.
    #[must_use]
    pub const fn field_names() -> [&'static str; Self::FIELDS] {
        [
            "triples",
            "distinct_s",
            "distinct_p",
            "distinct_o",
            "distinct_sp",
            "distinct_po",
            "distinct_os",
        ]
    }

    /// Writes the record as seven lines.
    ///
    /// # Errors
    ///
    /// Returns an error if the writer fails.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        for value in self.values() {
            writeln!(writer, "{value}")?;
        }
        Ok(())
    }

    /// Parses a `.stats` file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRow`] if a line is not an integer or the file
    /// has fewer than seven lines, and [`Error::Io`] if reading fails.
    pub fn read_from<R: BufRead>(reader: R, source_name: &str) -> Result<Self> {
        let mut values = [0u64; Self::FIELDS];
        let mut lines = LineReader::new(reader);
        for slot in &mut values {
            let Some((line_no, line)) = lines.next_line()? else {
                return Err(Error::invalid_row(
                    source_name,
                    0,
                    b"",
                    "expected 7 lines",
                ));
            };
            let line = trim_line_break(line);
            *slot = std::str::from_utf8(line)
                .ok()
                .and_then(|s| s.trim().parse().ok())
                .ok_or_else(|| {
                    Error::invalid_row(source_name, line_no, line, "not an integer")
                })?;
        }
        let [
            triples,
            distinct_s,
            distinct_p,
            distinct_o,
            distinct_sp,
            distinct_po,
            distinct_os,
        ] = values;
        Ok(Self {
            triples,
            distinct_s,
            distinct_p,
            distinct_o,
            distinct_sp,
            distinct_po,
            distinct_os,
        })
    }
}
