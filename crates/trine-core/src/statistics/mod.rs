//! Cardinality statistics over sorted projections.
//!
//! The mapped triples are sorted externally three times, once per
//! projection. Because equal keys are contiguous in each file, every distinct
//! count is obtained by comparing a row with its predecessor.
//!
//! | Projection | Key columns | Yields |
//! |------------|-------------|--------|
//! | SPO | subject, predicate | distinct subjects, distinct (s, p) |
//! | POS | predicate, object | distinct predicates, distinct (p, o) |
//! | OSP | object, subject | distinct objects, distinct (o, s) |

mod projection;
mod record;

pub use projection::{Projection, ProjectionCounts};
pub use record::StatsRecord;

use std::io::BufRead;

use trine_common::utils::error::Result;

/// Scans the SPO, POS and OSP projections (in that order) and combines them.
///
/// # Errors
///
/// Fails on an invalid or ungrouped row, on an I/O error, and with
/// [`Error::CardinalityMismatch`](trine_common::Error::CardinalityMismatch)
/// when the projections disagree on the number of rows.
pub fn compute_stats<R: BufRead>(inputs: [R; 3]) -> Result<StatsRecord> {
    let [spo, pos, osp] = inputs;
    StatsRecord::from_counts(
        Projection::Spo.scan(spo, Projection::Spo.name())?,
        Projection::Pos.scan(pos, Projection::Pos.name())?,
        Projection::Osp.scan(osp, Projection::Osp.name())?,
    )
}
