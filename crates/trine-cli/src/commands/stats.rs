//! Statistics command.

use std::path::Path;

use anyhow::{Context, Result};
use trine_adapters::pipeline;
use trine_adapters::storage::DatasetLayout;
use trine_core::StatsRecord;

use crate::OutputFormat;
use crate::output::{self, Format};

/// Key-value rows of a statistics record.
pub(crate) fn stats_items(record: &StatsRecord) -> Vec<(&'static str, String)> {
    StatsRecord::field_names()
        .into_iter()
        .zip(record.values())
        .map(|(name, value)| (name, value.to_string()))
        .collect()
}

/// Run the stats command.
pub fn run(basename: &Path, format: OutputFormat, quiet: bool) -> Result<()> {
    let layout = DatasetLayout::from_input(basename);
    let record = pipeline::collect_stats(&layout)
        .with_context(|| format!("computing statistics of {}", layout.basename().display()))?;

    let fmt: Format = format.into();
    match fmt {
        Format::Json => output::print_json(&record, quiet)?,
        Format::Table => {
            output::print_key_value_table(&stats_items(&record), quiet);
            output::success(
                &format!("Wrote {}", layout.stats_path().display()),
                quiet,
            );
        }
    }
    Ok(())
}
