//! Dataset mapping command.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use trine_adapters::pipeline;
use trine_adapters::storage::DatasetLayout;
use trine_core::{MapperConfig, MappingReport};

use crate::OutputFormat;
use crate::output::{self, Format};
use crate::progress::Spinner;

/// Mapping run output.
#[derive(Serialize)]
pub(crate) struct MapOutput {
    output: String,
    #[serde(flatten)]
    report: MappingReport,
}

impl MapOutput {
    pub(crate) fn new(input: &Path, report: MappingReport) -> Self {
        Self {
            output: DatasetLayout::from_input(input)
                .mapped_path()
                .display()
                .to_string(),
            report,
        }
    }

    pub(crate) fn summary(&self) -> Vec<(&'static str, String)> {
        let r = &self.report;
        vec![
            ("Output", self.output.clone()),
            ("Lines", r.lines.to_string()),
            ("Statements", r.statements.to_string()),
            ("Mapped", r.mapped.to_string()),
            ("Unresolved subjects", r.unresolved_subjects.to_string()),
            ("Unresolved predicates", r.unresolved_predicates.to_string()),
            ("Unresolved objects", r.unresolved_objects.to_string()),
        ]
    }
}

/// Map a dataset and return the report, driving a spinner.
pub(crate) fn map_with_spinner(
    input: &Path,
    config: MapperConfig,
    quiet: bool,
) -> Result<MappingReport> {
    let spinner = Spinner::start("map", quiet);
    let result = pipeline::map_dataset(input, config, &spinner);
    spinner.finish();
    result.with_context(|| format!("mapping {}", input.display()))
}

/// Run the map command.
pub fn run(input: &Path, config: MapperConfig, format: OutputFormat, quiet: bool) -> Result<()> {
    let report = map_with_spinner(input, config, quiet)?;
    let output = MapOutput::new(input, report);

    let fmt: Format = format.into();
    match fmt {
        Format::Json => output::print_json(&output, quiet)?,
        Format::Table => {
            output::print_key_value_table(&output.summary(), quiet);
            if report.dropped() == 0 {
                output::success("All statements mapped", quiet);
            } else {
                output::status(
                    &format!(
                        "{} statements dropped, see the log for details",
                        report.dropped()
                    ),
                    quiet,
                );
            }
        }
    }
    Ok(())
}
