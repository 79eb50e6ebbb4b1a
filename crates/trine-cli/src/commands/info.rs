//! Dataset info command.

use std::path::Path;

use anyhow::{Context, Result};
use comfy_table::Cell;
use trine_adapters::pipeline;
use trine_adapters::storage::DatasetLayout;

use super::stats::stats_items;
use crate::OutputFormat;
use crate::output::{self, Format};

/// Run the info command.
pub fn run(basename: &Path, format: OutputFormat, quiet: bool) -> Result<()> {
    let layout = DatasetLayout::from_input(basename);
    let info = pipeline::inspect(&layout)
        .with_context(|| format!("inspecting {}", layout.basename().display()))?;

    let fmt: Format = format.into();
    match fmt {
        Format::Json => output::print_json(&info, quiet)?,
        Format::Table => {
            let mut table = output::create_table();
            output::add_header(&mut table, &["File", "Present", "Size", "Lines"]);
            for file in &info.files {
                table.add_row(vec![
                    Cell::new(&file.suffix),
                    Cell::new(if file.bytes.is_some() { "yes" } else { "no" }),
                    Cell::new(file.bytes.map(output::format_bytes).unwrap_or_default()),
                    Cell::new(file.lines.map(|n| n.to_string()).unwrap_or_default()),
                ]);
            }
            output::status(&format!("Dataset: {}", info.basename.display()), quiet);
            output::print_table(&table, quiet);

            if let Some(record) = &info.stats {
                output::print_key_value_table(&stats_items(record), quiet);
            }
        }
    }
    Ok(())
}
