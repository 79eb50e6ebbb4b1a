//! Combined vocabulary and mapping command.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use trine_adapters::pipeline;
use trine_core::{MapperConfig, VocabularyConfig};

use super::map::{MapOutput, map_with_spinner};
use super::vocab::VocabOutput;
use crate::OutputFormat;
use crate::output::{self, Format};
use crate::progress::Spinner;

#[derive(Serialize)]
struct RunOutput {
    vocab: VocabOutput,
    map: MapOutput,
}

/// Run the vocab and map stages back to back.
pub fn run(
    input: &Path,
    vocab_config: VocabularyConfig,
    map_config: MapperConfig,
    threads: usize,
    format: OutputFormat,
    quiet: bool,
) -> Result<()> {
    let fmt: Format = format.into();
    let table = matches!(fmt, Format::Table);

    output::status("Building vocabularies...", quiet || !table);
    let spinner = Spinner::start("vocab", quiet);
    let result = pipeline::build_vocabularies(input, vocab_config, threads, &spinner);
    spinner.finish();
    let vocab_run =
        result.with_context(|| format!("building vocabularies of {}", input.display()))?;
    let vocab = VocabOutput::new(input, &vocab_run);
    drop(vocab_run);

    output::status("Mapping statements...", quiet || !table);
    let report = map_with_spinner(input, map_config, quiet)?;
    let map = MapOutput::new(input, report);

    match fmt {
        Format::Json => output::print_json(&RunOutput { vocab, map }, quiet)?,
        Format::Table => {
            let mut items = vocab.summary();
            items.extend(map.summary());
            output::print_key_value_table(&items, quiet);
            output::success(
                "Pipeline completed, sort the mapped rows before running stats",
                quiet,
            );
        }
    }
    Ok(())
}
