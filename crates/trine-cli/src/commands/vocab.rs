//! Vocabulary building command.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use trine_adapters::pipeline::{self, VocabularyRun};
use trine_common::types::{ObjectClass, Role};
use trine_core::VocabularyConfig;

use crate::OutputFormat;
use crate::output::{self, Format};
use crate::progress::Spinner;

/// One written vocabulary.
#[derive(Serialize)]
struct VocabularyEntry {
    role: Role,
    terms: usize,
}

/// Vocabulary run output.
#[derive(Serialize)]
pub(crate) struct VocabOutput {
    input: String,
    lines: u64,
    statements: u64,
    vocabularies: Vec<VocabularyEntry>,
    numbers: Option<usize>,
    dates: Option<usize>,
    strings: Option<usize>,
    files: Vec<String>,
}

impl VocabOutput {
    pub(crate) fn new(input: &Path, run: &VocabularyRun) -> Self {
        let vocabs = &run.vocabularies;
        let objects = vocabs.objects.as_ref();
        Self {
            input: input.display().to_string(),
            lines: vocabs.lines,
            statements: vocabs.statements,
            vocabularies: Role::ALL
                .iter()
                .filter_map(|role| {
                    vocabs.get(*role).map(|v| VocabularyEntry {
                        role: *role,
                        terms: v.len(),
                    })
                })
                .collect(),
            numbers: objects.map(|o| o.range(ObjectClass::Numeric).len()),
            dates: objects.map(|o| o.range(ObjectClass::Date).len()),
            strings: objects.map(|o| o.range(ObjectClass::String).len()),
            files: run.files.iter().map(|p| p.display().to_string()).collect(),
        }
    }

    pub(crate) fn summary(&self) -> Vec<(&'static str, String)> {
        let mut items = vec![
            ("Input", self.input.clone()),
            ("Lines", self.lines.to_string()),
            ("Statements", self.statements.to_string()),
        ];
        for entry in &self.vocabularies {
            let label = match entry.role {
                Role::Subject => "Subjects",
                Role::Predicate => "Predicates",
                Role::Object => "Objects",
            };
            items.push((label, entry.terms.to_string()));
        }
        if let (Some(numbers), Some(dates), Some(strings)) =
            (self.numbers, self.dates, self.strings)
        {
            items.push(("  Numbers", numbers.to_string()));
            items.push(("  Dates", dates.to_string()));
            items.push(("  Strings", strings.to_string()));
        }
        items
    }
}

/// Run the vocab command.
pub fn run(
    input: &Path,
    config: VocabularyConfig,
    threads: usize,
    format: OutputFormat,
    quiet: bool,
) -> Result<()> {
    let spinner = Spinner::start("vocab", quiet);
    let result = pipeline::build_vocabularies(input, config, threads, &spinner);
    spinner.finish();
    let run = result.with_context(|| format!("building vocabularies of {}", input.display()))?;

    let output = VocabOutput::new(input, &run);
    let fmt: Format = format.into();
    match fmt {
        Format::Json => output::print_json(&output, quiet)?,
        Format::Table => {
            output::print_key_value_table(&output.summary(), quiet);
            output::success(
                &format!("Wrote {} vocabulary files", output.files.len()),
                quiet,
            );
        }
    }
    Ok(())
}
