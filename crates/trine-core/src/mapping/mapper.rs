//! Statement to id-triple encoder.

use std::io::{BufRead, Write};

use serde::Serialize;
use tracing::{info, warn};
use trine_common::types::{KeyMode, Role, TermId, Triple};
use trine_common::utils::error::{Error, MalformedStatement, Result, trim_line_break};

use super::dictionary::TermDictionary;
use crate::lines::LineReader;
use crate::parser::{Grammar, TermSpans, is_blank_or_comment};
use crate::progress::{LineTicker, NoProgress, Progress};

/// Mapper configuration. Must match the one used to build the vocabularies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MapperConfig {
    /// Raw or hashed keys.
    pub key_mode: KeyMode,
    /// Statement grammar.
    pub grammar: Grammar,
}

impl MapperConfig {
    /// Sets the key mode.
    pub fn with_key_mode(mut self, key_mode: KeyMode) -> Self {
        self.key_mode = key_mode;
        self
    }

    /// Sets the statement grammar.
    pub fn with_grammar(mut self, grammar: Grammar) -> Self {
        self.grammar = grammar;
        self
    }
}

/// Counts from one mapping run.
///
/// `mapped + dropped() == statements` always holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MappingReport {
    /// Input lines read, including blank and comment lines.
    pub lines: u64,
    /// Statements parsed.
    pub statements: u64,
    /// Id triples written.
    pub mapped: u64,
    /// Statements dropped because the subject was unresolved.
    pub unresolved_subjects: u64,
    /// Statements dropped because the predicate was unresolved.
    pub unresolved_predicates: u64,
    /// Statements dropped because the object was unresolved.
    pub unresolved_objects: u64,
}

impl MappingReport {
    /// Dropped statements attributed to a role.
    #[must_use]
    pub fn unresolved(&self, role: Role) -> u64 {
        match role {
            Role::Subject => self.unresolved_subjects,
            Role::Predicate => self.unresolved_predicates,
            Role::Object => self.unresolved_objects,
        }
    }

    /// Total dropped statements.
    #[must_use]
    pub fn dropped(&self) -> u64 {
        self.unresolved_subjects + self.unresolved_predicates + self.unresolved_objects
    }

    fn count_unresolved(&mut self, role: Role) {
        match role {
            Role::Subject => self.unresolved_subjects += 1,
            Role::Predicate => self.unresolved_predicates += 1,
            Role::Object => self.unresolved_objects += 1,
        }
    }
}

/// Encodes statements as id triples using three role dictionaries.
pub struct DictionaryMapper {
    config: MapperConfig,
    dictionaries: [TermDictionary; 3],
}

impl DictionaryMapper {
    /// Creates a mapper from the subject, predicate and object dictionaries.
    #[must_use]
    pub fn new(
        config: MapperConfig,
        subjects: TermDictionary,
        predicates: TermDictionary,
        objects: TermDictionary,
    ) -> Self {
        Self {
            config,
            dictionaries: [subjects, predicates, objects],
        }
    }

    /// The mapper configuration.
    #[must_use]
    pub fn config(&self) -> &MapperConfig {
        &self.config
    }

    /// The dictionary of a role.
    #[must_use]
    pub fn dictionary(&self, role: Role) -> &TermDictionary {
        &self.dictionaries[role.column()]
    }

    /// Maps every statement of `reader` and writes one id row per resolved
    /// statement to `writer`.
    ///
    /// Statements with an unknown term are logged and skipped.
    ///
    /// # Errors
    ///
    /// Fails on the first malformed statement or on an I/O error.
    pub fn map<R: BufRead, W: Write>(&self, reader: R, writer: W) -> Result<MappingReport> {
        self.map_with_progress(reader, writer, &NoProgress)
    }

    /// Like [`map`](Self::map), reporting line counts to `progress`.
    ///
    /// # Errors
    ///
    /// Fails on the first malformed statement or on an I/O error.
    pub fn map_with_progress<R: BufRead, W: Write>(
        &self,
        reader: R,
        mut writer: W,
        progress: &dyn Progress,
    ) -> Result<MappingReport> {
        info!(
            grammar = self.config.grammar.name(),
            hashed = self.config.key_mode.is_hashed(),
            "mapping dataset"
        );
        let mut report = MappingReport::default();
        let mut lines = LineReader::new(reader);
        let mut ticker = LineTicker::new("map", progress);

        while let Some((line_no, line)) = lines.next_line()? {
            ticker.tick();
            if is_blank_or_comment(line) {
                continue;
            }
            let spans = self
                .config
                .grammar
                .parse(line)
                .map_err(|field| MalformedStatement::new(field, line_no, line))?;
            report.statements += 1;

            match self.resolve(&spans) {
                Ok(triple) => {
                    writeln!(writer, "{triple}")?;
                    report.mapped += 1;
                }
                Err(role) => {
                    let err = Error::UnresolvedTerm {
                        role,
                        term: String::from_utf8_lossy(spans.term(role)).into_owned(),
                        line: line_no,
                        content: String::from_utf8_lossy(trim_line_break(line)).into_owned(),
                    };
                    warn!("{err}");
                    report.count_unresolved(role);
                }
            }
        }
        writer.flush()?;
        report.lines = ticker.finish();

        info!(
            mapped = report.mapped,
            dropped = report.dropped(),
            "processed {} lines",
            report.lines
        );
        Ok(report)
    }

    /// Resolves the three terms in subject, predicate, object order, returning
    /// the first role that is missing.
    #[inline]
    fn resolve(&self, spans: &TermSpans<'_>) -> std::result::Result<Triple, Role> {
        let lookup = |role: Role| -> std::result::Result<TermId, Role> {
            self.dictionary(role).resolve(spans.term(role)).ok_or(role)
        };
        Ok(Triple::new(
            lookup(Role::Subject)?,
            lookup(Role::Predicate)?,
            lookup(Role::Object)?,
        ))
    }
}
