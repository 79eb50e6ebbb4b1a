//! Single-pass vocabulary builder.

use std::io::{self, BufRead, Write};
use std::ops::Range;

use rayon::prelude::*;
use tracing::{debug, info};
use trine_common::collections::{TrineIndexMap, trine_index_map};
use trine_common::types::{KeyMode, ObjectClass, Role, TermId, TermKey, TermKeyRef};
use trine_common::utils::error::{MalformedStatement, Result};

use super::classify::{Classification, HeuristicClassifier, ObjectClassifier, lexical_form};
use super::frequency::FrequencyTable;
use super::shard::split_at_lines;
use crate::lines::LineReader;
use crate::parser::{Grammar, is_blank_or_comment};
use crate::progress::{LineTicker, NoProgress, Progress};

/// Which roles get a vocabulary. Disabled roles are still parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleSelection {
    /// Record subjects.
    pub subjects: bool,
    /// Record predicates.
    pub predicates: bool,
    /// Record objects.
    pub objects: bool,
}

impl RoleSelection {
    /// Every role enabled.
    pub const ALL: Self = Self {
        subjects: true,
        predicates: true,
        objects: true,
    };

    /// Returns `true` if `role` is enabled.
    #[must_use]
    pub const fn contains(&self, role: Role) -> bool {
        match role {
            Role::Subject => self.subjects,
            Role::Predicate => self.predicates,
            Role::Object => self.objects,
        }
    }

    /// Returns `true` if no role is enabled.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        !(self.subjects || self.predicates || self.objects)
    }
}

impl Default for RoleSelection {
    fn default() -> Self {
        Self::ALL
    }
}

/// Vocabulary builder configuration.
///
/// `key_mode` and `grammar` must match the configuration later given to the
/// mapper for the same dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VocabularyConfig {
    /// Roles to record.
    pub roles: RoleSelection,
    /// Raw or hashed keys.
    pub key_mode: KeyMode,
    /// Statement grammar.
    pub grammar: Grammar,
    /// Split objects into numeric, date and string ranges.
    pub classify_objects: bool,
}

impl Default for VocabularyConfig {
    fn default() -> Self {
        Self {
            roles: RoleSelection::ALL,
            key_mode: KeyMode::Raw,
            grammar: Grammar::Quad,
            classify_objects: true,
        }
    }
}

impl VocabularyConfig {
    /// Sets the roles to record.
    pub fn with_roles(mut self, roles: RoleSelection) -> Self {
        self.roles = roles;
        self
    }

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

    /// Enables or disables object sub-classification.
    pub fn with_object_classification(mut self, enabled: bool) -> Self {
        self.classify_objects = enabled;
        self
    }
}

/// The ranked terms of one role. A term's index is its dense id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    role: Role,
    terms: Vec<TermKey>,
}

impl Vocabulary {
    /// Creates a vocabulary from terms already in rank order.
    #[must_use]
    pub fn new(role: Role, terms: Vec<TermKey>) -> Self {
        Self { role, terms }
    }

    /// The role this vocabulary belongs to.
    #[must_use]
    pub fn role(&self) -> Role {
        self.role
    }

    /// Number of terms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Returns `true` if the vocabulary is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Terms in rank order.
    #[must_use]
    pub fn terms(&self) -> &[TermKey] {
        &self.terms
    }

    /// Returns the term with the given id.
    #[must_use]
    pub fn get(&self, id: TermId) -> Option<&TermKey> {
        self.terms.get(usize::try_from(id.as_u64()).ok()?)
    }

    /// Writes one term per line in rank order.
    ///
    /// # Errors
    ///
    /// Returns an error if the writer fails.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        for term in &self.terms {
            term.write_to(writer)?;
            writer.write_all(b"\n")?;
        }
        Ok(())
    }
}

/// The object vocabulary with its numeric and date sub-ranges.
///
/// Ids `0..numbers().len()` are numeric, the following `dates().len()` ids are
/// dates, and the rest are strings. Without classification both sub-ranges
/// are empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectVocabulary {
    vocabulary: Vocabulary,
    numbers: Vec<u64>,
    dates: Vec<Box<[u8]>>,
}

impl ObjectVocabulary {
    /// The full object vocabulary.
    #[must_use]
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Numeric values in id order (ascending).
    #[must_use]
    pub fn numbers(&self) -> &[u64] {
        &self.numbers
    }

    /// Date forms in id order (ascending).
    pub fn dates(&self) -> impl Iterator<Item = &[u8]> {
        self.dates.iter().map(|d| &**d)
    }

    /// Id range of a sub-class.
    #[must_use]
    pub fn range(&self, class: ObjectClass) -> Range<usize> {
        let numeric_end = self.numbers.len();
        let date_end = numeric_end + self.dates.len();
        match class {
            ObjectClass::Numeric => 0..numeric_end,
            ObjectClass::Date => numeric_end..date_end,
            ObjectClass::String => date_end..self.vocabulary.len(),
        }
    }

    /// Terms of one sub-class, in id order.
    #[must_use]
    pub fn terms_of(&self, class: ObjectClass) -> &[TermKey] {
        &self.vocabulary.terms[self.range(class)]
    }

    /// Returns the sub-class of an id, or `None` if it is out of range.
    #[must_use]
    pub fn class_of(&self, id: TermId) -> Option<ObjectClass> {
        let id = usize::try_from(id.as_u64()).ok()?;
        [ObjectClass::Numeric, ObjectClass::Date, ObjectClass::String]
            .into_iter()
            .find(|class| self.range(*class).contains(&id))
    }

    /// Writes the numeric values, one decimal per line.
    ///
    /// # Errors
    ///
    /// Returns an error if the writer fails.
    pub fn write_numbers_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        for value in &self.numbers {
            writeln!(writer, "{value}")?;
        }
        Ok(())
    }

    /// Writes the date forms, one per line.
    ///
    /// # Errors
    ///
    /// Returns an error if the writer fails.
    pub fn write_dates_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        for date in &self.dates {
            writer.write_all(date)?;
            writer.write_all(b"\n")?;
        }
        Ok(())
    }

    /// Consumes the object vocabulary and returns the plain vocabulary.
    #[must_use]
    pub fn into_vocabulary(self) -> Vocabulary {
        self.vocabulary
    }
}

/// Output of one builder run. Disabled roles are `None`.
#[derive(Debug, Clone)]
pub struct Vocabularies {
    /// Subject vocabulary.
    pub subjects: Option<Vocabulary>,
    /// Predicate vocabulary.
    pub predicates: Option<Vocabulary>,
    /// Object vocabulary.
    pub objects: Option<ObjectVocabulary>,
    /// Input lines read, including blank and comment lines.
    pub lines: u64,
    /// Statements parsed.
    pub statements: u64,
}

impl Vocabularies {
    /// Returns the vocabulary of a role, if it was built.
    #[must_use]
    pub fn get(&self, role: Role) -> Option<&Vocabulary> {
        match role {
            Role::Subject => self.subjects.as_ref(),
            Role::Predicate => self.predicates.as_ref(),
            Role::Object => self.objects.as_ref().map(ObjectVocabulary::vocabulary),
        }
    }
}

/// Object counters, split by sub-class when classification is on.
struct ObjectTables {
    numbers: TrineIndexMap<TermKey, u64>,
    dates: TrineIndexMap<TermKey, Box<[u8]>>,
    strings: FrequencyTable,
}

impl ObjectTables {
    fn new() -> Self {
        Self {
            numbers: trine_index_map(),
            dates: trine_index_map(),
            strings: FrequencyTable::new(),
        }
    }

    #[inline]
    fn record(&mut self, key: TermKeyRef<'_>, object: &[u8], class: Option<Classification>) {
        match class {
            Some(Classification::Numeric(value)) => {
                if !self.numbers.contains_key(&key) {
                    self.numbers.insert(key.to_owned_key(), value);
                }
            }
            Some(Classification::Date) => {
                if !self.dates.contains_key(&key) {
                    self.dates
                        .insert(key.to_owned_key(), lexical_form(object).into());
                }
            }
            Some(Classification::String) | None => self.strings.record(key),
        }
    }

    fn merge(&mut self, later: ObjectTables) {
        for (key, value) in later.numbers {
            self.numbers.entry(key).or_insert(value);
        }
        for (key, date) in later.dates {
            self.dates.entry(key).or_insert(date);
        }
        self.strings.merge(later.strings);
    }

    fn into_vocabulary(self) -> ObjectVocabulary {
        // Stable sorts: equal values keep first-seen order.
        let mut numbers: Vec<(TermKey, u64)> = self.numbers.into_iter().collect();
        numbers.sort_by_key(|(_, value)| *value);
        let mut dates: Vec<(TermKey, Box<[u8]>)> = self.dates.into_iter().collect();
        dates.sort_by(|a, b| a.1.cmp(&b.1));

        let strings = self.strings.into_ranked();
        let mut terms = Vec::with_capacity(numbers.len() + dates.len() + strings.len());
        let mut number_values = Vec::with_capacity(numbers.len());
        for (key, value) in numbers {
            terms.push(key);
            number_values.push(value);
        }
        let mut date_forms = Vec::with_capacity(dates.len());
        for (key, date) in dates {
            terms.push(key);
            date_forms.push(date);
        }
        terms.extend(strings);

        ObjectVocabulary {
            vocabulary: Vocabulary::new(Role::Object, terms),
            numbers: number_values,
            dates: date_forms,
        }
    }
}

/// Everything accumulated by one scan (or one shard of it).
struct ScanState {
    subjects: FrequencyTable,
    predicates: FrequencyTable,
    objects: ObjectTables,
    lines: u64,
    statements: u64,
}

impl ScanState {
    fn new() -> Self {
        Self {
            subjects: FrequencyTable::new(),
            predicates: FrequencyTable::new(),
            objects: ObjectTables::new(),
            lines: 0,
            statements: 0,
        }
    }

    fn merge(&mut self, later: ScanState) {
        self.subjects.merge(later.subjects);
        self.predicates.merge(later.predicates);
        self.objects.merge(later.objects);
        self.lines += later.lines;
        self.statements += later.statements;
    }
}

/// Builds ranked per-role vocabularies from a statement stream.
///
/// # Examples
///
/// ```
/// use trine_core::vocab::{VocabularyBuilder, VocabularyConfig};
///
/// let input = "<a> <p> \"2\" .\n<a> <p> \"1\" .\n";
/// let vocabs = VocabularyBuilder::new(VocabularyConfig::default())
///     .build(input.as_bytes())
///     .unwrap();
///
/// let objects = vocabs.objects.unwrap();
/// assert_eq!(objects.numbers(), &[1, 2]);
/// ```
pub struct VocabularyBuilder<C = HeuristicClassifier> {
    config: VocabularyConfig,
    classifier: C,
}

impl VocabularyBuilder<HeuristicClassifier> {
    /// Creates a builder with the default shape heuristic.
    #[must_use]
    pub fn new(config: VocabularyConfig) -> Self {
        Self {
            config,
            classifier: HeuristicClassifier,
        }
    }
}

impl<C: ObjectClassifier> VocabularyBuilder<C> {
    /// Replaces the object classifier.
    pub fn with_classifier<D: ObjectClassifier>(self, classifier: D) -> VocabularyBuilder<D> {
        VocabularyBuilder {
            config: self.config,
            classifier,
        }
    }

    /// The builder configuration.
    #[must_use]
    pub fn config(&self) -> &VocabularyConfig {
        &self.config
    }

    /// Builds vocabularies from a line stream.
    ///
    /// # Errors
    ///
    /// Fails on the first malformed statement or on an I/O error. Nothing is
    /// returned for a failed run.
    pub fn build<R: BufRead>(&self, reader: R) -> Result<Vocabularies> {
        self.build_with_progress(reader, &NoProgress)
    }

    /// Like [`build`](Self::build), reporting line counts to `progress`.
    ///
    /// # Errors
    ///
    /// Fails on the first malformed statement or on an I/O error.
    pub fn build_with_progress<R: BufRead>(
        &self,
        reader: R,
        progress: &dyn Progress,
    ) -> Result<Vocabularies> {
        info!(
            grammar = self.config.grammar.name(),
            hashed = self.config.key_mode.is_hashed(),
            "building vocabularies"
        );
        let mut state = ScanState::new();
        let mut lines = LineReader::new(reader);
        let mut ticker = LineTicker::new("vocab", progress);
        while let Some((line_no, line)) = lines.next_line()? {
            ticker.tick();
            self.scan_line(&mut state, line_no, line)?;
        }
        state.lines = ticker.finish();
        info!("processed {} lines", state.lines);
        Ok(self.finish(state))
    }

    /// Builds vocabularies from an in-memory input split into `shards`
    /// line-aligned pieces counted in parallel.
    ///
    /// Shard tables are merged in input order, so the result is identical to
    /// [`build`](Self::build) over the same bytes.
    ///
    /// # Errors
    ///
    /// Fails with the malformed statement that comes first in the input.
    pub fn build_sharded(
        &self,
        data: &[u8],
        shards: usize,
        progress: &dyn Progress,
    ) -> Result<Vocabularies> {
        let pieces = split_at_lines(data, shards);
        info!(
            shards = pieces.len(),
            grammar = self.config.grammar.name(),
            hashed = self.config.key_mode.is_hashed(),
            "building vocabularies"
        );

        let results: Vec<std::result::Result<ScanState, MalformedStatement>> = pieces
            .par_iter()
            .enumerate()
            .map(|(shard, piece)| self.scan_piece(shard, piece, progress))
            .collect();

        let mut merged = ScanState::new();
        for result in results {
            match result {
                Ok(state) => merged.merge(state),
                Err(mut err) => {
                    // Earlier shards completed, so their line counts are exact.
                    err.line += merged.lines;
                    return Err(err.into());
                }
            }
        }
        info!("processed {} lines", merged.lines);
        Ok(self.finish(merged))
    }

    fn scan_piece(
        &self,
        shard: usize,
        piece: &[u8],
        progress: &dyn Progress,
    ) -> std::result::Result<ScanState, MalformedStatement> {
        let mut state = ScanState::new();
        let mut ticker = LineTicker::for_shard("vocab", shard, progress);
        for (i, line) in piece.split_inclusive(|&b| b == b'\n').enumerate() {
            ticker.tick();
            self.scan_line(&mut state, i as u64 + 1, line)?;
        }
        state.lines = ticker.finish();
        Ok(state)
    }

    #[inline]
    fn scan_line(
        &self,
        state: &mut ScanState,
        line_no: u64,
        line: &[u8],
    ) -> std::result::Result<(), MalformedStatement> {
        if is_blank_or_comment(line) {
            return Ok(());
        }
        let spans = self
            .config
            .grammar
            .parse(line)
            .map_err(|field| MalformedStatement::new(field, line_no, line))?;
        state.statements += 1;

        let roles = self.config.roles;
        let keys = self.config.key_mode;
        if roles.subjects {
            state.subjects.record(keys.key_of(spans.subject));
        }
        if roles.predicates {
            state.predicates.record(keys.key_of(spans.predicate));
        }
        if roles.objects {
            let class = self
                .config
                .classify_objects
                .then(|| self.classifier.classify(spans.object));
            state
                .objects
                .record(keys.key_of(spans.object), spans.object, class);
        }
        Ok(())
    }

    fn finish(&self, state: ScanState) -> Vocabularies {
        let roles = self.config.roles;
        let subjects = roles
            .subjects
            .then(|| Vocabulary::new(Role::Subject, state.subjects.into_ranked()));
        let predicates = roles
            .predicates
            .then(|| Vocabulary::new(Role::Predicate, state.predicates.into_ranked()));
        let objects = roles.objects.then(|| state.objects.into_vocabulary());

        for role in Role::ALL {
            let size = match role {
                Role::Subject => subjects.as_ref().map(Vocabulary::len),
                Role::Predicate => predicates.as_ref().map(Vocabulary::len),
                Role::Object => objects.as_ref().map(|o| o.vocabulary().len()),
            };
            if let Some(size) = size {
                info!(role = role.name(), "vocabulary has {} keys", size);
            }
        }
        if let Some(objects) = &objects {
            debug!(
                numbers = objects.numbers().len(),
                dates = objects.range(ObjectClass::Date).len(),
                strings = objects.range(ObjectClass::String).len(),
                "object sub-classes"
            );
        }

        Vocabularies {
            subjects,
            predicates,
            objects,
            lines: state.lines,
            statements: state.statements,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trine_common::utils::error::{Error, FieldBoundary};

    fn terms(vocab: &Vocabulary) -> Vec<String> {
        vocab.terms().iter().map(|k| k.to_string()).collect()
    }

    fn build(config: VocabularyConfig, input: &str) -> Vocabularies {
        VocabularyBuilder::new(config).build(input.as_bytes()).unwrap()
    }

    const SAMPLE: &str = "\
<s1> <p1> \"b\" .
<s2> <p1> \"2019-05-01\" .
<s2> <p2> \"10\" .
<s3> <p2> \"a\" .
<s2> <p1> \"b\" .
<s1> <p2> \"2\" .
<s3> <p1> \"2018-12-31\" .
<s3> <p1> \"a\" .
<s2> <p2> \"c\" .
";

    #[test]
    fn test_numeric_first_example() {
        let vocabs = build(
            VocabularyConfig::default(),
            "<a> <p> \"1\" .\n<a> <p> \"2\" .\n",
        );
        assert_eq!(terms(vocabs.subjects.as_ref().unwrap()), vec!["a"]);
        assert_eq!(terms(vocabs.predicates.as_ref().unwrap()), vec!["p"]);
        let objects = vocabs.objects.unwrap();
        assert_eq!(terms(objects.vocabulary()), vec!["1", "2"]);
        assert_eq!(objects.numbers(), &[1, 2]);
    }

    #[test]
    fn test_subjects_ranked_by_frequency_with_first_seen_ties() {
        let vocabs = build(VocabularyConfig::default(), SAMPLE);
        // s2 x4, s3 x3, s1 x2
        assert_eq!(
            terms(vocabs.subjects.as_ref().unwrap()),
            vec!["s2", "s3", "s1"]
        );
        // p1 x5, p2 x4
        assert_eq!(terms(vocabs.predicates.as_ref().unwrap()), vec!["p1", "p2"]);
        assert_eq!(vocabs.lines, 9);
        assert_eq!(vocabs.statements, 9);
    }

    #[test]
    fn test_objects_numbers_then_dates_then_strings() {
        let vocabs = build(VocabularyConfig::default(), SAMPLE);
        let objects = vocabs.objects.unwrap();
        assert_eq!(
            terms(objects.vocabulary()),
            vec!["2", "10", "2018-12-31", "2019-05-01", "b", "a", "c"]
        );
        assert_eq!(objects.numbers(), &[2, 10]);
        let dates: Vec<&[u8]> = objects.dates().collect();
        assert_eq!(dates, vec![&b"2018-12-31"[..], &b"2019-05-01"[..]]);
        assert_eq!(objects.range(ObjectClass::String), 4..7);
        assert_eq!(objects.class_of(TermId::new(3)), Some(ObjectClass::Date));
        assert_eq!(objects.class_of(TermId::new(7)), None);
        assert_eq!(objects.terms_of(ObjectClass::Numeric).len(), 2);
    }

    #[test]
    fn test_unclassified_objects_rank_like_subjects() {
        let config = VocabularyConfig::default().with_object_classification(false);
        let objects = build(config, SAMPLE).objects.unwrap();
        assert_eq!(
            terms(objects.vocabulary()),
            vec!["b", "a", "2019-05-01", "10", "2", "2018-12-31", "c"]
        );
        assert!(objects.numbers().is_empty());
        assert_eq!(objects.range(ObjectClass::String), 0..7);
    }

    #[test]
    fn test_disabled_roles_are_not_recorded() {
        let config = VocabularyConfig::default().with_roles(RoleSelection {
            subjects: false,
            predicates: true,
            objects: false,
        });
        let vocabs = build(config, SAMPLE);
        assert!(vocabs.subjects.is_none());
        assert!(vocabs.objects.is_none());
        assert!(vocabs.get(Role::Predicate).is_some());
        assert_eq!(vocabs.statements, 9);
    }

    #[test]
    fn test_hashed_vocabulary_has_one_entry_per_distinct_term() {
        let raw = build(VocabularyConfig::default(), SAMPLE);
        let hashed = build(
            VocabularyConfig::default().with_key_mode(KeyMode::Hashed),
            SAMPLE,
        );
        for role in Role::ALL {
            let raw = raw.get(role).unwrap();
            let hashed = hashed.get(role).unwrap();
            assert_eq!(raw.len(), hashed.len());
            for (r, h) in raw.terms().iter().zip(hashed.terms()) {
                let TermKey::Raw(bytes) = r else {
                    panic!("raw vocabulary holds a hash")
                };
                assert_eq!(KeyMode::Hashed.key_of(bytes).to_owned_key(), *h);
            }
        }
    }

    #[test]
    fn test_malformed_line_aborts_with_boundary_and_line() {
        let input = "<a> <p> <o> .\n<a <p> <o> .\n<b> <p> <o> .\n";
        let err = VocabularyBuilder::new(VocabularyConfig::default())
            .build(input.as_bytes())
            .unwrap_err();
        match err {
            Error::Malformed(m) => {
                assert_eq!(m.field, FieldBoundary::SubjectPredicate);
                assert_eq!(m.line, 2);
                assert_eq!(m.content, "<a <p> <o> .");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_comments_and_blank_lines_are_skipped() {
        let input = "# header\n\n<a> <p> <o> .\n   \n";
        let vocabs = build(VocabularyConfig::default(), input);
        assert_eq!(vocabs.lines, 4);
        assert_eq!(vocabs.statements, 1);
        assert_eq!(vocabs.subjects.unwrap().len(), 1);
    }

    #[test]
    fn test_triple_grammar() {
        let config = VocabularyConfig::default().with_grammar(Grammar::Triple);
        let vocabs = build(
            config,
            "<a> <p> \"7\"^^<http://int> .\n<a> <p> \"x\"@en .\n",
        );
        let objects = vocabs.objects.unwrap();
        assert_eq!(
            terms(objects.vocabulary()),
            vec!["\"7\"^^<http://int>", "\"x\"@en"]
        );
        assert_eq!(objects.numbers(), &[7]);
    }

    #[test]
    fn test_vocabulary_file_format() {
        let vocabs = build(VocabularyConfig::default(), SAMPLE);
        let mut out = Vec::new();
        vocabs.subjects.unwrap().write_to(&mut out).unwrap();
        assert_eq!(out, b"s2\ns3\ns1\n");

        let objects = vocabs.objects.unwrap();
        let mut numbers = Vec::new();
        objects.write_numbers_to(&mut numbers).unwrap();
        assert_eq!(numbers, b"2\n10\n");
        let mut dates = Vec::new();
        objects.write_dates_to(&mut dates).unwrap();
        assert_eq!(dates, b"2018-12-31\n2019-05-01\n");
    }

    #[test]
    fn test_sharded_build_matches_sequential() {
        let mut input = String::new();
        for i in 0..200 {
            input.push_str(&format!(
                "<s{}> <p{}> \"{}\" .\n",
                (i * 7) % 13,
                i % 3,
                match i % 4 {
                    0 => format!("{}", (i * 31) % 17),
                    1 => format!("20{:02}-01-0{}", i % 20, i % 9 + 1),
                    _ => format!("v{}", (i * 11) % 23),
                }
            ));
        }
        let builder = VocabularyBuilder::new(VocabularyConfig::default());
        let sequential = builder.build(input.as_bytes()).unwrap();

        for shards in [1, 2, 3, 8, 64] {
            let sharded = builder
                .build_sharded(input.as_bytes(), shards, &NoProgress)
                .unwrap();
            assert_eq!(sharded.subjects, sequential.subjects);
            assert_eq!(sharded.predicates, sequential.predicates);
            assert_eq!(sharded.objects, sequential.objects);
            assert_eq!(sharded.lines, sequential.lines);
        }
    }

    #[test]
    fn test_sharded_error_reports_global_line() {
        let mut input = String::new();
        for _ in 0..50 {
            input.push_str("<a> <p> <o> .\n");
        }
        input.push_str("<a> <p>  <o> .\n");
        for _ in 0..50 {
            input.push_str("<a> <p> <o> .\n");
        }
        let err = VocabularyBuilder::new(VocabularyConfig::default())
            .build_sharded(input.as_bytes(), 4, &NoProgress)
            .unwrap_err();
        match err {
            Error::Malformed(m) => {
                assert_eq!(m.line, 51);
                assert_eq!(m.field, FieldBoundary::PredicateObject);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    struct EverythingIsAString;

    impl ObjectClassifier for EverythingIsAString {
        fn classify(&self, _object: &[u8]) -> Classification {
            Classification::String
        }
    }

    #[test]
    fn test_custom_classifier() {
        let objects = VocabularyBuilder::new(VocabularyConfig::default())
            .with_classifier(EverythingIsAString)
            .build(SAMPLE.as_bytes())
            .unwrap()
            .objects
            .unwrap();
        assert!(objects.numbers().is_empty());
        assert_eq!(objects.vocabulary().len(), 7);
    }
}
