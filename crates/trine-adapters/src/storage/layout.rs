//! Dataset file naming.
//!
//! Every file of a dataset is named by appending a suffix to its basename,
//! which is the input path without a trailing `.gz`.
//!
//! | Suffix | Content |
//! |--------|---------|
//! | `.subjects_vocab`, `.predicates_vocab`, `.objects_vocab` | one term per line, line = id |
//! | `.objects_numbers_vocab`, `.objects_dates_vocab` | object sub-vocabularies |
//! | `.mapped.unsorted` | `s p o` id rows |
//! | `.spo`, `.pos`, `.osp` | sorted projections |
//! | `.stats` | seven integers |

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use trine_common::types::Role;
use trine_core::Projection;

/// Suffix of the mapped, not yet sorted, id rows.
pub const MAPPED_SUFFIX: &str = ".mapped.unsorted";
/// Suffix of the numeric object sub-vocabulary.
pub const NUMBERS_SUFFIX: &str = ".objects_numbers_vocab";
/// Suffix of the date object sub-vocabulary.
pub const DATES_SUFFIX: &str = ".objects_dates_vocab";
/// Suffix of the statistics record.
pub const STATS_SUFFIX: &str = ".stats";

/// Paths of all files belonging to one dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetLayout {
    basename: PathBuf,
}

impl DatasetLayout {
    /// Creates a layout from a basename.
    pub fn new(basename: impl Into<PathBuf>) -> Self {
        Self {
            basename: basename.into(),
        }
    }

    /// Creates a layout from an input path, stripping a `.gz` extension.
    pub fn from_input(input: impl AsRef<Path>) -> Self {
        let input = input.as_ref();
        let basename = match input.extension() {
            Some(ext) if ext == "gz" => input.with_extension(""),
            _ => input.to_path_buf(),
        };
        Self { basename }
    }

    /// The dataset basename.
    #[must_use]
    pub fn basename(&self) -> &Path {
        &self.basename
    }

    /// The basename with `suffix` appended.
    #[must_use]
    pub fn with_suffix(&self, suffix: &str) -> PathBuf {
        let mut name = OsString::from(self.basename.as_os_str());
        name.push(suffix);
        PathBuf::from(name)
    }

    /// Suffix of a role's vocabulary file.
    #[must_use]
    pub const fn vocab_suffix(role: Role) -> &'static str {
        match role {
            Role::Subject => ".subjects_vocab",
            Role::Predicate => ".predicates_vocab",
            Role::Object => ".objects_vocab",
        }
    }

    /// Vocabulary file of a role.
    #[must_use]
    pub fn vocab_path(&self, role: Role) -> PathBuf {
        self.with_suffix(Self::vocab_suffix(role))
    }

    /// Numeric object sub-vocabulary.
    #[must_use]
    pub fn numbers_path(&self) -> PathBuf {
        self.with_suffix(NUMBERS_SUFFIX)
    }

    /// Date object sub-vocabulary.
    #[must_use]
    pub fn dates_path(&self) -> PathBuf {
        self.with_suffix(DATES_SUFFIX)
    }

    /// Mapper output.
    #[must_use]
    pub fn mapped_path(&self) -> PathBuf {
        self.with_suffix(MAPPED_SUFFIX)
    }

    /// Sorted projection file.
    #[must_use]
    pub fn projection_path(&self, projection: Projection) -> PathBuf {
        self.with_suffix(&format!(".{}", projection.name()))
    }

    /// Statistics record.
    #[must_use]
    pub fn stats_path(&self) -> PathBuf {
        self.with_suffix(STATS_SUFFIX)
    }

    /// Every derived file, paired with its suffix, in pipeline order.
    #[must_use]
    pub fn all_files(&self) -> Vec<(String, PathBuf)> {
        let mut suffixes: Vec<String> = Role::ALL
            .iter()
            .map(|role| Self::vocab_suffix(*role).to_string())
            .collect();
        suffixes.push(NUMBERS_SUFFIX.to_string());
        suffixes.push(DATES_SUFFIX.to_string());
        suffixes.push(MAPPED_SUFFIX.to_string());
        suffixes.extend(Projection::ALL.iter().map(|p| format!(".{}", p.name())));
        suffixes.push(STATS_SUFFIX.to_string());

        suffixes
            .into_iter()
            .map(|suffix| {
                let path = self.with_suffix(&suffix);
                (suffix, path)
            })
            .collect()
    }
}
