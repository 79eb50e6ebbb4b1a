//! File-level drivers for each pipeline stage.
//!
//! Each function reads the files of the previous stage and writes its own
//! outputs through [`write_atomically`], so an aborted stage leaves no output
//! behind.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{info, warn};
use trine_common::types::Role;
use trine_common::utils::error::Result;
use trine_core::{
    DictionaryMapper, MapperConfig, MappingReport, Progress, Projection, ProjectionCounts,
    StatsRecord, TermDictionary, Vocabularies, VocabularyBuilder, VocabularyConfig,
};

use crate::storage::{Compression, DatasetLayout, MappedFile, open_input, write_atomically};

/// Result of a vocabulary run: the vocabularies and the files written.
#[derive(Debug)]
pub struct VocabularyRun {
    /// The built vocabularies.
    pub vocabularies: Vocabularies,
    /// Files written, in order.
    pub files: Vec<PathBuf>,
}

/// Builds the vocabularies of `input` and writes them next to it.
///
/// With `threads > 1` an uncompressed input is memory-mapped and counted in
/// that many shards; compressed input is always scanned sequentially.
/// Vocabulary files are written only once the whole input was scanned.
///
/// # Errors
///
/// Fails on the first malformed statement or on an I/O error.
pub fn build_vocabularies(
    input: &Path,
    config: VocabularyConfig,
    threads: usize,
    progress: &dyn Progress,
) -> Result<VocabularyRun> {
    let layout = DatasetLayout::from_input(input);
    let builder = VocabularyBuilder::new(config);

    let vocabularies = if threads > 1 {
        match Compression::detect(input)? {
            Compression::None => {
                let mapped = MappedFile::open(input)?;
                builder.build_sharded(mapped.as_bytes(), threads, progress)?
            }
            Compression::Gzip => {
                warn!("compressed input cannot be sharded, scanning sequentially");
                builder.build_with_progress(open_input(input)?, progress)?
            }
        }
    } else {
        builder.build_with_progress(open_input(input)?, progress)?
    };

    let files = write_vocabularies(&layout, &vocabularies)?;
    Ok(VocabularyRun {
        vocabularies,
        files,
    })
}

/// Writes every built vocabulary of `vocabularies` under `layout`.
///
/// The object sub-vocabularies are written together with the object
/// vocabulary; they are empty when objects were not classified.
///
/// # Errors
///
/// Returns an error if a file cannot be written.
pub fn write_vocabularies(
    layout: &DatasetLayout,
    vocabularies: &Vocabularies,
) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for role in Role::ALL {
        if let Some(vocab) = vocabularies.get(role) {
            let path = layout.vocab_path(role);
            write_atomically(&path, |w| Ok(vocab.write_to(w)?))?;
            files.push(path);
        }
    }
    if let Some(objects) = &vocabularies.objects {
        let numbers = layout.numbers_path();
        write_atomically(&numbers, |w| Ok(objects.write_numbers_to(w)?))?;
        files.push(numbers);
        let dates = layout.dates_path();
        write_atomically(&dates, |w| Ok(objects.write_dates_to(w)?))?;
        files.push(dates);
    }
    info!(files = files.len(), "wrote vocabularies");
    Ok(files)
}

fn open_buffered(path: &Path) -> Result<BufReader<File>> {
    Ok(BufReader::new(File::open(path)?))
}

/// Loads the three role dictionaries of a dataset.
///
/// # Errors
///
/// Returns an error if a vocabulary file is missing or invalid.
pub fn load_mapper(layout: &DatasetLayout, config: MapperConfig) -> Result<DictionaryMapper> {
    let load = |role: Role| -> Result<TermDictionary> {
        let path = layout.vocab_path(role);
        let name = path.display().to_string();
        TermDictionary::load_named(open_buffered(&path)?, config.key_mode, &name)
    };
    Ok(DictionaryMapper::new(
        config,
        load(Role::Subject)?,
        load(Role::Predicate)?,
        load(Role::Object)?,
    ))
}

/// Maps `input` to `.mapped.unsorted` using the dataset's vocabulary files.
///
/// # Errors
///
/// Fails if a vocabulary cannot be loaded, on the first malformed statement,
/// or on an I/O error. No output file is left behind on failure.
pub fn map_dataset(
    input: &Path,
    config: MapperConfig,
    progress: &dyn Progress,
) -> Result<MappingReport> {
    let layout = DatasetLayout::from_input(input);
    let mapper = load_mapper(&layout, config)?;
    let reader = open_input(input)?;
    write_atomically(&layout.mapped_path(), |w| {
        mapper.map_with_progress(reader, w, progress)
    })
}

/// Computes the statistics of a dataset from its sorted projections and
/// writes `.stats`.
///
/// # Errors
///
/// Fails on a missing, invalid or unsorted projection, or when the
/// projections disagree on the number of rows. No `.stats` file is written
/// on failure.
pub fn collect_stats(layout: &DatasetLayout) -> Result<StatsRecord> {
    let scan = |projection: Projection| -> Result<ProjectionCounts> {
        let path = layout.projection_path(projection);
        let name = path.display().to_string();
        projection.scan(open_buffered(&path)?, &name)
    };
    let record = StatsRecord::from_counts(
        scan(Projection::Spo)?,
        scan(Projection::Pos)?,
        scan(Projection::Osp)?,
    )?;
    write_atomically(&layout.stats_path(), |w| Ok(record.write_to(w)?))?;
    Ok(record)
}

/// State of one derived file.
#[derive(Debug, Clone, Serialize)]
pub struct FileInfo {
    /// File suffix.
    pub suffix: String,
    /// Full path.
    pub path: PathBuf,
    /// Size in bytes, `None` if the file does not exist.
    pub bytes: Option<u64>,
    /// Line count, for vocabulary files only.
    pub lines: Option<u64>,
}

/// Overview of the files present for a dataset.
#[derive(Debug, Clone, Serialize)]
pub struct DatasetInfo {
    /// Dataset basename.
    pub basename: PathBuf,
    /// Every derived file in pipeline order.
    pub files: Vec<FileInfo>,
    /// The parsed statistics record, if `.stats` exists.
    pub stats: Option<StatsRecord>,
}

/// Inspects the derived files of a dataset.
///
/// # Errors
///
/// Returns an error if an existing file cannot be read or `.stats` is
/// invalid.
pub fn inspect(layout: &DatasetLayout) -> Result<DatasetInfo> {
    let mut files = Vec::new();
    for (suffix, path) in layout.all_files() {
        let bytes = match std::fs::metadata(&path) {
            Ok(meta) => Some(meta.len()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => None,
            Err(err) => return Err(err.into()),
        };
        let lines = match bytes {
            Some(_) if suffix.ends_with("_vocab") => Some(count_lines(open_buffered(&path)?)?),
            _ => None,
        };
        files.push(FileInfo {
            suffix,
            path,
            bytes,
            lines,
        });
    }

    let stats_path = layout.stats_path();
    let stats = if stats_path.exists() {
        let name = stats_path.display().to_string();
        Some(StatsRecord::read_from(open_buffered(&stats_path)?, &name)?)
    } else {
        None
    };

    Ok(DatasetInfo {
        basename: layout.basename().to_path_buf(),
        files,
        stats,
    })
}

fn count_lines<R: BufRead>(mut reader: R) -> io::Result<u64> {
    let mut lines = 0u64;
    let mut last = b'\n';
    loop {
        let buf = reader.fill_buf()?;
        if buf.is_empty() {
            break;
        }
        lines += buf.iter().filter(|&&b| b == b'\n').count() as u64;
        last = buf[buf.len() - 1];
        let len = buf.len();
        reader.consume(len);
    }
    if last != b'\n' {
        lines += 1;
    }
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_lines() {
        assert_eq!(count_lines(&b""[..]).unwrap(), 0);
        assert_eq!(count_lines(&b"a\nb\n"[..]).unwrap(), 2);
        assert_eq!(count_lines(&b"a\nb"[..]).unwrap(), 2);
    }
}
