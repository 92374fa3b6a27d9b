//! Source-directory discovery and record decoding.
//!
//! The source tree has one subdirectory per locale; each locale directory
//! holds `.json` files of flat record lists. The reserved `strings.json`
//! (translation strings) is never treated as a record file.
//!
//! Failure policy: an unlistable source or locale directory and an
//! unreadable file are fatal; a file whose contents do not decode as a
//! record list is logged and skipped, and every other file still
//! contributes. That skip is the only recovered error class in the whole
//! pipeline.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::SourceError;
use crate::record::Record;

/// Record-file extension recognized inside locale directories.
const RECORD_EXTENSION: &str = ".json";

/// Reserved filename holding translation strings, not records.
const STRINGS_FILE: &str = "strings.json";

/// One successfully decoded record file.
#[derive(Clone, Debug)]
pub struct LocaleFile {
    /// Name of the locale directory the file came from.
    pub locale: String,

    /// Full path of the source file.
    pub path: PathBuf,

    /// Decoded records, in file order.
    pub records: Vec<Record>,
}

/// Result of loading a source directory.
#[derive(Clone, Debug, Default)]
pub struct LoadResult {
    /// Successfully decoded files, locale directories in name order and
    /// files in name order within each.
    pub files: Vec<LocaleFile>,

    /// Number of files skipped because their contents did not decode.
    pub skipped_count: usize,
}

impl LoadResult {
    /// Total number of decoded records across all files.
    pub fn record_count(&self) -> usize {
        self.files.iter().map(|f| f.records.len()).sum()
    }
}

/// Load every record file under `src`.
///
/// Locale directories and files are visited in filename order so repeated
/// runs over the same source yield the same ingestion order.
pub fn load(src: &Path) -> Result<LoadResult, SourceError> {
    let mut result = LoadResult::default();
    for locale_dir in sorted_entries(src)? {
        let locale = locale_dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        for file in sorted_entries(&locale_dir)? {
            if !is_record_file(&file) {
                continue;
            }
            let contents = fs::read_to_string(&file).map_err(|source| SourceError::ReadFile {
                path: file.clone(),
                source,
            })?;
            match serde_json::from_str::<Vec<Record>>(&contents) {
                Ok(records) => result.files.push(LocaleFile {
                    locale: locale.clone(),
                    path: file,
                    records,
                }),
                Err(err) => {
                    tracing::warn!("skipping {}: {}", file.display(), err);
                    result.skipped_count += 1;
                }
            }
        }
    }
    Ok(result)
}

fn is_record_file(path: &Path) -> bool {
    match path.file_name().and_then(|n| n.to_str()) {
        Some(name) => name.ends_with(RECORD_EXTENSION) && name != STRINGS_FILE,
        None => false,
    }
}

fn sorted_entries(dir: &Path) -> Result<Vec<PathBuf>, SourceError> {
    let entries = fs::read_dir(dir).map_err(|source| SourceError::ReadDir {
        path: dir.to_path_buf(),
        source,
    })?;
    let mut paths = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| SourceError::ReadDir {
            path: dir.to_path_buf(),
            source,
        })?;
        paths.push(entry.path());
    }
    paths.sort();
    Ok(paths)
}
