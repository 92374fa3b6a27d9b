//! The build pipeline: load source records, ingest, render, write.
//!
//! Writing is fail-fast: the first directory-creation or file-write
//! failure aborts the run with an error, and whatever was already written
//! stays on disk. There is no rollback and no retry.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use kitgen_core::{ingest, render, source, Artifact, Store};

/// Counters reported after a successful run.
pub struct BuildSummary {
    /// Categories in the final tree.
    pub categories: usize,

    /// Files written under the destination.
    pub artifacts: usize,

    /// Source files skipped because they did not decode.
    pub skipped_files: usize,
}

/// Run the full pipeline from `src` into `dest`.
pub fn run(src: &Path, dest: &Path) -> Result<BuildSummary> {
    tracing::info!("source: {}", src.display());
    tracing::info!("destination: {}", dest.display());

    let loaded = source::load(src)?;

    let mut store = Store::new();
    for file in loaded.files {
        tracing::debug!(
            "ingesting {} ({} records)",
            file.path.display(),
            file.records.len()
        );
        for record in file.records {
            ingest(&mut store, &file.locale, record);
        }
    }

    let artifacts = render::serialize(&store)?;
    for artifact in &artifacts {
        write_artifact(dest, artifact)?;
    }

    Ok(BuildSummary {
        categories: store.len(),
        artifacts: artifacts.len(),
        skipped_files: loaded.skipped_count,
    })
}

fn write_artifact(dest: &Path, artifact: &Artifact) -> Result<()> {
    let path = dest.join(&artifact.path);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("cannot create directory {}", parent.display()))?;
    }
    fs::write(&path, &artifact.contents)
        .with_context(|| format!("cannot write {}", path.display()))
}
