//! Read-only tree walk producing `(path, contents)` artifacts.
//!
//! Path shapes, relative to the destination root:
//!
//! | Node               | Path                        |
//! |--------------------|-----------------------------|
//! | Category           | `{cat}/index`               |
//! | Subcategory        | `{cat}/{sub}/index`         |
//! | Checks (aggregate) | `{cat}/{sub}/checks`        |
//! | Item               | `{cat}/{sub}/{item}`        |
//!
//! Each addressable node maps to exactly one artifact. Contents are the
//! node's own metadata as pretty-printed JSON; children are emitted as
//! separate artifacts, never inlined. The checks aggregate is emitted for
//! every subcategory, empty list included.

use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::error::RenderError;
use crate::model::{Category, Store, Subcategory};

/// One renderable output file: a destination-relative path plus its full
/// contents.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Artifact {
    /// Path relative to the destination root.
    pub path: PathBuf,

    /// Full file contents.
    pub contents: String,
}

impl Artifact {
    fn render<T: Serialize + ?Sized>(path: PathBuf, node: &T) -> Result<Self, RenderError> {
        let contents = serde_json::to_string_pretty(node)
            .map_err(|source| RenderError::Contents {
                path: path.clone(),
                source,
            })?;
        Ok(Self { path, contents })
    }
}

/// Walk a frozen store and produce every artifact, in emission order:
/// categories in insertion order, each followed by its subcategories in
/// insertion order; per subcategory the index, then the checks aggregate,
/// then items in insertion order.
pub fn serialize(store: &Store) -> Result<Vec<Artifact>, RenderError> {
    let mut artifacts = Vec::new();
    for category in store.categories() {
        push_category(&mut artifacts, category)?;
    }
    Ok(artifacts)
}

fn push_category(artifacts: &mut Vec<Artifact>, category: &Category) -> Result<(), RenderError> {
    let base = PathBuf::from(&category.id);
    artifacts.push(Artifact::render(base.join("index"), category)?);
    for sub in category.subcategories() {
        push_subcategory(artifacts, &base, sub)?;
    }
    Ok(())
}

fn push_subcategory(
    artifacts: &mut Vec<Artifact>,
    category_base: &Path,
    sub: &Subcategory,
) -> Result<(), RenderError> {
    let base = category_base.join(&sub.id);
    artifacts.push(Artifact::render(base.join("index"), sub)?);
    artifacts.push(Artifact::render(base.join("checks"), sub.checks())?);
    for item in sub.items() {
        artifacts.push(Artifact::render(base.join(&item.id), item)?);
    }
    Ok(())
}
