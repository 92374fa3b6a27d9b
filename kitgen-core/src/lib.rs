//! Kitgen core - checklist record ingestion and repository layout engine.
//!
//! This crate turns flat, localized checklist records into a hierarchical
//! content repository: categories contain subcategories, subcategories
//! contain addressable items and an aggregate list of free-form checks.
//!
//! # Pipeline
//!
//! 1. [`source`] discovers locale directories and decodes their JSON files
//!    into [`record::Record`] batches.
//! 2. [`ingest`] folds each record into a [`model::Store`], creating
//!    categories and subcategories on first reference and deduplicating
//!    item identifiers.
//! 3. [`render`] walks the finished store and produces `(path, contents)`
//!    artifacts for an external writer.
//!
//! The store is only mutated during ingestion; rendering is a read-only
//! walk over frozen state.

pub mod error;
pub mod ingest;
pub mod model;
pub mod record;
pub mod render;
pub mod slug;
pub mod source;

pub use error::{RenderError, SourceError};
pub use ingest::ingest;
pub use model::{Category, Check, Item, Store, Subcategory};
pub use record::Record;
pub use render::{serialize, Artifact};
pub use slug::slug;
pub use source::{load, LoadResult, LocaleFile};
