//! In-memory tree model for the checklist repository.
//!
//! The tree is built incrementally during ingestion and frozen afterwards:
//! nodes are created lazily on first reference, only ever appended to, and
//! never deleted or reordered. Each level keeps an id-keyed map for lookup
//! plus an insertion-ordered id list, so traversal order is deterministic
//! and equal to first-seen order.
//!
//! Serialization of a node covers its own metadata only; child collections
//! are skipped and rendered as separate artifacts.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A titleless checklist note attached to a subcategory.
///
/// Checks carry no identifier and are not individually addressable; they
/// are serialized collectively, in append order, one aggregate file per
/// subcategory.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Check {
    /// Free-form check text.
    pub text: String,

    /// Difficulty tag.
    pub difficulty: String,

    /// Exclude this entry from the rendered checklist.
    pub nocheck: bool,
}

/// A titled, individually addressable checklist entry.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Item {
    /// Identifier, unique within the owning subcategory. Derived from the
    /// title and disambiguated on collision (`knife`, `knife-0`, ...).
    pub id: String,

    /// Display title.
    pub title: String,

    /// Body text.
    pub body: String,

    /// Difficulty tag.
    pub difficulty: String,

    /// Insertion-order index: the number of items that existed in the
    /// subcategory when this one was created. Fixed before identifier
    /// disambiguation and never recomputed.
    pub order: usize,
}

/// A named group of items and checks within a category.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Subcategory {
    /// Identifier, unique within the owning category.
    pub id: String,

    /// Display name as seen on the record that created this subcategory.
    pub name: String,

    /// Insertion-order index within the owning category.
    pub order: usize,

    #[serde(skip)]
    items: Vec<Item>,

    #[serde(skip)]
    checks: Vec<Check>,
}

impl Subcategory {
    pub fn new(id: String, name: String, order: usize) -> Self {
        Self {
            id,
            name,
            order,
            items: Vec::new(),
            checks: Vec::new(),
        }
    }

    /// Whether an item with the given identifier already exists.
    pub fn has_item(&self, id: &str) -> bool {
        self.items.iter().any(|item| item.id == id)
    }

    /// Append an item. The caller guarantees the identifier is unused.
    pub fn add_item(&mut self, item: Item) {
        debug_assert!(!self.has_item(&item.id));
        self.items.push(item);
    }

    /// Items in insertion order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Append a check.
    pub fn add_check(&mut self, check: Check) {
        self.checks.push(check);
    }

    /// Checks in append order.
    pub fn checks(&self) -> &[Check] {
        &self.checks
    }
}

/// A top-level grouping of subcategories.
///
/// The display name and locale are fixed by the first record that produced
/// this category's identifier and are never updated afterwards, even when
/// a later record (possibly from another locale) maps to the same id.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Category {
    /// Identifier, unique across the whole store.
    pub id: String,

    /// Display name from the creating record.
    pub name: String,

    /// Locale directory the creating record came from.
    pub locale: String,

    /// Insertion-order index across the store.
    pub order: usize,

    #[serde(skip)]
    subcategories: HashMap<String, Subcategory>,

    #[serde(skip)]
    subcategory_order: Vec<String>,
}

impl Category {
    pub fn new(id: String, name: String, locale: String, order: usize) -> Self {
        Self {
            id,
            name,
            locale,
            order,
            subcategories: HashMap::new(),
            subcategory_order: Vec::new(),
        }
    }

    pub fn subcategory(&self, id: &str) -> Option<&Subcategory> {
        self.subcategories.get(id)
    }

    pub fn subcategory_mut(&mut self, id: &str) -> Option<&mut Subcategory> {
        self.subcategories.get_mut(id)
    }

    /// Register a new subcategory. The caller guarantees the identifier is
    /// unused within this category.
    pub fn add_subcategory(&mut self, sub: Subcategory) {
        debug_assert!(!self.subcategories.contains_key(&sub.id));
        self.subcategory_order.push(sub.id.clone());
        self.subcategories.insert(sub.id.clone(), sub);
    }

    /// Subcategories in insertion order.
    pub fn subcategories(&self) -> impl Iterator<Item = &Subcategory> {
        self.subcategory_order
            .iter()
            .filter_map(|id| self.subcategories.get(id))
    }

    pub fn subcategory_count(&self) -> usize {
        self.subcategory_order.len()
    }
}

/// The ingestion context: all categories accumulated over a run.
///
/// An explicit store value rather than a process-wide registry, so
/// independent runs and tests each own their tree.
#[derive(Clone, Debug, Default)]
pub struct Store {
    categories: HashMap<String, Category>,
    category_order: Vec<String>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.get(id)
    }

    pub fn category_mut(&mut self, id: &str) -> Option<&mut Category> {
        self.categories.get_mut(id)
    }

    /// Register a new category. The caller guarantees the identifier is
    /// unused in this store.
    pub fn add_category(&mut self, category: Category) {
        debug_assert!(!self.categories.contains_key(&category.id));
        self.category_order.push(category.id.clone());
        self.categories.insert(category.id.clone(), category);
    }

    /// Categories in insertion order.
    pub fn categories(&self) -> impl Iterator<Item = &Category> {
        self.category_order
            .iter()
            .filter_map(|id| self.categories.get(id))
    }

    /// Number of categories.
    pub fn len(&self) -> usize {
        self.category_order.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.category_order.is_empty()
    }
}
