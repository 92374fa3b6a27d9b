//! Flat input records as they appear in the source JSON files.

use serde::{Deserialize, Serialize};

/// One flat entry from a locale's JSON files.
///
/// Every field is optional in the input; absent fields decode to the empty
/// string (or `false` for the exclusion flag). A record is either an item
/// (titled, individually addressable) or a check (titleless note attached
/// to a subcategory) - see [`Record::is_check`].
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Record {
    /// Item title. Empty for checks.
    pub title: String,

    /// Item body text.
    pub body: String,

    /// Check text.
    pub text: String,

    /// Display name of the owning category.
    pub category: String,

    /// Display name of the owning subcategory.
    pub subcategory: String,

    /// Difficulty tag, shared by items and checks.
    pub difficulty: String,

    /// Exclude-from-checklist flag for checks.
    pub nocheck: bool,
}

impl Record {
    /// Whether this record is a check rather than an item.
    ///
    /// The title field is the only discriminant: a record with an empty
    /// title is a check even if item fields such as `body` are populated.
    pub fn is_check(&self) -> bool {
        self.title.is_empty()
    }
}
