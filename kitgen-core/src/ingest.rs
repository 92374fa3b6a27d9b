//! Folding flat records into the tree model.
//!
//! Ingestion is infallible: a malformed record (missing category or
//! subcategory name, say) slugifies to an empty identifier and attaches to
//! an empty-id node instead of being rejected.

use crate::model::{Category, Check, Item, Store, Subcategory};
use crate::record::Record;
use crate::slug::slug;

/// Fold one record into the store.
///
/// Category and subcategory nodes are created on first reference; a node's
/// display name, locale, and insertion-order index are fixed by the record
/// that creates it and never updated by later records that map to the same
/// identifier. `locale` is the name of the locale directory the record was
/// read from.
pub fn ingest(store: &mut Store, locale: &str, record: Record) {
    let cat_id = slug(&record.category);
    if store.category(&cat_id).is_none() {
        let order = store.len();
        store.add_category(Category::new(
            cat_id.clone(),
            record.category.clone(),
            locale.to_string(),
            order,
        ));
    }
    let category = store
        .category_mut(&cat_id)
        .expect("category was just inserted");

    let sub_id = slug(&record.subcategory);
    if category.subcategory(&sub_id).is_none() {
        let order = category.subcategory_count();
        category.add_subcategory(Subcategory::new(
            sub_id.clone(),
            record.subcategory.clone(),
            order,
        ));
    }
    let sub = category
        .subcategory_mut(&sub_id)
        .expect("subcategory was just inserted");

    if record.is_check() {
        sub.add_check(Check {
            text: record.text,
            difficulty: record.difficulty,
            nocheck: record.nocheck,
        });
        return;
    }

    // The order index reflects the sibling count at insert time and is not
    // recomputed when the identifier gets disambiguated below.
    let order = sub.item_count();
    let base_id = slug(&record.title);
    let id = unique_item_id(&base_id, sub);
    sub.add_item(Item {
        id,
        title: record.title,
        body: record.body,
        difficulty: record.difficulty,
        order,
    });
}

/// Compute the final identifier for an item in one pass.
///
/// Returns `base` if unused within the subcategory, otherwise the first
/// unused of `base-0`, `base-1`, ...
fn unique_item_id(base: &str, sub: &Subcategory) -> String {
    if !sub.has_item(base) {
        return base.to_string();
    }
    (0..)
        .map(|n| format!("{}-{}", base, n))
        .find(|candidate| !sub.has_item(candidate))
        .expect("unbounded candidate sequence always yields a free id")
}
