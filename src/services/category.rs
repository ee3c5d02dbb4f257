//! Category reference resolution
//!
//! Transactions carry both a `category_id` and a denormalized `category`
//! name, and budgets point at categories by name. Ids are canonical: a name
//! is only used to find the id when no id is present.

use crate::models::{Category, CategoryId, Transaction};

/// Find a category by exact name
pub fn find_by_name<'a>(categories: &'a [Category], name: &str) -> Option<&'a Category> {
    categories.iter().find(|c| c.name == name)
}

/// The category id a transaction belongs to, if it can be resolved
pub fn resolve_category_id(txn: &Transaction, categories: &[Category]) -> Option<CategoryId> {
    txn.category_id.or_else(|| {
        txn.category
            .as_deref()
            .and_then(|name| find_by_name(categories, name))
            .map(|c| c.id)
    })
}

/// Display name for a transaction's category
pub fn category_label(txn: &Transaction, categories: &[Category]) -> String {
    resolve_category_id(txn, categories)
        .and_then(|id| categories.iter().find(|c| c.id == id))
        .map(|c| c.name.clone())
        .or_else(|| txn.category.clone())
        .unwrap_or_else(|| "(uncategorized)".to_string())
}
