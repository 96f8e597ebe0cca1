//! Category and free-text filtering over a cached catalog snapshot.
//!
//! An entry is kept when the category selector is the `All` sentinel (exact,
//! case-sensitive) or equals the entry's category ignoring case, and the
//! entry's name contains the query ignoring case. Null slots are skipped,
//! entries without a name never match, and entries without a category only
//! match under `All`. Output order is input order.
//!
//! Everything here is a pure function of its inputs; `FilterState` just keeps
//! the inputs around and recomputes the view in full on every change.

use crate::catalog::{CatalogEntry, CategorySelector};
use crate::text::contains_ignore_case;
use tracing::trace;

/// A position in a snapshot: either an entry or an empty slot.
pub trait SnapshotSlot {
    fn entry(&self) -> Option<&CatalogEntry>;
}

impl SnapshotSlot for CatalogEntry {
    fn entry(&self) -> Option<&CatalogEntry> {
        Some(self)
    }
}

impl SnapshotSlot for Option<CatalogEntry> {
    fn entry(&self) -> Option<&CatalogEntry> {
        self.as_ref()
    }
}

impl<T: SnapshotSlot + ?Sized> SnapshotSlot for &T {
    fn entry(&self) -> Option<&CatalogEntry> {
        (**self).entry()
    }
}

/// Inclusion predicate shared by `filter` and `FilterState`.
pub fn matches(entry: &CatalogEntry, selector: &CategorySelector, query: &str) -> bool {
    selector.admits(entry.category()) && name_contains(entry, query)
}

/// Entries matching `category` and `query`, in snapshot order.
pub fn filter<S: SnapshotSlot>(catalog: &[S], category: &str, query: &str) -> Vec<CatalogEntry> {
    let selector = CategorySelector::parse(category);
    catalog
        .iter()
        .filter_map(SnapshotSlot::entry)
        .filter(|entry| matches(entry, &selector, query))
        .cloned()
        .collect()
}

/// Query-only search. A blank query returns every entry.
pub fn filter_by_query<S: SnapshotSlot>(catalog: &[S], query: &str) -> Vec<CatalogEntry> {
    if query.trim().is_empty() {
        return catalog.iter().filter_map(SnapshotSlot::entry).cloned().collect();
    }
    catalog
        .iter()
        .filter_map(SnapshotSlot::entry)
        .filter(|entry| name_contains(entry, query))
        .cloned()
        .collect()
}

fn name_contains(entry: &CatalogEntry, query: &str) -> bool {
    entry
        .name()
        .is_some_and(|name| contains_ignore_case(name, query))
}

#[derive(Debug, Clone)]
/// Category/query selection for one screen activation plus the view derived
/// from it.
pub struct FilterState {
    snapshot: Vec<Option<CatalogEntry>>,
    category: String,
    query: String,
    filtered: Vec<CatalogEntry>,
}

impl FilterState {
    /// Start with `All` and an empty query.
    pub fn new(snapshot: Vec<Option<CatalogEntry>>) -> Self {
        let mut state = Self {
            snapshot,
            category: CategorySelector::All.as_str().to_string(),
            query: String::new(),
            filtered: Vec::new(),
        };
        state.recompute();
        state
    }

    pub fn set_category(&mut self, category: impl Into<String>) -> &[CatalogEntry] {
        self.category = category.into();
        self.recompute();
        &self.filtered
    }

    pub fn set_query(&mut self, query: impl Into<String>) -> &[CatalogEntry] {
        self.query = query.into();
        self.recompute();
        &self.filtered
    }

    /// Swap in a freshly fetched snapshot, keeping the current selection.
    pub fn replace_snapshot(&mut self, snapshot: Vec<Option<CatalogEntry>>) -> &[CatalogEntry] {
        self.snapshot = snapshot;
        self.recompute();
        &self.filtered
    }

    /// Back to `All` and an empty query.
    pub fn reset(&mut self) -> &[CatalogEntry] {
        self.category = CategorySelector::All.as_str().to_string();
        self.query.clear();
        self.recompute();
        &self.filtered
    }

    pub fn filtered(&self) -> &[CatalogEntry] {
        &self.filtered
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn snapshot(&self) -> &[Option<CatalogEntry>] {
        &self.snapshot
    }

    fn recompute(&mut self) {
        self.filtered = filter(&self.snapshot, &self.category, &self.query);
        trace!(
            category = %self.category,
            query = %self.query,
            matched = self.filtered.len(),
            "recomputed filtered view"
        );
    }
}

impl Default for FilterState {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}
