//! Catalog snapshot loading and client-side product filtering.
//!
//! The storefront keeps the last fetched product list in memory and derives
//! the visible list from a selected category and a search query. This crate
//! holds that logic: `catalog` loads and validates snapshots, `filter` derives
//! views from them, and `config`/`logging` carry the command-line plumbing.

pub mod catalog;
pub mod config;
pub mod filter;
pub mod logging;
pub mod schema_loader;
pub mod text;

pub use catalog::{
    ALL_CATEGORIES, CatalogDocument, CatalogEntry, CatalogMetadata, CatalogSource,
    CategorySelector, DEFAULT_CATALOG_PATH, FileCatalogSource, Price, ProductId, SnapshotIndex,
    StaticCatalogSource, load_snapshot_from_path, parse_snapshot,
};
pub use config::{Settings, resolve_catalog_path};
pub use filter::{FilterState, SnapshotSlot, filter, filter_by_query, matches};
pub use text::{contains_ignore_case, eq_ignore_case};

/// Split a comma- or whitespace-separated list, dropping empty items.
pub fn split_list(value: &str) -> Vec<String> {
    value
        .replace(',', " ")
        .split_whitespace()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_list_accepts_commas_and_spaces() {
        assert_eq!(
            split_list("petal_catalog_v2, legacy_v1  ,,x"),
            vec!["petal_catalog_v2", "legacy_v1", "x"]
        );
        assert!(split_list(" , ").is_empty());
    }
}
