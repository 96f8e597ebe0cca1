//! Indexed view of a catalog snapshot.
//!
//! The index enforces the snapshot invariants (unique, non-empty identifiers
//! and valid prices) and provides lookup by product id. It is strict on
//! purpose: a snapshot with duplicate ids cannot be rendered unambiguously.

use crate::catalog::{CatalogEntry, ProductId, load_snapshot_from_path};
use crate::text::fold_key;
use anyhow::{Context, Result, bail};
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use tracing::debug;

// Catalog files in the wild only carry one version; callers can widen the
// accepted set via env while keeping the default strict.
pub const DEFAULT_SCHEMA_VERSION: &str = "petal_catalog_v1";
const ENV_ALLOWED_SCHEMA_VERSIONS: &str = "PETALCART_ALLOWED_CATALOG_SCHEMAS";

#[derive(Debug, Clone)]
/// Snapshot plus a derived map keyed by product id.
pub struct SnapshotIndex {
    snapshot: Vec<Option<CatalogEntry>>,
    by_id: BTreeMap<ProductId, usize>,
}

impl SnapshotIndex {
    /// Load a catalog file and validate it.
    pub fn load(path: &Path) -> Result<Self> {
        let snapshot =
            load_snapshot_from_path(path).with_context(|| format!("loading {}", path.display()))?;
        Self::build(snapshot)
    }

    /// Validate an in-memory snapshot and index it by product id.
    pub fn build(snapshot: Vec<Option<CatalogEntry>>) -> Result<Self> {
        let by_id = build_index(&snapshot)?;
        debug!(entries = by_id.len(), slots = snapshot.len(), "indexed catalog snapshot");
        Ok(Self { snapshot, by_id })
    }

    /// Resolve an entry by id.
    ///
    /// Returns `None` instead of erroring; callers decide how to report it.
    pub fn entry(&self, id: &ProductId) -> Option<&CatalogEntry> {
        self.by_id
            .get(id)
            .and_then(|&slot| self.snapshot.get(slot))
            .and_then(Option::as_ref)
    }

    /// Distinct categories in first-seen order, compared case-insensitively.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = BTreeSet::new();
        let mut categories = Vec::new();
        for category in self.snapshot.iter().flatten().filter_map(CatalogEntry::category) {
            if seen.insert(fold_key(category)) {
                categories.push(category);
            }
        }
        categories
    }

    /// The validated snapshot, null slots included.
    pub fn snapshot(&self) -> &[Option<CatalogEntry>] {
        &self.snapshot
    }

    pub fn into_snapshot(self) -> Vec<Option<CatalogEntry>> {
        self.snapshot
    }

    /// Number of non-null entries.
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

pub(crate) fn validate_schema_version(schema_version: &str) -> Result<()> {
    if schema_version.is_empty() {
        bail!("schema_version must not be empty");
    }

    if !schema_version
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
    {
        bail!(
            "schema_version must match ^[A-Za-z0-9_.-]+$, got {}",
            schema_version
        );
    }

    let allowed = allowed_schema_versions();
    if !allowed.contains(schema_version) {
        bail!(
            "schema_version '{}' not in allowed set {:?}",
            schema_version,
            allowed
        );
    }

    Ok(())
}

fn allowed_schema_versions() -> BTreeSet<String> {
    let mut versions: BTreeSet<String> = BTreeSet::new();
    versions.insert(DEFAULT_SCHEMA_VERSION.to_string());
    if let Ok(raw) = std::env::var(ENV_ALLOWED_SCHEMA_VERSIONS) {
        for v in crate::split_list(&raw) {
            versions.insert(v);
        }
    }
    versions
}

fn build_index(snapshot: &[Option<CatalogEntry>]) -> Result<BTreeMap<ProductId, usize>> {
    let mut map = BTreeMap::new();
    for (slot, entry) in snapshot.iter().enumerate() {
        let Some(entry) = entry else { continue };
        if entry.id.0.trim().is_empty() {
            bail!("encountered product with no id at position {}", slot);
        }
        if map.contains_key(&entry.id) {
            bail!("duplicate product id {}", entry.id);
        }
        if !entry.price.is_valid() {
            bail!("product {} has invalid price {}", entry.id, entry.price.0);
        }
        map.insert(entry.id.clone(), slot);
    }
    Ok(map)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rose() -> CatalogEntry {
        CatalogEntry::new("p1", "Red Rose", "Roses").with_price(12.0)
    }

    #[test]
    fn looks_up_entries_by_id() {
        let index = SnapshotIndex::build(vec![
            Some(rose()),
            None,
            Some(CatalogEntry::new("p2", "White Tulip", "Tulips")),
        ])
        .unwrap();
        assert_eq!(index.len(), 2);
        assert_eq!(
            index.entry(&ProductId::from("p2")).and_then(CatalogEntry::name),
            Some("White Tulip")
        );
        assert!(index.entry(&ProductId::from("missing")).is_none());
    }

    #[test]
    fn rejects_duplicate_ids() {
        let err = SnapshotIndex::build(vec![Some(rose()), Some(rose())]).unwrap_err();
        assert!(err.to_string().contains("duplicate product id p1"));
    }

    #[test]
    fn rejects_blank_ids_and_bad_prices() {
        assert!(SnapshotIndex::build(vec![Some(CatalogEntry::new(" ", "Rose", "Roses"))]).is_err());
        assert!(SnapshotIndex::build(vec![Some(rose().with_price(-0.5))]).is_err());
        assert!(SnapshotIndex::build(vec![Some(rose().with_price(f64::INFINITY))]).is_err());
    }

    #[test]
    fn empty_snapshot_is_valid() {
        let index = SnapshotIndex::build(Vec::new()).unwrap();
        assert!(index.is_empty());
        assert!(index.categories().is_empty());
    }

    #[test]
    fn categories_dedupe_case_insensitively_in_order() {
        let mut nameless = CatalogEntry::new("p4", "x", "ignored");
        nameless.category = None;
        let index = SnapshotIndex::build(vec![
            Some(CatalogEntry::new("p1", "Tulip", "Tulips")),
            Some(CatalogEntry::new("p2", "Rose", "Roses")),
            Some(CatalogEntry::new("p3", "Pink Tulip", "TULIPS")),
            Some(nameless),
        ])
        .unwrap();
        assert_eq!(index.categories(), vec!["Tulips", "Roses"]);
    }

    #[test]
    fn categories_collapse_under_the_filter_case_rule() {
        let index = SnapshotIndex::build(vec![
            Some(CatalogEntry::new("p1", "Blue Flag", "İris")),
            Some(CatalogEntry::new("p2", "Yellow Flag", "iris")),
            Some(CatalogEntry::new("p3", "Greek Rose", "ΑΣ")),
            Some(CatalogEntry::new("p4", "Greek Lily", "ας")),
        ])
        .unwrap();
        assert_eq!(index.categories(), vec!["İris", "ΑΣ"]);
    }

    #[test]
    fn default_schema_version_is_allowed() {
        assert!(validate_schema_version(DEFAULT_SCHEMA_VERSION).is_ok());
        assert!(validate_schema_version("").is_err());
        assert!(validate_schema_version("bad version").is_err());
        assert!(validate_schema_version("petal_catalog_v0").is_err());
    }
}
