//! Catalog snapshot wiring.
//!
//! This module wraps catalog documents (for example `catalogs/petals_v1.json`)
//! so callers can load a validated snapshot and look entries up by id. Types
//! here mirror the backend record fields; callers use `SnapshotIndex` for
//! lookups and a `CatalogSource` to obtain snapshots.

pub mod identity;
pub mod index;
pub mod model;
pub mod source;

pub use identity::{ALL_CATEGORIES, CategorySelector, ProductId};
pub use index::SnapshotIndex;
pub use model::{CatalogDocument, CatalogEntry, CatalogMetadata, Price};
pub use source::{CatalogSource, FileCatalogSource, StaticCatalogSource};

pub use model::{load_snapshot_from_path, parse_snapshot};

/// Default relative path to the bundled catalog.
pub const DEFAULT_CATALOG_PATH: &str = "catalogs/petals_v1.json";
