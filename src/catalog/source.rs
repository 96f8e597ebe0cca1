//! Providers of catalog snapshots.
//!
//! A `CatalogSource` hands out the full snapshot on demand. Fetch failures are
//! the source's concern and surface as errors; the filter only ever sees a
//! validated snapshot.

use crate::catalog::{CatalogEntry, SnapshotIndex};
use anyhow::Result;
use std::path::{Path, PathBuf};

pub trait CatalogSource {
    /// Human readable origin, used in log lines and error context.
    fn describe(&self) -> String;

    /// Fetch the full snapshot in backend order.
    fn fetch(&self) -> Result<Vec<Option<CatalogEntry>>>;

    /// Fetch and index in one step.
    fn fetch_index(&self) -> Result<SnapshotIndex> {
        SnapshotIndex::build(self.fetch()?)
    }
}

#[derive(Debug, Clone)]
/// Catalog document on disk, or stdin when the path is `-`.
pub struct FileCatalogSource {
    path: PathBuf,
}

impl FileCatalogSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogSource for FileCatalogSource {
    fn describe(&self) -> String {
        if self.path.as_os_str() == "-" {
            "stdin".to_string()
        } else {
            self.path.display().to_string()
        }
    }

    fn fetch(&self) -> Result<Vec<Option<CatalogEntry>>> {
        Ok(SnapshotIndex::load(&self.path)?.into_snapshot())
    }
}

#[derive(Debug, Clone, Default)]
/// Snapshot held in memory.
pub struct StaticCatalogSource {
    snapshot: Vec<Option<CatalogEntry>>,
}

impl StaticCatalogSource {
    pub fn new(snapshot: Vec<Option<CatalogEntry>>) -> Self {
        Self { snapshot }
    }
}

impl FromIterator<CatalogEntry> for StaticCatalogSource {
    fn from_iter<I: IntoIterator<Item = CatalogEntry>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Some).collect())
    }
}

impl CatalogSource for StaticCatalogSource {
    fn describe(&self) -> String {
        format!("in-memory catalog ({} slots)", self.snapshot.len())
    }

    fn fetch(&self) -> Result<Vec<Option<CatalogEntry>>> {
        Ok(SnapshotIndex::build(self.snapshot.clone())?.into_snapshot())
    }
}
