//! Catalog records and the on-disk catalog document.
//!
//! Field names follow the storefront backend (`productId`, `productName`,
//! ...), with short aliases accepted on input. Name and category are optional
//! so that partially written records still load; the filter treats them as
//! non-matching.

use crate::catalog::ProductId;
use crate::schema_loader::validate_catalog_value;
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::fs;
use std::io::Read;
use std::path::Path;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
/// Unit price as published by the backend. Display data only.
pub struct Price(pub f64);

impl Price {
    /// Finite and not negative.
    pub fn is_valid(&self) -> bool {
        self.0.is_finite() && self.0 >= 0.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// One product of the catalog snapshot.
pub struct CatalogEntry {
    #[serde(rename = "productId", alias = "id")]
    pub id: ProductId,
    #[serde(
        rename = "productName",
        alias = "name",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub name: Option<String>,
    #[serde(rename = "productPrice", alias = "price", default)]
    pub price: Price,
    #[serde(rename = "productDescription", alias = "description", default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl CatalogEntry {
    pub fn new(id: impl Into<String>, name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id: ProductId(id.into()),
            name: Some(name.into()),
            price: Price::default(),
            description: String::new(),
            image: String::new(),
            category: Some(category.into()),
        }
    }

    pub fn with_price(mut self, price: f64) -> Self {
        self.price = Price(price);
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
/// Descriptive header of a catalog document.
pub struct CatalogMetadata {
    pub key: String,
    pub title: String,
}

#[derive(Debug, Clone, Deserialize)]
/// Versioned wrapper form of a catalog file.
pub struct CatalogDocument {
    pub schema_version: String,
    #[serde(default)]
    pub catalog: Option<CatalogMetadata>,
    #[serde(default)]
    pub products: Vec<Option<CatalogEntry>>,
}

/// Read and parse a catalog file. `-` reads stdin.
///
/// Only the document shape is checked here; `SnapshotIndex` enforces the
/// cross-entry invariants.
pub fn load_snapshot_from_path(path: &Path) -> Result<Vec<Option<CatalogEntry>>> {
    let data = if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("reading catalog from stdin")?;
        buf
    } else {
        fs::read_to_string(path).with_context(|| format!("reading catalog {}", path.display()))?
    };
    let snapshot =
        parse_snapshot(&data).with_context(|| format!("parsing catalog {}", path.display()))?;
    debug!(path = %path.display(), entries = snapshot.len(), "loaded catalog snapshot");
    Ok(snapshot)
}

/// Parse a catalog from a versioned document, a bare JSON array, or
/// newline-delimited JSON records.
pub fn parse_snapshot(input: &str) -> Result<Vec<Option<CatalogEntry>>> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        bail!("catalog input is empty");
    }

    let snapshot = match serde_json::from_str::<Value>(trimmed) {
        Ok(value) => snapshot_from_value(value)?,
        Err(_) => parse_record_lines(trimmed)?,
    };

    let missing = snapshot.iter().filter(|slot| slot.is_none()).count();
    if missing > 0 {
        warn!(missing, "catalog contains null entries; they will be skipped");
    }
    let nameless = snapshot
        .iter()
        .flatten()
        .filter(|entry| entry.name.is_none())
        .count();
    if nameless > 0 {
        warn!(nameless, "catalog contains entries without a name");
    }
    Ok(snapshot)
}

fn snapshot_from_value(value: Value) -> Result<Vec<Option<CatalogEntry>>> {
    let is_document = value
        .as_object()
        .is_some_and(|map| map.contains_key("schema_version") || map.contains_key("products"));
    match value {
        Value::Object(_) if is_document => {
            validate_catalog_value(&value)?;
            let document: CatalogDocument =
                serde_json::from_value(value).context("Unable to parse catalog document")?;
            crate::catalog::index::validate_schema_version(&document.schema_version)?;
            if let Some(meta) = &document.catalog {
                debug!(key = %meta.key, title = %meta.title, "catalog document header");
            }
            Ok(document.products)
        }
        Value::Array(_) => {
            validate_catalog_value(&value)?;
            serde_json::from_value(value).context("Unable to parse JSON array of catalog entries")
        }
        Value::Object(_) => {
            let value = Value::Array(vec![value]);
            validate_catalog_value(&value)?;
            serde_json::from_value(value).context("Unable to parse catalog entry")
        }
        _ => bail!("Unsupported JSON input; expected object or array"),
    }
}

fn parse_record_lines(input: &str) -> Result<Vec<Option<CatalogEntry>>> {
    let mut records = Vec::new();
    for (idx, line) in input.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let entry: Option<CatalogEntry> = serde_json::from_str(line)
            .with_context(|| format!("Unable to parse catalog entry from line {}", idx + 1))?;
        records.push(entry);
    }
    Ok(records)
}
