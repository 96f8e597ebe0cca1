//! Catalog location and other environment-driven settings.
//!
//! Resolution order for the catalog path: explicit CLI value,
//! `PETALCART_CATALOG`, the build-time `PETALCART_CATALOG_HINT`, then an
//! upward search from the working directory for the bundled catalog.

use crate::catalog::DEFAULT_CATALOG_PATH;
use anyhow::{Result, bail};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const ENV_CATALOG: &str = "PETALCART_CATALOG";
pub const ENV_LOG: &str = "PETALCART_LOG";
const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone)]
pub struct Settings {
    pub catalog_path: PathBuf,
    pub log_filter: String,
}

impl Settings {
    pub fn resolve(explicit_catalog: Option<&Path>) -> Result<Self> {
        Ok(Self {
            catalog_path: resolve_catalog_path(explicit_catalog)?,
            log_filter: log_filter(),
        })
    }
}

/// Log directives from `PETALCART_LOG`, then `RUST_LOG`, then `warn`.
pub fn log_filter() -> String {
    env_non_empty(ENV_LOG)
        .or_else(|| env_non_empty("RUST_LOG"))
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
}

pub fn resolve_catalog_path(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }

    if let Some(path) = env_non_empty(ENV_CATALOG) {
        return Ok(PathBuf::from(path));
    }

    if let Some(hint) = option_env!("PETALCART_CATALOG_HINT") {
        let candidate = PathBuf::from(hint);
        if candidate.is_file() {
            return Ok(candidate);
        }
    }

    if let Ok(cwd) = env::current_dir() {
        if let Some(found) = search_upwards(&cwd) {
            return Ok(found);
        }
    }

    bail!(
        "Unable to locate a catalog. Pass --catalog, set {ENV_CATALOG}, or run from a checkout containing {DEFAULT_CATALOG_PATH}."
    )
}

pub(crate) fn search_upwards(start: &Path) -> Option<PathBuf> {
    let mut dir = fs::canonicalize(start).ok()?;
    loop {
        let candidate = dir.join(DEFAULT_CATALOG_PATH);
        if candidate.is_file() {
            return Some(candidate);
        }
        if !dir.pop() {
            break;
        }
    }
    None
}

fn env_non_empty(name: &str) -> Option<String> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Some(value),
        _ => None,
    }
}
