#![allow(dead_code)]

use anyhow::{Context, Result};
use petalcart::CatalogEntry;
use serde_json::{Value, json};
use std::io::{ErrorKind, Write};
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};
use tempfile::NamedTempFile;

pub fn repo_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

pub fn bundled_catalog() -> PathBuf {
    repo_root().join(petalcart::DEFAULT_CATALOG_PATH)
}

pub fn entry(id: &str, name: &str, category: &str) -> CatalogEntry {
    CatalogEntry::new(id, name, category)
}

/// The two-entry catalog used throughout the scenarios.
pub fn rose_and_tulip() -> Vec<CatalogEntry> {
    vec![
        entry("p1", "Red Rose", "Roses"),
        entry("p2", "White Tulip", "Tulips"),
    ]
}

/// A wider catalog with mixed-case categories and overlapping names.
pub fn mixed_catalog() -> Vec<CatalogEntry> {
    vec![
        entry("p1", "Red Rose", "Roses"),
        entry("p2", "White Tulip", "Tulips"),
        entry("p3", "rose quartz tulip", "TULIPS"),
        entry("p4", "Sunflower Trio", "Sunflower"),
        entry("p5", "Roseate Daisy", "daisy"),
        entry("p6", "Stargazer Lily", "Lillies"),
        entry("p7", "WHITE ROSE", "roses"),
    ]
}

pub fn ids(entries: &[CatalogEntry]) -> Vec<String> {
    entries.iter().map(|e| e.id.to_string()).collect()
}

pub fn catalog_document(products: Value) -> Value {
    json!({
        "schema_version": "petal_catalog_v1",
        "catalog": {"key": "fixture", "title": "fixture catalog"},
        "products": products,
    })
}

pub fn write_catalog(value: &Value) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    serde_json::to_writer(&mut file, value)?;
    file.flush()?;
    Ok(file)
}

pub fn cli() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_catalog-filter"));
    cmd.env_remove("PETALCART_CATALOG")
        .env_remove("PETALCART_LOG")
        .env_remove("RUST_LOG");
    cmd
}

pub fn run_with_stdin(mut cmd: Command, stdin: &str) -> Result<Output> {
    let mut child = cmd
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .context("failed to spawn catalog-filter")?;
    let written = child
        .stdin
        .take()
        .context("stdin not captured")?
        .write_all(stdin.as_bytes());
    // The binary may exit before reading its input.
    if let Err(err) = written {
        if err.kind() != ErrorKind::BrokenPipe {
            return Err(err.into());
        }
    }
    child.wait_with_output().context("failed to wait for catalog-filter")
}

pub fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .filter(|line| !line.is_empty())
        .collect()
}
