//! JSON Schema validation for catalog documents.
//!
//! The schema ships inside the binary so catalog files can be checked without
//! locating a repository checkout. Validation runs on the raw JSON value
//! before it is deserialized, which keeps the error messages pointed at the
//! offending JSON path instead of a serde position.

use anyhow::{Context, Result, anyhow, bail};
use jsonschema::JSONSchema;
use serde_json::Value;

/// Bundled catalog snapshot schema (draft-07).
pub const CATALOG_SCHEMA: &str = include_str!("../schema/catalog_snapshot.json");

pub(crate) fn compile_catalog_schema() -> Result<JSONSchema> {
    let schema: Value =
        serde_json::from_str(CATALOG_SCHEMA).context("parsing bundled catalog schema")?;
    JSONSchema::compile(&schema).map_err(|err| anyhow!("compiling catalog schema: {err}"))
}

/// Validate a catalog document (wrapper object or bare array).
pub fn validate_catalog_value(value: &Value) -> Result<()> {
    let compiled = compile_catalog_schema()?;
    if let Err(errors) = compiled.validate(value) {
        let details = errors
            .map(|err| format!("{}: {}", err.instance_path, err))
            .collect::<Vec<_>>()
            .join("\n");
        bail!("catalog failed schema validation:\n{}", details);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn bundled_schema_compiles() {
        assert!(compile_catalog_schema().is_ok());
    }

    #[test]
    fn accepts_wrapper_and_bare_array() {
        let wrapper = json!({
            "schema_version": "petal_catalog_v1",
            "catalog": {"key": "petals", "title": "Petals"},
            "products": [{"productId": "p1", "productName": "Red Rose"}, null]
        });
        assert!(validate_catalog_value(&wrapper).is_ok());
        assert!(validate_catalog_value(&json!([{"id": "p1"}, null])).is_ok());
        assert!(validate_catalog_value(&json!([])).is_ok());
    }

    #[test]
    fn rejects_entries_without_identifier() {
        let err = validate_catalog_value(&json!([{"productName": "Nameless"}])).unwrap_err();
        assert!(err.to_string().contains("schema validation"));
    }

    #[test]
    fn rejects_negative_price() {
        assert!(validate_catalog_value(&json!([{"id": "p1", "price": -2}])).is_err());
    }

    #[test]
    fn rejects_wrapper_without_products() {
        assert!(validate_catalog_value(&json!({"schema_version": "petal_catalog_v1"})).is_err());
    }
}
