//! Failure files: JSON arrays of failed assertions with evaluated values.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use jsonschema::Draft;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::assertion::Assertion;

const V1_SCHEMA: &str = include_str!("../../../schemas/failures/v1.schema.json");

/// One failed assertion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureRecord {
    /// Raw source of the failed statement, shown above the summary.
    pub statement: String,
    #[serde(flatten)]
    pub assertion: Assertion,
    #[serde(default)]
    pub expected: String,
    #[serde(default)]
    pub actual: String,
}

/// Read, validate and parse a failure file.
pub fn load_failures(path: &Path) -> Result<Vec<FailureRecord>> {
    let raw = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    parse_failures(&raw).with_context(|| format!("load {}", path.display()))
}

/// Parse failure records: schema conformance, then typed deserialization.
pub fn parse_failures(raw: &str) -> Result<Vec<FailureRecord>> {
    let instance: Value = serde_json::from_str(raw).context("parse failures json")?;
    let schema: Value = serde_json::from_str(V1_SCHEMA).context("parse failures schema")?;
    validate_schema(&instance, &schema)?;
    let records: Vec<FailureRecord> =
        serde_json::from_value(instance).context("parse failures as v1 records")?;
    Ok(records)
}

/// Validate JSON instance against a JSON Schema (Draft 2020-12).
fn validate_schema(instance: &Value, schema: &Value) -> Result<()> {
    let compiled = jsonschema::options()
        .with_draft(Draft::Draft202012)
        .build(schema)
        .context("compile json schema")?;
    let messages: Vec<String> = compiled
        .iter_errors(instance)
        .map(|err| err.to_string())
        .collect();
    if !messages.is_empty() {
        bail!("schema validation failed:\n- {}", messages.join("\n- "));
    }
    Ok(())
}
