//! Test-only helpers for constructing failure records.

use crate::core::assertion::Assertion;
use crate::io::failures::FailureRecord;

/// Existence (or `is-regexp`) failure with a statement derived from its parts.
pub fn existence_failure(subject: &str, operator: &str) -> FailureRecord {
    FailureRecord {
        statement: format!("{subject} {operator}"),
        assertion: Assertion::existence(subject, operator),
        expected: String::new(),
        actual: String::new(),
    }
}

/// Comparison failure with evaluated values.
pub fn comparison_failure(
    subject: &str,
    operator: &str,
    value: &str,
    expected: &str,
    actual: &str,
) -> FailureRecord {
    FailureRecord {
        statement: format!("{subject} {operator} {value}"),
        assertion: Assertion::comparison(subject, operator, value),
        expected: expected.to_string(),
        actual: actual.to_string(),
    }
}

/// Write `records` as a failure file in a fresh temp dir.
pub fn failure_file(
    records: &[FailureRecord],
) -> anyhow::Result<(tempfile::TempDir, std::path::PathBuf)> {
    let temp = tempfile::tempdir()?;
    let path = temp.path().join("failures.json");
    let mut payload = serde_json::to_string_pretty(records)?;
    payload.push('\n');
    std::fs::write(&path, payload)?;
    Ok((temp, path))
}
