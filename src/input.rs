//! Input document loading.
//!
//! The scanner's output is a single JSON document: either a top-level array
//! of finding records, or an object whose `results` key holds that array
//! (Semgrep's native shape). An object without `results` yields an empty
//! sequence; any other top-level shape is a fatal malformed input.

use std::fs;
use std::path::Path;

use serde_json::Value;
use tracing::debug;

use crate::error::{ReportError, Result};
use crate::findings::RawFinding;

/// Load raw findings from a JSON file.
pub fn load(path: &Path) -> Result<Vec<RawFinding>> {
    let content = fs::read_to_string(path).map_err(|e| ReportError::read_error(path, e))?;
    let findings = parse_document(&content, path)?;
    debug!(path = %path.display(), count = findings.len(), "loaded raw findings");
    Ok(findings)
}

/// Parse a JSON document into raw finding records.
pub fn parse_document(content: &str, path: &Path) -> Result<Vec<RawFinding>> {
    let document: Value =
        serde_json::from_str(content).map_err(|e| ReportError::malformed_input(path, e))?;

    match document {
        Value::Array(records) => Ok(records.into_iter().map(RawFinding::new).collect()),
        Value::Object(mut fields) => match fields.remove("results") {
            Some(Value::Array(records)) => {
                Ok(records.into_iter().map(RawFinding::new).collect())
            }
            Some(other) => Err(ReportError::invalid_shape(
                path,
                format!("`results` must be an array, got {}", json_type(&other)),
            )),
            None => Ok(Vec::new()),
        },
        other => Err(ReportError::invalid_shape(
            path,
            format!("expected an object or array, got {}", json_type(&other)),
        )),
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
