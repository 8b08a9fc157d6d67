//! Raw finding extraction and normalization.
//!
//! Two per-record schema variants are supported: the nested Semgrep shape,
//! where `severity` and `message` live under an `extra` object, and a flat
//! shape with every field at the top level. Normalization is total; a record
//! missing fields (or not even an object) still maps to exactly one
//! [`Finding`] via the documented defaults.

use serde_json::Value;
use tracing::debug;

use super::types::Finding;

/// Severity assigned when a record carries none.
pub const DEFAULT_SEVERITY: &str = "INFO";

/// A raw finding record as produced by the scanner.
///
/// Held untyped because the scanner's schema is not under our control: any
/// field may be absent or of the wrong type.
#[derive(Debug, Clone)]
pub struct RawFinding(Value);

impl RawFinding {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }
}

/// Per-record schema variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaVariant {
    /// `severity` and `message` at the top level.
    Flat,
    /// `severity` and `message` under an `extra` object (Semgrep's native
    /// output shape).
    Nested,
}

impl SchemaVariant {
    /// A record carrying an `extra` object uses the nested variant.
    pub fn detect(record: &Value) -> Self {
        if record.get("extra").is_some_and(Value::is_object) {
            SchemaVariant::Nested
        } else {
            SchemaVariant::Flat
        }
    }
}

/// Normalize a raw finding sequence. Same length and order as the input.
pub fn normalize(raw: &[RawFinding]) -> Vec<Finding> {
    raw.iter().map(normalize_one).collect()
}

fn normalize_one(raw: &RawFinding) -> Finding {
    let record = raw.as_value();

    // When both variants could apply, the `extra` object is authoritative for
    // the fields it carries; top-level values are the fallback.
    let (severity, message) = match SchemaVariant::detect(record) {
        SchemaVariant::Nested => {
            let extra = record.get("extra").unwrap_or(&Value::Null);
            (
                str_field(extra, "severity").or_else(|| str_field(record, "severity")),
                str_field(extra, "message").or_else(|| str_field(record, "message")),
            )
        }
        SchemaVariant::Flat => (str_field(record, "severity"), str_field(record, "message")),
    };

    let rule_id = str_field(record, "check_id").unwrap_or_default();
    if severity.is_none() {
        debug!(rule_id = %rule_id, "finding has no severity, using default");
    }

    Finding {
        severity: severity.unwrap_or_else(|| DEFAULT_SEVERITY.to_string()),
        message: message.unwrap_or_default(),
        path: str_field(record, "path").unwrap_or_default(),
        line: line_field(record),
        rule_id,
    }
}

fn str_field(value: &Value, key: &str) -> Option<String> {
    value.get(key).and_then(Value::as_str).map(str::to_string)
}

/// `start.line`, accepted only as a non-negative integer.
fn line_field(record: &Value) -> u64 {
    record
        .get("start")
        .and_then(|start| start.get("line"))
        .and_then(Value::as_u64)
        .unwrap_or(0)
}
