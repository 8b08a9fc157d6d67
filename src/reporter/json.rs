use crate::findings::Report;
use crate::reporter::Reporter;

pub struct JsonReporter;

impl JsonReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Reporter for JsonReporter {
    /// Serialize the finding sequence as a pretty-printed JSON array with the
    /// stable keys `severity`, `message`, `path`, `line`, `ruleId`.
    fn report(&self, report: &Report) -> String {
        serde_json::to_string_pretty(&report.findings)
            .unwrap_or_else(|e| format!(r#"{{"error": "Failed to serialize findings: {}"}}"#, e))
    }
}
