use serde::{Deserialize, Serialize};

/// A normalized finding record.
///
/// Every field is present after normalization; absent or malformed input
/// fields resolve to the documented defaults (`"INFO"` severity, empty
/// strings, line 0). Serialized field names are the stable JSON report
/// contract: `severity`, `message`, `path`, `line`, `ruleId`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Finding {
    pub severity: String,
    pub message: String,
    pub path: String,
    pub line: u64,
    pub rule_id: String,
}

/// Presentational severity classification.
///
/// Matches severity labels case-insensitively against the known set and
/// falls back to `Unknown` for anything else. This drives CSS classes and
/// summary counts only; the finding keeps its original severity string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeverityClass {
    Critical,
    Error,
    Warning,
    Info,
    Unknown,
}

impl SeverityClass {
    pub fn from_label(label: &str) -> Self {
        match label.to_ascii_lowercase().as_str() {
            "critical" => SeverityClass::Critical,
            "error" => SeverityClass::Error,
            "warning" => SeverityClass::Warning,
            "info" => SeverityClass::Info,
            _ => SeverityClass::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SeverityClass::Critical => "critical",
            SeverityClass::Error => "error",
            SeverityClass::Warning => "warning",
            SeverityClass::Info => "info",
            SeverityClass::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for SeverityClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Per-class finding counts for the report header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub critical: usize,
    pub errors: usize,
    pub warnings: usize,
    pub infos: usize,
    pub unknown: usize,
    pub total: usize,
}

impl Summary {
    pub fn from_findings(findings: &[Finding]) -> Self {
        let mut summary = Summary {
            critical: 0,
            errors: 0,
            warnings: 0,
            infos: 0,
            unknown: 0,
            total: findings.len(),
        };
        for finding in findings {
            match SeverityClass::from_label(&finding.severity) {
                SeverityClass::Critical => summary.critical += 1,
                SeverityClass::Error => summary.errors += 1,
                SeverityClass::Warning => summary.warnings += 1,
                SeverityClass::Info => summary.infos += 1,
                SeverityClass::Unknown => summary.unknown += 1,
            }
        }
        summary
    }
}

/// The report document: summary plus the ordered finding sequence.
///
/// Finding order equals input order; grouping by severity in the HTML
/// output is styling only and never reorders the sequence.
#[derive(Debug, Clone)]
pub struct Report {
    pub summary: Summary,
    pub findings: Vec<Finding>,
}

impl Report {
    pub fn new(findings: Vec<Finding>) -> Self {
        let summary = Summary::from_findings(&findings);
        Self { summary, findings }
    }

    pub fn total(&self) -> usize {
        self.summary.total
    }
}
