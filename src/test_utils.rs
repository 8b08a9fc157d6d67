#[cfg(test)]
pub mod fixtures {
    use crate::findings::{Finding, Report};

    pub fn create_test_report(findings: Vec<Finding>) -> Report {
        Report::new(findings)
    }

    pub fn create_finding(
        severity: &str,
        message: &str,
        path: &str,
        line: u64,
        rule_id: &str,
    ) -> Finding {
        Finding {
            severity: severity.to_string(),
            message: message.to_string(),
            path: path.to_string(),
            line,
            rule_id: rule_id.to_string(),
        }
    }

    pub fn error_finding() -> Finding {
        create_finding("ERROR", "bad thing", "a.py", 10, "rule-1")
    }
}
