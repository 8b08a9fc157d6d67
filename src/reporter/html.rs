use crate::findings::{Finding, Report, SeverityClass};
use crate::reporter::Reporter;

pub struct HtmlReporter;

impl HtmlReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for HtmlReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Reporter for HtmlReporter {
    fn report(&self, report: &Report) -> String {
        let findings_html: String = report.findings.iter().map(format_finding).collect();

        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Semgrep Report</title>
    <style>
        :root {{
            --critical: #dc2626;
            --error: #ea580c;
            --warning: #ca8a04;
            --info: #2563eb;
            --unknown: #6b7280;
        }}

        * {{
            margin: 0;
            padding: 0;
            box-sizing: border-box;
        }}

        body {{
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            line-height: 1.6;
            color: #1f2937;
            background: #f3f4f6;
            padding: 2rem;
        }}

        .container {{
            max-width: 1200px;
            margin: 0 auto;
        }}

        .header {{
            background: white;
            border-radius: 12px;
            padding: 2rem;
            margin-bottom: 2rem;
            box-shadow: 0 1px 3px rgba(0,0,0,0.1);
        }}

        .header h1 {{
            font-size: 1.75rem;
            margin-bottom: 0.5rem;
        }}

        .header-meta {{
            color: #6b7280;
            font-size: 0.9rem;
        }}

        .summary {{
            display: grid;
            grid-template-columns: repeat(auto-fit, minmax(160px, 1fr));
            gap: 1rem;
            margin-bottom: 2rem;
        }}

        .summary-card {{
            background: white;
            border-radius: 12px;
            padding: 1.5rem;
            box-shadow: 0 1px 3px rgba(0,0,0,0.1);
        }}

        .summary-card h3 {{
            font-size: 0.875rem;
            color: #6b7280;
            text-transform: uppercase;
            margin-bottom: 0.5rem;
        }}

        .summary-value {{
            font-size: 2rem;
            font-weight: 700;
        }}

        .summary-value.critical {{ color: var(--critical); }}
        .summary-value.error {{ color: var(--error); }}
        .summary-value.warning {{ color: var(--warning); }}
        .summary-value.info {{ color: var(--info); }}

        .findings {{
            background: white;
            border-radius: 12px;
            padding: 1.5rem;
            box-shadow: 0 1px 3px rgba(0,0,0,0.1);
        }}

        .findings h2 {{
            margin-bottom: 1rem;
        }}

        .finding {{
            border: 1px solid #e5e7eb;
            border-radius: 8px;
            padding: 1rem;
            margin-bottom: 1rem;
        }}

        .finding.severity-critical {{ border-left: 4px solid var(--critical); }}
        .finding.severity-error {{ border-left: 4px solid var(--error); }}
        .finding.severity-warning {{ border-left: 4px solid var(--warning); }}
        .finding.severity-info {{ border-left: 4px solid var(--info); }}
        .finding.severity-unknown {{ border-left: 4px solid var(--unknown); }}

        .finding-header {{
            display: flex;
            align-items: center;
            gap: 0.5rem;
            margin-bottom: 0.5rem;
        }}

        .finding-id {{
            font-weight: 600;
            font-family: monospace;
        }}

        .severity-badge {{
            padding: 0.25rem 0.5rem;
            border-radius: 4px;
            font-size: 0.75rem;
            font-weight: 600;
        }}

        .severity-badge.critical {{ background: #fee2e2; color: var(--critical); }}
        .severity-badge.error {{ background: #ffedd5; color: var(--error); }}
        .severity-badge.warning {{ background: #fef3c7; color: var(--warning); }}
        .severity-badge.info {{ background: #dbeafe; color: var(--info); }}
        .severity-badge.unknown {{ background: #f3f4f6; color: var(--unknown); }}

        .finding-location {{
            font-size: 0.875rem;
            color: #6b7280;
            margin-bottom: 0.5rem;
        }}

        .finding-message {{
            font-size: 0.95rem;
        }}

        .no-findings {{
            text-align: center;
            padding: 3rem;
            color: #6b7280;
        }}

        .footer {{
            text-align: center;
            margin-top: 2rem;
            color: #9ca3af;
            font-size: 0.875rem;
        }}
    </style>
</head>
<body>
    <div class="container">
        <div class="header">
            <h1>Semgrep Scan Results</h1>
            <div class="header-meta">Total Issues: {total}</div>
        </div>

        <div class="summary">
            <div class="summary-card">
                <h3>Critical</h3>
                <div class="summary-value critical">{critical}</div>
            </div>
            <div class="summary-card">
                <h3>Errors</h3>
                <div class="summary-value error">{errors}</div>
            </div>
            <div class="summary-card">
                <h3>Warnings</h3>
                <div class="summary-value warning">{warnings}</div>
            </div>
            <div class="summary-card">
                <h3>Info</h3>
                <div class="summary-value info">{infos}</div>
            </div>
            <div class="summary-card">
                <h3>Total Issues</h3>
                <div class="summary-value">{total}</div>
            </div>
        </div>

        <div class="findings">
            <h2>Findings</h2>
            {findings}
        </div>

        <div class="footer">
            Generated by semgrep-report v{version}
        </div>
    </div>
</body>
</html>"#,
            total = report.total(),
            critical = report.summary.critical,
            errors = report.summary.errors,
            warnings = report.summary.warnings,
            infos = report.summary.infos,
            findings = if report.findings.is_empty() {
                "<div class=\"no-findings\">No findings.</div>".to_string()
            } else {
                findings_html
            },
            version = env!("CARGO_PKG_VERSION"),
        )
    }
}

fn format_finding(finding: &Finding) -> String {
    let class = SeverityClass::from_label(&finding.severity);
    format!(
        r#"
            <div class="finding severity-{class}">
                <div class="finding-header">
                    <span class="finding-id">{id}</span>
                    <span class="severity-badge {class}">{severity}</span>
                </div>
                <div class="finding-location">
                    <code>{path}:{line}</code>
                </div>
                <div class="finding-message">{message}</div>
            </div>"#,
        class = class.as_str(),
        id = html_escape(&finding.rule_id),
        severity = html_escape(&finding.severity.to_uppercase()),
        path = html_escape(&finding.path),
        line = finding.line,
        message = html_escape(&finding.message),
    )
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
