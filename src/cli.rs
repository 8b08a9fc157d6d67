use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::ReportError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Html,
    Json,
    Pdf,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Html => "html",
            OutputFormat::Json => "json",
            OutputFormat::Pdf => "pdf",
        }
    }

    /// Default output file name for this format.
    pub fn default_output(&self) -> &'static str {
        match self {
            OutputFormat::Html => "semgrep-report.html",
            OutputFormat::Json => "semgrep-report.json",
            OutputFormat::Pdf => "semgrep-report.pdf",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = ReportError;

    /// Case-insensitive format selector for the library surface. The CLI
    /// rejects unknown values at argument parsing; programmatic callers get
    /// an `UnsupportedFormat` error instead.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "html" => Ok(OutputFormat::Html),
            "json" => Ok(OutputFormat::Json),
            "pdf" => Ok(OutputFormat::Pdf),
            _ => Err(ReportError::UnsupportedFormat(s.to_string())),
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "semgrep-report",
    version,
    about = "Render Semgrep JSON scan results as HTML, JSON, and PDF reports"
)]
pub struct Cli {
    /// Scanner output to read (Semgrep JSON)
    #[arg(default_value = "semgrep-results.json")]
    pub input: PathBuf,

    /// Output format (repeatable)
    #[arg(short, long, value_enum, default_values_t = vec![OutputFormat::Html])]
    pub format: Vec<OutputFormat>,

    /// Output path; honored when exactly one format is requested,
    /// per-format defaults otherwise
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// HTML-to-PDF engine binary (default: wkhtmltopdf on PATH)
    #[arg(long)]
    pub pdf_engine: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Resolved output path for one requested format.
    pub fn output_path(&self, format: OutputFormat) -> PathBuf {
        if self.format.len() == 1 {
            if let Some(ref output) = self.output {
                return output.clone();
            }
        }
        PathBuf::from(format.default_output())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_default_values() {
        let cli = Cli::try_parse_from(["semgrep-report"]).unwrap();
        assert_eq!(cli.input, PathBuf::from("semgrep-results.json"));
        assert_eq!(cli.format, vec![OutputFormat::Html]);
        assert!(cli.output.is_none());
        assert!(cli.pdf_engine.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_parse_input_path() {
        let cli = Cli::try_parse_from(["semgrep-report", "scan.json"]).unwrap();
        assert_eq!(cli.input, PathBuf::from("scan.json"));
    }

    #[test]
    fn test_parse_format_json() {
        let cli = Cli::try_parse_from(["semgrep-report", "--format", "json"]).unwrap();
        assert_eq!(cli.format, vec![OutputFormat::Json]);
    }

    #[test]
    fn test_parse_repeated_formats() {
        let cli =
            Cli::try_parse_from(["semgrep-report", "-f", "html", "-f", "json", "-f", "pdf"])
                .unwrap();
        assert_eq!(
            cli.format,
            vec![OutputFormat::Html, OutputFormat::Json, OutputFormat::Pdf]
        );
    }

    #[test]
    fn test_parse_unknown_format_rejected() {
        assert!(Cli::try_parse_from(["semgrep-report", "--format", "xml"]).is_err());
    }

    #[test]
    fn test_output_path_override_with_single_format() {
        let cli =
            Cli::try_parse_from(["semgrep-report", "-f", "json", "-o", "out/findings.json"])
                .unwrap();
        assert_eq!(
            cli.output_path(OutputFormat::Json),
            PathBuf::from("out/findings.json")
        );
    }

    #[test]
    fn test_output_path_defaults_per_format() {
        let cli = Cli::try_parse_from(["semgrep-report", "-f", "html", "-f", "json"]).unwrap();
        assert_eq!(
            cli.output_path(OutputFormat::Html),
            PathBuf::from("semgrep-report.html")
        );
        assert_eq!(
            cli.output_path(OutputFormat::Json),
            PathBuf::from("semgrep-report.json")
        );
    }

    #[test]
    fn test_output_override_ignored_with_multiple_formats() {
        let cli = Cli::try_parse_from([
            "semgrep-report",
            "-f",
            "html",
            "-f",
            "json",
            "-o",
            "custom.html",
        ])
        .unwrap();
        assert_eq!(
            cli.output_path(OutputFormat::Html),
            PathBuf::from("semgrep-report.html")
        );
    }

    #[test]
    fn test_format_from_str_case_insensitive() {
        assert_eq!("HTML".parse::<OutputFormat>().unwrap(), OutputFormat::Html);
        assert_eq!("Json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("pdf".parse::<OutputFormat>().unwrap(), OutputFormat::Pdf);
    }

    #[test]
    fn test_format_from_str_unsupported() {
        let err = "sarif".parse::<OutputFormat>().unwrap_err();
        assert!(matches!(err, ReportError::UnsupportedFormat(_)));
        assert_eq!(err.to_string(), "Unsupported output format: sarif");
    }

    #[test]
    fn test_default_output_names() {
        assert_eq!(OutputFormat::Html.default_output(), "semgrep-report.html");
        assert_eq!(OutputFormat::Json.default_output(), "semgrep-report.json");
        assert_eq!(OutputFormat::Pdf.default_output(), "semgrep-report.pdf");
    }
}
