//! Report generation: load, normalize, render, write.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use tracing::{debug, info};

use crate::cli::{Cli, OutputFormat};
use crate::error::{ReportError, Result};
use crate::findings::{normalize, Report};
use crate::input;
use crate::reporter::{html::HtmlReporter, json::JsonReporter, pdf::PdfEngine, Reporter};

/// Run the full pipeline for every requested format.
///
/// The run stops at the first fatal error; nothing further is written after
/// it. Exit code 0 on success, 2 on any fatal error.
pub fn run_report(cli: &Cli) -> ExitCode {
    match generate(cli) {
        Ok(written) => {
            for path in &written {
                println!("Report written to {}", path.display());
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::from(2)
        }
    }
}

/// Generate every requested output, returning the written paths in order.
pub fn generate(cli: &Cli) -> Result<Vec<PathBuf>> {
    let raw = input::load(&cli.input)?;
    let report = Report::new(normalize(&raw));
    info!(
        input = %cli.input.display(),
        total = report.total(),
        "normalized findings"
    );

    let mut written = Vec::new();
    for &format in &cli.format {
        let output = cli.output_path(format);
        match format {
            OutputFormat::Html => write_text(&output, &HtmlReporter::new().report(&report))?,
            OutputFormat::Json => write_text(&output, &JsonReporter::new().report(&report))?,
            OutputFormat::Pdf => {
                let engine = match cli.pdf_engine {
                    Some(ref binary) => PdfEngine::with_binary(binary),
                    None => PdfEngine::locate()?,
                };
                let html = HtmlReporter::new().report(&report);
                engine.render(&html, &output)?;
            }
        }
        debug!(format = %format, path = %output.display(), "output written");
        written.push(output);
    }
    Ok(written)
}

fn write_text(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|e| ReportError::write_error(path, e))
}
