pub mod cli;
pub mod error;
pub mod findings;
pub mod handlers;
pub mod input;
pub mod reporter;

#[cfg(test)]
pub mod test_utils;

pub use cli::{Cli, OutputFormat};
pub use error::{IoOperation, ReportError, Result};
pub use findings::{normalize, Finding, RawFinding, Report, SchemaVariant, SeverityClass, Summary};
pub use input::{load, parse_document};
pub use reporter::{html::HtmlReporter, json::JsonReporter, pdf::PdfEngine, Reporter};
