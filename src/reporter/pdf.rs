//! HTML-to-PDF rendering via an external engine.
//!
//! The reporter's only responsibility is producing well-formed HTML; page
//! layout belongs to the engine. `wkhtmltopdf` is the default collaborator,
//! looked up on PATH; any binary with a compatible `<stdin> -> <output>`
//! invocation can be substituted.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tracing::debug;

use crate::error::{ReportError, Result};

const DEFAULT_ENGINE: &str = "wkhtmltopdf";

/// External HTML-to-PDF rendering collaborator.
pub struct PdfEngine {
    binary: PathBuf,
}

impl PdfEngine {
    /// Use an explicit engine binary.
    pub fn with_binary(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    /// Locate the default engine on PATH.
    pub fn locate() -> Result<Self> {
        let binary = which::which(DEFAULT_ENGINE)
            .map_err(|e| ReportError::PdfEngineNotFound(format!("{DEFAULT_ENGINE}: {e}")))?;
        Ok(Self { binary })
    }

    pub fn binary(&self) -> &Path {
        &self.binary
    }

    /// Render HTML into a PDF file at `output`.
    ///
    /// The HTML document is piped to the engine's stdin (`-`); the engine
    /// writes the output file itself.
    pub fn render(&self, html: &str, output: &Path) -> Result<()> {
        debug!(engine = %self.binary.display(), output = %output.display(), "rendering PDF");

        let mut child = Command::new(&self.binary)
            .arg("-")
            .arg(output)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| self.engine_error(e.to_string()))?;

        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| self.engine_error("failed to open engine stdin".to_string()))?;
        stdin
            .write_all(html.as_bytes())
            .map_err(|e| self.engine_error(e.to_string()))?;
        drop(stdin);

        let result = child
            .wait_with_output()
            .map_err(|e| self.engine_error(e.to_string()))?;

        if !result.status.success() {
            let stderr = String::from_utf8_lossy(&result.stderr);
            let message = if stderr.trim().is_empty() {
                result.status.to_string()
            } else {
                format!("{} ({})", result.status, stderr.trim())
            };
            return Err(self.engine_error(message));
        }

        Ok(())
    }

    fn engine_error(&self, message: String) -> ReportError {
        ReportError::PdfRender {
            engine: self.binary.display().to_string(),
            message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_binary_keeps_path() {
        let engine = PdfEngine::with_binary("/opt/engines/wkhtmltopdf");
        assert_eq!(engine.binary(), Path::new("/opt/engines/wkhtmltopdf"));
    }

    #[test]
    fn test_render_with_missing_engine_fails() {
        let engine = PdfEngine::with_binary("/definitely/not/an/engine");
        let err = engine
            .render("<html></html>", Path::new("/tmp/out.pdf"))
            .unwrap_err();
        assert!(matches!(err, ReportError::PdfRender { .. }));
        assert!(err.to_string().contains("/definitely/not/an/engine"));
    }

    #[cfg(unix)]
    #[test]
    fn test_render_pipes_html_to_stub_engine() {
        use std::fs;
        use std::os::unix::fs::PermissionsExt;
        use tempfile::TempDir;

        let dir = TempDir::new().unwrap();
        let stub = dir.path().join("stub-engine");
        // Copies stdin to the output path given as the second argument.
        fs::write(&stub, "#!/bin/sh\ncat > \"$2\"\n").unwrap();
        fs::set_permissions(&stub, fs::Permissions::from_mode(0o755)).unwrap();

        let output = dir.path().join("report.pdf");
        let engine = PdfEngine::with_binary(&stub);
        engine.render("<html>stub content</html>", &output).unwrap();

        let written = fs::read_to_string(&output).unwrap();
        assert_eq!(written, "<html>stub content</html>");
    }

    #[cfg(unix)]
    #[test]
    fn test_render_surfaces_engine_failure() {
        use std::fs;
        use std::os::unix::fs::PermissionsExt;
        use tempfile::TempDir;

        let dir = TempDir::new().unwrap();
        let stub = dir.path().join("failing-engine");
        fs::write(&stub, "#!/bin/sh\necho 'render blew up' >&2\nexit 1\n").unwrap();
        fs::set_permissions(&stub, fs::Permissions::from_mode(0o755)).unwrap();

        let engine = PdfEngine::with_binary(&stub);
        let err = engine
            .render("<html></html>", &dir.path().join("report.pdf"))
            .unwrap_err();
        assert!(err.to_string().contains("render blew up"));
    }
}
