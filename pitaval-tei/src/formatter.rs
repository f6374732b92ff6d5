//! Pretty-printing serialized documents
//!
//! The batch driver receives an [`XmlFormatter`] rather than shelling out itself, so the core
//! runs (and is tested) without any external tool installed.

use crate::error::TeiError;
use std::io::Write;
use std::process::Command;

/// Trait for XML pretty-printers
///
/// ```ignore
/// struct Upper;
///
/// impl XmlFormatter for Upper {
///     fn name(&self) -> &str {
///         "upper"
///     }
///
///     fn format(&self, xml: &str) -> Result<String, TeiError> {
///         Ok(xml.to_uppercase())
///     }
/// }
/// ```
pub trait XmlFormatter: Send + Sync {
    /// Registry name (e.g. "xmllint")
    fn name(&self) -> &str;

    fn description(&self) -> &str {
        ""
    }

    /// Whether the formatter can run on this machine
    fn is_available(&self) -> bool {
        true
    }

    /// Reformat a complete XML document
    fn format(&self, xml: &str) -> Result<String, TeiError>;
}

/// Leaves the document as serialized
#[derive(Debug, Clone, Copy, Default)]
pub struct PassthroughFormatter;

impl XmlFormatter for PassthroughFormatter {
    fn name(&self) -> &str {
        "passthrough"
    }

    fn description(&self) -> &str {
        "Write the serialized document unchanged"
    }

    fn format(&self, xml: &str) -> Result<String, TeiError> {
        let mut out = xml.to_string();
        if !out.ends_with('\n') {
            out.push('\n');
        }
        Ok(out)
    }
}

/// Runs an external `xmllint`-compatible program on a temporary copy of the document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmllintFormatter {
    program: String,
    args: Vec<String>,
    error_marker: String,
}

impl XmllintFormatter {
    pub const DEFAULT_PROGRAM: &'static str = "xmllint";
    pub const DEFAULT_ERROR_MARKER: &'static str = "parser error";

    pub fn new(
        program: impl Into<String>,
        args: Vec<String>,
        error_marker: impl Into<String>,
    ) -> Self {
        XmllintFormatter {
            program: program.into(),
            args,
            error_marker: error_marker.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn error_marker(&self) -> &str {
        &self.error_marker
    }
}

impl Default for XmllintFormatter {
    fn default() -> Self {
        XmllintFormatter::new(
            Self::DEFAULT_PROGRAM,
            vec![
                "--format".to_string(),
                "--encode".to_string(),
                "UTF-8".to_string(),
            ],
            Self::DEFAULT_ERROR_MARKER,
        )
    }
}

impl XmlFormatter for XmllintFormatter {
    fn name(&self) -> &str {
        "xmllint"
    }

    fn description(&self) -> &str {
        "Pretty-print with libxml2's xmllint"
    }

    fn is_available(&self) -> bool {
        which::which(&self.program).is_ok()
    }

    fn format(&self, xml: &str) -> Result<String, TeiError> {
        let program = which::which(&self.program).map_err(|e| {
            TeiError::Formatter(format!("'{}' not found on PATH: {}", self.program, e))
        })?;

        // Removed when `input` drops, on every return path.
        let mut input = tempfile::Builder::new()
            .prefix("pitaval-")
            .suffix(".xml")
            .tempfile()
            .map_err(|e| TeiError::Formatter(format!("cannot create temporary file: {}", e)))?;
        input
            .write_all(xml.as_bytes())
            .and_then(|_| input.flush())
            .map_err(|e| TeiError::Formatter(format!("cannot write temporary file: {}", e)))?;

        tracing::debug!(program = %program.display(), args = ?self.args, "running formatter");
        let out = Command::new(&program)
            .args(&self.args)
            .arg(input.path())
            .output()
            .map_err(|e| TeiError::Formatter(format!("failed to run '{}': {}", self.program, e)))?;

        let stderr = String::from_utf8_lossy(&out.stderr);
        if !out.status.success() {
            return Err(TeiError::Formatter(format!(
                "'{}' exited with {}: {}",
                self.program,
                out.status,
                stderr.trim()
            )));
        }
        if !self.error_marker.is_empty() && stderr.contains(&self.error_marker) {
            return Err(TeiError::Formatter(format!(
                "'{}' reported an error: {}",
                self.program,
                stderr.trim()
            )));
        }
        if !stderr.trim().is_empty() {
            tracing::warn!(program = %self.program, "{}", stderr.trim());
        }

        String::from_utf8(out.stdout).map_err(|e| {
            TeiError::Formatter(format!("'{}' produced invalid UTF-8: {}", self.program, e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<TEI xmlns="http://www.tei-c.org/ns/1.0"><text><body><div><p>Prosa.</p></div></body></text></TEI>"#;

    #[test]
    fn passthrough_adds_a_trailing_newline_once() {
        let once = PassthroughFormatter.format(DOC).unwrap();
        assert!(once.ends_with("</TEI>\n"));
        assert_eq!(PassthroughFormatter.format(&once).unwrap(), once);
    }

    #[test]
    fn default_xmllint_invocation() {
        let fmt = XmllintFormatter::default();
        assert_eq!(fmt.program(), "xmllint");
        assert_eq!(fmt.args(), ["--format", "--encode", "UTF-8"]);
        assert_eq!(fmt.error_marker(), "parser error");
    }

    #[test]
    fn missing_program_is_a_formatter_error() {
        let fmt = XmllintFormatter::new("pitaval-no-such-formatter", vec![], "error");
        assert!(!fmt.is_available());
        assert!(matches!(fmt.format(DOC), Err(TeiError::Formatter(_))));
    }

    #[cfg(unix)]
    #[test]
    fn non_zero_exit_is_a_formatter_error() {
        let fmt = XmllintFormatter::new("false", vec![], "parser error");
        if !fmt.is_available() {
            return;
        }
        let err = fmt.format(DOC).unwrap_err();
        assert!(err.to_string().contains("exited with"));
    }

    #[cfg(unix)]
    #[test]
    fn command_output_is_returned() {
        let fmt = XmllintFormatter::new("cat", vec![], "parser error");
        if !fmt.is_available() {
            return;
        }
        assert_eq!(fmt.format(DOC).unwrap(), DOC);
    }

    #[test]
    fn xmllint_indents_when_installed() {
        let fmt = XmllintFormatter::default();
        if !fmt.is_available() {
            return;
        }
        let out = fmt.format(DOC).unwrap();
        assert!(out.starts_with("<?xml"));
        assert!(out.contains("\n  <text>"));
    }

    #[test]
    fn xmllint_rejects_malformed_input_when_installed() {
        let fmt = XmllintFormatter::default();
        if !fmt.is_available() {
            return;
        }
        assert!(fmt.format("<TEI><unclosed></TEI>").is_err());
    }
}
