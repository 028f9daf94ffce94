//! Diagnostic infrastructure for error reporting
//!
//! Wraps lowering errors into rendered diagnostics with source context, for
//! terminal output (via `codespan-reporting`) and a JSON form for IDE
//! integration.

use codespan_reporting::diagnostic::{Diagnostic as CsDiagnostic, Label, Severity};
use codespan_reporting::files::SimpleFiles;
use codespan_reporting::term;
use serde::{Deserialize, Serialize};
use termcolor::{ColorChoice, StandardStream};

use crate::ir::Span;
use crate::lower::LowerError;

/// Error code for a diagnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorCode(pub &'static str);

impl ErrorCode {
    /// The code as a string (e.g. "E4001").
    pub fn as_str(&self) -> &str {
        self.0
    }
}

/// A diagnostic message with source code context.
pub struct Diagnostic {
    inner: CsDiagnostic<usize>,
    code: Option<ErrorCode>,
}

impl Diagnostic {
    /// Create a new diagnostic with the given severity.
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Diagnostic {
            inner: CsDiagnostic::new(severity).with_message(message),
            code: None,
        }
    }

    /// Create an error diagnostic.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    /// Set the error code.
    pub fn with_code(mut self, code: ErrorCode) -> Self {
        self.code = Some(code.clone());
        self.inner = self.inner.with_code(code.0);
        self
    }

    /// Add a primary label (main error location).
    pub fn with_primary_label(
        mut self,
        file_id: usize,
        span: Span,
        message: impl Into<String>,
    ) -> Self {
        let label = Label::primary(file_id, span.start..span.end).with_message(message);
        self.inner = self.inner.with_labels(vec![label]);
        self
    }

    /// Add a note (additional context).
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.inner.notes.push(note.into());
        self
    }

    /// Add a help suggestion.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.inner.notes.push(format!("help: {}", help.into()));
        self
    }

    /// Create a diagnostic from a lowering error.
    pub fn from_lower_error(error: &LowerError, file_id: usize) -> Self {
        match error {
            LowerError::UnsupportedIntrinsic { name, span } => {
                Diagnostic::error(format!(
                    "'{}' is not supported with release coroutines",
                    name
                ))
                .with_code(ErrorCode("E4001"))
                .with_primary_label(file_id, *span, "unsupported coroutine intrinsic")
                .with_help("use suspendCoroutine from lyra.coroutines instead")
            }
        }
    }

    /// Emit the diagnostic to stderr with colors.
    pub fn emit(
        &self,
        files: &SimpleFiles<String, String>,
    ) -> Result<(), codespan_reporting::files::Error> {
        let mut writer = StandardStream::stderr(ColorChoice::Auto);
        let config = term::Config::default();
        term::emit(&mut writer, &config, files, &self.inner)
    }

    /// The error code, if set.
    pub fn code(&self) -> Option<&ErrorCode> {
        self.code.as_ref()
    }

    /// The underlying codespan diagnostic (for testing/custom rendering).
    pub fn inner(&self) -> &CsDiagnostic<usize> {
        &self.inner
    }

    /// Convert to a JSON representation for IDE integration.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&JsonDiagnostic::from_diagnostic(self))
    }
}

/// JSON representation of a diagnostic.
#[derive(Debug, Serialize, Deserialize)]
pub struct JsonDiagnostic {
    /// Error code (e.g. "E4001")
    pub code: Option<String>,
    /// Severity level
    pub severity: String,
    /// Main error message
    pub message: String,
    /// Source locations with labels
    pub labels: Vec<JsonLabel>,
    /// Additional notes and help
    pub notes: Vec<String>,
}

/// JSON representation of a diagnostic label.
#[derive(Debug, Serialize, Deserialize)]
pub struct JsonLabel {
    /// Start byte offset
    pub start: usize,
    /// End byte offset
    pub end: usize,
    /// Label message
    pub message: Option<String>,
}

impl JsonDiagnostic {
    /// Convert a diagnostic to its JSON representation.
    pub fn from_diagnostic(diag: &Diagnostic) -> Self {
        let severity = match diag.inner.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Note => "note",
            Severity::Help => "help",
            Severity::Bug => "bug",
        };

        let labels = diag
            .inner
            .labels
            .iter()
            .map(|label| JsonLabel {
                start: label.range.start,
                end: label.range.end,
                message: if label.message.is_empty() {
                    None
                } else {
                    Some(label.message.clone())
                },
            })
            .collect();

        JsonDiagnostic {
            code: diag.code.as_ref().map(|c| c.0.to_string()),
            severity: severity.to_string(),
            message: diag.inner.message.clone(),
            labels,
            notes: diag.inner.notes.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_error() -> LowerError {
        LowerError::UnsupportedIntrinsic {
            name: "intercepted".to_string(),
            span: Span::new(12, 23, 2, 5),
        }
    }

    #[test]
    fn test_from_lower_error() {
        let diag = Diagnostic::from_lower_error(&sample_error(), 0);
        assert_eq!(diag.code(), Some(&ErrorCode("E4001")));
        assert!(diag.inner().message.contains("intercepted"));
        assert_eq!(diag.inner().labels[0].range, 12..23);
    }

    #[test]
    fn test_json_form() {
        let diag = Diagnostic::from_lower_error(&sample_error(), 0);
        let json = diag.to_json().unwrap();
        let parsed: JsonDiagnostic = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.code.as_deref(), Some("E4001"));
        assert_eq!(parsed.severity, "error");
        assert_eq!(parsed.labels[0].start, 12);
        assert!(parsed.notes.iter().any(|n| n.starts_with("help:")));
    }
}
