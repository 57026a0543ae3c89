//! Core diagnostic message types.
//!
//! A diagnostic pairs a severity with message text and, when the producer
//! knows it, the source range the message is about. Diagnostics are plain
//! data: producing one never interrupts the operation that found the
//! problem, and the host chooses the presentation (text, JSON, editor
//! publish).

use serde::{Deserialize, Serialize};

use crate::span::Range;

/// The kind of diagnostic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiagnosticKind {
    /// An error that prevents completion
    Error,
    /// A warning that doesn't prevent completion but indicates a problem
    Warning,
    /// Informational message
    Info,
    /// A note providing additional context
    Note,
}

impl DiagnosticKind {
    fn as_str(self) -> &'static str {
        match self {
            DiagnosticKind::Error => "Error",
            DiagnosticKind::Warning => "Warning",
            DiagnosticKind::Info => "Info",
            DiagnosticKind::Note => "Note",
        }
    }
}

/// A structured diagnostic message.
///
/// # Example
///
/// ```
/// use sable_diagnostics::{Diagnostic, DiagnosticKind};
///
/// let diag = Diagnostic::error("Invalid regex pattern '**': repetition operator missing expression");
/// assert_eq!(diag.kind, DiagnosticKind::Error);
/// assert!(diag.to_text().starts_with("Error: "));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// The kind of diagnostic (Error, Warning, Info, Note)
    pub kind: DiagnosticKind,

    /// Human-readable message text
    pub message: String,

    /// Source range this diagnostic is about
    ///
    /// When present, this identifies where in the configuration source the
    /// issue occurred, so the host can highlight the offending text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<Range>,
}

impl Diagnostic {
    /// Create a new diagnostic with just a kind and message.
    pub fn new(kind: DiagnosticKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            range: None,
        }
    }

    /// Create an error diagnostic.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(DiagnosticKind::Error, message)
    }

    /// Create a warning diagnostic.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(DiagnosticKind::Warning, message)
    }

    /// Create an info diagnostic.
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(DiagnosticKind::Info, message)
    }

    /// Create a note diagnostic.
    pub fn note(message: impl Into<String>) -> Self {
        Self::new(DiagnosticKind::Note, message)
    }

    /// Attach the source range this diagnostic is about.
    pub fn with_range(mut self, range: Range) -> Self {
        self.range = Some(range);
        self
    }

    /// Render as a single line of text.
    ///
    /// Format: `Error: message` with ` (at row:column)` appended when the
    /// diagnostic carries a range.
    pub fn to_text(&self) -> String {
        match &self.range {
            Some(range) => format!(
                "{}: {} (at {}:{})",
                self.kind.as_str(),
                self.message,
                range.start.row,
                range.start.column
            ),
            None => format!("{}: {}", self.kind.as_str(), self.message),
        }
    }

    /// Render as a JSON value.
    ///
    /// # Example
    ///
    /// ```
    /// use sable_diagnostics::Diagnostic;
    ///
    /// let json = Diagnostic::warning("deprecated key").to_json();
    /// assert_eq!(json["kind"], "Warning");
    /// assert_eq!(json["message"], "deprecated key");
    /// ```
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).expect("diagnostic serialization cannot fail")
    }
}
