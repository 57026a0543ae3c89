//! Diagnostic sinks.
//!
//! Producers report diagnostics through a sink supplied by the caller.
//! [`DiagnosticCollector`] accumulates them for inspection after the
//! producing operation finishes; [`CallbackSink`] forwards each message to
//! a closure for hosts that stream diagnostics to their own channel.

use crate::diagnostic::{Diagnostic, DiagnosticKind};

/// Receives diagnostics as they are produced.
pub trait DiagnosticSink {
    /// Handle one diagnostic message.
    fn report(&mut self, diagnostic: Diagnostic);
}

/// A sink that forwards each diagnostic to a closure.
///
/// # Example
///
/// ```
/// use sable_diagnostics::{CallbackSink, Diagnostic, DiagnosticSink};
///
/// let mut seen = Vec::new();
/// let mut sink = CallbackSink(|d: Diagnostic| seen.push(d.message));
/// sink.report(Diagnostic::warning("deprecated key"));
/// drop(sink);
/// assert_eq!(seen, ["deprecated key"]);
/// ```
pub struct CallbackSink<F>(pub F);

impl<F: FnMut(Diagnostic)> DiagnosticSink for CallbackSink<F> {
    fn report(&mut self, diagnostic: Diagnostic) {
        (self.0)(diagnostic)
    }
}

/// A sink that accumulates diagnostics in order of arrival.
#[derive(Debug, Default)]
pub struct DiagnosticCollector {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollector {
    /// Create an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// The diagnostics collected so far.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// True when no diagnostics have been collected.
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// True when any collected diagnostic is an error.
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.kind == DiagnosticKind::Error)
    }

    /// Discard everything collected, keeping the collector reusable.
    pub fn clear(&mut self) {
        self.diagnostics.clear();
    }

    /// Consume the collector and take the diagnostics.
    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

impl DiagnosticSink for DiagnosticCollector {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }
}
