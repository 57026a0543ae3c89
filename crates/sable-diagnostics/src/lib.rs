//! Diagnostic messages and sinks for Sable.
//!
//! Subsystems that process user input — the configuration compiler first
//! among them — report problems as structured [`Diagnostic`] values rather
//! than failing outright. The producer pushes messages into an injected
//! [`DiagnosticSink`]; the host decides how to surface them (editor
//! squiggles over the configuration file, log lines, JSON).
//!
//! # Overview
//!
//! The core types are:
//! - [`Diagnostic`]: a severity, a message, and an optional source range
//! - [`DiagnosticSink`]: the channel diagnostics are reported through
//! - [`DiagnosticCollector`]: a sink that accumulates for later inspection
//! - [`Spanned`]: a parsed value carrying the range it came from
//!
//! # Example
//!
//! ```rust
//! use sable_diagnostics::{Diagnostic, DiagnosticCollector, DiagnosticSink};
//!
//! let mut collector = DiagnosticCollector::new();
//! collector.report(Diagnostic::warning("unused configuration block"));
//!
//! assert!(!collector.has_errors());
//! assert_eq!(collector.diagnostics().len(), 1);
//! ```

pub mod diagnostic;
pub mod sink;
pub mod span;

pub use diagnostic::{Diagnostic, DiagnosticKind};
pub use sink::{CallbackSink, DiagnosticCollector, DiagnosticSink};
pub use span::{Location, Range, Spanned};
