//! Fragment compilation.
//!
//! [`Fragment::compile`] validates a fragment once and produces a
//! [`CompiledFragment`] that can be evaluated indefinitely, against many
//! files, without revisiting the fragment's text. Problems found during
//! validation go to the injected sink; offending clauses are dropped and
//! compilation always yields a usable result.

use std::sync::Arc;

use sable_diagnostics::DiagnosticSink;
use tracing::debug;

use crate::condition::CompiledCondition;
use crate::config::{Config, Params};
use crate::flags::FlagsEdit;
use crate::fragment::Fragment;

impl Fragment {
    /// Validate this fragment and build its reusable compiled form.
    ///
    /// Consumes the fragment: pattern and flag strings move into the
    /// result. The only diagnosable problem today is a malformed regex;
    /// unrecognized condition keys and missing runtime data are expected
    /// control flow and stay silent.
    pub fn compile(self, sink: &mut dyn DiagnosticSink) -> CompiledFragment {
        let condition = CompiledCondition::compile(self.condition, sink);

        let add: Vec<String> = self
            .compile_flags
            .add
            .into_iter()
            .map(|flag| flag.value)
            .collect();
        let remove: Vec<String> = self
            .compile_flags
            .remove
            .into_iter()
            .map(|flag| flag.value)
            .collect();

        let mut edits = Vec::new();
        if !add.is_empty() || !remove.is_empty() {
            edits.push(Arc::new(FlagsEdit::new(add, remove)));
        }

        debug!(edits = edits.len(), "compiled configuration fragment");
        CompiledFragment { condition, edits }
    }
}

/// A fragment validated and ready for repeated evaluation.
///
/// Immutable once built, so it can be shared across threads configuring
/// different files, provided each evaluation owns its [`Config`]. There is
/// no way back to the uncompiled state; re-compilation needs a fresh
/// [`Fragment`].
#[derive(Debug)]
pub struct CompiledFragment {
    condition: CompiledCondition,
    edits: Vec<Arc<FlagsEdit>>,
}

impl CompiledFragment {
    /// Evaluate the condition for one file and, on a match, contribute this
    /// fragment's edits to `config`.
    ///
    /// Returns whether the fragment applied. `config` is untouched when it
    /// did not; when it did, edits are appended in the order the fragment
    /// declared its directives.
    pub fn apply(&self, params: &Params, config: &mut Config) -> bool {
        if !self.condition.evaluate(params) {
            return false;
        }
        for edit in &self.edits {
            config.compile_flags.edits.push(Arc::clone(edit));
        }
        true
    }
}
