//! Runtime parameters and the accumulated output configuration.

use std::sync::Arc;

use crate::flags::FlagsEdit;

/// Per-file evaluation context, supplied fresh for every compilation unit.
///
/// Read-only during condition evaluation.
#[derive(Debug, Clone, Default)]
pub struct Params {
    /// Path of the file being configured.
    ///
    /// Conditions that need a path never apply when this is `None` or empty.
    /// The path is matched as given; callers wanting normalized matching
    /// normalize before building the params.
    pub path: Option<String>,
}

impl Params {
    /// Parameters for one file path.
    pub fn for_path(path: impl Into<String>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }
}

/// Effective configuration for one file.
///
/// Owned by the caller for the duration of one file's evaluation pass;
/// every fragment whose condition matched contributes to it in turn. Not
/// read until all applicable fragments have been applied.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Adjustments to the file's compile command.
    pub compile_flags: CompileFlagsConfig,
}

/// Compile-command section of the effective configuration.
#[derive(Debug, Clone, Default)]
pub struct CompileFlagsConfig {
    /// Argument edits, in fragment application order.
    pub edits: EditList,
}

/// An append-only ordered sequence of argument edits.
///
/// Fragments only ever contribute; nothing may clear or reorder entries an
/// earlier fragment added, so `push` is the only mutation offered. Edits
/// are shared (`Arc`) because one compiled fragment feeds the configs of
/// many files.
#[derive(Debug, Clone, Default)]
pub struct EditList {
    edits: Vec<Arc<FlagsEdit>>,
}

impl EditList {
    /// Append one edit.
    pub fn push(&mut self, edit: Arc<FlagsEdit>) {
        self.edits.push(edit);
    }

    /// The edits in application order.
    pub fn iter(&self) -> impl Iterator<Item = &FlagsEdit> {
        self.edits.iter().map(Arc::as_ref)
    }

    /// Number of edits contributed so far.
    pub fn len(&self) -> usize {
        self.edits.len()
    }

    /// True when no fragment has contributed an edit.
    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }

    /// Apply every edit, in order, to one compile command's arguments.
    ///
    /// Each edit sees the output of the previous one.
    pub fn apply_all(&self, argv: &mut Vec<String>) {
        for edit in self.iter() {
            edit.apply(argv);
        }
    }
}
