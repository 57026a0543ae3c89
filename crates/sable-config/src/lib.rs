//! Configuration-fragment compilation for Sable.
//!
//! The Sable server reads user configuration as a sequence of *fragments*:
//! declarative units pairing a condition ("which files is this for") with
//! directives ("what to change for them"). This crate compiles a parsed
//! [`Fragment`] into a [`CompiledFragment`] — validated once, reusable
//! across every file the server configures — and provides the
//! argument-edit machinery the directives boil down to.
//!
//! # Pipeline
//!
//! 1. The external parser produces a [`Fragment`] per configuration source.
//! 2. [`Fragment::compile`] validates it, reporting malformed patterns to a
//!    [`DiagnosticSink`](sable_diagnostics::DiagnosticSink), and returns a
//!    [`CompiledFragment`].
//! 3. Per file, the server calls [`CompiledFragment::apply`] with that
//!    file's [`Params`]; applicable fragments append their edits to the
//!    file's [`Config`].
//! 4. The accumulated edits rewrite the file's compile command before the
//!    compiler front end runs.
//!
//! # Example
//!
//! ```rust
//! use sable_config::{Config, Fragment, Params};
//! use sable_diagnostics::DiagnosticCollector;
//!
//! let mut fragment = Fragment::default();
//! fragment.condition.path_match.push(".*\\.cc".into());
//! fragment.compile_flags.add.push("-Wall".into());
//!
//! let mut diagnostics = DiagnosticCollector::new();
//! let compiled = fragment.compile(&mut diagnostics);
//! assert!(diagnostics.is_empty());
//!
//! let mut config = Config::default();
//! assert!(compiled.apply(&Params::for_path("src/main.cc"), &mut config));
//!
//! let mut argv = vec!["clang".to_string(), "src/main.cc".to_string()];
//! config.compile_flags.edits.apply_all(&mut argv);
//! assert_eq!(argv, ["clang", "src/main.cc", "-Wall"]);
//! ```

pub mod compile;
pub mod condition;
pub mod config;
pub mod flags;
pub mod fragment;

pub use compile::CompiledFragment;
pub use condition::{CompiledCondition, PatternError, try_compile};
pub use config::{CompileFlagsConfig, Config, EditList, Params};
pub use flags::FlagsEdit;
pub use fragment::{CompileFlagsBlock, ConditionBlock, Fragment};

// Re-export for convenience
pub use sable_diagnostics::{Diagnostic, DiagnosticCollector, DiagnosticKind, DiagnosticSink};
