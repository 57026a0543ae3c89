//! The uncompiled configuration fragment tree.
//!
//! A [`Fragment`] is what the configuration parser hands over: a condition
//! block naming which files the fragment is for, and directive blocks naming
//! what to change for those files. Fragment syntax is the parser's concern;
//! this crate only consumes the parsed tree.
//!
//! String fields are [`Spanned`] so compile-time diagnostics can point back
//! at the configuration text they were read from.

use sable_diagnostics::Spanned;

/// One uncompiled unit of configuration: a condition plus directives.
///
/// Produced per configuration source by the external parser. Consumed
/// exactly once by [`Fragment::compile`](crate::Fragment::compile) — string
/// data moves into the compiled form, so the fragment cannot be reused.
#[derive(Debug, Clone, Default)]
pub struct Fragment {
    /// When the directives apply.
    pub condition: ConditionBlock,

    /// Adjustments to the compile command of matching files.
    pub compile_flags: CompileFlagsBlock,
}

/// Predicate over per-file parameters deciding whether a fragment applies.
///
/// An empty condition always applies.
#[derive(Debug, Clone, Default)]
pub struct ConditionBlock {
    /// Full-string regexes over the file path; the fragment applies only to
    /// paths matching at least one of them.
    pub path_match: Vec<Spanned<String>>,

    /// Full-string regexes over the file path; a path matching any of them
    /// never applies. Exclusion overrides inclusion.
    pub path_exclude: Vec<Spanned<String>>,

    /// The parser saw condition keys this engine does not recognize.
    ///
    /// Newer configuration schemas may carry conditions an older engine
    /// cannot check. Such fragments never apply, and no diagnostic is
    /// produced for them.
    pub has_unrecognized_condition: bool,
}

/// Compile-command adjustments declared by a fragment.
#[derive(Debug, Clone, Default)]
pub struct CompileFlagsBlock {
    /// Flags appended to the compile command, in declared order.
    pub add: Vec<Spanned<String>>,

    /// Flags stripped from the compile command, named by flag.
    pub remove: Vec<Spanned<String>>,
}
