// Condition compilation and evaluation

use regex::Regex;
use sable_diagnostics::{Diagnostic, DiagnosticSink, Spanned};
use thiserror::Error;
use tracing::debug;

use crate::config::Params;
use crate::fragment::ConditionBlock;

/// A path pattern that failed to compile as a regular expression.
///
/// The rendered message starts with the phrase `Invalid regex`; downstream
/// diagnostic consumers key off that prefix.
#[derive(Debug, Error)]
#[error("Invalid regex pattern '{pattern}': {source}")]
pub struct PatternError {
    /// The pattern as written in the configuration
    pub pattern: String,
    #[source]
    source: regex::Error,
}

/// Compile one path pattern into a full-string matcher.
///
/// Patterns match the whole path, not a substring: `fo*` matches `foo` but
/// not `src/foo`. The path is matched as given; no normalization is applied.
pub fn try_compile(pattern: &str) -> Result<Regex, PatternError> {
    Regex::new(&format!("^(?:{pattern})$")).map_err(|source| PatternError {
        pattern: pattern.to_string(),
        source,
    })
}

/// A fragment condition with its patterns validated and compiled.
///
/// Validation is a one-time cost paid at compile time; evaluation never
/// revisits pattern text and never produces diagnostics.
#[derive(Debug)]
pub struct CompiledCondition {
    path_match: Vec<Regex>,
    path_exclude: Vec<Regex>,
    has_unrecognized: bool,
}

impl CompiledCondition {
    /// Validate and compile a condition block.
    ///
    /// Each pattern that fails to compile is reported to `sink` and dropped
    /// individually; valid patterns in the same list still participate, so a
    /// typo in one clause does not disable the whole fragment.
    pub fn compile(block: ConditionBlock, sink: &mut dyn DiagnosticSink) -> Self {
        Self {
            path_match: compile_patterns(block.path_match, sink),
            path_exclude: compile_patterns(block.path_exclude, sink),
            has_unrecognized: block.has_unrecognized_condition,
        }
    }

    /// Decide whether the fragment's directives apply to `params`.
    ///
    /// In order:
    /// 1. an unrecognized condition key never applies;
    /// 2. path-match patterns require a path, and at least one must match;
    /// 3. any matching exclude pattern vetoes the fragment;
    /// 4. an empty condition always applies.
    ///
    /// Both pattern lists are consulted in their compiled form: a pattern
    /// dropped for invalid syntax is treated as absent.
    pub fn evaluate(&self, params: &Params) -> bool {
        if self.has_unrecognized {
            return false;
        }

        let path = params.path.as_deref().filter(|p| !p.is_empty());

        if !self.path_match.is_empty() {
            let Some(path) = path else {
                return false;
            };
            if !self.path_match.iter().any(|re| re.is_match(path)) {
                return false;
            }
        }

        if !self.path_exclude.is_empty()
            && let Some(path) = path
            && self.path_exclude.iter().any(|re| re.is_match(path))
        {
            return false;
        }

        true
    }
}

fn compile_patterns(patterns: Vec<Spanned<String>>, sink: &mut dyn DiagnosticSink) -> Vec<Regex> {
    let mut compiled = Vec::with_capacity(patterns.len());
    for pattern in patterns {
        match try_compile(&pattern.value) {
            Ok(re) => compiled.push(re),
            Err(err) => {
                debug!(pattern = %pattern.value, "dropping unusable path pattern");
                let mut diagnostic = Diagnostic::error(err.to_string());
                if let Some(range) = pattern.range {
                    diagnostic = diagnostic.with_range(range);
                }
                sink.report(diagnostic);
            }
        }
    }
    compiled
}
