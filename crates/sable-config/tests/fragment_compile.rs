//! End-to-end tests for fragment compilation and runtime apply.

use sable_config::{Config, Fragment, Params};
use sable_diagnostics::{Diagnostic, DiagnosticCollector, Location, Range, Spanned};

/// Compile a fragment and apply it once against fresh output state.
fn compile_and_apply(fragment: Fragment, params: &Params) -> (bool, Config, Vec<Diagnostic>) {
    let mut diagnostics = DiagnosticCollector::new();
    let compiled = fragment.compile(&mut diagnostics);
    let mut config = Config::default();
    let applied = compiled.apply(params, &mut config);
    (applied, config, diagnostics.into_diagnostics())
}

#[test]
fn empty_condition_applies_and_contributes_one_edit() {
    let mut fragment = Fragment::default();
    fragment.compile_flags.add.push("X".into());

    let (applied, config, diagnostics) = compile_and_apply(fragment, &Params::default());
    assert!(applied, "empty config must apply");
    assert!(diagnostics.is_empty());
    assert_eq!(config.compile_flags.edits.len(), 1);
}

#[test]
fn path_condition_without_path_does_not_apply() {
    let mut fragment = Fragment::default();
    fragment.condition.path_match.push("fo*".into());

    let (applied, config, diagnostics) = compile_and_apply(fragment, &Params::default());
    assert!(!applied);
    assert!(diagnostics.is_empty(), "missing path is not an error");
    assert_eq!(config.compile_flags.edits.len(), 0);
}

#[test]
fn non_matching_path_does_not_apply() {
    let mut fragment = Fragment::default();
    fragment.condition.path_match.push("fo*".into());

    let (applied, _, diagnostics) = compile_and_apply(fragment, &Params::for_path("bar"));
    assert!(!applied);
    assert!(diagnostics.is_empty());
}

#[test]
fn any_matching_pattern_applies() {
    let mut fragment = Fragment::default();
    fragment.condition.path_match.push("fo*".into());
    fragment.condition.path_match.push("ba*r".into());

    let (applied, _, diagnostics) = compile_and_apply(fragment, &Params::for_path("bar"));
    assert!(applied);
    assert!(diagnostics.is_empty());
}

#[test]
fn matching_is_full_string() {
    let mut fragment = Fragment::default();
    fragment.condition.path_match.push("ba*r".into());

    let (applied, _, _) = compile_and_apply(fragment, &Params::for_path("some/bar"));
    assert!(!applied, "patterns are not substring searches");
}

#[test]
fn exclusion_overrides_inclusion() {
    let mut fragment = Fragment::default();
    fragment.condition.path_match.push("b.*".into());
    fragment.condition.path_exclude.push(".*r".into());

    let (applied, _, diagnostics) = compile_and_apply(fragment, &Params::for_path("bar"));
    assert!(!applied, "included but also excluded");
    assert!(diagnostics.is_empty());
}

#[test]
fn invalid_regex_is_diagnosed_once_and_fragment_still_applies() {
    let mut fragment = Fragment::default();
    fragment.condition.path_match.push("**]@theu".into());

    let (applied, _, diagnostics) = compile_and_apply(fragment, &Params::for_path("bar"));
    assert!(applied, "the invalid clause is treated as absent");
    assert_eq!(diagnostics.len(), 1);
    assert!(diagnostics[0].message.starts_with("Invalid regex"));
}

#[test]
fn invalid_regex_diagnostic_carries_the_pattern_range() {
    let range = Range {
        start: Location {
            offset: 20,
            row: 1,
            column: 4,
        },
        end: Location {
            offset: 28,
            row: 1,
            column: 12,
        },
    };
    let mut fragment = Fragment::default();
    fragment
        .condition
        .path_match
        .push(Spanned::with_range("**]@theu".to_string(), range.clone()));

    let (_, _, diagnostics) = compile_and_apply(fragment, &Params::for_path("bar"));
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].range.as_ref(), Some(&range));
}

#[test]
fn unrecognized_condition_key_never_applies_and_stays_silent() {
    let mut fragment = Fragment::default();
    fragment.condition.has_unrecognized_condition = true;
    fragment.condition.path_match.push("ba*r".into());

    let (applied, _, diagnostics) = compile_and_apply(fragment, &Params::for_path("bar"));
    assert!(!applied, "unknown keys make the fragment inapplicable");
    assert!(diagnostics.is_empty(), "unknown keys are not an error");
}

#[test]
fn compile_flags_edit_rewrites_argv() {
    let mut fragment = Fragment::default();
    fragment.compile_flags.add.push("-foo".into());
    fragment.compile_flags.remove.push("--include-directory=".into());

    let (applied, config, diagnostics) = compile_and_apply(fragment, &Params::default());
    assert!(applied);
    assert!(diagnostics.is_empty());
    assert_eq!(config.compile_flags.edits.len(), 1);

    let mut argv: Vec<String> = ["clang", "-I", "bar/", "a.cc"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    config.compile_flags.edits.apply_all(&mut argv);
    assert_eq!(argv, ["clang", "a.cc", "-foo"]);
}

#[test]
fn fragment_without_directives_contributes_no_edits() {
    let (applied, config, diagnostics) = compile_and_apply(Fragment::default(), &Params::default());
    assert!(applied);
    assert!(diagnostics.is_empty());
    assert!(config.compile_flags.edits.is_empty());
}

#[test]
fn edits_accumulate_across_fragments_in_application_order() {
    let mut first = Fragment::default();
    first.compile_flags.add.push("-DFIRST".into());
    let mut second = Fragment::default();
    second.compile_flags.add.push("-DSECOND".into());

    let mut diagnostics = DiagnosticCollector::new();
    let compiled_first = first.compile(&mut diagnostics);
    let compiled_second = second.compile(&mut diagnostics);

    let params = Params::for_path("a.cc");
    let mut config = Config::default();
    assert!(compiled_first.apply(&params, &mut config));
    assert!(compiled_second.apply(&params, &mut config));
    assert_eq!(config.compile_flags.edits.len(), 2);

    let mut argv = vec!["clang".to_string()];
    config.compile_flags.edits.apply_all(&mut argv);
    assert_eq!(argv, ["clang", "-DFIRST", "-DSECOND"]);
}

#[test]
fn inapplicable_fragment_leaves_config_untouched() {
    let mut matching = Fragment::default();
    matching.compile_flags.add.push("-kept".into());
    let mut non_matching = Fragment::default();
    non_matching.condition.path_match.push("other".into());
    non_matching.compile_flags.add.push("-dropped".into());

    let mut diagnostics = DiagnosticCollector::new();
    let params = Params::for_path("a.cc");
    let mut config = Config::default();
    assert!(matching.compile(&mut diagnostics).apply(&params, &mut config));
    assert!(
        !non_matching
            .compile(&mut diagnostics)
            .apply(&params, &mut config)
    );
    assert_eq!(config.compile_flags.edits.len(), 1);
}

#[test]
fn compiled_fragment_is_reusable_across_files() {
    let mut fragment = Fragment::default();
    fragment.condition.path_match.push(".*\\.cc".into());
    fragment.compile_flags.add.push("-Wall".into());

    let mut diagnostics = DiagnosticCollector::new();
    let compiled = fragment.compile(&mut diagnostics);

    for (path, expected) in [("a.cc", true), ("b.cc", true), ("a.h", false)] {
        let mut config = Config::default();
        assert_eq!(
            compiled.apply(&Params::for_path(path), &mut config),
            expected
        );
        assert_eq!(config.compile_flags.edits.len(), usize::from(expected));
    }
}

#[test]
fn independent_compilations_agree() {
    let build = || {
        let mut fragment = Fragment::default();
        fragment.condition.path_match.push("ba*r".into());
        fragment.compile_flags.add.push("-DX".into());
        fragment.compile_flags.remove.push("-I".into());
        fragment
    };

    let params = Params::for_path("bar");
    let argv = || -> Vec<String> {
        ["clang", "-Iinc/", "a.cc"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    };

    let (applied_a, config_a, diags_a) = compile_and_apply(build(), &params);
    let (applied_b, config_b, diags_b) = compile_and_apply(build(), &params);
    assert_eq!(applied_a, applied_b);
    assert_eq!(diags_a, diags_b);

    let (mut argv_a, mut argv_b) = (argv(), argv());
    config_a.compile_flags.edits.apply_all(&mut argv_a);
    config_b.compile_flags.edits.apply_all(&mut argv_b);
    assert_eq!(argv_a, argv_b);
    assert_eq!(argv_a, ["clang", "a.cc", "-DX"]);
}

#[test]
fn condition_with_only_invalid_patterns_behaves_as_empty() {
    let mut fragment = Fragment::default();
    fragment.condition.path_match.push("**]@theu".into());

    // Only the compiled pattern set participates in evaluation, so a match
    // list reduced to nothing no longer requires a path.
    let (applied, _, diagnostics) = compile_and_apply(fragment, &Params::default());
    assert!(applied);
    assert_eq!(diagnostics.len(), 1);
}
