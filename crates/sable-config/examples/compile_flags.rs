//! Fragment compilation walkthrough.
//!
//! Shows the full pipeline: build a fragment the way the parser would,
//! compile it (collecting diagnostics), evaluate it against a couple of
//! files, and apply the accumulated edits to a compile command.

use sable_config::{Config, Fragment, Params};
use sable_diagnostics::DiagnosticCollector;

fn main() {
    // A fragment as the parser would hand it over:
    //
    //   If:
    //     PathMatch: .*\.cc
    //     PathExclude: third_party/.*
    //   CompileFlags:
    //     Add: [-Wall, -std=c++20]
    //     Remove: [-std=]
    let mut fragment = Fragment::default();
    fragment.condition.path_match.push(".*\\.cc".into());
    fragment.condition.path_exclude.push("third_party/.*".into());
    fragment.compile_flags.add.push("-Wall".into());
    fragment.compile_flags.add.push("-std=c++20".into());
    fragment.compile_flags.remove.push("-std=".into());

    let mut diagnostics = DiagnosticCollector::new();
    let compiled = fragment.compile(&mut diagnostics);
    for diagnostic in diagnostics.diagnostics() {
        eprintln!("{}", diagnostic.to_text());
    }

    for path in ["src/main.cc", "third_party/vendored.cc", "include/api.h"] {
        let mut config = Config::default();
        let applied = compiled.apply(&Params::for_path(path), &mut config);
        println!("{path}: applies = {applied}");

        if applied {
            let mut argv: Vec<String> = ["clang", "-std=c++11", path]
                .iter()
                .map(|s| s.to_string())
                .collect();
            config.compile_flags.edits.apply_all(&mut argv);
            println!("  rewritten command: {}", argv.join(" "));
        }
    }
}
