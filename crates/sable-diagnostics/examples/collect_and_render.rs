//! Collecting diagnostics and rendering them as text and JSON.

use sable_diagnostics::{Diagnostic, DiagnosticCollector, DiagnosticSink, Location, Range};

fn main() {
    let mut collector = DiagnosticCollector::new();

    // Simulate a subsystem validating user configuration.
    collector.report(Diagnostic::error(
        "Invalid regex pattern '**': repetition operator missing expression",
    ));
    collector.report(
        Diagnostic::warning("condition key is deprecated").with_range(Range {
            start: Location {
                offset: 12,
                row: 1,
                column: 2,
            },
            end: Location {
                offset: 20,
                row: 1,
                column: 10,
            },
        }),
    );

    if collector.has_errors() {
        println!(
            "validation produced {} diagnostics:",
            collector.diagnostics().len()
        );
    }
    for diagnostic in collector.diagnostics() {
        println!("  {}", diagnostic.to_text());
    }

    let json: Vec<_> = collector
        .diagnostics()
        .iter()
        .map(|d| d.to_json())
        .collect();
    println!("{}", serde_json::to_string_pretty(&json).unwrap());
}
