// Integration tests for the analysis facade
// Covers parse-failure recovery, determinism and traversal ordering

use pyreview_rs::analyzer::Analyzer;
use pyreview_rs::report::DiagnosticKind;

#[test]
fn test_clean_input_yields_no_diagnostics() {
    let source = r#"
import math

def add(x, y):
    return x + y
"#;
    let analyzer = Analyzer::default();
    let diagnostics = analyzer.analyze(source);
    assert!(
        diagnostics.is_empty(),
        "clean source should produce no diagnostics, got {:?}",
        diagnostics
    );
}

#[test]
fn test_invalid_input_yields_exactly_one_syntax_failure() {
    let source = "def broken(:\n    pass\n";
    let analyzer = Analyzer::default();
    let diagnostics = analyzer.analyze(source);

    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].kind, DiagnosticKind::SyntaxFailure);
    assert!(
        diagnostics[0].message.starts_with("Syntax Error: "),
        "message should embed the parser description: {:?}",
        diagnostics[0].message
    );
    assert!(diagnostics[0].subject.is_empty());
}

#[test]
fn test_analyze_is_idempotent() {
    let source = r#"
import os

def shell(cmd):
    if 0:
        pass
"#;
    let analyzer = Analyzer::default();
    let first = analyzer.analyze(source);
    let second = analyzer.analyze(source);
    assert_eq!(first, second, "identical text must yield identical sequences");
}

#[test]
fn test_diagnostics_follow_visitation_order() {
    // The import precedes the function; the function's own finding precedes
    // the finding inside its body.
    let source = r#"
import os

def shell(cmd):
    if 0:
        pass
"#;
    let analyzer = Analyzer::default();
    let kinds: Vec<DiagnosticKind> = analyzer
        .analyze(source)
        .iter()
        .map(|d| d.kind)
        .collect();

    assert_eq!(
        kinds,
        vec![
            DiagnosticKind::UnsafeImport,
            DiagnosticKind::MissingReturn,
            DiagnosticKind::DeadCode,
        ]
    );
}

#[test]
fn test_rule_firing_does_not_suppress_nested_findings() {
    // Both functions fire a structural rule, and the second one's nested
    // `while` must still be visited.
    let source = r#"
def empty(x):
    pass

def risky(y):
    while 0:
        pass
"#;
    let analyzer = Analyzer::default();
    let kinds: Vec<DiagnosticKind> = analyzer
        .analyze(source)
        .iter()
        .map(|d| d.kind)
        .collect();

    assert_eq!(
        kinds,
        vec![
            DiagnosticKind::EmptyBody,
            DiagnosticKind::MissingReturn,
            DiagnosticKind::MissingReturn,
            DiagnosticKind::DeadCode,
        ]
    );
}

#[test]
fn test_syntax_failure_is_recovered_not_panicked() {
    // A grab-bag of junk inputs; none may panic, each is a single failure.
    for source in ["(((", "def :", "class 1x:", "\0\0\0", "if True\n  pass"] {
        let analyzer = Analyzer::default();
        let diagnostics = analyzer.analyze(source);
        assert_eq!(
            diagnostics.len(),
            1,
            "expected one syntax failure for {:?}",
            source
        );
        assert_eq!(diagnostics[0].kind, DiagnosticKind::SyntaxFailure);
    }
}
