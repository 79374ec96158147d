// Integration tests for the aggregator: composite assembly, partial-result
// degradation, historical frequency ranking and section deduplication.

use pyreview_rs::aggregate::{
    compose, rank_issue_frequency, render_text_report, AstSection, CompositeReport, NO_AST_ISSUES,
    NO_SMELLS, NO_STYLE_ISSUES, SMELLS_UNAVAILABLE, STYLE_UNAVAILABLE,
};
use pyreview_rs::analyzer::Analyzer;
use pyreview_rs::collab::{CollaboratorError, ReportStore, SmellReviewer, StyleLinter};
use pyreview_rs::report::{AnalysisReport, Diagnostic, DiagnosticKind};

const EXEC_WARNING: &str =
    "Warning: Use of 'exec' detected. This can lead to security vulnerabilities.";

// --- TEST DOUBLES ---

/// Linter double returning a fixed payload.
struct FixedLinter(Result<String, CollaboratorError>);

impl StyleLinter for FixedLinter {
    fn lint(&self, _source: &str) -> Result<String, CollaboratorError> {
        self.0.clone()
    }
}

/// Reviewer double returning a fixed payload.
struct FixedReviewer(Result<String, CollaboratorError>);

impl SmellReviewer for FixedReviewer {
    fn review(&self, _source: &str) -> Result<String, CollaboratorError> {
        self.0.clone()
    }
}

/// In-memory report store double: (identity, submission, blob) rows in
/// append order.
#[derive(Default)]
struct MemoryStore {
    rows: Vec<(String, String, String)>,
}

impl ReportStore for MemoryStore {
    fn append(
        &mut self,
        identity: &str,
        submission: &str,
        report: &CompositeReport,
    ) -> Result<(), CollaboratorError> {
        let blob = serde_json::to_string(report)
            .map_err(|e| CollaboratorError::Store(e.to_string()))?;
        self.rows
            .push((identity.to_string(), submission.to_string(), blob));
        Ok(())
    }

    fn reports_for(&self, identity: &str) -> Result<Vec<String>, CollaboratorError> {
        Ok(self
            .rows
            .iter()
            .filter(|(who, _, _)| who == identity)
            .map(|(_, _, blob)| blob.clone())
            .collect())
    }

    fn latest(&self) -> Result<Option<String>, CollaboratorError> {
        Ok(self.rows.last().map(|(_, _, blob)| blob.clone()))
    }
}

fn report_with(
    diagnostics: Vec<Diagnostic>,
    style: Result<String, CollaboratorError>,
    smells: Result<String, CollaboratorError>,
) -> AnalysisReport {
    AnalysisReport {
        ast_diagnostics: diagnostics,
        style_output: style,
        smell_commentary: smells,
    }
}

fn exec_diagnostic() -> Diagnostic {
    Diagnostic::new(DiagnosticKind::UnsafeExec, EXEC_WARNING, "exec")
}

// --- COMPOSITE ASSEMBLY ---

#[test]
fn test_compose_substitutes_sentinels_per_payload() {
    // Populated AST list next to an empty style payload: both must render.
    let report = report_with(
        vec![exec_diagnostic()],
        Ok(String::new()),
        Ok("Consider splitting this function.".to_string()),
    );
    let composite = compose(&report);

    assert_eq!(
        composite.ast_issues,
        AstSection::Messages(vec![EXEC_WARNING.to_string()])
    );
    assert_eq!(composite.style_issues, NO_STYLE_ISSUES);
    assert_eq!(composite.smell_commentary, "Consider splitting this function.");
}

#[test]
fn test_compose_with_nothing_found_yields_all_sentinels() {
    let report = report_with(Vec::new(), Ok(String::new()), Ok("  \n ".to_string()));
    let composite = compose(&report);

    assert_eq!(
        composite.ast_issues,
        AstSection::Sentinel(NO_AST_ISSUES.to_string())
    );
    assert_eq!(composite.style_issues, NO_STYLE_ISSUES);
    assert_eq!(composite.smell_commentary, NO_SMELLS);
}

#[test]
fn test_failed_collaborator_degrades_independently() {
    let report = report_with(
        vec![exec_diagnostic()],
        Err(CollaboratorError::Linter("linter not installed".into())),
        Err(CollaboratorError::Reviewer("remote call timed out".into())),
    );
    let composite = compose(&report);

    // The AST payload survives; each failed payload gets its own marker,
    // which is not the "none found" sentinel.
    assert!(matches!(composite.ast_issues, AstSection::Messages(_)));
    assert_eq!(composite.style_issues, STYLE_UNAVAILABLE);
    assert_eq!(composite.smell_commentary, SMELLS_UNAVAILABLE);
    assert_ne!(STYLE_UNAVAILABLE, NO_STYLE_ISSUES);
    assert_ne!(SMELLS_UNAVAILABLE, NO_SMELLS);
}

#[test]
fn test_review_pipeline_survives_partial_failure() {
    let analyzer = Analyzer::default();
    let linter = FixedLinter(Ok("temp.py:1:1: E501 line too long".to_string()));
    let reviewer = FixedReviewer(Err(CollaboratorError::Reviewer("unreachable".into())));

    let report = analyzer.review("exec(payload)\n", &linter, &reviewer);
    let composite = compose(&report);

    assert_eq!(
        composite.ast_issues,
        AstSection::Messages(vec![EXEC_WARNING.to_string()])
    );
    assert_eq!(composite.style_issues, "temp.py:1:1: E501 line too long");
    assert_eq!(composite.smell_commentary, SMELLS_UNAVAILABLE);
}

#[test]
fn test_composite_report_round_trips_through_json() {
    let composite = compose(&report_with(
        vec![exec_diagnostic()],
        Ok("one issue".to_string()),
        Ok(String::new()),
    ));
    let blob = serde_json::to_string(&composite).expect("serializes");
    let decoded: CompositeReport = serde_json::from_str(&blob).expect("decodes");
    assert_eq!(decoded, composite);
}

// --- FREQUENCY RANKING ---

#[test]
fn test_frequency_ranking_orders_by_count() {
    let repeated = compose(&report_with(
        vec![exec_diagnostic()],
        Ok("temp.py:3:1: E302 expected 2 blank lines".to_string()),
        Ok(String::new()),
    ));
    let once = compose(&report_with(
        vec![Diagnostic::new(
            DiagnosticKind::EmptyBody,
            "Warning: Function 'stub' has an empty body.",
            "stub",
        )],
        Ok(String::new()),
        Ok(String::new()),
    ));

    let blobs = vec![
        serde_json::to_string(&repeated).unwrap(),
        serde_json::to_string(&repeated).unwrap(),
        serde_json::to_string(&once).unwrap(),
    ];

    let frequency = rank_issue_frequency(&blobs);

    assert_eq!(
        frequency.ast_issues,
        vec![
            (EXEC_WARNING.to_string(), 2),
            ("Warning: Function 'stub' has an empty body.".to_string(), 1),
        ]
    );
    assert_eq!(
        frequency.style_issues,
        vec![("temp.py:3:1: E302 expected 2 blank lines".to_string(), 2)]
    );
}

#[test]
fn test_malformed_history_entries_are_skipped() {
    let valid = compose(&report_with(
        vec![exec_diagnostic()],
        Ok(String::new()),
        Ok(String::new()),
    ));
    let blobs = vec![
        "not json at all".to_string(),
        "{\"wrong\": \"shape\"}".to_string(),
        serde_json::to_string(&valid).unwrap(),
    ];

    let frequency = rank_issue_frequency(&blobs);
    assert_eq!(frequency.ast_issues, vec![(EXEC_WARNING.to_string(), 1)]);
}

#[test]
fn test_style_payload_is_normalized_into_lines() {
    let report = compose(&report_with(
        Vec::new(),
        Ok("  E101 indentation  \n\nE202 whitespace\n".to_string()),
        Ok(String::new()),
    ));
    let blobs = vec![serde_json::to_string(&report).unwrap()];

    let frequency = rank_issue_frequency(&blobs);
    assert_eq!(
        frequency.style_issues,
        vec![
            ("E101 indentation".to_string(), 1),
            ("E202 whitespace".to_string(), 1),
        ]
    );
}

#[test]
fn test_sentinels_are_not_counted_as_issues() {
    let clean = compose(&report_with(Vec::new(), Ok(String::new()), Ok(String::new())));
    let failed = compose(&report_with(
        Vec::new(),
        Err(CollaboratorError::Linter("down".into())),
        Err(CollaboratorError::Reviewer("down".into())),
    ));
    let blobs = vec![
        serde_json::to_string(&clean).unwrap(),
        serde_json::to_string(&failed).unwrap(),
    ];

    let frequency = rank_issue_frequency(&blobs);
    assert!(frequency.ast_issues.is_empty());
    assert!(frequency.style_issues.is_empty());
}

// --- REPORT STORE ---

#[test]
fn test_store_round_trip_and_ranking_over_history() {
    let analyzer = Analyzer::default();
    let linter = FixedLinter(Ok(String::new()));
    let reviewer = FixedReviewer(Ok(String::new()));
    let mut store = MemoryStore::default();

    for submission in ["first.py", "second.py"] {
        let report = analyzer.review("exec(code)\n", &linter, &reviewer);
        store
            .append("alice", submission, &compose(&report))
            .expect("append succeeds");
    }
    let clean = analyzer.review("x = 1\n", &linter, &reviewer);
    store
        .append("bob", "clean.py", &compose(&clean))
        .expect("append succeeds");

    let history = store.reports_for("alice").expect("query succeeds");
    assert_eq!(history.len(), 2);

    let frequency = rank_issue_frequency(&history);
    assert_eq!(frequency.ast_issues, vec![(EXEC_WARNING.to_string(), 2)]);

    // The most recent blob across all identities is bob's clean report.
    let latest = store.latest().expect("query succeeds").expect("non-empty");
    let decoded: CompositeReport = serde_json::from_str(&latest).expect("decodes");
    assert_eq!(
        decoded.ast_issues,
        AstSection::Sentinel(NO_AST_ISSUES.to_string())
    );
}

// --- TEXT RENDERING & SECTION DEDUPLICATION ---

#[test]
fn test_render_contains_all_three_sections() {
    let composite = compose(&report_with(
        vec![exec_diagnostic()],
        Ok("temp.py:1:1: E501 line too long".to_string()),
        Ok("Deep nesting in `main`.".to_string()),
    ));
    let text = render_text_report(&composite);

    assert!(text.contains("## AST Issues"));
    assert!(text.contains(&format!("- {}", EXEC_WARNING)));
    assert!(text.contains("## Style Issues"));
    assert!(text.contains("temp.py:1:1: E501 line too long"));
    assert!(text.contains("## Code Smells"));
    assert!(text.contains("Deep nesting in `main`."));
}

#[test]
fn test_render_collapses_heading_repeated_by_a_payload() {
    // The commentary payload repeats a heading the renderer already emits;
    // only the first section survives, with its own content.
    let composite = compose(&report_with(
        Vec::new(),
        Ok(String::new()),
        Ok("Looks fine overall.\n## Code Smells\nstale duplicate block".to_string()),
    ));
    let text = render_text_report(&composite);

    assert_eq!(text.matches("## Code Smells").count(), 1);
    assert!(text.contains("Looks fine overall."));
    assert!(!text.contains("stale duplicate block"));
}
