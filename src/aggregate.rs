use crate::collab::CollaboratorError;
use crate::report::AnalysisReport;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Sentinel substituted for an empty AST diagnostic list.
pub const NO_AST_ISSUES: &str = "No AST issues found.";
/// Sentinel substituted for a blank style-linter payload.
pub const NO_STYLE_ISSUES: &str = "No style issues found.";
/// Sentinel substituted for a blank smell-commentary payload.
pub const NO_SMELLS: &str = "No code smells found.";

/// Marker substituted when the style-linter collaborator failed. Distinct
/// from the "none found" sentinel: consumers can tell "clean" from "unknown".
pub const STYLE_UNAVAILABLE: &str = "Style analysis unavailable.";
/// Marker substituted when the smell-commentary collaborator failed.
pub const SMELLS_UNAVAILABLE: &str = "Code smell analysis unavailable.";

/// Section heading used by the long-form text renderer for AST findings.
pub const AST_HEADING: &str = "## AST Issues";
/// Section heading for the style payload.
pub const STYLE_HEADING: &str = "## Style Issues";
/// Section heading for the smell commentary.
pub const SMELLS_HEADING: &str = "## Code Smells";

/// The AST slot of a stored report: either the real message list or a bare
/// sentinel string. Stored history contains both shapes, so decoding has to
/// accept both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AstSection {
    /// Diagnostic messages, in visitation order.
    Messages(Vec<String>),
    /// The sentinel substituted for an empty run.
    Sentinel(String),
}

/// One assembled report, ready for transmission, display or storage.
///
/// Every field is a real payload or a fixed sentinel/marker string, so
/// consumers never need null-checks. Assembled by `compose`, which is the
/// single authoritative substitution point — no earlier stage pre-wraps
/// empty results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompositeReport {
    /// AST diagnostic messages, or the "none found" sentinel.
    pub ast_issues: AstSection,
    /// The style-linter payload, its sentinel, or its unavailability marker.
    pub style_issues: String,
    /// The smell commentary, its sentinel, or its unavailability marker.
    pub smell_commentary: String,
}

/// Assembles the composite report for one analysis run.
///
/// Substitution is applied independently per payload: a populated AST list
/// and an empty style payload both render correctly in the same report. A
/// failed collaborator degrades to its explicit "unavailable" marker without
/// touching the other payloads.
pub fn compose(report: &AnalysisReport) -> CompositeReport {
    let ast_issues = if report.ast_diagnostics.is_empty() {
        AstSection::Sentinel(NO_AST_ISSUES.to_string())
    } else {
        AstSection::Messages(
            report
                .ast_diagnostics
                .iter()
                .map(|diagnostic| diagnostic.message.clone())
                .collect(),
        )
    };

    CompositeReport {
        ast_issues,
        style_issues: substitute(&report.style_output, NO_STYLE_ISSUES, STYLE_UNAVAILABLE),
        smell_commentary: substitute(&report.smell_commentary, NO_SMELLS, SMELLS_UNAVAILABLE),
    }
}

/// Applies the sentinel/marker substitution for one opaque text payload.
fn substitute(
    payload: &Result<String, CollaboratorError>,
    empty_sentinel: &str,
    unavailable_marker: &str,
) -> String {
    match payload {
        Ok(text) if text.trim().is_empty() => empty_sentinel.to_string(),
        Ok(text) => text.clone(),
        Err(_) => unavailable_marker.to_string(),
    }
}

/// Per-identity tally of how often each distinct diagnostic message occurred
/// across stored history. The two rankings are independent and each sorted
/// by count descending (ties broken by message, so identical histories rank
/// identically).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct IssueFrequency {
    /// AST diagnostic message → occurrence count.
    pub ast_issues: Vec<(String, usize)>,
    /// Style payload line → occurrence count.
    pub style_issues: Vec<(String, usize)>,
}

/// Builds the frequency ranking from raw stored report blobs.
///
/// Each blob is decoded independently; blobs that fail to decode are skipped
/// so one malformed history entry never aborts the scan. AST messages count
/// as-is. The style payload is normalized from a block of text into trimmed,
/// non-blank lines before counting. Sentinel and unavailability strings are
/// bookkeeping, not diagnostics, and are never counted.
pub fn rank_issue_frequency(blobs: &[String]) -> IssueFrequency {
    let mut ast_counts: HashMap<String, usize> = HashMap::new();
    let mut style_counts: HashMap<String, usize> = HashMap::new();

    for blob in blobs {
        let Ok(report) = serde_json::from_str::<CompositeReport>(blob) else {
            continue;
        };

        if let AstSection::Messages(messages) = &report.ast_issues {
            for message in messages {
                *ast_counts.entry(message.clone()).or_insert(0) += 1;
            }
        }

        if report.style_issues != NO_STYLE_ISSUES && report.style_issues != STYLE_UNAVAILABLE {
            for line in report.style_issues.lines() {
                let line = line.trim();
                if !line.is_empty() {
                    *style_counts.entry(line.to_string()).or_insert(0) += 1;
                }
            }
        }
    }

    IssueFrequency {
        ast_issues: into_ranking(ast_counts),
        style_issues: into_ranking(style_counts),
    }
}

/// Count-descending ranking with a stable message tie-break.
fn into_ranking(counts: HashMap<String, usize>) -> Vec<(String, usize)> {
    let mut ranking: Vec<(String, usize)> = counts.into_iter().collect();
    ranking.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranking
}

/// Collapses repeated sections of a long-form text report.
///
/// A section runs from its heading line to the next occurrence of the same
/// heading or the end of the text. Only the first occurrence is retained;
/// later duplicates of that heading, content included, are discarded.
/// Multi-stage composition upstream (a collaborator payload repeating a
/// heading the renderer also emits) is what produces such duplicates.
pub fn dedup_report_sections(text: &str, heading: &str) -> String {
    let pattern = Regex::new(&format!(r"(?m)^[ \t]*{}", regex::escape(heading))).unwrap();
    let starts: Vec<usize> = pattern.find_iter(text).map(|m| m.start()).collect();

    if starts.len() < 2 {
        return text.to_string();
    }

    // Duplicate sections tile the text from the second occurrence onward, so
    // keeping the first section means cutting there.
    text[..starts[1]].to_string()
}

/// Renders the composite report as the long-form text consumers display.
///
/// Each payload becomes one headed section; duplicated headings introduced
/// by the payloads themselves are collapsed afterwards.
pub fn render_text_report(report: &CompositeReport) -> String {
    let mut out = String::new();

    out.push_str(AST_HEADING);
    out.push('\n');
    match &report.ast_issues {
        AstSection::Messages(messages) => {
            for message in messages {
                out.push_str("- ");
                out.push_str(message);
                out.push('\n');
            }
        }
        AstSection::Sentinel(sentinel) => {
            out.push_str("- ");
            out.push_str(sentinel);
            out.push('\n');
        }
    }
    out.push('\n');

    out.push_str(STYLE_HEADING);
    out.push('\n');
    out.push_str(report.style_issues.trim_end());
    out.push_str("\n\n");

    out.push_str(SMELLS_HEADING);
    out.push('\n');
    out.push_str(report.smell_commentary.trim_end());
    out.push('\n');

    let mut deduped = out;
    for heading in [AST_HEADING, STYLE_HEADING, SMELLS_HEADING] {
        deduped = dedup_report_sections(&deduped, heading);
    }
    deduped
}
