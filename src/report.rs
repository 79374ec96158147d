use crate::collab::CollaboratorError;
use serde::{Deserialize, Serialize};

/// The category of defect a rule reports.
///
/// Each variant corresponds to exactly one rule, except `SyntaxFailure`,
/// which the analysis facade emits when the parser rejects the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DiagnosticKind {
    /// A function whose body is only a `pass` placeholder (or empty).
    EmptyBody,
    /// A function that takes positional parameters but never returns a value.
    MissingReturn,
    /// An `if`/`while` guarded by a constant falsy condition.
    DeadCode,
    /// A call that executes a string as code (`exec`/`eval`).
    UnsafeExec,
    /// An import of a module from the disallowed set.
    UnsafeImport,
    /// The source text could not be parsed at all.
    SyntaxFailure,
}

/// One reported defect instance.
///
/// A `Diagnostic` is produced by exactly one rule evaluation and is never
/// mutated afterwards. Messages are deterministic for identical input:
/// de-duplication and the historical frequency ranking both match on the
/// exact message string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// The defect category.
    pub kind: DiagnosticKind,
    /// Human-readable description of the issue.
    pub message: String,
    /// Identifier of the offending construct (function name, module name,
    /// callee name). Empty for tree-wide failures.
    pub subject: String,
}

impl Diagnostic {
    /// Creates a diagnostic tied to a named construct.
    pub fn new(kind: DiagnosticKind, message: impl Into<String>, subject: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            subject: subject.into(),
        }
    }

    /// Creates a diagnostic with no subject (tree-wide findings).
    pub fn anonymous(kind: DiagnosticKind, message: impl Into<String>) -> Self {
        Self::new(kind, message, "")
    }

    /// Wraps a parser error description into the single diagnostic returned
    /// for unparseable input. The parser's own message (line/column/reason)
    /// is embedded verbatim.
    pub fn syntax_failure(description: impl std::fmt::Display) -> Self {
        Self::anonymous(
            DiagnosticKind::SyntaxFailure,
            format!("Syntax Error: {}", description),
        )
    }
}

/// The result of one full analysis of one source unit.
///
/// Constructed exclusively by the analysis facade, once per submission, and
/// immutable thereafter. The two collaborator payloads keep their failure
/// state: a failed linter or reviewer is recorded here and degraded to an
/// unavailability marker later, at the aggregator — composing a report never
/// discards the payloads that did succeed.
#[derive(Debug, Clone)]
pub struct AnalysisReport {
    /// Ordered diagnostics from the AST walk (possibly empty).
    pub ast_diagnostics: Vec<Diagnostic>,
    /// Opaque free-text payload from the style-linter collaborator.
    pub style_output: Result<String, CollaboratorError>,
    /// Opaque free-text payload from the smell-commentary collaborator.
    pub smell_commentary: Result<String, CollaboratorError>,
}
