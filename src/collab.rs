use crate::aggregate::CompositeReport;
use thiserror::Error;

/// Failures raised by the out-of-process collaborators.
///
/// Each variant is scoped to one collaborator so callers can tell which
/// payload source broke. These are never conflated with a `SyntaxFailure`
/// diagnostic: a collaborator failing is an operational condition, not a
/// property of the analyzed code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CollaboratorError {
    #[error("style linter failed: {0}")]
    Linter(String),
    #[error("smell reviewer failed: {0}")]
    Reviewer(String),
    #[error("report store failed: {0}")]
    Store(String),
}

/// The external line-style linter, invoked with the raw source text.
///
/// Its output is opaque to the core: free text, or empty when the linter had
/// nothing to say. The aggregator substitutes the "none found" sentinel for
/// empty output and splits the text into lines for frequency ranking; no
/// other interpretation happens.
pub trait StyleLinter {
    fn lint(&self, source: &str) -> Result<String, CollaboratorError>;
}

/// The remote code-smell commentary service.
///
/// Fully opaque: the returned text is never parsed or rule-evaluated.
pub trait SmellReviewer {
    fn review(&self, source: &str) -> Result<String, CollaboratorError>;
}

/// The historical-report store.
///
/// The core only appends composed reports and reads back raw blobs; each blob
/// is expected to be independently JSON-decodable into a `CompositeReport`,
/// but the frequency-ranking path tolerates blobs that are not. Reads are
/// snapshots; the ranking path never writes.
pub trait ReportStore {
    /// Writes one composed report keyed by identity and submission name.
    fn append(
        &mut self,
        identity: &str,
        submission: &str,
        report: &CompositeReport,
    ) -> Result<(), CollaboratorError>;

    /// Returns the raw report blobs stored for one identity, oldest first.
    fn reports_for(&self, identity: &str) -> Result<Vec<String>, CollaboratorError>;

    /// Returns the single most recent blob across all identities.
    fn latest(&self) -> Result<Option<String>, CollaboratorError>;
}
