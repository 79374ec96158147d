// Lib file to expose modules for testing and external usage.
// This file serves as the root for the library crate.

/// Module containing the analysis facade.
/// This includes the `Analyzer` struct that parses submissions and drives
/// the rule walk.
pub mod analyzer;

/// Module containing the AST walker.
/// This performs the single pre-order traversal and dispatches nodes to the
/// registered rules.
pub mod walker;

/// Module defining the diagnostic data structures.
/// This includes `Diagnostic`, `DiagnosticKind` and `AnalysisReport`.
pub mod report;

/// Module containing the implementation of the individual analysis rules
/// and the dispatch table binding them to node kinds.
pub mod rules;

/// Module containing the analysis configuration.
/// This holds the immutable disallowed-import set.
pub mod config;

/// Module defining the external collaborator contracts.
/// This includes the linter, reviewer and report-store traits plus the
/// collaborator error taxonomy.
pub mod collab;

/// Module containing the diagnostic aggregator and reporter.
/// This assembles composite reports, ranks historical issue frequency and
/// deduplicates report sections.
pub mod aggregate;
