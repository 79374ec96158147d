use crate::collab::{SmellReviewer, StyleLinter};
use crate::config::AnalyzerConfig;
use crate::report::{AnalysisReport, Diagnostic};
use crate::rules::RuleSet;
use crate::walker::Walker;
use rustpython_ast::Mod;
use rustpython_parser::{parse, Mode};

/// The analysis facade.
///
/// Holds the immutable configuration and the rule dispatch table; both are
/// fixed at construction, so one `Analyzer` can serve any number of
/// submissions and analyses of different source units may run in parallel
/// without coordination.
pub struct Analyzer {
    /// Immutable analysis configuration.
    config: AnalyzerConfig,
    /// The rule dispatch table, in its fixed registration order.
    rules: RuleSet,
}

impl Analyzer {
    /// Creates an analyzer with the standard rule set.
    pub fn new(config: AnalyzerConfig) -> Self {
        Self {
            config,
            rules: RuleSet::with_default_rules(),
        }
    }

    /// Creates an analyzer with a caller-assembled rule table.
    pub fn with_rules(config: AnalyzerConfig, rules: RuleSet) -> Self {
        Self { config, rules }
    }

    /// Analyzes one source unit.
    ///
    /// The input is arbitrary text. On parse success the walker runs over the
    /// tree and its diagnostics come back in visitation order — an empty
    /// sequence means "no issues found". On parse failure the result is a
    /// single `SyntaxFailure` diagnostic embedding the parser's own error
    /// description; a malformed tree is never partially traversed.
    ///
    /// This is a pure computation: no side effects, never panics, and
    /// identical text always yields an identical diagnostic sequence.
    pub fn analyze(&self, source: &str) -> Vec<Diagnostic> {
        match parse(source, Mode::Module, "<submission>") {
            Ok(Mod::Module(module)) => {
                let mut walker = Walker::new(&self.rules, &self.config);
                walker.walk_module(&module.body);
                walker.diagnostics
            }
            // Mode::Module only ever produces Mod::Module.
            Ok(_) => Vec::new(),
            Err(err) => vec![Diagnostic::syntax_failure(err)],
        }
    }

    /// Runs one full review of a submission: AST analysis plus the two
    /// external payloads, assembled into an `AnalysisReport`.
    ///
    /// A collaborator failure is captured in the report instead of being
    /// propagated, so one broken collaborator never costs the payloads that
    /// did succeed. Sentinel substitution happens later, at the aggregator,
    /// not here.
    pub fn review(
        &self,
        source: &str,
        linter: &dyn StyleLinter,
        reviewer: &dyn SmellReviewer,
    ) -> AnalysisReport {
        AnalysisReport {
            ast_diagnostics: self.analyze(source),
            style_output: linter.lint(source),
            smell_commentary: reviewer.review(source),
        }
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new(AnalyzerConfig::default())
    }
}
