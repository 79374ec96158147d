// Rules module
// This module exports the individual detectors and the dispatch table that
// binds them to AST node kinds.

/// Rules for detecting empty function bodies and missing return statements.
pub mod structure;

/// Rule for detecting conditionals guarded by constant falsy tests.
pub mod deadcode;

/// Rules for detecting dynamic code execution and disallowed imports.
pub mod security;

use crate::config::AnalyzerConfig;
use crate::report::Diagnostic;
use rustpython_ast::{Expr, Stmt};

/// A node handed to the rule set by the walker.
///
/// The tree is the tagged-variant AST from `rustpython_ast`; rules receive a
/// borrowed view of either a statement or an expression and match on the
/// variant they are bound to.
#[derive(Debug, Clone, Copy)]
pub enum Node<'a> {
    Stmt(&'a Stmt),
    Expr(&'a Expr),
}

/// The node-kind tags rules can be registered against.
///
/// Only kinds that carry at least one rule are tagged; every other node maps
/// to `None` in `Node::kind` and skips rule dispatch entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// `def` and `async def` statements.
    FunctionDef,
    /// `if` statements.
    If,
    /// `while` statements.
    While,
    /// `import` statements.
    Import,
    /// `from ... import ...` statements.
    ImportFrom,
    /// Call expressions.
    Call,
}

impl Node<'_> {
    /// Maps a node to its dispatch tag, or `None` when no rule kind exists
    /// for it.
    pub fn kind(&self) -> Option<NodeKind> {
        match self {
            Node::Stmt(Stmt::FunctionDef(_)) | Node::Stmt(Stmt::AsyncFunctionDef(_)) => {
                Some(NodeKind::FunctionDef)
            }
            Node::Stmt(Stmt::If(_)) => Some(NodeKind::If),
            Node::Stmt(Stmt::While(_)) => Some(NodeKind::While),
            Node::Stmt(Stmt::Import(_)) => Some(NodeKind::Import),
            Node::Stmt(Stmt::ImportFrom(_)) => Some(NodeKind::ImportFrom),
            Node::Expr(Expr::Call(_)) => Some(NodeKind::Call),
            _ => None,
        }
    }
}

/// A single detector: a pure function from node plus configuration to zero or
/// more diagnostics. Rules never inspect each other's output and never
/// recurse — the walker owns traversal.
pub type RuleFn = fn(&Node, &AnalyzerConfig) -> Vec<Diagnostic>;

/// The dispatch table mapping node-kind tags to rule functions.
///
/// Registration order is evaluation order for rules sharing a kind, which
/// keeps diagnostic sequences stable across runs. Adding a detector means one
/// more `register` call here; the walker does not change.
pub struct RuleSet {
    rules: Vec<(NodeKind, RuleFn)>,
}

impl RuleSet {
    /// An empty table, for callers assembling a custom rule selection.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// The standard table: all five detectors in their fixed order.
    pub fn with_default_rules() -> Self {
        let mut set = Self::new();
        set.register(NodeKind::FunctionDef, structure::empty_body);
        set.register(NodeKind::FunctionDef, structure::missing_return);
        set.register(NodeKind::If, deadcode::dead_conditional);
        set.register(NodeKind::While, deadcode::dead_conditional);
        set.register(NodeKind::Call, security::unsafe_exec);
        set.register(NodeKind::Import, security::unsafe_import);
        set.register(NodeKind::ImportFrom, security::unsafe_import_from);
        set
    }

    /// Appends a rule binding for the given node kind.
    pub fn register(&mut self, kind: NodeKind, rule: RuleFn) {
        self.rules.push((kind, rule));
    }

    /// Evaluates every rule registered for the node's kind, in registration
    /// order, appending diagnostics to the run accumulator.
    pub fn apply(&self, node: &Node, config: &AnalyzerConfig, out: &mut Vec<Diagnostic>) {
        let Some(kind) = node.kind() else {
            return;
        };
        for (registered, rule) in &self.rules {
            if *registered == kind {
                out.extend(rule(node, config));
            }
        }
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::with_default_rules()
    }
}
