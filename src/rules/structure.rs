use crate::config::AnalyzerConfig;
use crate::report::{Diagnostic, DiagnosticKind};
use crate::rules::Node;
use rustpython_ast::Stmt;

/// Flags a function definition whose first body statement is a `pass`
/// placeholder — a potentially incomplete implementation.
///
/// A body with zero statements cannot come out of the parser, but a
/// hand-built tree may carry one; it counts the same as a placeholder-only
/// body rather than crashing on the missing first statement.
pub fn empty_body(node: &Node, _config: &AnalyzerConfig) -> Vec<Diagnostic> {
    let (name, body) = match node {
        Node::Stmt(Stmt::FunctionDef(def)) => (def.name.as_str(), &def.body),
        Node::Stmt(Stmt::AsyncFunctionDef(def)) => (def.name.as_str(), &def.body),
        _ => return Vec::new(),
    };

    let placeholder_only = match body.first() {
        Some(Stmt::Pass(_)) => true,
        Some(_) => false,
        None => true,
    };

    if placeholder_only {
        vec![Diagnostic::new(
            DiagnosticKind::EmptyBody,
            format!("Warning: Function '{}' has an empty body.", name),
            name,
        )]
    } else {
        Vec::new()
    }
}

/// Flags a function that declares at least one positional parameter but whose
/// entire subtree contains no `return` statement.
///
/// The scan covers every nested block, matching the historical behavior where
/// the whole function subtree was walked for a `return`.
pub fn missing_return(node: &Node, _config: &AnalyzerConfig) -> Vec<Diagnostic> {
    let (name, args, body) = match node {
        Node::Stmt(Stmt::FunctionDef(def)) => (def.name.as_str(), &def.args, &def.body),
        Node::Stmt(Stmt::AsyncFunctionDef(def)) => (def.name.as_str(), &def.args, &def.body),
        _ => return Vec::new(),
    };

    let has_positional = !args.args.is_empty() || !args.posonlyargs.is_empty();
    if has_positional && !subtree_has_return(body) {
        vec![Diagnostic::new(
            DiagnosticKind::MissingReturn,
            format!(
                "Warning: Function '{}' takes arguments but has no return statement.",
                name
            ),
            name,
        )]
    } else {
        Vec::new()
    }
}

/// Recursively checks whether any statement in the given block, or in any
/// block nested below it, is a `return`.
fn subtree_has_return(stmts: &[Stmt]) -> bool {
    stmts.iter().any(stmt_has_return)
}

fn stmt_has_return(stmt: &Stmt) -> bool {
    match stmt {
        Stmt::Return(_) => true,
        Stmt::FunctionDef(node) => subtree_has_return(&node.body),
        Stmt::AsyncFunctionDef(node) => subtree_has_return(&node.body),
        Stmt::ClassDef(node) => subtree_has_return(&node.body),
        Stmt::If(node) => subtree_has_return(&node.body) || subtree_has_return(&node.orelse),
        Stmt::For(node) => subtree_has_return(&node.body) || subtree_has_return(&node.orelse),
        Stmt::AsyncFor(node) => subtree_has_return(&node.body) || subtree_has_return(&node.orelse),
        Stmt::While(node) => subtree_has_return(&node.body) || subtree_has_return(&node.orelse),
        Stmt::With(node) => subtree_has_return(&node.body),
        Stmt::AsyncWith(node) => subtree_has_return(&node.body),
        Stmt::Try(node) => {
            subtree_has_return(&node.body)
                || node.handlers.iter().any(|handler| match handler {
                    rustpython_ast::ExceptHandler::ExceptHandler(h) => subtree_has_return(&h.body),
                })
                || subtree_has_return(&node.orelse)
                || subtree_has_return(&node.finalbody)
        }
        Stmt::TryStar(node) => {
            subtree_has_return(&node.body)
                || node.handlers.iter().any(|handler| match handler {
                    rustpython_ast::ExceptHandler::ExceptHandler(h) => subtree_has_return(&h.body),
                })
                || subtree_has_return(&node.orelse)
                || subtree_has_return(&node.finalbody)
        }
        Stmt::Match(node) => node
            .cases
            .iter()
            .any(|case| subtree_has_return(&case.body)),
        _ => false,
    }
}
