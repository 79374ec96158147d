use crate::config::AnalyzerConfig;
use crate::report::{Diagnostic, DiagnosticKind};
use crate::rules::Node;
use rustpython_ast::{self as ast, Expr, Stmt};

/// Flags an `if` or `while` statement whose test is a literal constant that
/// evaluates to a falsy value — the guarded branch can never execute.
///
/// Only `Constant` test expressions are considered. An empty container
/// literal (`[]`, `{}`) is a different node kind and is deliberately not
/// folded; names like `False or x` are runtime expressions and out of scope.
pub fn dead_conditional(node: &Node, _config: &AnalyzerConfig) -> Vec<Diagnostic> {
    let (test, message) = match node {
        Node::Stmt(Stmt::If(stmt)) => (
            &stmt.test,
            "Warning: Detected dead code in an 'if' statement with a constant False condition.",
        ),
        Node::Stmt(Stmt::While(stmt)) => (
            &stmt.test,
            "Warning: Detected dead code in a 'while' statement with a constant False condition.",
        ),
        _ => return Vec::new(),
    };

    if let Expr::Constant(constant) = test.as_ref() {
        if is_falsy_constant(&constant.value) {
            return vec![Diagnostic::anonymous(DiagnosticKind::DeadCode, message)];
        }
    }

    Vec::new()
}

/// Truthiness of a literal constant, per the language's constant-folding
/// model.
fn is_falsy_constant(value: &ast::Constant) -> bool {
    match value {
        ast::Constant::None => true,
        ast::Constant::Bool(b) => !b,
        ast::Constant::Str(s) => s.is_empty(),
        ast::Constant::Bytes(b) => b.is_empty(),
        // A bare integer literal is never negative (unary minus parses as a
        // UnaryOp node), so textual zero is an exact check.
        ast::Constant::Int(i) => i.to_string() == "0",
        ast::Constant::Float(f) => *f == 0.0,
        ast::Constant::Complex { real, imag } => *real == 0.0 && *imag == 0.0,
        ast::Constant::Tuple(items) => items.is_empty(),
        ast::Constant::Ellipsis => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustpython_parser::{parse, Mode};

    fn first_stmt_diagnostics(source: &str) -> Vec<Diagnostic> {
        let tree = parse(source, Mode::Module, "test.py").expect("Failed to parse");
        let rustpython_ast::Mod::Module(module) = tree else {
            panic!("expected a module");
        };
        dead_conditional(
            &Node::Stmt(&module.body[0]),
            &crate::config::AnalyzerConfig::default(),
        )
    }

    #[test]
    fn test_falsy_literals_flag() {
        for source in [
            "if 0:\n    pass\n",
            "if '':\n    pass\n",
            "if None:\n    pass\n",
            "if False:\n    pass\n",
            "if 0.0:\n    pass\n",
        ] {
            let diags = first_stmt_diagnostics(source);
            assert_eq!(diags.len(), 1, "expected dead code for {:?}", source);
            assert_eq!(diags[0].kind, DiagnosticKind::DeadCode);
        }
    }

    #[test]
    fn test_truthy_and_dynamic_tests_pass() {
        for source in [
            "if 1:\n    pass\n",
            "if 'x':\n    pass\n",
            "if True:\n    pass\n",
            "if flag:\n    pass\n",
            "if []:\n    pass\n",
        ] {
            let diags = first_stmt_diagnostics(source);
            assert!(diags.is_empty(), "expected no dead code for {:?}", source);
        }
    }

    #[test]
    fn test_while_message_names_while() {
        let diags = first_stmt_diagnostics("while 0:\n    pass\n");
        assert_eq!(diags.len(), 1);
        assert!(diags[0].message.contains("'while' statement"));
    }
}
