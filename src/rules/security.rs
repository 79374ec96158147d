use crate::config::AnalyzerConfig;
use crate::report::{Diagnostic, DiagnosticKind};
use crate::rules::Node;
use rustpython_ast::{Expr, Stmt};

/// Flags calls that execute a string as code: `exec(...)` and `eval(...)`
/// invoked by bare name.
///
/// Attribute calls (`builtins.exec`) are left alone; resolving them would
/// need name binding the engine does not do.
pub fn unsafe_exec(node: &Node, _config: &AnalyzerConfig) -> Vec<Diagnostic> {
    let Node::Expr(Expr::Call(call)) = node else {
        return Vec::new();
    };

    if let Expr::Name(func) = call.func.as_ref() {
        let name = func.id.as_str();
        if name == "exec" || name == "eval" {
            return vec![Diagnostic::new(
                DiagnosticKind::UnsafeExec,
                format!(
                    "Warning: Use of '{}' detected. This can lead to security vulnerabilities.",
                    name
                ),
                name,
            )];
        }
    }

    Vec::new()
}

/// Flags `import m` statements naming a module from the disallowed set.
///
/// Matching is on the full dotted name of each alias, so `import os` is
/// flagged while `import os.path` is not unless the set says so. One
/// diagnostic per offending alias.
pub fn unsafe_import(node: &Node, config: &AnalyzerConfig) -> Vec<Diagnostic> {
    let Node::Stmt(Stmt::Import(import)) = node else {
        return Vec::new();
    };

    import
        .names
        .iter()
        .filter(|alias| config.banned_imports.contains(alias.name.as_str()))
        .map(|alias| {
            Diagnostic::new(
                DiagnosticKind::UnsafeImport,
                format!(
                    "Warning: Importing '{}' can lead to security risks if used improperly.",
                    alias.name
                ),
                alias.name.as_str(),
            )
        })
        .collect()
}

/// Flags `from m import ...` statements whose source module is in the
/// disallowed set. The imported names do not matter; pulling anything out of
/// the module is enough.
pub fn unsafe_import_from(node: &Node, config: &AnalyzerConfig) -> Vec<Diagnostic> {
    let Node::Stmt(Stmt::ImportFrom(import)) = node else {
        return Vec::new();
    };

    let Some(module) = &import.module else {
        // `from . import x` has no module name to check.
        return Vec::new();
    };

    if config.banned_imports.contains(module.as_str()) {
        vec![Diagnostic::new(
            DiagnosticKind::UnsafeImport,
            format!(
                "Warning: Importing from '{}' can lead to security risks if used improperly.",
                module
            ),
            module.as_str(),
        )]
    } else {
        Vec::new()
    }
}
