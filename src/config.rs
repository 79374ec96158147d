use std::collections::HashSet;

lazy_static::lazy_static! {
    /// Modules whose import is flagged by default: the operating-system and
    /// subprocess-execution modules.
    static ref DEFAULT_BANNED_IMPORTS: HashSet<String> = {
        ["os", "subprocess"].iter().map(|s| s.to_string()).collect()
    };
}

/// Immutable analysis configuration, threaded into the `Analyzer` at
/// construction time.
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    /// Module names whose import triggers an `UnsafeImport` diagnostic.
    /// Matched against the full dotted name of an `import` alias and the
    /// module of a `from ... import` statement.
    pub banned_imports: HashSet<String>,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            banned_imports: DEFAULT_BANNED_IMPORTS.clone(),
        }
    }
}

impl AnalyzerConfig {
    /// Builds a configuration with a custom disallowed-import set.
    pub fn with_banned_imports<I, S>(imports: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            banned_imports: imports.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_banned_set() {
        let config = AnalyzerConfig::default();
        assert!(config.banned_imports.contains("os"));
        assert!(config.banned_imports.contains("subprocess"));
        assert!(!config.banned_imports.contains("math"));
    }

    #[test]
    fn test_custom_banned_set() {
        let config = AnalyzerConfig::with_banned_imports(["pickle"]);
        assert!(config.banned_imports.contains("pickle"));
        assert!(!config.banned_imports.contains("os"));
    }
}
