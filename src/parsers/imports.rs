//! Import statement extraction
//!
//! Pulls top-level module names out of Python source text. The default
//! extractor is a pair of line-anchored regular expressions. It misses
//! indented, multi-line, conditional and dynamic imports. Anything that needs
//! better fidelity can implement [`ImportExtractor`] and be handed to the
//! generator instead.

use regex::Regex;
use std::sync::LazyLock;

/// Something that can find referenced modules in a file's text
pub trait ImportExtractor {
    /// Return the top-level module of every import found in `text`.
    ///
    /// The result may contain duplicates.
    fn extract(&self, text: &str) -> Vec<String>;
}

static PY_IMPORT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^import\s+([a-zA-Z_][a-zA-Z0-9_]*(?:\.[a-zA-Z_][a-zA-Z0-9_]*)*)").unwrap()
});

static PY_FROM_IMPORT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^from\s+([a-zA-Z_][a-zA-Z0-9_]*(?:\.[a-zA-Z_][a-zA-Z0-9_]*)*)\s+import")
        .unwrap()
});

/// Regex-based extractor for `import x` and `from x import y` at line start
#[derive(Debug, Clone, Copy, Default)]
pub struct RegexImportExtractor;

impl RegexImportExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl ImportExtractor for RegexImportExtractor {
    fn extract(&self, text: &str) -> Vec<String> {
        let mut modules = Vec::new();

        for pattern in [&*PY_IMPORT, &*PY_FROM_IMPORT] {
            for captures in pattern.captures_iter(text) {
                if let Some(path) = captures.get(1) {
                    modules.push(top_level_module(path.as_str()).to_string());
                }
            }
        }

        modules
    }
}

/// First dot-separated segment of a dotted module path
pub fn top_level_module(dotted: &str) -> &str {
    dotted.split('.').next().unwrap_or(dotted)
}
