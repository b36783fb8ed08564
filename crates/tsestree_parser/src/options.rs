//! Parse options, loadable from JSON with the same camelCase keys that
//! ESTree consumers pass to `parse`.

use serde::Deserialize;
use std::path::Path;
use tsestree_ast::SourceType;

/// Options controlling what the parser accepts and what it records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParseOptions {
    /// `script` or `module`. Module code allows top-level `await`.
    pub source_type: SourceType,
    /// Attach `loc` (line/column) to every node.
    pub loc: bool,
    /// Attach `range` (byte offsets) to every node.
    pub range: bool,
    /// Collect comments onto `Program.comments`.
    pub comment: bool,
    /// Collect the token stream onto `Program.tokens`.
    pub tokens: bool,
    /// Accept JSX syntax. Overridden by the extension of `file_path`.
    pub jsx: bool,
    /// Used only to decide whether JSX is enabled.
    pub file_path: Option<String>,
    /// Return the partial tree even if errors were reported.
    pub allow_invalid_ast: bool,
}

impl ParseOptions {
    /// Load options from a JSON object.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn module() -> Self {
        Self {
            source_type: SourceType::Module,
            ..Self::default()
        }
    }

    /// Whether JSX syntax is accepted for this parse.
    ///
    /// JavaScript files and `.tsx` always allow JSX, TypeScript files never
    /// do; any other path (or none) falls back to the `jsx` flag.
    pub fn jsx_enabled(&self) -> bool {
        let Some(path) = self.file_path.as_deref() else {
            return self.jsx;
        };
        let extension = Path::new(path)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());
        match extension.as_deref() {
            Some("js" | "mjs" | "cjs" | "jsx" | "tsx") => true,
            Some("ts" | "mts" | "cts") => false,
            _ => self.jsx,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = ParseOptions::default();
        assert_eq!(options.source_type, SourceType::Script);
        assert!(!options.loc && !options.range && !options.jsx);
        assert!(!options.jsx_enabled());
    }

    #[test]
    fn test_from_json() {
        let options =
            ParseOptions::from_json(r#"{"sourceType":"module","range":true,"allowInvalidAst":true}"#)
                .unwrap();
        assert_eq!(options.source_type, SourceType::Module);
        assert!(options.range);
        assert!(options.allow_invalid_ast);
        assert!(!options.tokens);
    }

    #[test]
    fn test_from_json_rejects_bad_source_type() {
        assert!(ParseOptions::from_json(r#"{"sourceType":"commonjs"}"#).is_err());
    }

    #[test]
    fn test_jsx_from_file_path() {
        let with_path = |path: &str, jsx: bool| ParseOptions {
            file_path: Some(path.to_string()),
            jsx,
            ..ParseOptions::default()
        };
        assert!(with_path("a.tsx", false).jsx_enabled());
        assert!(with_path("src/a.js", false).jsx_enabled());
        assert!(with_path("a.cjs", false).jsx_enabled());
        assert!(!with_path("a.ts", true).jsx_enabled());
        assert!(!with_path("types/a.d.ts", true).jsx_enabled());
        assert!(!with_path("a.mts", true).jsx_enabled());
        assert!(with_path("a.vue", true).jsx_enabled());
        assert!(!with_path("README", false).jsx_enabled());
    }
}
