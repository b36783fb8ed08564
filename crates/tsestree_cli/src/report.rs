//! Rendering parse errors as miette diagnostics with a source snippet.

use miette::{Diagnostic, LabeledSpan, NamedSource, Severity, SourceCode, SourceSpan};
use std::fmt;
use std::sync::Arc;
use thiserror::Error;
use tsestree_diagnostics::{DiagnosticCategory, ParseError};

/// One parse diagnostic bound to the file it came from.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct SyntaxReport {
    message: String,
    code: u32,
    category: DiagnosticCategory,
    span: SourceSpan,
    file: NamedSource<Arc<String>>,
}

impl SyntaxReport {
    pub fn new(error: &ParseError, path: &str, source: Arc<String>) -> Self {
        let start = (error.start as usize).min(source.len());
        let end = (error.end as usize).clamp(start, source.len());
        Self {
            message: error.message.clone(),
            code: error.code,
            category: error.category,
            span: SourceSpan::new(start.into(), end - start),
            file: NamedSource::new(path, source),
        }
    }

    pub fn is_error(&self) -> bool {
        self.category == DiagnosticCategory::Error
    }
}

struct Code(u32);

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TS{}", self.0)
    }
}

impl Diagnostic for SyntaxReport {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(Code(self.code)))
    }

    fn severity(&self) -> Option<Severity> {
        Some(match self.category {
            DiagnosticCategory::Error => Severity::Error,
            DiagnosticCategory::Warning => Severity::Warning,
            DiagnosticCategory::Message => Severity::Advice,
        })
    }

    fn source_code(&self) -> Option<&dyn SourceCode> {
        Some(&self.file)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let label = LabeledSpan::new_with_span(Some("here".to_string()), self.span);
        Some(Box::new(std::iter::once(label)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tsestree_parser::{parse, ParseOptions};

    fn reports(source: &str) -> Vec<SyntaxReport> {
        let shared = Arc::new(source.to_string());
        parse(source, &ParseOptions::default())
            .errors
            .iter()
            .map(|error| SyntaxReport::new(error, "input.ts", Arc::clone(&shared)))
            .collect()
    }

    #[test]
    fn test_report_carries_code_and_span() {
        let reports = reports("let x = ;");
        assert_eq!(reports.len(), 1);
        let report = &reports[0];
        assert!(report.is_error());
        assert_eq!(report.code().unwrap().to_string(), "TS1109");
        assert_eq!(report.to_string(), "Expression expected.");
        assert_eq!(report.span.offset(), 8);
        assert_eq!(report.span.len(), 1);
    }

    #[test]
    fn test_end_of_input_label_stays_in_bounds() {
        let source = "let x =";
        let reports = reports(source);
        let report = &reports[0];
        assert_eq!(report.span.offset(), source.len());
        assert_eq!(report.span.len(), 0);
    }

    #[test]
    fn test_warning_severity() {
        let reports = reports("x = 017;");
        assert_eq!(reports[0].severity(), Some(Severity::Warning));
        assert!(!reports[0].is_error());
    }
}
