//! tsestree_parser: recursive descent parser for TypeScript and JavaScript
//! producing an ESTree-shaped tree.
//!
//! ```
//! use tsestree_parser::{parse, ParseOptions};
//!
//! let output = parse("let x: number = 1;", &ParseOptions::default());
//! assert!(output.errors.is_empty());
//! assert_eq!(output.program.body.len(), 1);
//! ```

mod context;
mod declaration;
mod expression;
mod jsx;
mod module;
mod options;
mod parser;
mod pattern;
mod precedence;
mod recovery;
mod statement;
mod typescript;
mod utilities;

pub use options::ParseOptions;
pub use parser::Parser;

use tsestree_ast::Program;
use tsestree_diagnostics::{DiagnosticCategory, ParseError};

/// The tree and every diagnostic reported while building it.
#[derive(Debug)]
pub struct ParseOutput {
    pub program: Program,
    /// Sorted by position.
    pub errors: Vec<ParseError>,
    pub(crate) allow_invalid_ast: bool,
}

impl ParseOutput {
    /// The first error, if any error-category diagnostic was reported.
    pub fn first_error(&self) -> Option<&ParseError> {
        self.errors
            .iter()
            .find(|error| error.category == DiagnosticCategory::Error)
    }

    /// The program, or the first error unless invalid trees were allowed.
    /// Warnings never fail the parse.
    pub fn into_result(self) -> Result<Program, ParseError> {
        if self.allow_invalid_ast {
            return Ok(self.program);
        }
        match self
            .errors
            .into_iter()
            .find(|error| error.category == DiagnosticCategory::Error)
        {
            Some(error) => Err(error),
            None => Ok(self.program),
        }
    }
}

/// Parse `source`. Always produces a tree; syntax errors are collected on
/// the output.
pub fn parse(source: &str, options: &ParseOptions) -> ParseOutput {
    Parser::new(source, options).parse()
}

/// Parse `source`, failing on the first syntax error unless
/// `allow_invalid_ast` is set.
pub fn parse_program(source: &str, options: &ParseOptions) -> Result<Program, ParseError> {
    parse(source, options).into_result()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_program_reports_first_error() {
        let error = parse_program("let = ;\nlet y = ;", &ParseOptions::default()).unwrap_err();
        assert_eq!(error.line, 1);
    }

    #[test]
    fn test_allow_invalid_ast() {
        let options = ParseOptions {
            allow_invalid_ast: true,
            ..ParseOptions::default()
        };
        let program = parse_program("const x = ; const y = 1;", &options).unwrap();
        assert_eq!(program.body.len(), 1);
    }

    #[test]
    fn test_warnings_do_not_fail() {
        let output = parse("x = 017;", &ParseOptions::default());
        assert_eq!(output.errors.len(), 1);
        assert!(output.first_error().is_none());
        assert!(output.into_result().is_ok());
    }
}
