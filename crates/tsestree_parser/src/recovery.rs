//! Error recovery: after a failed statement, skip to the next statement
//! boundary so one malformed statement does not abort the whole list.

use tracing::debug;
use tsestree_ast::TokenKind;
use tsestree_diagnostics::ParseError;

use crate::parser::Parser;

/// Tokens that commonly begin a new statement; recovery stops in front of
/// them.
pub(crate) fn is_statement_boundary(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::ClassKeyword
            | TokenKind::FunctionKeyword
            | TokenKind::VarKeyword
            | TokenKind::LetKeyword
            | TokenKind::ConstKeyword
            | TokenKind::ForKeyword
            | TokenKind::IfKeyword
            | TokenKind::WhileKeyword
            | TokenKind::DoKeyword
            | TokenKind::SwitchKeyword
            | TokenKind::ReturnKeyword
            | TokenKind::TryKeyword
            | TokenKind::ThrowKeyword
            | TokenKind::BreakKeyword
            | TokenKind::ContinueKeyword
            | TokenKind::ImportKeyword
            | TokenKind::ExportKeyword
            | TokenKind::InterfaceKeyword
            | TokenKind::TypeKeyword
            | TokenKind::EnumKeyword
    )
}

/// Tokens that may begin a class member after a line break.
fn is_class_member_boundary(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::OpenBracket | TokenKind::PrivateIdentifier | TokenKind::At | TokenKind::Asterisk
    ) || kind.is_identifier_or_keyword()
}

impl<'a> Parser<'a> {
    /// Record `error` for the statement that began at `start` and skip to
    /// the next statement boundary.
    pub(crate) fn recover_statement(&mut self, error: ParseError, start: u32) {
        self.errors.push(error);
        let skipped = self.synchronize(start, |p| {
            matches!(p.kind(), TokenKind::CloseBrace) || is_statement_boundary(p.kind())
        });
        debug!(at = start, resumed = self.start(), skipped, "statement recovery");
    }

    /// Record `error` for the class member that began at `start` and skip to
    /// the next member.
    pub(crate) fn recover_class_member(&mut self, error: ParseError, start: u32) {
        self.errors.push(error);
        let skipped = self.synchronize(start, |p| {
            p.at(TokenKind::CloseBrace) || (p.has_line_break() && is_class_member_boundary(p.kind()))
        });
        debug!(at = start, resumed = self.start(), skipped, "class member recovery");
    }

    /// Skip tokens until a `;` has been consumed or `stop` holds. The cursor
    /// always moves past `start`, so a recovering loop cannot spin in place.
    /// Returns the number of tokens skipped.
    fn synchronize(&mut self, start: u32, stop: impl Fn(&Self) -> bool) -> usize {
        let mut skipped = 0;
        if self.start() == start && !self.at(TokenKind::EndOfFile) {
            let was_semicolon = self.at(TokenKind::Semicolon);
            self.bump();
            skipped += 1;
            if was_semicolon {
                return skipped;
            }
        }
        while !self.at(TokenKind::EndOfFile) {
            if self.at(TokenKind::Semicolon) {
                self.bump();
                skipped += 1;
                break;
            }
            if stop(self) {
                break;
            }
            self.bump();
            skipped += 1;
        }
        skipped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::ParseOptions;

    #[test]
    fn test_statement_boundaries() {
        assert!(is_statement_boundary(TokenKind::ConstKeyword));
        assert!(is_statement_boundary(TokenKind::InterfaceKeyword));
        assert!(!is_statement_boundary(TokenKind::Identifier));
        assert!(!is_statement_boundary(TokenKind::Semicolon));
    }

    #[test]
    fn test_synchronize_always_advances() {
        let options = ParseOptions::default();
        let mut parser = Parser::new("if", &options);
        parser.bump();
        let start = parser.start();
        // `if` is itself a boundary: the first token is skipped regardless.
        let skipped = parser.synchronize(start, |p| is_statement_boundary(p.kind()));
        assert_eq!(skipped, 1);
        assert!(parser.at(TokenKind::EndOfFile));
    }

    #[test]
    fn test_synchronize_consumes_semicolon() {
        let options = ParseOptions::default();
        let mut parser = Parser::new("a b ; c", &options);
        parser.bump();
        let skipped = parser.synchronize(u32::MAX, |_| false);
        assert_eq!(skipped, 3);
        assert_eq!(parser.token.text, "c");
    }
}
