//! Operator precedence for binary operators.

use tsestree_ast::TokenKind;

/// Binary operator precedence levels, lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum OperatorPrecedence {
    /// Below every binary operator: where a climb starts.
    Lowest = 0,
    NullishCoalescing = 1,
    LogicalOr = 2,
    LogicalAnd = 3,
    BitwiseOr = 4,
    BitwiseXor = 5,
    BitwiseAnd = 6,
    Equality = 7,
    Relational = 8,
    Shift = 9,
    Additive = 10,
    Multiplicative = 11,
    Exponentiation = 12,
    Invalid = 255,
}

impl OperatorPrecedence {
    #[inline]
    pub fn is_valid(self) -> bool {
        self != OperatorPrecedence::Invalid
    }
}

/// The binary precedence of a token, or `Invalid` if it is not a binary
/// operator. `as` and `satisfies` bind like relational operators.
pub fn get_binary_operator_precedence(kind: TokenKind) -> OperatorPrecedence {
    match kind {
        TokenKind::QuestionQuestion => OperatorPrecedence::NullishCoalescing,
        TokenKind::BarBar => OperatorPrecedence::LogicalOr,
        TokenKind::AmpersandAmpersand => OperatorPrecedence::LogicalAnd,
        TokenKind::Bar => OperatorPrecedence::BitwiseOr,
        TokenKind::Caret => OperatorPrecedence::BitwiseXor,
        TokenKind::Ampersand => OperatorPrecedence::BitwiseAnd,
        TokenKind::EqualsEquals
        | TokenKind::ExclamationEquals
        | TokenKind::EqualsEqualsEquals
        | TokenKind::ExclamationEqualsEquals => OperatorPrecedence::Equality,
        TokenKind::LessThan
        | TokenKind::GreaterThan
        | TokenKind::LessThanEquals
        | TokenKind::GreaterThanEquals
        | TokenKind::InstanceOfKeyword
        | TokenKind::InKeyword
        | TokenKind::AsKeyword
        | TokenKind::SatisfiesKeyword => OperatorPrecedence::Relational,
        TokenKind::LessThanLessThan
        | TokenKind::GreaterThanGreaterThan
        | TokenKind::GreaterThanGreaterThanGreaterThan => OperatorPrecedence::Shift,
        TokenKind::Plus | TokenKind::Minus => OperatorPrecedence::Additive,
        TokenKind::Asterisk | TokenKind::Slash | TokenKind::Percent => {
            OperatorPrecedence::Multiplicative
        }
        TokenKind::AsteriskAsterisk => OperatorPrecedence::Exponentiation,
        _ => OperatorPrecedence::Invalid,
    }
}

/// Whether the operator produces a `LogicalExpression`.
#[inline]
pub fn is_logical_operator(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::AmpersandAmpersand | TokenKind::BarBar | TokenKind::QuestionQuestion
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering() {
        use OperatorPrecedence::*;
        assert!(Multiplicative > Additive);
        assert!(Additive > Shift);
        assert!(LogicalAnd > LogicalOr);
        assert!(LogicalOr > NullishCoalescing);
        assert!(Exponentiation > Multiplicative);
        assert!(Lowest < NullishCoalescing);
        assert!(BitwiseAnd > BitwiseXor && BitwiseXor > BitwiseOr);
    }

    #[test]
    fn test_binary_precedence() {
        assert_eq!(get_binary_operator_precedence(TokenKind::Asterisk), OperatorPrecedence::Multiplicative);
        assert_eq!(get_binary_operator_precedence(TokenKind::InKeyword), OperatorPrecedence::Relational);
        assert_eq!(get_binary_operator_precedence(TokenKind::AsKeyword), OperatorPrecedence::Relational);
        assert_eq!(get_binary_operator_precedence(TokenKind::Equals), OperatorPrecedence::Invalid);
        assert!(!get_binary_operator_precedence(TokenKind::Comma).is_valid());
    }

    #[test]
    fn test_logical_operators() {
        assert!(is_logical_operator(TokenKind::QuestionQuestion));
        assert!(!is_logical_operator(TokenKind::Bar));
    }
}
