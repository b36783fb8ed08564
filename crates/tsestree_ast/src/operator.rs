//! Operator enums for expression nodes.
//!
//! Each operator serializes as its source text (`"+"`, `"instanceof"`, ...) and
//! maps one-to-one onto the [`TokenKind`] that spells it.

use crate::token_kind::TokenKind;
use serde::{Serialize, Serializer};

macro_rules! operator {
    ($(#[$doc:meta])* $name:ident { $($variant:ident = $text:literal => $token:ident,)* }) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant,)*
        }

        impl $name {
            pub fn from_token(kind: TokenKind) -> Option<Self> {
                match kind {
                    $(TokenKind::$token => Some($name::$variant),)*
                    _ => None,
                }
            }

            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $text,)*
                }
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

operator! {
    /// Operators of an `AssignmentExpression`.
    AssignmentOperator {
        Assign = "=" => Equals,
        Addition = "+=" => PlusEquals,
        Subtraction = "-=" => MinusEquals,
        Multiplication = "*=" => AsteriskEquals,
        Exponential = "**=" => AsteriskAsteriskEquals,
        Division = "/=" => SlashEquals,
        Remainder = "%=" => PercentEquals,
        ShiftLeft = "<<=" => LessThanLessThanEquals,
        ShiftRight = ">>=" => GreaterThanGreaterThanEquals,
        ShiftRightZeroFill = ">>>=" => GreaterThanGreaterThanGreaterThanEquals,
        BitwiseAnd = "&=" => AmpersandEquals,
        BitwiseOr = "|=" => BarEquals,
        BitwiseXor = "^=" => CaretEquals,
        LogicalOr = "||=" => BarBarEquals,
        LogicalAnd = "&&=" => AmpersandAmpersandEquals,
        LogicalNullish = "??=" => QuestionQuestionEquals,
    }
}

operator! {
    /// Operators of a `BinaryExpression`.
    BinaryOperator {
        Equality = "==" => EqualsEquals,
        Inequality = "!=" => ExclamationEquals,
        StrictEquality = "===" => EqualsEqualsEquals,
        StrictInequality = "!==" => ExclamationEqualsEquals,
        LessThan = "<" => LessThan,
        LessEqualThan = "<=" => LessThanEquals,
        GreaterThan = ">" => GreaterThan,
        GreaterEqualThan = ">=" => GreaterThanEquals,
        ShiftLeft = "<<" => LessThanLessThan,
        ShiftRight = ">>" => GreaterThanGreaterThan,
        ShiftRightZeroFill = ">>>" => GreaterThanGreaterThanGreaterThan,
        Addition = "+" => Plus,
        Subtraction = "-" => Minus,
        Multiplication = "*" => Asterisk,
        Division = "/" => Slash,
        Remainder = "%" => Percent,
        Exponential = "**" => AsteriskAsterisk,
        BitwiseOr = "|" => Bar,
        BitwiseXor = "^" => Caret,
        BitwiseAnd = "&" => Ampersand,
        In = "in" => InKeyword,
        Instanceof = "instanceof" => InstanceOfKeyword,
    }
}

operator! {
    /// Operators of a `LogicalExpression`.
    LogicalOperator {
        Or = "||" => BarBar,
        And = "&&" => AmpersandAmpersand,
        Coalesce = "??" => QuestionQuestion,
    }
}

operator! {
    /// Prefix operators of a `UnaryExpression`.
    UnaryOperator {
        Minus = "-" => Minus,
        Plus = "+" => Plus,
        LogicalNot = "!" => Exclamation,
        BitwiseNot = "~" => Tilde,
        Typeof = "typeof" => TypeOfKeyword,
        Void = "void" => VoidKeyword,
        Delete = "delete" => DeleteKeyword,
    }
}

operator! {
    /// Operators of an `UpdateExpression`.
    UpdateOperator {
        Increment = "++" => PlusPlus,
        Decrement = "--" => MinusMinus,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_token() {
        assert_eq!(BinaryOperator::from_token(TokenKind::InKeyword), Some(BinaryOperator::In));
        assert_eq!(BinaryOperator::from_token(TokenKind::BarBar), None);
        assert_eq!(LogicalOperator::from_token(TokenKind::QuestionQuestion), Some(LogicalOperator::Coalesce));
        assert_eq!(AssignmentOperator::from_token(TokenKind::Equals).map(|op| op.as_str()), Some("="));
        assert_eq!(UnaryOperator::Typeof.to_string(), "typeof");
    }

    #[test]
    fn test_serializes_as_text() {
        let json = serde_json::to_string(&AssignmentOperator::ShiftRightZeroFill).unwrap();
        assert_eq!(json, "\">>>=\"");
    }
}
