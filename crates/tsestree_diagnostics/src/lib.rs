//! tsestree_diagnostics: Diagnostic messages and parse error reporting.
//!
//! Messages follow TypeScript's `diagnosticMessages.json` numbering so that
//! downstream tooling can match them against `tsc` output. A [`ParseError`]
//! is a realized message with the source position it was reported at.

use std::fmt;
use thiserror::Error;

/// Diagnostic category, matching TypeScript's DiagnosticCategory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticCategory {
    Warning,
    Error,
    Message,
}

impl fmt::Display for DiagnosticCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticCategory::Warning => write!(f, "warning"),
            DiagnosticCategory::Error => write!(f, "error"),
            DiagnosticCategory::Message => write!(f, "message"),
        }
    }
}

/// A diagnostic message template with a code and category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticMessage {
    /// The diagnostic code (e.g., 1005).
    pub code: u32,
    /// The category of this diagnostic.
    pub category: DiagnosticCategory,
    /// The message template string. May contain `{0}`, `{1}`, etc. placeholders.
    pub message: &'static str,
}

/// Format a diagnostic message template by replacing `{0}`, `{1}`, etc. with arguments.
pub fn format_message(template: &str, args: &[&str]) -> String {
    let mut result = template.to_string();
    for (i, arg) in args.iter().enumerate() {
        result = result.replace(&format!("{{{}}}", i), arg);
    }
    result
}

/// A lexical or syntactic error with its source position.
///
/// `line` is 1-based and `column` is 0-based, matching the ESTree `loc`
/// convention; `start`/`end` are byte offsets into the source.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{line}:{column} - {category} TS{code}: {message}")]
pub struct ParseError {
    pub message: String,
    pub code: u32,
    pub category: DiagnosticCategory,
    pub start: u32,
    pub end: u32,
    pub line: u32,
    pub column: u32,
}

impl ParseError {
    pub fn new(
        message: &DiagnosticMessage,
        args: &[&str],
        start: u32,
        end: u32,
        line: u32,
        column: u32,
    ) -> Self {
        Self {
            message: format_message(message.message, args),
            code: message.code,
            category: message.category,
            start,
            end,
            line,
            column,
        }
    }

    /// The byte offset the error was reported at.
    #[inline]
    pub fn offset(&self) -> u32 {
        self.start
    }

    /// The length of the offending source span (at least one byte wide
    /// unless the error is at end of input).
    #[inline]
    pub fn len(&self) -> u32 {
        self.end - self.start
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

// ============================================================================
// Diagnostic Messages
// ============================================================================

pub mod messages {
    use super::*;

    macro_rules! diag {
        ($code:expr, Error, $msg:expr) => {
            DiagnosticMessage { code: $code, category: DiagnosticCategory::Error, message: $msg }
        };
        ($code:expr, Warning, $msg:expr) => {
            DiagnosticMessage { code: $code, category: DiagnosticCategory::Warning, message: $msg }
        };
    }

    // ========================================================================
    // Scanner errors
    // ========================================================================
    pub static UNTERMINATED_STRING_LITERAL: DiagnosticMessage = diag!(1002, Error, "Unterminated string literal.");
    pub static ASTERISK_SLASH_EXPECTED: DiagnosticMessage = diag!(1010, Error, "'*/' expected.");
    pub static DIGIT_EXPECTED: DiagnosticMessage = diag!(1124, Error, "Digit expected.");
    pub static HEXADECIMAL_DIGIT_EXPECTED: DiagnosticMessage = diag!(1125, Error, "Hexadecimal digit expected.");
    pub static UNEXPECTED_END_OF_TEXT: DiagnosticMessage = diag!(1126, Error, "Unexpected end of text.");
    pub static INVALID_CHARACTER: DiagnosticMessage = diag!(1127, Error, "Invalid character.");
    pub static UNTERMINATED_TEMPLATE_LITERAL: DiagnosticMessage = diag!(1160, Error, "Unterminated template literal.");
    pub static UNTERMINATED_REGULAR_EXPRESSION_LITERAL: DiagnosticMessage = diag!(1161, Error, "Unterminated regular expression literal.");
    pub static BINARY_DIGIT_EXPECTED: DiagnosticMessage = diag!(1177, Error, "Binary digit expected.");
    pub static OCTAL_DIGIT_EXPECTED: DiagnosticMessage = diag!(1178, Error, "Octal digit expected.");
    pub static AN_IDENTIFIER_OR_KEYWORD_CANNOT_IMMEDIATELY_FOLLOW_A_NUMERIC_LITERAL: DiagnosticMessage = diag!(1351, Error, "An identifier or keyword cannot immediately follow a numeric literal.");
    pub static A_BIGINT_LITERAL_MUST_BE_AN_INTEGER: DiagnosticMessage = diag!(1353, Error, "A bigint literal must be an integer.");
    pub static NUMERIC_SEPARATORS_ARE_NOT_ALLOWED_HERE: DiagnosticMessage = diag!(6188, Error, "Numeric separators are not allowed here.");
    pub static MULTIPLE_CONSECUTIVE_NUMERIC_SEPARATORS_ARE_NOT_PERMITTED: DiagnosticMessage = diag!(6189, Error, "Multiple consecutive numeric separators are not permitted.");
    pub static UNTERMINATED_JSX_CONTENTS: DiagnosticMessage = diag!(17014, Error, "JSX fragment has no corresponding closing tag.");

    // ========================================================================
    // Parser errors
    // ========================================================================
    pub static IDENTIFIER_EXPECTED: DiagnosticMessage = diag!(1003, Error, "Identifier expected.");
    pub static _0_EXPECTED: DiagnosticMessage = diag!(1005, Error, "'{0}' expected.");
    pub static TRAILING_COMMA_NOT_ALLOWED: DiagnosticMessage = diag!(1009, Error, "Trailing comma not allowed.");
    pub static UNEXPECTED_TOKEN: DiagnosticMessage = diag!(1012, Error, "Unexpected token.");
    pub static A_REST_PARAMETER_MUST_BE_LAST: DiagnosticMessage = diag!(1014, Error, "A rest parameter must be last in a parameter list.");
    pub static _0_MODIFIER_ALREADY_SEEN: DiagnosticMessage = diag!(1030, Error, "'{0}' modifier already seen.");
    pub static SUPER_MUST_BE_FOLLOWED_BY_AN_ARGUMENT_LIST_OR_MEMBER_ACCESS: DiagnosticMessage = diag!(1034, Error, "'super' must be followed by an argument list or member access.");
    pub static A_SET_ACCESSOR_MUST_HAVE_EXACTLY_ONE_PARAMETER: DiagnosticMessage = diag!(1049, Error, "A 'set' accessor must have exactly one parameter.");
    pub static A_GET_ACCESSOR_CANNOT_HAVE_PARAMETERS: DiagnosticMessage = diag!(1054, Error, "A 'get' accessor cannot have parameters.");
    pub static UNEXPECTED_TOKEN_A_CONSTRUCTOR_METHOD_ACCESSOR_OR_PROPERTY_WAS_EXPECTED: DiagnosticMessage = diag!(1068, Error, "Unexpected token. A constructor, method, accessor, or property was expected.");
    pub static ONLY_A_SINGLE_VARIABLE_DECLARATION_IS_ALLOWED_IN_A_FOR_IN_STATEMENT: DiagnosticMessage = diag!(1091, Error, "Only a single variable declaration is allowed in a 'for...in' statement.");
    pub static A_CONTINUE_STATEMENT_CAN_ONLY_BE_USED_WITHIN_AN_ENCLOSING_ITERATION_STATEMENT: DiagnosticMessage = diag!(1104, Error, "A 'continue' statement can only be used within an enclosing iteration statement.");
    pub static A_BREAK_STATEMENT_CAN_ONLY_BE_USED_WITHIN_AN_ENCLOSING_ITERATION_OR_SWITCH_STATEMENT: DiagnosticMessage = diag!(1105, Error, "A 'break' statement can only be used within an enclosing iteration statement or a switch statement.");
    pub static A_RETURN_STATEMENT_CAN_ONLY_BE_USED_WITHIN_A_FUNCTION_BODY: DiagnosticMessage = diag!(1108, Error, "A 'return' statement can only be used within a function body.");
    pub static EXPRESSION_EXPECTED: DiagnosticMessage = diag!(1109, Error, "Expression expected.");
    pub static TYPE_EXPECTED: DiagnosticMessage = diag!(1110, Error, "Type expected.");
    pub static A_DEFAULT_CLAUSE_CANNOT_APPEAR_MORE_THAN_ONCE_IN_A_SWITCH_STATEMENT: DiagnosticMessage = diag!(1113, Error, "A 'default' clause cannot appear more than once in a 'switch' statement.");
    pub static DUPLICATE_LABEL_0: DiagnosticMessage = diag!(1114, Error, "Duplicate label '{0}'.");
    pub static A_CONTINUE_STATEMENT_CAN_ONLY_JUMP_TO_AN_ENCLOSING_ITERATION_STATEMENT: DiagnosticMessage = diag!(1115, Error, "A 'continue' statement can only jump to a label of an enclosing iteration statement.");
    pub static FOR_AWAIT_LOOPS_ARE_ONLY_ALLOWED_WITHIN_ASYNC_FUNCTIONS: DiagnosticMessage = diag!(1103, Error, "'for await' loops are only allowed within async functions and at the top levels of modules.");
    pub static A_BREAK_STATEMENT_CAN_ONLY_JUMP_TO_AN_ENCLOSING_STATEMENT: DiagnosticMessage = diag!(1116, Error, "A 'break' statement can only jump to a label of an enclosing statement.");
    pub static DECLARATION_OR_STATEMENT_EXPECTED: DiagnosticMessage = diag!(1128, Error, "Declaration or statement expected.");
    pub static CASE_OR_DEFAULT_EXPECTED: DiagnosticMessage = diag!(1130, Error, "'case' or 'default' expected.");
    pub static PROPERTY_OR_SIGNATURE_EXPECTED: DiagnosticMessage = diag!(1131, Error, "Property or signature expected.");
    pub static ENUM_MEMBER_EXPECTED: DiagnosticMessage = diag!(1132, Error, "Enum member expected.");
    pub static VARIABLE_DECLARATION_EXPECTED: DiagnosticMessage = diag!(1134, Error, "Variable declaration expected.");
    pub static ARGUMENT_EXPRESSION_EXPECTED: DiagnosticMessage = diag!(1135, Error, "Argument expression expected.");
    pub static PROPERTY_ASSIGNMENT_EXPECTED: DiagnosticMessage = diag!(1136, Error, "Property assignment expected.");
    pub static PARAMETER_DECLARATION_EXPECTED: DiagnosticMessage = diag!(1138, Error, "Parameter declaration expected.");
    pub static TYPE_PARAMETER_DECLARATION_EXPECTED: DiagnosticMessage = diag!(1139, Error, "Type parameter declaration expected.");
    pub static STRING_LITERAL_EXPECTED: DiagnosticMessage = diag!(1141, Error, "String literal expected.");
    pub static LINE_BREAK_NOT_PERMITTED_HERE: DiagnosticMessage = diag!(1142, Error, "Line break not permitted here.");
    pub static CONST_DECLARATIONS_MUST_BE_INITIALIZED: DiagnosticMessage = diag!(1155, Error, "'const' declarations must be initialized.");
    pub static CLASSES_CAN_ONLY_EXTEND_A_SINGLE_CLASS: DiagnosticMessage = diag!(1174, Error, "Classes can only extend a single class.");
    pub static ONLY_A_SINGLE_VARIABLE_DECLARATION_IS_ALLOWED_IN_A_FOR_OF_STATEMENT: DiagnosticMessage = diag!(1188, Error, "Only a single variable declaration is allowed in a 'for...of' statement.");
    pub static THE_VARIABLE_DECLARATION_OF_A_FOR_IN_STATEMENT_CANNOT_HAVE_AN_INITIALIZER: DiagnosticMessage = diag!(1189, Error, "The variable declaration of a 'for...in' statement cannot have an initializer.");
    pub static THE_VARIABLE_DECLARATION_OF_A_FOR_OF_STATEMENT_CANNOT_HAVE_AN_INITIALIZER: DiagnosticMessage = diag!(1190, Error, "The variable declaration of a 'for...of' statement cannot have an initializer.");
    pub static AN_EXTENDED_UNICODE_ESCAPE_VALUE_MUST_BE_BETWEEN_0X0_AND_0X10FFFF: DiagnosticMessage = diag!(1198, Error, "An extended Unicode escape value must be between 0x0 and 0x10FFFF inclusive.");
    pub static LINE_TERMINATOR_NOT_PERMITTED_BEFORE_ARROW: DiagnosticMessage = diag!(1200, Error, "Line terminator not permitted before arrow.");
    pub static DECORATORS_ARE_NOT_VALID_HERE: DiagnosticMessage = diag!(1206, Error, "Decorators are not valid here.");
    pub static TAGGED_TEMPLATE_EXPRESSIONS_ARE_NOT_PERMITTED_IN_AN_OPTIONAL_CHAIN: DiagnosticMessage = diag!(1358, Error, "Tagged template expressions are not permitted in an optional chain.");
    pub static CATCH_OR_FINALLY_EXPECTED: DiagnosticMessage = diag!(1472, Error, "'catch' or 'finally' expected.");
    pub static A_REST_ELEMENT_MUST_BE_LAST_IN_A_DESTRUCTURING_PATTERN: DiagnosticMessage = diag!(2462, Error, "A rest element must be last in a destructuring pattern.");
    pub static THE_LEFT_HAND_SIDE_OF_AN_ASSIGNMENT_EXPRESSION_MUST_BE_A_VARIABLE_OR_A_PROPERTY_ACCESS: DiagnosticMessage = diag!(2364, Error, "The left-hand side of an assignment expression must be a variable or a property access.");
    pub static THE_OPERAND_OF_AN_INCREMENT_OR_DECREMENT_OPERATOR_MUST_BE_A_VARIABLE_OR_A_PROPERTY_ACCESS: DiagnosticMessage = diag!(2357, Error, "The operand of an increment or decrement operator must be a variable or a property access.");
    pub static THE_LEFT_HAND_SIDE_OF_A_FOR_IN_STATEMENT_MUST_BE_A_VARIABLE_OR_A_PROPERTY_ACCESS: DiagnosticMessage = diag!(2406, Error, "The left-hand side of a 'for...in' statement must be a variable or a property access.");
    pub static THE_LEFT_HAND_SIDE_OF_A_FOR_OF_STATEMENT_MUST_BE_A_VARIABLE_OR_A_PROPERTY_ACCESS: DiagnosticMessage = diag!(2487, Error, "The left-hand side of a 'for...of' statement must be a variable or a property access.");
    pub static EXPECTED_CORRESPONDING_JSX_CLOSING_TAG_FOR_0: DiagnosticMessage = diag!(17002, Error, "Expected corresponding JSX closing tag for '{0}'.");
    pub static JSX_ELEMENT_0_HAS_NO_CORRESPONDING_CLOSING_TAG: DiagnosticMessage = diag!(17008, Error, "JSX element '{0}' has no corresponding closing tag.");
    pub static EXPECTED_CORRESPONDING_CLOSING_TAG_FOR_JSX_FRAGMENT: DiagnosticMessage = diag!(17015, Error, "Expected corresponding closing tag for JSX fragment.");
    pub static PRIVATE_IDENTIFIERS_ARE_NOT_ALLOWED_OUTSIDE_CLASS_BODIES: DiagnosticMessage = diag!(18016, Error, "Private identifiers are not allowed outside class bodies.");
    pub static ESCAPE_SEQUENCE_0_IS_NOT_ALLOWED: DiagnosticMessage = diag!(1488, Error, "Escape sequence '{0}' is not allowed.");
    pub static MAXIMUM_NESTING_DEPTH_EXCEEDED: DiagnosticMessage = diag!(9001, Error, "Maximum nesting depth exceeded.");

    // ========================================================================
    // Warnings
    // ========================================================================
    pub static OCTAL_LITERALS_ARE_DEPRECATED: DiagnosticMessage = diag!(1085, Warning, "Octal literals are not allowed. Use the syntax '{0}'.");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_message() {
        assert_eq!(format_message("'{0}' expected.", &[";"]), "';' expected.");
        assert_eq!(format_message("{0} and {1}", &["a", "b"]), "a and b");
        assert_eq!(format_message("no placeholders", &["x"]), "no placeholders");
    }

    #[test]
    fn test_parse_error_display() {
        let err = ParseError::new(&messages::_0_EXPECTED, &[")"], 10, 11, 2, 4);
        assert_eq!(err.message, "')' expected.");
        assert_eq!(err.code, 1005);
        assert_eq!(err.to_string(), "2:4 - error TS1005: ')' expected.");
        assert_eq!(err.offset(), 10);
        assert_eq!(err.len(), 1);
    }

    #[test]
    fn test_parse_error_is_std_error() {
        let err: Box<dyn std::error::Error> =
            Box::new(ParseError::new(&messages::EXPRESSION_EXPECTED, &[], 0, 0, 1, 0));
        assert!(err.to_string().contains("Expression expected."));
    }
}
