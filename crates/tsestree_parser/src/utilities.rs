//! Token classification helpers used by the parser's look-ahead decisions.

use tsestree_ast::TokenKind;

/// Check if a token kind can start a left-hand-side expression.
pub fn is_start_of_left_hand_side_expression(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::NumericLiteral
            | TokenKind::BigIntLiteral
            | TokenKind::StringLiteral
            | TokenKind::NoSubstitutionTemplateLiteral
            | TokenKind::TemplateHead
            | TokenKind::OpenParen
            | TokenKind::OpenBracket
            | TokenKind::OpenBrace
            | TokenKind::FunctionKeyword
            | TokenKind::ClassKeyword
            | TokenKind::NewKeyword
            | TokenKind::Slash
            | TokenKind::SlashEquals
            | TokenKind::ThisKeyword
            | TokenKind::SuperKeyword
            | TokenKind::TrueKeyword
            | TokenKind::FalseKeyword
            | TokenKind::NullKeyword
            | TokenKind::ImportKeyword
            | TokenKind::PrivateIdentifier
            | TokenKind::At
    ) || kind.is_identifier_like()
}

/// Check if a token kind can start an expression.
pub fn is_start_of_expression(kind: TokenKind) -> bool {
    is_start_of_left_hand_side_expression(kind)
        || matches!(
            kind,
            TokenKind::Plus
                | TokenKind::Minus
                | TokenKind::Tilde
                | TokenKind::Exclamation
                | TokenKind::DeleteKeyword
                | TokenKind::TypeOfKeyword
                | TokenKind::VoidKeyword
                | TokenKind::PlusPlus
                | TokenKind::MinusMinus
                | TokenKind::LessThan
                | TokenKind::DotDotDot
        )
}

/// Tokens after which a `yield` has no operand.
pub fn ends_yield_operand(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::CloseParen
            | TokenKind::CloseBracket
            | TokenKind::CloseBrace
            | TokenKind::Comma
            | TokenKind::Semicolon
            | TokenKind::Colon
            | TokenKind::EndOfFile
    ) || !is_start_of_expression(kind)
}

/// Keywords that may begin a class member, property signature or
/// parameter as a modifier.
pub fn is_class_member_modifier(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::PublicKeyword
            | TokenKind::PrivateKeyword
            | TokenKind::ProtectedKeyword
            | TokenKind::StaticKeyword
            | TokenKind::ReadonlyKeyword
            | TokenKind::AbstractKeyword
            | TokenKind::OverrideKeyword
            | TokenKind::DeclareKeyword
            | TokenKind::AccessorKeyword
    )
}

/// Check if a token kind can start a property name.
pub fn is_property_name_start(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::StringLiteral
            | TokenKind::NumericLiteral
            | TokenKind::BigIntLiteral
            | TokenKind::OpenBracket
            | TokenKind::PrivateIdentifier
    ) || kind.is_identifier_or_keyword()
}

/// Keyword types that map straight onto a `TS*Keyword` node.
pub fn keyword_type_kind(kind: TokenKind) -> Option<tsestree_ast::NodeKind> {
    use tsestree_ast::NodeKind;
    let node = match kind {
        TokenKind::AnyKeyword => NodeKind::TSAnyKeyword,
        TokenKind::UnknownKeyword => NodeKind::TSUnknownKeyword,
        TokenKind::NumberKeyword => NodeKind::TSNumberKeyword,
        TokenKind::StringKeyword => NodeKind::TSStringKeyword,
        TokenKind::BooleanKeyword => NodeKind::TSBooleanKeyword,
        TokenKind::BigIntKeyword => NodeKind::TSBigIntKeyword,
        TokenKind::SymbolKeyword => NodeKind::TSSymbolKeyword,
        TokenKind::ObjectKeyword => NodeKind::TSObjectKeyword,
        TokenKind::NeverKeyword => NodeKind::TSNeverKeyword,
        TokenKind::VoidKeyword => NodeKind::TSVoidKeyword,
        TokenKind::UndefinedKeyword => NodeKind::TSUndefinedKeyword,
        TokenKind::NullKeyword => NodeKind::TSNullKeyword,
        TokenKind::IntrinsicKeyword => NodeKind::TSIntrinsicKeyword,
        _ => return None,
    };
    Some(node)
}
