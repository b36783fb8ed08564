//! TokenKind enum - every lexical token kind produced by the scanner.
//!
//! The ordering of variants is significant: keyword and punctuation ranges are
//! checked with discriminant comparisons.

use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;

/// The kind of a lexical token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum TokenKind {
    // ========================================================================
    // Special
    // ========================================================================
    EndOfFile,
    /// An unrecognized or malformed lexeme.
    Illegal,

    // Comments (only produced when the scanner does not skip them)
    SingleLineComment,
    MultiLineComment,

    // ========================================================================
    // Literals
    // ========================================================================
    NumericLiteral,
    BigIntLiteral,
    StringLiteral,
    RegularExpressionLiteral,
    NoSubstitutionTemplateLiteral,
    TemplateHead,
    TemplateMiddle,
    TemplateTail,
    JsxText,

    // ========================================================================
    // Punctuation
    // ========================================================================
    OpenBrace,
    CloseBrace,
    OpenParen,
    CloseParen,
    OpenBracket,
    CloseBracket,
    Dot,
    DotDotDot,
    Semicolon,
    Comma,
    QuestionDot,
    LessThan,
    LessThanSlash,
    GreaterThan,
    LessThanEquals,
    GreaterThanEquals,
    EqualsEquals,
    ExclamationEquals,
    EqualsEqualsEquals,
    ExclamationEqualsEquals,
    EqualsGreaterThan,
    Plus,
    Minus,
    Asterisk,
    AsteriskAsterisk,
    Slash,
    Percent,
    PlusPlus,
    MinusMinus,
    LessThanLessThan,
    GreaterThanGreaterThan,
    GreaterThanGreaterThanGreaterThan,
    Ampersand,
    Bar,
    Caret,
    Exclamation,
    Tilde,
    AmpersandAmpersand,
    BarBar,
    Question,
    Colon,
    At,
    QuestionQuestion,
    Hash,

    // Assignments
    Equals,
    PlusEquals,
    MinusEquals,
    AsteriskEquals,
    AsteriskAsteriskEquals,
    SlashEquals,
    PercentEquals,
    LessThanLessThanEquals,
    GreaterThanGreaterThanEquals,
    GreaterThanGreaterThanGreaterThanEquals,
    AmpersandEquals,
    BarEquals,
    CaretEquals,
    BarBarEquals,
    AmpersandAmpersandEquals,
    QuestionQuestionEquals,

    // ========================================================================
    // Identifiers
    // ========================================================================
    Identifier,
    PrivateIdentifier,
    JsxIdentifier,

    // ========================================================================
    // Reserved words
    // ========================================================================
    BreakKeyword,
    CaseKeyword,
    CatchKeyword,
    ClassKeyword,
    ConstKeyword,
    ContinueKeyword,
    DebuggerKeyword,
    DefaultKeyword,
    DeleteKeyword,
    DoKeyword,
    ElseKeyword,
    EnumKeyword,
    ExportKeyword,
    ExtendsKeyword,
    FalseKeyword,
    FinallyKeyword,
    ForKeyword,
    FunctionKeyword,
    IfKeyword,
    ImportKeyword,
    InKeyword,
    InstanceOfKeyword,
    NewKeyword,
    NullKeyword,
    ReturnKeyword,
    SuperKeyword,
    SwitchKeyword,
    ThisKeyword,
    ThrowKeyword,
    TrueKeyword,
    TryKeyword,
    TypeOfKeyword,
    VarKeyword,
    VoidKeyword,
    WhileKeyword,
    WithKeyword,

    // Strict mode reserved words
    ImplementsKeyword,
    InterfaceKeyword,
    LetKeyword,
    PackageKeyword,
    PrivateKeyword,
    ProtectedKeyword,
    PublicKeyword,
    StaticKeyword,
    YieldKeyword,

    // Contextual keywords
    AbstractKeyword,
    AccessorKeyword,
    AsKeyword,
    AssertsKeyword,
    AssertKeyword,
    AnyKeyword,
    AsyncKeyword,
    AwaitKeyword,
    BooleanKeyword,
    ConstructorKeyword,
    DeclareKeyword,
    GetKeyword,
    InferKeyword,
    IntrinsicKeyword,
    IsKeyword,
    KeyOfKeyword,
    ModuleKeyword,
    NamespaceKeyword,
    NeverKeyword,
    OutKeyword,
    ReadonlyKeyword,
    RequireKeyword,
    NumberKeyword,
    ObjectKeyword,
    SatisfiesKeyword,
    SetKeyword,
    StringKeyword,
    SymbolKeyword,
    TypeKeyword,
    UndefinedKeyword,
    UniqueKeyword,
    UnknownKeyword,
    UsingKeyword,
    FromKeyword,
    GlobalKeyword,
    BigIntKeyword,
    OverrideKeyword,
    OfKeyword,
}

/// Every keyword with its source text. The keyword table and
/// [`TokenKind::keyword_text`] are both derived from this list.
const KEYWORDS: &[(&str, TokenKind)] = &[
    ("break", TokenKind::BreakKeyword),
    ("case", TokenKind::CaseKeyword),
    ("catch", TokenKind::CatchKeyword),
    ("class", TokenKind::ClassKeyword),
    ("const", TokenKind::ConstKeyword),
    ("continue", TokenKind::ContinueKeyword),
    ("debugger", TokenKind::DebuggerKeyword),
    ("default", TokenKind::DefaultKeyword),
    ("delete", TokenKind::DeleteKeyword),
    ("do", TokenKind::DoKeyword),
    ("else", TokenKind::ElseKeyword),
    ("enum", TokenKind::EnumKeyword),
    ("export", TokenKind::ExportKeyword),
    ("extends", TokenKind::ExtendsKeyword),
    ("false", TokenKind::FalseKeyword),
    ("finally", TokenKind::FinallyKeyword),
    ("for", TokenKind::ForKeyword),
    ("function", TokenKind::FunctionKeyword),
    ("if", TokenKind::IfKeyword),
    ("import", TokenKind::ImportKeyword),
    ("in", TokenKind::InKeyword),
    ("instanceof", TokenKind::InstanceOfKeyword),
    ("new", TokenKind::NewKeyword),
    ("null", TokenKind::NullKeyword),
    ("return", TokenKind::ReturnKeyword),
    ("super", TokenKind::SuperKeyword),
    ("switch", TokenKind::SwitchKeyword),
    ("this", TokenKind::ThisKeyword),
    ("throw", TokenKind::ThrowKeyword),
    ("true", TokenKind::TrueKeyword),
    ("try", TokenKind::TryKeyword),
    ("typeof", TokenKind::TypeOfKeyword),
    ("var", TokenKind::VarKeyword),
    ("void", TokenKind::VoidKeyword),
    ("while", TokenKind::WhileKeyword),
    ("with", TokenKind::WithKeyword),
    ("implements", TokenKind::ImplementsKeyword),
    ("interface", TokenKind::InterfaceKeyword),
    ("let", TokenKind::LetKeyword),
    ("package", TokenKind::PackageKeyword),
    ("private", TokenKind::PrivateKeyword),
    ("protected", TokenKind::ProtectedKeyword),
    ("public", TokenKind::PublicKeyword),
    ("static", TokenKind::StaticKeyword),
    ("yield", TokenKind::YieldKeyword),
    ("abstract", TokenKind::AbstractKeyword),
    ("accessor", TokenKind::AccessorKeyword),
    ("as", TokenKind::AsKeyword),
    ("asserts", TokenKind::AssertsKeyword),
    ("assert", TokenKind::AssertKeyword),
    ("any", TokenKind::AnyKeyword),
    ("async", TokenKind::AsyncKeyword),
    ("await", TokenKind::AwaitKeyword),
    ("boolean", TokenKind::BooleanKeyword),
    ("constructor", TokenKind::ConstructorKeyword),
    ("declare", TokenKind::DeclareKeyword),
    ("get", TokenKind::GetKeyword),
    ("infer", TokenKind::InferKeyword),
    ("intrinsic", TokenKind::IntrinsicKeyword),
    ("is", TokenKind::IsKeyword),
    ("keyof", TokenKind::KeyOfKeyword),
    ("module", TokenKind::ModuleKeyword),
    ("namespace", TokenKind::NamespaceKeyword),
    ("never", TokenKind::NeverKeyword),
    ("out", TokenKind::OutKeyword),
    ("readonly", TokenKind::ReadonlyKeyword),
    ("require", TokenKind::RequireKeyword),
    ("number", TokenKind::NumberKeyword),
    ("object", TokenKind::ObjectKeyword),
    ("satisfies", TokenKind::SatisfiesKeyword),
    ("set", TokenKind::SetKeyword),
    ("string", TokenKind::StringKeyword),
    ("symbol", TokenKind::SymbolKeyword),
    ("type", TokenKind::TypeKeyword),
    ("undefined", TokenKind::UndefinedKeyword),
    ("unique", TokenKind::UniqueKeyword),
    ("unknown", TokenKind::UnknownKeyword),
    ("using", TokenKind::UsingKeyword),
    ("from", TokenKind::FromKeyword),
    ("global", TokenKind::GlobalKeyword),
    ("bigint", TokenKind::BigIntKeyword),
    ("override", TokenKind::OverrideKeyword),
    ("of", TokenKind::OfKeyword),
];

static KEYWORD_TABLE: Lazy<FxHashMap<&'static str, TokenKind>> =
    Lazy::new(|| KEYWORDS.iter().copied().collect());

impl TokenKind {
    /// Look up a keyword TokenKind from the complete text of an identifier.
    #[inline]
    pub fn from_keyword(text: &str) -> Option<TokenKind> {
        KEYWORD_TABLE.get(text).copied()
    }

    /// Whether this kind is any keyword, reserved or contextual.
    #[inline]
    pub fn is_keyword(self) -> bool {
        self >= TokenKind::BreakKeyword && self <= TokenKind::OfKeyword
    }

    /// Whether this kind is a reserved word that can never be used as an
    /// identifier (`break` through `with`, including `true`/`false`/`null`).
    #[inline]
    pub fn is_reserved_word(self) -> bool {
        self >= TokenKind::BreakKeyword && self <= TokenKind::WithKeyword
    }

    /// Whether this kind is reserved only in strict mode code.
    #[inline]
    pub fn is_future_reserved_word(self) -> bool {
        self >= TokenKind::ImplementsKeyword && self <= TokenKind::YieldKeyword
    }

    /// Whether this kind is accepted wherever an identifier is expected.
    #[inline]
    pub fn is_identifier_like(self) -> bool {
        self == TokenKind::Identifier || (self.is_keyword() && !self.is_reserved_word())
    }

    /// Whether this kind is an identifier or any keyword (valid as a property name).
    #[inline]
    pub fn is_identifier_or_keyword(self) -> bool {
        self == TokenKind::Identifier || self.is_keyword()
    }

    #[inline]
    pub fn is_punctuation(self) -> bool {
        self >= TokenKind::OpenBrace && self <= TokenKind::QuestionQuestionEquals
    }

    #[inline]
    pub fn is_literal(self) -> bool {
        self >= TokenKind::NumericLiteral && self <= TokenKind::NoSubstitutionTemplateLiteral
    }

    #[inline]
    pub fn is_template(self) -> bool {
        self >= TokenKind::NoSubstitutionTemplateLiteral && self <= TokenKind::TemplateTail
    }

    #[inline]
    pub fn is_comment(self) -> bool {
        matches!(self, TokenKind::SingleLineComment | TokenKind::MultiLineComment)
    }

    /// Whether this kind represents an assignment operator.
    #[inline]
    pub fn is_assignment_operator(self) -> bool {
        self >= TokenKind::Equals && self <= TokenKind::QuestionQuestionEquals
    }

    /// Whether this kind represents a compound assignment operator.
    #[inline]
    pub fn is_compound_assignment(self) -> bool {
        self >= TokenKind::PlusEquals && self <= TokenKind::QuestionQuestionEquals
    }

    /// Logical assignments (`&&=`, `||=`, `??=`).
    #[inline]
    pub fn is_logical_assignment(self) -> bool {
        matches!(
            self,
            TokenKind::AmpersandAmpersandEquals
                | TokenKind::BarBarEquals
                | TokenKind::QuestionQuestionEquals
        )
    }

    /// Whether this kind represents a class or parameter modifier keyword.
    #[inline]
    pub fn is_modifier_kind(self) -> bool {
        matches!(
            self,
            TokenKind::AbstractKeyword
                | TokenKind::AccessorKeyword
                | TokenKind::AsyncKeyword
                | TokenKind::ConstKeyword
                | TokenKind::DeclareKeyword
                | TokenKind::DefaultKeyword
                | TokenKind::ExportKeyword
                | TokenKind::InKeyword
                | TokenKind::OutKeyword
                | TokenKind::OverrideKeyword
                | TokenKind::PrivateKeyword
                | TokenKind::ProtectedKeyword
                | TokenKind::PublicKeyword
                | TokenKind::ReadonlyKeyword
                | TokenKind::StaticKeyword
        )
    }

    /// Get the keyword text for a keyword kind, or None if not a keyword.
    pub fn keyword_text(self) -> Option<&'static str> {
        if !self.is_keyword() {
            return None;
        }
        KEYWORDS
            .iter()
            .find(|(_, kind)| *kind == self)
            .map(|(text, _)| *text)
    }

    /// Get the punctuation text for a punctuation kind, or None.
    pub fn punctuation_text(self) -> Option<&'static str> {
        let text = match self {
            TokenKind::OpenBrace => "{",
            TokenKind::CloseBrace => "}",
            TokenKind::OpenParen => "(",
            TokenKind::CloseParen => ")",
            TokenKind::OpenBracket => "[",
            TokenKind::CloseBracket => "]",
            TokenKind::Dot => ".",
            TokenKind::DotDotDot => "...",
            TokenKind::Semicolon => ";",
            TokenKind::Comma => ",",
            TokenKind::QuestionDot => "?.",
            TokenKind::LessThan => "<",
            TokenKind::LessThanSlash => "</",
            TokenKind::GreaterThan => ">",
            TokenKind::LessThanEquals => "<=",
            TokenKind::GreaterThanEquals => ">=",
            TokenKind::EqualsEquals => "==",
            TokenKind::ExclamationEquals => "!=",
            TokenKind::EqualsEqualsEquals => "===",
            TokenKind::ExclamationEqualsEquals => "!==",
            TokenKind::EqualsGreaterThan => "=>",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Asterisk => "*",
            TokenKind::AsteriskAsterisk => "**",
            TokenKind::Slash => "/",
            TokenKind::Percent => "%",
            TokenKind::PlusPlus => "++",
            TokenKind::MinusMinus => "--",
            TokenKind::LessThanLessThan => "<<",
            TokenKind::GreaterThanGreaterThan => ">>",
            TokenKind::GreaterThanGreaterThanGreaterThan => ">>>",
            TokenKind::Ampersand => "&",
            TokenKind::Bar => "|",
            TokenKind::Caret => "^",
            TokenKind::Exclamation => "!",
            TokenKind::Tilde => "~",
            TokenKind::AmpersandAmpersand => "&&",
            TokenKind::BarBar => "||",
            TokenKind::Question => "?",
            TokenKind::Colon => ":",
            TokenKind::At => "@",
            TokenKind::QuestionQuestion => "??",
            TokenKind::Hash => "#",
            TokenKind::Equals => "=",
            TokenKind::PlusEquals => "+=",
            TokenKind::MinusEquals => "-=",
            TokenKind::AsteriskEquals => "*=",
            TokenKind::AsteriskAsteriskEquals => "**=",
            TokenKind::SlashEquals => "/=",
            TokenKind::PercentEquals => "%=",
            TokenKind::LessThanLessThanEquals => "<<=",
            TokenKind::GreaterThanGreaterThanEquals => ">>=",
            TokenKind::GreaterThanGreaterThanGreaterThanEquals => ">>>=",
            TokenKind::AmpersandEquals => "&=",
            TokenKind::BarEquals => "|=",
            TokenKind::CaretEquals => "^=",
            TokenKind::BarBarEquals => "||=",
            TokenKind::AmpersandAmpersandEquals => "&&=",
            TokenKind::QuestionQuestionEquals => "??=",
            _ => return None,
        };
        Some(text)
    }

    /// Human-readable text for diagnostics: the fixed lexeme for keywords and
    /// punctuation, otherwise a description of the kind.
    pub fn text(self) -> &'static str {
        if let Some(text) = self.keyword_text().or_else(|| self.punctuation_text()) {
            return text;
        }
        match self {
            TokenKind::EndOfFile => "end of file",
            TokenKind::Illegal => "illegal token",
            TokenKind::SingleLineComment | TokenKind::MultiLineComment => "comment",
            TokenKind::NumericLiteral | TokenKind::BigIntLiteral => "number",
            TokenKind::StringLiteral => "string",
            TokenKind::RegularExpressionLiteral => "regular expression",
            TokenKind::NoSubstitutionTemplateLiteral
            | TokenKind::TemplateHead
            | TokenKind::TemplateMiddle
            | TokenKind::TemplateTail => "template",
            TokenKind::JsxText => "JSX text",
            TokenKind::PrivateIdentifier => "private identifier",
            _ => "identifier",
        }
    }

    /// The ESTree token `type` this kind is reported as.
    pub fn estree_type(self) -> &'static str {
        match self {
            TokenKind::TrueKeyword | TokenKind::FalseKeyword => "Boolean",
            TokenKind::NullKeyword => "Null",
            k if k.is_reserved_word() || k.is_future_reserved_word() => "Keyword",
            k if k.is_keyword() => "Identifier",
            TokenKind::Identifier => "Identifier",
            TokenKind::PrivateIdentifier => "PrivateIdentifier",
            TokenKind::JsxIdentifier => "JSXIdentifier",
            TokenKind::JsxText => "JSXText",
            TokenKind::NumericLiteral | TokenKind::BigIntLiteral => "Numeric",
            TokenKind::StringLiteral => "String",
            TokenKind::RegularExpressionLiteral => "RegularExpression",
            TokenKind::NoSubstitutionTemplateLiteral
            | TokenKind::TemplateHead
            | TokenKind::TemplateMiddle
            | TokenKind::TemplateTail => "Template",
            TokenKind::SingleLineComment => "Line",
            TokenKind::MultiLineComment => "Block",
            _ => "Punctuator",
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_keyword_round_trips() {
        for (text, kind) in KEYWORDS {
            assert_eq!(TokenKind::from_keyword(text), Some(*kind), "{text}");
            assert_eq!(kind.keyword_text(), Some(*text));
            assert!(kind.is_keyword());
        }
    }

    #[test]
    fn test_lookup_is_exact_match() {
        assert_eq!(TokenKind::from_keyword("classy"), None);
        assert_eq!(TokenKind::from_keyword("clas"), None);
        assert_eq!(TokenKind::from_keyword("Class"), None);
        assert_eq!(TokenKind::from_keyword(""), None);
    }

    #[test]
    fn test_reserved_vs_contextual() {
        assert!(TokenKind::IfKeyword.is_reserved_word());
        assert!(TokenKind::NullKeyword.is_reserved_word());
        assert!(!TokenKind::AsyncKeyword.is_reserved_word());
        assert!(TokenKind::AsyncKeyword.is_identifier_like());
        assert!(TokenKind::LetKeyword.is_identifier_like());
        assert!(!TokenKind::ClassKeyword.is_identifier_like());
        assert!(TokenKind::ClassKeyword.is_identifier_or_keyword());
    }

    #[test]
    fn test_estree_types() {
        assert_eq!(TokenKind::IfKeyword.estree_type(), "Keyword");
        assert_eq!(TokenKind::TrueKeyword.estree_type(), "Boolean");
        assert_eq!(TokenKind::NullKeyword.estree_type(), "Null");
        assert_eq!(TokenKind::TypeKeyword.estree_type(), "Identifier");
        assert_eq!(TokenKind::GreaterThanGreaterThanEquals.estree_type(), "Punctuator");
        assert_eq!(TokenKind::TemplateHead.estree_type(), "Template");
    }

    #[test]
    fn test_operator_ranges() {
        assert!(TokenKind::Equals.is_assignment_operator());
        assert!(!TokenKind::Equals.is_compound_assignment());
        assert!(TokenKind::QuestionQuestionEquals.is_logical_assignment());
        assert!(TokenKind::Hash.is_punctuation());
        assert!(!TokenKind::Identifier.is_punctuation());
        assert_eq!(TokenKind::GreaterThanGreaterThanGreaterThanEquals.to_string(), ">>>=");
    }
}
