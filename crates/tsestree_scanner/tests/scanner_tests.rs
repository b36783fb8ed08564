//! Scanner integration tests.
//!
//! Verifies that the scanner correctly tokenizes various TypeScript constructs.

use tsestree_ast::{TokenFlags, TokenKind};
use tsestree_scanner::{parse_numeric_literal, Scanner};

/// Helper: scan all tokens from source and return as (kind, value) pairs.
fn scan_all(source: &str) -> Vec<(TokenKind, String)> {
    let mut scanner = Scanner::new(source);
    let mut tokens = Vec::new();
    loop {
        let token = scanner.scan();
        if token.kind == TokenKind::EndOfFile {
            break;
        }
        tokens.push((token.kind, token.value.into_owned()));
    }
    tokens
}

/// Helper: scan all token kinds.
fn scan_kinds(source: &str) -> Vec<TokenKind> {
    scan_all(source).into_iter().map(|(k, _)| k).collect()
}

#[test]
fn test_empty_source() {
    assert!(scan_all("").is_empty());
}

#[test]
fn test_whitespace_only() {
    assert!(scan_all("   \n\t \u{FEFF}\u{2028} ").is_empty());
}

#[test]
fn test_numeric_literals() {
    let tokens = scan_all("42 3.14 0xFF 0b1010 0o777 1e10 1_000");
    assert_eq!(tokens.len(), 7);
    assert!(tokens.iter().all(|(kind, _)| *kind == TokenKind::NumericLiteral));
    assert_eq!(tokens[1].1, "3.14");
    assert_eq!(parse_numeric_literal(&tokens[2].1), 255.0);
    assert_eq!(parse_numeric_literal(&tokens[4].1), 511.0);
    assert_eq!(parse_numeric_literal(&tokens[6].1), 1000.0);
}

#[test]
fn test_bigint_literals() {
    let tokens = scan_all("123n 0b11n 0o7n 0xFFn 0n");
    assert_eq!(tokens.len(), 5);
    assert!(tokens.iter().all(|(kind, _)| *kind == TokenKind::BigIntLiteral));
    assert_eq!(tokens[3].1, "0xFFn");
}

#[test]
fn test_legacy_octal() {
    let mut scanner = Scanner::new("0777 09");
    let octal = scanner.scan();
    assert!(octal.flags.contains(TokenFlags::LEGACY_OCTAL));
    assert_eq!(parse_numeric_literal(octal.text), 511.0);
    let decimal = scanner.scan();
    assert_eq!(decimal.kind, TokenKind::NumericLiteral);
    assert_eq!(parse_numeric_literal(decimal.text), 9.0);
}

#[test]
fn test_string_literals() {
    let tokens = scan_all(r#""hello" 'world' "" 'it\'s' "a\\b""#);
    assert_eq!(
        tokens,
        vec![
            (TokenKind::StringLiteral, "hello".to_string()),
            (TokenKind::StringLiteral, "world".to_string()),
            (TokenKind::StringLiteral, "".to_string()),
            (TokenKind::StringLiteral, "it's".to_string()),
            (TokenKind::StringLiteral, "a\\b".to_string()),
        ]
    );
}

#[test]
fn test_string_escape_sequences() {
    let tokens = scan_all(r#""\t\v\f\b\0A\u{1F600}\x7A\8""#);
    assert_eq!(tokens[0].1, "\t\u{B}\u{C}\u{8}\0A\u{1F600}z8");
}

#[test]
fn test_line_continuation_is_removed() {
    let tokens = scan_all("'a\\\r\nb\\\u{2028}c'");
    assert_eq!(tokens, vec![(TokenKind::StringLiteral, "abc".to_string())]);
}

#[test]
fn test_string_may_contain_line_separator() {
    let tokens = scan_all("'a\u{2028}b'");
    assert_eq!(tokens[0].0, TokenKind::StringLiteral);
}

#[test]
fn test_identifiers() {
    let tokens = scan_all("foo _bar $baz café \\u{61}b");
    assert!(tokens.iter().all(|(kind, _)| *kind == TokenKind::Identifier));
    assert_eq!(tokens[3].1, "café");
    assert_eq!(tokens[4].1, "ab");
}

#[test]
fn test_reserved_words() {
    let kinds = scan_kinds("break case catch class const continue debugger default delete do else enum export extends false finally for function if import in instanceof new null return super switch this throw true try typeof var void while with");
    assert_eq!(kinds.len(), 36);
    assert!(kinds.iter().all(|kind| kind.is_reserved_word()));
    assert!(!kinds.contains(&TokenKind::Identifier));
}

#[test]
fn test_contextual_keywords() {
    let kinds = scan_kinds("as async await type of get set declare namespace module readonly keyof infer is asserts satisfies accessor");
    assert!(kinds.iter().all(|kind| kind.is_keyword() && kind.is_identifier_like()));
    assert_eq!(kinds[0], TokenKind::AsKeyword);
    assert_eq!(kinds[3], TokenKind::TypeKeyword);
}

#[test]
fn test_keyword_lookup_is_exact() {
    assert_eq!(scan_kinds("classes iff typeofx"), vec![TokenKind::Identifier; 3]);
}

#[test]
fn test_operators() {
    assert_eq!(
        scan_kinds("+ - * / % ** ++ -- == != === !== <= && || ?? ! ~ & | ^ << => ?. ..."),
        vec![
            TokenKind::Plus,
            TokenKind::Minus,
            TokenKind::Asterisk,
            TokenKind::Slash,
            TokenKind::Percent,
            TokenKind::AsteriskAsterisk,
            TokenKind::PlusPlus,
            TokenKind::MinusMinus,
            TokenKind::EqualsEquals,
            TokenKind::ExclamationEquals,
            TokenKind::EqualsEqualsEquals,
            TokenKind::ExclamationEqualsEquals,
            TokenKind::LessThanEquals,
            TokenKind::AmpersandAmpersand,
            TokenKind::BarBar,
            TokenKind::QuestionQuestion,
            TokenKind::Exclamation,
            TokenKind::Tilde,
            TokenKind::Ampersand,
            TokenKind::Bar,
            TokenKind::Caret,
            TokenKind::LessThanLessThan,
            TokenKind::EqualsGreaterThan,
            TokenKind::QuestionDot,
            TokenKind::DotDotDot,
        ]
    );
}

#[test]
fn test_assignment_operators() {
    let kinds = scan_kinds("= += -= *= /= %= **= <<= &= |= ^= &&= ||= ??=");
    assert_eq!(kinds.len(), 14);
    assert!(kinds.iter().all(|kind| kind.is_assignment_operator()));
    assert_eq!(kinds[11], TokenKind::AmpersandAmpersandEquals);
}

#[test]
fn test_punctuation() {
    assert_eq!(
        scan_kinds("{ } ( ) [ ] ; , : . @ #"),
        vec![
            TokenKind::OpenBrace,
            TokenKind::CloseBrace,
            TokenKind::OpenParen,
            TokenKind::CloseParen,
            TokenKind::OpenBracket,
            TokenKind::CloseBracket,
            TokenKind::Semicolon,
            TokenKind::Comma,
            TokenKind::Colon,
            TokenKind::Dot,
            TokenKind::At,
            TokenKind::Hash,
        ]
    );
}

#[test]
fn test_generic_type_tokens() {
    // `>>` is two tokens until the parser asks for a rescan.
    assert_eq!(
        scan_kinds("Array<Array<T>>"),
        vec![
            TokenKind::Identifier,
            TokenKind::LessThan,
            TokenKind::Identifier,
            TokenKind::LessThan,
            TokenKind::Identifier,
            TokenKind::GreaterThan,
            TokenKind::GreaterThan,
        ]
    );
}

#[test]
fn test_shebang_skipping() {
    let mut scanner = Scanner::new("#!/usr/bin/env node\nconst x = 1;");
    scanner.skip_shebang();
    assert_eq!(scanner.scan().kind, TokenKind::ConstKeyword);
}

#[test]
fn test_comments_skipped() {
    assert_eq!(
        scan_kinds("a // line\n/* block */ b /** doc */"),
        vec![TokenKind::Identifier, TokenKind::Identifier]
    );
}

#[test]
fn test_regex_literal_via_rescan() {
    let mut scanner = Scanner::new("x = /ab+c/i;");
    scanner.scan();
    scanner.scan();
    let slash = scanner.scan();
    assert_eq!(slash.kind, TokenKind::Slash);
    let regex = scanner.rescan_slash(&slash);
    assert_eq!(regex.kind, TokenKind::RegularExpressionLiteral);
    assert_eq!(regex.text, "/ab+c/i");
    assert_eq!(regex.value, "ab+c");
    assert_eq!(regex.regex_flags(), "i");
    assert_eq!(scanner.scan().kind, TokenKind::Semicolon);
}

#[test]
fn test_slash_equals_rescans_as_regex() {
    let mut scanner = Scanner::new("/=a/g");
    let token = scanner.scan();
    assert_eq!(token.kind, TokenKind::SlashEquals);
    let regex = scanner.rescan_slash(&token);
    assert_eq!(regex.value, "=a");
    assert_eq!(regex.regex_flags(), "g");
}

#[test]
fn test_template_literals() {
    let tokens = scan_all("`hello` `` `a\\nb`");
    assert_eq!(
        tokens,
        vec![
            (TokenKind::NoSubstitutionTemplateLiteral, "hello".to_string()),
            (TokenKind::NoSubstitutionTemplateLiteral, "".to_string()),
            (TokenKind::NoSubstitutionTemplateLiteral, "a\nb".to_string()),
        ]
    );
}

#[test]
fn test_template_invalid_escape_is_flagged() {
    let mut scanner = Scanner::new("`\\unicode \\01`");
    let token = scanner.scan();
    assert_eq!(token.kind, TokenKind::NoSubstitutionTemplateLiteral);
    assert!(token.flags.contains(TokenFlags::CONTAINS_INVALID_ESCAPE));
    assert_eq!(token.template_raw(), "\\unicode \\01");
}

#[test]
fn test_unterminated_template() {
    let mut scanner = Scanner::new("`abc ${");
    assert_eq!(scanner.scan().kind, TokenKind::TemplateHead);
    assert_eq!(scanner.scan().kind, TokenKind::EndOfFile);

    let mut scanner = Scanner::new("`abc");
    let token = scanner.scan();
    assert_eq!(token.kind, TokenKind::Illegal);
    assert_eq!(token.error.map(|m| m.code), Some(1160));
}

#[test]
fn test_token_positions() {
    let mut scanner = Scanner::new("let  foo\n  = 1");
    let let_kw = scanner.scan();
    assert_eq!((let_kw.start, let_kw.end), (0, 3));
    let foo = scanner.scan();
    assert_eq!((foo.start, foo.end), (5, 8));
    assert_eq!((foo.line, foo.column), (1, 5));
    let eq = scanner.scan();
    assert_eq!((eq.line, eq.column), (2, 2));
    assert!(eq.has_preceding_line_break());
    assert!(!scanner.scan().has_preceding_line_break());
}

#[test]
fn test_column_counts_utf16_units() {
    let mut scanner = Scanner::new("'😀' x");
    scanner.scan();
    let x = scanner.scan();
    assert_eq!(x.start, 7);
    assert_eq!(x.column, 5);
}

#[test]
fn test_checkpoint_and_rewind() {
    let mut scanner = Scanner::new("(a, b) => c");
    let state = scanner.checkpoint();
    let first = scanner.scan();
    scanner.scan();
    scanner.scan();
    scanner.rewind(state);
    assert_eq!(scanner.scan(), first);
}

#[test]
fn test_jsx_identifiers_and_text() {
    let mut scanner = Scanner::new("<my-el aria-label='x'>hi {name}</my-el>");
    assert_eq!(scanner.scan().kind, TokenKind::LessThan);
    scanner.set_in_jsx(true);
    let tag = scanner.scan();
    assert_eq!((tag.kind, tag.text), (TokenKind::JsxIdentifier, "my-el"));
    let attr = scanner.scan();
    assert_eq!((attr.kind, attr.text), (TokenKind::JsxIdentifier, "aria-label"));
    assert_eq!(scanner.scan().kind, TokenKind::Equals);
    assert_eq!(scanner.scan().kind, TokenKind::StringLiteral);
    assert_eq!(scanner.scan().kind, TokenKind::GreaterThan);
    let text = scanner.scan_jsx_child();
    assert_eq!((text.kind, text.text), (TokenKind::JsxText, "hi "));
    assert_eq!(scanner.scan_jsx_child().kind, TokenKind::OpenBrace);
}

#[test]
fn test_scanning_always_terminates() {
    let inputs = ["\u{0}\u{1}\u{7f}", "'", "`${", "/*", "0x", "\\", "#", "@@@", "\u{FFFF}\u{10FFFF}"];
    for input in inputs {
        let mut scanner = Scanner::new(input);
        let mut count = 0;
        while scanner.scan().kind != TokenKind::EndOfFile {
            count += 1;
            assert!(count <= input.len(), "scanner did not advance on {:?}", input);
        }
    }
}

#[test]
fn test_illegal_tokens_carry_messages() {
    let mut scanner = Scanner::new("\"abc\n");
    let token = scanner.scan();
    assert_eq!(token.kind, TokenKind::Illegal);
    assert!(token.flags.contains(TokenFlags::UNTERMINATED));
    assert_eq!(
        token.error.map(|m| m.message),
        Some("Unterminated string literal.")
    );
}
