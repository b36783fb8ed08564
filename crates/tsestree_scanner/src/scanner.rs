//! The scanner turns source text into tokens.
//!
//! It works over a byte cursor into the source. Every position handed out is
//! a char boundary; multi-byte characters are only stepped over whole.

use crate::char_codes::*;
use crate::token::Token;
use memchr::{memchr2, memchr3, memmem};
use std::borrow::Cow;
use tsestree_ast::{TokenFlags, TokenKind};
use tsestree_core::{LineMap, Position};
use tsestree_diagnostics::{messages, DiagnosticMessage};

/// Saved scanner position, used for look-ahead and speculative parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScannerState {
    pos: usize,
    pending_line_break: bool,
    in_jsx: bool,
}

/// The scanner (lexer).
pub struct Scanner<'a> {
    source: &'a str,
    bytes: &'a [u8],
    line_map: LineMap,
    pos: usize,
    /// A line break seen before a comment token that was handed out; it
    /// belongs to the next grammar token.
    pending_line_break: bool,
    in_jsx: bool,
    skip_comments: bool,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            bytes: source.as_bytes(),
            line_map: LineMap::new(source),
            pos: 0,
            pending_line_break: false,
            in_jsx: false,
            skip_comments: true,
        }
    }

    pub fn source(&self) -> &'a str {
        self.source
    }

    pub fn line_map(&self) -> &LineMap {
        &self.line_map
    }

    /// The ESTree position of a byte offset.
    pub fn position_of(&self, pos: u32) -> Position {
        self.line_map.position_of(pos)
    }

    /// Current byte offset.
    pub fn pos(&self) -> u32 {
        self.pos as u32
    }

    /// When `false`, comments are returned as `SingleLineComment` /
    /// `MultiLineComment` tokens instead of being skipped.
    pub fn set_skip_comments(&mut self, skip: bool) {
        self.skip_comments = skip;
    }

    pub fn set_in_jsx(&mut self, in_jsx: bool) {
        self.in_jsx = in_jsx;
    }

    pub fn in_jsx(&self) -> bool {
        self.in_jsx
    }

    // ========================================================================
    // State management
    // ========================================================================

    pub fn checkpoint(&self) -> ScannerState {
        ScannerState {
            pos: self.pos,
            pending_line_break: self.pending_line_break,
            in_jsx: self.in_jsx,
        }
    }

    pub fn rewind(&mut self, state: ScannerState) {
        self.pos = state.pos;
        self.pending_line_break = state.pending_line_break;
        self.in_jsx = state.in_jsx;
    }

    /// Run `f` and restore the scanner afterwards.
    pub fn look_ahead<T>(&mut self, f: impl FnOnce(&mut Self) -> T) -> T {
        let state = self.checkpoint();
        let result = f(self);
        self.rewind(state);
        result
    }

    /// Skip a `#!` line at the very start of the source.
    pub fn skip_shebang(&mut self) {
        if self.pos == 0 && self.bytes.starts_with(b"#!") {
            self.pos = self.find_line_end(2);
        }
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    #[inline]
    fn peek(&self, offset: usize) -> Option<u8> {
        self.bytes.get(self.pos + offset).copied()
    }

    #[inline]
    fn char_at(&self, pos: usize) -> Option<char> {
        self.source.get(pos..).and_then(|rest| rest.chars().next())
    }

    #[inline]
    fn at(&self, pattern: &[u8]) -> bool {
        self.bytes[self.pos..].starts_with(pattern)
    }

    /// Offset of the next line terminator at or after `from`, or the end of
    /// the source.
    fn find_line_end(&self, from: usize) -> usize {
        let mut cursor = from;
        while let Some(offset) = memchr3(b'\n', b'\r', 0xE2, &self.bytes[cursor..]) {
            let at = cursor + offset;
            if self.bytes[at] != 0xE2 || self.is_unicode_line_break_at(at) {
                return at;
            }
            cursor = at + 1;
        }
        self.bytes.len()
    }

    /// U+2028 / U+2029 encode as E2 80 A8 / E2 80 A9.
    #[inline]
    fn is_unicode_line_break_at(&self, at: usize) -> bool {
        self.bytes.get(at) == Some(&0xE2)
            && self.bytes.get(at + 1) == Some(&0x80)
            && matches!(self.bytes.get(at + 2), Some(0xA8) | Some(0xA9))
    }

    fn finish(
        &self,
        kind: TokenKind,
        start: usize,
        flags: TokenFlags,
        value: Cow<'a, str>,
        error: Option<&'static DiagnosticMessage>,
    ) -> Token<'a> {
        let position = self.position_of(start as u32);
        Token {
            kind,
            text: &self.source[start..self.pos],
            value,
            start: start as u32,
            end: self.pos as u32,
            line: position.line,
            column: position.column,
            flags,
            error,
        }
    }

    fn punct(&mut self, kind: TokenKind, len: usize, flags: TokenFlags) -> Token<'a> {
        let start = self.pos;
        self.pos += len;
        let text = &self.source[start..self.pos];
        self.finish(kind, start, flags, Cow::Borrowed(text), None)
    }

    fn illegal(
        &self,
        start: usize,
        flags: TokenFlags,
        message: &'static DiagnosticMessage,
    ) -> Token<'a> {
        let text = &self.source[start..self.pos];
        self.finish(TokenKind::Illegal, start, flags, Cow::Borrowed(text), Some(message))
    }

    // ========================================================================
    // Main scan
    // ========================================================================

    /// Scan the next token. Returns `EndOfFile` forever once the source is
    /// exhausted.
    pub fn scan(&mut self) -> Token<'a> {
        let mut flags = if std::mem::take(&mut self.pending_line_break) {
            TokenFlags::PRECEDING_LINE_BREAK
        } else {
            TokenFlags::NONE
        };

        loop {
            let Some(&byte) = self.bytes.get(self.pos) else {
                return self.finish(TokenKind::EndOfFile, self.pos, flags, Cow::Borrowed(""), None);
            };
            match byte {
                b'\n' | b'\r' => {
                    flags |= TokenFlags::PRECEDING_LINE_BREAK;
                    self.pos += 1;
                }
                b' ' | b'\t' | 0x0B | 0x0C => self.pos += 1,
                b'/' if self.peek(1) == Some(b'/') => {
                    let start = self.pos;
                    self.pos = self.find_line_end(start + 2);
                    if !self.skip_comments {
                        self.pending_line_break = flags.contains(TokenFlags::PRECEDING_LINE_BREAK);
                        let value = Cow::Borrowed(&self.source[start + 2..self.pos]);
                        return self.finish(TokenKind::SingleLineComment, start, flags, value, None);
                    }
                }
                b'/' if self.peek(1) == Some(b'*') => {
                    let start = self.pos;
                    let Some(offset) = memmem::find(&self.bytes[start + 2..], b"*/") else {
                        self.pos = self.bytes.len();
                        return self.illegal(
                            start,
                            flags | TokenFlags::UNTERMINATED,
                            &messages::ASTERISK_SLASH_EXPECTED,
                        );
                    };
                    let body_end = start + 2 + offset;
                    self.pos = body_end + 2;
                    let body = &self.source[start + 2..body_end];
                    let has_line_break = contains_line_break(body);
                    if self.skip_comments {
                        if has_line_break {
                            flags |= TokenFlags::PRECEDING_LINE_BREAK;
                        }
                    } else {
                        self.pending_line_break =
                            has_line_break || flags.contains(TokenFlags::PRECEDING_LINE_BREAK);
                        return self.finish(
                            TokenKind::MultiLineComment,
                            start,
                            flags,
                            Cow::Borrowed(body),
                            None,
                        );
                    }
                }
                0x80..=0xFF => {
                    let ch = self.char_at(self.pos).unwrap_or(REPLACEMENT_CHARACTER);
                    if is_line_break(ch) {
                        flags |= TokenFlags::PRECEDING_LINE_BREAK;
                    } else if !is_white_space_single_line(ch) {
                        break;
                    }
                    self.pos += ch.len_utf8();
                }
                _ => break,
            }
        }

        self.scan_token(flags)
    }

    fn scan_token(&mut self, flags: TokenFlags) -> Token<'a> {
        use TokenKind::*;

        let start = self.pos;
        let byte = self.bytes[start];
        match byte {
            b'{' => self.punct(OpenBrace, 1, flags),
            b'}' => self.punct(CloseBrace, 1, flags),
            b'(' => self.punct(OpenParen, 1, flags),
            b')' => self.punct(CloseParen, 1, flags),
            b'[' => self.punct(OpenBracket, 1, flags),
            b']' => self.punct(CloseBracket, 1, flags),
            b';' => self.punct(Semicolon, 1, flags),
            b',' => self.punct(Comma, 1, flags),
            b':' => self.punct(Colon, 1, flags),
            b'@' => self.punct(At, 1, flags),
            b'~' => self.punct(Tilde, 1, flags),
            // Always alone; see `rescan_greater_than`.
            b'>' => self.punct(GreaterThan, 1, flags),
            b'.' => self.scan_dot(flags),
            b'?' => self.scan_question(flags),
            b'<' => self.scan_less_than(flags),
            b'=' => self.scan_equals(flags),
            b'!' => self.scan_exclamation(flags),
            b'+' => self.scan_repeatable(Plus, PlusPlus, PlusEquals, flags),
            b'-' => self.scan_repeatable(Minus, MinusMinus, MinusEquals, flags),
            b'*' => self.scan_asterisk(flags),
            b'/' => self.scan_with_equals(Slash, SlashEquals, flags),
            b'%' => self.scan_with_equals(Percent, PercentEquals, flags),
            b'^' => self.scan_with_equals(Caret, CaretEquals, flags),
            b'&' => self.scan_logical(Ampersand, AmpersandAmpersand, AmpersandEquals, AmpersandAmpersandEquals, flags),
            b'|' => self.scan_logical(Bar, BarBar, BarEquals, BarBarEquals, flags),
            b'#' => self.scan_hash(flags),
            b'"' | b'\'' if self.in_jsx => self.scan_jsx_string(flags),
            b'"' | b'\'' => self.scan_string(flags),
            b'`' => self.scan_template(start, flags, false),
            b'0'..=b'9' => self.scan_number(flags),
            b'\\' => self.scan_identifier(flags),
            _ if is_ascii_identifier_start(byte) => self.scan_identifier(flags),
            0x80..=0xFF => {
                let ch = self.char_at(start).unwrap_or(REPLACEMENT_CHARACTER);
                if is_identifier_start(ch) {
                    self.scan_identifier(flags)
                } else {
                    self.pos += ch.len_utf8();
                    self.illegal(start, flags, &messages::INVALID_CHARACTER)
                }
            }
            _ => {
                self.pos += 1;
                self.illegal(start, flags, &messages::INVALID_CHARACTER)
            }
        }
    }

    // ========================================================================
    // Punctuation
    // ========================================================================

    fn scan_dot(&mut self, flags: TokenFlags) -> Token<'a> {
        if self.peek(1).is_some_and(is_digit) {
            return self.scan_number(flags);
        }
        if self.at(b"...") {
            return self.punct(TokenKind::DotDotDot, 3, flags);
        }
        self.punct(TokenKind::Dot, 1, flags)
    }

    fn scan_question(&mut self, flags: TokenFlags) -> Token<'a> {
        if self.at(b"??=") {
            return self.punct(TokenKind::QuestionQuestionEquals, 3, flags);
        }
        if self.at(b"??") {
            return self.punct(TokenKind::QuestionQuestion, 2, flags);
        }
        // `a?.5:b` is a conditional, not an optional chain.
        if self.at(b"?.") && !self.peek(2).is_some_and(is_digit) {
            return self.punct(TokenKind::QuestionDot, 2, flags);
        }
        self.punct(TokenKind::Question, 1, flags)
    }

    fn scan_less_than(&mut self, flags: TokenFlags) -> Token<'a> {
        if self.at(b"<<=") {
            return self.punct(TokenKind::LessThanLessThanEquals, 3, flags);
        }
        if self.at(b"<<") {
            return self.punct(TokenKind::LessThanLessThan, 2, flags);
        }
        if self.at(b"<=") {
            return self.punct(TokenKind::LessThanEquals, 2, flags);
        }
        self.punct(TokenKind::LessThan, 1, flags)
    }

    fn scan_equals(&mut self, flags: TokenFlags) -> Token<'a> {
        if self.at(b"===") {
            return self.punct(TokenKind::EqualsEqualsEquals, 3, flags);
        }
        if self.at(b"==") {
            return self.punct(TokenKind::EqualsEquals, 2, flags);
        }
        if self.at(b"=>") {
            return self.punct(TokenKind::EqualsGreaterThan, 2, flags);
        }
        self.punct(TokenKind::Equals, 1, flags)
    }

    fn scan_exclamation(&mut self, flags: TokenFlags) -> Token<'a> {
        if self.at(b"!==") {
            return self.punct(TokenKind::ExclamationEqualsEquals, 3, flags);
        }
        if self.at(b"!=") {
            return self.punct(TokenKind::ExclamationEquals, 2, flags);
        }
        self.punct(TokenKind::Exclamation, 1, flags)
    }

    fn scan_asterisk(&mut self, flags: TokenFlags) -> Token<'a> {
        if self.at(b"**=") {
            return self.punct(TokenKind::AsteriskAsteriskEquals, 3, flags);
        }
        if self.at(b"**") {
            return self.punct(TokenKind::AsteriskAsterisk, 2, flags);
        }
        self.scan_with_equals(TokenKind::Asterisk, TokenKind::AsteriskEquals, flags)
    }

    /// `+`, `++`, `+=` and the `-` family.
    fn scan_repeatable(
        &mut self,
        single: TokenKind,
        double: TokenKind,
        assign: TokenKind,
        flags: TokenFlags,
    ) -> Token<'a> {
        match self.peek(1) {
            Some(next) if next == self.bytes[self.pos] => self.punct(double, 2, flags),
            Some(b'=') => self.punct(assign, 2, flags),
            _ => self.punct(single, 1, flags),
        }
    }

    fn scan_with_equals(&mut self, single: TokenKind, assign: TokenKind, flags: TokenFlags) -> Token<'a> {
        if self.peek(1) == Some(b'=') {
            self.punct(assign, 2, flags)
        } else {
            self.punct(single, 1, flags)
        }
    }

    /// `&`, `&&`, `&=`, `&&=` and the `|` family.
    fn scan_logical(
        &mut self,
        single: TokenKind,
        double: TokenKind,
        assign: TokenKind,
        double_assign: TokenKind,
        flags: TokenFlags,
    ) -> Token<'a> {
        let ch = self.bytes[self.pos];
        match (self.peek(1), self.peek(2)) {
            (Some(next), Some(b'=')) if next == ch => self.punct(double_assign, 3, flags),
            (Some(next), _) if next == ch => self.punct(double, 2, flags),
            (Some(b'='), _) => self.punct(assign, 2, flags),
            _ => self.punct(single, 1, flags),
        }
    }

    fn scan_hash(&mut self, flags: TokenFlags) -> Token<'a> {
        let start = self.pos;
        let starts_name = match self.peek(1) {
            Some(b'\\') => true,
            Some(b) if b < 0x80 => is_ascii_identifier_start(b),
            Some(_) => self.char_at(start + 1).is_some_and(is_identifier_start),
            None => false,
        };
        if !starts_name {
            return self.punct(TokenKind::Hash, 1, flags);
        }
        self.pos += 1;
        match self.scan_identifier_name() {
            Some((name, escaped)) => {
                let flags = if escaped { flags | TokenFlags::UNICODE_ESCAPE } else { flags };
                self.finish(TokenKind::PrivateIdentifier, start, flags, name, None)
            }
            None => self.illegal(start, flags, &messages::INVALID_CHARACTER),
        }
    }

    // ========================================================================
    // Identifiers
    // ========================================================================

    fn scan_identifier(&mut self, flags: TokenFlags) -> Token<'a> {
        let start = self.pos;
        let Some((name, escaped)) = self.scan_identifier_name() else {
            return self.illegal(start, flags, &messages::INVALID_CHARACTER);
        };
        let kind = if self.in_jsx {
            TokenKind::JsxIdentifier
        } else if escaped {
            TokenKind::Identifier
        } else {
            TokenKind::from_keyword(&name).unwrap_or(TokenKind::Identifier)
        };
        let flags = if escaped { flags | TokenFlags::UNICODE_ESCAPE } else { flags };
        self.finish(kind, start, flags, name, None)
    }

    /// Scan an identifier name at the cursor. Returns the decoded name and
    /// whether it contained `\u` escapes, or `None` for an invalid escape.
    fn scan_identifier_name(&mut self) -> Option<(Cow<'a, str>, bool)> {
        let start = self.pos;
        let allow_dash = self.in_jsx;

        // Fast path: plain ASCII.
        let mut end = start;
        while let Some(&b) = self.bytes.get(end) {
            if is_ascii_identifier_part(b) || (allow_dash && b == b'-' && end > start) {
                end += 1;
            } else {
                break;
            }
        }
        match self.bytes.get(end) {
            Some(&b) if b == b'\\' || b >= 0x80 => {}
            _ => {
                self.pos = end;
                return Some((Cow::Borrowed(&self.source[start..end]), false));
            }
        }

        // Slow path: escapes or non-ASCII characters.
        let mut name = String::from(&self.source[start..end]);
        let mut escaped = false;
        self.pos = end;
        loop {
            let first = name.is_empty();
            match self.bytes.get(self.pos) {
                Some(b'\\') => {
                    if self.peek(1) != Some(b'u') {
                        self.pos += 1;
                        return None;
                    }
                    let ch = self.scan_unicode_escape().and_then(char::from_u32)?;
                    let valid = if first { is_identifier_start(ch) } else { is_identifier_part(ch) };
                    if !valid {
                        return None;
                    }
                    name.push(ch);
                    escaped = true;
                }
                Some(&b) if b < 0x80 => {
                    let valid = if first {
                        is_ascii_identifier_start(b)
                    } else {
                        is_ascii_identifier_part(b) || (allow_dash && b == b'-')
                    };
                    if !valid {
                        break;
                    }
                    name.push(b as char);
                    self.pos += 1;
                }
                Some(_) => {
                    let ch = self.char_at(self.pos).unwrap_or(REPLACEMENT_CHARACTER);
                    let valid = if first { is_identifier_start(ch) } else { is_identifier_part(ch) };
                    if !valid {
                        break;
                    }
                    name.push(ch);
                    self.pos += ch.len_utf8();
                }
                None => break,
            }
        }

        if name.is_empty() {
            return None;
        }
        if escaped {
            Some((Cow::Owned(name), true))
        } else {
            Some((Cow::Borrowed(&self.source[start..self.pos]), false))
        }
    }

    /// Decode `\uXXXX` or `\u{X...}` with the cursor on the backslash.
    /// Returns `None` for malformed escapes and values above 0x10FFFF.
    fn scan_unicode_escape(&mut self) -> Option<u32> {
        self.pos += 2;
        if self.bytes.get(self.pos) == Some(&b'{') {
            let digits_start = self.pos + 1;
            let mut end = digits_start;
            let mut value: u32 = 0;
            while let Some(digit) = self.bytes.get(end).and_then(|b| hex_value(*b)) {
                value = value.saturating_mul(16).saturating_add(digit);
                end += 1;
            }
            if end == digits_start || self.bytes.get(end) != Some(&b'}') {
                self.pos = end;
                return None;
            }
            self.pos = end + 1;
            return (value <= 0x10FFFF).then_some(value);
        }

        let mut value = 0;
        for i in 0..4 {
            match self.bytes.get(self.pos + i).and_then(|b| hex_value(*b)) {
                Some(digit) => value = value * 16 + digit,
                None => {
                    self.pos += i;
                    return None;
                }
            }
        }
        self.pos += 4;
        Some(value)
    }

    // ========================================================================
    // Strings and escapes
    // ========================================================================

    fn scan_string(&mut self, flags: TokenFlags) -> Token<'a> {
        let start = self.pos;
        let quote = self.bytes[start];
        let mut flags = flags;
        let mut cooked: Option<String> = None;
        self.pos += 1;
        let mut chunk_start = self.pos;

        loop {
            match self.bytes.get(self.pos) {
                None | Some(b'\n') | Some(b'\r') => {
                    return self.illegal(
                        start,
                        flags | TokenFlags::UNTERMINATED,
                        &messages::UNTERMINATED_STRING_LITERAL,
                    );
                }
                Some(&b) if b == quote => {
                    let value = self.take_cooked(cooked, chunk_start);
                    self.pos += 1;
                    return self.finish(TokenKind::StringLiteral, start, flags, value, None);
                }
                Some(b'\\') => {
                    let out = cooked.get_or_insert_with(String::new);
                    out.push_str(&self.source[chunk_start..self.pos]);
                    self.scan_escape(out, &mut flags, false);
                    chunk_start = self.pos;
                }
                Some(_) => self.pos += 1,
            }
        }
    }

    /// The cooked value ending at the cursor: borrowed when nothing was
    /// decoded.
    fn take_cooked(&self, cooked: Option<String>, chunk_start: usize) -> Cow<'a, str> {
        let tail = &self.source[chunk_start..self.pos];
        match cooked {
            None => Cow::Borrowed(tail),
            Some(mut out) => {
                out.push_str(tail);
                Cow::Owned(out)
            }
        }
    }

    /// Decode one escape sequence with the cursor on the backslash.
    ///
    /// Invalid escapes push U+FFFD and set `CONTAINS_INVALID_ESCAPE`. In
    /// templates, octal escapes are invalid.
    fn scan_escape(&mut self, out: &mut String, flags: &mut TokenFlags, in_template: bool) {
        self.pos += 1;
        let Some(&b) = self.bytes.get(self.pos) else {
            return;
        };
        match b {
            b'0' if !self.peek(1).is_some_and(is_digit) => {
                self.pos += 1;
                out.push('\0');
            }
            b'0'..=b'9' if in_template => {
                self.pos += 1;
                invalid_escape(out, flags);
            }
            b'0'..=b'7' => {
                let max_len = if b <= b'3' { 3 } else { 2 };
                let mut value = 0u32;
                let mut len = 0;
                while len < max_len {
                    match self.bytes.get(self.pos) {
                        Some(&d) if is_octal_digit(d) => {
                            value = value * 8 + (d - b'0') as u32;
                            self.pos += 1;
                            len += 1;
                        }
                        _ => break,
                    }
                }
                out.push(char::from_u32(value).unwrap_or(REPLACEMENT_CHARACTER));
            }
            b'8' | b'9' => {
                self.pos += 1;
                out.push(b as char);
            }
            b'b' => self.push_escaped(out, '\u{0008}'),
            b'f' => self.push_escaped(out, '\u{000C}'),
            b'n' => self.push_escaped(out, '\n'),
            b'r' => self.push_escaped(out, '\r'),
            b't' => self.push_escaped(out, '\t'),
            b'v' => self.push_escaped(out, '\u{000B}'),
            b'\r' => {
                self.pos += 1;
                if self.bytes.get(self.pos) == Some(&b'\n') {
                    self.pos += 1;
                }
            }
            b'\n' => self.pos += 1,
            b'x' => {
                let hi = self.peek(1).and_then(hex_value);
                let lo = self.peek(2).and_then(hex_value);
                match (hi, lo) {
                    (Some(hi), Some(lo)) => {
                        self.pos += 3;
                        out.push(char::from_u32(hi * 16 + lo).unwrap_or(REPLACEMENT_CHARACTER));
                    }
                    _ => {
                        self.pos += 1;
                        invalid_escape(out, flags);
                    }
                }
            }
            b'u' => {
                self.pos -= 1;
                self.scan_unicode_escape_into(out, flags);
            }
            _ => {
                let ch = self.char_at(self.pos).unwrap_or(REPLACEMENT_CHARACTER);
                self.pos += ch.len_utf8();
                // U+2028 / U+2029 after a backslash are line continuations.
                if ch != LINE_SEPARATOR && ch != PARAGRAPH_SEPARATOR {
                    out.push(ch);
                }
            }
        }
    }

    #[inline]
    fn push_escaped(&mut self, out: &mut String, ch: char) {
        self.pos += 1;
        out.push(ch);
    }

    /// A `\u` escape inside a string or template, combining surrogate pairs.
    fn scan_unicode_escape_into(&mut self, out: &mut String, flags: &mut TokenFlags) {
        match self.scan_unicode_escape() {
            Some(high @ 0xD800..=0xDBFF) => {
                let resume = self.pos;
                if self.at(b"\\u") {
                    if let Some(low @ 0xDC00..=0xDFFF) = self.scan_unicode_escape() {
                        let combined = 0x10000 + ((high - 0xD800) << 10) + (low - 0xDC00);
                        out.push(char::from_u32(combined).unwrap_or(REPLACEMENT_CHARACTER));
                        return;
                    }
                }
                self.pos = resume;
                invalid_escape(out, flags);
            }
            Some(value) => match char::from_u32(value) {
                Some(ch) => out.push(ch),
                None => invalid_escape(out, flags),
            },
            None => invalid_escape(out, flags),
        }
    }

    // ========================================================================
    // Templates
    // ========================================================================

    /// Scan a template section starting at `start`, which is either the
    /// opening backtick or the `}` closing a substitution.
    fn scan_template(&mut self, start: usize, flags: TokenFlags, continuation: bool) -> Token<'a> {
        let mut flags = flags;
        let mut cooked: Option<String> = None;
        self.pos = start + 1;
        let mut chunk_start = self.pos;

        loop {
            match self.bytes.get(self.pos) {
                None => {
                    return self.illegal(
                        start,
                        flags | TokenFlags::UNTERMINATED,
                        &messages::UNTERMINATED_TEMPLATE_LITERAL,
                    );
                }
                Some(b'`') => {
                    let value = self.take_cooked(cooked, chunk_start);
                    self.pos += 1;
                    let kind = if continuation {
                        TokenKind::TemplateTail
                    } else {
                        TokenKind::NoSubstitutionTemplateLiteral
                    };
                    return self.finish(kind, start, flags, value, None);
                }
                Some(b'$') if self.peek(1) == Some(b'{') => {
                    let value = self.take_cooked(cooked, chunk_start);
                    self.pos += 2;
                    let kind = if continuation {
                        TokenKind::TemplateMiddle
                    } else {
                        TokenKind::TemplateHead
                    };
                    return self.finish(kind, start, flags, value, None);
                }
                Some(b'\\') => {
                    let out = cooked.get_or_insert_with(String::new);
                    out.push_str(&self.source[chunk_start..self.pos]);
                    self.scan_escape(out, &mut flags, true);
                    chunk_start = self.pos;
                }
                Some(b'\r') => {
                    // Template values see `\r\n` and `\r` as `\n`.
                    let out = cooked.get_or_insert_with(String::new);
                    out.push_str(&self.source[chunk_start..self.pos]);
                    out.push('\n');
                    self.pos += 1;
                    if self.bytes.get(self.pos) == Some(&b'\n') {
                        self.pos += 1;
                    }
                    chunk_start = self.pos;
                }
                Some(_) => self.pos += 1,
            }
        }
    }

    // ========================================================================
    // Numbers
    // ========================================================================

    fn scan_number(&mut self, flags: TokenFlags) -> Token<'a> {
        let start = self.pos;
        let mut flags = flags;

        let radix = match (self.bytes[start], self.peek(1)) {
            (b'0', Some(b'x' | b'X')) => Some((16, TokenFlags::HEX_SPECIFIER, &messages::HEXADECIMAL_DIGIT_EXPECTED)),
            (b'0', Some(b'b' | b'B')) => Some((2, TokenFlags::BINARY_SPECIFIER, &messages::BINARY_DIGIT_EXPECTED)),
            (b'0', Some(b'o' | b'O')) => Some((8, TokenFlags::OCTAL_SPECIFIER, &messages::OCTAL_DIGIT_EXPECTED)),
            _ => None,
        };

        let mut is_integer = true;
        if let Some((radix, specifier, missing)) = radix {
            flags |= specifier;
            self.pos += 2;
            match self.scan_digits(radix, &mut flags) {
                Ok(0) => return self.illegal(start, flags, missing),
                Ok(_) => {}
                Err(message) => return self.illegal(start, flags, message),
            }
        } else if self.bytes[start] == b'0' && self.peek(1).is_some_and(is_digit) {
            // `017` is legacy octal; `019` is a decimal with a leading zero.
            let mut end = start + 1;
            while self.bytes.get(end).is_some_and(|b| is_digit(*b)) {
                end += 1;
            }
            self.pos = end;
            flags |= TokenFlags::LEGACY_OCTAL;
            if self.bytes[start..end].iter().all(|b| is_octal_digit(*b)) {
                return self.finish_number(start, flags, false);
            }
            if let Err(message) = self.scan_fraction_and_exponent(&mut flags, &mut is_integer) {
                return self.illegal(start, flags, message);
            }
        } else {
            if self.bytes[start] != b'.' {
                if let Err(message) = self.scan_digits(10, &mut flags) {
                    return self.illegal(start, flags, message);
                }
            }
            if let Err(message) = self.scan_fraction_and_exponent(&mut flags, &mut is_integer) {
                return self.illegal(start, flags, message);
            }
        }

        let legacy = flags.contains(TokenFlags::LEGACY_OCTAL);
        if self.bytes.get(self.pos) == Some(&b'n') {
            self.pos += 1;
            if !is_integer || legacy {
                return self.illegal(start, flags, &messages::A_BIGINT_LITERAL_MUST_BE_AN_INTEGER);
            }
            return self.finish_number(start, flags, true);
        }
        self.finish_number(start, flags, false)
    }

    /// `.digits` and `e[+-]digits` after the integer part.
    fn scan_fraction_and_exponent(
        &mut self,
        flags: &mut TokenFlags,
        is_integer: &mut bool,
    ) -> Result<(), &'static DiagnosticMessage> {
        if self.bytes.get(self.pos) == Some(&b'.') {
            *is_integer = false;
            self.pos += 1;
            self.scan_digits(10, flags)?;
        }
        if matches!(self.bytes.get(self.pos), Some(b'e' | b'E')) {
            *is_integer = false;
            *flags |= TokenFlags::SCIENTIFIC;
            self.pos += 1;
            if matches!(self.bytes.get(self.pos), Some(b'+' | b'-')) {
                self.pos += 1;
            }
            if self.scan_digits(10, flags)? == 0 {
                return Err(&messages::DIGIT_EXPECTED);
            }
        }
        Ok(())
    }

    /// Scan digits of `radix` with `_` separators. Returns the number of
    /// digits consumed. A misplaced separator still consumes the whole run.
    fn scan_digits(
        &mut self,
        radix: u32,
        flags: &mut TokenFlags,
    ) -> Result<usize, &'static DiagnosticMessage> {
        let mut count = 0;
        let mut after_separator = false;
        let mut error = None;
        while let Some(&b) = self.bytes.get(self.pos) {
            if b == b'_' {
                *flags |= TokenFlags::CONTAINS_SEPARATOR;
                if error.is_none() {
                    if after_separator {
                        error = Some(&messages::MULTIPLE_CONSECUTIVE_NUMERIC_SEPARATORS_ARE_NOT_PERMITTED);
                    } else if count == 0 {
                        error = Some(&messages::NUMERIC_SEPARATORS_ARE_NOT_ALLOWED_HERE);
                    }
                }
                after_separator = true;
                self.pos += 1;
            } else if (b as char).is_digit(radix) {
                after_separator = false;
                count += 1;
                self.pos += 1;
            } else {
                break;
            }
        }
        if after_separator && error.is_none() {
            error = Some(&messages::NUMERIC_SEPARATORS_ARE_NOT_ALLOWED_HERE);
        }
        match error {
            Some(message) => Err(message),
            None => Ok(count),
        }
    }

    /// Finish a numeric token, rejecting an identifier glued to its end.
    fn finish_number(&mut self, start: usize, flags: TokenFlags, bigint: bool) -> Token<'a> {
        let glued = match self.bytes.get(self.pos) {
            Some(b'\\') => true,
            Some(&b) if b < 0x80 => is_ascii_identifier_start(b) || is_digit(b),
            Some(_) => self.char_at(self.pos).is_some_and(is_identifier_start),
            None => false,
        };
        if glued {
            while let Some(ch) = self.char_at(self.pos) {
                if ch == '\\' || is_identifier_part(ch) {
                    self.pos += ch.len_utf8();
                } else {
                    break;
                }
            }
            return self.illegal(
                start,
                flags,
                &messages::AN_IDENTIFIER_OR_KEYWORD_CANNOT_IMMEDIATELY_FOLLOW_A_NUMERIC_LITERAL,
            );
        }
        let kind = if bigint { TokenKind::BigIntLiteral } else { TokenKind::NumericLiteral };
        let text = &self.source[start..self.pos];
        self.finish(kind, start, flags, Cow::Borrowed(text), None)
    }

    // ========================================================================
    // Re-scanning
    // ========================================================================

    /// Re-scan a `/` or `/=` token as a regular expression literal. The value
    /// of the returned token is the pattern; see [`Token::regex_flags`].
    pub fn rescan_slash(&mut self, token: &Token<'a>) -> Token<'a> {
        let start = token.start as usize;
        let mut pos = start + 1;
        let mut in_class = false;

        loop {
            match self.bytes.get(pos) {
                None | Some(b'\n') | Some(b'\r') => break,
                Some(0xE2) if self.is_unicode_line_break_at(pos) => break,
                Some(b'\\') => {
                    pos += 1;
                    match self.bytes.get(pos) {
                        None | Some(b'\n') | Some(b'\r') => break,
                        Some(0xE2) if self.is_unicode_line_break_at(pos) => break,
                        _ => pos += 1,
                    }
                }
                Some(b'/') if !in_class => {
                    let body_end = pos;
                    self.pos = pos + 1;
                    while let Some(ch) = self.char_at(self.pos) {
                        if is_identifier_part(ch) {
                            self.pos += ch.len_utf8();
                        } else {
                            break;
                        }
                    }
                    let pattern = Cow::Borrowed(&self.source[start + 1..body_end]);
                    return self.finish(TokenKind::RegularExpressionLiteral, start, token.flags, pattern, None);
                }
                Some(b'[') => {
                    in_class = true;
                    pos += 1;
                }
                Some(b']') => {
                    in_class = false;
                    pos += 1;
                }
                Some(_) => pos += 1,
            }
        }

        // Stop at a char boundary.
        while !self.source.is_char_boundary(pos) {
            pos += 1;
        }
        self.pos = pos;
        self.illegal(
            start,
            token.flags | TokenFlags::UNTERMINATED,
            &messages::UNTERMINATED_REGULAR_EXPRESSION_LITERAL,
        )
    }

    /// Re-scan a `>` token in binary-operator position, joining it with the
    /// characters that follow into `>=`, `>>`, `>>=`, `>>>` or `>>>=`.
    pub fn rescan_greater_than(&mut self, token: &Token<'a>) -> Token<'a> {
        if token.kind != TokenKind::GreaterThan {
            return token.clone();
        }
        let start = token.start as usize;
        self.pos = start;
        let (kind, len) = if self.at(b">>>=") {
            (TokenKind::GreaterThanGreaterThanGreaterThanEquals, 4)
        } else if self.at(b">>>") {
            (TokenKind::GreaterThanGreaterThanGreaterThan, 3)
        } else if self.at(b">>=") {
            (TokenKind::GreaterThanGreaterThanEquals, 3)
        } else if self.at(b">>") {
            (TokenKind::GreaterThanGreaterThan, 2)
        } else if self.at(b">=") {
            (TokenKind::GreaterThanEquals, 2)
        } else {
            (TokenKind::GreaterThan, 1)
        };
        self.punct(kind, len, token.flags)
    }

    /// Re-scan the `}` closing a template substitution as a `TemplateMiddle`
    /// or `TemplateTail`.
    pub fn rescan_template_continuation(&mut self, token: &Token<'a>) -> Token<'a> {
        self.scan_template(token.start as usize, token.flags, true)
    }

    // ========================================================================
    // JSX
    // ========================================================================

    /// Scan one piece of JSX element content: a text run up to `{` or `<`,
    /// or one of `{`, `<`, `</`. Whitespace is part of the text.
    pub fn scan_jsx_child(&mut self) -> Token<'a> {
        self.pending_line_break = false;
        let start = self.pos;
        match self.bytes.get(start) {
            None => self.finish(TokenKind::EndOfFile, start, TokenFlags::NONE, Cow::Borrowed(""), None),
            Some(b'{') => self.punct(TokenKind::OpenBrace, 1, TokenFlags::NONE),
            Some(b'<') if self.peek(1) == Some(b'/') => {
                self.punct(TokenKind::LessThanSlash, 2, TokenFlags::NONE)
            }
            Some(b'<') => self.punct(TokenKind::LessThan, 1, TokenFlags::NONE),
            Some(_) => {
                let end = memchr2(b'{', b'<', &self.bytes[start..]).map_or(self.bytes.len(), |i| start + i);
                self.pos = end;
                let text = &self.source[start..end];
                self.finish(TokenKind::JsxText, start, TokenFlags::NONE, decode_jsx_entities(text), None)
            }
        }
    }

    /// A quoted JSX attribute value: no escapes, line breaks allowed.
    fn scan_jsx_string(&mut self, flags: TokenFlags) -> Token<'a> {
        let start = self.pos;
        let quote = self.bytes[start];
        match memchr::memchr(quote, &self.bytes[start + 1..]) {
            Some(offset) => {
                let close = start + 1 + offset;
                self.pos = close + 1;
                let value = decode_jsx_entities(&self.source[start + 1..close]);
                self.finish(TokenKind::StringLiteral, start, flags, value, None)
            }
            None => {
                self.pos = self.bytes.len();
                self.illegal(
                    start,
                    flags | TokenFlags::UNTERMINATED,
                    &messages::UNTERMINATED_STRING_LITERAL,
                )
            }
        }
    }
}

#[inline]
fn invalid_escape(out: &mut String, flags: &mut TokenFlags) {
    out.push(REPLACEMENT_CHARACTER);
    *flags |= TokenFlags::CONTAINS_INVALID_ESCAPE;
}

fn contains_line_break(text: &str) -> bool {
    memchr2(b'\n', b'\r', text.as_bytes()).is_some()
        || text.contains(LINE_SEPARATOR)
        || text.contains(PARAGRAPH_SEPARATOR)
}

/// Decode the XML entities that may appear in JSX text and attribute strings.
fn decode_jsx_entities(text: &str) -> Cow<'_, str> {
    if !text.contains('&') {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let after = &rest[amp + 1..];
        let decoded = after
            .find(';')
            .filter(|semi| *semi <= 10)
            .and_then(|semi| decode_entity(&after[..semi]).map(|ch| (ch, semi)));
        match decoded {
            Some((ch, semi)) => {
                out.push(ch);
                rest = &after[semi + 1..];
            }
            None => {
                out.push('&');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    Cow::Owned(out)
}

fn decode_entity(name: &str) -> Option<char> {
    if let Some(hex) = name.strip_prefix("#x").or_else(|| name.strip_prefix("#X")) {
        return u32::from_str_radix(hex, 16).ok().and_then(char::from_u32);
    }
    if let Some(dec) = name.strip_prefix('#') {
        return dec.parse::<u32>().ok().and_then(char::from_u32);
    }
    match name {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some('\u{00A0}'),
        "copy" => Some('\u{00A9}'),
        "reg" => Some('\u{00AE}'),
        "trade" => Some('\u{2122}'),
        "hellip" => Some('\u{2026}'),
        "mdash" => Some('\u{2014}'),
        "ndash" => Some('\u{2013}'),
        "times" => Some('\u{00D7}'),
        "middot" => Some('\u{00B7}'),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        let mut scanner = Scanner::new(source);
        let mut kinds = Vec::new();
        loop {
            let token = scanner.scan();
            if token.kind == TokenKind::EndOfFile {
                return kinds;
            }
            kinds.push(token.kind);
        }
    }

    #[test]
    fn test_scan_simple_tokens() {
        let mut scanner = Scanner::new("let x = 42;");
        assert_eq!(scanner.scan().kind, TokenKind::LetKeyword);
        let ident = scanner.scan();
        assert_eq!(ident.kind, TokenKind::Identifier);
        assert_eq!(ident.value, "x");
        assert_eq!(scanner.scan().kind, TokenKind::Equals);
        let number = scanner.scan();
        assert_eq!(number.kind, TokenKind::NumericLiteral);
        assert_eq!(number.text, "42");
        assert_eq!(scanner.scan().kind, TokenKind::Semicolon);
        assert_eq!(scanner.scan().kind, TokenKind::EndOfFile);
        assert_eq!(scanner.scan().kind, TokenKind::EndOfFile);
    }

    #[test]
    fn test_greater_than_is_always_single() {
        assert_eq!(
            kinds("a >>>= b"),
            vec![TokenKind::Identifier, TokenKind::GreaterThan, TokenKind::GreaterThan, TokenKind::GreaterThan, TokenKind::Equals, TokenKind::Identifier]
        );
    }

    #[test]
    fn test_rescan_greater_than() {
        let mut scanner = Scanner::new("a >>= b");
        scanner.scan();
        let gt = scanner.scan();
        let joined = scanner.rescan_greater_than(&gt);
        assert_eq!(joined.kind, TokenKind::GreaterThanGreaterThanEquals);
        assert_eq!(joined.text, ">>=");
        assert_eq!(scanner.scan().kind, TokenKind::Identifier);
    }

    #[test]
    fn test_optional_chain_vs_conditional() {
        assert_eq!(kinds("a?.b")[1], TokenKind::QuestionDot);
        assert_eq!(kinds("a?.5:b")[1], TokenKind::Question);
    }

    #[test]
    fn test_string_escapes() {
        let mut scanner = Scanner::new(r#""a\n\x41B\u{43}\101\
b""#);
        let token = scanner.scan();
        assert_eq!(token.kind, TokenKind::StringLiteral);
        assert_eq!(token.value, "a\nABCAb");
    }

    #[test]
    fn test_surrogate_pairs() {
        let mut scanner = Scanner::new(r#"'\uD83D\uDE00' '\uD83D'"#);
        assert_eq!(scanner.scan().value, "\u{1F600}");
        let lone = scanner.scan();
        assert_eq!(lone.value, "\u{FFFD}");
        assert!(lone.flags.contains(TokenFlags::CONTAINS_INVALID_ESCAPE));
    }

    #[test]
    fn test_invalid_escapes_do_not_abort() {
        let mut scanner = Scanner::new(r#"'\x4' '\u{110000}'"#);
        let short = scanner.scan();
        assert_eq!(short.kind, TokenKind::StringLiteral);
        assert_eq!(short.value, "\u{FFFD}4");
        assert_eq!(scanner.scan().value, "\u{FFFD}");
    }

    #[test]
    fn test_unterminated_string() {
        let mut scanner = Scanner::new("'abc\nx");
        let token = scanner.scan();
        assert_eq!(token.kind, TokenKind::Illegal);
        assert_eq!(token.error.map(|m| m.code), Some(1002));
        let next = scanner.scan();
        assert_eq!(next.kind, TokenKind::Identifier);
        assert!(next.has_preceding_line_break());
    }

    #[test]
    fn test_numbers() {
        let mut scanner = Scanner::new("0x1F 0b101 0o17 017 019 1_000 1.5e-3 10n .5");
        let expected = [
            (TokenFlags::HEX_SPECIFIER, "0x1F"),
            (TokenFlags::BINARY_SPECIFIER, "0b101"),
            (TokenFlags::OCTAL_SPECIFIER, "0o17"),
            (TokenFlags::LEGACY_OCTAL, "017"),
            (TokenFlags::LEGACY_OCTAL, "019"),
            (TokenFlags::CONTAINS_SEPARATOR, "1_000"),
            (TokenFlags::SCIENTIFIC, "1.5e-3"),
        ];
        for (flag, text) in expected {
            let token = scanner.scan();
            assert_eq!(token.kind, TokenKind::NumericLiteral, "{}", text);
            assert_eq!(token.text, text);
            assert!(token.flags.contains(flag), "{}", text);
        }
        assert_eq!(scanner.scan().kind, TokenKind::BigIntLiteral);
        assert_eq!(scanner.scan().text, ".5");
    }

    #[test]
    fn test_malformed_numbers() {
        let mut scanner = Scanner::new("0x 1e 3in 1__0 1.5n");
        assert_eq!(scanner.scan().error.map(|m| m.code), Some(1125));
        assert_eq!(scanner.scan().error.map(|m| m.code), Some(1124));
        let glued = scanner.scan();
        assert_eq!(glued.kind, TokenKind::Illegal);
        assert_eq!(glued.text, "3in");
        assert_eq!(glued.error.map(|m| m.code), Some(1351));
        assert_eq!(scanner.scan().error.map(|m| m.code), Some(6189));
        assert_eq!(scanner.scan().error.map(|m| m.code), Some(1353));
    }

    #[test]
    fn test_template_sections() {
        let mut scanner = Scanner::new("`a${b}c${d}e`");
        let head = scanner.scan();
        assert_eq!(head.kind, TokenKind::TemplateHead);
        assert_eq!(head.value, "a");
        assert_eq!(scanner.scan().kind, TokenKind::Identifier);
        let close = scanner.scan();
        assert_eq!(close.kind, TokenKind::CloseBrace);
        let middle = scanner.rescan_template_continuation(&close);
        assert_eq!(middle.kind, TokenKind::TemplateMiddle);
        assert_eq!(middle.value, "c");
        assert_eq!(middle.template_raw(), "c");
        scanner.scan();
        let close = scanner.scan();
        let tail = scanner.rescan_template_continuation(&close);
        assert_eq!(tail.kind, TokenKind::TemplateTail);
        assert_eq!(tail.text, "}e`");
        assert_eq!(scanner.scan().kind, TokenKind::EndOfFile);
    }

    #[test]
    fn test_template_normalizes_carriage_returns() {
        let mut scanner = Scanner::new("`a\r\nb`");
        let token = scanner.scan();
        assert_eq!(token.value, "a\nb");
        assert_eq!(token.template_raw(), "a\nb");
    }

    #[test]
    fn test_rescan_slash() {
        let mut scanner = Scanner::new("/[/]+\\//gi.test(x)");
        let slash = scanner.scan();
        assert_eq!(slash.kind, TokenKind::Slash);
        let regex = scanner.rescan_slash(&slash);
        assert_eq!(regex.kind, TokenKind::RegularExpressionLiteral);
        assert_eq!(regex.value, "[/]+\\/");
        assert_eq!(regex.regex_flags(), "gi");
        assert_eq!(scanner.scan().kind, TokenKind::Dot);
    }

    #[test]
    fn test_unterminated_regex() {
        let mut scanner = Scanner::new("/abc\n");
        let slash = scanner.scan();
        let regex = scanner.rescan_slash(&slash);
        assert_eq!(regex.kind, TokenKind::Illegal);
        assert_eq!(regex.error.map(|m| m.code), Some(1161));
    }

    #[test]
    fn test_comments_as_tokens() {
        let mut scanner = Scanner::new("a\n/* x */ b // y");
        scanner.set_skip_comments(false);
        assert_eq!(scanner.scan().kind, TokenKind::Identifier);
        let block = scanner.scan();
        assert_eq!(block.kind, TokenKind::MultiLineComment);
        assert_eq!(block.value, " x ");
        let b = scanner.scan();
        assert_eq!(b.value, "b");
        assert!(b.has_preceding_line_break());
        let line = scanner.scan();
        assert_eq!(line.kind, TokenKind::SingleLineComment);
        assert_eq!(line.value, " y");
    }

    #[test]
    fn test_block_comment_line_break_is_preceding() {
        let mut scanner = Scanner::new("a /*\n*/ b");
        scanner.scan();
        assert!(scanner.scan().has_preceding_line_break());
    }

    #[test]
    fn test_unterminated_block_comment() {
        let mut scanner = Scanner::new("a /* b");
        scanner.scan();
        let token = scanner.scan();
        assert_eq!(token.kind, TokenKind::Illegal);
        assert_eq!(token.error.map(|m| m.code), Some(1010));
        assert_eq!(scanner.scan().kind, TokenKind::EndOfFile);
    }

    #[test]
    fn test_private_identifier() {
        let mut scanner = Scanner::new("#foo # 1");
        let private = scanner.scan();
        assert_eq!(private.kind, TokenKind::PrivateIdentifier);
        assert_eq!(private.text, "#foo");
        assert_eq!(private.value, "foo");
        assert_eq!(scanner.scan().kind, TokenKind::Hash);
    }

    #[test]
    fn test_unicode_identifiers() {
        let mut scanner = Scanner::new("café \\u0061bc \\u{69}f");
        assert_eq!(scanner.scan().value, "café");
        let escaped = scanner.scan();
        assert_eq!(escaped.value, "abc");
        assert!(escaped.flags.contains(TokenFlags::UNICODE_ESCAPE));
        // An escaped keyword is not a keyword.
        assert_eq!(scanner.scan().kind, TokenKind::Identifier);
    }

    #[test]
    fn test_line_and_column() {
        let mut scanner = Scanner::new("a\n  é b");
        let a = scanner.scan();
        assert_eq!((a.line, a.column), (1, 0));
        let e = scanner.scan();
        assert_eq!((e.line, e.column), (2, 2));
        let b = scanner.scan();
        assert_eq!((b.line, b.column), (2, 4));
    }

    #[test]
    fn test_shebang() {
        let mut scanner = Scanner::new("#!/usr/bin/env node\nx");
        scanner.skip_shebang();
        let x = scanner.scan();
        assert_eq!(x.kind, TokenKind::Identifier);
        assert_eq!(x.line, 2);
    }

    #[test]
    fn test_look_ahead_restores_state() {
        let mut scanner = Scanner::new("a b c");
        scanner.scan();
        let peeked = scanner.look_ahead(|s| {
            s.scan();
            s.scan().kind
        });
        assert_eq!(peeked, TokenKind::Identifier);
        assert_eq!(scanner.scan().value, "b");
    }

    #[test]
    fn test_jsx_mode() {
        let mut scanner = Scanner::new("data-id=\"a\nb &amp; c\">text &lt; {x}</div>");
        scanner.set_in_jsx(true);
        let name = scanner.scan();
        assert_eq!(name.kind, TokenKind::JsxIdentifier);
        assert_eq!(name.value, "data-id");
        assert_eq!(scanner.scan().kind, TokenKind::Equals);
        let value = scanner.scan();
        assert_eq!(value.kind, TokenKind::StringLiteral);
        assert_eq!(value.value, "a\nb & c");
        assert_eq!(scanner.scan().kind, TokenKind::GreaterThan);
        let text = scanner.scan_jsx_child();
        assert_eq!(text.kind, TokenKind::JsxText);
        assert_eq!(text.text, "text &lt; ");
        assert_eq!(text.value, "text < ");
        assert_eq!(scanner.scan_jsx_child().kind, TokenKind::OpenBrace);
        scanner.set_in_jsx(false);
        scanner.scan();
        scanner.scan();
        assert_eq!(scanner.scan_jsx_child().kind, TokenKind::LessThanSlash);
    }

    #[test]
    fn test_invalid_character() {
        let mut scanner = Scanner::new("a \u{0001} ☃ b");
        scanner.scan();
        assert_eq!(scanner.scan().kind, TokenKind::Illegal);
        let snowman = scanner.scan();
        assert_eq!(snowman.kind, TokenKind::Illegal);
        assert_eq!(snowman.text, "☃");
        assert_eq!(scanner.scan().value, "b");
    }
}
