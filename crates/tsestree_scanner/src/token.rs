//! Tokens produced by the scanner.

use std::borrow::Cow;
use tsestree_ast::{TokenFlags, TokenKind};
use tsestree_core::TextRange;
use tsestree_diagnostics::DiagnosticMessage;

/// A scanned token.
///
/// `text` is the exact source slice. `value` is the processed value: the
/// name for identifiers (escapes decoded, `#` dropped for private names),
/// the cooked contents for strings and templates, and the pattern for
/// regular expressions.
#[derive(Debug, Clone, PartialEq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    pub value: Cow<'a, str>,
    /// Byte offset of the first character.
    pub start: u32,
    /// Byte offset one past the last character.
    pub end: u32,
    /// 1-based line of `start`.
    pub line: u32,
    /// 0-based UTF-16 column of `start`.
    pub column: u32,
    pub flags: TokenFlags,
    /// Set for `TokenKind::Illegal` tokens.
    pub error: Option<&'static DiagnosticMessage>,
}

impl<'a> Token<'a> {
    #[inline]
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    pub fn range(&self) -> TextRange {
        TextRange::new(self.start, self.end)
    }

    /// The length of this token in bytes.
    pub fn len(&self) -> u32 {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Whether there was a line break before this token.
    pub fn has_preceding_line_break(&self) -> bool {
        self.flags.contains(TokenFlags::PRECEDING_LINE_BREAK)
    }

    /// The raw text between a template token's delimiters, with `\r\n` and
    /// `\r` normalized to `\n`.
    pub fn template_raw(&self) -> String {
        let open = 1;
        let close = match self.kind {
            TokenKind::TemplateHead | TokenKind::TemplateMiddle => 2,
            _ => 1,
        };
        let inner = self
            .text
            .get(open..self.text.len().saturating_sub(close))
            .unwrap_or("");
        if inner.contains('\r') {
            inner.replace("\r\n", "\n").replace('\r', "\n")
        } else {
            inner.to_string()
        }
    }

    /// The flags of a regular expression token: the identifier characters
    /// after the closing `/`.
    pub fn regex_flags(&self) -> &'a str {
        match self.text.rfind('/') {
            Some(slash) if slash > 0 => &self.text[slash + 1..],
            _ => "",
        }
    }
}
