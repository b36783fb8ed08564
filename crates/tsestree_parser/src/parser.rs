//! The parser core.
//!
//! Holds the token cursor over the scanner, the grammar context, and the
//! side tables (errors, comments, tokens) that end up on the result. The
//! grammar itself lives in the sibling modules as further `impl Parser`
//! blocks.

use rustc_hash::FxHashSet;
use std::borrow::Cow;
use tracing::{debug, trace};
use tsestree_ast::*;
use tsestree_core::{SourceLocation, TextRange};
use tsestree_diagnostics::{messages, DiagnosticMessage, ParseError};
use tsestree_scanner::{Scanner, ScannerState, Token};

use crate::context::{Context, Label};
use crate::options::ParseOptions;
use crate::ParseOutput;

/// Maximum recursion depth to prevent stack overflow on deeply nested input.
pub(crate) const MAX_RECURSION_DEPTH: u32 = 200;

pub(crate) type PResult<T> = Result<T, ParseError>;

/// Everything needed to resume parsing from an earlier token.
pub(crate) struct Checkpoint<'a> {
    scanner: ScannerState,
    token: Token<'a>,
    prev_token_end: u32,
    errors: usize,
    comments: usize,
    tokens: usize,
}

/// The parser produces a `Program` from TypeScript or JavaScript source.
pub struct Parser<'a> {
    pub(crate) source: &'a str,
    pub(crate) scanner: Scanner<'a>,
    pub(crate) options: ParseOptions,
    pub(crate) jsx: bool,
    /// The current token.
    pub(crate) token: Token<'a>,
    /// End offset of the last consumed token; the end of most nodes.
    pub(crate) prev_token_end: u32,
    pub(crate) ctx: Context,
    pub(crate) labels: Vec<Label>,
    pub(crate) errors: Vec<ParseError>,
    comments: Vec<Comment>,
    tokens: Vec<EsToken>,
    /// Tracks recursion depth to prevent stack overflow on deeply nested input.
    recursion_depth: u32,
    /// Token starts where an arrow parameter list has already failed to
    /// parse. Not rolled back on rewind.
    pub(crate) failed_arrow_heads: FxHashSet<u32>,
}

impl<'a> Parser<'a> {
    pub fn new(source: &'a str, options: &ParseOptions) -> Self {
        let mut scanner = Scanner::new(source);
        scanner.set_skip_comments(false);
        Self {
            source,
            scanner,
            jsx: options.jsx_enabled(),
            options: options.clone(),
            token: Token {
                kind: TokenKind::EndOfFile,
                text: "",
                value: Cow::Borrowed(""),
                start: 0,
                end: 0,
                line: 1,
                column: 0,
                flags: TokenFlags::NONE,
                error: None,
            },
            prev_token_end: 0,
            ctx: Context::NONE,
            labels: Vec::new(),
            errors: Vec::new(),
            comments: Vec::new(),
            tokens: Vec::new(),
            recursion_depth: 0,
            failed_arrow_heads: FxHashSet::default(),
        }
    }

    /// Parse the whole source. Never fails; errors are collected on the
    /// output next to the (possibly partial) tree.
    pub fn parse(mut self) -> ParseOutput {
        trace!(len = self.source.len(), jsx = self.jsx, source_type = ?self.options.source_type, "parse program");
        self.scanner.skip_shebang();
        self.token = self.next_token();

        let ctx = match self.options.source_type {
            SourceType::Module => Context::ALLOW_AWAIT,
            SourceType::Script => Context::NONE,
        };
        let body = self.with_context(ctx, |p| p.parse_directives_and_statements(|_| false));

        let data = self.node_span(NodeKind::Program, 0, self.source.len() as u32);
        let program = Program {
            data,
            body,
            source_type: self.options.source_type,
            comments: self.options.comment.then(|| std::mem::take(&mut self.comments)),
            tokens: self.options.tokens.then(|| std::mem::take(&mut self.tokens)),
        };

        let mut errors = self.errors;
        errors.sort_by_key(|error| error.start);
        errors.dedup_by(|a, b| a.start == b.start && a.code == b.code);
        trace!(statements = program.body.len(), errors = errors.len(), "parsed program");

        ParseOutput {
            program,
            errors,
            allow_invalid_ast: self.options.allow_invalid_ast,
        }
    }

    // ========================================================================
    // Token management
    // ========================================================================

    #[inline]
    pub(crate) fn kind(&self) -> TokenKind {
        self.token.kind
    }

    #[inline]
    pub(crate) fn at(&self, kind: TokenKind) -> bool {
        self.token.kind == kind
    }

    #[inline]
    pub(crate) fn start(&self) -> u32 {
        self.token.start
    }

    /// Whether a line break separates the current token from the previous one.
    #[inline]
    pub(crate) fn has_line_break(&self) -> bool {
        self.token.has_preceding_line_break()
    }

    /// Scan the next grammar token, collecting any comments before it.
    fn next_token(&mut self) -> Token<'a> {
        loop {
            let token = self.scanner.scan();
            if token.kind.is_comment() {
                self.collect_comment(&token);
                continue;
            }
            return token;
        }
    }

    fn consume_current(&mut self) {
        self.prev_token_end = self.token.end;
        if self.options.tokens {
            self.collect_token();
        }
    }

    /// Consume the current token.
    pub(crate) fn bump(&mut self) {
        self.consume_current();
        self.token = self.next_token();
    }

    /// Consume the current token and scan the next one as JSX element
    /// content.
    pub(crate) fn bump_jsx_child(&mut self) {
        self.consume_current();
        self.token = self.scanner.scan_jsx_child();
    }

    pub(crate) fn eat(&mut self, kind: TokenKind) -> bool {
        if self.at(kind) {
            self.bump();
            true
        } else {
            false
        }
    }

    pub(crate) fn expect(&mut self, kind: TokenKind) -> PResult<()> {
        if self.at(kind) {
            self.bump();
            Ok(())
        } else {
            Err(self.expected(kind.text()))
        }
    }

    /// The token after the current one, without consuming anything.
    pub(crate) fn peek(&mut self) -> Token<'a> {
        self.peek_nth(1)
    }

    #[inline]
    pub(crate) fn peek_kind(&mut self) -> TokenKind {
        self.peek().kind
    }

    /// The `n`th token after the current one (`peek_nth(1) == peek()`).
    pub(crate) fn peek_nth(&mut self, n: usize) -> Token<'a> {
        self.scanner.look_ahead(|scanner| {
            let mut token = scan_significant(scanner);
            for _ in 1..n {
                token = scan_significant(scanner);
            }
            token
        })
    }

    /// Whether the next token is on the same line as the current one.
    pub(crate) fn next_is_on_same_line(&mut self) -> bool {
        !self.peek().has_preceding_line_break()
    }

    pub(crate) fn can_insert_semicolon(&self) -> bool {
        matches!(self.kind(), TokenKind::Semicolon | TokenKind::CloseBrace | TokenKind::EndOfFile)
            || self.has_line_break()
    }

    /// Consume a `;`, or accept its automatic insertion.
    pub(crate) fn expect_semicolon(&mut self) -> PResult<()> {
        if self.eat(TokenKind::Semicolon) || self.can_insert_semicolon() {
            Ok(())
        } else {
            Err(self.expected(";"))
        }
    }

    /// Join a `>` with what follows in binary-operator position.
    pub(crate) fn rescan_greater_than(&mut self) {
        if self.at(TokenKind::GreaterThan) {
            self.token = self.scanner.rescan_greater_than(&self.token);
        }
    }

    /// Re-read a `/` or `/=` as a regular expression literal.
    pub(crate) fn rescan_slash(&mut self) {
        if matches!(self.kind(), TokenKind::Slash | TokenKind::SlashEquals) {
            self.token = self.scanner.rescan_slash(&self.token);
        }
    }

    /// Re-read the `}` closing a template substitution.
    pub(crate) fn rescan_template_continuation(&mut self) {
        if self.at(TokenKind::CloseBrace) {
            self.token = self.scanner.rescan_template_continuation(&self.token);
        }
    }

    // ========================================================================
    // Speculation
    // ========================================================================

    pub(crate) fn checkpoint(&self) -> Checkpoint<'a> {
        Checkpoint {
            scanner: self.scanner.checkpoint(),
            token: self.token.clone(),
            prev_token_end: self.prev_token_end,
            errors: self.errors.len(),
            comments: self.comments.len(),
            tokens: self.tokens.len(),
        }
    }

    pub(crate) fn rewind(&mut self, checkpoint: Checkpoint<'a>) {
        self.scanner.rewind(checkpoint.scanner);
        self.token = checkpoint.token;
        self.prev_token_end = checkpoint.prev_token_end;
        self.errors.truncate(checkpoint.errors);
        self.comments.truncate(checkpoint.comments);
        self.tokens.truncate(checkpoint.tokens);
    }

    /// Run `f` and restore the parser afterwards, whatever it consumed.
    pub(crate) fn look_ahead<T>(&mut self, f: impl FnOnce(&mut Self) -> T) -> T {
        let checkpoint = self.checkpoint();
        let result = f(self);
        self.rewind(checkpoint);
        result
    }

    /// Run `f` speculatively: keep its result on success, otherwise rewind
    /// to where it started and return `None`.
    pub(crate) fn try_parse<T>(&mut self, f: impl FnOnce(&mut Self) -> PResult<T>) -> Option<T> {
        let checkpoint = self.checkpoint();
        match f(self) {
            Ok(value) => Some(value),
            Err(error) => {
                debug!(at = checkpoint.token.start, reason = %error.message, "speculative parse rewound");
                self.rewind(checkpoint);
                None
            }
        }
    }

    // ========================================================================
    // Context
    // ========================================================================

    /// Run `f` under `ctx`, restoring the current context afterwards.
    pub(crate) fn with_context<T>(&mut self, ctx: Context, f: impl FnOnce(&mut Self) -> T) -> T {
        let saved = std::mem::replace(&mut self.ctx, ctx);
        let result = f(self);
        self.ctx = saved;
        result
    }

    #[inline]
    pub(crate) fn in_context(&self, flags: Context) -> bool {
        self.ctx.intersects(flags)
    }

    /// Run `f` one nesting level deeper, failing instead of recursing past
    /// `MAX_RECURSION_DEPTH`.
    pub(crate) fn guarded<T>(&mut self, f: impl FnOnce(&mut Self) -> PResult<T>) -> PResult<T> {
        if self.recursion_depth >= MAX_RECURSION_DEPTH {
            return Err(self.error_here(&messages::MAXIMUM_NESTING_DEPTH_EXCEEDED, &[]));
        }
        self.recursion_depth += 1;
        let result = f(self);
        self.recursion_depth -= 1;
        result
    }

    // ========================================================================
    // Errors
    // ========================================================================

    pub(crate) fn error_at(
        &self,
        message: &DiagnosticMessage,
        args: &[&str],
        start: u32,
        end: u32,
    ) -> ParseError {
        let position = self.scanner.position_of(start);
        ParseError::new(message, args, start, end, position.line, position.column)
    }

    /// An error covering the current token.
    pub(crate) fn error_here(&self, message: &DiagnosticMessage, args: &[&str]) -> ParseError {
        self.error_at(message, args, self.token.start, self.token.end)
    }

    /// Record an error without interrupting the parse.
    pub(crate) fn report(&mut self, message: &DiagnosticMessage, args: &[&str], start: u32, end: u32) {
        let error = self.error_at(message, args, start, end);
        self.errors.push(error);
    }

    /// The lexical error of an illegal token, if the current token is one.
    fn lexical_error(&self) -> Option<ParseError> {
        match (self.token.kind, self.token.error) {
            (TokenKind::Illegal, Some(message)) => Some(self.error_here(message, &[])),
            (TokenKind::Illegal, None) => Some(self.error_here(&messages::INVALID_CHARACTER, &[])),
            _ => None,
        }
    }

    /// `'{text}' expected.` at the current token.
    pub(crate) fn expected(&self, text: &str) -> ParseError {
        self.lexical_error()
            .unwrap_or_else(|| self.error_here(&messages::_0_EXPECTED, &[text]))
    }

    /// A specific message at the current token, unless the token is illegal.
    pub(crate) fn expected_message(&self, message: &DiagnosticMessage) -> ParseError {
        self.lexical_error().unwrap_or_else(|| self.error_here(message, &[]))
    }

    pub(crate) fn unexpected(&self) -> ParseError {
        self.expected_message(&messages::UNEXPECTED_TOKEN)
    }

    // ========================================================================
    // Node construction
    // ========================================================================

    fn location(&self, range: TextRange) -> SourceLocation {
        self.scanner.line_map().location_of(range)
    }

    fn fill_position(&self, data: &mut NodeData) {
        if self.options.range {
            data.range = Some(data.span);
        }
        if self.options.loc {
            data.loc = Some(self.location(data.span));
        }
    }

    pub(crate) fn node_span(&self, kind: NodeKind, start: u32, end: u32) -> NodeData {
        let mut data = NodeData::new(kind, TextRange::new(start, end));
        self.fill_position(&mut data);
        data
    }

    /// Node data spanning from `start` to the end of the last consumed token.
    #[inline]
    pub(crate) fn node(&self, kind: NodeKind, start: u32) -> NodeData {
        self.node_span(kind, start, self.prev_token_end.max(start))
    }

    pub(crate) fn set_span(&self, data: &mut NodeData, start: u32, end: u32) {
        data.span = TextRange::new(start, end);
        self.fill_position(data);
    }

    pub(crate) fn empty_node(&self, kind: NodeKind, start: u32) -> EmptyNode {
        EmptyNode { data: self.node(kind, start) }
    }

    pub(crate) fn identifier(&self, name: impl Into<String>, start: u32, end: u32) -> Identifier {
        let mut id = Identifier::new(name, TextRange::new(start, end));
        self.fill_position(&mut id.data);
        id
    }

    // ========================================================================
    // Collection
    // ========================================================================

    fn collect_comment(&mut self, token: &Token<'a>) {
        if !self.options.comment {
            return;
        }
        let kind = match token.kind {
            TokenKind::SingleLineComment => CommentKind::Line,
            _ => CommentKind::Block,
        };
        let range = token.range();
        let loc = self.options.loc.then(|| self.location(range));
        self.comments.push(Comment {
            kind,
            value: token.value.to_string(),
            range,
            loc,
        });
    }

    fn collect_token(&mut self) {
        let token = &self.token;
        if matches!(token.kind, TokenKind::EndOfFile | TokenKind::Illegal) {
            return;
        }
        let range = token.range();
        let regex = (token.kind == TokenKind::RegularExpressionLiteral).then(|| RegExpValue {
            pattern: token.value.to_string(),
            flags: token.regex_flags().to_string(),
        });
        let es_token = EsToken {
            kind: token.kind.estree_type(),
            value: token.text.to_string(),
            range,
            loc: self.options.loc.then(|| self.location(range)),
            regex,
        };
        self.tokens.push(es_token);
    }
}

fn scan_significant<'a>(scanner: &mut Scanner<'a>) -> Token<'a> {
    loop {
        let token = scanner.scan();
        if !token.kind.is_comment() {
            return token;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parser(source: &str) -> Parser<'_> {
        let mut parser = Parser::new(source, &ParseOptions::default());
        parser.token = parser.next_token();
        parser
    }

    #[test]
    fn test_comments_are_skipped_by_the_cursor() {
        let mut p = parser("a /* x */ + // y\n b");
        assert!(p.at(TokenKind::Identifier));
        p.bump();
        assert!(p.at(TokenKind::Plus));
        assert!(!p.has_line_break());
        p.bump();
        assert!(p.at(TokenKind::Identifier));
        assert!(p.has_line_break());
    }

    #[test]
    fn test_peek_does_not_consume() {
        let mut p = parser("a b c");
        assert_eq!(p.peek().text, "b");
        assert_eq!(p.peek_nth(2).text, "c");
        assert_eq!(p.token.text, "a");
    }

    #[test]
    fn test_try_parse_rewinds_on_error() {
        let mut p = parser("a b");
        let result = p.try_parse(|p| {
            p.bump();
            p.report(&messages::UNEXPECTED_TOKEN, &[], 0, 1);
            p.expect(TokenKind::Semicolon)
        });
        assert!(result.is_none());
        assert_eq!(p.token.text, "a");
        assert!(p.errors.is_empty());
    }

    #[test]
    fn test_with_context_restores() {
        let mut p = parser("");
        p.ctx = Context::IN_FUNCTION;
        let inner = p.with_context(Context::IN_ITERATION, |p| p.ctx);
        assert_eq!(inner, Context::IN_ITERATION);
        assert_eq!(p.ctx, Context::IN_FUNCTION);
    }

    #[test]
    fn test_guarded_limit() {
        let mut p = parser("x");
        p.recursion_depth = MAX_RECURSION_DEPTH;
        let error = p.guarded(|_| Ok(())).unwrap_err();
        assert_eq!(error.code, 9001);
    }

    #[test]
    fn test_expected_reports_lexical_error() {
        let p = parser("'abc");
        let error = p.expected(";");
        assert_eq!(error.message, "Unterminated string literal.");
    }
}
