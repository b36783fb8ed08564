//! Statements: statement lists with directive prologues, control flow,
//! variable declarations and labels.

use tsestree_ast::*;
use tsestree_diagnostics::messages;

use crate::context::{Context, Label};
use crate::parser::{PResult, Parser};

/// The first clause of a non-empty `for` head.
enum ForHead {
    Declaration(Box<VariableDeclaration>),
    Expression(Expression),
}

impl<'a> Parser<'a> {
    // ========================================================================
    // Statement lists
    // ========================================================================

    /// A statement list that may open with directives (`"use strict";`).
    pub(crate) fn parse_directives_and_statements(&mut self, is_end: impl Fn(TokenKind) -> bool) -> Vec<Statement> {
        let mut statements = Vec::new();
        let mut in_prologue = true;
        while !self.at(TokenKind::EndOfFile) && !is_end(self.kind()) {
            let start = self.start();
            let starts_with_string = self.at(TokenKind::StringLiteral);
            match self.parse_statement() {
                Ok(mut statement) => {
                    if in_prologue {
                        in_prologue = starts_with_string && self.mark_directive(&mut statement);
                    }
                    statements.push(statement);
                }
                Err(error) => {
                    in_prologue = false;
                    self.recover_statement(error, start);
                }
            }
        }
        statements
    }

    /// A statement list without a prologue (case clauses, static blocks,
    /// module blocks).
    pub(crate) fn parse_statement_list(&mut self, is_end: impl Fn(TokenKind) -> bool) -> Vec<Statement> {
        let mut statements = Vec::new();
        while !self.at(TokenKind::EndOfFile) && !is_end(self.kind()) {
            let start = self.start();
            match self.parse_statement() {
                Ok(statement) => statements.push(statement),
                Err(error) => self.recover_statement(error, start),
            }
        }
        statements
    }

    /// Turn `"text";` into a directive. Returns whether the statement was one.
    fn mark_directive(&self, statement: &mut Statement) -> bool {
        let Statement::ExpressionStatement(expression_statement) = statement else {
            return false;
        };
        let Expression::Literal(literal) = &expression_statement.expression else {
            return false;
        };
        if !matches!(literal.value, LiteralValue::String(_))
            || literal.data.span.pos != expression_statement.data.span.pos
        {
            return false;
        }
        let raw = &literal.raw;
        let directive = raw.get(1..raw.len().saturating_sub(1)).unwrap_or_default().to_string();
        expression_statement.directive = Some(directive);
        true
    }

    // ========================================================================
    // Dispatch
    // ========================================================================

    pub(crate) fn parse_statement(&mut self) -> PResult<Statement> {
        self.guarded(|p| p.parse_statement_inner())
    }

    fn parse_statement_inner(&mut self) -> PResult<Statement> {
        let start = self.start();
        match self.kind() {
            TokenKind::Semicolon => {
                self.bump();
                Ok(Statement::EmptyStatement(Box::new(self.empty_node(NodeKind::EmptyStatement, start))))
            }
            TokenKind::OpenBrace => Ok(Statement::BlockStatement(Box::new(self.parse_block()?))),
            TokenKind::VarKeyword => {
                self.bump();
                self.parse_variable_statement(start, VariableKind::Var, false)
            }
            TokenKind::ConstKeyword if self.peek_kind() == TokenKind::EnumKeyword => {
                self.bump();
                self.parse_enum_declaration(start, true, false)
            }
            TokenKind::ConstKeyword => {
                self.bump();
                self.parse_variable_statement(start, VariableKind::Const, false)
            }
            TokenKind::LetKeyword if self.is_let_declaration() => {
                self.bump();
                self.parse_variable_statement(start, VariableKind::Let, false)
            }
            TokenKind::UsingKeyword if self.is_using_declaration() => {
                self.bump();
                self.parse_variable_statement(start, VariableKind::Using, false)
            }
            TokenKind::AwaitKeyword if self.is_await_using_declaration() => {
                self.bump();
                self.bump();
                self.parse_variable_statement(start, VariableKind::AwaitUsing, false)
            }
            TokenKind::FunctionKeyword => self.parse_function_declaration(start, false, false),
            TokenKind::AsyncKeyword
                if self.peek_kind() == TokenKind::FunctionKeyword && self.next_is_on_same_line() =>
            {
                self.bump();
                self.parse_function_declaration(start, true, false)
            }
            TokenKind::ClassKeyword => {
                let class = self.parse_class(start, Vec::new(), NodeKind::ClassDeclaration, false, false)?;
                Ok(Statement::ClassDeclaration(Box::new(class)))
            }
            TokenKind::At => self.parse_decorated_declaration(),
            TokenKind::IfKeyword => self.parse_if_statement(),
            TokenKind::ForKeyword => self.parse_for_statement(),
            TokenKind::WhileKeyword => self.parse_while_statement(),
            TokenKind::DoKeyword => self.parse_do_while_statement(),
            TokenKind::ReturnKeyword => self.parse_return_statement(),
            TokenKind::BreakKeyword | TokenKind::ContinueKeyword => self.parse_break_or_continue(),
            TokenKind::ThrowKeyword => self.parse_throw_statement(),
            TokenKind::TryKeyword => self.parse_try_statement(),
            TokenKind::SwitchKeyword => self.parse_switch_statement(),
            TokenKind::WithKeyword => self.parse_with_statement(),
            TokenKind::DebuggerKeyword => {
                self.bump();
                self.expect_semicolon()?;
                Ok(Statement::DebuggerStatement(Box::new(self.empty_node(NodeKind::DebuggerStatement, start))))
            }
            TokenKind::ImportKeyword
                if !matches!(self.peek_kind(), TokenKind::OpenParen | TokenKind::Dot) =>
            {
                self.parse_import_declaration()
            }
            TokenKind::ExportKeyword => self.parse_export_declaration(Vec::new()),
            kind if self.is_start_of_ts_declaration(kind) => self.parse_ts_declaration(start, false),
            kind if kind.is_identifier_like() && self.peek_kind() == TokenKind::Colon => {
                self.parse_labeled_statement()
            }
            _ => self.parse_expression_statement(),
        }
    }

    fn is_let_declaration(&mut self) -> bool {
        let next = self.peek().kind;
        next.is_identifier_like() || matches!(next, TokenKind::OpenBracket | TokenKind::OpenBrace)
    }

    fn is_using_declaration(&mut self) -> bool {
        let next = self.peek();
        next.kind.is_identifier_like() && !next.has_preceding_line_break() && next.kind != TokenKind::OfKeyword
    }

    fn is_await_using_declaration(&mut self) -> bool {
        let next = self.peek();
        if next.kind != TokenKind::UsingKeyword || next.has_preceding_line_break() {
            return false;
        }
        let after = self.peek_nth(2);
        after.kind.is_identifier_like() && !after.has_preceding_line_break()
    }

    // ========================================================================
    // Blocks and simple statements
    // ========================================================================

    pub(crate) fn parse_block(&mut self) -> PResult<BlockStatement> {
        let start = self.start();
        self.expect(TokenKind::OpenBrace)?;
        let body = self.parse_statement_list(|kind| kind == TokenKind::CloseBrace);
        self.expect(TokenKind::CloseBrace)?;
        Ok(BlockStatement {
            data: self.node(NodeKind::BlockStatement, start),
            body,
        })
    }

    /// The body of a function, arrow or method under `ctx`. Labels do not
    /// cross the function boundary.
    pub(crate) fn parse_function_body(&mut self, ctx: Context) -> PResult<BlockStatement> {
        let labels = std::mem::take(&mut self.labels);
        let result = self.with_context(ctx, |p| {
            let start = p.start();
            p.expect(TokenKind::OpenBrace)?;
            let body = p.parse_directives_and_statements(|kind| kind == TokenKind::CloseBrace);
            p.expect(TokenKind::CloseBrace)?;
            Ok(BlockStatement {
                data: p.node(NodeKind::BlockStatement, start),
                body,
            })
        });
        self.labels = labels;
        result
    }

    fn parse_expression_statement(&mut self) -> PResult<Statement> {
        let start = self.start();
        let expression = self.parse_expression()?;
        self.expect_semicolon()?;
        Ok(Statement::ExpressionStatement(Box::new(ExpressionStatement {
            data: self.node(NodeKind::ExpressionStatement, start),
            expression,
            directive: None,
        })))
    }

    fn parse_labeled_statement(&mut self) -> PResult<Statement> {
        let start = self.start();
        let label = self.parse_identifier_reference()?;
        self.expect(TokenKind::Colon)?;
        if self.labels.iter().any(|l| l.name == label.name) {
            let span = label.data.span;
            self.report(&messages::DUPLICATE_LABEL_0, &[&label.name], span.pos, span.end);
        }
        let is_loop = self.starts_loop();
        self.labels.push(Label { name: label.name.clone(), is_loop });
        let body = self.parse_statement();
        self.labels.pop();
        Ok(Statement::LabeledStatement(Box::new(LabeledStatement {
            data: self.node(NodeKind::LabeledStatement, start),
            label,
            body: body?,
        })))
    }

    /// Whether the statement at the cursor is a loop, looking through
    /// further labels (`a: b: for (;;) {}`).
    fn starts_loop(&mut self) -> bool {
        self.look_ahead(|p| loop {
            match p.kind() {
                TokenKind::ForKeyword | TokenKind::WhileKeyword | TokenKind::DoKeyword => return true,
                kind if kind.is_identifier_like() && p.peek_kind() == TokenKind::Colon => {
                    p.bump();
                    p.bump();
                }
                _ => return false,
            }
        })
    }

    fn parse_if_statement(&mut self) -> PResult<Statement> {
        let start = self.start();
        self.bump();
        let test = self.parse_parenthesized_condition()?;
        let consequent = self.parse_statement()?;
        let alternate = if self.eat(TokenKind::ElseKeyword) {
            Some(self.parse_statement()?)
        } else {
            None
        };
        Ok(Statement::IfStatement(Box::new(IfStatement {
            data: self.node(NodeKind::IfStatement, start),
            test,
            consequent,
            alternate,
        })))
    }

    fn parse_parenthesized_condition(&mut self) -> PResult<Expression> {
        self.expect(TokenKind::OpenParen)?;
        let test = self.parse_expression_allow_in()?;
        self.expect(TokenKind::CloseParen)?;
        Ok(test)
    }

    fn parse_loop_body(&mut self) -> PResult<Statement> {
        let ctx = self.ctx | Context::IN_ITERATION;
        self.with_context(ctx, |p| p.parse_statement())
    }

    fn parse_while_statement(&mut self) -> PResult<Statement> {
        let start = self.start();
        self.bump();
        let test = self.parse_parenthesized_condition()?;
        let body = self.parse_loop_body()?;
        Ok(Statement::WhileStatement(Box::new(WhileStatement {
            data: self.node(NodeKind::WhileStatement, start),
            test,
            body,
        })))
    }

    fn parse_do_while_statement(&mut self) -> PResult<Statement> {
        let start = self.start();
        self.bump();
        let body = self.parse_loop_body()?;
        self.expect(TokenKind::WhileKeyword)?;
        let test = self.parse_parenthesized_condition()?;
        // A `;` after `do ... while (x)` is optional even on the same line.
        self.eat(TokenKind::Semicolon);
        Ok(Statement::DoWhileStatement(Box::new(DoWhileStatement {
            data: self.node(NodeKind::DoWhileStatement, start),
            body,
            test,
        })))
    }

    fn parse_with_statement(&mut self) -> PResult<Statement> {
        let start = self.start();
        self.bump();
        let object = self.parse_parenthesized_condition()?;
        let body = self.parse_statement()?;
        Ok(Statement::WithStatement(Box::new(WithStatement {
            data: self.node(NodeKind::WithStatement, start),
            object,
            body,
        })))
    }

    fn parse_return_statement(&mut self) -> PResult<Statement> {
        let start = self.start();
        if !self.in_context(Context::IN_FUNCTION) {
            let error = self.error_here(&messages::A_RETURN_STATEMENT_CAN_ONLY_BE_USED_WITHIN_A_FUNCTION_BODY, &[]);
            self.errors.push(error);
        }
        self.bump();
        let argument = if self.can_insert_semicolon() {
            None
        } else {
            Some(self.parse_expression_allow_in()?)
        };
        self.expect_semicolon()?;
        Ok(Statement::ReturnStatement(Box::new(ReturnStatement {
            data: self.node(NodeKind::ReturnStatement, start),
            argument,
        })))
    }

    fn parse_break_or_continue(&mut self) -> PResult<Statement> {
        let start = self.start();
        let is_break = self.at(TokenKind::BreakKeyword);
        self.bump();
        let label = if self.kind().is_identifier_like() && !self.has_line_break() {
            Some(self.parse_identifier_reference()?)
        } else {
            None
        };
        self.expect_semicolon()?;
        let end = self.prev_token_end;

        let message = match (&label, is_break) {
            (Some(label), true) if !self.labels.iter().any(|l| l.name == label.name) => {
                Some(&messages::A_BREAK_STATEMENT_CAN_ONLY_JUMP_TO_AN_ENCLOSING_STATEMENT)
            }
            (Some(label), false) if !self.labels.iter().any(|l| l.name == label.name && l.is_loop) => {
                Some(&messages::A_CONTINUE_STATEMENT_CAN_ONLY_JUMP_TO_AN_ENCLOSING_ITERATION_STATEMENT)
            }
            (None, true) if !self.in_context(Context::IN_ITERATION | Context::IN_SWITCH) => {
                Some(&messages::A_BREAK_STATEMENT_CAN_ONLY_BE_USED_WITHIN_AN_ENCLOSING_ITERATION_OR_SWITCH_STATEMENT)
            }
            (None, false) if !self.in_context(Context::IN_ITERATION) => {
                Some(&messages::A_CONTINUE_STATEMENT_CAN_ONLY_BE_USED_WITHIN_AN_ENCLOSING_ITERATION_STATEMENT)
            }
            _ => None,
        };
        if let Some(message) = message {
            self.report(message, &[], start, end);
        }

        Ok(if is_break {
            Statement::BreakStatement(Box::new(BreakStatement {
                data: self.node(NodeKind::BreakStatement, start),
                label,
            }))
        } else {
            Statement::ContinueStatement(Box::new(ContinueStatement {
                data: self.node(NodeKind::ContinueStatement, start),
                label,
            }))
        })
    }

    fn parse_throw_statement(&mut self) -> PResult<Statement> {
        let start = self.start();
        self.bump();
        if self.has_line_break() {
            return Err(self.error_here(&messages::LINE_BREAK_NOT_PERMITTED_HERE, &[]));
        }
        let argument = self.parse_expression_allow_in()?;
        self.expect_semicolon()?;
        Ok(Statement::ThrowStatement(Box::new(ThrowStatement {
            data: self.node(NodeKind::ThrowStatement, start),
            argument,
        })))
    }

    fn parse_try_statement(&mut self) -> PResult<Statement> {
        let start = self.start();
        self.bump();
        let block = self.parse_block()?;

        let handler = if self.at(TokenKind::CatchKeyword) {
            let catch_start = self.start();
            self.bump();
            let param = if self.eat(TokenKind::OpenParen) {
                let param_start = self.start();
                let mut param = self.parse_binding_target(&messages::IDENTIFIER_EXPECTED)?;
                self.parse_pattern_type_annotation(&mut param, param_start)?;
                self.expect(TokenKind::CloseParen)?;
                Some(param)
            } else {
                None
            };
            let body = self.parse_block()?;
            Some(CatchClause {
                data: self.node(NodeKind::CatchClause, catch_start),
                param,
                body,
            })
        } else {
            None
        };

        let finalizer = if self.eat(TokenKind::FinallyKeyword) {
            Some(self.parse_block()?)
        } else {
            None
        };

        if handler.is_none() && finalizer.is_none() {
            return Err(self.expected_message(&messages::CATCH_OR_FINALLY_EXPECTED));
        }
        Ok(Statement::TryStatement(Box::new(TryStatement {
            data: self.node(NodeKind::TryStatement, start),
            block,
            handler,
            finalizer,
        })))
    }

    fn parse_switch_statement(&mut self) -> PResult<Statement> {
        let start = self.start();
        self.bump();
        let discriminant = self.parse_parenthesized_condition()?;
        self.expect(TokenKind::OpenBrace)?;

        let ctx = self.ctx | Context::IN_SWITCH;
        let cases = self.with_context(ctx, |p| p.parse_case_clauses())?;

        self.expect(TokenKind::CloseBrace)?;
        Ok(Statement::SwitchStatement(Box::new(SwitchStatement {
            data: self.node(NodeKind::SwitchStatement, start),
            discriminant,
            cases,
        })))
    }

    fn parse_case_clauses(&mut self) -> PResult<Vec<SwitchCase>> {
        let mut cases = Vec::new();
        let mut seen_default = false;
        while !self.at(TokenKind::CloseBrace) && !self.at(TokenKind::EndOfFile) {
            let start = self.start();
            let test = match self.kind() {
                TokenKind::CaseKeyword => {
                    self.bump();
                    Some(self.parse_expression_allow_in()?)
                }
                TokenKind::DefaultKeyword => {
                    if seen_default {
                        let error = self.error_here(
                            &messages::A_DEFAULT_CLAUSE_CANNOT_APPEAR_MORE_THAN_ONCE_IN_A_SWITCH_STATEMENT,
                            &[],
                        );
                        self.errors.push(error);
                    }
                    seen_default = true;
                    self.bump();
                    None
                }
                _ => {
                    let error = self.expected_message(&messages::CASE_OR_DEFAULT_EXPECTED);
                    self.errors.push(error);
                    self.bump();
                    continue;
                }
            };
            self.expect(TokenKind::Colon)?;
            let consequent = self.parse_statement_list(|kind| {
                matches!(kind, TokenKind::CaseKeyword | TokenKind::DefaultKeyword | TokenKind::CloseBrace)
            });
            cases.push(SwitchCase {
                data: self.node(NodeKind::SwitchCase, start),
                test,
                consequent,
            });
        }
        Ok(cases)
    }

    // ========================================================================
    // Variable declarations
    // ========================================================================

    /// `var`/`let`/`const`/`using` declarations ending in `;`; the keyword
    /// has been consumed and `start` is its position.
    pub(crate) fn parse_variable_statement(
        &mut self,
        start: u32,
        kind: VariableKind,
        declare: bool,
    ) -> PResult<Statement> {
        let mut declaration = self.parse_variable_declaration_list(start, kind, declare)?;
        self.expect_semicolon()?;
        declaration.data = self.node(NodeKind::VariableDeclaration, start);
        if kind == VariableKind::Const && !declare && !self.in_context(Context::AMBIENT) {
            self.check_const_initializers(&declaration);
        }
        Ok(Statement::VariableDeclaration(Box::new(declaration)))
    }

    fn check_const_initializers(&mut self, declaration: &VariableDeclaration) {
        for declarator in &declaration.declarations {
            if declarator.init.is_none() {
                let span = declarator.id.span();
                self.report(&messages::CONST_DECLARATIONS_MUST_BE_INITIALIZED, &[], span.pos, span.end);
            }
        }
    }

    fn parse_variable_declaration_list(
        &mut self,
        start: u32,
        kind: VariableKind,
        declare: bool,
    ) -> PResult<VariableDeclaration> {
        let mut declarations = vec![self.parse_variable_declarator()?];
        while self.eat(TokenKind::Comma) {
            declarations.push(self.parse_variable_declarator()?);
        }
        Ok(VariableDeclaration {
            data: self.node(NodeKind::VariableDeclaration, start),
            declarations,
            kind,
            declare,
        })
    }

    fn parse_variable_declarator(&mut self) -> PResult<VariableDeclarator> {
        let start = self.start();
        let mut id = self.parse_binding_target(&messages::VARIABLE_DECLARATION_EXPECTED)?;
        let definite = matches!(id, Pattern::Identifier(_))
            && self.at(TokenKind::Exclamation)
            && !self.has_line_break()
            && self.peek_kind() == TokenKind::Colon;
        if definite {
            self.bump();
        }
        self.parse_pattern_type_annotation(&mut id, start)?;
        let init = if self.eat(TokenKind::Equals) {
            Some(self.parse_assignment()?)
        } else {
            None
        };
        Ok(VariableDeclarator {
            data: self.node(NodeKind::VariableDeclarator, start),
            id,
            init,
            definite,
        })
    }

    // ========================================================================
    // for / for-in / for-of
    // ========================================================================

    fn parse_for_statement(&mut self) -> PResult<Statement> {
        let start = self.start();
        self.bump();
        let is_await = self.at(TokenKind::AwaitKeyword);
        if is_await {
            if !self.in_context(Context::ALLOW_AWAIT) {
                self.report(
                    &messages::FOR_AWAIT_LOOPS_ARE_ONLY_ALLOWED_WITHIN_ASYNC_FUNCTIONS,
                    &[],
                    self.token.start,
                    self.token.end,
                );
            }
            self.bump();
        }
        self.expect(TokenKind::OpenParen)?;

        let ctx = self.ctx | Context::DISALLOW_IN;
        let head = self.with_context(ctx, |p| p.parse_for_head())?;

        let is_in_or_of = self.at(TokenKind::OfKeyword) || (self.at(TokenKind::InKeyword) && !is_await);
        let head = match head {
            Some(head) if is_in_or_of => return self.parse_for_in_of_rest(start, head, is_await),
            head => head,
        };

        let init = match head {
            Some(ForHead::Declaration(declaration)) => {
                if declaration.kind == VariableKind::Const {
                    self.check_const_initializers(&declaration);
                }
                Some(ForInit::VariableDeclaration(declaration))
            }
            Some(ForHead::Expression(expression)) => Some(ForInit::Expression(expression)),
            None => None,
        };
        self.expect(TokenKind::Semicolon)?;
        let test = if self.at(TokenKind::Semicolon) {
            None
        } else {
            Some(self.parse_expression_allow_in()?)
        };
        self.expect(TokenKind::Semicolon)?;
        let update = if self.at(TokenKind::CloseParen) {
            None
        } else {
            Some(self.parse_expression_allow_in()?)
        };
        self.expect(TokenKind::CloseParen)?;
        let body = self.parse_loop_body()?;
        Ok(Statement::ForStatement(Box::new(ForStatement {
            data: self.node(NodeKind::ForStatement, start),
            init,
            test,
            update,
            body,
        })))
    }

    /// `for (left in right)` / `for [await] (left of right)` from the `in`
    /// or `of` keyword on.
    fn parse_for_in_of_rest(&mut self, start: u32, head: ForHead, is_await: bool) -> PResult<Statement> {
        let is_of = self.at(TokenKind::OfKeyword);
        self.bump();
        let left = self.for_in_of_left(head, is_of);
        let right = if is_of {
            self.parse_assignment_allow_in()?
        } else {
            self.parse_expression_allow_in()?
        };
        self.expect(TokenKind::CloseParen)?;
        let body = self.parse_loop_body()?;
        Ok(if is_of {
            Statement::ForOfStatement(Box::new(ForOfStatement {
                data: self.node(NodeKind::ForOfStatement, start),
                left,
                right,
                body,
                is_await,
            }))
        } else {
            Statement::ForInStatement(Box::new(ForInStatement {
                data: self.node(NodeKind::ForInStatement, start),
                left,
                right,
                body,
            }))
        })
    }

    /// The first clause of a `for` head, parsed with `in` disallowed.
    fn parse_for_head(&mut self) -> PResult<Option<ForHead>> {
        let start = self.start();
        let kind = match self.kind() {
            TokenKind::Semicolon => return Ok(None),
            TokenKind::VarKeyword => Some(VariableKind::Var),
            TokenKind::ConstKeyword => Some(VariableKind::Const),
            TokenKind::LetKeyword if self.is_let_declaration() => Some(VariableKind::Let),
            TokenKind::UsingKeyword if self.is_using_declaration() => Some(VariableKind::Using),
            TokenKind::AwaitKeyword if self.is_await_using_declaration() => {
                self.bump();
                Some(VariableKind::AwaitUsing)
            }
            _ => None,
        };
        match kind {
            Some(kind) => {
                self.bump();
                let declaration = self.parse_variable_declaration_list(start, kind, false)?;
                Ok(Some(ForHead::Declaration(Box::new(declaration))))
            }
            None => Ok(Some(ForHead::Expression(self.parse_expression()?))),
        }
    }

    fn for_in_of_left(&mut self, head: ForHead, is_of: bool) -> ForLeft {
        match head {
            ForHead::Declaration(declaration) => {
                let span = declaration.data.span;
                if declaration.declarations.len() != 1 {
                    let message = if is_of {
                        &messages::ONLY_A_SINGLE_VARIABLE_DECLARATION_IS_ALLOWED_IN_A_FOR_OF_STATEMENT
                    } else {
                        &messages::ONLY_A_SINGLE_VARIABLE_DECLARATION_IS_ALLOWED_IN_A_FOR_IN_STATEMENT
                    };
                    self.report(message, &[], span.pos, span.end);
                } else if declaration.declarations[0].init.is_some() {
                    let message = if is_of {
                        &messages::THE_VARIABLE_DECLARATION_OF_A_FOR_OF_STATEMENT_CANNOT_HAVE_AN_INITIALIZER
                    } else {
                        &messages::THE_VARIABLE_DECLARATION_OF_A_FOR_IN_STATEMENT_CANNOT_HAVE_AN_INITIALIZER
                    };
                    self.report(message, &[], span.pos, span.end);
                }
                ForLeft::VariableDeclaration(declaration)
            }
            ForHead::Expression(expression @ (Expression::ArrayExpression(_) | Expression::ObjectExpression(_))) => {
                ForLeft::Pattern(self.expression_to_pattern(expression))
            }
            ForHead::Expression(expression) => {
                let message = if is_of {
                    &messages::THE_LEFT_HAND_SIDE_OF_A_FOR_OF_STATEMENT_MUST_BE_A_VARIABLE_OR_A_PROPERTY_ACCESS
                } else {
                    &messages::THE_LEFT_HAND_SIDE_OF_A_FOR_IN_STATEMENT_MUST_BE_A_VARIABLE_OR_A_PROPERTY_ACCESS
                };
                ForLeft::Pattern(self.simple_assignment_target(expression, message))
            }
        }
    }
}
