//! Expression parsing: assignment, conditional, binary precedence climbing,
//! unary and postfix operators, member/call chains and primary expressions.

use tsestree_ast::*;
use tsestree_diagnostics::messages;
use tsestree_scanner::{parse_bigint_literal, parse_numeric_literal};

use crate::context::Context;
use crate::parser::{PResult, Parser};
use crate::precedence::{get_binary_operator_precedence, is_logical_operator, OperatorPrecedence};
use crate::utilities::{ends_yield_operand, is_property_name_start, is_start_of_expression};

/// How a parenthesis, `<` or identifier might begin an arrow function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ArrowStart {
    No,
    /// `x =>` or `async x =>`.
    Simple,
    /// `() =>` or `(...rest) =>`: nothing else can follow.
    Definite,
    /// `(a, b)`, `<T>(x)`, `async (x)`: try the arrow, fall back on failure.
    Speculative,
}

/// Everything of an arrow function before its `=>`.
struct ArrowHead {
    start: u32,
    is_async: bool,
    type_parameters: Option<Box<TSTypeParameterDeclaration>>,
    params: Vec<Parameter>,
    return_type: Option<Box<TSTypeAnnotation>>,
}

/// What a member/call chain may contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TailMode {
    Full,
    /// The callee of `new`: the first argument list belongs to `new`.
    NewCallee,
    /// A decorator: `[` starts the decorated member, not an element access.
    Decorator,
}

impl<'a> Parser<'a> {
    // ========================================================================
    // Comma and assignment
    // ========================================================================

    pub(crate) fn parse_expression(&mut self) -> PResult<Expression> {
        let start = self.start();
        let first = self.parse_assignment()?;
        if !self.at(TokenKind::Comma) {
            return Ok(first);
        }
        let mut expressions = vec![first];
        while self.eat(TokenKind::Comma) {
            expressions.push(self.parse_assignment()?);
        }
        Ok(Expression::SequenceExpression(Box::new(SequenceExpression {
            data: self.node(NodeKind::SequenceExpression, start),
            expressions,
        })))
    }

    /// `in` is an operator again inside brackets, parentheses and arguments.
    pub(crate) fn parse_expression_allow_in(&mut self) -> PResult<Expression> {
        let ctx = self.ctx - Context::DISALLOW_IN;
        self.with_context(ctx, |p| p.parse_expression())
    }

    pub(crate) fn parse_assignment_allow_in(&mut self) -> PResult<Expression> {
        let ctx = self.ctx - Context::DISALLOW_IN;
        self.with_context(ctx, |p| p.parse_assignment())
    }

    pub(crate) fn parse_assignment(&mut self) -> PResult<Expression> {
        self.guarded(|p| p.parse_assignment_inner())
    }

    fn parse_assignment_inner(&mut self) -> PResult<Expression> {
        if self.at(TokenKind::YieldKeyword) && self.in_context(Context::ALLOW_YIELD) {
            return self.parse_yield();
        }

        match self.arrow_start() {
            ArrowStart::No => {}
            ArrowStart::Simple => return self.parse_simple_arrow(),
            ArrowStart::Definite => {
                let head = self.parse_arrow_head()?;
                return self.parse_arrow_rest(head);
            }
            ArrowStart::Speculative => {
                let at = self.start();
                if !self.failed_arrow_heads.contains(&at) {
                    // Only the head is speculative: once `=>` is in sight the
                    // body's errors are real errors.
                    match self.try_parse(|p| p.parse_arrow_head()) {
                        Some(head) => return self.parse_arrow_rest(head),
                        None => {
                            self.failed_arrow_heads.insert(at);
                        }
                    }
                }
            }
        }

        let start = self.start();
        let expr = self.parse_conditional()?;

        let Some(operator) = AssignmentOperator::from_token(self.kind()) else {
            return Ok(expr);
        };
        let left = if operator == AssignmentOperator::Assign {
            self.expression_to_pattern(expr)
        } else {
            self.simple_assignment_target(
                expr,
                &messages::THE_LEFT_HAND_SIDE_OF_AN_ASSIGNMENT_EXPRESSION_MUST_BE_A_VARIABLE_OR_A_PROPERTY_ACCESS,
            )
        };
        self.bump();
        let right = self.parse_assignment()?;
        Ok(Expression::AssignmentExpression(Box::new(AssignmentExpression {
            data: self.node(NodeKind::AssignmentExpression, start),
            operator,
            left,
            right,
        })))
    }

    fn parse_yield(&mut self) -> PResult<Expression> {
        let start = self.start();
        self.bump();
        let mut delegate = false;
        let mut argument = None;
        if !self.has_line_break()
            && (self.at(TokenKind::Asterisk) || !ends_yield_operand(self.kind()))
        {
            delegate = self.eat(TokenKind::Asterisk);
            argument = Some(self.parse_assignment()?);
        }
        Ok(Expression::YieldExpression(Box::new(YieldExpression {
            data: self.node(NodeKind::YieldExpression, start),
            argument,
            delegate,
        })))
    }

    // ========================================================================
    // Arrow functions
    // ========================================================================

    fn arrow_start(&mut self) -> ArrowStart {
        match self.kind() {
            TokenKind::OpenParen => {
                let next = self.peek().kind;
                match next {
                    TokenKind::CloseParen | TokenKind::DotDotDot => ArrowStart::Definite,
                    TokenKind::OpenBracket | TokenKind::OpenBrace => ArrowStart::Speculative,
                    kind if kind.is_identifier_like() || kind == TokenKind::ThisKeyword => {
                        match self.peek_nth(2).kind {
                            TokenKind::Colon
                            | TokenKind::Comma
                            | TokenKind::Question
                            | TokenKind::Equals
                            | TokenKind::CloseParen => ArrowStart::Speculative,
                            _ => ArrowStart::No,
                        }
                    }
                    TokenKind::At => ArrowStart::Speculative,
                    _ => ArrowStart::No,
                }
            }
            TokenKind::LessThan => {
                if !self.jsx {
                    return ArrowStart::Speculative;
                }
                // In JSX files only `<T,>`, `<T extends U>` and `<const T>`
                // read as type parameters.
                let next = self.peek().kind;
                let after = self.peek_nth(2).kind;
                if next == TokenKind::ConstKeyword
                    || (next.is_identifier_like()
                        && matches!(after, TokenKind::Comma | TokenKind::ExtendsKeyword))
                {
                    ArrowStart::Speculative
                } else {
                    ArrowStart::No
                }
            }
            TokenKind::AsyncKeyword => {
                let next = self.peek();
                if next.kind == TokenKind::EqualsGreaterThan {
                    return ArrowStart::Simple;
                }
                if next.has_preceding_line_break() {
                    return ArrowStart::No;
                }
                if next.kind.is_identifier_like() && self.peek_nth(2).kind == TokenKind::EqualsGreaterThan {
                    ArrowStart::Simple
                } else if matches!(next.kind, TokenKind::OpenParen | TokenKind::LessThan) {
                    ArrowStart::Speculative
                } else {
                    ArrowStart::No
                }
            }
            kind if kind.is_identifier_like() => {
                if self.peek_kind() == TokenKind::EqualsGreaterThan {
                    ArrowStart::Simple
                } else {
                    ArrowStart::No
                }
            }
            _ => ArrowStart::No,
        }
    }

    /// `x => body` / `async x => body`
    fn parse_simple_arrow(&mut self) -> PResult<Expression> {
        let start = self.start();
        let is_async = self.at(TokenKind::AsyncKeyword) && self.peek_kind() != TokenKind::EqualsGreaterThan;
        if is_async {
            self.bump();
        }
        let id = self.parse_binding_identifier()?;
        self.parse_arrow_rest(ArrowHead {
            start,
            is_async,
            type_parameters: None,
            params: vec![Parameter::Pattern(Pattern::Identifier(Box::new(id)))],
            return_type: None,
        })
    }

    /// `(params)` of an arrow, with optional `async`, type parameters and
    /// return type. Succeeds only in front of `=>`.
    fn parse_arrow_head(&mut self) -> PResult<ArrowHead> {
        let start = self.start();
        let is_async = self.eat(TokenKind::AsyncKeyword);
        let type_parameters = if self.at(TokenKind::LessThan) {
            Some(self.parse_type_parameters()?)
        } else {
            None
        };
        let ctx = self.ctx.for_function(is_async, false);
        let params = self.with_context(ctx, |p| p.parse_parameter_list())?;
        let return_type = if self.at(TokenKind::Colon) {
            Some(self.parse_return_type()?)
        } else {
            None
        };
        if !self.at(TokenKind::EqualsGreaterThan) {
            return Err(self.expected("=>"));
        }
        Ok(ArrowHead {
            start,
            is_async,
            type_parameters,
            params,
            return_type,
        })
    }

    fn parse_arrow_rest(&mut self, head: ArrowHead) -> PResult<Expression> {
        let ArrowHead {
            start,
            is_async,
            type_parameters,
            params,
            return_type,
        } = head;
        if self.at(TokenKind::EqualsGreaterThan) && self.has_line_break() {
            return Err(self.error_here(&messages::LINE_TERMINATOR_NOT_PERMITTED_BEFORE_ARROW, &[]));
        }
        self.expect(TokenKind::EqualsGreaterThan)?;
        let ctx = self.ctx.for_function(is_async, false);
        let body = if self.at(TokenKind::OpenBrace) {
            ArrowBody::Block(Box::new(self.parse_function_body(ctx)?))
        } else {
            let labels = std::mem::take(&mut self.labels);
            let body = self.with_context(ctx, |p| p.parse_assignment());
            self.labels = labels;
            ArrowBody::Expression(body?)
        };
        let expression = matches!(body, ArrowBody::Expression(_));
        Ok(Expression::ArrowFunctionExpression(Box::new(ArrowFunctionExpression {
            data: self.node(NodeKind::ArrowFunctionExpression, start),
            params,
            body,
            is_async,
            expression,
            generator: false,
            type_parameters,
            return_type,
        })))
    }

    // ========================================================================
    // Conditional and binary
    // ========================================================================

    fn parse_conditional(&mut self) -> PResult<Expression> {
        let start = self.start();
        let test = self.parse_binary(OperatorPrecedence::Lowest)?;
        if !self.at(TokenKind::Question) {
            return Ok(test);
        }
        self.bump();
        let consequent = self.parse_assignment_allow_in()?;
        self.expect(TokenKind::Colon)?;
        let alternate = self.parse_assignment()?;
        Ok(Expression::ConditionalExpression(Box::new(ConditionalExpression {
            data: self.node(NodeKind::ConditionalExpression, start),
            test,
            consequent,
            alternate,
        })))
    }

    /// Parse a binary expression whose operators all bind tighter than
    /// `precedence`.
    pub(crate) fn parse_binary(&mut self, precedence: OperatorPrecedence) -> PResult<Expression> {
        let start = self.start();
        let left = self.parse_unary()?;
        self.parse_binary_rest(left, start, precedence)
    }

    fn parse_binary_rest(
        &mut self,
        mut left: Expression,
        start: u32,
        precedence: OperatorPrecedence,
    ) -> PResult<Expression> {
        loop {
            self.rescan_greater_than();
            let kind = self.kind();
            let new_precedence = get_binary_operator_precedence(kind);
            if !new_precedence.is_valid() {
                break;
            }
            // `**` is right associative.
            let consume = if kind == TokenKind::AsteriskAsterisk {
                new_precedence >= precedence
            } else {
                new_precedence > precedence
            };
            if !consume {
                break;
            }
            if kind == TokenKind::InKeyword && self.in_context(Context::DISALLOW_IN) {
                break;
            }

            if matches!(kind, TokenKind::AsKeyword | TokenKind::SatisfiesKeyword) {
                if self.has_line_break() {
                    break;
                }
                self.bump();
                let type_annotation = if kind == TokenKind::AsKeyword && self.at(TokenKind::ConstKeyword) {
                    self.parse_const_type_reference()
                } else {
                    self.parse_type()?
                };
                let node_kind = if kind == TokenKind::AsKeyword {
                    NodeKind::TSAsExpression
                } else {
                    NodeKind::TSSatisfiesExpression
                };
                let node = TSAsExpression {
                    data: self.node(node_kind, start),
                    expression: left,
                    type_annotation,
                };
                left = if kind == TokenKind::AsKeyword {
                    Expression::TSAsExpression(Box::new(node))
                } else {
                    Expression::TSSatisfiesExpression(Box::new(node))
                };
                continue;
            }

            self.bump();
            let right = self.parse_binary(new_precedence)?;
            left = if is_logical_operator(kind) {
                let operator = LogicalOperator::from_token(kind).ok_or_else(|| self.unexpected())?;
                Expression::LogicalExpression(Box::new(LogicalExpression {
                    data: self.node(NodeKind::LogicalExpression, start),
                    operator,
                    left,
                    right,
                }))
            } else {
                let operator = BinaryOperator::from_token(kind).ok_or_else(|| self.unexpected())?;
                Expression::BinaryExpression(Box::new(BinaryExpression {
                    data: self.node(NodeKind::BinaryExpression, start),
                    operator,
                    left,
                    right,
                }))
            };
        }
        Ok(left)
    }

    /// `as const` is a reference to a type named `const`.
    fn parse_const_type_reference(&mut self) -> TsType {
        let start = self.start();
        self.bump();
        let name = self.identifier("const", start, self.prev_token_end);
        TsType::TSTypeReference(Box::new(TSTypeReference {
            data: self.node(NodeKind::TSTypeReference, start),
            type_name: TsEntityName::Identifier(Box::new(name)),
            type_arguments: None,
        }))
    }

    // ========================================================================
    // Unary and update
    // ========================================================================

    pub(crate) fn parse_unary(&mut self) -> PResult<Expression> {
        self.guarded(|p| p.parse_unary_inner())
    }

    fn parse_unary_inner(&mut self) -> PResult<Expression> {
        let start = self.start();
        let kind = self.kind();

        if let Some(operator) = UnaryOperator::from_token(kind) {
            self.bump();
            let argument = self.parse_unary()?;
            return Ok(Expression::UnaryExpression(Box::new(UnaryExpression {
                data: self.node(NodeKind::UnaryExpression, start),
                operator,
                prefix: true,
                argument,
            })));
        }

        if let Some(operator) = UpdateOperator::from_token(kind) {
            self.bump();
            let argument = self.parse_unary()?;
            let argument = self.check_update_operand(argument);
            return Ok(Expression::UpdateExpression(Box::new(UpdateExpression {
                data: self.node(NodeKind::UpdateExpression, start),
                operator,
                prefix: true,
                argument,
            })));
        }

        if kind == TokenKind::AwaitKeyword && self.in_context(Context::ALLOW_AWAIT) {
            self.bump();
            let argument = self.parse_unary()?;
            return Ok(Expression::AwaitExpression(Box::new(AwaitExpression {
                data: self.node(NodeKind::AwaitExpression, start),
                argument,
            })));
        }

        if kind == TokenKind::LessThan && !self.jsx {
            return self.parse_type_assertion();
        }

        self.parse_postfix()
    }

    /// `<T>expr`
    fn parse_type_assertion(&mut self) -> PResult<Expression> {
        let start = self.start();
        self.bump();
        let type_annotation = self.parse_type()?;
        self.expect(TokenKind::GreaterThan)?;
        let expression = self.parse_unary()?;
        Ok(Expression::TSTypeAssertion(Box::new(TSTypeAssertion {
            data: self.node(NodeKind::TSTypeAssertion, start),
            type_annotation,
            expression,
        })))
    }

    fn parse_postfix(&mut self) -> PResult<Expression> {
        let start = self.start();
        let expression = self.parse_lhs()?;
        match UpdateOperator::from_token(self.kind()) {
            Some(operator) if !self.has_line_break() => {
                let argument = self.check_update_operand(expression);
                self.bump();
                Ok(Expression::UpdateExpression(Box::new(UpdateExpression {
                    data: self.node(NodeKind::UpdateExpression, start),
                    operator,
                    prefix: false,
                    argument,
                })))
            }
            _ => Ok(expression),
        }
    }

    fn check_update_operand(&mut self, argument: Expression) -> Expression {
        if !argument.is_simple_assignment_target() {
            let span = argument.span();
            self.report(
                &messages::THE_OPERAND_OF_AN_INCREMENT_OR_DECREMENT_OPERATOR_MUST_BE_A_VARIABLE_OR_A_PROPERTY_ACCESS,
                &[],
                span.pos,
                span.end,
            );
        }
        argument
    }

    // ========================================================================
    // Left-hand side: member access, calls, `new`, `super`, `import`
    // ========================================================================

    pub(crate) fn parse_lhs(&mut self) -> PResult<Expression> {
        let start = self.start();
        let expression = match self.kind() {
            TokenKind::NewKeyword => self.parse_new()?,
            TokenKind::SuperKeyword => self.parse_super(),
            TokenKind::ImportKeyword => self.parse_import_expression()?,
            _ => self.parse_primary()?,
        };
        self.parse_call_tail(expression, start, TailMode::Full)
    }

    fn parse_super(&mut self) -> Expression {
        let start = self.start();
        self.bump();
        if !matches!(
            self.kind(),
            TokenKind::OpenParen | TokenKind::Dot | TokenKind::OpenBracket | TokenKind::QuestionDot
        ) {
            let error = self.error_here(&messages::SUPER_MUST_BE_FOLLOWED_BY_AN_ARGUMENT_LIST_OR_MEMBER_ACCESS, &[]);
            self.errors.push(error);
        }
        Expression::Super(Box::new(self.empty_node(NodeKind::Super, start)))
    }

    /// `import(source, options)` or `import.meta`.
    fn parse_import_expression(&mut self) -> PResult<Expression> {
        let start = self.start();
        self.bump();
        if self.eat(TokenKind::Dot) {
            let meta = self.identifier("import", start, start + 6);
            let property = self.parse_identifier_name()?;
            return Ok(Expression::MetaProperty(Box::new(MetaProperty {
                data: self.node(NodeKind::MetaProperty, start),
                meta,
                property,
            })));
        }
        self.expect(TokenKind::OpenParen)?;
        let source = self.parse_assignment_allow_in()?;
        let mut options = None;
        if self.eat(TokenKind::Comma) && !self.at(TokenKind::CloseParen) {
            options = Some(self.parse_assignment_allow_in()?);
            self.eat(TokenKind::Comma);
        }
        self.expect(TokenKind::CloseParen)?;
        Ok(Expression::ImportExpression(Box::new(ImportExpression {
            data: self.node(NodeKind::ImportExpression, start),
            source,
            options,
        })))
    }

    fn parse_new(&mut self) -> PResult<Expression> {
        self.guarded(|p| p.parse_new_inner())
    }

    fn parse_new_inner(&mut self) -> PResult<Expression> {
        let start = self.start();
        self.bump();
        if self.eat(TokenKind::Dot) {
            let meta = self.identifier("new", start, start + 3);
            let property = self.parse_identifier_name()?;
            return Ok(Expression::MetaProperty(Box::new(MetaProperty {
                data: self.node(NodeKind::MetaProperty, start),
                meta,
                property,
            })));
        }

        let callee_start = self.start();
        let callee = match self.kind() {
            TokenKind::NewKeyword => self.parse_new()?,
            TokenKind::SuperKeyword => self.parse_super(),
            _ => self.parse_primary()?,
        };
        let callee = self.parse_call_tail(callee, callee_start, TailMode::NewCallee)?;

        let type_arguments = if self.at(TokenKind::LessThan) {
            self.try_parse(|p| p.parse_type_arguments_in_expression())
        } else {
            None
        };
        let arguments = if self.at(TokenKind::OpenParen) {
            self.parse_arguments()?
        } else {
            Vec::new()
        };
        Ok(Expression::NewExpression(Box::new(NewExpression {
            data: self.node(NodeKind::NewExpression, start),
            callee,
            arguments,
            type_arguments,
        })))
    }

    /// Parse the `.x`, `?.x`, `[x]`, `(args)`, `` `tpl` ``, `!` and `<T>`
    /// suffixes of a left-hand-side expression. An optional chain is
    /// wrapped once in a `ChainExpression` when the loop ends.
    pub(crate) fn parse_call_tail(
        &mut self,
        mut expression: Expression,
        start: u32,
        mode: TailMode,
    ) -> PResult<Expression> {
        let mut in_chain = false;
        loop {
            match self.kind() {
                TokenKind::Dot => {
                    self.bump();
                    let property = self.parse_member_name()?;
                    expression = self.member(expression, property, start, false, false);
                }
                TokenKind::QuestionDot if mode == TailMode::Full => {
                    self.bump();
                    in_chain = true;
                    match self.kind() {
                        TokenKind::OpenParen => {
                            let arguments = self.parse_arguments()?;
                            expression = self.call(expression, arguments, None, start, true);
                        }
                        TokenKind::OpenBracket => {
                            self.bump();
                            let property = self.parse_expression_allow_in()?;
                            self.expect(TokenKind::CloseBracket)?;
                            expression = self.member(expression, property, start, true, true);
                        }
                        TokenKind::LessThan => {
                            let type_arguments = self.parse_type_arguments()?;
                            let arguments = self.parse_arguments()?;
                            expression = self.call(expression, arguments, Some(type_arguments), start, true);
                        }
                        _ => {
                            let property = self.parse_member_name()?;
                            expression = self.member(expression, property, start, false, true);
                        }
                    }
                }
                TokenKind::OpenBracket if mode != TailMode::Decorator => {
                    self.bump();
                    let property = self.parse_expression_allow_in()?;
                    self.expect(TokenKind::CloseBracket)?;
                    expression = self.member(expression, property, start, true, false);
                }
                TokenKind::Exclamation if !self.has_line_break() => {
                    self.bump();
                    expression = Expression::TSNonNullExpression(Box::new(TSNonNullExpression {
                        data: self.node(NodeKind::TSNonNullExpression, start),
                        expression,
                    }));
                }
                TokenKind::NoSubstitutionTemplateLiteral | TokenKind::TemplateHead => {
                    expression = self.parse_tagged_template(expression, None, start, in_chain)?;
                }
                TokenKind::OpenParen if mode != TailMode::NewCallee => {
                    let arguments = self.parse_arguments()?;
                    expression = self.call(expression, arguments, None, start, false);
                }
                TokenKind::LessThan if mode != TailMode::NewCallee => {
                    let Some(type_arguments) = self.try_parse(|p| p.parse_type_arguments_in_expression()) else {
                        break;
                    };
                    expression = match self.kind() {
                        TokenKind::OpenParen => {
                            let arguments = self.parse_arguments()?;
                            self.call(expression, arguments, Some(type_arguments), start, false)
                        }
                        TokenKind::NoSubstitutionTemplateLiteral | TokenKind::TemplateHead => {
                            self.parse_tagged_template(expression, Some(type_arguments), start, in_chain)?
                        }
                        _ => Expression::TSInstantiationExpression(Box::new(TSInstantiationExpression {
                            data: self.node(NodeKind::TSInstantiationExpression, start),
                            expression,
                            type_arguments: *type_arguments,
                        })),
                    };
                }
                _ => break,
            }
        }

        if in_chain {
            expression = Expression::ChainExpression(Box::new(ChainExpression {
                data: self.node(NodeKind::ChainExpression, start),
                expression,
            }));
        }
        Ok(expression)
    }

    fn member(
        &self,
        object: Expression,
        property: Expression,
        start: u32,
        computed: bool,
        optional: bool,
    ) -> Expression {
        Expression::MemberExpression(Box::new(MemberExpression {
            data: self.node(NodeKind::MemberExpression, start),
            object,
            property,
            computed,
            optional,
        }))
    }

    fn call(
        &self,
        callee: Expression,
        arguments: Vec<ExpressionOrSpread>,
        type_arguments: Option<Box<TSTypeParameterInstantiation>>,
        start: u32,
        optional: bool,
    ) -> Expression {
        Expression::CallExpression(Box::new(CallExpression {
            data: self.node(NodeKind::CallExpression, start),
            callee,
            arguments,
            optional,
            type_arguments,
        }))
    }

    fn parse_tagged_template(
        &mut self,
        tag: Expression,
        type_arguments: Option<Box<TSTypeParameterInstantiation>>,
        start: u32,
        in_chain: bool,
    ) -> PResult<Expression> {
        if in_chain {
            let error = self.error_here(
                &messages::TAGGED_TEMPLATE_EXPRESSIONS_ARE_NOT_PERMITTED_IN_AN_OPTIONAL_CHAIN,
                &[],
            );
            self.errors.push(error);
        }
        let quasi = self.parse_template_literal(true)?;
        Ok(Expression::TaggedTemplateExpression(Box::new(TaggedTemplateExpression {
            data: self.node(NodeKind::TaggedTemplateExpression, start),
            tag,
            type_arguments,
            quasi,
        })))
    }

    /// The name after `.` or `?.`: any identifier or keyword, or a private name.
    fn parse_member_name(&mut self) -> PResult<Expression> {
        if self.at(TokenKind::PrivateIdentifier) {
            return Ok(self.parse_private_identifier());
        }
        Ok(Expression::Identifier(Box::new(self.parse_identifier_name()?)))
    }

    /// `<T, U>` in expression position, kept only when what follows cannot
    /// continue a comparison.
    fn parse_type_arguments_in_expression(&mut self) -> PResult<Box<TSTypeParameterInstantiation>> {
        let type_arguments = self.parse_type_arguments()?;
        if self.can_follow_type_arguments_in_expression() {
            Ok(type_arguments)
        } else {
            Err(self.unexpected())
        }
    }

    fn can_follow_type_arguments_in_expression(&self) -> bool {
        match self.kind() {
            TokenKind::OpenParen
            | TokenKind::NoSubstitutionTemplateLiteral
            | TokenKind::TemplateHead => true,
            TokenKind::LessThan | TokenKind::GreaterThan | TokenKind::Plus | TokenKind::Minus => false,
            kind => {
                self.has_line_break()
                    || get_binary_operator_precedence(kind).is_valid()
                    || !is_start_of_expression(kind)
            }
        }
    }

    pub(crate) fn parse_arguments(&mut self) -> PResult<Vec<ExpressionOrSpread>> {
        self.expect(TokenKind::OpenParen)?;
        let mut arguments = Vec::new();
        let ctx = self.ctx - Context::DISALLOW_IN;
        self.with_context(ctx, |p| {
            while !p.at(TokenKind::CloseParen) && !p.at(TokenKind::EndOfFile) {
                if p.at(TokenKind::Comma) {
                    return Err(p.error_here(&messages::ARGUMENT_EXPRESSION_EXPECTED, &[]));
                }
                arguments.push(p.parse_spread_or_assignment()?);
                if !p.at(TokenKind::CloseParen) {
                    p.expect(TokenKind::Comma)?;
                }
            }
            Ok(())
        })?;
        self.expect(TokenKind::CloseParen)?;
        Ok(arguments)
    }

    fn parse_spread_or_assignment(&mut self) -> PResult<ExpressionOrSpread> {
        if self.at(TokenKind::DotDotDot) {
            let start = self.start();
            self.bump();
            let argument = self.parse_assignment()?;
            return Ok(ExpressionOrSpread::Spread(Box::new(SpreadElement {
                data: self.node(NodeKind::SpreadElement, start),
                argument,
            })));
        }
        Ok(ExpressionOrSpread::Expression(self.parse_assignment()?))
    }

    // ========================================================================
    // Primary expressions
    // ========================================================================

    pub(crate) fn parse_primary(&mut self) -> PResult<Expression> {
        let start = self.start();
        match self.kind() {
            TokenKind::NumericLiteral
            | TokenKind::BigIntLiteral
            | TokenKind::StringLiteral
            | TokenKind::TrueKeyword
            | TokenKind::FalseKeyword
            | TokenKind::NullKeyword => Ok(Expression::Literal(Box::new(self.parse_literal()?))),
            TokenKind::Slash | TokenKind::SlashEquals => self.parse_regular_expression(),
            TokenKind::ThisKeyword => {
                self.bump();
                Ok(Expression::ThisExpression(Box::new(self.empty_node(NodeKind::ThisExpression, start))))
            }
            TokenKind::OpenParen => self.parse_parenthesized(),
            TokenKind::OpenBracket => self.parse_array_expression(),
            TokenKind::OpenBrace => self.parse_object_expression(),
            TokenKind::FunctionKeyword => self.parse_function_expression(start, false),
            TokenKind::AsyncKeyword
                if self.peek_kind() == TokenKind::FunctionKeyword && self.next_is_on_same_line() =>
            {
                self.bump();
                self.parse_function_expression(start, true)
            }
            TokenKind::ClassKeyword => {
                let class = self.parse_class(start, Vec::new(), NodeKind::ClassExpression, false, false)?;
                Ok(Expression::ClassExpression(Box::new(class)))
            }
            TokenKind::At => {
                let decorators = self.parse_decorators()?;
                if !self.at(TokenKind::ClassKeyword) {
                    return Err(self.error_at(&messages::DECORATORS_ARE_NOT_VALID_HERE, &[], start, self.prev_token_end));
                }
                let class = self.parse_class(start, decorators, NodeKind::ClassExpression, false, false)?;
                Ok(Expression::ClassExpression(Box::new(class)))
            }
            TokenKind::NoSubstitutionTemplateLiteral | TokenKind::TemplateHead => {
                Ok(Expression::TemplateLiteral(Box::new(self.parse_template_literal(false)?)))
            }
            TokenKind::LessThan if self.jsx => self.parse_jsx_element_or_fragment(),
            TokenKind::PrivateIdentifier => {
                let expression = self.parse_private_identifier();
                if !self.at(TokenKind::InKeyword) {
                    return Err(self.expected("in"));
                }
                Ok(expression)
            }
            kind if kind.is_identifier_like() => {
                Ok(Expression::Identifier(Box::new(self.parse_identifier_reference()?)))
            }
            _ => Err(self.expected_message(&messages::EXPRESSION_EXPECTED)),
        }
    }

    pub(crate) fn parse_literal(&mut self) -> PResult<Literal> {
        let start = self.start();
        let token = &self.token;
        let (value, bigint) = match token.kind {
            TokenKind::NumericLiteral => (LiteralValue::Number(parse_numeric_literal(token.text)), None),
            TokenKind::BigIntLiteral => (LiteralValue::Null, Some(parse_bigint_literal(token.text))),
            TokenKind::StringLiteral => (LiteralValue::String(token.value.to_string()), None),
            TokenKind::TrueKeyword => (LiteralValue::Boolean(true), None),
            TokenKind::FalseKeyword => (LiteralValue::Boolean(false), None),
            TokenKind::NullKeyword => (LiteralValue::Null, None),
            _ => return Err(self.unexpected()),
        };
        let raw = token.text.to_string();
        if token.kind == TokenKind::NumericLiteral
            && token.flags.contains(TokenFlags::LEGACY_OCTAL)
            && raw.bytes().all(|b| matches!(b, b'0'..=b'7'))
        {
            let suggestion = format!("0o{}", &raw[1..]);
            let (start, end) = (token.start, token.end);
            self.report(&messages::OCTAL_LITERALS_ARE_DEPRECATED, &[suggestion.as_str()], start, end);
        }
        self.bump();
        Ok(Literal {
            data: self.node(NodeKind::Literal, start),
            value,
            raw,
            regex: None,
            bigint,
        })
    }

    /// A string literal where one is required (module specifiers).
    pub(crate) fn parse_string_literal(&mut self) -> PResult<Literal> {
        if !self.at(TokenKind::StringLiteral) {
            return Err(self.expected_message(&messages::STRING_LITERAL_EXPECTED));
        }
        self.parse_literal()
    }

    fn parse_regular_expression(&mut self) -> PResult<Expression> {
        let start = self.start();
        self.rescan_slash();
        if !self.at(TokenKind::RegularExpressionLiteral) {
            return Err(self.unexpected());
        }
        let regex = RegExpValue {
            pattern: self.token.value.to_string(),
            flags: self.token.regex_flags().to_string(),
        };
        let raw = self.token.text.to_string();
        self.bump();
        Ok(Expression::Literal(Box::new(Literal {
            data: self.node(NodeKind::Literal, start),
            value: LiteralValue::Null,
            raw,
            regex: Some(regex),
            bigint: None,
        })))
    }

    pub(crate) fn parse_private_identifier(&mut self) -> Expression {
        let start = self.start();
        if !self.in_context(Context::IN_CLASS) {
            let error = self.error_here(&messages::PRIVATE_IDENTIFIERS_ARE_NOT_ALLOWED_OUTSIDE_CLASS_BODIES, &[]);
            self.errors.push(error);
        }
        let name = self.token.value.to_string();
        self.bump();
        Expression::PrivateIdentifier(Box::new(PrivateIdentifier {
            data: self.node(NodeKind::PrivateIdentifier, start),
            name,
        }))
    }

    /// An identifier in expression or binding position. Contextual keywords
    /// are accepted; reserved words are not.
    pub(crate) fn parse_identifier_reference(&mut self) -> PResult<Identifier> {
        if !self.kind().is_identifier_like() {
            return Err(self.expected_message(&messages::IDENTIFIER_EXPECTED));
        }
        let start = self.start();
        let name = self.token.value.to_string();
        self.bump();
        Ok(self.identifier(name, start, self.prev_token_end))
    }

    #[inline]
    pub(crate) fn parse_binding_identifier(&mut self) -> PResult<Identifier> {
        self.parse_identifier_reference()
    }

    /// Any identifier or keyword, as after `.` or in a property key.
    pub(crate) fn parse_identifier_name(&mut self) -> PResult<Identifier> {
        if !self.kind().is_identifier_or_keyword() {
            return Err(self.expected_message(&messages::IDENTIFIER_EXPECTED));
        }
        let start = self.start();
        let name = self.token.value.to_string();
        self.bump();
        Ok(self.identifier(name, start, self.prev_token_end))
    }

    fn parse_parenthesized(&mut self) -> PResult<Expression> {
        let start = self.start();
        self.bump();
        let expression = self.parse_expression_allow_in()?;
        self.expect(TokenKind::CloseParen)?;
        if self.at(TokenKind::EqualsGreaterThan) && !self.has_line_break() {
            let params = self.expression_to_parameters(expression);
            return self.parse_arrow_rest(ArrowHead {
                start,
                is_async: false,
                type_parameters: None,
                params,
                return_type: None,
            });
        }
        Ok(expression)
    }

    fn parse_array_expression(&mut self) -> PResult<Expression> {
        let start = self.start();
        self.bump();
        let mut elements = Vec::new();
        while !self.at(TokenKind::CloseBracket) && !self.at(TokenKind::EndOfFile) {
            if self.eat(TokenKind::Comma) {
                elements.push(None);
                continue;
            }
            elements.push(Some(self.parse_spread_or_assignment_allow_in()?));
            if !self.at(TokenKind::CloseBracket) {
                self.expect(TokenKind::Comma)?;
            }
        }
        self.expect(TokenKind::CloseBracket)?;
        Ok(Expression::ArrayExpression(Box::new(ArrayExpression {
            data: self.node(NodeKind::ArrayExpression, start),
            elements,
        })))
    }

    fn parse_spread_or_assignment_allow_in(&mut self) -> PResult<ExpressionOrSpread> {
        let ctx = self.ctx - Context::DISALLOW_IN;
        self.with_context(ctx, |p| p.parse_spread_or_assignment())
    }

    fn parse_object_expression(&mut self) -> PResult<Expression> {
        let start = self.start();
        self.bump();
        let mut properties = Vec::new();
        while !self.at(TokenKind::CloseBrace) && !self.at(TokenKind::EndOfFile) {
            properties.push(self.parse_object_member()?);
            if !self.at(TokenKind::CloseBrace) {
                self.expect(TokenKind::Comma)?;
            }
        }
        self.expect(TokenKind::CloseBrace)?;
        Ok(Expression::ObjectExpression(Box::new(ObjectExpression {
            data: self.node(NodeKind::ObjectExpression, start),
            properties,
        })))
    }

    /// Whether the current `get`/`set`/`async` is a modifier of the member
    /// that follows rather than its name.
    pub(crate) fn is_method_modifier(&mut self) -> bool {
        let next = self.peek();
        if self.at(TokenKind::AsyncKeyword) && next.has_preceding_line_break() {
            return false;
        }
        is_property_name_start(next.kind) || next.kind == TokenKind::Asterisk
    }

    fn parse_object_member(&mut self) -> PResult<ObjectProperty> {
        let start = self.start();
        if self.at(TokenKind::DotDotDot) {
            self.bump();
            let argument = self.parse_assignment_allow_in()?;
            return Ok(ObjectProperty::Spread(Box::new(SpreadElement {
                data: self.node(NodeKind::SpreadElement, start),
                argument,
            })));
        }

        let mut is_async = false;
        let mut kind = PropertyKind::Init;
        if self.at(TokenKind::AsyncKeyword) && self.is_method_modifier() {
            self.bump();
            is_async = true;
        } else if matches!(self.kind(), TokenKind::GetKeyword | TokenKind::SetKeyword) && self.is_method_modifier() {
            kind = if self.at(TokenKind::GetKeyword) { PropertyKind::Get } else { PropertyKind::Set };
            self.bump();
        }
        let generator = self.eat(TokenKind::Asterisk);

        let key_kind = self.kind();
        if !is_property_name_start(key_kind) {
            return Err(self.expected_message(&messages::PROPERTY_ASSIGNMENT_EXPECTED));
        }
        let (key, computed) = self.parse_property_key()?;

        if is_async
            || generator
            || kind != PropertyKind::Init
            || matches!(self.kind(), TokenKind::OpenParen | TokenKind::LessThan)
        {
            let value = self.parse_method_value(is_async, generator)?;
            self.check_accessor_params(kind_to_method(kind), &value);
            return Ok(ObjectProperty::Property(Box::new(Property {
                data: self.node(NodeKind::Property, start),
                key,
                value: Expression::FunctionExpression(Box::new(value)),
                kind,
                method: kind == PropertyKind::Init,
                shorthand: false,
                computed,
            })));
        }

        if self.eat(TokenKind::Colon) {
            let value = self.parse_assignment_allow_in()?;
            return Ok(ObjectProperty::Property(Box::new(Property {
                data: self.node(NodeKind::Property, start),
                key,
                value,
                kind,
                method: false,
                shorthand: false,
                computed,
            })));
        }

        // Shorthand `{ a }`, or `{ a = 1 }` which is only valid once the
        // object is reinterpreted as a pattern.
        let Expression::Identifier(id) = &key else {
            return Err(self.expected(":"));
        };
        if computed || !key_kind.is_identifier_like() {
            return Err(self.expected(":"));
        }
        let value = if self.at(TokenKind::Equals) {
            let left = Pattern::Identifier(id.clone());
            self.bump();
            let right = self.parse_assignment_allow_in()?;
            Expression::AssignmentExpression(Box::new(AssignmentExpression {
                data: self.node(NodeKind::AssignmentExpression, start),
                operator: AssignmentOperator::Assign,
                left,
                right,
            }))
        } else {
            Expression::Identifier(id.clone())
        };
        Ok(ObjectProperty::Property(Box::new(Property {
            data: self.node(NodeKind::Property, start),
            key,
            value,
            kind,
            method: false,
            shorthand: true,
            computed: false,
        })))
    }

    /// A property name: identifier or keyword, string, number, private
    /// name, or `[computed]`. Returns the key and whether it was computed.
    pub(crate) fn parse_property_key(&mut self) -> PResult<(Expression, bool)> {
        match self.kind() {
            TokenKind::StringLiteral | TokenKind::NumericLiteral | TokenKind::BigIntLiteral => {
                Ok((Expression::Literal(Box::new(self.parse_literal()?)), false))
            }
            TokenKind::OpenBracket => {
                self.bump();
                let key = self.parse_assignment_allow_in()?;
                self.expect(TokenKind::CloseBracket)?;
                Ok((key, true))
            }
            TokenKind::PrivateIdentifier => Ok((self.parse_private_identifier(), false)),
            kind if kind.is_identifier_or_keyword() => {
                Ok((Expression::Identifier(Box::new(self.parse_identifier_name()?)), false))
            }
            _ => Err(self.expected_message(&messages::PROPERTY_ASSIGNMENT_EXPECTED)),
        }
    }

    /// The function of an object or class method, starting at its type
    /// parameters or parameter list.
    pub(crate) fn parse_method_value(&mut self, is_async: bool, generator: bool) -> PResult<Function> {
        let start = self.start();
        let function = self.parse_function_rest(start, None, is_async, generator, NodeKind::FunctionExpression)?;
        if function.body.is_none() {
            return Err(self.expected("{"));
        }
        Ok(function)
    }

    pub(crate) fn check_accessor_params(&mut self, kind: MethodKind, function: &Function) {
        let span = function.span();
        match kind {
            MethodKind::Get if !function.params.is_empty() => {
                self.report(&messages::A_GET_ACCESSOR_CANNOT_HAVE_PARAMETERS, &[], span.pos, span.end)
            }
            MethodKind::Set if function.params.len() != 1 => self.report(
                &messages::A_SET_ACCESSOR_MUST_HAVE_EXACTLY_ONE_PARAMETER,
                &[],
                span.pos,
                span.end,
            ),
            _ => {}
        }
    }

    /// `function [*] [name] (...) {...}` in expression position; `start`
    /// includes a leading `async`.
    fn parse_function_expression(&mut self, start: u32, is_async: bool) -> PResult<Expression> {
        self.expect(TokenKind::FunctionKeyword)?;
        let generator = self.eat(TokenKind::Asterisk);
        let id = if self.kind().is_identifier_like() {
            Some(self.parse_binding_identifier()?)
        } else {
            None
        };
        let function = self.parse_function_rest(start, id, is_async, generator, NodeKind::FunctionExpression)?;
        if function.body.is_none() {
            return Err(self.expected("{"));
        }
        Ok(Expression::FunctionExpression(Box::new(function)))
    }

    /// Type parameters, parameters, return type and (optional) body of any
    /// function-like. The caller decides whether a missing body is allowed.
    pub(crate) fn parse_function_rest(
        &mut self,
        start: u32,
        id: Option<Identifier>,
        is_async: bool,
        generator: bool,
        kind: NodeKind,
    ) -> PResult<Function> {
        let type_parameters = if self.at(TokenKind::LessThan) {
            Some(self.parse_type_parameters()?)
        } else {
            None
        };
        let ctx = self.ctx.for_function(is_async, generator);
        let params = self.with_context(ctx, |p| p.parse_parameter_list())?;
        let return_type = if self.at(TokenKind::Colon) {
            Some(self.parse_return_type()?)
        } else {
            None
        };
        let body = if self.at(TokenKind::OpenBrace) {
            Some(self.parse_function_body(ctx)?)
        } else {
            None
        };
        Ok(Function {
            data: self.node(kind, start),
            id,
            params,
            body,
            generator,
            is_async,
            expression: false,
            declare: false,
            type_parameters,
            return_type,
        })
    }

    // ========================================================================
    // Templates
    // ========================================================================

    /// A template literal. Invalid escapes are an error unless the template
    /// is tagged, where they only leave `cooked` empty.
    pub(crate) fn parse_template_literal(&mut self, tagged: bool) -> PResult<TemplateLiteral> {
        let start = self.start();
        let mut quasis = Vec::new();
        let mut expressions = Vec::new();

        if self.at(TokenKind::NoSubstitutionTemplateLiteral) {
            quasis.push(self.template_element(tagged));
            self.bump();
        } else {
            if !self.at(TokenKind::TemplateHead) {
                return Err(self.unexpected());
            }
            quasis.push(self.template_element(tagged));
            self.bump();
            loop {
                expressions.push(self.parse_expression_allow_in()?);
                if !self.at(TokenKind::CloseBrace) {
                    return Err(self.expected("}"));
                }
                self.rescan_template_continuation();
                match self.kind() {
                    TokenKind::TemplateMiddle => {
                        quasis.push(self.template_element(tagged));
                        self.bump();
                    }
                    TokenKind::TemplateTail => {
                        quasis.push(self.template_element(tagged));
                        self.bump();
                        break;
                    }
                    _ => return Err(self.unexpected()),
                }
            }
        }

        Ok(TemplateLiteral {
            data: self.node(NodeKind::TemplateLiteral, start),
            quasis,
            expressions,
        })
    }

    pub(crate) fn template_element(&mut self, tagged: bool) -> TemplateElement {
        let token = &self.token;
        let raw = token.template_raw();
        let tail = matches!(token.kind, TokenKind::NoSubstitutionTemplateLiteral | TokenKind::TemplateTail);
        let invalid = token.flags.contains(TokenFlags::CONTAINS_INVALID_ESCAPE);
        let cooked = (!invalid).then(|| token.value.to_string());
        let (start, end) = (token.start, token.end);
        if invalid && !tagged {
            let escape = first_escape(&raw);
            self.report(&messages::ESCAPE_SEQUENCE_0_IS_NOT_ALLOWED, &[escape], start, end);
        }
        TemplateElement {
            data: self.node_span(NodeKind::TemplateElement, start, end),
            value: TemplateElementValue { raw, cooked },
            tail,
        }
    }
}

fn kind_to_method(kind: PropertyKind) -> MethodKind {
    match kind {
        PropertyKind::Init => MethodKind::Method,
        PropertyKind::Get => MethodKind::Get,
        PropertyKind::Set => MethodKind::Set,
    }
}

/// The first escape sequence of a raw template chunk that is not a plain
/// single-character escape, for error messages.
fn first_escape(raw: &str) -> &str {
    let mut chars = raw.char_indices().peekable();
    while let Some((i, ch)) = chars.next() {
        if ch != '\\' {
            continue;
        }
        match chars.peek() {
            Some(&(j, next)) if next.is_ascii_digit() || next == 'x' || next == 'u' => {
                let end = (j + next.len_utf8() + 2).min(raw.len());
                return raw.get(i..end).unwrap_or("\\");
            }
            _ => {
                chars.next();
            }
        }
    }
    "\\"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_escape() {
        assert_eq!(first_escape(r"a\x1"), r"\x1");
        assert_eq!(first_escape(r"\n\01"), r"\01");
        assert_eq!(first_escape(r"\u{"), r"\u{");
        assert_eq!(first_escape("plain"), "\\");
    }

    #[test]
    fn test_kind_to_method() {
        assert_eq!(kind_to_method(PropertyKind::Get), MethodKind::Get);
        assert_eq!(kind_to_method(PropertyKind::Init), MethodKind::Method);
    }
}
