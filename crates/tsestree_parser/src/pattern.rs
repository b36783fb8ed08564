//! Binding patterns, parameter lists, and the reinterpretation of
//! expressions as assignment targets.

use tsestree_ast::*;
use tsestree_diagnostics::{messages, DiagnosticMessage};

use crate::parser::{PResult, Parser};

impl<'a> Parser<'a> {
    // ========================================================================
    // Parameters
    // ========================================================================

    /// `( param, param, ...rest )`
    pub(crate) fn parse_parameter_list(&mut self) -> PResult<Vec<Parameter>> {
        self.expect(TokenKind::OpenParen)?;
        let mut params = Vec::new();
        while !self.at(TokenKind::CloseParen) && !self.at(TokenKind::EndOfFile) {
            let param = self.parse_parameter()?;
            let is_rest = matches!(param, Parameter::Pattern(Pattern::RestElement(_)));
            let span = param.span();
            params.push(param);
            if self.at(TokenKind::CloseParen) {
                break;
            }
            if is_rest {
                self.report(&messages::A_REST_PARAMETER_MUST_BE_LAST, &[], span.pos, span.end);
            }
            self.expect(TokenKind::Comma)?;
        }
        self.expect(TokenKind::CloseParen)?;
        Ok(params)
    }

    fn parse_parameter(&mut self) -> PResult<Parameter> {
        let start = self.start();
        let decorators = if self.at(TokenKind::At) {
            self.parse_decorators()?
        } else {
            Vec::new()
        };

        let modifiers = self.parse_parameter_modifiers()?;

        let pattern_start = self.start();
        let mut pattern = if self.at(TokenKind::ThisKeyword) {
            self.bump();
            let id = self.identifier("this", pattern_start, self.prev_token_end);
            Pattern::Identifier(Box::new(id))
        } else if self.at(TokenKind::DotDotDot) {
            self.bump();
            let argument = self.parse_binding_target(&messages::PARAMETER_DECLARATION_EXPECTED)?;
            Pattern::RestElement(Box::new(RestElement {
                data: self.node(NodeKind::RestElement, pattern_start),
                argument,
                decorators: Vec::new(),
                optional: false,
                type_annotation: None,
            }))
        } else {
            self.parse_binding_target(&messages::PARAMETER_DECLARATION_EXPECTED)?
        };

        if self.at(TokenKind::Question) {
            self.bump();
            if let Some(optional) = pattern.optional_mut() {
                *optional = true;
            }
            self.extend_pattern(&mut pattern, pattern_start);
        }
        self.parse_pattern_type_annotation(&mut pattern, pattern_start)?;

        if self.at(TokenKind::Equals) {
            self.bump();
            let right = self.parse_assignment_allow_in()?;
            pattern = Pattern::AssignmentPattern(Box::new(AssignmentPattern {
                data: self.node(NodeKind::AssignmentPattern, pattern_start),
                left: pattern,
                right,
                decorators: Vec::new(),
                optional: false,
                type_annotation: None,
            }));
        }

        if modifiers.is_empty() {
            if !decorators.is_empty() {
                if let Some(slot) = pattern.decorators_mut() {
                    *slot = decorators;
                }
            }
            return Ok(Parameter::Pattern(pattern));
        }

        Ok(Parameter::TSParameterProperty(Box::new(TSParameterProperty {
            data: self.node(NodeKind::TSParameterProperty, start),
            accessibility: modifiers.accessibility(),
            readonly: modifiers.contains(ModifierFlags::READONLY),
            is_static: false,
            is_override: modifiers.contains(ModifierFlags::OVERRIDE),
            parameter: pattern,
            decorators,
        })))
    }

    /// Accessibility, `readonly` and `override` in front of a constructor
    /// parameter. A modifier keyword followed by anything but a binding is
    /// the parameter's name.
    fn parse_parameter_modifiers(&mut self) -> PResult<ModifierFlags> {
        let mut flags = ModifierFlags::empty();
        loop {
            let flag = match self.kind() {
                TokenKind::PublicKeyword => ModifierFlags::PUBLIC,
                TokenKind::PrivateKeyword => ModifierFlags::PRIVATE,
                TokenKind::ProtectedKeyword => ModifierFlags::PROTECTED,
                TokenKind::ReadonlyKeyword => ModifierFlags::READONLY,
                TokenKind::OverrideKeyword => ModifierFlags::OVERRIDE,
                _ => return Ok(flags),
            };
            let next = self.peek();
            let starts_binding = next.kind.is_identifier_like()
                || matches!(
                    next.kind,
                    TokenKind::OpenBrace | TokenKind::OpenBracket | TokenKind::DotDotDot | TokenKind::ThisKeyword
                );
            if !starts_binding || next.has_preceding_line_break() {
                return Ok(flags);
            }
            if flags.contains(flag) {
                let text = self.token.text;
                let error = self.error_here(&messages::_0_MODIFIER_ALREADY_SEEN, &[text]);
                self.errors.push(error);
            }
            flags |= flag;
            self.bump();
        }
    }

    // ========================================================================
    // Binding patterns
    // ========================================================================

    /// An identifier, object pattern or array pattern.
    pub(crate) fn parse_binding_target(&mut self, expected: &'static DiagnosticMessage) -> PResult<Pattern> {
        self.guarded(|p| match p.kind() {
            TokenKind::OpenBrace => p.parse_object_binding_pattern(),
            TokenKind::OpenBracket => p.parse_array_binding_pattern(),
            kind if kind.is_identifier_like() => {
                Ok(Pattern::Identifier(Box::new(p.parse_binding_identifier()?)))
            }
            _ => Err(p.expected_message(expected)),
        })
    }

    /// A binding target with an optional `= default`.
    fn parse_binding_element(&mut self) -> PResult<Pattern> {
        let start = self.start();
        let target = self.parse_binding_target(&messages::IDENTIFIER_EXPECTED)?;
        if !self.eat(TokenKind::Equals) {
            return Ok(target);
        }
        let right = self.parse_assignment_allow_in()?;
        Ok(Pattern::AssignmentPattern(Box::new(AssignmentPattern {
            data: self.node(NodeKind::AssignmentPattern, start),
            left: target,
            right,
            decorators: Vec::new(),
            optional: false,
            type_annotation: None,
        })))
    }

    fn parse_object_binding_pattern(&mut self) -> PResult<Pattern> {
        let start = self.start();
        self.bump();
        let mut properties = Vec::new();
        while !self.at(TokenKind::CloseBrace) && !self.at(TokenKind::EndOfFile) {
            let property = self.parse_object_binding_property()?;
            let rest_span = matches!(property, ObjectPatternProperty::Rest(_)).then(|| property.span());
            properties.push(property);
            if self.at(TokenKind::CloseBrace) {
                break;
            }
            if let Some(span) = rest_span {
                self.report(&messages::A_REST_ELEMENT_MUST_BE_LAST_IN_A_DESTRUCTURING_PATTERN, &[], span.pos, span.end);
            }
            self.expect(TokenKind::Comma)?;
        }
        self.expect(TokenKind::CloseBrace)?;
        Ok(Pattern::ObjectPattern(Box::new(ObjectPattern {
            data: self.node(NodeKind::ObjectPattern, start),
            properties,
            decorators: Vec::new(),
            optional: false,
            type_annotation: None,
        })))
    }

    fn parse_object_binding_property(&mut self) -> PResult<ObjectPatternProperty> {
        let start = self.start();
        if self.eat(TokenKind::DotDotDot) {
            let argument = self.parse_binding_target(&messages::IDENTIFIER_EXPECTED)?;
            return Ok(ObjectPatternProperty::Rest(Box::new(RestElement {
                data: self.node(NodeKind::RestElement, start),
                argument,
                decorators: Vec::new(),
                optional: false,
                type_annotation: None,
            })));
        }

        let key_kind = self.kind();
        let (key, computed) = self.parse_property_key()?;
        if self.eat(TokenKind::Colon) {
            let value = self.parse_binding_element()?;
            return Ok(ObjectPatternProperty::Property(Box::new(AssignmentProperty {
                data: self.node(NodeKind::Property, start),
                key,
                value,
                kind: PropertyKind::Init,
                method: false,
                shorthand: false,
                computed,
            })));
        }

        let id = match &key {
            Expression::Identifier(id) if !computed && key_kind.is_identifier_like() => id.clone(),
            _ => return Err(self.expected(":")),
        };
        let mut value = Pattern::Identifier(id);
        if self.eat(TokenKind::Equals) {
            let right = self.parse_assignment_allow_in()?;
            value = Pattern::AssignmentPattern(Box::new(AssignmentPattern {
                data: self.node(NodeKind::AssignmentPattern, start),
                left: value,
                right,
                decorators: Vec::new(),
                optional: false,
                type_annotation: None,
            }));
        }
        Ok(ObjectPatternProperty::Property(Box::new(AssignmentProperty {
            data: self.node(NodeKind::Property, start),
            key,
            value,
            kind: PropertyKind::Init,
            method: false,
            shorthand: true,
            computed: false,
        })))
    }

    fn parse_array_binding_pattern(&mut self) -> PResult<Pattern> {
        let start = self.start();
        self.bump();
        let mut elements = Vec::new();
        while !self.at(TokenKind::CloseBracket) && !self.at(TokenKind::EndOfFile) {
            if self.eat(TokenKind::Comma) {
                elements.push(None);
                continue;
            }
            let element_start = self.start();
            if self.eat(TokenKind::DotDotDot) {
                let argument = self.parse_binding_target(&messages::IDENTIFIER_EXPECTED)?;
                let rest = RestElement {
                    data: self.node(NodeKind::RestElement, element_start),
                    argument,
                    decorators: Vec::new(),
                    optional: false,
                    type_annotation: None,
                };
                elements.push(Some(Pattern::RestElement(Box::new(rest))));
                if !self.at(TokenKind::CloseBracket) {
                    self.report(
                        &messages::A_REST_ELEMENT_MUST_BE_LAST_IN_A_DESTRUCTURING_PATTERN,
                        &[],
                        element_start,
                        self.prev_token_end,
                    );
                }
            } else {
                elements.push(Some(self.parse_binding_element()?));
            }
            if !self.at(TokenKind::CloseBracket) {
                self.expect(TokenKind::Comma)?;
            }
        }
        self.expect(TokenKind::CloseBracket)?;
        Ok(Pattern::ArrayPattern(Box::new(ArrayPattern {
            data: self.node(NodeKind::ArrayPattern, start),
            elements,
            decorators: Vec::new(),
            optional: false,
            type_annotation: None,
        })))
    }

    /// `: Type` after a binding. The annotation becomes part of the
    /// binding's span.
    pub(crate) fn parse_pattern_type_annotation(&mut self, pattern: &mut Pattern, start: u32) -> PResult<()> {
        if !self.at(TokenKind::Colon) {
            return Ok(());
        }
        let annotation = self.parse_type_annotation()?;
        if let Some(slot) = pattern.type_annotation_mut() {
            *slot = Some(annotation);
        }
        self.extend_pattern(pattern, start);
        Ok(())
    }

    fn extend_pattern(&self, pattern: &mut Pattern, start: u32) {
        let end = self.prev_token_end;
        self.set_span(pattern.data_mut(), start, end);
    }

    // ========================================================================
    // Expressions reinterpreted as patterns
    // ========================================================================

    /// Reinterpret the left side of `=` (or the head of a `for-in/of`) as a
    /// pattern. Invalid targets are reported and kept as expressions.
    pub(crate) fn expression_to_pattern(&mut self, expr: Expression) -> Pattern {
        match expr {
            Expression::Identifier(id) => Pattern::Identifier(id),
            Expression::ArrayExpression(array) => {
                let ArrayExpression { mut data, elements } = *array;
                data.kind = NodeKind::ArrayPattern;
                let count = elements.len();
                let elements = elements
                    .into_iter()
                    .enumerate()
                    .map(|(i, element)| {
                        element.map(|element| match element {
                            ExpressionOrSpread::Spread(spread) => {
                                if i + 1 != count {
                                    let span = spread.data.span;
                                    self.report(
                                        &messages::A_REST_ELEMENT_MUST_BE_LAST_IN_A_DESTRUCTURING_PATTERN,
                                        &[],
                                        span.pos,
                                        span.end,
                                    );
                                }
                                Pattern::RestElement(Box::new(self.spread_to_rest(*spread)))
                            }
                            ExpressionOrSpread::Expression(expr) => self.expression_to_pattern(expr),
                        })
                    })
                    .collect();
                Pattern::ArrayPattern(Box::new(ArrayPattern {
                    data,
                    elements,
                    decorators: Vec::new(),
                    optional: false,
                    type_annotation: None,
                }))
            }
            Expression::ObjectExpression(object) => {
                let ObjectExpression { mut data, properties } = *object;
                data.kind = NodeKind::ObjectPattern;
                let count = properties.len();
                let properties = properties
                    .into_iter()
                    .enumerate()
                    .map(|(i, property)| match property {
                        ObjectProperty::Spread(spread) => {
                            if i + 1 != count {
                                let span = spread.data.span;
                                self.report(
                                    &messages::A_REST_ELEMENT_MUST_BE_LAST_IN_A_DESTRUCTURING_PATTERN,
                                    &[],
                                    span.pos,
                                    span.end,
                                );
                            }
                            ObjectPatternProperty::Rest(Box::new(self.spread_to_rest(*spread)))
                        }
                        ObjectProperty::Property(property) => {
                            ObjectPatternProperty::Property(Box::new(self.property_to_pattern(*property)))
                        }
                    })
                    .collect();
                Pattern::ObjectPattern(Box::new(ObjectPattern {
                    data,
                    properties,
                    decorators: Vec::new(),
                    optional: false,
                    type_annotation: None,
                }))
            }
            Expression::AssignmentExpression(assignment) if assignment.operator == AssignmentOperator::Assign => {
                let AssignmentExpression { mut data, left, right, .. } = *assignment;
                data.kind = NodeKind::AssignmentPattern;
                Pattern::AssignmentPattern(Box::new(AssignmentPattern {
                    data,
                    left,
                    right,
                    decorators: Vec::new(),
                    optional: false,
                    type_annotation: None,
                }))
            }
            expr => self.simple_assignment_target(
                expr,
                &messages::THE_LEFT_HAND_SIDE_OF_AN_ASSIGNMENT_EXPRESSION_MUST_BE_A_VARIABLE_OR_A_PROPERTY_ACCESS,
            ),
        }
    }

    /// The target of a compound assignment or update: an identifier or a
    /// non-optional member access, possibly under TS wrappers.
    pub(crate) fn simple_assignment_target(
        &mut self,
        expr: Expression,
        message: &DiagnosticMessage,
    ) -> Pattern {
        match expr {
            Expression::Identifier(id) => Pattern::Identifier(id),
            expr => {
                if !expr.is_simple_assignment_target() {
                    let span = expr.span();
                    self.report(message, &[], span.pos, span.end);
                }
                Pattern::Expression(Box::new(expr))
            }
        }
    }

    fn spread_to_rest(&mut self, spread: SpreadElement) -> RestElement {
        let SpreadElement { mut data, argument } = spread;
        data.kind = NodeKind::RestElement;
        RestElement {
            data,
            argument: self.expression_to_pattern(argument),
            decorators: Vec::new(),
            optional: false,
            type_annotation: None,
        }
    }

    fn property_to_pattern(&mut self, property: Property) -> AssignmentProperty {
        let Property { data, key, value, kind, method, shorthand, computed } = property;
        if method || kind != PropertyKind::Init {
            let span = data.span;
            self.report(
                &messages::THE_LEFT_HAND_SIDE_OF_AN_ASSIGNMENT_EXPRESSION_MUST_BE_A_VARIABLE_OR_A_PROPERTY_ACCESS,
                &[],
                span.pos,
                span.end,
            );
        }
        AssignmentProperty {
            data,
            key,
            value: self.expression_to_pattern(value),
            kind: PropertyKind::Init,
            method: false,
            shorthand,
            computed,
        }
    }

    /// The parameters of `(a, b = 1) => ...` when the parenthesized part was
    /// first read as an expression.
    pub(crate) fn expression_to_parameters(&mut self, expr: Expression) -> Vec<Parameter> {
        let expressions = match expr {
            Expression::SequenceExpression(sequence) => sequence.expressions,
            expr => vec![expr],
        };
        expressions
            .into_iter()
            .map(|expr| {
                let pattern = self.expression_to_pattern(expr);
                if let Pattern::Expression(expr) = &pattern {
                    let span = expr.span();
                    self.report(&messages::PARAMETER_DECLARATION_EXPECTED, &[], span.pos, span.end);
                }
                Parameter::Pattern(pattern)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::options::ParseOptions;
    use tsestree_ast::*;

    fn first_expression(source: &str) -> (Expression, Vec<u32>) {
        let output = crate::parse(source, &ParseOptions::default());
        let codes = output.errors.iter().map(|e| e.code).collect();
        match output.program.body.into_iter().next() {
            Some(Statement::ExpressionStatement(statement)) => (statement.expression, codes),
            other => panic!("expected an expression statement, got {other:?}"),
        }
    }

    #[test]
    fn test_array_assignment_becomes_pattern() {
        let (expr, errors) = first_expression("[a, , b = 1, ...c] = d;");
        assert!(errors.is_empty());
        let Expression::AssignmentExpression(assignment) = expr else { panic!() };
        let Pattern::ArrayPattern(array) = &assignment.left else { panic!() };
        assert_eq!(array.data.kind, NodeKind::ArrayPattern);
        assert_eq!(array.elements.len(), 4);
        assert!(array.elements[1].is_none());
        assert!(matches!(array.elements[2], Some(Pattern::AssignmentPattern(_))));
        assert!(matches!(array.elements[3], Some(Pattern::RestElement(_))));
    }

    #[test]
    fn test_object_shorthand_default_becomes_pattern() {
        let (expr, errors) = first_expression("({ a = 1, b: [c] } = obj);");
        assert!(errors.is_empty());
        let Expression::AssignmentExpression(assignment) = expr else { panic!() };
        let Pattern::ObjectPattern(object) = &assignment.left else { panic!() };
        let ObjectPatternProperty::Property(first) = &object.properties[0] else { panic!() };
        assert!(first.shorthand);
        assert!(matches!(first.value, Pattern::AssignmentPattern(_)));
        let ObjectPatternProperty::Property(second) = &object.properties[1] else { panic!() };
        assert!(matches!(second.value, Pattern::ArrayPattern(_)));
    }

    #[test]
    fn test_invalid_assignment_target_is_reported() {
        let (_, errors) = first_expression("a + b = c;");
        assert_eq!(errors, vec![2364]);
        let (_, errors) = first_expression("f() += 1;");
        assert_eq!(errors, vec![2364]);
    }

    #[test]
    fn test_rest_must_be_last() {
        let (_, errors) = first_expression("[...a, b] = c;");
        assert_eq!(errors, vec![2462]);
    }

    #[test]
    fn test_member_target_is_kept_as_expression() {
        let (expr, errors) = first_expression("a.b = 1;");
        assert!(errors.is_empty());
        let Expression::AssignmentExpression(assignment) = expr else { panic!() };
        assert!(matches!(assignment.left, Pattern::Expression(_)));
    }
}
