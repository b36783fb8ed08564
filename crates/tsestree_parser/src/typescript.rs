//! The TypeScript type grammar: annotations, type parameters and
//! arguments, and every type form from keywords to conditional types.

use tsestree_ast::*;
use tsestree_diagnostics::messages;

use crate::context::Context;
use crate::parser::{PResult, Parser};
use crate::utilities::{is_class_member_modifier, is_property_name_start, keyword_type_kind};

impl<'a> Parser<'a> {
    // ========================================================================
    // Annotations
    // ========================================================================

    /// `: Type`
    pub(crate) fn parse_type_annotation(&mut self) -> PResult<Box<TSTypeAnnotation>> {
        let start = self.start();
        self.expect(TokenKind::Colon)?;
        let type_annotation = self.parse_type()?;
        Ok(Box::new(TSTypeAnnotation {
            data: self.node(NodeKind::TSTypeAnnotation, start),
            type_annotation,
        }))
    }

    /// `: Type` in return position, where a type predicate is also allowed.
    pub(crate) fn parse_return_type(&mut self) -> PResult<Box<TSTypeAnnotation>> {
        let start = self.start();
        self.expect(TokenKind::Colon)?;
        let type_annotation = self.parse_type_or_type_predicate()?;
        Ok(Box::new(TSTypeAnnotation {
            data: self.node(NodeKind::TSTypeAnnotation, start),
            type_annotation,
        }))
    }

    /// `x is T`, `this is T`, `asserts x [is T]`, or a plain type.
    fn parse_type_or_type_predicate(&mut self) -> PResult<TsType> {
        let start = self.start();
        if self.at(TokenKind::AssertsKeyword) {
            let next = self.peek();
            if !next.has_preceding_line_break()
                && (next.kind.is_identifier_like() || next.kind == TokenKind::ThisKeyword)
            {
                self.bump();
                let parameter_name = self.parse_predicate_name()?;
                let type_annotation = if self.at(TokenKind::IsKeyword) && !self.has_line_break() {
                    self.bump();
                    Some(self.parse_predicate_type()?)
                } else {
                    None
                };
                return Ok(TsType::TSTypePredicate(Box::new(TSTypePredicate {
                    data: self.node(NodeKind::TSTypePredicate, start),
                    asserts: true,
                    parameter_name,
                    type_annotation,
                })));
            }
        }

        let kind = self.kind();
        if (kind.is_identifier_like() || kind == TokenKind::ThisKeyword) && kind != TokenKind::AssertsKeyword {
            let next = self.peek();
            if next.kind == TokenKind::IsKeyword && !next.has_preceding_line_break() {
                let parameter_name = self.parse_predicate_name()?;
                self.bump();
                let type_annotation = Some(self.parse_predicate_type()?);
                return Ok(TsType::TSTypePredicate(Box::new(TSTypePredicate {
                    data: self.node(NodeKind::TSTypePredicate, start),
                    asserts: false,
                    parameter_name,
                    type_annotation,
                })));
            }
        }
        self.parse_type()
    }

    fn parse_predicate_name(&mut self) -> PResult<TypePredicateName> {
        let start = self.start();
        if self.eat(TokenKind::ThisKeyword) {
            return Ok(TypePredicateName::TSThisType(Box::new(self.empty_node(NodeKind::TSThisType, start))));
        }
        Ok(TypePredicateName::Identifier(Box::new(self.parse_identifier_reference()?)))
    }

    /// The type after `is`; its annotation node spans just the type.
    fn parse_predicate_type(&mut self) -> PResult<Box<TSTypeAnnotation>> {
        let start = self.start();
        let type_annotation = self.parse_type()?;
        Ok(Box::new(TSTypeAnnotation {
            data: self.node(NodeKind::TSTypeAnnotation, start),
            type_annotation,
        }))
    }

    // ========================================================================
    // Type parameters and arguments
    // ========================================================================

    /// `<T extends C = D, in out U, const V>`
    pub(crate) fn parse_type_parameters(&mut self) -> PResult<Box<TSTypeParameterDeclaration>> {
        let start = self.start();
        self.expect(TokenKind::LessThan)?;
        let mut params = Vec::new();
        while !self.at(TokenKind::GreaterThan) && !self.at(TokenKind::EndOfFile) {
            params.push(self.parse_type_parameter()?);
            if !self.at(TokenKind::GreaterThan) {
                self.expect(TokenKind::Comma)?;
            }
        }
        if params.is_empty() {
            return Err(self.expected_message(&messages::TYPE_PARAMETER_DECLARATION_EXPECTED));
        }
        self.expect(TokenKind::GreaterThan)?;
        Ok(Box::new(TSTypeParameterDeclaration {
            data: self.node(NodeKind::TSTypeParameterDeclaration, start),
            params,
        }))
    }

    fn parse_type_parameter(&mut self) -> PResult<TSTypeParameter> {
        let start = self.start();
        let (mut is_in, mut out, mut is_const) = (false, false, false);
        loop {
            let flag = match self.kind() {
                TokenKind::InKeyword => &mut is_in,
                TokenKind::OutKeyword => &mut out,
                TokenKind::ConstKeyword => &mut is_const,
                _ => break,
            };
            // `<out>` names a parameter `out`.
            if !self.peek_kind().is_identifier_like() {
                break;
            }
            if *flag {
                let text = self.token.text;
                let error = self.error_here(&messages::_0_MODIFIER_ALREADY_SEEN, &[text]);
                self.errors.push(error);
            }
            *flag = true;
            self.bump();
        }

        if !self.kind().is_identifier_like() {
            return Err(self.expected_message(&messages::TYPE_PARAMETER_DECLARATION_EXPECTED));
        }
        let name = self.parse_binding_identifier()?;
        let constraint = if self.eat(TokenKind::ExtendsKeyword) {
            Some(self.parse_type()?)
        } else {
            None
        };
        let default_type = if self.eat(TokenKind::Equals) {
            Some(self.parse_type()?)
        } else {
            None
        };
        Ok(TSTypeParameter {
            data: self.node(NodeKind::TSTypeParameter, start),
            name,
            constraint,
            default_type,
            is_in,
            out,
            is_const,
        })
    }

    /// `<A, B>`
    pub(crate) fn parse_type_arguments(&mut self) -> PResult<Box<TSTypeParameterInstantiation>> {
        let start = self.start();
        let params = self.parse_type_argument_list()?;
        self.expect(TokenKind::GreaterThan)?;
        Ok(Box::new(TSTypeParameterInstantiation {
            data: self.node(NodeKind::TSTypeParameterInstantiation, start),
            params,
        }))
    }

    /// The `<` and types of a type argument list, stopping in front of the
    /// closing `>` so the caller decides how the token after it is scanned.
    pub(crate) fn parse_type_argument_list(&mut self) -> PResult<Vec<TsType>> {
        self.expect(TokenKind::LessThan)?;
        let mut params = vec![self.parse_type()?];
        while self.eat(TokenKind::Comma) {
            if self.at(TokenKind::GreaterThan) {
                break;
            }
            params.push(self.parse_type()?);
        }
        Ok(params)
    }

    // ========================================================================
    // Types
    // ========================================================================

    /// A complete type. Conditional types are allowed again inside any
    /// nested type, whatever the enclosing clause.
    pub(crate) fn parse_type(&mut self) -> PResult<TsType> {
        let ctx = self.ctx - Context::DISALLOW_CONDITIONAL_TYPES;
        self.with_context(ctx, |p| p.guarded(|p| p.parse_type_worker()))
    }

    /// The `extends` operand of a conditional type, which may not itself be
    /// an unparenthesized conditional type.
    fn parse_type_disallowing_conditional(&mut self) -> PResult<TsType> {
        let ctx = self.ctx | Context::DISALLOW_CONDITIONAL_TYPES;
        self.with_context(ctx, |p| p.guarded(|p| p.parse_type_worker()))
    }

    fn parse_type_worker(&mut self) -> PResult<TsType> {
        let start = self.start();
        if self.is_start_of_function_type() {
            return self.parse_function_type(start, false, false);
        }
        if self.at(TokenKind::NewKeyword) {
            return self.parse_function_type(start, true, false);
        }
        if self.at(TokenKind::AbstractKeyword) && self.peek_kind() == TokenKind::NewKeyword {
            self.bump();
            return self.parse_function_type(start, true, true);
        }

        let check_type = self.parse_union_type()?;
        if self.in_context(Context::DISALLOW_CONDITIONAL_TYPES)
            || !self.at(TokenKind::ExtendsKeyword)
            || self.has_line_break()
        {
            return Ok(check_type);
        }
        self.bump();
        let extends_type = self.parse_type_disallowing_conditional()?;
        self.expect(TokenKind::Question)?;
        let true_type = self.parse_type()?;
        self.expect(TokenKind::Colon)?;
        let false_type = self.parse_type()?;
        Ok(TsType::TSConditionalType(Box::new(TSConditionalType {
            data: self.node(NodeKind::TSConditionalType, start),
            check_type,
            extends_type,
            true_type,
            false_type,
        })))
    }

    fn is_start_of_function_type(&mut self) -> bool {
        match self.kind() {
            TokenKind::LessThan => true,
            TokenKind::OpenParen => self.look_ahead(|p| p.is_unambiguously_start_of_function_type()),
            _ => false,
        }
    }

    fn is_unambiguously_start_of_function_type(&mut self) -> bool {
        self.bump();
        if matches!(self.kind(), TokenKind::CloseParen | TokenKind::DotDotDot) {
            return true;
        }
        if !self.skip_parameter_start() {
            return false;
        }
        match self.kind() {
            TokenKind::Colon | TokenKind::Comma | TokenKind::Question | TokenKind::Equals => true,
            TokenKind::CloseParen => {
                self.bump();
                self.at(TokenKind::EqualsGreaterThan)
            }
            _ => false,
        }
    }

    fn skip_parameter_start(&mut self) -> bool {
        while is_class_member_modifier(self.kind()) && self.peek_kind().is_identifier_like() {
            self.bump();
        }
        match self.kind() {
            TokenKind::ThisKeyword => {
                self.bump();
                true
            }
            TokenKind::OpenBrace | TokenKind::OpenBracket => {
                self.parse_binding_target(&messages::IDENTIFIER_EXPECTED).is_ok()
            }
            kind if kind.is_identifier_like() => {
                self.bump();
                true
            }
            _ => false,
        }
    }

    /// `<T>(a: A) => R`, `new (a: A) => R` or `abstract new () => R`.
    fn parse_function_type(&mut self, start: u32, constructor: bool, is_abstract: bool) -> PResult<TsType> {
        if constructor {
            self.expect(TokenKind::NewKeyword)?;
        }
        let type_parameters = if self.at(TokenKind::LessThan) {
            Some(self.parse_type_parameters()?)
        } else {
            None
        };
        let params = self.parse_parameter_list()?;
        let arrow = self.start();
        self.expect(TokenKind::EqualsGreaterThan)?;
        let return_type = self.parse_type_or_type_predicate()?;
        let return_type = Some(Box::new(TSTypeAnnotation {
            data: self.node(NodeKind::TSTypeAnnotation, arrow),
            type_annotation: return_type,
        }));
        let kind = if constructor {
            NodeKind::TSConstructorType
        } else {
            NodeKind::TSFunctionType
        };
        let function = Box::new(TSFunctionType {
            data: self.node(kind, start),
            params,
            return_type,
            type_parameters,
            is_abstract,
        });
        Ok(if constructor {
            TsType::TSConstructorType(function)
        } else {
            TsType::TSFunctionType(function)
        })
    }

    fn parse_union_type(&mut self) -> PResult<TsType> {
        self.parse_union_or_intersection(TokenKind::Bar, NodeKind::TSUnionType, Self::parse_intersection_type)
    }

    fn parse_intersection_type(&mut self) -> PResult<TsType> {
        self.parse_union_or_intersection(
            TokenKind::Ampersand,
            NodeKind::TSIntersectionType,
            Self::parse_type_operator_or_higher,
        )
    }

    /// `A | B | C` as one flat list. A leading operator (`| A`) always
    /// produces the list node, even with a single member.
    fn parse_union_or_intersection(
        &mut self,
        operator: TokenKind,
        kind: NodeKind,
        parse_constituent: fn(&mut Self) -> PResult<TsType>,
    ) -> PResult<TsType> {
        let start = self.start();
        let leading = self.eat(operator);
        let first = parse_constituent(self)?;
        if !leading && !self.at(operator) {
            return Ok(first);
        }
        let mut types = vec![first];
        while self.eat(operator) {
            types.push(parse_constituent(self)?);
        }
        let data = self.node(kind, start);
        Ok(match kind {
            NodeKind::TSUnionType => TsType::TSUnionType(Box::new(TSUnionType { data, types })),
            _ => TsType::TSIntersectionType(Box::new(TSIntersectionType { data, types })),
        })
    }

    fn parse_type_operator_or_higher(&mut self) -> PResult<TsType> {
        let start = self.start();
        let operator = match self.kind() {
            TokenKind::KeyOfKeyword => TypeOperatorKind::Keyof,
            TokenKind::UniqueKeyword => TypeOperatorKind::Unique,
            TokenKind::ReadonlyKeyword => TypeOperatorKind::Readonly,
            TokenKind::InferKeyword => return self.parse_infer_type(),
            _ => return self.parse_postfix_type(),
        };
        self.bump();
        let type_annotation = self.guarded(|p| p.parse_type_operator_or_higher())?;
        Ok(TsType::TSTypeOperator(Box::new(TSTypeOperator {
            data: self.node(NodeKind::TSTypeOperator, start),
            operator,
            type_annotation,
        })))
    }

    /// `infer U` or `infer U extends C`.
    fn parse_infer_type(&mut self) -> PResult<TsType> {
        let start = self.start();
        self.bump();
        let name_start = self.start();
        let name = self.parse_binding_identifier()?;
        let constraint = if self.at(TokenKind::ExtendsKeyword) {
            self.try_parse(|p| p.parse_infer_constraint())
        } else {
            None
        };
        let type_parameter = TSTypeParameter {
            data: self.node(NodeKind::TSTypeParameter, name_start),
            name,
            constraint,
            default_type: None,
            is_in: false,
            out: false,
            is_const: false,
        };
        Ok(TsType::TSInferType(Box::new(TSInferType {
            data: self.node(NodeKind::TSInferType, start),
            type_parameter,
        })))
    }

    /// In `T extends [infer U extends string] ? X : Y` the constraint binds
    /// to `U`; in `infer U extends string ? X : Y` it starts the conditional.
    fn parse_infer_constraint(&mut self) -> PResult<TsType> {
        self.expect(TokenKind::ExtendsKeyword)?;
        let outer_disallows = self.in_context(Context::DISALLOW_CONDITIONAL_TYPES);
        let constraint = self.parse_type_disallowing_conditional()?;
        if outer_disallows || !self.at(TokenKind::Question) {
            Ok(constraint)
        } else {
            Err(self.unexpected())
        }
    }

    /// `T[]` and `T[K]`, left to right.
    fn parse_postfix_type(&mut self) -> PResult<TsType> {
        let start = self.start();
        let mut ty = self.parse_non_array_type()?;
        while self.at(TokenKind::OpenBracket) && !self.has_line_break() {
            self.bump();
            if self.eat(TokenKind::CloseBracket) {
                ty = TsType::TSArrayType(Box::new(TSArrayType {
                    data: self.node(NodeKind::TSArrayType, start),
                    element_type: ty,
                }));
            } else {
                let index_type = self.parse_type()?;
                self.expect(TokenKind::CloseBracket)?;
                ty = TsType::TSIndexedAccessType(Box::new(TSIndexedAccessType {
                    data: self.node(NodeKind::TSIndexedAccessType, start),
                    object_type: ty,
                    index_type,
                }));
            }
        }
        Ok(ty)
    }

    fn parse_non_array_type(&mut self) -> PResult<TsType> {
        let start = self.start();
        let kind = self.kind();
        if let Some(node_kind) = keyword_type_kind(kind) {
            if self.peek_kind() != TokenKind::Dot {
                self.bump();
                return Ok(TsType::Keyword(Box::new(self.empty_node(node_kind, start))));
            }
        }
        match kind {
            TokenKind::StringLiteral
            | TokenKind::NumericLiteral
            | TokenKind::BigIntLiteral
            | TokenKind::TrueKeyword
            | TokenKind::FalseKeyword => {
                let literal = self.parse_literal()?;
                Ok(self.literal_type(LiteralTypeValue::Literal(Box::new(literal)), start))
            }
            TokenKind::Minus
                if matches!(self.peek_kind(), TokenKind::NumericLiteral | TokenKind::BigIntLiteral) =>
            {
                self.bump();
                let literal = self.parse_literal()?;
                let negative = UnaryExpression {
                    data: self.node(NodeKind::UnaryExpression, start),
                    operator: UnaryOperator::Minus,
                    prefix: true,
                    argument: Expression::Literal(Box::new(literal)),
                };
                Ok(self.literal_type(LiteralTypeValue::UnaryExpression(Box::new(negative)), start))
            }
            TokenKind::NoSubstitutionTemplateLiteral | TokenKind::TemplateHead => {
                self.parse_template_literal_type()
            }
            TokenKind::ThisKeyword => {
                self.bump();
                Ok(TsType::TSThisType(Box::new(self.empty_node(NodeKind::TSThisType, start))))
            }
            TokenKind::TypeOfKeyword => self.parse_type_query(),
            TokenKind::ImportKeyword => Ok(TsType::TSImportType(Box::new(self.parse_import_type()?))),
            TokenKind::OpenBrace => {
                if self.is_start_of_mapped_type() {
                    self.parse_mapped_type()
                } else {
                    let members = self.parse_type_members()?;
                    Ok(TsType::TSTypeLiteral(Box::new(TSTypeLiteral {
                        data: self.node(NodeKind::TSTypeLiteral, start),
                        members,
                    })))
                }
            }
            TokenKind::OpenBracket => self.parse_tuple_type(),
            TokenKind::OpenParen => {
                self.bump();
                let ty = self.parse_type()?;
                self.expect(TokenKind::CloseParen)?;
                Ok(ty)
            }
            kind if kind.is_identifier_like() || keyword_type_kind(kind).is_some() => self.parse_type_reference(),
            _ => Err(self.expected_message(&messages::TYPE_EXPECTED)),
        }
    }

    fn literal_type(&self, literal: LiteralTypeValue, start: u32) -> TsType {
        TsType::TSLiteralType(Box::new(TSLiteralType {
            data: self.node(NodeKind::TSLiteralType, start),
            literal,
        }))
    }

    /// `A.B.C<T>`
    fn parse_type_reference(&mut self) -> PResult<TsType> {
        let start = self.start();
        let type_name = self.parse_entity_name(false)?;
        let type_arguments = self.parse_type_arguments_on_same_line()?;
        Ok(TsType::TSTypeReference(Box::new(TSTypeReference {
            data: self.node(NodeKind::TSTypeReference, start),
            type_name,
            type_arguments,
        })))
    }

    fn parse_type_arguments_on_same_line(&mut self) -> PResult<Option<Box<TSTypeParameterInstantiation>>> {
        if self.at(TokenKind::LessThan) && !self.has_line_break() {
            Ok(Some(self.parse_type_arguments()?))
        } else {
            Ok(None)
        }
    }

    /// `A`, `A.B.C`, or with `allow_this`, `this.a`.
    pub(crate) fn parse_entity_name(&mut self, allow_this: bool) -> PResult<TsEntityName> {
        let start = self.start();
        let first = if allow_this && self.at(TokenKind::ThisKeyword) {
            self.bump();
            TsEntityName::ThisExpression(Box::new(self.empty_node(NodeKind::ThisExpression, start)))
        } else if keyword_type_kind(self.kind()).is_some() {
            // `string.x` and friends: a keyword type used as a namespace.
            TsEntityName::Identifier(Box::new(self.parse_identifier_name()?))
        } else {
            TsEntityName::Identifier(Box::new(self.parse_identifier_reference()?))
        };
        self.parse_qualified_name_rest(first, start)
    }

    fn parse_qualified_name_rest(&mut self, mut name: TsEntityName, start: u32) -> PResult<TsEntityName> {
        while self.eat(TokenKind::Dot) {
            let right = self.parse_identifier_name()?;
            name = TsEntityName::TSQualifiedName(Box::new(TSQualifiedName {
                data: self.node(NodeKind::TSQualifiedName, start),
                left: name,
                right,
            }));
        }
        Ok(name)
    }

    /// `typeof x.y<T>` or `typeof import("m")`.
    fn parse_type_query(&mut self) -> PResult<TsType> {
        let start = self.start();
        self.bump();
        let expr_name = if self.at(TokenKind::ImportKeyword) {
            TypeQueryName::TSImportType(Box::new(self.parse_import_type()?))
        } else {
            TypeQueryName::EntityName(self.parse_entity_name(true)?)
        };
        let type_arguments = self.parse_type_arguments_on_same_line()?;
        Ok(TsType::TSTypeQuery(Box::new(TSTypeQuery {
            data: self.node(NodeKind::TSTypeQuery, start),
            expr_name,
            type_arguments,
        })))
    }

    /// `import("mod").A.B<T>`
    fn parse_import_type(&mut self) -> PResult<TSImportType> {
        let start = self.start();
        self.expect(TokenKind::ImportKeyword)?;
        self.expect(TokenKind::OpenParen)?;
        let argument_start = self.start();
        let literal = self.parse_string_literal()?;
        let argument = self.literal_type(LiteralTypeValue::Literal(Box::new(literal)), argument_start);
        // `import("m", { with: { ... } })`: the options object is checked
        // for syntax only.
        if self.eat(TokenKind::Comma) && !self.at(TokenKind::CloseParen) {
            self.parse_assignment_allow_in()?;
            self.eat(TokenKind::Comma);
        }
        self.expect(TokenKind::CloseParen)?;

        let qualifier = if self.eat(TokenKind::Dot) {
            let qualifier_start = self.start();
            let first = TsEntityName::Identifier(Box::new(self.parse_identifier_name()?));
            Some(self.parse_qualified_name_rest(first, qualifier_start)?)
        } else {
            None
        };
        let type_arguments = self.parse_type_arguments_on_same_line()?;
        Ok(TSImportType {
            data: self.node(NodeKind::TSImportType, start),
            argument,
            qualifier,
            type_arguments,
        })
    }

    /// `` `prefix-${T}` ``
    fn parse_template_literal_type(&mut self) -> PResult<TsType> {
        let start = self.start();
        let mut quasis = vec![self.template_element(true)];
        let mut types = Vec::new();
        if self.at(TokenKind::NoSubstitutionTemplateLiteral) {
            self.bump();
        } else {
            self.bump();
            loop {
                types.push(self.parse_type()?);
                if !self.at(TokenKind::CloseBrace) {
                    return Err(self.expected("}"));
                }
                self.rescan_template_continuation();
                match self.kind() {
                    TokenKind::TemplateMiddle => {
                        quasis.push(self.template_element(true));
                        self.bump();
                    }
                    TokenKind::TemplateTail => {
                        quasis.push(self.template_element(true));
                        self.bump();
                        break;
                    }
                    _ => return Err(self.unexpected()),
                }
            }
        }
        Ok(TsType::TSTemplateLiteralType(Box::new(TSTemplateLiteralType {
            data: self.node(NodeKind::TSTemplateLiteralType, start),
            quasis,
            types,
        })))
    }

    // ========================================================================
    // Tuples and mapped types
    // ========================================================================

    fn parse_tuple_type(&mut self) -> PResult<TsType> {
        let start = self.start();
        self.expect(TokenKind::OpenBracket)?;
        let mut element_types = Vec::new();
        while !self.at(TokenKind::CloseBracket) && !self.at(TokenKind::EndOfFile) {
            element_types.push(self.parse_tuple_element()?);
            if !self.at(TokenKind::CloseBracket) {
                self.expect(TokenKind::Comma)?;
            }
        }
        self.expect(TokenKind::CloseBracket)?;
        Ok(TsType::TSTupleType(Box::new(TSTupleType {
            data: self.node(NodeKind::TSTupleType, start),
            element_types,
        })))
    }

    /// `T`, `T?`, `...T`, `name: T`, `name?: T` or `...name: T`.
    fn parse_tuple_element(&mut self) -> PResult<TsType> {
        let start = self.start();
        let rest = self.at(TokenKind::DotDotDot);

        if self.is_named_tuple_member() {
            self.eat(TokenKind::DotDotDot);
            let member_start = self.start();
            let label = self.parse_identifier_name()?;
            let optional = self.eat(TokenKind::Question);
            self.expect(TokenKind::Colon)?;
            let element_type = self.parse_type()?;
            let member = TsType::TSNamedTupleMember(Box::new(TSNamedTupleMember {
                data: self.node(NodeKind::TSNamedTupleMember, member_start),
                label,
                element_type,
                optional,
            }));
            return Ok(if rest { self.rest_type(member, start) } else { member });
        }

        if rest {
            self.bump();
            let ty = self.parse_type()?;
            return Ok(self.rest_type(ty, start));
        }
        let ty = self.parse_type()?;
        if self.eat(TokenKind::Question) {
            return Ok(TsType::TSOptionalType(Box::new(TSOptionalType {
                data: self.node(NodeKind::TSOptionalType, start),
                type_annotation: ty,
            })));
        }
        Ok(ty)
    }

    fn rest_type(&self, type_annotation: TsType, start: u32) -> TsType {
        TsType::TSRestType(Box::new(TSRestType {
            data: self.node(NodeKind::TSRestType, start),
            type_annotation,
        }))
    }

    fn is_named_tuple_member(&mut self) -> bool {
        let offset = usize::from(self.at(TokenKind::DotDotDot));
        let name = if offset == 0 { self.kind() } else { self.peek_kind() };
        if !name.is_identifier_or_keyword() {
            return false;
        }
        match self.peek_nth(offset + 1).kind {
            TokenKind::Colon => true,
            TokenKind::Question => self.peek_nth(offset + 2).kind == TokenKind::Colon,
            _ => false,
        }
    }

    fn is_start_of_mapped_type(&mut self) -> bool {
        self.look_ahead(|p| {
            p.bump();
            if matches!(p.kind(), TokenKind::Plus | TokenKind::Minus) {
                p.bump();
                return p.at(TokenKind::ReadonlyKeyword);
            }
            p.eat(TokenKind::ReadonlyKeyword);
            if !p.eat(TokenKind::OpenBracket) || !p.kind().is_identifier_or_keyword() {
                return false;
            }
            p.bump();
            p.at(TokenKind::InKeyword)
        })
    }

    /// `{ readonly [K in T as N]?: U }`, with `+`/`-` on either modifier.
    fn parse_mapped_type(&mut self) -> PResult<TsType> {
        let start = self.start();
        self.expect(TokenKind::OpenBrace)?;
        let readonly = match self.kind() {
            TokenKind::Plus | TokenKind::Minus => {
                let modifier = self.mapped_modifier_sign();
                self.expect(TokenKind::ReadonlyKeyword)?;
                Some(modifier)
            }
            TokenKind::ReadonlyKeyword => {
                self.bump();
                Some(MappedTypeModifier::True)
            }
            _ => None,
        };

        self.expect(TokenKind::OpenBracket)?;
        let parameter_start = self.start();
        let name = self.parse_identifier_name()?;
        self.expect(TokenKind::InKeyword)?;
        let constraint = self.parse_type()?;
        let type_parameter = TSTypeParameter {
            data: self.node(NodeKind::TSTypeParameter, parameter_start),
            name,
            constraint: Some(constraint),
            default_type: None,
            is_in: false,
            out: false,
            is_const: false,
        };
        let name_type = if self.eat(TokenKind::AsKeyword) {
            Some(self.parse_type()?)
        } else {
            None
        };
        self.expect(TokenKind::CloseBracket)?;

        let optional = match self.kind() {
            TokenKind::Plus | TokenKind::Minus => {
                let modifier = self.mapped_modifier_sign();
                self.expect(TokenKind::Question)?;
                Some(modifier)
            }
            TokenKind::Question => {
                self.bump();
                Some(MappedTypeModifier::True)
            }
            _ => None,
        };
        let type_annotation = if self.eat(TokenKind::Colon) {
            Some(self.parse_type()?)
        } else {
            None
        };
        if !self.eat(TokenKind::Semicolon) {
            self.eat(TokenKind::Comma);
        }
        self.expect(TokenKind::CloseBrace)?;
        Ok(TsType::TSMappedType(Box::new(TSMappedType {
            data: self.node(NodeKind::TSMappedType, start),
            type_parameter,
            name_type,
            type_annotation,
            optional,
            readonly,
        })))
    }

    fn mapped_modifier_sign(&mut self) -> MappedTypeModifier {
        let modifier = if self.at(TokenKind::Plus) {
            MappedTypeModifier::Plus
        } else {
            MappedTypeModifier::Minus
        };
        self.bump();
        modifier
    }

    // ========================================================================
    // Type members
    // ========================================================================

    /// `{ member; member }` of a type literal or interface body.
    pub(crate) fn parse_type_members(&mut self) -> PResult<Vec<TypeElement>> {
        self.expect(TokenKind::OpenBrace)?;
        let mut members = Vec::new();
        while !self.at(TokenKind::CloseBrace) && !self.at(TokenKind::EndOfFile) {
            members.push(self.parse_type_member()?);
        }
        self.expect(TokenKind::CloseBrace)?;
        Ok(members)
    }

    fn parse_type_member(&mut self) -> PResult<TypeElement> {
        let start = self.start();
        if matches!(self.kind(), TokenKind::OpenParen | TokenKind::LessThan) {
            let signature = self.parse_signature_member(start, NodeKind::TSCallSignatureDeclaration)?;
            return Ok(TypeElement::TSCallSignatureDeclaration(signature));
        }
        if self.at(TokenKind::NewKeyword) && matches!(self.peek_kind(), TokenKind::OpenParen | TokenKind::LessThan) {
            self.bump();
            let signature = self.parse_signature_member(start, NodeKind::TSConstructSignatureDeclaration)?;
            return Ok(TypeElement::TSConstructSignatureDeclaration(signature));
        }

        let readonly = self.at(TokenKind::ReadonlyKeyword) && {
            let next = self.peek();
            !next.has_preceding_line_break() && is_property_name_start(next.kind)
        };
        if readonly {
            self.bump();
        }
        if self.at(TokenKind::OpenBracket) && self.is_index_signature() {
            let mut signature = self.parse_index_signature(readonly, false)?;
            self.parse_type_member_separator()?;
            self.set_span(&mut signature.data, start, self.prev_token_end);
            return Ok(TypeElement::TSIndexSignature(Box::new(signature)));
        }

        let mut kind = MethodKind::Method;
        if matches!(self.kind(), TokenKind::GetKeyword | TokenKind::SetKeyword) && self.is_method_modifier() {
            kind = if self.at(TokenKind::GetKeyword) {
                MethodKind::Get
            } else {
                MethodKind::Set
            };
            self.bump();
        }
        if !is_property_name_start(self.kind()) {
            return Err(self.expected_message(&messages::PROPERTY_OR_SIGNATURE_EXPECTED));
        }
        let (key, computed) = self.parse_property_key()?;
        let optional = self.eat(TokenKind::Question);

        if kind != MethodKind::Method || matches!(self.kind(), TokenKind::OpenParen | TokenKind::LessThan) {
            let (type_parameters, params, return_type) = self.parse_signature()?;
            self.parse_type_member_separator()?;
            return Ok(TypeElement::TSMethodSignature(Box::new(TSMethodSignature {
                data: self.node(NodeKind::TSMethodSignature, start),
                key,
                computed,
                optional,
                kind,
                params,
                return_type,
                type_parameters,
            })));
        }

        let type_annotation = if self.at(TokenKind::Colon) {
            Some(self.parse_type_annotation()?)
        } else {
            None
        };
        self.parse_type_member_separator()?;
        Ok(TypeElement::TSPropertySignature(Box::new(TSPropertySignature {
            data: self.node(NodeKind::TSPropertySignature, start),
            key,
            computed,
            optional,
            readonly,
            type_annotation,
        })))
    }

    fn parse_signature_member(&mut self, start: u32, kind: NodeKind) -> PResult<Box<TSSignatureDeclaration>> {
        let (type_parameters, params, return_type) = self.parse_signature()?;
        self.parse_type_member_separator()?;
        Ok(Box::new(TSSignatureDeclaration {
            data: self.node(kind, start),
            params,
            return_type,
            type_parameters,
        }))
    }

    #[allow(clippy::type_complexity)]
    fn parse_signature(
        &mut self,
    ) -> PResult<(Option<Box<TSTypeParameterDeclaration>>, Vec<Parameter>, Option<Box<TSTypeAnnotation>>)> {
        let type_parameters = if self.at(TokenKind::LessThan) {
            Some(self.parse_type_parameters()?)
        } else {
            None
        };
        let params = self.parse_parameter_list()?;
        let return_type = if self.at(TokenKind::Colon) {
            Some(self.parse_return_type()?)
        } else {
            None
        };
        Ok((type_parameters, params, return_type))
    }

    fn parse_type_member_separator(&mut self) -> PResult<()> {
        if self.eat(TokenKind::Semicolon)
            || self.eat(TokenKind::Comma)
            || self.at(TokenKind::CloseBrace)
            || self.has_line_break()
        {
            Ok(())
        } else {
            Err(self.expected(";"))
        }
    }

    /// `[key: string]` as opposed to a computed property name.
    pub(crate) fn is_index_signature(&mut self) -> bool {
        let next = self.peek();
        if matches!(next.kind, TokenKind::DotDotDot | TokenKind::CloseBracket) {
            return true;
        }
        next.kind.is_identifier_or_keyword()
            && matches!(self.peek_nth(2).kind, TokenKind::Colon | TokenKind::Comma)
    }

    /// `[key: K]: T`. The caller consumes any separator and fixes the span.
    pub(crate) fn parse_index_signature(&mut self, readonly: bool, is_static: bool) -> PResult<TSIndexSignature> {
        let start = self.start();
        self.expect(TokenKind::OpenBracket)?;
        let mut parameters = Vec::new();
        while !self.at(TokenKind::CloseBracket) && !self.at(TokenKind::EndOfFile) {
            let parameter_start = self.start();
            let mut parameter = self.parse_identifier_name()?;
            if self.at(TokenKind::Colon) {
                parameter.type_annotation = Some(self.parse_type_annotation()?);
                self.set_span(&mut parameter.data, parameter_start, self.prev_token_end);
            }
            parameters.push(parameter);
            if !self.at(TokenKind::CloseBracket) {
                self.expect(TokenKind::Comma)?;
            }
        }
        self.expect(TokenKind::CloseBracket)?;
        let type_annotation = if self.at(TokenKind::Colon) {
            Some(self.parse_type_annotation()?)
        } else {
            None
        };
        Ok(TSIndexSignature {
            data: self.node(NodeKind::TSIndexSignature, start),
            parameters,
            type_annotation,
            readonly,
            is_static,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::options::ParseOptions;
    use serde_json::Value;

    /// The type of `type T = <source>;`.
    fn alias_type(source: &str) -> Value {
        let output = crate::parse(&format!("type T = {source};"), &ParseOptions::default());
        assert!(output.errors.is_empty(), "{source}: {:?}", output.errors);
        let json = serde_json::to_value(&output.program).unwrap();
        json["body"][0]["typeAnnotation"].clone()
    }

    #[test]
    fn test_keyword_and_reference_types() {
        assert_eq!(alias_type("string")["type"], "TSStringKeyword");
        let reference = alias_type("Map<string, A.B>");
        assert_eq!(reference["type"], "TSTypeReference");
        assert_eq!(reference["typeArguments"]["params"][1]["typeName"]["type"], "TSQualifiedName");
    }

    #[test]
    fn test_union_is_flat() {
        let union = alias_type("| A | B | C");
        assert_eq!(union["type"], "TSUnionType");
        assert_eq!(union["types"].as_array().unwrap().len(), 3);
        let intersection_in_union = alias_type("A & B | C");
        assert_eq!(intersection_in_union["types"][0]["type"], "TSIntersectionType");
    }

    #[test]
    fn test_conditional_with_infer() {
        let conditional = alias_type("T extends Array<infer U extends string> ? U : never");
        assert_eq!(conditional["type"], "TSConditionalType");
        let infer = &conditional["extendsType"]["typeArguments"]["params"][0];
        assert_eq!(infer["type"], "TSInferType");
        assert_eq!(infer["typeParameter"]["constraint"]["type"], "TSStringKeyword");
        assert_eq!(conditional["falseType"]["type"], "TSNeverKeyword");
    }

    #[test]
    fn test_function_and_parenthesized_types() {
        assert_eq!(alias_type("(a: string) => void")["type"], "TSFunctionType");
        assert_eq!(alias_type("() => void")["type"], "TSFunctionType");
        assert_eq!(alias_type("(string | number)[]")["type"], "TSArrayType");
        let ctor = alias_type("abstract new () => object");
        assert_eq!(ctor["type"], "TSConstructorType");
        assert_eq!(ctor["abstract"], true);
    }

    #[test]
    fn test_tuples() {
        let tuple = alias_type("[a: string, b?: number, ...rest: boolean[]]");
        let elements = tuple["elementTypes"].as_array().unwrap();
        assert_eq!(elements[0]["type"], "TSNamedTupleMember");
        assert_eq!(elements[1]["optional"], true);
        assert_eq!(elements[2]["type"], "TSRestType");
        let plain = alias_type("[string, number?]");
        assert_eq!(plain["elementTypes"][1]["type"], "TSOptionalType");
    }

    #[test]
    fn test_mapped_type() {
        let mapped = alias_type("{ -readonly [K in keyof T as `get${K}`]+?: T[K] }");
        assert_eq!(mapped["type"], "TSMappedType");
        assert_eq!(mapped["readonly"], "-");
        assert_eq!(mapped["optional"], "+");
        assert_eq!(mapped["nameType"]["type"], "TSTemplateLiteralType");
        assert_eq!(mapped["typeAnnotation"]["type"], "TSIndexedAccessType");
    }

    #[test]
    fn test_type_literal_members() {
        let literal = alias_type("{ (x: number): string; new (): T; readonly [k: string]: any; m?(): void; get p(): number; a: 1 }");
        let kinds: Vec<&str> = literal["members"]
            .as_array()
            .unwrap()
            .iter()
            .map(|member| member["type"].as_str().unwrap())
            .collect();
        assert_eq!(
            kinds,
            [
                "TSCallSignatureDeclaration",
                "TSConstructSignatureDeclaration",
                "TSIndexSignature",
                "TSMethodSignature",
                "TSMethodSignature",
                "TSPropertySignature",
            ]
        );
        assert_eq!(literal["members"][2]["readonly"], true);
        assert_eq!(literal["members"][4]["kind"], "get");
    }

    #[test]
    fn test_literal_and_query_types() {
        assert_eq!(alias_type("-1")["literal"]["type"], "UnaryExpression");
        assert_eq!(alias_type("typeof x.y")["exprName"]["type"], "TSQualifiedName");
        let import = alias_type("import('./m').A<string>");
        assert_eq!(import["type"], "TSImportType");
        assert_eq!(import["argument"]["literal"]["value"], "./m");
        assert_eq!(alias_type("keyof typeof obj")["operator"], "keyof");
    }

    #[test]
    fn test_type_predicates() {
        let output = crate::parse(
            "function f(x): x is string {}\nfunction g(x): asserts x {}",
            &ParseOptions::default(),
        );
        assert!(output.errors.is_empty());
        let json = serde_json::to_value(&output.program).unwrap();
        let first = &json["body"][0]["returnType"]["typeAnnotation"];
        assert_eq!(first["type"], "TSTypePredicate");
        assert_eq!(first["asserts"], false);
        let second = &json["body"][1]["returnType"]["typeAnnotation"];
        assert_eq!(second["asserts"], true);
        assert!(second["typeAnnotation"].is_null());
    }

    #[test]
    fn test_missing_type_is_reported() {
        let output = crate::parse("let x: = 1;", &ParseOptions::default());
        assert_eq!(output.errors[0].code, 1110);
    }
}
