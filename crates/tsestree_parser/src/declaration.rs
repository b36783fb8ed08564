//! Declarations: functions, classes and their members, decorators, and the
//! TypeScript declaration forms (interfaces, type aliases, enums,
//! namespaces and `declare`).

use tracing::trace;
use tsestree_ast::*;
use tsestree_diagnostics::messages;

use crate::context::Context;
use crate::parser::{PResult, Parser};
use crate::utilities::is_property_name_start;

impl<'a> Parser<'a> {
    // ========================================================================
    // Functions
    // ========================================================================

    /// `function name(...) {...}`; `start` includes a leading `async`. An
    /// overload signature without a body becomes a `TSDeclareFunction`.
    pub(crate) fn parse_function_declaration(&mut self, start: u32, is_async: bool, declare: bool) -> PResult<Statement> {
        self.parse_function_declaration_with(start, is_async, declare, false)
    }

    /// As above; `export default function () {}` may omit the name.
    pub(crate) fn parse_function_declaration_with(
        &mut self,
        start: u32,
        is_async: bool,
        declare: bool,
        optional_id: bool,
    ) -> PResult<Statement> {
        self.expect(TokenKind::FunctionKeyword)?;
        let generator = self.eat(TokenKind::Asterisk);
        let id = if self.kind().is_identifier_like() {
            Some(self.parse_binding_identifier()?)
        } else if optional_id {
            None
        } else {
            return Err(self.expected_message(&messages::IDENTIFIER_EXPECTED));
        };
        let mut function = self.parse_function_rest(start, id, is_async, generator, NodeKind::FunctionDeclaration)?;
        function.declare = declare;
        if function.body.is_some() {
            return Ok(Statement::FunctionDeclaration(Box::new(function)));
        }
        self.expect_semicolon()?;
        function.data.kind = NodeKind::TSDeclareFunction;
        self.set_span(&mut function.data, start, self.prev_token_end);
        Ok(Statement::TSDeclareFunction(Box::new(function)))
    }

    // ========================================================================
    // Decorators
    // ========================================================================

    /// `@a`, `@a.b(c)`, `@(expr)`.
    pub(crate) fn parse_decorators(&mut self) -> PResult<Vec<Decorator>> {
        let mut decorators = Vec::new();
        while self.at(TokenKind::At) {
            let start = self.start();
            self.bump();
            let expression_start = self.start();
            let expression = self.parse_primary()?;
            let expression = self.parse_call_tail(expression, expression_start, crate::expression::TailMode::Decorator)?;
            decorators.push(Decorator {
                data: self.node(NodeKind::Decorator, start),
                expression,
            });
        }
        Ok(decorators)
    }

    /// A statement starting with `@`: a decorated class, possibly exported.
    pub(crate) fn parse_decorated_declaration(&mut self) -> PResult<Statement> {
        let start = self.start();
        let decorators = self.parse_decorators()?;
        match self.kind() {
            TokenKind::ClassKeyword => {
                let class = self.parse_class(start, decorators, NodeKind::ClassDeclaration, false, false)?;
                Ok(Statement::ClassDeclaration(Box::new(class)))
            }
            TokenKind::AbstractKeyword if self.peek_kind() == TokenKind::ClassKeyword => {
                self.bump();
                let class = self.parse_class(start, decorators, NodeKind::ClassDeclaration, true, false)?;
                Ok(Statement::ClassDeclaration(Box::new(class)))
            }
            TokenKind::ExportKeyword => self.parse_export_declaration(decorators),
            _ => Err(self.error_at(&messages::DECORATORS_ARE_NOT_VALID_HERE, &[], start, self.prev_token_end)),
        }
    }

    // ========================================================================
    // Classes
    // ========================================================================

    /// `class [Name]<T> extends Base<U> implements I { ... }`, at `class`.
    /// `start` is where the class node begins (its first decorator, or an
    /// `abstract`/`declare` modifier).
    pub(crate) fn parse_class(
        &mut self,
        start: u32,
        decorators: Vec<Decorator>,
        kind: NodeKind,
        is_abstract: bool,
        declare: bool,
    ) -> PResult<Class> {
        self.expect(TokenKind::ClassKeyword)?;
        let id = if self.kind().is_identifier_like() && !self.at(TokenKind::ImplementsKeyword) {
            Some(self.parse_binding_identifier()?)
        } else {
            None
        };
        let type_parameters = if self.at(TokenKind::LessThan) {
            Some(self.parse_type_parameters()?)
        } else {
            None
        };

        let mut super_class = None;
        let mut super_type_arguments = None;
        if self.eat(TokenKind::ExtendsKeyword) {
            let (expression, type_arguments) = self.parse_class_heritage()?;
            super_class = Some(expression);
            super_type_arguments = type_arguments;
            while self.at(TokenKind::Comma) {
                let error = self.error_here(&messages::CLASSES_CAN_ONLY_EXTEND_A_SINGLE_CLASS, &[]);
                self.errors.push(error);
                self.bump();
                self.parse_class_heritage()?;
            }
        }

        let mut implements = Vec::new();
        if self.eat(TokenKind::ImplementsKeyword) {
            loop {
                implements.push(self.parse_heritage(NodeKind::TSClassImplements)?);
                if !self.eat(TokenKind::Comma) {
                    break;
                }
            }
        }

        let body_start = self.start();
        self.expect(TokenKind::OpenBrace)?;
        let ctx = self.ctx | Context::IN_CLASS;
        let members = self.with_context(ctx, |p| p.parse_class_members());
        self.expect(TokenKind::CloseBrace)?;
        let body = ClassBody {
            data: self.node(NodeKind::ClassBody, body_start),
            body: members,
        };

        trace!(name = id.as_ref().map(|id| id.name.as_str()), members = body.body.len(), "parsed class");
        Ok(Class {
            data: self.node(kind, start),
            id,
            super_class,
            super_type_arguments,
            implements,
            body,
            is_abstract,
            declare,
            decorators,
            type_parameters,
        })
    }

    /// The expression after `extends` and its type arguments. An
    /// instantiation expression (`Base<T>` followed by a line break) is
    /// split back into the two.
    fn parse_class_heritage(&mut self) -> PResult<(Expression, Option<Box<TSTypeParameterInstantiation>>)> {
        let expression = self.parse_lhs()?;
        if let Expression::TSInstantiationExpression(instantiation) = expression {
            let TSInstantiationExpression {
                expression,
                type_arguments,
                ..
            } = *instantiation;
            return Ok((expression, Some(Box::new(type_arguments))));
        }
        let type_arguments = if self.at(TokenKind::LessThan) {
            Some(self.parse_type_arguments()?)
        } else {
            None
        };
        Ok((expression, type_arguments))
    }

    /// `A.B<T>` in an `implements` or interface `extends` list.
    fn parse_heritage(&mut self, kind: NodeKind) -> PResult<TSInterfaceHeritage> {
        let start = self.start();
        let mut expression = Expression::Identifier(Box::new(self.parse_identifier_reference()?));
        while self.eat(TokenKind::Dot) {
            let property = Expression::Identifier(Box::new(self.parse_identifier_name()?));
            expression = Expression::MemberExpression(Box::new(MemberExpression {
                data: self.node(NodeKind::MemberExpression, start),
                object: expression,
                property,
                computed: false,
                optional: false,
            }));
        }
        let type_arguments = if self.at(TokenKind::LessThan) {
            Some(self.parse_type_arguments()?)
        } else {
            None
        };
        Ok(TSInterfaceHeritage {
            data: self.node(kind, start),
            expression,
            type_arguments,
        })
    }

    fn parse_class_members(&mut self) -> Vec<ClassElement> {
        let mut members = Vec::new();
        while !self.at(TokenKind::CloseBrace) && !self.at(TokenKind::EndOfFile) {
            if self.eat(TokenKind::Semicolon) {
                continue;
            }
            let start = self.start();
            match self.parse_class_member() {
                Ok(member) => members.push(member),
                Err(error) => self.recover_class_member(error, start),
            }
        }
        members
    }

    fn parse_class_member(&mut self) -> PResult<ClassElement> {
        let start = self.start();
        let decorators = if self.at(TokenKind::At) {
            self.parse_decorators()?
        } else {
            Vec::new()
        };
        if self.at(TokenKind::StaticKeyword) && self.peek_kind() == TokenKind::OpenBrace {
            if !decorators.is_empty() {
                return Err(self.error_at(&messages::DECORATORS_ARE_NOT_VALID_HERE, &[], start, self.prev_token_end));
            }
            return Ok(ClassElement::StaticBlock(Box::new(self.parse_static_block()?)));
        }

        let modifiers = self.parse_class_modifiers();
        let is_static = modifiers.contains(ModifierFlags::STATIC);

        if self.at(TokenKind::OpenBracket) && self.is_index_signature() {
            let mut signature = self.parse_index_signature(modifiers.contains(ModifierFlags::READONLY), is_static)?;
            self.expect_semicolon()?;
            self.set_span(&mut signature.data, start, self.prev_token_end);
            return Ok(ClassElement::TSIndexSignature(Box::new(signature)));
        }

        let is_async = self.at(TokenKind::AsyncKeyword) && self.is_method_modifier();
        if is_async {
            self.bump();
        }
        let mut kind = MethodKind::Method;
        if !is_async && matches!(self.kind(), TokenKind::GetKeyword | TokenKind::SetKeyword) && self.is_method_modifier() {
            kind = if self.at(TokenKind::GetKeyword) {
                MethodKind::Get
            } else {
                MethodKind::Set
            };
            self.bump();
        }
        let generator = self.eat(TokenKind::Asterisk);

        if !is_property_name_start(self.kind()) {
            return Err(self.expected_message(
                &messages::UNEXPECTED_TOKEN_A_CONSTRUCTOR_METHOD_ACCESSOR_OR_PROPERTY_WAS_EXPECTED,
            ));
        }
        let (key, computed) = self.parse_property_key()?;
        let optional = self.eat(TokenKind::Question);
        let definite = !optional && self.at(TokenKind::Exclamation) && !self.has_line_break();
        if definite {
            self.bump();
        }

        let is_abstract = modifiers.contains(ModifierFlags::ABSTRACT);
        if is_async || generator || kind != MethodKind::Method || matches!(self.kind(), TokenKind::OpenParen | TokenKind::LessThan) {
            if kind == MethodKind::Method && !is_static && !computed && is_constructor_key(&key) {
                kind = MethodKind::Constructor;
            }
            let value_start = self.start();
            let mut value = self.parse_function_rest(value_start, None, is_async, generator, NodeKind::FunctionExpression)?;
            if value.body.is_none() {
                value.data.kind = NodeKind::TSEmptyBodyFunctionExpression;
                self.expect_semicolon()?;
            }
            self.check_accessor_params(kind, &value);
            let node_kind = if is_abstract {
                NodeKind::TSAbstractMethodDefinition
            } else {
                NodeKind::MethodDefinition
            };
            return Ok(ClassElement::MethodDefinition(Box::new(MethodDefinition {
                data: self.node(node_kind, start),
                key,
                value,
                kind,
                computed,
                is_static,
                optional,
                is_override: modifiers.contains(ModifierFlags::OVERRIDE),
                accessibility: modifiers.accessibility(),
                decorators,
            })));
        }

        let type_annotation = if self.at(TokenKind::Colon) {
            Some(self.parse_type_annotation()?)
        } else {
            None
        };
        let value = if self.eat(TokenKind::Equals) {
            let ctx = (self.ctx - Context::FUNCTION_BOUNDARY) | Context::IN_CLASS;
            Some(self.with_context(ctx, |p| p.parse_assignment_allow_in())?)
        } else {
            None
        };
        self.expect_semicolon()?;
        let node_kind = match (modifiers.contains(ModifierFlags::ACCESSOR), is_abstract) {
            (true, true) => NodeKind::TSAbstractAccessorProperty,
            (true, false) => NodeKind::AccessorProperty,
            (false, true) => NodeKind::TSAbstractPropertyDefinition,
            (false, false) => NodeKind::PropertyDefinition,
        };
        Ok(ClassElement::PropertyDefinition(Box::new(PropertyDefinition {
            data: self.node(node_kind, start),
            key,
            value,
            computed,
            is_static,
            declare: modifiers.contains(ModifierFlags::DECLARE),
            readonly: modifiers.contains(ModifierFlags::READONLY),
            optional,
            definite,
            is_override: modifiers.contains(ModifierFlags::OVERRIDE),
            accessibility: modifiers.accessibility(),
            type_annotation,
            decorators,
        })))
    }

    /// Member modifiers. A modifier keyword not followed by something that
    /// can carry it is the member's name (`static() {}`, `readonly: T`).
    fn parse_class_modifiers(&mut self) -> ModifierFlags {
        let mut flags = ModifierFlags::empty();
        loop {
            let flag = match self.kind() {
                TokenKind::PublicKeyword => ModifierFlags::PUBLIC,
                TokenKind::PrivateKeyword => ModifierFlags::PRIVATE,
                TokenKind::ProtectedKeyword => ModifierFlags::PROTECTED,
                TokenKind::StaticKeyword => ModifierFlags::STATIC,
                TokenKind::ReadonlyKeyword => ModifierFlags::READONLY,
                TokenKind::AbstractKeyword => ModifierFlags::ABSTRACT,
                TokenKind::OverrideKeyword => ModifierFlags::OVERRIDE,
                TokenKind::DeclareKeyword => ModifierFlags::DECLARE,
                TokenKind::AccessorKeyword => ModifierFlags::ACCESSOR,
                _ => return flags,
            };
            let next = self.peek();
            let can_follow = is_property_name_start(next.kind)
                || matches!(next.kind, TokenKind::Asterisk | TokenKind::OpenBracket);
            // Only `static` may be separated from its member by a line break.
            if !can_follow || (next.has_preceding_line_break() && flag != ModifierFlags::STATIC) {
                return flags;
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

    /// `static { ... }`
    fn parse_static_block(&mut self) -> PResult<StaticBlock> {
        let start = self.start();
        self.bump();
        self.expect(TokenKind::OpenBrace)?;
        let ctx = (self.ctx - Context::FUNCTION_BOUNDARY - Context::IN_FUNCTION) | Context::IN_CLASS;
        let labels = std::mem::take(&mut self.labels);
        let body = self.with_context(ctx, |p| p.parse_statement_list(|kind| kind == TokenKind::CloseBrace));
        self.labels = labels;
        self.expect(TokenKind::CloseBrace)?;
        Ok(StaticBlock {
            data: self.node(NodeKind::StaticBlock, start),
            body,
        })
    }

    // ========================================================================
    // TypeScript declarations
    // ========================================================================

    /// Whether `kind` begins a TypeScript declaration here. Contextual
    /// keywords only do so when followed by a name on the same line.
    pub(crate) fn is_start_of_ts_declaration(&mut self, kind: TokenKind) -> bool {
        match kind {
            TokenKind::EnumKeyword => true,
            TokenKind::InterfaceKeyword | TokenKind::TypeKeyword | TokenKind::NamespaceKeyword => {
                let next = self.peek();
                next.kind.is_identifier_like() && !next.has_preceding_line_break()
            }
            TokenKind::ModuleKeyword => {
                let next = self.peek();
                (next.kind.is_identifier_like() || next.kind == TokenKind::StringLiteral)
                    && !next.has_preceding_line_break()
            }
            TokenKind::GlobalKeyword => {
                let next = self.peek();
                next.kind == TokenKind::OpenBrace && !next.has_preceding_line_break()
            }
            TokenKind::AbstractKeyword => {
                let next = self.peek();
                next.kind == TokenKind::ClassKeyword && !next.has_preceding_line_break()
            }
            TokenKind::DeclareKeyword => {
                let next = self.peek();
                !next.has_preceding_line_break() && is_declare_target(next.kind)
            }
            _ => false,
        }
    }

    /// An interface, type alias, enum, namespace, abstract class, or any of
    /// those (and variables, functions, classes) behind `declare`.
    pub(crate) fn parse_ts_declaration(&mut self, start: u32, declare: bool) -> PResult<Statement> {
        match self.kind() {
            TokenKind::DeclareKeyword if !declare => {
                self.bump();
                let ctx = self.ctx | Context::AMBIENT;
                self.with_context(ctx, |p| p.parse_declared(start))
            }
            TokenKind::InterfaceKeyword => self.parse_interface_declaration(start, declare),
            TokenKind::TypeKeyword => self.parse_type_alias_declaration(start, declare),
            TokenKind::EnumKeyword => self.parse_enum_declaration(start, false, declare),
            TokenKind::NamespaceKeyword | TokenKind::ModuleKeyword | TokenKind::GlobalKeyword => {
                let declaration = self.parse_module_declaration(start, declare)?;
                Ok(Statement::TSModuleDeclaration(Box::new(declaration)))
            }
            TokenKind::AbstractKeyword if self.peek_kind() == TokenKind::ClassKeyword => {
                self.bump();
                let class = self.parse_class(start, Vec::new(), NodeKind::ClassDeclaration, true, declare)?;
                Ok(Statement::ClassDeclaration(Box::new(class)))
            }
            _ => Err(self.expected_message(&messages::DECLARATION_OR_STATEMENT_EXPECTED)),
        }
    }

    /// The declaration after `declare`.
    fn parse_declared(&mut self, start: u32) -> PResult<Statement> {
        let kind = match self.kind() {
            TokenKind::VarKeyword => VariableKind::Var,
            TokenKind::LetKeyword => VariableKind::Let,
            TokenKind::ConstKeyword if self.peek_kind() == TokenKind::EnumKeyword => {
                self.bump();
                return self.parse_enum_declaration(start, true, true);
            }
            TokenKind::ConstKeyword => VariableKind::Const,
            TokenKind::FunctionKeyword => return self.parse_function_declaration(start, false, true),
            TokenKind::AsyncKeyword => {
                self.bump();
                return self.parse_function_declaration(start, true, true);
            }
            TokenKind::ClassKeyword => {
                let class = self.parse_class(start, Vec::new(), NodeKind::ClassDeclaration, false, true)?;
                return Ok(Statement::ClassDeclaration(Box::new(class)));
            }
            _ => return self.parse_ts_declaration(start, true),
        };
        self.bump();
        self.parse_variable_statement(start, kind, true)
    }

    /// `interface Name<T> extends A, B<C> { members }`
    pub(crate) fn parse_interface_declaration(&mut self, start: u32, declare: bool) -> PResult<Statement> {
        self.expect(TokenKind::InterfaceKeyword)?;
        let id = self.parse_binding_identifier()?;
        let type_parameters = if self.at(TokenKind::LessThan) {
            Some(self.parse_type_parameters()?)
        } else {
            None
        };
        let mut extends = Vec::new();
        if self.eat(TokenKind::ExtendsKeyword) {
            loop {
                extends.push(self.parse_heritage(NodeKind::TSInterfaceHeritage)?);
                if !self.eat(TokenKind::Comma) {
                    break;
                }
            }
        }
        let body_start = self.start();
        let members = self.parse_type_members()?;
        let body = TSInterfaceBody {
            data: self.node(NodeKind::TSInterfaceBody, body_start),
            body: members,
        };
        Ok(Statement::TSInterfaceDeclaration(Box::new(TSInterfaceDeclaration {
            data: self.node(NodeKind::TSInterfaceDeclaration, start),
            id,
            type_parameters,
            extends,
            body,
            declare,
        })))
    }

    /// `type Name<T> = Type;`
    fn parse_type_alias_declaration(&mut self, start: u32, declare: bool) -> PResult<Statement> {
        self.expect(TokenKind::TypeKeyword)?;
        let id = self.parse_binding_identifier()?;
        let type_parameters = if self.at(TokenKind::LessThan) {
            Some(self.parse_type_parameters()?)
        } else {
            None
        };
        self.expect(TokenKind::Equals)?;
        let type_annotation = self.parse_type()?;
        self.expect_semicolon()?;
        Ok(Statement::TSTypeAliasDeclaration(Box::new(TSTypeAliasDeclaration {
            data: self.node(NodeKind::TSTypeAliasDeclaration, start),
            id,
            type_parameters,
            type_annotation,
            declare,
        })))
    }

    /// `enum E { A, B = 1, "c" }`, at `enum`; `start` includes any `const`
    /// or `declare` in front of it.
    pub(crate) fn parse_enum_declaration(&mut self, start: u32, is_const: bool, declare: bool) -> PResult<Statement> {
        self.expect(TokenKind::EnumKeyword)?;
        let id = self.parse_binding_identifier()?;
        self.expect(TokenKind::OpenBrace)?;
        let mut members = Vec::new();
        while !self.at(TokenKind::CloseBrace) && !self.at(TokenKind::EndOfFile) {
            members.push(self.parse_enum_member()?);
            if !self.at(TokenKind::CloseBrace) {
                self.expect(TokenKind::Comma)?;
            }
        }
        self.expect(TokenKind::CloseBrace)?;
        Ok(Statement::TSEnumDeclaration(Box::new(TSEnumDeclaration {
            data: self.node(NodeKind::TSEnumDeclaration, start),
            id,
            members,
            is_const,
            declare,
        })))
    }

    fn parse_enum_member(&mut self) -> PResult<TSEnumMember> {
        let start = self.start();
        let (id, computed) = match self.kind() {
            TokenKind::StringLiteral => (Expression::Literal(Box::new(self.parse_literal()?)), false),
            TokenKind::OpenBracket => {
                self.bump();
                let key = self.parse_assignment_allow_in()?;
                self.expect(TokenKind::CloseBracket)?;
                (key, true)
            }
            kind if kind.is_identifier_or_keyword() => {
                (Expression::Identifier(Box::new(self.parse_identifier_name()?)), false)
            }
            _ => return Err(self.expected_message(&messages::ENUM_MEMBER_EXPECTED)),
        };
        let initializer = if self.eat(TokenKind::Equals) {
            Some(self.parse_assignment_allow_in()?)
        } else {
            None
        };
        Ok(TSEnumMember {
            data: self.node(NodeKind::TSEnumMember, start),
            id,
            initializer,
            computed,
        })
    }

    /// `namespace A.B { }`, `module "m" { }` / `module "m";`, `global { }`.
    fn parse_module_declaration(&mut self, start: u32, declare: bool) -> PResult<TSModuleDeclaration> {
        match self.kind() {
            TokenKind::GlobalKeyword => {
                let id_start = self.start();
                self.bump();
                let id = self.identifier("global", id_start, self.prev_token_end);
                let body = self.parse_module_block()?;
                Ok(TSModuleDeclaration {
                    data: self.node(NodeKind::TSModuleDeclaration, start),
                    id: TSModuleName::Identifier(Box::new(id)),
                    body: Some(TSModuleBody::TSModuleBlock(Box::new(body))),
                    kind: ModuleDeclarationKind::Global,
                    declare,
                    global: true,
                })
            }
            TokenKind::ModuleKeyword if self.peek_kind() == TokenKind::StringLiteral => {
                self.bump();
                let name = self.parse_string_literal()?;
                let body = if self.at(TokenKind::OpenBrace) {
                    Some(TSModuleBody::TSModuleBlock(Box::new(self.parse_module_block()?)))
                } else {
                    self.expect_semicolon()?;
                    None
                };
                Ok(TSModuleDeclaration {
                    data: self.node(NodeKind::TSModuleDeclaration, start),
                    id: TSModuleName::Literal(Box::new(name)),
                    body,
                    kind: ModuleDeclarationKind::Module,
                    declare,
                    global: false,
                })
            }
            keyword => {
                let kind = if keyword == TokenKind::NamespaceKeyword {
                    ModuleDeclarationKind::Namespace
                } else {
                    ModuleDeclarationKind::Module
                };
                self.bump();
                self.parse_namespace_rest(start, kind, declare)
            }
        }
    }

    /// `A.B.C { }` after `namespace`: each dotted segment nests the next
    /// declaration as its body.
    fn parse_namespace_rest(&mut self, start: u32, kind: ModuleDeclarationKind, declare: bool) -> PResult<TSModuleDeclaration> {
        self.guarded(|p| {
            let id = p.parse_binding_identifier()?;
            let body = if p.eat(TokenKind::Dot) {
                let inner_start = p.start();
                TSModuleBody::TSModuleDeclaration(Box::new(p.parse_namespace_rest(inner_start, kind, false)?))
            } else {
                TSModuleBody::TSModuleBlock(Box::new(p.parse_module_block()?))
            };
            Ok(TSModuleDeclaration {
                data: p.node(NodeKind::TSModuleDeclaration, start),
                id: TSModuleName::Identifier(Box::new(id)),
                body: Some(body),
                kind,
                declare,
                global: false,
            })
        })
    }

    fn parse_module_block(&mut self) -> PResult<TSModuleBlock> {
        let start = self.start();
        self.expect(TokenKind::OpenBrace)?;
        let ctx = self.ctx - Context::FUNCTION_BOUNDARY - Context::IN_FUNCTION;
        let labels = std::mem::take(&mut self.labels);
        let body = self.with_context(ctx, |p| p.parse_statement_list(|kind| kind == TokenKind::CloseBrace));
        self.labels = labels;
        self.expect(TokenKind::CloseBrace)?;
        Ok(TSModuleBlock {
            data: self.node(NodeKind::TSModuleBlock, start),
            body,
        })
    }
}

/// Keywords that may follow `declare`.
fn is_declare_target(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::VarKeyword
            | TokenKind::LetKeyword
            | TokenKind::ConstKeyword
            | TokenKind::FunctionKeyword
            | TokenKind::AsyncKeyword
            | TokenKind::ClassKeyword
            | TokenKind::EnumKeyword
            | TokenKind::InterfaceKeyword
            | TokenKind::TypeKeyword
            | TokenKind::NamespaceKeyword
            | TokenKind::ModuleKeyword
            | TokenKind::GlobalKeyword
            | TokenKind::AbstractKeyword
    )
}

/// `constructor` or `"constructor"` as a non-computed method name.
fn is_constructor_key(key: &Expression) -> bool {
    match key {
        Expression::Identifier(id) => id.name == "constructor",
        Expression::Literal(literal) => literal.as_str() == Some("constructor"),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::ParseOptions;
    use serde_json::Value;

    fn program(source: &str) -> Value {
        let output = crate::parse(source, &ParseOptions::default());
        assert!(output.errors.is_empty(), "{source}: {:?}", output.errors);
        serde_json::to_value(&output.program).unwrap()
    }

    fn codes(source: &str) -> Vec<u32> {
        crate::parse(source, &ParseOptions::default())
            .errors
            .iter()
            .map(|error| error.code)
            .collect()
    }

    #[test]
    fn test_declare_targets() {
        assert!(is_declare_target(TokenKind::ModuleKeyword));
        assert!(!is_declare_target(TokenKind::Identifier));
    }

    #[test]
    fn test_overload_becomes_declare_function() {
        let json = program("function f(a: string): void;\nfunction f(a) {}");
        assert_eq!(json["body"][0]["type"], "TSDeclareFunction");
        assert_eq!(json["body"][1]["type"], "FunctionDeclaration");
    }

    #[test]
    fn test_class_members() {
        let json = program(
            "abstract class A<T> extends B<T> implements C, D.E {\n\
             private readonly x: number = 1;\n\
             static #count?: number;\n\
             constructor(public y: string) { super(); }\n\
             get z() { return 1 }\n\
             abstract m(): void;\n\
             accessor w = 2;\n\
             [key: string]: any;\n\
             static { init(); }\n\
             }",
        );
        let class = &json["body"][0];
        assert_eq!(class["abstract"], true);
        assert_eq!(class["superClass"]["name"], "B");
        assert_eq!(class["superTypeArguments"]["params"][0]["type"], "TSTypeReference");
        assert_eq!(class["implements"][1]["expression"]["type"], "MemberExpression");

        let members = class["body"]["body"].as_array().unwrap();
        let kinds: Vec<&str> = members.iter().map(|m| m["type"].as_str().unwrap()).collect();
        assert_eq!(
            kinds,
            [
                "PropertyDefinition",
                "PropertyDefinition",
                "MethodDefinition",
                "MethodDefinition",
                "TSAbstractMethodDefinition",
                "AccessorProperty",
                "TSIndexSignature",
                "StaticBlock",
            ]
        );
        assert_eq!(members[0]["accessibility"], "private");
        assert_eq!(members[0]["readonly"], true);
        assert_eq!(members[1]["key"]["type"], "PrivateIdentifier");
        assert_eq!(members[1]["optional"], true);
        assert_eq!(members[2]["kind"], "constructor");
        assert_eq!(members[2]["value"]["params"][0]["type"], "TSParameterProperty");
        assert_eq!(members[3]["kind"], "get");
        assert_eq!(members[4]["value"]["type"], "TSEmptyBodyFunctionExpression");
    }

    #[test]
    fn test_modifier_names_are_members() {
        let json = program("class A { static() {} readonly = 1; get; async\nfoo() {} }");
        let members = json["body"][0]["body"]["body"].as_array().unwrap();
        assert_eq!(members[0]["key"]["name"], "static");
        assert_eq!(members[0]["static"], false);
        assert_eq!(members[1]["key"]["name"], "readonly");
        assert_eq!(members[2]["key"]["name"], "get");
        assert_eq!(members[3]["key"]["name"], "async");
        assert_eq!(members[4]["key"]["name"], "foo");
    }

    #[test]
    fn test_decorators() {
        let json = program("@a @b.c(1) class A { @d m() {} @e() p; }");
        let class = &json["body"][0];
        assert_eq!(class["decorators"].as_array().unwrap().len(), 2);
        assert_eq!(class["decorators"][1]["expression"]["type"], "CallExpression");
        assert_eq!(class["body"]["body"][0]["decorators"][0]["expression"]["name"], "d");
        assert_eq!(codes("@a let x = 1;"), vec![1206]);
    }

    #[test]
    fn test_class_member_errors_recover() {
        let output = crate::parse("class A { a(); b = ; c() {} }", &ParseOptions::default());
        assert!(!output.errors.is_empty());
        let json = serde_json::to_value(&output.program).unwrap();
        let members = json["body"][0]["body"]["body"].as_array().unwrap();
        assert_eq!(members.last().unwrap()["key"]["name"], "c");
    }

    #[test]
    fn test_accessor_parameter_checks() {
        assert_eq!(codes("class A { get x(a) { return a } }"), vec![1054]);
        assert_eq!(codes("class A { set x() {} }"), vec![1049]);
        assert_eq!(codes("class A extends B, C {}"), vec![1174]);
    }

    #[test]
    fn test_interface_and_alias() {
        let json = program("interface I<T> extends A<T>, B { x: T; m(): void }\ntype U<T = string> = T | null;");
        let interface = &json["body"][0];
        assert_eq!(interface["type"], "TSInterfaceDeclaration");
        assert_eq!(interface["extends"][0]["typeArguments"]["params"][0]["type"], "TSTypeReference");
        assert_eq!(interface["body"]["body"].as_array().unwrap().len(), 2);
        let alias = &json["body"][1];
        assert_eq!(alias["typeParameters"]["params"][0]["default"]["type"], "TSStringKeyword");
        assert_eq!(alias["typeAnnotation"]["type"], "TSUnionType");
    }

    #[test]
    fn test_enums() {
        let json = program("const enum E { A, B = 1, 'c', ['d'] = 2 }");
        let enumeration = &json["body"][0];
        assert_eq!(enumeration["const"], true);
        let members = enumeration["members"].as_array().unwrap();
        assert_eq!(members.len(), 4);
        assert_eq!(members[2]["id"]["type"], "Literal");
        assert_eq!(members[3]["computed"], true);
    }

    #[test]
    fn test_namespaces_and_declare() {
        let json = program(
            "namespace A.B { export const x = 1; }\n\
             declare module 'm' { export function f(): void; }\n\
             declare global { interface Window {} }\n\
             declare const c: number;\n\
             declare module 'n';",
        );
        let outer = &json["body"][0];
        assert_eq!(outer["kind"], "namespace");
        assert_eq!(outer["body"]["type"], "TSModuleDeclaration");
        assert_eq!(outer["body"]["id"]["name"], "B");
        assert_eq!(outer["body"]["body"]["type"], "TSModuleBlock");

        let module = &json["body"][1];
        assert_eq!(module["declare"], true);
        assert_eq!(module["id"]["value"], "m");
        assert_eq!(module["body"]["body"][0]["declaration"]["type"], "TSDeclareFunction");

        assert_eq!(json["body"][2]["kind"], "global");
        assert_eq!(json["body"][2]["global"], true);
        assert_eq!(json["body"][3]["declare"], true);
        assert!(json["body"][4]["body"].is_null());
    }

    #[test]
    fn test_contextual_keywords_stay_identifiers() {
        let json = program("type = 1;\nnamespace\nfoo;\ndeclare;");
        assert_eq!(json["body"][0]["type"], "ExpressionStatement");
        assert_eq!(json["body"][1]["type"], "ExpressionStatement");
        assert_eq!(json["body"].as_array().unwrap().len(), 4);
    }
}
