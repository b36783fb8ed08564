//! `import` and `export` declarations, including the TypeScript forms
//! (`import x = require()`, `export =`, `export as namespace`).

use tsestree_ast::*;
use tsestree_diagnostics::messages;

use crate::parser::{PResult, Parser};

impl<'a> Parser<'a> {
    // ========================================================================
    // Imports
    // ========================================================================

    /// `import ... from "m";`, at `import`.
    pub(crate) fn parse_import_declaration(&mut self) -> PResult<Statement> {
        let start = self.start();
        self.expect(TokenKind::ImportKeyword)?;

        if self.at(TokenKind::StringLiteral) {
            let source = self.parse_module_source()?;
            let attributes = self.parse_import_attributes()?;
            self.expect_semicolon()?;
            return Ok(self.import_declaration(start, Vec::new(), source, ImportOrExportKind::Value, attributes));
        }

        let mut import_kind = ImportOrExportKind::Value;
        if self.at(TokenKind::TypeKeyword) && self.is_type_only_import() {
            self.bump();
            import_kind = ImportOrExportKind::Type;
        }

        let mut specifiers = Vec::new();
        if self.kind().is_identifier_like() {
            let local_start = self.start();
            let local = self.parse_binding_identifier()?;
            if self.at(TokenKind::Equals) {
                return self.parse_import_equals(start, local, import_kind, false);
            }
            specifiers.push(ImportDeclarationSpecifier::ImportDefaultSpecifier(Box::new(ImportDefaultSpecifier {
                data: self.node(NodeKind::ImportDefaultSpecifier, local_start),
                local,
            })));
            if self.eat(TokenKind::Comma) {
                self.parse_import_clause_rest(&mut specifiers)?;
            }
        } else {
            self.parse_import_clause_rest(&mut specifiers)?;
        }

        self.expect(TokenKind::FromKeyword)?;
        let source = self.parse_module_source()?;
        let attributes = self.parse_import_attributes()?;
        self.expect_semicolon()?;
        Ok(self.import_declaration(start, specifiers, source, import_kind, attributes))
    }

    fn import_declaration(
        &self,
        start: u32,
        specifiers: Vec<ImportDeclarationSpecifier>,
        source: Literal,
        import_kind: ImportOrExportKind,
        attributes: Vec<ImportAttribute>,
    ) -> Statement {
        Statement::ImportDeclaration(Box::new(ImportDeclaration {
            data: self.node(NodeKind::ImportDeclaration, start),
            specifiers,
            source,
            import_kind,
            attributes,
        }))
    }

    /// `import type` is a modifier unless `type` is itself the default
    /// binding (`import type from "m"`, `import type, { a } from "m"`).
    fn is_type_only_import(&mut self) -> bool {
        let next = self.peek().kind;
        match next {
            TokenKind::OpenBrace | TokenKind::Asterisk => true,
            TokenKind::FromKeyword => self.peek_nth(2).kind == TokenKind::FromKeyword,
            kind => kind.is_identifier_like(),
        }
    }

    /// `* as ns` or `{ a, b as c }` after the default binding.
    fn parse_import_clause_rest(&mut self, specifiers: &mut Vec<ImportDeclarationSpecifier>) -> PResult<()> {
        match self.kind() {
            TokenKind::Asterisk => {
                let start = self.start();
                self.bump();
                self.expect(TokenKind::AsKeyword)?;
                let local = self.parse_binding_identifier()?;
                specifiers.push(ImportDeclarationSpecifier::ImportNamespaceSpecifier(Box::new(
                    ImportNamespaceSpecifier {
                        data: self.node(NodeKind::ImportNamespaceSpecifier, start),
                        local,
                    },
                )));
            }
            TokenKind::OpenBrace => {
                self.bump();
                while !self.at(TokenKind::CloseBrace) && !self.at(TokenKind::EndOfFile) {
                    let specifier = self.parse_import_specifier()?;
                    specifiers.push(ImportDeclarationSpecifier::ImportSpecifier(Box::new(specifier)));
                    if !self.at(TokenKind::CloseBrace) {
                        self.expect(TokenKind::Comma)?;
                    }
                }
                self.expect(TokenKind::CloseBrace)?;
            }
            _ => return Err(self.expected("{")),
        }
        Ok(())
    }

    fn parse_import_specifier(&mut self) -> PResult<ImportSpecifier> {
        let start = self.start();
        let mut import_kind = ImportOrExportKind::Value;
        if self.at(TokenKind::TypeKeyword) && self.is_type_specifier_modifier() {
            self.bump();
            import_kind = ImportOrExportKind::Type;
        }
        let reserved = self.kind().is_reserved_word();
        let imported = self.parse_module_export_name()?;
        let local = if self.eat(TokenKind::AsKeyword) {
            self.parse_binding_identifier()?
        } else {
            match &imported {
                ModuleExportName::Identifier(id) => {
                    if reserved {
                        let span = id.data.span;
                        self.report(&messages::IDENTIFIER_EXPECTED, &[], span.pos, span.end);
                    }
                    (**id).clone()
                }
                ModuleExportName::Literal(_) => return Err(self.expected("as")),
            }
        };
        Ok(ImportSpecifier {
            data: self.node(NodeKind::ImportSpecifier, start),
            imported,
            local,
            import_kind,
        })
    }

    /// Whether the `type` at the cursor modifies the specifier that follows
    /// it. `{ type }` and `{ type as x }` name `type` itself, while
    /// `{ type as }` and `{ type as as x }` import `as` as a type.
    fn is_type_specifier_modifier(&mut self) -> bool {
        match self.peek().kind {
            TokenKind::Comma | TokenKind::CloseBrace => false,
            TokenKind::AsKeyword => match self.peek_nth(2).kind {
                TokenKind::Comma | TokenKind::CloseBrace => true,
                TokenKind::AsKeyword => {
                    let after = self.peek_nth(3).kind;
                    after.is_identifier_or_keyword() || after == TokenKind::StringLiteral
                }
                _ => false,
            },
            _ => true,
        }
    }

    /// An identifier name (keywords allowed) or a string literal.
    fn parse_module_export_name(&mut self) -> PResult<ModuleExportName> {
        if self.at(TokenKind::StringLiteral) {
            return Ok(ModuleExportName::Literal(Box::new(self.parse_literal()?)));
        }
        if self.kind().is_identifier_or_keyword() {
            return Ok(ModuleExportName::Identifier(Box::new(self.parse_identifier_name()?)));
        }
        Err(self.expected_message(&messages::IDENTIFIER_EXPECTED))
    }

    fn parse_module_source(&mut self) -> PResult<Literal> {
        self.parse_string_literal()
    }

    /// `with { type: "json" }`, or the older `assert { ... }` on the same
    /// line as the source.
    fn parse_import_attributes(&mut self) -> PResult<Vec<ImportAttribute>> {
        let introduced = self.at(TokenKind::WithKeyword)
            || (self.at(TokenKind::AssertKeyword) && !self.has_line_break());
        if !introduced {
            return Ok(Vec::new());
        }
        self.bump();
        self.expect(TokenKind::OpenBrace)?;
        let mut attributes = Vec::new();
        while !self.at(TokenKind::CloseBrace) && !self.at(TokenKind::EndOfFile) {
            let start = self.start();
            let key = self.parse_module_export_name()?;
            self.expect(TokenKind::Colon)?;
            let value = self.parse_string_literal()?;
            attributes.push(ImportAttribute {
                data: self.node(NodeKind::ImportAttribute, start),
                key,
                value,
            });
            if !self.at(TokenKind::CloseBrace) {
                self.expect(TokenKind::Comma)?;
            }
        }
        self.expect(TokenKind::CloseBrace)?;
        Ok(attributes)
    }

    /// `= require("m");` or `= A.B;` after `import [type] X`.
    fn parse_import_equals(
        &mut self,
        start: u32,
        id: Identifier,
        import_kind: ImportOrExportKind,
        is_export: bool,
    ) -> PResult<Statement> {
        self.expect(TokenKind::Equals)?;
        let module_reference = if self.at(TokenKind::RequireKeyword) && self.peek_kind() == TokenKind::OpenParen {
            let reference_start = self.start();
            self.bump();
            self.bump();
            let expression = self.parse_string_literal()?;
            self.expect(TokenKind::CloseParen)?;
            TSModuleReference::TSExternalModuleReference(Box::new(TSExternalModuleReference {
                data: self.node(NodeKind::TSExternalModuleReference, reference_start),
                expression,
            }))
        } else {
            TSModuleReference::EntityName(self.parse_entity_name(false)?)
        };
        self.expect_semicolon()?;
        Ok(Statement::TSImportEqualsDeclaration(Box::new(TSImportEqualsDeclaration {
            data: self.node(NodeKind::TSImportEqualsDeclaration, start),
            id,
            module_reference,
            import_kind,
            is_export,
        })))
    }

    // ========================================================================
    // Exports
    // ========================================================================

    /// Any `export` form, at `export`. `decorators` were written in front
    /// of the keyword and belong to an exported class.
    pub(crate) fn parse_export_declaration(&mut self, decorators: Vec<Decorator>) -> PResult<Statement> {
        let start = decorators.first().map_or(self.start(), |decorator| decorator.data.span.pos);
        self.expect(TokenKind::ExportKeyword)?;

        match self.kind() {
            TokenKind::Equals if decorators.is_empty() => {
                self.bump();
                let expression = self.parse_assignment_allow_in()?;
                self.expect_semicolon()?;
                Ok(Statement::TSExportAssignment(Box::new(TSExportAssignment {
                    data: self.node(NodeKind::TSExportAssignment, start),
                    expression,
                })))
            }
            TokenKind::AsKeyword if decorators.is_empty() && self.peek_kind() == TokenKind::NamespaceKeyword => {
                self.bump();
                self.bump();
                let id = self.parse_identifier_name()?;
                self.expect_semicolon()?;
                Ok(Statement::TSNamespaceExportDeclaration(Box::new(TSNamespaceExportDeclaration {
                    data: self.node(NodeKind::TSNamespaceExportDeclaration, start),
                    id,
                })))
            }
            TokenKind::ImportKeyword if decorators.is_empty() && self.is_export_import_equals() => {
                self.bump();
                let mut import_kind = ImportOrExportKind::Value;
                if self.at(TokenKind::TypeKeyword) && self.peek().kind.is_identifier_like() {
                    self.bump();
                    import_kind = ImportOrExportKind::Type;
                }
                let id = self.parse_binding_identifier()?;
                self.parse_import_equals(start, id, import_kind, true)
            }
            TokenKind::DefaultKeyword => self.parse_export_default(start, decorators),
            TokenKind::Asterisk if decorators.is_empty() => self.parse_export_all(start, ImportOrExportKind::Value),
            TokenKind::TypeKeyword
                if decorators.is_empty() && self.peek_kind() == TokenKind::Asterisk =>
            {
                self.bump();
                self.parse_export_all(start, ImportOrExportKind::Type)
            }
            TokenKind::TypeKeyword
                if decorators.is_empty() && self.peek_kind() == TokenKind::OpenBrace =>
            {
                self.bump();
                self.parse_export_named(start, ImportOrExportKind::Type)
            }
            TokenKind::OpenBrace if decorators.is_empty() => self.parse_export_named(start, ImportOrExportKind::Value),
            _ => self.parse_exported_declaration(start, decorators),
        }
    }

    /// `export import A = ...` or `export import type A = ...`.
    fn is_export_import_equals(&mut self) -> bool {
        let next = self.peek();
        if !next.kind.is_identifier_like() {
            return false;
        }
        let after = self.peek_nth(2).kind;
        after == TokenKind::Equals || (next.kind == TokenKind::TypeKeyword && after.is_identifier_like())
    }

    /// `export [type] * [as name] from "m";`, at `*`.
    fn parse_export_all(&mut self, start: u32, export_kind: ImportOrExportKind) -> PResult<Statement> {
        self.expect(TokenKind::Asterisk)?;
        let exported = if self.eat(TokenKind::AsKeyword) {
            Some(self.parse_module_export_name()?)
        } else {
            None
        };
        self.expect(TokenKind::FromKeyword)?;
        let source = self.parse_module_source()?;
        let attributes = self.parse_import_attributes()?;
        self.expect_semicolon()?;
        Ok(Statement::ExportAllDeclaration(Box::new(ExportAllDeclaration {
            data: self.node(NodeKind::ExportAllDeclaration, start),
            exported,
            source,
            export_kind,
            attributes,
        })))
    }

    /// `export [type] { a, b as c } [from "m"];`, at `{`.
    fn parse_export_named(&mut self, start: u32, export_kind: ImportOrExportKind) -> PResult<Statement> {
        self.expect(TokenKind::OpenBrace)?;
        let mut specifiers = Vec::new();
        while !self.at(TokenKind::CloseBrace) && !self.at(TokenKind::EndOfFile) {
            specifiers.push(self.parse_export_specifier()?);
            if !self.at(TokenKind::CloseBrace) {
                self.expect(TokenKind::Comma)?;
            }
        }
        self.expect(TokenKind::CloseBrace)?;
        let (source, attributes) = if self.eat(TokenKind::FromKeyword) {
            let source = self.parse_module_source()?;
            (Some(source), self.parse_import_attributes()?)
        } else {
            (None, Vec::new())
        };
        self.expect_semicolon()?;
        Ok(Statement::ExportNamedDeclaration(Box::new(ExportNamedDeclaration {
            data: self.node(NodeKind::ExportNamedDeclaration, start),
            declaration: None,
            specifiers,
            source,
            export_kind,
            attributes,
        })))
    }

    fn parse_export_specifier(&mut self) -> PResult<ExportSpecifier> {
        let start = self.start();
        let mut export_kind = ImportOrExportKind::Value;
        if self.at(TokenKind::TypeKeyword) && self.is_type_specifier_modifier() {
            self.bump();
            export_kind = ImportOrExportKind::Type;
        }
        let local = self.parse_module_export_name()?;
        let exported = if self.eat(TokenKind::AsKeyword) {
            self.parse_module_export_name()?
        } else {
            local.clone()
        };
        Ok(ExportSpecifier {
            data: self.node(NodeKind::ExportSpecifier, start),
            local,
            exported,
            export_kind,
        })
    }

    /// `export default <declaration or expression>`, at `default`.
    fn parse_export_default(&mut self, start: u32, mut decorators: Vec<Decorator>) -> PResult<Statement> {
        self.expect(TokenKind::DefaultKeyword)?;
        let declaration_start = self.start();
        if self.at(TokenKind::At) {
            decorators.extend(self.parse_decorators()?);
        }
        let class_start = decorators.first().map_or(declaration_start, |decorator| decorator.data.span.pos);

        let declaration = match self.kind() {
            TokenKind::ClassKeyword => {
                let class = self.parse_class(class_start, decorators, NodeKind::ClassDeclaration, false, false)?;
                ExportDefaultKind::Declaration(Statement::ClassDeclaration(Box::new(class)))
            }
            TokenKind::AbstractKeyword if self.peek_kind() == TokenKind::ClassKeyword => {
                self.bump();
                let class = self.parse_class(class_start, decorators, NodeKind::ClassDeclaration, true, false)?;
                ExportDefaultKind::Declaration(Statement::ClassDeclaration(Box::new(class)))
            }
            _ if !decorators.is_empty() => {
                return Err(self.error_at(&messages::DECORATORS_ARE_NOT_VALID_HERE, &[], start, self.prev_token_end));
            }
            TokenKind::FunctionKeyword => ExportDefaultKind::Declaration(
                self.parse_function_declaration_with(declaration_start, false, false, true)?,
            ),
            TokenKind::AsyncKeyword
                if self.peek_kind() == TokenKind::FunctionKeyword && self.next_is_on_same_line() =>
            {
                self.bump();
                ExportDefaultKind::Declaration(self.parse_function_declaration_with(declaration_start, true, false, true)?)
            }
            TokenKind::InterfaceKeyword if self.is_start_of_ts_declaration(TokenKind::InterfaceKeyword) => {
                ExportDefaultKind::Declaration(self.parse_interface_declaration(declaration_start, false)?)
            }
            _ => {
                let expression = self.parse_assignment_allow_in()?;
                self.expect_semicolon()?;
                ExportDefaultKind::Expression(expression)
            }
        };
        Ok(Statement::ExportDefaultDeclaration(Box::new(ExportDefaultDeclaration {
            data: self.node(NodeKind::ExportDefaultDeclaration, start),
            declaration,
            export_kind: ImportOrExportKind::Value,
        })))
    }

    /// `export <declaration>`.
    fn parse_exported_declaration(&mut self, start: u32, mut decorators: Vec<Decorator>) -> PResult<Statement> {
        let declaration_start = self.start();
        if self.at(TokenKind::At) {
            decorators.extend(self.parse_decorators()?);
        }
        let class_start = decorators.first().map_or(declaration_start, |decorator| decorator.data.span.pos);
        let declaration = match self.kind() {
            TokenKind::ClassKeyword => {
                let class = self.parse_class(class_start, decorators, NodeKind::ClassDeclaration, false, false)?;
                Statement::ClassDeclaration(Box::new(class))
            }
            TokenKind::AbstractKeyword if self.peek_kind() == TokenKind::ClassKeyword => {
                self.bump();
                let class = self.parse_class(class_start, decorators, NodeKind::ClassDeclaration, true, false)?;
                Statement::ClassDeclaration(Box::new(class))
            }
            _ if !decorators.is_empty() => {
                return Err(self.error_at(&messages::DECORATORS_ARE_NOT_VALID_HERE, &[], start, self.prev_token_end));
            }
            _ => {
                let statement = self.parse_statement()?;
                if !statement.is_declaration() {
                    let span = statement.span();
                    return Err(self.error_at(&messages::DECLARATION_OR_STATEMENT_EXPECTED, &[], span.pos, span.end));
                }
                statement
            }
        };
        let export_kind = match declaration {
            Statement::TSInterfaceDeclaration(_) | Statement::TSTypeAliasDeclaration(_) => ImportOrExportKind::Type,
            _ => ImportOrExportKind::Value,
        };
        Ok(Statement::ExportNamedDeclaration(Box::new(ExportNamedDeclaration {
            data: self.node(NodeKind::ExportNamedDeclaration, start),
            declaration: Some(declaration),
            specifiers: Vec::new(),
            source: None,
            export_kind,
            attributes: Vec::new(),
        })))
    }
}

#[cfg(test)]
mod tests {
    use crate::options::ParseOptions;
    use serde_json::Value;

    fn program(source: &str) -> Value {
        let output = crate::parse(source, &ParseOptions::default());
        assert!(output.errors.is_empty(), "{source}: {:?}", output.errors);
        serde_json::to_value(&output.program).unwrap()
    }

    fn first_error(source: &str) -> u32 {
        crate::parse(source, &ParseOptions::default()).errors[0].code
    }

    #[test]
    fn test_import_forms() {
        let json = program(
            "import 'side';\n\
             import a, * as ns from 'm';\n\
             import b, { c, d as e, default as f, 'g h' as g } from 'm';\n\
             import type { T } from 'm';\n\
             import { type U, type as, type as as V } from 'm';\n\
             import data from './data.json' with { type: 'json' };",
        );
        let body = json["body"].as_array().unwrap();
        assert!(body[0]["specifiers"].as_array().unwrap().is_empty());
        assert_eq!(body[1]["specifiers"][1]["type"], "ImportNamespaceSpecifier");

        let named = body[2]["specifiers"].as_array().unwrap();
        assert_eq!(named.len(), 5);
        assert_eq!(named[0]["type"], "ImportDefaultSpecifier");
        assert_eq!(named[2]["imported"]["name"], "d");
        assert_eq!(named[2]["local"]["name"], "e");
        assert_eq!(named[3]["imported"]["name"], "default");
        assert_eq!(named[4]["imported"]["value"], "g h");

        assert_eq!(body[3]["importKind"], "type");
        let modifiers = body[4]["specifiers"].as_array().unwrap();
        assert_eq!(modifiers[0]["importKind"], "type");
        assert_eq!(modifiers[1]["importKind"], "type");
        assert_eq!(modifiers[1]["imported"]["name"], "as");
        assert_eq!(modifiers[1]["local"]["name"], "as");
        assert_eq!(modifiers[2]["importKind"], "type");
        assert_eq!(modifiers[2]["imported"]["name"], "as");
        assert_eq!(modifiers[2]["local"]["name"], "V");

        assert_eq!(body[5]["attributes"][0]["key"]["name"], "type");
        assert_eq!(body[5]["attributes"][0]["value"]["value"], "json");
    }

    #[test]
    fn test_type_as_default_binding() {
        let json = program("import type from 'm';\nimport type, { a } from 'm';");
        assert_eq!(json["body"][0]["importKind"], "value");
        assert_eq!(json["body"][0]["specifiers"][0]["local"]["name"], "type");
        assert_eq!(json["body"][1]["specifiers"][0]["local"]["name"], "type");
    }

    #[test]
    fn test_import_equals() {
        let json = program("import fs = require('fs');\nimport type T = A.B.C;\nexport import E = N.E;");
        let body = json["body"].as_array().unwrap();
        assert_eq!(body[0]["type"], "TSImportEqualsDeclaration");
        assert_eq!(body[0]["moduleReference"]["type"], "TSExternalModuleReference");
        assert_eq!(body[0]["moduleReference"]["expression"]["value"], "fs");
        assert_eq!(body[1]["importKind"], "type");
        assert_eq!(body[1]["moduleReference"]["type"], "TSQualifiedName");
        assert_eq!(body[2]["isExport"], true);
    }

    #[test]
    fn test_export_forms() {
        let json = program(
            "export const a = 1;\n\
             export { a as b, c, type D };\n\
             export * from 'm';\n\
             export * as ns from 'm';\n\
             export type { T } from 'm';\n\
             export interface I {}\n\
             export = a;\n\
             export as namespace Lib;",
        );
        let body = json["body"].as_array().unwrap();
        assert_eq!(body[0]["declaration"]["type"], "VariableDeclaration");
        assert_eq!(body[1]["specifiers"][0]["exported"]["name"], "b");
        assert_eq!(body[1]["specifiers"][1]["exported"]["name"], "c");
        assert_eq!(body[1]["specifiers"][2]["exportKind"], "type");
        assert!(body[1]["source"].is_null());
        assert!(body[2]["exported"].is_null());
        assert_eq!(body[3]["exported"]["name"], "ns");
        assert_eq!(body[4]["exportKind"], "type");
        assert_eq!(body[5]["exportKind"], "type");
        assert_eq!(body[6]["type"], "TSExportAssignment");
        assert_eq!(body[7]["type"], "TSNamespaceExportDeclaration");
    }

    #[test]
    fn test_export_default() {
        let json = program(
            "export default function () {}\n\
             export default class {}\n\
             export default async function named() {}\n\
             export default a + b;\n\
             @dec export default class A {}",
        );
        let body = json["body"].as_array().unwrap();
        assert_eq!(body[0]["declaration"]["type"], "FunctionDeclaration");
        assert!(body[0]["declaration"]["id"].is_null());
        assert_eq!(body[1]["declaration"]["type"], "ClassDeclaration");
        assert_eq!(body[2]["declaration"]["async"], true);
        assert_eq!(body[3]["declaration"]["type"], "BinaryExpression");
        assert_eq!(body[4]["declaration"]["decorators"][0]["expression"]["name"], "dec");
    }

    #[test]
    fn test_module_errors() {
        assert_eq!(first_error("import { a as } from 'm';"), 1003);
        assert_eq!(first_error("import { 'x' } from 'm';"), 1005);
        assert_eq!(first_error("import a from b;"), 1141);
        assert_eq!(first_error("export a;"), 1128);
    }
}
