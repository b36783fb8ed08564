//! JSX elements and fragments.
//!
//! The scanner switches between three modes here: JSX mode for tag names
//! and attributes (identifiers may contain `-`, strings have no escapes),
//! child mode for element content (text runs up to `{` or `<`), and the
//! normal mode for embedded expressions. Every transition happens before
//! the token that needs the new mode is scanned.

use tracing::trace;
use tsestree_ast::*;
use tsestree_diagnostics::messages;

use crate::parser::{PResult, Parser};

/// How the token after an element's final `>` is scanned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Continuation {
    /// The element is a child of another element.
    Child,
    /// The element is an attribute value: more attributes may follow.
    Attribute,
    /// The element ends a JSX expression.
    Expression,
}

enum JsxNode {
    Element(JSXElement),
    Fragment(JSXFragment),
}

impl<'a> Parser<'a> {
    /// A JSX element or fragment in expression position, at `<`.
    pub(crate) fn parse_jsx_element_or_fragment(&mut self) -> PResult<Expression> {
        let result = self.parse_jsx_node(Continuation::Expression);
        if result.is_err() {
            self.scanner.set_in_jsx(false);
        }
        Ok(match result? {
            JsxNode::Element(element) => Expression::JSXElement(Box::new(element)),
            JsxNode::Fragment(fragment) => Expression::JSXFragment(Box::new(fragment)),
        })
    }

    fn parse_jsx_node(&mut self, then: Continuation) -> PResult<JsxNode> {
        self.guarded(|p| {
            let start = p.start();
            p.scanner.set_in_jsx(true);
            p.bump();
            if p.at(TokenKind::GreaterThan) {
                p.parse_jsx_fragment(start, then).map(JsxNode::Fragment)
            } else {
                p.parse_jsx_element(start, then).map(JsxNode::Element)
            }
        })
    }

    /// `<>children</>`; the `<` has been consumed.
    fn parse_jsx_fragment(&mut self, start: u32, then: Continuation) -> PResult<JSXFragment> {
        self.bump_jsx_child();
        let opening_fragment = self.empty_node(NodeKind::JSXOpeningFragment, start);
        let children = self.parse_jsx_children()?;

        let closing_start = self.start();
        if self.at(TokenKind::EndOfFile) {
            return Err(self.error_at(&messages::UNTERMINATED_JSX_CONTENTS, &[], start, opening_fragment.data.span.end));
        }
        self.bump();
        if !self.at(TokenKind::GreaterThan) {
            self.report(
                &messages::EXPECTED_CORRESPONDING_CLOSING_TAG_FOR_JSX_FRAGMENT,
                &[],
                closing_start,
                self.token.end,
            );
            self.parse_jsx_element_name()?;
        }
        self.finish_jsx_tag(then)?;
        let closing_fragment = self.empty_node(NodeKind::JSXClosingFragment, closing_start);
        Ok(JSXFragment {
            data: self.node(NodeKind::JSXFragment, start),
            opening_fragment,
            closing_fragment,
            children,
        })
    }

    /// `<Name attrs>children</Name>` or `<Name attrs />`; the `<` has been
    /// consumed.
    fn parse_jsx_element(&mut self, start: u32, then: Continuation) -> PResult<JSXElement> {
        let name = self.parse_jsx_element_name()?;
        let type_arguments = if self.at(TokenKind::LessThan) {
            Some(self.parse_jsx_type_arguments()?)
        } else {
            None
        };
        let attributes = self.parse_jsx_attributes()?;

        if self.eat(TokenKind::Slash) {
            self.finish_jsx_tag(then)?;
            let opening_element = JSXOpeningElement {
                data: self.node(NodeKind::JSXOpeningElement, start),
                name,
                attributes,
                self_closing: true,
                type_arguments,
            };
            return Ok(JSXElement {
                data: self.node(NodeKind::JSXElement, start),
                opening_element,
                closing_element: None,
                children: Vec::new(),
            });
        }

        if !self.at(TokenKind::GreaterThan) {
            return Err(self.expected(">"));
        }
        self.bump_jsx_child();
        let opening_element = JSXOpeningElement {
            data: self.node(NodeKind::JSXOpeningElement, start),
            name,
            attributes,
            self_closing: false,
            type_arguments,
        };
        let children = self.parse_jsx_children()?;

        let opening_name = opening_element.name.to_qualified_string();
        if self.at(TokenKind::EndOfFile) {
            let span = opening_element.name.span();
            return Err(self.error_at(
                &messages::JSX_ELEMENT_0_HAS_NO_CORRESPONDING_CLOSING_TAG,
                &[opening_name.as_str()],
                span.pos,
                span.end,
            ));
        }
        let closing_start = self.start();
        self.bump();
        let closing_name = self.parse_jsx_element_name()?;
        if closing_name.to_qualified_string() != opening_name {
            let span = closing_name.span();
            self.report(
                &messages::EXPECTED_CORRESPONDING_JSX_CLOSING_TAG_FOR_0,
                &[opening_name.as_str()],
                span.pos,
                span.end,
            );
        }
        self.finish_jsx_tag(then)?;
        let closing_element = JSXClosingElement {
            data: self.node(NodeKind::JSXClosingElement, closing_start),
            name: closing_name,
        };
        trace!(name = %opening_name, children = children.len(), "parsed jsx element");
        Ok(JSXElement {
            data: self.node(NodeKind::JSXElement, start),
            opening_element,
            closing_element: Some(closing_element),
            children,
        })
    }

    /// Consume the `>` ending a tag and scan what follows in the mode the
    /// element's position calls for.
    fn finish_jsx_tag(&mut self, then: Continuation) -> PResult<()> {
        if !self.at(TokenKind::GreaterThan) {
            return Err(self.expected(">"));
        }
        match then {
            Continuation::Child => self.bump_jsx_child(),
            Continuation::Attribute => self.bump(),
            Continuation::Expression => {
                self.scanner.set_in_jsx(false);
                self.bump();
            }
        }
        Ok(())
    }

    /// `<Component<T> ...>`: the arguments are ordinary types.
    fn parse_jsx_type_arguments(&mut self) -> PResult<Box<TSTypeParameterInstantiation>> {
        let start = self.start();
        self.scanner.set_in_jsx(false);
        let params = self.parse_type_argument_list();
        self.scanner.set_in_jsx(true);
        let params = params?;
        self.expect(TokenKind::GreaterThan)?;
        Ok(Box::new(TSTypeParameterInstantiation {
            data: self.node(NodeKind::TSTypeParameterInstantiation, start),
            params,
        }))
    }

    fn parse_jsx_identifier(&mut self) -> PResult<JSXIdentifier> {
        if !(self.at(TokenKind::JsxIdentifier) || self.kind().is_identifier_or_keyword()) {
            return Err(self.expected_message(&messages::IDENTIFIER_EXPECTED));
        }
        let start = self.start();
        let name = self.token.value.to_string();
        self.bump();
        Ok(JSXIdentifier {
            data: self.node(NodeKind::JSXIdentifier, start),
            name,
        })
    }

    /// `div`, `svg:rect`, `Foo.Bar.Baz`.
    fn parse_jsx_element_name(&mut self) -> PResult<JSXElementName> {
        let start = self.start();
        let first = self.parse_jsx_identifier()?;
        if self.eat(TokenKind::Colon) {
            let name = self.parse_jsx_identifier()?;
            return Ok(JSXElementName::NamespacedName(Box::new(JSXNamespacedName {
                data: self.node(NodeKind::JSXNamespacedName, start),
                namespace: first,
                name,
            })));
        }
        if !self.at(TokenKind::Dot) {
            return Ok(JSXElementName::Identifier(Box::new(first)));
        }
        let mut object = JSXMemberObject::Identifier(Box::new(first));
        loop {
            self.expect(TokenKind::Dot)?;
            let property = self.parse_jsx_identifier()?;
            let member = JSXMemberExpression {
                data: self.node(NodeKind::JSXMemberExpression, start),
                object,
                property,
            };
            if !self.at(TokenKind::Dot) {
                return Ok(JSXElementName::MemberExpression(Box::new(member)));
            }
            object = JSXMemberObject::MemberExpression(Box::new(member));
        }
    }

    fn parse_jsx_attributes(&mut self) -> PResult<Vec<JSXAttributeItem>> {
        let mut attributes = Vec::new();
        while !matches!(self.kind(), TokenKind::GreaterThan | TokenKind::Slash | TokenKind::EndOfFile) {
            let start = self.start();
            if self.at(TokenKind::OpenBrace) {
                self.scanner.set_in_jsx(false);
                self.bump();
                self.expect(TokenKind::DotDotDot)?;
                let argument = self.parse_assignment_allow_in()?;
                self.close_jsx_brace(false)?;
                attributes.push(JSXAttributeItem::Spread(Box::new(JSXSpreadAttribute {
                    data: self.node(NodeKind::JSXSpreadAttribute, start),
                    argument,
                })));
                continue;
            }

            let first = self.parse_jsx_identifier()?;
            let name = if self.eat(TokenKind::Colon) {
                let local = self.parse_jsx_identifier()?;
                JSXAttributeName::NamespacedName(Box::new(JSXNamespacedName {
                    data: self.node(NodeKind::JSXNamespacedName, start),
                    namespace: first,
                    name: local,
                }))
            } else {
                JSXAttributeName::Identifier(Box::new(first))
            };
            let value = if self.eat(TokenKind::Equals) {
                Some(self.parse_jsx_attribute_value()?)
            } else {
                None
            };
            attributes.push(JSXAttributeItem::Attribute(Box::new(JSXAttribute {
                data: self.node(NodeKind::JSXAttribute, start),
                name,
                value,
            })));
        }
        Ok(attributes)
    }

    fn parse_jsx_attribute_value(&mut self) -> PResult<JSXAttributeValue> {
        match self.kind() {
            TokenKind::StringLiteral => Ok(JSXAttributeValue::Literal(Box::new(self.parse_literal()?))),
            TokenKind::OpenBrace => {
                let start = self.start();
                self.scanner.set_in_jsx(false);
                self.bump();
                let expression = if self.at(TokenKind::CloseBrace) {
                    JSXExpression::Empty(Box::new(self.jsx_empty_expression()))
                } else {
                    JSXExpression::Expression(self.parse_assignment_allow_in()?)
                };
                self.close_jsx_brace(false)?;
                Ok(JSXAttributeValue::ExpressionContainer(Box::new(JSXExpressionContainer {
                    data: self.node(NodeKind::JSXExpressionContainer, start),
                    expression,
                })))
            }
            TokenKind::LessThan => Ok(match self.parse_jsx_node(Continuation::Attribute)? {
                JsxNode::Element(element) => JSXAttributeValue::Element(Box::new(element)),
                JsxNode::Fragment(fragment) => JSXAttributeValue::Fragment(Box::new(fragment)),
            }),
            _ => Err(self.expected("{")),
        }
    }

    /// Element content up to the closing tag (or end of input).
    fn parse_jsx_children(&mut self) -> PResult<Vec<JSXChild>> {
        let mut children = Vec::new();
        loop {
            match self.kind() {
                TokenKind::JsxText => {
                    let start = self.start();
                    let value = self.token.value.to_string();
                    let raw = self.token.text.to_string();
                    self.bump_jsx_child();
                    children.push(JSXChild::Text(Box::new(JSXText {
                        data: self.node(NodeKind::JSXText, start),
                        value,
                        raw,
                    })));
                }
                TokenKind::OpenBrace => children.push(self.parse_jsx_child_expression()?),
                TokenKind::LessThan => children.push(match self.parse_jsx_node(Continuation::Child)? {
                    JsxNode::Element(element) => JSXChild::Element(Box::new(element)),
                    JsxNode::Fragment(fragment) => JSXChild::Fragment(Box::new(fragment)),
                }),
                TokenKind::LessThanSlash | TokenKind::EndOfFile => return Ok(children),
                _ => return Err(self.unexpected()),
            }
        }
    }

    /// `{expr}`, `{...spread}` or `{}` between children.
    fn parse_jsx_child_expression(&mut self) -> PResult<JSXChild> {
        let start = self.start();
        self.scanner.set_in_jsx(false);
        self.bump();
        if self.eat(TokenKind::DotDotDot) {
            let expression = self.parse_expression_allow_in()?;
            self.close_jsx_brace(true)?;
            return Ok(JSXChild::SpreadChild(Box::new(JSXSpreadChild {
                data: self.node(NodeKind::JSXSpreadChild, start),
                expression,
            })));
        }
        let expression = if self.at(TokenKind::CloseBrace) {
            JSXExpression::Empty(Box::new(self.jsx_empty_expression()))
        } else {
            JSXExpression::Expression(self.parse_expression_allow_in()?)
        };
        self.close_jsx_brace(true)?;
        Ok(JSXChild::ExpressionContainer(Box::new(JSXExpressionContainer {
            data: self.node(NodeKind::JSXExpressionContainer, start),
            expression,
        })))
    }

    /// Consume the `}` of an embedded expression and return to JSX
    /// scanning.
    fn close_jsx_brace(&mut self, in_children: bool) -> PResult<()> {
        self.scanner.set_in_jsx(true);
        if !self.at(TokenKind::CloseBrace) {
            return Err(self.expected("}"));
        }
        if in_children {
            self.bump_jsx_child();
        } else {
            self.bump();
        }
        Ok(())
    }

    /// The gap between `{` and `}` of an empty container.
    fn jsx_empty_expression(&self) -> EmptyNode {
        EmptyNode {
            data: self.node_span(NodeKind::JSXEmptyExpression, self.prev_token_end, self.start()),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::options::ParseOptions;
    use serde_json::Value;

    fn tsx() -> ParseOptions {
        ParseOptions {
            jsx: true,
            ..ParseOptions::default()
        }
    }

    fn expression(source: &str) -> Value {
        let output = crate::parse(source, &tsx());
        assert!(output.errors.is_empty(), "{source}: {:?}", output.errors);
        let json = serde_json::to_value(&output.program).unwrap();
        json["body"][0]["expression"].clone()
    }

    fn codes(source: &str) -> Vec<u32> {
        crate::parse(source, &tsx()).errors.iter().map(|error| error.code).collect()
    }

    #[test]
    fn test_element_with_attributes() {
        let json = expression(r#"<div id="a" data-x={1} {...rest} disabled svg:href='b' />;"#);
        assert_eq!(json["type"], "JSXElement");
        let opening = &json["openingElement"];
        assert_eq!(opening["selfClosing"], true);
        let attributes = opening["attributes"].as_array().unwrap();
        assert_eq!(attributes.len(), 5);
        assert_eq!(attributes[0]["value"]["value"], "a");
        assert_eq!(attributes[1]["name"]["name"], "data-x");
        assert_eq!(attributes[1]["value"]["type"], "JSXExpressionContainer");
        assert_eq!(attributes[2]["type"], "JSXSpreadAttribute");
        assert!(attributes[3]["value"].is_null());
        assert_eq!(attributes[4]["name"]["type"], "JSXNamespacedName");
        assert!(json["closingElement"].is_null());
    }

    #[test]
    fn test_children() {
        let json = expression("<p>Hello {name}! {/* empty */}<b>x</b>{...items}</p>;");
        let children = json["children"].as_array().unwrap();
        let kinds: Vec<&str> = children.iter().map(|c| c["type"].as_str().unwrap()).collect();
        assert_eq!(
            kinds,
            ["JSXText", "JSXExpressionContainer", "JSXText", "JSXExpressionContainer", "JSXElement", "JSXSpreadChild"]
        );
        assert_eq!(children[0]["value"], "Hello ");
        assert_eq!(children[3]["expression"]["type"], "JSXEmptyExpression");
        assert_eq!(json["closingElement"]["name"]["name"], "p");
    }

    #[test]
    fn test_fragment_and_member_names() {
        let json = expression("<><Foo.Bar.Baz /></>;");
        assert_eq!(json["type"], "JSXFragment");
        assert_eq!(json["openingFragment"]["type"], "JSXOpeningFragment");
        let name = &json["children"][0]["openingElement"]["name"];
        assert_eq!(name["type"], "JSXMemberExpression");
        assert_eq!(name["property"]["name"], "Baz");
        assert_eq!(name["object"]["type"], "JSXMemberExpression");
        assert_eq!(name["object"]["object"]["name"], "Foo");
    }

    #[test]
    fn test_type_arguments_and_following_operator() {
        let output = crate::parse("const x = <Select<Option> value={v} /> / 2;", &tsx());
        assert!(output.errors.is_empty(), "{:?}", output.errors);
        let json = serde_json::to_value(&output.program).unwrap();
        let init = &json["body"][0]["declarations"][0]["init"];
        assert_eq!(init["type"], "BinaryExpression");
        assert_eq!(init["left"]["openingElement"]["typeArguments"]["params"][0]["type"], "TSTypeReference");
    }

    #[test]
    fn test_element_as_attribute_value() {
        let json = expression("<A icon=<Icon /> label='x' />;");
        let attributes = json["openingElement"]["attributes"].as_array().unwrap();
        assert_eq!(attributes[0]["value"]["type"], "JSXElement");
        assert_eq!(attributes[1]["name"]["name"], "label");
    }

    #[test]
    fn test_mismatched_and_unclosed_tags() {
        assert_eq!(codes("<a></b>;"), vec![17002]);
        assert_eq!(codes("<a>text"), vec![17008]);
        assert_eq!(codes("<>text"), vec![17014]);
        assert_eq!(codes("<>x</a>;"), vec![17015]);
    }

    #[test]
    fn test_statement_after_jsx_error_is_parsed_normally() {
        let output = crate::parse("<a>{</a>;\nlet y = 1;", &tsx());
        assert!(!output.errors.is_empty());
        let json = serde_json::to_value(&output.program).unwrap();
        let last = json["body"].as_array().unwrap().last().unwrap().clone();
        assert_eq!(last["type"], "VariableDeclaration");
    }
}
