//! JSX nodes.

use crate::node::*;
use crate::typescript::TSTypeParameterInstantiation;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JSXElement {
    #[serde(flatten)]
    pub data: NodeData,
    pub opening_element: JSXOpeningElement,
    pub closing_element: Option<JSXClosingElement>,
    pub children: Vec<JSXChild>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JSXOpeningElement {
    #[serde(flatten)]
    pub data: NodeData,
    pub name: JSXElementName,
    pub attributes: Vec<JSXAttributeItem>,
    pub self_closing: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_arguments: Option<Box<TSTypeParameterInstantiation>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JSXClosingElement {
    #[serde(flatten)]
    pub data: NodeData,
    pub name: JSXElementName,
}

/// `<>...</>`; the opening and closing markers are `EmptyNode`s.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JSXFragment {
    #[serde(flatten)]
    pub data: NodeData,
    pub opening_fragment: EmptyNode,
    pub closing_fragment: EmptyNode,
    pub children: Vec<JSXChild>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JSXIdentifier {
    #[serde(flatten)]
    pub data: NodeData,
    pub name: String,
}

/// `ns:name`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JSXNamespacedName {
    #[serde(flatten)]
    pub data: NodeData,
    pub namespace: JSXIdentifier,
    pub name: JSXIdentifier,
}

/// `a.b.c` as an element name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JSXMemberExpression {
    #[serde(flatten)]
    pub data: NodeData,
    pub object: JSXMemberObject,
    pub property: JSXIdentifier,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum JSXMemberObject {
    Identifier(Box<JSXIdentifier>),
    MemberExpression(Box<JSXMemberExpression>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum JSXElementName {
    Identifier(Box<JSXIdentifier>),
    NamespacedName(Box<JSXNamespacedName>),
    MemberExpression(Box<JSXMemberExpression>),
}

impl JSXElementName {
    /// The source-level spelling of the name, used to match closing tags.
    pub fn to_qualified_string(&self) -> String {
        match self {
            JSXElementName::Identifier(id) => id.name.clone(),
            JSXElementName::NamespacedName(ns) => format!("{}:{}", ns.namespace.name, ns.name.name),
            JSXElementName::MemberExpression(member) => member.to_qualified_string(),
        }
    }
}

impl JSXMemberExpression {
    fn to_qualified_string(&self) -> String {
        let object = match &self.object {
            JSXMemberObject::Identifier(id) => id.name.clone(),
            JSXMemberObject::MemberExpression(member) => member.to_qualified_string(),
        };
        format!("{}.{}", object, self.property.name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum JSXAttributeItem {
    Attribute(Box<JSXAttribute>),
    Spread(Box<JSXSpreadAttribute>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum JSXAttributeName {
    Identifier(Box<JSXIdentifier>),
    NamespacedName(Box<JSXNamespacedName>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum JSXAttributeValue {
    Literal(Box<Literal>),
    ExpressionContainer(Box<JSXExpressionContainer>),
    Element(Box<JSXElement>),
    Fragment(Box<JSXFragment>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JSXAttribute {
    #[serde(flatten)]
    pub data: NodeData,
    pub name: JSXAttributeName,
    pub value: Option<JSXAttributeValue>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JSXSpreadAttribute {
    #[serde(flatten)]
    pub data: NodeData,
    pub argument: Expression,
}

/// The content of `{...}`: an expression, or `JSXEmptyExpression` for `{}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum JSXExpression {
    Empty(Box<EmptyNode>),
    Expression(Expression),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JSXExpressionContainer {
    #[serde(flatten)]
    pub data: NodeData,
    pub expression: JSXExpression,
}

/// `{...children}`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JSXSpreadChild {
    #[serde(flatten)]
    pub data: NodeData,
    pub expression: Expression,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JSXText {
    #[serde(flatten)]
    pub data: NodeData,
    pub value: String,
    pub raw: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum JSXChild {
    Text(Box<JSXText>),
    ExpressionContainer(Box<JSXExpressionContainer>),
    SpreadChild(Box<JSXSpreadChild>),
    Element(Box<JSXElement>),
    Fragment(Box<JSXFragment>),
}

impl_node!(
    JSXElement,
    JSXOpeningElement,
    JSXClosingElement,
    JSXFragment,
    JSXIdentifier,
    JSXNamespacedName,
    JSXMemberExpression,
    JSXAttribute,
    JSXSpreadAttribute,
    JSXExpressionContainer,
    JSXSpreadChild,
    JSXText,
);

impl_node_enum!(JSXMemberObject { Identifier, MemberExpression });
impl_node_enum!(JSXElementName { Identifier, NamespacedName, MemberExpression });
impl_node_enum!(JSXAttributeItem { Attribute, Spread });
impl_node_enum!(JSXAttributeName { Identifier, NamespacedName });
impl_node_enum!(JSXAttributeValue { Literal, ExpressionContainer, Element, Fragment });
impl_node_enum!(JSXExpression { Empty, Expression });
impl_node_enum!(JSXChild { Text, ExpressionContainer, SpreadChild, Element, Fragment });

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node_kind::NodeKind;
    use tsestree_core::text::TextRange;

    fn ident(name: &str, pos: u32) -> JSXIdentifier {
        JSXIdentifier {
            data: NodeData::new(NodeKind::JSXIdentifier, TextRange::new(pos, pos + name.len() as u32)),
            name: name.to_string(),
        }
    }

    #[test]
    fn test_qualified_names() {
        let member = JSXMemberExpression {
            data: NodeData::new(NodeKind::JSXMemberExpression, TextRange::new(0, 5)),
            object: JSXMemberObject::Identifier(Box::new(ident("a", 0))),
            property: ident("b", 2),
        };
        let name = JSXElementName::MemberExpression(Box::new(member));
        assert_eq!(name.to_qualified_string(), "a.b");

        let ns = JSXNamespacedName {
            data: NodeData::new(NodeKind::JSXNamespacedName, TextRange::new(0, 5)),
            namespace: ident("svg", 0),
            name: ident("g", 4),
        };
        assert_eq!(JSXElementName::NamespacedName(Box::new(ns)).to_qualified_string(), "svg:g");
    }
}
