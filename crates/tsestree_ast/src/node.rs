//! AST node definitions for the ESTree-compatible tree.
//!
//! Every node is an owned struct carrying a [`NodeData`] base, flattened into
//! its serialized form. Broad categories ([`Expression`], [`Statement`],
//! [`Pattern`], ...) are closed sum types with boxed payloads; they serialize
//! untagged, so the `"type"` field always comes from the node itself.

use crate::jsx::{JSXElement, JSXFragment};
use crate::node_kind::NodeKind;
use crate::operator::*;
use crate::typescript::*;
use serde::{Serialize, Serializer};
use tsestree_core::text::{SourceLocation, TextRange};

pub(crate) fn is_false(value: &bool) -> bool {
    !*value
}

// ============================================================================
// Core Node Wrapper
// ============================================================================

/// Common data shared by all AST nodes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeData {
    /// The kind of this node, serialized as `"type"`.
    #[serde(rename = "type")]
    pub kind: NodeKind,
    /// Source byte range. Always tracked, serialized only through `range`.
    #[serde(skip)]
    pub span: TextRange,
    /// `[start, end]`, present when range output was requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<TextRange>,
    /// Line/column location, present when location output was requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<SourceLocation>,
}

impl NodeData {
    pub fn new(kind: NodeKind, span: TextRange) -> Self {
        Self {
            kind,
            span,
            range: None,
            loc: None,
        }
    }
}

/// Access to the shared base of any node or node category.
pub trait Node {
    fn data(&self) -> &NodeData;
    fn data_mut(&mut self) -> &mut NodeData;

    #[inline]
    fn span(&self) -> TextRange {
        self.data().span
    }

    #[inline]
    fn kind(&self) -> NodeKind {
        self.data().kind
    }
}

macro_rules! impl_node {
    ($($ty:ident),* $(,)?) => {
        $(
            impl $crate::node::Node for $ty {
                #[inline]
                fn data(&self) -> &$crate::node::NodeData {
                    &self.data
                }
                #[inline]
                fn data_mut(&mut self) -> &mut $crate::node::NodeData {
                    &mut self.data
                }
            }
        )*
    };
}

macro_rules! impl_node_enum {
    ($ty:ident { $($variant:ident),* $(,)? }) => {
        impl $crate::node::Node for $ty {
            fn data(&self) -> &$crate::node::NodeData {
                match self {
                    $($ty::$variant(node) => node.data(),)*
                }
            }
            fn data_mut(&mut self) -> &mut $crate::node::NodeData {
                match self {
                    $($ty::$variant(node) => node.data_mut(),)*
                }
            }
        }
    };
}

pub(crate) use impl_node;
pub(crate) use impl_node_enum;

/// A node with no fields beyond its base (`ThisExpression`, `Super`,
/// `EmptyStatement`, TS keyword types, JSX fragment delimiters, ...).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmptyNode {
    #[serde(flatten)]
    pub data: NodeData,
}

impl EmptyNode {
    pub fn new(kind: NodeKind, span: TextRange) -> Self {
        Self {
            data: NodeData::new(kind, span),
        }
    }
}

// ============================================================================
// Program, comments and tokens
// ============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceType {
    #[default]
    Script,
    Module,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Program {
    #[serde(flatten)]
    pub data: NodeData,
    pub body: Vec<Statement>,
    pub source_type: SourceType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<Vec<Comment>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tokens: Option<Vec<EsToken>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CommentKind {
    Line,
    Block,
}

/// A source comment. `value` excludes the `//` or `/* */` delimiters.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comment {
    #[serde(rename = "type")]
    pub kind: CommentKind,
    pub value: String,
    pub range: TextRange,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<SourceLocation>,
}

/// A token in the ESTree token list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EsToken {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub value: String,
    pub range: TextRange,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<SourceLocation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regex: Option<RegExpValue>,
}

// ============================================================================
// Names and literals
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Identifier {
    #[serde(flatten)]
    pub data: NodeData,
    pub name: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub decorators: Vec<Decorator>,
    #[serde(skip_serializing_if = "is_false")]
    pub optional: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_annotation: Option<Box<TSTypeAnnotation>>,
}

impl Identifier {
    pub fn new(name: impl Into<String>, span: TextRange) -> Self {
        Self {
            data: NodeData::new(NodeKind::Identifier, span),
            name: name.into(),
            decorators: Vec::new(),
            optional: false,
            type_annotation: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrivateIdentifier {
    #[serde(flatten)]
    pub data: NodeData,
    pub name: String,
}

/// The runtime value of a literal.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    String(String),
    Number(f64),
    Boolean(bool),
    /// `null`, and the value of regex and bigint literals, which have no
    /// JSON representation.
    Null,
}

impl Serialize for LiteralValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            LiteralValue::String(value) => serializer.serialize_str(value),
            LiteralValue::Number(value) => {
                // integral values print without a fraction, as JavaScript does
                if value.is_finite() && value.fract() == 0.0 && value.abs() < 9_007_199_254_740_992.0 {
                    serializer.serialize_i64(*value as i64)
                } else {
                    serializer.serialize_f64(*value)
                }
            }
            LiteralValue::Boolean(value) => serializer.serialize_bool(*value),
            LiteralValue::Null => serializer.serialize_none(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegExpValue {
    pub pattern: String,
    pub flags: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Literal {
    #[serde(flatten)]
    pub data: NodeData,
    pub value: LiteralValue,
    pub raw: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regex: Option<RegExpValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bigint: Option<String>,
}

impl Literal {
    /// The string value, if this is a string literal.
    pub fn as_str(&self) -> Option<&str> {
        match &self.value {
            LiteralValue::String(value) => Some(value),
            _ => None,
        }
    }
}

// ============================================================================
// Expressions
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Expression {
    Identifier(Box<Identifier>),
    PrivateIdentifier(Box<PrivateIdentifier>),
    Literal(Box<Literal>),
    ThisExpression(Box<EmptyNode>),
    Super(Box<EmptyNode>),
    ArrayExpression(Box<ArrayExpression>),
    ObjectExpression(Box<ObjectExpression>),
    FunctionExpression(Box<Function>),
    ArrowFunctionExpression(Box<ArrowFunctionExpression>),
    ClassExpression(Box<Class>),
    TemplateLiteral(Box<TemplateLiteral>),
    TaggedTemplateExpression(Box<TaggedTemplateExpression>),
    UnaryExpression(Box<UnaryExpression>),
    UpdateExpression(Box<UpdateExpression>),
    BinaryExpression(Box<BinaryExpression>),
    LogicalExpression(Box<LogicalExpression>),
    AssignmentExpression(Box<AssignmentExpression>),
    ConditionalExpression(Box<ConditionalExpression>),
    CallExpression(Box<CallExpression>),
    NewExpression(Box<NewExpression>),
    MemberExpression(Box<MemberExpression>),
    ChainExpression(Box<ChainExpression>),
    SequenceExpression(Box<SequenceExpression>),
    YieldExpression(Box<YieldExpression>),
    AwaitExpression(Box<AwaitExpression>),
    ImportExpression(Box<ImportExpression>),
    MetaProperty(Box<MetaProperty>),
    JSXElement(Box<JSXElement>),
    JSXFragment(Box<JSXFragment>),
    TSAsExpression(Box<TSAsExpression>),
    TSSatisfiesExpression(Box<TSSatisfiesExpression>),
    TSTypeAssertion(Box<TSTypeAssertion>),
    TSNonNullExpression(Box<TSNonNullExpression>),
    TSInstantiationExpression(Box<TSInstantiationExpression>),
}

impl Expression {
    /// Whether this expression may appear as the target of a simple
    /// assignment or update (`x`, `a.b`, `a[b]`, and TS wrappers of those).
    pub fn is_simple_assignment_target(&self) -> bool {
        match self {
            Expression::Identifier(_) => true,
            Expression::MemberExpression(member) => !member.optional,
            Expression::TSAsExpression(e) | Expression::TSSatisfiesExpression(e) => {
                e.expression.is_simple_assignment_target()
            }
            Expression::TSNonNullExpression(e) => e.expression.is_simple_assignment_target(),
            Expression::TSTypeAssertion(e) => e.expression.is_simple_assignment_target(),
            _ => false,
        }
    }
}

/// An element of an array literal or an argument of a call.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ExpressionOrSpread {
    Spread(Box<SpreadElement>),
    Expression(Expression),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpreadElement {
    #[serde(flatten)]
    pub data: NodeData,
    pub argument: Expression,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArrayExpression {
    #[serde(flatten)]
    pub data: NodeData,
    pub elements: Vec<Option<ExpressionOrSpread>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObjectExpression {
    #[serde(flatten)]
    pub data: NodeData,
    pub properties: Vec<ObjectProperty>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ObjectProperty {
    Property(Box<Property>),
    Spread(Box<SpreadElement>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyKind {
    Init,
    Get,
    Set,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Property {
    #[serde(flatten)]
    pub data: NodeData,
    pub key: Expression,
    pub value: Expression,
    pub kind: PropertyKind,
    pub method: bool,
    pub shorthand: bool,
    pub computed: bool,
}

/// Shared by function declarations and expressions, `TSDeclareFunction`, and
/// the body-less `TSEmptyBodyFunctionExpression` of overloads and abstract
/// methods. The node kind tells them apart.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Function {
    #[serde(flatten)]
    pub data: NodeData,
    pub id: Option<Identifier>,
    pub params: Vec<Parameter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<BlockStatement>,
    pub generator: bool,
    #[serde(rename = "async")]
    pub is_async: bool,
    pub expression: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub declare: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_parameters: Option<Box<TSTypeParameterDeclaration>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_type: Option<Box<TSTypeAnnotation>>,
}

/// A function or arrow parameter.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Parameter {
    Pattern(Pattern),
    TSParameterProperty(Box<TSParameterProperty>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ArrowBody {
    Block(Box<BlockStatement>),
    Expression(Expression),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArrowFunctionExpression {
    #[serde(flatten)]
    pub data: NodeData,
    pub params: Vec<Parameter>,
    pub body: ArrowBody,
    #[serde(rename = "async")]
    pub is_async: bool,
    /// True when the body is an expression rather than a block.
    pub expression: bool,
    pub generator: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_parameters: Option<Box<TSTypeParameterDeclaration>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_type: Option<Box<TSTypeAnnotation>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemplateElementValue {
    pub raw: String,
    /// `None` when the raw text contains an invalid escape (tagged templates).
    pub cooked: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemplateElement {
    #[serde(flatten)]
    pub data: NodeData,
    pub value: TemplateElementValue,
    pub tail: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemplateLiteral {
    #[serde(flatten)]
    pub data: NodeData,
    pub quasis: Vec<TemplateElement>,
    pub expressions: Vec<Expression>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaggedTemplateExpression {
    #[serde(flatten)]
    pub data: NodeData,
    pub tag: Expression,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_arguments: Option<Box<TSTypeParameterInstantiation>>,
    pub quasi: TemplateLiteral,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnaryExpression {
    #[serde(flatten)]
    pub data: NodeData,
    pub operator: UnaryOperator,
    pub prefix: bool,
    pub argument: Expression,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpdateExpression {
    #[serde(flatten)]
    pub data: NodeData,
    pub operator: UpdateOperator,
    pub prefix: bool,
    pub argument: Expression,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BinaryExpression {
    #[serde(flatten)]
    pub data: NodeData,
    pub operator: BinaryOperator,
    pub left: Expression,
    pub right: Expression,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogicalExpression {
    #[serde(flatten)]
    pub data: NodeData,
    pub operator: LogicalOperator,
    pub left: Expression,
    pub right: Expression,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssignmentExpression {
    #[serde(flatten)]
    pub data: NodeData,
    pub operator: AssignmentOperator,
    pub left: Pattern,
    pub right: Expression,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConditionalExpression {
    #[serde(flatten)]
    pub data: NodeData,
    pub test: Expression,
    pub consequent: Expression,
    pub alternate: Expression,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CallExpression {
    #[serde(flatten)]
    pub data: NodeData,
    pub callee: Expression,
    pub arguments: Vec<ExpressionOrSpread>,
    pub optional: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_arguments: Option<Box<TSTypeParameterInstantiation>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewExpression {
    #[serde(flatten)]
    pub data: NodeData,
    pub callee: Expression,
    pub arguments: Vec<ExpressionOrSpread>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_arguments: Option<Box<TSTypeParameterInstantiation>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MemberExpression {
    #[serde(flatten)]
    pub data: NodeData,
    pub object: Expression,
    pub property: Expression,
    pub computed: bool,
    pub optional: bool,
}

/// Wraps a whole optional chain (`a?.b.c`) exactly once.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChainExpression {
    #[serde(flatten)]
    pub data: NodeData,
    pub expression: Expression,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SequenceExpression {
    #[serde(flatten)]
    pub data: NodeData,
    pub expressions: Vec<Expression>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YieldExpression {
    #[serde(flatten)]
    pub data: NodeData,
    pub argument: Option<Expression>,
    pub delegate: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AwaitExpression {
    #[serde(flatten)]
    pub data: NodeData,
    pub argument: Expression,
}

/// Dynamic `import(source, options)`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImportExpression {
    #[serde(flatten)]
    pub data: NodeData,
    pub source: Expression,
    pub options: Option<Expression>,
}

/// `import.meta` or `new.target`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetaProperty {
    #[serde(flatten)]
    pub data: NodeData,
    pub meta: Identifier,
    pub property: Identifier,
}

// ============================================================================
// Classes
// ============================================================================

/// Shared by class declarations and class expressions.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Class {
    #[serde(flatten)]
    pub data: NodeData,
    pub id: Option<Identifier>,
    pub super_class: Option<Expression>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub super_type_arguments: Option<Box<TSTypeParameterInstantiation>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub implements: Vec<TSClassImplements>,
    pub body: ClassBody,
    #[serde(rename = "abstract", skip_serializing_if = "is_false")]
    pub is_abstract: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub declare: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub decorators: Vec<Decorator>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_parameters: Option<Box<TSTypeParameterDeclaration>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassBody {
    #[serde(flatten)]
    pub data: NodeData,
    pub body: Vec<ClassElement>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ClassElement {
    MethodDefinition(Box<MethodDefinition>),
    PropertyDefinition(Box<PropertyDefinition>),
    StaticBlock(Box<StaticBlock>),
    TSIndexSignature(Box<TSIndexSignature>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MethodKind {
    Constructor,
    Method,
    Get,
    Set,
}

/// A class method; `TSAbstractMethodDefinition` shares this shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MethodDefinition {
    #[serde(flatten)]
    pub data: NodeData,
    pub key: Expression,
    pub value: Function,
    pub kind: MethodKind,
    pub computed: bool,
    #[serde(rename = "static")]
    pub is_static: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub optional: bool,
    #[serde(rename = "override", skip_serializing_if = "is_false")]
    pub is_override: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accessibility: Option<Accessibility>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub decorators: Vec<Decorator>,
}

/// A class field; `AccessorProperty` and the abstract variants share this shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDefinition {
    #[serde(flatten)]
    pub data: NodeData,
    pub key: Expression,
    pub value: Option<Expression>,
    pub computed: bool,
    #[serde(rename = "static")]
    pub is_static: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub declare: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub readonly: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub optional: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub definite: bool,
    #[serde(rename = "override", skip_serializing_if = "is_false")]
    pub is_override: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accessibility: Option<Accessibility>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_annotation: Option<Box<TSTypeAnnotation>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub decorators: Vec<Decorator>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StaticBlock {
    #[serde(flatten)]
    pub data: NodeData,
    pub body: Vec<Statement>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Decorator {
    #[serde(flatten)]
    pub data: NodeData,
    pub expression: Expression,
}

// ============================================================================
// Patterns
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Pattern {
    Identifier(Box<Identifier>),
    ObjectPattern(Box<ObjectPattern>),
    ArrayPattern(Box<ArrayPattern>),
    RestElement(Box<RestElement>),
    AssignmentPattern(Box<AssignmentPattern>),
    /// A member expression (or TS wrapper of one) used as an assignment target.
    Expression(Box<Expression>),
}

impl Pattern {
    /// The type annotation slot of a binding pattern, if it has one.
    pub fn type_annotation_mut(&mut self) -> Option<&mut Option<Box<TSTypeAnnotation>>> {
        match self {
            Pattern::Identifier(id) => Some(&mut id.type_annotation),
            Pattern::ObjectPattern(p) => Some(&mut p.type_annotation),
            Pattern::ArrayPattern(p) => Some(&mut p.type_annotation),
            Pattern::RestElement(p) => Some(&mut p.type_annotation),
            Pattern::AssignmentPattern(p) => Some(&mut p.type_annotation),
            Pattern::Expression(_) => None,
        }
    }

    /// The optional (`?`) flag of a binding pattern, if it has one.
    pub fn optional_mut(&mut self) -> Option<&mut bool> {
        match self {
            Pattern::Identifier(id) => Some(&mut id.optional),
            Pattern::ObjectPattern(p) => Some(&mut p.optional),
            Pattern::ArrayPattern(p) => Some(&mut p.optional),
            Pattern::RestElement(p) => Some(&mut p.optional),
            Pattern::AssignmentPattern(p) => Some(&mut p.optional),
            Pattern::Expression(_) => None,
        }
    }

    /// The decorators of a parameter pattern, if it has a decorator list.
    pub fn decorators_mut(&mut self) -> Option<&mut Vec<Decorator>> {
        match self {
            Pattern::Identifier(id) => Some(&mut id.decorators),
            Pattern::ObjectPattern(p) => Some(&mut p.decorators),
            Pattern::ArrayPattern(p) => Some(&mut p.decorators),
            Pattern::RestElement(p) => Some(&mut p.decorators),
            Pattern::AssignmentPattern(p) => Some(&mut p.decorators),
            Pattern::Expression(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectPattern {
    #[serde(flatten)]
    pub data: NodeData,
    pub properties: Vec<ObjectPatternProperty>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub decorators: Vec<Decorator>,
    #[serde(skip_serializing_if = "is_false")]
    pub optional: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_annotation: Option<Box<TSTypeAnnotation>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ObjectPatternProperty {
    Property(Box<AssignmentProperty>),
    Rest(Box<RestElement>),
}

/// A `Property` inside an object pattern; its value is a pattern.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssignmentProperty {
    #[serde(flatten)]
    pub data: NodeData,
    pub key: Expression,
    pub value: Pattern,
    pub kind: PropertyKind,
    pub method: bool,
    pub shorthand: bool,
    pub computed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArrayPattern {
    #[serde(flatten)]
    pub data: NodeData,
    pub elements: Vec<Option<Pattern>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub decorators: Vec<Decorator>,
    #[serde(skip_serializing_if = "is_false")]
    pub optional: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_annotation: Option<Box<TSTypeAnnotation>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RestElement {
    #[serde(flatten)]
    pub data: NodeData,
    pub argument: Pattern,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub decorators: Vec<Decorator>,
    #[serde(skip_serializing_if = "is_false")]
    pub optional: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_annotation: Option<Box<TSTypeAnnotation>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentPattern {
    #[serde(flatten)]
    pub data: NodeData,
    pub left: Pattern,
    pub right: Expression,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub decorators: Vec<Decorator>,
    #[serde(skip_serializing_if = "is_false")]
    pub optional: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_annotation: Option<Box<TSTypeAnnotation>>,
}

// ============================================================================
// Statements
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Statement {
    ExpressionStatement(Box<ExpressionStatement>),
    BlockStatement(Box<BlockStatement>),
    EmptyStatement(Box<EmptyNode>),
    DebuggerStatement(Box<EmptyNode>),
    WithStatement(Box<WithStatement>),
    ReturnStatement(Box<ReturnStatement>),
    LabeledStatement(Box<LabeledStatement>),
    BreakStatement(Box<BreakStatement>),
    ContinueStatement(Box<ContinueStatement>),
    IfStatement(Box<IfStatement>),
    SwitchStatement(Box<SwitchStatement>),
    ThrowStatement(Box<ThrowStatement>),
    TryStatement(Box<TryStatement>),
    WhileStatement(Box<WhileStatement>),
    DoWhileStatement(Box<DoWhileStatement>),
    ForStatement(Box<ForStatement>),
    ForInStatement(Box<ForInStatement>),
    ForOfStatement(Box<ForOfStatement>),
    FunctionDeclaration(Box<Function>),
    VariableDeclaration(Box<VariableDeclaration>),
    ClassDeclaration(Box<Class>),
    ImportDeclaration(Box<ImportDeclaration>),
    ExportNamedDeclaration(Box<ExportNamedDeclaration>),
    ExportDefaultDeclaration(Box<ExportDefaultDeclaration>),
    ExportAllDeclaration(Box<ExportAllDeclaration>),
    TSDeclareFunction(Box<Function>),
    TSInterfaceDeclaration(Box<TSInterfaceDeclaration>),
    TSTypeAliasDeclaration(Box<TSTypeAliasDeclaration>),
    TSEnumDeclaration(Box<TSEnumDeclaration>),
    TSModuleDeclaration(Box<TSModuleDeclaration>),
    TSImportEqualsDeclaration(Box<TSImportEqualsDeclaration>),
    TSExportAssignment(Box<TSExportAssignment>),
    TSNamespaceExportDeclaration(Box<TSNamespaceExportDeclaration>),
}

impl Statement {
    /// Whether this statement is a declaration that may follow `export`.
    pub fn is_declaration(&self) -> bool {
        matches!(
            self,
            Statement::FunctionDeclaration(_)
                | Statement::VariableDeclaration(_)
                | Statement::ClassDeclaration(_)
                | Statement::TSDeclareFunction(_)
                | Statement::TSInterfaceDeclaration(_)
                | Statement::TSTypeAliasDeclaration(_)
                | Statement::TSEnumDeclaration(_)
                | Statement::TSModuleDeclaration(_)
                | Statement::TSImportEqualsDeclaration(_)
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpressionStatement {
    #[serde(flatten)]
    pub data: NodeData,
    pub expression: Expression,
    /// The raw string of a directive prologue entry (`"use strict"`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directive: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlockStatement {
    #[serde(flatten)]
    pub data: NodeData,
    pub body: Vec<Statement>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WithStatement {
    #[serde(flatten)]
    pub data: NodeData,
    pub object: Expression,
    pub body: Statement,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReturnStatement {
    #[serde(flatten)]
    pub data: NodeData,
    pub argument: Option<Expression>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabeledStatement {
    #[serde(flatten)]
    pub data: NodeData,
    pub label: Identifier,
    pub body: Statement,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BreakStatement {
    #[serde(flatten)]
    pub data: NodeData,
    pub label: Option<Identifier>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContinueStatement {
    #[serde(flatten)]
    pub data: NodeData,
    pub label: Option<Identifier>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IfStatement {
    #[serde(flatten)]
    pub data: NodeData,
    pub test: Expression,
    pub consequent: Statement,
    pub alternate: Option<Statement>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SwitchStatement {
    #[serde(flatten)]
    pub data: NodeData,
    pub discriminant: Expression,
    pub cases: Vec<SwitchCase>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SwitchCase {
    #[serde(flatten)]
    pub data: NodeData,
    /// `None` for the `default` clause.
    pub test: Option<Expression>,
    pub consequent: Vec<Statement>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThrowStatement {
    #[serde(flatten)]
    pub data: NodeData,
    pub argument: Expression,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TryStatement {
    #[serde(flatten)]
    pub data: NodeData,
    pub block: BlockStatement,
    pub handler: Option<CatchClause>,
    pub finalizer: Option<BlockStatement>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatchClause {
    #[serde(flatten)]
    pub data: NodeData,
    pub param: Option<Pattern>,
    pub body: BlockStatement,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WhileStatement {
    #[serde(flatten)]
    pub data: NodeData,
    pub test: Expression,
    pub body: Statement,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DoWhileStatement {
    #[serde(flatten)]
    pub data: NodeData,
    pub body: Statement,
    pub test: Expression,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ForInit {
    VariableDeclaration(Box<VariableDeclaration>),
    Expression(Expression),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ForLeft {
    VariableDeclaration(Box<VariableDeclaration>),
    Pattern(Pattern),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForStatement {
    #[serde(flatten)]
    pub data: NodeData,
    pub init: Option<ForInit>,
    pub test: Option<Expression>,
    pub update: Option<Expression>,
    pub body: Statement,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForInStatement {
    #[serde(flatten)]
    pub data: NodeData,
    pub left: ForLeft,
    pub right: Expression,
    pub body: Statement,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForOfStatement {
    #[serde(flatten)]
    pub data: NodeData,
    pub left: ForLeft,
    pub right: Expression,
    pub body: Statement,
    #[serde(rename = "await")]
    pub is_await: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum VariableKind {
    #[serde(rename = "var")]
    Var,
    #[serde(rename = "let")]
    Let,
    #[serde(rename = "const")]
    Const,
    #[serde(rename = "using")]
    Using,
    #[serde(rename = "await using")]
    AwaitUsing,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VariableDeclaration {
    #[serde(flatten)]
    pub data: NodeData,
    pub declarations: Vec<VariableDeclarator>,
    pub kind: VariableKind,
    #[serde(skip_serializing_if = "is_false")]
    pub declare: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VariableDeclarator {
    #[serde(flatten)]
    pub data: NodeData,
    pub id: Pattern,
    pub init: Option<Expression>,
    #[serde(skip_serializing_if = "is_false")]
    pub definite: bool,
}

// ============================================================================
// Modules
// ============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ImportOrExportKind {
    #[default]
    Value,
    Type,
}

/// An imported or exported name: an identifier or a string literal.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ModuleExportName {
    Identifier(Box<Identifier>),
    Literal(Box<Literal>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportDeclaration {
    #[serde(flatten)]
    pub data: NodeData,
    pub specifiers: Vec<ImportDeclarationSpecifier>,
    pub source: Literal,
    pub import_kind: ImportOrExportKind,
    pub attributes: Vec<ImportAttribute>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ImportDeclarationSpecifier {
    ImportSpecifier(Box<ImportSpecifier>),
    ImportDefaultSpecifier(Box<ImportDefaultSpecifier>),
    ImportNamespaceSpecifier(Box<ImportNamespaceSpecifier>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportSpecifier {
    #[serde(flatten)]
    pub data: NodeData,
    pub imported: ModuleExportName,
    pub local: Identifier,
    pub import_kind: ImportOrExportKind,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImportDefaultSpecifier {
    #[serde(flatten)]
    pub data: NodeData,
    pub local: Identifier,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImportNamespaceSpecifier {
    #[serde(flatten)]
    pub data: NodeData,
    pub local: Identifier,
}

/// One `key: "value"` entry of a `with { ... }` / `assert { ... }` clause.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImportAttribute {
    #[serde(flatten)]
    pub data: NodeData,
    pub key: ModuleExportName,
    pub value: Literal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportNamedDeclaration {
    #[serde(flatten)]
    pub data: NodeData,
    pub declaration: Option<Statement>,
    pub specifiers: Vec<ExportSpecifier>,
    pub source: Option<Literal>,
    pub export_kind: ImportOrExportKind,
    pub attributes: Vec<ImportAttribute>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportSpecifier {
    #[serde(flatten)]
    pub data: NodeData,
    pub local: ModuleExportName,
    pub exported: ModuleExportName,
    pub export_kind: ImportOrExportKind,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ExportDefaultKind {
    Declaration(Statement),
    Expression(Expression),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDefaultDeclaration {
    #[serde(flatten)]
    pub data: NodeData,
    pub declaration: ExportDefaultKind,
    pub export_kind: ImportOrExportKind,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportAllDeclaration {
    #[serde(flatten)]
    pub data: NodeData,
    pub exported: Option<ModuleExportName>,
    pub source: Literal,
    pub export_kind: ImportOrExportKind,
    pub attributes: Vec<ImportAttribute>,
}

// ============================================================================
// Node impls
// ============================================================================

impl_node!(
    EmptyNode,
    Program,
    Identifier,
    PrivateIdentifier,
    Literal,
    SpreadElement,
    ArrayExpression,
    ObjectExpression,
    Property,
    Function,
    ArrowFunctionExpression,
    TemplateElement,
    TemplateLiteral,
    TaggedTemplateExpression,
    UnaryExpression,
    UpdateExpression,
    BinaryExpression,
    LogicalExpression,
    AssignmentExpression,
    ConditionalExpression,
    CallExpression,
    NewExpression,
    MemberExpression,
    ChainExpression,
    SequenceExpression,
    YieldExpression,
    AwaitExpression,
    ImportExpression,
    MetaProperty,
    Class,
    ClassBody,
    MethodDefinition,
    PropertyDefinition,
    StaticBlock,
    Decorator,
    ObjectPattern,
    AssignmentProperty,
    ArrayPattern,
    RestElement,
    AssignmentPattern,
    ExpressionStatement,
    BlockStatement,
    WithStatement,
    ReturnStatement,
    LabeledStatement,
    BreakStatement,
    ContinueStatement,
    IfStatement,
    SwitchStatement,
    SwitchCase,
    ThrowStatement,
    TryStatement,
    CatchClause,
    WhileStatement,
    DoWhileStatement,
    ForStatement,
    ForInStatement,
    ForOfStatement,
    VariableDeclaration,
    VariableDeclarator,
    ImportDeclaration,
    ImportSpecifier,
    ImportDefaultSpecifier,
    ImportNamespaceSpecifier,
    ImportAttribute,
    ExportNamedDeclaration,
    ExportSpecifier,
    ExportDefaultDeclaration,
    ExportAllDeclaration,
);

impl_node_enum!(Expression {
    Identifier,
    PrivateIdentifier,
    Literal,
    ThisExpression,
    Super,
    ArrayExpression,
    ObjectExpression,
    FunctionExpression,
    ArrowFunctionExpression,
    ClassExpression,
    TemplateLiteral,
    TaggedTemplateExpression,
    UnaryExpression,
    UpdateExpression,
    BinaryExpression,
    LogicalExpression,
    AssignmentExpression,
    ConditionalExpression,
    CallExpression,
    NewExpression,
    MemberExpression,
    ChainExpression,
    SequenceExpression,
    YieldExpression,
    AwaitExpression,
    ImportExpression,
    MetaProperty,
    JSXElement,
    JSXFragment,
    TSAsExpression,
    TSSatisfiesExpression,
    TSTypeAssertion,
    TSNonNullExpression,
    TSInstantiationExpression,
});

impl_node_enum!(ExpressionOrSpread { Spread, Expression });
impl_node_enum!(ObjectProperty { Property, Spread });
impl_node_enum!(Parameter { Pattern, TSParameterProperty });
impl_node_enum!(ArrowBody { Block, Expression });
impl_node_enum!(ClassElement {
    MethodDefinition,
    PropertyDefinition,
    StaticBlock,
    TSIndexSignature,
});
impl_node_enum!(Pattern {
    Identifier,
    ObjectPattern,
    ArrayPattern,
    RestElement,
    AssignmentPattern,
    Expression,
});
impl_node_enum!(ObjectPatternProperty { Property, Rest });
impl_node_enum!(Statement {
    ExpressionStatement,
    BlockStatement,
    EmptyStatement,
    DebuggerStatement,
    WithStatement,
    ReturnStatement,
    LabeledStatement,
    BreakStatement,
    ContinueStatement,
    IfStatement,
    SwitchStatement,
    ThrowStatement,
    TryStatement,
    WhileStatement,
    DoWhileStatement,
    ForStatement,
    ForInStatement,
    ForOfStatement,
    FunctionDeclaration,
    VariableDeclaration,
    ClassDeclaration,
    ImportDeclaration,
    ExportNamedDeclaration,
    ExportDefaultDeclaration,
    ExportAllDeclaration,
    TSDeclareFunction,
    TSInterfaceDeclaration,
    TSTypeAliasDeclaration,
    TSEnumDeclaration,
    TSModuleDeclaration,
    TSImportEqualsDeclaration,
    TSExportAssignment,
    TSNamespaceExportDeclaration,
});
impl_node_enum!(ForInit { VariableDeclaration, Expression });
impl_node_enum!(ForLeft { VariableDeclaration, Pattern });
impl_node_enum!(ModuleExportName { Identifier, Literal });
impl_node_enum!(ImportDeclarationSpecifier {
    ImportSpecifier,
    ImportDefaultSpecifier,
    ImportNamespaceSpecifier,
});
impl_node_enum!(ExportDefaultKind { Declaration, Expression });

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_serialization() {
        let id = Identifier::new("foo", TextRange::new(0, 3));
        let json = serde_json::to_value(&id).unwrap();
        assert_eq!(json, serde_json::json!({ "type": "Identifier", "name": "foo" }));
    }

    #[test]
    fn test_range_and_loc_are_optional() {
        let mut id = Identifier::new("x", TextRange::new(4, 5));
        id.data.range = Some(id.data.span);
        let json = serde_json::to_value(&id).unwrap();
        assert_eq!(json["range"], serde_json::json!([4, 5]));
        assert!(json.get("loc").is_none());
    }

    #[test]
    fn test_integral_numbers_serialize_without_fraction() {
        let literal = Literal {
            data: NodeData::new(NodeKind::Literal, TextRange::new(0, 1)),
            value: LiteralValue::Number(1.0),
            raw: "1".into(),
            regex: None,
            bigint: None,
        };
        assert_eq!(serde_json::to_string(&literal.value).unwrap(), "1");
        assert_eq!(serde_json::to_string(&LiteralValue::Number(0.5)).unwrap(), "0.5");
        assert_eq!(serde_json::to_string(&LiteralValue::Null).unwrap(), "null");
    }

    #[test]
    fn test_untagged_category_uses_node_type() {
        let expr = Expression::ThisExpression(Box::new(EmptyNode::new(
            NodeKind::ThisExpression,
            TextRange::new(0, 4),
        )));
        assert_eq!(expr.kind(), NodeKind::ThisExpression);
        let json = serde_json::to_value(&expr).unwrap();
        assert_eq!(json, serde_json::json!({ "type": "ThisExpression" }));
    }
}
