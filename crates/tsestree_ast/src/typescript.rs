//! TypeScript-specific nodes: type annotations, the type grammar, TS
//! declarations and TS expression wrappers.

use crate::node::*;
use serde::{Serialize, Serializer};

// ============================================================================
// Annotations and type parameters
// ============================================================================

/// `: Type`; the span includes the leading colon (or `=>` for function types).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TSTypeAnnotation {
    #[serde(flatten)]
    pub data: NodeData,
    pub type_annotation: TsType,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TSTypeParameterDeclaration {
    #[serde(flatten)]
    pub data: NodeData,
    pub params: Vec<TSTypeParameter>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TSTypeParameter {
    #[serde(flatten)]
    pub data: NodeData,
    pub name: Identifier,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub constraint: Option<TsType>,
    #[serde(rename = "default", skip_serializing_if = "Option::is_none")]
    pub default_type: Option<TsType>,
    #[serde(rename = "in", skip_serializing_if = "is_false")]
    pub is_in: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub out: bool,
    #[serde(rename = "const", skip_serializing_if = "is_false")]
    pub is_const: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TSTypeParameterInstantiation {
    #[serde(flatten)]
    pub data: NodeData,
    pub params: Vec<TsType>,
}

// ============================================================================
// Types
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TsType {
    /// `any`, `string`, `void`, `null`, ...; the node kind names the keyword.
    Keyword(Box<EmptyNode>),
    TSThisType(Box<EmptyNode>),
    TSTypeReference(Box<TSTypeReference>),
    TSUnionType(Box<TSUnionType>),
    TSIntersectionType(Box<TSIntersectionType>),
    TSArrayType(Box<TSArrayType>),
    TSTupleType(Box<TSTupleType>),
    TSOptionalType(Box<TSOptionalType>),
    TSRestType(Box<TSRestType>),
    TSNamedTupleMember(Box<TSNamedTupleMember>),
    TSFunctionType(Box<TSFunctionType>),
    TSConstructorType(Box<TSFunctionType>),
    TSTypeLiteral(Box<TSTypeLiteral>),
    TSTypeQuery(Box<TSTypeQuery>),
    TSImportType(Box<TSImportType>),
    TSLiteralType(Box<TSLiteralType>),
    TSTemplateLiteralType(Box<TSTemplateLiteralType>),
    TSTypeOperator(Box<TSTypeOperator>),
    TSIndexedAccessType(Box<TSIndexedAccessType>),
    TSConditionalType(Box<TSConditionalType>),
    TSInferType(Box<TSInferType>),
    TSMappedType(Box<TSMappedType>),
    TSTypePredicate(Box<TSTypePredicate>),
}

/// A possibly qualified name in type position (`A`, `A.B.C`, `this.x`).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TsEntityName {
    Identifier(Box<Identifier>),
    TSQualifiedName(Box<TSQualifiedName>),
    ThisExpression(Box<EmptyNode>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TSQualifiedName {
    #[serde(flatten)]
    pub data: NodeData,
    pub left: TsEntityName,
    pub right: Identifier,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TSTypeReference {
    #[serde(flatten)]
    pub data: NodeData,
    pub type_name: TsEntityName,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_arguments: Option<Box<TSTypeParameterInstantiation>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TSUnionType {
    #[serde(flatten)]
    pub data: NodeData,
    pub types: Vec<TsType>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TSIntersectionType {
    #[serde(flatten)]
    pub data: NodeData,
    pub types: Vec<TsType>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TSArrayType {
    #[serde(flatten)]
    pub data: NodeData,
    pub element_type: TsType,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TSTupleType {
    #[serde(flatten)]
    pub data: NodeData,
    pub element_types: Vec<TsType>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TSOptionalType {
    #[serde(flatten)]
    pub data: NodeData,
    pub type_annotation: TsType,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TSRestType {
    #[serde(flatten)]
    pub data: NodeData,
    pub type_annotation: TsType,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TSNamedTupleMember {
    #[serde(flatten)]
    pub data: NodeData,
    pub label: Identifier,
    pub element_type: TsType,
    pub optional: bool,
}

/// A function type or (possibly abstract) constructor type.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TSFunctionType {
    #[serde(flatten)]
    pub data: NodeData,
    pub params: Vec<Parameter>,
    pub return_type: Option<Box<TSTypeAnnotation>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_parameters: Option<Box<TSTypeParameterDeclaration>>,
    #[serde(rename = "abstract", skip_serializing_if = "is_false")]
    pub is_abstract: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TSTypeLiteral {
    #[serde(flatten)]
    pub data: NodeData,
    pub members: Vec<TypeElement>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TypeQueryName {
    EntityName(TsEntityName),
    TSImportType(Box<TSImportType>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TSTypeQuery {
    #[serde(flatten)]
    pub data: NodeData,
    pub expr_name: TypeQueryName,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_arguments: Option<Box<TSTypeParameterInstantiation>>,
}

/// `import("mod").A.B<T>`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TSImportType {
    #[serde(flatten)]
    pub data: NodeData,
    pub argument: TsType,
    pub qualifier: Option<TsEntityName>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_arguments: Option<Box<TSTypeParameterInstantiation>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum LiteralTypeValue {
    Literal(Box<Literal>),
    /// A negative numeric literal type (`-1`).
    UnaryExpression(Box<UnaryExpression>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TSLiteralType {
    #[serde(flatten)]
    pub data: NodeData,
    pub literal: LiteralTypeValue,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TSTemplateLiteralType {
    #[serde(flatten)]
    pub data: NodeData,
    pub quasis: Vec<TemplateElement>,
    pub types: Vec<TsType>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeOperatorKind {
    Keyof,
    Unique,
    Readonly,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TSTypeOperator {
    #[serde(flatten)]
    pub data: NodeData,
    pub operator: TypeOperatorKind,
    pub type_annotation: TsType,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TSIndexedAccessType {
    #[serde(flatten)]
    pub data: NodeData,
    pub object_type: TsType,
    pub index_type: TsType,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TSConditionalType {
    #[serde(flatten)]
    pub data: NodeData,
    pub check_type: TsType,
    pub extends_type: TsType,
    pub true_type: TsType,
    pub false_type: TsType,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TSInferType {
    #[serde(flatten)]
    pub data: NodeData,
    pub type_parameter: TSTypeParameter,
}

/// The `readonly` / `?` modifier of a mapped type: bare, `+` or `-`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MappedTypeModifier {
    True,
    Plus,
    Minus,
}

impl Serialize for MappedTypeModifier {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            MappedTypeModifier::True => serializer.serialize_bool(true),
            MappedTypeModifier::Plus => serializer.serialize_str("+"),
            MappedTypeModifier::Minus => serializer.serialize_str("-"),
        }
    }
}

/// `{ readonly [K in T as N]?: U }`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TSMappedType {
    #[serde(flatten)]
    pub data: NodeData,
    pub type_parameter: TSTypeParameter,
    pub name_type: Option<TsType>,
    pub type_annotation: Option<TsType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub optional: Option<MappedTypeModifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub readonly: Option<MappedTypeModifier>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TypePredicateName {
    Identifier(Box<Identifier>),
    TSThisType(Box<EmptyNode>),
}

/// `x is T`, `asserts x is T`, `asserts x`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TSTypePredicate {
    #[serde(flatten)]
    pub data: NodeData,
    pub asserts: bool,
    pub parameter_name: TypePredicateName,
    pub type_annotation: Option<Box<TSTypeAnnotation>>,
}

// ============================================================================
// Type elements (members of type literals and interfaces)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TypeElement {
    TSPropertySignature(Box<TSPropertySignature>),
    TSMethodSignature(Box<TSMethodSignature>),
    TSIndexSignature(Box<TSIndexSignature>),
    TSCallSignatureDeclaration(Box<TSSignatureDeclaration>),
    TSConstructSignatureDeclaration(Box<TSSignatureDeclaration>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TSPropertySignature {
    #[serde(flatten)]
    pub data: NodeData,
    pub key: Expression,
    pub computed: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub optional: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub readonly: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_annotation: Option<Box<TSTypeAnnotation>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TSMethodSignature {
    #[serde(flatten)]
    pub data: NodeData,
    pub key: Expression,
    pub computed: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub optional: bool,
    pub kind: MethodKind,
    pub params: Vec<Parameter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_type: Option<Box<TSTypeAnnotation>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_parameters: Option<Box<TSTypeParameterDeclaration>>,
}

/// `[key: string]: T` in a type literal, interface or class body.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TSIndexSignature {
    #[serde(flatten)]
    pub data: NodeData,
    pub parameters: Vec<Identifier>,
    pub type_annotation: Option<Box<TSTypeAnnotation>>,
    #[serde(skip_serializing_if = "is_false")]
    pub readonly: bool,
    #[serde(rename = "static", skip_serializing_if = "is_false")]
    pub is_static: bool,
}

/// A call (`(x): T`) or construct (`new (x): T`) signature.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TSSignatureDeclaration {
    #[serde(flatten)]
    pub data: NodeData,
    pub params: Vec<Parameter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_type: Option<Box<TSTypeAnnotation>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_parameters: Option<Box<TSTypeParameterDeclaration>>,
}

// ============================================================================
// Declarations
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Accessibility {
    Public,
    Private,
    Protected,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TSInterfaceDeclaration {
    #[serde(flatten)]
    pub data: NodeData,
    pub id: Identifier,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_parameters: Option<Box<TSTypeParameterDeclaration>>,
    pub extends: Vec<TSInterfaceHeritage>,
    pub body: TSInterfaceBody,
    #[serde(skip_serializing_if = "is_false")]
    pub declare: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TSInterfaceBody {
    #[serde(flatten)]
    pub data: NodeData,
    pub body: Vec<TypeElement>,
}

/// An entry of an interface `extends` list or a class `implements` list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TSInterfaceHeritage {
    #[serde(flatten)]
    pub data: NodeData,
    pub expression: Expression,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_arguments: Option<Box<TSTypeParameterInstantiation>>,
}

pub type TSClassImplements = TSInterfaceHeritage;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TSTypeAliasDeclaration {
    #[serde(flatten)]
    pub data: NodeData,
    pub id: Identifier,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_parameters: Option<Box<TSTypeParameterDeclaration>>,
    pub type_annotation: TsType,
    #[serde(skip_serializing_if = "is_false")]
    pub declare: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TSEnumDeclaration {
    #[serde(flatten)]
    pub data: NodeData,
    pub id: Identifier,
    pub members: Vec<TSEnumMember>,
    #[serde(rename = "const", skip_serializing_if = "is_false")]
    pub is_const: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub declare: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TSEnumMember {
    #[serde(flatten)]
    pub data: NodeData,
    /// An identifier or string literal; a computed name for `["x"]`.
    pub id: Expression,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initializer: Option<Expression>,
    #[serde(skip_serializing_if = "is_false")]
    pub computed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ModuleDeclarationKind {
    Global,
    Module,
    Namespace,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TSModuleName {
    Identifier(Box<Identifier>),
    Literal(Box<Literal>),
}

/// The body of a namespace: a block, or the next declaration of a dotted
/// name (`namespace A.B {}` nests `B` inside `A`).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TSModuleBody {
    TSModuleBlock(Box<TSModuleBlock>),
    TSModuleDeclaration(Box<TSModuleDeclaration>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TSModuleDeclaration {
    #[serde(flatten)]
    pub data: NodeData,
    pub id: TSModuleName,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<TSModuleBody>,
    pub kind: ModuleDeclarationKind,
    #[serde(skip_serializing_if = "is_false")]
    pub declare: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub global: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TSModuleBlock {
    #[serde(flatten)]
    pub data: NodeData,
    pub body: Vec<Statement>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TSModuleReference {
    EntityName(TsEntityName),
    TSExternalModuleReference(Box<TSExternalModuleReference>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TSExternalModuleReference {
    #[serde(flatten)]
    pub data: NodeData,
    pub expression: Literal,
}

/// `import x = require("y")` / `import x = A.B`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TSImportEqualsDeclaration {
    #[serde(flatten)]
    pub data: NodeData,
    pub id: Identifier,
    pub module_reference: TSModuleReference,
    pub import_kind: ImportOrExportKind,
    pub is_export: bool,
}

/// `export = expr`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TSExportAssignment {
    #[serde(flatten)]
    pub data: NodeData,
    pub expression: Expression,
}

/// `export as namespace X`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TSNamespaceExportDeclaration {
    #[serde(flatten)]
    pub data: NodeData,
    pub id: Identifier,
}

/// A constructor parameter with an accessibility or `readonly` modifier.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TSParameterProperty {
    #[serde(flatten)]
    pub data: NodeData,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accessibility: Option<Accessibility>,
    pub readonly: bool,
    #[serde(rename = "static")]
    pub is_static: bool,
    #[serde(rename = "override")]
    pub is_override: bool,
    pub parameter: Pattern,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub decorators: Vec<Decorator>,
}

// ============================================================================
// Expressions
// ============================================================================

/// `expr as T`; `expr satisfies T` shares this shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TSAsExpression {
    #[serde(flatten)]
    pub data: NodeData,
    pub expression: Expression,
    pub type_annotation: TsType,
}

pub type TSSatisfiesExpression = TSAsExpression;

/// `<T>expr`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TSTypeAssertion {
    #[serde(flatten)]
    pub data: NodeData,
    pub type_annotation: TsType,
    pub expression: Expression,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TSNonNullExpression {
    #[serde(flatten)]
    pub data: NodeData,
    pub expression: Expression,
}

/// `f<T>` without a call.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TSInstantiationExpression {
    #[serde(flatten)]
    pub data: NodeData,
    pub expression: Expression,
    pub type_arguments: TSTypeParameterInstantiation,
}

// ============================================================================
// Node impls
// ============================================================================

impl_node!(
    TSTypeAnnotation,
    TSTypeParameterDeclaration,
    TSTypeParameter,
    TSTypeParameterInstantiation,
    TSQualifiedName,
    TSTypeReference,
    TSUnionType,
    TSIntersectionType,
    TSArrayType,
    TSTupleType,
    TSOptionalType,
    TSRestType,
    TSNamedTupleMember,
    TSFunctionType,
    TSTypeLiteral,
    TSTypeQuery,
    TSImportType,
    TSLiteralType,
    TSTemplateLiteralType,
    TSTypeOperator,
    TSIndexedAccessType,
    TSConditionalType,
    TSInferType,
    TSMappedType,
    TSTypePredicate,
    TSPropertySignature,
    TSMethodSignature,
    TSIndexSignature,
    TSSignatureDeclaration,
    TSInterfaceDeclaration,
    TSInterfaceBody,
    TSInterfaceHeritage,
    TSTypeAliasDeclaration,
    TSEnumDeclaration,
    TSEnumMember,
    TSModuleDeclaration,
    TSModuleBlock,
    TSExternalModuleReference,
    TSImportEqualsDeclaration,
    TSExportAssignment,
    TSNamespaceExportDeclaration,
    TSParameterProperty,
    TSAsExpression,
    TSTypeAssertion,
    TSNonNullExpression,
    TSInstantiationExpression,
);

impl_node_enum!(TsType {
    Keyword,
    TSThisType,
    TSTypeReference,
    TSUnionType,
    TSIntersectionType,
    TSArrayType,
    TSTupleType,
    TSOptionalType,
    TSRestType,
    TSNamedTupleMember,
    TSFunctionType,
    TSConstructorType,
    TSTypeLiteral,
    TSTypeQuery,
    TSImportType,
    TSLiteralType,
    TSTemplateLiteralType,
    TSTypeOperator,
    TSIndexedAccessType,
    TSConditionalType,
    TSInferType,
    TSMappedType,
    TSTypePredicate,
});
impl_node_enum!(TsEntityName { Identifier, TSQualifiedName, ThisExpression });
impl_node_enum!(TypeQueryName { EntityName, TSImportType });
impl_node_enum!(LiteralTypeValue { Literal, UnaryExpression });
impl_node_enum!(TypePredicateName { Identifier, TSThisType });
impl_node_enum!(TypeElement {
    TSPropertySignature,
    TSMethodSignature,
    TSIndexSignature,
    TSCallSignatureDeclaration,
    TSConstructSignatureDeclaration,
});
impl_node_enum!(TSModuleName { Identifier, Literal });
impl_node_enum!(TSModuleBody { TSModuleBlock, TSModuleDeclaration });
impl_node_enum!(TSModuleReference { EntityName, TSExternalModuleReference });

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node_kind::NodeKind;
    use tsestree_core::text::TextRange;

    #[test]
    fn test_mapped_modifier_serialization() {
        assert_eq!(serde_json::to_string(&MappedTypeModifier::True).unwrap(), "true");
        assert_eq!(serde_json::to_string(&MappedTypeModifier::Minus).unwrap(), "\"-\"");
    }

    #[test]
    fn test_keyword_type_serializes_its_kind() {
        let ty = TsType::Keyword(Box::new(EmptyNode::new(
            NodeKind::TSStringKeyword,
            TextRange::new(0, 6),
        )));
        assert_eq!(ty.kind(), NodeKind::TSStringKeyword);
        let json = serde_json::to_value(&ty).unwrap();
        assert_eq!(json, serde_json::json!({ "type": "TSStringKeyword" }));
    }
}
