//! NodeKind enum - the ESTree `type` discriminant of every AST node.

use serde::{Serialize, Serializer};

macro_rules! node_kinds {
    ($($(#[$doc:meta])* $name:ident,)*) => {
        /// The kind of an AST node. Each variant serializes as its own name,
        /// which is the ESTree / typescript-estree `type` string.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum NodeKind {
            $($(#[$doc])* $name,)*
        }

        impl NodeKind {
            /// The ESTree `type` string.
            pub fn as_str(self) -> &'static str {
                match self {
                    $(NodeKind::$name => stringify!($name),)*
                }
            }
        }
    };
}

node_kinds! {
    Program,

    // Names and literals
    Identifier,
    PrivateIdentifier,
    Literal,
    ThisExpression,
    Super,

    // Expressions
    ArrayExpression,
    ObjectExpression,
    Property,
    FunctionExpression,
    ArrowFunctionExpression,
    ClassExpression,
    TemplateLiteral,
    TemplateElement,
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
    SpreadElement,

    // Patterns
    ObjectPattern,
    ArrayPattern,
    RestElement,
    AssignmentPattern,

    // Statements
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
    SwitchCase,
    ThrowStatement,
    TryStatement,
    CatchClause,
    WhileStatement,
    DoWhileStatement,
    ForStatement,
    ForInStatement,
    ForOfStatement,

    // Declarations
    FunctionDeclaration,
    VariableDeclaration,
    VariableDeclarator,
    ClassDeclaration,
    ClassBody,
    MethodDefinition,
    PropertyDefinition,
    AccessorProperty,
    StaticBlock,
    Decorator,

    // Modules
    ImportDeclaration,
    ImportSpecifier,
    ImportDefaultSpecifier,
    ImportNamespaceSpecifier,
    ImportAttribute,
    ExportNamedDeclaration,
    ExportSpecifier,
    ExportDefaultDeclaration,
    ExportAllDeclaration,

    // JSX
    JSXElement,
    JSXOpeningElement,
    JSXClosingElement,
    JSXFragment,
    JSXOpeningFragment,
    JSXClosingFragment,
    JSXIdentifier,
    JSXNamespacedName,
    JSXMemberExpression,
    JSXAttribute,
    JSXSpreadAttribute,
    JSXExpressionContainer,
    JSXEmptyExpression,
    JSXSpreadChild,
    JSXText,

    // TypeScript keyword types
    TSAnyKeyword,
    TSUnknownKeyword,
    TSNumberKeyword,
    TSStringKeyword,
    TSBooleanKeyword,
    TSBigIntKeyword,
    TSSymbolKeyword,
    TSObjectKeyword,
    TSNeverKeyword,
    TSVoidKeyword,
    TSUndefinedKeyword,
    TSNullKeyword,
    TSIntrinsicKeyword,

    // TypeScript types
    TSThisType,
    TSTypeReference,
    TSQualifiedName,
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

    // TypeScript type elements
    TSPropertySignature,
    TSMethodSignature,
    TSIndexSignature,
    TSCallSignatureDeclaration,
    TSConstructSignatureDeclaration,

    // TypeScript annotations and parameters
    TSTypeAnnotation,
    TSTypeParameterDeclaration,
    TSTypeParameter,
    TSTypeParameterInstantiation,

    // TypeScript declarations
    TSInterfaceDeclaration,
    TSInterfaceBody,
    TSInterfaceHeritage,
    TSClassImplements,
    TSTypeAliasDeclaration,
    TSEnumDeclaration,
    TSEnumMember,
    TSModuleDeclaration,
    TSModuleBlock,
    TSImportEqualsDeclaration,
    TSExternalModuleReference,
    TSExportAssignment,
    TSNamespaceExportDeclaration,
    TSDeclareFunction,
    TSEmptyBodyFunctionExpression,
    TSAbstractMethodDefinition,
    TSAbstractPropertyDefinition,
    TSAbstractAccessorProperty,
    TSParameterProperty,

    // TypeScript expressions
    TSAsExpression,
    TSSatisfiesExpression,
    TSTypeAssertion,
    TSNonNullExpression,
    TSInstantiationExpression,
}

impl NodeKind {
    /// Whether this kind is one of the TypeScript keyword types (`TSAnyKeyword` ...).
    pub fn is_keyword_type(self) -> bool {
        matches!(
            self,
            NodeKind::TSAnyKeyword
                | NodeKind::TSUnknownKeyword
                | NodeKind::TSNumberKeyword
                | NodeKind::TSStringKeyword
                | NodeKind::TSBooleanKeyword
                | NodeKind::TSBigIntKeyword
                | NodeKind::TSSymbolKeyword
                | NodeKind::TSObjectKeyword
                | NodeKind::TSNeverKeyword
                | NodeKind::TSVoidKeyword
                | NodeKind::TSUndefinedKeyword
                | NodeKind::TSNullKeyword
                | NodeKind::TSIntrinsicKeyword
        )
    }
}

impl Serialize for NodeKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_names() {
        assert_eq!(NodeKind::JSXElement.as_str(), "JSXElement");
        assert_eq!(NodeKind::TSAsExpression.to_string(), "TSAsExpression");
        assert_eq!(serde_json::to_string(&NodeKind::Program).unwrap(), "\"Program\"");
        assert!(NodeKind::TSNullKeyword.is_keyword_type());
        assert!(!NodeKind::TSThisType.is_keyword_type());
    }
}
