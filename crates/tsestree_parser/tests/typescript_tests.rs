//! TypeScript syntax tests: annotations, declarations and the expression
//! forms that only exist in TypeScript.

use serde_json::Value;
use tsestree_parser::{parse, ParseOptions};

fn program(source: &str) -> Value {
    let output = parse(source, &ParseOptions::default());
    assert!(output.errors.is_empty(), "source: {}\nerrors: {:?}", source, output.errors);
    serde_json::to_value(&output.program).unwrap()
}

fn statement(source: &str) -> Value {
    program(source)["body"][0].clone()
}

fn expression(source: &str) -> Value {
    statement(source)["expression"].clone()
}

fn error_codes(source: &str) -> Vec<u32> {
    parse(source, &ParseOptions::default())
        .errors
        .iter()
        .map(|error| error.code)
        .collect()
}

// ============================================================================
// Annotations
// ============================================================================

#[test]
fn test_variable_annotations() {
    let declaration = statement("let x: number = 1, y!: string;");
    let declarators = &declaration["declarations"];
    assert_eq!(declarators[0]["id"]["typeAnnotation"]["typeAnnotation"]["type"], "TSNumberKeyword");
    assert_eq!(declarators[1]["definite"], true);
    assert_eq!(declarators[1]["id"]["typeAnnotation"]["typeAnnotation"]["type"], "TSStringKeyword");
}

#[test]
fn test_parameter_annotations() {
    let function = statement("function f(this: Window, a?: number, ...rest: string[]): void {}");
    let params = function["params"].as_array().unwrap();
    assert_eq!(params[0]["name"], "this");
    assert_eq!(params[1]["optional"], true);
    assert_eq!(params[2]["type"], "RestElement");
    assert_eq!(params[2]["typeAnnotation"]["typeAnnotation"]["type"], "TSArrayType");
    assert_eq!(function["returnType"]["typeAnnotation"]["type"], "TSVoidKeyword");
}

#[test]
fn test_destructured_parameter_annotation() {
    let function = statement("function f({ a, b }: Options = {}) {}");
    let param = &function["params"][0];
    assert_eq!(param["type"], "AssignmentPattern");
    assert_eq!(param["left"]["type"], "ObjectPattern");
    assert_eq!(param["left"]["typeAnnotation"]["typeAnnotation"]["typeName"]["name"], "Options");
}

#[test]
fn test_type_parameters() {
    let alias = statement("type Box<in out T extends object = {}, const U = T> = [T, U];");
    let params = alias["typeParameters"]["params"].as_array().unwrap();
    assert_eq!(params[0]["in"], true);
    assert_eq!(params[0]["out"], true);
    assert_eq!(params[0]["constraint"]["type"], "TSObjectKeyword");
    assert_eq!(params[0]["default"]["type"], "TSTypeLiteral");
    assert_eq!(params[1]["const"], true);
    assert_eq!(params[1]["name"]["name"], "U");
}

#[test]
fn test_type_operators() {
    let declaration = statement("declare const s: unique symbol;");
    let annotation = &declaration["declarations"][0]["id"]["typeAnnotation"]["typeAnnotation"];
    assert_eq!(annotation["type"], "TSTypeOperator");
    assert_eq!(annotation["operator"], "unique");
    let readonly = statement("let xs: readonly string[];");
    let annotation = &readonly["declarations"][0]["id"]["typeAnnotation"]["typeAnnotation"];
    assert_eq!(annotation["operator"], "readonly");
    assert_eq!(annotation["typeAnnotation"]["type"], "TSArrayType");
}

#[test]
fn test_template_literal_type() {
    let alias = statement("type Key = `on${Capitalize<Name>}Change`;");
    let template = &alias["typeAnnotation"];
    assert_eq!(template["type"], "TSTemplateLiteralType");
    assert_eq!(template["quasis"].as_array().unwrap().len(), 2);
    assert_eq!(template["types"][0]["type"], "TSTypeReference");
}

#[test]
fn test_nested_generic_closers() {
    let alias = statement("type A = Array<Array<Array<number>>>;");
    let inner = &alias["typeAnnotation"]["typeArguments"]["params"][0]["typeArguments"]["params"][0];
    assert_eq!(inner["typeName"]["name"], "Array");
    assert_eq!(inner["typeArguments"]["params"][0]["type"], "TSNumberKeyword");
}

// ============================================================================
// Expressions
// ============================================================================

#[test]
fn test_as_and_satisfies() {
    let as_expression = expression("x as unknown as string;");
    assert_eq!(as_expression["type"], "TSAsExpression");
    assert_eq!(as_expression["expression"]["type"], "TSAsExpression");
    assert_eq!(as_expression["typeAnnotation"]["type"], "TSStringKeyword");

    let as_const = expression("[1, 2] as const;");
    assert_eq!(as_const["typeAnnotation"]["typeName"]["name"], "const");

    let satisfies = expression("config satisfies Config;");
    assert_eq!(satisfies["type"], "TSSatisfiesExpression");
}

#[test]
fn test_as_binds_tighter_than_comparison() {
    let comparison = expression("a as number < b;");
    assert_eq!(comparison["type"], "BinaryExpression");
    assert_eq!(comparison["left"]["type"], "TSAsExpression");
}

#[test]
fn test_as_does_not_continue_after_line_break() {
    let body = program("x\nas\nfoo;")["body"].clone();
    assert_eq!(body.as_array().unwrap().len(), 3);
}

#[test]
fn test_non_null_and_type_assertion() {
    let member = expression("a!.b!;");
    assert_eq!(member["type"], "TSNonNullExpression");
    assert_eq!(member["expression"]["object"]["type"], "TSNonNullExpression");

    let assertion = expression("<string>value;");
    assert_eq!(assertion["type"], "TSTypeAssertion");
    assert_eq!(assertion["typeAnnotation"]["type"], "TSStringKeyword");
}

#[test]
fn test_call_type_arguments() {
    let call = expression("f<string, number>(x);");
    assert_eq!(call["type"], "CallExpression");
    assert_eq!(call["typeArguments"]["params"].as_array().unwrap().len(), 2);

    let construct = expression("new Map<string, number>();");
    assert_eq!(construct["type"], "NewExpression");
    assert_eq!(construct["typeArguments"]["params"][0]["type"], "TSStringKeyword");
}

#[test]
fn test_comparison_is_not_type_arguments() {
    let comparison = expression("a < b > c;");
    assert_eq!(comparison["type"], "BinaryExpression");
    assert_eq!(comparison["operator"], ">");
    assert_eq!(comparison["left"]["operator"], "<");

    let sum = expression("f < T > +1;");
    assert_eq!(sum["type"], "BinaryExpression");
}

#[test]
fn test_instantiation_expression() {
    let declaration = statement("const make = factory<string>;");
    let init = &declaration["declarations"][0]["init"];
    assert_eq!(init["type"], "TSInstantiationExpression");
    assert_eq!(init["expression"]["name"], "factory");
    assert_eq!(init["typeArguments"]["params"][0]["type"], "TSStringKeyword");
}

#[test]
fn test_generic_arrows() {
    let arrow = expression("<T,>(x: T): T => x;");
    assert_eq!(arrow["type"], "ArrowFunctionExpression");
    assert_eq!(arrow["typeParameters"]["params"][0]["name"]["name"], "T");
    assert_eq!(arrow["returnType"]["typeAnnotation"]["typeName"]["name"], "T");

    let async_arrow = expression("async <T>(x: T) => x;");
    assert_eq!(async_arrow["async"], true);
    assert_eq!(async_arrow["typeParameters"]["params"].as_array().unwrap().len(), 1);
}

#[test]
fn test_arrow_with_typed_parameters() {
    let arrow = expression("(a: number, b?: string): void => {};");
    assert_eq!(arrow["params"][0]["typeAnnotation"]["typeAnnotation"]["type"], "TSNumberKeyword");
    assert_eq!(arrow["params"][1]["optional"], true);
    assert_eq!(arrow["expression"], false);
}

// ============================================================================
// Classes
// ============================================================================

#[test]
fn test_parameter_properties() {
    let class = statement("class P { constructor(private readonly x: number, public y = 0, z: string) {} }");
    let params = class["body"]["body"][0]["value"]["params"].as_array().unwrap();
    assert_eq!(params[0]["type"], "TSParameterProperty");
    assert_eq!(params[0]["accessibility"], "private");
    assert_eq!(params[0]["readonly"], true);
    assert_eq!(params[0]["parameter"]["name"], "x");
    assert_eq!(params[1]["accessibility"], "public");
    assert_eq!(params[1]["parameter"]["type"], "AssignmentPattern");
    assert_eq!(params[2]["type"], "Identifier");
}

#[test]
fn test_abstract_class() {
    let class = statement("abstract class Shape<T> extends Base<T> implements A, B.C<T> { abstract area(): number; protected abstract name: string; }");
    assert_eq!(class["abstract"], true);
    assert_eq!(class["typeParameters"]["params"][0]["name"]["name"], "T");
    assert_eq!(class["superClass"]["name"], "Base");
    assert_eq!(class["superTypeArguments"]["params"][0]["typeName"]["name"], "T");
    assert_eq!(class["implements"].as_array().unwrap().len(), 2);
    assert_eq!(class["implements"][1]["expression"]["type"], "MemberExpression");
    let members = &class["body"]["body"];
    assert_eq!(members[0]["type"], "TSAbstractMethodDefinition");
    assert_eq!(members[0]["value"]["type"], "TSEmptyBodyFunctionExpression");
    assert_eq!(members[1]["type"], "TSAbstractPropertyDefinition");
    assert_eq!(members[1]["accessibility"], "protected");
}

#[test]
fn test_class_property_modifiers() {
    let class = statement("class C { declare readonly a?: string; static override b!: number; accessor c = 1; [key: string]: unknown; }");
    let members = &class["body"]["body"];
    assert_eq!(members[0]["declare"], true);
    assert_eq!(members[0]["readonly"], true);
    assert_eq!(members[0]["optional"], true);
    assert_eq!(members[1]["static"], true);
    assert_eq!(members[1]["override"], true);
    assert_eq!(members[1]["definite"], true);
    assert_eq!(members[2]["type"], "AccessorProperty");
    assert_eq!(members[3]["type"], "TSIndexSignature");
}

#[test]
fn test_method_overloads_in_class() {
    let class = statement("class C { m(x: string): void; m(x: number): void; m(x: any) {} }");
    let members = class["body"]["body"].as_array().unwrap();
    assert_eq!(members.len(), 3);
    assert_eq!(members[0]["value"]["type"], "TSEmptyBodyFunctionExpression");
    assert_eq!(members[2]["value"]["type"], "FunctionExpression");
}

#[test]
fn test_modifier_followed_by_line_break_is_a_name() {
    let class = statement("class C {\n  public\n  x = 1\n}");
    let members = class["body"]["body"].as_array().unwrap();
    assert_eq!(members.len(), 2);
    assert_eq!(members[0]["key"]["name"], "public");
    assert_eq!(members[1]["key"]["name"], "x");
}

// ============================================================================
// Declarations
// ============================================================================

#[test]
fn test_declaration_file() {
    let source = "\
declare module \"fs\" {
  export function readFile(path: string): Promise<string>;
}
declare global {
  interface Window { app: App }
}
declare namespace A.B {
  const version: string;
}
export = A;
export as namespace Lib;
";
    let body = program(source)["body"].clone();
    let body = body.as_array().unwrap();
    assert_eq!(body[0]["type"], "TSModuleDeclaration");
    assert_eq!(body[0]["kind"], "module");
    assert_eq!(body[0]["id"]["type"], "Literal");
    assert_eq!(body[0]["body"]["body"][0]["declaration"]["type"], "TSDeclareFunction");
    assert_eq!(body[1]["kind"], "global");
    assert_eq!(body[1]["global"], true);
    assert_eq!(body[2]["kind"], "namespace");
    assert_eq!(body[2]["declare"], true);
    assert_eq!(body[3]["type"], "TSExportAssignment");
    assert_eq!(body[4]["type"], "TSNamespaceExportDeclaration");
    assert_eq!(body[4]["id"]["name"], "Lib");
}

#[test]
fn test_ambient_module_without_body() {
    let module = statement("declare module \"pkg\";");
    assert_eq!(module["type"], "TSModuleDeclaration");
    assert!(module.get("body").is_none());
}

#[test]
fn test_interface_extends() {
    let interface = statement("interface A<T> extends B<T>, C.D { readonly x: T; y?(): void }");
    assert_eq!(interface["extends"].as_array().unwrap().len(), 2);
    assert_eq!(interface["extends"][0]["typeArguments"]["params"][0]["typeName"]["name"], "T");
    assert_eq!(interface["extends"][1]["expression"]["type"], "MemberExpression");
    assert_eq!(interface["body"]["body"][0]["readonly"], true);
    assert_eq!(interface["body"]["body"][1]["type"], "TSMethodSignature");
}

#[test]
fn test_enums() {
    let declaration = statement("const enum E { A = 1, B = A << 1, \"c\", }");
    assert_eq!(declaration["type"], "TSEnumDeclaration");
    assert_eq!(declaration["const"], true);
    let members = declaration["members"].as_array().unwrap();
    assert_eq!(members.len(), 3);
    assert_eq!(members[1]["initializer"]["type"], "BinaryExpression");
    assert_eq!(members[2]["id"]["type"], "Literal");
}

#[test]
fn test_function_overloads() {
    let body = program("function f(x: string): string;\nfunction f(x: number): number;\nfunction f(x: any) { return x; }")["body"].clone();
    assert_eq!(body[0]["type"], "TSDeclareFunction");
    assert_eq!(body[1]["type"], "TSDeclareFunction");
    assert_eq!(body[2]["type"], "FunctionDeclaration");
}

#[test]
fn test_contextual_keywords_as_identifiers() {
    let body = program("let type = 1; let declare = 2; namespace; abstract; module\nfoo;")["body"].clone();
    let body = body.as_array().unwrap();
    assert_eq!(body[0]["declarations"][0]["id"]["name"], "type");
    assert_eq!(body[1]["declarations"][0]["id"]["name"], "declare");
    assert_eq!(body[2]["expression"]["name"], "namespace");
    assert_eq!(body[3]["expression"]["name"], "abstract");
    assert_eq!(body[4]["expression"]["name"], "module");
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_type_errors() {
    assert_eq!(error_codes("let x: = 1;"), [1110]);
    assert_eq!(error_codes("type A<> = 1;"), [1139]);
    assert_eq!(error_codes("enum E { 1 }")[0], 1132);
}

#[test]
fn test_duplicate_modifier() {
    assert_eq!(error_codes("class C { static static x = 1; }"), [1030]);
}
