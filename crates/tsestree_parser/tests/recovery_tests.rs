//! Error recovery tests: malformed input still produces a tree, every error
//! is reported in position order, and parsing resumes at the next statement.

use serde_json::Value;
use tsestree_parser::{parse, parse_program, ParseOptions};

fn recovered(source: &str) -> (Value, Vec<u32>) {
    let output = parse(source, &ParseOptions::default());
    let codes = output.errors.iter().map(|error| error.code).collect();
    (serde_json::to_value(&output.program).unwrap(), codes)
}

fn statement_types(program: &Value) -> Vec<String> {
    program["body"]
        .as_array()
        .unwrap()
        .iter()
        .map(|statement| statement["type"].as_str().unwrap().to_string())
        .collect()
}

#[test]
fn test_resumes_after_bad_statement() {
    let (program, codes) = recovered("var = 1;\nconst ok = 2;\nfoo();");
    assert_eq!(codes.len(), 1);
    assert_eq!(statement_types(&program), ["VariableDeclaration", "ExpressionStatement"]);
    assert_eq!(program["body"][0]["declarations"][0]["id"]["name"], "ok");
}

#[test]
fn test_every_error_is_reported_in_order() {
    let output = parse("let a = ;\nlet b = ;\nlet c = ;", &ParseOptions::default());
    let lines: Vec<u32> = output.errors.iter().map(|error| error.line).collect();
    assert_eq!(lines, [1, 2, 3]);
    assert!(output.errors.iter().all(|error| error.code == 1109));
}

#[test]
fn test_recovery_inside_blocks() {
    let (program, codes) = recovered("function f() {\n  let = ;\n  return 1;\n}\nf();");
    assert_eq!(codes.len(), 1);
    assert_eq!(statement_types(&program), ["FunctionDeclaration", "ExpressionStatement"]);
    let inner = &program["body"][0]["body"]["body"];
    assert_eq!(inner.as_array().unwrap().len(), 1);
    assert_eq!(inner[0]["type"], "ReturnStatement");
}

#[test]
fn test_recovery_inside_class_body() {
    let (program, codes) = recovered("class C {\n  a = ;\n  b = 2;\n  m() {}\n}");
    assert!(!codes.is_empty());
    let members = program["body"][0]["body"]["body"].as_array().unwrap().clone();
    let names: Vec<&str> = members.iter().map(|member| member["key"]["name"].as_str().unwrap()).collect();
    assert_eq!(names, ["b", "m"]);
}

#[test]
fn test_stray_tokens_do_not_loop() {
    let (program, codes) = recovered(") ) ] } let x = 1;");
    assert!(!codes.is_empty());
    let types = statement_types(&program);
    assert_eq!(types.last().map(String::as_str), Some("VariableDeclaration"));
}

#[test]
fn test_unterminated_constructs() {
    for source in [
        "function f(",
        "class {",
        "if (a",
        "let x = [1, 2",
        "const s = `abc ${",
        "interface I { a: ",
        "type T = ",
        "/* open comment",
        "'unterminated",
        "a ? b",
    ] {
        let output = parse(source, &ParseOptions::default());
        assert!(!output.errors.is_empty(), "no error for {source:?}");
        assert!(parse_program(source, &ParseOptions::default()).is_err());
    }
}

#[test]
fn test_errors_have_positions() {
    let output = parse("const a = 1;\nconst b = );", &ParseOptions::default());
    let error = output.first_error().unwrap();
    assert_eq!(error.line, 2);
    assert_eq!(error.column, 10);
    assert_eq!(error.start, 23);
}

#[test]
fn test_allow_invalid_ast_returns_partial_tree() {
    let options = ParseOptions {
        allow_invalid_ast: true,
        ..ParseOptions::default()
    };
    let program = parse_program("foo(;\nbar();", &options).unwrap();
    let json = serde_json::to_value(&program).unwrap();
    let types = statement_types(&json);
    assert_eq!(types.last().map(String::as_str), Some("ExpressionStatement"));
    assert_eq!(json["body"].as_array().unwrap().last().unwrap()["expression"]["callee"]["name"], "bar");
}

#[test]
fn test_display_format() {
    let output = parse("let x = 1 +;", &ParseOptions::default());
    let error = output.first_error().unwrap();
    assert_eq!(error.to_string(), "1:11 - error TS1109: Expression expected.");
}
