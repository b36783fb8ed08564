//! JSX tests: when JSX is enabled, element trees, text handling and the
//! interplay with TypeScript's `<` syntax.

use serde_json::Value;
use tsestree_parser::{parse, ParseOptions};

fn for_file(path: &str) -> ParseOptions {
    ParseOptions {
        file_path: Some(path.to_string()),
        ..ParseOptions::default()
    }
}

fn tsx() -> ParseOptions {
    for_file("component.tsx")
}

fn program_with(source: &str, options: &ParseOptions) -> Value {
    let output = parse(source, options);
    assert!(output.errors.is_empty(), "source: {}\nerrors: {:?}", source, output.errors);
    serde_json::to_value(&output.program).unwrap()
}

fn expression(source: &str) -> Value {
    program_with(source, &tsx())["body"][0]["expression"].clone()
}

fn child_types(element: &Value) -> Vec<String> {
    element["children"]
        .as_array()
        .unwrap()
        .iter()
        .map(|child| child["type"].as_str().unwrap().to_string())
        .collect()
}

#[test]
fn test_file_extension_selects_jsx() {
    let in_tsx = program_with("<div />;", &tsx());
    assert_eq!(in_tsx["body"][0]["expression"]["type"], "JSXElement");

    let in_js = program_with("<div />;", &for_file("view.js"));
    assert_eq!(in_js["body"][0]["expression"]["type"], "JSXElement");

    let in_ts = program_with("<string>value;", &for_file("types.ts"));
    assert_eq!(in_ts["body"][0]["expression"]["type"], "TSTypeAssertion");
}

#[test]
fn test_jsx_flag_without_path() {
    let options = ParseOptions {
        jsx: true,
        ..ParseOptions::default()
    };
    let program = program_with("<span>ok</span>;", &options);
    assert_eq!(program["body"][0]["expression"]["type"], "JSXElement");
}

#[test]
fn test_ts_file_rejects_jsx() {
    let output = parse("<div />;", &for_file("types.ts"));
    assert!(!output.errors.is_empty());
}

#[test]
fn test_entities_are_decoded() {
    let element = expression("<p title=\"a &quot;b&quot;\">x &amp; y &#x41;</p>;");
    let text = &element["children"][0];
    assert_eq!(text["value"], "x & y A");
    assert_eq!(text["raw"], "x &amp; y &#x41;");
    assert_eq!(element["openingElement"]["attributes"][0]["value"]["value"], "a \"b\"");
}

#[test]
fn test_unknown_entity_is_kept() {
    let element = expression("<p>&bogus; &amp</p>;");
    assert_eq!(element["children"][0]["value"], "&bogus; &amp");
}

#[test]
fn test_whitespace_text_is_kept() {
    let element = expression("<ul>\n  <li />\n</ul>;");
    assert_eq!(child_types(&element), ["JSXText", "JSXElement", "JSXText"]);
    assert_eq!(element["children"][0]["value"], "\n  ");
}

#[test]
fn test_expressions_inside_children() {
    let source = "const list = <ul>{items.map(item => <li key={item.id}>{item.name}</li>)}</ul>;";
    let program = program_with(source, &tsx());
    let list = &program["body"][0]["declarations"][0]["init"];
    let call = &list["children"][0]["expression"];
    assert_eq!(call["type"], "CallExpression");
    let arrow = &call["arguments"][0];
    assert_eq!(arrow["type"], "ArrowFunctionExpression");
    assert_eq!(arrow["body"]["type"], "JSXElement");
    assert_eq!(arrow["body"]["openingElement"]["attributes"][0]["value"]["expression"]["type"], "MemberExpression");
}

#[test]
fn test_jsx_in_conditional_and_return() {
    let conditional = expression("cond ? <A /> : <B>b</B>;");
    assert_eq!(conditional["type"], "ConditionalExpression");
    assert_eq!(conditional["consequent"]["type"], "JSXElement");
    assert_eq!(conditional["alternate"]["closingElement"]["name"]["name"], "B");

    let program = program_with("function App() {\n  return (\n    <main>\n      <h1>Hi</h1>\n    </main>\n  );\n}", &tsx());
    let returned = &program["body"][0]["body"]["body"][0]["argument"];
    assert_eq!(returned["type"], "JSXElement");
    assert_eq!(returned["openingElement"]["name"]["name"], "main");
}

#[test]
fn test_comparison_still_works_in_jsx_files() {
    let comparison = expression("a < b;");
    assert_eq!(comparison["type"], "BinaryExpression");
    assert_eq!(comparison["operator"], "<");
}

#[test]
fn test_generic_arrow_in_tsx() {
    let arrow = expression("<T,>(value: T) => value;");
    assert_eq!(arrow["type"], "ArrowFunctionExpression");
    assert_eq!(arrow["typeParameters"]["params"][0]["name"]["name"], "T");

    let constrained = expression("<T extends object>(value: T) => value;");
    assert_eq!(constrained["type"], "ArrowFunctionExpression");
}

#[test]
fn test_namespaced_and_hyphenated_names() {
    let element = expression("<svg:rect aria-label=\"r\" />;");
    let name = &element["openingElement"]["name"];
    assert_eq!(name["type"], "JSXNamespacedName");
    assert_eq!(name["namespace"]["name"], "svg");
    assert_eq!(name["name"]["name"], "rect");
    assert_eq!(element["openingElement"]["attributes"][0]["name"]["name"], "aria-label");
}

#[test]
fn test_nested_fragments() {
    let fragment = expression("<><>inner</>{x}</>;");
    assert_eq!(fragment["type"], "JSXFragment");
    assert_eq!(child_types(&fragment), ["JSXFragment", "JSXExpressionContainer"]);
    assert_eq!(fragment["closingFragment"]["type"], "JSXClosingFragment");
}

#[test]
fn test_jsx_ranges_nest() {
    let options = ParseOptions {
        range: true,
        ..tsx()
    };
    let source = "const a = <A b={1}>t<C /></A>;";
    let program = program_with(source, &options);
    let element = &program["body"][0]["declarations"][0]["init"];
    assert_eq!(element["range"], serde_json::json!([10, 29]));
    assert_eq!(element["openingElement"]["range"], serde_json::json!([10, 19]));
    assert_eq!(element["children"][0]["range"], serde_json::json!([19, 20]));
    assert_eq!(element["children"][1]["range"], serde_json::json!([20, 25]));
    assert_eq!(element["closingElement"]["range"], serde_json::json!([25, 29]));
}

#[test]
fn test_jsx_tokens() {
    let options = ParseOptions {
        tokens: true,
        ..tsx()
    };
    let program = program_with("<a href=\"x\">hi</a>;", &options);
    let types: Vec<&str> = program["tokens"]
        .as_array()
        .unwrap()
        .iter()
        .map(|token| token["type"].as_str().unwrap())
        .collect();
    assert!(types.contains(&"JSXIdentifier"));
    assert!(types.contains(&"JSXText"));
    assert_eq!(types.first(), Some(&"Punctuator"));
    let text = program["tokens"]
        .as_array()
        .unwrap()
        .iter()
        .find(|token| token["type"] == "JSXText")
        .unwrap();
    assert_eq!(text["value"], "hi");
}

#[test]
fn test_unclosed_element_error_message() {
    let output = parse("<section>", &tsx());
    let error = output.first_error().unwrap();
    assert_eq!(error.code, 17008);
    assert!(error.message.contains("section"));
}
