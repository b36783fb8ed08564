//! Tree invariant checks shared by the conformance corpus.
//!
//! Every check walks the serialized program, so it sees exactly what an
//! ESTree consumer would.

use serde_json::{Map, Value};
use tsestree_ast::TokenKind;
use tsestree_parser::{parse, ParseOptions};
use tsestree_scanner::{Scanner, Token};

/// A broken invariant, with enough context to find the node.
pub type Violation = String;

/// Visit every node object (anything with a `"type"`), parents first.
/// `comments` and `tokens` are side tables, not nodes.
pub fn for_each_node<'a>(value: &'a Value, visit: &mut impl FnMut(&'a Map<String, Value>)) {
    match value {
        Value::Object(map) => {
            if map.contains_key("type") {
                visit(map);
            }
            for (key, child) in map {
                if key != "comments" && key != "tokens" && key != "loc" && key != "range" {
                    for_each_node(child, visit);
                }
            }
        }
        Value::Array(items) => {
            for item in items {
                for_each_node(item, visit);
            }
        }
        _ => {}
    }
}

fn range_of(map: &Map<String, Value>) -> Option<(u64, u64)> {
    let range = map.get("range")?.as_array()?;
    Some((range.first()?.as_u64()?, range.get(1)?.as_u64()?))
}

fn node_type(map: &Map<String, Value>) -> &str {
    map.get("type").and_then(Value::as_str).unwrap_or("?")
}

/// Each node's range lies inside its nearest ranged ancestor's.
pub fn check_ranges_nested(program: &Value) -> Vec<Violation> {
    let mut violations = Vec::new();
    nested(program, None, &mut violations);
    violations
}

fn nested(value: &Value, parent: Option<(u64, u64)>, violations: &mut Vec<Violation>) {
    match value {
        Value::Object(map) => {
            let own = range_of(map);
            if let Some((start, end)) = own {
                if start > end {
                    violations.push(format!("{} has an inverted range [{start}, {end}]", node_type(map)));
                }
                if let Some((parent_start, parent_end)) = parent {
                    if start < parent_start || end > parent_end {
                        violations.push(format!(
                            "{} [{start}, {end}] escapes its parent [{parent_start}, {parent_end}]",
                            node_type(map)
                        ));
                    }
                }
            }
            for (key, child) in map {
                if key != "comments" && key != "tokens" && key != "loc" && key != "range" {
                    nested(child, own.or(parent), violations);
                }
            }
        }
        Value::Array(items) => {
            for item in items {
                nested(item, parent, violations);
            }
        }
        _ => {}
    }
}

/// `loc` agrees with `range` (ASCII sources, where byte and character
/// columns coincide).
pub fn check_locations(program: &Value, source: &str) -> Vec<Violation> {
    let line_starts: Vec<usize> = std::iter::once(0)
        .chain(source.match_indices('\n').map(|(index, _)| index + 1))
        .collect();
    let position = |offset: u64| {
        let offset = offset as usize;
        let line = line_starts.partition_point(|&start| start <= offset);
        (line as u64, (offset - line_starts[line - 1]) as u64)
    };

    let mut violations = Vec::new();
    for_each_node(program, &mut |map| {
        let (Some((start, end)), Some(loc)) = (range_of(map), map.get("loc")) else {
            return;
        };
        let actual = |edge: &str| {
            (
                loc[edge]["line"].as_u64().unwrap_or(0),
                loc[edge]["column"].as_u64().unwrap_or(0),
            )
        };
        if actual("start") != position(start) || actual("end") != position(end) {
            violations.push(format!(
                "{} loc {:?}..{:?} does not match range [{start}, {end}]",
                node_type(map),
                actual("start"),
                actual("end"),
            ));
        }
    });
    violations
}

/// Tokens are ordered, do not overlap, and each value is its source text.
pub fn check_tokens(program: &Value, source: &str) -> Vec<Violation> {
    let mut violations = Vec::new();
    let Some(tokens) = program.get("tokens").and_then(Value::as_array) else {
        return violations;
    };
    let mut previous_end = 0;
    for token in tokens {
        let range = token["range"].as_array();
        let (Some(start), Some(end)) = (
            range.and_then(|range| range.first()).and_then(Value::as_u64),
            range.and_then(|range| range.get(1)).and_then(Value::as_u64),
        ) else {
            violations.push(format!("token without a range: {token}"));
            continue;
        };
        if start < previous_end {
            violations.push(format!("token at {start} overlaps the previous token ending at {previous_end}"));
        }
        let text = source.get(start as usize..end as usize).unwrap_or("");
        if token["value"] != text {
            violations.push(format!("token value {} differs from source text {text:?}", token["value"]));
        }
        previous_end = end;
    }
    violations
}

/// Scan `text` on its own the way a token of ESTree type `ty` was scanned
/// in context.
fn scan_alone<'a>(ty: &str, text: &'a str) -> Token<'a> {
    let mut scanner = Scanner::new(text);
    match ty {
        "JSXText" => {
            scanner.set_in_jsx(true);
            return scanner.scan_jsx_child();
        }
        "JSXIdentifier" => {
            scanner.set_in_jsx(true);
            return scanner.scan();
        }
        "Punctuator" if text == "</" => {
            scanner.set_in_jsx(true);
            return scanner.scan_jsx_child();
        }
        _ => {}
    }
    let token = scanner.scan();
    match token.kind {
        TokenKind::Slash | TokenKind::SlashEquals if ty == "RegularExpression" => scanner.rescan_slash(&token),
        TokenKind::CloseBrace if ty == "Template" => scanner.rescan_template_continuation(&token),
        TokenKind::GreaterThan => scanner.rescan_greater_than(&token),
        // a JSX attribute string: no escapes, may span lines
        TokenKind::StringLiteral | TokenKind::Illegal if ty == "String" && token.text != text => {
            let mut scanner = Scanner::new(text);
            scanner.set_in_jsx(true);
            scanner.scan()
        }
        _ => token,
    }
}

/// Scanning a token's text by itself gives back one token of the same type
/// and text.
pub fn check_tokens_rescan(program: &Value) -> Vec<Violation> {
    let mut violations = Vec::new();
    let Some(tokens) = program.get("tokens").and_then(Value::as_array) else {
        return violations;
    };
    for token in tokens {
        let (Some(ty), Some(text)) = (token["type"].as_str(), token["value"].as_str()) else {
            violations.push(format!("token without a type or value: {token}"));
            continue;
        };
        let rescanned = scan_alone(ty, text);
        if rescanned.kind.estree_type() != ty || rescanned.text != text {
            violations.push(format!(
                "{ty} {text:?} rescans as {} {:?}",
                rescanned.kind.estree_type(),
                rescanned.text
            ));
        }
    }
    violations
}

/// Each top-level expression statement, parsed again from its own text,
/// gives the same expression type over the same relative range.
pub fn check_statements_reparse(program: &Value, source: &str, options: &ParseOptions) -> Vec<Violation> {
    let options = ParseOptions {
        range: true,
        loc: false,
        tokens: false,
        comment: false,
        ..options.clone()
    };
    let mut violations = Vec::new();
    let Some(body) = program.get("body").and_then(Value::as_array) else {
        return violations;
    };
    for statement in body {
        if statement["type"] != "ExpressionStatement" {
            continue;
        }
        let (Some((start, end)), Some(expression)) = (
            statement.as_object().and_then(range_of),
            statement["expression"].as_object(),
        ) else {
            continue;
        };
        let text = source.get(start as usize..end as usize).unwrap_or("");
        let output = parse(text, &options);
        if let Some(error) = output.errors.first() {
            violations.push(format!("{text:?} alone fails: {error}"));
            continue;
        }
        let reparsed = match serde_json::to_value(&output.program) {
            Ok(value) => value,
            Err(error) => {
                violations.push(error.to_string());
                continue;
            }
        };
        let again = &reparsed["body"][0]["expression"];
        let shifted = range_of(expression).map(|(from, to)| serde_json::json!([from - start, to - start]));
        if again["type"] != expression["type"] || Some(&again["range"]) != shifted.as_ref() {
            violations.push(format!(
                "{text:?} reparses as {} {}, was {} {:?}",
                again["type"],
                again["range"],
                node_type(expression),
                shifted
            ));
        }
    }
    violations
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_detects_escaping_child() {
        let tree = json!({
            "type": "Program",
            "range": [0, 5],
            "body": [{ "type": "ExpressionStatement", "range": [1, 9] }]
        });
        assert_eq!(check_ranges_nested(&tree).len(), 1);
    }

    #[test]
    fn test_location_mismatch() {
        let tree = json!({
            "type": "Identifier",
            "range": [2, 3],
            "loc": { "start": { "line": 2, "column": 0 }, "end": { "line": 2, "column": 1 } }
        });
        assert!(check_locations(&tree, "a\nb").is_empty());
        assert_eq!(check_locations(&tree, "abc").len(), 1);
    }

    #[test]
    fn test_rescan_of_context_dependent_tokens() {
        let tree = json!({
            "tokens": [
                { "type": "RegularExpression", "value": "/a[/]b/g" },
                { "type": "Template", "value": "}mid${" },
                { "type": "Punctuator", "value": ">>=" },
                { "type": "Identifier", "value": "type" },
                { "type": "JSXIdentifier", "value": "data-id" },
                { "type": "JSXText", "value": " hi &amp; bye " }
            ]
        });
        assert_eq!(check_tokens_rescan(&tree), Vec::<String>::new());
    }

    #[test]
    fn test_rescan_detects_wrong_type() {
        let tree = json!({ "tokens": [{ "type": "Keyword", "value": "foo" }] });
        assert_eq!(check_tokens_rescan(&tree).len(), 1);
    }

    #[test]
    fn test_statement_reparse() {
        let source = "x;\na?.b ?? c;";
        let options = ParseOptions {
            range: true,
            ..ParseOptions::default()
        };
        let program = serde_json::to_value(&parse(source, &options).program).unwrap();
        assert!(check_statements_reparse(&program, source, &options).is_empty());

        let mut forged = program.clone();
        forged["body"][1]["expression"]["type"] = json!("BinaryExpression");
        assert_eq!(check_statements_reparse(&forged, source, &options).len(), 1);
    }

    #[test]
    fn test_overlapping_tokens() {
        let tree = json!({
            "tokens": [
                { "type": "Identifier", "value": "ab", "range": [0, 2] },
                { "type": "Identifier", "value": "b", "range": [1, 2] }
            ]
        });
        assert_eq!(check_tokens(&tree, "ab").len(), 1);
    }
}
