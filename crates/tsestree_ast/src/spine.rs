//! Iterative drop for left-nested expression chains.
//!
//! `a.b.c.d`, `f()()()` and `a + b + c` are built in a loop, so their depth
//! grows with the input rather than with the parser's recursion limit. The
//! derived drop glue would recurse once per link; these impls unhook the
//! left spine and free it link by link instead.

use tsestree_core::text::TextRange;

use crate::node::*;
use crate::node_kind::NodeKind;
use crate::typescript::{TSAsExpression, TSNonNullExpression};

/// The child that continues a left spine, if `expression` has one.
fn spine_child(expression: &mut Expression) -> Option<&mut Expression> {
    match expression {
        Expression::MemberExpression(e) => Some(&mut e.object),
        Expression::CallExpression(e) => Some(&mut e.callee),
        Expression::BinaryExpression(e) => Some(&mut e.left),
        Expression::LogicalExpression(e) => Some(&mut e.left),
        Expression::TaggedTemplateExpression(e) => Some(&mut e.tag),
        Expression::ChainExpression(e) => Some(&mut e.expression),
        Expression::TSAsExpression(e) | Expression::TSSatisfiesExpression(e) => Some(&mut e.expression),
        Expression::TSNonNullExpression(e) => Some(&mut e.expression),
        _ => None,
    }
}

/// Move `slot` out, leaving a leaf behind, when it continues the spine.
fn take_link(slot: &mut Expression) -> Option<Expression> {
    spine_child(slot)?;
    let leaf = EmptyNode::new(NodeKind::ThisExpression, TextRange::new(0, 0));
    Some(std::mem::replace(slot, Expression::ThisExpression(Box::new(leaf))))
}

fn drop_spine(slot: &mut Expression) {
    let mut next = take_link(slot);
    while let Some(mut link) = next {
        next = spine_child(&mut link).and_then(take_link);
        // `link` now ends in a leaf and drops without recursing.
    }
}

macro_rules! iterative_drop {
    ($($node:ty => $field:ident),* $(,)?) => {
        $(
            impl Drop for $node {
                fn drop(&mut self) {
                    drop_spine(&mut self.$field);
                }
            }
        )*
    };
}

iterative_drop! {
    MemberExpression => object,
    CallExpression => callee,
    BinaryExpression => left,
    LogicalExpression => left,
    TaggedTemplateExpression => tag,
    TSAsExpression => expression,
    TSNonNullExpression => expression,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operator::BinaryOperator;

    fn identifier(name: &str) -> Expression {
        Expression::Identifier(Box::new(Identifier::new(name, TextRange::new(0, 0))))
    }

    #[test]
    fn test_long_member_chain_drops() {
        let mut expression = identifier("a");
        for _ in 0..200_000 {
            expression = Expression::MemberExpression(Box::new(MemberExpression {
                data: NodeData::new(NodeKind::MemberExpression, TextRange::new(0, 0)),
                object: expression,
                property: identifier("b"),
                computed: false,
                optional: false,
            }));
        }
        drop(expression);
    }

    #[test]
    fn test_mixed_spine_drops() {
        let mut expression = identifier("a");
        for i in 0..200_000 {
            let data = NodeData::new(NodeKind::BinaryExpression, TextRange::new(0, 0));
            expression = if i % 2 == 0 {
                Expression::BinaryExpression(Box::new(BinaryExpression {
                    data,
                    operator: BinaryOperator::Addition,
                    left: expression,
                    right: identifier("b"),
                }))
            } else {
                Expression::CallExpression(Box::new(CallExpression {
                    data,
                    callee: expression,
                    arguments: Vec::new(),
                    optional: false,
                    type_arguments: None,
                }))
            };
        }
        drop(expression);
    }
}
