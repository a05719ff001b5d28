//! Binary and unary operator resolution
//!
//! The result `sType` of a binary node is the type the operator table declares
//! for the source token, never something derived from the operands.

use super::{PrimitiveBuilders, TemplateBuilder};
use crate::ast::{BinaryExpression, Node, UnaryExpression};
use crate::error::Result;

/// Source token that becomes a `Math.pow` call instead of a binary node
pub const POWER_OPERATOR: &str = "^";

/// Trait providing operator builder methods
pub trait OperatorBuilders {
    /// Resolve `left op right`.
    ///
    /// Fails with `UnknownOperator` when the token has no table entry.
    fn binary(&self, left: Node, operator: &str, right: Node) -> Result<Node>;

    /// Prefix unary operation; no `sType` is assigned
    fn unary(&self, operator: &str, argument: Node) -> Node;
}

impl OperatorBuilders for TemplateBuilder {
    fn binary(&self, left: Node, operator: &str, right: Node) -> Result<Node> {
        let result_type = self.operators().result_type(operator)?;
        let (left, right) = (left.into_expression(), right.into_expression());

        if operator == POWER_OPERATOR {
            log::trace!("Rewriting `{}` to a power call", operator);
            return Ok(self.power(left, right));
        }

        let rewritten = rewrite_operator(operator);
        if rewritten != operator {
            log::trace!("Rewriting operator `{}` to `{}`", operator, rewritten);
        }

        Ok(Node::BinaryExpression(BinaryExpression {
            operator: rewritten.to_string(),
            s_type: Some(result_type),
            left: Box::new(left),
            right: Box::new(right),
        }))
    }

    fn unary(&self, operator: &str, argument: Node) -> Node {
        Node::UnaryExpression(UnaryExpression {
            operator: operator.to_string(),
            argument: Box::new(argument.into_expression()),
            prefix: true,
        })
    }
}

/// Map a source operator token to the host operator it is emitted as.
///
/// `++` is an alias for `+`; loose (in)equality becomes strict because the
/// host's loose comparison coerces operands.
pub fn rewrite_operator(operator: &str) -> &str {
    match operator {
        "++" => "+",
        "==" => "===",
        "!=" => "!==",
        other => other,
    }
}
