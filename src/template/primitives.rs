//! Host primitive rewrites and call dispatch
//!
//! Calls whose callee names a registered primitive are routed through
//! [`PrimitiveTable`] instead of becoming ordinary calls.

use std::collections::HashMap;

use super::TemplateBuilder;
use crate::ast::{CallExpression, Identifier, Literal, LiteralValue, MemberExpression, Node, SType};

/// Host primitive a callee name can be routed to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primitive {
    /// `console.log(args...)`
    Print,
}

impl Primitive {
    /// Build the primitive's node from already-built call arguments
    pub fn build(self, builder: &TemplateBuilder, args: Vec<Node>) -> Node {
        match self {
            Primitive::Print => builder.print(args),
        }
    }
}

/// Dispatch table keyed by callee identifier name
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PrimitiveTable {
    entries: HashMap<String, Primitive>,
}

impl PrimitiveTable {
    /// Create an empty table; every call stays an ordinary call
    pub fn new() -> Self {
        Self::default()
    }

    /// The source language's built-ins: `print`
    pub fn standard() -> Self {
        let mut table = Self::new();
        table.register("print", Primitive::Print);
        table
    }

    /// Route calls to `name` through `primitive`, replacing any earlier entry
    pub fn register(&mut self, name: impl Into<String>, primitive: Primitive) {
        self.entries.insert(name.into(), primitive);
    }

    pub fn get(&self, name: &str) -> Option<Primitive> {
        self.entries.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// The primitive a callee resolves to.
    ///
    /// Only a bare identifier matches; a statement-wrapped callee is an
    /// ordinary call.
    pub fn resolve(&self, callee: &Node) -> Option<Primitive> {
        callee.as_identifier().and_then(|id| self.get(&id.name))
    }
}

/// Trait providing primitive builder methods
pub trait PrimitiveBuilders {
    /// Exponentiation: `Math.pow(base, exponent)`, tagged `number` and `isPower`
    fn power(&self, base: Node, exponent: Node) -> Node;

    /// Concatenation: `left.concat(right)`.
    ///
    /// Tagged `string` when both sides are strings, `list` otherwise.
    fn concat(&self, left: Node, right: Node) -> Node;

    /// General call; registered primitive names are dispatched instead
    fn call(&self, callee: Node, args: Vec<Node>) -> Node;

    /// Statement-wrapped `console.log(args...)`
    fn print(&self, args: Vec<Node>) -> Node;

    /// Statement-wrapped `console.log(message)` reporting a diagnostic at run time
    fn error(&self, message: &str) -> Node;
}

impl PrimitiveBuilders for TemplateBuilder {
    fn power(&self, base: Node, exponent: Node) -> Node {
        Node::CallExpression(CallExpression {
            callee: Box::new(static_member("Math", "pow")),
            arguments: vec![base, exponent],
            s_type: Some(SType::Number),
            is_power: true,
        })
    }

    fn concat(&self, left: Node, right: Node) -> Node {
        let s_type = match (left.s_type(), right.s_type()) {
            (Some(SType::String), Some(SType::String)) => SType::String,
            _ => SType::List,
        };
        Node::CallExpression(CallExpression {
            callee: Box::new(Node::MemberExpression(MemberExpression {
                computed: false,
                object: Box::new(left),
                property: Box::new(identifier("concat")),
            })),
            arguments: vec![right],
            s_type: Some(s_type),
            is_power: false,
        })
    }

    fn call(&self, callee: Node, args: Vec<Node>) -> Node {
        if let Some(primitive) = self.primitives().resolve(&callee) {
            log::trace!("Dispatching call to primitive {:?}", primitive);
            return primitive.build(self, args);
        }
        Node::CallExpression(CallExpression {
            callee: Box::new(callee.into_expression()),
            arguments: args.into_iter().map(Node::into_expression).collect(),
            s_type: None,
            is_power: false,
        })
    }

    fn print(&self, args: Vec<Node>) -> Node {
        console_log(args.into_iter().map(Node::into_expression).collect())
    }

    fn error(&self, message: &str) -> Node {
        console_log(vec![Node::Literal(Literal {
            value: LiteralValue::String(message.to_string()),
            raw: message.to_string(),
            s_type: None,
        })])
    }
}

fn identifier(name: &str) -> Node {
    Node::Identifier(Identifier {
        name: name.to_string(),
    })
}

fn static_member(object: &str, property: &str) -> Node {
    Node::MemberExpression(MemberExpression {
        computed: false,
        object: Box::new(identifier(object)),
        property: Box::new(identifier(property)),
    })
}

fn console_log(arguments: Vec<Node>) -> Node {
    Node::expression_statement(Node::CallExpression(CallExpression {
        callee: Box::new(static_member("console", "log")),
        arguments,
        s_type: None,
        is_power: false,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::{LiteralBuilders, StructuralBuilders};

    fn call_parts(node: Node) -> CallExpression {
        match node.into_expression() {
            Node::CallExpression(call) => call,
            other => panic!("expected call, got {}", other.type_name()),
        }
    }

    #[test]
    fn test_power_call_shape() {
        let builder = TemplateBuilder::default();
        let call = call_parts(builder.power(builder.number_literal("2"), builder.identifier("n")));
        assert!(call.is_power);
        assert_eq!(call.s_type, Some(SType::Number));
        assert_eq!(*call.callee, static_member("Math", "pow"));
        assert_eq!(
            call.arguments,
            vec![builder.number_literal("2"), builder.identifier("n")]
        );
    }

    #[test]
    fn test_concat_list_when_any_side_is_not_string() {
        let builder = TemplateBuilder::default();
        let call = call_parts(builder.concat(builder.identifier("xs"), builder.identifier("ys")));
        assert_eq!(call.s_type, Some(SType::List));
        assert!(!call.is_power);
    }

    #[test]
    fn test_call_ordinary_unwraps() {
        let builder = TemplateBuilder::default();
        let arg = builder.member_expression(builder.identifier("a"), builder.identifier("b"));
        let call = call_parts(builder.call(builder.identifier("foo"), vec![arg.clone()]));
        assert_eq!(*call.callee, builder.identifier("foo"));
        assert_eq!(call.arguments, vec![arg.into_expression()]);
        assert_eq!(call.s_type, None);
    }

    #[test]
    fn test_call_ignores_member_callee_named_print() {
        let builder = TemplateBuilder::default();
        let callee = builder.member_expression(builder.identifier("io"), builder.identifier("print"));
        let node = builder.call(callee, vec![]);
        assert!(!node.is_statement_wrapped());
    }

    #[test]
    fn test_call_ignores_wrapped_print_identifier() {
        let builder = TemplateBuilder::default();
        let callee = Node::expression_statement(builder.identifier("print"));
        let call = call_parts(builder.call(callee, vec![builder.number_literal("1")]));
        assert_eq!(*call.callee, builder.identifier("print"));
        assert_eq!(call.arguments, vec![builder.number_literal("1")]);
    }

    #[test]
    fn test_registered_alias_dispatches() {
        let mut primitives = PrimitiveTable::standard();
        primitives.register("putStrLn", Primitive::Print);
        let builder = TemplateBuilder::default().with_primitives(primitives);

        let args = vec![builder.string_literal("hi")];
        assert_eq!(
            builder.call(builder.identifier("putStrLn"), args.clone()),
            builder.print(args)
        );
    }

    #[test]
    fn test_empty_table_disables_print_redirect() {
        let builder = TemplateBuilder::default().with_primitives(PrimitiveTable::new());
        let call = call_parts(builder.call(builder.identifier("print"), vec![]));
        assert_eq!(*call.callee, builder.identifier("print"));
    }

    #[test]
    fn test_error_logs_literal_message() {
        let builder = TemplateBuilder::default();
        let node = builder.error("index out of range");
        assert!(node.is_statement_wrapped());

        let call = call_parts(node);
        assert_eq!(*call.callee, static_member("console", "log"));
        assert_eq!(
            call.arguments,
            vec![Node::Literal(Literal {
                value: LiteralValue::String("index out of range".to_string()),
                raw: "index out of range".to_string(),
                s_type: None,
            })]
        );
    }
}
