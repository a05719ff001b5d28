//! Structural builder methods
//!
//! Pure assembly from children that are already built. Children that land in
//! expression position are unwrapped first with [`Node::into_expression`].

use super::TemplateBuilder;
use crate::ast::{
    ArrayExpression, ArrowFunctionExpression, BlockStatement, CallExpression, Comment,
    ConditionalExpression, DeclarationKind, Identifier, MemberExpression, Node, ObjectExpression,
    Program, Property, PropertyKind, SourceKind, VariableDeclaration, VariableDeclarator,
};

/// Trait providing structural builder methods
pub trait StructuralBuilders {
    /// Program root owning the top-level statements in source order
    fn program(&self, body: Vec<Node>) -> Node;

    fn identifier(&self, name: &str) -> Node;

    /// Constant binding: `const id = value;`
    fn declaration(&self, id: Node, value: Node) -> Node;

    /// Named function: `const id = (params) => body;`
    fn func_declaration(&self, id: Node, params: Vec<Node>, body: Node) -> Node;

    /// Anonymous function value, statement-wrapped: `(params) => body`
    fn lambda(&self, params: Vec<Node>, body: Node) -> Node;

    /// Immediately-applied closure: `((params) => body)(args)`
    fn lambda_call(&self, params: Vec<Node>, args: Vec<Node>, body: Node) -> Node;

    /// Local binding; built exactly like [`StructuralBuilders::lambda_call`]
    fn let_expression(&self, params: Vec<Node>, args: Vec<Node>, body: Node) -> Node;

    /// Member access, statement-wrapped: `object.property` or `object[property]`
    fn member_access(&self, object: Node, property: Node, computed: bool) -> Node;

    /// Dotted access: `object.property`
    fn member_expression(&self, object: Node, property: Node) -> Node;

    /// Subscript access: `object[property]`
    fn subscript_expression(&self, object: Node, property: Node) -> Node;

    fn block(&self, body: Vec<Node>) -> Node;

    fn array(&self, elements: Vec<Node>) -> Node;

    fn object(&self, properties: Vec<Property>) -> Node;

    /// Plain `key: value` property
    fn object_property(&self, key: Node, value: Node) -> Property;

    /// Ternary conditional, statement-wrapped: `test ? consequent : alternate`
    fn conditional(&self, test: Node, consequent: Node, alternate: Node) -> Node;

    /// Comment passthrough; `kind` is not validated
    fn comment(&self, kind: &str, text: &str) -> Node;
}

impl StructuralBuilders for TemplateBuilder {
    fn program(&self, body: Vec<Node>) -> Node {
        Node::Program(Program {
            body,
            source_type: SourceKind::Script,
        })
    }

    fn identifier(&self, name: &str) -> Node {
        Node::Identifier(Identifier {
            name: name.to_string(),
        })
    }

    fn declaration(&self, id: Node, value: Node) -> Node {
        const_declaration(id, value.into_expression())
    }

    fn func_declaration(&self, id: Node, params: Vec<Node>, body: Node) -> Node {
        const_declaration(id, arrow_function(params, body))
    }

    fn lambda(&self, params: Vec<Node>, body: Node) -> Node {
        Node::expression_statement(arrow_function(params, body))
    }

    fn lambda_call(&self, params: Vec<Node>, args: Vec<Node>, body: Node) -> Node {
        Node::CallExpression(CallExpression {
            callee: Box::new(arrow_function(params, body)),
            arguments: args.into_iter().map(Node::into_expression).collect(),
            s_type: None,
            is_power: false,
        })
    }

    fn let_expression(&self, params: Vec<Node>, args: Vec<Node>, body: Node) -> Node {
        self.lambda_call(params, args, body)
    }

    fn member_access(&self, object: Node, property: Node, computed: bool) -> Node {
        Node::expression_statement(Node::MemberExpression(MemberExpression {
            computed,
            object: Box::new(object.into_expression()),
            property: Box::new(property.into_expression()),
        }))
    }

    fn member_expression(&self, object: Node, property: Node) -> Node {
        self.member_access(object, property, false)
    }

    fn subscript_expression(&self, object: Node, property: Node) -> Node {
        self.member_access(object, property, true)
    }

    fn block(&self, body: Vec<Node>) -> Node {
        Node::BlockStatement(BlockStatement { body })
    }

    fn array(&self, elements: Vec<Node>) -> Node {
        Node::ArrayExpression(ArrayExpression { elements })
    }

    fn object(&self, properties: Vec<Property>) -> Node {
        Node::ObjectExpression(ObjectExpression { properties })
    }

    fn object_property(&self, key: Node, value: Node) -> Property {
        Property {
            key: Box::new(key),
            computed: false,
            value: Box::new(value.into_expression()),
            kind: PropertyKind::Init,
            method: false,
            shorthand: false,
        }
    }

    fn conditional(&self, test: Node, consequent: Node, alternate: Node) -> Node {
        Node::expression_statement(Node::ConditionalExpression(ConditionalExpression {
            test: Box::new(test.into_expression()),
            consequent: Box::new(consequent.into_expression()),
            alternate: Box::new(alternate.into_expression()),
        }))
    }

    fn comment(&self, kind: &str, text: &str) -> Node {
        Node::Comment(Comment {
            kind: kind.to_string(),
            value: text.to_string(),
        })
    }
}

fn const_declaration(id: Node, init: Node) -> Node {
    Node::VariableDeclaration(VariableDeclaration {
        declarations: vec![VariableDeclarator {
            id: Box::new(id),
            init: Box::new(init),
        }],
        kind: DeclarationKind::Const,
    })
}

/// Arrow function whose body is the single unwrapped expression
fn arrow_function(params: Vec<Node>, body: Node) -> Node {
    Node::ArrowFunctionExpression(ArrowFunctionExpression {
        id: None,
        params,
        body: Box::new(body.into_expression()),
        generator: false,
        expression: true,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::LiteralBuilders;

    #[test]
    fn test_declaration_unwraps_value() {
        let builder = TemplateBuilder::default();
        let member = builder.member_expression(builder.identifier("a"), builder.identifier("b"));
        let decl = builder.declaration(builder.identifier("x"), member.clone());

        let Node::VariableDeclaration(decl) = decl else {
            panic!("expected declaration");
        };
        assert_eq!(decl.kind, DeclarationKind::Const);
        assert_eq!(decl.declarations.len(), 1);
        assert_eq!(*decl.declarations[0].init, member.into_expression());
    }

    #[test]
    fn test_func_declaration_body_is_expression() {
        let builder = TemplateBuilder::default();
        let body = builder.lambda(vec![], builder.number_literal("1"));
        let decl = builder.func_declaration(
            builder.identifier("f"),
            vec![builder.identifier("a")],
            body,
        );

        let Node::VariableDeclaration(decl) = decl else {
            panic!("expected declaration");
        };
        let Node::ArrowFunctionExpression(arrow) = &*decl.declarations[0].init else {
            panic!("expected arrow function");
        };
        assert!(arrow.expression);
        assert!(!arrow.generator);
        assert!(arrow.id.is_none());
        assert_eq!(arrow.params, vec![builder.identifier("a")]);
        // the inner lambda was unwrapped into the body
        assert!(matches!(*arrow.body, Node::ArrowFunctionExpression(_)));
    }

    #[test]
    fn test_let_expression_matches_lambda_call() {
        let builder = TemplateBuilder::default();
        let params = vec![builder.identifier("x")];
        let args = vec![Node::expression_statement(builder.number_literal("5"))];
        let body = builder.identifier("x");

        let let_expr = builder.let_expression(params.clone(), args.clone(), body.clone());
        assert_eq!(let_expr, builder.lambda_call(params, args, body));

        let Node::CallExpression(call) = let_expr else {
            panic!("expected call");
        };
        assert_eq!(call.arguments, vec![builder.number_literal("5")]);
        assert!(matches!(*call.callee, Node::ArrowFunctionExpression(_)));
    }

    #[test]
    fn test_member_and_subscript_flags() {
        let builder = TemplateBuilder::default();
        let dotted = builder
            .member_expression(builder.identifier("a"), builder.identifier("b"))
            .into_expression();
        let indexed = builder
            .subscript_expression(builder.identifier("a"), builder.number_literal("0"))
            .into_expression();

        assert!(matches!(dotted, Node::MemberExpression(MemberExpression { computed: false, .. })));
        assert!(matches!(indexed, Node::MemberExpression(MemberExpression { computed: true, .. })));
    }

    #[test]
    fn test_object_property_shape() {
        let builder = TemplateBuilder::default();
        let prop = builder.object_property(
            builder.identifier("k"),
            Node::expression_statement(builder.number_literal("1")),
        );
        assert_eq!(prop.kind, PropertyKind::Init);
        assert!(!prop.computed && !prop.method && !prop.shorthand);
        assert_eq!(*prop.value, builder.number_literal("1"));

        let Node::ObjectExpression(obj) = builder.object(vec![prop.clone()]) else {
            panic!("expected object");
        };
        assert_eq!(obj.properties, vec![prop]);
    }

    #[test]
    fn test_conditional_unwraps_every_branch() {
        let builder = TemplateBuilder::default();
        let wrap = Node::expression_statement;
        let cond = builder.conditional(
            wrap(builder.bool_literal("true")),
            wrap(builder.number_literal("1")),
            wrap(builder.number_literal("2")),
        );

        let Node::ConditionalExpression(cond) = cond.into_expression() else {
            panic!("expected conditional");
        };
        assert_eq!(*cond.test, builder.bool_literal("true"));
        assert_eq!(*cond.consequent, builder.number_literal("1"));
        assert_eq!(*cond.alternate, builder.number_literal("2"));
    }

    #[test]
    fn test_comment_passthrough() {
        let builder = TemplateBuilder::default();
        assert_eq!(
            builder.comment("Whatever", "text"),
            Node::Comment(Comment {
                kind: "Whatever".to_string(),
                value: "text".to_string(),
            })
        );
    }

    #[test]
    fn test_program_keeps_statement_order() {
        let builder = TemplateBuilder::default();
        let body = vec![builder.identifier("a"), builder.identifier("b")];
        let Node::Program(program) = builder.program(body.clone()) else {
            panic!("expected program");
        };
        assert_eq!(program.body, body);
        assert_eq!(program.source_type, SourceKind::Script);
    }
}
