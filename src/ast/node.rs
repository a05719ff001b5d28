//! The `Node` union
//!
//! Every builder returns a `Node`. Children are owned by their parent, so a
//! built tree has no back links and cannot form cycles.

use super::types::*;

/// A target-tree node, discriminated by its ESTree `type`
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Program(Program),
    ExpressionStatement(ExpressionStatement),
    CallExpression(CallExpression),
    MemberExpression(MemberExpression),
    Identifier(Identifier),
    Literal(Literal),
    VariableDeclaration(VariableDeclaration),
    ArrowFunctionExpression(ArrowFunctionExpression),
    BinaryExpression(BinaryExpression),
    UnaryExpression(UnaryExpression),
    BlockStatement(BlockStatement),
    ConditionalExpression(ConditionalExpression),
    ArrayExpression(ArrayExpression),
    ObjectExpression(ObjectExpression),
    Comment(Comment),
}

impl Node {
    /// Wrap an expression so it can occupy statement position
    pub fn expression_statement(expression: Node) -> Node {
        Node::ExpressionStatement(ExpressionStatement {
            expression: Box::new(expression),
        })
    }

    /// Unwrap a statement-wrapped node back to its bare expression.
    ///
    /// Anything that is not an `ExpressionStatement` is returned unchanged.
    pub fn into_expression(self) -> Node {
        match self {
            Node::ExpressionStatement(stmt) => *stmt.expression,
            other => other,
        }
    }

    /// Borrowing form of [`Node::into_expression`]
    pub fn as_expression(&self) -> &Node {
        match self {
            Node::ExpressionStatement(stmt) => &stmt.expression,
            other => other,
        }
    }

    pub fn is_statement_wrapped(&self) -> bool {
        matches!(self, Node::ExpressionStatement(_))
    }

    /// The ESTree `type` discriminator; comments report their caller-supplied kind
    pub fn type_name(&self) -> &str {
        match self {
            Node::Program(_) => "Program",
            Node::ExpressionStatement(_) => "ExpressionStatement",
            Node::CallExpression(_) => "CallExpression",
            Node::MemberExpression(_) => "MemberExpression",
            Node::Identifier(_) => "Identifier",
            Node::Literal(_) => "Literal",
            Node::VariableDeclaration(_) => "VariableDeclaration",
            Node::ArrowFunctionExpression(_) => "ArrowFunctionExpression",
            Node::BinaryExpression(_) => "BinaryExpression",
            Node::UnaryExpression(_) => "UnaryExpression",
            Node::BlockStatement(_) => "BlockStatement",
            Node::ConditionalExpression(_) => "ConditionalExpression",
            Node::ArrayExpression(_) => "ArrayExpression",
            Node::ObjectExpression(_) => "ObjectExpression",
            Node::Comment(comment) => &comment.kind,
        }
    }

    /// The semantic tag, for the variants that carry one
    pub fn s_type(&self) -> Option<SType> {
        match self {
            Node::Literal(lit) => lit.s_type,
            Node::CallExpression(call) => call.s_type,
            Node::BinaryExpression(bin) => bin.s_type,
            _ => None,
        }
    }

    pub fn as_identifier(&self) -> Option<&Identifier> {
        match self {
            Node::Identifier(id) => Some(id),
            _ => None,
        }
    }
}

macro_rules! impl_from_record {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for Node {
                fn from(record: $variant) -> Self {
                    Node::$variant(record)
                }
            }
        )*
    };
}

impl_from_record!(
    Program,
    ExpressionStatement,
    CallExpression,
    MemberExpression,
    Identifier,
    Literal,
    VariableDeclaration,
    ArrowFunctionExpression,
    BinaryExpression,
    UnaryExpression,
    BlockStatement,
    ConditionalExpression,
    ArrayExpression,
    ObjectExpression,
    Comment,
);
