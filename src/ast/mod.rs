//! Target tree module
//!
//! ESTree-shaped nodes produced by the template builders. The module is organized into:
//!
//! - `node`: the `Node` union and the statement unwrap operation
//! - `types`: per-variant node records, literal values and the `SType` tag
//! - `serialize`: ESTree JSON (de)serialization of the tree

pub mod node;
pub mod serialize;
pub mod types;

pub use node::Node;
pub use types::{
    ArrayExpression, ArrowFunctionExpression, BinaryExpression, BlockStatement, CallExpression,
    Comment, ConditionalExpression, DeclarationKind, ExpressionStatement, Identifier, Literal,
    LiteralValue, MemberExpression, ObjectExpression, Program, Property, PropertyKind, SType,
    SourceKind, UnaryExpression, VariableDeclaration, VariableDeclarator,
};
