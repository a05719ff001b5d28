//! Node records and semantic tags
//!
//! Field names follow ESTree. `sType` and `isPower` are extension fields that a
//! generic renderer ignores.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Node;

/// Semantic type tag consumed by later inference passes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SType {
    Number,
    String,
    Bool,
    List,
    /// Resolved by a later pass (null literals)
    NeedsInference,
}

impl SType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SType::Number => "number",
            SType::String => "string",
            SType::Bool => "bool",
            SType::List => "list",
            SType::NeedsInference => "needsInference",
        }
    }
}

impl fmt::Display for SType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coerced value of a literal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LiteralValue {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    #[default]
    Script,
    Module,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeclarationKind {
    #[default]
    Const,
    Let,
    Var,
}

impl DeclarationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeclarationKind::Const => "const",
            DeclarationKind::Let => "let",
            DeclarationKind::Var => "var",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyKind {
    #[default]
    Init,
    Get,
    Set,
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// Root of the tree; owns the top-level statements in source order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Program {
    pub body: Vec<Node>,
    #[serde(default)]
    pub source_type: SourceKind,
}

/// Statement wrapper around an expression
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpressionStatement {
    pub expression: Box<Node>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallExpression {
    pub callee: Box<Node>,
    pub arguments: Vec<Node>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub s_type: Option<SType>,
    /// Set on `Math.pow` calls produced from `^`
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_power: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberExpression {
    pub computed: bool,
    pub object: Box<Node>,
    pub property: Box<Node>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Identifier {
    pub name: String,
}

/// A literal keeps both its coerced value and the verbatim source text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Literal {
    pub value: LiteralValue,
    pub raw: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub s_type: Option<SType>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableDeclaration {
    pub declarations: Vec<VariableDeclarator>,
    pub kind: DeclarationKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub struct VariableDeclarator {
    pub id: Box<Node>,
    pub init: Box<Node>,
}

/// Arrow function with a single-expression body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrowFunctionExpression {
    pub id: Option<Box<Node>>,
    pub params: Vec<Node>,
    pub body: Box<Node>,
    pub generator: bool,
    pub expression: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BinaryExpression {
    pub operator: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub s_type: Option<SType>,
    pub left: Box<Node>,
    pub right: Box<Node>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnaryExpression {
    pub operator: String,
    pub argument: Box<Node>,
    pub prefix: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockStatement {
    pub body: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionalExpression {
    pub test: Box<Node>,
    pub consequent: Box<Node>,
    pub alternate: Box<Node>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrayExpression {
    pub elements: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectExpression {
    pub properties: Vec<Property>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub struct Property {
    pub key: Box<Node>,
    pub computed: bool,
    pub value: Box<Node>,
    pub kind: PropertyKind,
    pub method: bool,
    pub shorthand: bool,
}

/// Comment passthrough; `kind` is whatever tag the caller supplied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub kind: String,
    pub value: String,
}
