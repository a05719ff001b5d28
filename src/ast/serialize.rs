//! ESTree JSON form of the tree
//!
//! `Node` is internally tagged on `type`, except for comments, whose `type` is
//! the free-form kind the caller supplied. That rules out a derived tagged
//! enum, so both directions go through private tagged mirrors.

use serde::de::{self, Deserializer};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::types::*;
use super::Node;
use crate::error::{Error, Result};

#[derive(Serialize)]
#[serde(tag = "type")]
enum TaggedRef<'n> {
    Program(&'n Program),
    ExpressionStatement(&'n ExpressionStatement),
    CallExpression(&'n CallExpression),
    MemberExpression(&'n MemberExpression),
    Identifier(&'n Identifier),
    Literal(&'n Literal),
    VariableDeclaration(&'n VariableDeclaration),
    ArrowFunctionExpression(&'n ArrowFunctionExpression),
    BinaryExpression(&'n BinaryExpression),
    UnaryExpression(&'n UnaryExpression),
    BlockStatement(&'n BlockStatement),
    ConditionalExpression(&'n ConditionalExpression),
    ArrayExpression(&'n ArrayExpression),
    ObjectExpression(&'n ObjectExpression),
}

#[derive(Deserialize)]
#[serde(tag = "type")]
enum TaggedOwned {
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
}

/// `type` values that name a structural node rather than a comment kind
const NODE_TYPES: &[&str] = &[
    "Program",
    "ExpressionStatement",
    "CallExpression",
    "MemberExpression",
    "Identifier",
    "Literal",
    "VariableDeclaration",
    "ArrowFunctionExpression",
    "BinaryExpression",
    "UnaryExpression",
    "BlockStatement",
    "ConditionalExpression",
    "ArrayExpression",
    "ObjectExpression",
];

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let tagged = match self {
            Node::Program(n) => TaggedRef::Program(n),
            Node::ExpressionStatement(n) => TaggedRef::ExpressionStatement(n),
            Node::CallExpression(n) => TaggedRef::CallExpression(n),
            Node::MemberExpression(n) => TaggedRef::MemberExpression(n),
            Node::Identifier(n) => TaggedRef::Identifier(n),
            Node::Literal(n) => TaggedRef::Literal(n),
            Node::VariableDeclaration(n) => TaggedRef::VariableDeclaration(n),
            Node::ArrowFunctionExpression(n) => TaggedRef::ArrowFunctionExpression(n),
            Node::BinaryExpression(n) => TaggedRef::BinaryExpression(n),
            Node::UnaryExpression(n) => TaggedRef::UnaryExpression(n),
            Node::BlockStatement(n) => TaggedRef::BlockStatement(n),
            Node::ConditionalExpression(n) => TaggedRef::ConditionalExpression(n),
            Node::ArrayExpression(n) => TaggedRef::ArrayExpression(n),
            Node::ObjectExpression(n) => TaggedRef::ObjectExpression(n),
            Node::Comment(comment) => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("type", &comment.kind)?;
                map.serialize_entry("value", &comment.value)?;
                return map.end();
            }
        };
        tagged.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Node {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        let kind = value
            .get("type")
            .and_then(Value::as_str)
            .ok_or_else(|| de::Error::custom("node is missing a string `type` field"))?;

        if !NODE_TYPES.contains(&kind) {
            let text = value.get("value").and_then(Value::as_str).ok_or_else(|| {
                de::Error::custom(format!(
                    "unknown node type {:?} (comments need a string `value`)",
                    kind
                ))
            })?;
            return Ok(Node::Comment(Comment {
                kind: kind.to_string(),
                value: text.to_string(),
            }));
        }

        let tagged = match TaggedOwned::deserialize(&value) {
            Ok(tagged) => tagged,
            // a comment whose kind shadows a node type name
            Err(err) => return comment_shaped(&value).ok_or_else(|| de::Error::custom(err)),
        };
        Ok(match tagged {
            TaggedOwned::Program(n) => Node::Program(n),
            TaggedOwned::ExpressionStatement(n) => Node::ExpressionStatement(n),
            TaggedOwned::CallExpression(n) => Node::CallExpression(n),
            TaggedOwned::MemberExpression(n) => Node::MemberExpression(n),
            TaggedOwned::Identifier(n) => Node::Identifier(n),
            TaggedOwned::Literal(n) => Node::Literal(n),
            TaggedOwned::VariableDeclaration(n) => Node::VariableDeclaration(n),
            TaggedOwned::ArrowFunctionExpression(n) => Node::ArrowFunctionExpression(n),
            TaggedOwned::BinaryExpression(n) => Node::BinaryExpression(n),
            TaggedOwned::UnaryExpression(n) => Node::UnaryExpression(n),
            TaggedOwned::BlockStatement(n) => Node::BlockStatement(n),
            TaggedOwned::ConditionalExpression(n) => Node::ConditionalExpression(n),
            TaggedOwned::ArrayExpression(n) => Node::ArrayExpression(n),
            TaggedOwned::ObjectExpression(n) => Node::ObjectExpression(n),
        })
    }
}

/// `{"type": <string>, "value": <string>}` and nothing else
fn comment_shaped(value: &Value) -> Option<Node> {
    let object = value.as_object()?;
    if object.len() != 2 {
        return None;
    }
    Some(Node::Comment(Comment {
        kind: object.get("type")?.as_str()?.to_string(),
        value: object.get("value")?.as_str()?.to_string(),
    }))
}

impl Node {
    /// Serialize the tree to pretty-printed ESTree JSON
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| Error::Tree {
            message: e.to_string(),
        })
    }

    /// Parse a tree from ESTree JSON
    pub fn from_json(source: &str) -> Result<Node> {
        serde_json::from_str(source).map_err(|e| Error::Tree {
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn number(raw: &str, value: f64) -> Node {
        Node::Literal(Literal {
            value: LiteralValue::Number(value),
            raw: raw.to_string(),
            s_type: Some(SType::Number),
        })
    }

    #[test]
    fn test_literal_serializes_with_stype() {
        let value = serde_json::to_value(number("5", 5.0)).unwrap();
        assert_eq!(
            value,
            json!({"type": "Literal", "value": 5.0, "raw": "5", "sType": "number"})
        );
    }

    #[test]
    fn test_plain_call_omits_extension_fields() {
        let call = Node::CallExpression(CallExpression {
            callee: Box::new(Node::Identifier(Identifier {
                name: "f".to_string(),
            })),
            arguments: vec![],
            s_type: None,
            is_power: false,
        });
        let value = serde_json::to_value(&call).unwrap();
        assert!(value.get("sType").is_none());
        assert!(value.get("isPower").is_none());
        assert_eq!(value["callee"]["type"], "Identifier");
    }

    #[test]
    fn test_declarator_and_property_carry_their_own_type() {
        let decl = Node::VariableDeclaration(VariableDeclaration {
            declarations: vec![VariableDeclarator {
                id: Box::new(Node::Identifier(Identifier {
                    name: "x".to_string(),
                })),
                init: Box::new(number("1", 1.0)),
            }],
            kind: DeclarationKind::Const,
        });
        let value = serde_json::to_value(&decl).unwrap();
        assert_eq!(value["kind"], "const");
        assert_eq!(value["declarations"][0]["type"], "VariableDeclarator");

        let obj = Node::ObjectExpression(ObjectExpression {
            properties: vec![Property {
                key: Box::new(Node::Identifier(Identifier {
                    name: "k".to_string(),
                })),
                computed: false,
                value: Box::new(number("2", 2.0)),
                kind: PropertyKind::Init,
                method: false,
                shorthand: false,
            }],
        });
        let value = serde_json::to_value(&obj).unwrap();
        assert_eq!(value["properties"][0]["type"], "Property");
        assert_eq!(value["properties"][0]["kind"], "init");
    }

    #[test]
    fn test_comment_uses_caller_kind_as_type() {
        let comment = Node::Comment(Comment {
            kind: "Line".to_string(),
            value: " hi".to_string(),
        });
        let value = serde_json::to_value(&comment).unwrap();
        assert_eq!(value, json!({"type": "Line", "value": " hi"}));

        let back: Node = serde_json::from_value(value).unwrap();
        assert_eq!(back, comment);
    }

    #[test]
    fn test_comment_kind_shadowing_node_type() {
        for kind in ["Literal", "Identifier", "Program"] {
            let comment = Node::Comment(Comment {
                kind: kind.to_string(),
                value: "x".to_string(),
            });
            let back = Node::from_json(&comment.to_json().unwrap()).unwrap();
            assert_eq!(back, comment);
        }

        // extra fields mean a malformed node, not a comment
        let err = Node::from_json(r#"{"type": "Literal", "value": "x", "sType": "string"}"#)
            .unwrap_err();
        assert!(matches!(err, Error::Tree { .. }));
    }

    #[test]
    fn test_json_round_trip() {
        let tree = Node::Program(Program {
            body: vec![Node::expression_statement(Node::BinaryExpression(
                BinaryExpression {
                    operator: "===".to_string(),
                    s_type: Some(SType::Bool),
                    left: Box::new(number("1", 1.0)),
                    right: Box::new(Node::Literal(Literal {
                        value: LiteralValue::Null,
                        raw: "null".to_string(),
                        s_type: Some(SType::NeedsInference),
                    })),
                },
            ))],
            source_type: SourceKind::Script,
        });
        let text = tree.to_json().unwrap();
        assert_eq!(Node::from_json(&text).unwrap(), tree);
    }

    #[test]
    fn test_missing_type_is_rejected() {
        let err = Node::from_json(r#"{"name": "x"}"#).unwrap_err();
        assert!(matches!(err, Error::Tree { .. }));
    }
}
