//! Operator type table
//!
//! Maps an exact operator token to its declared result type. The template
//! builder only reads the `result_type`; precedence and associativity are kept
//! for the parser that shares the table.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::ast::SType;
use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Associativity {
    Left,
    Right,
}

/// One row of the operator table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatorInfo {
    pub precedence: u8,
    pub associativity: Associativity,
    #[serde(rename = "type")]
    pub result_type: SType,
}

impl OperatorInfo {
    pub const fn new(precedence: u8, associativity: Associativity, result_type: SType) -> Self {
        Self {
            precedence,
            associativity,
            result_type,
        }
    }
}

static STANDARD_TABLE: Lazy<OperatorTable> = Lazy::new(|| {
    use Associativity::{Left, Right};

    let rows: [(&str, OperatorInfo); 17] = [
        ("^", OperatorInfo::new(8, Right, SType::Number)),
        ("*", OperatorInfo::new(7, Left, SType::Number)),
        ("/", OperatorInfo::new(7, Left, SType::Number)),
        ("%", OperatorInfo::new(7, Left, SType::Number)),
        ("+", OperatorInfo::new(6, Left, SType::Number)),
        ("-", OperatorInfo::new(6, Left, SType::Number)),
        ("++", OperatorInfo::new(6, Left, SType::String)),
        ("<", OperatorInfo::new(5, Left, SType::Bool)),
        ("<=", OperatorInfo::new(5, Left, SType::Bool)),
        (">", OperatorInfo::new(5, Left, SType::Bool)),
        (">=", OperatorInfo::new(5, Left, SType::Bool)),
        ("==", OperatorInfo::new(4, Left, SType::Bool)),
        ("!=", OperatorInfo::new(4, Left, SType::Bool)),
        ("===", OperatorInfo::new(4, Left, SType::Bool)),
        ("!==", OperatorInfo::new(4, Left, SType::Bool)),
        ("&&", OperatorInfo::new(3, Left, SType::Bool)),
        ("||", OperatorInfo::new(2, Left, SType::Bool)),
    ];

    OperatorTable {
        entries: rows
            .into_iter()
            .map(|(token, info)| (token.to_string(), info))
            .collect(),
    }
});

/// Read-only lookup from operator token to [`OperatorInfo`]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OperatorTable {
    entries: BTreeMap<String, OperatorInfo>,
}

impl OperatorTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in table for the source language
    pub fn standard() -> Self {
        STANDARD_TABLE.clone()
    }

    /// Parse a table from a JSON object keyed by operator token
    pub fn from_json_str(source: &str) -> Result<Self> {
        serde_json::from_str(source).map_err(|e| Error::OperatorTable {
            message: e.to_string(),
        })
    }

    /// Load a table from a JSON file
    pub fn from_path(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path)?;
        log::debug!("Loading operator table from {}", path.display());
        Self::from_json_str(&source)
    }

    pub fn insert(&mut self, token: impl Into<String>, info: OperatorInfo) {
        self.entries.insert(token.into(), info);
    }

    /// Look up a token. A missing entry is a driver defect.
    pub fn lookup(&self, token: &str) -> Result<&OperatorInfo> {
        self.entries
            .get(token)
            .ok_or_else(|| Error::unknown_operator(token))
    }

    pub fn result_type(&self, token: &str) -> Result<SType> {
        self.lookup(token).map(|info| info.result_type)
    }

    pub fn contains(&self, token: &str) -> bool {
        self.entries.contains_key(token)
    }

    /// Tokens in sorted order
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &OperatorInfo)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serialize the table back to pretty JSON
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| Error::OperatorTable {
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_table_types() {
        let table = OperatorTable::standard();
        assert_eq!(table.result_type("^").unwrap(), SType::Number);
        assert_eq!(table.result_type("++").unwrap(), SType::String);
        assert_eq!(table.result_type("==").unwrap(), SType::Bool);
        assert_eq!(table.result_type("&&").unwrap(), SType::Bool);
    }

    #[test]
    fn test_missing_token_is_unknown_operator() {
        let table = OperatorTable::standard();
        assert_eq!(
            table.lookup("<=>").unwrap_err(),
            Error::unknown_operator("<=>")
        );
    }

    #[test]
    fn test_from_json_str() {
        let table = OperatorTable::from_json_str(
            r#"{ "+": { "precedence": 6, "associativity": "left", "type": "number" },
                 "<>": { "precedence": 4, "associativity": "left", "type": "bool" } }"#,
        )
        .unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.result_type("<>").unwrap(), SType::Bool);
        assert!(!table.contains("-"));
    }

    #[test]
    fn test_from_json_str_rejects_bad_type() {
        let err = OperatorTable::from_json_str(
            r#"{ "+": { "precedence": 6, "associativity": "left", "type": "complex" } }"#,
        )
        .unwrap_err();
        assert!(matches!(err, Error::OperatorTable { .. }));
    }

    #[test]
    fn test_json_round_trip() {
        let table = OperatorTable::standard();
        let text = table.to_json().unwrap();
        assert_eq!(OperatorTable::from_json_str(&text).unwrap(), table);
    }

    #[test]
    fn test_tokens_are_sorted() {
        let mut table = OperatorTable::new();
        table.insert("b", OperatorInfo::new(1, Associativity::Left, SType::List));
        table.insert("a", OperatorInfo::new(1, Associativity::Left, SType::List));
        assert_eq!(table.tokens().collect::<Vec<_>>(), vec!["a", "b"]);
    }
}
