//! Template builders
//!
//! This module provides the `TemplateBuilder` that turns parsed constructs into
//! target-tree nodes. The external parser calls it bottom-up, depth-first, as it
//! reduces subtrees. Builder operations are grouped into helper traits by concern:
//!
//! - `literals`: literal coercion (`LiteralBuilders`)
//! - `structural`: declarations, closures, member access, containers (`StructuralBuilders`)
//! - `operations`: binary/unary operator resolution (`OperatorBuilders`)
//! - `primitives`: host primitive rewrites and call dispatch (`PrimitiveBuilders`)

use std::sync::Arc;

use crate::operators::OperatorTable;

mod literals;
mod operations;
mod primitives;
mod structural;

pub use literals::{coerce_number, LiteralBuilders};
pub use operations::{rewrite_operator, OperatorBuilders, POWER_OPERATOR};
pub use primitives::{Primitive, PrimitiveBuilders, PrimitiveTable};
pub use structural::StructuralBuilders;

/// Builds target-tree nodes
///
/// Holds no mutable state: the operator table and the primitive dispatch table
/// are fixed at construction, so every builder is a pure function of its
/// arguments and a builder may be shared freely across threads.
#[derive(Debug, Clone)]
pub struct TemplateBuilder {
    /// Operator token -> declared result type
    operators: Arc<OperatorTable>,
    /// Callee names that are rewritten to host primitives
    primitives: PrimitiveTable,
}

impl TemplateBuilder {
    /// Create a builder over the given operator table with the standard primitives
    pub fn new(operators: impl Into<Arc<OperatorTable>>) -> Self {
        Self {
            operators: operators.into(),
            primitives: PrimitiveTable::standard(),
        }
    }

    /// Create a builder over [`OperatorTable::standard`]
    pub fn with_standard_operators() -> Self {
        Self::new(OperatorTable::standard())
    }

    /// Replace the primitive dispatch table
    pub fn with_primitives(mut self, primitives: PrimitiveTable) -> Self {
        self.primitives = primitives;
        self
    }

    /// Get reference to the operator table
    pub fn operators(&self) -> &OperatorTable {
        &self.operators
    }

    /// Get reference to the primitive dispatch table
    pub fn primitives(&self) -> &PrimitiveTable {
        &self.primitives
    }
}

impl Default for TemplateBuilder {
    fn default() -> Self {
        Self::with_standard_operators()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_builder_is_send_and_sync() {
        assert_send_sync::<TemplateBuilder>();
    }

    #[test]
    fn test_builder_shares_injected_table() {
        let table = Arc::new(OperatorTable::standard());
        let builder = TemplateBuilder::new(Arc::clone(&table));
        assert_eq!(builder.operators(), &*table);
        assert!(builder.primitives().contains("print"));
    }
}
