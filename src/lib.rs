//! estemplate: ESTree template builders for a small expression-oriented language
//!
//! This library provides the code-generation layer of a source-to-source compiler.
//! A parser calls the builders bottom-up to assemble an ESTree-shaped tree whose
//! nodes carry `sType` tags for later inference passes.

pub mod ast;
pub mod cli;
pub mod error;
pub mod operators;
pub mod render;
pub mod template;

pub use error::{Error as TemplateError, Result as TemplateResult};

// Re-export commonly used types
pub use ast::{Node, SType};
pub use operators::{OperatorInfo, OperatorTable};
pub use render::render_program;
pub use template::{
    LiteralBuilders, OperatorBuilders, PrimitiveBuilders, StructuralBuilders, TemplateBuilder,
};
