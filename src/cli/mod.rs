//! Command-line interface module
//!
//! This module contains the implementations for the CLI subcommands.

use std::path::PathBuf;

pub mod operators;
pub mod render;

/// Common CLI utilities
pub mod utils {
    use crate::error::Result as TemplateResult;
    use std::path::Path;

    /// Write output to file or stdout
    pub fn write_output(content: &str, output_path: Option<&Path>) -> TemplateResult<()> {
        match output_path {
            Some(path) => {
                std::fs::write(path, content)?;
                log::info!("Output written to: {}", path.display());
                Ok(())
            }
            None => {
                println!("{}", content);
                Ok(())
            }
        }
    }
}

/// Output format for table listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum TableFormat {
    #[default]
    Text,
    Json,
}

/// Arguments for the operators command
#[derive(Debug, Clone)]
pub struct OperatorsArgs {
    pub table_path: Option<PathBuf>,
    pub format: TableFormat,
}
