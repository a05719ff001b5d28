use miette::Diagnostic;
use thiserror::Error;

/// Result type for template operations
pub type Result<T> = std::result::Result<T, Error>;

/// Custom error types for the template layer
///
/// Only driver-side contract violations end up here. Diagnostics meant for the
/// generated program's user are emitted as `console.log` nodes instead.
#[derive(Error, Debug, Diagnostic, Clone, PartialEq)]
pub enum Error {
    #[error("I/O error: {0}")]
    #[diagnostic(code(estemplate::io_error))]
    Io(String),

    #[error("Unknown operator token: {operator:?}")]
    #[diagnostic(
        code(estemplate::unknown_operator),
        help("every operator the parser can produce needs an entry in the operator table")
    )]
    UnknownOperator { operator: String },

    #[error("Invalid operator table: {message}")]
    #[diagnostic(code(estemplate::operator_table))]
    OperatorTable { message: String },

    #[error("Invalid template tree: {message}")]
    #[diagnostic(code(estemplate::tree_error))]
    Tree { message: String },

    #[error("Rendering failed: {message}")]
    #[diagnostic(code(estemplate::render_error))]
    Render { message: String },
}

impl Error {
    /// Create an unknown operator error
    pub fn unknown_operator(operator: impl Into<String>) -> Self {
        Error::UnknownOperator {
            operator: operator.into(),
        }
    }

    /// Create a rendering error
    pub fn render(message: impl Into<String>) -> Self {
        Error::Render {
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}
