//! Error types for the promptsmith CLI.
//!
//! Uses thiserror for derive macros; every variant maps to an exit code.

use crate::exit_codes;
use crate::prompt::TemplateError;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for promptsmith operations.
#[derive(Error, Debug)]
pub enum PromptError {
    /// The requested preset is not registered.
    #[error("unknown preset '{name}' (available: {})", .available.join(", "))]
    UnknownPreset { name: String, available: Vec<String> },

    /// A template references a placeholder that no default or supplied field provides.
    #[error("preset '{preset}' references missing placeholder '{name}'")]
    MissingPlaceholder { preset: String, name: String },

    /// The template itself is malformed.
    #[error("template error: {0}")]
    Template(#[from] TemplateError),

    /// The brief file could not be read or parsed.
    #[error("invalid brief '{}': {message}", .path.display())]
    Brief { path: PathBuf, message: String },

    /// The caller left out a required field or the request is otherwise unusable.
    #[error("{0}")]
    UserError(String),

    /// Writing the output failed.
    #[error("failed to write '{}': {source}", .path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl PromptError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            PromptError::UnknownPreset { .. } => exit_codes::USER_ERROR,
            PromptError::Brief { .. } => exit_codes::USER_ERROR,
            PromptError::UserError(_) => exit_codes::USER_ERROR,
            PromptError::MissingPlaceholder { .. } => exit_codes::TEMPLATE_FAILURE,
            PromptError::Template(_) => exit_codes::TEMPLATE_FAILURE,
            PromptError::Filesystem { .. } => exit_codes::FILESYSTEM_FAILURE,
        }
    }

    pub(crate) fn filesystem(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PromptError::Filesystem {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for promptsmith operations.
pub type Result<T> = std::result::Result<T, PromptError>;
