//! Error types for the genprompt CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.
//! The prompt library itself only ever produces [`TemplateError`]; everything
//! else here comes from configuration, variable files and output handling.

use crate::exit_codes;
use crate::prompt::TemplateError;
use thiserror::Error;

/// Main error type for genprompt operations.
///
/// Each variant maps to a specific exit code.
#[derive(Error, Debug)]
pub enum GenpromptError {
    /// User provided invalid arguments or configuration.
    #[error("{0}")]
    UserError(String),

    /// A template identifier did not name a registered template.
    #[error(transparent)]
    TemplateNotFound(#[from] TemplateError),

    /// Strict rendering left placeholders without a value.
    #[error("unresolved placeholders in {key}: {}", .names.join(", "))]
    UnresolvedPlaceholders {
        /// Identifier of the rendered template.
        key: String,
        /// Placeholder names with no supplied value.
        names: Vec<String>,
    },

    /// Reading input or writing output failed.
    #[error("I/O failed: {0}")]
    Io(String),
}

impl GenpromptError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            GenpromptError::UserError(_) => exit_codes::USER_ERROR,
            GenpromptError::TemplateNotFound(_) => exit_codes::TEMPLATE_NOT_FOUND,
            GenpromptError::UnresolvedPlaceholders { .. } => exit_codes::UNRESOLVED_PLACEHOLDERS,
            GenpromptError::Io(_) => exit_codes::IO_FAILURE,
        }
    }
}

/// Result type alias for genprompt operations.
pub type Result<T> = std::result::Result<T, GenpromptError>;
