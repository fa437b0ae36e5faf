//! Harness error types
//!
//! Selection errors are recovered by the dispatcher with a re-prompt. Primitive
//! and encoding errors abort the current workflow only. Console I/O errors are
//! the only ones that end the interactive loop.

use thiserror::Error;

/// Harness error type
#[derive(Error, Debug)]
pub enum HarnessError {
    /// Input outside the enumerated menu range
    #[error("Invalid selection '{input}' for {menu}")]
    InvalidSelection { menu: &'static str, input: String },

    /// Index parsed but the catalog has no entry for it
    ///
    /// Handled exactly like `InvalidSelection`.
    #[error("No {family} algorithm at index {index}")]
    UnresolvedParameter { family: &'static str, index: usize },

    /// Parameter handed to a session or workflow of the other family
    #[error("{algorithm} is not a {expected} algorithm")]
    FamilyMismatch {
        algorithm: String,
        expected: &'static str,
    },

    /// The primitive provider rejected an operation
    #[error("Primitive failure: {0}")]
    Primitive(#[from] pqc_primitives::PqcError),

    /// Message text could not be turned into signable bytes
    #[error("Message encoding failed: {0}")]
    Encoding(String),

    /// Configuration file or environment is invalid
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization of a run report failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Console I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl HarnessError {
    /// Selection problems re-prompt the same menu
    pub fn is_selection_error(&self) -> bool {
        matches!(
            self,
            HarnessError::InvalidSelection { .. } | HarnessError::UnresolvedParameter { .. }
        )
    }

    /// Failures that abort a single workflow run and return to the main menu
    pub fn is_workflow_failure(&self) -> bool {
        matches!(
            self,
            HarnessError::Primitive(_)
                | HarnessError::Encoding(_)
                | HarnessError::FamilyMismatch { .. }
                | HarnessError::Serialization(_)
        )
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, HarnessError>;
