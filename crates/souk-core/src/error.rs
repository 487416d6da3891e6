//! Error types for the souk library.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all marketplace operations.
#[derive(Error, Debug)]
pub enum SoukError {
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Category id not present in the catalog
    #[error("Unknown category '{id}'")]
    UnknownCategory { id: String },
    /// Chat not found for the given ID
    #[error("Chat with ID {id} not found")]
    ChatNotFound { id: String },
    /// Product not found for the given ID
    #[error("Product with ID {id} not found")]
    ProductNotFound { id: String },
    /// A wizard gate refused to let the flow continue
    #[error("Cannot continue past the '{step}' step: {reason}")]
    WizardIncomplete { step: String, reason: String },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> SoukError {
        SoukError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

/// Builder for wizard gate errors.
pub struct WizardIncompleteBuilder {
    step: String,
}

impl WizardIncompleteBuilder {
    /// Create a new builder for the step whose gate refused.
    pub fn new(step: impl fmt::Display) -> Self {
        Self {
            step: step.to_string(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> SoukError {
        SoukError::WizardIncomplete {
            step: self.step,
            reason: reason.into(),
        }
    }
}

impl SoukError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates a builder for refused wizard transitions.
    pub fn wizard_incomplete(step: impl fmt::Display) -> WizardIncompleteBuilder {
        WizardIncompleteBuilder::new(step)
    }
}

/// Extension trait for Result to provide concise error mapping with
/// anyhow-style context.
pub trait ResultExt<T, E> {
    /// Add context to any error type, converting to SoukError.
    fn with_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;
}

impl<T, E> ResultExt<T, E> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn with_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|e| SoukError::Configuration {
            message: format!("{}: {}", context, e),
        })
    }
}

/// Result type alias for marketplace operations
pub type Result<T> = std::result::Result<T, SoukError>;
