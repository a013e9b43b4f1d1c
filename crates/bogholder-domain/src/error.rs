//! Model-level error type.

use thiserror::Error;

/// Failures raised by model setters and getters.
///
/// This is the closed set the view-model layer's classifier dispatches over:
/// argument shape first, then repository, then business, then the catch-all.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ModelError {
    /// The supplied value has the wrong shape for the named parameter.
    #[error("invalid argument `{parameter}`: {message}")]
    Argument { parameter: String, message: String },
    /// A data-access collaborator failed.
    #[error("{0}")]
    Repository(String),
    /// A domain rule was violated by a collaborator call.
    #[error("{0}")]
    Business(String),
    /// Anything else.
    #[error("{0}")]
    Other(String),
}

impl ModelError {
    pub fn argument(parameter: impl Into<String>, message: impl Into<String>) -> Self {
        ModelError::Argument {
            parameter: parameter.into(),
            message: message.into(),
        }
    }
}

pub type ModelResult<T> = Result<T, ModelError>;
