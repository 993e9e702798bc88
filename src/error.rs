//! Error types for the contact API.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur while creating or retrieving contacts.
#[derive(Error, Debug)]
pub enum ContactError {
    /// The request was rejected by a business rule
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// The backing store could not complete the operation
    #[error("Storage error: {0}")]
    Storage(String),
}

impl ContactError {
    /// Whether the caller supplied bad input (as opposed to a server fault).
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

/// Errors that can occur while configuring and wiring the application.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A component was built without one of its required collaborators
    #[error("Missing required dependency: {0}")]
    MissingDependency(String),

    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Failed to load .env file
    #[error("Failed to load .env file: {0}")]
    DotenvError(String),
}

/// Convenience type alias for Results with ContactError
pub type ContactResult<T> = Result<T, ContactError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
