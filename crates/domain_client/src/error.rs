//! Client domain errors

use thiserror::Error;
use validator::ValidationErrors;

/// Errors that can occur in the client domain
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// The client to replace is not in the address book
    #[error("Client not found: {0}")]
    ClientNotFound(String),

    /// Another client with the same name already exists
    #[error("This client already exists in the address book: {0}")]
    DuplicateClient(String),

    /// Client fields failed validation
    #[error("Invalid client data: {0}")]
    Validation(String),
}

impl ClientError {
    pub fn invalid(message: impl Into<String>) -> Self {
        ClientError::Validation(message.into())
    }
}

impl From<ValidationErrors> for ClientError {
    fn from(errors: ValidationErrors) -> Self {
        ClientError::Validation(errors.to_string())
    }
}
