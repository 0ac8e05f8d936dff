//! Domain-level errors.
//!
//! [`ValidationError`] is what value objects and the aggregate return; it
//! never crosses a use-case boundary. Use cases translate it into a
//! [`DomainError`], which is all their callers ever see.

use thiserror::Error;

use crate::constants::FIELD_ID;
use crate::gateway::StoreError;
use crate::validation::{ErrorHandler, Notification};
use crate::values::Identifier;

/// Fixed message carried by every gateway failure.
pub const USER_GATEWAY_ERROR: &str = "user gateway error";

/// Validation failure raised by a value object or the aggregate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{handler}")]
pub struct ValidationError {
    handler: ErrorHandler,
}

impl ValidationError {
    pub fn with(handler: ErrorHandler) -> Self {
        Self { handler }
    }

    /// Error carrying exactly one message.
    pub fn single(message: impl Into<String>) -> Self {
        Self::with(ErrorHandler::single(message))
    }

    pub fn handler(&self) -> &ErrorHandler {
        &self.handler
    }

    pub fn into_handler(self) -> ErrorHandler {
        self.handler
    }
}

/// Errors returned by the use cases.
#[derive(Error, Debug)]
pub enum DomainError {
    /// One or more inputs are invalid, or a business rule failed
    #[error("Validation error: {0}")]
    Notification(Notification),

    /// The identifier itself is malformed
    #[error("Invalid identifier: {0}")]
    Identifier(Notification),

    /// A well-formed identifier resolved to nothing
    #[error("Not found: {0}")]
    NotFound(Notification),

    /// Authentication failed
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// The storage gateway failed; the cause is kept for logging only
    #[error("user gateway error")]
    Gateway(#[source] StoreError),
}

impl DomainError {
    /// Create a not found error for `entity`, e.g. `"user with id ... was not found"`
    pub fn not_found(entity: &str, id: &Identifier) -> Self {
        let message = format!("{} with id {} was not found", entity, id).to_lowercase();
        DomainError::NotFound(Notification::single(FIELD_ID, message))
    }

    /// Create an identifier error from a failed [`Identifier`] validation
    pub fn identifier(error: ValidationError) -> Self {
        let mut notification = Notification::new();
        notification.append(FIELD_ID, error.into_handler());
        DomainError::Identifier(notification)
    }

    /// Wrap a storage failure
    pub fn gateway(error: StoreError) -> Self {
        tracing::error!(error = %error, "{}", USER_GATEWAY_ERROR);
        DomainError::Gateway(error)
    }

    /// Field map for the notification-family variants.
    pub fn notification(&self) -> Option<&Notification> {
        match self {
            DomainError::Notification(n) | DomainError::Identifier(n) | DomainError::NotFound(n) => {
                Some(n)
            }
            DomainError::InvalidCredentials | DomainError::Gateway(_) => None,
        }
    }
}

/// Result type alias for use-case operations
pub type DomainResult<T> = Result<T, DomainError>;
