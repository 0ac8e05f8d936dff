//! HTTP error handling.
//!
//! Maps the use-case error taxonomy onto Axum responses. Notification-family
//! errors answer with the bare field map (`{"email": ["..."]}`); everything
//! else uses the `{"error": {"code", "message"}}` envelope.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use domain::{DomainError, Notification, USER_GATEWAY_ERROR};
use serde::Serialize;
use thiserror::Error;

/// Application error types returned by HTTP handlers.
#[derive(Error, Debug)]
pub enum AppError {
    // Payload errors
    #[error("Unprocessable entity: {0}")]
    Unprocessable(Notification),

    #[error("Bad request: {0}")]
    BadRequest(Notification),

    #[error("Not found: {0}")]
    NotFound(Notification),

    // Authentication
    #[error("Authentication required")]
    Unauthorized,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[cfg(feature = "jwt")]
    #[error("Authentication error")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    // Internal
    #[error("Internal server error")]
    Internal(String),
}

/// Error response body for non-notification errors
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    code: String,
    message: String,
}

impl AppError {
    /// Get error code for client
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Unprocessable(_) => "VALIDATION_ERROR",
            AppError::BadRequest(_) => "BAD_REQUEST",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::Unauthorized => "UNAUTHORIZED",
            AppError::InvalidCredentials => "INVALID_CREDENTIALS",
            #[cfg(feature = "jwt")]
            AppError::Jwt(_) => "AUTH_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Get HTTP status code
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Unauthorized | AppError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            #[cfg(feature = "jwt")]
            AppError::Jwt(_) => StatusCode::UNAUTHORIZED,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Field map for payload errors.
    pub fn notification(&self) -> Option<&Notification> {
        match self {
            AppError::Unprocessable(n) | AppError::BadRequest(n) | AppError::NotFound(n) => Some(n),
            _ => None,
        }
    }

    /// Get user-facing message (hides internal details)
    pub fn user_message(&self) -> String {
        match self {
            #[cfg(feature = "jwt")]
            AppError::Jwt(e) => {
                tracing::warn!("JWT error: {:?}", e);
                "Invalid or expired token".to_string()
            }
            // The cause was logged where the error was raised.
            AppError::Internal(msg) => {
                tracing::debug!("Internal error: {}", msg);
                msg.clone()
            }

            // Use default message for others
            _ => self.to_string(),
        }
    }

    /// Treat a missing aggregate as a stale credential.
    ///
    /// Routes that act on the token subject use this: a valid token for a
    /// user that no longer exists must not leak a 404.
    pub fn stale_subject(self) -> Self {
        match self {
            AppError::NotFound(_) => AppError::Unauthorized,
            other => other,
        }
    }
}

// =============================================================================
// HTTP Response (Axum)
// =============================================================================

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        if let Some(notification) = self.notification() {
            return (status, Json(notification)).into_response();
        }

        let body = ErrorResponse {
            error: ErrorBody {
                code: self.code().to_string(),
                message: self.user_message(),
            },
        };

        (status, Json(body)).into_response()
    }
}

// =============================================================================
// Domain Error Conversion
// =============================================================================

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Notification(n) => AppError::Unprocessable(n),
            DomainError::Identifier(n) => AppError::BadRequest(n),
            DomainError::NotFound(n) => AppError::NotFound(n),
            DomainError::InvalidCredentials => AppError::InvalidCredentials,
            DomainError::Gateway(_) => AppError::Internal(USER_GATEWAY_ERROR.to_string()),
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}
