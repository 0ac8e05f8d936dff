//! Authenticate user use case.
//!
//! Resolves an email/password pair to a user id; the HTTP layer turns that
//! id into a bearer token.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use tracing::{debug, warn};

use domain::{DomainError, DomainResult, Email, PasswordEncoder, UserGateway};

/// Hash checked when the email is unknown so both paths cost the same.
const DUMMY_HASH: &str =
    "$argon2id$v=19$m=19456,t=2,p=1$ZHVtbXlzYWx0MTIzNDU2$ZHVtbXloYXNoMTIzNDU2Nzg5MDEyMzQ1Njc4OTAxMng";

#[derive(Clone, Default)]
pub struct AuthenticateUserInput {
    pub email: Option<String>,
    pub password: Option<String>,
}

impl AuthenticateUserInput {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: Some(email.into()),
            password: Some(password.into()),
        }
    }
}

impl fmt::Debug for AuthenticateUserInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthenticateUserInput")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthenticateUserOutput {
    pub id: String,
}

/// Verify credentials.
#[async_trait]
pub trait AuthenticateUser: Send + Sync {
    async fn execute(&self, input: AuthenticateUserInput) -> DomainResult<AuthenticateUserOutput>;
}

pub struct DefaultAuthenticateUser {
    gateway: Arc<dyn UserGateway>,
    encoder: Arc<dyn PasswordEncoder>,
}

impl DefaultAuthenticateUser {
    pub fn new(gateway: Arc<dyn UserGateway>, encoder: Arc<dyn PasswordEncoder>) -> Self {
        Self { gateway, encoder }
    }
}

#[async_trait]
impl AuthenticateUser for DefaultAuthenticateUser {
    async fn execute(&self, input: AuthenticateUserInput) -> DomainResult<AuthenticateUserOutput> {
        debug!(?input, "authenticating user");
        let Ok(email) = Email::with(input.email.as_deref()) else {
            warn!("login rejected: malformed email");
            return Err(DomainError::InvalidCredentials);
        };
        let raw = input.password.as_deref().unwrap_or_default();

        let user = self
            .gateway
            .find_by_email(&email)
            .await
            .map_err(DomainError::gateway)?;

        // SECURITY: verify even when the user doesn't exist so response
        // timing does not reveal which emails are registered.
        let verified = match &user {
            Some(user) => user.password().matches(raw, self.encoder.as_ref()),
            None => {
                self.encoder.matches(raw, DUMMY_HASH);
                false
            }
        };

        match user {
            Some(user) if verified => Ok(AuthenticateUserOutput {
                id: user.id().value(),
            }),
            _ => {
                warn!(email = %email, "login rejected: invalid credentials");
                Err(DomainError::InvalidCredentials)
            }
        }
    }
}
