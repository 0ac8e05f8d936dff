//! Create user use case.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use tracing::{debug, info};

use domain::validation::Error;
use domain::{
    DomainError, DomainResult, Email, Notification, Password, PasswordEncoder, User, UserGateway,
    EMAIL_ALREADY_USED, FIELD_EMAIL, FIELD_PASSWORD, FIELD_USER,
};

use super::fold;

/// Raw registration data. Missing fields are `None`.
#[derive(Clone, Default)]
pub struct CreateUserInput {
    pub email: Option<String>,
    pub password: Option<String>,
}

impl CreateUserInput {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: Some(email.into()),
            password: Some(password.into()),
        }
    }
}

impl fmt::Debug for CreateUserInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CreateUserInput")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateUserOutput {
    pub id: String,
}

/// Register a new user.
#[async_trait]
pub trait CreateUser: Send + Sync {
    async fn execute(&self, input: CreateUserInput) -> DomainResult<CreateUserOutput>;
}

pub struct DefaultCreateUser {
    gateway: Arc<dyn UserGateway>,
    encoder: Arc<dyn PasswordEncoder>,
}

impl DefaultCreateUser {
    pub fn new(gateway: Arc<dyn UserGateway>, encoder: Arc<dyn PasswordEncoder>) -> Self {
        Self { gateway, encoder }
    }
}

#[async_trait]
impl CreateUser for DefaultCreateUser {
    async fn execute(&self, input: CreateUserInput) -> DomainResult<CreateUserOutput> {
        debug!(?input, "creating user");
        let mut notification = Notification::new();

        let email = fold(Email::with(input.email.as_deref()), FIELD_EMAIL, &mut notification);
        let password = fold(
            Password::with_raw_value(input.password.as_deref(), self.encoder.as_ref()),
            FIELD_PASSWORD,
            &mut notification,
        );
        let (Some(email), Some(password)) = (email, password) else {
            return Err(DomainError::Notification(notification));
        };

        let existing = self
            .gateway
            .find_by_email(&email)
            .await
            .map_err(DomainError::gateway)?;
        if existing.is_some() {
            notification.append_error(FIELD_EMAIL, Error::with(EMAIL_ALREADY_USED));
            return Err(DomainError::Notification(notification));
        }

        let user = match User::new(email, password) {
            Ok(user) => user,
            Err(e) => {
                notification.append(FIELD_USER, e.into_handler());
                return Err(DomainError::Notification(notification));
            }
        };

        let saved = self.gateway.save(user).await.map_err(DomainError::gateway)?;
        info!(user_id = %saved.id(), "user created");

        Ok(CreateUserOutput {
            id: saved.id().value(),
        })
    }
}
