//! Update user use case.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use domain::validation::Error;
use domain::{
    DomainError, DomainResult, Email, Identifier, Notification, Password, PasswordEncoder, User,
    UserGateway, EMAIL_ALREADY_USED, FIELD_EMAIL, FIELD_PASSWORD, FIELD_USER,
};

use super::fold;

/// Replacement email and password for an existing user.
#[derive(Clone, Default)]
pub struct UpdateUserInput {
    pub id: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

impl UpdateUserInput {
    pub fn new(
        id: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            id: Some(id.into()),
            email: Some(email.into()),
            password: Some(password.into()),
        }
    }
}

impl fmt::Debug for UpdateUserInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UpdateUserInput")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Replace a user's email and password.
#[async_trait]
pub trait UpdateUser: Send + Sync {
    async fn execute(&self, input: UpdateUserInput) -> DomainResult<()>;
}

pub struct DefaultUpdateUser {
    gateway: Arc<dyn UserGateway>,
    encoder: Arc<dyn PasswordEncoder>,
}

impl DefaultUpdateUser {
    pub fn new(gateway: Arc<dyn UserGateway>, encoder: Arc<dyn PasswordEncoder>) -> Self {
        Self { gateway, encoder }
    }

    /// `Some(email)` unless another user already owns it.
    ///
    /// The owner is compared by id, so keeping one's own address passes.
    async fn available_email(
        &self,
        id: &Identifier,
        email: Email,
        notification: &mut Notification,
    ) -> DomainResult<Option<Email>> {
        let owner = self
            .gateway
            .find_by_email(&email)
            .await
            .map_err(DomainError::gateway)?;

        match owner {
            Some(owner) if owner.id() != id => {
                notification.append_error(FIELD_EMAIL, Error::with(EMAIL_ALREADY_USED));
                Ok(None)
            }
            _ => Ok(Some(email)),
        }
    }
}

#[async_trait]
impl UpdateUser for DefaultUpdateUser {
    async fn execute(&self, input: UpdateUserInput) -> DomainResult<()> {
        debug!(?input, "updating user");
        let id = Identifier::with(input.id.as_deref()).map_err(DomainError::identifier)?;

        let mut user = self
            .gateway
            .find_by_id(&id)
            .await
            .map_err(DomainError::gateway)?
            .ok_or_else(|| DomainError::not_found(User::ENTITY_NAME, &id))?;

        let mut notification = Notification::new();

        let email = match fold(Email::with(input.email.as_deref()), FIELD_EMAIL, &mut notification) {
            Some(email) => self.available_email(&id, email, &mut notification).await?,
            None => None,
        };
        let password = fold(
            Password::with_raw_value(input.password.as_deref(), self.encoder.as_ref()),
            FIELD_PASSWORD,
            &mut notification,
        );
        let (Some(email), Some(password)) = (email, password) else {
            return Err(DomainError::Notification(notification));
        };

        if let Err(e) = user
            .update_email(email)
            .and_then(|user| user.update_password(password))
        {
            notification.append(FIELD_USER, e.into_handler());
            return Err(DomainError::Notification(notification));
        }

        self.gateway.save(user).await.map_err(DomainError::gateway)?;
        info!(user_id = %id, "user updated");

        Ok(())
    }
}
