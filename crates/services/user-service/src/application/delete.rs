//! Delete user use case.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use domain::{DomainError, DomainResult, Identifier, User, UserGateway};

#[derive(Debug, Clone, Default)]
pub struct DeleteUserInput {
    pub id: Option<String>,
}

impl DeleteUserInput {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
        }
    }
}

/// Permanently remove a user.
#[async_trait]
pub trait DeleteUser: Send + Sync {
    async fn execute(&self, input: DeleteUserInput) -> DomainResult<()>;
}

pub struct DefaultDeleteUser {
    gateway: Arc<dyn UserGateway>,
}

impl DefaultDeleteUser {
    pub fn new(gateway: Arc<dyn UserGateway>) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl DeleteUser for DefaultDeleteUser {
    async fn execute(&self, input: DeleteUserInput) -> DomainResult<()> {
        debug!(?input, "deleting user");
        let id = Identifier::with(input.id.as_deref()).map_err(DomainError::identifier)?;

        let user = self
            .gateway
            .find_by_id(&id)
            .await
            .map_err(DomainError::gateway)?;
        if user.is_none() {
            return Err(DomainError::not_found(User::ENTITY_NAME, &id));
        }

        self.gateway
            .delete_by_id(&id)
            .await
            .map_err(DomainError::gateway)?;
        info!(user_id = %id, "user deleted");

        Ok(())
    }
}
