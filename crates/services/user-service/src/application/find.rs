//! Find user use case.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use tracing::debug;

use domain::{DomainError, DomainResult, Identifier, User, UserGateway};

#[derive(Debug, Clone, Default)]
pub struct FindUserInput {
    pub id: Option<String>,
}

impl FindUserInput {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FindUserOutput {
    pub id: String,
    pub email: String,
}

/// Look a user up by id.
#[async_trait]
pub trait FindUser: Send + Sync {
    async fn execute(&self, input: FindUserInput) -> DomainResult<FindUserOutput>;
}

pub struct DefaultFindUser {
    gateway: Arc<dyn UserGateway>,
}

impl DefaultFindUser {
    pub fn new(gateway: Arc<dyn UserGateway>) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl FindUser for DefaultFindUser {
    async fn execute(&self, input: FindUserInput) -> DomainResult<FindUserOutput> {
        debug!(?input, "finding user");
        let id = Identifier::with(input.id.as_deref()).map_err(DomainError::identifier)?;

        let user = self
            .gateway
            .find_by_id(&id)
            .await
            .map_err(DomainError::gateway)?
            .ok_or_else(|| DomainError::not_found(User::ENTITY_NAME, &id))?;

        Ok(FindUserOutput {
            id: user.id().value(),
            email: user.email().address().to_string(),
        })
    }
}
