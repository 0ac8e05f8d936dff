//! Storage gateway contract.
//!
//! The use cases depend only on this trait; the relational adapter lives in
//! `user-service`.

use async_trait::async_trait;
use thiserror::Error;

use crate::user::User;
use crate::values::{Email, Identifier};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Generic store failure reported by a gateway implementation.
#[derive(Error, Debug)]
#[error("{message}")]
pub struct StoreError {
    message: String,
    #[source]
    source: Option<BoxError>,
}

impl StoreError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    pub fn with_source<E>(message: impl Into<String>, source: E) -> Self
    where
        E: Into<BoxError>,
    {
        Self {
            message: message.into(),
            source: Some(source.into()),
        }
    }
}

/// Persistence boundary for the [`User`] aggregate.
///
/// Email uniqueness is the store's responsibility: a duplicate written
/// concurrently must be rejected by `save`.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserGateway: Send + Sync {
    /// Insert or update the aggregate, returning what was persisted
    async fn save(&self, user: User) -> Result<User, StoreError>;

    async fn find_by_id(&self, id: &Identifier) -> Result<Option<User>, StoreError>;

    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, StoreError>;

    /// Delete by id. A missing row is not an error.
    async fn delete_by_id(&self, id: &Identifier) -> Result<(), StoreError>;
}
