//! Application layer - one module per use case.
//!
//! Each use case is its own trait with a single `execute` method and a
//! `Default*` implementation holding the gateway and the password encoder.
//! Value-object failures are folded into a [`Notification`] here; callers
//! only ever see a [`DomainError`](domain::DomainError).

mod authenticate;
mod create;
mod delete;
mod find;
mod update;

use std::sync::Arc;

use domain::{Notification, PasswordEncoder, UserGateway, ValidationError};

pub use authenticate::{
    AuthenticateUser, AuthenticateUserInput, AuthenticateUserOutput, DefaultAuthenticateUser,
};
pub use create::{CreateUser, CreateUserInput, CreateUserOutput, DefaultCreateUser};
pub use delete::{DefaultDeleteUser, DeleteUser, DeleteUserInput};
pub use find::{DefaultFindUser, FindUser, FindUserInput, FindUserOutput};
pub use update::{DefaultUpdateUser, UpdateUser, UpdateUserInput};

/// Keep the value on success; on failure record its errors under `field`.
fn fold<T>(
    result: Result<T, ValidationError>,
    field: &str,
    notification: &mut Notification,
) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            notification.append(field, e.into_handler());
            None
        }
    }
}

/// All user use cases wired to one gateway and encoder.
#[derive(Clone)]
pub struct UseCases {
    pub create: Arc<dyn CreateUser>,
    pub find: Arc<dyn FindUser>,
    pub update: Arc<dyn UpdateUser>,
    pub delete: Arc<dyn DeleteUser>,
    pub authenticate: Arc<dyn AuthenticateUser>,
}

impl UseCases {
    /// Build the default implementation of every use case.
    pub fn new(gateway: Arc<dyn UserGateway>, encoder: Arc<dyn PasswordEncoder>) -> Self {
        Self {
            create: Arc::new(DefaultCreateUser::new(gateway.clone(), encoder.clone())),
            find: Arc::new(DefaultFindUser::new(gateway.clone())),
            update: Arc::new(DefaultUpdateUser::new(gateway.clone(), encoder.clone())),
            delete: Arc::new(DefaultDeleteUser::new(gateway.clone())),
            authenticate: Arc::new(DefaultAuthenticateUser::new(gateway, encoder)),
        }
    }
}
