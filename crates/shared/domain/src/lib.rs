//! Domain layer - User aggregate, value objects and validation.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! Persistence is reached only through the [`UserGateway`] trait and password
//! hashing only through the [`PasswordEncoder`] capability, so both can be
//! substituted in tests.

pub mod constants;
pub mod error;
pub mod gateway;
pub mod time;
pub mod user;
pub mod validation;
pub mod values;

pub use constants::*;
pub use error::{DomainError, DomainResult, ValidationError, USER_GATEWAY_ERROR};
pub use gateway::{StoreError, UserGateway};
pub use user::User;
pub use validation::{ErrorHandler, Notification};
pub use values::{Argon2Encoder, Email, EncodingError, Identifier, Password, PasswordEncoder};

#[cfg(any(test, feature = "test-utils"))]
pub use gateway::MockUserGateway;
