//! User aggregate root.

use chrono::{DateTime, Utc};

use crate::error::ValidationError;
use crate::time;
use crate::validation::{Error, ErrorHandler};
use crate::values::{Email, Identifier, Password};

/// User aggregate.
///
/// Every constructor and mutator ends with [`User::validate`]; there is no
/// way to obtain an instance that skipped it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: Identifier,
    email: Email,
    password: Password,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl User {
    /// Entity name used in not-found messages
    pub const ENTITY_NAME: &'static str = "User";

    /// Register a new user with a fresh id and `created_at = updated_at = now`.
    pub fn new(email: Email, password: Password) -> Result<Self, ValidationError> {
        let now = time::now();
        Self::with(Identifier::generate(), email, password, now, now)
    }

    /// Rehydrate a user whose fields are all known (e.g. from storage).
    pub fn with(
        id: Identifier,
        email: Email,
        password: Password,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Result<Self, ValidationError> {
        let user = Self {
            id,
            email,
            password,
            created_at,
            updated_at,
        };
        user.validate()?;
        Ok(user)
    }

    /// Replace the email, re-stamp `updated_at` and re-validate. On failure
    /// `self` is left as it was.
    pub fn update_email(&mut self, email: Email) -> Result<&mut Self, ValidationError> {
        let mut next = self.clone();
        next.email = email;
        next.updated_at = time::now();
        next.validate()?;
        *self = next;
        Ok(self)
    }

    /// Replace the password, re-stamp `updated_at` and re-validate.
    pub fn update_password(&mut self, password: Password) -> Result<&mut Self, ValidationError> {
        let mut next = self.clone();
        next.password = password;
        next.updated_at = time::now();
        next.validate()?;
        *self = next;
        Ok(self)
    }

    /// Check the aggregate's own invariants, reporting all of them at once.
    ///
    /// Presence of every field is guaranteed by the types; what remains is
    /// the ordering of the audit timestamps.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut handler = ErrorHandler::new();

        if self.updated_at < self.created_at {
            handler.append(Error::with("updated at must not come before created at"));
        }

        if handler.has_error() {
            return Err(ValidationError::with(handler));
        }
        Ok(())
    }

    pub fn id(&self) -> &Identifier {
        &self.id
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn password(&self) -> &Password {
        &self.password
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}
