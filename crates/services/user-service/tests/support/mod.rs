//! Shared fixtures for use-case tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use domain::{
    Email, EncodingError, Identifier, Password, PasswordEncoder, StoreError, User, UserGateway,
};

/// Reversible encoder so tests don't pay for Argon2.
pub struct PlainEncoder;

impl PasswordEncoder for PlainEncoder {
    fn encode(&self, raw: &str) -> Result<String, EncodingError> {
        Ok(format!("plain:{}", raw))
    }

    fn matches(&self, raw: &str, encoded: &str) -> bool {
        encoded == format!("plain:{}", raw)
    }

    fn is_encoded(&self, value: &str) -> bool {
        value.starts_with("plain:")
    }
}

pub fn encoder() -> Arc<dyn PasswordEncoder> {
    Arc::new(PlainEncoder)
}

pub fn user(address: &str, raw_password: &str) -> User {
    let email = Email::with(Some(address)).unwrap();
    let password = Password::with_raw_value(Some(raw_password), &PlainEncoder).unwrap();
    User::new(email, password).unwrap()
}

/// In-memory gateway enforcing email uniqueness on save, like the real store.
#[derive(Default)]
pub struct InMemoryUserGateway {
    users: Mutex<HashMap<Identifier, User>>,
}

impl InMemoryUserGateway {
    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        let gateway = Self::default();
        {
            let mut map = gateway.users.lock().unwrap();
            for user in users {
                map.insert(*user.id(), user);
            }
        }
        gateway
    }

    pub fn len(&self) -> usize {
        self.users.lock().unwrap().len()
    }

    pub fn get(&self, id: &Identifier) -> Option<User> {
        self.users.lock().unwrap().get(id).cloned()
    }
}

#[async_trait]
impl UserGateway for InMemoryUserGateway {
    async fn save(&self, user: User) -> Result<User, StoreError> {
        let mut users = self.users.lock().unwrap();
        let taken = users
            .values()
            .any(|other| other.email() == user.email() && other.id() != user.id());
        if taken {
            return Err(StoreError::new("duplicate key value violates unique constraint"));
        }
        users.insert(*user.id(), user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: &Identifier) -> Result<Option<User>, StoreError> {
        Ok(self.users.lock().unwrap().get(id).cloned())
    }

    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, StoreError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .values()
            .find(|user| user.email() == email)
            .cloned())
    }

    async fn delete_by_id(&self, id: &Identifier) -> Result<(), StoreError> {
        self.users.lock().unwrap().remove(id);
        Ok(())
    }
}
