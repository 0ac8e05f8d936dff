//! Application state for dependency injection.

use std::sync::Arc;

use user_service_lib::application::UseCases;
use user_service_lib::infra::Database;

use crate::security::TokenService;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub use_cases: UseCases,
    pub tokens: Arc<TokenService>,
    /// Pinged by the health check; absent when the gateway is not relational.
    pub database: Option<Database>,
}

impl AppState {
    pub fn new(use_cases: UseCases, tokens: Arc<TokenService>) -> Self {
        Self {
            use_cases,
            tokens,
            database: None,
        }
    }

    pub fn with_database(mut self, database: Database) -> Self {
        self.database = Some(database);
        self
    }
}
