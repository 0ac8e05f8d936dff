//! User Service Library
//!
//! This crate provides the user-account use cases and the relational
//! gateway they run against. The HTTP layer in `api` embeds it in-process.

pub mod application;
pub mod infra;
pub mod persistence;

use std::sync::Arc;

use tracing::info;

use common::DatabaseConfig;
use domain::{Argon2Encoder, PasswordEncoder};

use crate::application::UseCases;
use crate::infra::Database;
use crate::persistence::SeaOrmUserGateway;

/// Build every use case against a SeaORM gateway with the Argon2 encoder.
pub fn use_cases(db: &Database) -> UseCases {
    let encoder: Arc<dyn PasswordEncoder> = Arc::new(Argon2Encoder);
    let gateway = Arc::new(SeaOrmUserGateway::new(db.get_connection(), encoder.clone()));
    UseCases::new(gateway, encoder)
}

/// Run migrations (for CLI commands).
pub async fn run_migrations(
    action: MigrateAction,
    config: &DatabaseConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::connect_without_migrations(config).await?;

    match action {
        MigrateAction::Up => {
            db.run_migrations().await?;
            info!("Migrations applied successfully");
        }
        MigrateAction::Down => {
            db.rollback_migration().await?;
            info!("Rolled back last migration");
        }
        MigrateAction::Status => {
            let status = db.migration_status().await?;
            for (name, applied) in status {
                let marker = if applied { "[x]" } else { "[ ]" };
                println!("{} {}", marker, name);
            }
        }
        MigrateAction::Fresh => {
            db.fresh_migrations().await?;
            info!("Database reset and migrations applied");
        }
    }

    Ok(())
}

/// Migration action type.
#[derive(Debug, Clone, Copy)]
pub enum MigrateAction {
    Up,
    Down,
    Status,
    Fresh,
}
