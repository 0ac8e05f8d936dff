//! HTTP API Library
//!
//! This crate exposes the user-account use cases over REST. The use cases
//! run in-process; authentication is a bearer JWT whose subject is the
//! user's identifier.

pub mod config;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod security;
pub mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use tower_http::trace::TraceLayer;
use tracing::info;

use user_service_lib::infra::Database;

use crate::config::ApiConfig;
use crate::routes::create_router;
use crate::security::TokenService;
use crate::state::AppState;

/// Connect to the database, apply migrations and serve HTTP until shutdown.
pub async fn run_server(config: ApiConfig) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::connect(&config.database).await?;

    let use_cases = user_service_lib::use_cases(&db);
    let tokens = Arc::new(TokenService::new(&config.jwt));
    let state = AppState::new(use_cases, tokens).with_database(db);

    let app = create_router(state).layer(TraceLayer::new_for_http());

    let addr: SocketAddr = config.bind_address().parse()?;
    info!(service = %config.service.service_name, "listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
