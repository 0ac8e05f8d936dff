//! HTTP handlers.

pub mod health_handler;
pub mod user_handler;

pub use health_handler::health_routes;
pub use user_handler::{public_user_routes, user_routes};
