//! Persistence layer - SeaORM implementation of the user gateway.

pub mod entities;
mod user_gateway;

pub use user_gateway::SeaOrmUserGateway;
