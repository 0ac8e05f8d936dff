//! Common utilities shared across the workspace.
//!
//! This crate provides:
//! - HTTP error mapping for the domain error taxonomy
//! - Configuration structures loaded from the environment

pub mod config;
pub mod error;

pub use config::*;
pub use error::{AppError, AppResult};
