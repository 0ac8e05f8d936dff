//! Token issuing and verification.

mod token;

pub use token::{Claims, TokenResponse, TokenService};
