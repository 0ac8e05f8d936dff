//! Value objects - immutable, self-validating wrappers around primitive data.
//!
//! Every factory fails fast: the first violated rule is returned as a
//! [`ValidationError`](crate::ValidationError) carrying exactly one message.

mod email;
mod identifier;
mod password;

pub use email::Email;
pub use identifier::Identifier;
pub use password::{Argon2Encoder, EncodingError, Password, PasswordEncoder};
