//! Password value object and the hashing capability behind it.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::constants::{MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH};
use crate::error::ValidationError;

/// Hashing failed inside the encoder.
#[derive(Error, Debug, Clone)]
#[error("Password hash failed: {0}")]
pub struct EncodingError(pub String);

/// One-way password hashing strategy.
///
/// Injected into the use cases so tests can substitute a cheaper strategy.
pub trait PasswordEncoder: Send + Sync {
    /// Salt and hash a raw secret
    fn encode(&self, raw: &str) -> Result<String, EncodingError>;

    /// Check a raw secret against an encoded value
    fn matches(&self, raw: &str, encoded: &str) -> bool;

    /// Whether `value` looks like something [`encode`](Self::encode) produced
    fn is_encoded(&self, value: &str) -> bool;
}

static ARGON2_PHC_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\$argon2(?:id|i|d)\$v=\d+\$m=\d+,t=\d+,p=\d+\$[A-Za-z0-9+/]+\$[A-Za-z0-9+/]+$")
        .expect("argon2 pattern is a valid regex")
});

/// Argon2id encoder producing PHC strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct Argon2Encoder;

impl Argon2Encoder {
    /// Get Argon2 instance with default config.
    #[inline]
    fn argon2() -> Argon2<'static> {
        Argon2::default()
    }
}

impl PasswordEncoder for Argon2Encoder {
    fn encode(&self, raw: &str) -> Result<String, EncodingError> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Self::argon2()
            .hash_password(raw.as_bytes(), &salt)
            .map_err(|e| EncodingError(e.to_string()))?;
        Ok(hash.to_string())
    }

    fn matches(&self, raw: &str, encoded: &str) -> bool {
        match PasswordHash::new(encoded) {
            Ok(parsed) => Self::argon2()
                .verify_password(raw.as_bytes(), &parsed)
                .is_ok(),
            Err(_) => false,
        }
    }

    fn is_encoded(&self, value: &str) -> bool {
        ARGON2_PHC_PATTERN.is_match(value)
    }
}

/// Hashed password. The raw secret is never retained.
#[derive(Clone, PartialEq, Eq)]
pub struct Password {
    value: String,
}

// Don't expose hash in debug output (security)
impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Password")
            .field("value", &"[REDACTED]")
            .finish()
    }
}

impl Password {
    /// Validate a raw secret and hash it.
    ///
    /// Rules, first failure wins: present, non-blank, between
    /// [`MIN_PASSWORD_LENGTH`] and [`MAX_PASSWORD_LENGTH`] characters once
    /// trimmed. The trimmed secret is what gets hashed.
    pub fn with_raw_value(
        value: Option<&str>,
        encoder: &dyn PasswordEncoder,
    ) -> Result<Self, ValidationError> {
        let value = value.ok_or_else(|| ValidationError::single("password must not be null"))?;

        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::single("password must not be empty"));
        }

        let length = trimmed.chars().count();
        if length < MIN_PASSWORD_LENGTH {
            return Err(ValidationError::single(format!(
                "password must have more than {} characters",
                MIN_PASSWORD_LENGTH - 1
            )));
        }

        if length > MAX_PASSWORD_LENGTH {
            return Err(ValidationError::single(format!(
                "password must not have more than {} characters",
                MAX_PASSWORD_LENGTH
            )));
        }

        let value = encoder.encode(trimmed).map_err(|e| {
            tracing::error!(error = %e, "password encoding failed");
            ValidationError::single("password could not be encoded")
        })?;

        Ok(Self { value })
    }

    /// Rehydrate from an already-hashed value (from storage).
    pub fn with_encoded_value(
        value: &str,
        encoder: &dyn PasswordEncoder,
    ) -> Result<Self, ValidationError> {
        if !encoder.is_encoded(value) {
            return Err(ValidationError::single("password must be encoded"));
        }
        Ok(Self {
            value: value.to_string(),
        })
    }

    /// Verify a raw secret against this hash.
    pub fn matches(&self, raw: &str, encoder: &dyn PasswordEncoder) -> bool {
        encoder.matches(raw.trim(), &self.value)
    }

    /// The encoded value, for storage.
    pub fn value(&self) -> &str {
        &self.value
    }
}
