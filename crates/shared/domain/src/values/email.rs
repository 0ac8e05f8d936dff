//! Email value object.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::constants::MAX_EMAIL_LENGTH;
use crate::error::ValidationError;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9_]+(?:\.[a-zA-Z0-9_]+)*@(?:[a-zA-Z0-9-]+\.)+[a-zA-Z]{2,7}$")
        .expect("email pattern is a valid regex")
});

/// Trimmed, validated email address.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email {
    address: String,
}

impl Email {
    /// Validate and normalize a raw address.
    ///
    /// Rules, first failure wins: present, non-blank, at most
    /// [`MAX_EMAIL_LENGTH`] characters once trimmed, matches the address
    /// pattern.
    pub fn with(address: Option<&str>) -> Result<Self, ValidationError> {
        let address = address.ok_or_else(|| ValidationError::single("email must not be null"))?;

        let trimmed = address.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::single("email must not be empty"));
        }

        if trimmed.chars().count() > MAX_EMAIL_LENGTH {
            return Err(ValidationError::single(format!(
                "email must not have more than {} characters",
                MAX_EMAIL_LENGTH
            )));
        }

        if !EMAIL_PATTERN.is_match(trimmed) {
            return Err(ValidationError::single("email is invalid"));
        }

        Ok(Self {
            address: trimmed.to_string(),
        })
    }

    pub fn address(&self) -> &str {
        &self.address
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.address)
    }
}
