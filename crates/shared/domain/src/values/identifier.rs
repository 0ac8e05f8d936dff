//! Identifier value object.

use std::fmt;

use uuid::Uuid;

use crate::error::ValidationError;

/// Validated UUID identifying an aggregate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Identifier(Uuid);

impl Identifier {
    /// Parse and validate a raw identifier.
    ///
    /// Rules, first failure wins: present, non-blank, parseable UUID.
    pub fn with(value: Option<&str>) -> Result<Self, ValidationError> {
        let value = value.ok_or_else(|| ValidationError::single("id must not be null"))?;

        if value.trim().is_empty() {
            return Err(ValidationError::single("id must not be empty"));
        }

        Uuid::try_parse(value)
            .map(Self)
            .map_err(|_| ValidationError::single("id is invalid"))
    }

    /// Fresh random identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }

    /// Lowercase hyphenated form.
    pub fn value(&self) -> String {
        self.0.to_string()
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Identifier> for Uuid {
    fn from(id: Identifier) -> Self {
        id.0
    }
}
