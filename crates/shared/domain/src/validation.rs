//! Field-scoped validation errors.
//!
//! Value objects fail fast with a single [`Error`] wrapped in an
//! [`ErrorHandler`]; use cases fold those handlers into a [`Notification`]
//! keyed by field name so that every independent failure of one request is
//! reported together.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

/// A single human-readable validation message.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Error {
    message: String,
}

impl Error {
    pub fn with(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Ordered list of errors for one logical field.
///
/// Duplicates are kept; insertion order is preserved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ErrorHandler {
    errors: Vec<Error>,
}

impl ErrorHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handler holding exactly one message.
    pub fn single(message: impl Into<String>) -> Self {
        let mut handler = Self::new();
        handler.append(Error::with(message));
        handler
    }

    pub fn append(&mut self, error: Error) -> &mut Self {
        self.errors.push(error);
        self
    }

    pub fn extend(&mut self, other: ErrorHandler) -> &mut Self {
        self.errors.extend(other.errors);
        self
    }

    pub fn has_error(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    pub fn messages(&self) -> Vec<&str> {
        self.errors.iter().map(Error::message).collect()
    }
}

impl fmt::Display for ErrorHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.messages().join(", "))
    }
}

/// Mapping from field name to the errors collected for it.
///
/// Keys iterate in sorted order so responses are deterministic. Serializes as
/// `{"field": ["message", ...]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Notification {
    errors: BTreeMap<String, ErrorHandler>,
}

impl Notification {
    pub fn new() -> Self {
        Self::default()
    }

    /// Notification holding one message under one field.
    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut notification = Self::new();
        notification.append(field, ErrorHandler::single(message));
        notification
    }

    /// Append every error of `handler` under `field`, after any already there.
    pub fn append(&mut self, field: impl Into<String>, handler: ErrorHandler) -> &mut Self {
        self.errors.entry(field.into()).or_default().extend(handler);
        self
    }

    pub fn append_error(&mut self, field: impl Into<String>, error: Error) -> &mut Self {
        self.errors.entry(field.into()).or_default().append(error);
        self
    }

    pub fn has_error(&self) -> bool {
        self.errors.values().any(ErrorHandler::has_error)
    }

    pub fn get(&self, field: &str) -> Option<&ErrorHandler> {
        self.errors.get(field)
    }

    /// Messages recorded for `field`, empty when the field has none.
    pub fn messages(&self, field: &str) -> Vec<&str> {
        self.get(field).map(ErrorHandler::messages).unwrap_or_default()
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.errors.keys().map(String::as_str)
    }

    pub fn errors(&self) -> &BTreeMap<String, ErrorHandler> {
        &self.errors
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .errors
            .iter()
            .map(|(field, handler)| format!("{}: {}", field, handler))
            .collect();
        f.write_str(&parts.join("; "))
    }
}
