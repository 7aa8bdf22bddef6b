//! Domain error types.

use serde::Serialize;
use thiserror::Error;

/// A single field-level validation failure.
///
/// `field` is a dotted path into the unvalidated input
/// (`shipping_address.zip_code`, `lines[2].quantity`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[error("{field}: {description}")]
pub struct ValidationError {
    /// Path of the offending field.
    pub field: String,

    /// Human-readable reason.
    pub description: String,
}

impl ValidationError {
    /// Creates a new validation error for `field`.
    pub fn new(field: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            description: description.into(),
        }
    }

    /// Returns a copy of this error with `prefix.` prepended to the field path.
    pub fn within(self, prefix: &str) -> Self {
        Self {
            field: format!("{prefix}.{}", self.field),
            description: self.description,
        }
    }
}
