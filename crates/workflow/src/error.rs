//! Workflow error types.

use domain::ValidationError;
use thiserror::Error;

/// Why `place_order` did not produce any events.
///
/// Validation is the only failure channel; pricing, acknowledgement and event
/// assembly are total once an order is valid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaceOrderError {
    /// The order failed validation.
    #[error("order validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

impl PlaceOrderError {
    /// The individual field errors.
    pub fn errors(&self) -> &[ValidationError] {
        match self {
            PlaceOrderError::Validation(errors) => errors,
        }
    }
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Convenience type alias for workflow results.
pub type Result<T> = std::result::Result<T, PlaceOrderError>;
