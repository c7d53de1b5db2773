//! Error types for the intake form.

use crate::intake::Field;
use thiserror::Error;

/// Reasons a submitted form is rejected.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// One or more required fields are empty or unselected.
    ///
    /// Fields are listed in the order the form shows them.
    #[error("Missing required field(s): {}", join_labels(.fields))]
    MissingField { fields: Vec<Field> },
}

/// Errors that can occur when submitting an intake form.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IntakeError {
    /// The submitted values did not pass validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The form was already submitted or closed.
    #[error("Order form is closed")]
    Closed,
}

fn join_labels(fields: &[Field]) -> String {
    fields
        .iter()
        .map(|f| f.label())
        .collect::<Vec<_>>()
        .join(", ")
}
