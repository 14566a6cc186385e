//! Error types for the Calorie Calculator

use thiserror::Error;

use crate::validation::ValidationError;

/// Estimator error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EstimatorError {
    #[error("Invalid input for {field}: {value:?} (expected one of: {expected})")]
    InvalidInput {
        field: &'static str,
        value: String,
        expected: String,
    },
}

impl EstimatorError {
    pub fn invalid_choice(field: &'static str, value: &str, choices: &[&str]) -> Self {
        EstimatorError::InvalidInput {
            field,
            value: value.to_string(),
            expected: choices.join(", "),
        }
    }
}

/// Form shell error types
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormError {
    #[error("Unknown form field: {0}")]
    UnknownField(String),

    #[error("Form has {} invalid field(s)", .0.len())]
    Invalid(Vec<ValidationError>),

    #[error(transparent)]
    Estimator(#[from] EstimatorError),
}

impl FormError {
    /// User-facing messages, one per line item
    pub fn user_messages(&self) -> Vec<String> {
        match self {
            FormError::Invalid(errors) => errors.iter().map(ValidationError::user_message).collect(),
            other => vec![other.to_string()],
        }
    }
}
