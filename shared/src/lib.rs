//! Calorie Calculator Shared Library
//!
//! This crate contains the energy estimator, the form validation rules,
//! the display labels and the form state shared by the WASM and CLI hosts.

pub mod energy;
pub mod errors;
pub mod form;
pub mod labels;
pub mod validation;

// Re-export commonly used items
pub use energy::*;
pub use errors::*;
pub use form::{CalorieForm, FormDefaults, FormValues, Summary};
pub use labels::{LabelSet, Locale};
pub use validation::{FormField, ValidationError, ValidationFailure};
