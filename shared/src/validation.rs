//! Input validation functions
//!
//! Field-level rules applied by the form before the estimator runs.
//! The estimator itself never re-validates ranges.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::errors::FormError;
use crate::labels::{FieldText, LabelSet};

pub const AGE_MIN: u32 = 1;
pub const AGE_MAX: u32 = 120;
pub const HEIGHT_MIN_CM: f64 = 100.0;
pub const HEIGHT_MAX_CM: f64 = 250.0;
pub const WEIGHT_MIN_KG: f64 = 30.0;
pub const WEIGHT_MAX_KG: f64 = 200.0;

/// Why a field was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationFailure {
    Required,
    NotANumber,
    TooSmall,
    TooLarge,
}

// ============================================================================
// Form Fields
// ============================================================================

/// The five fields of the calculator form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
    Age,
    Gender,
    Height,
    Weight,
    ActivityLevel,
}

impl FormField {
    pub const ALL: [FormField; 5] = [
        FormField::Age,
        FormField::Gender,
        FormField::Height,
        FormField::Weight,
        FormField::ActivityLevel,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            FormField::Age => "age",
            FormField::Gender => "gender",
            FormField::Height => "height",
            FormField::Weight => "weight",
            FormField::ActivityLevel => "activityLevel",
        }
    }

    /// Display label for this field
    pub fn label(&self, labels: &LabelSet) -> &'static str {
        match self {
            FormField::Age => labels.age.label,
            FormField::Gender => labels.gender.label,
            FormField::Height => labels.height.label,
            FormField::Weight => labels.weight.label,
            FormField::ActivityLevel => labels.activity_level.label,
        }
    }

    /// Label and messages of a free-text field; select fields have none
    pub fn text<'a>(&self, labels: &'a LabelSet) -> Option<&'a FieldText> {
        match self {
            FormField::Age => Some(&labels.age),
            FormField::Height => Some(&labels.height),
            FormField::Weight => Some(&labels.weight),
            FormField::Gender | FormField::ActivityLevel => None,
        }
    }

    pub fn is_select(&self) -> bool {
        matches!(self, FormField::Gender | FormField::ActivityLevel)
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FormField {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "age" => Ok(FormField::Age),
            "gender" => Ok(FormField::Gender),
            "height" | "heightCm" | "height_cm" => Ok(FormField::Height),
            "weight" | "weightKg" | "weight_kg" => Ok(FormField::Weight),
            "activityLevel" | "activity_level" => Ok(FormField::ActivityLevel),
            other => Err(FormError::UnknownField(other.to_string())),
        }
    }
}

// ============================================================================
// Field Rules
// ============================================================================

fn parse_number(text: &str) -> Result<f64, ValidationFailure> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ValidationFailure::Required);
    }
    let value: f64 = trimmed.parse().map_err(|_| ValidationFailure::NotANumber)?;
    if !value.is_finite() {
        return Err(ValidationFailure::NotANumber);
    }
    Ok(value)
}

fn check_range(value: f64, min: f64, max: f64) -> Result<f64, ValidationFailure> {
    if value < min {
        return Err(ValidationFailure::TooSmall);
    }
    if value > max {
        return Err(ValidationFailure::TooLarge);
    }
    Ok(value)
}

/// Validate age text (whole years, 1-120)
pub fn validate_age(text: &str) -> Result<u32, ValidationFailure> {
    let value = parse_number(text)?;
    if value.fract() != 0.0 {
        return Err(ValidationFailure::NotANumber);
    }
    let value = check_range(value, f64::from(AGE_MIN), f64::from(AGE_MAX))?;
    Ok(value as u32)
}

/// Validate height text (in cm, 100-250)
pub fn validate_height_cm(text: &str) -> Result<f64, ValidationFailure> {
    check_range(parse_number(text)?, HEIGHT_MIN_CM, HEIGHT_MAX_CM)
}

/// Validate weight text (in kg, 30-200)
pub fn validate_weight_kg(text: &str) -> Result<f64, ValidationFailure> {
    check_range(parse_number(text)?, WEIGHT_MIN_KG, WEIGHT_MAX_KG)
}

/// Validation error with field context
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    pub field: FormField,
    pub failure: ValidationFailure,
    pub message: String,
    pub display_label: String,
}

impl ValidationError {
    pub fn new(field: FormField, failure: ValidationFailure, labels: &LabelSet) -> Self {
        let message = field
            .text(labels)
            .map(|text| text.message(failure))
            .unwrap_or_default();
        Self {
            field,
            failure,
            message: message.to_string(),
            display_label: field.label(labels).to_string(),
        }
    }

    /// Format as user-friendly error message
    pub fn user_message(&self) -> String {
        format!("{}: {}", self.display_label, self.message)
    }
}
