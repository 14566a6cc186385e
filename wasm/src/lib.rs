//! Calorie Calculator WASM Module
//!
//! This crate provides WebAssembly bindings so the calculator form can run
//! entirely in the browser. Results cross the boundary as JSON strings.

use calorie_calculator_shared::{
    compute_raw, ActivityLevel, CalorieForm as FormState, FormDefaults, FormError, FormField,
    FormValues, Gender, Locale, RawInput, ResultRecord, ValidationError,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

fn to_json<T: Serialize>(value: &T) -> Result<String, JsError> {
    Ok(serde_json::to_string(value)?)
}

fn parse_locale(locale: Option<String>) -> Locale {
    locale
        .and_then(|l| l.parse().ok())
        .unwrap_or_default()
}

fn raw_input(
    age: Option<u32>,
    gender: Option<String>,
    height_cm: Option<f64>,
    weight_kg: Option<f64>,
    activity_level: Option<String>,
) -> RawInput {
    RawInput {
        age,
        gender,
        height_cm,
        weight_kg,
        activity_level,
    }
}

/// Compute BMR, TDEE and the fat-loss target, returned as JSON
///
/// Missing fields give an all-zero result; an unknown gender or activity
/// level throws.
#[wasm_bindgen(js_name = computeCalories)]
pub fn compute_calories(
    age: Option<u32>,
    gender: Option<String>,
    height_cm: Option<f64>,
    weight_kg: Option<f64>,
    activity_level: Option<String>,
) -> Result<String, JsError> {
    let result = compute_raw(&raw_input(age, gender, height_cm, weight_kg, activity_level))?;
    to_json(&result)
}

/// Everything a page needs to render the form
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct FormSnapshot<'a> {
    values: &'a FormValues,
    results: ResultRecord,
    errors: Vec<ValidationError>,
    submitted: bool,
}

/// Browser handle for the calculator form
#[wasm_bindgen]
pub struct CalorieForm {
    inner: FormState,
}

impl CalorieForm {
    fn set_inner(&mut self, name: &str, value: &str) -> Result<ResultRecord, FormError> {
        self.inner.set(name, value)
    }

    fn field_error_inner(&self, name: &str) -> Result<Option<String>, FormError> {
        let field: FormField = name.parse()?;
        Ok(self.inner.field_error(field).map(|e| e.message))
    }

    fn snapshot(&self) -> FormSnapshot<'_> {
        FormSnapshot {
            values: self.inner.values(),
            results: self.inner.results(),
            errors: self.inner.errors(),
            submitted: self.inner.is_submitted(),
        }
    }
}

#[wasm_bindgen]
impl CalorieForm {
    /// Create a form; the select fields start at male / sedentary
    #[wasm_bindgen(constructor)]
    pub fn new(locale: Option<String>) -> CalorieForm {
        CalorieForm {
            inner: FormState::new(FormDefaults::default(), parse_locale(locale)),
        }
    }

    /// Update one field and return the live results as JSON
    #[wasm_bindgen(js_name = setField)]
    pub fn set_field(&mut self, name: &str, value: &str) -> Result<String, JsError> {
        let results = self.set_inner(name, value)?;
        to_json(&results)
    }

    /// Current live results as JSON
    pub fn results(&self) -> Result<String, JsError> {
        to_json(&self.inner.results())
    }

    /// Values, results and visible errors as JSON
    pub fn state(&self) -> Result<String, JsError> {
        to_json(&self.snapshot())
    }

    /// Message to show under a field, if any
    #[wasm_bindgen(js_name = fieldError)]
    pub fn field_error(&self, name: &str) -> Result<Option<String>, JsError> {
        Ok(self.field_error_inner(name)?)
    }

    /// Validate and return the summary text; throws with every field message
    pub fn submit(&mut self) -> Result<String, JsError> {
        match self.inner.submit() {
            Ok(summary) => Ok(summary.message),
            Err(err) => Err(JsError::new(&err.user_messages().join("\n"))),
        }
    }

    pub fn reset(&mut self) {
        self.inner.reset();
    }

    /// The label set of the form's locale as JSON
    pub fn labels(&self) -> Result<String, JsError> {
        to_json(self.inner.labels())
    }
}

/// Check a gender or activity choice without touching any form
#[wasm_bindgen(js_name = isValidChoice)]
pub fn is_valid_choice(field: &str, value: &str) -> bool {
    match field {
        "gender" => value.parse::<Gender>().is_ok(),
        "activityLevel" => value.parse::<ActivityLevel>().is_ok(),
        _ => false,
    }
}
