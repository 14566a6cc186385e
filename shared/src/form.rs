//! Calculator form state
//!
//! Holds the raw field values of the calculator form, recomputes live
//! results on every change and produces the submission summary. Hosts
//! (the browser bindings and the command line) drive this type and only
//! render what it returns.

use serde::{Deserialize, Serialize};

use crate::energy::{compute, ActivityLevel, Gender, InputRecord, ResultRecord};
use crate::errors::FormError;
use crate::labels::{LabelSet, Locale};
use crate::validation::{
    validate_age, validate_height_cm, validate_weight_kg, FormField, ValidationError,
};

/// Initial values of the select fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormDefaults {
    pub gender: Gender,
    pub activity_level: ActivityLevel,
}

impl Default for FormDefaults {
    fn default() -> Self {
        Self {
            gender: Gender::Male,
            activity_level: ActivityLevel::Sedentary,
        }
    }
}

/// Result of a successful submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub results: ResultRecord,
    pub message: String,
}

/// Raw, user-entered field values
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormValues {
    pub age: String,
    pub height: String,
    pub weight: String,
    pub gender: Option<Gender>,
    pub activity_level: Option<ActivityLevel>,
}

/// The calculator form
#[derive(Debug, Clone)]
pub struct CalorieForm {
    defaults: FormDefaults,
    locale: Locale,
    values: FormValues,
    submitted: bool,
    last: (InputRecord, ResultRecord),
}

impl CalorieForm {
    pub fn new(defaults: FormDefaults, locale: Locale) -> Self {
        let mut form = Self {
            defaults,
            locale,
            values: FormValues::default(),
            submitted: false,
            last: (InputRecord::default(), ResultRecord::ZERO),
        };
        form.reset();
        form
    }

    pub fn defaults(&self) -> FormDefaults {
        self.defaults
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn labels(&self) -> &'static LabelSet {
        self.locale.labels()
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    /// Set a field by its form name
    pub fn set(&mut self, name: &str, value: &str) -> Result<ResultRecord, FormError> {
        let field: FormField = name.parse()?;
        self.set_field(field, value)
    }

    /// Store a raw field value and return the recomputed live results
    ///
    /// Select fields only accept one of their choices; anything else is
    /// rejected and the previous value is kept.
    pub fn set_field(&mut self, field: FormField, value: &str) -> Result<ResultRecord, FormError> {
        match field {
            FormField::Age => self.values.age = value.to_string(),
            FormField::Height => self.values.height = value.to_string(),
            FormField::Weight => self.values.weight = value.to_string(),
            FormField::Gender => self.values.gender = Some(value.parse()?),
            FormField::ActivityLevel => self.values.activity_level = Some(value.parse()?),
        }
        Ok(self.recompute())
    }

    /// The record handed to the estimator for the live preview
    ///
    /// Numeric fields failing their rule are left out, so the preview shows
    /// zeros instead of estimates for out-of-range values.
    pub fn input_record(&self) -> InputRecord {
        InputRecord {
            age: validate_age(&self.values.age).ok(),
            gender: Some(self.values.gender.unwrap_or(self.defaults.gender)),
            height_cm: validate_height_cm(&self.values.height).ok(),
            weight_kg: validate_weight_kg(&self.values.weight).ok(),
            activity_level: Some(
                self.values
                    .activity_level
                    .unwrap_or(self.defaults.activity_level),
            ),
        }
    }

    /// Current live results
    pub fn results(&self) -> ResultRecord {
        self.last.1
    }

    fn recompute(&mut self) -> ResultRecord {
        let input = self.input_record();
        if input != self.last.0 {
            self.last = (input, compute(&input));
        }
        self.last.1
    }

    fn check(&self, field: FormField) -> Option<ValidationError> {
        let failure = match field {
            FormField::Age => validate_age(&self.values.age).err(),
            FormField::Height => validate_height_cm(&self.values.height).err(),
            FormField::Weight => validate_weight_kg(&self.values.weight).err(),
            // Select values are checked when they are set
            FormField::Gender | FormField::ActivityLevel => None,
        }?;
        Some(ValidationError::new(field, failure, self.labels()))
    }

    /// Validate every field regardless of submission state
    pub fn validate(&self) -> Vec<ValidationError> {
        FormField::ALL
            .iter()
            .filter_map(|field| self.check(*field))
            .collect()
    }

    /// Error to display next to a field; hidden until the first submission
    pub fn field_error(&self, field: FormField) -> Option<ValidationError> {
        if self.submitted {
            self.check(field)
        } else {
            None
        }
    }

    /// Errors to display; empty until the first submission
    pub fn errors(&self) -> Vec<ValidationError> {
        if self.submitted {
            self.validate()
        } else {
            Vec::new()
        }
    }

    /// Validate all fields and produce the summary
    pub fn submit(&mut self) -> Result<Summary, FormError> {
        self.submitted = true;

        let errors = self.validate();
        if !errors.is_empty() {
            return Err(FormError::Invalid(errors));
        }

        let results = self.recompute();
        Ok(Summary {
            results,
            message: self.labels().render_summary(&results),
        })
    }

    /// Clear all fields and restore defaults
    pub fn reset(&mut self) {
        self.values = FormValues {
            gender: Some(self.defaults.gender),
            activity_level: Some(self.defaults.activity_level),
            ..FormValues::default()
        };
        self.submitted = false;
        self.recompute();
    }
}

impl Default for CalorieForm {
    fn default() -> Self {
        Self::new(FormDefaults::default(), Locale::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::EstimatorError;
    use crate::validation::ValidationFailure;

    fn filled(locale: Locale) -> CalorieForm {
        let mut form = CalorieForm::new(FormDefaults::default(), locale);
        form.set("age", "25").unwrap();
        form.set("height", "180").unwrap();
        form.set("weight", "75").unwrap();
        form.set("activityLevel", "moderate").unwrap();
        form
    }

    #[test]
    fn test_defaults_applied() {
        let form = CalorieForm::default();
        assert_eq!(form.values().gender, Some(Gender::Male));
        assert_eq!(form.values().activity_level, Some(ActivityLevel::Sedentary));
        assert_eq!(form.results(), ResultRecord::ZERO);
        assert!(!form.input_record().is_complete());
    }

    #[test]
    fn test_live_results_follow_each_change() {
        let mut form = CalorieForm::default();
        assert!(form.set("age", "25").unwrap().is_zero());
        assert!(form.set("height", "180").unwrap().is_zero());

        // Complete once weight arrives; activity still at its default
        let sedentary = form.set("weight", "75").unwrap();
        assert_eq!(sedentary.bmr, 1815);
        assert_eq!(sedentary.tdee, 2178); // 1815.032 * 1.2 = 2178.04

        let moderate = form.set("activityLevel", "moderate").unwrap();
        assert_eq!(moderate.tdee, 2813);
        assert_eq!(form.results(), moderate);
    }

    #[test]
    fn test_explicit_defaults_drive_preview() {
        let defaults = FormDefaults {
            gender: Gender::Female,
            activity_level: ActivityLevel::Sedentary,
        };
        let mut form = CalorieForm::new(defaults, Locale::En);
        form.set("age", "30").unwrap();
        form.set("height", "165").unwrap();
        let results = form.set("weight", "60").unwrap();
        assert_eq!(results.bmr, 1384);
        assert_eq!(results.fat_loss_target, 1411);
    }

    #[test]
    fn test_out_of_range_value_zeroes_preview() {
        let mut form = filled(Locale::En);
        assert!(!form.results().is_zero());
        assert!(form.set("weight", "250").unwrap().is_zero());
        assert!(form.set("weight", "abc").unwrap().is_zero());
        assert!(!form.set("weight", "75").unwrap().is_zero());
    }

    #[test]
    fn test_invalid_choice_rejected_and_kept() {
        let mut form = filled(Locale::En);
        let before = form.results();
        let err = form.set("gender", "other").unwrap_err();
        assert!(matches!(
            err,
            FormError::Estimator(EstimatorError::InvalidInput { field: "gender", .. })
        ));
        assert_eq!(form.values().gender, Some(Gender::Male));
        assert_eq!(form.results(), before);
    }

    #[test]
    fn test_unknown_field() {
        let mut form = CalorieForm::default();
        assert_eq!(
            form.set("bodyFat", "20"),
            Err(FormError::UnknownField("bodyFat".to_string()))
        );
    }

    #[test]
    fn test_errors_hidden_until_submit() {
        let mut form = CalorieForm::new(FormDefaults::default(), Locale::En);
        form.set("age", "130").unwrap();
        assert!(form.errors().is_empty());
        assert!(form.field_error(FormField::Age).is_none());
        assert_eq!(form.validate().len(), 3);

        let err = form.submit().unwrap_err();
        let FormError::Invalid(errors) = &err else {
            panic!("expected validation errors, got {err:?}");
        };
        assert_eq!(errors.len(), 3);
        assert_eq!(errors[0].failure, ValidationFailure::TooLarge);
        assert_eq!(
            err.user_messages(),
            vec![
                "Age: Age cannot exceed 120 years".to_string(),
                "Height: Please enter your height".to_string(),
                "Weight: Please enter your weight".to_string(),
            ]
        );

        // Errors now follow later changes
        form.set("age", "40").unwrap();
        assert!(form.field_error(FormField::Age).is_none());
        assert!(form.field_error(FormField::Height).is_some());
    }

    #[test]
    fn test_submit_summary() {
        let mut form = filled(Locale::ZhCn);
        let summary = form.submit().unwrap();
        assert_eq!(
            summary.results,
            ResultRecord {
                bmr: 1815,
                tdee: 2813,
                fat_loss_target: 2391,
            }
        );
        assert_eq!(
            summary.message,
            "基础代谢(BMR): 1815 卡路里\n每日能量消耗(TDEE): 2813 卡路里\n减脂能量摄入: 2391 卡路里"
        );
        assert!(form.errors().is_empty());
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut form = filled(Locale::En);
        form.set("gender", "female").unwrap();
        let _ = form.submit();
        form.reset();

        assert_eq!(form.values().age, "");
        assert_eq!(form.values().gender, Some(Gender::Male));
        assert_eq!(form.values().activity_level, Some(ActivityLevel::Sedentary));
        assert!(!form.is_submitted());
        assert_eq!(form.results(), ResultRecord::ZERO);
    }

    #[test]
    fn test_recompute_is_stable() {
        let mut form = filled(Locale::En);
        let first = form.results();
        // Same value again hits the memoized result
        assert_eq!(form.set("age", "25").unwrap(), first);
        assert_eq!(form.set("age", "25.0").unwrap(), first);
    }
}
