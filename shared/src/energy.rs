//! Energy estimation module
//!
//! Estimates basal metabolic rate (BMR), total daily energy expenditure
//! (TDEE) and a fat-loss intake target from a body profile.
//!
//! # Design Principles
//!
//! 1. **Pure Functions**: every calculation is a pure expression, no hidden state
//! 2. **Explicit Validation**: categorical input is parsed before it reaches the formulas
//! 3. **Round at Output**: intermediate values stay unrounded

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::EstimatorError;

/// Share of TDEE kept for the fat-loss intake target (a fixed 15% deficit)
pub const FAT_LOSS_FACTOR: f64 = 0.85;

// ============================================================================
// Categorical Inputs
// ============================================================================

/// Gender used to pick the BMR equation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = EstimatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        Gender::ALL
            .into_iter()
            .find(|g| g.as_str() == normalized)
            .ok_or_else(|| {
                let choices: Vec<&str> = Gender::ALL.iter().map(Gender::as_str).collect();
                EstimatorError::invalid_choice("gender", s, &choices)
            })
    }
}

/// Activity level for TDEE calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days/week
    Light,
    /// Moderate exercise 3-5 days/week
    Moderate,
    /// Hard exercise 6-7 days/week
    Active,
    /// Physical job or hard training every day
    VeryActive,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::Light,
        ActivityLevel::Moderate,
        ActivityLevel::Active,
        ActivityLevel::VeryActive,
    ];

    /// Get the activity multiplier for TDEE calculation
    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Active => 1.725,
            ActivityLevel::VeryActive => 1.9,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::Light => "light",
            ActivityLevel::Moderate => "moderate",
            ActivityLevel::Active => "active",
            ActivityLevel::VeryActive => "veryActive",
        }
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActivityLevel {
    type Err = EstimatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        ActivityLevel::ALL
            .into_iter()
            .find(|level| level.as_str().to_lowercase() == normalized)
            .ok_or_else(|| {
                let choices: Vec<&str> = ActivityLevel::ALL.iter().map(ActivityLevel::as_str).collect();
                EstimatorError::invalid_choice("activityLevel", s, &choices)
            })
    }
}

// ============================================================================
// Records
// ============================================================================

/// Estimator input; any field may still be missing while a form is filled in
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputRecord {
    /// Age in years
    pub age: Option<u32>,
    pub gender: Option<Gender>,
    /// Height in centimeters
    pub height_cm: Option<f64>,
    /// Weight in kilograms
    pub weight_kg: Option<f64>,
    pub activity_level: Option<ActivityLevel>,
}

impl InputRecord {
    /// Build a record with every field present
    pub fn new(
        age: u32,
        gender: Gender,
        height_cm: f64,
        weight_kg: f64,
        activity_level: ActivityLevel,
    ) -> Self {
        Self {
            age: Some(age),
            gender: Some(gender),
            height_cm: Some(height_cm),
            weight_kg: Some(weight_kg),
            activity_level: Some(activity_level),
        }
    }

    /// The body profile, if every field is present and non-zero
    ///
    /// Zero and NaN count as missing.
    pub fn profile(&self) -> Option<BodyProfile> {
        let age = self.age.filter(|a| *a != 0)?;
        let height_cm = self.height_cm.filter(|h| present(*h))?;
        let weight_kg = self.weight_kg.filter(|w| present(*w))?;

        Some(BodyProfile {
            age_years: age,
            gender: self.gender?,
            height_cm,
            weight_kg,
            activity_level: self.activity_level?,
        })
    }

    pub fn is_complete(&self) -> bool {
        self.profile().is_some()
    }
}

fn present(value: f64) -> bool {
    value != 0.0 && !value.is_nan()
}

/// Estimator input as handed over by a host, before categorical validation
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawInput {
    pub age: Option<u32>,
    pub gender: Option<String>,
    pub height_cm: Option<f64>,
    pub weight_kg: Option<f64>,
    pub activity_level: Option<String>,
}

impl TryFrom<&RawInput> for InputRecord {
    type Error = EstimatorError;

    fn try_from(raw: &RawInput) -> Result<Self, Self::Error> {
        Ok(InputRecord {
            age: raw.age,
            gender: parse_choice(raw.gender.as_deref())?,
            height_cm: raw.height_cm,
            weight_kg: raw.weight_kg,
            activity_level: parse_choice(raw.activity_level.as_deref())?,
        })
    }
}

/// Blank strings count as an unselected choice
fn parse_choice<T>(value: Option<&str>) -> Result<Option<T>, EstimatorError>
where
    T: FromStr<Err = EstimatorError>,
{
    match value {
        Some(v) if !v.trim().is_empty() => v.parse().map(Some),
        _ => Ok(None),
    }
}

/// Complete profile needed by the formulas
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyProfile {
    pub age_years: u32,
    pub gender: Gender,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub activity_level: ActivityLevel,
}

/// Rounded estimator output in kcal/day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultRecord {
    pub bmr: i64,
    pub tdee: i64,
    pub fat_loss_target: i64,
}

impl ResultRecord {
    /// Result reported while the input is incomplete
    pub const ZERO: ResultRecord = ResultRecord {
        bmr: 0,
        tdee: 0,
        fat_loss_target: 0,
    };

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

/// Unrounded estimate with the multiplier that produced it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnergyBreakdown {
    pub bmr: f64,
    pub tdee: f64,
    pub fat_loss_target: f64,
    pub activity_multiplier: f64,
}

impl EnergyBreakdown {
    /// Round half away from zero
    pub fn rounded(&self) -> ResultRecord {
        ResultRecord {
            bmr: self.bmr.round() as i64,
            tdee: self.tdee.round() as i64,
            fat_loss_target: self.fat_loss_target.round() as i64,
        }
    }
}

// ============================================================================
// Calculations
// ============================================================================

/// Calculate BMR using Harris-Benedict equation (revised)
///
/// Men: BMR = 88.362 + 13.397 × weight(kg) + 4.799 × height(cm) - 5.677 × age(y)
/// Women: BMR = 447.593 + 9.247 × weight(kg) + 3.098 × height(cm) - 4.330 × age(y)
pub fn calculate_bmr_harris_benedict(weight_kg: f64, height_cm: f64, age_years: u32, gender: Gender) -> f64 {
    let age = f64::from(age_years);
    match gender {
        Gender::Male => 88.362 + 13.397 * weight_kg + 4.799 * height_cm - 5.677 * age,
        Gender::Female => 447.593 + 9.247 * weight_kg + 3.098 * height_cm - 4.330 * age,
    }
}

/// Calculate the full unrounded estimate for a complete profile
///
/// TDEE = BMR × Activity Multiplier, fat-loss target = TDEE × 0.85
pub fn estimate(profile: &BodyProfile) -> EnergyBreakdown {
    let bmr = calculate_bmr_harris_benedict(
        profile.weight_kg,
        profile.height_cm,
        profile.age_years,
        profile.gender,
    );
    let activity_multiplier = profile.activity_level.multiplier();
    let tdee = bmr * activity_multiplier;

    EnergyBreakdown {
        bmr,
        tdee,
        fat_loss_target: tdee * FAT_LOSS_FACTOR,
        activity_multiplier,
    }
}

/// Compute the rounded result for an input record
///
/// Returns [`ResultRecord::ZERO`] until every field is filled in.
pub fn compute(input: &InputRecord) -> ResultRecord {
    match input.profile() {
        Some(profile) => estimate(&profile).rounded(),
        None => ResultRecord::ZERO,
    }
}

/// Validate categorical fields, then compute
///
/// An unknown gender or activity level fails even when other fields are missing.
pub fn compute_raw(raw: &RawInput) -> Result<ResultRecord, EstimatorError> {
    let input = InputRecord::try_from(raw)?;
    Ok(compute(&input))
}
