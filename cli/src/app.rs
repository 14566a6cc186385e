//! Command-line host for the calculator form
//!
//! Each flag is fed into the form the way a browser would deliver a change
//! event, then the form is either submitted or only previewed.

use calorie_calculator_shared::{CalorieForm, FormError, FormField, Locale, ResultRecord};
use clap::Parser;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::config::AppConfig;

#[derive(Debug, Parser)]
#[command(
    name = "calorie-calculator",
    version,
    about = "Estimate BMR, daily energy expenditure and a fat-loss calorie target"
)]
pub struct Cli {
    /// Age in years (1-120)
    #[arg(long)]
    pub age: Option<String>,

    /// male or female
    #[arg(long)]
    pub gender: Option<String>,

    /// Height in centimeters (100-250)
    #[arg(long)]
    pub height: Option<String>,

    /// Weight in kilograms (30-200)
    #[arg(long)]
    pub weight: Option<String>,

    /// sedentary, light, moderate, active or veryActive
    #[arg(long = "activity")]
    pub activity_level: Option<String>,

    /// Display locale (zh-CN or en)
    #[arg(long)]
    pub locale: Option<Locale>,

    /// Show live results without validating or submitting
    #[arg(long)]
    pub preview: bool,

    /// Print results as JSON
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Provided fields in form order
    fn fields(&self) -> Vec<(FormField, &str)> {
        [
            (FormField::Age, &self.age),
            (FormField::Gender, &self.gender),
            (FormField::Height, &self.height),
            (FormField::Weight, &self.weight),
            (FormField::ActivityLevel, &self.activity_level),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.as_deref().map(|v| (field, v)))
        .collect()
    }
}

/// CLI error types
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{}", .0.user_messages().join("\n"))]
    Form(#[from] FormError),

    #[error("Failed to serialize output: {0}")]
    Output(#[from] serde_json::Error),
}

/// JSON output of a run
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonOutput {
    submitted: bool,
    #[serde(flatten)]
    results: ResultRecord,
}

/// Run the form with the given flags and return the text to print
pub fn run(cli: &Cli, config: &AppConfig) -> Result<String, CliError> {
    let locale = cli.locale.unwrap_or(config.display.locale);
    let json = cli.json || config.display.json;
    let mut form = CalorieForm::new(config.form.defaults(), locale);

    for (field, value) in cli.fields() {
        let live = form.set_field(field, value)?;
        debug!(
            field = %field,
            bmr = live.bmr,
            tdee = live.tdee,
            fat_loss_target = live.fat_loss_target,
            "Recomputed live results"
        );
    }

    if cli.preview {
        let results = form.results();
        return if json {
            Ok(serde_json::to_string_pretty(&JsonOutput {
                submitted: false,
                results,
            })?)
        } else {
            Ok(form.labels().render_results(&results))
        };
    }

    let summary = form.submit().map_err(|err| {
        warn!(errors = form.errors().len(), "Form submission rejected");
        err
    })?;
    info!(bmr = summary.results.bmr, tdee = summary.results.tdee, "Form submitted");

    if json {
        Ok(serde_json::to_string_pretty(&JsonOutput {
            submitted: true,
            results: summary.results,
        })?)
    } else {
        Ok(summary.message)
    }
}
