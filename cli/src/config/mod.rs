//! Configuration management for the Calorie Calculator CLI
//!
//! Configuration is loaded hierarchically:
//! 1. Default values (in code)
//! 2. TOML config files (config/development.toml or config/production.toml)
//! 3. Environment variables (prefix: CALC__)
//!
//! Command-line flags override all of these.

use anyhow::Result;
use calorie_calculator_shared::{ActivityLevel, FormDefaults, Gender, Locale};
use serde::{Deserialize, Serialize};
use std::env;

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub form: FormConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Initial values of the select fields
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormConfig {
    pub gender: Gender,
    pub activity_level: ActivityLevel,
}

impl Default for FormConfig {
    fn default() -> Self {
        let defaults = FormDefaults::default();
        Self {
            gender: defaults.gender,
            activity_level: defaults.activity_level,
        }
    }
}

impl FormConfig {
    pub fn defaults(&self) -> FormDefaults {
        FormDefaults {
            gender: self.gender,
            activity_level: self.activity_level,
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub locale: Locale,
    /// Print results as JSON instead of labelled text
    pub json: bool,
}

impl AppConfig {
    /// Load configuration from files and environment
    ///
    /// Loading order (later sources override earlier):
    /// 1. Default values
    /// 2. Config file based on RUST_ENV (development.toml or production.toml)
    /// 3. Environment variables with CALC__ prefix
    pub fn load() -> Result<Self> {
        let env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        let config_file = format!("config/{}.toml", env);

        let config = config::Config::builder()
            // Start with defaults
            .add_source(config::Config::try_from(&AppConfig::default())?)
            // Load from environment-specific config file
            .add_source(config::File::with_name(&config_file).required(false))
            // Override with environment variables (CALC__ prefix)
            // e.g., CALC__FORM__GENDER=female sets form.gender
            .add_source(config::Environment::with_prefix("CALC").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Check if running in production mode
    pub fn is_production() -> bool {
        env::var("RUST_ENV")
            .map(|v| v == "production")
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.form.gender, Gender::Male);
        assert_eq!(config.form.activity_level, ActivityLevel::Sedentary);
        assert_eq!(config.display.locale, Locale::ZhCn);
        assert!(!config.display.json);
    }

    #[test]
    fn test_form_defaults() {
        let config = FormConfig {
            gender: Gender::Female,
            activity_level: ActivityLevel::Active,
        };
        let defaults = config.defaults();
        assert_eq!(defaults.gender, Gender::Female);
        assert_eq!(defaults.activity_level, ActivityLevel::Active);
    }

    #[test]
    fn test_config_from_toml() {
        let source = r#"
            [form]
            gender = "female"
            activity_level = "veryActive"

            [display]
            locale = "en"
            json = true
        "#;
        let config: AppConfig = config::Config::builder()
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert_eq!(config.form.gender, Gender::Female);
        assert_eq!(config.form.activity_level, ActivityLevel::VeryActive);
        assert_eq!(config.display.locale, Locale::En);
        assert!(config.display.json);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: AppConfig = config::Config::builder()
            .add_source(config::Config::try_from(&AppConfig::default()).unwrap())
            .add_source(config::File::from_str(
                "[display]\nlocale = \"en\"\njson = false\n",
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert_eq!(config.display.locale, Locale::En);
        assert_eq!(config.form.gender, Gender::Male);
    }

    #[test]
    fn test_is_production() {
        // Default should be false (development)
        assert!(!AppConfig::is_production());
    }
}
