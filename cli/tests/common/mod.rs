//! Common test utilities for integration tests

use calorie_calculator_cli::{
    app::{self, Cli, CliError},
    config::AppConfig,
};
use clap::Parser;

/// Parse flags the way the binary does
pub fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("calorie-calculator").chain(args.iter().copied()))
        .expect("valid command line")
}

/// Run with default configuration
pub fn run(args: &[&str]) -> Result<String, CliError> {
    run_with(args, &AppConfig::default())
}

/// Run with the given configuration
pub fn run_with(args: &[&str], config: &AppConfig) -> Result<String, CliError> {
    app::run(&parse(args), config)
}

/// Flags for the 25-year-old male reference profile
pub const MALE_MODERATE: &[&str] = &[
    "--age", "25", "--height", "180", "--weight", "75", "--activity", "moderate",
];
