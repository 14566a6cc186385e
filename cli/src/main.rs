//! Calorie Calculator CLI
//!
//! Fills in the calculator form from command-line flags and prints either
//! the live result card or the submission summary.

use anyhow::Result;
use calorie_calculator_cli::{app, config};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    init_tracing();

    let cli = app::Cli::parse();

    // Load configuration
    let config = config::AppConfig::load()?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        env = if config::AppConfig::is_production() { "production" } else { "development" },
        locale = %cli.locale.unwrap_or(config.display.locale),
        "Starting Calorie Calculator"
    );

    let output = app::run(&cli, &config)?;
    println!("{output}");

    Ok(())
}

/// Initialize tracing/logging
///
/// Logs go to stderr so stdout only carries results.
fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if config::AppConfig::is_production() {
            "calorie_calculator=warn,calorie_calculator_cli=warn".into()
        } else {
            "calorie_calculator=info,calorie_calculator_cli=info".into()
        }
    });

    let subscriber = tracing_subscriber::registry().with(env_filter);

    if config::AppConfig::is_production() {
        // JSON logging for production (better for log aggregation)
        subscriber
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        // Pretty logging for development
        subscriber
            .with(tracing_subscriber::fmt::layer().pretty().with_writer(std::io::stderr))
            .init();
    }
}
