use clap::Parser;
use serde::Deserialize;

use crate::error::Result;

const DEFAULT_CONFIG_PATH: &str = "config/budget_tracker.toml";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub log_file: String,
    pub log_level: String,
    pub currency_symbol: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_file: "budget_tracker.log".to_string(),
            log_level: "info".to_string(),
            currency_symbol: "$".to_string(),
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "budget_tracker", disable_version_flag = true)]
pub struct Args {
    /// Optional config file path (TOML).
    #[arg(long)]
    config: Option<String>,
    /// Override the log file.
    #[arg(long)]
    log_file: Option<String>,
    /// Override the log level (trace, debug, info, warn, error).
    #[arg(long)]
    log_level: Option<String>,
    /// Override the currency symbol used for display.
    #[arg(long)]
    currency_symbol: Option<String>,
}

pub fn load() -> Result<AppConfig> {
    load_with(Args::parse())
}

/// Layers file, environment (`BUDGET_TRACKER_*`) and command line, in that order.
pub fn load_with(args: Args) -> Result<AppConfig> {
    let config_path = args.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH);
    let mut builder = config::Config::builder();
    builder = builder.add_source(config::File::with_name(config_path).required(false));
    builder = builder.add_source(config::Environment::with_prefix("BUDGET_TRACKER"));
    let mut settings: AppConfig = builder.build()?.try_deserialize()?;

    if let Some(log_file) = args.log_file {
        settings.log_file = log_file;
    }
    if let Some(log_level) = args.log_level {
        settings.log_level = log_level;
    }
    if let Some(currency_symbol) = args.currency_symbol {
        settings.currency_symbol = currency_symbol;
    }

    Ok(settings)
}
