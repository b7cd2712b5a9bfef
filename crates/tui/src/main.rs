mod app;
mod config;
mod error;
mod expense_form;
mod ui;

use std::{fs::OpenOptions, sync::Mutex};

use engine::Store;

use crate::error::{AppError, Result};

fn main() -> Result<()> {
    let config = config::load()?;
    init_tracing(&config)?;

    let store = Store::default();
    let mut app = app::App::new(&config, store);
    let result = app.run();
    if let Err(err) = &result {
        tracing::error!("budget tracker stopped: {err}");
    }
    result
}

/// Logs go to a file: the terminal belongs to the UI.
fn init_tracing(config: &config::AppConfig) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_file)?;

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "budget_tracker={level},engine={level}",
            level = config.log_level
        ))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|err| AppError::Logging(err.to_string()))
}
