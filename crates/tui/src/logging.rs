use std::{fs::OpenOptions, sync::Mutex};

use tracing_subscriber::EnvFilter;

use crate::{
    config::AppConfig,
    error::{AppError, Result},
};

fn filter_directives(level: &str) -> String {
    format!("expense_calculator={level},expense_engine={level}")
}

/// Installs the global subscriber when a log file is configured.
///
/// Without a file nothing is installed and every `tracing` call is a no-op.
pub fn init(config: &AppConfig) -> Result<()> {
    let Some(path) = config.log_file.as_deref() else {
        return Ok(());
    };

    let filter = EnvFilter::try_new(filter_directives(&config.log_level))
        .map_err(|err| AppError::Logging(err.to_string()))?;
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|err| AppError::Logging(err.to_string()))?;

    tracing::debug!(path, level = %config.log_level, "logging initialised");
    Ok(())
}
