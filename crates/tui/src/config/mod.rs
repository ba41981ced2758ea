use clap::Parser;
use expense_engine::AcknowledgementMode;
use serde::Deserialize;

use crate::error::Result;

const DEFAULT_CONFIG_PATH: &str = "config/expense_calculator.toml";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// What the overlay shows after "Calculate".
    pub acknowledgement: AcknowledgementMode,
    /// Event poll interval in milliseconds.
    pub tick_rate_ms: u64,
    pub log_level: String,
    /// Logging is off unless a file is given; stdout belongs to the terminal UI.
    pub log_file: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            acknowledgement: AcknowledgementMode::Placeholder,
            tick_rate_ms: 200,
            log_level: "info".to_string(),
            log_file: None,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "expense_calculator", disable_version_flag = true)]
struct Args {
    /// Optional config file path (TOML).
    #[arg(long)]
    config: Option<String>,
    /// Overlay content after calculating: "placeholder" or "leftover".
    #[arg(long, value_parser = parse_acknowledgement)]
    acknowledgement: Option<AcknowledgementMode>,
    /// Override event poll interval (milliseconds).
    #[arg(long)]
    tick_rate_ms: Option<u64>,
    /// Override log level (trace, debug, info, warn, error).
    #[arg(long)]
    log_level: Option<String>,
    /// Write logs to this file.
    #[arg(long)]
    log_file: Option<String>,
}

fn parse_acknowledgement(value: &str) -> std::result::Result<AcknowledgementMode, String> {
    match value.trim().to_ascii_lowercase().as_str() {
        "placeholder" => Ok(AcknowledgementMode::Placeholder),
        "leftover" => Ok(AcknowledgementMode::Leftover),
        other => Err(format!(
            "unknown mode \"{other}\", expected \"placeholder\" or \"leftover\""
        )),
    }
}

pub fn load() -> Result<AppConfig> {
    load_from(Args::parse())
}

fn load_from(args: Args) -> Result<AppConfig> {
    let config_path = args.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH);
    let mut builder = config::Config::builder();
    builder = builder.add_source(config::File::with_name(config_path).required(false));
    builder = builder.add_source(config::Environment::with_prefix("EXPENSE_TUI"));
    let mut settings: AppConfig = builder.build()?.try_deserialize()?;

    if let Some(acknowledgement) = args.acknowledgement {
        settings.acknowledgement = acknowledgement;
    }
    if let Some(tick_rate_ms) = args.tick_rate_ms {
        settings.tick_rate_ms = tick_rate_ms;
    }
    if let Some(log_level) = args.log_level {
        settings.log_level = log_level;
    }
    if let Some(log_file) = args.log_file {
        settings.log_file = Some(log_file);
    }

    Ok(settings)
}
