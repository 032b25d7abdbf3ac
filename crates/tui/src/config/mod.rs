use clap::Parser;
use serde::Deserialize;

use crate::error::Result;

const DEFAULT_CONFIG_PATH: &str = "config/tui.toml";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Path of the CSV data file.
    pub data_file: String,
    /// Keep records in memory only; the data file is neither read nor
    /// written and everything is lost on exit.
    pub memory: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_file: "expenses.csv".to_string(),
            memory: false,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "kharcha_tui", disable_version_flag = true)]
struct Args {
    /// Optional config file path (TOML).
    #[arg(long)]
    config: Option<String>,
    /// Override the CSV data file path.
    #[arg(long)]
    data_file: Option<String>,
    /// Keep records in memory only (lost on exit).
    #[arg(long)]
    memory: bool,
}

pub fn load() -> Result<AppConfig> {
    let args = Args::parse();

    let config_path = args.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH);
    let mut builder = config::Config::builder();
    builder = builder.add_source(config::File::with_name(config_path).required(false));
    builder = builder.add_source(config::Environment::with_prefix("KHARCHA_TUI"));
    let mut settings: AppConfig = builder.build()?.try_deserialize()?;

    if let Some(data_file) = args.data_file {
        settings.data_file = data_file;
    }
    if args.memory {
        settings.memory = true;
    }

    Ok(settings)
}
