//! Handles settings for the application. Configuration is written in
//! `settings.toml`, with `KHARCHA_*` environment overrides.
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use engine::Store;

fn default_level() -> String {
    "info".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_data_file() -> String {
    "expenses.csv".to_string()
}

#[derive(Debug, Deserialize)]
pub struct App {
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for App {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct Server {
    pub bind: Option<String>,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for Server {
    fn default() -> Self {
        Self {
            bind: None,
            port: default_port(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreKind {
    /// Records live only for the lifetime of the process.
    Memory,
    /// Records are kept in a CSV data file, rewritten on every mutation.
    #[default]
    Csv,
}

#[derive(Debug, Deserialize)]
pub struct StoreSettings {
    #[serde(default)]
    pub kind: StoreKind,
    #[serde(default = "default_data_file")]
    pub path: String,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            kind: StoreKind::default(),
            path: default_data_file(),
        }
    }
}

impl StoreSettings {
    pub fn to_store(&self) -> Store {
        match self.kind {
            StoreKind::Memory => Store::Memory,
            StoreKind::Csv => Store::csv(&self.path),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub app: App,
    pub server: Server,
    pub store: StoreSettings,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("settings").required(false))
            .add_source(Environment::with_prefix("KHARCHA").separator("__"))
            .build()?;

        settings.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_use_the_csv_data_file() {
        let settings = Settings::default();
        assert_eq!(settings.store.kind, StoreKind::Csv);
        assert_eq!(settings.store.to_store(), Store::csv("expenses.csv"));
        assert_eq!(settings.server.port, 3000);
    }

    #[test]
    fn memory_kind_maps_to_memory_store() {
        let store = StoreSettings {
            kind: StoreKind::Memory,
            path: default_data_file(),
        };
        assert_eq!(store.to_store(), Store::Memory);
    }
}
