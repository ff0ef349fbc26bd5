//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Display settings
    #[serde(default)]
    pub settings: Settings,

    /// File locations
    #[serde(default)]
    pub storage: StorageSettings,
}

/// Display and REPL settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,

    /// REPL history size
    #[serde(default = "default_history_size")]
    pub history_size: usize,
}

/// Where the ledger and chart live.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageSettings {
    /// Diagnosis ledger (CSV)
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    /// Distribution chart output (SVG)
    #[serde(default = "default_chart_file")]
    pub chart_file: PathBuf,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
    /// Quiet (minimal) format
    Quiet,
}

impl Config {
    /// Get the default configuration file path.
    pub fn path() -> Result<PathBuf> {
        Ok(app_dir()?.join("config.toml"))
    }

    /// Load configuration from `path`, or defaults if it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)?;
            let config: Config = toml::from_str(&contents)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration, writing defaults on first run.
    ///
    /// An unreadable file is left untouched and defaults are used.
    pub fn load_or_init(path: &Path) -> Self {
        if !path.exists() {
            let config = Self::default();
            if let Err(e) = config.save_to(path) {
                tracing::warn!("Could not write default config to {}: {}", path.display(), e);
            }
            return config;
        }

        Self::load_from(path).unwrap_or_else(|e| {
            tracing::warn!("Ignoring config at {}: {}", path.display(), e);
            Self::default()
        })
    }

    /// Save configuration to `path`.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))?;
        fs::write(path, contents)?;
        Ok(())
    }
}

/// Directory holding the config and REPL history.
pub fn app_dir() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
    Ok(home.join(".anemia-shield"))
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Table,
            history_size: 1000,
        }
    }
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            chart_file: default_chart_file(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Table
}

fn default_history_size() -> usize {
    1000
}

fn default_data_file() -> PathBuf {
    PathBuf::from(anemia_store::DEFAULT_LEDGER_FILE)
}

fn default_chart_file() -> PathBuf {
    PathBuf::from("anemia_distribution.svg")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.settings.color);
        assert_eq!(config.settings.format, OutputFormat::Table);
        assert_eq!(
            config.storage.data_file,
            PathBuf::from("anemia_patient_data.csv")
        );
    }

    #[test]
    fn test_missing_sections_take_defaults() {
        let config: Config = toml::from_str("[settings]\ncolor = false\n").unwrap();
        assert!(!config.settings.color);
        assert_eq!(config.settings.history_size, 1000);
        assert_eq!(config.storage, StorageSettings::default());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.settings.format = OutputFormat::Json;
        config.storage.data_file = PathBuf::from("/var/lib/anemia/ledger.csv");
        config.save_to(&path).unwrap();

        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_load_or_init_writes_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        let config = Config::load_or_init(&path);
        assert_eq!(config, Config::default());
        assert!(path.exists());
    }

    #[test]
    fn test_load_or_init_keeps_broken_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "settings = [not toml").unwrap();

        let config = Config::load_or_init(&path);
        assert_eq!(config, Config::default());
        assert_eq!(fs::read_to_string(&path).unwrap(), "settings = [not toml");
    }
}
