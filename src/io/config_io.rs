use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::model::config::AppConfig;

pub const CONFIG_FILE: &str = "config.toml";

/// Error type for reading `config.toml`
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse config.toml: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("history_size must be at least 1")]
    ZeroHistorySize,
}

/// Read `config.toml` from the data directory. A missing file gives the
/// defaults.
pub fn read_config(data_dir: &Path) -> Result<AppConfig, ConfigError> {
    let config_path = data_dir.join(CONFIG_FILE);
    let config_text = match fs::read_to_string(&config_path) {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(AppConfig::default()),
        Err(e) => {
            return Err(ConfigError::ReadError {
                path: config_path,
                source: e,
            });
        }
    };
    let config: AppConfig = toml::from_str(&config_text)?;
    if config.history_size == 0 {
        return Err(ConfigError::ZeroHistorySize);
    }
    Ok(config)
}
