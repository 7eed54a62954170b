use serde::{Deserialize, Serialize};

/// Number of undo steps kept when the config does not say otherwise
pub const DEFAULT_HISTORY_SIZE: usize = 3;

/// Configuration from `config.toml` in the data directory.
/// Every key is optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// How many undoable commands can be reverted (minimum 1)
    pub history_size: usize,
    /// Task data file, relative to the data directory
    pub data_file: String,
    /// Selection, filter and undo history, relative to the data directory
    pub session_file: String,
    /// Default log filter when `RUST_LOG` is unset
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            history_size: DEFAULT_HISTORY_SIZE,
            data_file: "todolist.json".into(),
            session_file: "session.json".into(),
            log_level: "warn".into(),
        }
    }
}
