use std::fs;
use std::io::{self, ErrorKind, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use tempfile::NamedTempFile;
use tracing::{debug, warn};

use crate::io::state::Session;
use crate::logic::CoreEvent;
use crate::model::config::AppConfig;
use crate::model::todo_list::ToDoList;

/// Error type for task and session files
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("could not read {path}: {source}")]
    ReadError { path: PathBuf, source: io::Error },
    #[error("could not parse {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("could not write {path}: {source}")]
    WriteError { path: PathBuf, source: io::Error },
}

/// A save that failed after the command already succeeded
#[derive(Debug)]
pub struct StorageWarning {
    pub error: StorageError,
}

impl std::fmt::Display for StorageWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "changes were not saved: {}", self.error)
    }
}

/// JSON files holding the task lists and the session
#[derive(Debug, Clone)]
pub struct Storage {
    data_path: PathBuf,
    session_path: PathBuf,
}

impl Storage {
    pub fn new(data_path: impl Into<PathBuf>, session_path: impl Into<PathBuf>) -> Self {
        Storage {
            data_path: data_path.into(),
            session_path: session_path.into(),
        }
    }

    /// File names from the config, relative to `data_dir`
    pub fn from_config(data_dir: &Path, config: &AppConfig) -> Self {
        Storage::new(
            data_dir.join(&config.data_file),
            data_dir.join(&config.session_file),
        )
    }

    pub fn data_path(&self) -> &Path {
        &self.data_path
    }

    pub fn session_path(&self) -> &Path {
        &self.session_path
    }

    /// `Ok(None)` when there is no data file yet
    pub fn load_to_do_list(&self) -> Result<Option<ToDoList>, StorageError> {
        read_json(&self.data_path)
    }

    pub fn save_to_do_list(&self, list: &ToDoList) -> Result<(), StorageError> {
        write_json(&self.data_path, list)
    }

    /// `Ok(None)` when there is no session file yet
    pub fn load_session(&self) -> Result<Option<Session>, StorageError> {
        read_json(&self.session_path)
    }

    pub fn save_session(&self, session: &Session) -> Result<(), StorageError> {
        write_json(&self.session_path, session)
    }

    /// Persist whatever the event carries. Failures come back as a warning;
    /// the in-memory change stands.
    pub fn handle_event(&self, event: &CoreEvent) -> Option<StorageWarning> {
        match event {
            CoreEvent::ToDoListChanged(list) => match self.save_to_do_list(list) {
                Ok(()) => {
                    debug!(path = %self.data_path.display(), tasks = list.len(), "saved to-do list");
                    None
                }
                Err(error) => {
                    warn!(%error, "could not save to-do list");
                    Some(StorageWarning { error })
                }
            },
            CoreEvent::SelectionChanged(_) | CoreEvent::ShowHelp => None,
        }
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, StorageError> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(StorageError::ReadError {
                path: path.to_path_buf(),
                source,
            });
        }
    };
    serde_json::from_str(&text)
        .map(Some)
        .map_err(|source| StorageError::ParseError {
            path: path.to_path_buf(),
            source,
        })
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), StorageError> {
    let write_error = |source: io::Error| StorageError::WriteError {
        path: path.to_path_buf(),
        source,
    };
    let mut content = serde_json::to_string_pretty(value)
        .map_err(io::Error::from)
        .map_err(write_error)?;
    content.push('\n');
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).map_err(write_error)?;
    }
    atomic_write(path, content.as_bytes()).map_err(write_error)
}

/// Write to a temp file in the same directory, then rename over `path`
pub fn atomic_write(path: &Path, content: &[u8]) -> io::Result<()> {
    let dir = path.parent().unwrap_or(Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
