pub mod config_io;
pub mod state;
pub mod storage;

pub use config_io::{ConfigError, read_config};
pub use state::Session;
pub use storage::{Storage, StorageError, StorageWarning};
