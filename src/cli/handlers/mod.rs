mod build;
pub use build::build_command;

use std::path::PathBuf;

use tracing::debug;

use crate::cli::commands::Cli;
use crate::cli::output::{format_views, outcome_json};
use crate::command::{CommandError, CommandResult};
use crate::io::config_io;
use crate::io::state::Session;
use crate::io::storage::Storage;
use crate::logging;
use crate::logic::Logic;
use crate::ops::history::HistoryStore;
use crate::ops::model_ops::{Model, ModelManager};

/// Directory under the working (or `-C`) directory that holds all files
pub const DATA_DIR: &str = ".todo";

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let json = cli.json;
    let data_dir = data_dir(cli.project_dir.as_deref())?;

    let config = config_io::read_config(&data_dir)?;
    logging::init_logging(&config.log_level);
    debug!(dir = %data_dir.display(), "using data directory");

    let storage = Storage::from_config(&data_dir, &config);
    let data = storage.load_to_do_list()?.unwrap_or_default();
    let session = storage.load_session()?.unwrap_or_default();

    let mut history = session.history;
    history.set_capacity(config.history_size);
    let model = ModelManager::with_state(data, session.filter, session.selection);

    let Some(command) = cli.command else {
        print_outcome(&model, None, json)?;
        return Ok(());
    };

    let (events, event_rx) = flume::unbounded();
    let mut logic = Logic::new(model, history, events);
    let outcome = logic.execute(build_command(command));

    for event in event_rx.drain() {
        if let Some(warning) = storage.handle_event(&event) {
            eprintln!("warning: {}", warning);
        }
    }

    let (model, history) = logic.into_parts();
    let result = finish(&storage, &model, history, outcome)?;
    if result.show_help {
        println!("{}", result.message);
        return Ok(());
    }
    print_outcome(&model, Some(&result.message), json)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn data_dir(project_dir: Option<&str>) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let base = match project_dir {
        Some(dir) => std::fs::canonicalize(dir)
            .map_err(|e| format!("cannot resolve -C path '{}': {}", dir, e))?,
        None => std::env::current_dir()?,
    };
    Ok(base.join(DATA_DIR))
}

/// Save the session whatever the outcome, then surface the command's error
fn finish(
    storage: &Storage,
    model: &ModelManager,
    history: HistoryStore,
    outcome: Result<CommandResult, CommandError>,
) -> Result<CommandResult, Box<dyn std::error::Error>> {
    let session = Session {
        selection: model.selected_indexes().to_vec(),
        filter: model.filter().cloned(),
        history,
    };
    if let Err(e) = storage.save_session(&session) {
        eprintln!("warning: session was not saved: {}", e);
    }
    Ok(outcome?)
}

fn print_outcome(
    model: &ModelManager,
    message: Option<&str>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        println!("{}", serde_json::to_string_pretty(&outcome_json(model, message))?);
        return Ok(());
    }
    if let Some(message) = message {
        println!("{}", message);
    }
    let views = format_views(model);
    if views.is_empty() {
        if message.is_none() {
            println!("No tasks. Try `td add <TITLE>`.");
        }
    } else {
        if message.is_some() {
            println!();
        }
        print!("{}", views);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn data_dir_under_project_dir() {
        let tmp = TempDir::new().unwrap();
        let dir = data_dir(Some(tmp.path().to_str().unwrap())).unwrap();
        assert!(dir.ends_with(DATA_DIR));
        assert!(dir.starts_with(std::fs::canonicalize(tmp.path()).unwrap()));
    }

    #[test]
    fn missing_project_dir_is_an_error() {
        assert!(data_dir(Some("/definitely/not/here")).is_err());
    }

    #[test]
    fn failed_command_still_saves_session() {
        let tmp = TempDir::new().unwrap();
        let storage = Storage::new(tmp.path().join("data.json"), tmp.path().join("session.json"));
        let model = ModelManager::default();
        let err = finish(
            &storage,
            &model,
            HistoryStore::new(),
            Err(CommandError::NothingToUndo),
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "No more commands to undo");
        assert!(storage.session_path().exists());
    }
}
