//! Commands: one type per user intent, each executed exactly once against a
//! [`Model`].
//!
//! Undoable commands (add, edit, done, delete) run through
//! [`run_undoable`], which snapshots the state first, pushes the snapshot to
//! the [`HistoryStore`] on success and rolls the model back on failure, so a
//! batch is applied fully or not at all.

pub mod add;
pub mod complete;
pub mod delete;
pub mod edit;
pub mod find;
pub mod help;
pub mod list;
pub mod select;
pub mod undo;

pub use add::{AddCommand, AddParams};
pub use complete::CompleteCommand;
pub use delete::DeleteCommand;
pub use edit::{EditCommand, EditTaskDescriptor};
pub use find::FindCommand;
pub use help::HelpCommand;
pub use list::ListCommand;
pub use select::SelectCommand;
pub use undo::UndoCommand;

use crate::model::task::{Task, ValidationError};
use crate::model::task_index::TaskIndex;
use crate::model::todo_list::ModelError;
use crate::ops::history::HistoryStore;
use crate::ops::model_ops::Model;

/// Error type for command execution
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("This task already exists in the to-do list")]
    DuplicateTask,
    #[error("The task could not be found in the to-do list")]
    TaskNotFound,
    #[error("The task index provided is invalid")]
    InvalidIndex(TaskIndex),
    #[error("No task is selected")]
    NoTaskSelected,
    #[error("No more commands to undo")]
    NothingToUndo,
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// The command text could not be turned into a command
    #[error("{0}")]
    Usage(String),
}

impl From<ModelError> for CommandError {
    fn from(err: ModelError) -> Self {
        match err {
            ModelError::DuplicateTask(_) => CommandError::DuplicateTask,
            ModelError::TaskNotFound(_) => CommandError::TaskNotFound,
        }
    }
}

/// What a successful command reports back to the UI
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    pub message: String,
    /// Rows to highlight, in their post-command views
    pub selection: Vec<TaskIndex>,
    pub show_help: bool,
}

impl CommandResult {
    pub fn new(message: impl Into<String>) -> Self {
        CommandResult {
            message: message.into(),
            selection: Vec::new(),
            show_help: false,
        }
    }

    pub fn with_selection(mut self, selection: Vec<TaskIndex>) -> Self {
        self.selection = selection;
        self
    }

    pub fn with_help(mut self) -> Self {
        self.show_help = true;
        self
    }
}

/// Usage-error sentinel produced when input cannot become a real command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncorrectCommand {
    pub message: String,
}

impl IncorrectCommand {
    pub fn new(message: impl Into<String>) -> Self {
        IncorrectCommand {
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub enum Command {
    Add(AddCommand),
    Edit(EditCommand),
    Complete(CompleteCommand),
    Delete(DeleteCommand),
    List(ListCommand),
    Find(FindCommand),
    Select(SelectCommand),
    Undo(UndoCommand),
    Help(HelpCommand),
    Incorrect(IncorrectCommand),
}

impl Command {
    /// The word that invokes this command
    pub fn word(&self) -> &'static str {
        match self {
            Command::Add(_) => add::COMMAND_WORD,
            Command::Edit(_) => edit::COMMAND_WORD,
            Command::Complete(_) => complete::COMMAND_WORD,
            Command::Delete(_) => delete::COMMAND_WORD,
            Command::List(_) => list::COMMAND_WORD,
            Command::Find(_) => find::COMMAND_WORD,
            Command::Select(_) => select::COMMAND_WORD,
            Command::Undo(_) => undo::COMMAND_WORD,
            Command::Help(_) => help::COMMAND_WORD,
            Command::Incorrect(_) => "incorrect",
        }
    }

    /// True for commands that push to the undo history
    pub fn is_undoable(&self) -> bool {
        matches!(
            self,
            Command::Add(_) | Command::Edit(_) | Command::Complete(_) | Command::Delete(_)
        )
    }

    /// True for commands that can change the task lists
    pub fn mutates_state(&self) -> bool {
        self.is_undoable() || matches!(self, Command::Undo(_))
    }

    /// Run the command. Consumes it: a command executes once.
    pub fn execute(
        self,
        model: &mut dyn Model,
        history: &mut HistoryStore,
    ) -> Result<CommandResult, CommandError> {
        match self {
            Command::Add(cmd) => cmd.execute(model, history),
            Command::Edit(cmd) => cmd.execute(model, history),
            Command::Complete(cmd) => cmd.execute(model, history),
            Command::Delete(cmd) => cmd.execute(model, history),
            Command::List(cmd) => cmd.execute(model),
            Command::Find(cmd) => cmd.execute(model),
            Command::Select(cmd) => cmd.execute(model),
            Command::Undo(cmd) => cmd.execute(model, history),
            Command::Help(cmd) => cmd.execute(),
            Command::Incorrect(cmd) => Err(CommandError::Usage(cmd.message)),
        }
    }
}

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

/// Snapshot, run `mutate`, then either record the snapshot or restore it.
pub(crate) fn run_undoable<F>(
    model: &mut dyn Model,
    history: &mut HistoryStore,
    mutate: F,
) -> Result<CommandResult, CommandError>
where
    F: FnOnce(&mut dyn Model) -> Result<CommandResult, CommandError>,
{
    let snapshot = model.to_do_list().clone();
    match mutate(&mut *model) {
        Ok(result) => {
            history.push(snapshot, result.message.clone());
            Ok(result)
        }
        Err(err) => {
            model.reset_data(snapshot);
            Err(err)
        }
    }
}

/// Resolve every target against the current views before anything changes.
///
/// An empty `indexes` falls back to the model's selection. Repeated indexes
/// are resolved once. Any index outside its view fails the whole batch.
pub(crate) fn resolve_targets(
    model: &dyn Model,
    indexes: &[TaskIndex],
) -> Result<Vec<(TaskIndex, Task)>, CommandError> {
    let requested = if indexes.is_empty() {
        model.selected_indexes()
    } else {
        indexes
    };
    if requested.is_empty() {
        return Err(CommandError::NoTaskSelected);
    }

    let mut targets: Vec<(TaskIndex, Task)> = Vec::with_capacity(requested.len());
    for &index in requested {
        if targets.iter().any(|(seen, _)| *seen == index) {
            continue;
        }
        let task = model
            .resolve_index(index)
            .ok_or(CommandError::InvalidIndex(index))?;
        targets.push((index, task.clone()));
    }
    Ok(targets)
}

/// Titles of the given tasks, comma separated
pub(crate) fn join_titles<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> String {
    tasks
        .into_iter()
        .map(|t| t.title().as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
