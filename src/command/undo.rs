use tracing::debug;

use super::{CommandError, CommandResult};
use crate::ops::history::HistoryStore;
use crate::ops::model_ops::Model;

pub const COMMAND_WORD: &str = "undo";

pub const USAGE: &str = "undo\n  \
Reverts the most recent add, edit, done or delete. Only the last few can be undone.";

/// Restores the snapshot taken before the newest recorded command
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UndoCommand;

impl UndoCommand {
    pub fn execute(
        self,
        model: &mut dyn Model,
        history: &mut HistoryStore,
    ) -> Result<CommandResult, CommandError> {
        let entry = history.pop().ok_or(CommandError::NothingToUndo)?;
        debug!(remaining = history.len(), message = %entry.message, "undoing");
        model.reset_data(entry.snapshot);
        model.update_filtered_list_to_show_all();
        model.update_selected_indexes(Vec::new());
        Ok(CommandResult::new(format!("Undo: {}", entry.message)))
    }
}
