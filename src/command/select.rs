use super::{CommandError, CommandResult};
use crate::model::task_index::TaskIndex;
use crate::ops::model_ops::Model;

pub const COMMAND_WORD: &str = "select";

pub const USAGE: &str = "select <INDEX>\n  \
Selects one task; edit, done and delete without indexes act on the selection.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectCommand {
    index: TaskIndex,
}

impl SelectCommand {
    pub fn new(index: TaskIndex) -> Self {
        SelectCommand { index }
    }

    pub fn execute(self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        if model.resolve_index(self.index).is_none() {
            return Err(CommandError::InvalidIndex(self.index));
        }
        model.update_selected_indexes(vec![self.index]);
        Ok(CommandResult::new(format!("Selected task: {}", self.index))
            .with_selection(vec![self.index]))
    }
}
