use chrono::NaiveDateTime;

use super::{CommandError, CommandResult};
use crate::model::task::ValidationError;
use crate::model::task_index::TaskCategory;
use crate::ops::filter::{TaskFilter, TimeWindow};
use crate::ops::model_ops::Model;

pub const COMMAND_WORD: &str = "list";

pub const USAGE: &str = "list [--from START] [--to END | --by END]\n  \
Lists all tasks, or only the events and deadlines inside a time window. \
With only --from the window is one week long.";

/// Shows every task, or narrows the views to a time window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListCommand {
    window: Option<TimeWindow>,
}

impl ListCommand {
    /// `by` is an alias for `to`; giving both is an error
    pub fn new(
        from: Option<NaiveDateTime>,
        to: Option<NaiveDateTime>,
        by: Option<NaiveDateTime>,
    ) -> Result<Self, ValidationError> {
        let to = match (to, by) {
            (Some(_), Some(_)) => return Err(ValidationError::EndAndDeadline),
            (to, by) => to.or(by),
        };
        Ok(ListCommand {
            window: TimeWindow::new(from, to)?,
        })
    }

    pub fn all() -> Self {
        ListCommand { window: None }
    }

    pub fn window(&self) -> Option<&TimeWindow> {
        self.window.as_ref()
    }

    pub fn execute(self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        model.update_selected_indexes(Vec::new());
        let Some(window) = self.window else {
            model.update_filtered_list_to_show_all();
            return Ok(CommandResult::new("Listed all tasks"));
        };

        model.update_filtered_list(TaskFilter::Window(window));
        Ok(CommandResult::new(format!(
            "{} tasks listed!",
            visible_count(model)
        )))
    }
}

/// Total size of the four filtered views
pub(crate) fn visible_count(model: &dyn Model) -> usize {
    TaskCategory::ALL
        .iter()
        .map(|&c| model.list_from_category(c).len())
        .sum()
}
