use chrono::NaiveDateTime;
use tracing::debug;

use super::{CommandError, CommandResult, run_undoable};
use crate::model::task::{
    Description, Task, TaskFields, Title, UrgencyLevel, ValidationError, Venue, tag_set,
};
use crate::ops::history::HistoryStore;
use crate::ops::model_ops::Model;

pub const COMMAND_WORD: &str = "add";

pub const USAGE: &str = "add <TITLE> [--venue VENUE] [--from START] [--to END | --by DEADLINE] \
[--level 1-5] [--description TEXT] [--tag TAG]...\n  \
Adds a task. Start and end make an event, an end or deadline alone makes a deadline, \
no time makes a floating task.";

/// Raw parameters for a new task, as decomposed by the parser
#[derive(Debug, Clone, Default)]
pub struct AddParams {
    pub title: String,
    pub venue: Option<String>,
    pub start_time: Option<NaiveDateTime>,
    pub end_time: Option<NaiveDateTime>,
    /// Alias for `end_time`; giving both is an error
    pub deadline: Option<NaiveDateTime>,
    pub urgency: Option<i64>,
    pub description: Option<String>,
    pub tags: Vec<String>,
}

/// Adds one task to the list matching its category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddCommand {
    task: Task,
}

impl AddCommand {
    /// Validate every field and build the task up front
    pub fn new(params: AddParams) -> Result<Self, ValidationError> {
        let end_time = match (params.end_time, params.deadline) {
            (Some(_), Some(_)) => return Err(ValidationError::EndAndDeadline),
            (end, deadline) => end.or(deadline),
        };
        let fields = TaskFields {
            title: Title::new(&params.title)?,
            venue: params.venue.as_deref().map(Venue::new).transpose()?,
            start_time: params.start_time,
            end_time,
            urgency: params.urgency.map(UrgencyLevel::new).transpose()?,
            description: params
                .description
                .as_deref()
                .map(Description::new)
                .transpose()?,
            tags: tag_set(params.tags.as_slice())?,
        };
        Ok(AddCommand {
            task: Task::new(fields)?,
        })
    }

    pub fn from_task(task: Task) -> Self {
        AddCommand { task }
    }

    pub fn task(&self) -> &Task {
        &self.task
    }

    pub fn execute(
        self,
        model: &mut dyn Model,
        history: &mut HistoryStore,
    ) -> Result<CommandResult, CommandError> {
        let task = self.task;
        run_undoable(model, history, |model| {
            let category = task.category();
            debug!(%category, "add command");
            model.add_task(task.clone())?;
            model.update_filtered_list_to_show_all();

            let selection: Vec<_> = model.index_of(category, &task).into_iter().collect();
            model.update_selected_indexes(selection.clone());
            Ok(CommandResult::new(format!("New task added: {}", task)).with_selection(selection))
        })
    }
}
