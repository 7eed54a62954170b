use chrono::NaiveDateTime;
use indexmap::IndexSet;

use super::{CommandError, CommandResult, join_titles, resolve_targets, run_undoable};
use crate::model::task::{
    Description, Tag, Task, TaskFields, Title, UrgencyLevel, ValidationError, Venue,
};
use crate::model::task_index::{TaskCategory, TaskIndex};
use crate::ops::history::HistoryStore;
use crate::ops::model_ops::Model;

pub const COMMAND_WORD: &str = "edit";

pub const USAGE: &str = "edit [INDEX]... [--title TITLE] [--venue VENUE] [--from START] \
[--to END] [--level 1-5] [--description TEXT] [--tag TAG]...\n  \
Edits the tasks at the given indexes (or the selected tasks). Given fields replace \
the old values; --tag replaces the whole tag set.";

/// Fields to overwrite. Anything left `None` keeps the task's current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditTaskDescriptor {
    pub title: Option<Title>,
    pub venue: Option<Venue>,
    pub start_time: Option<NaiveDateTime>,
    pub end_time: Option<NaiveDateTime>,
    pub urgency: Option<UrgencyLevel>,
    pub description: Option<Description>,
    pub tags: Option<IndexSet<Tag>>,
}

impl EditTaskDescriptor {
    pub fn is_any_field_edited(&self) -> bool {
        self.title.is_some()
            || self.venue.is_some()
            || self.start_time.is_some()
            || self.end_time.is_some()
            || self.urgency.is_some()
            || self.description.is_some()
            || self.tags.is_some()
    }

    /// Merge onto `task` and re-validate the result
    pub fn apply(&self, task: &Task) -> Result<Task, ValidationError> {
        let current = task.fields();
        Task::new(TaskFields {
            title: self.title.clone().unwrap_or_else(|| current.title.clone()),
            venue: self.venue.clone().or_else(|| current.venue.clone()),
            start_time: self.start_time.or(current.start_time),
            end_time: self.end_time.or(current.end_time),
            urgency: self.urgency.or(current.urgency),
            description: self
                .description
                .clone()
                .or_else(|| current.description.clone()),
            tags: self.tags.clone().unwrap_or_else(|| current.tags.clone()),
        })
    }
}

/// Edits one or more tasks with the same descriptor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditCommand {
    indexes: Vec<TaskIndex>,
    descriptor: EditTaskDescriptor,
}

impl EditCommand {
    /// An empty `indexes` targets the current selection at execution time
    pub fn new(
        indexes: Vec<TaskIndex>,
        descriptor: EditTaskDescriptor,
    ) -> Result<Self, ValidationError> {
        if !descriptor.is_any_field_edited() {
            return Err(ValidationError::NothingToEdit);
        }
        Ok(EditCommand {
            indexes,
            descriptor,
        })
    }

    pub fn execute(
        self,
        model: &mut dyn Model,
        history: &mut HistoryStore,
    ) -> Result<CommandResult, CommandError> {
        run_undoable(model, history, |model| {
            let targets = resolve_targets(model, &self.indexes)?;

            // Build every edited task before touching the model
            let mut edits = Vec::with_capacity(targets.len());
            for (index, original) in targets {
                let edited = self.descriptor.apply(&original)?;
                let destination = match index.category() {
                    TaskCategory::Completed => TaskCategory::Completed,
                    _ => edited.category(),
                };
                edits.push((index.category(), original, edited, destination));
            }

            for (source, original, edited, _) in &edits {
                model.update_task(*source, original, edited.clone())?;
            }
            model.update_filtered_list_to_show_all();

            let selection: Vec<TaskIndex> = edits
                .iter()
                .filter_map(|(_, _, edited, destination)| model.index_of(*destination, edited))
                .collect();
            model.update_selected_indexes(selection.clone());

            let titles = join_titles(edits.iter().map(|(_, _, edited, _)| edited));
            Ok(CommandResult::new(format!("Edited task: {}", titles)).with_selection(selection))
        })
    }
}
