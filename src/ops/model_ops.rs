use tracing::debug;

use crate::model::task::Task;
use crate::model::task_index::{TaskCategory, TaskIndex};
use crate::model::todo_list::{ModelError, ToDoList};
use crate::ops::filter::TaskFilter;

/// The operations commands may perform on task state
pub trait Model {
    /// The full, unfiltered state
    fn to_do_list(&self) -> &ToDoList;

    /// Replace the whole state (undo, rollback). Filter and selection are
    /// left alone.
    fn reset_data(&mut self, data: ToDoList);

    /// Insert into the list implied by the task's time fields
    fn add_task(&mut self, task: Task) -> Result<(), ModelError>;

    /// Replace `target` in the `category` list with `edited`, moving it to
    /// another list if its category changed. Completed tasks stay completed.
    fn update_task(
        &mut self,
        category: TaskCategory,
        target: &Task,
        edited: Task,
    ) -> Result<(), ModelError>;

    /// Move a pending task to the completed list
    fn complete_task(&mut self, task: &Task) -> Result<(), ModelError>;

    /// Remove `task` from the `category` list
    fn delete_task(&mut self, category: TaskCategory, task: &Task) -> Result<(), ModelError>;

    /// The filtered view of one category, in list order
    fn list_from_category(&self, category: TaskCategory) -> Vec<&Task>;

    fn update_filtered_list(&mut self, filter: TaskFilter);

    fn update_filtered_list_to_show_all(&mut self);

    fn selected_indexes(&self) -> &[TaskIndex];

    fn update_selected_indexes(&mut self, indexes: Vec<TaskIndex>);

    /// Resolve an index against the current view
    fn resolve_index(&self, index: TaskIndex) -> Option<&Task> {
        self.list_from_category(index.category())
            .get(index.position())
            .copied()
    }

    /// Where `task` currently appears in the view of `category`
    fn index_of(&self, category: TaskCategory, task: &Task) -> Option<TaskIndex> {
        self.list_from_category(category)
            .iter()
            .position(|t| *t == task)
            .map(|pos| TaskIndex::from_position(category, pos))
    }
}

/// In-memory [`Model`] holding the task lists, the active filter and the
/// current selection
#[derive(Debug, Clone, Default)]
pub struct ModelManager {
    data: ToDoList,
    filter: Option<TaskFilter>,
    selection: Vec<TaskIndex>,
}

impl ModelManager {
    pub fn new(data: ToDoList) -> Self {
        ModelManager {
            data,
            filter: None,
            selection: Vec::new(),
        }
    }

    /// Restore a model with a previously saved filter and selection
    pub fn with_state(
        data: ToDoList,
        filter: Option<TaskFilter>,
        selection: Vec<TaskIndex>,
    ) -> Self {
        ModelManager {
            data,
            filter,
            selection,
        }
    }

    pub fn filter(&self) -> Option<&TaskFilter> {
        self.filter.as_ref()
    }

    /// Split into data, filter and selection
    pub fn into_parts(self) -> (ToDoList, Option<TaskFilter>, Vec<TaskIndex>) {
        (self.data, self.filter, self.selection)
    }
}

impl Model for ModelManager {
    fn to_do_list(&self) -> &ToDoList {
        &self.data
    }

    fn reset_data(&mut self, data: ToDoList) {
        self.data = data;
    }

    fn add_task(&mut self, task: Task) -> Result<(), ModelError> {
        let category = task.category();
        debug!(%category, title = %task.title(), "adding task");
        self.data.push(category, task)
    }

    fn update_task(
        &mut self,
        from: TaskCategory,
        target: &Task,
        edited: Task,
    ) -> Result<(), ModelError> {
        let position = self
            .data
            .position(from, target)
            .ok_or_else(|| ModelError::TaskNotFound(target.title().to_string()))?;
        let to = match from {
            TaskCategory::Completed => TaskCategory::Completed,
            _ => edited.category(),
        };
        debug!(%from, %to, title = %edited.title(), "updating task");

        if from == to {
            return self.data.replace_at(to, position, edited);
        }
        if self.data.contains(to, &edited) {
            return Err(ModelError::DuplicateTask(edited.title().to_string()));
        }
        self.data.remove_at(from, position);
        self.data.push(to, edited)
    }

    fn complete_task(&mut self, task: &Task) -> Result<(), ModelError> {
        let pending = task.category();
        let position = self
            .data
            .position(pending, task)
            .ok_or_else(|| ModelError::TaskNotFound(task.title().to_string()))?;
        if self.data.contains(TaskCategory::Completed, task) {
            return Err(ModelError::DuplicateTask(task.title().to_string()));
        }
        debug!(from = %pending, title = %task.title(), "completing task");
        if let Some(done) = self.data.remove_at(pending, position) {
            self.data.push(TaskCategory::Completed, done)?;
        }
        Ok(())
    }

    fn delete_task(&mut self, category: TaskCategory, task: &Task) -> Result<(), ModelError> {
        let position = self
            .data
            .position(category, task)
            .ok_or_else(|| ModelError::TaskNotFound(task.title().to_string()))?;
        debug!(%category, title = %task.title(), "deleting task");
        self.data.remove_at(category, position);
        Ok(())
    }

    fn list_from_category(&self, category: TaskCategory) -> Vec<&Task> {
        let list = self.data.list(category).iter();
        match &self.filter {
            Some(filter) => list.filter(|t| filter.matches(t)).collect(),
            None => list.collect(),
        }
    }

    fn update_filtered_list(&mut self, filter: TaskFilter) {
        self.filter = Some(filter);
    }

    fn update_filtered_list_to_show_all(&mut self) {
        self.filter = None;
    }

    fn selected_indexes(&self) -> &[TaskIndex] {
        &self.selection
    }

    fn update_selected_indexes(&mut self, indexes: Vec<TaskIndex>) {
        self.selection = indexes;
    }
}
