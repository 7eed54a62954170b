use serde::{Deserialize, Serialize};

use super::task::Task;
use super::task_index::TaskCategory;

/// Error type for list mutations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    #[error("duplicate task: {0}")]
    DuplicateTask(String),
    #[error("task not found: {0}")]
    TaskNotFound(String),
}

/// Why stored lists were rejected on load
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ListError {
    #[error(transparent)]
    Duplicate(#[from] ModelError),
    #[error("task '{title}' is stored under {found} but belongs under {expected}")]
    Misplaced {
        title: String,
        found: TaskCategory,
        expected: TaskCategory,
    },
}

/// The whole task state: three pending lists plus the completed list.
///
/// Each list keeps insertion order and holds no two equal tasks. A pending
/// task sits in the list matching its category; an equal task may also be
/// in the completed list. Cloning gives the snapshot used for undo.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StoredLists")]
pub struct ToDoList {
    events: Vec<Task>,
    deadlines: Vec<Task>,
    floats: Vec<Task>,
    completed: Vec<Task>,
}

/// The lists as read from disk, before placement is checked
#[derive(Deserialize)]
struct StoredLists {
    #[serde(default)]
    events: Vec<Task>,
    #[serde(default)]
    deadlines: Vec<Task>,
    #[serde(default)]
    floats: Vec<Task>,
    #[serde(default)]
    completed: Vec<Task>,
}

impl TryFrom<StoredLists> for ToDoList {
    type Error = ListError;

    fn try_from(stored: StoredLists) -> Result<Self, Self::Error> {
        let mut list = ToDoList::new();
        let lists = [
            (TaskCategory::Event, stored.events),
            (TaskCategory::Deadline, stored.deadlines),
            (TaskCategory::Float, stored.floats),
            (TaskCategory::Completed, stored.completed),
        ];
        for (category, tasks) in lists {
            for task in tasks {
                let expected = task.category();
                if category != TaskCategory::Completed && expected != category {
                    return Err(ListError::Misplaced {
                        title: task.title().to_string(),
                        found: category,
                        expected,
                    });
                }
                list.push(category, task)?;
            }
        }
        Ok(list)
    }
}

impl ToDoList {
    pub fn new() -> Self {
        Self::default()
    }

    /// All tasks of one category, in list order
    pub fn list(&self, category: TaskCategory) -> &[Task] {
        match category {
            TaskCategory::Event => &self.events,
            TaskCategory::Deadline => &self.deadlines,
            TaskCategory::Float => &self.floats,
            TaskCategory::Completed => &self.completed,
        }
    }

    fn list_mut(&mut self, category: TaskCategory) -> &mut Vec<Task> {
        match category {
            TaskCategory::Event => &mut self.events,
            TaskCategory::Deadline => &mut self.deadlines,
            TaskCategory::Float => &mut self.floats,
            TaskCategory::Completed => &mut self.completed,
        }
    }

    pub fn contains(&self, category: TaskCategory, task: &Task) -> bool {
        self.list(category).contains(task)
    }

    /// Position of `task` within the `category` list
    pub fn position(&self, category: TaskCategory, task: &Task) -> Option<usize> {
        self.list(category).iter().position(|t| t == task)
    }

    /// Append to the end of a list, refusing duplicates
    pub fn push(&mut self, category: TaskCategory, task: Task) -> Result<(), ModelError> {
        if self.contains(category, &task) {
            return Err(ModelError::DuplicateTask(task.title().to_string()));
        }
        self.list_mut(category).push(task);
        Ok(())
    }

    /// Remove and return the task at `position`
    pub fn remove_at(&mut self, category: TaskCategory, position: usize) -> Option<Task> {
        let list = self.list_mut(category);
        if position < list.len() {
            Some(list.remove(position))
        } else {
            None
        }
    }

    /// Overwrite the task at `position`. Fails if another slot of the same
    /// list already holds an equal task.
    pub fn replace_at(
        &mut self,
        category: TaskCategory,
        position: usize,
        task: Task,
    ) -> Result<(), ModelError> {
        let list = self.list_mut(category);
        if list.iter().enumerate().any(|(i, t)| i != position && *t == task) {
            return Err(ModelError::DuplicateTask(task.title().to_string()));
        }
        match list.get_mut(position) {
            Some(slot) => {
                *slot = task;
                Ok(())
            }
            None => Err(ModelError::TaskNotFound(task.title().to_string())),
        }
    }

    /// Every task across the four lists, in display order
    pub fn tasks(&self) -> impl Iterator<Item = &Task> {
        TaskCategory::ALL.into_iter().flat_map(|cat| self.list(cat).iter())
    }

    pub fn len(&self) -> usize {
        TaskCategory::ALL.iter().map(|cat| self.list(*cat).len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{deadline, event, float};

    #[test]
    fn push_rejects_equal_task() {
        let mut list = ToDoList::new();
        list.push(TaskCategory::Float, float("a")).unwrap();
        let err = list.push(TaskCategory::Float, float("a")).unwrap_err();
        assert!(matches!(err, ModelError::DuplicateTask(_)));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn equal_task_may_sit_in_pending_and_completed() {
        let mut list = ToDoList::new();
        list.push(TaskCategory::Completed, float("a")).unwrap();
        list.push(TaskCategory::Float, float("a")).unwrap();
        assert_eq!(list.position(TaskCategory::Float, &float("a")), Some(0));
        assert_eq!(list.position(TaskCategory::Completed, &float("a")), Some(0));
    }

    #[test]
    fn position_only_searches_the_named_list() {
        let mut list = ToDoList::new();
        list.push(TaskCategory::Completed, float("done")).unwrap();
        assert_eq!(list.position(TaskCategory::Completed, &float("done")), Some(0));
        assert_eq!(list.position(TaskCategory::Float, &float("done")), None);
    }

    #[test]
    fn deserialize_keeps_valid_lists() {
        let mut list = ToDoList::new();
        list.push(TaskCategory::Event, event("talk", 13)).unwrap();
        list.push(TaskCategory::Deadline, deadline("essay", 14)).unwrap();
        list.push(TaskCategory::Completed, deadline("essay", 14)).unwrap();
        let json = serde_json::to_string(&list).unwrap();
        assert_eq!(serde_json::from_str::<ToDoList>(&json).unwrap(), list);
    }

    #[test]
    fn deserialize_rejects_misplaced_task() {
        let mut list = ToDoList::new();
        list.push(TaskCategory::Deadline, deadline("essay", 14)).unwrap();
        let mut value = serde_json::to_value(&list).unwrap();
        let deadlines = value["deadlines"].take();
        value["events"] = deadlines;
        value["deadlines"] = serde_json::json!([]);

        let err = serde_json::from_value::<ToDoList>(value).unwrap_err();
        assert!(err.to_string().contains("stored under Events"), "{}", err);
    }

    #[test]
    fn deserialize_rejects_duplicates() {
        let mut list = ToDoList::new();
        list.push(TaskCategory::Float, float("a")).unwrap();
        let mut value = serde_json::to_value(&list).unwrap();
        let task = value["floats"][0].clone();
        value["floats"].as_array_mut().unwrap().push(task);

        let err = serde_json::from_value::<ToDoList>(value).unwrap_err();
        assert!(err.to_string().contains("duplicate task: a"), "{}", err);
    }

    #[test]
    fn replace_at_checks_other_slots() {
        let mut list = ToDoList::new();
        list.push(TaskCategory::Float, float("a")).unwrap();
        list.push(TaskCategory::Float, float("b")).unwrap();
        assert!(list.replace_at(TaskCategory::Float, 1, float("a")).is_err());
        // replacing a task with itself is fine
        list.replace_at(TaskCategory::Float, 1, float("b")).unwrap();
        list.replace_at(TaskCategory::Float, 1, float("c")).unwrap();
        assert_eq!(list.list(TaskCategory::Float)[1], float("c"));
    }

    #[test]
    fn remove_at_out_of_range() {
        let mut list = ToDoList::new();
        assert!(list.remove_at(TaskCategory::Event, 0).is_none());
    }

    #[test]
    fn tasks_iterates_in_display_order() {
        let mut list = ToDoList::new();
        list.push(TaskCategory::Completed, float("c")).unwrap();
        list.push(TaskCategory::Float, float("f")).unwrap();
        let titles: Vec<String> = list.tasks().map(|t| t.title().to_string()).collect();
        assert_eq!(titles, vec!["f", "c"]);
    }
}
