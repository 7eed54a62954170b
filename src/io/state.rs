use serde::{Deserialize, Serialize};

use crate::model::task_index::TaskIndex;
use crate::ops::filter::TaskFilter;
use crate::ops::history::HistoryStore;

/// What survives between invocations besides the task data itself
/// (written to session.json)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Session {
    /// Selected rows, as shown after the previous command
    #[serde(default)]
    pub selection: Vec<TaskIndex>,
    /// Filter the selection indexes were taken under
    #[serde(default)]
    pub filter: Option<TaskFilter>,
    #[serde(default)]
    pub history: HistoryStore,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::task::Task;
    use crate::model::todo_list::ToDoList;
    use crate::ops::filter::KeywordMatcher;

    #[test]
    fn session_round_trips_through_json() {
        let mut history = HistoryStore::with_capacity(2);
        let mut snapshot = ToDoList::new();
        snapshot
            .push(crate::model::task_index::TaskCategory::Float, Task::floating("a").unwrap())
            .unwrap();
        history.push(snapshot, "New task added: b");

        let session = Session {
            selection: vec!["f2".parse().unwrap()],
            filter: Some(TaskFilter::Keywords(KeywordMatcher::new(&["a"]).unwrap())),
            history,
        };
        let json = serde_json::to_string_pretty(&session).unwrap();
        let back: Session = serde_json::from_str(&json).unwrap();

        assert_eq!(back.selection, session.selection);
        assert_eq!(back.history, session.history);
        assert!(matches!(back.filter, Some(TaskFilter::Keywords(_))));
    }

    #[test]
    fn empty_object_is_default_session() {
        let back: Session = serde_json::from_str("{}").unwrap();
        assert!(back.selection.is_empty());
        assert!(back.filter.is_none());
        assert!(back.history.is_empty());
    }
}
