use super::{CommandError, CommandResult, join_titles, resolve_targets, run_undoable};
use crate::model::task_index::TaskIndex;
use crate::ops::history::HistoryStore;
use crate::ops::model_ops::Model;

pub const COMMAND_WORD: &str = "delete";

pub const USAGE: &str = "delete [INDEX]...\n  \
Deletes the tasks at the given indexes (or the selected tasks), completed ones included.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteCommand {
    indexes: Vec<TaskIndex>,
}

impl DeleteCommand {
    /// An empty `indexes` targets the current selection at execution time
    pub fn new(indexes: Vec<TaskIndex>) -> Self {
        DeleteCommand { indexes }
    }

    pub fn execute(
        self,
        model: &mut dyn Model,
        history: &mut HistoryStore,
    ) -> Result<CommandResult, CommandError> {
        run_undoable(model, history, |model| {
            let targets = resolve_targets(model, &self.indexes)?;
            for (index, task) in &targets {
                model.delete_task(index.category(), task)?;
            }
            model.update_selected_indexes(Vec::new());

            let titles = join_titles(targets.iter().map(|(_, task)| task));
            Ok(CommandResult::new(format!("Deleted task: {}", titles)))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::task_index::TaskCategory;
    use crate::test_helpers::*;

    #[test]
    fn deletes_across_categories() {
        let mut model = model_with(&[float("a"), deadline("b", 13), event("c", 14)]);
        let mut history = HistoryStore::new();
        let result = DeleteCommand::new(vec![idx("f1"), idx("e1")])
            .execute(&mut model, &mut history)
            .unwrap();
        assert_eq!(result.message, "Deleted task: a, c");
        assert!(result.selection.is_empty());
        assert_eq!(titles(&model, TaskCategory::Deadline), vec!["b"]);
        assert_eq!(model.to_do_list().len(), 1);
    }

    #[test]
    fn deletes_completed_task() {
        let mut model = model_with(&[float("a")]);
        model.complete_task(&float("a")).unwrap();
        let mut history = HistoryStore::new();
        DeleteCommand::new(vec![idx("c1")])
            .execute(&mut model, &mut history)
            .unwrap();
        assert!(model.to_do_list().is_empty());
    }

    #[test]
    fn completed_index_deletes_completed_copy() {
        // an equal task may be pending and completed at once
        let mut model = model_with(&[float("a")]);
        model.complete_task(&float("a")).unwrap();
        model.add_task(float("a")).unwrap();
        let mut history = HistoryStore::new();
        DeleteCommand::new(vec![idx("c1")])
            .execute(&mut model, &mut history)
            .unwrap();
        assert_eq!(titles(&model, TaskCategory::Float), vec!["a"]);
        assert!(titles(&model, TaskCategory::Completed).is_empty());
    }

    #[test]
    fn clears_selection() {
        let mut model = model_with(&[float("a"), float("b")]);
        model.update_selected_indexes(vec![idx("f2")]);
        let mut history = HistoryStore::new();
        DeleteCommand::new(vec![])
            .execute(&mut model, &mut history)
            .unwrap();
        assert_eq!(titles(&model, TaskCategory::Float), vec!["a"]);
        assert!(model.selected_indexes().is_empty());
    }

    #[test]
    fn invalid_index_deletes_nothing() {
        let mut model = model_with(&[float("a")]);
        let mut history = HistoryStore::new();
        let err = DeleteCommand::new(vec![idx("f1"), idx("e1")])
            .execute(&mut model, &mut history)
            .unwrap_err();
        assert_eq!(err, CommandError::InvalidIndex(idx("e1")));
        assert_eq!(model.to_do_list().len(), 1);
        assert!(history.is_empty());
    }
}
