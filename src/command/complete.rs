use super::{CommandError, CommandResult, join_titles, resolve_targets, run_undoable};
use crate::model::task_index::{TaskCategory, TaskIndex};
use crate::ops::history::HistoryStore;
use crate::ops::model_ops::Model;

pub const COMMAND_WORD: &str = "done";

pub const USAGE: &str = "done [INDEX]...\n  \
Marks the tasks at the given indexes (or the selected tasks) as completed.";

/// Moves pending tasks to the completed list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompleteCommand {
    indexes: Vec<TaskIndex>,
}

impl CompleteCommand {
    /// An empty `indexes` targets the current selection at execution time
    pub fn new(indexes: Vec<TaskIndex>) -> Self {
        CompleteCommand { indexes }
    }

    pub fn execute(
        self,
        model: &mut dyn Model,
        history: &mut HistoryStore,
    ) -> Result<CommandResult, CommandError> {
        run_undoable(model, history, |model| {
            let targets = resolve_targets(model, &self.indexes)?;
            for (index, task) in &targets {
                if index.category() == TaskCategory::Completed {
                    return Err(CommandError::TaskNotFound);
                }
                model.complete_task(task)?;
            }
            model.update_filtered_list_to_show_all();

            let selection: Vec<TaskIndex> = targets
                .iter()
                .filter_map(|(_, task)| model.index_of(TaskCategory::Completed, task))
                .collect();
            model.update_selected_indexes(selection.clone());

            let titles = join_titles(targets.iter().map(|(_, task)| task));
            Ok(CommandResult::new(format!("Completed task: {}", titles)).with_selection(selection))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;

    #[test]
    fn completes_several_deadlines() {
        let mut model = model_with(&[deadline("a", 13), deadline("b", 14), deadline("c", 15)]);
        let mut history = HistoryStore::new();
        let result = CompleteCommand::new(vec![idx("d1"), idx("d2")])
            .execute(&mut model, &mut history)
            .unwrap();

        assert_eq!(titles(&model, TaskCategory::Deadline), vec!["c"]);
        assert_eq!(titles(&model, TaskCategory::Completed), vec!["a", "b"]);
        assert_eq!(result.message, "Completed task: a, b");
        assert_eq!(result.selection, vec![idx("c1"), idx("c2")]);
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn indexes_resolve_before_any_task_moves() {
        // d2 must still mean "b" after d1 has been completed
        let mut model = model_with(&[deadline("a", 13), deadline("b", 14)]);
        let mut history = HistoryStore::new();
        CompleteCommand::new(vec![idx("d2"), idx("d1")])
            .execute(&mut model, &mut history)
            .unwrap();
        assert!(titles(&model, TaskCategory::Deadline).is_empty());
        assert_eq!(titles(&model, TaskCategory::Completed), vec!["b", "a"]);
    }

    #[test]
    fn bad_index_completes_nothing() {
        let mut model = model_with(&[deadline("a", 13)]);
        let before = model.to_do_list().clone();
        let mut history = HistoryStore::new();
        let err = CompleteCommand::new(vec![idx("d1"), idx("d2")])
            .execute(&mut model, &mut history)
            .unwrap_err();
        assert_eq!(err, CommandError::InvalidIndex(idx("d2")));
        assert_eq!(model.to_do_list(), &before);
        assert!(history.is_empty());
    }

    #[test]
    fn completed_task_cannot_be_completed_again() {
        let mut model = model_with(&[float("a"), float("b")]);
        model.complete_task(&float("a")).unwrap();
        let before = model.to_do_list().clone();
        let mut history = HistoryStore::new();
        let err = CompleteCommand::new(vec![idx("f1"), idx("c1")])
            .execute(&mut model, &mut history)
            .unwrap_err();
        assert_eq!(err, CommandError::TaskNotFound);
        assert_eq!(model.to_do_list(), &before);
    }

    #[test]
    fn no_index_and_no_selection() {
        let mut model = model_with(&[float("a")]);
        let mut history = HistoryStore::new();
        assert_eq!(
            CompleteCommand::new(vec![]).execute(&mut model, &mut history),
            Err(CommandError::NoTaskSelected)
        );
    }

    #[test]
    fn uses_selection() {
        let mut model = model_with(&[float("a"), float("b")]);
        model.update_selected_indexes(vec![idx("f1")]);
        let mut history = HistoryStore::new();
        CompleteCommand::new(vec![])
            .execute(&mut model, &mut history)
            .unwrap();
        assert_eq!(titles(&model, TaskCategory::Float), vec!["b"]);
        assert_eq!(model.selected_indexes(), &[idx("c1")]);
    }
}
