//! Entry point for the UI: runs commands against the model and tells
//! listeners what changed.

use tracing::{debug, info, warn};

use crate::command::{Command, CommandError, CommandResult};
use crate::model::task_index::TaskIndex;
use crate::model::todo_list::ToDoList;
use crate::ops::history::HistoryStore;
use crate::ops::model_ops::{Model, ModelManager};

/// Notifications emitted after a command succeeds
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreEvent {
    /// The task lists changed; carries the new state for persistence
    ToDoListChanged(ToDoList),
    SelectionChanged(Vec<TaskIndex>),
    ShowHelp,
}

pub struct Logic<M: Model = ModelManager> {
    model: M,
    history: HistoryStore,
    events: flume::Sender<CoreEvent>,
}

impl<M: Model> Logic<M> {
    pub fn new(model: M, history: HistoryStore, events: flume::Sender<CoreEvent>) -> Self {
        Logic {
            model,
            history,
            events,
        }
    }

    pub fn execute(&mut self, command: Command) -> Result<CommandResult, CommandError> {
        let word = command.word();
        let mutates = command.mutates_state();
        debug!(command = word, "executing");

        let result = command.execute(&mut self.model, &mut self.history);
        match &result {
            Ok(res) => {
                info!(command = word, message = %res.message, "command succeeded");
                if mutates {
                    self.notify(CoreEvent::ToDoListChanged(self.model.to_do_list().clone()));
                }
                if !res.selection.is_empty() {
                    self.notify(CoreEvent::SelectionChanged(res.selection.clone()));
                }
                if res.show_help {
                    self.notify(CoreEvent::ShowHelp);
                }
            }
            Err(err) => warn!(command = word, error = %err, "command failed"),
        }
        result
    }

    // Nobody listening is fine
    fn notify(&self, event: CoreEvent) {
        if self.events.send(event).is_err() {
            debug!("no event listener");
        }
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    pub fn into_parts(self) -> (M, HistoryStore) {
        (self.model, self.history)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::{AddCommand, DeleteCommand, HelpCommand, ListCommand, UndoCommand};
    use crate::model::task::Task;

    fn logic() -> (Logic, flume::Receiver<CoreEvent>) {
        let (tx, rx) = flume::unbounded();
        (Logic::new(ModelManager::default(), HistoryStore::new(), tx), rx)
    }

    fn add(title: &str) -> Command {
        Command::Add(AddCommand::from_task(Task::floating(title).unwrap()))
    }

    #[test]
    fn add_emits_state_and_selection() {
        let (mut logic, rx) = logic();
        logic.execute(add("a")).unwrap();
        let events: Vec<_> = rx.try_iter().collect();
        assert_eq!(events.len(), 2);
        assert!(matches!(&events[0], CoreEvent::ToDoListChanged(list) if list.len() == 1));
        assert_eq!(
            events[1],
            CoreEvent::SelectionChanged(vec!["f1".parse().unwrap()])
        );
    }

    #[test]
    fn failure_emits_nothing() {
        let (mut logic, rx) = logic();
        let err = logic
            .execute(Command::Delete(DeleteCommand::new(vec![])))
            .unwrap_err();
        assert_eq!(err, CommandError::NoTaskSelected);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn undo_emits_restored_state() {
        let (mut logic, rx) = logic();
        logic.execute(add("a")).unwrap();
        let _ = rx.drain();
        logic.execute(Command::Undo(UndoCommand)).unwrap();
        assert_eq!(
            rx.try_iter().collect::<Vec<_>>(),
            vec![CoreEvent::ToDoListChanged(ToDoList::new())]
        );
    }

    #[test]
    fn read_only_commands_do_not_touch_state() {
        let (mut logic, rx) = logic();
        logic.execute(Command::List(ListCommand::all())).unwrap();
        assert!(rx.try_recv().is_err());
        logic.execute(Command::Help(HelpCommand)).unwrap();
        assert_eq!(rx.try_recv().unwrap(), CoreEvent::ShowHelp);
    }

    #[test]
    fn dropped_receiver_is_not_an_error() {
        let (mut logic, rx) = logic();
        drop(rx);
        assert!(logic.execute(add("a")).is_ok());
        assert_eq!(logic.history().len(), 1);
    }
}
