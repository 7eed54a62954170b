use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::model::config::DEFAULT_HISTORY_SIZE;
use crate::model::todo_list::ToDoList;

/// One undo checkpoint: the state before a command ran, and the message that
/// command reported
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub snapshot: ToDoList,
    pub message: String,
}

/// Bounded undo history. The oldest entry is dropped once `capacity` is
/// exceeded. There is no redo side: popping an entry discards it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryStore {
    capacity: usize,
    entries: VecDeque<HistoryEntry>,
}

impl Default for HistoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryStore {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_SIZE)
    }

    /// A capacity of zero is raised to one
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        HistoryStore {
            capacity,
            entries: VecDeque::with_capacity(capacity),
        }
    }

    /// Change the capacity, evicting the oldest entries if it shrank
    pub fn set_capacity(&mut self, capacity: usize) {
        self.capacity = capacity.max(1);
        self.evict();
    }

    /// Record the state from before a successful undoable command
    pub fn push(&mut self, snapshot: ToDoList, message: impl Into<String>) {
        self.entries.push_back(HistoryEntry {
            snapshot,
            message: message.into(),
        });
        self.evict();
    }

    /// Take the most recent entry
    pub fn pop(&mut self) -> Option<HistoryEntry> {
        self.entries.pop_back()
    }

    pub fn peek(&self) -> Option<&HistoryEntry> {
        self.entries.back()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    fn evict(&mut self) {
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
    }
}
