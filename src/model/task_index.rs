use std::fmt;
use std::num::NonZeroUsize;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Which of the four task lists a task lives in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskCategory {
    Event,
    Deadline,
    Float,
    Completed,
}

impl TaskCategory {
    /// All categories, in display order
    pub const ALL: [TaskCategory; 4] = [
        TaskCategory::Event,
        TaskCategory::Deadline,
        TaskCategory::Float,
        TaskCategory::Completed,
    ];

    /// The letter used in task indexes (`e1`, `d2`, ...)
    pub fn as_char(self) -> char {
        match self {
            TaskCategory::Event => 'e',
            TaskCategory::Deadline => 'd',
            TaskCategory::Float => 'f',
            TaskCategory::Completed => 'c',
        }
    }

    /// Parse an index letter (case-insensitive)
    pub fn from_char(c: char) -> Option<TaskCategory> {
        match c.to_ascii_lowercase() {
            'e' => Some(TaskCategory::Event),
            'd' => Some(TaskCategory::Deadline),
            'f' => Some(TaskCategory::Float),
            'c' => Some(TaskCategory::Completed),
            _ => None,
        }
    }

    /// Heading shown above the category's list
    pub fn label(self) -> &'static str {
        match self {
            TaskCategory::Event => "Events",
            TaskCategory::Deadline => "Deadlines",
            TaskCategory::Float => "Floating",
            TaskCategory::Completed => "Completed",
        }
    }
}

impl fmt::Display for TaskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Addresses a task by category letter and 1-based position in that
/// category's currently displayed view. Only valid until the next
/// structural change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TaskIndex {
    category: TaskCategory,
    number: NonZeroUsize,
}

impl TaskIndex {
    /// `number` is 1-based; returns `None` for zero
    pub fn new(category: TaskCategory, number: usize) -> Option<TaskIndex> {
        NonZeroUsize::new(number).map(|number| TaskIndex { category, number })
    }

    /// Build from a 0-based position in a view
    pub fn from_position(category: TaskCategory, position: usize) -> TaskIndex {
        TaskIndex {
            category,
            number: NonZeroUsize::MIN.saturating_add(position),
        }
    }

    pub fn category(self) -> TaskCategory {
        self.category
    }

    /// 1-based number as shown to the user
    pub fn number(self) -> usize {
        self.number.get()
    }

    /// 0-based position into the view
    pub fn position(self) -> usize {
        self.number.get() - 1
    }
}

impl fmt::Display for TaskIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.category.as_char(), self.number)
    }
}

/// Error for malformed index text such as `x1`, `e0` or `e`
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid task index '{0}': expected d, e, f or c followed by a positive number")]
pub struct ParseIndexError(pub String);

impl FromStr for TaskIndex {
    type Err = ParseIndexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let err = || ParseIndexError(s.to_string());
        let mut chars = trimmed.chars();
        let category = chars.next().and_then(TaskCategory::from_char).ok_or_else(err)?;
        let number: usize = chars.as_str().parse().map_err(|_| err())?;
        TaskIndex::new(category, number).ok_or_else(err)
    }
}

impl TryFrom<String> for TaskIndex {
    type Error = ParseIndexError;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TaskIndex> for String {
    fn from(index: TaskIndex) -> String {
        index.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_display() {
        let idx: TaskIndex = "d12".parse().unwrap();
        assert_eq!(idx.category(), TaskCategory::Deadline);
        assert_eq!(idx.number(), 12);
        assert_eq!(idx.position(), 11);
        assert_eq!(idx.to_string(), "d12");
    }

    #[test]
    fn parse_accepts_uppercase_letter() {
        let idx: TaskIndex = "E3".parse().unwrap();
        assert_eq!(idx, TaskIndex::new(TaskCategory::Event, 3).unwrap());
    }

    #[test]
    fn parse_rejects_bad_input() {
        for bad in ["", "e", "e0", "x1", "1", "e-1", "ee1"] {
            assert!(bad.parse::<TaskIndex>().is_err(), "accepted {:?}", bad);
        }
    }

    #[test]
    fn from_position_is_one_based() {
        let idx = TaskIndex::from_position(TaskCategory::Completed, 0);
        assert_eq!(idx.to_string(), "c1");
    }

    #[test]
    fn category_char_round_trip() {
        for cat in TaskCategory::ALL {
            assert_eq!(TaskCategory::from_char(cat.as_char()), Some(cat));
        }
    }

    #[test]
    fn serializes_as_display_string() {
        let idx = TaskIndex::new(TaskCategory::Float, 2).unwrap();
        assert_eq!(serde_json::to_string(&idx).unwrap(), "\"f2\"");
        let back: TaskIndex = serde_json::from_str("\"f2\"").unwrap();
        assert_eq!(back, idx);
    }
}
