use std::fmt;

use chrono::NaiveDateTime;
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use super::task_index::TaskCategory;

/// Display format for start/end times
pub const TIME_DISPLAY_FORMAT: &str = "%d %b %Y %H:%M";

pub const MIN_URGENCY: u8 = 1;
pub const MAX_URGENCY: u8 = 5;

/// Error raised when a task field or a command parameter fails validation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Task title should not be blank")]
    EmptyTitle,
    #[error("Venue should not be blank")]
    EmptyVenue,
    #[error("Description should start with a letter or a digit")]
    InvalidDescription,
    #[error("Urgency level should be between 1 and 5, got {0}")]
    InvalidUrgency(i64),
    #[error("Tag names should be alphanumeric: {0}")]
    InvalidTag(String),
    #[error("Starting time must be before ending time!")]
    InvalidDuration,
    #[error("A start time needs an end time")]
    StartWithoutEnd,
    #[error("Specify either an end time or a deadline, not both")]
    EndAndDeadline,
    #[error("At least one field to edit must be provided.")]
    NothingToEdit,
    #[error("At least one keyword must be provided.")]
    NoKeywords,
    #[error("invalid keywords: {0}")]
    InvalidKeywords(String),
}

// ---------------------------------------------------------------------------
// Field value objects
// ---------------------------------------------------------------------------

/// Task title, never blank
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Title(String);

impl Title {
    pub fn new(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        Ok(Title(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Where a task takes place
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Venue(String);

impl Venue {
    pub fn new(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyVenue);
        }
        Ok(Venue(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Free-form notes. Must open with a letter or digit.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Description(String);

impl Description {
    pub fn new(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        match trimmed.chars().next() {
            Some(c) if c.is_alphanumeric() => Ok(Description(trimmed.to_string())),
            _ => Err(ValidationError::InvalidDescription),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Importance on a 1 (low) to 5 (high) scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct UrgencyLevel(u8);

impl UrgencyLevel {
    pub fn new(level: i64) -> Result<Self, ValidationError> {
        if (i64::from(MIN_URGENCY)..=i64::from(MAX_URGENCY)).contains(&level) {
            Ok(UrgencyLevel(level as u8))
        } else {
            Err(ValidationError::InvalidUrgency(level))
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

/// A tag name, stored without the leading `#`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Tag(String);

impl Tag {
    pub fn new(raw: &str) -> Result<Self, ValidationError> {
        let name = raw.trim().trim_start_matches('#');
        let valid = !name.is_empty()
            && name
                .chars()
                .all(|c| c.is_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(ValidationError::InvalidTag(raw.to_string()));
        }
        Ok(Tag(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Build a tag set from raw names, dropping repeats but keeping first-seen order
pub fn tag_set<S: AsRef<str>>(raw: &[S]) -> Result<IndexSet<Tag>, ValidationError> {
    raw.iter().map(|t| Tag::new(t.as_ref())).collect()
}

macro_rules! string_value_conversions {
    ($($ty:ident),*) => {
        $(
            impl TryFrom<String> for $ty {
                type Error = ValidationError;
                fn try_from(value: String) -> Result<Self, Self::Error> {
                    $ty::new(&value)
                }
            }

            impl From<$ty> for String {
                fn from(value: $ty) -> String {
                    value.0
                }
            }

            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(&self.0)
                }
            }
        )*
    };
}

string_value_conversions!(Title, Venue, Description, Tag);

impl TryFrom<i64> for UrgencyLevel {
    type Error = ValidationError;
    fn try_from(value: i64) -> Result<Self, Self::Error> {
        UrgencyLevel::new(value)
    }
}

impl From<UrgencyLevel> for i64 {
    fn from(value: UrgencyLevel) -> i64 {
        i64::from(value.0)
    }
}

impl fmt::Display for UrgencyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Task
// ---------------------------------------------------------------------------

/// The raw field set of a task, before the cross-field checks in [`Task::new`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskFields {
    pub title: Title,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub venue: Option<Venue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<NaiveDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<NaiveDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub urgency: Option<UrgencyLevel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<Description>,
    #[serde(default, skip_serializing_if = "IndexSet::is_empty")]
    pub tags: IndexSet<Tag>,
}

impl TaskFields {
    /// A floating task with only a title
    pub fn new(title: Title) -> Self {
        TaskFields {
            title,
            venue: None,
            start_time: None,
            end_time: None,
            urgency: None,
            description: None,
            tags: IndexSet::new(),
        }
    }
}

/// A validated task. Equality compares every field; tag order is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TaskFields", into = "TaskFields")]
pub struct Task {
    fields: TaskFields,
}

impl Task {
    /// Validate the time fields together and build the task.
    pub fn new(fields: TaskFields) -> Result<Self, ValidationError> {
        match (fields.start_time, fields.end_time) {
            (Some(start), Some(end)) if start >= end => return Err(ValidationError::InvalidDuration),
            (Some(_), None) => return Err(ValidationError::StartWithoutEnd),
            _ => {}
        }
        Ok(Task { fields })
    }

    /// Shortcut for a floating task with only a title
    pub fn floating(title: &str) -> Result<Self, ValidationError> {
        Task::new(TaskFields::new(Title::new(title)?))
    }

    pub fn fields(&self) -> &TaskFields {
        &self.fields
    }

    pub fn title(&self) -> &Title {
        &self.fields.title
    }

    pub fn venue(&self) -> Option<&Venue> {
        self.fields.venue.as_ref()
    }

    pub fn start_time(&self) -> Option<NaiveDateTime> {
        self.fields.start_time
    }

    pub fn end_time(&self) -> Option<NaiveDateTime> {
        self.fields.end_time
    }

    pub fn urgency(&self) -> Option<UrgencyLevel> {
        self.fields.urgency
    }

    pub fn description(&self) -> Option<&Description> {
        self.fields.description.as_ref()
    }

    pub fn tags(&self) -> &IndexSet<Tag> {
        &self.fields.tags
    }

    /// The pending category implied by which time fields are set.
    /// Never returns `Completed`; completion is list membership, not a field.
    pub fn category(&self) -> TaskCategory {
        category_of(self.fields.start_time, self.fields.end_time)
    }
}

/// Start and end → event, end only → deadline, otherwise floating
pub fn category_of(start: Option<NaiveDateTime>, end: Option<NaiveDateTime>) -> TaskCategory {
    match (start, end) {
        (Some(_), Some(_)) => TaskCategory::Event,
        (_, Some(_)) => TaskCategory::Deadline,
        _ => TaskCategory::Float,
    }
}

impl TryFrom<TaskFields> for Task {
    type Error = ValidationError;
    fn try_from(fields: TaskFields) -> Result<Self, Self::Error> {
        Task::new(fields)
    }
}

impl From<Task> for TaskFields {
    fn from(task: Task) -> TaskFields {
        task.fields
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.fields.title)?;
        if let Some(venue) = &self.fields.venue {
            write!(f, " | Venue: {}", venue)?;
        }
        if let Some(start) = self.fields.start_time {
            write!(f, " | From: {}", start.format(TIME_DISPLAY_FORMAT))?;
        }
        if let Some(end) = self.fields.end_time {
            let label = if self.fields.start_time.is_some() { "To" } else { "By" };
            write!(f, " | {}: {}", label, end.format(TIME_DISPLAY_FORMAT))?;
        }
        if let Some(level) = self.fields.urgency {
            write!(f, " | Level: {}", level)?;
        }
        if let Some(desc) = &self.fields.description {
            write!(f, " | Description: {}", desc)?;
        }
        if !self.fields.tags.is_empty() {
            f.write_str(" | Tags:")?;
            for tag in &self.fields.tags {
                write!(f, " #{}", tag)?;
            }
        }
        Ok(())
    }
}
