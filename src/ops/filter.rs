use chrono::{Days, NaiveDate, NaiveDateTime};
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

use crate::model::task::{Task, ValidationError};
use crate::model::task_index::TaskCategory;

/// Days covered by a window that only has a start day
pub const OPEN_WINDOW_DAYS: u64 = 7;

/// A predicate narrowing the four category views
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskFilter {
    Window(TimeWindow),
    Keywords(KeywordMatcher),
}

impl TaskFilter {
    pub fn matches(&self, task: &Task) -> bool {
        match self {
            TaskFilter::Window(window) => window.matches(task),
            TaskFilter::Keywords(matcher) => matcher.matches(task),
        }
    }
}

// ---------------------------------------------------------------------------
// Time window
// ---------------------------------------------------------------------------

/// Day-granular time window.
///
/// - `from` only: `[from, from + 7 days)`
/// - `to` only: anything ending on or before `to`
/// - both: events must start on/after `from` and end on/before `to`;
///   deadlines must fall between the two days
///
/// Events are placed by their start day when only `from` is given; deadlines
/// always by their end day. Floating tasks never match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
}

impl TimeWindow {
    /// `None` when neither bound is given
    pub fn new(
        from: Option<NaiveDateTime>,
        to: Option<NaiveDateTime>,
    ) -> Result<Option<TimeWindow>, ValidationError> {
        let from = from.map(|t| t.date());
        let to = to.map(|t| t.date());
        match (from, to) {
            (None, None) => Ok(None),
            (Some(f), Some(t)) if f > t => Err(ValidationError::InvalidDuration),
            _ => Ok(Some(TimeWindow { from, to })),
        }
    }

    pub fn from(&self) -> Option<NaiveDate> {
        self.from
    }

    pub fn to(&self) -> Option<NaiveDate> {
        self.to
    }

    pub fn matches(&self, task: &Task) -> bool {
        let start = task.start_time().map(|t| t.date());
        let Some(end) = task.end_time().map(|t| t.date()) else {
            return false;
        };
        match task.category() {
            TaskCategory::Event => {
                let Some(start) = start else { return false };
                match (self.from, self.to) {
                    (Some(f), None) => in_open_window(start, f),
                    (None, Some(t)) => end <= t,
                    (Some(f), Some(t)) => start >= f && end <= t,
                    (None, None) => true,
                }
            }
            TaskCategory::Deadline => match (self.from, self.to) {
                (Some(f), None) => in_open_window(end, f),
                (None, Some(t)) => end <= t,
                (Some(f), Some(t)) => end >= f && end <= t,
                (None, None) => true,
            },
            TaskCategory::Float | TaskCategory::Completed => false,
        }
    }
}

fn in_open_window(day: NaiveDate, from: NaiveDate) -> bool {
    let until = from
        .checked_add_days(Days::new(OPEN_WINDOW_DAYS))
        .unwrap_or(NaiveDate::MAX);
    day >= from && day < until
}

// ---------------------------------------------------------------------------
// Keywords
// ---------------------------------------------------------------------------

/// Case-insensitive substring match of any keyword against a task's title
/// or description
#[derive(Debug, Clone)]
pub struct KeywordMatcher {
    keywords: Vec<String>,
    re: Regex,
}

impl KeywordMatcher {
    pub fn new<S: AsRef<str>>(keywords: &[S]) -> Result<Self, ValidationError> {
        let keywords: Vec<String> = keywords
            .iter()
            .map(|k| k.as_ref().trim().to_string())
            .filter(|k| !k.is_empty())
            .collect();
        if keywords.is_empty() {
            return Err(ValidationError::NoKeywords);
        }
        let pattern = keywords
            .iter()
            .map(|k| regex::escape(k))
            .collect::<Vec<_>>()
            .join("|");
        let re = RegexBuilder::new(&pattern)
            .case_insensitive(true)
            .build()
            .map_err(|e| ValidationError::InvalidKeywords(e.to_string()))?;
        Ok(KeywordMatcher { keywords, re })
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn matches(&self, task: &Task) -> bool {
        self.re.is_match(task.title().as_str())
            || task
                .description()
                .is_some_and(|d| self.re.is_match(d.as_str()))
    }
}

// Persisted as the keyword list; the regex is rebuilt on load.
impl Serialize for KeywordMatcher {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.keywords.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for KeywordMatcher {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let keywords = Vec::<String>::deserialize(deserializer)?;
        KeywordMatcher::new(&keywords).map_err(serde::de::Error::custom)
    }
}
