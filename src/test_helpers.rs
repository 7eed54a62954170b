//! Task and model fixtures shared by the unit tests. All dates fall in
//! April 2017.

use chrono::{NaiveDate, NaiveDateTime};

use crate::model::task::{Task, TaskFields, Title};
use crate::model::task_index::{TaskCategory, TaskIndex};
use crate::ops::model_ops::{Model, ModelManager};

pub fn at(day: u32, hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2017, 4, day)
        .unwrap()
        .and_hms_opt(hour, 0, 0)
        .unwrap()
}

pub fn float(title: &str) -> Task {
    Task::floating(title).unwrap()
}

/// Deadline at noon on `day`
pub fn deadline(title: &str, day: u32) -> Task {
    deadline_at(title, at(day, 12))
}

pub fn deadline_at(title: &str, end: NaiveDateTime) -> Task {
    let mut f = TaskFields::new(Title::new(title).unwrap());
    f.end_time = Some(end);
    Task::new(f).unwrap()
}

/// Event from 10:00 to 12:00 on `day`
pub fn event(title: &str, day: u32) -> Task {
    event_between(title, at(day, 10), at(day, 12))
}

pub fn event_between(title: &str, start: NaiveDateTime, end: NaiveDateTime) -> Task {
    let mut f = TaskFields::new(Title::new(title).unwrap());
    f.start_time = Some(start);
    f.end_time = Some(end);
    Task::new(f).unwrap()
}

pub fn idx(s: &str) -> TaskIndex {
    s.parse().unwrap()
}

pub fn model_with(tasks: &[Task]) -> ModelManager {
    let mut model = ModelManager::default();
    for t in tasks {
        model.add_task(t.clone()).unwrap();
    }
    model
}

pub fn titles(model: &ModelManager, category: TaskCategory) -> Vec<String> {
    model
        .list_from_category(category)
        .iter()
        .map(|t| t.title().to_string())
        .collect()
}
