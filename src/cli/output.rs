use serde::Serialize;

use crate::model::task::Task;
use crate::model::task_index::{TaskCategory, TaskIndex};
use crate::ops::model_ops::Model;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct TaskJson {
    pub index: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub venue: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub selected: bool,
}

#[derive(Serialize)]
pub struct ViewsJson {
    pub events: Vec<TaskJson>,
    pub deadlines: Vec<TaskJson>,
    pub floating: Vec<TaskJson>,
    pub completed: Vec<TaskJson>,
}

#[derive(Serialize)]
pub struct OutcomeJson {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub selection: Vec<String>,
    pub views: ViewsJson,
}

// ---------------------------------------------------------------------------
// Conversion
// ---------------------------------------------------------------------------

pub fn task_to_json(index: TaskIndex, task: &Task, selected: bool) -> TaskJson {
    TaskJson {
        index: index.to_string(),
        title: task.title().to_string(),
        venue: task.venue().map(|v| v.to_string()),
        start: task.start_time().map(|t| t.format("%Y-%m-%dT%H:%M").to_string()),
        end: task.end_time().map(|t| t.format("%Y-%m-%dT%H:%M").to_string()),
        level: task.urgency().map(|u| u.value()),
        description: task.description().map(|d| d.to_string()),
        tags: task.tags().iter().map(|t| t.to_string()).collect(),
        selected,
    }
}

fn view_json(model: &dyn Model, category: TaskCategory) -> Vec<TaskJson> {
    model
        .list_from_category(category)
        .into_iter()
        .enumerate()
        .map(|(pos, task)| {
            let index = TaskIndex::from_position(category, pos);
            task_to_json(index, task, model.selected_indexes().contains(&index))
        })
        .collect()
}

pub fn outcome_json(model: &dyn Model, message: Option<&str>) -> OutcomeJson {
    OutcomeJson {
        message: message.map(str::to_string),
        selection: model
            .selected_indexes()
            .iter()
            .map(|i| i.to_string())
            .collect(),
        views: ViewsJson {
            events: view_json(model, TaskCategory::Event),
            deadlines: view_json(model, TaskCategory::Deadline),
            floating: view_json(model, TaskCategory::Float),
            completed: view_json(model, TaskCategory::Completed),
        },
    }
}

// ---------------------------------------------------------------------------
// Text formatting
// ---------------------------------------------------------------------------

/// One row: selection marker, index, then the task line
pub fn format_task_line(index: TaskIndex, task: &Task, selected: bool) -> String {
    let marker = if selected { '*' } else { ' ' };
    format!("{} {}. {}", marker, index, task)
}

/// The four views, skipping empty ones. Returns an empty string when
/// nothing is visible.
pub fn format_views(model: &dyn Model) -> String {
    let mut out = String::new();
    for category in TaskCategory::ALL {
        let tasks = model.list_from_category(category);
        if tasks.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str(category.label());
        out.push('\n');
        for (pos, task) in tasks.into_iter().enumerate() {
            let index = TaskIndex::from_position(category, pos);
            let selected = model.selected_indexes().contains(&index);
            out.push_str(&format_task_line(index, task, selected));
            out.push('\n');
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::model_ops::ModelManager;
    use pretty_assertions::assert_eq;

    fn model() -> ModelManager {
        let mut model = ModelManager::default();
        model.add_task(Task::floating("Buy milk").unwrap()).unwrap();
        model.add_task(Task::floating("Call mom").unwrap()).unwrap();
        model.update_selected_indexes(vec!["f2".parse().unwrap()]);
        model
    }

    #[test]
    fn views_mark_selected_rows() {
        assert_eq!(
            format_views(&model()),
            "Floating\n  f1. Buy milk\n* f2. Call mom\n"
        );
    }

    #[test]
    fn empty_model_prints_nothing() {
        assert_eq!(format_views(&ModelManager::default()), "");
    }

    #[test]
    fn json_outcome_lists_views() {
        let json = serde_json::to_value(outcome_json(&model(), Some("ok"))).unwrap();
        assert_eq!(json["message"], "ok");
        assert_eq!(json["selection"][0], "f2");
        assert_eq!(json["views"]["floating"][1]["title"], "Call mom");
        assert_eq!(json["views"]["floating"][1]["selected"], true);
        assert!(json["views"]["floating"][0].get("selected").is_none());
        assert_eq!(json["views"]["events"].as_array().unwrap().len(), 0);
    }
}
