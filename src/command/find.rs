use super::list::visible_count;
use super::{CommandError, CommandResult};
use crate::model::task::ValidationError;
use crate::ops::filter::{KeywordMatcher, TaskFilter};
use crate::ops::model_ops::Model;

pub const COMMAND_WORD: &str = "find";

pub const USAGE: &str = "find <KEYWORD>...\n  \
Shows tasks whose title or description contains any keyword, ignoring case.";

#[derive(Debug, Clone)]
pub struct FindCommand {
    matcher: KeywordMatcher,
}

impl FindCommand {
    pub fn new<S: AsRef<str>>(keywords: &[S]) -> Result<Self, ValidationError> {
        Ok(FindCommand {
            matcher: KeywordMatcher::new(keywords)?,
        })
    }

    pub fn keywords(&self) -> &[String] {
        self.matcher.keywords()
    }

    pub fn execute(self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        model.update_selected_indexes(Vec::new());
        model.update_filtered_list(TaskFilter::Keywords(self.matcher));
        Ok(CommandResult::new(format!(
            "{} tasks listed!",
            visible_count(model)
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::task::{Description, Task, TaskFields, Title};
    use crate::model::task_index::TaskCategory;
    use crate::test_helpers::*;

    #[test]
    fn finds_across_categories_ignoring_case() {
        let mut model = model_with(&[
            float("Buy MILK"),
            deadline("milk the cow", 13),
            float("bread"),
        ]);
        let result = FindCommand::new(&["milk"])
            .unwrap()
            .execute(&mut model)
            .unwrap();
        assert_eq!(result.message, "2 tasks listed!");
        assert_eq!(titles(&model, TaskCategory::Float), vec!["Buy MILK"]);
        assert_eq!(titles(&model, TaskCategory::Deadline), vec!["milk the cow"]);
    }

    #[test]
    fn any_keyword_matches() {
        let mut f = TaskFields::new(Title::new("errand").unwrap());
        f.description = Some(Description::new("post office").unwrap());
        let mut model = model_with(&[Task::new(f).unwrap(), float("bread"), float("jam")]);
        let result = FindCommand::new(&["OFFICE", "bread"])
            .unwrap()
            .execute(&mut model)
            .unwrap();
        assert_eq!(result.message, "2 tasks listed!");
    }

    #[test]
    fn indexes_follow_the_filtered_view() {
        let mut model = model_with(&[float("alpha"), float("beta")]);
        FindCommand::new(&["beta"])
            .unwrap()
            .execute(&mut model)
            .unwrap();
        assert_eq!(model.resolve_index(idx("f1")), Some(&float("beta")));
    }

    #[test]
    fn no_keywords_rejected() {
        let none: [&str; 0] = [];
        assert_eq!(FindCommand::new(&none).unwrap_err(), ValidationError::NoKeywords);
    }
}
