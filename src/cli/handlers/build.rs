use chrono::NaiveDateTime;

use crate::cli::commands::*;
use crate::command::{
    AddCommand, AddParams, Command, CompleteCommand, DeleteCommand, EditCommand,
    EditTaskDescriptor, FindCommand, HelpCommand, IncorrectCommand, ListCommand, SelectCommand,
    UndoCommand, add, complete, delete, edit, find, list, select,
};
use crate::model::task::{Description, Title, UrgencyLevel, ValidationError, Venue, tag_set};
use crate::model::task_index::TaskIndex;
use crate::parse::{parse_time, parse_title_and_tags};

/// Turn parsed arguments into a command. Input that does not make a valid
/// command becomes [`Command::Incorrect`] carrying the problem and the usage.
pub fn build_command(cmd: Commands) -> Command {
    let (usage, built) = match cmd {
        Commands::Add(args) => (add::USAGE, build_add(args)),
        Commands::Edit(args) => (edit::USAGE, build_edit(args)),
        Commands::Done(args) => (
            complete::USAGE,
            indexes(&args.indexes).map(|i| Command::Complete(CompleteCommand::new(i))),
        ),
        Commands::Delete(args) => (
            delete::USAGE,
            indexes(&args.indexes).map(|i| Command::Delete(DeleteCommand::new(i))),
        ),
        Commands::List(args) => (list::USAGE, build_list(args)),
        Commands::Find(args) => (
            find::USAGE,
            FindCommand::new(args.keywords.as_slice())
                .map(Command::Find)
                .map_err(|e| e.to_string()),
        ),
        Commands::Select(args) => (
            select::USAGE,
            args.index
                .parse::<TaskIndex>()
                .map(|i| Command::Select(SelectCommand::new(i)))
                .map_err(|e| e.to_string()),
        ),
        Commands::Undo => return Command::Undo(UndoCommand),
        Commands::Help => return Command::Help(HelpCommand),
    };
    built.unwrap_or_else(|problem| {
        Command::Incorrect(IncorrectCommand::new(format!(
            "{}\nUsage: {}",
            problem, usage
        )))
    })
}

fn build_add(args: AddArgs) -> Result<Command, String> {
    let (title, mut tags) = parse_title_and_tags(&args.title);
    tags.extend(args.tag);
    let params = AddParams {
        title,
        venue: args.venue,
        start_time: time(args.from.as_deref())?,
        end_time: time(args.to.as_deref())?,
        deadline: time(args.by.as_deref())?,
        urgency: args.level,
        description: args.description,
        tags,
    };
    AddCommand::new(params)
        .map(Command::Add)
        .map_err(|e| e.to_string())
}

fn build_edit(args: EditArgs) -> Result<Command, String> {
    let targets = indexes(&args.indexes)?;
    let start_time = time(args.from.as_deref())?;
    let end_time = match (time(args.to.as_deref())?, time(args.by.as_deref())?) {
        (Some(_), Some(_)) => return Err(ValidationError::EndAndDeadline.to_string()),
        (to, by) => to.or(by),
    };
    edit_descriptor(&args, start_time, end_time)
        .and_then(|descriptor| EditCommand::new(targets, descriptor))
        .map(Command::Edit)
        .map_err(|e| e.to_string())
}

fn edit_descriptor(
    args: &EditArgs,
    start_time: Option<NaiveDateTime>,
    end_time: Option<NaiveDateTime>,
) -> Result<EditTaskDescriptor, ValidationError> {
    Ok(EditTaskDescriptor {
        title: args.title.as_deref().map(Title::new).transpose()?,
        venue: args.venue.as_deref().map(Venue::new).transpose()?,
        start_time,
        end_time,
        urgency: args.level.map(UrgencyLevel::new).transpose()?,
        description: args.description.as_deref().map(Description::new).transpose()?,
        tags: if args.tag.is_empty() {
            None
        } else {
            Some(tag_set(args.tag.as_slice())?)
        },
    })
}

fn build_list(args: ListArgs) -> Result<Command, String> {
    let from = time(args.from.as_deref())?;
    let to = time(args.to.as_deref())?;
    let by = time(args.by.as_deref())?;
    ListCommand::new(from, to, by)
        .map(Command::List)
        .map_err(|e| e.to_string())
}

fn time(raw: Option<&str>) -> Result<Option<NaiveDateTime>, String> {
    raw.map(parse_time).transpose().map_err(|e| e.to_string())
}

fn indexes(raw: &[String]) -> Result<Vec<TaskIndex>, String> {
    raw.iter()
        .map(|s| s.parse::<TaskIndex>().map_err(|e| e.to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn build(args: &[&str]) -> Command {
        let mut argv = vec!["td"];
        argv.extend_from_slice(args);
        let cli = Cli::try_parse_from(argv).unwrap();
        build_command(cli.command.unwrap())
    }

    fn incorrect_message(cmd: Command) -> String {
        match cmd {
            Command::Incorrect(c) => c.message,
            other => panic!("expected incorrect command, got {:?}", other),
        }
    }

    #[test]
    fn add_collects_inline_and_flag_tags() {
        match build(&["add", "Exam #school", "--tag", "urgent", "--by", "2017-04-13 09:00"]) {
            Command::Add(cmd) => {
                let tags: Vec<_> = cmd.task().tags().iter().map(|t| t.as_str()).collect();
                assert_eq!(cmd.task().title().as_str(), "Exam");
                assert_eq!(tags, vec!["school", "urgent"]);
            }
            other => panic!("expected add, got {:?}", other),
        }
    }

    #[test]
    fn bad_time_is_incorrect_with_usage() {
        let msg = incorrect_message(build(&["add", "x", "--by", "tomorrow"]));
        assert!(msg.contains("invalid time 'tomorrow'"));
        assert!(msg.contains("Usage: add"));
    }

    #[test]
    fn bad_index_is_incorrect() {
        let msg = incorrect_message(build(&["done", "x9"]));
        assert!(msg.starts_with("invalid task index 'x9'"));
    }

    #[test]
    fn empty_edit_is_incorrect() {
        let msg = incorrect_message(build(&["edit", "f1"]));
        assert!(msg.starts_with("At least one field to edit must be provided."));
    }

    #[test]
    fn edit_start_only_is_accepted() {
        assert!(matches!(
            build(&["edit", "d1", "--from", "2017-04-13 09:00"]),
            Command::Edit(_)
        ));
    }

    #[test]
    fn list_with_to_and_by_is_incorrect() {
        let msg = incorrect_message(build(&["list", "--to", "2017-04-13", "--by", "2017-04-14"]));
        assert!(msg.starts_with("Specify either an end time or a deadline"));
    }

    #[test]
    fn find_without_keywords_is_incorrect() {
        let msg = incorrect_message(build(&["find"]));
        assert!(msg.starts_with("At least one keyword"));
    }

    #[test]
    fn select_and_undo() {
        assert!(matches!(build(&["select", "e1"]), Command::Select(_)));
        assert!(matches!(build(&["undo"]), Command::Undo(_)));
    }
}
