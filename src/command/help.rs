use super::{add, complete, delete, edit, find, list, select, undo};
use super::{CommandError, CommandResult};

pub const COMMAND_WORD: &str = "help";

pub const USAGE: &str = "help\n  Shows this summary.";

/// Every command's usage, in the order they are listed to the user
pub const COMMAND_USAGES: &[&str] = &[
    add::USAGE,
    edit::USAGE,
    complete::USAGE,
    delete::USAGE,
    list::USAGE,
    find::USAGE,
    select::USAGE,
    undo::USAGE,
    USAGE,
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HelpCommand;

impl HelpCommand {
    pub fn summary() -> String {
        let mut out = String::from("Commands:\n");
        for usage in COMMAND_USAGES {
            out.push_str("  ");
            out.push_str(usage);
            out.push('\n');
        }
        out.push_str("\nIndexes are a category letter and a number: e1, d2, f3, c1.");
        out
    }

    pub fn execute(self) -> Result<CommandResult, CommandError> {
        Ok(CommandResult::new(Self::summary()).with_help())
    }
}
