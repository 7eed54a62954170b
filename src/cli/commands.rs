use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "td",
    about = concat!("td v", env!("CARGO_PKG_VERSION"), " - events, deadlines and floating tasks"),
    version,
    disable_help_subcommand = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Keep the to-do list under DIR/.todo instead of ./.todo
    #[arg(short = 'C', long = "dir", global = true)]
    pub project_dir: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a task (event, deadline or floating)
    Add(AddArgs),
    /// Edit tasks by index, or the selected tasks
    Edit(EditArgs),
    /// Mark tasks completed
    Done(IndexArgs),
    /// Permanently delete tasks
    Delete(IndexArgs),
    /// Show all tasks, or those inside a time window
    List(ListArgs),
    /// Show tasks matching any keyword
    Find(FindArgs),
    /// Select one task for later commands
    Select(SelectArgs),
    /// Revert the most recent change
    Undo,
    /// Show the command summary
    Help,
}

// Times and indexes stay as text here; turning them into a command is where
// bad input gets reported.

#[derive(Args)]
pub struct AddArgs {
    /// Task title; trailing #words become tags
    pub title: String,
    /// Where it happens
    #[arg(long)]
    pub venue: Option<String>,
    /// Start time (makes an event together with --to)
    #[arg(long)]
    pub from: Option<String>,
    /// End time
    #[arg(long)]
    pub to: Option<String>,
    /// Deadline (same as --to)
    #[arg(long)]
    pub by: Option<String>,
    /// Urgency from 1 to 5
    #[arg(long)]
    pub level: Option<i64>,
    /// Free-text description
    #[arg(long)]
    pub description: Option<String>,
    /// Tag to attach (repeatable)
    #[arg(long)]
    pub tag: Vec<String>,
}

#[derive(Args)]
pub struct EditArgs {
    /// Task indexes such as e1 d2 (default: the selection)
    pub indexes: Vec<String>,
    /// New title
    #[arg(long)]
    pub title: Option<String>,
    /// New venue
    #[arg(long)]
    pub venue: Option<String>,
    /// New start time
    #[arg(long)]
    pub from: Option<String>,
    /// New end time
    #[arg(long)]
    pub to: Option<String>,
    /// New deadline (same as --to)
    #[arg(long)]
    pub by: Option<String>,
    /// New urgency from 1 to 5
    #[arg(long)]
    pub level: Option<i64>,
    /// New description
    #[arg(long)]
    pub description: Option<String>,
    /// Replace all tags (repeatable)
    #[arg(long)]
    pub tag: Vec<String>,
}

#[derive(Args)]
pub struct IndexArgs {
    /// Task indexes such as e1 d2 (default: the selection)
    pub indexes: Vec<String>,
}

#[derive(Args)]
pub struct ListArgs {
    /// Window start; alone it covers one week
    #[arg(long)]
    pub from: Option<String>,
    /// Window end (inclusive day)
    #[arg(long)]
    pub to: Option<String>,
    /// Same as --to
    #[arg(long)]
    pub by: Option<String>,
}

#[derive(Args)]
pub struct FindArgs {
    /// Keywords, matched case-insensitively
    pub keywords: Vec<String>,
}

#[derive(Args)]
pub struct SelectArgs {
    /// Task index such as e1
    pub index: String,
}
