use clap::{Parser, Subcommand};

/// Plan repeating tasks: compute next dates for compact repeat rules
#[derive(Parser, Debug)]
#[command(name = "scheduler", author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Print the next date of a repeat rule
    NextDate(NextDateCommand),
    /// Validate a repeat rule and explain it
    Check(CheckCommand),
    /// Show the upcoming dates of a repeat rule
    Preview(PreviewCommand),
    /// Normalize a new task and print it as JSON
    Add(AddCommand),
    /// Show what completing a task does
    Done(DoneCommand),
}

#[derive(Parser, Debug, Clone)]
pub struct NextDateCommand {
    /// Start date of the task (YYYYMMDD)
    #[arg(long)]
    pub date: String,
    /// Repeat rule, e.g. "d 7", "w 1,3", "m 1,-1"
    #[arg(long)]
    pub repeat: String,
    /// Reference date (YYYYMMDD), defaults to today
    #[arg(long)]
    pub now: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct CheckCommand {
    /// Repeat rule to validate
    pub repeat: String,
}

#[derive(Parser, Debug, Clone)]
pub struct PreviewCommand {
    /// Start date of the task (YYYYMMDD)
    #[arg(long)]
    pub date: String,
    /// Repeat rule
    #[arg(long)]
    pub repeat: String,
    /// Reference date (YYYYMMDD), defaults to today
    #[arg(long)]
    pub now: Option<String>,
    /// Number of dates to show, defaults to `preview_count` from the config
    #[arg(short, long)]
    pub count: Option<usize>,
}

#[derive(Parser, Debug, Clone)]
pub struct AddCommand {
    /// The title of the task
    pub title: String,
    /// The date of the task (YYYYMMDD), defaults to today
    #[arg(short, long)]
    pub date: Option<String>,
    /// Repeat rule, empty for a one-off task
    #[arg(short, long)]
    pub repeat: Option<String>,
    /// Free-form comment
    #[arg(short, long)]
    pub comment: Option<String>,
    /// Reference date (YYYYMMDD), defaults to today
    #[arg(long)]
    pub now: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct DoneCommand {
    /// Current date of the task (YYYYMMDD)
    #[arg(long)]
    pub date: String,
    /// Repeat rule, omit for a one-off task
    #[arg(long)]
    pub repeat: Option<String>,
    /// Reference date (YYYYMMDD), defaults to today
    #[arg(long)]
    pub now: Option<String>,
}
