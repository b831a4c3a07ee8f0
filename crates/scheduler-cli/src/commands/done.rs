use anyhow::Result;
use owo_colors::OwoColorize;
use scheduler_core::models::{CompletionResult, Task};
use scheduler_core::schedule::complete_task;

use crate::cli::DoneCommand;
use crate::util::resolve_now;

pub fn done_task(command: DoneCommand) -> Result<()> {
    let today = resolve_now(command.now.as_deref())?;
    let task = Task {
        date: command.date,
        repeat: command.repeat.unwrap_or_default(),
        ..Default::default()
    };

    match complete_task(today, &task)? {
        CompletionResult::Remove => {
            println!("{} One-off task finished, remove it.", "✓".green().bold());
        }
        CompletionResult::Reschedule { date } => {
            println!("{} Rescheduled to {}", "↻".green().bold(), date.yellow());
        }
    }
    Ok(())
}
