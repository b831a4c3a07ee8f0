use anyhow::{Context, Result};
use scheduler_core::models::Task;
use scheduler_core::schedule::prepare_task;
use tracing::info;

use crate::cli::AddCommand;
use crate::util::resolve_now;

pub fn add_task(command: AddCommand) -> Result<()> {
    let today = resolve_now(command.now.as_deref())?;
    let task = Task {
        id: String::new(),
        date: command.date.unwrap_or_default(),
        title: command.title,
        comment: command.comment.unwrap_or_default(),
        repeat: command.repeat.map(|r| r.trim().to_string()).unwrap_or_default(),
    };

    let task = prepare_task(today, task)?;
    info!(title = %task.title, date = %task.date, "task prepared");

    let json = serde_json::to_string_pretty(&task).context("Failed to encode task")?;
    println!("{}", json);
    Ok(())
}
