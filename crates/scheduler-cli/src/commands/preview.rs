use anyhow::Result;
use scheduler_core::recurrence::{upcoming, RepeatRule};

use crate::cli::PreviewCommand;
use crate::config::Config;
use crate::util::{require_repeat, resolve_now};
use crate::views::table::{display_occurrences, ViewOccurrence};

pub fn preview(command: PreviewCommand, config: &Config) -> Result<()> {
    let repeat = require_repeat(&command.repeat)?;
    let now = resolve_now(command.now.as_deref())?;
    let count = command.count.unwrap_or(config.preview_count);

    let rule = RepeatRule::parse(repeat)?;
    let dates = upcoming(now, &command.date, repeat, count, &config.search_limits())?;

    println!("{} from {} ({})", rule, command.date, rule.describe());
    let rows: Vec<ViewOccurrence> = dates
        .into_iter()
        .enumerate()
        .map(|(index, date)| ViewOccurrence {
            position: index + 1,
            date,
        })
        .collect();
    display_occurrences(&rows, now);

    Ok(())
}
