use anyhow::Result;
use scheduler_core::recurrence::next_date_with;
use tracing::debug;

use crate::cli::NextDateCommand;
use crate::config::Config;
use crate::util::{require_repeat, resolve_now};

pub fn next_date(command: NextDateCommand, config: &Config) -> Result<()> {
    let repeat = require_repeat(&command.repeat)?;
    let now = resolve_now(command.now.as_deref())?;
    debug!(%now, date = %command.date, repeat, "next-date");

    let next = next_date_with(now, &command.date, repeat, &config.search_limits())?;
    println!("{}", next);
    Ok(())
}
