use anyhow::Result;
use owo_colors::OwoColorize;
use scheduler_core::recurrence::RepeatRule;

use crate::cli::CheckCommand;
use crate::util::require_repeat;

pub fn check_rule(command: CheckCommand) -> Result<()> {
    let rule = RepeatRule::parse(require_repeat(&command.repeat)?)?;
    println!("{} {}", "✓".green().bold(), rule.to_string().cyan());
    println!("  Repeats {}", rule.describe());

    let unreachable = rule.unreachable_days();
    if !unreachable.is_empty() {
        let days: Vec<String> = unreachable.iter().map(i32::to_string).collect();
        println!(
            "  {} day {} never matches when months are listed",
            "Warning:".yellow().bold(),
            days.join(",")
        );
    }
    Ok(())
}
