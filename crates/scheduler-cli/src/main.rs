use clap::Parser;
use owo_colors::{OwoColorize, Style};
use scheduler_core::error::{CoreError, NextDateError, RuleError, ValidationError};
use tracing::warn;

mod cli;
mod commands;
mod config;
mod util;
mod views;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = cli::Cli::parse();

    let config = config::Config::new().unwrap_or_else(|e| {
        warn!(error = %e, "ignoring unreadable configuration, using defaults");
        config::Config::default()
    });

    let result = match cli.command {
        cli::Commands::NextDate(command) => commands::next_date::next_date(command, &config),
        cli::Commands::Check(command) => commands::check::check_rule(command),
        cli::Commands::Preview(command) => commands::preview::preview(command, &config),
        cli::Commands::Add(command) => commands::add::add_task(command),
        cli::Commands::Done(command) => commands::done::done_task(command),
    };

    if let Err(e) = result {
        handle_error(e);
        std::process::exit(1);
    }
}

fn handle_error(err: anyhow::Error) {
    let error_style = Style::new().red().bold();

    let next_date_error = err.downcast_ref::<NextDateError>().or_else(|| {
        match err.downcast_ref::<CoreError>() {
            Some(CoreError::NextDate(inner)) => Some(inner),
            _ => None,
        }
    });
    let rule_error = err
        .downcast_ref::<RuleError>()
        .or_else(|| match next_date_error {
            Some(NextDateError::Rule(inner)) => Some(inner),
            _ => None,
        });

    eprintln!("{} {}", "Error:".style(error_style), err);

    match rule_error {
        Some(RuleError::Invalid(ValidationError::InvalidKind(_))) => {
            eprintln!(
                "The rule must start with {}, {}, {} or {}.",
                "y".yellow(),
                "d".yellow(),
                "w".yellow(),
                "m".yellow()
            );
        }
        Some(RuleError::Invalid(ValidationError::MissingDays)) => {
            eprintln!(
                "Only {} works without a day list, e.g. {} or {}.",
                "y".yellow(),
                "d 7".yellow(),
                "w 1,5".yellow()
            );
        }
        Some(RuleError::Invalid(ValidationError::InvalidDayOfWeek(_))) => {
            eprintln!(
                "Weekdays run from {} (Monday) to {} (Sunday).",
                "1".yellow(),
                "7".yellow()
            );
        }
        Some(RuleError::Invalid(ValidationError::InvalidDayOfMonth(_))) => {
            eprintln!(
                "Days of the month run from {} to {}; {} and {} count back from the month end.",
                "1".yellow(),
                "31".yellow(),
                "-1".yellow(),
                "-2".yellow()
            );
        }
        Some(RuleError::Parse(_)) => {
            eprintln!(
                "Expected {}, e.g. {}.",
                "<kind> [days] [months]".yellow(),
                "m 1,15 3,9".yellow()
            );
        }
        _ => {}
    }

    if let Some(NextDateError::NoOccurrence { .. }) = next_date_error {
        eprintln!("The rule never matches; check that the listed days exist in the listed months.");
    }
}
