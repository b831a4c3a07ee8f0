use assert_cmd::Command;
use std::path::Path;
use tempfile::TempDir;

/// Test harness running the CLI from an isolated working directory
pub struct CliTestHarness {
    temp_dir: TempDir,
}

impl CliTestHarness {
    /// Create a new test harness with an empty working directory
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
        Self { temp_dir }
    }

    /// Create a harness whose working directory holds a `scheduler.toml`
    pub fn with_config(contents: &str) -> Self {
        let harness = Self::new();
        std::fs::write(harness.dir().join("scheduler.toml"), contents)
            .expect("Failed to write config file");
        harness
    }

    pub fn dir(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Get a Command instance configured for testing
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("scheduler").expect("Failed to find scheduler binary");
        cmd.current_dir(self.dir())
            .env_remove("SCHEDULER_PREVIEW_COUNT")
            .env_remove("SCHEDULER_HORIZON_YEARS")
            .env_remove("RUST_LOG");
        cmd
    }

    /// Helper to run a command and assert success
    pub fn run_success(&self, args: &[&str]) -> assert_cmd::assert::Assert {
        self.command().args(args).assert().success()
    }

    /// Helper to run a command and assert failure
    pub fn run_failure(&self, args: &[&str]) -> assert_cmd::assert::Assert {
        self.command().args(args).assert().failure()
    }
}

/// Utility functions for test assertions
pub mod assertions {
    use predicates::prelude::*;

    /// Predicate matching exactly one date line
    pub fn prints_date(date: &str) -> impl Predicate<str> {
        predicate::eq(format!("{date}\n"))
    }

    /// Predicate to check for error messages
    pub fn has_error() -> impl Predicate<str> {
        predicate::str::contains("Error")
    }

    /// Predicate to check for preview table headers
    pub fn has_preview_table_headers() -> impl Predicate<str> {
        predicate::str::contains("Date")
            .and(predicate::str::contains("Weekday"))
            .and(predicate::str::contains("When"))
    }
}
