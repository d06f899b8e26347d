//! Main CLI application structure

use chrono::{Local, NaiveDate};
use clap::Parser;
use anyhow::Result;

use super::commands::Session;
use super::output::{Output, OutputFormat};
use super::repl;
use crate::domain::Birthday;

#[derive(Parser)]
#[command(name = "contacts")]
#[command(author, version, about = "Interactive contact book with birthday reminders")]
pub struct Cli {
    /// Output format
    #[arg(long, short = 'f', default_value = "text")]
    pub format: OutputFormat,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Reference date for `birthdays` (DD.MM.YYYY, defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub today: Option<NaiveDate>,
}

fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    raw.parse::<Birthday>()
        .map(|b| b.date())
        .map_err(|e| e.to_string())
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let output = Output::new(cli.format, cli.verbose);

    let today = cli.today.unwrap_or_else(|| Local::now().date_naive());
    output.verbose_ctx("session", &format!("Reference date: {}", today));

    let mut session = Session::new(today);
    let stdin = std::io::stdin();
    repl::run(stdin.lock(), &mut session, &output)?;

    output.verbose("Session closed");
    Ok(())
}
