//! CLI interface for Discipline.
//!
//! Each subcommand is non-interactive: arguments in, plain text out.
//! Handlers call into the ledger and reporting layers and format the result.
//! Points and streak rules live in the ledger, not here.

mod format;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use jiff::{Zoned, civil::Date};

use crate::config::Config;
use crate::ledger::{Ledger, parse_quantity};
use crate::storage::Store;
use crate::{quote, report};

use format::{format_dashboard, format_entry, render_chart};

/// Discipline — track daily actions, earn points, keep the streak going.
#[derive(Debug, Parser)]
#[command(name = "discipline", version, after_long_help = USAGE_HELP)]
pub struct Cli {
    /// State file to use instead of the configured one.
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

const USAGE_HELP: &str = r#"Daily use:
  discipline record Sport 30
  discipline record "Projet perso" 45 --on 2024-01-02
  discipline status
  discipline stats

Configuration lives in ~/.discipline/config.toml:
  data-file = "/path/to/data.json"
  actions = ["Sport", "Travail", "Étude", "Projet perso"]"#;

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Record an action. Prints the entry and the updated dashboard.
    Record {
        /// One of the configured action categories.
        name: String,

        /// Units done (minutes, repetitions, ...). Whole number, zero or more.
        quantity: String,

        /// Date to record on (YYYY-MM-DD). Defaults to today.
        #[arg(long)]
        on: Option<Date>,
    },

    /// Show points for the day and the streak.
    Status {
        /// Date to show (YYYY-MM-DD). Defaults to today.
        #[arg(long)]
        on: Option<Date>,
    },

    /// Chart daily point totals.
    Stats,

    /// List the entries recorded on a day.
    Log {
        /// Date to list (YYYY-MM-DD). Defaults to today.
        #[arg(long)]
        on: Option<Date>,
    },

    /// Print the phrase of the day.
    Quote {
        /// Date to pick the phrase for (YYYY-MM-DD). Defaults to today.
        #[arg(long)]
        on: Option<Date>,
    },

    /// List the action categories that can be recorded.
    Actions,
}

/// Run the CLI, returning an error message on failure.
pub fn run(config: &Config) -> Result<(), String> {
    let cli = Cli::parse();

    match cli.command {
        Command::Record { name, quantity, on } => {
            let mut ledger = open_ledger(config, cli.data)?;
            cmd_record(config, &mut ledger, &name, &quantity, on.unwrap_or_else(today))
        }
        Command::Status { on } => {
            let ledger = open_ledger(config, cli.data)?;
            cmd_status(&ledger, on.unwrap_or_else(today));
            Ok(())
        }
        Command::Stats => {
            let ledger = open_ledger(config, cli.data)?;
            cmd_stats(&ledger);
            Ok(())
        }
        Command::Log { on } => {
            let ledger = open_ledger(config, cli.data)?;
            cmd_log(&ledger, on.unwrap_or_else(today));
            Ok(())
        }
        Command::Quote { on } => {
            println!("{}", quote::phrase_for(on.unwrap_or_else(today)));
            Ok(())
        }
        Command::Actions => {
            for action in &config.actions {
                println!("{action}");
            }
            Ok(())
        }
    }
}

/// The local calendar date.
fn today() -> Date {
    Zoned::now().date()
}

fn open_ledger(config: &Config, explicit: Option<PathBuf>) -> Result<Ledger, String> {
    let path = config.data_file(explicit.as_deref())?;
    Ledger::open(Store::new(path)).map_err(|e| format!("failed to load state: {e}"))
}

fn cmd_record(
    config: &Config,
    ledger: &mut Ledger,
    name: &str,
    quantity: &str,
    today: Date,
) -> Result<(), String> {
    if !config.is_known_action(name) {
        return Err(format!(
            "unknown action '{name}' — choose one of: {}",
            config.actions.join(", ")
        ));
    }
    let quantity = parse_quantity(quantity).map_err(|e| e.to_string())?;

    let entry = ledger.record_action(name, quantity, today).map_err(|e| {
        if e.is_invalid_input() {
            e.to_string()
        } else {
            format!("action recorded but not saved: {e}")
        }
    })?;

    println!("{today}  {}", format_entry(&entry));
    cmd_status(ledger, today);
    Ok(())
}

fn cmd_status(ledger: &Ledger, today: Date) {
    println!(
        "{}",
        format_dashboard(ledger.points_for_date(today), ledger.current_streak())
    );
}

fn cmd_stats(ledger: &Ledger) {
    let totals = report::daily_totals(ledger.state());
    match render_chart(&totals) {
        Some(chart) => println!("{chart}"),
        None => println!("No data to display"),
    }
}

fn cmd_log(ledger: &Ledger, date: Date) {
    let entries = ledger.state().entries_on(date);
    if entries.is_empty() {
        println!("Nothing recorded on {date}");
        return;
    }
    for entry in entries {
        println!("{}", format_entry(entry));
    }
}
