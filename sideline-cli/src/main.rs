mod commands;

use std::path::PathBuf;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sideline")]
#[command(about = "Send practice and game reminders to team parents")]
struct Cli {
    /// Path to the config file
    #[arg(short, long, default_value = "config/sideline.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Send today's due reminders (skips anything already sent)
    Run {
        /// Evaluate reminders as if today were this date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Show what would be sent today, without sending
    Due {
        /// Evaluate reminders as if today were this date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// List reminders already recorded as sent
    Ledger,
}

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { date } => commands::run::run(&cli.config, resolve_date(date)).await,
        Commands::Due { date } => commands::due::run(&cli.config, resolve_date(date)),
        Commands::Ledger => commands::ledger::run(&cli.config),
    }
}

fn resolve_date(date: Option<NaiveDate>) -> NaiveDate {
    date.unwrap_or_else(|| chrono::Local::now().date_naive())
}
