use std::path::Path;

use anyhow::{Context, Result};

use sideline_core::config::Config;
use sideline_core::ledger::SendLedger;

/// Print every recorded send, oldest key first.
pub fn run(config_path: &Path) -> Result<()> {
    let config = Config::load(config_path).context("Could not load configuration")?;
    let ledger = SendLedger::load(&config.files.ledger).context("Could not load send ledger")?;

    if ledger.is_empty() {
        println!("No reminders recorded yet");
        return Ok(());
    }

    for (key, entry) in ledger.entries() {
        println!(
            "{}  {} {} -> {} (sent {})",
            key,
            entry.event_date,
            entry.event_type,
            entry.recipient,
            entry.sent_at.format("%Y-%m-%d %H:%M UTC")
        );
    }

    Ok(())
}
