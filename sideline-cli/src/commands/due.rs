use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use owo_colors::OwoColorize;

use sideline_core::config::Config;
use sideline_core::reminder::due_reminders;
use sideline_core::schedule::read_schedule;

/// Preview which reminders are due, without rendering or sending anything.
pub fn run(config_path: &Path, today: NaiveDate) -> Result<()> {
    let config = Config::load(config_path).context("Could not load configuration")?;
    let events = read_schedule(&config.files.schedule);

    let tasks = due_reminders(&events, today);

    if tasks.is_empty() {
        println!("No reminders due on {}", today);
        return Ok(());
    }

    println!("Due on {}:", today.to_string().bold());
    for task in &tasks {
        println!(
            "   {} {} at {} ({})",
            task.kind.to_string().green(),
            task.event.date,
            task.event.time,
            task.event.location
        );
    }

    Ok(())
}
