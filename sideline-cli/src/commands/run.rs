use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use owo_colors::OwoColorize;

use sideline_core::config::Config;
use sideline_core::ledger::SendLedger;
use sideline_core::mailer::SmtpMailer;
use sideline_core::run::Orchestrator;
use sideline_core::schedule::{read_contacts, read_schedule};
use sideline_core::template::TemplateSet;

pub async fn run(config_path: &Path, today: NaiveDate) -> Result<()> {
    let config = Config::load(config_path).context("Could not load configuration")?;

    let templates = TemplateSet::load(&config.files.templates).with_context(|| {
        format!(
            "Could not load templates from {}",
            config.files.templates.display()
        )
    })?;

    let events = read_schedule(&config.files.schedule);
    let contacts = read_contacts(&config.files.contacts);
    let mut ledger =
        SendLedger::load(&config.files.ledger).context("Could not load send ledger")?;

    let mailer = SmtpMailer::new(
        &config.email.smtp_host,
        config.email.smtp_port,
        &config.email.coach_name,
        &config.email.sender_email,
        &config.email.sender_password,
    )
    .context("Could not set up SMTP transport")?;

    let orchestrator = Orchestrator {
        contacts: &contacts,
        templates: &templates,
        coach_name: &config.email.coach_name,
        mailer: &mailer,
    };

    let summary = orchestrator.run(&events, &mut ledger, today).await;

    println!(
        "\n{} sent, {} skipped, {} failed",
        summary.sent.green(),
        summary.skipped.yellow(),
        summary.failed.red()
    );

    for failure in &summary.failures {
        println!("   {} {}: {}", "✗".red(), failure.recipient, failure.reason);
    }

    // Per-recipient failures are reported, not fatal: the run completed.
    Ok(())
}
