//! The reminder run: select due events, fan out to contacts, dedup against
//! the ledger, render, deliver, record.
//!
//! Everything is strictly sequential: one delivery in flight at a time, and
//! the ledger is only updated (and persisted) after a send succeeds. A
//! delivery failure is counted and logged, never retried within the run;
//! because the ledger stays untouched, the next run picks it up again.

use chrono::{NaiveDate, Utc};
use tracing::{error, info};

use crate::event::{Contact, Event};
use crate::ledger::SendLedger;
use crate::mailer::{Mailer, OutboundEmail};
use crate::reminder::due_reminders;
use crate::template::{render, TemplateSet};

/// One failed delivery, for the operator-facing summary.
#[derive(Debug, Clone)]
pub struct DeliveryFailure {
    pub recipient: String,
    pub reason: String,
}

/// Counts for a completed run.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub sent: usize,
    pub skipped: usize,
    pub failed: usize,
    pub failures: Vec<DeliveryFailure>,
}

/// Drives one reminder run end to end.
pub struct Orchestrator<'a> {
    pub contacts: &'a [Contact],
    pub templates: &'a TemplateSet,
    pub coach_name: &'a str,
    pub mailer: &'a dyn Mailer,
}

impl Orchestrator<'_> {
    /// Run the pipeline for `today`. Re-running with the same inputs and a
    /// ledger from a prior successful run sends nothing.
    pub async fn run(
        &self,
        events: &[Event],
        ledger: &mut SendLedger,
        today: NaiveDate,
    ) -> RunSummary {
        let mut summary = RunSummary::default();
        let mut persist_pending = false;

        let tasks = due_reminders(events, today);
        if tasks.is_empty() {
            info!("No reminders to send today");
            return summary;
        }

        for task in &tasks {
            info!("Processing {} on {}", task.event.kind, task.event.date);

            for contact in self.contacts {
                if ledger.has_sent(task, &contact.email) {
                    info!("Skipping {} - already sent", contact.email);
                    summary.skipped += 1;
                    continue;
                }

                let email = match render(task, contact, self.templates, self.coach_name) {
                    Ok(rendered) => OutboundEmail {
                        to_name: contact.parent_name.clone(),
                        to_email: contact.email.clone(),
                        subject: rendered.subject,
                        body: rendered.body,
                    },
                    Err(e) => {
                        error!("Could not render reminder for {}: {}", contact.email, e);
                        summary.record_failure(&contact.email, e.to_string());
                        continue;
                    }
                };

                match self.mailer.send(&email).await {
                    Ok(()) => {
                        if let Err(e) = ledger.record_sent(task, &contact.email, Utc::now()) {
                            // Contract violation; surface it, don't overwrite.
                            error!("Ledger insert failed for {}: {}", contact.email, e);
                            summary.record_failure(&contact.email, e.to_string());
                            continue;
                        }
                        // Persist per send so a crash never causes a resend.
                        match ledger.persist() {
                            Ok(()) => persist_pending = false,
                            Err(e) => {
                                error!("Ledger persist failed: {}", e);
                                persist_pending = true;
                            }
                        }
                        summary.sent += 1;
                        info!("Sent to {} ({})", contact.parent_name, contact.email);
                    }
                    Err(e) => {
                        error!("Failed to send to {}: {}", contact.email, e);
                        summary.record_failure(&contact.email, e.to_string());
                    }
                }
            }
        }

        // A failed per-send persist leaves recorded sends only in memory;
        // retry once before summarizing so the window stays one run wide at
        // worst.
        if persist_pending {
            match ledger.persist() {
                Ok(()) => info!("Ledger persisted on end-of-run retry"),
                Err(e) => error!("Ledger persist failed at end of run: {}", e),
            }
        }

        info!(
            "Run complete: {} sent, {} skipped, {} failed",
            summary.sent, summary.skipped, summary.failed
        );
        summary
    }
}

impl RunSummary {
    fn record_failure(&mut self, recipient: &str, reason: String) {
        self.failed += 1;
        self.failures.push(DeliveryFailure {
            recipient: recipient.to_string(),
            reason,
        });
    }
}
