//! Reminder selection.
//!
//! Pure logic: given the schedule and today's date, decide which events are
//! due for a reminder. Practices remind one day ahead, games on the day.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{info, warn};

use crate::event::{Event, EventKind};

/// Which reminder rule an event matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReminderKind {
    PracticeReminder,
    GameReminder,
}

impl fmt::Display for ReminderKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ReminderKind::PracticeReminder => write!(f, "practice_reminder"),
            ReminderKind::GameReminder => write!(f, "game_reminder"),
        }
    }
}

/// A due notification derived from one event. Created fresh each run and
/// never persisted.
#[derive(Debug, Clone)]
pub struct ReminderTask {
    pub event: Event,
    pub kind: ReminderKind,
    pub evaluated_on: NaiveDate,
}

/// Select the events due for a reminder on `today`.
///
/// Output order follows input order, and one event yields at most one task.
/// Events of unrecognized kinds are warned about and never match.
pub fn due_reminders(events: &[Event], today: NaiveDate) -> Vec<ReminderTask> {
    let tomorrow = today + Days::new(1);

    let tasks: Vec<ReminderTask> = events
        .iter()
        .filter_map(|event| {
            let kind = match &event.kind {
                EventKind::Practice if event.date == tomorrow => ReminderKind::PracticeReminder,
                EventKind::Game if event.date == today => ReminderKind::GameReminder,
                EventKind::Other(raw) => {
                    warn!("No reminder rule for event kind '{}', skipping", raw);
                    return None;
                }
                _ => return None,
            };

            Some(ReminderTask {
                event: event.clone(),
                kind,
                evaluated_on: today,
            })
        })
        .collect();

    info!("Found {} events needing reminders", tasks.len());
    tasks
}
