//! Schedule and contact file reading.
//!
//! Both sources are CSV with a header row. File-level failures (missing file,
//! missing required column) are logged and yield an empty list so a scheduled
//! run degrades to a no-op instead of crashing. Individual bad rows are
//! skipped with a warning and never abort the read.

use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;
use tracing::{info, warn};

use crate::event::{Contact, Event, EventKind};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Raw schedule row as it appears in the file, before date validation.
#[derive(Debug, Deserialize)]
struct ScheduleRow {
    event_type: String,
    date: String,
    time: String,
    location: String,
    #[serde(default)]
    notes: String,
}

/// Read the season schedule. Rows with unparsable dates are skipped with a
/// warning; a missing or malformed file yields an empty schedule.
pub fn read_schedule(path: &Path) -> Vec<Event> {
    let mut reader = match csv::Reader::from_path(path) {
        Ok(reader) => reader,
        Err(e) => {
            tracing::error!("Could not read schedule file {}: {}", path.display(), e);
            return Vec::new();
        }
    };

    let mut events = Vec::new();

    for row in reader.deserialize::<ScheduleRow>() {
        let row = match row {
            Ok(row) => row,
            Err(e) => {
                warn!("Skipping malformed schedule row: {}", e);
                continue;
            }
        };

        let date = match NaiveDate::parse_from_str(row.date.trim(), DATE_FORMAT) {
            Ok(date) => date,
            Err(_) => {
                warn!("Invalid date '{}' in schedule, skipping row", row.date);
                continue;
            }
        };

        let notes = row.notes.trim();

        events.push(Event {
            kind: EventKind::parse(&row.event_type),
            date,
            time: row.time.trim().to_string(),
            location: row.location.trim().to_string(),
            notes: (!notes.is_empty()).then(|| notes.to_string()),
        });
    }

    info!("Loaded {} events from {}", events.len(), path.display());
    events
}

#[derive(Debug, Deserialize)]
struct ContactRow {
    parent_name: String,
    email: String,
}

/// Read the contact list. Same failure policy as [`read_schedule`].
pub fn read_contacts(path: &Path) -> Vec<Contact> {
    let mut reader = match csv::Reader::from_path(path) {
        Ok(reader) => reader,
        Err(e) => {
            tracing::error!("Could not read contacts file {}: {}", path.display(), e);
            return Vec::new();
        }
    };

    let mut contacts = Vec::new();

    for row in reader.deserialize::<ContactRow>() {
        match row {
            Ok(row) => contacts.push(Contact {
                parent_name: row.parent_name.trim().to_string(),
                email: row.email.trim().to_string(),
            }),
            Err(e) => warn!("Skipping malformed contact row: {}", e),
        }
    }

    info!("Loaded {} contacts from {}", contacts.len(), path.display());
    contacts
}
