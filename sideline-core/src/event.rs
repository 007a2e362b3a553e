//! Schedule and contact record types.
//!
//! These are plain data read fresh from the schedule and contact files on
//! every run. Nothing here is cached or mutated after loading.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A scheduled team activity (one row of the schedule file).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub kind: EventKind,
    pub date: NaiveDate,
    /// Local time as written in the schedule (e.g. "5:30 PM"). Kept verbatim
    /// for template substitution; never parsed.
    pub time: String,
    pub location: String,
    pub notes: Option<String>,
}

/// The kind of activity. Unrecognized kinds are preserved so they can be
/// named in warnings, but they never produce reminders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventKind {
    Practice,
    Game,
    Other(String),
}

impl EventKind {
    /// Parse a schedule-file kind string, case-insensitively.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "practice" => EventKind::Practice,
            "game" => EventKind::Game,
            _ => EventKind::Other(raw.trim().to_string()),
        }
    }

    /// Canonical lowercase label, used in ledger keys.
    pub fn label(&self) -> String {
        match self {
            EventKind::Practice => "practice".to_string(),
            EventKind::Game => "game".to_string(),
            EventKind::Other(raw) => raw.to_lowercase(),
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A parent to be notified (one row of the contacts file).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contact {
    pub parent_name: String,
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_parse_is_case_insensitive() {
        assert_eq!(EventKind::parse("Practice"), EventKind::Practice);
        assert_eq!(EventKind::parse("GAME"), EventKind::Game);
        assert_eq!(EventKind::parse("  game "), EventKind::Game);
    }

    #[test]
    fn test_unknown_kind_preserves_raw_value() {
        match EventKind::parse("Scrimmage") {
            EventKind::Other(raw) => assert_eq!(raw, "Scrimmage"),
            other => panic!("Expected Other, got {:?}", other),
        }
    }

    #[test]
    fn test_label_is_lowercase() {
        assert_eq!(EventKind::parse("Practice").label(), "practice");
        assert_eq!(EventKind::parse("Tournament").label(), "tournament");
    }
}
