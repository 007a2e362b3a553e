//! The send ledger: which (event, recipient) pairs have already been mailed.
//!
//! Persisted as a JSON map keyed by `{event_date}_{event_kind}_{email}`.
//! Email addresses and kind labels are lowercased before keying so that a
//! re-typed contact row can't trigger a duplicate send; the raw address is
//! still stored on the entry for diagnosis.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{SidelineError, SidelineResult};
use crate::reminder::ReminderTask;

/// One recorded send. Append-only; never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub sent_at: DateTime<Utc>,
    pub event_date: chrono::NaiveDate,
    pub event_type: String,
    pub recipient: String,
}

/// Durable record of already-sent reminders, loaded fully into memory at
/// startup and rewritten atomically on persist.
pub struct SendLedger {
    path: PathBuf,
    entries: BTreeMap<String, LedgerEntry>,
}

impl SendLedger {
    /// Load the ledger from disk. A missing file is a first run, not an
    /// error, and yields an empty ledger.
    pub fn load(path: &Path) -> SidelineResult<Self> {
        let entries = if path.exists() {
            let content = std::fs::read_to_string(path)?;
            serde_json::from_str(&content)
                .map_err(|e| SidelineError::Serialization(e.to_string()))?
        } else {
            BTreeMap::new()
        };

        info!("Loaded ledger with {} entries", entries.len());

        Ok(SendLedger {
            path: path.to_path_buf(),
            entries,
        })
    }

    /// Has this reminder already gone out to this address?
    pub fn has_sent(&self, task: &ReminderTask, email: &str) -> bool {
        self.entries.contains_key(&key_for(task, email))
    }

    /// Record a successful send. Inserting the same key twice is a contract
    /// violation (the orchestrator checks `has_sent` first) and fails loudly.
    pub fn record_sent(
        &mut self,
        task: &ReminderTask,
        email: &str,
        sent_at: DateTime<Utc>,
    ) -> SidelineResult<()> {
        let key = key_for(task, email);

        if self.entries.contains_key(&key) {
            return Err(SidelineError::DuplicateSend(key));
        }

        self.entries.insert(
            key,
            LedgerEntry {
                sent_at,
                event_date: task.event.date,
                event_type: task.event.kind.label(),
                recipient: email.to_string(),
            },
        );

        Ok(())
    }

    /// Write the ledger to disk. Writes a temp file next to the target and
    /// renames over it, so a crash mid-write never corrupts prior entries.
    pub fn persist(&self) -> SidelineResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let temp = self.path.with_extension("json.tmp");
        let content = serde_json::to_string_pretty(&self.entries)
            .map_err(|e| SidelineError::Serialization(e.to_string()))?;

        std::fs::write(&temp, content)?;
        std::fs::rename(&temp, &self.path)?;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in key order, for inspection.
    pub fn entries(&self) -> impl Iterator<Item = (&String, &LedgerEntry)> {
        self.entries.iter()
    }
}

fn key_for(task: &ReminderTask, email: &str) -> String {
    format!(
        "{}_{}_{}",
        task.event.date.format("%Y-%m-%d"),
        task.event.kind.label(),
        email.to_lowercase()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{Event, EventKind};
    use crate::reminder::ReminderKind;
    use pretty_assertions::assert_eq;

    fn practice_task() -> ReminderTask {
        ReminderTask {
            event: Event {
                kind: EventKind::Practice,
                date: "2025-06-04".parse().unwrap(),
                time: "5:30 PM".to_string(),
                location: "Riverside Field".to_string(),
                notes: None,
            },
            kind: ReminderKind::PracticeReminder,
            evaluated_on: "2025-06-03".parse().unwrap(),
        }
    }

    #[test]
    fn test_load_missing_file_is_empty_ledger() {
        let dir = tempfile::tempdir().unwrap();
        let ledger = SendLedger::load(&dir.path().join("sent.json")).unwrap();
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_record_then_has_sent() {
        let dir = tempfile::tempdir().unwrap();
        let mut ledger = SendLedger::load(&dir.path().join("sent.json")).unwrap();
        let task = practice_task();

        assert!(!ledger.has_sent(&task, "dana@example.com"));
        ledger
            .record_sent(&task, "dana@example.com", Utc::now())
            .unwrap();
        assert!(ledger.has_sent(&task, "dana@example.com"));
    }

    #[test]
    fn test_duplicate_record_fails_loudly() {
        let dir = tempfile::tempdir().unwrap();
        let mut ledger = SendLedger::load(&dir.path().join("sent.json")).unwrap();
        let task = practice_task();

        ledger
            .record_sent(&task, "dana@example.com", Utc::now())
            .unwrap();
        let err = ledger
            .record_sent(&task, "dana@example.com", Utc::now())
            .unwrap_err();

        assert!(matches!(err, SidelineError::DuplicateSend(_)));
    }

    #[test]
    fn test_key_lowercases_email() {
        let dir = tempfile::tempdir().unwrap();
        let mut ledger = SendLedger::load(&dir.path().join("sent.json")).unwrap();
        let task = practice_task();

        ledger
            .record_sent(&task, "Dana@Example.com", Utc::now())
            .unwrap();

        assert!(ledger.has_sent(&task, "dana@example.com"));
        // Raw address is preserved on the entry itself.
        let (_, entry) = ledger.entries().next().unwrap();
        assert_eq!(entry.recipient, "Dana@Example.com");
    }

    #[test]
    fn test_persist_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sent.json");
        let task = practice_task();
        let sent_at = Utc::now();

        let mut ledger = SendLedger::load(&path).unwrap();
        ledger.record_sent(&task, "dana@example.com", sent_at).unwrap();
        ledger.record_sent(&task, "luis@example.com", sent_at).unwrap();
        ledger.persist().unwrap();

        let reloaded = SendLedger::load(&path).unwrap();
        assert_eq!(reloaded.len(), 2);
        assert!(reloaded.has_sent(&task, "dana@example.com"));

        let original: Vec<_> = ledger.entries().collect();
        let restored: Vec<_> = reloaded.entries().collect();
        assert_eq!(original, restored);
    }

    #[test]
    fn test_persist_creates_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs").join("sent.json");

        let ledger = SendLedger::load(&path).unwrap();
        ledger.persist().unwrap();

        assert!(path.exists());
    }
}
