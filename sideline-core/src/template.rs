//! Email templates and rendering.
//!
//! Templates live in a JSON document with one entry per reminder kind.
//! Rendering is literal token substitution, by design: a richer engine can
//! replace this module without touching the orchestrator. Tokens the renderer
//! doesn't know are left verbatim in the output rather than silently dropped.

use std::path::Path;

use serde::Deserialize;

use crate::error::{SidelineError, SidelineResult};
use crate::event::Contact;
use crate::reminder::{ReminderKind, ReminderTask};

/// Subject and body with `[TOKEN]` placeholders.
#[derive(Debug, Clone, Deserialize)]
pub struct Template {
    pub subject: String,
    pub body: String,
}

/// The template store: one template per reminder kind.
#[derive(Debug, Clone, Deserialize)]
pub struct TemplateSet {
    pub practice_reminder: Option<Template>,
    pub game_reminder: Option<Template>,
}

impl TemplateSet {
    pub fn load(path: &Path) -> SidelineResult<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| SidelineError::Serialization(e.to_string()))
    }

    fn for_kind(&self, kind: ReminderKind) -> SidelineResult<&Template> {
        let template = match kind {
            ReminderKind::PracticeReminder => self.practice_reminder.as_ref(),
            ReminderKind::GameReminder => self.game_reminder.as_ref(),
        };

        template.ok_or_else(|| SidelineError::TemplateNotFound(kind.to_string()))
    }
}

/// A rendered email, ready for delivery.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedEmail {
    pub subject: String,
    pub body: String,
}

/// Fill the template for this reminder kind with the event, contact and
/// coach details. Empty required fields fail rather than producing an email
/// with a hole in it.
pub fn render(
    task: &ReminderTask,
    contact: &Contact,
    templates: &TemplateSet,
    coach_name: &str,
) -> SidelineResult<RenderedEmail> {
    if contact.parent_name.is_empty() {
        return Err(SidelineError::MissingPlaceholderData("[PARENT_NAME]"));
    }
    if contact.email.is_empty() {
        return Err(SidelineError::MissingPlaceholderData("recipient email"));
    }
    if coach_name.is_empty() {
        return Err(SidelineError::MissingPlaceholderData("[COACH_NAME]"));
    }

    let template = templates.for_kind(task.kind)?;

    // e.g. "Tuesday, June 03, 2025"
    let formatted_date = task.event.date.format("%A, %B %d, %Y").to_string();

    let notes_block = match task.event.notes.as_deref() {
        Some(notes) if !notes.is_empty() => format!("\nAdditional Info: {}", notes),
        _ => String::new(),
    };

    let substitute = |text: &str| {
        text.replace("[PARENT_NAME]", &contact.parent_name)
            .replace("[DATE]", &formatted_date)
            .replace("[TIME]", &task.event.time)
            .replace("[LOCATION]", &task.event.location)
            .replace("[COACH_NAME]", coach_name)
            .replace("[NOTES]", &notes_block)
    };

    Ok(RenderedEmail {
        subject: substitute(&template.subject),
        body: substitute(&template.body),
    })
}
