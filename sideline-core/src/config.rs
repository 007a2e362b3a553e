//! Configuration loading.
//!
//! A single TOML file points at the data files and carries the SMTP account.
//! A missing config file is fatal at startup; everything downstream assumes a
//! loaded config.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{SidelineError, SidelineResult};

#[derive(Debug, Deserialize)]
pub struct Config {
    pub files: FilesConfig,
    pub email: EmailConfig,
}

/// Paths to the data files, relative to the working directory unless
/// absolute.
#[derive(Debug, Deserialize)]
pub struct FilesConfig {
    pub schedule: PathBuf,
    pub contacts: PathBuf,
    pub templates: PathBuf,
    pub ledger: PathBuf,
}

#[derive(Debug, Deserialize)]
pub struct EmailConfig {
    pub coach_name: String,
    pub smtp_host: String,
    pub smtp_port: u16,
    pub sender_email: String,
    pub sender_password: String,
}

impl Config {
    /// Load config from `path`. Missing file is an error with a hint showing
    /// the expected layout.
    pub fn load(path: &Path) -> SidelineResult<Self> {
        if !path.exists() {
            return Err(SidelineError::Config(format!(
                "Config file not found at {}\n\n\
                Create it with:\n\n\
                [files]\n\
                schedule = \"data/schedule.csv\"\n\
                contacts = \"data/contacts.csv\"\n\
                templates = \"config/templates.json\"\n\
                ledger = \"data/sent_reminders.json\"\n\n\
                [email]\n\
                coach_name = \"Coach Reyes\"\n\
                smtp_host = \"smtp.gmail.com\"\n\
                smtp_port = 587\n\
                sender_email = \"coach@example.com\"\n\
                sender_password = \"app-password\"",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| {
            SidelineError::Config(format!(
                "Failed to parse config file at {}: {}",
                path.display(),
                e
            ))
        })
    }
}
