//! Core types and logic for the sideline reminder mailer.
//!
//! This crate provides everything the CLI drives:
//! - `event` / `schedule` for reading the season schedule and contact list
//! - `reminder` for deciding which events are due for a reminder today
//! - `ledger` for remembering which (event, recipient) pairs were already sent
//! - `template` / `mailer` for rendering and delivering the emails
//! - `run` for the orchestration loop tying it all together

pub mod config;
pub mod error;
pub mod event;
pub mod ledger;
pub mod mailer;
pub mod reminder;
pub mod run;
pub mod schedule;
pub mod template;

pub use error::{SidelineError, SidelineResult};
