//! # Domain Module
//!
//! Contains the business logic of the farmer app, independent of how it is
//! shown or where data is kept.
//!
//! ## Module Organization
//!
//! - **content**: Static crop catalog and dragon fruit cultivation guide
//! - **language_service**: Active display language and bilingual text resolution
//! - **navigation**: Screen router and crop selection
//! - **observation_service**: Recording, reviewing and editing crop observations
//! - **reminders**: Session-only farm task reminders
//! - **weather**: Weather snapshot and condition wording
//!
//! ## Core Concepts
//!
//! - **Observation**: A dated record of a crop's growth stage and health
//! - **Language Selection**: Bangla or English, chosen once and remembered
//! - **Synced flag**: Marks observations already handed to a future remote sync

pub mod content;
pub mod language_service;
pub mod navigation;
pub mod observation_service;
pub mod reminders;
pub mod weather;

pub use language_service::LanguageService;
pub use navigation::{Page, PageRouter};
pub use observation_service::{
    AmendObservationCommand, HealthSummary, HistoryFilter, ObservationError, ObservationService,
    RecordObservationCommand,
};
pub use reminders::ReminderBoard;
