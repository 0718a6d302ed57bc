//! # Reminders
//!
//! Farm task reminders shown on the home screen. They live in memory for
//! the session and are reseeded whenever the selected crop changes.

use chrono::{DateTime, Duration, Utc};
use log::{debug, warn};
use shared::{Reminder, ReminderKind};

#[derive(Debug, Clone, Default)]
pub struct ReminderBoard {
    reminders: Vec<Reminder>,
}

impl ReminderBoard {
    /// The standard pair: water today, fertilize in two days
    pub fn seeded(crop_id: Option<&str>, now: DateTime<Utc>) -> Self {
        let crop_id = crop_id.map(str::to_string);
        let reminders = vec![
            Reminder {
                id: "1".to_string(),
                kind: ReminderKind::Watering,
                title: "Water your crops".to_string(),
                title_bangla: "ফসলে পানি দিন".to_string(),
                description: "Morning watering recommended".to_string(),
                description_bangla: "সকালে পানি দেওয়ার পরামর্শ".to_string(),
                due_date: now,
                is_completed: false,
                crop_id: crop_id.clone(),
            },
            Reminder {
                id: "2".to_string(),
                kind: ReminderKind::Fertilizer,
                title: "Apply fertilizer".to_string(),
                title_bangla: "সার প্রয়োগ করুন".to_string(),
                description: "Time for organic fertilizer application".to_string(),
                description_bangla: "জৈব সার প্রয়োগের সময়".to_string(),
                due_date: now + Duration::days(2),
                is_completed: false,
                crop_id,
            },
        ];
        Self { reminders }
    }

    pub fn all(&self) -> &[Reminder] {
        &self.reminders
    }

    pub fn pending(&self) -> impl Iterator<Item = &Reminder> {
        self.reminders.iter().filter(|reminder| !reminder.is_completed)
    }

    /// Mark a reminder done. Returns false for unknown IDs.
    pub fn complete(&mut self, id: &str) -> bool {
        match self.reminders.iter_mut().find(|reminder| reminder.id == id) {
            Some(reminder) => {
                reminder.is_completed = true;
                debug!("Completed reminder '{}'", id);
                true
            }
            None => {
                warn!("Reminder not found: {}", id);
                false
            }
        }
    }
}

/// Icon for a reminder kind
pub fn reminder_symbol(kind: ReminderKind) -> &'static str {
    match kind {
        ReminderKind::Watering => "💧",
        ReminderKind::Fertilizer => "⚡",
        ReminderKind::Pesticide => "🐛",
        ReminderKind::Harvest => "🛒",
        ReminderKind::Weather => "🌧",
    }
}
