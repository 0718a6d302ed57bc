//! # Language Service
//!
//! Holds the active display language and resolves bilingual text pairs
//! against it. The selection is persisted through [`PreferenceStorage`]
//! on every change and read back once at startup.

use log::{debug, info};
use shared::Language;
use std::sync::Mutex;

use crate::storage::traits::PreferenceStorage;

/// Pick the text for `language` out of an English/Bangla pair
pub fn resolve<'a>(language: Language, english: &'a str, bangla: &'a str) -> &'a str {
    match language {
        Language::Bn => bangla,
        Language::En => english,
    }
}

/// Service for reading and changing the display language
pub struct LanguageService<P: PreferenceStorage> {
    preferences: P,
    current: Mutex<Language>,
}

impl<P: PreferenceStorage> LanguageService<P> {
    /// Load the stored selection, falling back to `default` when nothing
    /// usable is stored
    pub fn load(preferences: P, default: Language) -> Self {
        let current = match preferences.get_language() {
            Some(language) => {
                debug!("Loaded stored language '{}'", language);
                language
            }
            None => {
                debug!("No stored language, using default '{}'", default);
                default
            }
        };

        Self {
            preferences,
            current: Mutex::new(current),
        }
    }

    /// The active language
    pub fn current(&self) -> Language {
        *self.current.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Resolve a text pair against the active language. `key` only
    /// identifies the text in debug output.
    pub fn t<'a>(&self, key: &str, english: &'a str, bangla: &'a str) -> &'a str {
        let language = self.current();
        debug!("Resolving '{}' in '{}'", key, language);
        resolve(language, english, bangla)
    }

    /// Switch to `language` and persist the choice
    pub fn set_language(&self, language: Language) {
        {
            let mut current = self.current.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            *current = language;
        }
        self.preferences.set_language(language);
        info!("Language set to '{}' ({})", language, language.name());
    }

    /// Switch to the next language in display order and return it
    pub fn toggle(&self) -> Language {
        let next = self.current().next();
        self.set_language(next);
        next
    }
}
