//! # Preference Repository
//!
//! Stores the language selection as a bare scalar (`bn` / `en`) under its
//! own key, separate from the observation document.

use log::{debug, error, warn};
use shared::Language;

use crate::storage::traits::{KeyValueStore, PreferenceStorage};

/// Storage key of the language selection
pub const LANGUAGE_KEY: &str = "farmer-app-language";

#[derive(Clone)]
pub struct PreferenceRepository<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> PreferenceRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

impl<S: KeyValueStore> PreferenceStorage for PreferenceRepository<S> {
    fn get_language(&self) -> Option<Language> {
        let stored = match self.store.get_value(LANGUAGE_KEY) {
            Ok(stored) => stored?,
            Err(e) => {
                warn!("Error reading language preference: {}", e);
                return None;
            }
        };

        let language = Language::from_code(stored.trim());
        if language.is_none() {
            warn!("Ignoring unrecognized stored language '{}'", stored.trim());
        }
        language
    }

    fn set_language(&self, language: Language) {
        match self.store.put_value(LANGUAGE_KEY, language.code()) {
            Ok(()) => debug!("Stored language preference '{}'", language),
            Err(e) => error!("Error saving language preference: {}", e),
        }
    }
}
