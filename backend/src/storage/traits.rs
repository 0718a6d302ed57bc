//! # Storage Traits
//!
//! This module defines the storage abstraction traits that allow different
//! storage backends to be used interchangeably in the domain layer.

use chrono::{DateTime, Utc};
use shared::{Language, NewObservation, Observation, ObservationUpdate};
use std::path::PathBuf;

/// Failure of the raw key-value layer.
///
/// Repositories never hand these to their callers: reads degrade to
/// "no data yet" and writes are logged and dropped.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("invalid storage key '{0}'")]
    InvalidKey(String),
    #[error("storage I/O failed for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Trait defining a flat string key-value store.
///
/// One value per key, whole-value replace on write. This is the only
/// primitive the repositories need.
pub trait KeyValueStore: Send + Sync {
    /// Retrieve the value stored under `key`, `None` if nothing is stored
    fn get_value(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, overwriting any existing value
    fn put_value(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove the value under `key`. Removing a missing key is not an error.
    fn remove_value(&self, key: &str) -> Result<(), StorageError>;
}

/// Trait defining the interface for observation storage operations
///
/// Operations are infallible from the caller's point of view; storage
/// failures are absorbed by the implementation.
pub trait ObservationStorage: Send + Sync {
    /// Store a new observation, assigning its ID and clearing its sync flag
    fn save_observation(&self, observation: NewObservation) -> Observation;

    /// All observations in insertion order
    fn list_observations(&self) -> Vec<Observation>;

    /// Observations whose crop ID matches exactly, in insertion order
    fn list_observations_by_crop(&self, crop_id: &str) -> Vec<Observation>;

    /// Merge `update` into the observation with `id`.
    /// Returns false when no such observation exists.
    fn update_observation(&self, id: &str, update: ObservationUpdate) -> bool;

    /// Delete the observation with `id`.
    /// Returns true if the observation was found and deleted, false otherwise
    fn delete_observation(&self, id: &str) -> bool;

    /// Observations not yet marked as synced
    fn list_unsynced_observations(&self) -> Vec<Observation>;

    /// Mark the given observations as synced and stamp the last sync time
    fn mark_synced(&self, ids: &[String]);

    /// When observations were last marked as synced
    fn last_sync(&self) -> Option<DateTime<Utc>>;

    /// Erase the persisted document entirely
    fn clear_all(&self);
}

/// Trait defining the interface for user preference storage
pub trait PreferenceStorage: Send + Sync {
    /// The stored language, `None` when absent, unreadable or unrecognized
    fn get_language(&self) -> Option<Language>;

    /// Persist the language selection
    fn set_language(&self, language: Language);
}

/// Trait defining the interface for storage connections
///
/// This trait abstracts away the specific connection type (directory of
/// files, in-memory map) and provides factory methods for creating
/// repositories. This allows the domain layer to work with any storage
/// backend without knowing the implementation details.
pub trait Connection: Send + Sync + Clone {
    /// The type of ObservationStorage this connection creates
    type ObservationRepository: ObservationStorage + 'static;

    /// The type of PreferenceStorage this connection creates
    type PreferenceRepository: PreferenceStorage + 'static;

    /// Create an observation repository, loading the persisted document once
    fn create_observation_repository(&self) -> Self::ObservationRepository;

    /// Create a preference repository for this connection
    fn create_preference_repository(&self) -> Self::PreferenceRepository;
}
