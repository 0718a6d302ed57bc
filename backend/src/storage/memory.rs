//! # Memory Storage
//!
//! In-memory key-value store. Used by tests and by anything that wants a
//! throwaway session. Reads and writes can be made to fail on demand so the
//! best-effort behaviour of the repositories can be exercised.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use crate::storage::repositories::{ObservationRepository, PreferenceRepository};
use crate::storage::traits::{Connection, KeyValueStore, StorageError};

#[derive(Debug, Clone, Default)]
pub struct MemoryConnection {
    values: Arc<Mutex<HashMap<String, String>>>,
    fail_reads: Arc<AtomicBool>,
    fail_writes: Arc<AtomicBool>,
}

impl MemoryConnection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent read fail (or succeed again)
    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    /// Make every subsequent write and removal fail (or succeed again)
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Raw stored value, bypassing failure injection
    pub fn raw_value(&self, key: &str) -> Option<String> {
        self.values
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }
}

impl KeyValueStore for MemoryConnection {
    fn get_value(&self, key: &str) -> Result<Option<String>, StorageError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(StorageError::Unavailable(format!("read of '{}' refused", key)));
        }
        Ok(self.raw_value(key))
    }

    fn put_value(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StorageError::Unavailable(format!("write of '{}' refused", key)));
        }
        self.values
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_value(&self, key: &str) -> Result<(), StorageError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StorageError::Unavailable(format!("removal of '{}' refused", key)));
        }
        self.values
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);
        Ok(())
    }
}

impl Connection for MemoryConnection {
    type ObservationRepository = ObservationRepository<MemoryConnection>;
    type PreferenceRepository = PreferenceRepository<MemoryConnection>;

    fn create_observation_repository(&self) -> Self::ObservationRepository {
        ObservationRepository::open(self.clone())
    }

    fn create_preference_repository(&self) -> Self::PreferenceRepository {
        PreferenceRepository::new(self.clone())
    }
}
