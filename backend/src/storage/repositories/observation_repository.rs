//! # Observation Repository
//!
//! Keeps every observation in one JSON document stored under a single key:
//!
//! ```json
//! {
//!   "observations": [
//!     { "id": "observation::1702516122000::3f2a…", "cropId": "dragon-fruit",
//!       "date": "2023-12-14T01:02:02Z", "photos": ["data:image/jpeg;base64,…"],
//!       "notes": "", "notesBangla": "…", "growthStage": "flowering",
//!       "healthStatus": "healthy", "synced": false }
//!   ],
//!   "lastSync": null
//! }
//! ```
//!
//! The document is loaded once when the repository is opened and cached in
//! memory. Every mutation changes the cache and then writes the whole
//! document back. There are no partial writes.
//!
//! Storage is best effort: an unreadable or corrupt document loads as empty,
//! and a failed write is logged while the cache keeps the new state.

use chrono::{DateTime, Utc};
use log::{debug, error, info, warn};
use shared::{NewObservation, Observation, ObservationDocument, ObservationUpdate};
use std::sync::{Mutex, MutexGuard, PoisonError};
use uuid::Uuid;

use crate::storage::traits::{KeyValueStore, ObservationStorage};

/// Storage key of the observation document
pub const OBSERVATIONS_KEY: &str = "farmer-app-data";

pub struct ObservationRepository<S: KeyValueStore> {
    store: S,
    cache: Mutex<ObservationDocument>,
}

impl<S: KeyValueStore> ObservationRepository<S> {
    /// Open the repository, reading the persisted document once
    pub fn open(store: S) -> Self {
        let document = Self::load_document(&store);
        info!(
            "Loaded {} observations (last sync: {:?})",
            document.observations.len(),
            document.last_sync
        );
        Self {
            store,
            cache: Mutex::new(document),
        }
    }

    fn load_document(store: &S) -> ObservationDocument {
        let raw = match store.get_value(OBSERVATIONS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!("No observation document stored yet");
                return ObservationDocument::default();
            }
            Err(e) => {
                warn!("Error reading observation document, starting empty: {}", e);
                return ObservationDocument::default();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(document) => document,
            Err(e) => {
                warn!("Stored observation document is corrupt, starting empty: {}", e);
                ObservationDocument::default()
            }
        }
    }

    /// Write the whole document back. Failures are logged and dropped.
    fn flush(&self, document: &ObservationDocument) {
        let payload = match serde_json::to_string(document) {
            Ok(payload) => payload,
            Err(e) => {
                error!("Error serializing observation document: {}", e);
                return;
            }
        };

        match self.store.put_value(OBSERVATIONS_KEY, &payload) {
            Ok(()) => debug!(
                "Persisted {} observations ({} bytes)",
                document.observations.len(),
                payload.len()
            ),
            Err(e) => error!("Error saving observation document: {}", e),
        }
    }

    fn document(&self) -> MutexGuard<'_, ObservationDocument> {
        self.cache.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn next_id(now: DateTime<Utc>) -> String {
        let nonce = Uuid::new_v4().simple().to_string();
        Observation::generate_id(now.timestamp_millis().max(0) as u64, &nonce)
    }
}

impl<S: KeyValueStore> ObservationStorage for ObservationRepository<S> {
    fn save_observation(&self, observation: NewObservation) -> Observation {
        let observation = observation.into_observation(Self::next_id(Utc::now()));

        let mut document = self.document();
        document.observations.push(observation.clone());
        self.flush(&document);

        info!(
            "Saved observation {} for crop '{}'",
            observation.id, observation.crop_id
        );
        observation
    }

    fn list_observations(&self) -> Vec<Observation> {
        self.document().observations.clone()
    }

    fn list_observations_by_crop(&self, crop_id: &str) -> Vec<Observation> {
        self.document()
            .observations
            .iter()
            .filter(|obs| obs.crop_id == crop_id)
            .cloned()
            .collect()
    }

    fn update_observation(&self, id: &str, update: ObservationUpdate) -> bool {
        let mut document = self.document();
        let Some(observation) = document.observations.iter_mut().find(|obs| obs.id == id) else {
            warn!("Observation not found for update: {}", id);
            return false;
        };

        update.apply_to(observation);
        self.flush(&document);
        info!("Updated observation {}", id);
        true
    }

    fn delete_observation(&self, id: &str) -> bool {
        let mut document = self.document();
        let initial_len = document.observations.len();
        document.observations.retain(|obs| obs.id != id);

        if document.observations.len() == initial_len {
            debug!("Observation not found for delete: {}", id);
            return false;
        }

        self.flush(&document);
        info!("Deleted observation {}", id);
        true
    }

    fn list_unsynced_observations(&self) -> Vec<Observation> {
        self.document()
            .observations
            .iter()
            .filter(|obs| !obs.synced)
            .cloned()
            .collect()
    }

    fn mark_synced(&self, ids: &[String]) {
        let mut document = self.document();
        let mut marked = 0;
        for observation in document.observations.iter_mut() {
            if ids.contains(&observation.id) {
                observation.synced = true;
                marked += 1;
            }
        }
        document.last_sync = Some(Utc::now());
        self.flush(&document);
        info!("Marked {} of {} requested observations as synced", marked, ids.len());
    }

    fn last_sync(&self) -> Option<DateTime<Utc>> {
        self.document().last_sync
    }

    fn clear_all(&self) {
        let mut document = self.document();
        *document = ObservationDocument::default();
        if let Err(e) = self.store.remove_value(OBSERVATIONS_KEY) {
            error!("Error removing observation document: {}", e);
        }
        info!("Cleared all observations");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory::MemoryConnection;
    use crate::storage::test_utils::{new_observation, TestEnvironment};
    use crate::storage::Connection;
    use shared::{GrowthStage, HealthStatus};
    use std::collections::HashSet;

    fn setup() -> (ObservationRepository<MemoryConnection>, MemoryConnection) {
        let connection = MemoryConnection::new();
        (connection.create_observation_repository(), connection)
    }

    #[test]
    fn test_save_appends_unsynced_with_unique_id() {
        let (repo, _connection) = setup();
        let mut seen = HashSet::new();

        for i in 0..25 {
            let before = repo.list_observations().len();
            let saved = repo.save_observation(new_observation("rice"));
            let all = repo.list_observations();

            assert_eq!(all.len(), before + 1);
            assert!(!saved.synced);
            assert!(seen.insert(saved.id.clone()), "duplicate id on save {}", i);
            assert_eq!(all.last().unwrap(), &saved);
        }
    }

    #[test]
    fn test_save_persists_whole_document() {
        let (repo, connection) = setup();
        let saved = repo.save_observation(new_observation("jute"));

        let raw = connection.raw_value(OBSERVATIONS_KEY).unwrap();
        let document: ObservationDocument = serde_json::from_str(&raw).unwrap();
        assert_eq!(document.observations, vec![saved]);
        assert_eq!(document.last_sync, None);
    }

    #[test]
    fn test_list_by_crop_is_ordered_subsequence() {
        let (repo, _connection) = setup();
        let a = repo.save_observation(new_observation("dragon-fruit"));
        repo.save_observation(new_observation("rice"));
        let b = repo.save_observation(new_observation("dragon-fruit"));
        repo.save_observation(new_observation("vegetables"));

        let dragon = repo.list_observations_by_crop("dragon-fruit");
        assert_eq!(dragon, vec![a, b]);
        assert!(repo.list_observations_by_crop("banana").is_empty());
        // exact match only
        assert!(repo.list_observations_by_crop("dragon").is_empty());
    }

    #[test]
    fn test_update_changes_only_given_fields_and_clears_sync() {
        let (repo, _connection) = setup();
        let saved = repo.save_observation(new_observation("rice"));
        repo.mark_synced(&[saved.id.clone()]);

        let updated = repo.update_observation(
            &saved.id,
            ObservationUpdate {
                health_status: Some(HealthStatus::Pest),
                ..Default::default()
            },
        );
        assert!(updated);

        let after = &repo.list_observations()[0];
        assert_eq!(after.health_status, HealthStatus::Pest);
        assert!(!after.synced);
        assert_eq!(after.id, saved.id);
        assert_eq!(after.crop_id, saved.crop_id);
        assert_eq!(after.notes, saved.notes);
        assert_eq!(after.notes_bangla, saved.notes_bangla);
        assert_eq!(after.growth_stage, saved.growth_stage);
        assert_eq!(after.photos, saved.photos);
        assert_eq!(after.date, saved.date);
    }

    #[test]
    fn test_update_unknown_id_leaves_store_untouched() {
        let (repo, connection) = setup();
        repo.save_observation(new_observation("rice"));
        let before = repo.list_observations();
        let raw_before = connection.raw_value(OBSERVATIONS_KEY);

        let updated = repo.update_observation(
            "observation::0::missing",
            ObservationUpdate {
                growth_stage: Some(GrowthStage::Harvest),
                ..Default::default()
            },
        );

        assert!(!updated);
        assert_eq!(repo.list_observations(), before);
        assert_eq!(connection.raw_value(OBSERVATIONS_KEY), raw_before);
    }

    #[test]
    fn test_delete_twice() {
        let (repo, _connection) = setup();
        let keep = repo.save_observation(new_observation("rice"));
        let gone = repo.save_observation(new_observation("rice"));

        assert!(repo.delete_observation(&gone.id));
        let ids: Vec<String> = repo.list_observations().into_iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![keep.id]);

        assert!(!repo.delete_observation(&gone.id));
    }

    #[test]
    fn test_delete_missing_does_not_write() {
        let (repo, connection) = setup();
        assert!(!repo.delete_observation("nothing"));
        assert_eq!(connection.raw_value(OBSERVATIONS_KEY), None);
    }

    #[test]
    fn test_mark_synced_only_touches_given_ids() {
        let (repo, _connection) = setup();
        let one = repo.save_observation(new_observation("rice"));
        let two = repo.save_observation(new_observation("rice"));
        let three = repo.save_observation(new_observation("jute"));
        assert_eq!(repo.last_sync(), None);

        repo.mark_synced(&[one.id.clone(), two.id.clone()]);

        let unsynced = repo.list_unsynced_observations();
        assert_eq!(unsynced.len(), 1);
        assert_eq!(unsynced[0].id, three.id);
        assert!(repo.last_sync().is_some());

        let synced: Vec<bool> = repo.list_observations().iter().map(|o| o.synced).collect();
        assert_eq!(synced, vec![true, true, false]);
    }

    #[test]
    fn test_mark_synced_stamps_last_sync_even_without_matches() {
        let (repo, _connection) = setup();
        repo.mark_synced(&["unknown".to_string()]);
        assert!(repo.last_sync().is_some());
    }

    #[test]
    fn test_clear_removes_document() {
        let (repo, connection) = setup();
        repo.save_observation(new_observation("rice"));
        repo.mark_synced(&[]);

        repo.clear_all();

        assert!(repo.list_observations().is_empty());
        assert_eq!(repo.last_sync(), None);
        assert_eq!(connection.raw_value(OBSERVATIONS_KEY), None);
    }

    #[test]
    fn test_corrupt_document_loads_empty() {
        let connection = MemoryConnection::new();
        connection.put_value(OBSERVATIONS_KEY, "{ not json").unwrap();

        let repo = connection.create_observation_repository();
        assert!(repo.list_observations().is_empty());

        // The next save replaces the corrupt document
        repo.save_observation(new_observation("rice"));
        let raw = connection.raw_value(OBSERVATIONS_KEY).unwrap();
        assert!(serde_json::from_str::<ObservationDocument>(&raw).is_ok());
    }

    #[test]
    fn test_document_with_numeric_ids_supports_every_mutation() {
        let connection = MemoryConnection::new();
        let legacy = r#"{
            "observations": [{
                "id": "1702516122000",
                "cropId": "dragon-fruit",
                "date": "2023-12-14T01:02:02.000Z",
                "photos": [],
                "notes": "",
                "notesBangla": "কুঁড়ি আসছে",
                "growthStage": "flowering",
                "healthStatus": "healthy",
                "synced": false
            }],
            "lastSync": null
        }"#;
        connection.put_value(OBSERVATIONS_KEY, legacy).unwrap();
        let id = "1702516122000".to_string();

        let repo = connection.create_observation_repository();
        assert_eq!(repo.list_observations()[0].id, id);

        assert!(repo.update_observation(
            &id,
            ObservationUpdate {
                health_status: Some(HealthStatus::Warning),
                ..Default::default()
            },
        ));
        assert_eq!(repo.list_observations()[0].health_status, HealthStatus::Warning);

        repo.mark_synced(&[id.clone()]);
        assert!(repo.list_unsynced_observations().is_empty());

        assert!(repo.delete_observation(&id));
        assert!(!repo.delete_observation(&id));

        let reopened = connection.create_observation_repository();
        assert!(reopened.list_observations().is_empty());
        assert!(reopened.last_sync().is_some());
    }

    #[test]
    fn test_read_failure_loads_empty() {
        let connection = MemoryConnection::new();
        connection
            .create_observation_repository()
            .save_observation(new_observation("rice"));

        connection.set_fail_reads(true);
        let repo = connection.create_observation_repository();
        assert!(repo.list_observations().is_empty());
    }

    #[test]
    fn test_write_failure_keeps_in_memory_result() {
        let (repo, connection) = setup();
        connection.set_fail_writes(true);

        let saved = repo.save_observation(new_observation("rice"));
        assert_eq!(repo.list_observations(), vec![saved.clone()]);
        assert_eq!(connection.raw_value(OBSERVATIONS_KEY), None);

        assert!(repo.delete_observation(&saved.id));
        assert!(repo.list_observations().is_empty());

        // Once writes work again the next mutation persists everything
        connection.set_fail_writes(false);
        let again = repo.save_observation(new_observation("jute"));
        let reopened = connection.create_observation_repository();
        assert_eq!(reopened.list_observations(), vec![again]);
    }

    #[test]
    fn test_file_backed_document_survives_reopen() {
        let env = TestEnvironment::new().unwrap();
        let saved = {
            let repo = env.connection.create_observation_repository();
            repo.save_observation(new_observation("dragon-fruit"))
        };

        let reopened = env.connection.create_observation_repository();
        assert_eq!(reopened.list_observations(), vec![saved]);
        assert!(env.base_directory().join(OBSERVATIONS_KEY).is_file());
    }
}
