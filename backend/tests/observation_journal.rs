//! End-to-end checks through the public API against a real data directory.

use khet_bondhu::config::AppConfig;
use khet_bondhu::domain::{HistoryFilter, RecordObservationCommand};
use khet_bondhu::initialize_backend;
use khet_bondhu::storage::{FileConnection, KeyValueStore, LANGUAGE_KEY, OBSERVATIONS_KEY};
use shared::{Language, ObservationDocument};
use tempfile::TempDir;

fn record(crop_id: &str, language: Language) -> RecordObservationCommand {
    RecordObservationCommand {
        crop_id: crop_id.to_string(),
        photos: vec![],
        notes: "Looks good".to_string(),
        notes_bangla: "ভালো দেখাচ্ছে".to_string(),
        growth_stage: "vegetative".to_string(),
        health_status: "healthy".to_string(),
        language,
    }
}

#[test]
fn observations_survive_a_restart() {
    let temp_dir = TempDir::new().unwrap();
    let data_dir = temp_dir.path().to_path_buf();

    {
        let state = initialize_backend(AppConfig::default(), Some(data_dir.clone())).unwrap();
        for _ in 0..3 {
            state.observation_service.record(record("dragon-fruit", Language::En)).unwrap();
        }
        state.observation_service.record(record("rice", Language::Bn)).unwrap();
    }

    let state = initialize_backend(AppConfig::default(), Some(data_dir.clone())).unwrap();
    let all = state.observation_service.history(&HistoryFilter::All);
    assert_eq!(all.len(), 4);
    let dragon = state
        .observation_service
        .history(&HistoryFilter::Crop("dragon-fruit".to_string()));
    assert_eq!(dragon.len(), 3);

    let rice = state.observation_service.history(&HistoryFilter::Crop("rice".to_string()));
    assert_eq!(rice[0].notes, "ভালো দেখাচ্ছে");

    // the persisted document is plain camelCase JSON
    let connection = FileConnection::new(&data_dir).unwrap();
    let raw = connection.get_value(OBSERVATIONS_KEY).unwrap().unwrap();
    assert!(raw.contains("\"cropId\""));
    let document: ObservationDocument = serde_json::from_str(&raw).unwrap();
    assert_eq!(document.observations.len(), 4);
    assert!(document.observations.iter().all(|o| !o.synced));
}

#[test]
fn language_choice_is_remembered() {
    let temp_dir = TempDir::new().unwrap();
    let data_dir = temp_dir.path().to_path_buf();

    {
        let state = initialize_backend(AppConfig::default(), Some(data_dir.clone())).unwrap();
        assert_eq!(state.language_service.current(), Language::Bn);
        assert_eq!(state.language_service.t("home", "Home", "হোম"), "হোম");

        state.language_service.toggle();
        state.language_service.toggle();
        assert_eq!(state.language_service.current(), Language::Bn);

        state.language_service.set_language(Language::En);
    }

    let connection = FileConnection::new(&data_dir).unwrap();
    assert_eq!(connection.get_value(LANGUAGE_KEY).unwrap(), Some("en".to_string()));

    let state = initialize_backend(AppConfig::default(), Some(data_dir)).unwrap();
    assert_eq!(state.language_service.current(), Language::En);
    assert_eq!(state.language_service.t("home", "Home", "হোম"), "Home");
}

#[test]
fn corrupt_document_starts_empty_and_recovers() {
    let temp_dir = TempDir::new().unwrap();
    let data_dir = temp_dir.path().to_path_buf();
    std::fs::write(data_dir.join(OBSERVATIONS_KEY), "{ not json").unwrap();

    let state = initialize_backend(AppConfig::default(), Some(data_dir.clone())).unwrap();
    assert!(state.observation_service.history(&HistoryFilter::All).is_empty());

    state.observation_service.record(record("jute", Language::En)).unwrap();
    let state = initialize_backend(AppConfig::default(), Some(data_dir)).unwrap();
    assert_eq!(state.observation_service.history(&HistoryFilter::All).len(), 1);
}
