//! # Observation Service
//!
//! Entry point for recording and reviewing crop observations. Raw form
//! input is validated here before it reaches the repository, so the
//! storage layer only ever sees typed values.

use chrono::Utc;
use log::{debug, info, warn};
use shared::{
    GrowthStage, HealthStatus, Language, NewObservation, Observation, ObservationUpdate,
    ParseEnumError,
};
use std::str::FromStr;

use crate::storage::traits::ObservationStorage;

#[derive(Debug, thiserror::Error)]
pub enum ObservationError {
    #[error("required field '{0}' is missing")]
    MissingField(&'static str),
    #[error("invalid growth stage: {0}")]
    InvalidGrowthStage(#[source] ParseEnumError),
    #[error("invalid health status: {0}")]
    InvalidHealthStatus(#[source] ParseEnumError),
    #[error("observation not found: {0}")]
    NotFound(String),
}

impl ObservationError {
    /// Message shown to the farmer
    pub fn user_message(&self, language: Language) -> String {
        match (self, language) {
            (ObservationError::MissingField(_), Language::Bn) => {
                "অনুগ্রহ করে সব ক্ষেত্র পূরণ করুন".to_string()
            }
            (ObservationError::MissingField(_), Language::En) => {
                "Please fill all required fields".to_string()
            }
            (ObservationError::NotFound(id), Language::Bn) => {
                format!("পর্যবেক্ষণ পাওয়া যায়নি: {}", id)
            }
            (error, _) => error.to_string(),
        }
    }
}

/// Raw observation form as entered by the user
#[derive(Debug, Clone, Default)]
pub struct RecordObservationCommand {
    pub crop_id: String,
    pub photos: Vec<String>,
    pub notes: String,
    pub notes_bangla: String,
    pub growth_stage: String,
    pub health_status: String,
    /// Language the form was filled in
    pub language: Language,
}

/// Raw partial edit; empty strings and `None` leave the field unchanged
#[derive(Debug, Clone, Default)]
pub struct AmendObservationCommand {
    pub crop_id: Option<String>,
    pub photos: Option<Vec<String>>,
    pub notes: Option<String>,
    pub notes_bangla: Option<String>,
    pub growth_stage: Option<String>,
    pub health_status: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryFilter {
    All,
    Crop(String),
}

/// Observation counts per health status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HealthSummary {
    pub healthy: usize,
    pub warning: usize,
    pub disease: usize,
    pub pest: usize,
}

impl HealthSummary {
    pub fn count(&self, status: HealthStatus) -> usize {
        match status {
            HealthStatus::Healthy => self.healthy,
            HealthStatus::Warning => self.warning,
            HealthStatus::Disease => self.disease,
            HealthStatus::Pest => self.pest,
        }
    }

    pub fn total(&self) -> usize {
        self.healthy + self.warning + self.disease + self.pest
    }
}

fn parse_growth_stage(raw: &str) -> Result<GrowthStage, ObservationError> {
    if raw.trim().is_empty() {
        return Err(ObservationError::MissingField("growth_stage"));
    }
    GrowthStage::from_str(raw).map_err(ObservationError::InvalidGrowthStage)
}

fn parse_health_status(raw: &str) -> Result<HealthStatus, ObservationError> {
    if raw.trim().is_empty() {
        return Err(ObservationError::MissingField("health_status"));
    }
    HealthStatus::from_str(raw).map_err(ObservationError::InvalidHealthStatus)
}

/// Service for the observation lifecycle
pub struct ObservationService<O: ObservationStorage> {
    observations: O,
}

impl<O: ObservationStorage> ObservationService<O> {
    pub fn new(observations: O) -> Self {
        Self { observations }
    }

    /// Validate and store a new observation dated now
    pub fn record(
        &self,
        command: RecordObservationCommand,
    ) -> Result<Observation, ObservationError> {
        info!("Recording observation for crop '{}'", command.crop_id);

        if command.crop_id.trim().is_empty() {
            return Err(ObservationError::MissingField("crop_id"));
        }
        let growth_stage = parse_growth_stage(&command.growth_stage)?;
        let health_status = parse_health_status(&command.health_status)?;

        // A Bangla form writes its Bangla note into both fields
        let notes = match command.language {
            Language::Bn => command.notes_bangla.clone(),
            Language::En => command.notes,
        };

        let observation = self.observations.save_observation(NewObservation {
            crop_id: command.crop_id.trim().to_string(),
            date: Utc::now(),
            photos: command.photos,
            notes,
            notes_bangla: command.notes_bangla,
            growth_stage,
            health_status,
        });

        info!("Recorded observation {}", observation.id);
        Ok(observation)
    }

    /// Observations matching `filter`, newest first
    pub fn history(&self, filter: &HistoryFilter) -> Vec<Observation> {
        let mut observations = match filter {
            HistoryFilter::All => self.observations.list_observations(),
            HistoryFilter::Crop(crop_id) => self.observations.list_observations_by_crop(crop_id),
        };
        observations.sort_by(|a, b| b.date.cmp(&a.date));
        observations
    }

    /// Count `observations` per health status
    pub fn summary(&self, observations: &[Observation]) -> HealthSummary {
        observations
            .iter()
            .fold(HealthSummary::default(), |mut summary, observation| {
                match observation.health_status {
                    HealthStatus::Healthy => summary.healthy += 1,
                    HealthStatus::Warning => summary.warning += 1,
                    HealthStatus::Disease => summary.disease += 1,
                    HealthStatus::Pest => summary.pest += 1,
                }
                summary
            })
    }

    /// Apply a partial edit to an existing observation
    pub fn amend(
        &self,
        id: &str,
        command: AmendObservationCommand,
    ) -> Result<(), ObservationError> {
        info!("Amending observation {}", id);

        let non_blank = |value: Option<String>| value.filter(|v| !v.trim().is_empty());

        let update = ObservationUpdate {
            crop_id: non_blank(command.crop_id).map(|crop_id| crop_id.trim().to_string()),
            date: None,
            photos: command.photos,
            notes: command.notes,
            notes_bangla: command.notes_bangla,
            growth_stage: non_blank(command.growth_stage)
                .map(|raw| parse_growth_stage(&raw))
                .transpose()?,
            health_status: non_blank(command.health_status)
                .map(|raw| parse_health_status(&raw))
                .transpose()?,
        };

        if update.is_empty() {
            debug!("Amending {} without field changes, only the sync flag resets", id);
        }

        if !self.observations.update_observation(id, update) {
            warn!("Observation not found: {}", id);
            return Err(ObservationError::NotFound(id.to_string()));
        }
        Ok(())
    }

    /// Delete an observation. Returns false when it did not exist.
    pub fn remove(&self, id: &str) -> bool {
        self.observations.delete_observation(id)
    }

    pub fn pending_sync(&self) -> Vec<Observation> {
        self.observations.list_unsynced_observations()
    }

    pub fn mark_synced(&self, ids: &[String]) {
        self.observations.mark_synced(ids);
    }

    pub fn last_sync(&self) -> Option<chrono::DateTime<Utc>> {
        self.observations.last_sync()
    }

    /// Erase every stored observation
    pub fn reset(&self) {
        warn!("Clearing all observations");
        self.observations.clear_all();
    }
}
