use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Display language for every bilingual text in the app.
///
/// Persisted as its bare two-letter code (`"bn"` / `"en"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Bn,
    En,
}

impl Language {
    /// Two-letter code used for persistence and the command line
    pub fn code(&self) -> &'static str {
        match self {
            Language::Bn => "bn",
            Language::En => "en",
        }
    }

    /// Parse a stored or typed code. Case-sensitive, `None` for anything else.
    pub fn from_code(code: &str) -> Option<Language> {
        match code {
            "bn" => Some(Language::Bn),
            "en" => Some(Language::En),
            _ => None,
        }
    }

    /// English name of the language
    pub fn name(&self) -> &'static str {
        match self {
            Language::Bn => "Bangla",
            Language::En => "English",
        }
    }

    /// Name of the language written in that language
    pub fn native_name(&self) -> &'static str {
        match self {
            Language::Bn => "বাংলা",
            Language::En => "English",
        }
    }

    /// All languages, in toggle order
    pub fn all() -> &'static [Language] {
        &[Language::Bn, Language::En]
    }

    /// The language after this one in toggle order, wrapping around
    pub fn next(&self) -> Language {
        let all = Language::all();
        let index = all.iter().position(|lang| lang == self).unwrap_or(0);
        all[(index + 1) % all.len()]
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::Bn
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Language {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::from_code(s.trim()).ok_or_else(|| ParseEnumError::new("language", s))
    }
}

/// Raised when a loosely typed value (form input, command line argument)
/// does not name a member of one of the closed enumerations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized {kind} '{value}'")]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub value: String,
}

impl ParseEnumError {
    pub fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

/// Growth stage recorded with an observation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GrowthStage {
    Nursery,
    Vegetative,
    Flowering,
    Fruiting,
    Harvest,
}

impl GrowthStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            GrowthStage::Nursery => "nursery",
            GrowthStage::Vegetative => "vegetative",
            GrowthStage::Flowering => "flowering",
            GrowthStage::Fruiting => "fruiting",
            GrowthStage::Harvest => "harvest",
        }
    }

    pub fn all() -> &'static [GrowthStage] {
        &[
            GrowthStage::Nursery,
            GrowthStage::Vegetative,
            GrowthStage::Flowering,
            GrowthStage::Fruiting,
            GrowthStage::Harvest,
        ]
    }

    /// Short label as shown in the observation history
    pub fn label(&self, language: Language) -> &'static str {
        let (english, bangla) = match self {
            GrowthStage::Nursery => ("Nursery", "নার্সারি"),
            GrowthStage::Vegetative => ("Vegetative", "উদ্ভিদ বৃদ্ধি"),
            GrowthStage::Flowering => ("Flowering", "ফুল ফোটা"),
            GrowthStage::Fruiting => ("Fruiting", "ফল ধরা"),
            GrowthStage::Harvest => ("Harvest", "ফসল তোলা"),
        };
        match language {
            Language::Bn => bangla,
            Language::En => english,
        }
    }
}

impl fmt::Display for GrowthStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for GrowthStage {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();
        GrowthStage::all()
            .iter()
            .copied()
            .find(|stage| stage.as_str() == value)
            .ok_or_else(|| ParseEnumError::new("growth stage", s))
    }
}

/// Health status recorded with an observation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Warning,
    Disease,
    Pest,
}

impl HealthStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            HealthStatus::Healthy => "healthy",
            HealthStatus::Warning => "warning",
            HealthStatus::Disease => "disease",
            HealthStatus::Pest => "pest",
        }
    }

    pub fn all() -> &'static [HealthStatus] {
        &[
            HealthStatus::Healthy,
            HealthStatus::Warning,
            HealthStatus::Disease,
            HealthStatus::Pest,
        ]
    }

    /// Long label used on observation cards
    pub fn label(&self, language: Language) -> &'static str {
        let (english, bangla) = match self {
            HealthStatus::Healthy => ("Healthy", "সুস্থ"),
            HealthStatus::Warning => ("Needs Attention", "সতর্কতা প্রয়োজন"),
            HealthStatus::Disease => ("Disease Symptoms", "রোগের লক্ষণ"),
            HealthStatus::Pest => ("Pest Problem", "পোকামাকড়ের সমস্যা"),
        };
        match language {
            Language::Bn => bangla,
            Language::En => english,
        }
    }

    /// One-word label used in the history summary
    pub fn short_label(&self, language: Language) -> &'static str {
        let (english, bangla) = match self {
            HealthStatus::Healthy => ("Healthy", "সুস্থ"),
            HealthStatus::Warning => ("Warning", "সতর্কতা"),
            HealthStatus::Disease => ("Disease", "রোগ"),
            HealthStatus::Pest => ("Pest", "পোকা"),
        };
        match language {
            Language::Bn => bangla,
            Language::En => english,
        }
    }
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for HealthStatus {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();
        HealthStatus::all()
            .iter()
            .copied()
            .find(|status| status.as_str() == value)
            .ok_or_else(|| ParseEnumError::new("health status", s))
    }
}

/// Observation ID in format: "observation::epoch_millis::nonce"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Observation {
    pub id: String,
    /// Soft reference to a crop in the catalog, not enforced
    pub crop_id: String,
    pub date: DateTime<Utc>,
    /// Embedded images as data URLs (`data:image/jpeg;base64,...`)
    pub photos: Vec<String>,
    pub notes: String,
    pub notes_bangla: String,
    pub growth_stage: GrowthStage,
    pub health_status: HealthStatus,
    /// Placeholder for remote sync, which does not exist yet
    pub synced: bool,
}

/// An observation as entered by the user, before the store assigns
/// an ID and the sync flag.
#[derive(Debug, Clone, PartialEq)]
pub struct NewObservation {
    pub crop_id: String,
    pub date: DateTime<Utc>,
    pub photos: Vec<String>,
    pub notes: String,
    pub notes_bangla: String,
    pub growth_stage: GrowthStage,
    pub health_status: HealthStatus,
}

impl NewObservation {
    pub fn into_observation(self, id: String) -> Observation {
        Observation {
            id,
            crop_id: self.crop_id,
            date: self.date,
            photos: self.photos,
            notes: self.notes,
            notes_bangla: self.notes_bangla,
            growth_stage: self.growth_stage,
            health_status: self.health_status,
            synced: false,
        }
    }
}

/// Partial update of an observation; `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObservationUpdate {
    pub crop_id: Option<String>,
    pub date: Option<DateTime<Utc>>,
    pub photos: Option<Vec<String>>,
    pub notes: Option<String>,
    pub notes_bangla: Option<String>,
    pub growth_stage: Option<GrowthStage>,
    pub health_status: Option<HealthStatus>,
}

impl ObservationUpdate {
    pub fn is_empty(&self) -> bool {
        self == &ObservationUpdate::default()
    }

    /// Merge the present fields into `observation` and clear its sync flag
    pub fn apply_to(self, observation: &mut Observation) {
        if let Some(crop_id) = self.crop_id {
            observation.crop_id = crop_id;
        }
        if let Some(date) = self.date {
            observation.date = date;
        }
        if let Some(photos) = self.photos {
            observation.photos = photos;
        }
        if let Some(notes) = self.notes {
            observation.notes = notes;
        }
        if let Some(notes_bangla) = self.notes_bangla {
            observation.notes_bangla = notes_bangla;
        }
        if let Some(growth_stage) = self.growth_stage {
            observation.growth_stage = growth_stage;
        }
        if let Some(health_status) = self.health_status {
            observation.health_status = health_status;
        }
        observation.synced = false;
    }
}

/// The single persisted document holding every observation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObservationDocument {
    pub observations: Vec<Observation>,
    pub last_sync: Option<DateTime<Utc>>,
}

impl Observation {
    /// Generate an observation ID from the creation time and a unique nonce
    pub fn generate_id(epoch_millis: u64, nonce: &str) -> String {
        format!("observation::{}::{}", epoch_millis, nonce)
    }
}

/// Kind of farm task a reminder is about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReminderKind {
    Watering,
    Fertilizer,
    Pesticide,
    Harvest,
    Weather,
}

/// A farm task reminder. Held in memory only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reminder {
    pub id: String,
    pub kind: ReminderKind,
    pub title: String,
    pub title_bangla: String,
    pub description: String,
    pub description_bangla: String,
    pub due_date: DateTime<Utc>,
    pub is_completed: bool,
    pub crop_id: Option<String>,
}

/// Snapshot of local weather conditions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherData {
    /// Degrees Celsius
    pub temperature: f64,
    /// Relative humidity in percent
    pub humidity: f64,
    pub condition: String,
    pub condition_bangla: String,
    /// Millimetres
    pub rainfall: f64,
    /// Kilometres per hour
    pub wind_speed: f64,
}
