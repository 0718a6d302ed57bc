//! Repositories built on top of a [`KeyValueStore`](crate::storage::KeyValueStore).

pub mod observation_repository;
pub mod preference_repository;

pub use observation_repository::{ObservationRepository, OBSERVATIONS_KEY};
pub use preference_repository::{PreferenceRepository, LANGUAGE_KEY};
