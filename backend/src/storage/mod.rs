//! # Storage Module
//!
//! This module handles all data persistence for the app: the observation
//! document and the language preference.
//!
//! ## Layers
//!
//! - **Key-value store** ([`KeyValueStore`]): one string value per key.
//!   [`FileConnection`] keeps one file per key in the data directory,
//!   [`MemoryConnection`] keeps everything in a map.
//! - **Repositories**: [`ObservationRepository`] and [`PreferenceRepository`]
//!   turn those values into typed data and absorb storage failures.
//! - **Connection** ([`Connection`]): factory handing out repositories, so
//!   the domain layer never names a concrete backend.

pub mod file;
pub mod memory;
pub mod repositories;
pub mod traits;

#[cfg(test)]
pub mod test_utils;

pub use file::FileConnection;
pub use memory::MemoryConnection;
pub use repositories::{ObservationRepository, PreferenceRepository, LANGUAGE_KEY, OBSERVATIONS_KEY};
pub use traits::{Connection, KeyValueStore, ObservationStorage, PreferenceStorage, StorageError};
