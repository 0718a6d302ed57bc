//! # Khet Bondhu Backend
//!
//! Contains all non-UI logic of the bilingual farmer assistant.
//!
//! This crate brings together:
//! - **Domain**: Observations, localization, navigation and the static crop guide
//! - **Storage**: Persistence of the observation document and language preference
//! - **IO**: The terminal frontend that exposes the domain to the farmer
//!
//! ## Architecture
//!
//! ```text
//! Terminal (clap commands, interactive browser)
//!     ↓
//! IO Layer (screens, photo encoding)
//!     ↓
//! Domain Layer (services, router, content)
//!     ↓
//! Storage Layer (repositories over a key-value store)
//! ```

pub mod config;
pub mod domain;
pub mod io;
pub mod storage;

use anyhow::Result;
use log::info;
use std::path::PathBuf;

use crate::config::AppConfig;
use crate::domain::{LanguageService, ObservationService};
use crate::storage::{Connection, FileConnection};

/// Main application state that holds all services
pub struct AppState<C: Connection> {
    pub observation_service: ObservationService<C::ObservationRepository>,
    pub language_service: LanguageService<C::PreferenceRepository>,
    pub config: AppConfig,
}

impl<C: Connection> AppState<C> {
    /// Wire the services to `connection`
    pub fn with_connection(connection: &C, config: AppConfig) -> Self {
        let observation_service =
            ObservationService::new(connection.create_observation_repository());
        let language_service = LanguageService::load(
            connection.create_preference_repository(),
            config.default_language,
        );

        Self {
            observation_service,
            language_service,
            config,
        }
    }
}

/// Directory the app keeps its data in: the override, else the configured
/// directory, else the platform data directory
pub fn resolve_data_directory(
    config: &AppConfig,
    data_dir_override: Option<PathBuf>,
) -> Result<PathBuf> {
    match data_dir_override.or_else(|| config.data_directory.clone()) {
        Some(directory) => Ok(directory),
        None => FileConnection::default_directory(),
    }
}

/// Initialize the backend with all required services
pub fn initialize_backend(
    config: AppConfig,
    data_dir_override: Option<PathBuf>,
) -> Result<AppState<FileConnection>> {
    info!("Setting up storage");
    let data_directory = resolve_data_directory(&config, data_dir_override)?;
    let connection = FileConnection::new(&data_directory)?;

    info!("Setting up application state");
    Ok(AppState::with_connection(&connection, config))
}
