use anyhow::Result;
use log::{debug, info};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::storage::repositories::{ObservationRepository, PreferenceRepository};
use crate::storage::traits::{Connection, KeyValueStore, StorageError};

/// Name of the application directory under the platform data directory
pub const APP_DIRECTORY_NAME: &str = "khet-bondhu";

/// FileConnection maps every storage key to one file in a data directory
#[derive(Debug, Clone)]
pub struct FileConnection {
    base_directory: Arc<PathBuf>,
}

impl FileConnection {
    /// Create a new file connection with a base directory
    pub fn new<P: AsRef<Path>>(base_directory: P) -> Result<Self> {
        let base_path = base_directory.as_ref().to_path_buf();

        // Create the base directory if it doesn't exist
        if !base_path.exists() {
            fs::create_dir_all(&base_path)?;
            info!("Created data directory: {}", base_path.display());
        }

        Ok(Self {
            base_directory: Arc::new(base_path),
        })
    }

    /// The platform data directory for the app
    /// (`~/.local/share/khet-bondhu` on Linux)
    pub fn default_directory() -> Result<PathBuf> {
        let data_dir = dirs::data_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine the platform data directory"))?;
        Ok(data_dir.join(APP_DIRECTORY_NAME))
    }

    /// Get the base directory path
    pub fn base_directory(&self) -> &Path {
        &self.base_directory
    }

    /// Get the file path backing a storage key
    pub fn path_for_key(&self, key: &str) -> Result<PathBuf, StorageError> {
        let valid = !key.is_empty()
            && !key.starts_with('.')
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));
        if !valid {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(self.base_directory.join(key))
    }
}

fn io_error(path: &Path, source: io::Error) -> StorageError {
    StorageError::Io {
        path: path.to_path_buf(),
        source,
    }
}

impl KeyValueStore for FileConnection {
    fn get_value(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for_key(key)?;
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(io_error(&path, e)),
        }
    }

    fn put_value(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for_key(key)?;
        fs::create_dir_all(self.base_directory.as_path())
            .map_err(|e| io_error(&self.base_directory, e))?;

        // Use atomic write pattern: write to temp file, then rename
        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, value).map_err(|e| io_error(&temp_path, e))?;
        fs::rename(&temp_path, &path).map_err(|e| io_error(&path, e))?;

        debug!("Wrote {} bytes to {}", value.len(), path.display());
        Ok(())
    }

    fn remove_value(&self, key: &str) -> Result<(), StorageError> {
        let path = self.path_for_key(key)?;
        match fs::remove_file(&path) {
            Ok(()) => {
                debug!("Removed {}", path.display());
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(io_error(&path, e)),
        }
    }
}

impl Connection for FileConnection {
    type ObservationRepository = ObservationRepository<FileConnection>;
    type PreferenceRepository = PreferenceRepository<FileConnection>;

    fn create_observation_repository(&self) -> Self::ObservationRepository {
        ObservationRepository::open(self.clone())
    }

    fn create_preference_repository(&self) -> Self::PreferenceRepository {
        PreferenceRepository::new(self.clone())
    }
}
