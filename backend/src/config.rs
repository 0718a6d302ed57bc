//! # Configuration
//!
//! Optional YAML file read once at startup.
//!
//! ## YAML Format
//!
//! ```yaml
//! data_directory: "/home/farmer/.local/share/khet-bondhu"
//! default_language: "bn"
//! data_format_version: "1.0"
//! ```
//!
//! Every field may be left out. Without a file the defaults apply.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use shared::Language;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::storage::file::APP_DIRECTORY_NAME;

pub const CONFIG_FILE_NAME: &str = "config.yaml";

pub const DATA_FORMAT_VERSION: &str = "1.0";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file {0} does not exist")]
    NotFound(PathBuf),
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Where the observation document and language preference are kept.
    /// `None` means the platform data directory.
    pub data_directory: Option<PathBuf>,
    /// Language used until the farmer picks one
    pub default_language: Language,
    /// Data format version for future migrations
    pub data_format_version: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_directory: None,
            default_language: Language::Bn,
            data_format_version: DATA_FORMAT_VERSION.to_string(),
        }
    }
}

impl AppConfig {
    /// Platform location of the config file, if the platform has one
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIRECTORY_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load the config from `path`, or from the platform location when no
    /// path is given. A missing file at the platform location yields the
    /// defaults; a missing file that was asked for explicitly is an error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigError::NotFound(path.to_path_buf()));
                }
                Self::read(path)
            }
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::read(&path),
                _ => {
                    debug!("No config file found, using defaults");
                    Ok(Self::default())
                }
            },
        }
    }

    fn read(path: &Path) -> Result<Self, ConfigError> {
        let yaml_content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml(&yaml_content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        info!("Loaded config from {:?}", path);
        if !config.is_current_format() {
            warn!(
                "Config data format version {} differs from supported version {}",
                config.data_format_version, DATA_FORMAT_VERSION
            );
        }
        Ok(config)
    }

    /// Whether the data format version matches the one this build writes
    pub fn is_current_format(&self) -> bool {
        self.data_format_version == DATA_FORMAT_VERSION
    }

    pub fn from_yaml(yaml_content: &str) -> Result<Self, serde_yaml::Error> {
        // An empty file parses as null, which is not a mapping
        if yaml_content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml_content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.data_directory, None);
        assert_eq!(config.default_language, Language::Bn);
        assert_eq!(config.data_format_version, "1.0");
    }

    #[test]
    fn test_partial_yaml_keeps_other_defaults() {
        let config = AppConfig::from_yaml("default_language: en\n").unwrap();
        assert_eq!(config.default_language, Language::En);
        assert_eq!(config.data_directory, None);
        assert_eq!(config.data_format_version, "1.0");

        assert_eq!(AppConfig::from_yaml("").unwrap(), AppConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE_NAME);
        fs::write(
            &path,
            "data_directory: /tmp/khet\ndefault_language: en\ndata_format_version: \"1.0\"\n",
        )
        .unwrap();

        let config = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(config.data_directory, Some(PathBuf::from("/tmp/khet")));
        assert_eq!(config.default_language, Language::En);
    }

    #[test]
    fn test_other_format_version_still_loads() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "data_format_version: \"2.0\"\n").unwrap();

        let config = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(config.data_format_version, "2.0");
        assert!(!config.is_current_format());
        assert!(AppConfig::default().is_current_format());
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "default_language: fr\n").unwrap();

        let result = AppConfig::load(Some(&path));
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_explicit_missing_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("absent.yaml");

        let result = AppConfig::load(Some(&path));
        assert!(matches!(result, Err(ConfigError::NotFound(_))));
    }
}
