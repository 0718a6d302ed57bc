/// Test utilities module for automatic cleanup and consistent test infrastructure
///
/// This module provides RAII-based cleanup that guarantees test data is removed
/// even if tests panic or fail.
use anyhow::Result;
use chrono::Utc;
use shared::{GrowthStage, HealthStatus, NewObservation};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use super::file::FileConnection;

/// RAII Test Environment that automatically cleans up on drop
pub struct TestEnvironment {
    /// The temporary directory - kept alive to prevent auto-cleanup until drop
    _temp_dir: TempDir,
    /// The file connection for the test
    pub connection: FileConnection,
    /// Base directory path for manual inspection if needed
    pub base_path: PathBuf,
}

impl TestEnvironment {
    /// Create a new test environment with automatic cleanup
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let base_path = temp_dir.path().to_path_buf();
        let connection = FileConnection::new(&base_path)?;

        Ok(TestEnvironment {
            _temp_dir: temp_dir,
            connection,
            base_path,
        })
    }

    /// Get the base directory path for this test environment
    pub fn base_directory(&self) -> &Path {
        &self.base_path
    }
}

/// A filled-in observation for `crop_id`
pub fn new_observation(crop_id: &str) -> NewObservation {
    NewObservation {
        crop_id: crop_id.to_string(),
        date: Utc::now(),
        photos: vec!["data:image/png;base64,iVBORw0KGgo=".to_string()],
        notes: "Leaves look fine".to_string(),
        notes_bangla: "পাতা ভালো আছে".to_string(),
        growth_stage: GrowthStage::Vegetative,
        health_status: HealthStatus::Healthy,
    }
}
