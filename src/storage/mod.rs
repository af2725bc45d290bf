//! Snapshot persistence.
//!
//! The configuration and the match list are stored as two independent JSON
//! documents so a caller can restore full tournament state from them.
//! Persistence is best-effort: a failed save never invalidates the
//! in-memory schedule.

use std::path::PathBuf;
use thiserror::Error;

mod snapshot;

pub use snapshot::*;

/// Errors that can occur during snapshot operations.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Snapshot not found in {0}")]
    SnapshotNotFound(PathBuf),
}

/// Configuration for snapshot paths.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub data_dir: PathBuf,
}

impl StorageConfig {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    /// Path of the tournament configuration document.
    pub fn config_path(&self) -> PathBuf {
        self.data_dir.join("config.json")
    }

    /// Path of the match list document.
    pub fn matches_path(&self) -> PathBuf {
        self.data_dir.join("matches.json")
    }
}
