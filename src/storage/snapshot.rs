//! Reading and writing the two-document tournament snapshot.

use std::fs;

use tracing::{debug, info};

use crate::config::TournamentConfig;
use crate::models::Match;

use super::{StorageConfig, StorageError};

/// Write the configuration and match list, replacing any previous snapshot.
pub fn save_snapshot(
    storage: &StorageConfig,
    config: &TournamentConfig,
    matches: &[Match],
) -> Result<(), StorageError> {
    fs::create_dir_all(&storage.data_dir)?;

    let config_json = serde_json::to_string_pretty(config)?;
    fs::write(storage.config_path(), config_json)?;

    let matches_json = serde_json::to_string_pretty(matches)?;
    fs::write(storage.matches_path(), matches_json)?;

    info!(
        dir = %storage.data_dir.display(),
        matches = matches.len(),
        "Saved tournament snapshot"
    );
    Ok(())
}

/// Write only the match list, leaving the configuration document untouched.
pub fn save_matches(storage: &StorageConfig, matches: &[Match]) -> Result<(), StorageError> {
    fs::create_dir_all(&storage.data_dir)?;

    let matches_json = serde_json::to_string_pretty(matches)?;
    fs::write(storage.matches_path(), matches_json)?;

    debug!(dir = %storage.data_dir.display(), "Saved match list");
    Ok(())
}

/// Load a previously saved snapshot.
pub fn load_snapshot(
    storage: &StorageConfig,
) -> Result<(TournamentConfig, Vec<Match>), StorageError> {
    let config_path = storage.config_path();
    if !config_path.exists() {
        return Err(StorageError::SnapshotNotFound(storage.data_dir.clone()));
    }

    let config: TournamentConfig = serde_json::from_str(&fs::read_to_string(config_path)?)?;

    let matches_path = storage.matches_path();
    let matches: Vec<Match> = if matches_path.exists() {
        serde_json::from_str(&fs::read_to_string(matches_path)?)?
    } else {
        Vec::new()
    };

    debug!(
        dir = %storage.data_dir.display(),
        matches = matches.len(),
        "Loaded tournament snapshot"
    );
    Ok((config, matches))
}

/// Remove both snapshot documents. Missing files are not an error.
pub fn clear_snapshot(storage: &StorageConfig) -> Result<(), StorageError> {
    for path in [storage.config_path(), storage.matches_path()] {
        if path.exists() {
            fs::remove_file(path)?;
        }
    }
    info!(dir = %storage.data_dir.display(), "Cleared tournament snapshot");
    Ok(())
}
