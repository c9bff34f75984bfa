//! Widget configuration.
//!
//! Row count, filler minimum, and the pickup animation toggle are all
//! data, so one component covers every shelf variant.

use crate::layout::{DEFAULT_ROWS, MIN_SLOTS_PER_ROW};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Errors raised while loading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Shelf widget configuration, loadable from JSON.
///
/// Every field has a default, so a partial (or absent) file is fine.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ShelfConfig {
    /// Number of shelf rows (clamped to at least 1 at layout build).
    pub rows: usize,
    /// Minimum total slots per row after filler padding.
    pub min_slots_per_row: usize,
    /// Whether selecting an item lifts it off the shelf.
    pub pickup_animation: bool,
    /// Directory cover images are resolved against.
    pub image_dir: String,
    /// Path of the JSON catalog file.
    pub catalog_path: String,
}

impl Default for ShelfConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            min_slots_per_row: MIN_SLOTS_PER_ROW,
            pickup_animation: true,
            image_dir: "images".to_string(),
            catalog_path: "catalog.json".to_string(),
        }
    }
}

impl ShelfConfig {
    /// Load configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("Failed to read {}: {}", path.display(), e)))?;
        serde_json::from_str(&json)
            .map_err(|e| ConfigError::Parse(format!("Failed to parse {}: {}", path.display(), e)))
    }

    /// Load configuration, falling back to defaults when the file is
    /// missing or invalid. Intended for the application boundary, where
    /// a bad config should degrade rather than abort.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            log::info!("no config at {}, using defaults", path.display());
            return Self::default();
        }
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("{}; using defaults", e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ShelfConfig::default();
        assert_eq!(config.rows, 3);
        assert_eq!(config.min_slots_per_row, 5);
        assert!(config.pickup_animation);
        assert_eq!(config.image_dir, "images");
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shelfcase.json");
        std::fs::write(&path, r#"{"rows": 4, "pickup_animation": false}"#).unwrap();

        let config = ShelfConfig::load(&path).unwrap();
        assert_eq!(config.rows, 4);
        assert!(!config.pickup_animation);
        assert_eq!(config.min_slots_per_row, 5);
        assert_eq!(config.catalog_path, "catalog.json");
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "rows = 4").unwrap();

        assert!(matches!(ShelfConfig::load(&path), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_or_default_absorbs_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = ShelfConfig::load_or_default(dir.path().join("absent.json"));
        assert_eq!(config.rows, 3);
    }
}
