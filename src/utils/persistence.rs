//! JSON persistence for rig settings.
//!
//! Files live in the platform config directory:
//! - macOS: ~/Library/Application Support/tpc_camera/
//! - Linux: ~/.config/tpc_camera/
//! - Windows: %APPDATA%/tpc_camera/

use std::path::{Path, PathBuf};

use bevy::log::{error, info};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::RigError;

const APP_DIR_NAME: &str = "tpc_camera";

/// Returns the platform-specific directory for settings files.
pub fn settings_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_DIR_NAME);
        path
    })
}

/// Returns the platform-specific path for a named settings file.
pub fn settings_path(file_name: &str) -> Option<PathBuf> {
    settings_dir().map(|mut path| {
        path.push(file_name);
        path
    })
}

/// Reads and parses a JSON file.
///
/// Returns `None` when the file does not exist or cannot be parsed; parse
/// and IO failures are logged.
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Option<T> {
    if !path.exists() {
        return None;
    }

    match std::fs::read_to_string(path) {
        Ok(contents) => match serde_json::from_str(&contents) {
            Ok(value) => {
                info!("Loaded settings from {:?}", path);
                Some(value)
            }
            Err(e) => {
                error!("Failed to parse {:?}: {}", path, e);
                None
            }
        },
        Err(e) => {
            error!("Failed to read {:?}: {}", path, e);
            None
        }
    }
}

/// Serializes `value` as pretty JSON into `path`, creating parent directories.
pub fn save_json<T: Serialize>(value: &T, path: &Path) -> Result<(), RigError> {
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() && !dir.exists() {
            std::fs::create_dir_all(dir)
                .map_err(|e| RigError::Persistence(format!("Failed to create {:?}: {}", dir, e)))?;
            info!("Created settings directory: {:?}", dir);
        }
    }

    let json = serde_json::to_string_pretty(value)
        .map_err(|e| RigError::Persistence(format!("Failed to serialize settings: {}", e)))?;
    std::fs::write(path, json)
        .map_err(|e| RigError::Persistence(format!("Failed to write {:?}: {}", path, e)))?;

    info!("Saved settings to {:?}", path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_loads_none() {
        let path = std::env::temp_dir().join("tpc_camera_missing_settings_file.json");
        let _ = std::fs::remove_file(&path);
        let loaded: Option<Vec<f32>> = load_json(&path);
        assert!(loaded.is_none());
    }

    #[test]
    fn test_save_then_load() {
        let dir = std::env::temp_dir().join("tpc_camera_persistence_test");
        let path = dir.join("values.json");
        save_json(&vec![1.0_f32, 2.5], &path).unwrap();

        let loaded: Option<Vec<f32>> = load_json(&path);
        assert_eq!(loaded, Some(vec![1.0, 2.5]));
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_garbage_file_loads_none() {
        let dir = std::env::temp_dir().join("tpc_camera_persistence_garbage");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();

        let loaded: Option<Vec<f32>> = load_json(&path);
        assert!(loaded.is_none());
        let _ = std::fs::remove_dir_all(&dir);
    }
}
