use std::path::Path;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::RigError;
use crate::utils::persistence;

const PRESETS_FILE_NAME: &str = "shake_presets.json";

/// Volatility, strength and decay rate of one camera shake.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShakePreset {
    /// How quickly the shake moves through the noise field.
    pub volatility: f32,
    /// Multiplier on the noise samples, which lie in [-1, 1].
    pub strength: f32,
    /// Lerp rate pulling the shake strength back to zero.
    pub decay_rate: f32,
}

impl ShakePreset {
    pub fn new(volatility: f32, strength: f32, decay_rate: f32) -> Self {
        Self {
            volatility,
            strength,
            decay_rate,
        }
    }

    fn is_valid(&self) -> bool {
        [self.volatility, self.strength, self.decay_rate]
            .iter()
            .all(|v| v.is_finite() && *v >= 0.0)
    }
}

/// Ordered shake presets, selected by index. Loaded once, read-only after.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<ShakePreset>", into = "Vec<ShakePreset>")]
pub struct ShakePresetTable {
    presets: Vec<ShakePreset>,
}

impl Default for ShakePresetTable {
    /// Light rumble, hit, explosion.
    fn default() -> Self {
        Self {
            presets: vec![
                ShakePreset::new(5.0, 0.05, 3.0),
                ShakePreset::new(20.0, 0.2, 5.0),
                ShakePreset::new(40.0, 0.6, 4.0),
            ],
        }
    }
}

impl TryFrom<Vec<ShakePreset>> for ShakePresetTable {
    type Error = RigError;

    fn try_from(presets: Vec<ShakePreset>) -> Result<Self, Self::Error> {
        Self::new(presets)
    }
}

impl From<ShakePresetTable> for Vec<ShakePreset> {
    fn from(table: ShakePresetTable) -> Self {
        table.presets
    }
}

impl ShakePresetTable {
    /// Builds a table, rejecting presets with negative or non-finite values.
    pub fn new(presets: Vec<ShakePreset>) -> Result<Self, RigError> {
        if let Some(index) = presets.iter().position(|p| !p.is_valid()) {
            return Err(RigError::InvalidConfig(format!(
                "shake preset {} has a negative or non-finite value",
                index
            )));
        }
        Ok(Self { presets })
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ShakePreset> {
        self.presets.iter()
    }

    /// Looks up a preset; out-of-range indices are an error, never clamped.
    pub fn get(&self, index: usize) -> Result<&ShakePreset, RigError> {
        self.presets.get(index).ok_or(RigError::PresetOutOfRange {
            index,
            len: self.presets.len(),
        })
    }

    /// Loads presets from `path`, or from the default settings location.
    /// Falls back to the built-in presets when the file is absent or invalid.
    pub fn load_from_file(path: Option<&Path>) -> Self {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => match persistence::settings_path(PRESETS_FILE_NAME) {
                Some(path) => path,
                None => {
                    warn!("Could not determine settings directory, using default shake presets");
                    return Self::default();
                }
            },
        };

        // Invalid presets fail deserialization and are logged by the loader.
        match persistence::load_json::<Self>(&path) {
            Some(table) => {
                info!("Loaded {} shake presets", table.len());
                table
            }
            None => Self::default(),
        }
    }

    pub fn save_to_file(&self, path: Option<&Path>) -> Result<(), RigError> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => persistence::settings_path(PRESETS_FILE_NAME).ok_or_else(|| {
                RigError::Persistence("Could not determine settings directory".to_string())
            })?,
        };
        persistence::save_json(self, &path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table() {
        let table = ShakePresetTable::default();
        assert_eq!(table.len(), 3);
        assert!(table.get(2).is_ok());
    }

    #[test]
    fn test_out_of_range_index() {
        let table = ShakePresetTable::default();
        assert_eq!(
            table.get(99),
            Err(RigError::PresetOutOfRange { index: 99, len: 3 })
        );
    }

    #[test]
    fn test_negative_values_rejected() {
        let result = ShakePresetTable::new(vec![
            ShakePreset::new(1.0, 1.0, 1.0),
            ShakePreset::new(1.0, -0.5, 1.0),
        ]);
        assert!(matches!(result, Err(RigError::InvalidConfig(_))));
    }

    #[test]
    fn test_deserialized_negative_values_rejected() {
        let json = r#"[{ "volatility": 1.0, "strength": -2.0, "decay_rate": 3.0 }]"#;
        let result: Result<ShakePresetTable, _> = serde_json::from_str(json);
        let err = result.unwrap_err();
        assert!(err.to_string().contains("negative or non-finite"));
    }

    #[test]
    fn test_serializes_as_plain_json_array() {
        let json = serde_json::to_string(&ShakePresetTable::default()).unwrap();
        assert!(json.starts_with('['));
        let back: ShakePresetTable = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ShakePresetTable::default());
    }

    #[test]
    fn test_parses_plain_json_array() {
        let json = r#"[{ "volatility": 1.0, "strength": 2.0, "decay_rate": 3.0 }]"#;
        let table: ShakePresetTable = serde_json::from_str(json).unwrap();
        assert_eq!(table.get(0).unwrap(), &ShakePreset::new(1.0, 2.0, 3.0));
    }
}
