//! Game settings and preferences
//!
//! Loaded from a JSON file. Physics is not configurable; these only cover
//! audio, pacing and the RNG seed.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::{SOUND_VOLUME, TARGET_FPS};

/// Environment variable naming a settings file for `Settings::load`
pub const SETTINGS_ENV: &str = "ONLY_JUMP_SETTINGS";

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("cannot read settings file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed settings: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid setting {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Music volume (0.0 - 1.0)
    pub music_volume: f32,
    /// Silence everything
    pub muted: bool,
    /// Play the background loop
    pub music: bool,

    // === Pacing ===
    /// Frame-rate governor target
    pub target_fps: u32,

    // === Determinism ===
    /// Fixed RNG seed; a clock-derived seed is used when absent
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            master_volume: SOUND_VOLUME,
            sfx_volume: 1.0,
            music_volume: 1.0,
            muted: false,
            music: true,
            target_fps: TARGET_FPS,
            seed: None,
        }
    }
}

impl Settings {
    /// Parse settings from JSON text and validate them
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load from the file named by `ONLY_JUMP_SETTINGS`, falling back to defaults
    pub fn load() -> Self {
        let Ok(path) = std::env::var(SETTINGS_ENV) else {
            log::info!("Using default settings");
            return Self::default();
        };
        match Self::load_from(&path) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("{}; using default settings", e);
                Self::default()
            }
        }
    }

    /// Reject values the game cannot run with
    pub fn validate(&self) -> Result<(), SettingsError> {
        for (field, value) in [
            ("master_volume", self.master_volume),
            ("sfx_volume", self.sfx_volume),
            ("music_volume", self.music_volume),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(SettingsError::Invalid {
                    field,
                    reason: format!("{} is outside 0.0..=1.0", value),
                });
            }
        }
        if self.target_fps == 0 || self.target_fps > 240 {
            return Err(SettingsError::Invalid {
                field: "target_fps",
                reason: format!("{} is outside 1..=240", self.target_fps),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let s = Settings::default();
        assert_eq!(s.master_volume, SOUND_VOLUME);
        assert_eq!(s.target_fps, 60);
        assert!(s.validate().is_ok());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let s = Settings::from_json(r#"{ "seed": 42, "muted": true }"#).unwrap();
        assert_eq!(s.seed, Some(42));
        assert!(s.muted);
        assert_eq!(s.target_fps, TARGET_FPS);
    }

    #[test]
    fn test_rejects_out_of_range_volume() {
        let err = Settings::from_json(r#"{ "music_volume": 1.5 }"#).unwrap_err();
        assert!(matches!(err, SettingsError::Invalid { field: "music_volume", .. }));
    }

    #[test]
    fn test_rejects_zero_fps() {
        let err = Settings::from_json(r#"{ "target_fps": 0 }"#).unwrap_err();
        assert!(matches!(err, SettingsError::Invalid { field: "target_fps", .. }));
    }

    #[test]
    fn test_malformed_json() {
        let err = Settings::from_json("{ nope").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = Settings::load_from("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, SettingsError::Io { .. }));
    }
}
