//! Simulation settings
//!
//! Defaults come from `consts`; a JSON document can override any subset.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::geom::Size;

/// Errors raised while loading settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed settings: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid setting `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Tunable simulation parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimSettings {
    /// Longest physics sub-step (ms)
    pub planck_time_ms: f64,
    /// Movement resolver precision floor (distance units)
    pub planck_space: f64,
    /// Longest frame the loop will simulate in one go (ms)
    pub max_frame_ms: f64,
    /// Player speed (distance units per ms)
    pub player_speed: f64,
    pub player_size: Size,
    pub target_size: Size,
    /// How long an attack keeps hitting after the trigger (ms)
    pub attack_duration_ms: f64,
}

impl Default for SimSettings {
    fn default() -> Self {
        Self {
            planck_time_ms: PLANCK_TIME_MS,
            planck_space: PLANCK_SPACE,
            max_frame_ms: MAX_FRAME_MS,
            player_speed: PLAYER_SPEED,
            player_size: PLAYER_SIZE,
            target_size: TARGET_SIZE,
            attack_duration_ms: ATTACK_DURATION_MS,
        }
    }
}

impl SimSettings {
    /// Parse and validate a JSON document; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values the tick loop and resolver cannot work with
    pub fn validate(&self) -> Result<(), SettingsError> {
        fn positive(field: &'static str, value: f64) -> Result<(), SettingsError> {
            if value > 0.0 && value.is_finite() {
                Ok(())
            } else {
                Err(SettingsError::Invalid {
                    field,
                    reason: "must be positive and finite",
                })
            }
        }

        positive("planck_time_ms", self.planck_time_ms)?;
        positive("planck_space", self.planck_space)?;
        positive("max_frame_ms", self.max_frame_ms)?;
        positive("player_speed", self.player_speed)?;
        positive("player_size.width", self.player_size.width)?;
        positive("player_size.height", self.player_size.height)?;
        positive("target_size.width", self.target_size.width)?;
        positive("target_size.height", self.target_size.height)?;
        if !(self.attack_duration_ms >= 0.0) {
            return Err(SettingsError::Invalid {
                field: "attack_duration_ms",
                reason: "must not be negative",
            });
        }
        Ok(())
    }
}
