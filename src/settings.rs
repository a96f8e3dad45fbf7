//! Run settings
//!
//! Loaded from an optional JSON file; every field falls back to its default.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::sim::{Field, WorldError};

/// Errors raised while loading settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid field: {0}")]
    Field(#[from] WorldError),
    #[error("tick interval must be positive, got {0}")]
    TickInterval(f32),
    #[error("tick interval {secs} s is out of range (max {max} s)")]
    TickIntervalTooLong { secs: f32, max: f32 },
}

/// Simulation run settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Field dimensions and respawn range
    pub field: Field,
    /// Run seed for reproducibility
    pub seed: u64,
    /// Number of fish spawned by `World::random`
    pub population: usize,
    /// Seconds between ticks, for whoever drives the loop
    pub tick_interval_secs: f32,
    /// Stop after this many ticks (0 = run until the game ends)
    pub max_ticks: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            field: Field::default(),
            seed: 0,
            population: DEFAULT_POPULATION,
            tick_interval_secs: TICK_INTERVAL_SECS,
            max_ticks: 0,
        }
    }
}

impl Settings {
    /// Parse and validate settings from JSON text
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        self.field.validate()?;
        self.tick_interval()?;
        Ok(())
    }

    /// Pause between ticks for a real-time driver
    pub fn tick_interval(&self) -> Result<Duration, SettingsError> {
        let secs = self.tick_interval_secs;
        if !(secs > 0.0) {
            return Err(SettingsError::TickInterval(secs));
        }
        let too_long = || SettingsError::TickIntervalTooLong {
            secs,
            max: MAX_TICK_INTERVAL_SECS,
        };
        if secs > MAX_TICK_INTERVAL_SECS {
            return Err(too_long());
        }
        Duration::try_from_secs_f32(secs).map_err(|_| too_long())
    }

    /// Run is capped at `max_ticks` (0 means uncapped)
    pub fn tick_limit(&self) -> Option<u64> {
        (self.max_ticks > 0).then_some(self.max_ticks)
    }
}
