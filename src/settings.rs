//! Editor settings for grid and nudge behavior
//!
//! Loaded from a small TOML file so power users can tune the grid size and
//! nudge steps without rebuilding; every value has a sensible default.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::geometry::DEFAULT_NUDGE_STEP;

/// Errors that can occur when loading settings
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse settings TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Tunable parameters for grid snapping and keyboard nudging
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Grid size for snapping, percent of page dimensions
    pub grid_size: f64,
    /// Fine nudge step, percentage points
    pub nudge_step: f64,
    /// Coarse nudge step (modifier held), percentage points
    pub coarse_step: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            grid_size: 5.0,
            nudge_step: DEFAULT_NUDGE_STEP,
            coarse_step: 2.0,
        }
    }
}

/// TOML structure for deserializing settings
#[derive(Deserialize)]
struct TomlSettings {
    grid: Option<TomlGrid>,
    nudge: Option<TomlNudge>,
}

#[derive(Deserialize)]
struct TomlGrid {
    size: Option<f64>,
}

#[derive(Deserialize)]
struct TomlNudge {
    step: Option<f64>,
    coarse: Option<f64>,
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load settings from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load settings from a TOML string; missing keys keep their defaults
    pub fn from_str(content: &str) -> Result<Self, SettingsError> {
        let parsed: TomlSettings = toml::from_str(content)?;
        let defaults = Self::default();

        Ok(Self {
            grid_size: parsed
                .grid
                .as_ref()
                .and_then(|g| g.size)
                .unwrap_or(defaults.grid_size),
            nudge_step: parsed
                .nudge
                .as_ref()
                .and_then(|n| n.step)
                .unwrap_or(defaults.nudge_step),
            coarse_step: parsed
                .nudge
                .as_ref()
                .and_then(|n| n.coarse)
                .unwrap_or(defaults.coarse_step),
        })
    }

    pub fn with_grid_size(mut self, size: f64) -> Self {
        self.grid_size = size;
        self
    }

    pub fn with_nudge_step(mut self, step: f64) -> Self {
        self.nudge_step = step;
        self
    }

    pub fn with_coarse_step(mut self, step: f64) -> Self {
        self.coarse_step = step;
        self
    }

    /// Step to use for a nudge, honoring the coarse modifier
    pub fn step_for(&self, coarse: bool) -> f64 {
        if coarse {
            self.coarse_step
        } else {
            self.nudge_step
        }
    }
}
