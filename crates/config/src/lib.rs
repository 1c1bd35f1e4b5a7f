//! Shared configuration for Écorché
//!
//! Single source of truth for window dimensions, fixed UI defaults, and the
//! optional on-disk settings file that tunes lighting and animation pacing.

use serde::{Deserialize, Serialize};

#[cfg(feature = "bevy")]
use bevy::prelude::Resource;

use ecorche_types::{AnimationSettings, LightingSettings};

/// Default window width in pixels
pub const DEFAULT_WIDTH: u32 = 1600;

/// Default window height in pixels
pub const DEFAULT_HEIGHT: u32 = 900;

/// Status line shown at startup and restored on reset
pub const DEFAULT_STATUS: &str = "Pick a shape, then reveal its structure";

/// File name the settings are read from, relative to the working directory
pub const SETTINGS_FILE: &str = "ecorche.json";

/// Window and viewport configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Window width in logical pixels
    pub width: u32,
    /// Window height in logical pixels
    pub height: u32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

/// Errors that can occur while loading the settings file
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),
}

/// All tunable application settings.
///
/// Every field has a serde default so a settings file may override any
/// subset of them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
#[cfg_attr(feature = "bevy", derive(Resource))]
pub struct AppSettings {
    pub display: DisplayConfig,
    pub lighting: LightingSettings,
    pub animation: AnimationSettings,
}

impl AppSettings {
    /// Load settings from a JSON file.
    pub fn load<P: AsRef<std::path::Path>>(path: P) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(&std::fs::read_to_string(path)?)?)
    }

    /// Load settings from the default file, falling back to defaults when
    /// the file is absent. A present-but-malformed file is an error so typos
    /// don't silently revert the user to defaults.
    pub fn load_default_file() -> Result<Self, SettingsError> {
        match Self::load(SETTINGS_FILE) {
            Err(SettingsError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                Ok(Self::default())
            }
            other => other,
        }
    }
}
