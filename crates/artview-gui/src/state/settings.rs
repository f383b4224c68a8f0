//! Persistent application settings.
//!
//! Stored as TOML next to the CLI's settings, so both read the same
//! `[source]` table.

use std::path::Path;

use serde::{Deserialize, Serialize};

use artview_source::SourceSettings;

use crate::error::GuiError;
use crate::theme::ThemeMode;

/// Application settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Artwork API settings.
    pub source: SourceSettings,

    /// Display settings.
    pub display: DisplaySettings,
}

/// Display settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Light or dark appearance.
    pub theme_mode: ThemeMode,
}

impl Settings {
    /// Load settings from the default location, or defaults.
    pub fn load() -> Self {
        Self::load_from(&artview_source::settings_path())
    }

    /// Load settings from a specific path.
    ///
    /// Missing or unparsable files yield defaults.
    pub fn load_from(path: &Path) -> Self {
        match Self::try_load_from(path) {
            Ok(settings) => settings,
            Err(GuiError::SettingsLoad { reason }) if !path.exists() => {
                tracing::debug!(path = %path.display(), %reason, "No settings file, using defaults");
                Self::default()
            }
            Err(error) => {
                tracing::warn!(path = %path.display(), %error, "Using default settings");
                Self::default()
            }
        }
    }

    /// Load settings from a specific path, reporting why that failed.
    pub fn try_load_from(path: &Path) -> Result<Self, GuiError> {
        let content = std::fs::read_to_string(path).map_err(|e| GuiError::SettingsLoad {
            reason: e.to_string(),
        })?;
        toml::from_str(&content).map_err(|e| GuiError::SettingsLoad {
            reason: e.to_string(),
        })
    }

    /// Save settings to the default location.
    pub fn save(&self) -> Result<(), GuiError> {
        self.save_to(&artview_source::settings_path())
    }

    /// Save settings to a specific path.
    pub fn save_to(&self, path: &Path) -> Result<(), GuiError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                GuiError::settings_save(format!("failed to create config directory: {e}"))
            })?;
        }

        let content = toml::to_string_pretty(self).map_err(GuiError::settings_save)?;

        std::fs::write(path, content).map_err(GuiError::settings_save)
    }
}
