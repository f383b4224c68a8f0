//! Configuration for the artwork data source.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Base URL of the Art Institute of Chicago public API.
pub const DEFAULT_BASE_URL: &str = "https://api.artic.edu/api/v1";

/// Fields requested for each artwork, matching the table columns.
pub const DEFAULT_FIELDS: [&str; 7] = [
    "id",
    "title",
    "artist_display",
    "place_of_origin",
    "inscriptions",
    "date_start",
    "date_end",
];

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Settings for the artwork data source.
///
/// Stored under the `[source]` table of the settings file. The page size is
/// not configurable; it is always [`artview_model::PAGE_SIZE`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceSettings {
    /// API base URL, without the `/artworks` endpoint.
    pub base_url: String,

    /// Per-request timeout in seconds.
    pub timeout_secs: u64,

    /// Artwork fields requested from the API.
    pub fields: Vec<String>,
}

impl Default for SourceSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            fields: DEFAULT_FIELDS.iter().map(|f| (*f).to_string()).collect(),
        }
    }
}

impl SourceSettings {
    /// Settings pointing at a different base URL.
    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Request timeout as a [`Duration`].
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }

    /// Comma-separated field list for the `fields` query parameter.
    #[must_use]
    pub fn fields_param(&self) -> String {
        self.fields.join(",")
    }

    /// Read the `[source]` table from a TOML settings file.
    ///
    /// Missing files, unreadable files and missing tables all yield defaults.
    #[must_use]
    pub fn load_from(path: &Path) -> Self {
        #[derive(Default, Deserialize)]
        #[serde(default)]
        struct SettingsFile {
            source: SourceSettings,
        }

        std::fs::read_to_string(path)
            .ok()
            .and_then(|content| toml::from_str::<SettingsFile>(&content).ok())
            .unwrap_or_default()
            .source
    }
}

/// Default location of the settings file shared by the GUI and CLI.
#[must_use]
pub fn settings_path() -> PathBuf {
    directories::ProjectDirs::from("org", "Artview", "Artview")
        .map(|dirs| dirs.config_dir().join("settings.toml"))
        .unwrap_or_else(|| PathBuf::from("settings.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = SourceSettings::default();
        assert_eq!(settings.base_url, DEFAULT_BASE_URL);
        assert_eq!(settings.timeout(), Duration::from_secs(30));
        assert!(settings.fields_param().starts_with("id,title,"));
    }

    #[test]
    fn test_zero_timeout_is_clamped() {
        let settings = SourceSettings {
            timeout_secs: 0,
            ..Default::default()
        };
        assert_eq!(settings.timeout(), Duration::from_secs(1));
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let settings: SourceSettings = toml::from_str("timeout_secs = 5").unwrap();
        assert_eq!(settings.timeout_secs, 5);
        assert_eq!(settings.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_load_from_missing_file() {
        let settings = SourceSettings::load_from(Path::new("/nonexistent/artview/settings.toml"));
        assert_eq!(settings, SourceSettings::default());
    }
}
