//! Effective source settings for a CLI run.

use std::path::{Path, PathBuf};

use artview_source::{SourceSettings, settings_path};

/// Settings file in use and the settings resolved from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectiveSettings {
    /// File the settings were read from (it may not exist).
    pub path: PathBuf,
    /// Whether that file exists.
    pub file_exists: bool,
    /// Whether `--base-url` replaced the configured base URL.
    pub base_url_overridden: bool,
    /// Resolved source settings.
    pub source: SourceSettings,
}

/// Resolve settings from `--config` (or the shared settings file) and
/// apply a `--base-url` override.
#[must_use]
pub fn resolve_settings(config: Option<&Path>, base_url: Option<&str>) -> EffectiveSettings {
    let path = config.map_or_else(settings_path, Path::to_path_buf);
    let mut source = SourceSettings::load_from(&path);

    let base_url_overridden = base_url.is_some();
    if let Some(url) = base_url {
        source.base_url = url.to_string();
    }

    tracing::debug!(path = %path.display(), base_url = %source.base_url, "Resolved settings");
    EffectiveSettings {
        file_exists: path.is_file(),
        path,
        base_url_overridden,
        source,
    }
}
