//! GUI-specific error types.
//!
//! Page fetch failures are not here: they surface through the pagination
//! error banner with [`SourceError::user_message`]. These are the failures
//! that belong to the desktop app itself.
//!
//! [`SourceError::user_message`]: artview_source::SourceError::user_message

use thiserror::Error;

/// GUI-specific errors, shown in the status bar.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GuiError {
    // =========================================================================
    // SETTINGS
    // =========================================================================
    /// Failed to load settings.
    #[error("Failed to load settings: {reason}")]
    SettingsLoad {
        /// Description of what went wrong.
        reason: String,
    },

    /// Failed to save settings.
    #[error("Failed to save settings: {reason}")]
    SettingsSave {
        /// Description of what went wrong.
        reason: String,
    },

    // =========================================================================
    // DATA SOURCE
    // =========================================================================
    /// The HTTP client could not be built from the settings.
    #[error("Cannot connect to the artwork service: {reason}")]
    Client {
        /// Description of what went wrong.
        reason: String,
    },

    // =========================================================================
    // BULK SELECT
    // =========================================================================
    /// The bulk-select count was not a positive whole number.
    #[error("Enter a whole number of at least 1")]
    InvalidBulkCount,

    /// The table cannot start a bulk select right now.
    #[error("Cannot select rows yet: {reason}")]
    BulkUnavailable {
        /// Description of what went wrong.
        reason: String,
    },
}

impl GuiError {
    /// Get a user-friendly suggestion for resolving this error.
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::SettingsLoad { .. } => {
                Some("Settings will be reset to defaults if the file is corrupted.")
            }
            Self::SettingsSave { .. } => {
                Some("Check file permissions for the application config directory.")
            }
            Self::Client { .. } => Some("Check base_url in the settings file."),
            Self::InvalidBulkCount => None,
            Self::BulkUnavailable { .. } => Some("Wait for the page to finish loading."),
        }
    }

    /// Get the error category for display purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::SettingsLoad { .. } | Self::SettingsSave { .. } => ErrorCategory::Settings,
            Self::Client { .. } => ErrorCategory::Source,
            Self::InvalidBulkCount | Self::BulkUnavailable { .. } => ErrorCategory::Input,
        }
    }

    // =========================================================================
    // FACTORY METHODS
    // =========================================================================

    /// Create a settings save error from any error source.
    pub fn settings_save(err: impl std::fmt::Display) -> Self {
        Self::SettingsSave {
            reason: err.to_string(),
        }
    }

    /// Create a client error from any error source.
    pub fn client(err: impl std::fmt::Display) -> Self {
        Self::Client {
            reason: err.to_string(),
        }
    }
}

/// Error category for grouping related errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Settings file errors.
    Settings,
    /// Data source configuration errors.
    Source,
    /// Invalid user input.
    Input,
}

impl ErrorCategory {
    /// Get a human-readable label for this category.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Settings => "Settings",
            Self::Source => "Source",
            Self::Input => "Input",
        }
    }
}

impl From<artview_source::SourceError> for GuiError {
    fn from(err: artview_source::SourceError) -> Self {
        Self::client(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GuiError::settings_save("permission denied");
        assert_eq!(err.to_string(), "Failed to save settings: permission denied");
        assert_eq!(err.category(), ErrorCategory::Settings);
    }

    #[test]
    fn test_source_error_conversion() {
        let err: GuiError = artview_source::SourceError::InvalidBaseUrl {
            url: "nope".to_string(),
            reason: "relative URL without a base".to_string(),
        }
        .into();
        assert!(matches!(err, GuiError::Client { .. }));
        assert!(err.suggestion().is_some());
        assert_eq!(err.category().label(), "Source");
    }
}
