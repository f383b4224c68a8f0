//! Error types for the artwork data source.

use thiserror::Error;

/// Errors that can occur while fetching a page of artworks.
///
/// Callers that follow the degrade-to-empty policy never see these; they are
/// logged by [`PageDataSource::fetch`](crate::PageDataSource::fetch).
#[derive(Debug, Clone, Error)]
#[non_exhaustive]
pub enum SourceError {
    /// Transport-level failure (DNS, connection, timeout).
    #[error("network error: {0}")]
    Network(String),

    /// The API answered with a non-2xx status.
    #[error("unexpected HTTP status {status} from {url}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Requested URL.
        url: String,
    },

    /// The response body was not the expected JSON shape.
    #[error("malformed response: {0}")]
    Decode(String),

    /// The HTTP client could not be constructed.
    #[error("failed to create HTTP client: {0}")]
    ClientBuild(String),

    /// The configured base URL is not a valid absolute URL.
    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl {
        /// The configured value.
        url: String,
        /// Parser message.
        reason: String,
    },
}

impl SourceError {
    /// Returns a user-friendly message suitable for display in the UI.
    #[must_use]
    pub fn user_message(&self) -> &str {
        match self {
            Self::Network(_) => {
                "Could not reach the artwork service. Please check your internet connection."
            }
            Self::Status { status, .. } if *status >= 500 => {
                "The artwork service is having trouble. Please try again later."
            }
            Self::Status { .. } => "The artwork service rejected the request.",
            Self::Decode(_) => "The artwork service sent data that could not be read.",
            Self::ClientBuild(_) | Self::InvalidBaseUrl { .. } => {
                "The artwork service is not configured correctly. Check your settings."
            }
        }
    }
}

impl From<reqwest::Error> for SourceError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for SourceError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

/// Result type alias for data source operations.
pub type Result<T> = std::result::Result<T, SourceError>;
