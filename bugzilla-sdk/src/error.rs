// ABOUTME: Custom error types for the Bugzilla SDK with user-friendly messages
// ABOUTME: Provides specific error handling for the Bugzilla REST failure modes

use std::path::PathBuf;
use thiserror::Error;

use crate::BugId;

#[derive(Debug, Error)]
pub enum BugzillaError {
    /// Non-2xx response; `message` comes from the JSON error body
    #[error("{status}; error: {message}")]
    Api { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Timeout: Request took too long to complete")]
    Timeout,

    #[error("Invalid API response format: {0}")]
    InvalidResponse(String),

    #[error("Update of bug {requested} returned bug {returned}")]
    IdMismatch { requested: BugId, returned: BugId },

    #[error("Failed to read API key from {}", path.display())]
    Credentials {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl BugzillaError {
    pub fn help_text(&self) -> Option<&'static str> {
        match self {
            BugzillaError::Api { status: 401, .. } => {
                Some("Check the API key in your credential file")
            }
            BugzillaError::Network(_) => Some("Check your internet connection and try again"),
            BugzillaError::Timeout => Some("Try again or check your network connection"),
            BugzillaError::Credentials { .. } => Some(
                "Create an API key in Bugzilla under Preferences > API Keys and save it to the credential file",
            ),
            _ => None,
        }
    }

    /// HTTP status of an API error, if this is one
    pub fn status(&self) -> Option<u16> {
        match self {
            BugzillaError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for BugzillaError {
    fn from(err: reqwest::Error) -> Self {
        // The search URL carries the API key as a query parameter
        let err = err.without_url();
        if err.is_timeout() {
            BugzillaError::Timeout
        } else if err.is_decode() {
            BugzillaError::InvalidResponse(err.to_string())
        } else {
            BugzillaError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for BugzillaError {
    fn from(err: serde_json::Error) -> Self {
        BugzillaError::InvalidResponse(err.to_string())
    }
}
