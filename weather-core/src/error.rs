//! Error types for weather lookups.
//!
//! Two layers: [`ProviderError`] describes what actually went wrong talking to the
//! weather service, [`LookupError`] is what the user gets to see.

use thiserror::Error;

pub const EMPTY_QUERY_MESSAGE: &str = "Please enter a city name";
pub const LOOKUP_FAILED_MESSAGE: &str = "City not found. Please check the spelling and try again.";

/// User-facing lookup failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// The trimmed query was empty; nothing was sent.
    #[error("{}", EMPTY_QUERY_MESSAGE)]
    EmptyQuery,

    /// Any downstream failure. `cause` is for logs only.
    #[error("{}", LOOKUP_FAILED_MESSAGE)]
    LookupFailed { cause: String },
}

impl LookupError {
    pub fn user_message(&self) -> &'static str {
        match self {
            LookupError::EmptyQuery => EMPTY_QUERY_MESSAGE,
            LookupError::LookupFailed { .. } => LOOKUP_FAILED_MESSAGE,
        }
    }

    pub fn diagnostic(&self) -> Option<&str> {
        match self {
            LookupError::EmptyQuery => None,
            LookupError::LookupFailed { cause } => Some(cause),
        }
    }
}

impl From<ProviderError> for LookupError {
    fn from(err: ProviderError) -> Self {
        LookupError::LookupFailed { cause: err.to_string() }
    }
}

/// Failure talking to the weather service.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("No API key configured. Set OPENWEATHER_API_KEY in the environment.")]
    MissingApiKey,

    #[error("Request to weather service failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Weather service responded with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to parse weather service JSON: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Weather service response incomplete: {0}")]
    Incomplete(&'static str),
}
