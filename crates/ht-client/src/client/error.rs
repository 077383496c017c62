use crate::FailureKind;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Errors that can occur during API calls
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("Credentials rejected: {message} (status: {status}) {location}")]
    Rejected {
        status: u16,
        message: String,
        location: ErrorLocation,
    },

    #[error("Request rejected: {message} (status: {status}) {location}")]
    Validation {
        status: u16,
        message: String,
        location: ErrorLocation,
    },

    #[error("API error: {message} (status: {status}) {location}")]
    Api {
        status: u16,
        message: String,
        location: ErrorLocation,
    },

    #[error("Response decode error: {message} {location}")]
    Decode {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },
}

impl ClientError {
    /// Convert reqwest error with context
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        ClientError::Http {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Convert JSON decode error with context
    #[track_caller]
    pub fn from_json(err: serde_json::Error) -> Self {
        ClientError::Decode {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Create a Rejected error at caller location.
    #[track_caller]
    pub fn rejected(status: u16, message: impl Into<String>) -> Self {
        ClientError::Rejected {
            status,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Create a Validation error at caller location.
    #[track_caller]
    pub fn validation(status: u16, message: impl Into<String>) -> Self {
        ClientError::Validation {
            status,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Create an Api error at caller location.
    #[track_caller]
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        ClientError::Api {
            status,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Map a non-success status and the server's message to the matching variant.
    #[track_caller]
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        match status {
            401 | 403 => Self::rejected(status, message),
            400 | 409 | 422 => Self::validation(status, message),
            _ => Self::api(status, message),
        }
    }

    pub fn kind(&self) -> FailureKind {
        match self {
            Self::Rejected { .. } => FailureKind::RejectedCredentials,
            Self::Validation { .. } => FailureKind::ValidationRejected,
            Self::Http { .. } | Self::Api { .. } | Self::Decode { .. } => FailureKind::Transport,
        }
    }

    /// Message as the server phrased it, without location noise.
    pub fn server_message(&self) -> &str {
        match self {
            Self::Http { message, .. }
            | Self::Rejected { message, .. }
            | Self::Validation { message, .. }
            | Self::Api { message, .. }
            | Self::Decode { message, .. } => message,
        }
    }

    /// HTTP status, when the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Rejected { status, .. }
            | Self::Validation { status, .. }
            | Self::Api { status, .. } => Some(*status),
            Self::Http { source, .. } => source.status().map(|s| s.as_u16()),
            Self::Decode { .. } => None,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        ClientError::from_reqwest(err)
    }
}

impl From<serde_json::Error> for ClientError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        ClientError::from_json(err)
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
