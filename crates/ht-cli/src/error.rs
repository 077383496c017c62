use ht_client::ClientError;
use ht_config::ConfigError;
use ht_core::CoreError;
use ht_session::AuthError;

use std::panic::Location;

use error_location::ErrorLocation;
use serde_json::{Value, json};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Authentication failed: {0}")]
    Auth(#[from] AuthError),

    #[error("Request failed: {0}")]
    Client(#[from] ClientError),

    #[error("Invalid input: {0}")]
    Input(#[from] CoreError),

    #[error("No page at {path} {location}")]
    NotFound {
        path: String,
        location: ErrorLocation,
    },

    #[error("Navigation failed: {message} {location}")]
    Navigation {
        message: String,
        location: ErrorLocation,
    },

    #[error("Logger error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },
}

impl CliError {
    /// Creates NotFound error at caller location.
    #[track_caller]
    pub fn not_found(path: impl Into<String>) -> Self {
        Self::NotFound {
            path: path.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates Navigation error at caller location.
    #[track_caller]
    pub fn navigation(message: impl Into<String>) -> Self {
        Self::Navigation {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates Logger error at caller location.
    #[track_caller]
    pub fn logger(message: impl Into<String>) -> Self {
        Self::Logger {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Machine-readable class, matching the session's failure kinds where one applies.
    pub fn kind(&self) -> Value {
        match self {
            Self::Config(_) => json!("config"),
            Self::Auth(e) => json!(e.kind()),
            Self::Client(e) => json!(e.kind()),
            Self::Input(_) => json!("invalid_input"),
            Self::NotFound { .. } => json!("not_found"),
            Self::Navigation { .. } => json!("navigation"),
            Self::Logger { .. } => json!("logger"),
        }
    }

    /// Message for the person at the terminal, without source locations.
    pub fn user_message(&self) -> String {
        match self {
            Self::Auth(e) => e
                .server_message()
                .unwrap_or_else(|| e.user_message())
                .to_string(),
            Self::Client(e) => e.server_message().to_string(),
            Self::Input(CoreError::Validation { field, message, .. }) => {
                format!("{field}: {message}")
            }
            Self::NotFound { path, .. } => format!("No page at {path}"),
            Self::Navigation { message, .. } | Self::Logger { message, .. } => message.clone(),
            Self::Config(_) | Self::Input(_) => self.to_string(),
        }
    }

    pub fn to_json(&self) -> Value {
        json!({
            "error": {
                "kind": self.kind(),
                "message": self.user_message(),
            }
        })
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
