use crate::StoreError;

use ht_client::{ClientError, FailureKind};
use ht_core::CoreError;

use std::panic::Location;

use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// Why a login or registration did not produce a session.
///
/// None of these leave the session in a new state: the machine stays where
/// it was before the attempt.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Invalid input: {source}")]
    InvalidInput {
        #[source]
        source: CoreError,
    },

    #[error("Already authenticated as user {user_id} {location}")]
    AlreadyAuthenticated {
        user_id: i64,
        location: ErrorLocation,
    },

    #[error("Authentication service unavailable: {source}")]
    Transport {
        #[source]
        source: ClientError,
    },

    #[error("Credentials rejected: {source}")]
    RejectedCredentials {
        #[source]
        source: ClientError,
    },

    #[error("Submission rejected: {source}")]
    ValidationRejected {
        #[source]
        source: ClientError,
    },

    #[error("Authentication response arrived after the session was reset {location}")]
    Superseded { location: ErrorLocation },

    #[error("Failed to persist session: {source}")]
    Persistence {
        #[source]
        source: StoreError,
    },
}

/// Flat classification for callers that render messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthErrorKind {
    InvalidInput,
    AlreadyAuthenticated,
    Transport,
    RejectedCredentials,
    ValidationRejected,
    Superseded,
    Persistence,
}

impl AuthError {
    /// Creates AlreadyAuthenticated error at caller location.
    #[track_caller]
    pub fn already_authenticated(user_id: i64) -> Self {
        Self::AlreadyAuthenticated {
            user_id,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates Superseded error at caller location.
    #[track_caller]
    pub fn superseded() -> Self {
        Self::Superseded {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn kind(&self) -> AuthErrorKind {
        match self {
            Self::InvalidInput { .. } => AuthErrorKind::InvalidInput,
            Self::AlreadyAuthenticated { .. } => AuthErrorKind::AlreadyAuthenticated,
            Self::Transport { .. } => AuthErrorKind::Transport,
            Self::RejectedCredentials { .. } => AuthErrorKind::RejectedCredentials,
            Self::ValidationRejected { .. } => AuthErrorKind::ValidationRejected,
            Self::Superseded { .. } => AuthErrorKind::Superseded,
            Self::Persistence { .. } => AuthErrorKind::Persistence,
        }
    }

    /// Whether trying the same submission again could succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Transport { .. } | Self::Superseded { .. } => true,
            Self::Persistence { source } => source.is_transient(),
            _ => false,
        }
    }

    /// The server's own wording, when the server answered.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::RejectedCredentials { source } | Self::ValidationRejected { source } => {
                Some(source.server_message())
            }
            _ => None,
        }
    }

    /// Short message suitable for a login or registration form.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::InvalidInput { .. } => "Please fill in all required fields.",
            Self::AlreadyAuthenticated { .. } => "You are already logged in.",
            Self::Transport { .. } => {
                "Cannot reach the server. Check your connection and try again."
            }
            Self::RejectedCredentials { .. } => "Invalid username or password.",
            Self::ValidationRejected { .. } => {
                "The server refused these details. Please review them and try again."
            }
            Self::Superseded { .. } => "The session changed while signing in. Please try again.",
            Self::Persistence { source } => source.recovery_hint(),
        }
    }
}

impl From<CoreError> for AuthError {
    fn from(source: CoreError) -> Self {
        Self::InvalidInput { source }
    }
}

impl From<ClientError> for AuthError {
    fn from(source: ClientError) -> Self {
        match source.kind() {
            FailureKind::Transport => Self::Transport { source },
            FailureKind::RejectedCredentials => Self::RejectedCredentials { source },
            FailureKind::ValidationRejected => Self::ValidationRejected { source },
        }
    }
}

impl From<StoreError> for AuthError {
    fn from(source: StoreError) -> Self {
        Self::Persistence { source }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
