use serde::Serialize;

/// Coarse failure classes the UI distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// Server unreachable, timed out, failed, or answered with an unreadable body
    Transport,
    /// Server reachable and explicitly denied the credentials
    RejectedCredentials,
    /// Server reachable and refused the submitted fields
    ValidationRejected,
}
