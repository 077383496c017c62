//! Session and authorization layer.
//!
//! Establishes who is logged in, persists that identity across restarts and
//! decides which views are reachable. Everything here is an explicit value
//! owned by the composition root; there is no process-global session.

pub(crate) mod auth_error;
pub(crate) mod guard;
pub(crate) mod router;
pub(crate) mod session;
pub(crate) mod store;

#[cfg(test)]
mod tests;

pub use auth_error::{AuthError, AuthErrorKind, Result as AuthResult};
pub use guard::{Decision, Guard, RouteTargets};
pub use router::{
    APPOINTMENTS_PATH, MAX_REDIRECTS, Navigation, PRESCRIPTIONS_PATH, REGISTER_PATH, RouteTarget,
    Router, StandardViews, normalize_path,
};
pub use session::{LogoutOutcome, Session, SessionState};
pub use store::{
    FileSessionStore, LoadResult, MemorySessionStore, SESSION_SCHEMA_VERSION, SessionRecord,
    SessionStore, StoreError, StoreResult,
};
