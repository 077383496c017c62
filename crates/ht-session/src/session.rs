use crate::{AuthError, AuthResult, SessionRecord, SessionStore};

use ht_client::{AuthGrant, CredentialTransport};
use ht_core::{Credentials, Identity, RegistrationProfile};

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use log::{debug, info, warn};
use serde::Serialize;

/// Who, if anyone, is logged in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// Store not read yet
    Unknown,
    Unauthenticated,
    Authenticated(Identity),
}

impl SessionState {
    pub fn identity(&self) -> Option<&Identity> {
        match self {
            Self::Authenticated(identity) => Some(identity),
            Self::Unknown | Self::Unauthenticated => None,
        }
    }

    pub fn is_decided(&self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LogoutOutcome {
    LoggedOut,
    /// Nobody was logged in; nothing changed
    AlreadyLoggedOut,
}

struct Inner {
    state: SessionState,
    token: Option<String>,
}

/// The session state machine.
///
/// Transitions: `Unknown -> Authenticated | Unauthenticated` once at startup
/// from the store, `Unauthenticated -> Authenticated` on a successful login
/// or registration, `Authenticated -> Unauthenticated` on logout.
///
/// Every transition writes the store before memory. The epoch counter moves
/// on every logout; an auth response that started under an older epoch is
/// dropped instead of resurrecting a session the user already left.
pub struct Session<T, S> {
    transport: T,
    store: S,
    inner: RwLock<Inner>,
    epoch: AtomicU64,
}

impl<T, S> Session<T, S>
where
    T: CredentialTransport,
    S: SessionStore,
{
    /// Creates a session in the `Unknown` state; call `initialize` before use.
    pub fn new(transport: T, store: S) -> Self {
        Self {
            transport,
            store,
            inner: RwLock::new(Inner {
                state: SessionState::Unknown,
                token: None,
            }),
            epoch: AtomicU64::new(0),
        }
    }

    /// Creates a session already decided from the store.
    pub fn restore(transport: T, store: S) -> Self {
        let session = Self::new(transport, store);
        session.initialize();
        session
    }

    /// Leaves `Unknown` by reading the store. Later calls change nothing.
    pub fn initialize(&self) -> SessionState {
        let mut inner = self.write();
        self.decide(&mut inner);
        inner.state.clone()
    }

    pub fn state(&self) -> SessionState {
        self.read().state.clone()
    }

    pub fn current_identity(&self) -> Option<Identity> {
        self.read().state.identity().cloned()
    }

    pub fn is_authenticated(&self) -> bool {
        self.read().state.identity().is_some()
    }

    /// Server-issued credential for the current identity, if any.
    pub fn token(&self) -> Option<String> {
        self.read().token.clone()
    }

    pub fn epoch(&self) -> u64 {
        self.epoch.load(Ordering::SeqCst)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub async fn login(&self, credentials: &Credentials) -> AuthResult<Identity> {
        credentials.validate()?;
        let epoch = self.begin_attempt()?;

        let grant = self.transport.login(credentials).await.map_err(|e| {
            warn!("Login failed for {}: {e}", credentials.username);
            AuthError::from(e)
        })?;

        self.commit(epoch, grant, &credentials.username)
    }

    pub async fn register(&self, profile: &RegistrationProfile) -> AuthResult<Identity> {
        profile.validate()?;
        let epoch = self.begin_attempt()?;

        let grant = self.transport.register(profile).await.map_err(|e| {
            warn!("Registration failed for {}: {e}", profile.username);
            AuthError::from(e)
        })?;

        self.commit(epoch, grant, &profile.username)
    }

    /// Ends the session. Always succeeds; a store that cannot be cleared is logged.
    pub fn logout(&self) -> LogoutOutcome {
        let mut inner = self.write();
        self.decide(&mut inner);
        self.epoch.fetch_add(1, Ordering::SeqCst);

        if let Err(e) = self.store.clear() {
            warn!("Failed to clear stored session: {e}");
        }

        inner.token = None;
        match std::mem::replace(&mut inner.state, SessionState::Unauthenticated) {
            SessionState::Authenticated(identity) => {
                info!("Logged out user {}", identity.id);
                LogoutOutcome::LoggedOut
            }
            SessionState::Unknown | SessionState::Unauthenticated => {
                debug!("Logout with no active session");
                LogoutOutcome::AlreadyLoggedOut
            }
        }
    }

    fn begin_attempt(&self) -> AuthResult<u64> {
        if let SessionState::Authenticated(identity) = self.initialize() {
            return Err(AuthError::already_authenticated(identity.id));
        }

        Ok(self.epoch.load(Ordering::SeqCst))
    }

    /// `Unknown -> Authenticated | Unauthenticated` from the store; no-op once decided.
    fn decide(&self, inner: &mut Inner) {
        if inner.state.is_decided() {
            return;
        }

        match self.store.load() {
            Some(record) => {
                info!("Restored session for user {}", record.identity.id);
                inner.token = record.token;
                inner.state = SessionState::Authenticated(record.identity);
            }
            None => {
                debug!("No stored session; starting unauthenticated");
                inner.state = SessionState::Unauthenticated;
            }
        }
    }

    fn commit(&self, epoch: u64, grant: AuthGrant, submitted_username: &str) -> AuthResult<Identity> {
        let mut inner = self.write();

        if self.epoch.load(Ordering::SeqCst) != epoch {
            warn!(
                "Dropping auth response for user {}: session reset while in flight",
                grant.identity.id
            );
            return Err(AuthError::superseded());
        }

        let AuthGrant {
            mut identity,
            token,
        } = grant;

        if identity.username.is_empty() {
            identity.username = submitted_username.to_string();
        }

        let record = SessionRecord::new(identity.clone(), token.clone());
        self.store.save(&record)?;

        inner.state = SessionState::Authenticated(identity.clone());
        inner.token = token;

        info!("Authenticated user {} ({})", identity.id, identity.username);
        Ok(identity)
    }

    fn read(&self) -> RwLockReadGuard<'_, Inner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Inner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}
