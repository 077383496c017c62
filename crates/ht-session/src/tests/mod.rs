mod session;

use crate::{SessionRecord, SessionStore, StoreError, StoreResult};

use ht_client::{AuthGrant, ClientError, ClientResult, CredentialTransport};
use ht_core::{Credentials, Identity, RegistrationProfile};

use std::collections::VecDeque;
use std::io;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::Notify;

pub(crate) fn alice() -> Identity {
    Identity {
        id: 1,
        username: "alice".into(),
        first_name: "Alice".into(),
        last_name: "Liddell".into(),
        email: "alice@example.com".into(),
        phone: Some("555-0100".into()),
    }
}

pub(crate) fn grant(identity: Identity) -> ClientResult<AuthGrant> {
    Ok(AuthGrant {
        identity,
        token: None,
    })
}

pub(crate) fn profile() -> RegistrationProfile {
    RegistrationProfile {
        username: "bob".into(),
        email: "bob@example.com".into(),
        password: "pw".into(),
        first_name: "Bob".into(),
        last_name: "Builder".into(),
        phone: "555-0199".into(),
    }
}

/// Lets a test run code while a transport call is suspended.
#[derive(Clone, Default)]
pub(crate) struct Gate {
    pub(crate) entered: Arc<Notify>,
    pub(crate) release: Arc<Notify>,
}

/// Transport answering from a queue of canned replies.
#[derive(Default)]
pub(crate) struct ScriptedTransport {
    replies: Mutex<VecDeque<ClientResult<AuthGrant>>>,
    calls: AtomicUsize,
    gate: Option<Gate>,
}

impl ScriptedTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn reply(self, reply: ClientResult<AuthGrant>) -> Self {
        self.replies.lock().unwrap().push_back(reply);
        self
    }

    pub(crate) fn gated(mut self, gate: Gate) -> Self {
        self.gate = Some(gate);
        self
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    async fn next_reply(&self) -> ClientResult<AuthGrant> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(gate) = &self.gate {
            gate.entered.notify_one();
            gate.release.notified().await;
        }

        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ClientError::api(500, "no scripted reply")))
    }
}

#[async_trait]
impl CredentialTransport for ScriptedTransport {
    async fn login(&self, _credentials: &Credentials) -> ClientResult<AuthGrant> {
        self.next_reply().await
    }

    async fn register(&self, _profile: &RegistrationProfile) -> ClientResult<AuthGrant> {
        self.next_reply().await
    }
}

/// Store whose writes or clears can be made to fail.
#[derive(Default)]
pub(crate) struct FailingStore {
    pub(crate) record: Mutex<Option<SessionRecord>>,
    pub(crate) fail_saves: bool,
    pub(crate) fail_clears: bool,
}

impl SessionStore for FailingStore {
    fn save(&self, record: &SessionRecord) -> StoreResult<()> {
        if self.fail_saves {
            return Err(StoreError::file_write(
                PathBuf::from("session.json"),
                io::Error::other("disk full"),
            ));
        }
        *self.record.lock().unwrap() = Some(record.clone());
        Ok(())
    }

    fn load(&self) -> Option<SessionRecord> {
        self.record.lock().unwrap().clone()
    }

    fn clear(&self) -> StoreResult<()> {
        if self.fail_clears {
            return Err(StoreError::file_remove(
                PathBuf::from("session.json"),
                io::Error::new(io::ErrorKind::PermissionDenied, "read-only storage"),
            ));
        }
        *self.record.lock().unwrap() = None;
        Ok(())
    }
}
