use crate::tests::{FailingStore, Gate, ScriptedTransport, alice, grant, profile};
use crate::{
    AuthError, AuthErrorKind, FileSessionStore, LogoutOutcome, MemorySessionStore, Session,
    SessionRecord, SessionState, SessionStore,
};

use ht_client::{AuthGrant, ClientError};
use ht_core::Credentials;

use googletest::prelude::*;
use tempfile::TempDir;

type MemorySession = Session<ScriptedTransport, MemorySessionStore>;

fn fresh(transport: ScriptedTransport) -> MemorySession {
    Session::restore(transport, MemorySessionStore::new())
}

fn logged_in(transport: ScriptedTransport) -> MemorySession {
    let store = MemorySessionStore::with_record(&SessionRecord::new(alice(), None)).unwrap();
    Session::restore(transport, store)
}

fn credentials() -> Credentials {
    Credentials::new("alice", "correct-horse")
}

// =============================================================================
// Startup
// =============================================================================

#[test]
fn given_new_session_then_state_unknown_until_initialized() {
    let session = Session::new(ScriptedTransport::new(), MemorySessionStore::new());

    assert_that!(session.state(), eq(&SessionState::Unknown));
    assert_that!(session.initialize(), eq(&SessionState::Unauthenticated));
    assert_that!(session.state(), eq(&SessionState::Unauthenticated));
}

#[test]
fn given_valid_record_when_restored_then_authenticated_as_that_identity() {
    let session = logged_in(ScriptedTransport::new());

    assert_that!(session.current_identity(), some(eq(&alice())));
    assert_that!(session.is_authenticated(), is_true());
}

#[test]
fn given_empty_store_when_restored_then_unauthenticated() {
    let session = fresh(ScriptedTransport::new());

    assert_that!(session.state(), eq(&SessionState::Unauthenticated));
    assert_that!(session.current_identity(), none());
}

#[test]
fn given_malformed_record_when_restored_then_unauthenticated_and_store_emptied() {
    let store = MemorySessionStore::new();
    store.corrupt_with("not json at all");

    let session = Session::restore(ScriptedTransport::new(), store);

    assert_that!(session.state(), eq(&SessionState::Unauthenticated));
    assert_that!(session.store().is_empty(), is_true());
}

#[test]
fn given_initialized_session_when_initialize_again_then_store_not_reread() {
    let session = fresh(ScriptedTransport::new());
    session
        .store()
        .save(&SessionRecord::new(alice(), None))
        .unwrap();

    assert_that!(session.initialize(), eq(&SessionState::Unauthenticated));
}

#[test]
fn given_stored_token_when_restored_then_token_available() {
    let record = SessionRecord::new(alice(), Some("jwt-abc".into()));
    let store = MemorySessionStore::with_record(&record).unwrap();

    let session = Session::restore(ScriptedTransport::new(), store);

    assert_that!(session.token(), some(eq("jwt-abc")));
}

#[tokio::test]
async fn given_undecided_session_with_stored_record_when_login_then_record_read_first() {
    let store = MemorySessionStore::with_record(&SessionRecord::new(alice(), None)).unwrap();
    let session = Session::new(ScriptedTransport::new().reply(grant(alice())), store);

    let err = session.login(&credentials()).await.unwrap_err();

    assert_that!(err.kind(), eq(AuthErrorKind::AlreadyAuthenticated));
    assert_that!(session.transport().calls(), eq(0));
    assert_that!(session.current_identity(), some(eq(&alice())));
}

#[tokio::test]
async fn given_undecided_session_with_empty_store_when_login_then_authenticated() {
    let session = Session::new(
        ScriptedTransport::new().reply(grant(alice())),
        MemorySessionStore::new(),
    );

    session.login(&credentials()).await.unwrap();

    assert_that!(session.current_identity(), some(eq(&alice())));
}

#[test]
fn given_undecided_session_with_stored_record_when_logout_then_logged_out_from_that_record() {
    let store = MemorySessionStore::with_record(&SessionRecord::new(alice(), None)).unwrap();
    let session = Session::new(ScriptedTransport::new(), store);

    assert_that!(session.logout(), eq(LogoutOutcome::LoggedOut));
    assert_that!(session.state(), eq(&SessionState::Unauthenticated));
    assert_that!(session.store().is_empty(), is_true());
}

#[test]
fn given_undecided_session_with_empty_store_when_logout_then_already_logged_out() {
    let session = Session::new(ScriptedTransport::new(), MemorySessionStore::new());

    assert_that!(session.logout(), eq(LogoutOutcome::AlreadyLoggedOut));
    assert_that!(session.state(), eq(&SessionState::Unauthenticated));
}

// =============================================================================
// Login
// =============================================================================

#[tokio::test]
async fn given_correct_credentials_when_login_then_authenticated_and_persisted() {
    let session = fresh(ScriptedTransport::new().reply(grant(alice())));

    let identity = session.login(&credentials()).await.unwrap();

    assert_that!(identity, eq(&alice()));
    assert_that!(session.current_identity(), some(eq(&alice())));
    let stored = session.store().load().unwrap();
    assert_that!(stored.identity, eq(&alice()));
}

#[tokio::test]
async fn given_identity_without_username_when_login_then_submitted_username_kept() {
    let mut anonymous = alice();
    anonymous.username.clear();
    let session = fresh(ScriptedTransport::new().reply(grant(anonymous)));

    let identity = session.login(&credentials()).await.unwrap();

    assert_that!(identity.username.as_str(), eq("alice"));
}

#[tokio::test]
async fn given_server_token_when_login_then_token_kept_and_persisted() {
    let reply = Ok(AuthGrant {
        identity: alice(),
        token: Some("jwt-xyz".into()),
    });
    let session = fresh(ScriptedTransport::new().reply(reply));

    session.login(&credentials()).await.unwrap();

    assert_that!(session.token(), some(eq("jwt-xyz")));
    assert_that!(session.store().load().unwrap().token, some(eq("jwt-xyz")));
}

#[tokio::test]
async fn given_wrong_password_when_login_then_rejected_and_state_unchanged() {
    let transport =
        ScriptedTransport::new().reply(Err(ClientError::rejected(401, "Invalid credentials")));
    let session = fresh(transport);

    let err = session.login(&credentials()).await.unwrap_err();

    assert_that!(err.kind(), eq(AuthErrorKind::RejectedCredentials));
    assert_that!(err.server_message(), some(eq("Invalid credentials")));
    assert_that!(session.state(), eq(&SessionState::Unauthenticated));
    assert_that!(session.store().is_empty(), is_true());
}

#[tokio::test]
async fn given_unreachable_server_when_login_then_transport_error_and_retryable() {
    let transport = ScriptedTransport::new().reply(Err(ClientError::api(503, "down")));
    let session = fresh(transport);

    let err = session.login(&credentials()).await.unwrap_err();

    assert_that!(err.kind(), eq(AuthErrorKind::Transport));
    assert_that!(err.is_retryable(), is_true());
    assert_that!(session.current_identity(), none());
}

#[tokio::test]
async fn given_empty_password_when_login_then_invalid_input_without_network() {
    let session = fresh(ScriptedTransport::new().reply(grant(alice())));

    let err = session
        .login(&Credentials::new("alice", ""))
        .await
        .unwrap_err();

    assert!(matches!(err, AuthError::InvalidInput { .. }));
    assert_that!(session.transport().calls(), eq(0));
}

#[tokio::test]
async fn given_authenticated_when_login_then_already_authenticated_without_network() {
    let session = logged_in(ScriptedTransport::new().reply(grant(alice())));

    let err = session.login(&credentials()).await.unwrap_err();

    assert_that!(err.kind(), eq(AuthErrorKind::AlreadyAuthenticated));
    assert_that!(session.transport().calls(), eq(0));
    assert_that!(session.current_identity(), some(eq(&alice())));
}

#[tokio::test]
async fn given_store_cannot_save_when_login_then_persistence_error_and_still_logged_out() {
    let store = FailingStore {
        fail_saves: true,
        ..FailingStore::default()
    };
    let session = Session::restore(ScriptedTransport::new().reply(grant(alice())), store);

    let err = session.login(&credentials()).await.unwrap_err();

    assert_that!(err.kind(), eq(AuthErrorKind::Persistence));
    assert_that!(session.state(), eq(&SessionState::Unauthenticated));
    assert_that!(err.user_message(), contains_substring("disk space"));
}

// =============================================================================
// Registration
// =============================================================================

#[tokio::test]
async fn given_new_profile_when_register_then_authenticated_as_created_identity() {
    let bob = ht_core::Identity {
        id: 2,
        username: "bob".into(),
        first_name: "Bob".into(),
        last_name: "Builder".into(),
        email: "bob@example.com".into(),
        phone: Some("555-0199".into()),
    };
    let session = fresh(ScriptedTransport::new().reply(grant(bob.clone())));

    let identity = session.register(&profile()).await.unwrap();

    assert_that!(identity, eq(&bob));
    assert_that!(session.current_identity(), some(eq(&bob)));
    assert_that!(session.store().load().unwrap().identity, eq(&bob));
}

#[tokio::test]
async fn given_duplicate_username_when_register_then_validation_rejected() {
    let transport =
        ScriptedTransport::new().reply(Err(ClientError::validation(400, "Username already exists")));
    let session = fresh(transport);

    let err = session.register(&profile()).await.unwrap_err();

    assert_that!(err.kind(), eq(AuthErrorKind::ValidationRejected));
    assert_that!(err.server_message(), some(eq("Username already exists")));
    assert_that!(session.current_identity(), none());
}

#[tokio::test]
async fn given_incomplete_profile_when_register_then_invalid_input_without_network() {
    let mut incomplete = profile();
    incomplete.phone.clear();
    let session = fresh(ScriptedTransport::new());

    let err = session.register(&incomplete).await.unwrap_err();

    assert_that!(err.kind(), eq(AuthErrorKind::InvalidInput));
    assert_that!(session.transport().calls(), eq(0));
}

// =============================================================================
// Logout
// =============================================================================

#[test]
fn given_authenticated_when_logout_then_unauthenticated_and_store_cleared() {
    let session = logged_in(ScriptedTransport::new());

    assert_that!(session.logout(), eq(LogoutOutcome::LoggedOut));
    assert_that!(session.state(), eq(&SessionState::Unauthenticated));
    assert_that!(session.token(), none());
    assert_that!(session.store().is_empty(), is_true());
}

#[test]
fn given_logged_out_when_logout_again_then_no_change() {
    let session = logged_in(ScriptedTransport::new());
    session.logout();

    assert_that!(session.logout(), eq(LogoutOutcome::AlreadyLoggedOut));
    assert_that!(session.state(), eq(&SessionState::Unauthenticated));
}

#[tokio::test]
async fn given_file_store_when_login_restart_logout_restart_then_state_follows_disk() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("session.json");

    let first = Session::restore(
        ScriptedTransport::new().reply(grant(alice())),
        FileSessionStore::new(path.clone()),
    );
    first.login(&credentials()).await.unwrap();

    let second = Session::restore(ScriptedTransport::new(), FileSessionStore::new(path.clone()));
    assert_that!(second.current_identity(), some(eq(&alice())));
    second.logout();

    let third = Session::restore(ScriptedTransport::new(), FileSessionStore::new(path));
    assert_that!(third.state(), eq(&SessionState::Unauthenticated));
}

#[test]
fn given_store_cannot_clear_when_logout_then_still_logged_out_in_memory() {
    let store = FailingStore {
        record: std::sync::Mutex::new(Some(SessionRecord::new(alice(), None))),
        fail_clears: true,
        ..FailingStore::default()
    };
    let session = Session::restore(ScriptedTransport::new(), store);

    assert_that!(session.logout(), eq(LogoutOutcome::LoggedOut));
    assert_that!(session.current_identity(), none());
}

#[tokio::test]
async fn given_logout_then_login_then_authenticated_again() {
    let session = logged_in(ScriptedTransport::new().reply(grant(alice())));
    session.logout();

    session.login(&credentials()).await.unwrap();

    assert_that!(session.current_identity(), some(eq(&alice())));
}

// =============================================================================
// Concurrency
// =============================================================================

#[tokio::test]
async fn given_logout_while_login_in_flight_when_response_arrives_then_dropped() {
    let gate = Gate::default();
    let transport = ScriptedTransport::new()
        .reply(grant(alice()))
        .gated(gate.clone());
    let session = fresh(transport);
    let creds = credentials();

    let (result, outcome) = tokio::join!(session.login(&creds), async {
        gate.entered.notified().await;
        let outcome = session.logout();
        gate.release.notify_one();
        outcome
    });

    let err = result.unwrap_err();
    assert!(matches!(err, AuthError::Superseded { .. }));
    assert_that!(err.is_retryable(), is_true());
    assert_that!(outcome, eq(LogoutOutcome::AlreadyLoggedOut));
    assert_that!(session.state(), eq(&SessionState::Unauthenticated));
    assert_that!(session.store().is_empty(), is_true());
}

#[tokio::test]
async fn given_logout_then_each_logout_advances_epoch() {
    let session = fresh(ScriptedTransport::new());
    let before = session.epoch();

    session.logout();
    session.logout();

    assert_that!(session.epoch(), eq(before + 2));
}
