use super::*;
use crate::state::session::{MemoryStorage, TOKEN_KEY, USER_KEY};

fn user(role: Option<&str>) -> User {
    User {
        id: "u1".to_owned(),
        email: "ada@example.com".to_owned(),
        name: Some("Ada".to_owned()),
        role: role.map(str::to_owned),
    }
}

fn session() -> AuthSession<MemoryStorage> {
    AuthSession::new(MemoryStorage::default())
}

fn signed_in() -> AuthSession<MemoryStorage> {
    let mut auth = session();
    auth.login("tok".to_owned(), user(Some("mentee")));
    auth
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn new_session_is_pending_and_empty() {
    let auth = session();
    assert_eq!(auth.status(), AuthStatus::Pending);
    assert!(auth.token().is_none());
    assert!(auth.user().is_none());
    assert!(!auth.is_authenticated());
}

// =============================================================
// login
// =============================================================

#[test]
fn login_authenticates_and_persists_both_keys() {
    let auth = signed_in();
    assert!(auth.is_authenticated());
    assert_eq!(auth.token(), Some("tok"));
    assert_eq!(auth.role(), Some("mentee"));
    assert_eq!(auth.storage().get(TOKEN_KEY).as_deref(), Some("tok"));
    let stored: User = serde_json::from_str(&auth.storage().get(USER_KEY).unwrap()).unwrap();
    assert_eq!(stored, user(Some("mentee")));
}

#[test]
fn login_replaces_previous_user() {
    let mut auth = signed_in();
    auth.login("tok-2".to_owned(), user(Some("admin")));
    assert_eq!(auth.token(), Some("tok-2"));
    assert_eq!(auth.role(), Some("admin"));
}

// =============================================================
// logout
// =============================================================

#[test]
fn logout_after_successful_request_clears_everything() {
    let mut auth = signed_in();
    auth.finish_logout(Ok(()));
    assert_eq!(auth.status(), AuthStatus::Unauthenticated);
    assert!(auth.token().is_none());
    assert!(auth.user().is_none());
    assert!(!auth.storage().contains(TOKEN_KEY));
    assert!(!auth.storage().contains(USER_KEY));
}

#[test]
fn logout_after_failed_request_still_clears_everything() {
    for failure in [
        ApiError::Network("offline".to_owned()),
        ApiError::Status { status: 500, message: None },
    ] {
        let mut auth = signed_in();
        auth.finish_logout(Err(failure));
        assert!(!auth.is_authenticated());
        assert!(auth.token().is_none());
        assert!(auth.user().is_none());
        assert!(auth.storage().is_empty());
    }
}

// =============================================================
// bootstrap
// =============================================================

#[test]
fn bootstrap_without_token_is_unauthenticated_and_drops_orphan_user() {
    let mut storage = MemoryStorage::default();
    storage.set(USER_KEY, r#"{"id":"u1","email":"a@b.com","role":"admin"}"#);
    let mut auth = AuthSession::new(storage);

    assert_eq!(auth.begin_bootstrap(), None);
    assert_eq!(auth.status(), AuthStatus::Unauthenticated);
    assert!(auth.user().is_none());
    assert!(auth.storage().is_empty());
}

#[test]
fn bootstrap_with_token_waits_for_revalidation() {
    let mut storage = MemoryStorage::default();
    storage.set(TOKEN_KEY, "tok");
    storage.set(USER_KEY, r#"{"id":"u1","email":"a@b.com","role":"admin"}"#);
    let mut auth = AuthSession::new(storage);

    assert_eq!(auth.begin_bootstrap().as_deref(), Some("tok"));
    assert!(auth.is_pending());
    // The stored role is not trusted before the backend answers.
    assert!(auth.user().is_none());
    assert!(!auth.is_authenticated());
}

#[test]
fn bootstrap_success_uses_fresh_user_from_backend() {
    let mut storage = MemoryStorage::default();
    storage.set(TOKEN_KEY, "tok");
    storage.set(USER_KEY, r#"{"id":"u1","email":"a@b.com","role":"admin"}"#);
    let mut auth = AuthSession::new(storage);
    let token = auth.begin_bootstrap().unwrap();

    assert!(auth.finish_bootstrap(&token, Ok(user(Some("mentee")))));
    assert!(auth.is_authenticated());
    assert_eq!(auth.role(), Some("mentee"));
    let stored: User = serde_json::from_str(&auth.storage().get(USER_KEY).unwrap()).unwrap();
    assert_eq!(stored.role.as_deref(), Some("mentee"));
}

#[test]
fn bootstrap_failure_clears_session() {
    let mut storage = MemoryStorage::default();
    storage.set(TOKEN_KEY, "expired");
    let mut auth = AuthSession::new(storage);
    let token = auth.begin_bootstrap().unwrap();

    assert!(auth.finish_bootstrap(&token, Err(ApiError::Status { status: 401, message: None })));
    assert_eq!(auth.status(), AuthStatus::Unauthenticated);
    assert!(auth.token().is_none());
    assert!(auth.storage().is_empty());
}

#[test]
fn bootstrap_answer_after_login_is_ignored() {
    let mut storage = MemoryStorage::default();
    storage.set(TOKEN_KEY, "old");
    let mut auth = AuthSession::new(storage);
    let token = auth.begin_bootstrap().unwrap();

    auth.login("new".to_owned(), user(None));
    assert!(!auth.finish_bootstrap(&token, Err(ApiError::Network("late".to_owned()))));
    assert!(auth.is_authenticated());
    assert_eq!(auth.token(), Some("new"));
}

#[test]
fn bootstrap_answer_after_logout_is_ignored() {
    let mut storage = MemoryStorage::default();
    storage.set(TOKEN_KEY, "tok");
    let mut auth = AuthSession::new(storage);
    let token = auth.begin_bootstrap().unwrap();

    auth.finish_logout(Ok(()));
    assert!(!auth.finish_bootstrap(&token, Ok(user(None))));
    assert!(!auth.is_authenticated());
    assert!(auth.storage().is_empty());
}
