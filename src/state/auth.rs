//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! `AuthSession` is the single source of truth for who is signed in. The root
//! `App` owns one instance inside an `RwSignal` and hands it to views through
//! context; route guards and user-aware pages read it from there.
//!
//! Rehydration policy: a stored token is always revalidated against
//! `GET /api/auth/getUserData` before the session counts as authenticated.
//! A stored user record is never trusted on its own, so a stale or edited
//! role cannot unlock UI until the backend confirms it.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::error::ApiError;
use crate::net::types::User;
use crate::state::session::{self, BrowserStorage, SessionStorage};

/// Lifecycle of the session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthStatus {
    /// Startup: a stored token is being revalidated.
    #[default]
    Pending,
    Authenticated,
    Unauthenticated,
}

/// Session service: in-memory session plus the storage that backs it.
#[derive(Clone, Debug)]
pub struct AuthSession<S = BrowserStorage> {
    status: AuthStatus,
    token: Option<String>,
    user: Option<User>,
    storage: S,
}

impl Default for AuthSession<BrowserStorage> {
    fn default() -> Self {
        Self::new(BrowserStorage)
    }
}

impl<S: SessionStorage> AuthSession<S> {
    /// A session in [`AuthStatus::Pending`] until [`Self::begin_bootstrap`] runs.
    pub fn new(storage: S) -> Self {
        Self { status: AuthStatus::Pending, token: None, user: None, storage }
    }

    pub fn status(&self) -> AuthStatus {
        self.status
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn role(&self) -> Option<&str> {
        self.user.as_ref().and_then(|u| u.role.as_deref())
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// True only when authenticated with both a token and a user present.
    pub fn is_authenticated(&self) -> bool {
        self.status == AuthStatus::Authenticated && self.token.is_some() && self.user.is_some()
    }

    pub fn is_pending(&self) -> bool {
        self.status == AuthStatus::Pending
    }

    /// First half of startup rehydration.
    ///
    /// Returns the stored token that must be revalidated, leaving the session
    /// `Pending`. Without a token the session becomes `Unauthenticated` and any
    /// orphaned user record is removed.
    pub fn begin_bootstrap(&mut self) -> Option<String> {
        let stored = session::load(&mut self.storage);
        if let Some(token) = stored.token {
            self.status = AuthStatus::Pending;
            self.token = Some(token.clone());
            self.user = None;
            return Some(token);
        }
        if stored.user.is_some() {
            log::info!("stored user without token; clearing session");
        }
        self.reset();
        None
    }

    /// Second half of startup rehydration: apply the backend's answer for `token`.
    ///
    /// Returns `false` when the answer is stale (a login or logout happened
    /// while the request was in flight) and was ignored.
    pub fn finish_bootstrap(&mut self, token: &str, result: Result<User, ApiError>) -> bool {
        if self.status != AuthStatus::Pending || self.token.as_deref() != Some(token) {
            log::debug!("ignoring stale session revalidation");
            return false;
        }
        match result {
            Ok(user) => {
                session::save(&mut self.storage, token, &user);
                log::info!("session restored for {}", user.email);
                self.user = Some(user);
                self.status = AuthStatus::Authenticated;
            }
            Err(err) => {
                log::warn!("session revalidation failed: {err}");
                self.reset();
            }
        }
        true
    }

    /// Mark the session authenticated with credentials the caller already
    /// validated against the backend. Writes both storage keys.
    pub fn login(&mut self, token: String, user: User) {
        session::save(&mut self.storage, &token, &user);
        log::info!("signed in as {}", user.email);
        self.token = Some(token);
        self.user = Some(user);
        self.status = AuthStatus::Authenticated;
    }

    /// Apply the outcome of the logout request. Local state is cleared no
    /// matter what the backend said.
    pub fn finish_logout(&mut self, outcome: Result<(), ApiError>) {
        if let Err(err) = outcome {
            log::warn!("logout request failed: {err}");
        }
        self.reset();
        log::info!("signed out");
    }

    fn reset(&mut self) {
        session::clear(&mut self.storage);
        self.token = None;
        self.user = None;
        self.status = AuthStatus::Unauthenticated;
    }
}
