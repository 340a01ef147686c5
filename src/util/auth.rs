//! Shared auth helpers for views.
//!
//! SYSTEM CONTEXT
//! ==============
//! Views reach the session through [`use_auth`] and never touch storage
//! directly. Bootstrap and logout live here so every page signs out the same
//! way.

use leptos::prelude::*;

use crate::net::api::ApiClient;
use crate::state::auth::AuthSession;

/// Reactive handle to the app-wide session, provided by `App`.
pub type AuthSignal = RwSignal<AuthSession>;

/// The session provided by `App`.
///
/// Panics when called outside the provider: that is a wiring bug, not a
/// runtime condition.
pub fn use_auth() -> AuthSignal {
    expect_context::<AuthSignal>()
}

/// The unauthenticated API client provided by `App`.
pub fn use_api() -> ApiClient {
    expect_context::<ApiClient>()
}

/// `api` carrying the session's current bearer token.
pub fn authed_client(auth: AuthSignal, api: &ApiClient) -> ApiClient {
    api.clone()
        .with_token(auth.with_untracked(|s| s.token().map(str::to_owned)))
}

/// Startup rehydration: revalidate a stored token against the backend.
pub fn bootstrap(auth: AuthSignal, api: ApiClient) {
    let Some(token) = auth.try_update(AuthSession::begin_bootstrap).flatten() else {
        return;
    };
    log::debug!("revalidating stored session");

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        let result = api.with_token(Some(token.clone())).fetch_user_data().await;
        auth.update(|s| {
            s.finish_bootstrap(&token, result);
        });
    });

    #[cfg(not(feature = "csr"))]
    {
        let _ = api;
        auth.update(|s| {
            s.finish_bootstrap(&token, Err(crate::error::ApiError::Unavailable));
        });
    }
}

/// Sign out: best-effort backend call, then unconditional local clear.
pub async fn logout(auth: AuthSignal, api: ApiClient) {
    let outcome = authed_client(auth, &api).logout().await;
    auth.update(|s| s.finish_logout(outcome));
}
