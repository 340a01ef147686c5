//! Route-protection decision.
//!
//! SYSTEM CONTEXT
//! ==============
//! `ProtectedRoute` evaluates [`decide`] on every render of a gated view.
//! This is UI gating only. The backend enforces authorization on its own;
//! hiding a view here grants or denies nothing server-side.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::state::auth::{AuthSession, AuthStatus};
use crate::state::session::SessionStorage;

pub const LOGIN_ROUTE: &str = "/login";
pub const UNAUTHORIZED_ROUTE: &str = "/unauthorized";

/// Characters escaped in the `redirect` query value; path separators stay readable.
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'~').remove(b'/');

/// Access requirements of one route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteAccess {
    pub require_auth: bool,
    /// Empty means any authenticated user.
    pub allowed_roles: &'static [&'static str],
}

impl RouteAccess {
    pub const PUBLIC: Self = Self { require_auth: false, allowed_roles: &[] };
    pub const AUTHENTICATED: Self = Self { require_auth: true, allowed_roles: &[] };

    pub const fn roles(allowed_roles: &'static [&'static str]) -> Self {
        Self { require_auth: true, allowed_roles }
    }
}

/// Session facts the guard looks at.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GuardInput<'a> {
    pub status: AuthStatus,
    pub is_authenticated: bool,
    pub has_token: bool,
    pub role: Option<&'a str>,
}

impl<'a> GuardInput<'a> {
    pub fn from_session<S: SessionStorage>(session: &'a AuthSession<S>) -> Self {
        Self {
            status: session.status(),
            is_authenticated: session.is_authenticated(),
            has_token: session.token().is_some(),
            role: session.role(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Render,
    /// Session is still being revalidated; show a placeholder, do not redirect.
    Pending,
    /// Send to the login view, remembering where the user was headed.
    RedirectLogin { from: String },
    RedirectUnauthorized,
}

/// Decide what to do with a navigation to `path`.
pub fn decide(access: RouteAccess, input: GuardInput<'_>, path: &str) -> GuardDecision {
    if !access.require_auth {
        return GuardDecision::Render;
    }
    if input.status == AuthStatus::Pending {
        return GuardDecision::Pending;
    }
    if !input.is_authenticated || !input.has_token {
        return GuardDecision::RedirectLogin { from: path.to_owned() };
    }
    if access.allowed_roles.is_empty() {
        return GuardDecision::Render;
    }
    match input.role {
        Some(role) if access.allowed_roles.contains(&role) => GuardDecision::Render,
        _ => GuardDecision::RedirectUnauthorized,
    }
}

/// `/login` URL that returns to `from` after sign-in.
pub fn login_redirect_url(from: &str) -> String {
    if from.is_empty() || from == "/" || from.starts_with(LOGIN_ROUTE) {
        return LOGIN_ROUTE.to_owned();
    }
    format!("{LOGIN_ROUTE}?redirect={}", encode_query_value(from))
}

/// Where to go after login given a raw `redirect` query value. Only
/// same-origin absolute paths are honoured.
pub fn post_login_target(redirect: Option<&str>, default: &str) -> String {
    match redirect.map(str::trim) {
        Some(path) if path.starts_with('/') && !path.starts_with("//") && !path.starts_with(LOGIN_ROUTE) => {
            path.to_owned()
        }
        _ => default.to_owned(),
    }
}

fn encode_query_value(raw: &str) -> String {
    utf8_percent_encode(raw, QUERY_VALUE).to_string()
}
