use super::*;
use crate::net::types::User;
use crate::state::session::MemoryStorage;

const ADMIN_ONLY: RouteAccess = RouteAccess::roles(&["admin"]);

fn input(status: AuthStatus, role: Option<&str>) -> GuardInput<'_> {
    let authed = status == AuthStatus::Authenticated;
    GuardInput { status, is_authenticated: authed, has_token: authed, role }
}

// =============================================================
// decide
// =============================================================

#[test]
fn public_routes_always_render() {
    for status in [AuthStatus::Pending, AuthStatus::Authenticated, AuthStatus::Unauthenticated] {
        for role in [None, Some("admin"), Some("mentee")] {
            assert_eq!(decide(RouteAccess::PUBLIC, input(status, role), "/"), GuardDecision::Render);
        }
    }
}

#[test]
fn unauthenticated_redirects_to_login_for_every_role_configuration() {
    for access in [RouteAccess::AUTHENTICATED, ADMIN_ONLY, RouteAccess::roles(&["admin", "mentor"])] {
        assert_eq!(
            decide(access, input(AuthStatus::Unauthenticated, None), "/mentors"),
            GuardDecision::RedirectLogin { from: "/mentors".to_owned() }
        );
    }
}

#[test]
fn authenticated_flag_without_token_redirects_to_login() {
    let input = GuardInput { status: AuthStatus::Authenticated, is_authenticated: true, has_token: false, role: None };
    assert_eq!(
        decide(RouteAccess::AUTHENTICATED, input, "/profile"),
        GuardDecision::RedirectLogin { from: "/profile".to_owned() }
    );
}

#[test]
fn pending_session_neither_renders_nor_redirects() {
    assert_eq!(decide(ADMIN_ONLY, input(AuthStatus::Pending, None), "/adminDashboard"), GuardDecision::Pending);
}

#[test]
fn empty_role_list_renders_for_any_role() {
    for role in [None, Some("admin"), Some("mentee")] {
        assert_eq!(
            decide(RouteAccess::AUTHENTICATED, input(AuthStatus::Authenticated, role), "/profile"),
            GuardDecision::Render
        );
    }
}

#[test]
fn mentee_on_admin_route_is_unauthorized() {
    assert_eq!(
        decide(ADMIN_ONLY, input(AuthStatus::Authenticated, Some("mentee")), "/adminDashboard"),
        GuardDecision::RedirectUnauthorized
    );
    assert_eq!(
        decide(ADMIN_ONLY, input(AuthStatus::Authenticated, None), "/adminDashboard"),
        GuardDecision::RedirectUnauthorized
    );
}

#[test]
fn admin_on_admin_route_renders() {
    assert_eq!(decide(ADMIN_ONLY, input(AuthStatus::Authenticated, Some("admin")), "/adminDashboard"), GuardDecision::Render);
}

#[test]
fn decide_is_idempotent() {
    let i = input(AuthStatus::Authenticated, Some("mentee"));
    assert_eq!(decide(ADMIN_ONLY, i, "/x"), decide(ADMIN_ONLY, i, "/x"));
}

#[test]
fn input_from_session_reflects_login_state() {
    let mut session = AuthSession::new(MemoryStorage::default());
    assert_eq!(GuardInput::from_session(&session).status, AuthStatus::Pending);

    session.login(
        "tok".to_owned(),
        User { id: "1".to_owned(), email: "a@b.com".to_owned(), name: None, role: Some("admin".to_owned()) },
    );
    let i = GuardInput::from_session(&session);
    assert!(i.is_authenticated);
    assert!(i.has_token);
    assert_eq!(i.role, Some("admin"));
    assert_eq!(decide(ADMIN_ONLY, i, "/adminDashboard"), GuardDecision::Render);
}

// =============================================================
// Redirect URLs
// =============================================================

#[test]
fn login_redirect_url_carries_origin_path() {
    assert_eq!(login_redirect_url("/mentors"), "/login?redirect=/mentors");
    assert_eq!(login_redirect_url("/mentors?q=rust go"), "/login?redirect=/mentors%3Fq%3Drust%20go");
}

#[test]
fn login_redirect_url_skips_trivial_origins() {
    assert_eq!(login_redirect_url("/"), "/login");
    assert_eq!(login_redirect_url(""), "/login");
    assert_eq!(login_redirect_url("/login"), "/login");
}

#[test]
fn post_login_target_accepts_local_paths_only() {
    assert_eq!(post_login_target(Some("/profile"), "/mentors"), "/profile");
    assert_eq!(post_login_target(Some("https://evil.test"), "/mentors"), "/mentors");
    assert_eq!(post_login_target(Some("//evil.test"), "/mentors"), "/mentors");
    assert_eq!(post_login_target(Some("/login"), "/mentors"), "/mentors");
    assert_eq!(post_login_target(None, "/mentors"), "/mentors");
}
