//! Sign-in pages: member login and admin login.
//!
//! Both post the same credentials to `/api/auth/login`. Member sign-in lands
//! on the `redirect` query target (or the mentor directory); admin sign-in
//! only admits users whose role is `admin` and lands on the dashboard.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::components::error_banner::ErrorBanner;
use crate::net::types::User;
use crate::util::auth::{use_api, use_auth};
use crate::util::guard::post_login_target;
use crate::util::request_seq::ViewLiveness;

pub const LOGIN_FAILED: &str = "Login failed. Please try again.";
pub const NOT_ADMIN: &str = "This account does not have admin access.";
pub const MISSING_CREDENTIALS: &str = "Please enter both email and password.";

const MEMBER_HOME: &str = "/mentors";
const ADMIN_HOME: &str = "/adminDashboard";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoginMode {
    Member,
    Admin,
}

impl LoginMode {
    fn title(self) -> &'static str {
        match self {
            Self::Member => "Welcome Back",
            Self::Admin => "Admin Login",
        }
    }

    fn subtitle(self) -> &'static str {
        match self {
            Self::Member => "Sign in to find your mentor",
            Self::Admin => "Login to your account",
        }
    }
}

/// Trimmed email and raw password, or the message to show.
///
/// # Errors
///
/// [`MISSING_CREDENTIALS`] when either value is blank.
pub fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(MISSING_CREDENTIALS);
    }
    Ok((email.to_owned(), password.to_owned()))
}

/// Whether `user` may be signed in through `mode`.
///
/// # Errors
///
/// [`NOT_ADMIN`] when an admin sign-in returns a non-admin user.
pub fn admit(mode: LoginMode, user: &User) -> Result<(), &'static str> {
    match mode {
        LoginMode::Admin if !user.is_admin() => Err(NOT_ADMIN),
        _ => Ok(()),
    }
}

/// Route to open after a successful sign-in.
pub fn landing_target(mode: LoginMode, redirect: Option<&str>) -> String {
    match mode {
        LoginMode::Member => post_login_target(redirect, MEMBER_HOME),
        LoginMode::Admin => ADMIN_HOME.to_owned(),
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    view! { <LoginCard mode=LoginMode::Member/> }
}

#[component]
pub fn AdminLoginPage() -> impl IntoView {
    view! { <LoginCard mode=LoginMode::Admin/> }
}

#[component]
fn LoginCard(mode: LoginMode) -> impl IntoView {
    let auth = use_auth();
    let api = use_api();
    let navigate = use_navigate();
    let query = use_query_map();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    let liveness = ViewLiveness::for_current_view();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let (email_value, password_value) =
            match validate_login_input(&email.get_untracked(), &password.get_untracked()) {
                Ok(credentials) => credentials,
                Err(message) => {
                    error.set(Some(message.to_owned()));
                    return;
                }
            };
        busy.set(true);
        error.set(None);

        let redirect = query.with_untracked(|q| q.get("redirect"));
        let api = api.clone();
        let navigate = navigate.clone();
        let liveness = liveness.clone();
        leptos::task::spawn_local(async move {
            let outcome = match api.login(&email_value, &password_value).await {
                Ok(resp) => admit(mode, &resp.user).map(|()| resp).map_err(str::to_owned),
                Err(err) => {
                    log::warn!("login failed: {err}");
                    Err(err.display_message(LOGIN_FAILED))
                }
            };
            // A granted session is app state; only the view updates need a mounted card.
            match outcome {
                Ok(resp) => {
                    auth.update(|s| s.login(resp.token, resp.user));
                    liveness.apply_if_alive(|| {
                        navigate(&landing_target(mode, redirect.as_deref()), NavigateOptions::default());
                    });
                }
                Err(message) => {
                    liveness.apply_if_alive(|| {
                        error.set(Some(message));
                        busy.set(false);
                    });
                }
            }
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <a class="login-card__brand" href="/">"Mentify"</a>
                <h1>{mode.title()}</h1>
                <p class="login-card__subtitle">{mode.subtitle()}</p>
                <ErrorBanner message=error/>
                <form class="login-form" on:submit=on_submit>
                    <label class="login-label" for="login-email">"Email"</label>
                    <input
                        id="login-email"
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <label class="login-label" for="login-password">"Password"</label>
                    <input
                        id="login-password"
                        class="login-input"
                        type="password"
                        placeholder="••••••••"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
                <Show when=move || mode == LoginMode::Member>
                    <p class="login-card__switch">
                        "Administrator? " <a href="/adminLogin">"Admin Login"</a>
                    </p>
                </Show>
            </div>
        </div>
    }
}
