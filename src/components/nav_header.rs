//! Top navigation bar shared by every page.
//!
//! Links depend on the session: visitors see the sign-in entries, signed-in
//! users see the app sections, and admins additionally see the dashboard.

use leptos::prelude::*;

use crate::util::auth::use_auth;

#[component]
pub fn NavHeader() -> impl IntoView {
    let auth = use_auth();
    let signed_in = move || auth.with(|s| s.is_authenticated());
    let is_admin = move || auth.with(|s| s.user().is_some_and(|u| u.is_admin()));
    let greeting = move || auth.with(|s| s.user().map(|u| u.display_name().to_owned()).unwrap_or_default());

    view! {
        <header class="nav-header">
            <a class="nav-header__brand" href="/">"Mentify"</a>
            <nav class="nav-header__links">
                <Show
                    when=signed_in
                    fallback=|| {
                        view! {
                            <a class="nav-header__link" href="/login">"Login"</a>
                            <a class="nav-header__link" href="/adminLogin">"Admin Login"</a>
                        }
                    }
                >
                    <a class="nav-header__link" href="/mentors">"Mentors"</a>
                    <a class="nav-header__link" href="/become-mentor">"Become a Mentor"</a>
                    <a class="nav-header__link" href="/profile">"Profile"</a>
                    <Show when=is_admin>
                        <a class="nav-header__link" href="/adminDashboard">"Dashboard"</a>
                    </Show>
                    <span class="nav-header__user">{greeting}</span>
                    <a class="nav-header__link nav-header__link--logout" href="/logout">"Logout"</a>
                </Show>
            </nav>
        </header>
    }
}
