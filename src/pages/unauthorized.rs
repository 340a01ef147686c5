//! Shown when a signed-in user lacks the role a route requires.

use leptos::prelude::*;

use crate::util::auth::use_auth;

#[component]
pub fn UnauthorizedPage() -> impl IntoView {
    let auth = use_auth();
    let email = move || auth.with(|s| s.user().map(|u| u.email.clone()));

    view! {
        <div class="unauthorized-page">
            <div class="unauthorized-card">
                <h1>"Access Denied"</h1>
                <p>"You do not have permission to view this page."</p>
                {move || email().map(|email| view! { <p class="unauthorized-card__user">"Signed in as " {email}</p> })}
                <div class="unauthorized-card__actions">
                    <a class="btn btn--secondary" href="/">"Go Home"</a>
                    <a class="btn btn--secondary" href="/profile">"My Profile"</a>
                    <a class="btn btn--danger" href="/logout">"Logout"</a>
                </div>
            </div>
        </div>
    }
}
