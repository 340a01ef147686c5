//! `/logout`: sign out, then land on the login page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::util::auth::{logout, use_api, use_auth};
use crate::util::guard::LOGIN_ROUTE;

#[component]
pub fn LogoutPage() -> impl IntoView {
    let auth = use_auth();
    let api = use_api();
    let navigate = use_navigate();

    leptos::task::spawn_local(async move {
        logout(auth, api).await;
        navigate(LOGIN_ROUTE, NavigateOptions { replace: true, ..NavigateOptions::default() });
    });

    view! { <div class="route-pending"><p>"Signing out..."</p></div> }
}
