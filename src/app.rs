//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::protected_route::ProtectedRoute;
use crate::config::AppConfig;
use crate::net::api::ApiClient;
use crate::net::types::ADMIN_ROLE;
use crate::pages::{
    admin_dashboard::AdminDashboardPage,
    become_mentor::BecomeMentorPage,
    home::HomePage,
    login::{AdminLoginPage, LoginPage},
    logout::LogoutPage,
    mentors::MentorsPage,
    profile::ProfilePage,
    unauthorized::UnauthorizedPage,
};
use crate::state::auth::AuthSession;
use crate::util::auth::bootstrap;

const ADMIN_ONLY: &[&str] = &[ADMIN_ROLE];

/// Root application component.
///
/// Provides the config, API client, and auth session contexts, starts
/// session rehydration, and sets up client-side routing.
#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    provide_meta_context();

    let api = ApiClient::new(&config);
    let auth = RwSignal::new(AuthSession::default());

    provide_context(config);
    provide_context(api.clone());
    provide_context(auth);

    bootstrap(auth, api);

    view! {
        <Title text="Mentify"/>

        <Router>
            <Routes fallback=NotFound>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("adminLogin") view=AdminLoginPage/>
                <Route path=StaticSegment("logout") view=LogoutPage/>
                <Route path=StaticSegment("unauthorized") view=UnauthorizedPage/>
                <Route
                    path=StaticSegment("profile")
                    view=|| view! { <ProtectedRoute><ProfilePage/></ProtectedRoute> }
                />
                <Route
                    path=StaticSegment("mentors")
                    view=|| view! { <ProtectedRoute><MentorsPage/></ProtectedRoute> }
                />
                <Route
                    path=StaticSegment("become-mentor")
                    view=|| view! { <ProtectedRoute><BecomeMentorPage/></ProtectedRoute> }
                />
                <Route
                    path=StaticSegment("adminDashboard")
                    view=|| view! { <ProtectedRoute roles=ADMIN_ONLY><AdminDashboardPage/></ProtectedRoute> }
                />
            </Routes>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"Page not found."</h1>
            <a class="btn btn--secondary" href="/">"Go Home"</a>
        </div>
    }
}
