//! Route wrapper that gates its children on the auth session.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps every protected page in the route table. The decision itself lives
//! in `util::guard::decide`; this component only maps it onto views and
//! router redirects.

use leptos::prelude::*;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_location;

use crate::util::auth::use_auth;
use crate::util::guard::{
    GuardDecision, GuardInput, RouteAccess, UNAUTHORIZED_ROUTE, decide, login_redirect_url,
};

/// Render `children` only when the session satisfies the route's access rule.
///
/// `roles` empty means any authenticated user. While the stored session is
/// being revalidated a loading placeholder is shown instead of redirecting.
#[component]
pub fn ProtectedRoute(
    #[prop(optional)] roles: &'static [&'static str],
    children: ChildrenFn,
) -> impl IntoView {
    let auth = use_auth();
    let location = use_location();
    let access = if roles.is_empty() { RouteAccess::AUTHENTICATED } else { RouteAccess::roles(roles) };

    let decision = Memo::new(move |_| {
        let path = location.pathname.get();
        let search = location.search.get();
        let search = search.trim_start_matches('?');
        let from = if search.is_empty() { path } else { format!("{path}?{search}") };
        auth.with(|session| decide(access, GuardInput::from_session(session), &from))
    });

    move || match decision.get() {
        GuardDecision::Render => children().into_any(),
        GuardDecision::Pending => view! {
            <div class="route-pending">
                <div class="route-pending__spinner"></div>
                <p>"Loading..."</p>
            </div>
        }
        .into_any(),
        GuardDecision::RedirectLogin { from } => {
            log::debug!("redirecting unauthenticated visit to {from}");
            view! { <Redirect path=login_redirect_url(&from)/> }.into_any()
        }
        GuardDecision::RedirectUnauthorized => view! { <Redirect path=UNAUTHORIZED_ROUTE/> }.into_any(),
    }
}
