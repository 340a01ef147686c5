//! Dismissible inline message banners.

use leptos::prelude::*;

/// Shows `message` while it is `Some`; the close button clears it.
#[component]
pub fn ErrorBanner(message: RwSignal<Option<String>>) -> impl IntoView {
    view! { <Banner message=message modifier="error-banner--error" role="alert"/> }
}

/// Success variant of [`ErrorBanner`].
#[component]
pub fn NoticeBanner(message: RwSignal<Option<String>>) -> impl IntoView {
    view! { <Banner message=message modifier="error-banner--notice" role="status"/> }
}

#[component]
fn Banner(message: RwSignal<Option<String>>, modifier: &'static str, role: &'static str) -> impl IntoView {
    view! {
        <Show when=move || message.with(Option::is_some)>
            <div class=format!("error-banner {modifier}") role=role>
                <span class="error-banner__text">{move || message.get().unwrap_or_default()}</span>
                <button
                    class="error-banner__dismiss"
                    type="button"
                    aria-label="Dismiss"
                    on:click=move |_| message.set(None)
                >
                    "✕"
                </button>
            </div>
        </Show>
    }
}
