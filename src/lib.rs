//! # mentify
//!
//! Leptos + WASM single-page client for the Mentify mentorship platform.
//!
//! This crate contains pages, components, session/auth state, the REST
//! client for the external backend, and the client-side route guard. All
//! business rules live on the backend; role gating here only decides what
//! to render and is not an authorization boundary.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install logging and the panic hook, then mount [`app::App`].
#[cfg(feature = "csr")]
pub fn start() {
    let config = config::AppConfig::from_build_env();
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(config.log_level) {
        web_sys::console::warn_1(&format!("logger already installed: {err}").into());
    }
    log::info!("mentify starting; backend={}", config.backend_url);
    leptos::mount::mount_to_body(move || leptos::view! { <app::App config=config.clone()/> });
}
