//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shared chrome (header, banners, cards) and the route
//! guard wrapper, reading the session from Leptos context.

pub mod error_banner;
pub mod mentor_card;
pub mod nav_header;
pub mod protected_route;
