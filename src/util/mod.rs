//! Helpers shared across pages and components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Browser access (storage, dialogs) and pure decision logic (route guard,
//! request sequencing) live here, apart from page rendering.

pub mod auth;
pub mod dialog;
pub mod guard;
pub mod request_seq;
pub mod ui_persistence;
