//! Client-side state modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Plain Rust types with no reactive or browser dependencies. Pages wrap them
//! in signals; tests drive them directly.

pub mod admin;
pub mod auth;
pub mod mentor_form;
pub mod mentors;
pub mod profile;
pub mod session;
