//! Networking modules for the backend REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues HTTP calls against the configured backend origin and `types`
//! defines the JSON request/response schema those calls exchange.

pub mod api;
pub mod types;
