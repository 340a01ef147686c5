//! Page-level route components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages compose shared components and read the session and API client from
//! context. Protected pages are wrapped in `ProtectedRoute` by the route table.

pub mod admin_dashboard;
pub mod become_mentor;
pub mod home;
pub mod login;
pub mod logout;
pub mod mentors;
pub mod profile;
pub mod unauthorized;
