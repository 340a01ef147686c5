//! Browser localStorage helpers for view-local drafts.
//!
//! SYSTEM CONTEXT
//! ==============
//! Session keys belong to `state::session`; everything else a page wants to
//! keep across reloads (the mentee profile draft) goes through here.

#[cfg(test)]
#[path = "ui_persistence_test.rs"]
mod ui_persistence_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::net::types::User;
use crate::state::profile::MenteeProfile;
use crate::state::session::SessionStorage;

/// Storage key of a user's mentee profile draft.
pub fn profile_draft_key(user_id: &str) -> String {
    format!("mentee_profile:{user_id}")
}

/// Load a JSON value stored under `key`. Undecodable values are dropped.
pub fn load_json<T: DeserializeOwned, S: SessionStorage>(storage: &mut S, key: &str) -> Option<T> {
    let raw = storage.get(key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(err) => {
            log::warn!("discarding corrupt draft {key}: {err}");
            storage.remove(key);
            None
        }
    }
}

/// Save `value` as JSON under `key`.
pub fn save_json<T: Serialize, S: SessionStorage>(storage: &mut S, key: &str, value: &T) {
    match serde_json::to_string(value) {
        Ok(raw) => storage.set(key, &raw),
        Err(err) => log::warn!("failed to serialize draft {key}: {err}"),
    }
}

/// The user's saved profile draft, or a fresh profile seeded from `user`.
pub fn load_profile_draft<S: SessionStorage>(storage: &mut S, user: &User) -> MenteeProfile {
    load_json(storage, &profile_draft_key(&user.id)).unwrap_or_else(|| MenteeProfile::for_user(user))
}

pub fn save_profile_draft<S: SessionStorage>(storage: &mut S, user: &User, profile: &MenteeProfile) {
    save_json(storage, &profile_draft_key(&user.id), profile);
}
