//! Durable session storage (`token` + serialized `user`).
//!
//! SYSTEM CONTEXT
//! ==============
//! Only the auth session service writes these keys. Storage is abstracted
//! behind [`SessionStorage`] so the service can run against browser
//! `localStorage` in the bundle and an in-memory map in tests.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::collections::HashMap;

use crate::net::types::User;

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";

/// Synchronous string key-value storage that survives reloads.
pub trait SessionStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
    fn remove(&mut self, key: &str);
}

/// Browser `localStorage`. A no-op outside the `csr` build.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BrowserStorage;

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl SessionStorage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&mut self, key: &str, value: &str) {
        #[cfg(feature = "csr")]
        {
            let stored = local_storage().is_some_and(|s| s.set_item(key, value).is_ok());
            if !stored {
                log::warn!("localStorage write failed for key {key}");
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
        }
    }

    fn remove(&mut self, key: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = local_storage() {
                if storage.remove_item(key).is_err() {
                    log::warn!("localStorage remove failed for key {key}");
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
        }
    }
}

/// In-memory storage for tests and non-browser builds.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryStorage {
    items: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn contains(&self, key: &str) -> bool {
        self.items.contains_key(key)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.items.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.items.insert(key.to_owned(), value.to_owned());
    }

    fn remove(&mut self, key: &str) {
        self.items.remove(key);
    }
}

/// What was found in storage on startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoredSession {
    pub token: Option<String>,
    pub user: Option<User>,
}

/// Read the stored token and user. A user record that fails to decode is
/// removed and reported as absent; blank tokens are treated as absent.
pub fn load<S: SessionStorage>(storage: &mut S) -> StoredSession {
    let token = storage.get(TOKEN_KEY).filter(|t| !t.trim().is_empty());
    let user = match storage.get(USER_KEY) {
        Some(raw) => match serde_json::from_str::<User>(&raw) {
            Ok(user) => Some(user),
            Err(err) => {
                log::warn!("discarding corrupt stored user: {err}");
                storage.remove(USER_KEY);
                None
            }
        },
        None => None,
    };
    StoredSession { token, user }
}

/// Persist the token and serialized user.
pub fn save<S: SessionStorage>(storage: &mut S, token: &str, user: &User) {
    storage.set(TOKEN_KEY, token);
    match serde_json::to_string(user) {
        Ok(raw) => storage.set(USER_KEY, &raw),
        Err(err) => log::warn!("failed to serialize user for storage: {err}"),
    }
}

/// Remove both session keys.
pub fn clear<S: SessionStorage>(storage: &mut S) {
    storage.remove(TOKEN_KEY);
    storage.remove(USER_KEY);
}
