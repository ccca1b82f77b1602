//! Durable persistence for the authenticated session.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session survives page reloads as two `localStorage` entries, `token`
//! and `user` (JSON profile). Only the auth gateway writes them.
//!
//! TRADE-OFFS
//! ==========
//! `load` never fails: missing halves or a profile that no longer decodes are
//! treated as "logged out" and both keys are cleared. `save` snapshots the
//! previous entries and puts them back if either write fails, so a failed
//! commit never leaves a half-written session behind.

#[cfg(test)]
#[path = "session_storage_test.rs"]
mod session_storage_test;

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::net::types::UserProfile;
use crate::state::session::Session;

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";

/// A storage write was refused (quota, private mode, no window).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("storage write failed: {0}")]
pub struct StorageError(pub String);

/// Minimal string key-value store.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;

    /// # Errors
    ///
    /// Returns a [`StorageError`] if the value could not be written.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    fn remove(&self, key: &str);
}

/// Window `localStorage`. Off the browser every read is empty and writes fail.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            let storage = local_storage().ok_or_else(|| StorageError("localStorage unavailable".to_owned()))?;
            storage
                .set_item(key, value)
                .map_err(|e| StorageError(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Err(StorageError("localStorage unavailable".to_owned()))
        }
    }

    fn remove(&self, key: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(key);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
        }
    }
}

/// In-memory store. Clones share the same map.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
    read_only: Arc<AtomicBool>,
    failing_key: Arc<Mutex<Option<String>>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent `set` fail, like a full or locked-down store.
    pub fn set_read_only(&self, read_only: bool) {
        self.read_only.store(read_only, Ordering::Relaxed);
    }

    /// Make writes to `key` alone fail, to simulate a commit interrupted halfway.
    pub fn fail_writes_to(&self, key: &str) {
        *lock(&self.failing_key) = Some(key.to_owned());
    }

    /// Copy of all entries, for comparing before/after states.
    pub fn snapshot(&self) -> HashMap<String, String> {
        lock(&self.entries).clone()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        lock(&self.entries).get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.read_only.load(Ordering::Relaxed) {
            return Err(StorageError("store is read-only".to_owned()));
        }
        if lock(&self.failing_key).as_deref() == Some(key) {
            return Err(StorageError(format!("write to {key} refused")));
        }
        lock(&self.entries).insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) {
        lock(&self.entries).remove(key);
    }
}

/// Reads and writes the `token` + `user` pair as one unit.
#[derive(Clone, Debug, Default)]
pub struct SessionStore<S> {
    storage: S,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Read the persisted session, clearing any partial or malformed leftovers.
    pub fn load(&self) -> Option<Session> {
        let token = self.storage.get(TOKEN_KEY).filter(|t| !t.trim().is_empty());
        let user = self
            .storage
            .get(USER_KEY)
            .and_then(|raw| match serde_json::from_str::<UserProfile>(&raw) {
                Ok(user) => Some(user),
                Err(e) => {
                    log::warn!("discarding malformed persisted user: {e}");
                    None
                }
            });
        match (token, user) {
            (Some(token), Some(user)) => Some(Session { token, user }),
            (None, None) => None,
            _ => {
                self.clear();
                None
            }
        }
    }

    /// Persist both halves of `session`, or neither.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if serialization or either write fails; the
    /// previous entries are restored in that case.
    pub fn save(&self, session: &Session) -> Result<(), StorageError> {
        let user_json = serde_json::to_string(&session.user).map_err(|e| StorageError(e.to_string()))?;
        let previous_token = self.storage.get(TOKEN_KEY);
        let previous_user = self.storage.get(USER_KEY);

        let written = self
            .storage
            .set(USER_KEY, &user_json)
            .and_then(|()| self.storage.set(TOKEN_KEY, &session.token));
        if let Err(e) = written {
            self.restore_entry(TOKEN_KEY, previous_token.as_deref());
            self.restore_entry(USER_KEY, previous_user.as_deref());
            return Err(e);
        }
        Ok(())
    }

    fn restore_entry(&self, key: &str, previous: Option<&str>) {
        if self.storage.get(key).as_deref() == previous {
            return;
        }
        match previous {
            Some(value) => {
                if self.storage.set(key, value).is_err() {
                    self.storage.remove(key);
                }
            }
            None => self.storage.remove(key),
        }
    }

    /// Remove both entries. Safe to call when nothing is stored.
    pub fn clear(&self) {
        self.storage.remove(TOKEN_KEY);
        self.storage.remove(USER_KEY);
    }
}
