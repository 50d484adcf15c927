//! Session record persistence.
//!
//! SYSTEM CONTEXT
//! ==============
//! The signed-in profile lives under a single `localStorage` key. Writes go
//! through [`SessionStore`] so the same recording path runs against the
//! browser store on hydrate and an in-memory store in tests.
//!
//! TRADE-OFFS
//! ==========
//! One fixed key, overwritten unconditionally. Two tabs signing in as
//! different users race, and the last write wins.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use crate::net::types::UserProfile;

/// Storage key holding the JSON-encoded [`UserProfile`].
pub const USER_INFO_KEY: &str = "userInfo";

/// Error returned by [`record`] and [`SessionStore`] writes.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// No storage backend is reachable (no window, storage disabled, SSR).
    #[error("storage unavailable")]
    Unavailable,
    /// The backend threw while reading.
    #[error("storage read failed: {0}")]
    Read(String),
    /// The backend rejected the write, typically a quota error.
    #[error("storage write failed: {0}")]
    Write(String),
    /// The profile could not be encoded.
    #[error("failed to encode session record: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Minimal synchronous string key-value store.
pub trait SessionStore {
    /// Read the raw value under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the backend cannot be reached.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the raw value under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the backend is unavailable or rejects the write.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Persist `profile` under [`USER_INFO_KEY`], replacing any previous record.
///
/// No retry is attempted on failure.
///
/// # Errors
///
/// Returns [`StorageError`] if encoding or the store write fails.
pub fn record<S: SessionStore + ?Sized>(store: &S, profile: &UserProfile) -> Result<(), StorageError> {
    let raw = serde_json::to_string(profile)?;
    store.set_item(USER_INFO_KEY, &raw)
}

/// Load the stored profile. Missing, unreadable, or malformed records read as `None`.
pub fn load<S: SessionStore + ?Sized>(store: &S) -> Option<UserProfile> {
    let raw = store.get_item(USER_INFO_KEY).ok().flatten()?;
    serde_json::from_str(&raw).ok()
}

/// `window.localStorage`, resolved on every call.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "hydrate")]
impl BrowserStorage {
    fn storage() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or(StorageError::Unavailable)
    }
}

impl SessionStore for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "hydrate")]
        {
            Self::storage()?
                .get_item(key)
                .map_err(|e| StorageError::Read(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            Self::storage()?
                .set_item(key, value)
                .map_err(|e| StorageError::Write(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable)
        }
    }
}

/// In-memory store for tests and non-browser hosts.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
    writes: Cell<usize>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of successful `set_item` calls so far.
    #[must_use]
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }

    /// Raw value under `key`, bypassing the trait.
    #[must_use]
    pub fn raw(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }
}

impl SessionStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.raw(key))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items.borrow_mut().insert(key.to_owned(), value.to_owned());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}
