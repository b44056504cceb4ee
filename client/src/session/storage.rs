//! Key-value persistence for the signed-in session.
//!
//! SYSTEM CONTEXT
//! ==============
//! `AuthStore` is the only writer of these keys. It talks to storage through
//! the `SessionStorage` trait so native tests can swap in `MemoryStorage`
//! while the browser build uses `window.sessionStorage`.
//!
//! TRADE-OFFS
//! ==========
//! `sessionStorage` is scoped to the tab: the session does not survive a
//! browser restart. Outside the browser every call reports `Unavailable`
//! and callers fall back to in-memory state.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;

/// Storage key holding the bearer token.
pub const TOKEN_KEY: &str = "token";
/// Storage key holding the signed-in user's email.
pub const USER_EMAIL_KEY: &str = "userEmail";
/// Storage key holding the signed-in user's role.
pub const USER_ROLE_KEY: &str = "userRole";

/// All keys owned by the auth session, in write order.
pub const SESSION_KEYS: [&str; 3] = [TOKEN_KEY, USER_EMAIL_KEY, USER_ROLE_KEY];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// No persistence area exists (SSR, native builds, or the browser denied access).
    #[error("session storage unavailable")]
    Unavailable,
    /// The browser rejected a read or write (quota, security policy).
    #[error("session storage {op} failed for key {key:?}")]
    Access { op: &'static str, key: String },
}

/// Minimal string key-value contract for session persistence.
pub trait SessionStorage {
    /// Read the value stored under `key`, `None` when unset.
    ///
    /// # Errors
    ///
    /// Returns a `StorageError` when the persistence area cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Create or overwrite the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns a `StorageError` when the persistence area cannot be written.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete the value stored under `key`. Absent keys are a no-op.
    ///
    /// # Errors
    ///
    /// Returns a `StorageError` when the persistence area cannot be written.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

/// In-memory storage area. Used by tests and as a stand-in wherever no
/// browser is present.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// `window.sessionStorage`, resolved on every call.
///
/// Holding no handle keeps the type `Send + Sync`, which Leptos signals
/// require.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BrowserSessionStorage;

#[cfg(feature = "hydrate")]
fn browser_area() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .and_then(|w| w.session_storage().ok().flatten())
        .ok_or(StorageError::Unavailable)
}

impl SessionStorage for BrowserSessionStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "hydrate")]
        {
            browser_area()?
                .get_item(key)
                .map_err(|_| StorageError::Access { op: "read", key: key.to_owned() })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            browser_area()?
                .set_item(key, value)
                .map_err(|_| StorageError::Access { op: "write", key: key.to_owned() })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable)
        }
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            browser_area()?
                .remove_item(key)
                .map_err(|_| StorageError::Access { op: "remove", key: key.to_owned() })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }
}
