//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The single source of truth for "who is logged in". Route guards, the API
//! client, and role-aware pages read it; only `login`/`logout` write it.
//!
//! ERROR HANDLING
//! ==============
//! Storage failures never surface to callers. They are logged and the store
//! keeps working from memory, so the worst visible outcome is being sent back
//! to `/login` after a reload.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::fmt;

use crate::session::storage::{
    BrowserSessionStorage, SESSION_KEYS, SessionStorage, TOKEN_KEY, USER_EMAIL_KEY, USER_ROLE_KEY,
};

/// Role string carried by administrator sessions.
pub const ADMIN_ROLE: &str = "Admin";
/// Role string carried by client sessions.
pub const CLIENT_ROLE: &str = "Client";

/// The authenticated identity held by the browser. Empty `token` means no session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub user_email: String,
    pub role: String,
}

impl Session {
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        !self.token.is_empty()
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role == ADMIN_ROLE
    }

    #[must_use]
    pub fn is_client(&self) -> bool {
        self.role == CLIENT_ROLE
    }
}

/// Log form of a session: role only, never the email or token.
impl fmt::Display for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_authenticated() {
            write!(f, "role {:?}", self.role)
        } else {
            f.write_str("anonymous")
        }
    }
}

/// Session state paired with the storage area it persists to.
///
/// `loaded` stays false until storage has been read. The server never reads
/// browser storage, so SSR and the first hydration pass both render the
/// not-yet-loaded state.
#[derive(Clone, Debug)]
pub struct AuthStore<S> {
    session: Session,
    loaded: bool,
    storage: S,
}

/// The store as wired into the browser app.
pub type BrowserAuthStore = AuthStore<BrowserSessionStorage>;

impl<S: SessionStorage> AuthStore<S> {
    /// An empty, not-yet-loaded store over `storage`. Nothing is read.
    pub fn pending(storage: S) -> Self {
        Self { session: Session::default(), loaded: false, storage }
    }

    /// Hydrate from `storage`. Missing or unreadable keys become empty strings.
    pub fn load(storage: S) -> Self {
        let mut store = Self::pending(storage);
        store.reload();
        store
    }

    /// Re-read the session from storage and mark the store loaded.
    pub fn reload(&mut self) {
        self.session = Session {
            token: read_key(&self.storage, TOKEN_KEY),
            user_email: read_key(&self.storage, USER_EMAIL_KEY),
            role: read_key(&self.storage, USER_ROLE_KEY),
        };
        self.loaded = true;
        if self.session.is_authenticated() {
            log::debug!("restored session ({})", self.session);
        }
    }

    /// Replace the current session and persist it.
    ///
    /// Re-login without a prior logout simply overwrites. An empty `token`
    /// is accepted and leaves the store unauthenticated. If any key cannot be
    /// written, all session keys are cleared so a reload never mixes two
    /// sessions.
    pub fn login(&mut self, token: &str, email: &str, role: &str) {
        if !token.is_empty() && (email.is_empty() || role.is_empty()) {
            log::warn!(
                "login with incomplete identity: email set={} role={role:?}",
                !email.is_empty()
            );
        }
        self.session = Session {
            token: token.to_owned(),
            user_email: email.to_owned(),
            role: role.to_owned(),
        };
        self.loaded = true;
        let writes = [(TOKEN_KEY, token), (USER_EMAIL_KEY, email), (USER_ROLE_KEY, role)];
        for (key, value) in writes {
            if let Err(e) = self.storage.set(key, value) {
                log::warn!("session not persisted, continuing in memory: {e}");
                self.clear_storage();
                return;
            }
        }
    }

    /// Clear the session from memory and storage. Safe to call repeatedly.
    pub fn logout(&mut self) {
        self.session = Session::default();
        self.loaded = true;
        self.clear_storage();
    }

    /// Give back the storage area, e.g. to hydrate a fresh store from it.
    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Remove every session key. A key that cannot be removed is blanked
    /// instead, which reads back as absent.
    fn clear_storage(&mut self) {
        for key in SESSION_KEYS {
            if let Err(e) = self.storage.remove(key) {
                log::warn!("could not remove {key} from session storage: {e}");
                if let Err(e) = self.storage.set(key, "") {
                    log::warn!("could not blank {key} in session storage: {e}");
                }
            }
        }
    }
}

impl<S> AuthStore<S> {
    /// Whether storage has been read (or a login/logout has happened).
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub fn token(&self) -> &str {
        &self.session.token
    }

    #[must_use]
    pub fn user_email(&self) -> &str {
        &self.session.user_email
    }

    #[must_use]
    pub fn role(&self) -> &str {
        &self.session.role
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.session.is_admin()
    }

    #[must_use]
    pub fn is_client(&self) -> bool {
        self.session.is_client()
    }
}

impl BrowserAuthStore {
    /// Empty store for the first render, identical on server and browser.
    #[must_use]
    pub fn unhydrated() -> Self {
        Self::pending(BrowserSessionStorage)
    }
}

fn read_key<S: SessionStorage>(storage: &S, key: &str) -> String {
    match storage.get(key) {
        Ok(value) => value.unwrap_or_default(),
        Err(e) => {
            log::warn!("could not read {key} from session storage: {e}");
            String::new()
        }
    }
}
