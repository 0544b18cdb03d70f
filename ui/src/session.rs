//! Session token storage seam.
//!
//! [`SessionStore`] is the only way the auth flow touches durable storage:
//! two fixed keys holding the opaque access and refresh tokens. The browser
//! implementation writes localStorage; [`MemorySession`] backs tests and
//! native development.

use api::TokenPair;

/// localStorage key for the access token.
pub const ACCESS_TOKEN_KEY: &str = "access";
/// localStorage key for the refresh token.
pub const REFRESH_TOKEN_KEY: &str = "refresh";

/// Durable key-value storage for the session token pair.
pub trait SessionStore {
    fn access(&self) -> Option<String>;
    fn refresh(&self) -> Option<String>;
    /// Persist whichever token fields the login response carried. Absent
    /// fields are left untouched.
    fn store(&self, tokens: &TokenPair);
    /// Drop both tokens.
    fn clear(&self);
}

/// In-memory SessionStore for testing and native development. Clones share
/// state.
#[derive(Clone, Debug, Default)]
pub struct MemorySession {
    values: std::sync::Arc<std::sync::Mutex<std::collections::HashMap<String, String>>>,
}

impl MemorySession {
    pub fn new() -> Self {
        Self::default()
    }

    fn get(&self, key: &str) -> Option<String> {
        self.values.lock().unwrap().get(key).cloned()
    }
}

impl SessionStore for MemorySession {
    fn access(&self) -> Option<String> {
        self.get(ACCESS_TOKEN_KEY)
    }

    fn refresh(&self) -> Option<String> {
        self.get(REFRESH_TOKEN_KEY)
    }

    fn store(&self, tokens: &TokenPair) {
        let mut values = self.values.lock().unwrap();
        if let Some(access) = &tokens.access {
            values.insert(ACCESS_TOKEN_KEY.to_string(), access.clone());
        }
        if let Some(refresh) = &tokens.refresh {
            values.insert(REFRESH_TOKEN_KEY.to_string(), refresh.clone());
        }
    }

    fn clear(&self) {
        let mut values = self.values.lock().unwrap();
        values.remove(ACCESS_TOKEN_KEY);
        values.remove(REFRESH_TOKEN_KEY);
    }
}

/// SessionStore over the browser's localStorage.
#[cfg(target_arch = "wasm32")]
#[derive(Clone, Copy, Debug, Default)]
pub struct WebSession;

#[cfg(target_arch = "wasm32")]
impl WebSession {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

#[cfg(target_arch = "wasm32")]
impl SessionStore for WebSession {
    fn access(&self) -> Option<String> {
        Self::storage()?.get_item(ACCESS_TOKEN_KEY).ok()?
    }

    fn refresh(&self) -> Option<String> {
        Self::storage()?.get_item(REFRESH_TOKEN_KEY).ok()?
    }

    fn store(&self, tokens: &TokenPair) {
        let Some(storage) = Self::storage() else {
            return;
        };
        if let Some(access) = &tokens.access {
            let _ = storage.set_item(ACCESS_TOKEN_KEY, access);
        }
        if let Some(refresh) = &tokens.refresh {
            let _ = storage.set_item(REFRESH_TOKEN_KEY, refresh);
        }
    }

    fn clear(&self) {
        let Some(storage) = Self::storage() else {
            return;
        };
        let _ = storage.remove_item(ACCESS_TOKEN_KEY);
        let _ = storage.remove_item(REFRESH_TOKEN_KEY);
    }
}
