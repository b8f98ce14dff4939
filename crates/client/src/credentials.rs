//! Credential storage capability.
//!
//! Modeled on browser key-value storage: the client only needs get/set/remove on
//! one key. Implementations replace whole values, so readers never see a torn token.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

/// Key under which the bearer token is stored.
pub const AUTH_TOKEN_KEY: &str = "authToken";

pub trait CredentialStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Process-local store. Suitable for tests and headless callers.
#[derive(Debug, Default)]
pub struct InMemoryCredentialStore {
    entries: RwLock<HashMap<String, String>>,
}

impl InMemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a token, as if a login had already happened.
    pub fn with_token(token: &str) -> Self {
        let store = Self::new();
        store.set(AUTH_TOKEN_KEY, token);
        store
    }
}

impl CredentialStore for InMemoryCredentialStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_get_remove() {
        let store = InMemoryCredentialStore::new();
        assert_eq!(store.get(AUTH_TOKEN_KEY), None);

        store.set(AUTH_TOKEN_KEY, "t1");
        store.set(AUTH_TOKEN_KEY, "t2");
        assert_eq!(store.get(AUTH_TOKEN_KEY).as_deref(), Some("t2"));

        store.remove(AUTH_TOKEN_KEY);
        assert_eq!(store.get(AUTH_TOKEN_KEY), None);
    }

    #[test]
    fn seeded_store_holds_token() {
        let store = InMemoryCredentialStore::with_token("jwt-token");
        assert_eq!(store.get(AUTH_TOKEN_KEY).as_deref(), Some("jwt-token"));
    }
}
