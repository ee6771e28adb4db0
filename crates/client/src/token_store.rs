//! Token storage
//!
//! The store is the sole owner of the access/refresh token pair. The
//! HTTP client reads and writes tokens only through it, never holding
//! its own copy across requests, so a refresh performed for one request
//! is visible to every subsequent one. The store carries no expiry
//! logic of its own; expiry is detected only by the server's 401.

use std::collections::HashMap;
use std::sync::Mutex;

/// Slot name for the short-lived access token
pub const ACCESS_TOKEN: &str = "access_token";

/// Slot name for the longer-lived refresh token
pub const REFRESH_TOKEN: &str = "refresh_token";

/// Named token slots backing the client
///
/// The frontend implements this over browser storage so tokens survive
/// page reloads; tests use [`MemoryTokenStore`].
pub trait TokenStore: Send + Sync {
    fn get(&self, name: &str) -> Option<String>;
    fn set(&self, name: &str, value: &str);
    fn remove(&self, name: &str);
}

/// In-memory token store for tests and native callers
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    tokens: Mutex<HashMap<String, String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self, name: &str) -> Option<String> {
        self.tokens
            .lock()
            .expect("token store lock poisoned")
            .get(name)
            .cloned()
    }

    fn set(&self, name: &str, value: &str) {
        self.tokens
            .lock()
            .expect("token store lock poisoned")
            .insert(name.to_string(), value.to_string());
    }

    fn remove(&self, name: &str) {
        self.tokens
            .lock()
            .expect("token store lock poisoned")
            .remove(name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slots_are_independent() {
        let store = MemoryTokenStore::new();
        store.set(ACCESS_TOKEN, "AT1");
        store.set(REFRESH_TOKEN, "RT1");

        store.remove(ACCESS_TOKEN);
        assert_eq!(store.get(ACCESS_TOKEN), None);
        assert_eq!(store.get(REFRESH_TOKEN), Some("RT1".to_string()));
    }

    #[test]
    fn set_replaces_existing_value() {
        let store = MemoryTokenStore::new();
        store.set(ACCESS_TOKEN, "AT1");
        store.set(ACCESS_TOKEN, "AT2");
        assert_eq!(store.get(ACCESS_TOKEN), Some("AT2".to_string()));
    }

    #[test]
    fn missing_slot_reads_as_absent() {
        let store = MemoryTokenStore::new();
        assert_eq!(store.get(ACCESS_TOKEN), None);
        store.remove(ACCESS_TOKEN);
        assert_eq!(store.get(ACCESS_TOKEN), None);
    }
}
