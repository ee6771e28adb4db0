//! Browser-backed token store

use web_sys::Storage;
use wicket_client::TokenStore;

/// Token store over `localStorage`, so the pair survives page reloads.
/// The storage handle is fetched per call; the struct itself carries
/// nothing browser-specific and stays `Send + Sync`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTokenStore;

fn local_storage() -> Option<Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl TokenStore for BrowserTokenStore {
    fn get(&self, name: &str) -> Option<String> {
        local_storage().and_then(|storage| storage.get_item(name).ok().flatten())
    }

    fn set(&self, name: &str, value: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(name, value);
        }
    }

    fn remove(&self, name: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(name);
        }
    }
}
