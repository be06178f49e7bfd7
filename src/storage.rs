//! Durable client-side key-value storage.
//!
//! All persisted client state lives under three keys: the active theme and
//! the two session credentials. Access goes through the [`StorageBackend`]
//! trait so the stores can be exercised in native tests against an
//! in-memory fake instead of `localStorage`.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Storage key for the active theme name.
pub const THEME_KEY: &str = "theme";
/// Storage key for the session access token.
pub const ACCESS_TOKEN_KEY: &str = "access_token";
/// Storage key for the session user id.
pub const USER_ID_KEY: &str = "user_id";

/// Durable key-value storage surviving application restarts.
///
/// Reads and writes are synchronous and last-write-wins; nothing locks
/// across tabs. Failures degrade to `None` / no-op rather than erroring.
pub trait StorageBackend {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// `localStorage`-backed storage. Requires a browser environment; outside
/// of it every read returns `None` and writes are dropped.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl StorageBackend for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            let window = web_sys::window()?;
            let storage = window.local_storage().ok().flatten()?;
            storage.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(window) = web_sys::window() {
                if let Ok(Some(storage)) = window.local_storage() {
                    let _ = storage.set_item(key, value);
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
        }
    }

    fn remove(&self, key: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(window) = web_sys::window() {
                if let Ok(Some(storage)) = window.local_storage() {
                    let _ = storage.remove_item(key);
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
        }
    }
}

/// In-memory storage fake for native tests.
///
/// Cloning shares the underlying map, so a store reconstructed over a clone
/// sees previously persisted values — the same observable behavior as two
/// initializations against one `localStorage`.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl StorageBackend for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}
