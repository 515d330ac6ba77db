//! Key-value storage primitive the review store persists into.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::errors::{Result, ReviewError};

/// Minimal string key-value storage, shaped like the browser's `localStorage`.
pub trait KeyValueStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// `window.localStorage`. Only usable inside a browser.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn local_storage() -> Option<web_sys::Storage> {
        // Fails in private browsing modes that block storage access.
        gloo_utils::window().local_storage().ok().flatten()
    }
}

impl KeyValueStorage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        let storage = Self::local_storage()?;
        storage.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let storage = Self::local_storage().ok_or_else(|| ReviewError::StorageWrite {
            message: "localStorage is not available".to_string(),
        })?;
        storage.set_item(key, value).map_err(|e| ReviewError::StorageWrite {
            message: format!("{:?}", e),
        })
    }
}

/// In-process storage for server rendering and tests.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage that already holds `value` under `key`.
    pub fn seeded(key: &str, value: &str) -> Self {
        let storage = Self::new();
        storage.entries.borrow_mut().insert(key.to_string(), value.to_string());
        storage
    }

    /// Raw text stored under `key`, for inspection.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.raw(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

impl<S: KeyValueStorage + ?Sized> KeyValueStorage for std::rc::Rc<S> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}

/// Browser storage when running as wasm, in-memory storage everywhere else
/// (the server render path has no `window`).
pub fn default_storage() -> Box<dyn KeyValueStorage> {
    #[cfg(target_arch = "wasm32")]
    {
        Box::new(BrowserStorage)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        leptos::logging::log!("[STORAGE] Not running in a browser, using in-memory storage");
        Box::new(MemoryStorage::new())
    }
}
