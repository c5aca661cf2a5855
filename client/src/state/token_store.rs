//! Persistent slot for the bearer token.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session manager reads this once at startup and writes it on every
//! token change. Storage failures read as "no token"; there is nothing
//! useful a caller could do with them.

#[cfg(test)]
#[path = "token_store_test.rs"]
mod token_store_test;

use std::sync::{Mutex, PoisonError};

/// A single persisted string value.
pub trait TokenStore: Send + Sync {
    /// Stored token, or an empty string when absent.
    fn get(&self) -> String;

    /// Store `value`; an empty value deletes the slot instead.
    fn set(&self, value: &str);

    fn delete(&self);
}

/// `localStorage`-backed store. Outside the browser it holds nothing.
#[derive(Clone, Copy, Debug)]
pub struct BrowserTokenStore {
    key: &'static str,
}

impl BrowserTokenStore {
    pub fn new(key: &'static str) -> Self {
        Self { key }
    }
}

impl Default for BrowserTokenStore {
    fn default() -> Self {
        Self::new(crate::config::TOKEN_STORAGE_KEY)
    }
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl TokenStore for BrowserTokenStore {
    fn get(&self) -> String {
        #[cfg(feature = "hydrate")]
        {
            local_storage()
                .and_then(|storage| storage.get_item(self.key).ok().flatten())
                .unwrap_or_default()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = self.key;
            String::new()
        }
    }

    fn set(&self, value: &str) {
        if value.is_empty() {
            self.delete();
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.set_item(self.key, value);
            }
        }
    }

    fn delete(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(self.key);
            }
        }
    }
}

/// Process-local store, used by tests and server rendering.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    slot: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    pub fn with_token(token: &str) -> Self {
        let store = Self::default();
        store.set(token);
        store
    }

    /// True when the slot holds a value (as opposed to an empty string).
    pub fn is_present(&self) -> bool {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner).is_some()
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> String {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner).clone().unwrap_or_default()
    }

    fn set(&self, value: &str) {
        let mut slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);
        *slot = (!value.is_empty()).then(|| value.to_owned());
    }

    fn delete(&self) {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }
}
