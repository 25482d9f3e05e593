//! Session Token Storage
//!
//! The token lives in `localStorage` under a fixed key. Pages read it once
//! when they mount and carry it in a `Session` from then on.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::api::ApiError;

/// localStorage key holding the session token
pub const TOKEN_KEY: &str = "token";

/// Durable key/value storage for the token
pub trait TokenStore {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str) -> Result<(), ApiError>;
}

/// Browser `localStorage`
pub struct LocalTokenStore;

impl LocalTokenStore {
    fn storage() -> Result<web_sys::Storage, ApiError> {
        let window = web_sys::window().ok_or_else(|| ApiError::Storage("window is unavailable".to_string()))?;
        window
            .local_storage()
            .map_err(|_| ApiError::Storage("failed to access local storage".to_string()))?
            .ok_or_else(|| ApiError::Storage("local storage is unavailable".to_string()))
    }
}

impl TokenStore for LocalTokenStore {
    fn load(&self) -> Option<String> {
        Self::storage().ok()?.get_item(TOKEN_KEY).ok()?
    }

    fn save(&self, token: &str) -> Result<(), ApiError> {
        Self::storage()?
            .set_item(TOKEN_KEY, token)
            .map_err(|_| ApiError::Storage("failed to persist session token".to_string()))
    }
}

/// In-memory store, for tests and storage-less contexts
#[derive(Default)]
pub struct MemoryTokenStore {
    values: RefCell<HashMap<String, String>>,
}

impl MemoryTokenStore {
    pub fn with_token(token: &str) -> Self {
        let store = Self::default();
        store.values.borrow_mut().insert(TOKEN_KEY.to_string(), token.to_string());
        store
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.values.borrow().get(TOKEN_KEY).cloned()
    }

    fn save(&self, token: &str) -> Result<(), ApiError> {
        self.values.borrow_mut().insert(TOKEN_KEY.to_string(), token.to_string());
        Ok(())
    }
}

/// Token snapshot taken at page mount
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    token: Option<String>,
}

impl Session {
    pub fn new(token: Option<String>) -> Self {
        Self { token: token.filter(|t| !t.is_empty()) }
    }

    pub fn load(store: &impl TokenStore) -> Self {
        Self::new(store.load())
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }
}
