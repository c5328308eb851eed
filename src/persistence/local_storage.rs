//! Browser LocalStorage store (wasm32 only)

use super::{RemoteStore, StoreError, variable_path};

#[derive(Debug, Clone, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Result<web_sys::Storage, StoreError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .ok_or_else(|| StoreError::Unavailable("no LocalStorage".into()))
    }
}

impl RemoteStore for LocalStorageStore {
    fn try_set(&mut self, name: &str, value: f64) -> Result<(), StoreError> {
        Self::storage()?
            .set_item(&variable_path(name), &value.to_string())
            .map_err(|e| StoreError::Unavailable(format!("{e:?}")))
    }

    fn try_get(&self, name: &str) -> Result<Option<f64>, StoreError> {
        let raw = Self::storage()?
            .get_item(&variable_path(name))
            .map_err(|e| StoreError::Unavailable(format!("{e:?}")))?;
        match raw {
            Some(text) => Ok(Some(serde_json::from_str(&text)?)),
            None => Ok(None),
        }
    }
}
