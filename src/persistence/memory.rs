//! In-process store, used by tests and when no backend is configured

use std::collections::BTreeMap;

use super::{RemoteStore, StoreError};

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: BTreeMap<String, f64>,
    offline: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every call fails, for exercising the best-effort paths
    pub fn offline() -> Self {
        Self {
            offline: true,
            ..Self::default()
        }
    }

    pub fn set_offline(&mut self, offline: bool) {
        self.offline = offline;
    }

    fn check(&self) -> Result<(), StoreError> {
        if self.offline {
            return Err(StoreError::Unavailable("memory store offline".into()));
        }
        Ok(())
    }
}

impl RemoteStore for MemoryStore {
    fn try_set(&mut self, name: &str, value: f64) -> Result<(), StoreError> {
        self.check()?;
        self.values.insert(name.to_owned(), value);
        Ok(())
    }

    fn try_get(&self, name: &str) -> Result<Option<f64>, StoreError> {
        self.check()?;
        Ok(self.values.get(name).copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_then_get() {
        let mut store = MemoryStore::new();
        let mut seen = None;
        store.get_variable("highscore", &mut |v| seen = Some(v));
        assert_eq!(seen, Some(None));

        store.set_variable("highscore", 120.0);
        store.get_variable("highscore", &mut |v| seen = Some(v));
        assert_eq!(seen, Some(Some(120.0)));
    }

    #[test]
    fn test_offline_toggle() {
        let mut store = MemoryStore::new();
        store.set_offline(true);
        assert!(store.try_set("x", 1.0).is_err());
        store.set_offline(false);
        assert!(store.try_set("x", 1.0).is_ok());
        assert_eq!(store.try_get("x").unwrap(), Some(1.0));
    }
}
