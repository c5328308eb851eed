//! JSON file store for the native build
//!
//! All variables live in one object keyed by their `variables/<name>` path.
//! Every write rewrites the file through a temp file and rename.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use super::{RemoteStore, StoreError, variable_path};

#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Default file name next to the binary
    pub const FILE_NAME: &'static str = "variables.json";

    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, f64>, StoreError> {
        match fs::read_to_string(&self.path) {
            Ok(json) => Ok(serde_json::from_str(&json)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn write_all(&self, values: &BTreeMap<String, f64>) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(values)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl RemoteStore for JsonFileStore {
    fn try_set(&mut self, name: &str, value: f64) -> Result<(), StoreError> {
        let mut values = self.read_all()?;
        values.insert(variable_path(name), value);
        self.write_all(&values)
    }

    fn try_get(&self, name: &str) -> Result<Option<f64>, StoreError> {
        Ok(self.read_all()?.get(&variable_path(name)).copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store(tag: &str) -> (PathBuf, JsonFileStore) {
        let dir = std::env::temp_dir().join(format!("bullet_hell_{tag}_{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(JsonFileStore::FILE_NAME);
        let _ = fs::remove_file(&path);
        (dir, JsonFileStore::new(path))
    }

    #[test]
    fn test_missing_file_reads_as_unset() {
        let (dir, store) = temp_store("missing");
        assert_eq!(store.try_get("highscore").unwrap(), None);
        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn test_values_persist_across_instances() {
        let (dir, mut store) = temp_store("persist");
        store.try_set("highscore", 321.0).unwrap();
        store.try_set("other", 1.5).unwrap();

        let reopened = JsonFileStore::new(store.path());
        assert_eq!(reopened.try_get("highscore").unwrap(), Some(321.0));
        assert_eq!(reopened.try_get("other").unwrap(), Some(1.5));

        let raw = fs::read_to_string(store.path()).unwrap();
        assert!(raw.contains("variables/highscore"));
        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn test_corrupt_file_is_a_parse_error() {
        let (dir, mut store) = temp_store("corrupt");
        fs::write(store.path(), "{ nope").unwrap();
        assert!(matches!(store.try_get("highscore"), Err(StoreError::Parse(_))));
        // Best-effort write leaves the file alone and does not panic
        store.set_variable("highscore", 1.0);
        let _ = fs::remove_dir_all(dir);
    }
}
