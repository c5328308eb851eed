//! Best-effort remote variable store
//!
//! Named numeric variables (e.g. the all-time high score) mirrored to some
//! backing store. The game never depends on a write landing: failures are
//! logged and swallowed at this boundary.

#[cfg(not(target_arch = "wasm32"))]
pub mod file;
#[cfg(target_arch = "wasm32")]
pub mod local_storage;
pub mod memory;

#[cfg(not(target_arch = "wasm32"))]
pub use file::JsonFileStore;
#[cfg(target_arch = "wasm32")]
pub use local_storage::LocalStorageStore;
pub use memory::MemoryStore;

use std::fmt;

/// Variable holding the best score ever recorded
pub const HIGHSCORE_VARIABLE: &str = "highscore";

/// Storage path of a named variable
pub fn variable_path(name: &str) -> String {
    format!("variables/{name}")
}

/// Store failures (never surfaced to the simulation)
#[derive(Debug)]
pub enum StoreError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    /// Backend missing or offline
    Unavailable(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Io(e) => write!(f, "i/o error: {e}"),
            StoreError::Parse(e) => write!(f, "malformed json: {e}"),
            StoreError::Unavailable(why) => write!(f, "store unavailable: {why}"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Io(e) => Some(e),
            StoreError::Parse(e) => Some(e),
            StoreError::Unavailable(_) => None,
        }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(e: std::io::Error) -> Self {
        StoreError::Io(e)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        StoreError::Parse(e)
    }
}

/// A named-variable backend.
///
/// Implementors provide the fallible `try_*` pair; callers use the
/// best-effort `set_variable`/`get_variable`, which only log on failure.
pub trait RemoteStore {
    fn try_set(&mut self, name: &str, value: f64) -> Result<(), StoreError>;
    fn try_get(&self, name: &str) -> Result<Option<f64>, StoreError>;

    /// Fire-and-forget write
    fn set_variable(&mut self, name: &str, value: f64) {
        match self.try_set(name, value) {
            Ok(()) => log::debug!("Stored {} = {}", variable_path(name), value),
            Err(e) => log::warn!("Could not store {}: {}", variable_path(name), e),
        }
    }

    /// Read a variable; `callback` receives `None` when it was never set and
    /// is not called at all when the store fails
    fn get_variable(&self, name: &str, callback: &mut dyn FnMut(Option<f64>)) {
        match self.try_get(name) {
            Ok(value) => callback(value),
            Err(e) => log::warn!("Could not read {}: {}", variable_path(name), e),
        }
    }
}
