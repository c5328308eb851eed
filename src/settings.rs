//! Game settings and preferences
//!
//! Persisted as JSON: a file next to the binary on native, LocalStorage on web.
//! Missing fields fall back to defaults so old settings files keep loading.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::persistence::StoreError;
use crate::sim::Arena;

/// Smallest arena the spawners and player spawn point still fit in
pub const MIN_ARENA_SIZE: f32 = 200.0;

/// Shortest pacing interval accepted from settings
pub const MIN_INTERVAL_SECS: f64 = 1.0;

/// Non-positive or NaN falls back to the default, anything shorter than
/// `MIN_INTERVAL_SECS` is raised to it
fn checked_interval(name: &str, secs: f64, default_ms: f64) -> f64 {
    if !(secs > 0.0) {
        log::warn!("Invalid {} interval {}s, using default", name, secs);
        default_ms / 1000.0
    } else if secs < MIN_INTERVAL_SECS {
        log::warn!("{} interval {}s too short, clamping to {}s", name, secs, MIN_INTERVAL_SECS);
        MIN_INTERVAL_SECS
    } else {
        secs
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Arena ===
    pub arena_width: f32,
    pub arena_height: f32,

    // === Player ===
    /// Pixels moved per directional input
    pub player_step: f32,
    /// Visible graze ring radius (detection adds `GRAZE_MARGIN`)
    pub graze_radius: f32,

    // === Run rules ===
    /// Fixed RNG seed (random per process when unset)
    pub seed: Option<u64>,
    /// Start runs invincible
    pub practice: bool,
    /// Unlock patterns gradually by survival time instead of all at once
    pub progressive_unlocks: bool,

    // === Pacing ===
    pub difficulty_interval_secs: f64,
    pub dialog_interval_secs: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,

            player_step: PLAYER_STEP,
            graze_radius: GRAZE_RADIUS,

            seed: None,
            practice: false,
            progressive_unlocks: false,

            difficulty_interval_secs: DIFFICULTY_INTERVAL_MS / 1000.0,
            dialog_interval_secs: DIALOG_INTERVAL_MS / 1000.0,
        }
    }
}

impl Settings {
    pub fn arena(&self) -> Arena {
        Arena::new(self.arena_width, self.arena_height)
    }

    pub fn difficulty_interval_ms(&self) -> f64 {
        self.difficulty_interval_secs * 1000.0
    }

    pub fn dialog_interval_ms(&self) -> f64 {
        self.dialog_interval_secs * 1000.0
    }

    /// Clamp out-of-range values (logged) so the simulation never sees them
    pub fn validated(mut self) -> Self {
        if !(self.arena_width >= MIN_ARENA_SIZE) || !(self.arena_height >= MIN_ARENA_SIZE) {
            log::warn!(
                "Arena {}x{} too small, clamping to at least {}",
                self.arena_width,
                self.arena_height,
                MIN_ARENA_SIZE
            );
            self.arena_width = self.arena_width.max(MIN_ARENA_SIZE);
            self.arena_height = self.arena_height.max(MIN_ARENA_SIZE);
        }
        if !(self.player_step > 0.0) {
            log::warn!("Invalid player step {}, using default", self.player_step);
            self.player_step = PLAYER_STEP;
        }
        if !(self.graze_radius >= 0.0) {
            self.graze_radius = GRAZE_RADIUS;
        }
        self.difficulty_interval_secs =
            checked_interval("difficulty", self.difficulty_interval_secs, DIFFICULTY_INTERVAL_MS);
        self.dialog_interval_secs =
            checked_interval("dialog", self.dialog_interval_secs, DIALOG_INTERVAL_MS);
        self
    }

    pub fn from_json(json: &str) -> Result<Self, StoreError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, StoreError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Default settings file name
    pub const FILE_NAME: &'static str = "settings.json";

    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "bullet_hell_settings";

    /// Load settings from a JSON file, falling back to defaults
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from(path: &std::path::Path) -> Self {
        let loaded = std::fs::read_to_string(path)
            .map_err(StoreError::from)
            .and_then(|json| Self::from_json(&json));
        match loaded {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(StoreError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No settings at {}, using defaults", path.display());
                Self::default()
            }
            Err(e) => {
                log::warn!("Ignoring settings at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save settings to a JSON file
    #[cfg(not(target_arch = "wasm32"))]
    pub fn save_to(&self, path: &std::path::Path) -> Result<(), StoreError> {
        std::fs::write(path, self.to_json()?)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring stored settings: {}", e),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = self.to_json() {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Settings saved");
            }
        }
    }
}
