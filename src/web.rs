//! Browser host bindings
//!
//! A JS page owns the canvas and the `requestAnimationFrame` loop; it calls
//! `tick` once per frame, forwards key presses and draws the returned
//! command list.

use wasm_bindgen::prelude::*;

use crate::highscores::HighScores;
use crate::hud::hud_text;
use crate::persistence::LocalStorageStore;
use crate::render::draw_list;
use crate::settings::Settings;
use crate::sim::{GameEvent, Intent, Simulation};

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"logger already initialised".into());
    }
    log::info!("Bullet hell core loaded");
}

#[wasm_bindgen]
pub struct WebGame {
    sim: Simulation,
    scores: HighScores,
    store: LocalStorageStore,
}

#[wasm_bindgen]
impl WebGame {
    #[wasm_bindgen(constructor)]
    pub fn new(now_ms: f64) -> WebGame {
        let settings = Settings::load();
        let seed = settings.seed.unwrap_or_else(|| js_sys::Date::now() as u64);
        let scores = HighScores::load();
        let mut store = LocalStorageStore::new();
        scores.sync_remote(&mut store);
        WebGame {
            sim: Simulation::new(settings, seed, now_ms),
            scores,
            store,
        }
    }

    /// Advance one frame; true when the run ended on this frame
    pub fn tick(&mut self, now_ms: f64) -> bool {
        let mut ended = false;
        for event in self.sim.tick(now_ms) {
            if let GameEvent::GameOver(run) = event {
                ended = true;
                if self.scores.add_score(&run, js_sys::Date::now()).is_some() {
                    self.scores.save();
                }
                self.scores.sync_remote(&mut self.store);
            }
        }
        ended
    }

    /// Forward a `KeyboardEvent.key`; false when it was ignored
    pub fn key_down(&mut self, key: &str, now_ms: f64) -> bool {
        Intent::from_key(key).is_some_and(|intent| self.sim.apply_intent(intent, now_ms))
    }

    pub fn snapshot_json(&self, now_ms: f64) -> String {
        to_json(&self.sim.snapshot(now_ms))
    }

    pub fn draw_list_json(&self, now_ms: f64) -> String {
        to_json(&draw_list(&self.sim.snapshot(now_ms)))
    }

    pub fn hud_json(&self, now_ms: f64) -> String {
        to_json(&hud_text(&self.sim.snapshot(now_ms)))
    }

    pub fn high_scores_json(&self) -> String {
        to_json(&self.scores)
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|e| {
        log::warn!("Snapshot serialization failed: {}", e);
        "null".to_string()
    })
}
