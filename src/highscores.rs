//! High score leaderboard
//!
//! Tracks the top 10 finished runs. Persisted as JSON (a file on native,
//! LocalStorage on web); the best score is also mirrored to the remote store.

use serde::{Deserialize, Serialize};

use crate::persistence::{HIGHSCORE_VARIABLE, RemoteStore, StoreError};
use crate::sim::RunSummary;

/// Maximum number of high scores to keep
pub const MAX_HIGH_SCORES: usize = 10;

/// A single high score entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HighScoreEntry {
    pub score: u64,
    /// Whole seconds survived
    pub survival_secs: u64,
    /// Difficulty reached
    pub difficulty: u32,
    /// Unix timestamp (ms) when achieved
    pub timestamp: f64,
}

/// High score leaderboard
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HighScores {
    pub entries: Vec<HighScoreEntry>,
}

impl HighScores {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "bullet_hell_highscores";

    /// Default file name for the native build
    pub const FILE_NAME: &'static str = "highscores.json";

    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Check if a score qualifies for the leaderboard
    pub fn qualifies(&self, score: u64) -> bool {
        if score == 0 {
            return false;
        }
        if self.entries.len() < MAX_HIGH_SCORES {
            return true;
        }
        self.entries.last().is_none_or(|e| score > e.score)
    }

    /// Rank a score would achieve (1-indexed, None if it doesn't qualify)
    pub fn potential_rank(&self, score: u64) -> Option<usize> {
        if !self.qualifies(score) {
            return None;
        }
        let rank = self.entries.iter().position(|e| score > e.score);
        Some(rank.unwrap_or(self.entries.len()) + 1)
    }

    /// Record a finished run. Returns the rank achieved (1-indexed) or None
    /// if it didn't qualify.
    pub fn add_score(&mut self, run: &RunSummary, timestamp: f64) -> Option<usize> {
        if !self.qualifies(run.score) {
            return None;
        }

        let entry = HighScoreEntry {
            score: run.score,
            survival_secs: run.survival_secs,
            difficulty: run.difficulty,
            timestamp,
        };

        // Sorted descending by score; ties keep the older run first
        let pos = self.entries.iter().position(|e| run.score > e.score);
        let rank = match pos {
            Some(i) => {
                self.entries.insert(i, entry);
                i + 1
            }
            None => {
                self.entries.push(entry);
                self.entries.len()
            }
        };

        self.entries.truncate(MAX_HIGH_SCORES);
        log::debug!("High score {} at rank {}", run.score, rank);
        Some(rank)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn top_score(&self) -> Option<u64> {
        self.entries.first().map(|e| e.score)
    }

    /// Publish the local best if it beats the remote one. Returns the best
    /// score known after syncing.
    pub fn sync_remote(&self, store: &mut dyn RemoteStore) -> Option<u64> {
        let mut remote = None;
        store.get_variable(HIGHSCORE_VARIABLE, &mut |v| remote = v);
        let remote = remote.filter(|v| v.is_finite() && *v >= 0.0).map(|v| v as u64);

        match (self.top_score(), remote) {
            (Some(local), Some(best)) if local <= best => Some(best),
            (Some(local), _) => {
                store.set_variable(HIGHSCORE_VARIABLE, local as f64);
                Some(local)
            }
            (None, best) => best,
        }
    }

    pub fn from_json(json: &str) -> Result<Self, StoreError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load high scores from a JSON file, starting fresh when missing or unreadable
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from(path: &std::path::Path) -> Self {
        let loaded = std::fs::read_to_string(path)
            .map_err(StoreError::from)
            .and_then(|json| Self::from_json(&json));
        match loaded {
            Ok(scores) => {
                log::info!("Loaded {} high scores", scores.entries.len());
                scores
            }
            Err(StoreError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No high scores found, starting fresh");
                Self::new()
            }
            Err(e) => {
                log::warn!("Ignoring high scores at {}: {}", path.display(), e);
                Self::new()
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save_to(&self, path: &std::path::Path) -> Result<(), StoreError> {
        std::fs::write(path, serde_json::to_string_pretty(self)?)?;
        log::info!("High scores saved ({} entries)", self.entries.len());
        Ok(())
    }

    /// Load high scores from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(scores) = Self::from_json(&json) {
                    log::info!("Loaded {} high scores", scores.entries.len());
                    return scores;
                }
            }
        }

        log::info!("No high scores found, starting fresh");
        Self::new()
    }

    /// Save high scores to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("High scores saved ({} entries)", self.entries.len());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStore;

    fn run(score: u64) -> RunSummary {
        RunSummary {
            score,
            survival_secs: score / 10,
            difficulty: 1,
        }
    }

    #[test]
    fn test_ranks_and_trims() {
        let mut scores = HighScores::new();
        assert_eq!(scores.add_score(&run(0), 0.0), None);
        assert_eq!(scores.add_score(&run(50), 1.0), Some(1));
        assert_eq!(scores.add_score(&run(80), 2.0), Some(1));
        assert_eq!(scores.add_score(&run(60), 3.0), Some(2));
        assert_eq!(scores.top_score(), Some(80));

        for i in 0..20 {
            scores.add_score(&run(100 + i), 10.0 + i as f64);
        }
        assert_eq!(scores.entries.len(), MAX_HIGH_SCORES);
        assert_eq!(scores.top_score(), Some(119));
        assert!(!scores.qualifies(50));
        assert_eq!(scores.potential_rank(200), Some(1));
    }

    #[test]
    fn test_ties_keep_older_first() {
        let mut scores = HighScores::new();
        scores.add_score(&run(40), 1.0);
        assert_eq!(scores.add_score(&run(40), 2.0), Some(2));
        assert_eq!(scores.entries[0].timestamp, 1.0);
    }

    #[test]
    fn test_sync_publishes_only_improvements() {
        let mut store = MemoryStore::new();
        let mut scores = HighScores::new();
        assert_eq!(scores.sync_remote(&mut store), None);

        scores.add_score(&run(90), 0.0);
        assert_eq!(scores.sync_remote(&mut store), Some(90));
        assert_eq!(store.try_get(HIGHSCORE_VARIABLE).unwrap(), Some(90.0));

        store.try_set(HIGHSCORE_VARIABLE, 500.0).unwrap();
        assert_eq!(scores.sync_remote(&mut store), Some(500));
        assert_eq!(store.try_get(HIGHSCORE_VARIABLE).unwrap(), Some(500.0));
    }

    #[test]
    fn test_sync_survives_offline_store() {
        let mut store = MemoryStore::offline();
        let mut scores = HighScores::new();
        scores.add_score(&run(30), 0.0);
        assert_eq!(scores.sync_remote(&mut store), Some(30));
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_file_round_trip() {
        let dir = std::env::temp_dir().join(format!("bullet_hell_scores_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(HighScores::FILE_NAME);
        let _ = std::fs::remove_file(&path);

        assert!(HighScores::load_from(&path).is_empty());
        let mut scores = HighScores::new();
        scores.add_score(&run(70), 5.0);
        scores.save_to(&path).unwrap();
        let loaded = HighScores::load_from(&path);
        assert_eq!(loaded.entries, scores.entries);
        let _ = std::fs::remove_dir_all(&dir);
    }
}
