//! Discrete player intents and the phase machine they drive

use serde::{Deserialize, Serialize};

use super::state::{Direction, GamePhase, Simulation};

/// One discrete command from the input source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Intent {
    Move(Direction),
    TogglePause,
    Restart,
    /// Toggle invincibility in any phase; switching it off restarts the run
    TogglePractice,
}

impl Intent {
    /// Map a DOM-style key name (`KeyboardEvent.key`) to an intent
    pub fn from_key(key: &str) -> Option<Self> {
        let intent = match key {
            "ArrowLeft" | "a" | "A" => Intent::Move(Direction::Left),
            "ArrowRight" | "d" | "D" => Intent::Move(Direction::Right),
            "ArrowUp" | "w" | "W" => Intent::Move(Direction::Up),
            "ArrowDown" | "s" | "S" => Intent::Move(Direction::Down),
            "Escape" => Intent::TogglePause,
            "r" | "R" => Intent::Restart,
            "p" | "P" => Intent::TogglePractice,
            _ => return None,
        };
        Some(intent)
    }
}

impl Simulation {
    /// Apply an intent between ticks. Returns false when the current phase
    /// ignores it.
    pub fn apply_intent(&mut self, intent: Intent, now_ms: f64) -> bool {
        match (self.phase, intent) {
            (GamePhase::Running, Intent::Move(dir)) => {
                self.player.step(dir, self.settings.player_step, &self.arena);
                true
            }
            (GamePhase::Running, Intent::TogglePause) => {
                self.phase = GamePhase::Paused;
                self.pacing.begin_pause(now_ms);
                log::debug!("Paused");
                true
            }
            (GamePhase::Paused, Intent::TogglePause) => {
                self.pacing.end_pause(now_ms);
                self.phase = GamePhase::Running;
                log::debug!("Resumed");
                true
            }
            (GamePhase::GameOver, Intent::Restart) => {
                self.reset_game(now_ms);
                true
            }
            (_, Intent::TogglePractice) => {
                self.practice = !self.practice;
                log::info!("Practice mode {}", if self.practice { "on" } else { "off" });
                if !self.practice {
                    self.reset_game(now_ms);
                }
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;

    fn sim() -> Simulation {
        Simulation::new(Settings::default(), 5, 0.0)
    }

    #[test]
    fn test_key_mapping() {
        assert_eq!(Intent::from_key("ArrowUp"), Some(Intent::Move(Direction::Up)));
        assert_eq!(Intent::from_key("a"), Some(Intent::Move(Direction::Left)));
        assert_eq!(Intent::from_key("Escape"), Some(Intent::TogglePause));
        assert_eq!(Intent::from_key("R"), Some(Intent::Restart));
        assert_eq!(Intent::from_key("p"), Some(Intent::TogglePractice));
        assert_eq!(Intent::from_key("q"), None);
        assert_eq!(Intent::from_key(""), None);
    }

    #[test]
    fn test_pause_blocks_movement() {
        let mut sim = sim();
        assert!(sim.apply_intent(Intent::TogglePause, 100.0));
        assert!(sim.is_paused());
        let pos = sim.player.pos;
        assert!(!sim.apply_intent(Intent::Move(Direction::Up), 200.0));
        assert_eq!(sim.player.pos, pos);
        assert!(sim.apply_intent(Intent::TogglePause, 300.0));
        assert!(!sim.is_paused());
        assert_eq!(sim.pacing.paused_total_ms(), 200.0);
    }

    #[test]
    fn test_restart_only_after_game_over() {
        let mut sim = sim();
        sim.score = 10;
        assert!(!sim.apply_intent(Intent::Restart, 0.0));
        assert_eq!(sim.score, 10);

        sim.phase = GamePhase::GameOver;
        assert!(!sim.apply_intent(Intent::TogglePause, 0.0));
        assert!(!sim.apply_intent(Intent::Move(Direction::Left), 0.0));
        assert!(sim.apply_intent(Intent::Restart, 0.0));
        assert_eq!(sim.phase, GamePhase::Running);
        assert_eq!(sim.score, 0);
    }

    #[test]
    fn test_leaving_practice_restarts() {
        let mut sim = sim();
        assert!(sim.apply_intent(Intent::TogglePractice, 0.0));
        assert!(sim.practice);
        sim.score = 42;
        // Practice survives its own toggle-on without a reset
        assert_eq!(sim.score, 42);
        assert!(sim.apply_intent(Intent::TogglePractice, 1_000.0));
        assert!(!sim.practice);
        assert_eq!(sim.score, 0);
    }

    #[test]
    fn test_practice_toggles_in_any_phase() {
        let mut sim = sim();
        sim.phase = GamePhase::GameOver;
        sim.score = 30;
        // Turning it on leaves the finished run on screen
        assert!(sim.apply_intent(Intent::TogglePractice, 0.0));
        assert!(sim.practice);
        assert!(sim.is_game_over());
        assert_eq!(sim.score, 30);
        // Turning it off starts a fresh run, even from game over
        assert!(sim.apply_intent(Intent::TogglePractice, 500.0));
        assert!(!sim.practice);
        assert_eq!(sim.phase, GamePhase::Running);
        assert_eq!(sim.score, 0);

        sim.apply_intent(Intent::TogglePractice, 1_000.0);
        sim.apply_intent(Intent::TogglePause, 2_000.0);
        assert!(sim.is_paused());
        assert!(sim.apply_intent(Intent::TogglePractice, 9_000.0));
        assert_eq!(sim.phase, GamePhase::Running);
        assert!(!sim.pacing.is_paused());
        assert_eq!(sim.survival_secs(9_000.0), 0);
    }
}
