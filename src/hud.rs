//! Display text derived from a snapshot
//!
//! Plain strings for whatever shows the score, timer, dialog and banners.

use serde::Serialize;

use crate::sim::Snapshot;
use crate::sim::dialog::SMILEY;

/// Dialog color: the smiley line is shown in red
pub fn dialog_color(line: &str) -> &'static str {
    if line == SMILEY { "red" } else { "white" }
}

/// Every string the display collaborator needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HudText {
    pub score: String,
    pub time: String,
    pub dialog: &'static str,
    pub dialog_color: &'static str,
    /// "Practice" badge while invincible
    pub mode: Option<&'static str>,
    /// Next locked pattern in progressive mode
    pub unlock: Option<String>,
    /// Centered banner lines (pause or game over)
    pub banner: Vec<String>,
}

pub fn hud_text(snap: &Snapshot) -> HudText {
    let banner = if let Some(run) = snap.game_over {
        vec![
            "Game Over".to_string(),
            format!("Score: {}", run.score),
            format!("Time Survived: {} seconds", run.survival_secs),
            "Press R to Restart".to_string(),
        ]
    } else if snap.paused {
        vec!["Paused".to_string(), "Press Escape to resume".to_string()]
    } else {
        Vec::new()
    };

    HudText {
        score: format!("Score: {}", snap.score),
        time: format!("Time: {}", snap.survival_secs),
        dialog: snap.dialog,
        dialog_color: dialog_color(snap.dialog),
        mode: snap.practice.then_some("Practice"),
        unlock: snap
            .next_unlock
            .map(|(kind, secs)| format!("Next: {} at {}s", kind.label(), secs)),
        banner,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::sim::{Intent, RunSummary, Simulation};

    #[test]
    fn test_running_hud() {
        let mut sim = Simulation::new(Settings::default(), 1, 0.0);
        sim.score = 17;
        let hud = hud_text(&sim.snapshot(12_400.0));
        assert_eq!(hud.score, "Score: 17");
        assert_eq!(hud.time, "Time: 12");
        assert!(hud.banner.is_empty());
        assert_eq!(hud.mode, None);
    }

    #[test]
    fn test_pause_and_game_over_banners() {
        let mut sim = Simulation::new(Settings::default(), 1, 0.0);
        sim.apply_intent(Intent::TogglePause, 1_000.0);
        assert_eq!(hud_text(&sim.snapshot(2_000.0)).banner[0], "Paused");

        sim.apply_intent(Intent::TogglePause, 2_000.0);
        sim.summary = Some(RunSummary {
            score: 55,
            survival_secs: 31,
            difficulty: 1,
        });
        let hud = hud_text(&sim.snapshot(99_000.0));
        assert_eq!(hud.banner[1], "Score: 55");
        assert_eq!(hud.banner[2], "Time Survived: 31 seconds");
        assert_eq!(hud.time, "Time: 31");
    }

    #[test]
    fn test_unlock_and_smiley() {
        let settings = Settings {
            progressive_unlocks: true,
            practice: true,
            ..Settings::default()
        };
        let sim = Simulation::new(settings, 1, 0.0);
        let hud = hud_text(&sim.snapshot(0.0));
        assert_eq!(hud.unlock.as_deref(), Some("Next: Horizontal at 8s"));
        assert_eq!(hud.mode, Some("Practice"));
        assert_eq!(dialog_color(SMILEY), "red");
        assert_eq!(dialog_color("Too slow!"), "white");
    }
}
