//! Frame-driven simulation tick
//!
//! Advances the simulation by exactly one frame. Motion is per frame; only
//! survival time, difficulty and dialog rotation read the wall clock.

use super::dialog;
use super::motion::{self, Frame};
use super::spawn::spawn_wave;
use super::state::{GameEvent, GamePhase, RunSummary, Simulation};
use crate::consts::*;

/// Advance the simulation by one frame at wall time `now_ms`.
///
/// A no-op unless the run is `Running`. Returns what happened this frame.
pub fn tick(sim: &mut Simulation, now_ms: f64) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if sim.phase != GamePhase::Running {
        return events;
    }
    sim.time_ticks += 1;

    // Pacing gauges
    let steps = sim.pacing.difficulty_steps(now_ms);
    if steps > 0 {
        sim.difficulty = sim.difficulty.saturating_add(steps);
        log::info!("Difficulty up to {}", sim.difficulty);
        events.push(GameEvent::DifficultyUp(sim.difficulty));
    }
    if sim.pacing.dialog_due(now_ms) {
        sim.dialog = dialog::pick_line(&mut sim.rng);
        events.push(GameEvent::DialogChanged(sim.dialog));
    }

    // Touching a wall is lethal, even in practice mode
    if sim.arena.touches_edge(&sim.player.rect()) && sim.lives > 0 {
        sim.lives = 0;
        events.push(GameEvent::EdgeDeath);
    }

    sim.graze_effect_ticks = sim.graze_effect_ticks.saturating_sub(1);

    let survived = sim.pacing.survival_secs(now_ms);
    spawn_wave(sim, survived);

    let frame = Frame {
        target: sim.player.rect(),
        arena: sim.arena,
        difficulty: sim.difficulty,
        graze_radius: sim.graze_detect_radius(),
        invincible: sim.practice,
        grazed: &sim.grazed,
    };
    let ledger = motion::advance(&mut sim.populations, &mut sim.ids, &frame);

    sim.lives -= ledger.hits;
    sim.score += ledger.points;
    if !ledger.grazed.is_empty() {
        sim.graze_effect_ticks = GRAZE_EFFECT_TICKS;
        sim.grazed.extend(ledger.grazed.iter().copied());
    }
    for id in &ledger.removed {
        sim.grazed.remove(id);
    }
    events.extend(ledger.events);

    // Terminal check
    if sim.lives <= 0 {
        sim.lives = 0;
        sim.phase = GamePhase::GameOver;
        let summary = RunSummary {
            score: sim.score,
            survival_secs: survived,
            difficulty: sim.difficulty,
        };
        sim.summary = Some(summary);
        log::info!(
            "Game over: score {} after {}s at difficulty {}",
            summary.score,
            summary.survival_secs,
            summary.difficulty
        );
        events.push(GameEvent::GameOver(summary));
    }

    events
}

impl Simulation {
    /// Method form of [`tick`]
    pub fn tick(&mut self, now_ms: f64) -> Vec<GameEvent> {
        tick(self, now_ms)
    }
}
