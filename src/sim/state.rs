//! Simulation state and core types
//!
//! `Simulation` owns everything that changes during a run: the player, every
//! projectile population, score/lives/difficulty and the pacing clocks.

use std::collections::HashSet;

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::dialog;
use super::entity::{EntityId, EntityIds, Kind, Populations};
use super::geometry::{Arena, Rect};
use super::pacing::Pacing;
use crate::consts::*;
use crate::settings::Settings;
use crate::tuning::SpawnKind;

/// Current phase of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GamePhase {
    Running,
    Paused,
    /// Run ended, waiting for restart
    GameOver,
}

/// Discrete movement directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub fn unit(self) -> Vec2 {
        match self {
            Direction::Left => Vec2::new(-1.0, 0.0),
            Direction::Right => Vec2::new(1.0, 0.0),
            Direction::Up => Vec2::new(0.0, -1.0),
            Direction::Down => Vec2::new(0.0, 1.0),
        }
    }
}

/// The player's avatar (hitbox only)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Player {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Player {
    /// Centered horizontally, just above the bottom edge
    pub fn spawn(arena: &Arena) -> Self {
        Self {
            pos: Vec2::new(
                arena.width / 2.0 - PLAYER_SIZE / 2.0,
                arena.height - PLAYER_SPAWN_OFFSET,
            ),
            size: Vec2::splat(PLAYER_SIZE),
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.size.x, self.size.y)
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    /// Move one step, clamped so the player can rest on (but not past) a wall
    pub fn step(&mut self, dir: Direction, step: f32, arena: &Arena) {
        let max = Vec2::new(arena.width - self.size.x, arena.height - self.size.y).max(Vec2::ZERO);
        self.pos = (self.pos + dir.unit() * step).clamp(Vec2::ZERO, max);
    }
}

/// Final numbers of a finished run
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RunSummary {
    pub score: u64,
    pub survival_secs: u64,
    pub difficulty: u32,
}

/// Things that happened during a tick, for audio/visual collaborators
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum GameEvent {
    /// Player took a hit from a projectile of this kind
    Hit(Kind),
    /// First near miss against a projectile
    Graze { id: EntityId, kind: Kind },
    Exploded { at: Vec2 },
    LaserFired { y: f32 },
    /// Touching the arena edge is instantly lethal
    EdgeDeath,
    DifficultyUp(u32),
    DialogChanged(&'static str),
    GameOver(RunSummary),
}

/// The whole simulation: one run plus the RNG and id source that outlive it
#[derive(Debug, Clone)]
pub struct Simulation {
    pub settings: Settings,
    pub arena: Arena,
    pub player: Player,
    pub populations: Populations,
    /// Ids that have already scored a graze
    pub grazed: HashSet<EntityId>,
    pub score: u64,
    pub lives: i32,
    pub difficulty: u32,
    pub phase: GamePhase,
    /// Invincible practice runs
    pub practice: bool,
    pub dialog: &'static str,
    /// Frames left on the graze ring effect
    pub graze_effect_ticks: u32,
    /// Active frames simulated this run
    pub time_ticks: u64,
    pub pacing: Pacing,
    /// Set once the run ends
    pub summary: Option<RunSummary>,
    pub(crate) rng: Pcg32,
    pub(crate) ids: EntityIds,
}

impl Simulation {
    /// Start a fresh run at `now_ms`
    pub fn new(settings: Settings, seed: u64, now_ms: f64) -> Self {
        let settings = settings.validated();
        let arena = settings.arena();
        let mut sim = Self {
            arena,
            player: Player::spawn(&arena),
            populations: Populations::default(),
            grazed: HashSet::new(),
            score: 0,
            lives: STARTING_LIVES,
            difficulty: 1,
            phase: GamePhase::Running,
            practice: settings.practice,
            dialog: dialog::LINES[0],
            graze_effect_ticks: 0,
            time_ticks: 0,
            pacing: Pacing::new(
                now_ms,
                settings.difficulty_interval_ms(),
                settings.dialog_interval_ms(),
            ),
            summary: None,
            rng: Pcg32::seed_from_u64(seed),
            ids: EntityIds::default(),
            settings,
        };
        sim.reset_game(now_ms);
        sim
    }

    /// Reinitialise every piece of run state and pick a fresh dialog line.
    /// Practice mode, the RNG stream and the id source carry over.
    pub fn reset_game(&mut self, now_ms: f64) {
        self.player = Player::spawn(&self.arena);
        self.populations.clear();
        self.grazed.clear();
        self.score = 0;
        self.lives = STARTING_LIVES;
        self.difficulty = 1;
        self.phase = GamePhase::Running;
        self.graze_effect_ticks = 0;
        self.time_ticks = 0;
        self.pacing = Pacing::new(
            now_ms,
            self.settings.difficulty_interval_ms(),
            self.settings.dialog_interval_ms(),
        );
        self.summary = None;
        self.dialog = dialog::pick_line(&mut self.rng);
        log::info!(
            "Run started (practice={}, arena={}x{})",
            self.practice,
            self.arena.width,
            self.arena.height
        );
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub fn is_paused(&self) -> bool {
        self.phase == GamePhase::Paused
    }

    /// Whole seconds survived (frozen once the run ends)
    pub fn survival_secs(&self, now_ms: f64) -> u64 {
        match self.summary {
            Some(summary) => summary.survival_secs,
            None => self.pacing.survival_secs(now_ms),
        }
    }

    /// Radius used for graze detection (ring plus slack)
    pub fn graze_detect_radius(&self) -> f32 {
        self.settings.graze_radius + GRAZE_MARGIN
    }

    /// Next pattern still locked in progressive mode, with its unlock second
    pub fn next_unlock(&self, now_ms: f64) -> Option<(SpawnKind, u64)> {
        if !self.settings.progressive_unlocks {
            return None;
        }
        let survived = self.survival_secs(now_ms);
        SpawnKind::unlockable()
            .filter(|k| k.unlock_secs() > survived)
            .min_by_key(|k| k.unlock_secs())
            .map(|k| (k, k.unlock_secs()))
    }

    /// Read-only view for renderers and display collaborators
    pub fn snapshot(&self, now_ms: f64) -> Snapshot<'_> {
        Snapshot {
            arena: self.arena,
            player: self.player.rect(),
            populations: &self.populations,
            score: self.score,
            lives: self.lives,
            difficulty: self.difficulty,
            survival_secs: self.survival_secs(now_ms),
            dialog: self.dialog,
            graze_ring: (self.graze_effect_ticks > 0).then_some(self.settings.graze_radius),
            paused: self.is_paused(),
            practice: self.practice,
            game_over: self.summary,
            next_unlock: self.next_unlock(now_ms),
        }
    }
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot<'a> {
    pub arena: Arena,
    pub player: Rect,
    pub populations: &'a Populations,
    pub score: u64,
    pub lives: i32,
    pub difficulty: u32,
    pub survival_secs: u64,
    pub dialog: &'static str,
    /// Ring radius while the graze effect is showing
    pub graze_ring: Option<f32>,
    pub paused: bool,
    pub practice: bool,
    pub game_over: Option<RunSummary>,
    pub next_unlock: Option<(SpawnKind, u64)>,
}
