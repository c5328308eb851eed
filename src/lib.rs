//! Get Shot at by a Nine Year Old Simulator - bullet hell survival core
//!
//! Core modules:
//! - `sim`: Frame-driven simulation (spawning, motion, collisions, pacing)
//! - `render`: Snapshot to draw-command translation for an external renderer
//! - `hud`: Display text for the score/time/dialog collaborator
//! - `platform`: Clock abstraction (native and browser)
//! - `persistence`: Best-effort remote variable store
//! - `tuning`: Data-driven spawn and speed balance

pub mod highscores;
pub mod hud;
pub mod persistence;
pub mod platform;
pub mod render;
pub mod settings;
pub mod sim;
pub mod tuning;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use highscores::HighScores;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Default arena dimensions
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;

    /// Player hitbox and movement
    pub const PLAYER_SIZE: f32 = 20.0;
    pub const PLAYER_STEP: f32 = 20.0;
    /// Player spawns this far above the bottom edge
    pub const PLAYER_SPAWN_OFFSET: f32 = 50.0;
    pub const STARTING_LIVES: i32 = 1;

    /// Graze ring shown around the player
    pub const GRAZE_RADIUS: f32 = 40.0;
    /// Extra slack added to the ring for graze detection
    pub const GRAZE_MARGIN: f32 = 10.0;
    /// Frames the graze ring stays visible
    pub const GRAZE_EFFECT_TICKS: u32 = 4;

    /// Real-time pacing (milliseconds of active play)
    pub const DIFFICULTY_INTERVAL_MS: f64 = 60_000.0;
    pub const DIALOG_INTERVAL_MS: f64 = 10_000.0;

    /// Laser warning then firing durations (frames)
    pub const LASER_WARNING_TICKS: i32 = 30;
    pub const LASER_ACTIVE_TICKS: i32 = 20;

    /// Zigzag flips lateral direction every N of its own steps
    pub const ZIGZAG_FLIP_TICKS: u32 = 10;
    pub const ZIGZAG_LATERAL_SPEED: f32 = 5.0;

    /// Wall contacts a bouncing bullet survives
    pub const BOUNCE_BUDGET: i32 = 3;

    /// Exploding bullets burst within this distance of the vertical midpoint
    pub const EXPLODE_BAND: f32 = 20.0;
    pub const FRAGMENT_SIZE: f32 = 12.0;
    pub const FRAGMENT_SPEED: f32 = 6.0;

    /// Quad cluster: four bullets this far apart
    pub const QUAD_COUNT: usize = 4;
    pub const QUAD_SPACING: f32 = 30.0;

    /// Homing bullets launch straight down, then blend toward the player
    pub const HOMING_LAUNCH_SPEED: f32 = 4.0;
    pub const HOMING_SPEED: f32 = 6.0;
    pub const HOMING_STEER: f32 = 0.15;

    /// Spiral angular speed (radians per frame)
    pub const SPIRAL_TURN: f32 = 0.35;

    /// Radial bursts: bullet count and per-bullet angle jitter (radians)
    pub const RADIAL_COUNT: usize = 8;
    pub const RADIAL_JITTER: f32 = 0.1;

    /// Boomerangs climb back at this fraction of their descent speed
    pub const BOOMERANG_RETURN: f32 = 0.8;

    pub const SPLIT_SHARDS: usize = 6;
}
