//! Simulation core
//!
//! All gameplay logic lives here. No rendering or platform dependencies:
//! - Frame-driven motion, wall-clock pacing only
//! - Seeded RNG only
//! - Stable per-kind population order

pub mod dialog;
pub mod entity;
pub mod geometry;
pub mod input;
pub mod motion;
pub mod pacing;
pub mod spawn;
pub mod state;
pub mod tick;

pub use entity::{
    Boomerang, Bouncer, BoxShot, Diagonal, EntityId, Fragment, Homing, Kind, Laser,
    LaserIndicator, Populations, Projectile, RadialShot, Shape, Spiral, Splitter, Star, Triangle,
    Wave, Zigzag,
};
pub use geometry::{Arena, Rect, graze_poly, graze_rect, poly_overlaps_target, rect_overlaps_target};
pub use input::Intent;
pub use state::{Direction, GameEvent, GamePhase, Player, RunSummary, Simulation, Snapshot};
pub use tick::tick;
