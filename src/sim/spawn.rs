//! Per-frame spawning of new projectiles along the arena's top and left edges

use std::f32::consts::TAU;

use glam::Vec2;
use rand::Rng;

use super::entity::{
    Boomerang, Bouncer, BoxShot, Diagonal, Homing, Kind, LaserIndicator, RadialShot, Spiral,
    Splitter, Star, Triangle, Wave, Zigzag,
};
use super::geometry::{Arena, Rect};
use super::state::Simulation;
use crate::consts::*;
use crate::tuning::{SpawnChance, SpawnKind, speed, wave_sway_rate};

const BOX: f32 = 20.0;
const BOSS_SIZE: f32 = 40.0;
const EGG_HEIGHT: f32 = 40.0;
const RECT_SIZE: Vec2 = Vec2::new(60.0, 15.0);
const STAR_MARGIN: f32 = 20.0;
const LASER_MARGIN: f32 = 50.0;
const HOMING_SIZE: f32 = 16.0;
const RADIAL_SIZE: f32 = 16.0;
const WAVE_SIZE: f32 = 18.0;
const BOOMERANG_SIZE: f32 = 22.0;
const SPLIT_SIZE: f32 = 24.0;
/// Spiral origins sit in the upper third, at least this far down
const SPIRAL_TOP: f32 = 60.0;
/// Radial bursts go off in the upper half, at least this far down
const RADIAL_TOP: f32 = 80.0;
/// Wave and boomerang/splitter centers keep this far from the side walls
const WAVE_MARGIN: f32 = 40.0;
const DROP_MARGIN: f32 = 30.0;

/// One-in-N trial
pub fn roll<R: Rng + ?Sized>(rng: &mut R, chance: SpawnChance, difficulty: u32) -> bool {
    rng.random_range(0..chance.denominator(difficulty)) == 0
}

/// Uniform in `[lo, hi)`, or `lo` when the range is empty
fn uniform<R: Rng + ?Sized>(rng: &mut R, lo: f32, hi: f32) -> f32 {
    if hi > lo { rng.random_range(lo..hi) } else { lo }
}

fn sign<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    if rng.random_bool(0.5) { 1.0 } else { -1.0 }
}

/// Five-point star outline hanging from `(x, 0)`
pub fn star_points(x: f32) -> [Vec2; 5] {
    [
        Vec2::new(x, 0.0),
        Vec2::new(x + 10.0, 30.0),
        Vec2::new(x + 20.0, 0.0),
        Vec2::new(x + 5.0, 20.0),
        Vec2::new(x + 15.0, 20.0),
    ]
}

/// Downward-pointing triangle hanging from `(x, 0)`
pub fn triangle_points(x: f32) -> [Vec2; 3] {
    [
        Vec2::new(x, 0.0),
        Vec2::new(x + BOX, 0.0),
        Vec2::new(x + BOX / 2.0, BOX),
    ]
}

fn top_box(x: f32, h: f32) -> Rect {
    Rect::new(x, 0.0, BOX, h)
}

/// Left edge for a spawn of width `w` that must fit inside the arena
fn lane<R: Rng + ?Sized>(rng: &mut R, arena: &Arena, w: f32) -> f32 {
    uniform(rng, 0.0, arena.width - w)
}

/// Box of width `w` centered on `x`, hanging from the top edge
fn drop_box(x: f32, w: f32) -> Rect {
    Rect::new(x - w / 2.0, 0.0, w, w)
}

/// Roll every spawn trial once, in table order.
///
/// With progressive unlocks on, kinds whose unlock second hasn't been reached
/// are skipped without consuming a roll, and the late patterns are rolled
/// after the fixed table. Without it only the fixed table is rolled.
pub fn spawn_wave(sim: &mut Simulation, survived_secs: u64) {
    let progressive = sim.settings.progressive_unlocks;
    let late: &[SpawnKind] = if progressive { &SpawnKind::LATE } else { &[] };
    for &kind in SpawnKind::ALL.iter().chain(late) {
        if progressive && kind.unlock_secs() > survived_secs {
            continue;
        }
        if roll(&mut sim.rng, kind.chance(), sim.difficulty) {
            spawn_kind(sim, kind);
        }
    }
}

/// Unconditionally spawn one instance of a pattern
pub fn spawn_kind(sim: &mut Simulation, kind: SpawnKind) {
    let arena = sim.arena;
    let difficulty = sim.difficulty;
    let rng = &mut sim.rng;
    let ids = &mut sim.ids;
    let pops = &mut sim.populations;

    match kind {
        SpawnKind::Top => {
            let x = lane(rng, &arena, BOX);
            pops.top.push(BoxShot {
                id: ids.next(),
                kind: Kind::Top,
                rect: top_box(x, BOX),
            });
        }
        SpawnKind::Side => {
            let y = uniform(rng, 0.0, arena.height - BOX);
            pops.side.push(BoxShot {
                id: ids.next(),
                kind: Kind::Side,
                rect: Rect::new(0.0, y, BOX, BOX),
            });
        }
        SpawnKind::Diagonal => {
            let x = lane(rng, &arena, BOX);
            pops.diagonal.push(Diagonal {
                id: ids.next(),
                rect: top_box(x, BOX),
                dir: sign(rng),
            });
        }
        SpawnKind::Boss => {
            let x = uniform(rng, arena.width / 4.0, arena.width * 3.0 / 4.0);
            pops.boss.push(BoxShot {
                id: ids.next(),
                kind: Kind::Boss,
                rect: Rect::new(x, 0.0, BOSS_SIZE, BOSS_SIZE),
            });
        }
        SpawnKind::Zigzag => {
            let x = lane(rng, &arena, BOX);
            pops.zigzag.push(Zigzag {
                id: ids.next(),
                rect: top_box(x, BOX),
                dir: sign(rng),
                step: 0,
            });
        }
        SpawnKind::Fast => {
            let x = lane(rng, &arena, BOX);
            pops.fast.push(BoxShot {
                id: ids.next(),
                kind: Kind::Fast,
                rect: top_box(x, BOX),
            });
        }
        SpawnKind::Star => {
            let x = uniform(rng, STAR_MARGIN, arena.width - STAR_MARGIN);
            pops.star.push(Star {
                id: ids.next(),
                points: star_points(x),
            });
        }
        SpawnKind::Rect => {
            let x = lane(rng, &arena, RECT_SIZE.x);
            pops.rect.push(BoxShot {
                id: ids.next(),
                kind: Kind::Rect,
                rect: Rect::new(x, 0.0, RECT_SIZE.x, RECT_SIZE.y),
            });
        }
        SpawnKind::Laser => {
            let y = uniform(rng, LASER_MARGIN, arena.height - LASER_MARGIN);
            pops.laser_indicators.push(LaserIndicator {
                id: ids.next(),
                y,
                timer: LASER_WARNING_TICKS,
            });
        }
        SpawnKind::Triangle => {
            let x = lane(rng, &arena, BOX);
            pops.triangle.push(Triangle {
                id: ids.next(),
                points: triangle_points(x),
                dir: sign(rng),
            });
        }
        SpawnKind::Quad => {
            let span = QUAD_SPACING * (QUAD_COUNT - 1) as f32 + BOX;
            let x = lane(rng, &arena, span);
            for i in 0..QUAD_COUNT {
                pops.top.push(BoxShot {
                    id: ids.next(),
                    kind: Kind::Top,
                    rect: Rect::new(x + QUAD_SPACING * i as f32, 0.0, BOX, BOX),
                });
            }
        }
        SpawnKind::Egg => {
            let x = lane(rng, &arena, BOX);
            pops.egg.push(BoxShot {
                id: ids.next(),
                kind: Kind::Egg,
                rect: top_box(x, EGG_HEIGHT),
            });
        }
        SpawnKind::Bouncing => {
            let x = lane(rng, &arena, BOX);
            let angle = rng.random_range(0.0..std::f32::consts::TAU);
            pops.bouncing.push(Bouncer {
                id: ids.next(),
                rect: top_box(x, BOX),
                vel: Vec2::from_angle(angle) * speed(Kind::Bouncing, difficulty),
                bounces: BOUNCE_BUDGET,
            });
        }
        SpawnKind::Exploding => {
            let x = lane(rng, &arena, BOX);
            pops.exploding.push(BoxShot {
                id: ids.next(),
                kind: Kind::Exploding,
                rect: top_box(x, BOX),
            });
        }
        SpawnKind::Homing => {
            let x = lane(rng, &arena, BOX);
            pops.homing.push(Homing {
                id: ids.next(),
                rect: Rect::new(x, 0.0, HOMING_SIZE, HOMING_SIZE),
                vel: Vec2::new(0.0, HOMING_LAUNCH_SPEED),
            });
        }
        SpawnKind::Spiral => {
            let origin = Vec2::new(
                uniform(rng, arena.width / 3.0, arena.width * 2.0 / 3.0),
                uniform(rng, SPIRAL_TOP, arena.height / 3.0),
            );
            pops.spiral.push(Spiral {
                id: ids.next(),
                rect: Rect::centered(origin, BOX, BOX),
                origin,
                angle: rng.random_range(0.0..TAU),
                radius: 0.0,
                grow: speed(Kind::Spiral, difficulty),
            });
        }
        SpawnKind::Radial => {
            let center = Vec2::new(
                uniform(rng, arena.width / 4.0, arena.width * 3.0 / 4.0),
                uniform(rng, RADIAL_TOP, arena.height / 2.0),
            );
            let v = speed(Kind::Radial, difficulty);
            for i in 0..RADIAL_COUNT {
                let jitter = rng.random_range(-RADIAL_JITTER..RADIAL_JITTER);
                let angle = TAU / RADIAL_COUNT as f32 * i as f32 + jitter;
                pops.radial.push(RadialShot {
                    id: ids.next(),
                    rect: Rect::centered(center, RADIAL_SIZE, RADIAL_SIZE),
                    vel: Vec2::from_angle(angle) * v,
                });
            }
        }
        SpawnKind::Wave => {
            let x = uniform(rng, WAVE_MARGIN, arena.width - WAVE_MARGIN);
            pops.wave.push(Wave {
                id: ids.next(),
                rect: drop_box(x, WAVE_SIZE),
                base_x: x,
                phase: rng.random_range(0.0..TAU),
                amp: rng.random_range(40..=90) as f32,
                vy: speed(Kind::Wave, difficulty),
                phase_speed: wave_sway_rate(difficulty),
            });
        }
        SpawnKind::Boomerang => {
            let x = uniform(rng, DROP_MARGIN, arena.width - DROP_MARGIN);
            pops.boomerang.push(Boomerang {
                id: ids.next(),
                rect: drop_box(x, BOOMERANG_SIZE),
                vy: speed(Kind::Boomerang, difficulty),
                timer: rng.random_range(18..=30),
                returning: false,
            });
        }
        SpawnKind::Split => {
            let x = uniform(rng, DROP_MARGIN, arena.width - DROP_MARGIN);
            pops.split.push(Splitter {
                id: ids.next(),
                rect: drop_box(x, SPLIT_SIZE),
                timer: rng.random_range(20..=35),
            });
        }
    }
}
