//! Per-frame motion and lifecycle of every projectile population
//!
//! Each live projectile is advanced once per active frame and then either
//! mutated in place or removed. For a moving projectile the order is fixed:
//! move, collide with the player, graze, exit. A hit ends the projectile's
//! frame, so a projectile that hits never also scores a graze or an exit.
//!
//! Nothing here touches the `Simulation` directly: results are collected in a
//! `Ledger` that the tick applies afterwards.

use std::collections::HashSet;
use std::f32::consts::TAU;

use glam::Vec2;

use super::entity::{
    Boomerang, Bouncer, BoxShot, Diagonal, EntityId, EntityIds, Fragment, Homing, Kind, Laser,
    LaserIndicator, Populations, Projectile, RadialShot, Spiral, Splitter, Star, Triangle, Wave,
    Zigzag,
};
use super::geometry::{Arena, Rect};
use super::state::GameEvent;
use crate::consts::*;
use crate::tuning::{SPLIT_BONUS, exit_bonus, speed, split_shard_speed};

/// How far past the arena the free-flying kinds may drift before they count as gone
const HOMING_SLACK: f32 = 40.0;
const SPIRAL_SLACK: f32 = 40.0;
const RADIAL_SLACK: f32 = 20.0;
const WAVE_SLACK: f32 = 30.0;
const BOOMERANG_TOP_SLACK: f32 = 30.0;
const BOOMERANG_BOTTOM_SLACK: f32 = 40.0;

/// Splitter shards are this wide
pub const SHARD_SIZE: f32 = 20.0;

/// Read-only inputs for one motion pass
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    /// Player hitbox
    pub target: Rect,
    pub arena: Arena,
    pub difficulty: u32,
    /// Graze detection radius (ring plus margin)
    pub graze_radius: f32,
    /// Practice mode: projectiles pass through the player
    pub invincible: bool,
    /// Ids that already scored a graze in earlier frames
    pub grazed: &'a HashSet<EntityId>,
}

/// Outcome of one motion pass
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Ledger {
    pub hits: i32,
    pub points: u64,
    /// New grazes this frame
    pub grazed: Vec<EntityId>,
    /// Ids of projectiles that left their population this frame
    pub removed: Vec<EntityId>,
    pub events: Vec<GameEvent>,
}

impl Ledger {
    fn hit(&mut self, id: EntityId, kind: Kind) {
        self.hits += 1;
        self.removed.push(id);
        self.events.push(GameEvent::Hit(kind));
    }

    fn exit(&mut self, id: EntityId, kind: Kind) {
        self.retire(id, exit_bonus(kind));
    }

    fn retire(&mut self, id: EntityId, points: u64) {
        self.points += points;
        self.removed.push(id);
    }

    /// Score a near miss unless this id has already grazed
    fn graze<P: Projectile>(&mut self, p: &P, frame: &Frame) {
        let id = p.id();
        if frame.grazed.contains(&id) || self.grazed.contains(&id) {
            return;
        }
        if p.grazes(&frame.target, frame.graze_radius) {
            self.points += 1;
            self.grazed.push(id);
            self.events.push(GameEvent::Graze { id, kind: p.kind() });
        }
    }

    /// Collision step; true when the projectile hit and must be removed
    fn collide<P: Projectile>(&mut self, p: &P, frame: &Frame) -> bool {
        if !frame.invincible && p.overlaps(&frame.target) {
            self.hit(p.id(), p.kind());
            return true;
        }
        false
    }
}

/// Shared lifecycle for projectiles with the plain move/collide/graze/exit order
fn resolve<T: Projectile>(
    population: &mut Vec<T>,
    frame: &Frame,
    ledger: &mut Ledger,
    mut advance: impl FnMut(&mut T),
    exited: impl Fn(&T, &Arena) -> bool,
) {
    population.retain_mut(|p| {
        advance(p);
        if ledger.collide(p, frame) {
            return false;
        }
        ledger.graze(p, frame);
        if exited(p, &frame.arena) {
            ledger.exit(p.id(), p.kind());
            return false;
        }
        true
    });
}

/// Boxes that fall straight down and leave through the bottom edge
fn fall(population: &mut Vec<BoxShot>, frame: &Frame, ledger: &mut Ledger) {
    resolve(
        population,
        frame,
        ledger,
        |b| b.rect.y += speed(b.kind, frame.difficulty),
        |b, arena| arena.below(b.rect.y),
    );
}

fn step_side(population: &mut Vec<BoxShot>, frame: &Frame, ledger: &mut Ledger) {
    resolve(
        population,
        frame,
        ledger,
        |b| b.rect.x += speed(Kind::Side, frame.difficulty),
        |b, arena| b.rect.x > arena.width,
    );
}

fn step_diagonal(population: &mut Vec<Diagonal>, frame: &Frame, ledger: &mut Ledger) {
    let v = speed(Kind::Diagonal, frame.difficulty);
    resolve(
        population,
        frame,
        ledger,
        |b| b.rect.translate(Vec2::new(v * b.dir, v)),
        |b, arena| arena.below(b.rect.y) || arena.beyond_sides(b.rect.x),
    );
}

fn step_zigzag(population: &mut Vec<Zigzag>, frame: &Frame, ledger: &mut Ledger) {
    let v = speed(Kind::Zigzag, frame.difficulty);
    resolve(
        population,
        frame,
        ledger,
        |b| {
            if b.step % ZIGZAG_FLIP_TICKS == 0 {
                b.dir = -b.dir;
            }
            b.rect.translate(Vec2::new(ZIGZAG_LATERAL_SPEED * b.dir, v));
            b.step = b.step.wrapping_add(1);
        },
        |b, arena| arena.below(b.rect.y) || arena.beyond_sides(b.rect.x),
    );
}

fn step_star(population: &mut Vec<Star>, frame: &Frame, ledger: &mut Ledger) {
    let v = speed(Kind::Star, frame.difficulty);
    resolve(
        population,
        frame,
        ledger,
        |s| s.points.iter_mut().for_each(|p| p.y += v),
        |s, arena| s.points.iter().any(|p| arena.below(p.y)),
    );
}

fn step_triangle(population: &mut Vec<Triangle>, frame: &Frame, ledger: &mut Ledger) {
    let v = speed(Kind::Triangle, frame.difficulty);
    resolve(
        population,
        frame,
        ledger,
        |t| {
            let delta = Vec2::new(v * t.dir, v);
            t.points.iter_mut().for_each(|p| *p += delta);
        },
        |t, arena| {
            t.points
                .iter()
                .any(|p| arena.below(p.y) || arena.beyond_sides(p.x))
        },
    );
}

fn step_fragments(population: &mut Vec<Fragment>, frame: &Frame, ledger: &mut Ledger) {
    resolve(
        population,
        frame,
        ledger,
        |f| f.rect.translate(f.vel),
        |f, arena| arena.outside(Vec2::new(f.rect.x, f.rect.y)),
    );
}

/// Bouncing bullets have no exit edge: they retire once their bounce budget
/// has gone negative, one evaluation after the last wall contact
fn step_bouncing(population: &mut Vec<Bouncer>, frame: &Frame, ledger: &mut Ledger) {
    population.retain_mut(|b| {
        b.rect.translate(b.vel);
        if ledger.collide(b, frame) {
            return false;
        }
        if b.bounces < 0 {
            ledger.exit(b.id, Kind::Bouncing);
            return false;
        }
        let arena = frame.arena;
        let mut bounced = false;
        if b.rect.x <= 0.0 || b.rect.right() >= arena.width {
            b.vel.x = -b.vel.x;
            bounced = true;
        }
        if b.rect.y <= 0.0 || b.rect.bottom() >= arena.height {
            b.vel.y = -b.vel.y;
            bounced = true;
        }
        if bounced {
            b.bounces -= 1;
        }
        ledger.graze(b, frame);
        true
    });
}

/// Falls like the other boxes but bursts into four fragments near mid-arena
fn step_exploding(
    population: &mut Vec<BoxShot>,
    fragments: &mut Vec<Fragment>,
    ids: &mut EntityIds,
    frame: &Frame,
    ledger: &mut Ledger,
) {
    let v = speed(Kind::Exploding, frame.difficulty);
    population.retain_mut(|b| {
        b.rect.y += v;
        if ledger.collide(b, frame) {
            return false;
        }
        let center = b.rect.center();
        if (center.y - frame.arena.mid_y()).abs() < EXPLODE_BAND {
            fragments.extend(burst(center, ids));
            ledger.exit(b.id, Kind::Exploding);
            ledger.events.push(GameEvent::Exploded { at: center });
            return false;
        }
        ledger.graze(b, frame);
        if frame.arena.below(b.rect.y) {
            ledger.exit(b.id, Kind::Exploding);
            return false;
        }
        true
    });
}

/// Four diagonal fragments centered on `center`
pub fn burst(center: Vec2, ids: &mut EntityIds) -> [Fragment; 4] {
    let s = FRAGMENT_SPEED;
    [
        Vec2::new(s, s),
        Vec2::new(-s, s),
        Vec2::new(s, -s),
        Vec2::new(-s, -s),
    ]
    .map(|vel| Fragment {
        id: ids.next(),
        rect: Rect::centered(center, FRAGMENT_SIZE, FRAGMENT_SIZE),
        vel,
    })
}

/// Active beams hit anything whose vertical extent spans their line
fn step_lasers(lasers: &mut Vec<Laser>, frame: &Frame, ledger: &mut Ledger) {
    lasers.retain_mut(|l| {
        l.timer -= 1;
        if !frame.invincible && frame.target.spans_y(l.y) {
            ledger.hit(l.id, Kind::Laser);
            return false;
        }
        if l.timer <= 0 {
            ledger.exit(l.id, Kind::Laser);
            return false;
        }
        true
    });
}

/// Warnings count down and hand over to a fresh beam on the same line
fn step_indicators(
    indicators: &mut Vec<LaserIndicator>,
    lasers: &mut Vec<Laser>,
    ids: &mut EntityIds,
    ledger: &mut Ledger,
) {
    indicators.retain_mut(|ind| {
        ind.timer -= 1;
        if ind.timer > 0 {
            return true;
        }
        lasers.push(Laser {
            id: ids.next(),
            y: ind.y,
            timer: LASER_ACTIVE_TICKS,
        });
        ledger.removed.push(ind.id);
        ledger.events.push(GameEvent::LaserFired { y: ind.y });
        false
    });
}

fn step_homing(population: &mut Vec<Homing>, frame: &Frame, ledger: &mut Ledger) {
    let aim = frame.target.center();
    let top_speed = speed(Kind::Homing, frame.difficulty);
    resolve(
        population,
        frame,
        ledger,
        |h| {
            let desired = (aim - h.rect.center()).normalize_or_zero() * top_speed;
            h.vel = h.vel.lerp(desired, HOMING_STEER);
            h.rect.translate(h.vel);
        },
        |h, arena| {
            arena.below(h.rect.y)
                || h.rect.x < -HOMING_SLACK
                || h.rect.right() > arena.width + HOMING_SLACK
        },
    );
}

fn step_spiral(population: &mut Vec<Spiral>, frame: &Frame, ledger: &mut Ledger) {
    resolve(
        population,
        frame,
        ledger,
        |s| {
            s.angle += SPIRAL_TURN;
            s.radius += s.grow;
            let center = s.origin + Vec2::from_angle(s.angle) * s.radius;
            s.rect = Rect::centered(center, s.rect.w, s.rect.h);
        },
        |s, arena| {
            let c = s.rect.center();
            c.x < -SPIRAL_SLACK
                || c.x > arena.width + SPIRAL_SLACK
                || c.y < -SPIRAL_SLACK
                || c.y > arena.height + SPIRAL_SLACK
                || s.radius > arena.width.max(arena.height)
        },
    );
}

fn step_radial(population: &mut Vec<RadialShot>, frame: &Frame, ledger: &mut Ledger) {
    resolve(
        population,
        frame,
        ledger,
        |r| r.rect.translate(r.vel),
        |r, arena| {
            r.rect.right() < -RADIAL_SLACK
                || r.rect.x > arena.width + RADIAL_SLACK
                || r.rect.bottom() < -RADIAL_SLACK
                || r.rect.y > arena.height + RADIAL_SLACK
        },
    );
}

fn step_wave(population: &mut Vec<Wave>, frame: &Frame, ledger: &mut Ledger) {
    resolve(
        population,
        frame,
        ledger,
        |w| {
            w.phase += w.phase_speed;
            w.rect.y += w.vy;
            w.rect.x = w.base_x + w.phase.sin() * w.amp - w.rect.w / 2.0;
        },
        |w, arena| w.rect.center().y > arena.height + WAVE_SLACK,
    );
}

fn step_boomerang(population: &mut Vec<Boomerang>, frame: &Frame, ledger: &mut Ledger) {
    resolve(
        population,
        frame,
        ledger,
        |b| {
            if b.returning {
                b.rect.y -= b.vy * BOOMERANG_RETURN;
            } else {
                b.rect.y += b.vy;
                b.timer -= 1;
                b.returning = b.timer <= 0;
            }
        },
        |b, arena| {
            b.rect.bottom() < -BOOMERANG_TOP_SLACK
                || b.rect.y > arena.height + BOOMERANG_BOTTOM_SLACK
        },
    );
}

/// Splitters fall on a timer and break into six shards when it runs out
fn step_split(
    population: &mut Vec<Splitter>,
    shards: &mut Vec<RadialShot>,
    ids: &mut EntityIds,
    frame: &Frame,
    ledger: &mut Ledger,
) {
    let v = speed(Kind::Split, frame.difficulty);
    let shard_speed = split_shard_speed(frame.difficulty);
    population.retain_mut(|s| {
        s.rect.y += v;
        s.timer -= 1;
        if ledger.collide(s, frame) {
            return false;
        }
        if s.timer <= 0 {
            let at = s.rect.center();
            shards.extend(split_shards(at, shard_speed, ids));
            ledger.retire(s.id, SPLIT_BONUS);
            ledger.events.push(GameEvent::Exploded { at });
            return false;
        }
        ledger.graze(s, frame);
        if frame.arena.below(s.rect.y) {
            ledger.exit(s.id, Kind::Split);
            return false;
        }
        true
    });
}

/// Evenly spaced shards flying outward from `center`, the first one due right
pub fn split_shards(center: Vec2, speed: f32, ids: &mut EntityIds) -> Vec<RadialShot> {
    (0..SPLIT_SHARDS)
        .map(|i| RadialShot {
            id: ids.next(),
            rect: Rect::centered(center, SHARD_SIZE, SHARD_SIZE),
            vel: Vec2::from_angle(TAU / SPLIT_SHARDS as f32 * i as f32) * speed,
        })
        .collect()
}

/// Advance every population by one frame.
///
/// Exploding bullets and splitters run before the shots they release, so a
/// fresh burst moves on the frame it appears; lasers run before indicators so
/// a new beam is first tested on the following frame.
pub fn advance(pops: &mut Populations, ids: &mut EntityIds, frame: &Frame) -> Ledger {
    let mut ledger = Ledger::default();

    step_triangle(&mut pops.triangle, frame, &mut ledger);
    step_bouncing(&mut pops.bouncing, frame, &mut ledger);
    step_exploding(&mut pops.exploding, &mut pops.fragments, ids, frame, &mut ledger);
    step_fragments(&mut pops.fragments, frame, &mut ledger);
    step_lasers(&mut pops.lasers, frame, &mut ledger);
    step_indicators(&mut pops.laser_indicators, &mut pops.lasers, ids, &mut ledger);

    fall(&mut pops.top, frame, &mut ledger);
    step_side(&mut pops.side, frame, &mut ledger);
    fall(&mut pops.egg, frame, &mut ledger);
    fall(&mut pops.boss, frame, &mut ledger);
    fall(&mut pops.fast, frame, &mut ledger);
    fall(&mut pops.rect, frame, &mut ledger);
    step_diagonal(&mut pops.diagonal, frame, &mut ledger);
    step_zigzag(&mut pops.zigzag, frame, &mut ledger);
    step_star(&mut pops.star, frame, &mut ledger);

    step_homing(&mut pops.homing, frame, &mut ledger);
    step_spiral(&mut pops.spiral, frame, &mut ledger);
    step_wave(&mut pops.wave, frame, &mut ledger);
    step_boomerang(&mut pops.boomerang, frame, &mut ledger);
    step_split(&mut pops.split, &mut pops.radial, ids, frame, &mut ledger);
    step_radial(&mut pops.radial, frame, &mut ledger);

    ledger
}
