//! Projectile types and their populations
//!
//! Each kind lives in its own `Vec`, so per-kind rules and exit bonuses stay
//! separate. Every projectile carries a stable id allocated at spawn; ids are
//! never reused within a process, so the grazed set can be keyed by them.

use glam::Vec2;
use serde::Serialize;

use super::geometry::{Rect, graze_poly, graze_rect, poly_overlaps_target, rect_overlaps_target};

/// Stable projectile identity
pub type EntityId = u32;

/// Monotonic id source, shared across restarts
#[derive(Debug, Clone)]
pub struct EntityIds {
    next: EntityId,
}

impl Default for EntityIds {
    fn default() -> Self {
        Self { next: 1 }
    }
}

impl EntityIds {
    pub fn next(&mut self) -> EntityId {
        let id = self.next;
        self.next = self.next.wrapping_add(1);
        id
    }
}

/// Projectile kinds (one population each)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Kind {
    /// Falls from the top edge
    Top,
    /// Enters from the left edge and crosses horizontally
    Side,
    Diagonal,
    Boss,
    Zigzag,
    Fast,
    Star,
    /// Wide flat rectangle
    Rect,
    Triangle,
    /// Tall oval
    Egg,
    /// Bursts into fragments at the arena's vertical midpoint
    Exploding,
    Fragment,
    Bouncing,
    LaserIndicator,
    Laser,
    Homing,
    Spiral,
    /// Straight shots from a radial burst or a broken splitter
    Radial,
    Wave,
    Boomerang,
    /// Falls, then breaks into six radial shots
    Split,
}

impl Kind {
    /// Fill color (cosmetic only)
    pub fn color(self) -> &'static str {
        match self {
            Kind::Top => "red",
            Kind::Side => "yellow",
            Kind::Diagonal => "green",
            Kind::Boss => "purple",
            Kind::Zigzag => "cyan",
            Kind::Fast => "orange",
            Kind::Star => "magenta",
            Kind::Rect => "blue",
            Kind::Triangle => "#bfff00",
            Kind::Egg => "tan",
            Kind::Exploding | Kind::Fragment => "white",
            Kind::Bouncing => "pink",
            Kind::LaserIndicator | Kind::Laser => "red",
            Kind::Homing => "#ffdd00",
            Kind::Spiral => "#00ff88",
            Kind::Radial => "#ff00ff",
            Kind::Wave => "#33aaff",
            Kind::Boomerang => "#ffaa33",
            Kind::Split => "#ff55ff",
        }
    }
}

/// Collision footprint
#[derive(Debug, Clone, Copy)]
pub enum Shape<'a> {
    Box(Rect),
    Poly(&'a [Vec2]),
}

/// Common capability of everything that can hit or graze the player
pub trait Projectile {
    fn id(&self) -> EntityId;
    fn kind(&self) -> Kind;
    fn shape(&self) -> Shape<'_>;

    fn overlaps(&self, target: &Rect) -> bool {
        match self.shape() {
            Shape::Box(r) => rect_overlaps_target(&r, target),
            Shape::Poly(points) => poly_overlaps_target(points, target),
        }
    }

    fn grazes(&self, target: &Rect, radius: f32) -> bool {
        match self.shape() {
            Shape::Box(r) => graze_rect(&r, target, radius),
            Shape::Poly(points) => graze_poly(points, target, radius),
        }
    }
}

/// Plain box bullet that only translates (top, side, boss, fast, rect, egg, exploding)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoxShot {
    pub id: EntityId,
    pub kind: Kind,
    pub rect: Rect,
}

/// Falls at 45 degrees; `dir` is -1 (left) or +1 (right)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagonal {
    pub id: EntityId,
    pub rect: Rect,
    pub dir: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Zigzag {
    pub id: EntityId,
    pub rect: Rect,
    pub dir: f32,
    /// Own step counter; direction flips every `ZIGZAG_FLIP_TICKS`
    pub step: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Star {
    pub id: EntityId,
    pub points: [Vec2; 5],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Triangle {
    pub id: EntityId,
    pub points: [Vec2; 3],
    pub dir: f32,
}

/// Shrapnel from an exploding bullet
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Fragment {
    pub id: EntityId,
    pub rect: Rect,
    pub vel: Vec2,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bouncer {
    pub id: EntityId,
    pub rect: Rect,
    pub vel: Vec2,
    /// Wall contacts left; removed on the evaluation after it drops below zero
    pub bounces: i32,
}

/// Dashed warning line that turns into a `Laser` when its timer runs out
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LaserIndicator {
    pub id: EntityId,
    pub y: f32,
    pub timer: i32,
}

/// Full-width horizontal beam
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Laser {
    pub id: EntityId,
    pub y: f32,
    pub timer: i32,
}

/// Blends its velocity toward the player every frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Homing {
    pub id: EntityId,
    pub rect: Rect,
    pub vel: Vec2,
}

/// Orbits `origin` on a widening spiral
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Spiral {
    pub id: EntityId,
    pub rect: Rect,
    pub origin: Vec2,
    pub angle: f32,
    pub radius: f32,
    /// Radius gained per frame
    pub grow: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadialShot {
    pub id: EntityId,
    pub rect: Rect,
    pub vel: Vec2,
}

/// Falls while swaying sinusoidally around `base_x`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Wave {
    pub id: EntityId,
    pub rect: Rect,
    pub base_x: f32,
    pub phase: f32,
    pub amp: f32,
    pub vy: f32,
    pub phase_speed: f32,
}

/// Falls for `timer` frames, then climbs back out the top
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Boomerang {
    pub id: EntityId,
    pub rect: Rect,
    pub vy: f32,
    pub timer: i32,
    pub returning: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Splitter {
    pub id: EntityId,
    pub rect: Rect,
    /// Frames until it breaks apart
    pub timer: i32,
}

/// `Projectile` for single-kind structs with a `rect` hitbox
macro_rules! box_projectile {
    ($($ty:ty => $kind:expr),* $(,)?) => {
        $(
            impl Projectile for $ty {
                fn id(&self) -> EntityId {
                    self.id
                }
                fn kind(&self) -> Kind {
                    $kind
                }
                fn shape(&self) -> Shape<'_> {
                    Shape::Box(self.rect)
                }
            }
        )*
    };
}

box_projectile! {
    Diagonal => Kind::Diagonal,
    Zigzag => Kind::Zigzag,
    Fragment => Kind::Fragment,
    Bouncer => Kind::Bouncing,
    Homing => Kind::Homing,
    Spiral => Kind::Spiral,
    RadialShot => Kind::Radial,
    Wave => Kind::Wave,
    Boomerang => Kind::Boomerang,
    Splitter => Kind::Split,
}

impl Projectile for BoxShot {
    fn id(&self) -> EntityId {
        self.id
    }
    fn kind(&self) -> Kind {
        self.kind
    }
    fn shape(&self) -> Shape<'_> {
        Shape::Box(self.rect)
    }
}

impl Projectile for Star {
    fn id(&self) -> EntityId {
        self.id
    }
    fn kind(&self) -> Kind {
        Kind::Star
    }
    fn shape(&self) -> Shape<'_> {
        Shape::Poly(&self.points)
    }
}

impl Projectile for Triangle {
    fn id(&self) -> EntityId {
        self.id
    }
    fn kind(&self) -> Kind {
        Kind::Triangle
    }
    fn shape(&self) -> Shape<'_> {
        Shape::Poly(&self.points)
    }
}

/// All live projectiles, one homogeneous collection per kind
#[derive(Debug, Clone, Default, Serialize)]
pub struct Populations {
    pub top: Vec<BoxShot>,
    pub side: Vec<BoxShot>,
    pub diagonal: Vec<Diagonal>,
    pub boss: Vec<BoxShot>,
    pub zigzag: Vec<Zigzag>,
    pub fast: Vec<BoxShot>,
    pub star: Vec<Star>,
    pub rect: Vec<BoxShot>,
    pub triangle: Vec<Triangle>,
    pub egg: Vec<BoxShot>,
    pub exploding: Vec<BoxShot>,
    pub fragments: Vec<Fragment>,
    pub bouncing: Vec<Bouncer>,
    pub laser_indicators: Vec<LaserIndicator>,
    pub lasers: Vec<Laser>,
    pub homing: Vec<Homing>,
    pub spiral: Vec<Spiral>,
    pub radial: Vec<RadialShot>,
    pub wave: Vec<Wave>,
    pub boomerang: Vec<Boomerang>,
    pub split: Vec<Splitter>,
}

impl Populations {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Ids of every live projectile, population by population
    pub fn ids(&self) -> Vec<EntityId> {
        let boxes = [
            &self.top,
            &self.side,
            &self.boss,
            &self.fast,
            &self.rect,
            &self.egg,
            &self.exploding,
        ];
        let mut ids: Vec<EntityId> = boxes.iter().flat_map(|p| p.iter().map(|b| b.id)).collect();
        ids.extend(self.diagonal.iter().map(|b| b.id));
        ids.extend(self.zigzag.iter().map(|b| b.id));
        ids.extend(self.star.iter().map(|b| b.id));
        ids.extend(self.triangle.iter().map(|b| b.id));
        ids.extend(self.fragments.iter().map(|b| b.id));
        ids.extend(self.bouncing.iter().map(|b| b.id));
        ids.extend(self.laser_indicators.iter().map(|l| l.id));
        ids.extend(self.lasers.iter().map(|l| l.id));
        ids.extend(self.homing.iter().map(|b| b.id));
        ids.extend(self.spiral.iter().map(|b| b.id));
        ids.extend(self.radial.iter().map(|b| b.id));
        ids.extend(self.wave.iter().map(|b| b.id));
        ids.extend(self.boomerang.iter().map(|b| b.id));
        ids.extend(self.split.iter().map(|b| b.id));
        ids
    }

    pub fn len(&self) -> usize {
        [
            self.top.len(),
            self.side.len(),
            self.diagonal.len(),
            self.boss.len(),
            self.zigzag.len(),
            self.fast.len(),
            self.star.len(),
            self.rect.len(),
            self.triangle.len(),
            self.egg.len(),
            self.exploding.len(),
            self.fragments.len(),
            self.bouncing.len(),
            self.laser_indicators.len(),
            self.lasers.len(),
            self.homing.len(),
            self.spiral.len(),
            self.radial.len(),
            self.wave.len(),
            self.boomerang.len(),
            self.split.len(),
        ]
        .iter()
        .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
