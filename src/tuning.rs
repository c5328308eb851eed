//! Data-driven game balance
//!
//! Spawn rates are "one in N per frame" where N shrinks with difficulty down
//! to a per-kind floor. Speeds are in pixels per frame.

use serde::{Deserialize, Serialize};

use crate::consts::{FRAGMENT_SPEED, HOMING_SPEED};
use crate::sim::Kind;

/// Spawn trial denominator: `max(floor, base - difficulty * coeff)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpawnChance {
    pub floor: u32,
    pub base: u32,
    pub coeff: u32,
}

impl SpawnChance {
    pub const fn new(floor: u32, base: u32, coeff: u32) -> Self {
        Self { floor, base, coeff }
    }

    /// One-in-N denominator at the given difficulty (never below the floor, never 0)
    pub fn denominator(&self, difficulty: u32) -> u32 {
        self.base
            .saturating_sub(difficulty.saturating_mul(self.coeff))
            .max(self.floor)
            .max(1)
    }

    pub fn probability(&self, difficulty: u32) -> f64 {
        1.0 / self.denominator(difficulty) as f64
    }
}

/// Spawn trials rolled every frame. `Quad` is a compound spawn of four top
/// bullets; `Laser` spawns a laser indicator; `Radial` spawns a ring of
/// eight bullets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpawnKind {
    Top,
    Side,
    Diagonal,
    Boss,
    Zigzag,
    Fast,
    Star,
    Rect,
    Laser,
    Triangle,
    Quad,
    Egg,
    Bouncing,
    Exploding,
    Homing,
    Spiral,
    Radial,
    Wave,
    Boomerang,
    Split,
}

impl SpawnKind {
    /// Trial order within a frame
    pub const ALL: [SpawnKind; 14] = [
        SpawnKind::Top,
        SpawnKind::Side,
        SpawnKind::Diagonal,
        SpawnKind::Boss,
        SpawnKind::Zigzag,
        SpawnKind::Fast,
        SpawnKind::Star,
        SpawnKind::Rect,
        SpawnKind::Laser,
        SpawnKind::Triangle,
        SpawnKind::Quad,
        SpawnKind::Egg,
        SpawnKind::Bouncing,
        SpawnKind::Exploding,
    ];

    /// Patterns that only join the rotation with progressive unlocks on,
    /// rolled after `ALL` at a fixed rate
    pub const LATE: [SpawnKind; 6] = [
        SpawnKind::Homing,
        SpawnKind::Spiral,
        SpawnKind::Radial,
        SpawnKind::Wave,
        SpawnKind::Boomerang,
        SpawnKind::Split,
    ];

    /// Every pattern the progressive schedule knows about
    pub fn unlockable() -> impl Iterator<Item = SpawnKind> {
        Self::ALL.into_iter().chain(Self::LATE)
    }

    pub fn chance(self) -> SpawnChance {
        match self {
            SpawnKind::Top => SpawnChance::new(4, 30, 1),
            SpawnKind::Side => SpawnChance::new(4, 30, 1),
            SpawnKind::Diagonal => SpawnChance::new(10, 60, 2),
            SpawnKind::Boss => SpawnChance::new(20, 150, 5),
            SpawnKind::Zigzag => SpawnChance::new(10, 80, 2),
            SpawnKind::Fast => SpawnChance::new(6, 50, 1),
            SpawnKind::Star => SpawnChance::new(16, 80, 2),
            SpawnKind::Rect => SpawnChance::new(12, 60, 2),
            SpawnKind::Laser => SpawnChance::new(30, 120, 4),
            SpawnKind::Triangle => SpawnChance::new(10, 70, 2),
            SpawnKind::Quad => SpawnChance::new(8, 40, 1),
            SpawnKind::Egg => SpawnChance::new(10, 60, 2),
            SpawnKind::Bouncing => SpawnChance::new(15, 90, 2),
            SpawnKind::Exploding => SpawnChance::new(20, 100, 2),
            SpawnKind::Homing => SpawnChance::new(110, 110, 0),
            SpawnKind::Spiral => SpawnChance::new(130, 130, 0),
            SpawnKind::Radial => SpawnChance::new(150, 150, 0),
            SpawnKind::Wave => SpawnChance::new(160, 160, 0),
            SpawnKind::Boomerang => SpawnChance::new(170, 170, 0),
            SpawnKind::Split => SpawnChance::new(180, 180, 0),
        }
    }

    /// Seconds survived before this pattern may appear (progressive unlock mode)
    pub fn unlock_secs(self) -> u64 {
        match self {
            SpawnKind::Top => 0,
            SpawnKind::Side => 8,
            SpawnKind::Diagonal => 15,
            SpawnKind::Triangle => 25,
            SpawnKind::Quad => 35,
            SpawnKind::Zigzag => 45,
            SpawnKind::Fast => 55,
            SpawnKind::Rect => 65,
            SpawnKind::Star => 75,
            SpawnKind::Egg => 85,
            SpawnKind::Boss => 95,
            SpawnKind::Bouncing => 110,
            SpawnKind::Exploding => 125,
            SpawnKind::Laser => 140,
            SpawnKind::Homing => 155,
            SpawnKind::Spiral => 175,
            SpawnKind::Radial => 195,
            SpawnKind::Wave => 210,
            SpawnKind::Boomerang => 225,
            SpawnKind::Split => 240,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SpawnKind::Top => "Vertical",
            SpawnKind::Side => "Horizontal",
            SpawnKind::Diagonal => "Diagonal",
            SpawnKind::Boss => "Big Boss",
            SpawnKind::Zigzag => "ZigZag",
            SpawnKind::Fast => "Fast",
            SpawnKind::Star => "Star",
            SpawnKind::Rect => "Wide Rectangle",
            SpawnKind::Laser => "Laser",
            SpawnKind::Triangle => "Triangle",
            SpawnKind::Quad => "Quad Cluster",
            SpawnKind::Egg => "Tall Egg",
            SpawnKind::Bouncing => "Bouncing",
            SpawnKind::Exploding => "Exploding",
            SpawnKind::Homing => "Homing",
            SpawnKind::Spiral => "Spiral",
            SpawnKind::Radial => "Radial Burst",
            SpawnKind::Wave => "Wave",
            SpawnKind::Boomerang => "Boomerang",
            SpawnKind::Split => "Splitter",
        }
    }
}

/// Primary speed of a kind at the given difficulty (pixels per frame).
///
/// Falling kinds move down by this much; side bullets move right; diagonal
/// and triangle bullets move this much on both axes; bouncing bullets use it
/// as the magnitude of their launch velocity. Spiral bullets widen their
/// orbit by this much per frame and homing bullets steer toward this speed.
pub fn speed(kind: Kind, difficulty: u32) -> f32 {
    let half = difficulty / 2;
    let third = difficulty / 3;
    let d = difficulty as f32;
    let px = match kind {
        Kind::Top | Kind::Side => 6 + half,
        Kind::Egg => 5 + third,
        Kind::Boss => 8 + half,
        Kind::Fast => 12 + difficulty,
        Kind::Rect => 8 + half,
        Kind::Diagonal => 4 + third,
        Kind::Zigzag => 5 + third,
        Kind::Star | Kind::Triangle => 7 + half,
        Kind::Exploding => 5 + third,
        Kind::Bouncing => 7 + half,
        Kind::Fragment => return FRAGMENT_SPEED,
        Kind::LaserIndicator | Kind::Laser => 0,
        Kind::Homing => return HOMING_SPEED,
        Kind::Spiral => return 2.0 + d / 6.0,
        Kind::Radial => return 3.5 + d / 5.0,
        Kind::Wave | Kind::Split => return 5.0 + d / 4.0,
        Kind::Boomerang => return 8.0 + d / 3.0,
    };
    px as f32
}

/// Outward speed of the six shards a splitter breaks into
pub fn split_shard_speed(difficulty: u32) -> f32 {
    4.0 + difficulty as f32 / 5.0
}

/// Phase advance per frame of a wave bullet's sway (radians)
pub fn wave_sway_rate(difficulty: u32) -> f32 {
    0.25 + difficulty as f32 / 30.0
}

/// Score for a splitter that breaks apart on its own
pub const SPLIT_BONUS: u64 = 3;

/// Score for a projectile leaving the arena (or expiring) without hitting the player
pub fn exit_bonus(kind: Kind) -> u64 {
    match kind {
        Kind::Top | Kind::Side | Kind::Fragment | Kind::Radial => 1,
        Kind::Boss => 5,
        Kind::Star | Kind::Homing | Kind::Boomerang => 3,
        Kind::Egg
        | Kind::Fast
        | Kind::Rect
        | Kind::Diagonal
        | Kind::Zigzag
        | Kind::Triangle
        | Kind::Exploding
        | Kind::Bouncing
        | Kind::Spiral
        | Kind::Wave
        | Kind::Split => 2,
        Kind::LaserIndicator | Kind::Laser => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_chance_table() {
        assert_eq!(SpawnKind::Top.chance().denominator(1), 29);
        assert_eq!(SpawnKind::Top.chance().denominator(40), 4);
        assert_eq!(SpawnKind::Boss.chance().denominator(1), 145);
        assert_eq!(SpawnKind::Boss.chance().denominator(26), 20);
        assert_eq!(SpawnKind::Laser.chance().denominator(10), 80);
        assert_eq!(SpawnKind::Laser.chance().denominator(u32::MAX), 30);
    }

    #[test]
    fn test_speed_formulas() {
        assert_eq!(speed(Kind::Top, 1), 6.0);
        assert_eq!(speed(Kind::Top, 5), 8.0);
        assert_eq!(speed(Kind::Fast, 3), 15.0);
        assert_eq!(speed(Kind::Egg, 6), 7.0);
        assert_eq!(speed(Kind::Fragment, 99), FRAGMENT_SPEED);
        assert_eq!(speed(Kind::Spiral, 6), 3.0);
        assert_eq!(speed(Kind::Wave, 4), 6.0);
        assert_eq!(speed(Kind::Boomerang, 3), 9.0);
        assert_eq!(speed(Kind::Homing, 50), HOMING_SPEED);
        assert_eq!(split_shard_speed(5), 5.0);
        assert_eq!(wave_sway_rate(15), 0.75);
    }

    #[test]
    fn test_exit_bonus() {
        assert_eq!(exit_bonus(Kind::Boss), 5);
        assert_eq!(exit_bonus(Kind::Star), 3);
        assert_eq!(exit_bonus(Kind::Top), 1);
        assert_eq!(exit_bonus(Kind::Laser), 0);
        assert_eq!(exit_bonus(Kind::Homing), 3);
        assert_eq!(exit_bonus(Kind::Radial), 1);
    }

    #[test]
    fn test_late_patterns_follow_laser() {
        let laser = SpawnKind::Laser.unlock_secs();
        assert!(SpawnKind::ALL.iter().all(|k| k.unlock_secs() <= laser));
        let late: Vec<u64> = SpawnKind::LATE.iter().map(|k| k.unlock_secs()).collect();
        assert_eq!(late, vec![155, 175, 195, 210, 225, 240]);
        assert_eq!(SpawnKind::unlockable().count(), 20);
        // Fixed one-in-N regardless of difficulty
        assert_eq!(SpawnKind::Split.chance().denominator(1), 180);
        assert_eq!(SpawnKind::Split.chance().denominator(500), 180);
    }

    #[test]
    fn test_unlock_schedule_starts_with_top() {
        let first = SpawnKind::ALL
            .iter()
            .min_by_key(|k| k.unlock_secs())
            .copied();
        assert_eq!(first, Some(SpawnKind::Top));
    }

    proptest! {
        #[test]
        fn prop_denominator_monotonic_and_floored(d in 0u32..10_000) {
            for kind in SpawnKind::unlockable() {
                let c = kind.chance();
                prop_assert!(c.denominator(d) >= c.floor);
                prop_assert!(c.denominator(d + 1) <= c.denominator(d));
            }
        }
    }
}
