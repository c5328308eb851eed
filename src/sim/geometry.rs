//! Collision and graze predicates against the player's rectangle
//!
//! Everything here is pure: boxes and point sets in, booleans out.
//! Polygons are tested through their bounding box, not their true outline.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned box, origin at the top-left corner (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Box of the given size centered on `center`
    pub fn centered(center: Vec2, w: f32, h: f32) -> Self {
        Self::new(center.x - w / 2.0, center.y - h / 2.0, w, h)
    }

    /// Tightest box around a point set (zero box for an empty set)
    pub fn bounding(points: &[Vec2]) -> Self {
        match extent(points) {
            Some((min, max)) => Self::new(min.x, min.y, max.x - min.x, max.y - min.y),
            None => Self::default(),
        }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    #[inline]
    pub fn translate(&mut self, delta: Vec2) {
        self.x += delta.x;
        self.y += delta.y;
    }

    /// Inclusive test of a horizontal line against this box's vertical extent
    #[inline]
    pub fn spans_y(&self, y: f32) -> bool {
        self.y <= y && self.bottom() >= y
    }
}

/// Playfield bounds; the origin is the top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Default for Arena {
    fn default() -> Self {
        Self {
            width: crate::consts::ARENA_WIDTH,
            height: crate::consts::ARENA_HEIGHT,
        }
    }
}

impl Arena {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Box touches or crosses any wall (the lethal edge rule)
    pub fn touches_edge(&self, r: &Rect) -> bool {
        r.x <= 0.0 || r.right() >= self.width || r.y <= 0.0 || r.bottom() >= self.height
    }

    #[inline]
    pub fn below(&self, y: f32) -> bool {
        y > self.height
    }

    #[inline]
    pub fn beyond_sides(&self, x: f32) -> bool {
        x < 0.0 || x > self.width
    }

    /// Point has left the arena through any edge
    #[inline]
    pub fn outside(&self, p: Vec2) -> bool {
        self.beyond_sides(p.x) || p.y < 0.0 || p.y > self.height
    }

    #[inline]
    pub fn mid_y(&self) -> f32 {
        self.height / 2.0
    }
}

/// Open half-plane overlap test: boxes that merely share an edge do not overlap
#[inline]
pub fn rect_overlaps_target(b: &Rect, target: &Rect) -> bool {
    b.x < target.right() && b.right() > target.x && b.y < target.bottom() && b.bottom() > target.y
}

/// Component-wise (min, max) corners of a point set
fn extent(points: &[Vec2]) -> Option<(Vec2, Vec2)> {
    let first = *points.first()?;
    Some(
        points
            .iter()
            .fold((first, first), |(min, max), p| (min.min(*p), max.max(*p))),
    )
}

/// Polygon overlap, approximated by the polygon's bounding box
pub fn poly_overlaps_target(points: &[Vec2], target: &Rect) -> bool {
    let Some((min, max)) = extent(points) else {
        return false;
    };
    min.x < target.right() && max.x > target.x && min.y < target.bottom() && max.y > target.y
}

/// Vertex mean (not the area centroid)
pub fn centroid(points: &[Vec2]) -> Vec2 {
    if points.is_empty() {
        return Vec2::ZERO;
    }
    points.iter().copied().sum::<Vec2>() / points.len() as f32
}

/// Near miss: centers closer than `radius` without the boxes overlapping
pub fn graze_rect(b: &Rect, target: &Rect, radius: f32) -> bool {
    target.center().distance(b.center()) < radius && !rect_overlaps_target(b, target)
}

/// Near miss for a point set, measured from its vertex mean
pub fn graze_poly(points: &[Vec2], target: &Rect, radius: f32) -> bool {
    !points.is_empty()
        && target.center().distance(centroid(points)) < radius
        && !poly_overlaps_target(points, target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const PLAYER: Rect = Rect::new(100.0, 100.0, 20.0, 20.0);

    #[test]
    fn test_overlap_is_open_on_edges() {
        // Touching the left edge exactly
        assert!(!rect_overlaps_target(&Rect::new(80.0, 100.0, 20.0, 20.0), &PLAYER));
        // Touching the bottom edge exactly
        assert!(!rect_overlaps_target(&Rect::new(100.0, 120.0, 20.0, 20.0), &PLAYER));
        // One pixel of penetration
        assert!(rect_overlaps_target(&Rect::new(81.0, 100.0, 20.0, 20.0), &PLAYER));
    }

    #[test]
    fn test_poly_uses_bounding_box() {
        // The hypotenuse passes above the player, but the bounding box reaches it
        let tri = [
            Vec2::new(90.0, 60.0),
            Vec2::new(140.0, 60.0),
            Vec2::new(140.0, 110.0),
        ];
        assert!(poly_overlaps_target(&tri, &PLAYER));

        let clear = [
            Vec2::new(90.0, 60.0),
            Vec2::new(140.0, 60.0),
            Vec2::new(140.0, 99.0),
        ];
        assert!(!poly_overlaps_target(&clear, &PLAYER));
        assert!(!poly_overlaps_target(&[], &PLAYER));
    }

    #[test]
    fn test_centroid_is_vertex_mean() {
        let pts = [Vec2::new(0.0, 0.0), Vec2::new(20.0, 0.0), Vec2::new(10.0, 30.0)];
        let c = centroid(&pts);
        assert!((c.x - 10.0).abs() < 1e-5);
        assert!((c.y - 10.0).abs() < 1e-5);
    }

    #[test]
    fn test_graze_ring() {
        // 40 px to the right of the player, not touching
        let near = Rect::new(140.0, 100.0, 20.0, 20.0);
        assert!(graze_rect(&near, &PLAYER, 50.0));
        assert!(!graze_rect(&near, &PLAYER, 40.0));

        // Overlapping is a hit, never a graze
        let hit = Rect::new(105.0, 105.0, 20.0, 20.0);
        assert!(!graze_rect(&hit, &PLAYER, 50.0));
    }

    #[test]
    fn test_arena_edges() {
        let arena = Arena::new(800.0, 600.0);
        assert!(arena.touches_edge(&Rect::new(0.0, 300.0, 20.0, 20.0)));
        assert!(arena.touches_edge(&Rect::new(780.0, 300.0, 20.0, 20.0)));
        assert!(arena.touches_edge(&Rect::new(300.0, 580.0, 20.0, 20.0)));
        assert!(!arena.touches_edge(&Rect::new(1.0, 1.0, 20.0, 20.0)));
        assert!(arena.outside(Vec2::new(400.0, -1.0)));
        assert!(!arena.outside(Vec2::new(400.0, 600.0)));
    }

    proptest! {
        #[test]
        fn prop_graze_and_hit_are_exclusive(
            x in -100.0f32..300.0,
            y in -100.0f32..300.0,
            w in 1.0f32..80.0,
            h in 1.0f32..80.0,
            radius in 0.0f32..120.0,
        ) {
            let b = Rect::new(x, y, w, h);
            prop_assert!(!(graze_rect(&b, &PLAYER, radius) && rect_overlaps_target(&b, &PLAYER)));
        }

        #[test]
        fn prop_overlap_is_symmetric(
            x in -100.0f32..300.0,
            y in -100.0f32..300.0,
            w in 0.0f32..80.0,
            h in 0.0f32..80.0,
        ) {
            let b = Rect::new(x, y, w, h);
            prop_assert_eq!(rect_overlaps_target(&b, &PLAYER), rect_overlaps_target(&PLAYER, &b));
        }

        #[test]
        fn prop_box_as_polygon_matches_box(
            x in -100.0f32..300.0,
            y in -100.0f32..300.0,
            w in 1.0f32..80.0,
            h in 1.0f32..80.0,
        ) {
            let b = Rect::new(x, y, w, h);
            let corners = [
                Vec2::new(b.x, b.y),
                Vec2::new(b.right(), b.y),
                Vec2::new(b.right(), b.bottom()),
                Vec2::new(b.x, b.bottom()),
            ];
            prop_assert_eq!(poly_overlaps_target(&corners, &PLAYER), rect_overlaps_target(&b, &PLAYER));
        }
    }
}
