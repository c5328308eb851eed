//! Snapshot to draw-command translation
//!
//! The core never rasterises. A host renderer (canvas, terminal, GPU) replays
//! these commands in order, back to front.

use glam::Vec2;
use serde::Serialize;

use crate::sim::{Kind, Rect, Snapshot};

/// Player fill
pub const PLAYER_COLOR: &str = "white";

/// Beam and warning line widths
pub const LASER_WIDTH: f32 = 8.0;
pub const INDICATOR_WIDTH: f32 = 3.0;
/// Dash pattern (on, off) for the laser warning
pub const INDICATOR_DASH: [f32; 2] = [5.0, 2.0];
/// Dash pattern (on, off) for the graze ring
pub const RING_DASH: [f32; 2] = [5.0, 5.0];
pub const RING_WIDTH: f32 = 2.0;

/// One primitive for the host renderer
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DrawCommand {
    Clear {
        width: f32,
        height: f32,
    },
    FillRect {
        rect: Rect,
        color: &'static str,
    },
    /// Ellipse inscribed in `rect`
    FillEllipse {
        rect: Rect,
        color: &'static str,
    },
    /// Closed polygon in vertex order
    FillPolygon {
        points: Vec<Vec2>,
        color: &'static str,
    },
    /// Full-width horizontal line; `dash` is empty for a solid stroke
    HorizontalLine {
        y: f32,
        width: f32,
        dash: Vec<f32>,
        color: &'static str,
    },
    StrokeCircle {
        center: Vec2,
        radius: f32,
        width: f32,
        dash: Vec<f32>,
        color: &'static str,
    },
}

fn ellipse(rect: Rect, kind: Kind) -> DrawCommand {
    DrawCommand::FillEllipse {
        rect,
        color: kind.color(),
    }
}

/// Build the frame's draw list: player and graze ring, then every
/// population, lasers last
pub fn draw_list(snap: &Snapshot) -> Vec<DrawCommand> {
    let pops = snap.populations;
    let mut out = Vec::with_capacity(pops.len() + 4);

    out.push(DrawCommand::Clear {
        width: snap.arena.width,
        height: snap.arena.height,
    });
    out.push(DrawCommand::FillRect {
        rect: snap.player,
        color: PLAYER_COLOR,
    });
    if let Some(radius) = snap.graze_ring {
        out.push(DrawCommand::StrokeCircle {
            center: snap.player.center(),
            radius,
            width: RING_WIDTH,
            dash: RING_DASH.to_vec(),
            color: "white",
        });
    }

    let ovals = [
        &pops.top,
        &pops.side,
        &pops.egg,
        &pops.boss,
        &pops.fast,
    ];
    for shot in ovals.into_iter().flatten() {
        out.push(ellipse(shot.rect, shot.kind));
    }
    out.extend(pops.bouncing.iter().map(|b| ellipse(b.rect, Kind::Bouncing)));
    out.extend(pops.exploding.iter().map(|b| ellipse(b.rect, Kind::Exploding)));
    out.extend(pops.fragments.iter().map(|f| ellipse(f.rect, Kind::Fragment)));
    out.extend(pops.zigzag.iter().map(|z| ellipse(z.rect, Kind::Zigzag)));
    out.extend(pops.rect.iter().map(|b| DrawCommand::FillRect {
        rect: b.rect,
        color: Kind::Rect.color(),
    }));
    out.extend(pops.star.iter().map(|s| DrawCommand::FillPolygon {
        points: s.points.to_vec(),
        color: Kind::Star.color(),
    }));
    out.extend(pops.triangle.iter().map(|t| DrawCommand::FillPolygon {
        points: t.points.to_vec(),
        color: Kind::Triangle.color(),
    }));
    out.extend(pops.diagonal.iter().map(|d| ellipse(d.rect, Kind::Diagonal)));
    out.extend(pops.homing.iter().map(|h| ellipse(h.rect, Kind::Homing)));
    out.extend(pops.spiral.iter().map(|s| ellipse(s.rect, Kind::Spiral)));
    out.extend(pops.wave.iter().map(|w| ellipse(w.rect, Kind::Wave)));
    out.extend(pops.boomerang.iter().map(|b| ellipse(b.rect, Kind::Boomerang)));
    out.extend(pops.split.iter().map(|s| ellipse(s.rect, Kind::Split)));
    out.extend(pops.radial.iter().map(|r| ellipse(r.rect, Kind::Radial)));

    out.extend(pops.lasers.iter().map(|l| DrawCommand::HorizontalLine {
        y: l.y,
        width: LASER_WIDTH,
        dash: Vec::new(),
        color: Kind::Laser.color(),
    }));
    out.extend(pops.laser_indicators.iter().map(|l| DrawCommand::HorizontalLine {
        y: l.y,
        width: INDICATOR_WIDTH,
        dash: INDICATOR_DASH.to_vec(),
        color: Kind::LaserIndicator.color(),
    }));

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::sim::spawn::spawn_kind;
    use crate::sim::Simulation;
    use crate::tuning::SpawnKind;

    #[test]
    fn test_one_command_per_projectile() {
        let mut sim = Simulation::new(Settings::default(), 8, 0.0);
        for kind in SpawnKind::unlockable() {
            spawn_kind(&mut sim, kind);
        }
        let snap = sim.snapshot(0.0);
        let cmds = draw_list(&snap);
        // Clear + player + one per projectile, no ring yet
        assert_eq!(cmds.len(), 2 + sim.populations.len());
        assert!(matches!(cmds[0], DrawCommand::Clear { .. }));
        assert!(
            cmds.iter()
                .any(|c| matches!(c, DrawCommand::FillPolygon { points, .. } if points.len() == 5))
        );
        assert!(cmds.iter().any(|c| matches!(
            c,
            DrawCommand::HorizontalLine { width, .. } if *width == INDICATOR_WIDTH
        )));
    }

    #[test]
    fn test_graze_ring_follows_effect() {
        let mut sim = Simulation::new(Settings::default(), 8, 0.0);
        sim.graze_effect_ticks = 3;
        let cmds = draw_list(&sim.snapshot(0.0));
        let ring = cmds.iter().find_map(|c| match c {
            DrawCommand::StrokeCircle { center, radius, .. } => Some((*center, *radius)),
            _ => None,
        });
        assert_eq!(ring, Some((Vec2::new(400.0, 560.0), 40.0)));
    }

    #[test]
    fn test_commands_serialize_tagged() {
        let json = serde_json::to_string(&DrawCommand::Clear {
            width: 800.0,
            height: 600.0,
        })
        .unwrap();
        assert_eq!(json, r#"{"type":"clear","width":800.0,"height":600.0}"#);
    }
}
