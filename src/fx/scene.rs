//! Retained-list render model.
//!
//! `build_scene` is a pure function from live entities to draw commands; the
//! canvas renderer only replays the list. Nothing here owns a DOM node.

use super::nav::MagneticNav;
use super::particles::{Particle, ParticleKind};
use super::theme::Palette;
use super::trail::CursorTrail;
use glam::Vec2;
use std::time::Duration;

pub const TRAIL_MARKER_RADIUS: f32 = 6.0;
pub const SPARKLE_SIZE: f32 = 14.0;
pub const HEART_SIZE: f32 = 22.0;
pub const NAV_ANCHOR_RADIUS: f32 = 18.0;
pub const NAV_LABEL_SIZE: f32 = 12.0;

pub const HEART_GLYPH: &str = "\u{2665}";
pub const SPARKLE_GLYPH: &str = "\u{2728}";

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCmd {
    Circle {
        center: Vec2,
        radius: f32,
        color: [f32; 3],
        alpha: f32,
    },
    Glyph {
        at: Vec2,
        text: &'static str,
        size: f32,
        color: [f32; 3],
        alpha: f32,
    },
    Line {
        from: Vec2,
        to: Vec2,
        color: [f32; 3],
        alpha: f32,
    },
}

impl DrawCmd {
    pub fn alpha(&self) -> f32 {
        match self {
            DrawCmd::Circle { alpha, .. }
            | DrawCmd::Glyph { alpha, .. }
            | DrawCmd::Line { alpha, .. } => *alpha,
        }
    }
}

/// Draw order: particles, trail, sparkles, hearts, nav lines, nav nodes.
pub fn build_scene(
    particles: &[Particle],
    trail: &CursorTrail,
    nav: &MagneticNav,
    palette: &Palette,
    now: Duration,
) -> Vec<DrawCmd> {
    let mut out = Vec::with_capacity(particles.len() + 32);

    for p in particles {
        out.push(particle_cmd(p));
    }

    // Back to front so marker 0 lands on top.
    for m in trail.markers().iter().rev() {
        let alpha = m.opacity();
        if alpha <= 0.0 {
            continue;
        }
        out.push(DrawCmd::Circle {
            center: m.position,
            radius: TRAIL_MARKER_RADIUS * m.scale(),
            color: palette.color(m.index),
            alpha,
        });
    }

    for s in trail.sparkles() {
        out.push(DrawCmd::Glyph {
            at: s.position,
            text: SPARKLE_GLYPH,
            size: SPARKLE_SIZE,
            color: s.color,
            alpha: 1.0 - s.progress(now),
        });
    }

    for h in trail.hearts().iter().filter(|h| h.is_visible(now)) {
        out.push(DrawCmd::Glyph {
            at: h.position(now),
            text: HEART_GLYPH,
            size: HEART_SIZE,
            color: h.color,
            alpha: 1.0 - h.progress(now),
        });
    }

    let anchor = nav.anchor();
    let items = nav.items();
    let line_alpha = nav.line_opacity();
    if line_alpha > 0.0 {
        for item in &items {
            out.push(DrawCmd::Line {
                from: anchor,
                to: item.position,
                color: palette.color(1),
                alpha: line_alpha,
            });
        }
    }
    for item in &items {
        out.push(DrawCmd::Circle {
            center: item.position,
            radius: nav.params.item_radius,
            color: palette.color(2),
            alpha: line_alpha.max(0.35),
        });
        out.push(DrawCmd::Glyph {
            at: item.position,
            text: item.section.label(),
            size: NAV_LABEL_SIZE,
            color: [1.0, 1.0, 1.0],
            alpha: line_alpha.max(0.35),
        });
    }
    out.push(DrawCmd::Circle {
        center: anchor,
        radius: NAV_ANCHOR_RADIUS,
        color: palette.primary(),
        alpha: 0.9,
    });
    out.push(DrawCmd::Glyph {
        at: anchor,
        text: HEART_GLYPH,
        size: NAV_ANCHOR_RADIUS,
        color: [1.0, 1.0, 1.0],
        alpha: 1.0,
    });

    out
}

#[inline]
fn particle_cmd(p: &Particle) -> DrawCmd {
    let alpha = p.opacity();
    match p.kind {
        ParticleKind::Spark => DrawCmd::Circle {
            center: p.position,
            radius: p.radius,
            color: p.color,
            alpha,
        },
        ParticleKind::Heart | ParticleKind::Star => DrawCmd::Glyph {
            at: p.position,
            text: p.kind.glyph(),
            size: p.radius * 4.0,
            color: p.color,
            alpha,
        },
    }
}

/// CSS `rgba(...)` for a color and alpha.
pub fn css_rgba(color: [f32; 3], alpha: f32) -> String {
    let c = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    format!(
        "rgba({},{},{},{:.3})",
        c(color[0]),
        c(color[1]),
        c(color[2]),
        alpha.clamp(0.0, 1.0)
    )
}
