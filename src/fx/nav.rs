//! Floating radial navigation with a magnetic anchor.

use super::constants::*;
use super::section::Section;
use glam::Vec2;
use std::f32::consts::{FRAC_PI_2, TAU};

pub const MENU_ITEMS: [Section; 6] = [
    Section::Memories,
    Section::Music,
    Section::Chat,
    Section::Gallery,
    Section::Surprises,
    Section::Timeline,
];

#[derive(Clone, Debug)]
pub struct NavParams {
    pub magnetic_radius: f32,
    pub follow_fraction: f32,
    pub menu_radius: f32,
    pub hover_radius: f32,
    pub item_radius: f32,
    pub line_fade_step: f32,
}

impl Default for NavParams {
    fn default() -> Self {
        Self {
            magnetic_radius: MAGNETIC_RADIUS,
            follow_fraction: FOLLOW_FRACTION,
            menu_radius: MENU_RADIUS,
            hover_radius: MENU_HOVER_RADIUS,
            item_radius: MENU_ITEM_RADIUS,
            line_fade_step: MENU_LINE_FADE_STEP,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavItem {
    pub section: Section,
    pub position: Vec2,
}

#[derive(Clone, Debug)]
pub struct MagneticNav {
    pub params: NavParams,
    anchor: Vec2,
    expanded: bool,
    line_opacity: f32,
}

/// One exponential-decay follow step. Moves only inside the magnetic radius.
#[inline]
pub fn magnetic_step(anchor: Vec2, pointer: Vec2, radius: f32, fraction: f32) -> Vec2 {
    if anchor.distance(pointer) < radius {
        anchor + (pointer - anchor) * fraction
    } else {
        anchor
    }
}

/// Evenly spaced positions on a circle, first one straight up (+y is down).
pub fn radial_layout(center: Vec2, radius: f32, count: usize) -> Vec<Vec2> {
    (0..count)
        .map(|i| {
            let angle = i as f32 * TAU / count as f32 - FRAC_PI_2;
            center + Vec2::new(angle.cos(), angle.sin()) * radius
        })
        .collect()
}

impl MagneticNav {
    pub fn new(anchor: Vec2, params: NavParams) -> Self {
        Self {
            params,
            anchor,
            expanded: false,
            line_opacity: 0.0,
        }
    }

    pub fn anchor(&self) -> Vec2 {
        self.anchor
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn line_opacity(&self) -> f32 {
        self.line_opacity
    }

    pub fn set_anchor(&mut self, anchor: Vec2) {
        self.anchor = anchor;
    }

    /// Pull the anchor back inside `[margin, viewport - margin]`.
    pub fn clamp_into(&mut self, viewport: Vec2, margin: f32) {
        let lo = Vec2::splat(margin).min(viewport);
        let hi = (viewport - Vec2::splat(margin)).max(lo);
        self.set_anchor(self.anchor.clamp(lo, hi));
    }

    /// Per-update follow, hover and line fade. The anchor stays put while the
    /// menu is open so its items can be reached.
    pub fn update(&mut self, pointer: Vec2) {
        let p = &self.params;
        if !self.expanded {
            self.anchor = magnetic_step(self.anchor, pointer, p.magnetic_radius, p.follow_fraction);
        }

        let dist = self.anchor.distance(pointer);
        if dist < p.hover_radius {
            self.expanded = true;
        } else if dist > p.menu_radius + p.item_radius {
            self.expanded = false;
        }

        let target = if self.expanded { 1.0 } else { 0.0 };
        let step = p.line_fade_step;
        self.line_opacity = if self.line_opacity < target {
            (self.line_opacity + step).min(target)
        } else {
            (self.line_opacity - step).max(target)
        };
    }

    pub fn collapse(&mut self) {
        self.expanded = false;
        self.line_opacity = 0.0;
    }

    /// Item layout around the anchor; empty while collapsed.
    pub fn items(&self) -> Vec<NavItem> {
        if !self.expanded {
            return Vec::new();
        }
        radial_layout(self.anchor, self.params.menu_radius, MENU_ITEMS.len())
            .into_iter()
            .zip(MENU_ITEMS)
            .map(|(position, section)| NavItem { section, position })
            .collect()
    }

    /// Hit test an expanded item.
    pub fn item_at(&self, point: Vec2) -> Option<Section> {
        self.items()
            .into_iter()
            .find(|item| item.position.distance(point) <= self.params.item_radius)
            .map(|item| item.section)
    }
}
