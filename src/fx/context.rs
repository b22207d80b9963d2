//! Per-frame shared inputs for every effect.
//!
//! Pointer and theme are owned by the front end (pointer listener and theme
//! selector respectively). Each frame it snapshots them into an
//! [`EffectContext`] and hands every effect a shared reference, so no effect
//! reads ambient globals or another effect's state.

use super::theme::{Palette, Theme};
use glam::Vec2;
use std::time::Duration;

/// Last observed pointer position in viewport coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    pub position: Vec2,
    /// False until the first pointer event arrives.
    pub seen: bool,
}

impl PointerState {
    pub fn moved_to(&mut self, x: f32, y: f32) {
        self.position = Vec2::new(x, y);
        self.seen = true;
    }
}

#[derive(Clone, Copy, Debug)]
pub struct EffectContext {
    /// Time since the effects were mounted.
    pub now: Duration,
    /// Local wall-clock hour, 0..=23.
    pub hour: u32,
    pub theme: Theme,
    pub palette: Palette,
    pub pointer: Vec2,
    pub viewport: Vec2,
}

impl EffectContext {
    pub fn new(now: Duration, hour: u32, theme: Theme, pointer: Vec2, viewport: Vec2) -> Self {
        Self {
            now,
            hour,
            theme,
            palette: theme.palette(),
            pointer,
            viewport,
        }
    }
}
