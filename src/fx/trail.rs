//! Cursor trail, sparkles and click heart bursts.
//!
//! Everything here is a retained list driven by the frame clock: a marker's
//! delayed move, a sparkle's self-removal and a heart's staggered appearance
//! are all timestamps compared against `EffectContext::now`, so deactivation
//! only has to clear the lists.

use super::constants::*;
use super::context::EffectContext;
use glam::Vec2;
use rand::prelude::*;
use smallvec::SmallVec;
use std::collections::VecDeque;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrailMarker {
    pub index: usize,
    pub position: Vec2,
}

impl TrailMarker {
    #[inline]
    pub fn delay(&self) -> Duration {
        TRAIL_STEP_DELAY * self.index as u32
    }

    #[inline]
    pub fn opacity(&self) -> f32 {
        trail_opacity(self.index)
    }

    #[inline]
    pub fn scale(&self) -> f32 {
        trail_scale(self.index)
    }
}

#[inline]
pub fn trail_opacity(index: usize) -> f32 {
    (1.0 - index as f32 * TRAIL_FADE_PER_INDEX).max(0.0)
}

#[inline]
pub fn trail_scale(index: usize) -> f32 {
    1.0 - index as f32 * TRAIL_FADE_PER_INDEX
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sparkle {
    pub position: Vec2,
    pub born: Duration,
    pub color: [f32; 3],
}

impl Sparkle {
    pub fn progress(&self, now: Duration) -> f32 {
        life_progress(self.born, SPARKLE_LIFETIME, now)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeartGlyph {
    pub origin: Vec2,
    pub angle_rad: f32,
    pub radius: f32,
    /// Instant the glyph becomes visible (click time + stagger).
    pub appears: Duration,
    pub color: [f32; 3],
}

impl HeartGlyph {
    #[inline]
    pub fn is_visible(&self, now: Duration) -> bool {
        now >= self.appears
    }

    #[inline]
    pub fn expires(&self) -> Duration {
        self.appears + HEART_LIFETIME
    }

    pub fn progress(&self, now: Duration) -> f32 {
        life_progress(self.appears, HEART_LIFETIME, now)
    }

    /// Current position: eased drift from the click point out to the radius.
    pub fn position(&self, now: Duration) -> Vec2 {
        let t = self.progress(now);
        let eased = 1.0 - (1.0 - t) * (1.0 - t);
        let dir = Vec2::new(self.angle_rad.cos(), self.angle_rad.sin());
        self.origin + dir * self.radius * eased
    }
}

fn life_progress(start: Duration, lifetime: Duration, now: Duration) -> f32 {
    if lifetime.is_zero() {
        return 1.0;
    }
    (now.saturating_sub(start).as_secs_f32() / lifetime.as_secs_f32()).clamp(0.0, 1.0)
}

#[derive(Clone, Debug)]
pub struct TrailParams {
    pub sparkle_probability: f32,
}

impl Default for TrailParams {
    fn default() -> Self {
        Self {
            sparkle_probability: SPARKLE_PROBABILITY,
        }
    }
}

pub struct CursorTrail {
    pub params: TrailParams,
    active: bool,
    markers: SmallVec<[TrailMarker; TRAIL_LEN]>,
    history: VecDeque<(Duration, Vec2)>,
    sparkles: Vec<Sparkle>,
    hearts: Vec<HeartGlyph>,
    rng: StdRng,
}

impl CursorTrail {
    pub fn new(params: TrailParams, seed: u64) -> Self {
        Self {
            params,
            active: false,
            markers: SmallVec::new(),
            history: VecDeque::new(),
            sparkles: Vec::new(),
            hearts: Vec::new(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn markers(&self) -> &[TrailMarker] {
        &self.markers
    }

    pub fn sparkles(&self) -> &[Sparkle] {
        &self.sparkles
    }

    pub fn hearts(&self) -> &[HeartGlyph] {
        &self.hearts
    }

    /// Create all markers at `pointer`. No-op when already active.
    pub fn activate(&mut self, pointer: Vec2) {
        if self.active {
            return;
        }
        self.active = true;
        self.markers = (0..TRAIL_LEN)
            .map(|index| TrailMarker {
                index,
                position: pointer,
            })
            .collect();
        log::info!("[trail] activated");
    }

    /// Drop every marker, sparkle, heart and pending pointer sample.
    pub fn deactivate(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;
        self.markers.clear();
        self.history.clear();
        self.sparkles.clear();
        self.hearts.clear();
        log::info!("[trail] deactivated");
    }

    /// Pointer-move trigger. Returns true when a sparkle was spawned.
    pub fn on_pointer_move(&mut self, ctx: &EffectContext) -> bool {
        if !self.active {
            return false;
        }
        self.record(ctx.now, ctx.pointer);
        if self.rng.gen::<f32>() >= self.params.sparkle_probability {
            return false;
        }
        let color = ctx.palette.color(self.rng.gen_range(0..3));
        self.sparkles.push(Sparkle {
            position: ctx.pointer,
            born: ctx.now,
            color,
        });
        true
    }

    /// Click trigger: a radial burst of hearts around `at`.
    pub fn on_click(&mut self, at: Vec2, ctx: &EffectContext) {
        if !self.active {
            return;
        }
        for k in 0..HEART_BURST_COUNT {
            let angle_rad = (k as f32 * HEART_BURST_STEP_DEG).to_radians();
            let radius = self
                .rng
                .gen_range(HEART_BURST_MIN_RADIUS..=HEART_BURST_MAX_RADIUS);
            self.hearts.push(HeartGlyph {
                origin: at,
                angle_rad,
                radius,
                appears: ctx.now + HEART_BURST_STAGGER * k as u32,
                color: ctx.palette.color(k),
            });
        }
    }

    /// Per-frame update: move markers along the delayed pointer path and retire
    /// expired sparkles and hearts.
    pub fn update(&mut self, ctx: &EffectContext) {
        if !self.active {
            return;
        }
        self.record(ctx.now, ctx.pointer);
        for marker in &mut self.markers {
            let due = ctx.now.saturating_sub(marker.delay());
            if let Some(pos) = sample_at(&self.history, due) {
                marker.position = pos;
            }
        }
        self.prune_history(ctx.now);

        let now = ctx.now;
        self.sparkles
            .retain(|s| now.saturating_sub(s.born) < SPARKLE_LIFETIME);
        self.hearts.retain(|h| now < h.expires());
    }

    fn record(&mut self, now: Duration, pointer: Vec2) {
        match self.history.back_mut() {
            Some((t, pos)) if *t == now => *pos = pointer,
            _ => self.history.push_back((now, pointer)),
        }
    }

    fn prune_history(&mut self, now: Duration) {
        // Keep the newest sample at or before the oldest marker's due time.
        let horizon = now.saturating_sub(TRAIL_STEP_DELAY * (TRAIL_LEN as u32 - 1));
        while self.history.len() > 1 && self.history[1].0 <= horizon {
            self.history.pop_front();
        }
    }
}

/// Newest pointer sample taken at or before `due`, falling back to the oldest.
fn sample_at(history: &VecDeque<(Duration, Vec2)>, due: Duration) -> Option<Vec2> {
    history
        .iter()
        .rev()
        .find(|(t, _)| *t <= due)
        .or_else(|| history.front())
        .map(|(_, p)| *p)
}
