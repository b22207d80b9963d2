//! Effect configuration.
//!
//! The host page may embed a JSON object in
//! `<script type="application/json" id="fx-config">`; missing fields fall
//! back to the defaults in `fx::constants`.

use crate::fx::constants::*;
use crate::fx::error::{FxError, Result};
use crate::fx::nav::NavParams;
use crate::fx::particles::ParticleParams;
use crate::fx::trail::TrailParams;
use serde::Deserialize;
use std::time::Duration;

/// Largest accepted `poolCap`.
pub const MAX_POOL_CAP: usize = 10_000;
/// Largest accepted `overrideMinutes` (one day).
pub const MAX_OVERRIDE_MINUTES: u64 = 24 * 60;
/// Largest accepted timer period, in seconds, for the poll and ambient timers.
pub const MAX_TIMER_SECS: u64 = 24 * 60 * 60;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FxConfig {
    pub pool_cap: usize,
    pub gravity: f32,
    pub ambient_interval_ms: u64,
    pub move_spawn_probability: f32,
    pub sparkle_probability: f32,
    pub theme_poll_secs: u64,
    pub override_minutes: u64,
    pub magnetic_radius: f32,
    pub follow_fraction: f32,
    pub menu_radius: f32,
    /// Fixed RNG seed; random per mount when absent.
    pub seed: Option<u64>,
    pub effects_active: bool,
}

impl Default for FxConfig {
    fn default() -> Self {
        Self {
            pool_cap: PARTICLE_POOL_CAP,
            gravity: GRAVITY,
            ambient_interval_ms: AMBIENT_SPAWN_INTERVAL.as_millis() as u64,
            move_spawn_probability: MOVE_SPAWN_PROBABILITY,
            sparkle_probability: SPARKLE_PROBABILITY,
            theme_poll_secs: THEME_POLL_INTERVAL.as_secs(),
            override_minutes: MANUAL_OVERRIDE_TIMEOUT.as_secs() / 60,
            magnetic_radius: MAGNETIC_RADIUS,
            follow_fraction: FOLLOW_FRACTION,
            menu_radius: MENU_RADIUS,
            seed: None,
            effects_active: true,
        }
    }
}

fn invalid(field: &'static str, reason: impl Into<String>) -> FxError {
    FxError::InvalidConfig {
        field,
        reason: reason.into(),
    }
}

fn check_probability(field: &'static str, v: f32) -> Result<()> {
    if (0.0..=1.0).contains(&v) {
        Ok(())
    } else {
        Err(invalid(field, format!("{v} is outside 0..=1")))
    }
}

#[inline]
fn is_positive(v: f32) -> bool {
    v.is_finite() && v > 0.0
}

impl FxConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let cfg: FxConfig = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        if self.pool_cap == 0 || self.pool_cap > MAX_POOL_CAP {
            return Err(invalid("poolCap", format!("must be in 1..={MAX_POOL_CAP}")));
        }
        if !self.gravity.is_finite() {
            return Err(invalid("gravity", "must be finite"));
        }
        if self.ambient_interval_ms == 0 || self.ambient_interval_ms > MAX_TIMER_SECS * 1000 {
            return Err(invalid("ambientIntervalMs", "must be positive and at most a day"));
        }
        check_probability("moveSpawnProbability", self.move_spawn_probability)?;
        check_probability("sparkleProbability", self.sparkle_probability)?;
        if self.theme_poll_secs == 0 || self.theme_poll_secs > MAX_TIMER_SECS {
            return Err(invalid("themePollSecs", "must be positive and at most a day"));
        }
        if self.override_minutes == 0 || self.override_minutes > MAX_OVERRIDE_MINUTES {
            return Err(invalid(
                "overrideMinutes",
                format!("must be in 1..={MAX_OVERRIDE_MINUTES}"),
            ));
        }
        if !is_positive(self.magnetic_radius) {
            return Err(invalid("magneticRadius", "must be positive"));
        }
        if !is_positive(self.follow_fraction) || self.follow_fraction > 1.0 {
            return Err(invalid("followFraction", "must be in (0, 1]"));
        }
        if !is_positive(self.menu_radius) {
            return Err(invalid("menuRadius", "must be positive"));
        }
        Ok(())
    }

    pub fn particle_params(&self) -> ParticleParams {
        ParticleParams {
            pool_cap: self.pool_cap,
            gravity: self.gravity,
            move_spawn_probability: self.move_spawn_probability,
        }
    }

    pub fn trail_params(&self) -> TrailParams {
        TrailParams {
            sparkle_probability: self.sparkle_probability,
        }
    }

    pub fn nav_params(&self) -> NavParams {
        NavParams {
            magnetic_radius: self.magnetic_radius,
            follow_fraction: self.follow_fraction,
            menu_radius: self.menu_radius,
            ..NavParams::default()
        }
    }

    pub fn theme_poll_interval(&self) -> Duration {
        Duration::from_secs(self.theme_poll_secs)
    }

    pub fn override_timeout(&self) -> Duration {
        Duration::from_secs(self.override_minutes * 60)
    }

    pub fn ambient_interval(&self) -> Duration {
        Duration::from_millis(self.ambient_interval_ms)
    }
}
