//! Effect tuning constants.
//!
//! These are the defaults behind `FxConfig`; the simulation types take their
//! values from config so a host page can retune them without a rebuild.

use std::time::Duration;

// Particle engine
pub const PARTICLE_POOL_CAP: usize = 50;
pub const GRAVITY: f32 = 0.1; // units per frame^2, +y is down
pub const AMBIENT_SPAWN_INTERVAL: Duration = Duration::from_secs(2);
pub const MOVE_SPAWN_PROBABILITY: f32 = 0.1; // per pointer-move event
pub const PARTICLE_MIN_LIFE: u32 = 60; // frames
pub const PARTICLE_MAX_LIFE: u32 = 120; // frames
pub const PARTICLE_MIN_RADIUS: f32 = 2.0;
pub const PARTICLE_MAX_RADIUS: f32 = 6.0;
pub const PARTICLE_SPEED_X: f32 = 1.0; // |vx| upper bound at spawn
pub const PARTICLE_LIFT_Y: f32 = 2.0; // initial upward speed upper bound

// Kind selection gates
pub const HEART_CHANCE_EVENING_THEME: f32 = 0.5;
pub const HEART_CHANCE_EVENING_HOUR: f32 = 0.3;
pub const STAR_CHANCE_NIGHT: f32 = 0.7;
pub const STAR_CHANCE_DEFAULT: f32 = 0.4;

// Cursor trail
pub const TRAIL_LEN: usize = 10;
pub const TRAIL_STEP_DELAY: Duration = Duration::from_millis(20);
pub const TRAIL_FADE_PER_INDEX: f32 = 0.1;
pub const SPARKLE_PROBABILITY: f32 = 0.2;
pub const SPARKLE_LIFETIME: Duration = Duration::from_millis(1000);
pub const HEART_BURST_COUNT: usize = 6;
pub const HEART_BURST_STEP_DEG: f32 = 60.0;
pub const HEART_BURST_MIN_RADIUS: f32 = 50.0;
pub const HEART_BURST_MAX_RADIUS: f32 = 80.0;
pub const HEART_BURST_STAGGER: Duration = Duration::from_millis(100);
pub const HEART_LIFETIME: Duration = Duration::from_secs(2);

// Theme selector
pub const THEME_POLL_INTERVAL: Duration = Duration::from_secs(60);
pub const MANUAL_OVERRIDE_TIMEOUT: Duration = Duration::from_secs(30 * 60);
pub const MORNING_START_HOUR: u32 = 6;
pub const EVENING_START_HOUR: u32 = 17;
pub const NIGHT_START_HOUR: u32 = 21;

// Floating navigation
pub const MAGNETIC_RADIUS: f32 = 100.0;
pub const FOLLOW_FRACTION: f32 = 0.3; // of remaining distance per update
pub const MENU_RADIUS: f32 = 80.0;
pub const MENU_HOVER_RADIUS: f32 = 30.0;
pub const MENU_ITEM_RADIUS: f32 = 22.0;
pub const MENU_LINE_FADE_STEP: f32 = 0.15;
