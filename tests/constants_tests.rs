// Host-side tests for tuning constants and their relationships.

use lovefx::fx::constants::*;
use std::time::Duration;

#[test]
#[allow(clippy::assertions_on_constants)]
fn probabilities_are_in_unit_range() {
    for p in [
        MOVE_SPAWN_PROBABILITY,
        SPARKLE_PROBABILITY,
        HEART_CHANCE_EVENING_THEME,
        HEART_CHANCE_EVENING_HOUR,
        STAR_CHANCE_NIGHT,
        STAR_CHANCE_DEFAULT,
        FOLLOW_FRACTION,
        MENU_LINE_FADE_STEP,
    ] {
        assert!((0.0..=1.0).contains(&p), "{p}");
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn ranges_are_ordered() {
    assert!(PARTICLE_MIN_LIFE < PARTICLE_MAX_LIFE);
    assert!(PARTICLE_MIN_RADIUS < PARTICLE_MAX_RADIUS);
    assert!(HEART_BURST_MIN_RADIUS < HEART_BURST_MAX_RADIUS);
    assert!(MORNING_START_HOUR < EVENING_START_HOUR);
    assert!(EVENING_START_HOUR < NIGHT_START_HOUR);
    assert!(NIGHT_START_HOUR < 24);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn trail_fades_out_exactly_at_its_end() {
    assert!((TRAIL_FADE_PER_INDEX * TRAIL_LEN as f32 - 1.0).abs() < 1e-6);
    // Oldest marker lags well under a second.
    assert!(TRAIL_STEP_DELAY * (TRAIL_LEN as u32 - 1) < Duration::from_secs(1));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn burst_covers_full_circle() {
    assert!((HEART_BURST_STEP_DEG * HEART_BURST_COUNT as f32 - 360.0).abs() < 1e-4);
    assert!(HEART_BURST_STAGGER * (HEART_BURST_COUNT as u32) < HEART_LIFETIME);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn menu_geometry_is_consistent() {
    // Hover zone sits inside the ring and items do not overlap.
    assert!(MENU_HOVER_RADIUS < MENU_RADIUS);
    assert!(MENU_ITEM_RADIUS * 2.0 < MENU_RADIUS);
    assert!(MENU_RADIUS < MAGNETIC_RADIUS);
    assert!(THEME_POLL_INTERVAL < MANUAL_OVERRIDE_TIMEOUT);
}
