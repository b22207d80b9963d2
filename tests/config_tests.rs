use lovefx::config::{FxConfig, MAX_OVERRIDE_MINUTES, MAX_POOL_CAP};
use lovefx::fx::constants::*;
use lovefx::fx::{FxError, ParticleEngine};
use std::time::Duration;

#[test]
fn defaults_match_constants() {
    let cfg = FxConfig::default();
    assert_eq!(cfg.pool_cap, PARTICLE_POOL_CAP);
    assert_eq!(cfg.gravity, GRAVITY);
    assert_eq!(cfg.ambient_interval(), AMBIENT_SPAWN_INTERVAL);
    assert_eq!(cfg.theme_poll_interval(), THEME_POLL_INTERVAL);
    assert_eq!(cfg.override_timeout(), MANUAL_OVERRIDE_TIMEOUT);
    assert_eq!(cfg.particle_params().move_spawn_probability, MOVE_SPAWN_PROBABILITY);
    assert_eq!(cfg.trail_params().sparkle_probability, SPARKLE_PROBABILITY);
    assert_eq!(cfg.nav_params().magnetic_radius, MAGNETIC_RADIUS);
    assert!(cfg.effects_active);
    assert!(cfg.seed.is_none());
    assert!(cfg.validate().is_ok());
}

#[test]
fn empty_object_is_defaults() {
    assert_eq!(FxConfig::from_json("{}").unwrap(), FxConfig::default());
}

#[test]
fn partial_camel_case_overrides() {
    let cfg = FxConfig::from_json(
        r#"{"poolCap": 20, "sparkleProbability": 0.5, "overrideMinutes": 5, "seed": 7, "effectsActive": false}"#,
    )
    .unwrap();
    assert_eq!(cfg.pool_cap, 20);
    assert_eq!(cfg.trail_params().sparkle_probability, 0.5);
    assert_eq!(cfg.override_timeout(), Duration::from_secs(300));
    assert_eq!(cfg.seed, Some(7));
    assert!(!cfg.effects_active);
    // Untouched fields keep their defaults.
    assert_eq!(cfg.menu_radius, MENU_RADIUS);
}

#[test]
fn invalid_values_rejected_with_field_name() {
    let cases = [
        (r#"{"poolCap": 0}"#, "poolCap"),
        (r#"{"moveSpawnProbability": 1.5}"#, "moveSpawnProbability"),
        (r#"{"sparkleProbability": -0.1}"#, "sparkleProbability"),
        (r#"{"themePollSecs": 0}"#, "themePollSecs"),
        (r#"{"followFraction": 2.0}"#, "followFraction"),
        (r#"{"magneticRadius": 0.0}"#, "magneticRadius"),
        (r#"{"poolCap": 18446744073709551615}"#, "poolCap"),
        (r#"{"overrideMinutes": 18446744073709551615}"#, "overrideMinutes"),
        (r#"{"themePollSecs": 18446744073709551615}"#, "themePollSecs"),
        (r#"{"ambientIntervalMs": 18446744073709551615}"#, "ambientIntervalMs"),
    ];
    for (json, expected) in cases {
        match FxConfig::from_json(json) {
            Err(FxError::InvalidConfig { field, .. }) => assert_eq!(field, expected),
            other => panic!("{json}: expected InvalidConfig, got {other:?}"),
        }
    }
}

#[test]
fn malformed_json_is_parse_error() {
    assert!(matches!(
        FxConfig::from_json("{poolCap: 3"),
        Err(FxError::ConfigParse(_))
    ));
    assert!(matches!(
        FxConfig::from_json(r#"{"poolCap": "many"}"#),
        Err(FxError::ConfigParse(_))
    ));
}

#[test]
fn largest_accepted_values_build_without_overflow() {
    let json = format!(
        r#"{{"poolCap": {MAX_POOL_CAP}, "overrideMinutes": {MAX_OVERRIDE_MINUTES}}}"#
    );
    let cfg = FxConfig::from_json(&json).unwrap();
    assert_eq!(cfg.override_timeout(), Duration::from_secs(24 * 60 * 60));
    let engine = ParticleEngine::new(cfg.particle_params(), 1);
    assert!(engine.is_empty());

    let over = format!(r#"{{"poolCap": {}}}"#, MAX_POOL_CAP + 1);
    assert!(matches!(
        FxConfig::from_json(&over),
        Err(FxError::InvalidConfig { field: "poolCap", .. })
    ));
}
