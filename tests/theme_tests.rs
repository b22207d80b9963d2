// Host-side tests for the theme selector state machine.

use lovefx::fx::theme::ThemeMode;
use lovefx::fx::{theme_for_hour, Theme, ThemeChange, ThemeSelector};
use std::time::Duration;

const MIN: Duration = Duration::from_secs(60);

#[test]
fn hour_rule_boundaries() {
    assert_eq!(theme_for_hour(6), Theme::Morning);
    assert_eq!(theme_for_hour(16), Theme::Morning);
    assert_eq!(theme_for_hour(17), Theme::Evening);
    assert_eq!(theme_for_hour(20), Theme::Evening);
    assert_eq!(theme_for_hour(21), Theme::Night);
    assert_eq!(theme_for_hour(3), Theme::Night);
    assert_eq!(theme_for_hour(0), Theme::Night);
    assert_eq!(theme_for_hour(5), Theme::Night);
    assert_eq!(theme_for_hour(23), Theme::Night);
}

#[test]
fn every_hour_maps_to_exactly_one_theme() {
    for hour in 0..24 {
        let t = theme_for_hour(hour);
        let matches = Theme::ALL.iter().filter(|x| **x == t).count();
        assert_eq!(matches, 1, "hour {hour}");
    }
}

#[test]
fn palette_is_pure_function_of_theme() {
    for t in Theme::ALL {
        assert_eq!(t.palette(), t.palette());
    }
    assert_ne!(Theme::Morning.palette(), Theme::Night.palette());
    assert_ne!(Theme::Evening.palette(), Theme::Night.palette());
    for t in Theme::ALL {
        for c in t.palette().colors {
            assert!(c.iter().all(|v| (0.0..=1.0).contains(v)));
        }
    }
}

#[test]
fn automatic_poll_follows_the_clock() {
    let mut sel = ThemeSelector::new(10);
    assert_eq!(sel.active(), Theme::Morning);
    assert!(sel.is_automatic());

    assert_eq!(sel.poll(MIN, 12), None);
    assert_eq!(
        sel.poll(MIN * 2, 17),
        Some(ThemeChange {
            from: Theme::Morning,
            to: Theme::Evening
        })
    );
    assert_eq!(sel.active(), Theme::Evening);
    assert_eq!(sel.poll(MIN * 3, 21).map(|c| c.to), Some(Theme::Night));
}

#[test]
fn manual_selection_applies_immediately_and_pins_theme() {
    let mut sel = ThemeSelector::new(10);
    let change = sel.select(Theme::Night, Duration::ZERO);
    assert_eq!(change.map(|c| c.to), Some(Theme::Night));
    assert_eq!(sel.active(), Theme::Night);
    assert!(!sel.is_automatic());

    // Polls inside the 30 minute window ignore the clock.
    for m in 1..30 {
        assert_eq!(sel.poll(MIN * m, 10), None, "minute {m}");
        assert_eq!(sel.active(), Theme::Night);
    }
}

#[test]
fn manual_override_expires_after_thirty_minutes() {
    let mut sel = ThemeSelector::new(10);
    let t0 = Duration::from_secs(5);
    sel.select(Theme::Night, t0);
    assert_eq!(sel.mode(), ThemeMode::Manual { until: t0 + MIN * 30 });

    assert_eq!(sel.expire_override(t0 + MIN * 30 - Duration::from_millis(1), 18), None);
    assert_eq!(sel.active(), Theme::Night);

    let change = sel.expire_override(t0 + MIN * 30, 18);
    assert_eq!(change.map(|c| c.to), Some(Theme::Evening));
    assert!(sel.is_automatic());
    assert_eq!(sel.active(), theme_for_hour(18));
}

#[test]
fn poll_resumes_automatic_after_override_deadline() {
    let mut sel = ThemeSelector::new(8);
    sel.select(Theme::Evening, Duration::ZERO);
    assert_eq!(sel.poll(MIN * 31, 8).map(|c| c.to), Some(Theme::Morning));
    assert!(sel.is_automatic());
    // Back to normal automatic polling.
    assert_eq!(sel.poll(MIN * 32, 22).map(|c| c.to), Some(Theme::Night));
}

#[test]
fn reselecting_restarts_override_timeout() {
    let mut sel = ThemeSelector::new(8);
    sel.select(Theme::Evening, Duration::ZERO);
    sel.select(Theme::Night, MIN * 20);
    assert_eq!(sel.poll(MIN * 31, 8), None);
    assert_eq!(sel.active(), Theme::Night);
    assert_eq!(sel.poll(MIN * 50, 8).map(|c| c.to), Some(Theme::Morning));
}

#[test]
fn selecting_the_active_theme_reports_no_change() {
    let mut sel = ThemeSelector::new(9);
    assert_eq!(sel.select(Theme::Morning, Duration::ZERO), None);
    assert!(!sel.is_automatic());
}

#[test]
fn resume_auto_returns_early() {
    let mut sel = ThemeSelector::new(9);
    sel.select(Theme::Night, Duration::ZERO);
    let change = sel.resume_auto(9);
    assert_eq!(change.map(|c| c.to), Some(Theme::Morning));
    assert!(sel.is_automatic());
    // Expiry after resuming is a no-op.
    assert_eq!(sel.expire_override(MIN * 40, 22), None);
}

#[test]
fn custom_override_timeout() {
    let mut sel = ThemeSelector::with_timeout(9, MIN * 5);
    sel.select(Theme::Evening, Duration::ZERO);
    assert_eq!(sel.poll(MIN * 4, 9), None);
    assert_eq!(sel.poll(MIN * 5, 9).map(|c| c.to), Some(Theme::Morning));
}

#[test]
fn theme_names_round_trip_and_reject_unknown() {
    for t in Theme::ALL {
        assert_eq!(t.name().parse::<Theme>().unwrap(), t);
        assert_eq!(t.to_string(), t.name());
    }
    assert_eq!(" Evening ".parse::<Theme>().unwrap(), Theme::Evening);
    assert!("noon".parse::<Theme>().is_err());
}
