// Host-side tests for the magnetic navigation menu.

use glam::Vec2;
use lovefx::fx::nav::{magnetic_step, radial_layout, NavParams, MENU_ITEMS};
use lovefx::fx::MagneticNav;

fn close(a: Vec2, b: Vec2) -> bool {
    a.distance(b) < 1e-3
}

#[test]
fn one_step_moves_thirty_percent_inside_radius() {
    let next = magnetic_step(Vec2::ZERO, Vec2::new(50.0, 0.0), 100.0, 0.3);
    assert!(close(next, Vec2::new(15.0, 0.0)), "{next:?}");
}

#[test]
fn no_pull_outside_radius() {
    let anchor = Vec2::new(0.0, 0.0);
    assert_eq!(magnetic_step(anchor, Vec2::new(100.0, 0.0), 100.0, 0.3), anchor);
    assert_eq!(magnetic_step(anchor, Vec2::new(300.0, 400.0), 100.0, 0.3), anchor);
}

#[test]
fn follow_is_exponential_decay_not_snap() {
    // No hover zone, so the menu never opens and the anchor keeps following.
    let params = NavParams {
        hover_radius: 0.0,
        ..NavParams::default()
    };
    let mut nav = MagneticNav::new(Vec2::ZERO, params);
    let pointer = Vec2::new(50.0, 0.0);
    let mut prev_gap = 50.0;
    for _ in 0..10 {
        nav.update(pointer);
        let gap = nav.anchor().distance(pointer);
        assert!(gap < prev_gap);
        assert!((gap - prev_gap * 0.7).abs() < 1e-3);
        prev_gap = gap;
    }
    assert!(nav.anchor() != pointer);
}

#[test]
fn update_uses_default_magnetic_constants() {
    let mut nav = MagneticNav::new(Vec2::ZERO, NavParams::default());
    nav.update(Vec2::new(50.0, 0.0));
    assert!(close(nav.anchor(), Vec2::new(15.0, 0.0)));
}

#[test]
fn radial_layout_is_evenly_spaced_on_circle() {
    let center = Vec2::new(100.0, 100.0);
    let pts = radial_layout(center, 80.0, 6);
    assert_eq!(pts.len(), 6);
    for p in &pts {
        assert!((p.distance(center) - 80.0).abs() < 1e-3);
    }
    // First item straight up.
    assert!(close(pts[0], Vec2::new(100.0, 20.0)));
    // Neighbours are a chord of 60 degrees apart = radius for a hexagon.
    for i in 0..6 {
        let d = pts[i].distance(pts[(i + 1) % 6]);
        assert!((d - 80.0).abs() < 1e-2);
    }
}

#[test]
fn hover_expands_and_leaving_collapses() {
    let mut nav = MagneticNav::new(Vec2::new(500.0, 500.0), NavParams::default());
    assert!(!nav.is_expanded());
    assert!(nav.items().is_empty());

    nav.update(Vec2::new(510.0, 500.0));
    assert!(nav.is_expanded());
    assert_eq!(nav.items().len(), MENU_ITEMS.len());

    // Still within the ring: stays open.
    let anchor = nav.anchor();
    nav.update(anchor + Vec2::new(0.0, -80.0));
    assert!(nav.is_expanded());

    // Far away: collapses.
    nav.update(Vec2::new(0.0, 0.0));
    assert!(!nav.is_expanded());
}

#[test]
fn connecting_lines_fade_in_and_out() {
    let mut nav = MagneticNav::new(Vec2::new(200.0, 200.0), NavParams::default());
    let pointer = Vec2::new(200.0, 205.0);
    let mut last = nav.line_opacity();
    assert_eq!(last, 0.0);
    for _ in 0..10 {
        nav.update(pointer);
        assert!(nav.line_opacity() >= last);
        last = nav.line_opacity();
    }
    assert_eq!(nav.line_opacity(), 1.0);

    let away = Vec2::new(2_000.0, 2_000.0);
    nav.update(away);
    assert!(nav.line_opacity() < 1.0 && nav.line_opacity() > 0.0);
    for _ in 0..10 {
        nav.update(away);
    }
    assert_eq!(nav.line_opacity(), 0.0);
}

#[test]
fn item_hit_test_returns_section() {
    let mut nav = MagneticNav::new(Vec2::new(300.0, 300.0), NavParams::default());
    nav.update(Vec2::new(300.0, 300.0));
    let items = nav.items();
    assert_eq!(nav.item_at(items[2].position), Some(items[2].section));
    assert_eq!(
        nav.item_at(items[0].position + Vec2::new(5.0, 5.0)),
        Some(MENU_ITEMS[0])
    );
    assert_eq!(nav.item_at(nav.anchor()), None);

    nav.collapse();
    assert_eq!(nav.item_at(items[2].position), None);
}

#[test]
fn anchor_holds_still_while_expanded() {
    let mut nav = MagneticNav::new(Vec2::new(400.0, 400.0), NavParams::default());
    nav.update(Vec2::new(400.0, 400.0));
    assert!(nav.is_expanded());
    let anchor = nav.anchor();
    nav.update(Vec2::new(450.0, 400.0));
    assert_eq!(nav.anchor(), anchor);
}

#[test]
fn pointer_can_travel_onto_an_item_and_hit_it() {
    let mut nav = MagneticNav::new(Vec2::new(400.0, 400.0), NavParams::default());
    nav.update(Vec2::new(400.0, 400.0));
    assert!(nav.is_expanded());
    let target = nav.items()[0].position;
    assert!(close(target, Vec2::new(400.0, 320.0)));

    // Walk up 4 px per frame, then rest on the item.
    let mut pointer = Vec2::new(400.0, 400.0);
    for _ in 0..60 {
        if pointer.y > target.y {
            pointer.y = (pointer.y - 4.0).max(target.y);
        }
        nav.update(pointer);
        assert!(nav.is_expanded());
    }
    assert_eq!(nav.item_at(pointer), Some(MENU_ITEMS[0]));
}

#[test]
fn collapsed_menu_follows_again() {
    let mut nav = MagneticNav::new(Vec2::new(400.0, 400.0), NavParams::default());
    nav.update(Vec2::new(400.0, 400.0));
    nav.update(Vec2::new(1_000.0, 1_000.0));
    assert!(!nav.is_expanded());
    let before = nav.anchor();
    nav.update(before + Vec2::new(50.0, 0.0));
    assert!(close(nav.anchor(), before + Vec2::new(15.0, 0.0)));
}

#[test]
fn clamp_into_pulls_anchor_on_screen() {
    let mut nav = MagneticNav::new(Vec2::new(900.0, 700.0), NavParams::default());
    nav.clamp_into(Vec2::new(400.0, 300.0), 60.0);
    assert_eq!(nav.anchor(), Vec2::new(340.0, 240.0));

    nav.set_anchor(Vec2::new(-20.0, 10.0));
    nav.clamp_into(Vec2::new(400.0, 300.0), 60.0);
    assert_eq!(nav.anchor(), Vec2::new(60.0, 60.0));

    // Viewport smaller than the margin: pinned, no panic.
    nav.clamp_into(Vec2::new(30.0, 30.0), 60.0);
    assert_eq!(nav.anchor(), Vec2::new(30.0, 30.0));
}
