//! End-to-end gesture flows: pan, fling, click, wheel zoom, pinch.

use boardcore::input::TouchPoint;
use boardcore::{Point, ScaleBounds, ViewportConfig, ViewportEvent, WheelInput};

use crate::helpers::TestViewport;

#[test]
fn test_pan_is_one_to_one_regardless_of_scale() {
    let mut t = TestViewport::new(ViewportConfig {
        scale: 4.0,
        ..Default::default()
    });

    t.viewport.handle_pointer_down(100.0, 100.0, 1);
    t.viewport.handle_pointer_move(130.0, 90.0, 1);

    let view = t.viewport.view();
    assert_eq!((view.x, view.y), (30.0, -10.0));
    assert!(t.viewport.state().is_panning());
}

#[test]
fn test_moves_from_other_pointers_are_ignored() {
    let mut t = TestViewport::with_defaults();
    t.viewport.handle_pointer_down(0.0, 0.0, 1);
    t.viewport.handle_pointer_move(50.0, 50.0, 2);
    assert_eq!(t.viewport.view().x, 0.0);

    t.viewport.handle_pointer_up(50.0, 50.0, 2);
    assert!(t.viewport.state().is_panning());
}

#[test]
fn test_small_drag_reclassifies_as_click() {
    let mut t = TestViewport::with_defaults();
    t.viewport.handle_pointer_down(100.0, 100.0, 1);
    t.viewport.handle_pointer_move(101.0, 101.0, 1);
    t.viewport.handle_pointer_up(102.0, 101.0, 1);

    let events = t.events();
    assert!(events.contains(&ViewportEvent::Click { x: 102.0, y: 101.0 }));
    assert!(!events.contains(&ViewportEvent::PanEnd));
    assert!(t.viewport.state().is_idle());
    assert!(!t.scheduler.has_pending());
}

#[test]
fn test_fling_coasts_then_comes_to_rest() {
    let mut t = TestViewport::with_defaults();
    t.viewport.handle_pointer_down(0.0, 0.0, 1);
    for step in 1..=5 {
        t.viewport.handle_pointer_move(step as f32 * 20.0, 0.0, 1);
    }
    t.viewport.handle_pointer_up(100.0, 0.0, 1);

    assert!(t.viewport.state().is_animating());
    assert!(t.scheduler.has_pending());

    t.run_until_idle();

    let events = t.events();
    assert!(events.contains(&ViewportEvent::PanEnd));
    assert!(events.contains(&ViewportEvent::InertiaEnd));
    assert!(t.viewport.state().is_idle());
    // Coasting carried the view well past where the drag released it
    assert!(t.viewport.view().x > 150.0);
    assert_eq!(t.viewport.view().y, 0.0);
}

#[test]
fn test_slow_release_does_not_fling() {
    let mut t = TestViewport::with_defaults();
    t.viewport.handle_pointer_down(0.0, 0.0, 1);
    for step in 1..=30 {
        // 0.3 px per move stays under the fling speed threshold
        t.viewport.handle_pointer_move(step as f32 * 0.3, 0.0, 1);
    }
    t.viewport.handle_pointer_up(9.0, 0.0, 1);

    assert!(t.viewport.state().is_idle());
    assert!(!t.scheduler.has_pending());
    assert!(t.events().contains(&ViewportEvent::PanEnd));
}

#[test]
fn test_pointer_down_interrupts_inertia() {
    let mut t = TestViewport::with_defaults();
    t.viewport.handle_pointer_down(0.0, 0.0, 1);
    for step in 1..=5 {
        t.viewport.handle_pointer_move(step as f32 * 20.0, 0.0, 1);
    }
    t.viewport.handle_pointer_up(100.0, 0.0, 1);
    t.run_frame_round();
    let mid_flight = t.viewport.view().x;

    t.viewport.handle_pointer_down(200.0, 0.0, 2);
    assert!(t.viewport.state().is_panning());
    assert!(!t.scheduler.has_pending());
    // The view stays where the interruption caught it
    assert_eq!(t.viewport.view().x, mid_flight);
}

#[test]
fn test_wheel_during_inertia_hands_state_to_the_spring() {
    // Fast-decaying inertia so the coast ends while the spring is mid-flight
    let mut t = TestViewport::new(ViewportConfig {
        friction: 0.5,
        ..Default::default()
    });
    t.viewport.handle_pointer_down(0.0, 0.0, 1);
    for step in 1..=5 {
        t.viewport.handle_pointer_move(step as f32 * 2.0, 0.0, 1);
    }
    t.viewport.handle_pointer_up(10.0, 0.0, 1);
    assert!(t.viewport.state().is_animating());

    t.viewport
        .handle_wheel(&WheelInput::pixels(0.0, -250.0, 0.0, 0.0));

    let mut rounds = 0;
    while !t.events().contains(&ViewportEvent::InertiaEnd) {
        t.run_frame_round();
        rounds += 1;
        assert!(rounds < 1000, "inertia failed to settle");
    }
    // The coast is over but the zoom is not; the state must say so
    assert!(t.scheduler.has_pending());
    assert!(t.viewport.state().is_animating());

    t.run_until_idle();
    assert!(t.viewport.state().is_idle());
    assert_eq!(t.viewport.view().scale, 1.5);
    assert!(matches!(
        t.events().last(),
        Some(ViewportEvent::ScaleEnd { .. })
    ));
}

#[test]
fn test_wheel_zoom_keeps_cursor_point_fixed() {
    let mut t = TestViewport::with_defaults();
    let cursor = Point::new(400.0, 300.0);
    let before = t.viewport.view().screen_to_board(cursor);

    t.viewport
        .handle_wheel(&WheelInput::pixels(0.0, -250.0, cursor.x, cursor.y));
    assert_eq!(t.viewport.scale_target(), 1.5);
    assert!(t.viewport.state().is_animating());

    t.run_until_idle();

    let view = t.viewport.view();
    assert_eq!(view.scale, 1.5);
    let after = view.screen_to_board(cursor);
    assert!((after.x - before.x).abs() < 1e-2);
    assert!((after.y - before.y).abs() < 1e-2);
    assert!(t.viewport.state().is_idle());
    assert!(matches!(
        t.events().last(),
        Some(ViewportEvent::ScaleEnd { .. })
    ));
}

#[test]
fn test_line_mode_wheel_uses_line_divisor() {
    let mut t = TestViewport::with_defaults();
    t.viewport
        .handle_wheel(&WheelInput::lines(0.0, -25.0, 0.0, 0.0));
    assert_eq!(t.viewport.scale_target(), 1.5);
}

#[test]
fn test_momentum_wheel_events_are_attenuated() {
    let mut t = TestViewport::with_defaults();
    let mut input = WheelInput::pixels(0.0, -250.0, 0.0, 0.0);
    input.momentum = true;
    t.viewport.handle_wheel(&input);
    // Momentum deltas count at 0.4 weight: 0.5 * 0.4 = 0.2
    assert!((t.viewport.scale_target() - 1.2).abs() < 1e-6);
}

#[test]
fn test_tiny_wheel_delta_is_ignored() {
    let mut t = TestViewport::with_defaults();
    t.viewport
        .handle_wheel(&WheelInput::pixels(0.0, -0.4, 0.0, 0.0));
    assert_eq!(t.viewport.scale_target(), 1.0);
    assert!(t.viewport.state().is_idle());
    assert!(!t.scheduler.has_pending());
    // The raw delta is still surfaced to the host
    assert_eq!(
        t.events(),
        vec![ViewportEvent::WheelRaw {
            delta_x: 0.0,
            delta_y: -0.4
        }]
    );
}

#[test]
fn test_pinch_zoom_scales_about_center() {
    let mut t = TestViewport::with_defaults();
    t.viewport.handle_touch_start(&[
        TouchPoint::new(100.0, 100.0, 1),
        TouchPoint::new(300.0, 100.0, 2),
    ]);
    assert!(t.viewport.state().is_pinching());

    t.viewport.handle_touch_move(&[
        TouchPoint::new(50.0, 100.0, 1),
        TouchPoint::new(350.0, 100.0, 2),
    ]);
    assert_eq!(t.viewport.scale_target(), 1.5);

    t.run_until_idle();
    let view = t.viewport.view();
    assert_eq!(view.scale, 1.5);
    // Anchor (200, 100) stays fixed: view = anchor - (anchor - 0) * 1.5
    assert!((view.x - -100.0).abs() < 1e-3);
    assert!((view.y - -50.0).abs() < 1e-3);

    t.viewport.handle_touch_end(&[]);
    assert!(t.viewport.state().is_idle());
}

#[test]
fn test_pinch_past_max_rubber_bands() {
    let mut t = TestViewport::new(ViewportConfig {
        scale_bounds: ScaleBounds {
            min: Some(0.5),
            max: Some(2.0),
        },
        ..Default::default()
    });
    t.viewport.handle_touch_start(&[
        TouchPoint::new(0.0, 0.0, 1),
        TouchPoint::new(100.0, 0.0, 2),
    ]);
    t.viewport.handle_touch_move(&[
        TouchPoint::new(0.0, 0.0, 1),
        TouchPoint::new(300.0, 0.0, 2),
    ]);

    // Requested 3.0 lands past the max with sub-linear overshoot
    let target = t.viewport.scale_target();
    assert!(target > 2.0);
    assert!(target < 3.0);
}

#[test]
fn test_pinch_downgrades_to_pan_when_finger_lifts() {
    let mut t = TestViewport::with_defaults();
    t.viewport.handle_touch_start(&[
        TouchPoint::new(100.0, 100.0, 1),
        TouchPoint::new(300.0, 100.0, 2),
    ]);
    t.viewport
        .handle_touch_end(&[TouchPoint::new(100.0, 100.0, 1)]);
    assert!(t.viewport.state().is_panning());

    let before = t.viewport.view();
    t.viewport
        .handle_touch_move(&[TouchPoint::new(120.0, 110.0, 1)]);
    let after = t.viewport.view();
    assert_eq!((after.x - before.x, after.y - before.y), (20.0, 10.0));
}

#[test]
fn test_wheel_during_pinch_only_reports_raw() {
    let mut t = TestViewport::with_defaults();
    t.viewport.handle_touch_start(&[
        TouchPoint::new(0.0, 0.0, 1),
        TouchPoint::new(100.0, 0.0, 2),
    ]);
    t.clear_events();

    t.viewport
        .handle_wheel(&WheelInput::pixels(0.0, -250.0, 50.0, 0.0));
    assert_eq!(t.viewport.scale_target(), 1.0);
    assert_eq!(
        t.events(),
        vec![ViewportEvent::WheelRaw {
            delta_x: 0.0,
            delta_y: -250.0
        }]
    );
}

#[test]
fn test_degenerate_pinch_is_refused() {
    let mut t = TestViewport::with_defaults();
    t.viewport.handle_touch_start(&[
        TouchPoint::new(50.0, 50.0, 1),
        TouchPoint::new(50.0, 50.0, 2),
    ]);
    assert!(t.viewport.state().is_idle());
}

#[test]
fn test_set_scale_clamps_to_bounds() {
    let mut t = TestViewport::new(ViewportConfig {
        scale_bounds: ScaleBounds {
            min: Some(0.5),
            max: Some(2.0),
        },
        ..Default::default()
    });
    t.viewport.set_scale(10.0);
    assert_eq!(t.viewport.scale_target(), 2.0);

    t.run_until_idle();
    assert_eq!(t.viewport.view().scale, 2.0);

    t.viewport.set_scale(0.01);
    assert_eq!(t.viewport.scale_target(), 0.5);
}

#[test]
fn test_disabled_mouse_pan_ignores_pointer() {
    let mut t = TestViewport::new(ViewportConfig {
        mouse_pan: false,
        ..Default::default()
    });
    t.viewport.handle_pointer_down(0.0, 0.0, 1);
    assert!(t.viewport.state().is_idle());
    assert!(t.events().is_empty());
}
