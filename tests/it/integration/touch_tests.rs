//! Touch tracking: start, move, end, cancel.

use crate::helpers::{
    TestSurfaceBuilder, assert_close, attached_reference, attached_with, idle_listeners, pointer,
    touch, wheel,
};
use scroll_sync::{GestureKind, Listener, ScrollSettings, TouchEvent, TouchPoint};

#[test]
fn test_touch_move_is_damped_from_start_offset() {
    let (mut sync, mut host) = attached_reference();
    sync.scroll_to(&mut host, 100.0 / 700.0).unwrap();
    assert_close(host.content_offset, -100.0);

    assert!(sync.on_touch_start(&mut host, &mut touch(500.0)));
    assert_eq!(sync.state().gesture_kind(), Some(GestureKind::Touch));

    // delta -100, damped to -80
    let frame = sync.on_touch_move(&mut host, &mut touch(400.0)).unwrap();
    assert_close(frame.content_offset, -180.0);
    assert_close(host.content_offset, -180.0);
    assert_close(host.handle_position, 140.0 * 180.0 / 700.0);
}

#[test]
fn test_touch_moves_do_not_accumulate() {
    let (mut sync, mut host) = attached_reference();
    sync.on_touch_start(&mut host, &mut touch(500.0));

    for _ in 0..5 {
        sync.on_touch_move(&mut host, &mut touch(450.0));
    }
    // Always (450 - 500) * 0.8 from the starting offset of 0
    assert_eq!(host.content_offset, -40.0);
    assert_eq!(host.offset_writes, 1);
}

#[test]
fn test_touch_offset_clamped_both_ways() {
    let (mut sync, mut host) = attached_reference();
    sync.on_touch_start(&mut host, &mut touch(500.0));

    let frame = sync.on_touch_move(&mut host, &mut touch(900.0)).unwrap();
    assert_eq!(frame.content_offset, 0.0);
    assert_eq!(frame.handle_position, 0.0);

    let frame = sync.on_touch_move(&mut host, &mut touch(-5_000.0)).unwrap();
    assert_eq!(frame.content_offset, -700.0);
    assert_eq!(frame.handle_position, 140.0);
}

#[test]
fn test_touch_start_claims_event_and_swaps_listeners() {
    let (mut sync, mut host) = attached_reference();
    let mut start = touch(200.0);
    sync.on_touch_start(&mut host, &mut start);

    assert!(start.flags.is_suppressed());
    assert!(host.live.contains(Listener::TouchMove));
    assert!(host.live.contains(Listener::TouchEnd));
    assert!(!host.live.contains(Listener::TouchStart));
    assert!(!host.live.contains(Listener::HandlePress));
}

#[test]
fn test_touch_end_and_cancel_restore_idle() {
    let (mut sync, mut host) = attached_reference();

    sync.on_touch_start(&mut host, &mut touch(200.0));
    let mut end = touch(180.0);
    assert!(sync.on_touch_end(&mut host, &mut end));
    assert!(end.flags.is_suppressed());
    assert_eq!(host.live, idle_listeners());

    sync.on_touch_start(&mut host, &mut touch(200.0));
    assert!(sync.on_touch_cancel(&mut host, &mut TouchEvent::empty()));
    assert!(sync.state().is_idle());
    assert_eq!(host.live, idle_listeners());
    assert!(host.is_clean());
}

#[test]
fn test_touch_start_without_points_is_ignored() {
    let (mut sync, mut host) = attached_reference();
    let mut start = TouchEvent::empty();
    assert!(!sync.on_touch_start(&mut host, &mut start));
    assert!(sync.state().is_idle());
    assert_eq!(host.live, idle_listeners());
}

#[test]
fn test_extra_touch_points_are_ignored() {
    let (mut sync, mut host) = attached_reference();
    let mut start = TouchEvent {
        changed_touches: vec![TouchPoint { y: 300.0 }, TouchPoint { y: 10.0 }],
        touches: vec![],
        ..TouchEvent::default()
    };
    sync.on_touch_start(&mut host, &mut start);
    assert_eq!(sync.state().touch_origin(), Some((300.0, 0.0)));

    let mut moved = TouchEvent {
        changed_touches: vec![],
        touches: vec![TouchPoint { y: 250.0 }, TouchPoint { y: 900.0 }],
        ..TouchEvent::default()
    };
    let frame = sync.on_touch_move(&mut host, &mut moved).unwrap();
    assert_eq!(frame.content_offset, -40.0);
}

#[test]
fn test_wheel_and_press_ignored_during_touch() {
    let (mut sync, mut host) = attached_reference();
    sync.on_touch_start(&mut host, &mut touch(500.0));
    sync.on_touch_move(&mut host, &mut touch(400.0));

    let mut w = wheel(-120.0);
    assert_eq!(sync.on_wheel(&mut host, &mut w), None);
    assert!(w.flags.is_suppressed());
    assert!(!sync.on_handle_press(&mut host, &mut pointer(5.0)));
    assert_eq!(host.content_offset, -80.0);
}

#[test]
fn test_touch_disabled() {
    let settings = ScrollSettings::default().with_touch(false);
    let (mut sync, mut host) = attached_with(settings, TestSurfaceBuilder::new().build());
    let mut start = touch(100.0);
    assert!(!sync.on_touch_start(&mut host, &mut start));
    assert!(!start.flags.is_suppressed());
}

#[test]
fn test_touch_scrolls_without_bar() {
    let host = TestSurfaceBuilder::new().without_bar().build();
    let (mut sync, mut host) = attached_with(ScrollSettings::default(), host);

    sync.on_touch_start(&mut host, &mut touch(300.0));
    let frame = sync.on_touch_move(&mut host, &mut touch(200.0)).unwrap();
    assert_eq!(frame.content_offset, -80.0);
    assert_eq!(host.content_offset, -80.0);
}
