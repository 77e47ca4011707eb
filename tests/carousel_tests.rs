//! End-to-end behavior of the carousel state machine driven through the same
//! operations the viewer dispatches, with time injected for determinism.

use std::time::{Duration, Instant};

use rust_photo_carousel::carousel::Carousel;
use rust_photo_carousel::events::NavDirection;
use rust_photo_carousel::gesture::DragGesture;

const PERIOD: Duration = Duration::from_secs(3);

#[test]
fn index_stays_in_range_under_mixed_navigation() {
    let t0 = Instant::now();
    let mut c = Carousel::new(4, PERIOD, t0);
    let mut now = t0;
    for step in 0usize..50 {
        now += Duration::from_millis(200);
        match step % 4 {
            0 => c.next(now),
            1 => c.prev(now),
            2 => c.go_to(step % c.len(), now).unwrap(),
            _ => {
                c.on_tick(now);
            }
        }
        let idx = c.current_index().unwrap();
        assert!(idx < c.len(), "index {idx} escaped range at step {step}");
    }
}

#[test]
fn next_then_prev_returns_to_the_same_slide() {
    let t0 = Instant::now();
    let mut c = Carousel::new(5, PERIOD, t0);
    c.go_to(2, t0).unwrap();
    c.next(t0);
    c.prev(t0);
    assert_eq!(c.current_index(), Some(2));
}

#[test]
fn navigation_sequence_lands_where_expected() {
    let t0 = Instant::now();
    let mut c = Carousel::new(5, PERIOD, t0);
    c.next(t0);
    c.next(t0);
    c.next(t0);
    assert_eq!(c.current_index(), Some(3));
    c.prev(t0);
    assert_eq!(c.current_index(), Some(2));
    c.go_to(4, t0).unwrap();
    assert_eq!(c.current_index(), Some(4));
    c.next(t0);
    assert_eq!(c.current_index(), Some(0));
}

#[test]
fn exactly_one_indicator_is_active_after_go_to() {
    let t0 = Instant::now();
    let mut c = Carousel::new(6, PERIOD, t0);
    for target in [3, 0, 5] {
        c.go_to(target, t0).unwrap();
        let frame = c.frame();
        assert_eq!(frame.active, Some(target));
        let on_screen = frame
            .offsets
            .iter()
            .enumerate()
            .filter(|(_, off)| **off == 0.0)
            .map(|(i, _)| i)
            .collect::<Vec<_>>();
        assert_eq!(on_screen, vec![target]);
    }
}

#[test]
fn toggling_twice_restores_play_state() {
    let t0 = Instant::now();
    let mut c = Carousel::new(3, PERIOD, t0);
    c.toggle_play_pause(t0);
    assert!(!c.is_playing());
    assert!(c.deadline().is_none());
    let t1 = t0 + Duration::from_secs(1);
    c.toggle_play_pause(t1);
    assert!(c.is_playing());
    assert_eq!(c.deadline(), Some(t1 + PERIOD));
}

#[test]
fn periodic_ticks_advance_one_slide_per_period() {
    let t0 = Instant::now();
    let mut c = Carousel::new(3, PERIOD, t0);
    for lap in 1u32..=6 {
        let fire_at = t0 + PERIOD * lap;
        assert!(!c.on_tick(fire_at - Duration::from_millis(1)));
        assert!(c.on_tick(fire_at));
        assert_eq!(c.current_index(), Some(lap as usize % 3));
    }
}

#[test]
fn hover_then_leave_grants_a_full_fresh_period() {
    let t0 = Instant::now();
    let mut c = Carousel::new(3, PERIOD, t0);
    c.on_pointer_enter();
    c.on_pointer_leave(t0 + Duration::from_secs(2));
    // The pre-hover deadline at t0+3s no longer applies.
    assert!(!c.on_tick(t0 + Duration::from_secs(3)));
    assert!(c.on_tick(t0 + Duration::from_secs(5)));
    assert_eq!(c.current_index(), Some(1));
}

#[test]
fn drag_past_threshold_navigates_once_per_gesture() {
    let t0 = Instant::now();
    let mut c = Carousel::new(3, PERIOD, t0);
    let mut gesture = DragGesture::new(50.0);

    gesture.on_pointer_down(200.0);
    assert!(gesture.on_pointer_move(170.0).is_none());
    match gesture.on_pointer_move(140.0).expect("crossed threshold") {
        NavDirection::Next => c.next(t0),
        NavDirection::Prev => c.prev(t0),
    }
    assert_eq!(c.current_index(), Some(1));

    // Continuing the same motion must not navigate again.
    assert!(gesture.on_pointer_move(80.0).is_none());
    gesture.on_pointer_up();
    assert_eq!(c.current_index(), Some(1));
}

#[test]
fn short_drags_are_ignored() {
    let mut gesture = DragGesture::new(50.0);
    gesture.on_pointer_down(100.0);
    assert!(gesture.on_pointer_move(140.0).is_none());
    assert!(gesture.on_pointer_move(60.0).is_none());
    gesture.on_pointer_up();
    assert!(!gesture.is_tracking());
}

#[test]
fn manual_navigation_while_paused_keeps_timer_off() {
    let t0 = Instant::now();
    let mut c = Carousel::new(3, PERIOD, t0);
    c.toggle_play_pause(t0);
    c.next(t0 + Duration::from_secs(1));
    assert_eq!(c.current_index(), Some(1));
    assert!(c.deadline().is_none());
    assert!(!c.on_tick(t0 + Duration::from_secs(10)));
}
