//! Slide-index state machine and auto-play timer lifecycle.
//!
//! All time is injected as [`Instant`] so every transition is deterministic
//! and unit-testable without a running event loop.

use std::time::{Duration, Instant};

use anyhow::{Result, ensure};

/// The auto-play timer as an explicitly owned resource: a fixed period plus
/// at most one armed deadline. Arming while armed keeps the existing
/// deadline, so two live timers can never exist for one widget.
#[derive(Debug, Clone)]
pub struct AutoPlay {
    period: Duration,
    deadline: Option<Instant>,
}

impl AutoPlay {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            deadline: None,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Next wakeup instant, if armed. The event loop waits until this.
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Arms a fresh full period from `now`. No-op when already armed.
    pub fn arm(&mut self, now: Instant) {
        if self.deadline.is_none() {
            self.deadline = Some(now + self.period);
        }
    }

    /// Cancels the pending deadline. Safe to call when unarmed.
    pub fn disarm(&mut self) {
        self.deadline = None;
    }

    /// Consumes an expired deadline and re-arms from `now`. Returns whether
    /// the timer fired.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = Some(now + self.period);
                true
            }
            _ => false,
        }
    }
}

/// Pure render model derived from the carousel state: one horizontal offset
/// per slide (percent of container width) and the single active indicator.
#[derive(Debug, Clone, PartialEq)]
pub struct SlideFrame {
    pub offsets: Vec<f32>,
    pub active: Option<usize>,
    pub playing: bool,
}

/// One carousel widget: a fixed ordered set of slides, the current index,
/// the play/pause intent, and the hover state that gates the timer.
#[derive(Debug)]
pub struct Carousel {
    len: usize,
    current: usize,
    playing: bool,
    hovering: bool,
    disposed: bool,
    autoplay: AutoPlay,
}

impl Carousel {
    /// Builds the widget at index 0 with auto-play running, matching the
    /// initial render. An empty widget (`len == 0`) is inert: it never arms
    /// the timer and ignores navigation.
    pub fn new(len: usize, interval: Duration, now: Instant) -> Self {
        let mut autoplay = AutoPlay::new(interval);
        if len > 0 {
            autoplay.arm(now);
        }
        Self {
            len,
            current: 0,
            playing: len > 0,
            hovering: false,
            disposed: false,
            autoplay,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Current slide index; `None` for an empty widget.
    pub fn current_index(&self) -> Option<usize> {
        (self.len > 0).then_some(self.current)
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Next auto-advance instant, if the timer is armed.
    pub fn deadline(&self) -> Option<Instant> {
        self.autoplay.deadline()
    }

    fn inert(&self) -> bool {
        self.disposed || self.len == 0
    }

    /// Manual advance: wraps past the last slide and restarts the
    /// auto-advance period from `now`.
    pub fn next(&mut self, now: Instant) {
        if self.inert() {
            return;
        }
        self.current = (self.current + 1) % self.len;
        self.restart_autoplay(now);
    }

    /// Manual retreat: wraps past the first slide and restarts the
    /// auto-advance period from `now`.
    pub fn prev(&mut self, now: Instant) {
        if self.inert() {
            return;
        }
        self.current = (self.current + self.len - 1) % self.len;
        self.restart_autoplay(now);
    }

    /// Jumps straight to slide `index`. Out-of-range indices are rejected
    /// and leave the state untouched.
    pub fn go_to(&mut self, index: usize, now: Instant) -> Result<()> {
        if self.disposed {
            return Ok(());
        }
        ensure!(
            index < self.len,
            "slide index {index} out of range for {} slides",
            self.len
        );
        self.current = index;
        self.restart_autoplay(now);
        Ok(())
    }

    /// Flips the auto-play intent and arms or disarms the timer to match.
    /// Resuming while hovered leaves the timer disarmed until the pointer
    /// leaves.
    pub fn toggle_play_pause(&mut self, now: Instant) {
        if self.inert() {
            return;
        }
        self.playing = !self.playing;
        if self.playing {
            if !self.hovering {
                self.autoplay.arm(now);
            }
        } else {
            self.autoplay.disarm();
        }
    }

    /// Pointer entered the widget: suspend the timer without touching the
    /// play intent.
    pub fn on_pointer_enter(&mut self) {
        if self.disposed {
            return;
        }
        self.hovering = true;
        self.autoplay.disarm();
    }

    /// Pointer left the widget: resume with a full fresh period, but only if
    /// the user still wants auto-play.
    pub fn on_pointer_leave(&mut self, now: Instant) {
        if self.disposed {
            return;
        }
        self.hovering = false;
        if self.playing {
            self.autoplay.arm(now);
        }
    }

    /// Timer tick: advances and re-arms when the deadline has passed. The
    /// tick is the timer, so it does not go through the manual restart path.
    /// Returns whether the slide changed.
    pub fn on_tick(&mut self, now: Instant) -> bool {
        if self.inert() || !self.autoplay.fire(now) {
            return false;
        }
        self.current = (self.current + 1) % self.len;
        true
    }

    /// Releases the timer and makes the widget permanently inert.
    pub fn dispose(&mut self) {
        self.autoplay.disarm();
        self.playing = false;
        self.disposed = true;
    }

    /// Renders the visual state: slide `i` sits at `(i - current) * 100%`
    /// horizontally and exactly the indicator for `current` is active.
    pub fn frame(&self) -> SlideFrame {
        let offsets = (0..self.len)
            .map(|i| (i as f32 - self.current as f32) * 100.0)
            .collect();
        SlideFrame {
            offsets,
            active: self.current_index(),
            playing: self.playing,
        }
    }

    fn restart_autoplay(&mut self, now: Instant) {
        self.autoplay.disarm();
        if self.playing && !self.hovering {
            self.autoplay.arm(now);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PERIOD: Duration = Duration::from_secs(3);

    #[test]
    fn arm_while_armed_keeps_first_deadline() {
        let t0 = Instant::now();
        let mut timer = AutoPlay::new(PERIOD);
        timer.arm(t0);
        let first = timer.deadline().unwrap();
        timer.arm(t0 + Duration::from_secs(1));
        assert_eq!(timer.deadline(), Some(first));
    }

    #[test]
    fn disarm_is_idempotent_and_cancels_firing() {
        let t0 = Instant::now();
        let mut timer = AutoPlay::new(PERIOD);
        timer.disarm();
        timer.arm(t0);
        timer.disarm();
        timer.disarm();
        assert!(!timer.fire(t0 + PERIOD));
    }

    #[test]
    fn fire_rearms_from_firing_instant() {
        let t0 = Instant::now();
        let mut timer = AutoPlay::new(PERIOD);
        timer.arm(t0);
        assert!(!timer.fire(t0 + Duration::from_secs(2)));
        let late = t0 + PERIOD + Duration::from_millis(10);
        assert!(timer.fire(late));
        assert_eq!(timer.deadline(), Some(late + PERIOD));
    }

    #[test]
    fn starts_playing_at_index_zero_with_armed_timer() {
        let t0 = Instant::now();
        let c = Carousel::new(5, PERIOD, t0);
        assert_eq!(c.current_index(), Some(0));
        assert!(c.is_playing());
        assert_eq!(c.deadline(), Some(t0 + PERIOD));
    }

    #[test]
    fn empty_widget_is_inert() {
        let t0 = Instant::now();
        let mut c = Carousel::new(0, PERIOD, t0);
        assert_eq!(c.current_index(), None);
        assert!(c.deadline().is_none());
        c.next(t0);
        c.prev(t0);
        assert!(!c.on_tick(t0 + PERIOD));
        assert!(c.go_to(0, t0).is_err());
        assert!(c.frame().offsets.is_empty());
    }

    #[test]
    fn go_to_rejects_out_of_range_and_keeps_state() {
        let t0 = Instant::now();
        let mut c = Carousel::new(3, PERIOD, t0);
        c.next(t0);
        assert!(c.go_to(3, t0).is_err());
        assert_eq!(c.current_index(), Some(1));
    }

    #[test]
    fn manual_navigation_restarts_the_period() {
        let t0 = Instant::now();
        let mut c = Carousel::new(3, PERIOD, t0);
        let t1 = t0 + Duration::from_secs(2);
        c.next(t1);
        assert_eq!(c.deadline(), Some(t1 + PERIOD));
    }

    #[test]
    fn hover_suspends_without_pausing() {
        let t0 = Instant::now();
        let mut c = Carousel::new(3, PERIOD, t0);
        c.on_pointer_enter();
        assert!(c.is_playing());
        assert!(c.deadline().is_none());
        assert!(!c.on_tick(t0 + PERIOD));

        let t1 = t0 + Duration::from_secs(2);
        c.on_pointer_leave(t1);
        assert_eq!(c.deadline(), Some(t1 + PERIOD));
    }

    #[test]
    fn pause_survives_hover_cycle() {
        let t0 = Instant::now();
        let mut c = Carousel::new(3, PERIOD, t0);
        c.toggle_play_pause(t0);
        c.on_pointer_enter();
        c.on_pointer_leave(t0 + Duration::from_secs(1));
        assert!(!c.is_playing());
        assert!(c.deadline().is_none());
    }

    #[test]
    fn resume_while_hovered_waits_for_pointer_leave() {
        let t0 = Instant::now();
        let mut c = Carousel::new(3, PERIOD, t0);
        c.toggle_play_pause(t0);
        c.on_pointer_enter();
        c.toggle_play_pause(t0);
        assert!(c.is_playing());
        assert!(c.deadline().is_none());
        c.on_pointer_leave(t0 + Duration::from_secs(1));
        assert!(c.deadline().is_some());
    }

    #[test]
    fn dispose_releases_timer_and_blocks_navigation() {
        let t0 = Instant::now();
        let mut c = Carousel::new(3, PERIOD, t0);
        c.dispose();
        assert!(c.deadline().is_none());
        c.next(t0);
        assert!(!c.on_tick(t0 + PERIOD));
        assert!(c.go_to(1, t0).is_ok());
        assert_eq!(c.current_index(), Some(0));
    }
}
