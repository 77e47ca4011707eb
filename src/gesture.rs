//! Drag-based navigation, attached to a widget by composition.

use crate::events::NavDirection;

#[derive(Debug, Clone, Copy, PartialEq)]
enum GestureState {
    Idle,
    Tracking { start_x: f32 },
}

/// Per-widget drag gesture: `Idle → Tracking → Idle`. A gesture ends at the
/// first threshold crossing or at pointer-up, whichever comes first, and
/// only one gesture is tracked at a time.
#[derive(Debug)]
pub struct DragGesture {
    threshold_px: f32,
    state: GestureState,
}

impl DragGesture {
    pub fn new(threshold_px: f32) -> Self {
        Self {
            threshold_px,
            state: GestureState::Idle,
        }
    }

    pub fn is_tracking(&self) -> bool {
        matches!(self.state, GestureState::Tracking { .. })
    }

    /// Pointer-down inside the slide area starts tracking. Ignored while a
    /// gesture is already in flight.
    pub fn on_pointer_down(&mut self, x: f32) {
        if self.state == GestureState::Idle {
            self.state = GestureState::Tracking { start_x: x };
        }
    }

    /// Pointer-move while tracking; crossing the horizontal threshold ends
    /// the gesture and yields the navigation it maps to (drag right reveals
    /// the previous slide).
    pub fn on_pointer_move(&mut self, x: f32) -> Option<NavDirection> {
        let GestureState::Tracking { start_x } = self.state else {
            return None;
        };
        let delta = x - start_x;
        if delta > self.threshold_px {
            self.state = GestureState::Idle;
            Some(NavDirection::Prev)
        } else if delta < -self.threshold_px {
            self.state = GestureState::Idle;
            Some(NavDirection::Next)
        } else {
            None
        }
    }

    /// Pointer-up ends the gesture unconditionally.
    pub fn on_pointer_up(&mut self) {
        self.state = GestureState::Idle;
    }
}
