//! Input state machine - which modality currently owns the scroll.
//!
//! The session data of an open gesture lives inside its variant, so at most
//! one gesture session can exist and an idle engine carries none.
//!
//! ## State Transitions
//!
//! ```text
//! Idle          -> Dragging       (handle press)
//! Idle          -> TouchTracking  (touch start with a touch point)
//! Dragging      -> Idle           (pointer release)
//! TouchTracking -> Idle           (touch end / touch cancel)
//!
//! Any -> Idle                     (pointer leaves the tracking surface)
//! ```
//!
//! Wheel input never leaves `Idle`; it is ignored in the other two states.

use std::fmt;

/// Which kind of gesture a session belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GestureKind {
    Drag,
    Touch,
}

impl fmt::Display for GestureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GestureKind::Drag => f.write_str("drag"),
            GestureKind::Touch => f.write_str("touch"),
        }
    }
}

/// Arbiter state, including the open gesture session if any.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InputState {
    /// No gesture in progress
    #[default]
    Idle,

    /// Handle drag in progress
    Dragging {
        /// Pointer Y minus handle position at press time
        anchor_offset: f32,
    },

    /// Single-point touch drag in progress
    TouchTracking {
        /// Touch Y at touch start
        anchor_y: f32,
        /// Content offset at touch start
        base_content_offset: f32,
    },
}

impl InputState {
    /// Returns true if the state is Idle
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Returns true if a handle drag is active
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    /// Returns true if a touch gesture is active
    pub fn is_touch_tracking(&self) -> bool {
        matches!(self, Self::TouchTracking { .. })
    }

    /// Kind of the open session, if any
    pub fn gesture_kind(&self) -> Option<GestureKind> {
        match self {
            Self::Idle => None,
            Self::Dragging { .. } => Some(GestureKind::Drag),
            Self::TouchTracking { .. } => Some(GestureKind::Touch),
        }
    }

    /// Get the drag anchor, if dragging
    pub fn drag_anchor(&self) -> Option<f32> {
        match self {
            Self::Dragging { anchor_offset } => Some(*anchor_offset),
            _ => None,
        }
    }

    /// Get the touch anchor and base offset, if touch tracking
    pub fn touch_origin(&self) -> Option<(f32, f32)> {
        match self {
            Self::TouchTracking {
                anchor_y,
                base_content_offset,
            } => Some((*anchor_y, *base_content_offset)),
            _ => None,
        }
    }

    /// Open a drag session
    pub fn start_dragging(&mut self, pointer_y: f32, handle_position: f32) {
        *self = Self::Dragging {
            anchor_offset: pointer_y - handle_position,
        };
    }

    /// Open a touch session
    pub fn start_touch(&mut self, touch_y: f32, content_offset: f32) {
        *self = Self::TouchTracking {
            anchor_y: touch_y,
            base_content_offset: content_offset,
        };
    }

    /// Discard any session and return to Idle
    pub fn reset(&mut self) {
        *self = Self::Idle;
    }
}

impl fmt::Display for InputState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => f.write_str("idle"),
            Self::Dragging { .. } => f.write_str("dragging"),
            Self::TouchTracking { .. } => f.write_str("touch-tracking"),
        }
    }
}
