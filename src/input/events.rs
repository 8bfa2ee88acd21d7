//! Typed input events handed to the engine by its host.
//!
//! Each event carries only the scalar the engine needs (a vertical coordinate
//! or a wheel delta) plus the two flags a handler sets when it takes
//! ownership of the event. Hosts read the flags back and apply them to the
//! platform event.

use crate::constants::{WHEEL_DETAIL_FACTOR, WHEEL_LINE_HEIGHT};

/// Default-action and propagation flags shared by every event type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EventFlags {
    default_prevented: bool,
    propagation_stopped: bool,
}

impl EventFlags {
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    /// Prevent the default action and stop propagation.
    pub fn suppress(&mut self) {
        self.prevent_default();
        self.stop_propagation();
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }

    pub fn propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }

    /// True when the engine claimed the event
    pub fn is_suppressed(&self) -> bool {
        self.default_prevented && self.propagation_stopped
    }
}

/// Pointer press, move or release.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerEvent {
    /// Vertical pointer coordinate, relative to the track's top edge
    pub y: f32,
    pub flags: EventFlags,
}

impl PointerEvent {
    pub fn new(y: f32) -> Self {
        Self {
            y,
            flags: EventFlags::default(),
        }
    }
}

/// One touch point. Only the vertical coordinate matters.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TouchPoint {
    pub y: f32,
}

/// Touch start, move, end or cancel.
///
/// Platforms disagree on which list holds the point of interest, so both are
/// carried and [`primary_touch_y`] picks one.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TouchEvent {
    /// Points that changed in this event
    pub changed_touches: Vec<TouchPoint>,
    /// Points currently on the surface
    pub touches: Vec<TouchPoint>,
    pub flags: EventFlags,
}

impl TouchEvent {
    /// Single-point event with the point in both lists.
    pub fn at(y: f32) -> Self {
        Self {
            changed_touches: vec![TouchPoint { y }],
            touches: vec![TouchPoint { y }],
            flags: EventFlags::default(),
        }
    }

    /// Event with no touch points at all.
    pub fn empty() -> Self {
        Self::default()
    }
}

/// Extract zero-or-one active touch Y coordinate.
///
/// Prefers the first changed point, falls back to the first current point.
/// Any further points are ignored.
pub fn primary_touch_y(event: &TouchEvent) -> Option<f32> {
    event
        .changed_touches
        .first()
        .or_else(|| event.touches.first())
        .map(|point| point.y)
        .filter(|y| y.is_finite())
}

/// Wheel delta in one of the conventions hosts report.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WheelDelta {
    /// Legacy `wheelDelta`: positive scrolls up, 120 per notch
    WheelDelta(f32),
    /// DOM `detail`: positive scrolls down, in lines
    Detail(f32),
    /// Pixel `deltaY`: positive scrolls down
    Pixels(f32),
    /// Line `deltaY`: positive scrolls down
    Lines(f32),
}

impl WheelDelta {
    /// Signed content delta; positive moves content toward its top.
    pub fn normalized(self) -> f32 {
        let delta = match self {
            WheelDelta::WheelDelta(d) => d,
            WheelDelta::Detail(d) => d * WHEEL_DETAIL_FACTOR,
            WheelDelta::Pixels(d) => -d,
            WheelDelta::Lines(d) => -d * WHEEL_LINE_HEIGHT,
        };
        if delta.is_finite() { delta + 0.0 } else { 0.0 }
    }
}

/// Wheel rotation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelEvent {
    pub delta: WheelDelta,
    pub flags: EventFlags,
}

impl WheelEvent {
    pub fn new(delta: WheelDelta) -> Self {
        Self {
            delta,
            flags: EventFlags::default(),
        }
    }
}

/// Pointer leaving the tracking surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LeaveEvent {
    pub flags: EventFlags,
}
