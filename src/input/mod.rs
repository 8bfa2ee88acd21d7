//! Input arbitration and gesture handling.
//!
//! ## Architecture
//!
//! The arbiter is an explicit state machine (`InputState`) plus the set of
//! live listeners (`ListenerSet`). At most one gesture session exists at a
//! time; while one is open the start triggers of every modality are unbound
//! and wheel input is ignored.
//!
//! Each handler checks that its listener is live, claims the event
//! (prevent default + stop propagation), then either transitions the state
//! machine or commits a new frame through the sync writer.
//!
//! ## Modules
//!
//! - `state` - Input state machine enum and helper methods
//! - `listeners` - Listener identities and the live set
//! - `events` - Typed events, touch point extraction, wheel normalization
//! - `mouse_down` - Handle press (drag start)
//! - `drag` - Pointer move during a drag
//! - `mouse_up` - Pointer release (drag end)
//! - `touch` - Touch start, move, end and cancel
//! - `wheel` - Wheel rotation
//! - `leave` - Pointer leaving the tracking surface

mod drag;
mod events;
mod leave;
mod listeners;
mod mouse_down;
mod mouse_up;
mod state;
mod touch;
mod wheel;

pub use events::{
    EventFlags, LeaveEvent, PointerEvent, TouchEvent, TouchPoint, WheelDelta, WheelEvent,
    primary_touch_y,
};
pub use listeners::{Listener, ListenerSet};
pub use state::{GestureKind, InputState};
