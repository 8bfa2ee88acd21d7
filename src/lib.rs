//! Custom scrollbar interaction engine.
//!
//! A [`ScrollSync`] keeps a content panel's offset and a scrollbar handle's
//! position in step while the user scrolls by dragging the handle, turning
//! the mouse wheel, or dragging a finger over the content. The UI toolkit is
//! reached only through the [`ScrollHost`] trait: the engine measures
//! through it, writes the two values through it, and asks it to subscribe or
//! unsubscribe the event listeners it currently needs.
//!
//! ```ignore
//! let mut sync = ScrollSync::from_settings(ScrollSettings::default())?;
//! sync.attach(&mut host);
//!
//! // host event loop
//! let mut event = PointerEvent::new(y);
//! sync.on_handle_press(&mut host, &mut event);
//! if event.flags.is_suppressed() { /* cancel the platform default */ }
//! ```

pub mod constants;
pub mod error;
pub mod geometry;
pub mod host;
pub mod input;
pub mod logging;
pub mod perf;
mod scroll_sync;
pub mod settings;
pub mod sync;

pub use error::{SettingsError, SettingsResult};
pub use geometry::{Measurements, ScrollFrame};
pub use host::ScrollHost;
pub use input::{
    GestureKind, InputState, LeaveEvent, Listener, ListenerSet, PointerEvent, TouchEvent,
    TouchPoint, WheelDelta, WheelEvent,
};
pub use scroll_sync::ScrollSync;
pub use settings::{ScrollSettings, StructureRoles};
