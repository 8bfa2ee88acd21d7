//! Pointer release - closes the drag session.

use crate::host::ScrollHost;
use crate::input::{GestureKind, Listener, PointerEvent};
use crate::scroll_sync::ScrollSync;

impl ScrollSync {
    /// Pointer released anywhere on the tracking surface while dragging.
    ///
    /// Returns true when a drag session was closed.
    pub fn on_pointer_release<H: ScrollHost + ?Sized>(
        &mut self,
        host: &mut H,
        event: &mut PointerEvent,
    ) -> bool {
        if !self.listeners.contains(Listener::PointerRelease) {
            return false;
        }
        event.flags.suppress();

        if !self.state.is_dragging() {
            return false;
        }
        self.end_session(host, GestureKind::Drag);
        true
    }
}
