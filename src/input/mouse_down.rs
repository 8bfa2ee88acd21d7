//! Handle press - opens a drag session.

use crate::host::ScrollHost;
use crate::input::{Listener, PointerEvent};
use crate::profile_scope;
use crate::scroll_sync::ScrollSync;
use tracing::debug;

impl ScrollSync {
    /// Pointer pressed on the handle.
    ///
    /// Records the pointer's distance from the handle's top edge, swaps the
    /// start triggers for pointer move/release on the whole surface so that
    /// movement off the handle keeps tracking. Returns true when a drag
    /// session was opened.
    pub fn on_handle_press<H: ScrollHost + ?Sized>(
        &mut self,
        host: &mut H,
        event: &mut PointerEvent,
    ) -> bool {
        profile_scope!("on_handle_press");

        if !self.listeners.contains(Listener::HandlePress) {
            return false;
        }
        event.flags.suppress();

        if !self.state.is_idle() {
            debug!(state = %self.state, "handle press ignored: session already open");
            return false;
        }

        let handle_position = self.writer.handle_position();
        self.state.start_dragging(event.y, handle_position);
        debug!(
            from = "idle",
            to = "dragging",
            anchor = event.y - handle_position,
            "drag started"
        );

        self.unbind_idle_triggers(host);
        self.bind(host, Listener::PointerMove);
        self.bind(host, Listener::PointerRelease);
        true
    }
}
