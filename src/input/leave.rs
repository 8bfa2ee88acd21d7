//! Safety net - the pointer left the tracking surface.
//!
//! Whatever state the arbiter is in, every transient listener is dropped and
//! only the idle start triggers are bound again. This keeps a drag released
//! outside the window from leaving move/release listeners behind.

use crate::host::ScrollHost;
use crate::input::{LeaveEvent, Listener};
use crate::scroll_sync::ScrollSync;
use tracing::debug;

impl ScrollSync {
    /// Pointer left the surface. Returns true when a session was aborted.
    pub fn on_surface_leave<H: ScrollHost + ?Sized>(
        &mut self,
        host: &mut H,
        event: &mut LeaveEvent,
    ) -> bool {
        if !self.listeners.contains(Listener::SurfaceLeave) {
            return false;
        }
        event.flags.suppress();

        for listener in Listener::TRANSIENT {
            self.unbind(host, listener);
        }

        let aborted = !self.state.is_idle();
        if aborted {
            debug!(from = %self.state, to = "idle", "session aborted: pointer left surface");
        }
        self.state.reset();
        self.bind_idle_triggers(host);
        aborted
    }
}
