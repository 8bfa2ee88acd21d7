//! Wheel rotation - an instantaneous commit with no session.

use crate::geometry::ScrollFrame;
use crate::host::ScrollHost;
use crate::input::{Listener, WheelEvent};
use crate::profile_scope;
use crate::scroll_sync::ScrollSync;
use tracing::debug;

impl ScrollSync {
    /// Wheel rotated over the content: the normalized delta is added to the
    /// current offset, clamped, and the handle follows.
    ///
    /// Ignored while a drag or touch session is open so the two never write
    /// against each other.
    pub fn on_wheel<H: ScrollHost + ?Sized>(
        &mut self,
        host: &mut H,
        event: &mut WheelEvent,
    ) -> Option<ScrollFrame> {
        profile_scope!("on_wheel");

        if !self.listeners.contains(Listener::Wheel) {
            return None;
        }
        event.flags.suppress();

        if !self.state.is_idle() {
            debug!(state = %self.state, "wheel ignored during gesture");
            return None;
        }

        let delta = event.delta.normalized();
        let m = host.measure();
        let offset = self.writer.content_offset() + delta;
        Some(self.writer.commit_content_offset(host, offset, &m))
    }
}
