//! Pointer move during a handle drag.
//!
//! Called for every pointer move on the tracking surface while dragging, so
//! the handler does one measurement and one commit and nothing else.

use crate::geometry::ScrollFrame;
use crate::host::ScrollHost;
use crate::input::{Listener, PointerEvent};
use crate::profile_scope;
use crate::scroll_sync::ScrollSync;
use tracing::debug;

impl ScrollSync {
    /// Pointer moved while dragging: the handle follows the pointer minus the
    /// press anchor, clamped to the track, and the content follows the handle.
    pub fn on_pointer_move<H: ScrollHost + ?Sized>(
        &mut self,
        host: &mut H,
        event: &mut PointerEvent,
    ) -> Option<ScrollFrame> {
        profile_scope!("on_pointer_move");

        if !self.listeners.contains(Listener::PointerMove) {
            return None;
        }
        event.flags.suppress();

        let anchor = self.state.drag_anchor()?;
        let m = host.measure();
        if !m.is_draggable() {
            debug!(
                track = m.track_length,
                handle = m.handle_length,
                "drag move skipped: handle fills the track"
            );
            return None;
        }

        let position = event.y - anchor;
        Some(self.writer.commit_handle_position(host, position, &m))
    }
}
