//! Single-point touch tracking.
//!
//! Movement is measured from the touch start and added to the content offset
//! recorded at that moment, not to the live offset, so repeated moves do not
//! accumulate drift.

use crate::constants::TOUCH_DAMPING;
use crate::geometry::ScrollFrame;
use crate::host::ScrollHost;
use crate::input::{GestureKind, Listener, TouchEvent, primary_touch_y};
use crate::profile_scope;
use crate::scroll_sync::ScrollSync;
use tracing::debug;

impl ScrollSync {
    /// Touch started on the content. Returns true when a touch session was
    /// opened.
    pub fn on_touch_start<H: ScrollHost + ?Sized>(
        &mut self,
        host: &mut H,
        event: &mut TouchEvent,
    ) -> bool {
        profile_scope!("on_touch_start");

        if !self.listeners.contains(Listener::TouchStart) {
            return false;
        }
        event.flags.suppress();

        if !self.state.is_idle() {
            debug!(state = %self.state, "touch start ignored: session already open");
            return false;
        }
        let Some(touch_y) = primary_touch_y(event) else {
            debug!("touch start ignored: no touch point");
            return false;
        };

        let base_offset = self.writer.content_offset();
        self.state.start_touch(touch_y, base_offset);
        debug!(
            from = "idle",
            to = "touch-tracking",
            anchor = touch_y,
            base_offset,
            "touch started"
        );

        self.unbind_idle_triggers(host);
        self.bind(host, Listener::TouchMove);
        self.bind(host, Listener::TouchEnd);
        true
    }

    /// Touch moved: damped distance from the start point, added to the
    /// offset recorded at touch start.
    pub fn on_touch_move<H: ScrollHost + ?Sized>(
        &mut self,
        host: &mut H,
        event: &mut TouchEvent,
    ) -> Option<ScrollFrame> {
        profile_scope!("on_touch_move");

        if !self.listeners.contains(Listener::TouchMove) {
            return None;
        }
        event.flags.suppress();

        let (anchor_y, base_offset) = self.state.touch_origin()?;
        let touch_y = primary_touch_y(event)?;

        let delta = (touch_y - anchor_y) * TOUCH_DAMPING;
        let m = host.measure();
        Some(self.writer.commit_content_offset(host, base_offset + delta, &m))
    }

    /// Touch ended. Returns true when a touch session was closed.
    pub fn on_touch_end<H: ScrollHost + ?Sized>(
        &mut self,
        host: &mut H,
        event: &mut TouchEvent,
    ) -> bool {
        if !self.listeners.contains(Listener::TouchEnd) {
            return false;
        }
        event.flags.suppress();

        if !self.state.is_touch_tracking() {
            return false;
        }
        self.end_session(host, GestureKind::Touch);
        true
    }

    /// Touch cancelled by the platform; handled exactly like an end.
    pub fn on_touch_cancel<H: ScrollHost + ?Sized>(
        &mut self,
        host: &mut H,
        event: &mut TouchEvent,
    ) -> bool {
        self.on_touch_end(host, event)
    }
}
