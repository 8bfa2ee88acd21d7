//! The `ScrollSync` instance - one per bound panel.
//!
//! Owns the arbiter state, the live listener set and the sync writer. The
//! input handlers live in [`crate::input`] as further `impl ScrollSync`
//! blocks; this file holds construction, the attach/detach lifecycle and the
//! listener plumbing they share.

use crate::error::SettingsResult;
use crate::geometry::ScrollFrame;
use crate::host::ScrollHost;
use crate::input::{GestureKind, InputState, Listener, ListenerSet};
use crate::settings::ScrollSettings;
use crate::sync::SyncWriter;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct ScrollSync {
    pub(crate) settings: ScrollSettings,
    pub(crate) state: InputState,
    pub(crate) listeners: ListenerSet,
    pub(crate) writer: SyncWriter,
    attached: bool,
    bar_active: bool,
}

impl Default for ScrollSync {
    fn default() -> Self {
        Self::new(ScrollSettings::default())
    }
}

impl ScrollSync {
    pub fn new(settings: ScrollSettings) -> Self {
        Self {
            settings,
            state: InputState::Idle,
            listeners: ListenerSet::new(),
            writer: SyncWriter::new(),
            attached: false,
            bar_active: false,
        }
    }

    /// Validate `settings` and build an instance from them.
    pub fn from_settings(settings: ScrollSettings) -> SettingsResult<Self> {
        settings.validate()?;
        Ok(Self::new(settings))
    }

    pub fn settings(&self) -> &ScrollSettings {
        &self.settings
    }

    pub fn state(&self) -> InputState {
        self.state
    }

    /// Last committed frame
    pub fn frame(&self) -> ScrollFrame {
        self.writer.frame()
    }

    pub fn live_listeners(&self) -> ListenerSet {
        self.listeners
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// True when the handle-drag path was activated by [`Self::attach`]
    pub fn bar_active(&self) -> bool {
        self.bar_active
    }

    // ========================================================================
    // Lifecycle
    // ========================================================================

    /// Bind the idle-state listeners to `host`.
    ///
    /// The drag path is only activated when the bar is enabled and a bar
    /// exists, generating one first if allowed. Wheel and touch do not depend
    /// on the bar.
    pub fn attach<H: ScrollHost + ?Sized>(&mut self, host: &mut H) {
        if self.attached {
            debug!("attach ignored: already attached");
            return;
        }

        self.bar_active = self.settings.bar_enable && self.resolve_bar(host);
        self.state.reset();
        self.writer.invalidate();

        self.bind_idle_triggers(host);
        if self.settings.wheel_enable {
            self.bind(host, Listener::Wheel);
        }
        self.bind(host, Listener::SurfaceLeave);
        self.attached = true;

        debug!(
            bar = self.bar_active,
            touch = self.settings.touch_enable,
            wheel = self.settings.wheel_enable,
            listeners = ?self.listeners,
            "attached"
        );
    }

    /// Unbind every live listener and drop any open gesture session.
    pub fn detach<H: ScrollHost + ?Sized>(&mut self, host: &mut H) {
        if !self.attached {
            debug!("detach ignored: not attached");
            return;
        }

        let live: Vec<Listener> = self.listeners.iter().collect();
        for listener in live {
            self.unbind(host, listener);
        }
        if !self.state.is_idle() {
            debug!(from = %self.state, "session discarded on detach");
        }
        self.state.reset();
        self.attached = false;
        self.bar_active = false;
        debug!("detached");
    }

    /// Re-measure and re-commit the current progress into the possibly
    /// changed geometry. Returns `None` when not attached.
    pub fn refresh<H: ScrollHost + ?Sized>(&mut self, host: &mut H) -> Option<ScrollFrame> {
        if !self.attached {
            debug!("refresh ignored: not attached");
            return None;
        }
        let m = host.measure();
        let progress = self.writer.frame().progress;
        Some(self.writer.commit(host, progress, &m))
    }

    /// Jump to `progress` (clamped into `[0, 1]`). Ignored while detached or
    /// while a gesture session is open.
    pub fn scroll_to<H: ScrollHost + ?Sized>(
        &mut self,
        host: &mut H,
        progress: f32,
    ) -> Option<ScrollFrame> {
        if !self.attached {
            debug!("scroll_to ignored: not attached");
            return None;
        }
        if !self.state.is_idle() {
            debug!(state = %self.state, "scroll_to ignored during gesture");
            return None;
        }
        let m = host.measure();
        Some(self.writer.commit(host, progress, &m))
    }

    fn resolve_bar<H: ScrollHost + ?Sized>(&self, host: &mut H) -> bool {
        if host.has_bar() {
            return true;
        }
        if self.settings.auto_generate {
            let generated = host.generate_bar(self.settings.roles());
            debug!(generated, "bar missing, generation requested");
            return generated;
        }
        debug!("bar missing and auto_generate disabled, drag path inactive");
        false
    }

    // ========================================================================
    // Listener plumbing
    // ========================================================================

    /// Subscribe `listener` unless it is already live.
    pub(crate) fn bind<H: ScrollHost + ?Sized>(&mut self, host: &mut H, listener: Listener) {
        if self.listeners.insert(listener) {
            host.subscribe(listener);
        }
    }

    /// Unsubscribe `listener` if it is live.
    pub(crate) fn unbind<H: ScrollHost + ?Sized>(&mut self, host: &mut H, listener: Listener) {
        if self.listeners.remove(listener) {
            host.unsubscribe(listener);
        }
    }

    /// Re-enable the start triggers of every enabled modality.
    pub(crate) fn bind_idle_triggers<H: ScrollHost + ?Sized>(&mut self, host: &mut H) {
        if self.bar_active {
            self.bind(host, Listener::HandlePress);
        }
        if self.settings.touch_enable {
            self.bind(host, Listener::TouchStart);
        }
    }

    /// Disable every start trigger while a session owns input.
    pub(crate) fn unbind_idle_triggers<H: ScrollHost + ?Sized>(&mut self, host: &mut H) {
        self.unbind(host, Listener::HandlePress);
        self.unbind(host, Listener::TouchStart);
    }

    /// Close the open session of `kind`: drop its transient listeners,
    /// return to Idle and re-enable the start triggers.
    pub(crate) fn end_session<H: ScrollHost + ?Sized>(&mut self, host: &mut H, kind: GestureKind) {
        match kind {
            GestureKind::Drag => {
                self.unbind(host, Listener::PointerMove);
                self.unbind(host, Listener::PointerRelease);
            }
            GestureKind::Touch => {
                self.unbind(host, Listener::TouchMove);
                self.unbind(host, Listener::TouchEnd);
            }
        }
        debug!(from = %self.state, to = "idle", gesture = %kind, "session ended");
        self.state.reset();
        self.bind_idle_triggers(host);
    }
}
