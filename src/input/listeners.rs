//! Listener bookkeeping - the single record of which subscriptions are live.
//!
//! Every subscribe goes through [`ListenerSet::insert`] and every unsubscribe
//! through [`ListenerSet::remove`]; the host is only called when the set
//! actually changes, so subscriptions are exactly paired.

use std::fmt;

/// An event subscription the engine can ask its host for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Listener {
    /// Press on the handle (idle trigger for dragging)
    HandlePress,
    /// Pointer movement anywhere on the tracking surface
    PointerMove,
    /// Pointer release anywhere on the tracking surface
    PointerRelease,
    /// Pointer leaving the tracking surface (safety net)
    SurfaceLeave,
    /// Touch start on the content (idle trigger for touch tracking)
    TouchStart,
    /// Touch movement on the content
    TouchMove,
    /// Touch end and touch cancel on the content
    TouchEnd,
    /// Wheel rotation over the content
    Wheel,
}

impl Listener {
    pub const ALL: [Listener; 8] = [
        Listener::HandlePress,
        Listener::PointerMove,
        Listener::PointerRelease,
        Listener::SurfaceLeave,
        Listener::TouchStart,
        Listener::TouchMove,
        Listener::TouchEnd,
        Listener::Wheel,
    ];

    /// Listeners that only live for the duration of a gesture session.
    pub const TRANSIENT: [Listener; 4] = [
        Listener::PointerMove,
        Listener::PointerRelease,
        Listener::TouchMove,
        Listener::TouchEnd,
    ];

    /// Returns true for listeners bound only while a session is open
    pub fn is_transient(self) -> bool {
        Self::TRANSIENT.contains(&self)
    }

    const fn bit(self) -> u8 {
        1 << self as u8
    }
}

impl fmt::Display for Listener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Listener::HandlePress => "handle-press",
            Listener::PointerMove => "pointer-move",
            Listener::PointerRelease => "pointer-release",
            Listener::SurfaceLeave => "surface-leave",
            Listener::TouchStart => "touch-start",
            Listener::TouchMove => "touch-move",
            Listener::TouchEnd => "touch-end",
            Listener::Wheel => "wheel",
        };
        f.write_str(name)
    }
}

/// Compact set of live listeners.
#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub struct ListenerSet(u8);

impl ListenerSet {
    pub const fn new() -> Self {
        Self(0)
    }

    #[inline]
    pub fn contains(&self, listener: Listener) -> bool {
        self.0 & listener.bit() != 0
    }

    /// Mark `listener` live. Returns false if it already was.
    #[inline]
    pub fn insert(&mut self, listener: Listener) -> bool {
        let added = !self.contains(listener);
        self.0 |= listener.bit();
        added
    }

    /// Mark `listener` dead. Returns false if it was not live.
    #[inline]
    pub fn remove(&mut self, listener: Listener) -> bool {
        let removed = self.contains(listener);
        self.0 &= !listener.bit();
        removed
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// True if any gesture-scoped listener is live
    pub fn has_transient(&self) -> bool {
        Listener::TRANSIENT.iter().any(|l| self.contains(*l))
    }

    pub fn iter(&self) -> impl Iterator<Item = Listener> + '_ {
        Listener::ALL.into_iter().filter(|l| self.contains(*l))
    }
}

impl fmt::Debug for ListenerSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl FromIterator<Listener> for ListenerSet {
    fn from_iter<I: IntoIterator<Item = Listener>>(iter: I) -> Self {
        let mut set = Self::new();
        for listener in iter {
            set.insert(listener);
        }
        set
    }
}
