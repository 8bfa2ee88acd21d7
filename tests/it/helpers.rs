//! Test helpers and builders for reducing boilerplate in tests.
//!
//! This module provides:
//! - `MockHost` - a `ScrollHost` that records every write and subscription
//! - `TestSurfaceBuilder` - builder for hosts with given element lengths
//! - Event shorthands like `press()`, `touch()` and `wheel()`

use scroll_sync::{
    LeaveEvent, Listener, ListenerSet, Measurements, PointerEvent, ScrollHost, ScrollSettings,
    ScrollSync, StructureRoles, TouchEvent, WheelDelta, WheelEvent,
};

// ============================================================================
// MockHost
// ============================================================================

/// Recording host. Panics are avoided so that misuse shows up as counters
/// the tests can assert on.
#[derive(Debug, Clone, Default)]
pub struct MockHost {
    pub measurements: Measurements,
    pub content_offset: f32,
    pub handle_position: f32,
    /// Number of `set_content_offset` calls
    pub offset_writes: usize,
    /// Number of `set_handle_position` calls
    pub position_writes: usize,
    /// Currently subscribed listeners
    pub live: ListenerSet,
    /// Every subscribe (true) and unsubscribe (false), in order
    pub log: Vec<(Listener, bool)>,
    /// Subscribe calls for a listener that was already subscribed
    pub double_subscribes: usize,
    /// Unsubscribe calls for a listener that was not subscribed
    pub stray_unsubscribes: usize,
    pub bar_present: bool,
    pub can_generate_bar: bool,
    /// Role names passed to `generate_bar`
    pub generated_with: Option<(String, String, String)>,
}

impl MockHost {
    pub fn subscribe_count(&self) -> usize {
        self.log.iter().filter(|(_, on)| *on).count()
    }

    pub fn unsubscribe_count(&self) -> usize {
        self.log.iter().filter(|(_, on)| !*on).count()
    }

    /// True when every subscription call was well paired
    pub fn is_clean(&self) -> bool {
        self.double_subscribes == 0 && self.stray_unsubscribes == 0
    }

    pub fn set_content_length(&mut self, length: f32) {
        self.measurements.content_length = length;
    }
}

impl ScrollHost for MockHost {
    fn measure(&self) -> Measurements {
        self.measurements
    }

    fn set_content_offset(&mut self, offset: f32) {
        self.content_offset = offset;
        self.offset_writes += 1;
    }

    fn set_handle_position(&mut self, position: f32) {
        self.handle_position = position;
        self.position_writes += 1;
    }

    fn subscribe(&mut self, listener: Listener) {
        if !self.live.insert(listener) {
            self.double_subscribes += 1;
        }
        self.log.push((listener, true));
    }

    fn unsubscribe(&mut self, listener: Listener) {
        if !self.live.remove(listener) {
            self.stray_unsubscribes += 1;
        }
        self.log.push((listener, false));
    }

    fn has_bar(&self) -> bool {
        self.bar_present
    }

    fn generate_bar(&mut self, roles: StructureRoles<'_>) -> bool {
        self.generated_with = Some((
            roles.bar.to_string(),
            roles.handle.to_string(),
            roles.content.to_string(),
        ));
        if self.can_generate_bar {
            self.bar_present = true;
        }
        self.bar_present
    }
}

// ============================================================================
// TestSurfaceBuilder
// ============================================================================

/// Builder for mock hosts.
///
/// # Example
/// ```ignore
/// let host = TestSurfaceBuilder::new()
///     .with_content(1000.0)
///     .with_viewport(300.0)
///     .without_bar()
///     .build();
/// ```
pub struct TestSurfaceBuilder {
    measurements: Measurements,
    bar_present: bool,
    can_generate_bar: bool,
}

impl Default for TestSurfaceBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestSurfaceBuilder {
    /// Track 200, handle 60, content 1000, viewport 300.
    pub fn new() -> Self {
        Self {
            measurements: Measurements::new(1000.0, 300.0, 200.0, 60.0),
            bar_present: true,
            can_generate_bar: false,
        }
    }

    pub fn with_content(mut self, length: f32) -> Self {
        self.measurements.content_length = length;
        self
    }

    pub fn with_viewport(mut self, length: f32) -> Self {
        self.measurements.viewport_length = length;
        self
    }

    pub fn with_track(mut self, length: f32) -> Self {
        self.measurements.track_length = length;
        self
    }

    pub fn with_handle(mut self, length: f32) -> Self {
        self.measurements.handle_length = length;
        self
    }

    /// Host without bar or handle elements
    pub fn without_bar(mut self) -> Self {
        self.bar_present = false;
        self
    }

    /// Host that can build a bar when asked
    pub fn generatable(mut self) -> Self {
        self.can_generate_bar = true;
        self
    }

    pub fn build(self) -> MockHost {
        MockHost {
            measurements: self.measurements,
            bar_present: self.bar_present,
            can_generate_bar: self.can_generate_bar,
            ..Default::default()
        }
    }
}

/// Reference surface, attached with default settings.
pub fn attached_reference() -> (ScrollSync, MockHost) {
    attached_with(ScrollSettings::default(), TestSurfaceBuilder::new().build())
}

pub fn attached_with(settings: ScrollSettings, mut host: MockHost) -> (ScrollSync, MockHost) {
    scroll_sync::logging::init_test_tracing();
    let mut sync = ScrollSync::from_settings(settings).expect("valid settings");
    sync.attach(&mut host);
    (sync, host)
}

// ============================================================================
// Event shorthands
// ============================================================================

pub fn pointer(y: f32) -> PointerEvent {
    PointerEvent::new(y)
}

pub fn touch(y: f32) -> TouchEvent {
    TouchEvent::at(y)
}

pub fn wheel(delta: f32) -> WheelEvent {
    WheelEvent::new(WheelDelta::WheelDelta(delta))
}

pub fn leave() -> LeaveEvent {
    LeaveEvent::default()
}

/// Only the idle start triggers plus the always-on listeners.
pub fn idle_listeners() -> ListenerSet {
    [
        Listener::HandlePress,
        Listener::TouchStart,
        Listener::Wheel,
        Listener::SurfaceLeave,
    ]
    .into_iter()
    .collect()
}

pub fn assert_close(actual: f32, expected: f32) {
    assert!(
        (actual - expected).abs() < 1e-3,
        "expected {expected}, got {actual}"
    );
}
