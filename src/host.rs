//! The capabilities a UI environment lends to the engine.
//!
//! The engine never looks up elements or talks to a toolkit directly. A host
//! wraps the content panel, viewport, track and handle, and maps the engine's
//! [`Listener`] subscriptions onto whatever event mechanism it has.

use crate::geometry::Measurements;
use crate::input::Listener;
use crate::settings::StructureRoles;

pub trait ScrollHost {
    /// Measure content, viewport, track and handle lengths.
    fn measure(&self) -> Measurements;

    /// Apply a vertical translation to the content panel.
    fn set_content_offset(&mut self, offset: f32);

    /// Move the handle along its track.
    fn set_handle_position(&mut self, position: f32);

    /// Start delivering events for `listener` to the engine.
    fn subscribe(&mut self, listener: Listener);

    /// Stop delivering events for `listener`.
    fn unsubscribe(&mut self, listener: Listener);

    /// True when both the bar (track) and its handle exist.
    fn has_bar(&self) -> bool;

    /// Build bar and handle markup using the given role names.
    /// Returns true when a usable bar exists afterwards.
    fn generate_bar(&mut self, roles: StructureRoles<'_>) -> bool {
        let _ = roles;
        false
    }
}
