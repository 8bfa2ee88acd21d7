//! Geometry mapper - conversions between handle, progress and content space.
//!
//! All functions are pure. Every result is re-clamped into its legal range
//! before it is returned, and no function divides by a non-positive span.

use serde::{Deserialize, Serialize};

/// Measured lengths of the four collaborating elements, read fresh from the
/// host on every event.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Measurements {
    /// Total length of the scrollable content
    pub content_length: f32,
    /// Visible length of the viewport (mask)
    pub viewport_length: f32,
    /// Length of the track the handle moves along
    pub track_length: f32,
    /// Length of the handle itself
    pub handle_length: f32,
}

impl Measurements {
    pub fn new(
        content_length: f32,
        viewport_length: f32,
        track_length: f32,
        handle_length: f32,
    ) -> Self {
        Self {
            content_length,
            viewport_length,
            track_length,
            handle_length,
        }
    }

    /// Distance the handle can travel, `track - handle`, never negative.
    #[inline]
    pub fn handle_span(&self) -> f32 {
        positive_span(self.track_length - self.handle_length)
    }

    /// Distance the content can travel, `content - viewport`, never negative.
    #[inline]
    pub fn content_span(&self) -> f32 {
        positive_span(self.content_length - self.viewport_length)
    }

    /// True when the content is longer than the viewport.
    #[inline]
    pub fn is_scrollable(&self) -> bool {
        self.content_span() > 0.0
    }

    /// True when the handle has room to move along the track.
    #[inline]
    pub fn is_draggable(&self) -> bool {
        self.handle_span() > 0.0
    }
}

/// One committed scroll state: both projections of the same progress.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScrollFrame {
    /// Normalized progress in `[0, 1]`
    pub progress: f32,
    /// Content offset in `[-(content - viewport), 0]`
    pub content_offset: f32,
    /// Handle position in `[0, track - handle]`
    pub handle_position: f32,
}

impl ScrollFrame {
    /// Derive both projections from a progress value.
    pub fn from_progress(progress: f32, m: &Measurements) -> Self {
        let progress = clamp_progress(progress);
        Self {
            progress,
            content_offset: content_offset_from_progress(progress, m),
            handle_position: handle_position_from_progress(progress, m),
        }
    }

    /// Derive the frame for a content offset, keeping the clamped offset
    /// itself rather than its round trip through progress.
    pub fn from_content_offset(offset: f32, m: &Measurements) -> Self {
        let progress = progress_from_content_offset(offset, m);
        Self {
            progress,
            content_offset: if m.is_scrollable() {
                clamp_content_offset(offset, m) + 0.0
            } else {
                0.0
            },
            handle_position: handle_position_from_progress(progress, m),
        }
    }

    /// Derive the frame for a handle position, keeping the clamped position.
    pub fn from_handle_position(position: f32, m: &Measurements) -> Self {
        let progress = progress_from_handle_position(position, m);
        Self {
            progress,
            content_offset: content_offset_from_progress(progress, m),
            handle_position: clamp_handle_position(position, m),
        }
    }
}

fn positive_span(span: f32) -> f32 {
    if span.is_finite() && span > 0.0 { span } else { 0.0 }
}

/// Clamp into `[0, 1]`, mapping NaN to 0.
#[inline]
pub fn clamp_progress(progress: f32) -> f32 {
    if progress.is_nan() {
        0.0
    } else {
        progress.clamp(0.0, 1.0)
    }
}

/// Clamp a handle position into `[0, track - handle]`.
#[inline]
pub fn clamp_handle_position(position: f32, m: &Measurements) -> f32 {
    if position.is_nan() {
        return 0.0;
    }
    position.clamp(0.0, m.handle_span())
}

/// Clamp a content offset into `[-(content - viewport), 0]`.
#[inline]
pub fn clamp_content_offset(offset: f32, m: &Measurements) -> f32 {
    if offset.is_nan() {
        return 0.0;
    }
    offset.clamp(-m.content_span(), 0.0)
}

/// `pos / (track - handle)`, clamped. A handle that fills the track yields 0.
pub fn progress_from_handle_position(position: f32, m: &Measurements) -> f32 {
    let span = m.handle_span();
    if span <= 0.0 {
        return 0.0;
    }
    clamp_progress(clamp_handle_position(position, m) / span)
}

/// `|offset| / (content - viewport)`, clamped. Unscrollable content yields 0.
pub fn progress_from_content_offset(offset: f32, m: &Measurements) -> f32 {
    let span = m.content_span();
    if span <= 0.0 {
        return 0.0;
    }
    clamp_progress(clamp_content_offset(offset, m).abs() / span)
}

/// `-(content - viewport) * p`, or 0 when there is nothing to scroll.
pub fn content_offset_from_progress(progress: f32, m: &Measurements) -> f32 {
    let span = m.content_span();
    if span <= 0.0 {
        return 0.0;
    }
    // `+ 0.0` folds -0.0 into 0.0
    let offset = -(span * clamp_progress(progress));
    clamp_content_offset(offset, m) + 0.0
}

/// `(track - handle) * p`.
pub fn handle_position_from_progress(progress: f32, m: &Measurements) -> f32 {
    clamp_handle_position(m.handle_span() * clamp_progress(progress), m)
}

/// `(track - handle) * (|offset| / (content - viewport))`, with the same
/// zero-range guard as [`progress_from_content_offset`].
pub fn handle_position_from_content_offset(offset: f32, m: &Measurements) -> f32 {
    handle_position_from_progress(progress_from_content_offset(offset, m), m)
}
