//! Sync writer - the only code that writes content offset and handle position.
//!
//! Both values are always derived from one progress value and written
//! together. The last written values are remembered so that repeating a
//! commit does not touch the host again.

use crate::geometry::{Measurements, ScrollFrame};
use crate::host::ScrollHost;
use tracing::trace;

#[derive(Debug, Clone, Default)]
pub struct SyncWriter {
    /// Last committed frame
    frame: ScrollFrame,
    /// Values last written to the host, `None` until the first write
    written_offset: Option<f32>,
    written_position: Option<f32>,
}

impl SyncWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last committed frame.
    pub fn frame(&self) -> ScrollFrame {
        self.frame
    }

    /// Content offset of the last commit.
    pub fn content_offset(&self) -> f32 {
        self.frame.content_offset
    }

    /// Handle position of the last commit.
    pub fn handle_position(&self) -> f32 {
        self.frame.handle_position
    }

    /// Write both projections of `progress` to the host.
    ///
    /// When the content fits inside the viewport only the handle moves; the
    /// content stays pinned at 0.
    /// No observer sees one value updated without the other: both writes
    /// happen inside this call.
    pub fn commit<H: ScrollHost + ?Sized>(
        &mut self,
        host: &mut H,
        progress: f32,
        m: &Measurements,
    ) -> ScrollFrame {
        self.commit_frame(host, ScrollFrame::from_progress(progress, m), m)
    }

    fn commit_frame<H: ScrollHost + ?Sized>(
        &mut self,
        host: &mut H,
        frame: ScrollFrame,
        m: &Measurements,
    ) -> ScrollFrame {
        if self.written_position != Some(frame.handle_position) {
            host.set_handle_position(frame.handle_position);
            self.written_position = Some(frame.handle_position);
        }
        // Unscrollable content is never moved, except back to 0 if it was moved before
        let may_write_offset = m.is_scrollable() || self.written_offset.is_some();
        if may_write_offset && self.written_offset != Some(frame.content_offset) {
            host.set_content_offset(frame.content_offset);
            self.written_offset = Some(frame.content_offset);
        }

        trace!(
            progress = frame.progress,
            offset = frame.content_offset,
            position = frame.handle_position,
            "commit"
        );
        self.frame = frame;
        frame
    }

    /// Commit a content offset and the handle position of its progress.
    pub fn commit_content_offset<H: ScrollHost + ?Sized>(
        &mut self,
        host: &mut H,
        offset: f32,
        m: &Measurements,
    ) -> ScrollFrame {
        self.commit_frame(host, ScrollFrame::from_content_offset(offset, m), m)
    }

    /// Commit a handle position and the content offset of its progress.
    pub fn commit_handle_position<H: ScrollHost + ?Sized>(
        &mut self,
        host: &mut H,
        position: f32,
        m: &Measurements,
    ) -> ScrollFrame {
        self.commit_frame(host, ScrollFrame::from_handle_position(position, m), m)
    }

    /// Forget what was written so the next commit writes unconditionally.
    pub fn invalidate(&mut self) {
        self.written_offset = None;
        self.written_position = None;
    }
}
