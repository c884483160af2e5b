//! Display-facing host services

use crate::geometry::Size;

/// Provider of the current drawable area
///
/// The area may shrink or grow at runtime (e.g. when system UI obstructs
/// part of the screen), so callers must query it each time rather than
/// caching it.
pub trait DisplayBounds {
    /// Current drawable width and height in pixels
    fn bounds(&self) -> Size;
}

/// Redraw request primitive
pub trait RedrawRequest {
    /// Schedule a render pass
    fn mark_dirty(&mut self);
}
