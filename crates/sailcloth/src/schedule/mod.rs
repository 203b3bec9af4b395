//! Frame scheduling.
//!
//! The host owns the animation-frame primitive. A viewport asks it for a
//! frame through [`FrameScheduler::request_frame`]; when the frame fires the
//! host calls [`Redraw::redraw`] on that viewport. A request cannot be
//! revoked: stopping a viewport only stops it from asking again.
//!
//! Frames are strictly sequential. A viewport requests its next frame from
//! inside `redraw`, or on an explicit `refresh`, never while one is pending.

mod manual;

pub use manual::ManualScheduler;

/// Identifies one frame request.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct FrameHandle(pub u64);

/// Host animation-frame primitive ("call me once before the next repaint").
pub trait FrameScheduler {
    fn request_frame(&mut self) -> FrameHandle;
}

/// Target of a fired frame.
pub trait Redraw {
    fn redraw(&mut self);
}
