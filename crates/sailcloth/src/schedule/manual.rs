use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use super::{FrameHandle, FrameScheduler, Redraw};

#[derive(Debug, Default)]
struct Inner {
    next: u64,
    pending: VecDeque<FrameHandle>,
}

/// Scheduler whose frames fire only when the host pumps them.
///
/// Clones share the pending list: hand one clone to the viewport and keep
/// another to drive it.
///
/// ```ignore
/// let frames = ManualScheduler::new();
/// let mut vp = Viewport::new(surface, frames.clone(), ViewportConfig::default())?;
/// vp.start();
/// frames.run(&mut vp, 60);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ManualScheduler {
    inner: Rc<RefCell<Inner>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of requested frames that have not fired yet.
    pub fn pending(&self) -> usize {
        self.inner.borrow().pending.len()
    }

    /// Total frames requested so far.
    pub fn requested(&self) -> u64 {
        self.inner.borrow().next
    }

    /// Fires the oldest pending frame into `target`.
    ///
    /// Returns the fired handle, or `None` when nothing was pending.
    pub fn step(&self, target: &mut dyn Redraw) -> Option<FrameHandle> {
        let handle = self.inner.borrow_mut().pending.pop_front()?;
        target.redraw();
        Some(handle)
    }

    /// Fires pending frames, including ones requested while firing, until
    /// none remain or `max_frames` have fired. Returns how many fired.
    pub fn run(&self, target: &mut dyn Redraw, max_frames: usize) -> usize {
        let mut fired = 0;
        while fired < max_frames && self.step(target).is_some() {
            fired += 1;
        }
        fired
    }
}

impl FrameScheduler for ManualScheduler {
    fn request_frame(&mut self) -> FrameHandle {
        let mut inner = self.inner.borrow_mut();
        let handle = FrameHandle(inner.next);
        inner.next += 1;
        inner.pending.push_back(handle);
        handle
    }
}
