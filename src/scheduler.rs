//! Frame scheduling capability.
//!
//! The engine never drives time itself: the host injects a scheduler, the
//! engine requests frames, and the host calls
//! [`crate::input::Viewport::on_frame`] when a requested frame is granted.
//! This keeps all physics deterministic under test; the bundled
//! [`ManualScheduler`] stands in for real animation-frame timing.

use std::cell::RefCell;
use std::rc::Rc;

/// Opaque handle for one requested animation frame.
pub type FrameHandle = u64;

/// A host-provided source of animation frames.
pub trait FrameScheduler {
    /// Request one future frame; the handle identifies the grant.
    fn request_frame(&mut self) -> FrameHandle;

    /// Cancel a previously requested frame. Cancelling an already granted
    /// or unknown handle is a no-op.
    fn cancel_frame(&mut self, handle: FrameHandle);
}

#[derive(Default)]
struct ManualInner {
    next: FrameHandle,
    pending: Vec<FrameHandle>,
}

/// A deterministic scheduler driven by hand.
///
/// Cloning shares the underlying queue, so a test can keep one clone while
/// the viewport owns another and drain pending frames between assertions.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    inner: Rc<RefCell<ManualInner>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take all currently pending frame handles, leaving the queue empty.
    pub fn take_pending(&self) -> Vec<FrameHandle> {
        std::mem::take(&mut self.inner.borrow_mut().pending)
    }

    pub fn has_pending(&self) -> bool {
        !self.inner.borrow().pending.is_empty()
    }
}

impl FrameScheduler for ManualScheduler {
    fn request_frame(&mut self) -> FrameHandle {
        let mut inner = self.inner.borrow_mut();
        inner.next += 1;
        let handle = inner.next;
        inner.pending.push(handle);
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        self.inner.borrow_mut().pending.retain(|&h| h != handle);
    }
}
