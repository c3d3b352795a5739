//! Tear-free hand-off of frames from the sort worker to any number of readers.
//!
//! The worker builds a complete [`Frame`] and swaps it in with a single atomic
//! pointer store. Readers load the current pointer without taking a lock, so a
//! render loop never waits on the worker and never sees a frame whose values and
//! highlights disagree. Readers that poll slower than the worker publishes
//! simply skip intermediate frames.

use std::sync::Arc;

use arc_swap::ArcSwapOption;

use crate::frame::Frame;

/// Latest-value slot shared between one writer (the sort worker) and its readers.
#[derive(Debug, Default)]
pub struct StepPublisher {
    latest: ArcSwapOption<Frame>,
}

impl StepPublisher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the current frame.
    ///
    /// Only the task that owns this publisher calls this, and it publishes frames
    /// in step order, so successive [`StepPublisher::latest`] calls never go
    /// backwards.
    pub fn publish(&self, frame: Frame) {
        debug_assert!(
            (*self.latest.load()).as_ref().is_none_or(|prev| prev.step <= frame.step),
            "frames must be published in step order"
        );
        self.latest.store(Some(Arc::new(frame)));
    }

    /// The most recently published frame, or `None` if nothing was published yet.
    #[must_use]
    pub fn latest(&self) -> Option<Arc<Frame>> {
        self.latest.load_full()
    }
}
