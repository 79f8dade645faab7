//! Scheduling primitives supplied by the host environment.
//!
//! The engine never sleeps or spawns. It asks the host for a frame or a timer and gets back an
//! opaque handle; when the frame/timer fires, the host hands that same handle back
//! (`ScrollController::on_frame` / `ScrollController::on_timer`). Deliveries carrying a handle
//! that was cancelled or superseded are ignored.

/// Opaque handle for one requested animation frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameHandle(u64);

impl FrameHandle {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn raw(self) -> u64 {
        self.0
    }
}

/// Opaque handle for one armed timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimerHandle(u64);

impl TimerHandle {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn raw(self) -> u64 {
        self.0
    }
}

/// "Request next frame" / "cancel scheduled frame".
pub trait FrameScheduler {
    fn request_frame(&mut self) -> FrameHandle;

    /// Cancelling a handle that already fired (or was never issued) must be harmless.
    fn cancel_frame(&mut self, handle: FrameHandle);
}

/// One-shot timers, used for the drag dwell delay.
pub trait TimerScheduler {
    fn set_timer(&mut self, delay_ms: u64) -> TimerHandle;

    /// Cancelling a handle that already fired (or was never issued) must be harmless.
    fn cancel_timer(&mut self, handle: TimerHandle);
}

impl<T: FrameScheduler + ?Sized> FrameScheduler for &mut T {
    fn request_frame(&mut self) -> FrameHandle {
        (**self).request_frame()
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        (**self).cancel_frame(handle);
    }
}

impl<T: TimerScheduler + ?Sized> TimerScheduler for &mut T {
    fn set_timer(&mut self, delay_ms: u64) -> TimerHandle {
        (**self).set_timer(delay_ms)
    }

    fn cancel_timer(&mut self, handle: TimerHandle) {
        (**self).cancel_timer(handle);
    }
}
