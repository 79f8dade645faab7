use crate::{Easing, FrameHandle, FrameScheduler};

/// One tween run: interpolate `from → to` over `duration_ms` along `easing`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tween {
    pub from: f64,
    pub to: f64,
    pub duration_ms: f64,
    pub easing: Easing,
}

impl Tween {
    /// Durations are given in seconds; negative or NaN durations collapse to zero.
    pub fn new(from: f64, to: f64, duration_secs: f64, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration_ms: (duration_secs * 1000.0).max(0.0),
            easing,
        }
    }

    pub fn delta(&self) -> f64 {
        self.to - self.from
    }

    pub fn sample(&self, elapsed_ms: f64) -> f64 {
        self.easing
            .apply(elapsed_ms, self.from, self.delta(), self.duration_ms)
    }

    /// A run keeps ticking while `elapsed_ms <= duration_ms`.
    pub fn is_done(&self, elapsed_ms: f64) -> bool {
        elapsed_ms > self.duration_ms
    }
}

/// Result of delivering a frame to a [`Tweener`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TweenFrame {
    /// The interpolated value for this frame. Another frame has been requested.
    Tick(f64),
    /// The run ran past its duration and was dropped; no frame is pending anymore.
    Finished { to: f64 },
    /// The handle does not belong to the active run (cancelled, superseded, or idle).
    Stale,
}

#[derive(Clone, Copy, Debug)]
struct Run {
    tween: Tween,
    frame: FrameHandle,
    start_ms: Option<u64>,
}

/// Frame-driven tween engine with at most one active run.
///
/// `animate` requests a frame from the scheduler; the host later delivers it through
/// [`Tweener::frame`], which returns the tick value and requests the following frame until the
/// duration has elapsed. The clock starts on the first delivered frame, so the first tick is always
/// the run's `from` value.
#[derive(Clone, Debug, Default)]
pub struct Tweener {
    run: Option<Run>,
}

impl Tweener {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.run.is_some()
    }

    pub fn current(&self) -> Option<&Tween> {
        self.run.as_ref().map(|run| &run.tween)
    }

    pub fn target(&self) -> Option<f64> {
        self.current().map(|tween| tween.to)
    }

    /// The frame the active run is waiting for.
    pub fn pending_frame(&self) -> Option<FrameHandle> {
        self.run.as_ref().map(|run| run.frame)
    }

    /// Cancels any run in progress and starts a new one.
    pub fn animate<S: FrameScheduler + ?Sized>(
        &mut self,
        scheduler: &mut S,
        from: f64,
        to: f64,
        duration_secs: f64,
        easing: Easing,
    ) {
        self.start(scheduler, Tween::new(from, to, duration_secs, easing));
    }

    /// Like [`Tweener::animate`], for a prebuilt run.
    pub fn start<S: FrameScheduler + ?Sized>(&mut self, scheduler: &mut S, tween: Tween) {
        self.stop(scheduler);
        let frame = scheduler.request_frame();
        strace!(
            from = tween.from,
            to = tween.to,
            duration_ms = tween.duration_ms,
            frame = frame.raw(),
            "Tweener::start"
        );
        self.run = Some(Run {
            tween,
            frame,
            start_ms: None,
        });
    }

    /// Cancels the pending frame, if any. No further ticks until the next `animate`.
    pub fn stop<S: FrameScheduler + ?Sized>(&mut self, scheduler: &mut S) {
        if let Some(run) = self.run.take() {
            strace!(frame = run.frame.raw(), "Tweener::stop");
            scheduler.cancel_frame(run.frame);
        }
    }

    /// Delivers a fired frame.
    pub fn frame<S: FrameScheduler + ?Sized>(
        &mut self,
        scheduler: &mut S,
        handle: FrameHandle,
        now_ms: u64,
    ) -> TweenFrame {
        let Some(run) = self.run.as_mut() else {
            strace!(frame = handle.raw(), "Tweener::frame: idle");
            return TweenFrame::Stale;
        };
        if run.frame != handle {
            strace!(
                frame = handle.raw(),
                pending = run.frame.raw(),
                "Tweener::frame: stale handle"
            );
            return TweenFrame::Stale;
        }

        let start_ms = *run.start_ms.get_or_insert(now_ms);
        let elapsed = now_ms.saturating_sub(start_ms) as f64;
        if run.tween.is_done(elapsed) {
            let to = run.tween.to;
            self.run = None;
            return TweenFrame::Finished { to };
        }

        let value = run.tween.sample(elapsed);
        run.frame = scheduler.request_frame();
        TweenFrame::Tick(value)
    }
}
