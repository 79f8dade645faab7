use std::collections::VecDeque;

use sidescroll::{
    ChildGeometry, Easing, FrameHandle, FrameScheduler, ScrollController, ScrollOptions,
    TimerHandle, TimerScheduler, Viewport,
};

/// A toy host: a frame queue and a timer list driven by a simulated 60fps clock.
#[derive(Debug, Default)]
struct SimHost {
    next_id: u64,
    now_ms: u64,
    frames: VecDeque<FrameHandle>,
    timers: Vec<(TimerHandle, u64)>,
}

impl FrameScheduler for SimHost {
    fn request_frame(&mut self) -> FrameHandle {
        self.next_id += 1;
        let h = FrameHandle::new(self.next_id);
        self.frames.push_back(h);
        h
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        self.frames.retain(|h| *h != handle);
    }
}

impl TimerScheduler for SimHost {
    fn set_timer(&mut self, delay_ms: u64) -> TimerHandle {
        self.next_id += 1;
        let h = TimerHandle::new(self.next_id);
        self.timers.push((h, self.now_ms + delay_ms));
        h
    }

    fn cancel_timer(&mut self, handle: TimerHandle) {
        self.timers.retain(|(h, _)| *h != handle);
    }
}

fn pump(c: &mut ScrollController<SimHost>) {
    while let Some(frame) = c.host_mut().frames.pop_front() {
        let now = c.host().now_ms;
        c.on_frame(frame, now);
        c.host_mut().now_ms += 16;

        let now = c.host().now_ms;
        let due: Vec<_> = c
            .host()
            .timers
            .iter()
            .filter(|(_, at)| *at <= now)
            .map(|(h, _)| *h)
            .collect();
        for timer in due {
            c.host_mut().timers.retain(|(h, _)| *h != timer);
            c.on_timer(timer);
        }

        let s = c.render_state();
        println!(
            "t={now}ms offset={:.1} overflow={}",
            s.scroll_offset,
            s.overflow.as_str()
        );
    }
}

fn main() {
    // Example: a row of nine tabs in a 300px wide strip.
    let options = ScrollOptions::new()
        .with_animation_duration_secs(0.5)
        .with_easing(Easing::EaseOutBack);
    let mut c = match ScrollController::new(SimHost::default(), options) {
        Ok(c) => c,
        Err(err) => {
            eprintln!("bad options: {err}");
            return;
        }
    };

    let children: Vec<_> = (0..9)
        .map(|i| ChildGeometry::new(i as f64 * 120.0, 110.0))
        .collect();
    c.on_layout(Viewport::new(9.0 * 120.0 - 10.0, 300.0), children);

    println!("-- scroll_to_next");
    c.scroll_to_next();
    pump(&mut c);

    println!("-- drag 80px to the left");
    c.on_pointer_down(200.0, 20.0);
    for x in [190.0, 170.0, 140.0, 120.0] {
        c.on_pointer_move(x, 20.0);
        println!(
            "drag={:?} offset={:.1}",
            c.drag_state(),
            c.scroll_offset()
        );
    }
    c.on_pointer_up();

    println!("-- centre on tab 6");
    c.set_center_on(Some(6));
    pump(&mut c);

    println!("-- scroll_to_prev");
    c.scroll_to_prev();
    pump(&mut c);

    c.unmount();
}
