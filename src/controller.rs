use alloc::vec::Vec;

use crate::{
    ChildGeometry, DragState, FrameHandle, FrameScheduler, Layout, OptionsError, OverflowSide,
    PointerPosition, RenderState, ScrollOptions, TimerHandle, TimerScheduler, TweenFrame, Tweener,
    Viewport,
};

/// The scroll state machine of a horizontal drag-scroll container.
///
/// It owns the authoritative scroll offset and reconciles three writers: pointer drags,
/// native scroll notifications (adopted only while the pointer is pressed), and tween ticks from
/// programmatic seeks. The host drives it by forwarding events:
/// - `on_layout` after each layout pass
/// - `on_pointer_*` / `on_native_scroll` for input
/// - `on_frame` / `on_timer` when a frame or timer it scheduled fires
///
/// and reads [`ScrollController::render_state`] on each render pass.
#[derive(Debug)]
pub struct ScrollController<H> {
    host: H,
    options: ScrollOptions,
    tweener: Tweener,
    layout: Option<Layout>,

    scroll_offset: f64,
    overflow: OverflowSide,

    drag: DragState,
    drag_travel: f64,
    pointer_anchor: PointerPosition,
    last_delta: PointerPosition,
    dwell_timer: Option<TimerHandle>,

    center_on: Option<usize>,
    last_notified: Option<RenderState>,
}

impl<H: FrameScheduler + TimerScheduler> ScrollController<H> {
    /// Validates `options` and creates an unmeasured controller at offset 0.
    pub fn new(host: H, options: ScrollOptions) -> Result<Self, OptionsError> {
        options.validate()?;
        sdebug!(
            duration_secs = options.animation_duration_secs,
            drag_threshold_px = options.drag_threshold_px,
            drag_dwell_ms = options.drag_dwell_ms,
            "ScrollController::new"
        );
        Ok(Self {
            host,
            options,
            tweener: Tweener::new(),
            layout: None,
            scroll_offset: 0.0,
            overflow: OverflowSide::None,
            drag: DragState::Idle,
            drag_travel: 0.0,
            pointer_anchor: PointerPosition::default(),
            last_delta: PointerPosition::default(),
            dwell_timer: None,
            center_on: None,
            last_notified: None,
        })
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn options(&self) -> &ScrollOptions {
        &self.options
    }

    pub fn scroll_offset(&self) -> f64 {
        self.scroll_offset
    }

    /// `scroll_width - client_width` (never negative), or 0 before the first layout.
    pub fn max_scroll_offset(&self) -> f64 {
        self.layout
            .as_ref()
            .map_or(0.0, |layout| layout.viewport.max_scroll_offset())
    }

    pub fn overflow_side(&self) -> OverflowSide {
        self.overflow
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    /// True once a press turned into a genuine scroll gesture.
    pub fn is_dragging(&self) -> bool {
        self.drag == DragState::Dragging
    }

    pub fn is_animating(&self) -> bool {
        self.tweener.is_running()
    }

    pub fn is_measured(&self) -> bool {
        self.layout.is_some()
    }

    pub fn layout(&self) -> Option<&Layout> {
        self.layout.as_ref()
    }

    pub fn viewport(&self) -> Option<Viewport> {
        self.layout.as_ref().map(|layout| layout.viewport)
    }

    /// Pointer movement between the last two `on_pointer_move` calls.
    pub fn last_delta(&self) -> PointerPosition {
        self.last_delta
    }

    /// The index last requested through [`ScrollController::set_center_on`].
    pub fn center_on(&self) -> Option<usize> {
        self.center_on
    }

    pub fn render_state(&self) -> RenderState {
        RenderState {
            scroll_offset: self.scroll_offset,
            overflow: self.overflow,
            is_dragging: self.is_dragging(),
            show_overflow_indicators: self.options.show_overflow_indicators,
        }
    }

    /// Stores the geometry snapshot of the current layout pass.
    ///
    /// The offset is re-clamped to the new bounds and the overflow side re-derived.
    pub fn on_layout(&mut self, viewport: Viewport, children: Vec<ChildGeometry>) {
        let viewport = Viewport::new(
            sanitize_extent(viewport.scroll_width),
            sanitize_extent(viewport.client_width),
        );
        strace!(
            scroll_width = viewport.scroll_width,
            client_width = viewport.client_width,
            children = children.len(),
            "ScrollController::on_layout"
        );
        self.layout = Some(Layout { viewport, children });
        self.set_offset(self.scroll_offset);
    }

    /// Tears the controller down: cancels the pending tween frame and the dwell timer, ends any
    /// gesture and forgets the geometry.
    pub fn unmount(&mut self) {
        sdebug!("ScrollController::unmount");
        self.tweener.stop(&mut self.host);
        self.cancel_dwell_timer();
        self.drag = DragState::Idle;
        self.layout = None;
        self.scroll_offset = 0.0;
        self.refresh();
    }

    /// Animates from the current offset to `target` (clamped). No-op before the first layout.
    pub fn scroll_to(&mut self, target: f64) {
        if !self.is_measured() {
            strace!(target_offset = target, "scroll_to: not measured");
            return;
        }
        if target.is_nan() {
            swarn!("scroll_to: NaN target ignored");
            return;
        }
        let to = self.clamp_offset(target);
        self.tweener.animate(
            &mut self.host,
            self.scroll_offset,
            to,
            self.options.animation_duration_secs,
            self.options.easing,
        );
    }

    pub fn scroll_by(&mut self, delta: f64) {
        self.scroll_to(self.scroll_offset + delta);
    }

    /// Applies `target` (clamped) immediately, cancelling any tween. No-op before the first layout.
    pub fn jump_to(&mut self, target: f64) {
        if !self.is_measured() || target.is_nan() {
            return;
        }
        self.tweener.stop(&mut self.host);
        self.set_offset(target);
    }

    pub fn scroll_to_element(&mut self, child: &ChildGeometry) {
        self.scroll_to(child.offset_left);
    }

    /// Scrolls the minimum distance that brings `child` into view.
    ///
    /// A child cut off on the left is aligned to the left edge. A child cut off on the right is
    /// revealed by exactly its overflow plus `edge_offset`. A fully visible child is left alone.
    pub fn scroll_to_view(&mut self, child: &ChildGeometry, edge_offset: f64) {
        let Some(viewport) = self.viewport() else {
            return;
        };
        let left_bound = self.scroll_offset;
        let right_bound = left_bound + viewport.client_width;
        if child.offset_left < left_bound {
            self.scroll_to(child.offset_left);
        } else if child.right() > right_bound {
            let overflow = child.right() - right_bound;
            self.scroll_to(left_bound + overflow + edge_offset);
        }
    }

    /// Aligns the child's midpoint with the viewport's midpoint, even when the child is wider than
    /// the viewport.
    pub fn scroll_to_center_on(&mut self, child: &ChildGeometry) {
        let Some(viewport) = self.viewport() else {
            return;
        };
        let inset = (child.offset_width - viewport.client_width) / 2.0;
        self.scroll_to(child.offset_left + inset);
    }

    pub fn scroll_to_center_on_index(&mut self, index: usize) {
        let Some(child) = self.child(index) else {
            strace!(index, "scroll_to_center_on_index: out of range");
            return;
        };
        self.scroll_to_center_on(&child);
    }

    /// Reacts to an external selection change by centring the newly active child.
    pub fn set_center_on(&mut self, index: Option<usize>) {
        self.center_on = index;
        if let Some(index) = index {
            self.scroll_to_center_on_index(index);
        }
    }

    pub fn child(&self, index: usize) -> Option<ChildGeometry> {
        self.layout
            .as_ref()
            .and_then(|layout| layout.children.get(index))
            .copied()
    }

    /// The first child, left to right, whose right edge lies past the visible window.
    pub fn next_hidden_child(&self) -> Option<(usize, ChildGeometry)> {
        let layout = self.layout.as_ref()?;
        let right_bound = self.scroll_offset + layout.viewport.client_width;
        layout
            .children
            .iter()
            .enumerate()
            .find(|(_, child)| child.right() > right_bound)
            .map(|(index, child)| (index, *child))
    }

    /// The first child, right to left, whose left edge lies before the visible window.
    pub fn prev_hidden_child(&self) -> Option<(usize, ChildGeometry)> {
        let layout = self.layout.as_ref()?;
        let left_bound = self.scroll_offset;
        layout
            .children
            .iter()
            .enumerate()
            .rev()
            .find(|(_, child)| child.offset_left < left_bound)
            .map(|(index, child)| (index, *child))
    }

    pub fn scroll_to_next(&mut self) {
        if let Some((_, child)) = self.next_hidden_child() {
            self.scroll_to_view(&child, self.options.edge_bias_px);
        }
    }

    pub fn scroll_to_prev(&mut self) {
        if let Some((_, child)) = self.prev_hidden_child() {
            self.scroll_to_view(&child, -self.options.edge_bias_px);
        }
    }

    /// Arms a gesture: records the press point, stops any tween so the drag starts from the
    /// offset currently on screen, and starts the dwell timer.
    pub fn on_pointer_down(&mut self, x: f64, y: f64) {
        if !x.is_finite() || !y.is_finite() {
            swarn!(x, y, "on_pointer_down: non-finite coordinates ignored");
            return;
        }
        self.tweener.stop(&mut self.host);
        self.cancel_dwell_timer();
        self.pointer_anchor = PointerPosition::new(x, y);
        self.last_delta = PointerPosition::default();
        self.drag_travel = 0.0;
        self.drag = DragState::Armed;
        self.dwell_timer = Some(self.host.set_timer(self.options.drag_dwell_ms));
        strace!(x, y, offset = self.scroll_offset, "drag: idle -> armed");
        self.notify();
    }

    /// Moves the content with the pointer while a gesture is armed or dragging.
    ///
    /// Offsets follow the frame-to-frame delta. The drag threshold applies to the summed horizontal
    /// travel of the gesture, so a back-and-forth jiggle counts too.
    pub fn on_pointer_move(&mut self, x: f64, y: f64) {
        if !self.drag.is_pressed() {
            return;
        }
        if !x.is_finite() || !y.is_finite() {
            swarn!(x, y, "on_pointer_move: non-finite coordinates ignored");
            return;
        }
        self.tweener.stop(&mut self.host);

        let delta = PointerPosition::new(x - self.pointer_anchor.x, y - self.pointer_anchor.y);
        self.last_delta = delta;
        self.pointer_anchor = PointerPosition::new(x, y);

        self.drag_travel += abs(delta.x);
        if self.drag == DragState::Armed && self.drag_travel >= self.options.drag_threshold_px {
            self.cancel_dwell_timer();
            self.drag = DragState::Dragging;
            strace!(travel = self.drag_travel, "drag: armed -> dragging (threshold)");
        }

        self.set_offset(self.scroll_offset - delta.x);
    }

    pub fn on_pointer_up(&mut self) {
        self.end_gesture();
    }

    /// Ends the gesture only when the pointer left to nowhere (no related target), i.e. it left
    /// the window rather than moving between elements.
    pub fn on_pointer_leave_window(&mut self, has_related_target: bool) {
        if has_related_target {
            return;
        }
        self.end_gesture();
    }

    /// Delivers a fired timer. Only the current dwell timer has an effect.
    pub fn on_timer(&mut self, handle: TimerHandle) {
        if self.dwell_timer != Some(handle) {
            strace!(timer = handle.raw(), "on_timer: stale handle");
            return;
        }
        self.dwell_timer = None;
        if self.drag == DragState::Armed {
            self.drag = DragState::Dragging;
            strace!("drag: armed -> dragging (dwell)");
            self.notify();
        }
    }

    /// The surface reported a new scroll position.
    ///
    /// While the pointer is pressed this is the echo of the drag's own writes and is adopted;
    /// otherwise only the overflow side is re-derived.
    pub fn on_native_scroll(&mut self, offset: f64) {
        if self.drag.is_pressed() && !offset.is_nan() {
            self.tweener.stop(&mut self.host);
            self.scroll_offset = self.clamp_offset(offset);
        }
        self.refresh();
    }

    /// Delivers a fired animation frame to the active tween.
    pub fn on_frame(&mut self, handle: FrameHandle, now_ms: u64) {
        match self.tweener.frame(&mut self.host, handle, now_ms) {
            TweenFrame::Tick(value) => self.set_offset(value),
            TweenFrame::Finished { to } => self.set_offset(to),
            TweenFrame::Stale => {}
        }
    }

    fn end_gesture(&mut self) {
        self.cancel_dwell_timer();
        if self.drag != DragState::Idle {
            strace!(from = ?self.drag, "drag: -> idle");
            self.drag = DragState::Idle;
        }
        self.notify();
    }

    fn cancel_dwell_timer(&mut self) {
        if let Some(timer) = self.dwell_timer.take() {
            self.host.cancel_timer(timer);
        }
    }

    fn clamp_offset(&self, offset: f64) -> f64 {
        if offset.is_nan() {
            return self.scroll_offset;
        }
        offset.clamp(0.0, self.max_scroll_offset())
    }

    fn set_offset(&mut self, offset: f64) {
        self.scroll_offset = self.clamp_offset(offset);
        self.refresh();
    }

    fn refresh(&mut self) {
        self.overflow = match &self.layout {
            Some(layout) => {
                OverflowSide::from_offsets(self.scroll_offset, layout.viewport.max_scroll_offset())
            }
            None => OverflowSide::None,
        };
        self.notify();
    }

    fn notify(&mut self) {
        let state = self.render_state();
        if self.last_notified == Some(state) {
            return;
        }
        self.last_notified = Some(state);
        if let Some(cb) = &self.options.on_change {
            cb(&state);
        }
    }
}

fn sanitize_extent(value: f64) -> f64 {
    if value.is_finite() {
        value.max(0.0)
    } else {
        swarn!(value, "non-finite extent treated as 0");
        0.0
    }
}

fn abs(value: f64) -> f64 {
    if value < 0.0 { -value } else { value }
}
