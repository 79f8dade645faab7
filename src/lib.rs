//! A headless engine for horizontally drag-scrollable rows.
//!
//! The crate covers the parts of a side-scrolling container that carry state: the authoritative
//! scroll offset, the pointer drag state machine, overflow-edge detection, and tweened
//! programmatic seeks (scroll to an element, to the next/previous hidden item, or centre on an
//! index).
//!
//! It is UI-agnostic. The host layer is expected to provide:
//! - viewport and child geometry after each layout pass
//! - pointer and native scroll events
//! - frame and timer scheduling ([`FrameScheduler`], [`TimerScheduler`])
//!
//! and reads a [`RenderState`] back on every render pass.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controller;
mod easing;
mod host;
mod options;
mod tween;
mod types;


pub use controller::ScrollController;
pub use easing::{
    Easing, EasingFn, ease_in_back, ease_in_cubic, ease_in_out_back, ease_in_out_cubic,
    ease_in_out_quart, ease_in_quart, ease_out_back, ease_out_cubic, ease_out_quart, linear,
};
pub use host::{FrameHandle, FrameScheduler, TimerHandle, TimerScheduler};
pub use options::{
    DEFAULT_ANIMATION_DURATION_SECS, DEFAULT_DRAG_DWELL_MS, DEFAULT_DRAG_THRESHOLD_PX,
    DEFAULT_EDGE_BIAS_PX, OnChangeCallback, OptionsError, ScrollOptions,
};
pub use tween::{Tween, TweenFrame, Tweener};
pub use types::{
    ChildGeometry, DragState, Layout, OverflowSide, PointerPosition, RenderState, Viewport,
};
