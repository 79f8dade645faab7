use alloc::sync::Arc;

use crate::{Easing, RenderState};

/// A callback fired when the render-relevant state changes (offset, overflow side, dragging).
pub type OnChangeCallback = Arc<dyn Fn(&RenderState) + Send + Sync>;

pub const DEFAULT_ANIMATION_DURATION_SECS: f64 = 0.3;
/// Horizontal displacement that turns a press into a drag immediately.
pub const DEFAULT_DRAG_THRESHOLD_PX: f64 = 30.0;
/// Press duration after which a press counts as a drag even without displacement.
pub const DEFAULT_DRAG_DWELL_MS: u64 = 200;
/// Extra distance `scroll_to_next`/`scroll_to_prev` reveal beyond the item edge.
pub const DEFAULT_EDGE_BIAS_PX: f64 = 20.0;

/// Rejected configuration values.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum OptionsError {
    #[error("invalid animation duration {0}s (must be finite and >= 0)")]
    InvalidDuration(f64),
    #[error("invalid drag threshold {0}px (must be finite and >= 0)")]
    InvalidThreshold(f64),
    #[error("invalid edge bias {0}px (must be finite)")]
    InvalidEdgeBias(f64),
}

/// Configuration for [`crate::ScrollController`].
pub struct ScrollOptions {
    pub animation_duration_secs: f64,
    pub easing: Easing,
    /// Whether the host should draw the left/right overflow indicators.
    pub show_overflow_indicators: bool,
    pub drag_threshold_px: f64,
    pub drag_dwell_ms: u64,
    pub edge_bias_px: f64,
    pub on_change: Option<OnChangeCallback>,
}

impl Clone for ScrollOptions {
    fn clone(&self) -> Self {
        Self {
            animation_duration_secs: self.animation_duration_secs,
            easing: self.easing,
            show_overflow_indicators: self.show_overflow_indicators,
            drag_threshold_px: self.drag_threshold_px,
            drag_dwell_ms: self.drag_dwell_ms,
            edge_bias_px: self.edge_bias_px,
            on_change: self.on_change.clone(),
        }
    }
}

impl Default for ScrollOptions {
    fn default() -> Self {
        Self {
            animation_duration_secs: DEFAULT_ANIMATION_DURATION_SECS,
            easing: Easing::EaseInOutQuart,
            show_overflow_indicators: true,
            drag_threshold_px: DEFAULT_DRAG_THRESHOLD_PX,
            drag_dwell_ms: DEFAULT_DRAG_DWELL_MS,
            edge_bias_px: DEFAULT_EDGE_BIAS_PX,
            on_change: None,
        }
    }
}

impl ScrollOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_animation_duration_secs(mut self, secs: f64) -> Self {
        self.animation_duration_secs = secs;
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn with_show_overflow_indicators(mut self, show: bool) -> Self {
        self.show_overflow_indicators = show;
        self
    }

    pub fn with_drag_threshold_px(mut self, px: f64) -> Self {
        self.drag_threshold_px = px;
        self
    }

    pub fn with_drag_dwell_ms(mut self, ms: u64) -> Self {
        self.drag_dwell_ms = ms;
        self
    }

    pub fn with_edge_bias_px(mut self, px: f64) -> Self {
        self.edge_bias_px = px;
        self
    }

    pub fn with_on_change(
        mut self,
        on_change: Option<impl Fn(&RenderState) + Send + Sync + 'static>,
    ) -> Self {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
        self
    }

    /// Checks the numeric fields. Called once by `ScrollController::new`.
    pub fn validate(&self) -> Result<(), OptionsError> {
        let secs = self.animation_duration_secs;
        if !secs.is_finite() || secs < 0.0 {
            return Err(OptionsError::InvalidDuration(secs));
        }
        let px = self.drag_threshold_px;
        if !px.is_finite() || px < 0.0 {
            return Err(OptionsError::InvalidThreshold(px));
        }
        if !self.edge_bias_px.is_finite() {
            return Err(OptionsError::InvalidEdgeBias(self.edge_bias_px));
        }
        Ok(())
    }
}

impl core::fmt::Debug for ScrollOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ScrollOptions")
            .field("animation_duration_secs", &self.animation_duration_secs)
            .field("easing", &self.easing)
            .field("show_overflow_indicators", &self.show_overflow_indicators)
            .field("drag_threshold_px", &self.drag_threshold_px)
            .field("drag_dwell_ms", &self.drag_dwell_ms)
            .field("edge_bias_px", &self.edge_bias_px)
            .finish_non_exhaustive()
    }
}
