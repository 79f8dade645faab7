use alloc::vec::Vec;

/// Measured size of the scrollable surface.
///
/// `scroll_width` is the full content width, `client_width` the visible window width.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Viewport {
    pub scroll_width: f64,
    pub client_width: f64,
}

impl Viewport {
    pub fn new(scroll_width: f64, client_width: f64) -> Self {
        Self {
            scroll_width,
            client_width,
        }
    }

    /// `scroll_width - client_width`, never negative.
    pub fn max_scroll_offset(&self) -> f64 {
        (self.scroll_width - self.client_width).max(0.0)
    }
}

/// Position and width of one child along the scroll axis, relative to the content start.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChildGeometry {
    pub offset_left: f64,
    pub offset_width: f64,
}

impl ChildGeometry {
    pub fn new(offset_left: f64, offset_width: f64) -> Self {
        Self {
            offset_left,
            offset_width,
        }
    }

    pub fn right(&self) -> f64 {
        self.offset_left + self.offset_width
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

impl PointerPosition {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Which edges of the content are clipped by the viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OverflowSide {
    #[default]
    None,
    Left,
    Right,
    Both,
}

impl OverflowSide {
    /// Derives the overflow side from an offset and the maximum offset.
    pub fn from_offsets(scroll_offset: f64, max_scroll_offset: f64) -> Self {
        let left = scroll_offset > 0.0;
        let right = scroll_offset < max_scroll_offset;
        match (left, right) {
            (true, true) => Self::Both,
            (true, false) => Self::Left,
            (false, true) => Self::Right,
            (false, false) => Self::None,
        }
    }

    pub fn has_left(self) -> bool {
        matches!(self, Self::Left | Self::Both)
    }

    pub fn has_right(self) -> bool {
        matches!(self, Self::Right | Self::Both)
    }

    /// The lowercase token used by rendering layers (e.g. `overflow-both`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Left => "left",
            Self::Right => "right",
            Self::Both => "both",
        }
    }
}

/// Pointer gesture state.
///
/// `Armed` is the grace period after a press; `Dragging` marks a genuine scroll gesture.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DragState {
    #[default]
    Idle,
    Armed,
    Dragging,
}

impl DragState {
    pub fn is_pressed(self) -> bool {
        !matches!(self, Self::Idle)
    }
}

/// What the rendering layer reads on every pass.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RenderState {
    pub scroll_offset: f64,
    pub overflow: OverflowSide,
    pub is_dragging: bool,
    pub show_overflow_indicators: bool,
}

impl RenderState {
    pub fn show_left_indicator(&self) -> bool {
        self.show_overflow_indicators && self.overflow.has_left()
    }

    pub fn show_right_indicator(&self) -> bool {
        self.show_overflow_indicators && self.overflow.has_right()
    }
}

/// A read-only geometry snapshot supplied by the host on each layout pass.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Layout {
    pub viewport: Viewport,
    /// Children in visible (left-to-right) order.
    pub children: Vec<ChildGeometry>,
}
