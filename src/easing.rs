/// A pure easing curve in the classic `(elapsed, start, delta, duration)` form.
pub type EasingFn = fn(f64, f64, f64, f64) -> f64;

const BACK_OVERSHOOT: f64 = 1.70158;

/// Easing families available to tweens.
///
/// Every variant maps `(elapsed, start, delta, duration)` to a value that equals `start` at
/// `elapsed = 0` and `start + delta` at `elapsed = duration`. The `Back` family overshoots in
/// between. A zero duration yields the end value.
#[derive(Clone, Copy, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Easing {
    Linear,
    EaseInQuart,
    EaseOutQuart,
    #[default]
    EaseInOutQuart,
    EaseInCubic,
    EaseOutCubic,
    EaseInOutCubic,
    EaseInBack,
    EaseOutBack,
    EaseInOutBack,
    /// A host-supplied curve.
    #[cfg_attr(feature = "serde", serde(skip))]
    Custom(EasingFn),
}

impl Easing {
    pub fn apply(self, elapsed: f64, start: f64, delta: f64, duration: f64) -> f64 {
        if duration.is_nan() || duration <= 0.0 {
            return start + delta;
        }
        match self {
            Self::Linear => linear(elapsed, start, delta, duration),
            Self::EaseInQuart => ease_in_quart(elapsed, start, delta, duration),
            Self::EaseOutQuart => ease_out_quart(elapsed, start, delta, duration),
            Self::EaseInOutQuart => ease_in_out_quart(elapsed, start, delta, duration),
            Self::EaseInCubic => ease_in_cubic(elapsed, start, delta, duration),
            Self::EaseOutCubic => ease_out_cubic(elapsed, start, delta, duration),
            Self::EaseInOutCubic => ease_in_out_cubic(elapsed, start, delta, duration),
            Self::EaseInBack => ease_in_back(elapsed, start, delta, duration),
            Self::EaseOutBack => ease_out_back(elapsed, start, delta, duration),
            Self::EaseInOutBack => ease_in_out_back(elapsed, start, delta, duration),
            Self::Custom(f) => f(elapsed, start, delta, duration),
        }
    }

    /// Normalized form: maps progress `t` in `[0, 1]` onto the curve's `[0, 1]` range.
    pub fn sample(self, t: f64) -> f64 {
        self.apply(t, 0.0, 1.0, 1.0)
    }
}

impl PartialEq for Easing {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Custom(a), Self::Custom(b)) => core::ptr::fn_addr_eq(*a, *b),
            _ => core::mem::discriminant(self) == core::mem::discriminant(other),
        }
    }
}

pub fn linear(t: f64, b: f64, c: f64, d: f64) -> f64 {
    c * t / d + b
}

pub fn ease_in_quart(t: f64, b: f64, c: f64, d: f64) -> f64 {
    let t = t / d;
    c * t * t * t * t + b
}

pub fn ease_out_quart(t: f64, b: f64, c: f64, d: f64) -> f64 {
    let t = t / d - 1.0;
    -c * (t * t * t * t - 1.0) + b
}

pub fn ease_in_out_quart(t: f64, b: f64, c: f64, d: f64) -> f64 {
    let t = t / (d / 2.0);
    if t < 1.0 {
        return c / 2.0 * t * t * t * t + b;
    }
    let t = t - 2.0;
    -c / 2.0 * (t * t * t * t - 2.0) + b
}

pub fn ease_in_cubic(t: f64, b: f64, c: f64, d: f64) -> f64 {
    let t = t / d;
    c * t * t * t + b
}

pub fn ease_out_cubic(t: f64, b: f64, c: f64, d: f64) -> f64 {
    let t = t / d - 1.0;
    c * (t * t * t + 1.0) + b
}

pub fn ease_in_out_cubic(t: f64, b: f64, c: f64, d: f64) -> f64 {
    let t = t / (d / 2.0);
    if t < 1.0 {
        return c / 2.0 * t * t * t + b;
    }
    let t = t - 2.0;
    c / 2.0 * (t * t * t + 2.0) + b
}

pub fn ease_in_back(t: f64, b: f64, c: f64, d: f64) -> f64 {
    let s = BACK_OVERSHOOT;
    let t = t / d;
    c * t * t * ((s + 1.0) * t - s) + b
}

pub fn ease_out_back(t: f64, b: f64, c: f64, d: f64) -> f64 {
    let s = BACK_OVERSHOOT;
    let t = t / d - 1.0;
    c * (t * t * ((s + 1.0) * t + s) + 1.0) + b
}

pub fn ease_in_out_back(t: f64, b: f64, c: f64, d: f64) -> f64 {
    let s = BACK_OVERSHOOT * 1.525;
    let t = t / (d / 2.0);
    if t < 1.0 {
        return c / 2.0 * (t * t * ((s + 1.0) * t - s)) + b;
    }
    let t = t - 2.0;
    c / 2.0 * (t * t * ((s + 1.0) * t + s) + 2.0) + b
}
