//! Dual-thumb range reducer.
//!
//! Two positions share one closed interval. Every thumb movement goes through
//! [`drag`], which clamps to the bounds first and then stops the moving thumb
//! at the other one, so `lower_bound <= min <= max <= upper_bound` holds after
//! each step without a corrective pass.

#[cfg(test)]
#[path = "range_math_test.rs"]
mod range_math_test;

/// Which slider handle moved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Thumb {
    Min,
    Max,
}

/// Selected sub-range of a fixed closed interval.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RangeSelection {
    pub min: f64,
    pub max: f64,
    pub lower_bound: f64,
    pub upper_bound: f64,
}

impl RangeSelection {
    /// Initialize over `[lower_bound, upper_bound]`.
    ///
    /// Reversed bounds are swapped, both positions are clamped into bounds and
    /// a reversed pair collapses `max` onto `min`.
    pub fn new(lower_bound: f64, upper_bound: f64, min: f64, max: f64) -> Self {
        let lower_bound = if lower_bound.is_finite() { lower_bound } else { 0.0 };
        let upper_bound = if upper_bound.is_finite() { upper_bound } else { lower_bound };
        let (lower_bound, upper_bound) = if lower_bound <= upper_bound {
            (lower_bound, upper_bound)
        } else {
            (upper_bound, lower_bound)
        };
        let min = clamp_or(min, lower_bound, upper_bound, lower_bound);
        let max = clamp_or(max, lower_bound, upper_bound, upper_bound).max(min);
        Self { min, max, lower_bound, upper_bound }
    }

    /// Position of `value` across the bounds, in `[0, 1]`.
    pub fn fraction(&self, value: f64) -> f64 {
        let span = self.upper_bound - self.lower_bound;
        if span <= 0.0 {
            return 0.0;
        }
        ((value - self.lower_bound) / span).clamp(0.0, 1.0)
    }

    /// `min` rounded for integer-valued query parameters.
    #[allow(clippy::cast_possible_truncation)]
    pub fn min_rounded(&self) -> i64 {
        self.min.round() as i64
    }

    /// `max` rounded for integer-valued query parameters.
    #[allow(clippy::cast_possible_truncation)]
    pub fn max_rounded(&self) -> i64 {
        self.max.round() as i64
    }

    pub fn is_valid(&self) -> bool {
        self.lower_bound <= self.min && self.min <= self.max && self.max <= self.upper_bound
    }
}

fn clamp_or(value: f64, lo: f64, hi: f64, fallback: f64) -> f64 {
    if value.is_finite() { value.clamp(lo, hi) } else { fallback }
}

/// Move `thumb` toward `requested` and return the resulting selection.
///
/// The request is clamped to the bounds first; the min thumb then stops at
/// `max` and the max thumb stops at `min`. Non-finite requests are ignored.
pub fn drag(state: RangeSelection, thumb: Thumb, requested: f64) -> RangeSelection {
    if !requested.is_finite() {
        return state;
    }
    let v = requested.clamp(state.lower_bound, state.upper_bound);
    let next = match thumb {
        Thumb::Min => RangeSelection { min: v.min(state.max), ..state },
        Thumb::Max => RangeSelection { max: v.max(state.min), ..state },
    };
    debug_assert!(!state.is_valid() || next.is_valid(), "drag broke ordering: {next:?}");
    next
}
