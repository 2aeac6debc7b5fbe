//! Mapping between thumb percentages and domain values.
//!
//! Percentages are the single source of truth; the selected range is always
//! derived from them. Mount floors to whole percents so a thumb never starts
//! past its value, while reading the value back rounds to the nearest
//! integer, halves upward.

use crate::{config::Selection, region::Thumb};

/// Lower bound of the percentage space.
pub const MIN_PERCENT: f64 = 0.0;
/// Upper bound of the percentage space.
pub const MAX_PERCENT: f64 = 100.0;

/// The `[min, max]` numeric range the thumbs map onto.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Domain {
    min: f64,
    max: f64,
}

impl Domain {
    /// Callers guarantee finite bounds with `min <= max`.
    pub(crate) const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Lower bound.
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound.
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Width of the domain.
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// A domain with `min == max` has no draggable range.
    pub fn is_degenerate(&self) -> bool {
        self.span() <= 0.0
    }

    /// Clamps `value` into the domain.
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }
}

/// Positions of both thumbs as percentages of the track width.
///
/// `left` is measured from the left edge, `right` from the right edge, and
/// `left + right <= 100` keeps the thumbs from crossing.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ThumbPercentages {
    /// Low thumb offset from the left edge.
    pub left: f64,
    /// High thumb offset from the right edge.
    pub right: f64,
}

impl ThumbPercentages {
    /// Both thumbs at the track ends.
    pub const FULL: Self = Self {
        left: MIN_PERCENT,
        right: MIN_PERCENT,
    };

    /// Creates percentages from raw values.
    pub const fn new(left: f64, right: f64) -> Self {
        Self { left, right }
    }

    /// Initial layout for `selection`, floored to whole percents.
    pub fn mount(domain: Domain, selection: Selection) -> Self {
        if domain.is_degenerate() {
            return Self::FULL;
        }
        let span = domain.span();
        let left = ((selection.from - domain.min()) * MAX_PERCENT / span).floor();
        let right = ((domain.max() - selection.to) * MAX_PERCENT / span).floor();
        let left = left.clamp(MIN_PERCENT, MAX_PERCENT);
        let right = right.clamp(MIN_PERCENT, MAX_PERCENT - left);
        Self { left, right }
    }

    /// The percentage of `thumb`.
    pub fn get(&self, thumb: Thumb) -> f64 {
        match thumb {
            Thumb::Low => self.left,
            Thumb::High => self.right,
        }
    }

    /// Returns a copy with `thumb` moved to `percent`.
    pub fn with(self, thumb: Thumb, percent: f64) -> Self {
        match thumb {
            Thumb::Low => Self {
                left: percent,
                ..self
            },
            Thumb::High => Self {
                right: percent,
                ..self
            },
        }
    }

    /// The selected range these percentages describe, rounded to integers.
    pub fn selection(&self, domain: Domain) -> Selection {
        let span = domain.span();
        let from = round_half_up(domain.min() + self.left * span / MAX_PERCENT);
        let to = round_half_up(domain.max() - self.right * span / MAX_PERCENT);
        // Rounding is monotone, but float noise at .5 boundaries is not.
        let from = domain.clamp(from);
        let to = domain.clamp(to).max(from);
        Selection::new(from, to)
    }
}

/// Rounds to the nearest integer, with halves going toward positive infinity.
///
/// `f64::round` sends negative halves away from zero, which would commit
/// `-8` for `-7.5` on domains below zero.
fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}
