//! Construction-time configuration for [`DoubleSlider`](crate::DoubleSlider).
//!
//! ## Usage
//!
//! Start from [`SliderConfig::default`] and override what the page needs.
//!
//! ```
//! use double_slider::{Selection, SliderConfig};
//!
//! let config = SliderConfig::default()
//!     .min(0.0)
//!     .max(4000.0)
//!     .selected(Selection::new(500.0, 2500.0))
//!     .format_value(|value| format!("{value} ₽"));
//!
//! let validated = config.validate().unwrap();
//! assert_eq!(validated.selected, Selection::new(500.0, 2500.0));
//! ```

use std::{fmt, sync::Arc};

use tracing::warn;

use crate::value::Domain;

/// Default lower bound of the domain.
pub const DEFAULT_MIN: f64 = 100.0;
/// Default upper bound of the domain.
pub const DEFAULT_MAX: f64 = 200.0;

/// A selected range inside the slider domain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Selection {
    /// Lower bound of the selection.
    pub from: f64,
    /// Upper bound of the selection.
    pub to: f64,
}

impl Selection {
    /// Creates a selection from its two bounds.
    pub const fn new(from: f64, to: f64) -> Self {
        Self { from, to }
    }

    /// The selection covering the whole domain.
    pub fn full(domain: Domain) -> Self {
        Self::new(domain.min(), domain.max())
    }
}

/// Shared, comparable label formatter.
///
/// Compares by identity (`Arc::ptr_eq`) so configs stay comparable without
/// comparing closures.
#[derive(Clone)]
pub struct ValueFormatter {
    inner: Arc<dyn Fn(f64) -> String + Send + Sync>,
}

impl ValueFormatter {
    /// Creates a formatter from a closure.
    pub fn new<F>(format: F) -> Self
    where
        F: Fn(f64) -> String + Send + Sync + 'static,
    {
        Self {
            inner: Arc::new(format),
        }
    }

    /// Formats a domain value for display in a label.
    pub fn format(&self, value: f64) -> String {
        (self.inner)(value)
    }
}

impl Default for ValueFormatter {
    fn default() -> Self {
        Self::new(|value| format!("${value}"))
    }
}

impl PartialEq for ValueFormatter {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for ValueFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValueFormatter").finish_non_exhaustive()
    }
}

/// Errors reported when a [`SliderConfig`] cannot describe a usable slider.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// One of the domain bounds is NaN or infinite.
    #[error("slider bounds must be finite, got min={min} max={max}")]
    NonFiniteBounds {
        /// Requested lower bound.
        min: f64,
        /// Requested upper bound.
        max: f64,
    },
    /// The lower bound is greater than the upper bound.
    #[error("slider min {min} is greater than max {max}")]
    InvertedBounds {
        /// Requested lower bound.
        min: f64,
        /// Requested upper bound.
        max: f64,
    },
    /// One of the selected bounds is NaN or infinite.
    #[error("selected range must be finite, got from={from} to={to}")]
    NonFiniteSelection {
        /// Requested selection start.
        from: f64,
        /// Requested selection end.
        to: f64,
    },
}

/// Arguments for constructing a [`DoubleSlider`](crate::DoubleSlider).
///
/// Every field has a default; `selected` falls back to the whole
/// `[min, max]` domain when unset.
#[derive(Debug, Clone, PartialEq)]
pub struct SliderConfig {
    /// Lower bound of the domain.
    pub min: f64,
    /// Upper bound of the domain.
    pub max: f64,
    /// Formatter used for both value labels.
    pub format_value: ValueFormatter,
    /// Initially selected range. `None` selects the whole domain.
    pub selected: Option<Selection>,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN,
            max: DEFAULT_MAX,
            format_value: ValueFormatter::default(),
            selected: None,
        }
    }
}

impl SliderConfig {
    /// Sets the lower bound of the domain.
    pub fn min(mut self, min: f64) -> Self {
        self.min = min;
        self
    }

    /// Sets the upper bound of the domain.
    pub fn max(mut self, max: f64) -> Self {
        self.max = max;
        self
    }

    /// Sets the initially selected range.
    pub fn selected(mut self, selected: Selection) -> Self {
        self.selected = Some(selected);
        self
    }

    /// Sets the label formatter.
    pub fn format_value<F>(mut self, format: F) -> Self
    where
        F: Fn(f64) -> String + Send + Sync + 'static,
    {
        self.format_value = ValueFormatter::new(format);
        self
    }

    /// Checks the bounds and clamps the selection into the domain.
    ///
    /// `min == max` is accepted and produces a slider with no draggable
    /// range.
    pub fn validate(&self) -> Result<ValidatedConfig, ConfigError> {
        let (min, max) = (self.min, self.max);
        if !min.is_finite() || !max.is_finite() {
            return Err(ConfigError::NonFiniteBounds { min, max });
        }
        if min > max {
            return Err(ConfigError::InvertedBounds { min, max });
        }
        let domain = Domain::new(min, max);
        let requested = self.selected.unwrap_or_else(|| Selection::full(domain));
        let selected = clamp_selection(domain, requested)?;

        Ok(ValidatedConfig {
            domain,
            selected,
            format_value: self.format_value.clone(),
        })
    }
}

/// A configuration that passed [`SliderConfig::validate`].
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedConfig {
    /// The domain the thumbs map onto.
    pub domain: Domain,
    /// Initial selection, guaranteed to satisfy `min <= from <= to <= max`.
    pub selected: Selection,
    /// Label formatter.
    pub format_value: ValueFormatter,
}

/// Clamps `requested` into `domain`, keeping `from <= to`.
pub(crate) fn clamp_selection(
    domain: Domain,
    requested: Selection,
) -> Result<Selection, ConfigError> {
    if !requested.from.is_finite() || !requested.to.is_finite() {
        return Err(ConfigError::NonFiniteSelection {
            from: requested.from,
            to: requested.to,
        });
    }

    let from = domain.clamp(requested.from);
    let to = domain.clamp(requested.to).max(from);
    let selection = Selection::new(from, to);
    if selection != requested {
        warn!(
            requested_from = requested.from,
            requested_to = requested.to,
            from,
            to,
            "selected range clamped into slider domain"
        );
    }
    Ok(selection)
}
