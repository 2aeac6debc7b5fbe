//! Client-space geometry for pointer tracking.
//!
//! Coordinates are CSS pixels relative to the viewport, the same space
//! pointer events report `clientX` in:
//! - Origin (0, 0) at the top-left corner
//! - X-axis increases to the right
//! - Fractional values are allowed (zoomed pages, sub-pixel layout)

/// A rectangle in client pixel space, as returned by a bounding box query.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// The x-coordinate of the left edge.
    pub left: f64,
    /// The y-coordinate of the top edge.
    pub top: f64,
    /// The width of the rectangle.
    pub width: f64,
    /// The height of the rectangle.
    pub height: f64,
}

impl Rect {
    /// A zero rectangle, which is what detached or hidden elements report.
    pub const ZERO: Self = Self {
        left: 0.0,
        top: 0.0,
        width: 0.0,
        height: 0.0,
    };

    /// Creates a new rectangle from its top-left corner and size.
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Creates a rectangle spanning `left..right` horizontally.
    pub fn from_horizontal_edges(left: f64, right: f64, top: f64, height: f64) -> Self {
        Self::new(left, top, right - left, height)
    }

    /// The x-coordinate of the right edge.
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    /// Whether pointer positions can be mapped onto this rectangle.
    ///
    /// A track with zero, negative or non-finite width has no coordinate
    /// space; mapping onto it would divide by zero.
    pub fn is_measurable(&self) -> bool {
        self.left.is_finite() && self.width.is_finite() && self.width > 0.0
    }
}
