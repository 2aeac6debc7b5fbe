//! Drag state machine and pointer-to-percentage conversion.
//!
//! ```text
//!            press(thumb)                 move
//!   Idle ───────────────────▶ Dragging ◀──────┐
//!    ▲                          │  └──────────┘
//!    └──── release / reset ─────┘
//! ```
//!
//! Only one thumb can be captured at a time. The conversion functions here
//! are pure; [`DoubleSlider`](crate::DoubleSlider) applies their results.

use crate::{
    geometry::Rect,
    region::Thumb,
    value::{MAX_PERCENT, MIN_PERCENT},
};

/// Whether a thumb is captured, and how it was grabbed.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    /// No thumb is captured.
    #[default]
    Idle,
    /// `thumb` follows the pointer.
    Dragging {
        /// The captured thumb.
        thumb: Thumb,
        /// Pixels between the pointer and the thumb's logical edge at press
        /// time, so the thumb does not jump under the cursor.
        anchor_offset: f64,
    },
}

impl DragState {
    /// The captured thumb, if any.
    pub fn thumb(&self) -> Option<Thumb> {
        match self {
            DragState::Idle => None,
            DragState::Dragging { thumb, .. } => Some(*thumb),
        }
    }

    /// Whether a thumb is captured.
    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging { .. })
    }
}

/// Offset between the pointer and the logical edge of `thumb`.
///
/// The low thumb's logical edge is its right side, the high thumb's is its
/// left side; those are the edges sitting exactly at the thumb's percentage.
pub fn anchor_offset(thumb: Thumb, thumb_rect: Rect, pointer_x: f64) -> f64 {
    match thumb {
        Thumb::Low => thumb_rect.right() - pointer_x,
        Thumb::High => thumb_rect.left - pointer_x,
    }
}

/// Percentage for `thumb` when the pointer is at `pointer_x`.
///
/// The raw position is first clamped to the track, then against the
/// opposite thumb's percentage so the moving thumb stops at the other one.
/// Returns `None` when the track has no measurable width or the inputs are
/// not finite.
pub fn drag_percent(
    thumb: Thumb,
    track: Rect,
    pointer_x: f64,
    anchor_offset: f64,
    opposite_percent: f64,
) -> Option<f64> {
    if !track.is_measurable() || !pointer_x.is_finite() || !anchor_offset.is_finite() {
        return None;
    }
    let distance = match thumb {
        Thumb::Low => pointer_x - track.left + anchor_offset,
        Thumb::High => track.right() - pointer_x - anchor_offset,
    };
    let percent = (distance * MAX_PERCENT / track.width).clamp(MIN_PERCENT, MAX_PERCENT);
    let limit = (MAX_PERCENT - opposite_percent).clamp(MIN_PERCENT, MAX_PERCENT);
    Some(percent.min(limit))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRACK: Rect = Rect::new(100.0, 0.0, 1000.0, 4.0);

    #[test]
    fn anchor_is_measured_to_logical_edge() {
        let thumb = Rect::from_horizontal_edges(288.0, 300.0, 0.0, 4.0);
        assert_eq!(anchor_offset(Thumb::Low, thumb, 295.0), 5.0);
        assert_eq!(anchor_offset(Thumb::High, thumb, 295.0), -7.0);
    }

    #[test]
    fn low_thumb_follows_pointer() {
        assert_eq!(drag_percent(Thumb::Low, TRACK, 350.0, 0.0, 0.0), Some(25.0));
        assert_eq!(drag_percent(Thumb::Low, TRACK, 345.0, 5.0, 0.0), Some(25.0));
    }

    #[test]
    fn high_thumb_measures_from_right_edge() {
        assert_eq!(drag_percent(Thumb::High, TRACK, 850.0, 0.0, 0.0), Some(25.0));
        assert_eq!(drag_percent(Thumb::High, TRACK, 855.0, -5.0, 0.0), Some(25.0));
    }

    #[test]
    fn clamps_to_track() {
        assert_eq!(drag_percent(Thumb::Low, TRACK, -500.0, 0.0, 0.0), Some(0.0));
        assert_eq!(drag_percent(Thumb::High, TRACK, 5000.0, 0.0, 0.0), Some(0.0));
        assert_eq!(drag_percent(Thumb::Low, TRACK, 5000.0, 0.0, 0.0), Some(100.0));
    }

    #[test]
    fn stops_at_opposite_thumb() {
        // 90% requested while the high thumb holds 30%.
        assert_eq!(drag_percent(Thumb::Low, TRACK, 1000.0, 0.0, 30.0), Some(70.0));
        assert_eq!(drag_percent(Thumb::High, TRACK, 200.0, 0.0, 40.0), Some(60.0));
    }

    #[test]
    fn unmeasurable_track_is_rejected() {
        assert_eq!(drag_percent(Thumb::Low, Rect::ZERO, 10.0, 0.0, 0.0), None);
        assert_eq!(drag_percent(Thumb::Low, TRACK, f64::NAN, 0.0, 0.0), None);
        assert_eq!(drag_percent(Thumb::High, TRACK, 10.0, f64::INFINITY, 0.0), None);
    }

    #[test]
    fn state_accessors() {
        let idle = DragState::default();
        assert!(!idle.is_dragging());
        assert_eq!(idle.thumb(), None);

        let dragging = DragState::Dragging {
            thumb: Thumb::High,
            anchor_offset: 2.0,
        };
        assert!(dragging.is_dragging());
        assert_eq!(dragging.thumb(), Some(Thumb::High));
    }
}
