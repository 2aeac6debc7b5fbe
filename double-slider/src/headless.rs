//! In-memory slider surface.
//!
//! Lays the thumbs out the way the stylesheet does: the low thumb's right
//! edge sits at `left%` of the track and the high thumb's left edge sits at
//! `right%` from the track's right end. Useful for tests, server-side
//! previews and for driving the slider without a document.

use crate::{
    geometry::Rect,
    region::{Edge, Region},
    surface::SliderSurface,
    value::MAX_PERCENT,
};

/// Track used by [`HeadlessSurface::default`].
pub const DEFAULT_TRACK: Rect = Rect::new(0.0, 0.0, 1000.0, 4.0);
/// Thumb width used by [`HeadlessSurface::default`].
pub const DEFAULT_THUMB_WIDTH: f64 = 12.0;

#[derive(Debug, Clone, Default, PartialEq)]
struct RegionNode {
    text: String,
    left: Option<f64>,
    right: Option<f64>,
}

/// A [`SliderSurface`] backed by plain fields.
#[derive(Debug, Clone)]
pub struct HeadlessSurface {
    track: Rect,
    thumb_width: f64,
    nodes: [RegionNode; 6],
    dragging: bool,
    native_drag_disabled: bool,
    attached: bool,
    mutations: usize,
}

impl Default for HeadlessSurface {
    fn default() -> Self {
        Self::new(DEFAULT_TRACK)
    }
}

impl HeadlessSurface {
    /// Creates an attached surface whose track occupies `track`.
    pub fn new(track: Rect) -> Self {
        Self {
            track,
            thumb_width: DEFAULT_THUMB_WIDTH,
            nodes: Default::default(),
            dragging: false,
            native_drag_disabled: false,
            attached: true,
            mutations: 0,
        }
    }

    /// Sets the rendered width of both thumbs.
    pub fn with_thumb_width(mut self, thumb_width: f64) -> Self {
        self.thumb_width = thumb_width;
        self
    }

    /// Moves or resizes the track, as a page reflow would.
    pub fn set_track(&mut self, track: Rect) {
        self.track = track;
    }

    /// The track rectangle while attached.
    pub fn track(&self) -> Rect {
        self.track
    }

    /// Client x-coordinate lying `percent` of the way along the track.
    pub fn client_x_at(&self, percent: f64) -> f64 {
        self.track.left + percent * self.track.width / MAX_PERCENT
    }

    /// Text content of `region`.
    pub fn text(&self, region: Region) -> &str {
        &self.nodes[region.index()].text
    }

    /// Last percentage written for `region` against `edge`.
    pub fn edge(&self, region: Region, edge: Edge) -> Option<f64> {
        let node = &self.nodes[region.index()];
        match edge {
            Edge::Left => node.left,
            Edge::Right => node.right,
        }
    }

    /// Whether the dragging modifier is present.
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Whether native drag-start has been suppressed.
    pub fn native_drag_disabled(&self) -> bool {
        self.native_drag_disabled
    }

    /// Whether the root is still attached.
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Number of writes performed on this surface so far.
    pub fn mutations(&self) -> usize {
        self.mutations
    }

    fn edge_or_zero(&self, region: Region, edge: Edge) -> f64 {
        self.edge(region, edge).unwrap_or(0.0)
    }
}

impl SliderSurface for HeadlessSurface {
    fn rect(&self, region: Region) -> Option<Rect> {
        if !self.attached {
            return Some(Rect::ZERO);
        }
        let track = self.track;
        let at_left = |percent: f64| track.left + percent * track.width / MAX_PERCENT;
        let at_right = |percent: f64| track.right() - percent * track.width / MAX_PERCENT;

        match region {
            Region::Inner => Some(track),
            Region::ThumbLeft => {
                let edge = at_left(self.edge_or_zero(Region::ThumbLeft, Edge::Left));
                Some(Rect::from_horizontal_edges(
                    edge - self.thumb_width,
                    edge,
                    track.top,
                    track.height,
                ))
            }
            Region::ThumbRight => {
                let edge = at_right(self.edge_or_zero(Region::ThumbRight, Edge::Right));
                Some(Rect::from_horizontal_edges(
                    edge,
                    edge + self.thumb_width,
                    track.top,
                    track.height,
                ))
            }
            Region::Progress => Some(Rect::from_horizontal_edges(
                at_left(self.edge_or_zero(Region::Progress, Edge::Left)),
                at_right(self.edge_or_zero(Region::Progress, Edge::Right)),
                track.top,
                track.height,
            )),
            Region::From | Region::To => None,
        }
    }

    fn set_text(&mut self, region: Region, text: &str) {
        self.mutations += 1;
        self.nodes[region.index()].text = text.to_owned();
    }

    fn set_edge(&mut self, region: Region, edge: Edge, percent: f64) {
        self.mutations += 1;
        let node = &mut self.nodes[region.index()];
        match edge {
            Edge::Left => node.left = Some(percent),
            Edge::Right => node.right = Some(percent),
        }
    }

    fn set_dragging(&mut self, dragging: bool) {
        self.mutations += 1;
        self.dragging = dragging;
    }

    fn disable_native_drag(&mut self) {
        self.mutations += 1;
        self.native_drag_disabled = true;
    }

    fn detach(&mut self) {
        self.mutations += 1;
        self.attached = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::ThumbPercentages;

    #[test]
    fn thumbs_sit_on_their_logical_edges() {
        let mut surface = HeadlessSurface::new(Rect::new(100.0, 0.0, 500.0, 4.0));
        surface.render_percentages(ThumbPercentages::new(20.0, 40.0));

        let low = surface.rect(Region::ThumbLeft).unwrap();
        assert_eq!(low.right(), 200.0);
        assert_eq!(low.width, DEFAULT_THUMB_WIDTH);

        let high = surface.rect(Region::ThumbRight).unwrap();
        assert_eq!(high.left, 400.0);

        let fill = surface.rect(Region::Progress).unwrap();
        assert_eq!((fill.left, fill.right()), (200.0, 400.0));
    }

    #[test]
    fn detached_surface_reports_zero_rects() {
        let mut surface = HeadlessSurface::default();
        surface.detach();
        assert!(!surface.is_attached());
        assert_eq!(surface.rect(Region::Inner), Some(Rect::ZERO));
    }

    #[test]
    fn writes_are_counted() {
        let mut surface = HeadlessSurface::default();
        surface.set_text(Region::From, "$1");
        surface.set_dragging(true);
        assert_eq!(surface.mutations(), 2);
        assert_eq!(surface.text(Region::From), "$1");
        assert!(surface.is_dragging());

        surface.set_track(Rect::new(0.0, 0.0, 10.0, 1.0));
        assert_eq!(surface.mutations(), 2);
    }

    #[test]
    fn client_x_maps_percent_onto_track() {
        let surface = HeadlessSurface::new(Rect::new(50.0, 0.0, 200.0, 4.0));
        assert_eq!(surface.client_x_at(0.0), 50.0);
        assert_eq!(surface.client_x_at(25.0), 100.0);
        assert_eq!(surface.client_x_at(100.0), 250.0);
    }
}
