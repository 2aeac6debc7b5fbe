//! The rendering target a slider writes into.

use crate::{
    geometry::Rect,
    region::{Edge, Region},
    value::ThumbPercentages,
};

/// A mounted slider subtree.
///
/// Implementations own the actual nodes (DOM elements, or the in-memory
/// [`HeadlessSurface`](crate::headless::HeadlessSurface)). The slider never
/// keeps region handles of its own; it addresses everything through
/// [`Region`].
pub trait SliderSurface {
    /// Current bounding box of `region` in client pixels.
    ///
    /// Queried again on every pointer move since the page may reflow
    /// mid-drag. `None` means the region is unavailable.
    fn rect(&self, region: Region) -> Option<Rect>;

    /// Replaces the text content of `region`.
    fn set_text(&mut self, region: Region, text: &str);

    /// Positions `region` at `percent` of the track width from `edge`.
    fn set_edge(&mut self, region: Region, edge: Edge, percent: f64);

    /// Toggles the dragging modifier on the root.
    fn set_dragging(&mut self, dragging: bool);

    /// Stops the host's native drag-and-drop from starting on the root.
    fn disable_native_drag(&mut self);

    /// Removes the root from its parent.
    fn detach(&mut self);

    /// Writes both thumbs and both fill edges.
    fn render_percentages(&mut self, percentages: ThumbPercentages) {
        self.set_edge(Region::Progress, Edge::Left, percentages.left);
        self.set_edge(Region::Progress, Edge::Right, percentages.right);
        self.set_edge(Region::ThumbLeft, Edge::Left, percentages.left);
        self.set_edge(Region::ThumbRight, Edge::Right, percentages.right);
    }
}
