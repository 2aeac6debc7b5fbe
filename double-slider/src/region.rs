//! Named parts of the mounted slider and the thumbs that move inside it.

/// A named sub-element of the mounted slider.
///
/// The string form is the `data-element` attribute used by the markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    /// Label showing the lower bound.
    From,
    /// Label showing the upper bound.
    To,
    /// The track; defines the 0-100% coordinate space.
    Inner,
    /// Fill between the two thumbs.
    Progress,
    /// Thumb for the lower bound.
    ThumbLeft,
    /// Thumb for the upper bound.
    ThumbRight,
}

impl Region {
    /// Every region, in markup order.
    pub const ALL: [Region; 6] = [
        Region::From,
        Region::Inner,
        Region::Progress,
        Region::ThumbLeft,
        Region::ThumbRight,
        Region::To,
    ];

    /// The `data-element` name of this region.
    pub const fn data_name(self) -> &'static str {
        match self {
            Region::From => "from",
            Region::To => "to",
            Region::Inner => "inner",
            Region::Progress => "progress",
            Region::ThumbLeft => "thumbLeft",
            Region::ThumbRight => "thumbRight",
        }
    }

    /// Looks a region up by its `data-element` name.
    pub fn from_data_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|region| region.data_name() == name)
    }

    /// The BEM class carried by this region, if any.
    pub const fn class_name(self) -> Option<&'static str> {
        match self {
            Region::Inner => Some("range-slider__inner"),
            Region::Progress => Some("range-slider__progress"),
            Region::ThumbLeft => Some("range-slider__thumb-left"),
            Region::ThumbRight => Some("range-slider__thumb-right"),
            Region::From | Region::To => None,
        }
    }

    /// Dense index for array-backed region tables.
    pub const fn index(self) -> usize {
        match self {
            Region::From => 0,
            Region::Inner => 1,
            Region::Progress => 2,
            Region::ThumbLeft => 3,
            Region::ThumbRight => 4,
            Region::To => 5,
        }
    }
}

/// A horizontal edge a percentage is measured from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    /// Measured from the left edge of the track (`left: N%`).
    Left,
    /// Measured from the right edge of the track (`right: N%`).
    Right,
}

impl Edge {
    /// The CSS property positioning an element against this edge.
    pub const fn css_property(self) -> &'static str {
        match self {
            Edge::Left => "left",
            Edge::Right => "right",
        }
    }
}

/// One of the two draggable handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Thumb {
    /// Lower bound handle, anchored from the left edge.
    Low,
    /// Upper bound handle, anchored from the right edge.
    High,
}

impl Thumb {
    /// The other thumb.
    pub const fn opposite(self) -> Self {
        match self {
            Thumb::Low => Thumb::High,
            Thumb::High => Thumb::Low,
        }
    }

    /// The element this thumb is rendered as.
    pub const fn region(self) -> Region {
        match self {
            Thumb::Low => Region::ThumbLeft,
            Thumb::High => Region::ThumbRight,
        }
    }

    /// The label that follows this thumb.
    pub const fn label(self) -> Region {
        match self {
            Thumb::Low => Region::From,
            Thumb::High => Region::To,
        }
    }

    /// The track edge this thumb's percentage is measured from.
    pub const fn edge(self) -> Edge {
        match self {
            Thumb::Low => Edge::Left,
            Thumb::High => Edge::Right,
        }
    }
}
