use crate::{
    config::Selection,
    controller::DragState,
    value::{Domain, ThumbPercentages},
};

/// Mutable state owned by one slider instance.
///
/// The selected range is not stored; it is derived from `percentages`.
#[derive(Debug, Clone, PartialEq)]
pub struct SliderState {
    pub(crate) original: Domain,
    pub(crate) current: Domain,
    pub(crate) percentages: ThumbPercentages,
    pub(crate) drag: DragState,
}

impl SliderState {
    pub(crate) fn new(domain: Domain) -> Self {
        Self {
            original: domain,
            current: domain,
            percentages: ThumbPercentages::FULL,
            drag: DragState::Idle,
        }
    }

    /// Construction-time domain, restored by reset.
    pub fn original_domain(&self) -> Domain {
        self.original
    }

    /// Domain the percentages currently map onto.
    pub fn domain(&self) -> Domain {
        self.current
    }

    /// Current thumb percentages.
    pub fn percentages(&self) -> ThumbPercentages {
        self.percentages
    }

    /// Drag controller state.
    pub fn drag(&self) -> DragState {
        self.drag
    }

    /// The selected range derived from the current percentages.
    pub fn value(&self) -> Selection {
        self.percentages.selection(self.current)
    }
}
