//! The dual-thumb range slider.
//!
//! ## Usage
//!
//! Build a [`DoubleSlider`] on a surface, feed thumb presses into it and
//! forward document pointer events into its [`PointerHub`]. Subscribers hear
//! about the selection once per drag, when the pointer is released.
//!
//! ```
//! use std::{cell::Cell, rc::Rc};
//! use double_slider::{
//!     DoubleSlider, HeadlessSurface, PointerEvent, PointerHub, Selection, SliderConfig, Thumb,
//! };
//!
//! let hub = PointerHub::new();
//! let slider = DoubleSlider::new(&SliderConfig::default(), HeadlessSurface::default(), &hub)
//!     .unwrap();
//!
//! let committed = Rc::new(Cell::new(None));
//! let sink = committed.clone();
//! slider.subscribe(move |selection| sink.set(Some(selection)));
//!
//! // The default track spans 0..1000px and the low thumb starts at 0px.
//! slider.press_thumb(Thumb::Low, 0.0);
//! hub.dispatch(PointerEvent::moved(250.0));
//! hub.dispatch(PointerEvent::released(250.0));
//!
//! assert_eq!(committed.get(), Some(Selection::new(125.0, 200.0)));
//! ```

use std::{
    cell::RefCell,
    fmt,
    rc::{Rc, Weak},
};

use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::{
    config::{ConfigError, Selection, SliderConfig, ValueFormatter, clamp_selection},
    controller::{DragState, anchor_offset, drag_percent},
    pointer::{PointerEvent, PointerEventKind, PointerHub, PointerSubscription},
    region::{Region, Thumb},
    state::SliderState,
    surface::SliderSurface,
    value::{Domain, ThumbPercentages},
};

/// Handler receiving the committed selection.
pub type RangeSelectHandler = Rc<dyn Fn(Selection)>;

type Handlers = SmallVec<[RangeSelectHandler; 2]>;

/// Identifies a `range-select` subscription on one slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

struct SliderInner<S> {
    state: SliderState,
    surface: S,
    format_value: ValueFormatter,
    subscription: Option<PointerSubscription>,
    observers: Vec<(ObserverId, RangeSelectHandler)>,
    next_observer: u64,
    destroyed: bool,
}

impl<S: SliderSurface> SliderInner<S> {
    /// Lays out thumbs, fill and labels for `selection`.
    fn render(&mut self, selection: Selection) {
        let percentages = ThumbPercentages::mount(self.state.current, selection);
        self.state.percentages = percentages;
        let from = self.format_value.format(selection.from);
        let to = self.format_value.format(selection.to);
        self.surface.set_text(Region::From, &from);
        self.surface.set_text(Region::To, &to);
        self.surface.render_percentages(percentages);
    }

    /// Forces `Idle` and releases the document subscription.
    fn cancel_drag(&mut self) {
        if let DragState::Dragging { thumb, .. } = self.state.drag {
            self.state.drag = DragState::Idle;
            self.surface.set_dragging(false);
            debug!(?thumb, "drag cancelled");
        }
        self.subscription = None;
    }

    fn pointer_move(&mut self, client_x: f64) {
        if self.destroyed {
            return;
        }
        let DragState::Dragging {
            thumb,
            anchor_offset,
        } = self.state.drag
        else {
            trace!("pointer move without active drag");
            return;
        };

        let opposite = self.state.percentages.get(thumb.opposite());
        let percent = self
            .surface
            .rect(Region::Inner)
            .and_then(|track| drag_percent(thumb, track, client_x, anchor_offset, opposite));
        let Some(percent) = percent else {
            trace!(client_x, "pointer move over unmeasurable track ignored");
            return;
        };

        self.state.percentages = self.state.percentages.with(thumb, percent);
        self.surface.set_edge(thumb.region(), thumb.edge(), percent);
        self.surface.set_edge(Region::Progress, thumb.edge(), percent);

        let value = self.state.value();
        let label_value = match thumb {
            Thumb::Low => value.from,
            Thumb::High => value.to,
        };
        let label = self.format_value.format(label_value);
        self.surface.set_text(thumb.label(), &label);
        trace!(?thumb, percent, label_value, "thumb moved");
    }

    /// Ends the drag and returns the value to broadcast.
    fn release(&mut self) -> Option<(Selection, Handlers)> {
        let DragState::Dragging { thumb, .. } = self.state.drag else {
            trace!("pointer release without active drag");
            return None;
        };
        self.state.drag = DragState::Idle;
        self.surface.set_dragging(false);
        self.subscription = None;

        let selection = self.state.value();
        debug!(?thumb, from = selection.from, to = selection.to, "range selected");
        let handlers = self
            .observers
            .iter()
            .map(|(_, handler)| Rc::clone(handler))
            .collect();
        Some((selection, handlers))
    }
}

fn handle_pointer_event<S: SliderSurface>(
    inner: &Weak<RefCell<SliderInner<S>>>,
    event: &PointerEvent,
) {
    let Some(inner) = inner.upgrade() else {
        return;
    };
    let Ok(mut guard) = inner.try_borrow_mut() else {
        trace!(?event, "slider busy, pointer event dropped");
        return;
    };
    let commit = match event.kind {
        PointerEventKind::Move => {
            guard.pointer_move(event.client_x);
            None
        }
        PointerEventKind::Up => guard.release(),
    };
    drop(guard);

    if let Some((selection, handlers)) = commit {
        for handler in handlers {
            handler(selection);
        }
    }
}

/// A dual-thumb range slider mounted on a [`SliderSurface`].
///
/// The low thumb is positioned from the left edge of the track and the high
/// thumb from the right edge; they never cross. Dragging updates the thumbs
/// and the moving thumb's label continuously, and commits the selection to
/// subscribers only on release.
///
/// Every operation is a no-op after [`destroy`](Self::destroy).
pub struct DoubleSlider<S: SliderSurface + 'static> {
    inner: Rc<RefCell<SliderInner<S>>>,
    hub: PointerHub,
}

impl<S: SliderSurface + 'static> DoubleSlider<S> {
    /// Validates `config`, mounts it on `surface` and listens for document
    /// pointer events on `hub` while dragging.
    pub fn new(
        config: &SliderConfig,
        mut surface: S,
        hub: &PointerHub,
    ) -> Result<Self, ConfigError> {
        let validated = config.validate()?;
        surface.disable_native_drag();

        let mut inner = SliderInner {
            state: SliderState::new(validated.domain),
            surface,
            format_value: validated.format_value,
            subscription: None,
            observers: Vec::new(),
            next_observer: 0,
            destroyed: false,
        };
        inner.render(validated.selected);
        debug!(
            min = validated.domain.min(),
            max = validated.domain.max(),
            from = validated.selected.from,
            to = validated.selected.to,
            "double slider mounted"
        );

        Ok(Self {
            inner: Rc::new(RefCell::new(inner)),
            hub: hub.clone(),
        })
    }

    /// Captures `thumb` after a press at `client_x`.
    ///
    /// Returns `false` when the press was ignored: another thumb is already
    /// captured, the domain has no draggable range, or the slider is
    /// destroyed.
    pub fn press_thumb(&self, thumb: Thumb, client_x: f64) -> bool {
        let Ok(mut inner) = self.inner.try_borrow_mut() else {
            trace!(?thumb, "slider busy, thumb press dropped");
            return false;
        };
        if inner.destroyed {
            debug!(?thumb, "thumb press on destroyed slider ignored");
            return false;
        }
        if inner.state.drag.is_dragging() {
            trace!(?thumb, "thumb press while dragging ignored");
            return false;
        }
        if inner.state.current.is_degenerate() {
            trace!(?thumb, "thumb press on slider without draggable range ignored");
            return false;
        }

        let anchor_offset = inner
            .surface
            .rect(thumb.region())
            .map(|rect| anchor_offset(thumb, rect, client_x))
            .filter(|offset| offset.is_finite())
            .unwrap_or(0.0);
        inner.state.drag = DragState::Dragging {
            thumb,
            anchor_offset,
        };
        inner.surface.set_dragging(true);

        let weak = Rc::downgrade(&self.inner);
        let subscription = self
            .hub
            .subscribe(move |event| handle_pointer_event(&weak, event));
        inner.subscription = Some(subscription);
        debug!(?thumb, anchor_offset, "thumb captured");
        true
    }

    /// The selected range, derived from the current thumb positions.
    ///
    /// Reflects intermediate positions while a drag is in progress.
    pub fn value(&self) -> Selection {
        self.inner.borrow().state.value()
    }

    /// Current thumb percentages.
    pub fn percentages(&self) -> ThumbPercentages {
        self.inner.borrow().state.percentages
    }

    /// Domain the thumbs currently map onto.
    pub fn domain(&self) -> Domain {
        self.inner.borrow().state.current
    }

    /// Domain given at construction.
    pub fn original_domain(&self) -> Domain {
        self.inner.borrow().state.original
    }

    /// Snapshot of the whole slider state.
    pub fn state(&self) -> SliderState {
        self.inner.borrow().state.clone()
    }

    /// Whether a thumb is captured.
    pub fn is_dragging(&self) -> bool {
        self.inner.borrow().state.drag.is_dragging()
    }

    /// The captured thumb, if any.
    pub fn drag_target(&self) -> Option<Thumb> {
        self.inner.borrow().state.drag.thumb()
    }

    /// Whether [`destroy`](Self::destroy) has been called.
    pub fn is_destroyed(&self) -> bool {
        self.inner.borrow().destroyed
    }

    /// Restores the original domain and selects all of it.
    ///
    /// An in-progress drag is cancelled without notifying subscribers.
    pub fn reset(&self) {
        let mut inner = self.inner.borrow_mut();
        if inner.destroyed {
            debug!("reset on destroyed slider ignored");
            return;
        }
        inner.cancel_drag();
        inner.state.current = inner.state.original;
        let selection = Selection::full(inner.state.original);
        inner.render(selection);
        debug!(from = selection.from, to = selection.to, "slider reset");
    }

    /// Moves both thumbs to `selection` without notifying subscribers.
    ///
    /// The selection is clamped into the current domain like the initial
    /// one. An in-progress drag is cancelled.
    pub fn set_selected(&self, selection: Selection) -> Result<(), ConfigError> {
        let mut inner = self.inner.borrow_mut();
        if inner.destroyed {
            debug!("selection update on destroyed slider ignored");
            return Ok(());
        }
        let selection = clamp_selection(inner.state.current, selection)?;
        inner.cancel_drag();
        inner.render(selection);
        debug!(from = selection.from, to = selection.to, "selection updated");
        Ok(())
    }

    /// Detaches the slider and releases its document subscription.
    ///
    /// Safe to call repeatedly and regardless of drag state.
    pub fn destroy(&self) {
        let mut inner = self.inner.borrow_mut();
        inner.subscription = None;
        if inner.destroyed {
            return;
        }
        inner.state.drag = DragState::Idle;
        inner.observers.clear();
        inner.surface.detach();
        inner.destroyed = true;
        debug!("double slider destroyed");
    }

    /// Registers `handler` for committed selections.
    pub fn subscribe<F>(&self, handler: F) -> ObserverId
    where
        F: Fn(Selection) + 'static,
    {
        let mut inner = self.inner.borrow_mut();
        let id = ObserverId(inner.next_observer);
        inner.next_observer += 1;
        if inner.destroyed {
            debug!(?id, "subscription on destroyed slider will never fire");
        } else {
            inner.observers.push((id, Rc::new(handler)));
        }
        id
    }

    /// Removes a handler registered with [`subscribe`](Self::subscribe).
    pub fn unsubscribe(&self, id: ObserverId) -> bool {
        let mut inner = self.inner.borrow_mut();
        let before = inner.observers.len();
        inner.observers.retain(|(observer, _)| *observer != id);
        inner.observers.len() != before
    }

    /// Runs `f` with the surface.
    pub fn with_surface<R>(&self, f: impl FnOnce(&S) -> R) -> R {
        f(&self.inner.borrow().surface)
    }

    /// Runs `f` with the surface mutably, e.g. to simulate a reflow.
    pub fn with_surface_mut<R>(&self, f: impl FnOnce(&mut S) -> R) -> R {
        f(&mut self.inner.borrow_mut().surface)
    }
}

impl<S: SliderSurface + 'static> fmt::Debug for DoubleSlider<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.inner.try_borrow() {
            Ok(inner) => f
                .debug_struct("DoubleSlider")
                .field("state", &inner.state)
                .field("observers", &inner.observers.len())
                .field("destroyed", &inner.destroyed)
                .finish(),
            Err(_) => f.debug_struct("DoubleSlider").finish_non_exhaustive(),
        }
    }
}
