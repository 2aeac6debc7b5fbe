//! A dual-thumb range selection widget.
//!
//! The slider shows a track with two thumbs and a fill between them. The low
//! thumb is positioned as a percentage from the track's left edge and the high
//! thumb as a percentage from its right edge; the two never cross. Dragging a
//! thumb follows the pointer continuously, and releasing it commits the
//! selected `{from, to}` range to subscribers.
//!
//! # Pieces
//!
//! - [`SliderConfig`] describes the domain, the initial selection and the
//!   label formatter, with defaults for all of them.
//! - [`SliderSurface`] is what the slider renders into. The crate ships a
//!   [`HeadlessSurface`]; a DOM surface lives in `double-slider-web`.
//! - [`PointerHub`] stands in for the document: the host forwards pointer
//!   moves and releases into it, and a slider subscribes only while dragging.
//! - [`DoubleSlider`] owns the state and drives the drag state machine.
//!
//! # Example
//!
//! ```
//! use double_slider::{
//!     DoubleSlider, HeadlessSurface, PointerEvent, PointerHub, Selection, SliderConfig, Thumb,
//! };
//!
//! let hub = PointerHub::new();
//! let config = SliderConfig::default().selected(Selection::new(120.0, 180.0));
//! let slider = DoubleSlider::new(&config, HeadlessSurface::default(), &hub).unwrap();
//! assert_eq!(slider.percentages().left, 20.0);
//!
//! slider.subscribe(|selection| println!("filter by {selection:?}"));
//!
//! // Drag the high thumb from 80% of the 1000px track to 90%.
//! slider.press_thumb(Thumb::High, 800.0);
//! hub.dispatch(PointerEvent::moved(900.0));
//! hub.dispatch(PointerEvent::released(900.0));
//!
//! assert_eq!(slider.value(), Selection::new(120.0, 190.0));
//! slider.destroy();
//! ```
#![deny(missing_docs, clippy::unwrap_used)]

mod slider;
mod state;

pub mod config;
pub mod controller;
pub mod geometry;
pub mod headless;
pub mod pointer;
pub mod region;
pub mod surface;
pub mod template;
pub mod value;

pub use config::{ConfigError, Selection, SliderConfig, ValidatedConfig, ValueFormatter};
pub use controller::DragState;
pub use geometry::Rect;
pub use headless::HeadlessSurface;
pub use pointer::{PointerEvent, PointerEventKind, PointerHub, PointerSubscription};
pub use region::{Edge, Region, Thumb};
pub use slider::{DoubleSlider, ObserverId, RangeSelectHandler};
pub use state::SliderState;
pub use surface::SliderSurface;
pub use value::{Domain, ThumbPercentages};
