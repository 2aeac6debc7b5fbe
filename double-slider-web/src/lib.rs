//! Browser binding for [`double_slider`].
//!
//! [`WebDoubleSlider::mount`] renders the slider markup into a container,
//! wires thumb presses to the drag controller, feeds document pointer events
//! through a shared [`PointerHub`](double_slider::PointerHub), and re-emits
//! every committed selection as a bubbling `range-select` [`CustomEvent`]
//! whose `detail` is `{ from, to }`, so page code can listen on any
//! ancestor:
//!
//! ```js
//! element.addEventListener("range-select", ({ detail: { from, to } }) => {
//!   url.searchParams.set("price_gte", from);
//!   url.searchParams.set("price_lte", to);
//! });
//! ```
//!
//! [`CustomEvent`]: web_sys::CustomEvent
#![deny(missing_docs, clippy::unwrap_used)]

mod document;
mod error;
mod surface;

use std::rc::Rc;

use double_slider::{ConfigError, DoubleSlider, ObserverId, Selection, SliderConfig, Thumb};
use gloo_events::{EventListener, EventListenerOptions};
use js_sys::{Object, Reflect};
use tracing::{debug, warn};
use wasm_bindgen::prelude::*;
use web_sys::{CustomEvent, CustomEventInit, Element, Event, HtmlElement, MouseEvent};

pub use document::document_hub;
pub use error::MountError;
pub use surface::WebSurface;

/// Name of the DOM event fired on release.
pub const RANGE_SELECT_EVENT: &str = "range-select";

/// Installs the panic hook when the module is instantiated.
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();
}

/// A [`DoubleSlider`] mounted into the page.
///
/// Dropping the handle unregisters the thumb listeners but leaves the markup
/// in place; call [`destroy`](Self::destroy) to remove it.
pub struct WebDoubleSlider {
    slider: Rc<DoubleSlider<WebSurface>>,
    root: HtmlElement,
    thumb_listeners: Vec<EventListener>,
}

impl WebDoubleSlider {
    /// Mounts a slider described by `config` at the end of `container`.
    pub fn mount(container: &Element, config: &SliderConfig) -> Result<Self, MountError> {
        let window = web_sys::window().ok_or(MountError::NoWindow)?;
        let document = window.document().ok_or(MountError::NoDocument)?;

        let initial = config
            .selected
            .unwrap_or_else(|| Selection::new(config.min, config.max));
        let surface = WebSurface::mount(
            &document,
            container,
            &config.format_value.format(initial.from),
            &config.format_value.format(initial.to),
        )?;
        let root = surface.root().clone();
        let thumbs = [Thumb::Low, Thumb::High].map(|thumb| {
            let element = surface.element(thumb.region()).clone();
            (thumb, element)
        });

        let hub = document_hub(&document);
        let slider = match DoubleSlider::new(config, surface, &hub) {
            Ok(slider) => Rc::new(slider),
            Err(err) => {
                root.remove();
                return Err(err.into());
            }
        };

        let target = root.clone();
        slider.subscribe(move |selection| {
            if let Err(err) = dispatch_range_select(&target, selection) {
                warn!(?err, "failed to dispatch range-select");
            }
        });

        let thumb_listeners = thumbs
            .into_iter()
            .map(|(thumb, element)| press_listener(&slider, thumb, &element))
            .collect();
        debug!("web double slider mounted");

        Ok(Self {
            slider,
            root,
            thumb_listeners,
        })
    }

    /// The root element, where `range-select` is dispatched.
    pub fn element(&self) -> &HtmlElement {
        &self.root
    }

    /// The underlying slider.
    pub fn slider(&self) -> &DoubleSlider<WebSurface> {
        &self.slider
    }

    /// The selected range.
    pub fn value(&self) -> Selection {
        self.slider.value()
    }

    /// Restores the original bounds without firing `range-select`.
    pub fn reset(&self) {
        self.slider.reset();
    }

    /// Moves both thumbs without firing `range-select`.
    pub fn set_selected(&self, selection: Selection) -> Result<(), ConfigError> {
        self.slider.set_selected(selection)
    }

    /// Registers a Rust handler for committed selections.
    pub fn subscribe<F>(&self, handler: F) -> ObserverId
    where
        F: Fn(Selection) + 'static,
    {
        self.slider.subscribe(handler)
    }

    /// Removes a handler registered with [`subscribe`](Self::subscribe).
    pub fn unsubscribe(&self, id: ObserverId) -> bool {
        self.slider.unsubscribe(id)
    }

    /// Removes the markup and every listener. Idempotent.
    pub fn destroy(&mut self) {
        self.thumb_listeners.clear();
        self.slider.destroy();
    }
}

fn press_listener(
    slider: &Rc<DoubleSlider<WebSurface>>,
    thumb: Thumb,
    element: &HtmlElement,
) -> EventListener {
    let slider = Rc::downgrade(slider);
    EventListener::new_with_options(
        element,
        "pointerdown",
        EventListenerOptions::enable_prevent_default(),
        move |event: &Event| {
            let Some(pointer) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            event.prevent_default();
            if let Some(slider) = slider.upgrade() {
                slider.press_thumb(thumb, document::client_x(pointer));
            }
        },
    )
}

fn dispatch_range_select(target: &HtmlElement, selection: Selection) -> Result<(), JsValue> {
    let detail = Object::new();
    Reflect::set(&detail, &"from".into(), &selection.from.into())?;
    Reflect::set(&detail, &"to".into(), &selection.to.into())?;

    let init = CustomEventInit::new();
    init.set_bubbles(true);
    init.set_detail(&detail);
    let event = CustomEvent::new_with_event_init_dict(RANGE_SELECT_EVENT, &init)?;
    target.dispatch_event(&event)?;
    Ok(())
}
