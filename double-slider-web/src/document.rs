//! Document-level pointer tracking shared by every slider on the page.
//!
//! One `pointermove`/`pointerup` pair is installed per thread and forwarded
//! into a [`PointerHub`]. Sliders only hold hub subscriptions while a thumb
//! is captured, so idle sliders cost nothing per event.

use std::cell::RefCell;

use double_slider::{PointerEvent, PointerHub};
use gloo_events::{EventListener, EventListenerOptions};
use js_sys::Reflect;
use tracing::debug;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Event, MouseEvent};

struct DocumentHub {
    hub: PointerHub,
    _listeners: [EventListener; 2],
}

thread_local! {
    static DOCUMENT_HUB: RefCell<Option<DocumentHub>> = const { RefCell::new(None) };
}

/// The hub fed by `document`'s pointer events, installing it on first use.
pub fn document_hub(document: &Document) -> PointerHub {
    DOCUMENT_HUB.with(|cell| {
        let mut slot = cell.borrow_mut();
        if let Some(installed) = slot.as_ref() {
            return installed.hub.clone();
        }

        let hub = PointerHub::new();
        let listeners = [
            forward(document, "pointermove", hub.clone(), PointerEvent::moved),
            forward(document, "pointerup", hub.clone(), PointerEvent::released),
        ];
        debug!("document pointer listeners installed");
        *slot = Some(DocumentHub {
            hub: hub.clone(),
            _listeners: listeners,
        });
        hub
    })
}

fn forward(
    document: &Document,
    event_type: &'static str,
    hub: PointerHub,
    make: fn(f64) -> PointerEvent,
) -> EventListener {
    EventListener::new_with_options(
        document,
        event_type,
        EventListenerOptions::enable_prevent_default(),
        move |event: &Event| {
            let Some(pointer) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            let delivered = hub.dispatch(make(client_x(pointer)));
            // Keep text selection from following an active drag.
            if delivered > 0 {
                event.prevent_default();
            }
        },
    )
}

/// Horizontal client coordinate of `event`, keeping sub-pixel precision.
///
/// `MouseEvent::client_x` truncates to whole pixels, while the `clientX`
/// property is a double on zoomed pages.
pub(crate) fn client_x(event: &MouseEvent) -> f64 {
    let precise = Reflect::get(event, &JsValue::from_str("clientX"))
        .ok()
        .and_then(|value| value.as_f64());
    precise_or_whole(precise, event.client_x())
}

fn precise_or_whole(precise: Option<f64>, whole: i32) -> f64 {
    precise
        .filter(|x| x.is_finite())
        .unwrap_or_else(|| f64::from(whole))
}
