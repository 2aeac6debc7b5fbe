//! [`SliderSurface`] backed by real DOM elements.

use double_slider::{
    Edge, Rect, Region, SliderSurface,
    template::{DRAGGING_CLASS, REGION_ATTRIBUTE, template},
};
use gloo_events::{EventListener, EventListenerOptions};
use tracing::warn;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement};

use crate::MountError;

/// The mounted slider subtree.
pub struct WebSurface {
    root: HtmlElement,
    regions: [HtmlElement; 6],
    drag_start: Option<EventListener>,
}

impl WebSurface {
    /// Renders the slider markup and appends it to `container`.
    pub fn mount(
        document: &Document,
        container: &Element,
        from_label: &str,
        to_label: &str,
    ) -> Result<Self, MountError> {
        let holder = document.create_element("div")?;
        holder.set_inner_html(&template(from_label, to_label));
        let root = holder
            .first_element_child()
            .and_then(|element| element.dyn_into::<HtmlElement>().ok())
            .ok_or(MountError::Template)?;

        let regions = index_regions(&root)?;
        container.append_child(&root)?;
        Ok(Self {
            root,
            regions,
            drag_start: None,
        })
    }

    /// The root element.
    pub fn root(&self) -> &HtmlElement {
        &self.root
    }

    /// The element rendering `region`.
    pub fn element(&self, region: Region) -> &HtmlElement {
        &self.regions[region.index()]
    }
}

fn index_regions(root: &HtmlElement) -> Result<[HtmlElement; 6], MountError> {
    let nodes = root.query_selector_all(&format!("[{REGION_ATTRIBUTE}]"))?;
    let elements = (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .map(|element| (element.get_attribute(REGION_ATTRIBUTE), element));
    assign_regions(elements)
}

/// Places each item in the slot of the region its name resolves to.
///
/// Unknown or absent names are skipped; a later duplicate replaces an
/// earlier one. Every region must end up filled.
fn assign_regions<T>(
    named: impl IntoIterator<Item = (Option<String>, T)>,
) -> Result<[T; 6], MountError> {
    let mut slots: [Option<T>; 6] = Default::default();
    for (name, item) in named {
        if let Some(region) = name.as_deref().and_then(Region::from_data_name) {
            slots[region.index()] = Some(item);
        }
    }

    let mut regions = Vec::with_capacity(slots.len());
    for region in Region::ALL {
        let item = slots[region.index()]
            .take()
            .ok_or(MountError::MissingRegion(region.data_name()))?;
        regions.push(item);
    }
    regions.try_into().map_err(|_| MountError::Template)
}

pub(crate) fn css_percent(percent: f64) -> String {
    format!("{percent}%")
}

impl SliderSurface for WebSurface {
    fn rect(&self, region: Region) -> Option<Rect> {
        let rect = self.element(region).get_bounding_client_rect();
        Some(Rect::new(rect.x(), rect.y(), rect.width(), rect.height()))
    }

    fn set_text(&mut self, region: Region, text: &str) {
        self.element(region).set_text_content(Some(text));
    }

    fn set_edge(&mut self, region: Region, edge: Edge, percent: f64) {
        let style = self.element(region).style();
        if let Err(err) = style.set_property(edge.css_property(), &css_percent(percent)) {
            warn!(?region, ?edge, ?err, "failed to position region");
        }
    }

    fn set_dragging(&mut self, dragging: bool) {
        if let Err(err) = self
            .root
            .class_list()
            .toggle_with_force(DRAGGING_CLASS, dragging)
        {
            warn!(dragging, ?err, "failed to toggle dragging class");
        }
    }

    fn disable_native_drag(&mut self) {
        self.drag_start = Some(EventListener::new_with_options(
            &self.root,
            "dragstart",
            EventListenerOptions::enable_prevent_default(),
            |event: &Event| event.prevent_default(),
        ));
    }

    fn detach(&mut self) {
        self.drag_start = None;
        self.root.remove();
    }
}
