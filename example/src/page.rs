//! The product list page: a price slider wired to the product filter.

use std::{cell::RefCell, rc::Rc};

use double_slider::{ConfigError, DoubleSlider, PointerHub, SliderConfig, SliderSurface};
use tracing::{info, warn};
use url::Url;

use crate::filter::{PRICE_MAX, PRICE_MIN, ProductFilter, ProductStatus};

/// Errors building the page.
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    /// The price slider rejected its configuration.
    #[error("invalid price slider: {0}")]
    Slider(#[from] ConfigError),
    /// The backend URL cannot be used as a base.
    #[error("invalid backend url: {0}")]
    Backend(#[from] url::ParseError),
}

struct Requests {
    backend: Url,
    filter: ProductFilter,
    sent: Vec<Url>,
}

impl Requests {
    fn reload(&mut self) {
        match self.filter.request_url(&self.backend) {
            Ok(url) => {
                info!(%url, "loading products");
                self.sent.push(url);
            }
            Err(err) => warn!(%err, "cannot build products request"),
        }
    }
}

/// Product list with a price slider, title search and status filter.
///
/// Every filter change reloads the list from the first row. Requests are
/// recorded rather than sent.
pub struct ProductListPage<S: SliderSurface + 'static> {
    slider: DoubleSlider<S>,
    requests: Rc<RefCell<Requests>>,
}

impl<S: SliderSurface + 'static> ProductListPage<S> {
    /// Mounts the price slider on `surface` and issues the initial request.
    pub fn new(backend: &str, surface: S, hub: &PointerHub) -> Result<Self, PageError> {
        let backend = Url::parse(backend)?;
        // Fail early on a backend that cannot carry the products path.
        backend.join(crate::filter::PRODUCTS_PATH)?;

        let config = SliderConfig::default().min(PRICE_MIN).max(PRICE_MAX);
        let slider = DoubleSlider::new(&config, surface, hub)?;

        let requests = Rc::new(RefCell::new(Requests {
            backend,
            filter: ProductFilter::default(),
            sent: Vec::new(),
        }));
        let on_select = Rc::clone(&requests);
        slider.subscribe(move |price| {
            let mut requests = on_select.borrow_mut();
            requests.filter.select_price(price);
            requests.reload();
        });
        requests.borrow_mut().reload();

        Ok(Self { slider, requests })
    }

    /// The price slider.
    pub fn slider(&self) -> &DoubleSlider<S> {
        &self.slider
    }

    /// Current filter.
    pub fn filter(&self) -> ProductFilter {
        self.requests.borrow().filter.clone()
    }

    /// Requests issued so far, oldest first.
    pub fn requests(&self) -> Vec<Url> {
        self.requests.borrow().sent.clone()
    }

    /// Types into the title search box.
    pub fn search_title(&self, title: &str) {
        let mut requests = self.requests.borrow_mut();
        requests.filter.search_title(title);
        requests.reload();
    }

    /// Picks a value in the status select.
    pub fn filter_status(&self, status: Option<ProductStatus>) {
        let mut requests = self.requests.borrow_mut();
        requests.filter.filter_status(status);
        requests.reload();
    }

    /// Scrolls to the next page.
    pub fn load_more(&self) {
        let mut requests = self.requests.borrow_mut();
        requests.filter.next_page();
        requests.reload();
    }

    /// The "Clear filters" button.
    pub fn clear_filters(&self) {
        self.slider.reset();
        let mut requests = self.requests.borrow_mut();
        requests.filter.clear();
        requests.reload();
    }
}
