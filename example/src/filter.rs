//! Query state of the product list.

use double_slider::Selection;
use url::Url;

/// Lowest price offered by the catalog.
pub const PRICE_MIN: f64 = 0.0;
/// Highest price offered by the catalog.
pub const PRICE_MAX: f64 = 4000.0;
/// Rows fetched per page.
pub const PAGE_STEP: usize = 30;
/// Products endpoint, relative to the backend URL.
pub const PRODUCTS_PATH: &str = "api/rest/products";

/// Value of the status select.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductStatus {
    /// Listed products.
    Active,
    /// Hidden products.
    Inactive,
}

impl ProductStatus {
    fn query_value(self) -> &'static str {
        match self {
            ProductStatus::Active => "1",
            ProductStatus::Inactive => "0",
        }
    }
}

/// Sort direction of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Ascending.
    #[default]
    Asc,
    /// Descending.
    Desc,
}

impl SortOrder {
    fn query_value(self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

/// Everything the product request depends on.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductFilter {
    /// Price range from the slider.
    pub price: Selection,
    /// Title substring; empty means any title.
    pub title: String,
    /// Status filter; `None` means any status.
    pub status: Option<ProductStatus>,
    /// Column the table is sorted by.
    pub sort: String,
    /// Sort direction.
    pub order: SortOrder,
    /// First row requested.
    pub start: usize,
    /// One past the last row requested.
    pub end: usize,
}

impl Default for ProductFilter {
    fn default() -> Self {
        Self {
            price: Selection::new(PRICE_MIN, PRICE_MAX),
            title: String::new(),
            status: None,
            sort: "title".to_owned(),
            order: SortOrder::Asc,
            start: 1,
            end: 1 + PAGE_STEP,
        }
    }
}

impl ProductFilter {
    /// Applies a committed slider selection.
    pub fn select_price(&mut self, price: Selection) {
        self.price = price;
        self.restart_paging();
    }

    /// Changes the title filter.
    pub fn search_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
        self.restart_paging();
    }

    /// Changes the status filter.
    pub fn filter_status(&mut self, status: Option<ProductStatus>) {
        self.status = status;
        self.restart_paging();
    }

    /// Sorts by `sort` in `order`.
    pub fn sort_by(&mut self, sort: impl Into<String>, order: SortOrder) {
        self.sort = sort.into();
        self.order = order;
        self.restart_paging();
    }

    /// Advances to the next page, as infinite scrolling does.
    pub fn next_page(&mut self) {
        self.start = self.end;
        self.end += PAGE_STEP;
    }

    /// Drops the text and status filters and widens the price range back to
    /// the whole catalog.
    pub fn clear(&mut self) {
        self.title.clear();
        self.status = None;
        self.select_price(Selection::new(PRICE_MIN, PRICE_MAX));
    }

    /// Any filter change loads from the first row again.
    fn restart_paging(&mut self) {
        self.start = 1;
        self.end = 1 + PAGE_STEP;
    }

    /// The products request for this filter against `backend`.
    pub fn request_url(&self, backend: &Url) -> Result<Url, url::ParseError> {
        let mut url = backend.join(PRODUCTS_PATH)?;
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("price_gte", &self.price.from.to_string());
            query.append_pair("price_lte", &self.price.to.to_string());
            if !self.title.is_empty() {
                query.append_pair("title_like", &self.title);
            }
            if let Some(status) = self.status {
                query.append_pair("status", status.query_value());
            }
            query.append_pair("_sort", &self.sort);
            query.append_pair("_order", self.order.query_value());
            query.append_pair("_start", &self.start.to_string());
            query.append_pair("_end", &self.end.to_string());
        }
        Ok(url)
    }
}
