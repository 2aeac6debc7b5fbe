//! Product list demo for `double-slider`.
//!
//! The page filters a product catalog by price with a dual-thumb slider and
//! rebuilds the products request whenever a range is committed.

pub mod filter;
pub mod page;

pub use filter::{ProductFilter, ProductStatus, SortOrder};
pub use page::{PageError, ProductListPage};
