//! Product listing state: current page, sort, and the last fetched page.
//!
//! DESIGN
//! ======
//! Every page or sort change asks for exactly one fresh page; results replace
//! `products`/`total_pages` wholesale. Each fetch is stamped with a
//! generation number and only the newest generation may land, so a slow
//! response for an old query can never overwrite a newer one.

#[cfg(test)]
#[path = "products_test.rs"]
mod products_test;

use crate::net::api::ApiError;
use crate::net::types::{Product, ProductPage};

/// Columns the server can sort by.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SortField {
    #[default]
    Name,
    Price,
}

impl SortField {
    /// Value sent in the `sort` query parameter.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Price => "price",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// Value sent in the `order` query parameter.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

/// Parameters identifying one product page request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ProductQuery {
    /// 1-based page index.
    pub page: u32,
    pub sort: SortField,
    pub order: SortOrder,
}

impl Default for ProductQuery {
    fn default() -> Self {
        Self { page: 1, sort: SortField::Name, order: SortOrder::Asc }
    }
}

/// Handle for an issued fetch; hand it back to [`ProductListing::finish_fetch`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FetchTicket {
    pub generation: u64,
    pub query: ProductQuery,
}

/// What happened when a fetch result was handed back.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The page replaced the table contents.
    Applied,
    /// A newer fetch was issued meanwhile; the result was dropped.
    Stale,
    /// The current fetch failed; the table keeps its last good contents.
    Failed(ApiError),
}

#[derive(Clone, Debug, PartialEq)]
pub struct ProductListing {
    current_page: u32,
    sort_field: SortField,
    sort_order: SortOrder,
    products: Vec<Product>,
    total_pages: u32,
    is_loading: bool,
    generation: u64,
}

impl Default for ProductListing {
    fn default() -> Self {
        Self {
            current_page: 1,
            sort_field: SortField::Name,
            sort_order: SortOrder::Asc,
            products: Vec::new(),
            total_pages: 1,
            is_loading: false,
            generation: 0,
        }
    }
}

impl ProductListing {
    #[must_use]
    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    #[must_use]
    pub fn sort_field(&self) -> SortField {
        self.sort_field
    }

    #[must_use]
    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    #[must_use]
    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Query for the page/sort currently selected.
    #[must_use]
    pub fn query(&self) -> ProductQuery {
        ProductQuery { page: self.current_page, sort: self.sort_field, order: self.sort_order }
    }

    /// Header click on `field`: flip the order if it is already active,
    /// otherwise make it active in ascending order.
    pub fn toggle_sort(&mut self, field: SortField) {
        if field == self.sort_field {
            self.sort_order = self.sort_order.toggled();
        } else {
            self.sort_field = field;
            self.sort_order = SortOrder::Asc;
        }
    }

    /// Move to `page`, clamped to `1..=total_pages`. Returns whether the page changed.
    pub fn go_to_page(&mut self, page: u32) -> bool {
        let target = page.clamp(1, self.total_pages.max(1));
        if target == self.current_page {
            return false;
        }
        self.current_page = target;
        true
    }

    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Start a fetch for the current query and supersede any in flight.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.generation += 1;
        self.is_loading = true;
        FetchTicket { generation: self.generation, query: self.query() }
    }

    /// Hand back the result of the fetch identified by `ticket`.
    pub fn finish_fetch(&mut self, ticket: FetchTicket, result: Result<ProductPage, ApiError>) -> FetchOutcome {
        if ticket.generation != self.generation {
            return FetchOutcome::Stale;
        }
        self.is_loading = false;
        match result {
            Ok(page) => {
                self.products = page.products;
                self.total_pages = u32::try_from(page.total_pages.max(1)).unwrap_or(u32::MAX);
                FetchOutcome::Applied
            }
            Err(err) => FetchOutcome::Failed(err),
        }
    }
}

/// Render `amount` as US dollars, e.g. `$1,234.50` or `-$3.00`.
#[must_use]
pub fn format_usd(amount: f64) -> String {
    #[allow(clippy::cast_possible_truncation)]
    let cents = (amount * 100.0).round() as i64;
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.unsigned_abs();
    let dollars = (cents / 100).to_string();

    let mut grouped = String::with_capacity(dollars.len() + dollars.len() / 3);
    for (i, ch) in dollars.chars().enumerate() {
        if i > 0 && (dollars.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{sign}${grouped}.{:02}", cents % 100)
}
