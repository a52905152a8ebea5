// src/domain/article/search.rs
//! Transient search criteria. Each value lives for one request and is never
//! persisted; the dispatch over them is in the application query service.

use crate::domain::article::value_objects::Price;
use crate::domain::category::CategoryId;

/// Name filter for the article listing. An empty name is a valid submission
/// and yields an empty result set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertySearch {
    pub name: String,
}

/// Inclusive price window. Bounds are used exactly as supplied; an inverted
/// window matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceSearch {
    pub min_price: Price,
    pub max_price: Price,
}

/// Category filter. `None` means the form was submitted with no category
/// selected, which falls back to the full listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategorySearch {
    pub category: Option<CategoryId>,
}
