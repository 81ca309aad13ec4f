//! Filter specification: the complete set of user-chosen catalog constraints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use storefront_core::ValueObject;

/// Sort order applied to the derived view after filtering.
///
/// Serde names match the strings the upstream store UI exchanges.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortKey {
    /// Case-insensitive lexical title comparison.
    #[default]
    #[serde(rename = "name-asc")]
    NameAscending,
    #[serde(rename = "price-asc")]
    PriceAscending,
    #[serde(rename = "price-desc")]
    PriceDescending,
    #[serde(rename = "rating-desc")]
    RatingDescending,
}

/// Inclusive price bounds.
///
/// `min <= max` is not enforced: an inverted range is accepted and matches no
/// product at all.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: Decimal,
    pub max: Decimal,
}

impl PriceRange {
    pub fn new(min: Decimal, max: Decimal) -> Self {
        Self { min, max }
    }

    /// Full price domain; the cleared-filter default.
    pub fn unbounded() -> Self {
        Self {
            min: Decimal::ZERO,
            max: Decimal::MAX,
        }
    }

    pub fn contains(&self, price: Decimal) -> bool {
        price >= self.min && price <= self.max
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self::unbounded()
    }
}

impl ValueObject for PriceRange {}

/// The active filter specification.
///
/// Always fully defined: partial updates merge onto the previous complete
/// spec via [`FilterUpdate`], never leaving a field unset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSpec {
    /// Exact category constraint; empty means no constraint.
    pub category: String,
    pub price_range: PriceRange,
    pub sort_key: SortKey,
    /// Case-insensitive substring match against title and description; empty
    /// means no constraint.
    pub search_query: String,
}

impl Default for FilterSpec {
    fn default() -> Self {
        Self {
            category: String::new(),
            price_range: PriceRange::default(),
            sort_key: SortKey::default(),
            search_query: String::new(),
        }
    }
}

impl ValueObject for FilterSpec {}

impl FilterSpec {
    /// Shallow field merge: provided fields replace, omitted fields keep
    /// their previous value.
    pub fn merge(&mut self, update: FilterUpdate) {
        if let Some(category) = update.category {
            self.category = category;
        }
        if let Some(price_range) = update.price_range {
            self.price_range = price_range;
        }
        if let Some(sort_key) = update.sort_key {
            self.sort_key = sort_key;
        }
        if let Some(search_query) = update.search_query {
            self.search_query = search_query;
        }
    }
}

/// Partial filter mutation; `None` fields are left untouched by the merge.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterUpdate {
    pub category: Option<String>,
    pub price_range: Option<PriceRange>,
    pub sort_key: Option<SortKey>,
    pub search_query: Option<String>,
}

impl FilterUpdate {
    pub fn category(category: impl Into<String>) -> Self {
        Self {
            category: Some(category.into()),
            ..Self::default()
        }
    }

    pub fn price_range(range: PriceRange) -> Self {
        Self {
            price_range: Some(range),
            ..Self::default()
        }
    }

    pub fn sort_key(sort_key: SortKey) -> Self {
        Self {
            sort_key: Some(sort_key),
            ..Self::default()
        }
    }

    pub fn search_query(query: impl Into<String>) -> Self {
        Self {
            search_query: Some(query.into()),
            ..Self::default()
        }
    }
}
