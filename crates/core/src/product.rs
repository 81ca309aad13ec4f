use core::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::entity::Entity;
use crate::value_object::ValueObject;

/// Product identifier, assigned by the upstream store API.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(u64);

impl ProductId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<u64> for ProductId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// Aggregated customer rating shipped with each product record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rating {
    /// Average rating in `[0, 5]`.
    pub rate: Decimal,
    /// Number of ratings behind the average.
    pub count: u64,
}

impl ValueObject for Rating {}

/// Catalog product, mapped field-for-field from the remote store API record.
///
/// Immutable within this core: a refetch replaces the whole collection, and
/// the cart captures its own snapshot at add time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    /// Unit price; non-negative by upstream contract.
    pub price: Decimal,
    pub description: String,
    pub category: String,
    /// Opaque image reference; never interpreted by this core.
    pub image: String,
    pub rating: Rating,
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> ProductId {
        self.id
    }
}
