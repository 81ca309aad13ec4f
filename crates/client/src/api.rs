//! Store API seam: trait + failure model.

use async_trait::async_trait;
use thiserror::Error;

use storefront_core::Product;

/// Failure fetching from the remote store API.
///
/// Captured by the catalog lifecycle as a status + message; never propagated
/// across a session command boundary.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport-level failure (connection refused, DNS, TLS, ...).
    #[error("request failed: {0}")]
    Transport(String),

    /// The request exceeded the client timeout.
    #[error("request timed out")]
    Timeout,

    /// The server answered with a non-success status.
    #[error("unexpected status {0}")]
    Status(u16),

    /// The body was not a valid product/category payload.
    #[error("malformed response body: {0}")]
    Decode(String),
}

/// Upstream product catalog as exposed by the remote store API.
#[async_trait]
pub trait StoreApi: Send + Sync {
    /// Fetch the complete product collection.
    async fn fetch_all_products(&self) -> Result<Vec<Product>, FetchError>;

    /// Fetch the distinct category names.
    async fn fetch_categories(&self) -> Result<Vec<String>, FetchError>;

    /// Fetch only the products of one category (alternative load path).
    async fn fetch_products_by_category(&self, category: &str)
    -> Result<Vec<Product>, FetchError>;
}
