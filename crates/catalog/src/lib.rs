//! Catalog browsing engine (derived state).
//!
//! This crate contains the deterministic pipeline that turns a raw product
//! collection plus a filter specification into a displayed, paginated result
//! set, implemented purely as domain logic (no IO, no HTTP, no storage).

pub mod engine;
pub mod filter;
pub mod view;

pub use engine::{CatalogEngine, CatalogStatus, DEFAULT_PAGE_SIZE, LoadToken};
pub use filter::{FilterSpec, FilterUpdate, PriceRange, SortKey};
