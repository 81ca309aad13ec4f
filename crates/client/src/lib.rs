//! Remote store API collaborator.
//!
//! The catalog core never talks HTTP itself: it consumes this crate's
//! [`StoreApi`] trait, with [`HttpStoreApi`] as the production
//! implementation.

pub mod api;
pub mod http;

pub use api::{FetchError, StoreApi};
pub use http::{DEFAULT_BASE_URL, HttpStoreApi};
