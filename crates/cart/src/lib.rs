//! Shopping cart engine.
//!
//! Pure aggregation logic: line items keyed by product identity with derived
//! totals, no IO and no storage.

pub mod cart;

pub use cart::{CartEngine, CartLine, CartTotals};
