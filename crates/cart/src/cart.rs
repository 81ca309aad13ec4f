use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use storefront_core::{Product, ProductId, ValueObject};

/// One product's entry in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    /// Display snapshot captured when the line was first added; later
    /// refetches of the catalog do not touch it.
    pub product: Product,
    /// Always positive; a line that would drop to zero is removed instead.
    pub quantity: u32,
}

impl CartLine {
    pub fn product_id(&self) -> ProductId {
        self.product.id
    }

    /// Price x quantity for this line.
    pub fn line_total(&self) -> Decimal {
        self.product.price * Decimal::from(self.quantity)
    }
}

/// Derived cart totals.
///
/// Never stored independently of the lines: every mutation recomputes them
/// with a fresh pass over the lines, so they cannot drift.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartTotals {
    /// Sum of all line quantities.
    pub total_items: u64,
    /// Sum of price x quantity over all lines.
    pub total_amount: Decimal,
}

impl ValueObject for CartTotals {}

/// Cart engine: insertion-ordered lines with unique product ids.
///
/// Every public operation is total: invalid quantities are normalized
/// (non-positive removes the line) and absent ids are no-ops, never errors.
#[derive(Debug, Clone, Default)]
pub struct CartEngine {
    lines: Vec<CartLine>,
    totals: CartTotals,
}

impl CartEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines in insertion order (stable display).
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn totals(&self) -> CartTotals {
        self.totals
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of distinct lines (not the summed quantity).
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn line(&self, product_id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.product.id == product_id)
    }

    /// Add `quantity` of a product.
    ///
    /// An existing line for the same id is incremented; otherwise a new line
    /// is appended with a snapshot of the product. A quantity of 0 is a
    /// no-op.
    pub fn add_item(&mut self, product: &Product, quantity: u32) {
        if quantity == 0 {
            return;
        }
        match self.lines.iter_mut().find(|l| l.product.id == product.id) {
            Some(line) => line.quantity = line.quantity.saturating_add(quantity),
            None => self.lines.push(CartLine {
                product: product.clone(),
                quantity,
            }),
        }
        self.recalculate();
    }

    /// Set a line's quantity to an exact value (not additive).
    ///
    /// Non-positive values remove the line; an absent id is a no-op either
    /// way.
    pub fn set_quantity(&mut self, product_id: ProductId, quantity: i64) {
        if quantity <= 0 {
            self.lines.retain(|l| l.product.id != product_id);
        } else if let Some(line) = self.lines.iter_mut().find(|l| l.product.id == product_id) {
            line.quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        }
        self.recalculate();
    }

    /// Delete the line if present; no-op if absent.
    pub fn remove_item(&mut self, product_id: ProductId) {
        self.lines.retain(|l| l.product.id != product_id);
        self.recalculate();
    }

    /// Remove all lines; totals return to zero.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.recalculate();
    }

    fn recalculate(&mut self) {
        self.totals = self
            .lines
            .iter()
            .fold(CartTotals::default(), |acc, line| CartTotals {
                total_items: acc.total_items + u64::from(line.quantity),
                total_amount: acc.total_amount + line.line_total(),
            });
    }
}
