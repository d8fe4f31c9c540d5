//! Cart aggregation.
//!
//! Lines are keyed by product id and carry a display snapshot taken at
//! add time, so later catalog changes (price edits, deletions) do not
//! touch lines already in the cart. The cart is session-local state with
//! no server-side counterpart; its contract ends at handing the lines
//! and total to the external checkout step.

pub mod money;

pub use money::{line_total, to_decimal, to_f64};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::Product;

use crate::prefs::{KEY_CHECKOUT_PAYLOAD, Prefs, PrefsResult};


/// One product held for purchase.
///
/// `name`, `price` and `image_url` are copied from the product when the
/// line is created; `price` stays fixed for the life of the line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub product_id: i64,
    pub name: String,
    pub price: f64,
    pub image_url: String,
    pub quantity: u32,
}

/// Snapshot handed to the external checkout step
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutPayload {
    pub lines: Vec<CartLine>,
    pub total: f64,
}

/// Quantity-keyed cart with at most one line per product
#[derive(Debug, Default, Clone)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of a product
    pub fn add(&mut self, product: &Product) {
        self.add_qty(product, 1);
    }

    /// Add `quantity` units. An existing line for the same product is
    /// incremented in place, keeping its original price snapshot.
    pub fn add_qty(&mut self, product: &Product, quantity: u32) {
        if quantity == 0 {
            return;
        }
        if let Some(line) = self.lines.iter_mut().find(|l| l.product_id == product.id) {
            line.quantity += quantity;
        } else {
            self.lines.push(CartLine {
                product_id: product.id,
                name: product.name.clone(),
                price: product.price,
                image_url: product.image_url.clone(),
                quantity,
            });
        }
    }

    /// Replace a line's quantity. Zero removes the line entirely.
    pub fn set_quantity(&mut self, product_id: i64, quantity: u32) {
        if quantity == 0 {
            self.remove(product_id);
        } else if let Some(line) = self.lines.iter_mut().find(|l| l.product_id == product_id) {
            line.quantity = quantity;
        }
    }

    pub fn remove(&mut self, product_id: i64) {
        self.lines.retain(|l| l.product_id != product_id);
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Sum of line quantities, not line count
    pub fn count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Cart total, rounded to 2 decimal places
    pub fn total(&self) -> f64 {
        let sum: Decimal = self
            .lines
            .iter()
            .map(|l| money::line_total(l.price, l.quantity))
            .sum();
        money::to_f64(sum)
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Persist the handoff payload for the external checkout step
    pub fn begin_checkout(&self, prefs: &Prefs) -> PrefsResult<CheckoutPayload> {
        let payload = CheckoutPayload {
            lines: self.lines.clone(),
            total: self.total(),
        };
        prefs.put_json(KEY_CHECKOUT_PAYLOAD, &payload)?;
        Ok(payload)
    }

    /// Clear the cart once checkout confirmed the order
    pub fn confirm_checkout(&mut self, prefs: &Prefs) -> PrefsResult<()> {
        self.clear();
        prefs.remove(KEY_CHECKOUT_PAYLOAD)
    }
}
