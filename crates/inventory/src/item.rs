//! A single tracked item: name, quantity on hand, unit price.

use core::cmp::Ordering;
use core::fmt;

use serde::Serialize;

use stockbook_core::{DomainError, DomainResult};

/// One stock-keeping entry.
///
/// Items are created and owned by the inventory collection; all mutation
/// goes through it, so the fields stay private.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Item {
    name: String,
    quantity: u64,
    unit_price: f64,
}

impl Item {
    /// Arguments are validated by the collection's upsert before this runs.
    pub(crate) fn new(name: impl Into<String>, quantity: u64, unit_price: f64) -> Self {
        Self {
            name: name.into(),
            quantity,
            unit_price,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quantity(&self) -> u64 {
        self.quantity
    }

    pub fn unit_price(&self) -> f64 {
        self.unit_price
    }

    /// Quantity times unit price, for this item alone.
    pub fn line_value(&self) -> f64 {
        self.quantity as f64 * self.unit_price
    }

    /// Add `amount` to the quantity on hand.
    ///
    /// Never fails; saturates at the `u64` ceiling rather than wrapping.
    pub fn increment_quantity(&mut self, amount: u64) {
        self.quantity = self.quantity.saturating_add(amount);
    }

    /// Subtract `amount` from the quantity on hand.
    ///
    /// Rejected, with the quantity left untouched, when `amount` exceeds the
    /// quantity on hand. Stock never goes negative.
    pub fn decrement_quantity(&mut self, amount: u64) -> DomainResult<()> {
        match self.quantity.checked_sub(amount) {
            Some(remaining) => {
                self.quantity = remaining;
                Ok(())
            }
            None => Err(DomainError::insufficient(amount, self.quantity)),
        }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Item: {}\tQuantity: {}\tPrice: ${}",
            self.name, self.quantity, self.unit_price
        )
    }
}

/// Sort key: lexicographic by name, ascending.
pub fn by_name_ascending(a: &Item, b: &Item) -> Ordering {
    a.name.cmp(&b.name)
}

/// Sort key: unit price, descending (highest price first).
pub fn by_price_descending(a: &Item, b: &Item) -> Ordering {
    b.unit_price.total_cmp(&a.unit_price)
}
