//! The inventory collection: an ordered sequence of items keyed by name.

use stockbook_core::{DomainError, DomainResult};

use crate::item::{Item, by_name_ascending, by_price_descending};

/// Which branch an upsert took.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    /// No item with that name existed; a new one was appended.
    Added,
    /// The name was already tracked; its quantity grew, its price stayed.
    Restocked,
}

/// An ordered collection of items, logically keyed by name.
///
/// Insertion order is preserved; only the explicit sort operations reorder
/// the sequence. Name uniqueness is enforced by the upsert path rather than
/// a map, and lookups are linear scans stopping at the first match.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Inventory {
    items: Vec<Item>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Full item sequence, in current order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn find(&self, name: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.name() == name)
    }

    fn find_mut(&mut self, name: &str) -> Option<&mut Item> {
        self.items.iter_mut().find(|item| item.name() == name)
    }

    /// Add a new item, or restock an existing one.
    ///
    /// When the name is already tracked, `quantity` is added to the stock on
    /// hand and the originally recorded unit price is kept; `unit_price`
    /// only applies to newly added items. The outcome reports which branch
    /// ran so the caller can phrase its confirmation.
    pub fn add_or_restock(
        &mut self,
        name: &str,
        quantity: u64,
        unit_price: f64,
    ) -> DomainResult<UpsertOutcome> {
        if name.trim().is_empty() {
            return Err(DomainError::validation("item name cannot be blank"));
        }
        if !unit_price.is_finite() || unit_price < 0.0 {
            return Err(DomainError::validation(
                "unit price must be a non-negative finite number",
            ));
        }

        match self.find_mut(name) {
            Some(item) => {
                item.increment_quantity(quantity);
                Ok(UpsertOutcome::Restocked)
            }
            None => {
                self.items.push(Item::new(name, quantity, unit_price));
                Ok(UpsertOutcome::Added)
            }
        }
    }

    /// Delete the named item, returning it.
    pub fn remove(&mut self, name: &str) -> DomainResult<Item> {
        match self.items.iter().position(|item| item.name() == name) {
            Some(index) => Ok(self.items.remove(index)),
            None => Err(DomainError::not_found()),
        }
    }

    /// Add `delta` to the named item's quantity.
    ///
    /// Despite the name, this applies a signed change rather than setting an
    /// absolute value; the historical name is kept on purpose. A negative
    /// `delta` that exceeds the stock on hand is rejected with no mutation.
    pub fn set_quantity(&mut self, name: &str, delta: i64) -> DomainResult<()> {
        let item = self.find_mut(name).ok_or_else(DomainError::not_found)?;
        if delta >= 0 {
            item.increment_quantity(delta as u64);
            Ok(())
        } else {
            item.decrement_quantity(delta.unsigned_abs())
        }
    }

    /// Subtract `amount` from the named item's quantity.
    pub fn decrement(&mut self, name: &str, amount: u64) -> DomainResult<()> {
        let item = self.find_mut(name).ok_or_else(DomainError::not_found)?;
        item.decrement_quantity(amount)
    }

    /// First item with the given name.
    pub fn find_by_name(&self, name: &str) -> DomainResult<&Item> {
        self.find(name).ok_or_else(DomainError::not_found)
    }

    /// All items with `min <= unit_price <= max`, in current sequence order.
    ///
    /// Bounds are inclusive. An empty result is an answer, not an error,
    /// including when `min > max`.
    pub fn find_by_price_range(&self, min: f64, max: f64) -> Vec<&Item> {
        self.items
            .iter()
            .filter(|item| item.unit_price() >= min && item.unit_price() <= max)
            .collect()
    }

    /// Reorder the sequence ascending by name.
    pub fn sort_by_name(&mut self) {
        self.items.sort_by(by_name_ascending);
    }

    /// Reorder the sequence by unit price, highest first.
    pub fn sort_by_price(&mut self) {
        self.items.sort_by(by_price_descending);
    }

    /// Sum of quantity times unit price over all items; `0.0` when empty.
    pub fn total_value(&self) -> f64 {
        // Not `sum()`: the float `Sum` identity is -0.0, which an empty
        // inventory would render as "$-0".
        self.items
            .iter()
            .map(Item::line_value)
            .fold(0.0, |total, line| total + line)
    }

    /// The item with the highest unit price.
    ///
    /// Ties resolve to the first such item in current sequence order.
    pub fn most_expensive(&self) -> DomainResult<&Item> {
        self.extremal(|candidate, best| candidate.unit_price() > best.unit_price())
    }

    /// The item with the lowest unit price.
    ///
    /// Ties resolve to the first such item in current sequence order.
    pub fn cheapest(&self) -> DomainResult<&Item> {
        self.extremal(|candidate, best| candidate.unit_price() < best.unit_price())
    }

    /// Single pass keeping the incumbent unless `beats` holds strictly, so
    /// the first of any tie wins.
    fn extremal(&self, beats: impl Fn(&Item, &Item) -> bool) -> DomainResult<&Item> {
        let mut best: Option<&Item> = None;
        for item in &self.items {
            match best {
                Some(current) if !beats(item, current) => {}
                _ => best = Some(item),
            }
        }
        best.ok_or_else(DomainError::empty)
    }
}
