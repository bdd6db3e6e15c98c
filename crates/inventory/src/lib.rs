//! Inventory domain module.
//!
//! This crate contains the stock-keeping rules for stockbook, implemented
//! purely as deterministic domain logic (no IO, no terminal concerns).

pub mod inventory;
pub mod item;

pub use inventory::{Inventory, UpsertOutcome};
pub use item::{Item, by_name_ascending, by_price_descending};
