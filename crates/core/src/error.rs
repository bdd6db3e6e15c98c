//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, expected outcomes of normal use
/// (validation, unknown names, rejected stock movements). Every variant is
/// recoverable: the interface reports it and the session continues.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. blank name, negative price).
    #[error("validation failed: {0}")]
    Validation(String),

    /// No item carries the requested name.
    #[error("item not found")]
    NotFound,

    /// A stock decrement larger than the quantity on hand.
    #[error("insufficient quantity: requested {requested}, available {available}")]
    InsufficientQuantity { requested: u64, available: u64 },

    /// An extremal query was asked of an inventory with no items.
    #[error("inventory is empty")]
    EmptyInventory,
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }

    pub fn insufficient(requested: u64, available: u64) -> Self {
        Self::InsufficientQuantity {
            requested,
            available,
        }
    }

    pub fn empty() -> Self {
        Self::EmptyInventory
    }
}
