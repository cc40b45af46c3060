//! Split domain errors
//!
//! Only malformed configuration (values that originate from direct user
//! input) surfaces as an error. Ordinary contention (two people grabbing
//! the last unit near-simultaneously) is a rejected no-op, not an error;
//! see [`crate::ledger::ClaimOutcome`].

use core_kernel::ItemId;
use thiserror::Error;

/// Errors that can occur in the split domain
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SplitError {
    /// Item not found
    #[error("Item not found: {0}")]
    ItemNotFound(ItemId),

    /// Person not found
    #[error("Person not found in roster: {0}")]
    PersonNotFound(core_kernel::PersonId),

    /// Item already carries a shared portion
    #[error("Item {0} already has a shared portion")]
    ShareAlreadyExists(ItemId),

    /// Share count below the minimum of two slots
    #[error("Share count must be at least 2, got {0}")]
    InvalidShareCount(u32),

    /// Shared quantity outside what the item can still offer
    #[error("Shared quantity {quantity} not in [1, {available}] for item {item_id}")]
    InvalidShareQuantity {
        item_id: ItemId,
        quantity: u32,
        available: u32,
    },

    /// Item name empty after trimming
    #[error("Item name must not be empty")]
    EmptyItemName,

    /// Negative item price
    #[error("Item price must not be negative")]
    NegativePrice,

    /// Zero item quantity
    #[error("Item quantity must be at least 1")]
    InvalidQuantity,

    /// Person name empty after trimming
    #[error("Person name must not be empty")]
    EmptyPersonName,

    /// Person name already taken (case-insensitive)
    #[error("Person name already taken: {0}")]
    DuplicatePersonName(String),
}
