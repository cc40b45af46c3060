//! Assignment ledger
//!
//! The ledger is the mutable record of all claims and shared portions
//! across the bill's items. Every operation either applies in full or
//! leaves the ledger untouched; after any single sequential application of
//! operations the claim invariant holds for every item:
//!
//! ```text
//! sum(assignments) + shared_portion.quantity <= total_qty
//! ```
//!
//! Serializing concurrent collaborators onto that sequence is the job of
//! the external sync layer; the ledger itself is synchronous.

use tracing::debug;

use core_kernel::{ItemId, Money, PersonId};
use domain_receipt::{BillItem, SharedPortion};

use crate::error::SplitError;

/// Direction of a one-unit individual claim adjustment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClaimDelta {
    /// Claim one more unit
    Increment,
    /// Release one claimed unit
    Decrement,
}

/// Result of a claim or share-membership operation
///
/// Contention is expected (two members racing for the last unit), so an
/// operation that cannot apply is reported as `Rejected` with the state
/// unchanged rather than as an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "a rejected operation left the ledger unchanged"]
pub enum ClaimOutcome {
    /// The operation was applied
    Applied,
    /// The operation would have violated an invariant and was a no-op
    Rejected,
}

impl ClaimOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, ClaimOutcome::Applied)
    }
}

/// A structural edit to one field of an item
#[derive(Debug, Clone, PartialEq)]
pub enum ItemEdit {
    Name(String),
    Price(Money),
    TotalQty(u32),
}

/// In-memory collection of bill items with claim tracking
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssignmentLedger {
    items: Vec<BillItem>,
}

impl AssignmentLedger {
    /// Creates an empty ledger
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Seeds the ledger with parsed bill items
    pub fn from_items(items: Vec<BillItem>) -> Self {
        Self { items }
    }

    /// Current item list, in receipt order
    pub fn items(&self) -> &[BillItem] {
        &self.items
    }

    /// Consumes the ledger, yielding its items
    pub fn into_items(self) -> Vec<BillItem> {
        self.items
    }

    /// Looks up an item by id
    pub fn item(&self, item_id: &ItemId) -> Option<&BillItem> {
        self.items.iter().find(|i| &i.id == item_id)
    }

    fn item_mut(&mut self, item_id: &ItemId) -> Result<&mut BillItem, SplitError> {
        self.items
            .iter_mut()
            .find(|i| &i.id == item_id)
            .ok_or(SplitError::ItemNotFound(*item_id))
    }

    /// Adjusts a person's individual claim on an item by one unit
    ///
    /// An increment is rejected when it would exceed the item's total
    /// quantity net of the shared portion and everyone's claims; a
    /// decrement is rejected when the person holds no claim. A claim
    /// reaching zero removes the map entry rather than storing a zero.
    ///
    /// # Errors
    ///
    /// Returns [`SplitError::ItemNotFound`] for an unknown item.
    pub fn claim_individual(
        &mut self,
        item_id: &ItemId,
        person_id: &PersonId,
        delta: ClaimDelta,
    ) -> Result<ClaimOutcome, SplitError> {
        let item = self.item_mut(item_id)?;

        match delta {
            ClaimDelta::Increment => {
                if item.remaining_quantity() == 0 {
                    debug!(%item_id, %person_id, "claim rejected: no units remaining");
                    return Ok(ClaimOutcome::Rejected);
                }
                *item.assignments.entry(*person_id).or_insert(0) += 1;
            }
            ClaimDelta::Decrement => {
                let Some(current) = item.assignments.get_mut(person_id) else {
                    debug!(%item_id, %person_id, "release rejected: nothing claimed");
                    return Ok(ClaimOutcome::Rejected);
                };
                *current -= 1;
                if *current == 0 {
                    item.assignments.remove(person_id);
                }
            }
        }

        Ok(ClaimOutcome::Applied)
    }

    /// Creates the item's shared portion, enrolling the initiator
    ///
    /// # Errors
    ///
    /// - [`SplitError::ShareAlreadyExists`] when a shared portion is set up
    /// - [`SplitError::InvalidShareCount`] for fewer than two slots
    /// - [`SplitError::InvalidShareQuantity`] when the quantity is zero or
    ///   does not fit within the units left after individual claims
    pub fn initiate_share(
        &mut self,
        item_id: &ItemId,
        quantity: u32,
        share_count: u32,
        initiator: PersonId,
    ) -> Result<(), SplitError> {
        let item = self.item_mut(item_id)?;

        if !item.shared_portion.is_empty() {
            return Err(SplitError::ShareAlreadyExists(*item_id));
        }
        if share_count < 2 {
            return Err(SplitError::InvalidShareCount(share_count));
        }
        let available = item.remaining_quantity();
        if quantity == 0 || quantity > available {
            return Err(SplitError::InvalidShareQuantity {
                item_id: *item_id,
                quantity,
                available,
            });
        }

        item.shared_portion = SharedPortion {
            quantity,
            share_count,
            sharers: vec![initiator],
        };

        Ok(())
    }

    /// Adds a person to the item's shared portion
    ///
    /// Rejected when no share exists, the person is already a sharer, or
    /// every slot is occupied.
    pub fn join_share(
        &mut self,
        item_id: &ItemId,
        person_id: &PersonId,
    ) -> Result<ClaimOutcome, SplitError> {
        let item = self.item_mut(item_id)?;
        let portion = &mut item.shared_portion;

        if portion.is_empty() || portion.has_sharer(person_id) || portion.is_full() {
            debug!(%item_id, %person_id, "join rejected");
            return Ok(ClaimOutcome::Rejected);
        }

        portion.sharers.push(*person_id);
        Ok(ClaimOutcome::Applied)
    }

    /// Removes a person from the item's shared portion
    ///
    /// Rejected when the person is not a sharer. The shared-portion record
    /// persists even when the last sharer leaves.
    pub fn leave_share(
        &mut self,
        item_id: &ItemId,
        person_id: &PersonId,
    ) -> Result<ClaimOutcome, SplitError> {
        let item = self.item_mut(item_id)?;
        let portion = &mut item.shared_portion;

        let Some(position) = portion.sharers.iter().position(|s| s == person_id) else {
            debug!(%item_id, %person_id, "leave rejected: not a sharer");
            return Ok(ClaimOutcome::Rejected);
        };

        portion.sharers.remove(position);
        Ok(ClaimOutcome::Applied)
    }

    /// Explicitly destroys the item's shared portion
    ///
    /// # Errors
    ///
    /// Returns [`SplitError::ItemNotFound`] for an unknown item.
    pub fn remove_share(&mut self, item_id: &ItemId) -> Result<(), SplitError> {
        let item = self.item_mut(item_id)?;
        item.shared_portion = SharedPortion::default();
        Ok(())
    }

    /// Appends a manually entered item
    ///
    /// # Errors
    ///
    /// Rejects empty names, negative prices and zero quantities.
    pub fn add_item(
        &mut self,
        name: impl Into<String>,
        price: Money,
        total_qty: u32,
    ) -> Result<ItemId, SplitError> {
        let name = name.into();
        let trimmed = name.trim();

        if trimmed.is_empty() {
            return Err(SplitError::EmptyItemName);
        }
        if price.is_negative() {
            return Err(SplitError::NegativePrice);
        }
        if total_qty == 0 {
            return Err(SplitError::InvalidQuantity);
        }

        let item = BillItem::new(trimmed, price, total_qty);
        let id = item.id;
        self.items.push(item);
        Ok(id)
    }

    /// Edits one field of an item
    ///
    /// Price and quantity edits do not retroactively validate existing
    /// assignments; the completion predicate and calculator tolerate a
    /// transiently over- or under-subscribed item.
    pub fn edit_item(&mut self, item_id: &ItemId, edit: ItemEdit) -> Result<(), SplitError> {
        let item = self.item_mut(item_id)?;

        match edit {
            ItemEdit::Name(name) => {
                let trimmed = name.trim();
                if trimmed.is_empty() {
                    return Err(SplitError::EmptyItemName);
                }
                item.name = trimmed.to_string();
            }
            ItemEdit::Price(price) => {
                if price.is_negative() {
                    return Err(SplitError::NegativePrice);
                }
                item.price = price;
            }
            ItemEdit::TotalQty(total_qty) => {
                if total_qty == 0 {
                    return Err(SplitError::InvalidQuantity);
                }
                item.total_qty = total_qty;
            }
        }

        Ok(())
    }

    /// Removes an item from the bill
    pub fn remove_item(&mut self, item_id: &ItemId) -> Result<(), SplitError> {
        let position = self
            .items
            .iter()
            .position(|i| &i.id == item_id)
            .ok_or(SplitError::ItemNotFound(*item_id))?;
        self.items.remove(position);
        Ok(())
    }

    /// Returns true when every item is fully assigned
    pub fn is_complete(&self) -> bool {
        self.items.iter().all(BillItem::is_fully_assigned)
    }
}
