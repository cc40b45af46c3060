//! Structured bill model
//!
//! The bill is produced once per scan by the parser and then mutated by
//! ledger operations under UI control. Subtotal, taxes and grand total are
//! advisory: they are extracted opportunistically from the receipt text and
//! are not required to reconcile with the sum of item prices (OCR noise may
//! make them inconsistent).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use core_kernel::{ItemId, Money, PersonId};

/// A quantity of an item pooled into equal slots among a set of sharers
///
/// The zeroed record means "no shared portion". A shared portion is only
/// created or destroyed explicitly; `sharers` emptying does not remove it.
///
/// # Invariants
///
/// - `sharers.len() <= share_count`
/// - `sharers` holds no duplicates, in join order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SharedPortion {
    /// Number of units pooled into the share
    pub quantity: u32,
    /// Number of equal slots offered
    pub share_count: u32,
    /// People occupying a slot, in join order
    pub sharers: Vec<PersonId>,
}

impl SharedPortion {
    /// Returns true if no shared portion has been set up
    pub fn is_empty(&self) -> bool {
        self.quantity == 0 && self.share_count == 0 && self.sharers.is_empty()
    }

    /// Returns true if `person_id` occupies a slot
    pub fn has_sharer(&self, person_id: &PersonId) -> bool {
        self.sharers.contains(person_id)
    }

    /// Returns true if every slot is occupied
    pub fn is_full(&self) -> bool {
        self.sharers.len() as u32 >= self.share_count
    }

    /// Cost carried by each sharer
    ///
    /// `unit_price × quantity / share_count`; zero when no slots are offered.
    pub fn cost_per_sharer(&self, unit_price: Money) -> Money {
        unit_price
            .multiply(Decimal::from(self.quantity))
            .split_among(self.share_count)
    }
}

/// A priced line item recognized on the receipt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillItem {
    /// Unique, stable identifier
    pub id: ItemId,
    /// Free-text label; letters and whitespace only after parsing
    pub name: String,
    /// Total price for `total_qty` units (not a unit price)
    pub price: Money,
    /// Total units of this item on the receipt
    pub total_qty: u32,
    /// Quantity individually claimed, per person; entries are removed rather
    /// than kept at zero
    #[serde(default)]
    pub assignments: HashMap<PersonId, u32>,
    /// At most one shared allocation per item
    #[serde(default)]
    pub shared_portion: SharedPortion,
}

impl BillItem {
    /// Creates a new unclaimed item with a fresh identifier
    pub fn new(name: impl Into<String>, price: Money, total_qty: u32) -> Self {
        Self {
            id: ItemId::new_v7(),
            name: name.into(),
            price,
            total_qty,
            assignments: HashMap::new(),
            shared_portion: SharedPortion::default(),
        }
    }

    /// Price per unit; zero when `total_qty` is zero
    pub fn unit_price(&self) -> Money {
        self.price.split_among(self.total_qty)
    }

    /// Units individually claimed by `person_id`
    pub fn claimed_by(&self, person_id: &PersonId) -> u32 {
        self.assignments.get(person_id).copied().unwrap_or(0)
    }

    /// Total units claimed, individually and through the shared portion
    pub fn assigned_quantity(&self) -> u32 {
        let individual: u32 = self.assignments.values().sum();
        individual + self.shared_portion.quantity
    }

    /// Units not yet claimed by anyone
    ///
    /// Saturating: edits to `total_qty` can transiently strand more claims
    /// than the item holds, which reads as zero remaining.
    pub fn remaining_quantity(&self) -> u32 {
        self.total_qty.saturating_sub(self.assigned_quantity())
    }

    /// Returns true when every unit of this item has been claimed
    ///
    /// An item with zero total quantity is vacuously complete.
    pub fn is_fully_assigned(&self) -> bool {
        self.total_qty == 0 || self.assigned_quantity() >= self.total_qty
    }
}

/// A named tax line extracted from the receipt (e.g., CGST, SGST)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxLine {
    pub name: String,
    pub amount: Money,
}

/// Parser output: the structured bill
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bill {
    /// Recognized items, in receipt order
    pub items: Vec<BillItem>,
    /// Advisory subtotal as printed, zero when not detected
    #[serde(default)]
    pub subtotal: Money,
    /// Tax lines in receipt order
    #[serde(default)]
    pub taxes: Vec<TaxLine>,
    /// Advisory grand total as printed, zero when not detected
    #[serde(default)]
    pub grand_total: Money,
}

impl Bill {
    /// Sum of all item prices (each already a full line total)
    pub fn items_total(&self) -> Money {
        self.items.iter().map(|i| i.price).sum()
    }

    /// Sum of all detected tax lines
    ///
    /// Seeds the manual tax amount when a scan completes.
    pub fn detected_tax_total(&self) -> Money {
        self.taxes.iter().map(|t| t.amount).sum()
    }
}
