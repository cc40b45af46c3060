//! Split calculator
//!
//! A pure function from the current ledger snapshot, the people, a total
//! tax and a total tip to a per-person monetary breakdown. Summaries are
//! derived values with no identity across recomputation; they are never
//! stored, only recomputed on demand.
//!
//! Tax is allocated strictly in proportion to each person's share of the
//! item subtotal, independent of which specific items carried which tax
//! line. The tip is split equally among everyone who has joined,
//! regardless of how much each person ordered.

use serde::Serialize;

use core_kernel::{Money, PersonId};
use domain_receipt::BillItem;

use crate::people::Person;

/// Derived per-person monetary breakdown
///
/// `total = subtotal + tax_share + tip_share`. Amounts carry full
/// precision; round at presentation only.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonSummary {
    pub person_id: PersonId,
    pub person_name: String,
    pub subtotal: Money,
    pub tax_share: Money,
    pub tip_share: Money,
    pub total: Money,
}

impl PersonSummary {
    fn zero(person: &Person) -> Self {
        Self {
            person_id: person.id,
            person_name: person.name.clone(),
            subtotal: Money::zero(),
            tax_share: Money::zero(),
            tip_share: Money::zero(),
            total: Money::zero(),
        }
    }
}

/// Computes a summary for every person, in input order
///
/// When the bill carries no priced items every summary is all-zero; this
/// doubles as the division-by-zero guard for the proportional tax step.
pub fn compute_summaries(
    items: &[BillItem],
    people: &[Person],
    total_tax: Money,
    total_tip: Money,
) -> Vec<PersonSummary> {
    let total_items_price: Money = items.iter().map(|i| i.price).sum();

    if total_items_price.is_zero() {
        return people.iter().map(PersonSummary::zero).collect();
    }

    let tip_share = total_tip.split_among(people.len().max(1) as u32);

    people
        .iter()
        .map(|person| {
            let subtotal = person_subtotal(items, &person.id);
            let tax_share = total_tax.multiply(subtotal.proportion_of(total_items_price));
            let total = subtotal + tax_share + tip_share;

            PersonSummary {
                person_id: person.id,
                person_name: person.name.clone(),
                subtotal,
                tax_share,
                tip_share,
                total,
            }
        })
        .collect()
}

/// Sums one person's individual and shared contributions across all items
///
/// Both contributions are additive for the same item: a person may claim
/// units individually and also hold a slot in the item's shared portion.
fn person_subtotal(items: &[BillItem], person_id: &PersonId) -> Money {
    let mut subtotal = Money::zero();

    for item in items {
        let unit_price = item.unit_price();

        let individual_qty = item.claimed_by(person_id);
        if individual_qty > 0 {
            subtotal += unit_price.multiply(individual_qty.into());
        }

        if item.shared_portion.has_sharer(person_id) {
            subtotal += item.shared_portion.cost_per_sharer(unit_price);
        }
    }

    subtotal
}
