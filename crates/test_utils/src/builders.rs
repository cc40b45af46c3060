//! Test data builders
//!
//! Builder patterns for constructing test data with sensible defaults.
//! Tests specify only the fields they care about.

use fake::faker::name::en::FirstName;
use fake::Fake;
use rust_decimal_macros::dec;

use core_kernel::{Money, PersonId};
use domain_receipt::{Bill, BillItem, SharedPortion, TaxLine};
use domain_split::{Person, PersonStatus};

use crate::fixtures::MoneyFixtures;

/// Builder for bill items carrying claims and shares
pub struct BillItemBuilder {
    name: String,
    price: Money,
    total_qty: u32,
    assignments: Vec<(PersonId, u32)>,
    shared_portion: SharedPortion,
}

impl Default for BillItemBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BillItemBuilder {
    /// Creates a builder with default values
    pub fn new() -> Self {
        Self {
            name: "Paneer Tikka".to_string(),
            price: MoneyFixtures::item_price(),
            total_qty: 2,
            assignments: Vec::new(),
            shared_portion: SharedPortion::default(),
        }
    }

    /// Sets the item name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the line-total price
    pub fn with_price(mut self, price: Money) -> Self {
        self.price = price;
        self
    }

    /// Sets the total quantity
    pub fn with_total_qty(mut self, total_qty: u32) -> Self {
        self.total_qty = total_qty;
        self
    }

    /// Records an individual claim
    pub fn claimed(mut self, person_id: PersonId, qty: u32) -> Self {
        self.assignments.push((person_id, qty));
        self
    }

    /// Attaches a shared portion
    pub fn shared(mut self, quantity: u32, share_count: u32, sharers: Vec<PersonId>) -> Self {
        self.shared_portion = SharedPortion { quantity, share_count, sharers };
        self
    }

    /// Builds the item
    pub fn build(self) -> BillItem {
        let mut item = BillItem::new(self.name, self.price, self.total_qty);
        for (person_id, qty) in self.assignments {
            item.assignments.insert(person_id, qty);
        }
        item.shared_portion = self.shared_portion;
        item
    }
}

/// Builder for whole bills
#[derive(Default)]
pub struct BillBuilder {
    items: Vec<BillItem>,
    taxes: Vec<TaxLine>,
    subtotal: Money,
    grand_total: Money,
}

impl BillBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_item(mut self, item: BillItem) -> Self {
        self.items.push(item);
        self
    }

    pub fn with_tax(mut self, name: impl Into<String>, amount: Money) -> Self {
        self.taxes.push(TaxLine { name: name.into(), amount });
        self
    }

    pub fn with_subtotal(mut self, subtotal: Money) -> Self {
        self.subtotal = subtotal;
        self
    }

    pub fn with_grand_total(mut self, grand_total: Money) -> Self {
        self.grand_total = grand_total;
        self
    }

    pub fn build(self) -> Bill {
        Bill {
            items: self.items,
            subtotal: self.subtotal,
            taxes: self.taxes,
            grand_total: self.grand_total,
        }
    }
}

/// Creates a person with a fresh id in the default lifecycle state
pub fn person_named(name: impl Into<String>) -> Person {
    Person {
        id: PersonId::new_v7(),
        name: name.into(),
        status: PersonStatus::Selecting,
    }
}

/// Creates a person with a random first name and a fresh id
pub fn random_person() -> Person {
    person_named(FirstName().fake::<String>())
}

/// A two-item bill claimed evenly by two people, handy for calculator tests
pub fn evenly_claimed_bill(alice: PersonId, bob: PersonId) -> Bill {
    BillBuilder::new()
        .with_item(
            BillItemBuilder::new()
                .with_name("Thali")
                .with_price(Money::new(dec!(200.00)))
                .with_total_qty(2)
                .claimed(alice, 1)
                .claimed(bob, 1)
                .build(),
        )
        .with_item(
            BillItemBuilder::new()
                .with_name("Biryani")
                .with_price(Money::new(dec!(300.00)))
                .with_total_qty(3)
                .shared(3, 2, vec![alice, bob])
                .build(),
        )
        .build()
}
