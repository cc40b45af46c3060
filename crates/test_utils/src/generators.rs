//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating random test data
//! that maintains domain invariants.

use core_kernel::{ItemId, Money, PersonId};
use domain_receipt::BillItem;
use proptest::prelude::*;
use rust_decimal::Decimal;

/// Strategy for generating positive line-total amounts with two decimal places
pub fn line_total_strategy() -> impl Strategy<Value = Decimal> {
    (1i64..1_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy for generating Money values suitable for item prices
pub fn price_money_strategy() -> impl Strategy<Value = Money> {
    line_total_strategy().prop_map(Money::new)
}

/// Strategy for generating tax or tip totals, including zero
pub fn charge_money_strategy() -> impl Strategy<Value = Money> {
    (0i64..100_000i64).prop_map(|cents| Money::new(Decimal::new(cents, 2)))
}

/// Strategy for generating item quantities
pub fn quantity_strategy() -> impl Strategy<Value = u32> {
    1u32..10u32
}

/// Strategy for generating share counts valid for a shared portion
pub fn share_count_strategy() -> impl Strategy<Value = u32> {
    2u32..8u32
}

/// Strategy for generating ItemId
pub fn item_id_strategy() -> impl Strategy<Value = ItemId> {
    any::<[u8; 16]>().prop_map(|bytes| ItemId::from_uuid(uuid::Uuid::from_bytes(bytes)))
}

/// Strategy for generating PersonId
pub fn person_id_strategy() -> impl Strategy<Value = PersonId> {
    any::<[u8; 16]>().prop_map(|bytes| PersonId::from_uuid(uuid::Uuid::from_bytes(bytes)))
}

/// Strategy for generating display names
pub fn person_name_strategy() -> impl Strategy<Value = String> {
    "[A-Z][a-z]{2,10}".prop_map(|s| s)
}

/// Strategy for generating dish names as they appear on receipts
pub fn item_name_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Paneer Tikka".to_string()),
        Just("Dal Makhani".to_string()),
        Just("Butter Naan".to_string()),
        Just("Veg Biryani".to_string()),
        Just("Masala Dosa".to_string()),
        Just("Gulab Jamun".to_string()),
        Just("Fresh Lime Soda".to_string()),
    ]
}

/// Strategy for generating unclaimed bill items
pub fn bill_item_strategy() -> impl Strategy<Value = BillItem> {
    (item_name_strategy(), price_money_strategy(), quantity_strategy())
        .prop_map(|(name, price, qty)| BillItem::new(name, price, qty))
}

/// Strategy for generating a small roster of distinct person ids
pub fn person_ids_strategy(max: usize) -> impl Strategy<Value = Vec<PersonId>> {
    proptest::collection::hash_set(any::<[u8; 16]>(), 1..=max).prop_map(|set| {
        set.into_iter()
            .map(|bytes| PersonId::from_uuid(uuid::Uuid::from_bytes(bytes)))
            .collect()
    })
}
