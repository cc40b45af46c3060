//! Integration tests for the split domain
//!
//! Exercises the full flow from recognized receipt text through claims,
//! shares and configuration to the per-person breakdown, plus snapshot
//! persistence and the claim invariant under random operation sequences.

use proptest::prelude::*;
use rust_decimal_macros::dec;

use core_kernel::Money;
use domain_receipt::ReceiptParser;
use domain_split::{
    compute_summaries, AssignmentLedger, ClaimDelta, Roster, SessionConfig, SessionSnapshot,
};
use test_utils::assertions::{assert_money_approx_eq, assert_money_sum_approx};
use test_utils::builders::{evenly_claimed_bill, person_named, random_person};
use test_utils::fixtures::{MoneyFixtures, ReceiptFixtures};
use test_utils::generators::{bill_item_strategy, person_ids_strategy};

const TOLERANCE: rust_decimal::Decimal = dec!(0.000_000_01);

mod end_to_end_tests {
    use super::*;

    #[test]
    fn scanned_receipt_splits_three_ways() {
        let bill = ReceiptParser::parse(ReceiptFixtures::standard());
        assert_eq!(bill.items.len(), 4);

        let mut config = SessionConfig::default();
        config.seed_manual_tax(&bill);
        assert_eq!(config.manual_tax_amount, MoneyFixtures::tax_total());

        let mut roster = Roster::new();
        let asha = roster.add_person("Asha").unwrap();
        let vikram = roster.add_person("Vikram").unwrap();
        let meera = roster.add_person("Meera").unwrap();

        let mut ledger = AssignmentLedger::from_items(bill.items);
        let paneer = ledger.items()[0].id;
        let chicken = ledger.items()[1].id;
        let naan = ledger.items()[2].id;
        let lassi = ledger.items()[3].id;

        // Asha and Vikram take one paneer each, Meera the butter chicken.
        assert!(ledger
            .claim_individual(&paneer, &asha, ClaimDelta::Increment)
            .unwrap()
            .is_applied());
        assert!(ledger
            .claim_individual(&paneer, &vikram, ClaimDelta::Increment)
            .unwrap()
            .is_applied());
        assert!(ledger
            .claim_individual(&chicken, &meera, ClaimDelta::Increment)
            .unwrap()
            .is_applied());

        // All four naans go three ways; the lassi is Asha's alone.
        ledger.initiate_share(&naan, 4, 3, asha).unwrap();
        assert!(ledger.join_share(&naan, &vikram).unwrap().is_applied());
        assert!(ledger.join_share(&naan, &meera).unwrap().is_applied());
        assert!(ledger
            .claim_individual(&lassi, &asha, ClaimDelta::Increment)
            .unwrap()
            .is_applied());

        assert!(ledger.is_complete());

        let summaries = compute_summaries(
            ledger.items(),
            roster.people(),
            config.effective_tax(),
            Money::zero(),
        );

        assert_eq!(summaries.len(), 3);
        assert_eq!(summaries[0].subtotal, Money::new(dec!(340.00)));
        assert_eq!(summaries[1].subtotal, Money::new(dec!(250.00)));
        assert_eq!(summaries[2].subtotal, Money::new(dec!(505.00)));

        let tax_shares: Vec<Money> = summaries.iter().map(|s| s.tax_share).collect();
        assert_money_sum_approx(&tax_shares, &MoneyFixtures::tax_total(), TOLERANCE);

        let totals: Vec<Money> = summaries.iter().map(|s| s.total).collect();
        assert_money_sum_approx(&totals, &Money::new(dec!(1149.76)), TOLERANCE);
    }

    #[test]
    fn disabling_tax_zeroes_every_tax_share() {
        let bill = ReceiptParser::parse(ReceiptFixtures::standard());
        let mut config = SessionConfig::default();
        config.seed_manual_tax(&bill);
        config.include_tax = false;

        let mut roster = Roster::new();
        let asha = roster.add_person("Asha").unwrap();

        let mut ledger = AssignmentLedger::from_items(bill.items);
        let paneer = ledger.items()[0].id;
        let _ = ledger
            .claim_individual(&paneer, &asha, ClaimDelta::Increment)
            .unwrap();

        let summaries = compute_summaries(
            ledger.items(),
            roster.people(),
            config.effective_tax(),
            Money::zero(),
        );

        assert!(summaries.iter().all(|s| s.tax_share.is_zero()));
        assert_eq!(summaries[0].total, summaries[0].subtotal);
    }

    #[test]
    fn tip_is_split_equally_regardless_of_claims() {
        let bill = ReceiptParser::parse(ReceiptFixtures::standard());

        let mut roster = Roster::new();
        let asha = roster.add_person("Asha").unwrap();
        let _vikram = roster.add_person("Vikram").unwrap();

        let mut ledger = AssignmentLedger::from_items(bill.items);
        let chicken = ledger.items()[1].id;
        let _ = ledger
            .claim_individual(&chicken, &asha, ClaimDelta::Increment)
            .unwrap();

        let summaries = compute_summaries(
            ledger.items(),
            roster.people(),
            Money::zero(),
            MoneyFixtures::tip_total(),
        );

        assert_eq!(summaries[0].tip_share, summaries[1].tip_share);
        assert_money_approx_eq(
            &summaries[0].tip_share,
            &Money::new(dec!(50.00)),
            TOLERANCE,
        );
    }

    #[test]
    fn noisy_scan_still_yields_a_workable_ledger() {
        let bill = ReceiptParser::parse(ReceiptFixtures::noisy());
        assert_eq!(bill.items.len(), 1);

        let mut ledger = AssignmentLedger::from_items(bill.items);
        let dosa = ledger.items()[0].id;

        let mut roster = Roster::new();
        let asha = roster.add_person("Asha").unwrap();
        assert!(ledger
            .claim_individual(&dosa, &asha, ClaimDelta::Increment)
            .unwrap()
            .is_applied());
        assert!(ledger.is_complete());
    }

    #[test]
    fn prebuilt_bill_splits_without_a_scan() {
        let asha = person_named("Asha");
        let vikram = person_named("Vikram");
        let bill = evenly_claimed_bill(asha.id, vikram.id);

        let ledger = AssignmentLedger::from_items(bill.items);
        assert!(ledger.is_complete());

        // A member who claimed nothing owes nothing.
        let people = vec![asha, vikram, random_person()];
        let summaries = compute_summaries(ledger.items(), &people, Money::zero(), Money::zero());

        // 100.00 from the thali plus half the pooled biryani (150.00) each.
        assert_eq!(summaries[0].subtotal, Money::new(dec!(250.00)));
        assert_eq!(summaries[1].subtotal, Money::new(dec!(250.00)));
        assert!(summaries[2].subtotal.is_zero());
    }

    #[test]
    fn unusable_scan_falls_back_to_manual_entry() {
        let bill = ReceiptParser::parse(ReceiptFixtures::unusable());
        assert!(bill.items.is_empty());

        let mut ledger = AssignmentLedger::from_items(bill.items);
        let id = ledger
            .add_item("Masala Dosa", Money::new(dec!(120.00)), 1)
            .unwrap();
        assert_eq!(ledger.item(&id).unwrap().name, "Masala Dosa");
    }
}

mod snapshot_tests {
    use super::*;

    #[test]
    fn session_survives_a_json_round_trip_mid_split() {
        let bill = ReceiptParser::parse(ReceiptFixtures::standard());
        let summary = (bill.subtotal, bill.taxes.clone(), bill.grand_total);

        let mut config = SessionConfig::default();
        config.seed_manual_tax(&bill);
        config.member_count = 3;

        let mut roster = Roster::new();
        let asha = roster.add_person("Asha").unwrap();
        roster.add_person("Vikram").unwrap();

        let mut ledger = AssignmentLedger::from_items(bill.items);
        let paneer = ledger.items()[0].id;
        let naan = ledger.items()[2].id;
        let _ = ledger
            .claim_individual(&paneer, &asha, ClaimDelta::Increment)
            .unwrap();
        ledger.initiate_share(&naan, 2, 2, asha).unwrap();

        let bill = domain_receipt::Bill {
            items: ledger.into_items(),
            subtotal: summary.0,
            taxes: summary.1,
            grand_total: summary.2,
        };
        let snapshot = SessionSnapshot::capture(bill, roster.people().to_vec(), config);

        let json = serde_json::to_string(&snapshot).unwrap();
        let rehydrated: SessionSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(rehydrated, snapshot);

        let restored = rehydrated.restore();
        assert_eq!(restored.config, config);
        assert_eq!(restored.roster.people().len(), 2);

        let paneer_restored = restored.ledger.item(&paneer).unwrap();
        assert_eq!(paneer_restored.claimed_by(&asha), 1);
        let naan_restored = restored.ledger.item(&naan).unwrap();
        assert!(naan_restored.shared_portion.has_sharer(&asha));

        // The restored ledger picks up exactly where the claims left off.
        let mut ledger = restored.ledger;
        assert!(!ledger.is_complete());
        assert!(ledger.join_share(&naan, &asha).unwrap() == domain_split::ClaimOutcome::Rejected);
    }
}

mod invariant_tests {
    use super::*;
    use domain_receipt::BillItem;
    use core_kernel::PersonId;

    #[derive(Debug, Clone)]
    enum LedgerOp {
        Claim(usize, ClaimDelta),
        Initiate(u32, u32, usize),
        Join(usize),
        Leave(usize),
        RemoveShare,
    }

    fn ledger_op_strategy() -> impl Strategy<Value = LedgerOp> {
        prop_oneof![
            (0usize..4, prop_oneof![Just(ClaimDelta::Increment), Just(ClaimDelta::Decrement)])
                .prop_map(|(p, d)| LedgerOp::Claim(p, d)),
            (0u32..8, 0u32..5, 0usize..4).prop_map(|(q, c, p)| LedgerOp::Initiate(q, c, p)),
            (0usize..4).prop_map(LedgerOp::Join),
            (0usize..4).prop_map(LedgerOp::Leave),
            Just(LedgerOp::RemoveShare),
        ]
    }

    fn check_invariant(item: &BillItem) -> Result<(), TestCaseError> {
        let individual: u32 = item.assignments.values().sum();
        prop_assert!(individual + item.shared_portion.quantity <= item.total_qty);
        prop_assert!(item.shared_portion.sharers.len() as u32 <= item.shared_portion.share_count
            || item.shared_portion.is_empty());
        Ok(())
    }

    proptest! {
        /// After any sequence of claim and share operations, the total
        /// assigned quantity never exceeds the item's total quantity.
        #[test]
        fn claims_never_exceed_total_quantity(
            item in bill_item_strategy(),
            people in person_ids_strategy(4),
            ops in proptest::collection::vec(ledger_op_strategy(), 0..40),
        ) {
            let item_id = item.id;
            let mut ledger = AssignmentLedger::from_items(vec![item]);
            let pick = |index: usize| -> PersonId { people[index % people.len()] };

            for op in ops {
                match op {
                    LedgerOp::Claim(p, delta) => {
                        let _ = ledger.claim_individual(&item_id, &pick(p), delta).unwrap();
                    }
                    LedgerOp::Initiate(quantity, share_count, p) => {
                        // Misconfigured shares are refused without touching state.
                        let _ = ledger.initiate_share(&item_id, quantity, share_count, pick(p));
                    }
                    LedgerOp::Join(p) => {
                        let _ = ledger.join_share(&item_id, &pick(p)).unwrap();
                    }
                    LedgerOp::Leave(p) => {
                        let _ = ledger.leave_share(&item_id, &pick(p)).unwrap();
                    }
                    LedgerOp::RemoveShare => {
                        ledger.remove_share(&item_id).unwrap();
                    }
                }
                check_invariant(&ledger.items()[0])?;
            }

            prop_assert!(ledger.items()[0].remaining_quantity() <= ledger.items()[0].total_qty);
        }

        /// Everyone's subtotals recombine into the claimed portion of the
        /// bill, whatever mix of claims and shares produced them.
        #[test]
        fn subtotals_recombine_for_fully_claimed_items(
            item in bill_item_strategy(),
            people in person_ids_strategy(4),
        ) {
            let item_id = item.id;
            let mut ledger = AssignmentLedger::from_items(vec![item]);

            // Round-robin individual claims until the item is exhausted.
            let mut index = 0usize;
            while ledger.items()[0].remaining_quantity() > 0 {
                let person = people[index % people.len()];
                let _ = ledger.claim_individual(&item_id, &person, ClaimDelta::Increment).unwrap();
                index += 1;
            }
            prop_assert!(ledger.is_complete());

            let roster: Vec<domain_split::Person> = people
                .iter()
                .enumerate()
                .map(|(i, id)| domain_split::Person {
                    id: *id,
                    name: format!("Member {i}"),
                    status: domain_split::PersonStatus::Selecting,
                })
                .collect();

            let summaries = compute_summaries(
                ledger.items(),
                &roster,
                Money::zero(),
                Money::zero(),
            );
            let subtotals: Vec<Money> = summaries.iter().map(|s| s.subtotal).collect();
            assert_money_sum_approx(&subtotals, &ledger.items()[0].price, TOLERANCE);
        }
    }
}
