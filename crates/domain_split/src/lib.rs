//! Split Domain - Claims, shares, and the per-person breakdown
//!
//! This crate tracks who claimed what on a scanned bill and derives each
//! member's owed amount:
//!
//! - [`AssignmentLedger`]: individual claims and shared portions over the
//!   bill's items, with the guarantee that claimed quantity never exceeds
//!   an item's total quantity.
//! - [`Roster`]: the members splitting the bill, unique by name.
//! - [`compute_summaries`]: pure recomputation of every member's subtotal,
//!   proportional tax share, equal tip share, and total.
//! - [`SessionSnapshot`]: the serializable record handed to the
//!   persistence/sync collaborator.
//!
//! # Example
//!
//! ```rust
//! use domain_split::{AssignmentLedger, ClaimDelta, Roster, compute_summaries};
//! use core_kernel::Money;
//! use rust_decimal_macros::dec;
//!
//! let mut roster = Roster::new();
//! let asha = roster.add_person("Asha").unwrap();
//!
//! let mut ledger = AssignmentLedger::new();
//! let lassi = ledger.add_item("Lassi", Money::new(dec!(90.00)), 1).unwrap();
//! let _ = ledger.claim_individual(&lassi, &asha, ClaimDelta::Increment).unwrap();
//!
//! let summaries = compute_summaries(
//!     ledger.items(),
//!     roster.people(),
//!     Money::zero(),
//!     Money::zero(),
//! );
//! assert_eq!(summaries[0].subtotal, Money::new(dec!(90.00)));
//! ```

pub mod calculator;
pub mod error;
pub mod ledger;
pub mod people;
pub mod session;

pub use calculator::{compute_summaries, PersonSummary};
pub use error::SplitError;
pub use ledger::{AssignmentLedger, ClaimDelta, ClaimOutcome, ItemEdit};
pub use people::{Person, PersonStatus, Roster};
pub use session::{RestoredSession, SessionConfig, SessionSnapshot};
