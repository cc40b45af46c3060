//! Session snapshot
//!
//! The plain serializable record exchanged with the persistence/sync
//! collaborator. It carries no behavior over the wire: the current bill,
//! the people, and the payer's configuration. Field names follow the
//! camelCase convention of the JSON the surrounding application already
//! speaks.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::Money;
use domain_receipt::Bill;

use crate::ledger::AssignmentLedger;
use crate::people::{Person, Roster};

/// Payer-controlled configuration for the split
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionConfig {
    /// Expected number of members
    pub member_count: u32,
    /// Tax total used by the calculator; seeded from detected tax lines,
    /// then editable by the payer
    pub manual_tax_amount: Money,
    /// When false the tax share is omitted entirely rather than the
    /// detected value being discarded
    pub include_tax: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            member_count: 2,
            manual_tax_amount: Money::zero(),
            include_tax: true,
        }
    }
}

impl SessionConfig {
    /// Tax total the calculator should use under the current toggle
    pub fn effective_tax(&self) -> Money {
        if self.include_tax {
            self.manual_tax_amount
        } else {
            Money::zero()
        }
    }

    /// Initializes the manual tax amount from the bill's detected tax lines
    ///
    /// Called once when a scan completes; later edits win.
    pub fn seed_manual_tax(&mut self, bill: &Bill) {
        self.manual_tax_amount = bill.detected_tax_total();
    }
}

/// Serializable snapshot of a shared bill session
///
/// Every field has a rehydration fallback so that partially persisted
/// sessions still restore to a consistent state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    #[serde(default)]
    pub bill_details: Bill,
    #[serde(default)]
    pub people: Vec<Person>,
    #[serde(default = "default_member_count")]
    pub member_count: u32,
    #[serde(default)]
    pub manual_tax_amount: Money,
    #[serde(default = "default_include_tax")]
    pub include_tax: bool,
    #[serde(default = "Utc::now")]
    pub saved_at: DateTime<Utc>,
}

fn default_member_count() -> u32 {
    2
}

fn default_include_tax() -> bool {
    true
}

/// State rebuilt from a snapshot when resuming a shared session
#[derive(Debug, Clone)]
pub struct RestoredSession {
    pub ledger: AssignmentLedger,
    pub roster: Roster,
    pub config: SessionConfig,
}

impl SessionSnapshot {
    /// Captures the current state for persistence
    pub fn capture(bill: Bill, people: Vec<Person>, config: SessionConfig) -> Self {
        Self {
            bill_details: bill,
            people,
            member_count: config.member_count,
            manual_tax_amount: config.manual_tax_amount,
            include_tax: config.include_tax,
            saved_at: Utc::now(),
        }
    }

    /// The configuration carried by this snapshot
    pub fn config(&self) -> SessionConfig {
        SessionConfig {
            member_count: self.member_count,
            manual_tax_amount: self.manual_tax_amount,
            include_tax: self.include_tax,
        }
    }

    /// Rehydrates ledger, roster and configuration
    pub fn restore(self) -> RestoredSession {
        let config = self.config();
        RestoredSession {
            ledger: AssignmentLedger::from_items(self.bill_details.items),
            roster: Roster::from_people(self.people),
            config,
        }
    }
}
