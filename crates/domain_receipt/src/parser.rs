//! Receipt text parser
//!
//! Converts raw OCR output into a structured [`Bill`]. Receipt text is
//! inherently noisy (misaligned columns, missing characters), so a strict
//! grammar is infeasible: the parser is a best-effort line classifier with
//! explicit precedence, biased toward precision over recall. Lines that do
//! not confidently match any rule are dropped as noise.
//!
//! # Classification precedence
//!
//! 1. Grand-total line
//! 2. Subtotal line
//! 3. Tax line (CGST/SGST)
//! 4. Item line with explicit quantity
//! 5. Item line without quantity (guarded against summary keywords)
//! 6. Noise
//!
//! Totals and tax lines are checked before the generic item shapes because
//! they often also end in a trailing amount; checking them first avoids
//! double-booking a tax or total as a spurious item.

use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;
use std::str::FromStr;
use tracing::debug;

use core_kernel::Money;

use crate::bill::{Bill, BillItem, TaxLine};

/// A decimal amount with exactly two fraction digits, optional comma
/// thousands separators, anchored at the line end.
static TRAILING_AMOUNT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([\d,]+\.\d{2})$").expect("valid amount regex"));

/// Loose "grand total" phrase, tolerant of arbitrary interior whitespace.
static GRAND_TOTAL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)grand\s*total").expect("valid grand total regex"));

/// Loose "sub total" phrase.
static SUBTOTAL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)sub\s*total").expect("valid subtotal regex"));

/// Indian GST tax tokens.
static TAX_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)(cgst|sgst)").expect("valid tax regex"));

/// `<name> <integer quantity> <amount>`.
static QTY_ITEM_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(.+?)\s+(\d+)\s+([\d,]+\.\d{2})$").expect("valid item regex"));

/// `<name> <amount>`, no explicit quantity.
static SIMPLE_ITEM_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(.+?)\s+([\d,]+\.\d{2})$").expect("valid simple item regex"));

/// Whole-word summary keywords that disqualify the simple item shape.
static RESERVED_WORD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(sub|total|cgst|sgst|tax)\b").expect("valid keyword regex"));

/// Everything outside letters and whitespace is stripped from item names.
static NAME_NOISE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^A-Za-z\s]").expect("valid name noise regex"));

/// Best-effort classifier from recognized receipt text to a [`Bill`]
///
/// Never fails on malformed input; the result may legitimately contain zero
/// items, and the caller decides whether that is an error.
pub struct ReceiptParser;

impl ReceiptParser {
    /// Parses newline-delimited recognized text into a structured bill
    pub fn parse(raw_text: &str) -> Bill {
        let mut bill = Bill::default();

        for line in raw_text.lines() {
            // Keep the original case for value extraction; match keywords
            // against a lowercased working copy.
            let original = line.trim();
            if original.is_empty() {
                continue;
            }
            let lowered = original.to_lowercase();

            if GRAND_TOTAL_RE.is_match(&lowered) {
                match Self::trailing_amount(original) {
                    Some(amount) => bill.grand_total = amount,
                    None => debug!(line = %original, "grand total line without amount"),
                }
                continue;
            }

            if SUBTOTAL_RE.is_match(&lowered) {
                match Self::trailing_amount(original) {
                    Some(amount) => bill.subtotal = amount,
                    None => debug!(line = %original, "subtotal line without amount"),
                }
                continue;
            }

            if let Some(caps) = TAX_RE.captures(&lowered) {
                match Self::trailing_amount(original) {
                    Some(amount) => bill.taxes.push(TaxLine {
                        name: caps[1].to_uppercase(),
                        amount,
                    }),
                    None => debug!(line = %original, "tax line without amount"),
                }
                continue;
            }

            match Self::parse_item(original) {
                Some(item) => bill.items.push(item),
                None => debug!(line = %original, "dropped unclassified receipt line"),
            }
        }

        bill
    }

    /// Extracts the trailing two-decimal amount, if any
    fn trailing_amount(line: &str) -> Option<Money> {
        let caps = TRAILING_AMOUNT_RE.captures(line)?;
        Self::parse_amount(&caps[1])
    }

    /// Tries both item shapes against the original-case line
    fn parse_item(line: &str) -> Option<BillItem> {
        if let Some(caps) = QTY_ITEM_RE.captures(line) {
            // A zero or unreadably large quantity is OCR garbage, not an item.
            let qty: u32 = caps[2].parse().ok().filter(|q| *q > 0)?;
            return Self::build_item(&caps[1], qty, &caps[3]);
        }

        // The quantity-less shape would happily swallow summary lines like
        // "TOTAL 790.00"; a whole-word keyword disqualifies it.
        if RESERVED_WORD_RE.is_match(line) {
            return None;
        }

        let caps = SIMPLE_ITEM_RE.captures(line)?;
        Self::build_item(&caps[1], 1, &caps[2])
    }

    /// Normalizes the extracted fields into an item, rejecting empty names
    /// and unparsable amounts
    fn build_item(raw_name: &str, qty: u32, raw_amount: &str) -> Option<BillItem> {
        let price = Self::parse_amount(raw_amount)?;
        let stripped = NAME_NOISE_RE.replace_all(raw_name, "");
        let name = stripped.trim();
        if name.is_empty() {
            return None;
        }
        Some(BillItem::new(name, price, qty))
    }

    /// Parses a matched amount, dropping comma thousands separators
    fn parse_amount(raw: &str) -> Option<Money> {
        let normalized = raw.replace(',', "");
        Decimal::from_str(&normalized).ok().map(Money::new)
    }
}
