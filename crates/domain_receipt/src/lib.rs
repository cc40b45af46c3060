//! Receipt Domain - OCR text to structured bill
//!
//! This crate turns noisy recognized receipt text into a structured
//! [`Bill`]: priced items, advisory subtotal, tax lines, and grand total.
//! The OCR engine itself is an external collaborator; this crate consumes
//! only its plain text output.
//!
//! # Example
//!
//! ```rust
//! use domain_receipt::ReceiptParser;
//!
//! let bill = ReceiptParser::parse("Paneer Tikka 2 340.00\nLassi 90.00\nCGST 10.75");
//! assert_eq!(bill.items.len(), 2);
//! assert_eq!(bill.taxes.len(), 1);
//! ```

pub mod bill;
pub mod parser;

pub use bill::{Bill, BillItem, SharedPortion, TaxLine};
pub use parser::ReceiptParser;
