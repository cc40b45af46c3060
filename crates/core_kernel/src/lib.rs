//! Core Kernel - Foundational types and utilities for the bill-splitting system
//!
//! This crate provides the fundamental building blocks used across all domain modules:
//! - Money type with precise decimal arithmetic
//! - Common identifiers and value objects

pub mod error;
pub mod identifiers;
pub mod money;

pub use error::CoreError;
pub use identifiers::{BillId, ItemId, PersonId, SessionId};
pub use money::{Money, MoneyError, DISPLAY_DECIMAL_PLACES};
