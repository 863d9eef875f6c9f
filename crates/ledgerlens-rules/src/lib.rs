//! LedgerLens Deterministic Rules
//!
//! Two pure rule engines that run after oracle parsing:
//!
//! - [`validate_category`]: merchant-keyword override of the oracle's
//!   category suggestion; the oracle misclassifies well-known merchants
//!   often enough that a deterministic table takes priority
//! - [`detect_recurring`]: flags merchant groups that are periodic in
//!   amount and day-of-month

#![warn(missing_docs)]

mod category;
mod recurrence;

pub use category::validate_category;
pub use recurrence::detect_recurring;
