//! Candidate types produced by oracle-output sanitization

use ledgerlens_domain::{Category, TransactionType};

/// An unvalidated transaction proposed by the oracle
///
/// Ephemeral value: produced by response sanitization, consumed by the
/// pipeline after category validation, never persisted as-is.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionCandidate {
    /// Transaction date string (fallback-substituted, trimmed, never empty)
    pub date: String,

    /// Free-text description from the statement
    pub description: String,

    /// Cleaned merchant name (empty when the oracle omitted it)
    pub merchant: String,

    /// Non-negative magnitude (0.0 when the oracle's value was unusable)
    pub amount: f64,

    /// Debit or credit
    pub kind: TransactionType,

    /// Oracle-suggested category, pending rule validation
    pub category: Category,
}
