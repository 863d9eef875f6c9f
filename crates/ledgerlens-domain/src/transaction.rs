//! Transaction module - one parsed financial movement

use crate::category::Category;
use crate::document::DocumentId;
use std::fmt;

/// Unique identifier for a transaction based on UUIDv7
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TransactionId(u128);

impl TransactionId {
    /// Generate a new UUIDv7-based TransactionId
    pub fn new() -> Self {
        Self(uuid::Uuid::now_v7().as_u128())
    }

    /// Create a TransactionId from a raw u128 value
    ///
    /// This is primarily for storage layer deserialization.
    pub fn from_value(value: u128) -> Self {
        Self(value)
    }

    /// Get the raw u128 value
    pub fn value(&self) -> u128 {
        self.0
    }
}

impl Default for TransactionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", uuid::Uuid::from_u128(self.0))
    }
}

/// Direction of a financial movement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionType {
    /// Money out
    Debit,
    /// Money in
    Credit,
}

impl TransactionType {
    /// Storage/string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Debit => "debit",
            TransactionType::Credit => "credit",
        }
    }

    /// Lenient parse: case-insensitive, anything unrecognized is a debit
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "credit" => TransactionType::Credit,
            _ => TransactionType::Debit,
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One parsed financial movement owned by a document
///
/// Rows are created by the pipeline after parsing and category validation.
/// Only the recurrence detector mutates them afterwards (`is_recurring`).
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    /// Owning document
    pub document_id: DocumentId,

    /// Transaction date as reported by the oracle (string form)
    pub date: String,

    /// Free-text description from the statement
    pub description: String,

    /// Cleaned merchant name
    pub merchant: String,

    /// Non-negative magnitude
    pub amount: f64,

    /// Debit or credit
    pub kind: TransactionType,

    /// Validated spending category
    pub category: Category,

    /// Set by the recurrence detector; defaults to false
    pub is_recurring: bool,

    /// Raw source text the row was parsed from
    pub raw_text: String,
}
