//! Trait definitions for external interactions
//!
//! These traits define the boundaries between domain logic and
//! infrastructure. Implementations live in other crates.

use crate::{Document, DocumentId, DocumentStatus, Transaction, TransactionId};

/// Trait for the persistent document/transaction store
///
/// Implemented by the infrastructure layer (ledgerlens-store). The pipeline
/// commits in discrete phases (status change, staged rows, recurrence flags),
/// so every operation is an independent write.
pub trait TransactionStore {
    /// Error type for store operations
    type Error;

    /// Insert a freshly uploaded document record
    fn insert_document(&mut self, document: &Document) -> Result<(), Self::Error>;

    /// Load a document by id
    fn get_document(&self, id: DocumentId) -> Result<Option<Document>, Self::Error>;

    /// Persist a status transition
    fn set_document_status(
        &mut self,
        id: DocumentId,
        status: DocumentStatus,
    ) -> Result<(), Self::Error>;

    /// Persist the terminal status together with the run's transaction count
    fn finalize_document(
        &mut self,
        id: DocumentId,
        status: DocumentStatus,
        transaction_count: i64,
    ) -> Result<(), Self::Error>;

    /// Persist a batch of new transaction rows
    fn insert_transactions(&mut self, transactions: &[Transaction]) -> Result<(), Self::Error>;

    /// Load every transaction in the store (recurrence scans are
    /// cross-document, not per-upload)
    fn all_transactions(&self) -> Result<Vec<Transaction>, Self::Error>;

    /// Load the transactions owned by one document
    fn transactions_for_document(
        &self,
        id: DocumentId,
    ) -> Result<Vec<Transaction>, Self::Error>;

    /// Flag the given transactions as recurring
    fn mark_recurring(&mut self, ids: &[TransactionId]) -> Result<(), Self::Error>;

    /// Delete a document and cascade-delete its transactions
    fn delete_document(&mut self, id: DocumentId) -> Result<(), Self::Error>;
}

/// Trait for LLM oracle operations
///
/// Implemented by the infrastructure layer (ledgerlens-llm). The oracle is
/// untrusted: callers must sanitize whatever text comes back.
pub trait LlmProvider {
    /// Error type for LLM operations
    type Error;

    /// Generate a text completion for the given prompt
    fn generate(&self, prompt: &str) -> Result<String, Self::Error>;
}
