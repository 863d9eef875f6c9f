//! Pipeline error types

use ledgerlens_domain::DocumentId;
use thiserror::Error;

/// Errors that can occur while processing a document
#[derive(Error, Debug)]
pub enum PipelineError {
    /// The document record does not exist in the store
    #[error("Document not found: {0}")]
    DocumentNotFound(DocumentId),

    /// Extraction produced too little text to be worth parsing
    #[error("Extracted text too sparse: {0} chars after trimming")]
    TextTooSparse(usize),

    /// A storage operation failed
    #[error("Store error: {0}")]
    Store(String),

    /// A spawned task failed to complete
    #[error("Task join error: {0}")]
    Join(String),
}
