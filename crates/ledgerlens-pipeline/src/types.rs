//! Pipeline request and report types

use ledgerlens_domain::{Document, DocumentId, DocumentStatus};
use std::path::PathBuf;

/// A request to process one stored document
#[derive(Debug, Clone)]
pub struct ProcessRequest {
    /// The document record to process
    pub document_id: DocumentId,

    /// Path of the stored file to extract from
    pub file_path: PathBuf,

    /// Caller-supplied tag describing statement origin
    pub document_type: String,
}

impl ProcessRequest {
    /// Build a request from an already-persisted document record
    pub fn for_document(document: &Document) -> Self {
        Self {
            document_id: document.id,
            file_path: PathBuf::from(&document.file_path),
            document_type: document.document_type.clone(),
        }
    }
}

/// Outcome of one completed pipeline run
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineReport {
    /// The document that was processed
    pub document_id: DocumentId,

    /// Number of transaction rows created by this run
    pub transactions_found: usize,

    /// Final status persisted for the document
    pub status: DocumentStatus,
}
