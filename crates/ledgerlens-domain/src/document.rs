//! Document module - a submitted statement file under processing

use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

/// Unique identifier for a document based on UUIDv7
///
/// UUIDv7 provides:
/// - Chronological sortability for upload-order queries
/// - 128-bit uniqueness
/// - No coordination required for distributed generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DocumentId(u128);

impl DocumentId {
    /// Generate a new UUIDv7-based DocumentId
    pub fn new() -> Self {
        Self(uuid::Uuid::now_v7().as_u128())
    }

    /// Create a DocumentId from a raw u128 value
    ///
    /// This is primarily for storage layer deserialization.
    pub fn from_value(value: u128) -> Self {
        Self(value)
    }

    /// Parse a DocumentId from a UUID string
    pub fn from_string(s: &str) -> Result<Self, String> {
        uuid::Uuid::parse_str(s)
            .map(|u| Self(u.as_u128()))
            .map_err(|e| format!("Invalid UUID string: {}", e))
    }

    /// Get the raw u128 value
    pub fn value(&self) -> u128 {
        self.0
    }
}

impl Default for DocumentId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", uuid::Uuid::from_u128(self.0))
    }
}

/// Processing state of a document
///
/// Lifecycle: `Uploaded → Processing → Done` or `Uploaded → Processing →
/// Failed`. `Done` and `Failed` are terminal within a single pipeline run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentStatus {
    /// Stored on disk, processing not yet started
    Uploaded,
    /// Pipeline run in progress
    Processing,
    /// Pipeline run completed, transactions persisted
    Done,
    /// Pipeline run aborted; the status field is the sole failure signal
    Failed,
}

impl DocumentStatus {
    /// Storage/string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentStatus::Uploaded => "uploaded",
            DocumentStatus::Processing => "processing",
            DocumentStatus::Done => "done",
            DocumentStatus::Failed => "failed",
        }
    }

    /// Parse from the storage representation
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "uploaded" => Some(DocumentStatus::Uploaded),
            "processing" => Some(DocumentStatus::Processing),
            "done" => Some(DocumentStatus::Done),
            "failed" => Some(DocumentStatus::Failed),
            _ => None,
        }
    }

    /// Whether this state admits no further transitions in a run
    pub fn is_terminal(&self) -> bool {
        matches!(self, DocumentStatus::Done | DocumentStatus::Failed)
    }
}

impl fmt::Display for DocumentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A submitted source file under processing
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    /// Unique identifier
    pub id: DocumentId,

    /// Stored (timestamped) filename
    pub filename: String,

    /// Filename as uploaded by the user
    pub original_filename: String,

    /// Absolute path of the stored file
    pub file_path: String,

    /// Caller-supplied tag describing statement origin (e.g. "bank_statement")
    pub document_type: String,

    /// Upload timestamp (seconds since Unix epoch)
    pub uploaded_at: u64,

    /// Current processing state
    pub status: DocumentStatus,

    /// Number of transactions created by the last successful run
    ///
    /// Once status is `Done`, this equals the number of rows owned by the
    /// document from that run.
    pub transaction_count: i64,
}

impl Document {
    /// Create a freshly uploaded document record
    pub fn new(
        filename: impl Into<String>,
        original_filename: impl Into<String>,
        file_path: impl Into<String>,
        document_type: impl Into<String>,
    ) -> Self {
        Self {
            id: DocumentId::new(),
            filename: filename.into(),
            original_filename: original_filename.into(),
            file_path: file_path.into(),
            document_type: document_type.into(),
            uploaded_at: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap_or_default()
                .as_secs(),
            status: DocumentStatus::Uploaded,
            transaction_count: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_id_ordering() {
        let id1 = DocumentId::from_value(1000);
        let id2 = DocumentId::from_value(2000);

        assert!(id1 < id2);
        assert!(id2 > id1);
    }

    #[test]
    fn test_document_id_display_and_parse() {
        let id = DocumentId::new();
        let id_str = id.to_string();

        assert_eq!(id_str.len(), 36);

        let parsed = DocumentId::from_string(&id_str).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_document_id_invalid_string() {
        assert!(DocumentId::from_string("not-a-valid-uuid").is_err());
        assert!(DocumentId::from_string("").is_err());
    }

    #[test]
    fn test_status_round_trip() {
        for status in [
            DocumentStatus::Uploaded,
            DocumentStatus::Processing,
            DocumentStatus::Done,
            DocumentStatus::Failed,
        ] {
            assert_eq!(DocumentStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(DocumentStatus::parse("queued"), None);
    }

    #[test]
    fn test_terminal_states() {
        assert!(!DocumentStatus::Uploaded.is_terminal());
        assert!(!DocumentStatus::Processing.is_terminal());
        assert!(DocumentStatus::Done.is_terminal());
        assert!(DocumentStatus::Failed.is_terminal());
    }

    #[test]
    fn test_new_document_defaults() {
        let doc = Document::new(
            "20260101120000_statement.pdf",
            "statement.pdf",
            "/uploads/20260101120000_statement.pdf",
            "bank_statement",
        );

        assert_eq!(doc.status, DocumentStatus::Uploaded);
        assert_eq!(doc.transaction_count, 0);
        assert!(doc.uploaded_at > 0);
    }
}
