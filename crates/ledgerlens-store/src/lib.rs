//! LedgerLens Storage Layer
//!
//! Implements the TransactionStore trait over SQLite. Documents own their
//! transactions; removing a document cascades to its rows via foreign keys.
//!
//! # Examples
//!
//! ```no_run
//! use ledgerlens_store::SqliteStore;
//!
//! let store = SqliteStore::new(":memory:").unwrap();
//! // Store is now ready for document and transaction operations
//! ```

#![warn(missing_docs)]

use ledgerlens_domain::traits::TransactionStore;
use ledgerlens_domain::{
    Category, Document, DocumentId, DocumentStatus, Transaction, TransactionId, TransactionType,
};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Document not found
    #[error("Document not found: {0}")]
    NotFound(String),

    /// Invalid data format
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// SQLite-based implementation of TransactionStore
///
/// # Thread Safety
///
/// SQLite connections are not thread-safe. Each thread should have its own
/// SqliteStore instance, or the store should sit behind a mutex.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Create a new SqliteStore with the given database path
    ///
    /// Use `:memory:` for an in-memory database (useful for testing).
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let conn = Connection::open(path)?;
        let mut store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    fn initialize_schema(&mut self) -> Result<(), StoreError> {
        // Cascading deletes require foreign keys, which SQLite leaves off
        // per connection
        self.conn.execute_batch("PRAGMA foreign_keys = ON;")?;

        let schema = include_str!("schema.sql");
        self.conn.execute_batch(schema)?;

        Ok(())
    }

    fn document_id_to_bytes(id: DocumentId) -> Vec<u8> {
        id.value().to_be_bytes().to_vec()
    }

    fn bytes_to_document_id(bytes: &[u8]) -> Result<DocumentId, StoreError> {
        if bytes.len() != 16 {
            return Err(StoreError::InvalidData(format!(
                "Expected 16 bytes for DocumentId, got {}",
                bytes.len()
            )));
        }
        let mut arr = [0u8; 16];
        arr.copy_from_slice(bytes);
        Ok(DocumentId::from_value(u128::from_be_bytes(arr)))
    }

    fn transaction_id_to_bytes(id: TransactionId) -> Vec<u8> {
        id.value().to_be_bytes().to_vec()
    }

    fn bytes_to_transaction_id(bytes: &[u8]) -> Result<TransactionId, StoreError> {
        if bytes.len() != 16 {
            return Err(StoreError::InvalidData(format!(
                "Expected 16 bytes for TransactionId, got {}",
                bytes.len()
            )));
        }
        let mut arr = [0u8; 16];
        arr.copy_from_slice(bytes);
        Ok(TransactionId::from_value(u128::from_be_bytes(arr)))
    }

    fn status_from_str(s: &str) -> Result<DocumentStatus, StoreError> {
        DocumentStatus::parse(s)
            .ok_or_else(|| StoreError::InvalidData(format!("Unknown document status: {}", s)))
    }

    fn row_to_document(row: &rusqlite::Row<'_>) -> rusqlite::Result<Document> {
        let id_bytes: Vec<u8> = row.get(0)?;
        let id = Self::bytes_to_document_id(&id_bytes).map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Blob, Box::new(e))
        })?;

        let status_str: String = row.get(6)?;
        let status = Self::status_from_str(&status_str).map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(6, rusqlite::types::Type::Text, Box::new(e))
        })?;

        Ok(Document {
            id,
            filename: row.get(1)?,
            original_filename: row.get(2)?,
            file_path: row.get(3)?,
            document_type: row.get(4)?,
            uploaded_at: row.get::<_, i64>(5)? as u64,
            status,
            transaction_count: row.get(7)?,
        })
    }

    fn row_to_transaction(row: &rusqlite::Row<'_>) -> rusqlite::Result<Transaction> {
        let id_bytes: Vec<u8> = row.get(0)?;
        let id = Self::bytes_to_transaction_id(&id_bytes).map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Blob, Box::new(e))
        })?;

        let document_id_bytes: Vec<u8> = row.get(1)?;
        let document_id = Self::bytes_to_document_id(&document_id_bytes).map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(1, rusqlite::types::Type::Blob, Box::new(e))
        })?;

        let kind_str: String = row.get(6)?;
        let category_str: String = row.get(7)?;

        Ok(Transaction {
            id,
            document_id,
            date: row.get(2)?,
            description: row.get(3)?,
            merchant: row.get(4)?,
            amount: row.get(5)?,
            kind: TransactionType::parse(&kind_str),
            category: Category::parse(&category_str),
            is_recurring: row.get::<_, i64>(8)? != 0,
            raw_text: row.get(9)?,
        })
    }
}

const TRANSACTION_COLUMNS: &str =
    "id, document_id, date, description, merchant, amount, type, category, is_recurring, raw_text";

impl TransactionStore for SqliteStore {
    type Error = StoreError;

    fn insert_document(&mut self, document: &Document) -> Result<(), Self::Error> {
        let id_bytes = Self::document_id_to_bytes(document.id);

        self.conn.execute(
            "INSERT INTO documents (id, filename, original_filename, file_path, document_type, uploaded_at, status, transaction_count)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                &id_bytes,
                &document.filename,
                &document.original_filename,
                &document.file_path,
                &document.document_type,
                document.uploaded_at as i64,
                document.status.as_str(),
                document.transaction_count,
            ],
        )?;

        Ok(())
    }

    fn get_document(&self, id: DocumentId) -> Result<Option<Document>, Self::Error> {
        let id_bytes = Self::document_id_to_bytes(id);

        let document = self
            .conn
            .query_row(
                "SELECT id, filename, original_filename, file_path, document_type, uploaded_at, status, transaction_count
                 FROM documents WHERE id = ?1",
                params![&id_bytes],
                Self::row_to_document,
            )
            .optional()?;

        Ok(document)
    }

    fn set_document_status(
        &mut self,
        id: DocumentId,
        status: DocumentStatus,
    ) -> Result<(), Self::Error> {
        let id_bytes = Self::document_id_to_bytes(id);

        let updated = self.conn.execute(
            "UPDATE documents SET status = ?1 WHERE id = ?2",
            params![status.as_str(), &id_bytes],
        )?;

        if updated == 0 {
            return Err(StoreError::NotFound(id.to_string()));
        }

        Ok(())
    }

    fn finalize_document(
        &mut self,
        id: DocumentId,
        status: DocumentStatus,
        transaction_count: i64,
    ) -> Result<(), Self::Error> {
        let id_bytes = Self::document_id_to_bytes(id);

        let updated = self.conn.execute(
            "UPDATE documents SET status = ?1, transaction_count = ?2 WHERE id = ?3",
            params![status.as_str(), transaction_count, &id_bytes],
        )?;

        if updated == 0 {
            return Err(StoreError::NotFound(id.to_string()));
        }

        Ok(())
    }

    fn insert_transactions(&mut self, transactions: &[Transaction]) -> Result<(), Self::Error> {
        let tx = self.conn.transaction()?;

        {
            let mut stmt = tx.prepare(
                "INSERT INTO transactions (id, document_id, date, description, merchant, amount, type, category, is_recurring, raw_text)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
            )?;

            for transaction in transactions {
                stmt.execute(params![
                    &Self::transaction_id_to_bytes(transaction.id),
                    &Self::document_id_to_bytes(transaction.document_id),
                    &transaction.date,
                    &transaction.description,
                    &transaction.merchant,
                    transaction.amount,
                    transaction.kind.as_str(),
                    transaction.category.as_str(),
                    transaction.is_recurring as i64,
                    &transaction.raw_text,
                ])?;
            }
        }

        tx.commit()?;

        Ok(())
    }

    fn all_transactions(&self) -> Result<Vec<Transaction>, Self::Error> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {} FROM transactions ORDER BY date",
            TRANSACTION_COLUMNS
        ))?;

        let transactions = stmt
            .query_map([], Self::row_to_transaction)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(transactions)
    }

    fn transactions_for_document(&self, id: DocumentId) -> Result<Vec<Transaction>, Self::Error> {
        let id_bytes = Self::document_id_to_bytes(id);

        let mut stmt = self.conn.prepare(&format!(
            "SELECT {} FROM transactions WHERE document_id = ?1 ORDER BY date",
            TRANSACTION_COLUMNS
        ))?;

        let transactions = stmt
            .query_map(params![&id_bytes], Self::row_to_transaction)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(transactions)
    }

    fn mark_recurring(&mut self, ids: &[TransactionId]) -> Result<(), Self::Error> {
        let tx = self.conn.transaction()?;

        {
            let mut stmt =
                tx.prepare("UPDATE transactions SET is_recurring = 1 WHERE id = ?1")?;

            for id in ids {
                stmt.execute(params![&Self::transaction_id_to_bytes(*id)])?;
            }
        }

        tx.commit()?;

        Ok(())
    }

    fn delete_document(&mut self, id: DocumentId) -> Result<(), Self::Error> {
        let id_bytes = Self::document_id_to_bytes(id);

        let deleted = self
            .conn
            .execute("DELETE FROM documents WHERE id = ?1", params![&id_bytes])?;

        if deleted == 0 {
            return Err(StoreError::NotFound(id.to_string()));
        }

        Ok(())
    }
}
