//! Integration tests for ledgerlens-store
//!
//! These tests verify the full lifecycle for documents and their transactions.

use ledgerlens_domain::traits::TransactionStore;
use ledgerlens_domain::{
    Category, Document, DocumentId, DocumentStatus, Transaction, TransactionId, TransactionType,
};
use ledgerlens_store::{SqliteStore, StoreError};

fn sample_document() -> Document {
    Document::new(
        "20260105103000_statement.pdf",
        "statement.pdf",
        "/uploads/20260105103000_statement.pdf",
        "bank_statement",
    )
}

fn sample_transaction(document_id: DocumentId, merchant: &str, amount: f64) -> Transaction {
    Transaction {
        id: TransactionId::new(),
        document_id,
        date: "2026-01-05".to_string(),
        description: format!("UPI-{}", merchant.to_uppercase()),
        merchant: merchant.to_string(),
        amount,
        kind: TransactionType::Debit,
        category: Category::Others,
        is_recurring: false,
        raw_text: format!("UPI-{}", merchant.to_uppercase()),
    }
}

#[test]
fn test_store_initialization() {
    let store = SqliteStore::new(":memory:");
    assert!(store.is_ok(), "Store should initialize successfully");
}

#[test]
fn test_insert_and_get_document() {
    let mut store = SqliteStore::new(":memory:").unwrap();

    let document = sample_document();
    store.insert_document(&document).unwrap();

    let retrieved = store.get_document(document.id).unwrap();
    assert_eq!(retrieved, Some(document));
}

#[test]
fn test_get_missing_document_is_none() {
    let store = SqliteStore::new(":memory:").unwrap();

    let retrieved = store.get_document(DocumentId::new()).unwrap();
    assert!(retrieved.is_none());
}

#[test]
fn test_status_transitions() {
    let mut store = SqliteStore::new(":memory:").unwrap();

    let document = sample_document();
    store.insert_document(&document).unwrap();

    store
        .set_document_status(document.id, DocumentStatus::Processing)
        .unwrap();
    assert_eq!(
        store.get_document(document.id).unwrap().unwrap().status,
        DocumentStatus::Processing
    );

    store
        .finalize_document(document.id, DocumentStatus::Done, 7)
        .unwrap();

    let finished = store.get_document(document.id).unwrap().unwrap();
    assert_eq!(finished.status, DocumentStatus::Done);
    assert_eq!(finished.transaction_count, 7);
}

#[test]
fn test_status_update_of_missing_document_fails() {
    let mut store = SqliteStore::new(":memory:").unwrap();

    let result = store.set_document_status(DocumentId::new(), DocumentStatus::Failed);
    assert!(matches!(result, Err(StoreError::NotFound(_))));
}

#[test]
fn test_insert_and_read_transactions() {
    let mut store = SqliteStore::new(":memory:").unwrap();

    let document = sample_document();
    store.insert_document(&document).unwrap();

    let transactions = vec![
        sample_transaction(document.id, "Swiggy", 450.0),
        sample_transaction(document.id, "Netflix", 649.0),
    ];
    store.insert_transactions(&transactions).unwrap();

    let all = store.all_transactions().unwrap();
    assert_eq!(all.len(), 2);

    let for_document = store.transactions_for_document(document.id).unwrap();
    assert_eq!(for_document.len(), 2);

    let netflix = all.iter().find(|t| t.merchant == "Netflix").unwrap();
    assert_eq!(netflix.amount, 649.0);
    assert_eq!(netflix.kind, TransactionType::Debit);
    assert_eq!(netflix.document_id, document.id);
    assert!(!netflix.is_recurring);
}

#[test]
fn test_transactions_for_document_filters_by_owner() {
    let mut store = SqliteStore::new(":memory:").unwrap();

    let first = sample_document();
    let second = sample_document();
    store.insert_document(&first).unwrap();
    store.insert_document(&second).unwrap();

    store
        .insert_transactions(&[
            sample_transaction(first.id, "Swiggy", 450.0),
            sample_transaction(second.id, "Netflix", 649.0),
        ])
        .unwrap();

    let for_first = store.transactions_for_document(first.id).unwrap();
    assert_eq!(for_first.len(), 1);
    assert_eq!(for_first[0].merchant, "Swiggy");
}

#[test]
fn test_mark_recurring_updates_only_named_ids() {
    let mut store = SqliteStore::new(":memory:").unwrap();

    let document = sample_document();
    store.insert_document(&document).unwrap();

    let netflix = sample_transaction(document.id, "Netflix", 649.0);
    let swiggy = sample_transaction(document.id, "Swiggy", 450.0);
    store
        .insert_transactions(&[netflix.clone(), swiggy.clone()])
        .unwrap();

    store.mark_recurring(&[netflix.id]).unwrap();

    let all = store.all_transactions().unwrap();
    let netflix_row = all.iter().find(|t| t.id == netflix.id).unwrap();
    let swiggy_row = all.iter().find(|t| t.id == swiggy.id).unwrap();
    assert!(netflix_row.is_recurring);
    assert!(!swiggy_row.is_recurring);
}

#[test]
fn test_delete_document_cascades_to_transactions() {
    let mut store = SqliteStore::new(":memory:").unwrap();

    let document = sample_document();
    let other = sample_document();
    store.insert_document(&document).unwrap();
    store.insert_document(&other).unwrap();

    store
        .insert_transactions(&[
            sample_transaction(document.id, "Swiggy", 450.0),
            sample_transaction(document.id, "Netflix", 649.0),
            sample_transaction(other.id, "Uber", 230.0),
        ])
        .unwrap();

    store.delete_document(document.id).unwrap();

    assert!(store.get_document(document.id).unwrap().is_none());

    let remaining = store.all_transactions().unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].merchant, "Uber");
}

#[test]
fn test_delete_missing_document_fails() {
    let mut store = SqliteStore::new(":memory:").unwrap();

    let result = store.delete_document(DocumentId::new());
    assert!(matches!(result, Err(StoreError::NotFound(_))));
}

#[test]
fn test_persistence_across_connections() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("ledgerlens.db");

    let document = sample_document();
    {
        let mut store = SqliteStore::new(&db_path).unwrap();
        store.insert_document(&document).unwrap();
        store
            .insert_transactions(&[sample_transaction(document.id, "Netflix", 649.0)])
            .unwrap();
    }

    let store = SqliteStore::new(&db_path).unwrap();
    assert!(store.get_document(document.id).unwrap().is_some());
    assert_eq!(store.all_transactions().unwrap().len(), 1);
}
