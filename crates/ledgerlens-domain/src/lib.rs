//! LedgerLens Domain Layer
//!
//! This crate contains the core data model for the statement-processing
//! pipeline. It has no infrastructure dependencies and defines the value
//! objects and trait interfaces the other layers build on.
//!
//! ## Key Concepts
//!
//! - **Document**: a submitted statement file moving through the status
//!   lifecycle `uploaded → processing → done | failed`
//! - **Transaction**: one parsed financial movement owned by a document
//! - **Category**: the single shared spending-category enumeration consumed
//!   by prompt construction, rule validation, and storage
//!
//! ## Architecture
//!
//! - Pure data and trait definitions only
//! - Infrastructure implementations (store, LLM providers) live in other
//!   crates behind the traits in [`traits`]

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod category;
pub mod document;
pub mod traits;
pub mod transaction;

// Re-exports for convenience
pub use category::Category;
pub use document::{Document, DocumentId, DocumentStatus};
pub use transaction::{Transaction, TransactionId, TransactionType};
