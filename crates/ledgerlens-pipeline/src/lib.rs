//! LedgerLens Pipeline
//!
//! Orchestrates the full document lifecycle: extract text from the stored
//! file, parse it into transactions via the oracle, apply the deterministic
//! category and recurrence rules, and persist the result with status
//! tracking.
//!
//! # Overview
//!
//! - [`DocumentPipeline`]: one document end to end, with best-effort Failed
//!   marking on error
//! - [`PipelineQueue`]: a background worker that processes submitted
//!   documents sequentially, fire-and-forget
//!
//! # Usage
//!
//! ```no_run
//! use ledgerlens_llm::{GeminiConfig, GeminiProvider};
//! use ledgerlens_parser::{ParserConfig, TransactionParser};
//! use ledgerlens_pipeline::{DocumentPipeline, PipelineQueue, ProcessRequest};
//! use ledgerlens_store::SqliteStore;
//! use std::sync::{Arc, Mutex};
//!
//! # async fn demo(document: ledgerlens_domain::Document) -> Result<(), Box<dyn std::error::Error>> {
//! let store = Arc::new(Mutex::new(SqliteStore::new("ledgerlens.db")?));
//! let llm = GeminiProvider::new(GeminiConfig::new("api-key"));
//! let parser = TransactionParser::new(llm, ParserConfig::default());
//!
//! let pipeline = DocumentPipeline::new(parser, store);
//! let (queue, _worker) = PipelineQueue::start(pipeline);
//!
//! queue.submit(ProcessRequest::for_document(&document));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod error;
mod pipeline;
mod types;
mod worker;

pub use error::PipelineError;
pub use pipeline::DocumentPipeline;
pub use types::{PipelineReport, ProcessRequest};
pub use worker::PipelineQueue;
