//! LedgerLens Transaction Parser
//!
//! Converts extracted statement text into transaction candidates using an
//! LLM oracle.
//!
//! # Architecture
//!
//! ```text
//! Text → Chunker → Prompt → LLM → sanitize JSON → dedup → Candidates
//! ```
//!
//! # Key Properties
//!
//! - **Untrusted oracle**: non-JSON responses, prose, or missing fields
//!   degrade to empty/defaulted candidates rather than errors
//! - **Chunked dispatch**: long statements are split on line boundaries and
//!   the chunks parsed concurrently; one chunk's failure never aborts the
//!   others
//! - **Content-based dedup**: the first candidate per
//!   (date, amount, merchant) key wins across all chunks
//!
//! # Example Usage
//!
//! ```no_run
//! use ledgerlens_parser::{ParserConfig, TransactionParser};
//! use ledgerlens_llm::MockProvider;
//!
//! # async fn example() {
//! let llm = MockProvider::empty();
//! let parser = TransactionParser::new(llm, ParserConfig::default());
//!
//! let candidates = parser
//!     .parse_in_chunks("01-02-2026 SWIGGY 450 DR", "bank_statement")
//!     .await;
//! assert!(candidates.is_empty());
//! # }
//! ```

#![warn(missing_docs)]

mod chunking;
mod config;
mod parser;
mod prompt;
mod response;
mod types;

pub use chunking::LineChunker;
pub use config::ParserConfig;
pub use parser::TransactionParser;
pub use prompt::PromptBuilder;
pub use types::TransactionCandidate;
