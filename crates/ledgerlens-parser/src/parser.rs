//! Core parser: oracle dispatch, chunk orchestration, dedup

use crate::chunking::LineChunker;
use crate::config::ParserConfig;
use crate::prompt::PromptBuilder;
use crate::response::parse_response;
use crate::types::TransactionCandidate;
use ledgerlens_domain::traits::LlmProvider;
use std::collections::HashSet;
use std::sync::Arc;
use tokio::task::JoinSet;
use tokio::time::timeout;
use tracing::{debug, info, warn};

/// Sends statement text to the LLM oracle and sanitizes the result
///
/// Oracle faults (timeouts, transport errors, malformed output) degrade
/// to "no transactions found"; this type never surfaces an error to the
/// pipeline.
pub struct TransactionParser<L> {
    llm: Arc<L>,
    config: ParserConfig,
}

impl<L> Clone for TransactionParser<L> {
    fn clone(&self) -> Self {
        Self {
            llm: Arc::clone(&self.llm),
            config: self.config.clone(),
        }
    }
}

impl<L> TransactionParser<L>
where
    L: LlmProvider + Send + Sync + 'static,
    L::Error: std::fmt::Display,
{
    /// Create a new parser over the given oracle
    pub fn new(llm: L, config: ParserConfig) -> Self {
        Self {
            llm: Arc::new(llm),
            config,
        }
    }

    /// Parse one block of text into transaction candidates
    ///
    /// Builds the extraction prompt, calls the oracle under the configured
    /// timeout, and sanitizes the response. Returns an empty list on any
    /// oracle fault.
    pub async fn parse(&self, raw_text: &str, document_type: &str) -> Vec<TransactionCandidate> {
        let prompt = PromptBuilder::new(raw_text, document_type).build();

        debug!("prompt length: {} chars", prompt.len());

        let response = match timeout(self.config.llm_timeout(), self.call_llm(prompt)).await {
            Ok(Ok(response)) => response,
            Ok(Err(e)) => {
                warn!("oracle call failed: {}", e);
                return Vec::new();
            }
            Err(_) => {
                warn!("oracle call timed out");
                return Vec::new();
            }
        };

        debug!("oracle response length: {} chars", response.len());

        parse_response(&response, &self.config.fallback_date)
    }

    /// Parse text of any size, chunking and dispatching concurrently when it
    /// exceeds the chunk threshold
    ///
    /// Each chunk is parsed by its own worker; a single chunk's failure is
    /// isolated. Results are collected as they complete and deduplicated by
    /// (date, amount, merchant), first occurrence winning.
    pub async fn parse_in_chunks(
        &self,
        raw_text: &str,
        document_type: &str,
    ) -> Vec<TransactionCandidate> {
        // Thresholds count characters, not bytes; multibyte currency signs
        // and merchant names must not trigger chunking early
        if raw_text.chars().count() <= self.config.chunk_threshold {
            return self.parse(raw_text, document_type).await;
        }

        let chunks = LineChunker::new(self.config.chunk_size).chunk(raw_text);

        info!("processing {} chunks in parallel", chunks.len());

        let mut tasks = JoinSet::new();
        for (idx, chunk) in chunks.into_iter().enumerate() {
            let parser = self.clone();
            let document_type = document_type.to_string();
            tasks.spawn(async move {
                let candidates = parser.parse(&chunk, &document_type).await;
                (idx, candidates)
            });
        }

        let mut all_candidates = Vec::new();
        while let Some(result) = tasks.join_next().await {
            match result {
                Ok((idx, candidates)) => {
                    debug!("chunk {} produced {} candidates", idx, candidates.len());
                    all_candidates.extend(candidates);
                }
                Err(e) => {
                    warn!("chunk task failed: {}", e);
                }
            }
        }

        let unique = dedup_candidates(all_candidates);

        info!("total unique transactions: {}", unique.len());

        unique
    }

    /// Call the oracle in a blocking context since LlmProvider is not async
    async fn call_llm(&self, prompt: String) -> Result<String, String> {
        let llm = Arc::clone(&self.llm);

        tokio::task::spawn_blocking(move || llm.generate(&prompt).map_err(|e| e.to_string()))
            .await
            .map_err(|e| format!("task join error: {}", e))?
    }
}

/// Keep the first occurrence per (date, amount, merchant) key
///
/// Overlapping chunk boundaries or redundant statement sections can make the
/// oracle report the same transaction more than once.
pub(crate) fn dedup_candidates(candidates: Vec<TransactionCandidate>) -> Vec<TransactionCandidate> {
    let mut seen = HashSet::new();
    let mut unique = Vec::with_capacity(candidates.len());

    for candidate in candidates {
        let key = format!(
            "{}-{}-{}",
            candidate.date, candidate.amount, candidate.merchant
        );
        if seen.insert(key) {
            unique.push(candidate);
        }
    }

    unique
}
