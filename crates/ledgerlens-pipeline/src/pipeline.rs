//! Document processing orchestrator

use crate::error::PipelineError;
use crate::types::{PipelineReport, ProcessRequest};
use ledgerlens_domain::traits::{LlmProvider, TransactionStore};
use ledgerlens_domain::{DocumentStatus, Transaction, TransactionId};
use ledgerlens_extract::DocumentExtractor;
use ledgerlens_parser::TransactionParser;
use ledgerlens_rules::{detect_recurring, validate_category};
use std::sync::{Arc, Mutex};
use tracing::{error, info, warn};

/// Minimum stripped character count before parsing is attempted
const MIN_TEXT_CHARS: usize = 100;

/// End-to-end processing of a stored document: extract, parse, validate,
/// detect recurrence, persist
///
/// Each phase commits independently; there is no cross-phase atomicity. A
/// failure after the transaction rows are inserted leaves them in place with
/// the document marked Failed.
pub struct DocumentPipeline<L, S> {
    parser: TransactionParser<L>,
    extractor: Arc<DocumentExtractor>,
    store: Arc<Mutex<S>>,
    min_text_chars: usize,
}

impl<L, S> DocumentPipeline<L, S>
where
    L: LlmProvider + Send + Sync + 'static,
    L::Error: std::fmt::Display,
    S: TransactionStore,
    S::Error: std::fmt::Display,
{
    /// Create a pipeline over the given parser and store handle
    pub fn new(parser: TransactionParser<L>, store: Arc<Mutex<S>>) -> Self {
        Self {
            parser,
            extractor: Arc::new(DocumentExtractor::new()),
            store,
            min_text_chars: MIN_TEXT_CHARS,
        }
    }

    /// Replace the default extractor (e.g. to set the OCR language)
    pub fn with_extractor(mut self, extractor: DocumentExtractor) -> Self {
        self.extractor = Arc::new(extractor);
        self
    }

    /// Process one document end to end
    ///
    /// A missing document record aborts with no status change. Any other
    /// failure marks the document Failed on a best-effort basis; a secondary
    /// failure while marking is swallowed with a warning.
    pub async fn process(&self, request: ProcessRequest) -> Result<PipelineReport, PipelineError> {
        let document_id = request.document_id;

        match self.run(request).await {
            Ok(report) => {
                info!(
                    "document {} done: {} transactions",
                    document_id, report.transactions_found
                );
                Ok(report)
            }
            Err(PipelineError::DocumentNotFound(id)) => {
                warn!("document {} not found, nothing to process", id);
                Err(PipelineError::DocumentNotFound(id))
            }
            Err(e) => {
                error!("processing document {} failed: {}", document_id, e);

                let marked =
                    self.with_store(|s| s.set_document_status(document_id, DocumentStatus::Failed));
                if let Err(mark_err) = marked {
                    warn!(
                        "could not mark document {} as failed: {}",
                        document_id, mark_err
                    );
                }

                Err(e)
            }
        }
    }

    async fn run(&self, request: ProcessRequest) -> Result<PipelineReport, PipelineError> {
        let document = self
            .with_store(|s| s.get_document(request.document_id))?
            .ok_or(PipelineError::DocumentNotFound(request.document_id))?;

        self.with_store(|s| s.set_document_status(document.id, DocumentStatus::Processing))?;

        let extractor = Arc::clone(&self.extractor);
        let path = request.file_path.clone();
        let outcome = tokio::task::spawn_blocking(move || extractor.extract(&path))
            .await
            .map_err(|e| PipelineError::Join(e.to_string()))?;

        info!(
            "document {} extracted: {} chars via {} ({} pages)",
            document.id, outcome.char_count, outcome.method, outcome.page_count
        );

        let stripped_len = outcome.text.trim().chars().count();
        if stripped_len < self.min_text_chars {
            return Err(PipelineError::TextTooSparse(stripped_len));
        }

        let candidates = self
            .parser
            .parse_in_chunks(&outcome.text, &request.document_type)
            .await;

        let rows: Vec<Transaction> = candidates
            .into_iter()
            .map(|candidate| {
                let category = validate_category(
                    &candidate.merchant,
                    &candidate.description,
                    candidate.category,
                );
                Transaction {
                    id: TransactionId::new(),
                    document_id: document.id,
                    date: candidate.date,
                    description: candidate.description.clone(),
                    merchant: candidate.merchant,
                    amount: candidate.amount,
                    kind: candidate.kind,
                    category,
                    is_recurring: false,
                    raw_text: candidate.description,
                }
            })
            .collect();

        self.with_store(|s| s.insert_transactions(&rows))?;

        // Recurrence is a cross-document pattern, so the detector runs over
        // every stored transaction, not just this run's rows
        let mut all = self.with_store(|s| s.all_transactions())?;
        detect_recurring(&mut all);

        let flagged: Vec<TransactionId> = all
            .iter()
            .filter(|t| t.is_recurring)
            .map(|t| t.id)
            .collect();
        self.with_store(|s| s.mark_recurring(&flagged))?;

        self.with_store(|s| {
            s.finalize_document(document.id, DocumentStatus::Done, rows.len() as i64)
        })?;

        Ok(PipelineReport {
            document_id: document.id,
            transactions_found: rows.len(),
            status: DocumentStatus::Done,
        })
    }

    fn with_store<R>(
        &self,
        f: impl FnOnce(&mut S) -> Result<R, S::Error>,
    ) -> Result<R, PipelineError> {
        let mut store = self
            .store
            .lock()
            .map_err(|_| PipelineError::Store("store mutex poisoned".to_string()))?;

        f(&mut store).map_err(|e| PipelineError::Store(e.to_string()))
    }
}
