//! Background queue worker for fire-and-forget document processing

use crate::pipeline::DocumentPipeline;
use crate::types::ProcessRequest;
use ledgerlens_domain::traits::{LlmProvider, TransactionStore};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{info, warn};

/// Queue handle for submitting documents to a background pipeline task
///
/// The worker task owns the pipeline (and with it the store handle) for its
/// lifetime and processes requests strictly in submission order. A request
/// that fails is logged and does not stop the worker. Dropping every queue
/// handle lets the worker drain its backlog and stop.
#[derive(Clone)]
pub struct PipelineQueue {
    sender: mpsc::UnboundedSender<ProcessRequest>,
}

impl PipelineQueue {
    /// Spawn the worker task and return the queue handle plus the task's
    /// join handle
    pub fn start<L, S>(pipeline: DocumentPipeline<L, S>) -> (Self, JoinHandle<()>)
    where
        L: LlmProvider + Send + Sync + 'static,
        L::Error: std::fmt::Display,
        S: TransactionStore + Send + 'static,
        S::Error: std::fmt::Display,
    {
        let (sender, mut receiver) = mpsc::unbounded_channel::<ProcessRequest>();

        let handle = tokio::spawn(async move {
            info!("pipeline worker started");

            while let Some(request) = receiver.recv().await {
                let document_id = request.document_id;
                if let Err(e) = pipeline.process(request).await {
                    warn!("queued document {} failed: {}", document_id, e);
                }
            }

            info!("pipeline worker stopped");
        });

        (Self { sender }, handle)
    }

    /// Submit a document for processing; fire-and-forget
    ///
    /// Returns false if the worker has already stopped.
    pub fn submit(&self, request: ProcessRequest) -> bool {
        if self.sender.send(request).is_err() {
            warn!("pipeline worker is gone, request dropped");
            return false;
        }
        true
    }
}
